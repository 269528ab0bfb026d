//! Plain view models derived from the coordinator. Each one leaves out draft
//! text, so typing into an inline input never rebuilds the lists around it.

use crate::components::group_card::GroupSummary;
use crate::segments::{CategoryId, Coordinator, GroupId, SEARCH_RESULT_LIMIT, SearchHit};

/// Columns that fit side by side before the scroll indicator appears.
pub const VISIBLE_COLUMNS: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryRow {
	pub id: CategoryId,
	pub name: String,
	pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GroupRow {
	pub id: GroupId,
	pub name: String,
	pub has_children: bool,
	pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnView {
	pub index: usize,
	pub rows: Vec<GroupRow>,
	/// Card for the group whose children this column lists; last column only.
	pub chrome: Option<GroupSummary>,
	pub adding: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HitRow {
	pub hit: SearchHit,
	pub name: String,
	pub category_name: String,
}

pub fn category_rows(c: &Coordinator) -> Vec<CategoryRow> {
	let selected = c.selected_category();
	c.store()
		.categories()
		.iter()
		.map(|cat| CategoryRow {
			id: cat.id,
			name: cat.name.clone(),
			selected: selected == Some(cat.id),
		})
		.collect()
}

pub fn column_views(c: &Coordinator) -> Vec<ColumnView> {
	let store = c.store();
	let columns = c.columns();
	let last = columns.len().saturating_sub(1);
	let adding = c.sibling_draft().map(|d| d.column);

	columns
		.into_iter()
		.enumerate()
		.map(|(index, column)| ColumnView {
			index,
			rows: column
				.items
				.iter()
				.filter_map(|id| store.group(*id))
				.map(|g| GroupRow {
					id: g.id,
					name: g.name.clone(),
					has_children: g.has_children(),
					selected: c.navigator().is_selected_at(g.id, index),
				})
				.collect(),
			chrome: (index == last)
				.then(|| store.find_group_by_path(&column.parent_path))
				.flatten()
				.map(GroupSummary::from),
			adding: adding == Some(index),
		})
		.collect()
}

pub fn hit_rows(c: &Coordinator) -> Vec<HitRow> {
	let store = c.store();
	c.search_results()
		.into_iter()
		.take(SEARCH_RESULT_LIMIT)
		.filter_map(|hit| {
			let name = store.group(hit.group)?.name.clone();
			let category_name = store.category(hit.category)?.name.clone();
			Some(HitRow {
				hit,
				name,
				category_name,
			})
		})
		.collect()
}

/// Width and left offset of the horizontal scroll thumb, both in percent of
/// the track. `scrolled` is the scroll position as a fraction of its range.
pub fn scroll_thumb(columns: usize, scrolled: f64) -> Option<(f64, f64)> {
	if columns <= VISIBLE_COLUMNS {
		return None;
	}
	let width = (VISIBLE_COLUMNS as f64 / columns as f64 * 100.0).min(100.0);
	Some((width, scrolled.clamp(0.0, 1.0) * (100.0 - width)))
}
