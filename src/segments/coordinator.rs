//! Session state gluing user actions to the store, the navigator and the
//! chart.
//!
//! Every method is one complete transition: derived views (columns, search
//! hits, chart layout) read the coordinator afterwards and never observe a
//! half-applied action.

use log::debug;

use super::layout::{ChartLayout, LayoutConfig, compute_layout};
use super::navigator::{Column, PathNavigator};
use super::search::{SearchHit, search};
use super::store::SegmentStore;
use super::types::{CategoryId, Group, GroupId, SelectionPath};

/// Inline "add sibling" input attached to a column.
#[derive(Clone, Debug, PartialEq)]
pub struct SiblingDraft {
	/// List the new group is appended to.
	pub parent_path: SelectionPath,
	/// Column showing the input.
	pub column: usize,
	/// Text typed so far.
	pub name: String,
}

/// Chart rename in progress.
#[derive(Clone, Debug, PartialEq)]
pub struct RenameDraft {
	/// Node being renamed.
	pub node: GroupId,
	/// Text typed so far.
	pub name: String,
}

/// Owns the store and every piece of per-session UI state.
#[derive(Clone, Debug, Default)]
pub struct Coordinator {
	store: SegmentStore,
	navigator: PathNavigator,
	search_query: String,
	category_draft: Option<String>,
	sibling_draft: Option<SiblingDraft>,
	selected_node: Option<GroupId>,
	rename: Option<RenameDraft>,
}

impl Coordinator {
	/// A coordinator over `store` with nothing selected.
	pub fn new(store: SegmentStore) -> Self {
		Self {
			store,
			..Self::default()
		}
	}

	/// Read access to the forest.
	pub fn store(&self) -> &SegmentStore {
		&self.store
	}

	/// The current selection.
	pub fn navigator(&self) -> &PathNavigator {
		&self.navigator
	}

	/// The selected category, if any.
	pub fn selected_category(&self) -> Option<CategoryId> {
		self.navigator.category()
	}

	/// Columns for the current selection.
	pub fn columns(&self) -> Vec<Column> {
		self.navigator.columns(&self.store)
	}

	/// The group at the end of the selection path.
	pub fn selected_group(&self) -> Option<&Group> {
		self.navigator.selected_group(&self.store)
	}

	/// Select a category, resetting the path.
	pub fn select_category(&mut self, category: CategoryId) {
		debug!("select category {category}");
		self.leave_category(category);
		self.navigator.select_category(category);
	}

	/// Chart selection and the sibling input belong to one category. Before
	/// switching to `next`, finalize any rename and drop both.
	fn leave_category(&mut self, next: CategoryId) {
		if self.selected_category() == Some(next) {
			return;
		}
		self.commit_rename();
		self.selected_node = None;
		self.sibling_draft = None;
	}

	/// Select `group` in column `column`.
	pub fn select_group_at_column(&mut self, group: GroupId, column: usize) {
		debug!("select {group} at column {column}");
		self.navigator.select_group_at_column(group, column);
	}

	// Search

	/// Current search text.
	pub fn search_query(&self) -> &str {
		&self.search_query
	}

	/// Replace the search text.
	pub fn set_search_query(&mut self, query: impl Into<String>) {
		self.search_query = query.into();
	}

	/// Every hit for the current query, uncapped.
	pub fn search_results(&self) -> Vec<SearchHit> {
		search(&self.store, &self.search_query)
	}

	/// Jump to a hit: category and path change together, and the query clears.
	pub fn choose_search_result(&mut self, hit: &SearchHit) {
		debug!("jump to search hit {}", hit.path);
		self.leave_category(hit.category);
		self.navigator.jump_to(hit.path.clone());
		self.search_query.clear();
	}

	// Inline add category

	/// Draft text of the category being added, if the input is open.
	pub fn category_draft(&self) -> Option<&str> {
		self.category_draft.as_deref()
	}

	/// Open the inline category input.
	pub fn begin_add_category(&mut self) {
		self.category_draft.get_or_insert_with(String::new);
	}

	/// Update the category draft. Ignored while the input is closed.
	pub fn set_category_draft(&mut self, name: impl Into<String>) {
		if let Some(draft) = &mut self.category_draft {
			*draft = name.into();
		}
	}

	/// Create the drafted category and select it. A blank draft leaves the
	/// input open and the store untouched.
	pub fn submit_category_draft(&mut self) -> Option<CategoryId> {
		let name = self.category_draft.as_deref()?.trim();
		if name.is_empty() {
			return None;
		}
		let id = self.store.add_category(name);
		debug!("added category {id}");
		self.category_draft = None;
		self.leave_category(id);
		self.navigator.select_category(id);
		Some(id)
	}

	/// Close the input, discarding the draft.
	pub fn cancel_category_draft(&mut self) {
		self.category_draft = None;
	}

	/// Focus left the input: only an empty draft is discarded.
	pub fn blur_category_draft(&mut self) {
		if self.category_draft.as_deref().is_some_and(|d| d.trim().is_empty()) {
			self.category_draft = None;
		}
	}

	// Inline add sibling

	/// The open sibling input, if any.
	pub fn sibling_draft(&self) -> Option<&SiblingDraft> {
		self.sibling_draft.as_ref()
	}

	/// Open the sibling input under column `column`. Ignored for columns that
	/// are not currently shown.
	pub fn begin_add_sibling(&mut self, column: usize) {
		let Some(target) = self.columns().into_iter().nth(column) else {
			return;
		};
		self.sibling_draft = Some(SiblingDraft {
			parent_path: target.parent_path,
			column,
			name: String::new(),
		});
	}

	/// Update the sibling draft. Ignored while the input is closed.
	pub fn set_sibling_draft(&mut self, name: impl Into<String>) {
		if let Some(draft) = &mut self.sibling_draft {
			draft.name = name.into();
		}
	}

	/// Create the drafted group under the stored parent path and select it.
	pub fn submit_sibling_draft(&mut self) -> Option<GroupId> {
		let draft = self.sibling_draft.as_ref()?;
		let parent = draft.parent_path.clone();
		let id = self.store.add_group(&parent, &draft.name)?;
		debug!("added {id} under {parent}");
		self.sibling_draft = None;
		self.navigator.jump_to(parent.child(id));
		Some(id)
	}

	/// Close the input, discarding the draft.
	pub fn cancel_sibling_draft(&mut self) {
		self.sibling_draft = None;
	}

	/// Focus left the input: only an empty draft is discarded.
	pub fn blur_sibling_draft(&mut self) {
		if self
			.sibling_draft
			.as_ref()
			.is_some_and(|d| d.name.trim().is_empty())
		{
			self.sibling_draft = None;
		}
	}

	// Chart

	/// Layout of the selected category's forest.
	pub fn chart_layout(&self, config: &LayoutConfig) -> ChartLayout {
		self.selected_category()
			.map(|c| compute_layout(&self.store, c, config))
			.unwrap_or_default()
	}

	/// Node highlighted in the chart.
	pub fn selected_node(&self) -> Option<GroupId> {
		self.selected_node
	}

	/// The rename in progress, if any.
	pub fn rename_draft(&self) -> Option<&RenameDraft> {
		self.rename.as_ref()
	}

	/// Select a chart node, finalizing any rename of another node first.
	pub fn select_node(&mut self, node: GroupId) {
		if self.rename.as_ref().is_some_and(|r| r.node != node) {
			self.commit_rename();
		}
		self.selected_node = Some(node);
	}

	/// Click on empty canvas: finalize any rename, then drop the selection.
	pub fn clear_chart_selection(&mut self) {
		self.commit_rename();
		self.selected_node = None;
	}

	/// Start renaming `node` with its current name as the draft.
	pub fn begin_rename(&mut self, node: GroupId) {
		let Some(group) = self.store.group(node) else {
			return;
		};
		let name = group.name.clone();
		self.select_node(node);
		self.rename = Some(RenameDraft { node, name });
	}

	/// Update the rename draft. Ignored when nothing is being renamed.
	pub fn set_rename_draft(&mut self, name: impl Into<String>) {
		if let Some(draft) = &mut self.rename {
			draft.name = name.into();
		}
	}

	/// Apply the pending rename. Blank names become the placeholder label;
	/// the node is never removed.
	pub fn commit_rename(&mut self) {
		if let Some(draft) = self.rename.take() {
			debug!("rename {} to {:?}", draft.node, draft.name);
			self.store.rename_group(draft.node, &draft.name);
		}
	}

	/// Drop the pending rename without touching the store.
	pub fn cancel_rename(&mut self) {
		self.rename = None;
	}
}
