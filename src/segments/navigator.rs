//! Drill-down column navigation.

use super::store::SegmentStore;
use super::types::{CategoryId, Group, GroupId, SelectionPath};

/// One panel of the drill-down view.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
	/// Groups shown in the panel, in display order.
	pub items: Vec<GroupId>,
	/// Path whose designated list is `items`; new siblings are added here.
	pub parent_path: SelectionPath,
}

/// Columns for `path`: the category roots, then the children of every
/// selected group that has children. A leaf ends the sequence, so deeper
/// entries never spawn empty columns.
pub fn compute_columns(store: &SegmentStore, path: &SelectionPath) -> Vec<Column> {
	let Some(category) = store.category(path.category) else {
		return Vec::new();
	};

	let mut columns = vec![Column {
		items: category.groups.clone(),
		parent_path: SelectionPath::root(category.id),
	}];
	let mut current = category.groups.as_slice();
	for (i, id) in path.groups.iter().enumerate() {
		let Some(group) = current.contains(id).then(|| store.group(*id)).flatten() else {
			break;
		};
		if !group.has_children() {
			break;
		}
		columns.push(Column {
			items: group.children.clone(),
			parent_path: path.prefix(i + 2),
		});
		current = group.children.as_slice();
	}
	columns
}

/// Owns the current selection: a category plus a path into its forest.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathNavigator {
	path: Option<SelectionPath>,
}

impl PathNavigator {
	/// No category selected.
	pub fn new() -> Self {
		Self::default()
	}

	/// The selected category, if any.
	pub fn category(&self) -> Option<CategoryId> {
		self.path.as_ref().map(|p| p.category)
	}

	/// The full selection path, if a category is selected.
	pub fn path(&self) -> Option<&SelectionPath> {
		self.path.as_ref()
	}

	/// Reset the selection to `[category]`.
	pub fn select_category(&mut self, category: CategoryId) {
		self.path = Some(SelectionPath::root(category));
	}

	/// Select `group` in column `column`, discarding anything selected deeper.
	/// Does nothing while no category is selected.
	pub fn select_group_at_column(&mut self, group: GroupId, column: usize) {
		if let Some(path) = &mut self.path {
			*path = path.select_at_column(group, column);
		}
	}

	/// Replace category and path together.
	pub fn jump_to(&mut self, path: SelectionPath) {
		self.path = Some(path);
	}

	/// Columns to render; empty when no category is selected.
	pub fn columns(&self, store: &SegmentStore) -> Vec<Column> {
		self.path
			.as_ref()
			.map(|p| compute_columns(store, p))
			.unwrap_or_default()
	}

	/// The group at the end of the path.
	pub fn selected_group<'a>(&self, store: &'a SegmentStore) -> Option<&'a Group> {
		store.find_group_by_path(self.path.as_ref()?)
	}

	/// Whether `group` is the selection in column `column`.
	pub fn is_selected_at(&self, group: GroupId, column: usize) -> bool {
		self.path
			.as_ref()
			.and_then(|p| p.group_at(column + 1))
			.is_some_and(|g| g == group)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Fixture {
		store: SegmentStore,
		root: SelectionPath,
		eng: GroupId,
		legal: GroupId,
		platform: GroupId,
		ios: GroupId,
	}

	fn fixture() -> Fixture {
		let mut store = SegmentStore::new();
		let cat = store.add_category("Department");
		let root = SelectionPath::root(cat);
		let legal = store.add_group(&root, "Legal").unwrap();
		let eng = store.add_group(&root, "Engineering").unwrap();
		let platform = store.add_group(&root.child(eng), "Platform").unwrap();
		store.add_group(&root.child(eng), "Data Science").unwrap();
		let ios = store
			.add_group(&root.child(eng).child(platform), "iOS")
			.unwrap();
		Fixture {
			store,
			root,
			eng,
			legal,
			platform,
			ios,
		}
	}

	#[test]
	fn bare_category_yields_roots_only() {
		let f = fixture();
		let columns = compute_columns(&f.store, &f.root);
		assert_eq!(columns.len(), 1);
		assert_eq!(columns[0].items, vec![f.legal, f.eng]);
		assert_eq!(columns[0].parent_path, f.root);
	}

	#[test]
	fn each_selected_parent_adds_a_column() {
		let f = fixture();
		let path = f.root.child(f.eng).child(f.platform).child(f.ios);
		let columns = compute_columns(&f.store, &path);
		assert_eq!(columns.len(), 3);
		assert_eq!(columns[1].parent_path, f.root.child(f.eng));
		assert_eq!(columns[2].items, vec![f.ios]);
		assert_eq!(columns[2].parent_path, f.root.child(f.eng).child(f.platform));
		assert!(columns.len() <= path.len());
	}

	#[test]
	fn leaf_selection_does_not_spawn_columns() {
		let f = fixture();
		let columns = compute_columns(&f.store, &f.root.child(f.legal));
		assert_eq!(columns.len(), 1);
	}

	#[test]
	fn dangling_ids_stop_column_generation() {
		let f = fixture();
		let path = f.root.child(f.eng).child(GroupId(999)).child(f.ios);
		assert_eq!(compute_columns(&f.store, &path).len(), 2);

		let unknown = SelectionPath::root(CategoryId(999));
		assert!(compute_columns(&f.store, &unknown).is_empty());
	}

	#[test]
	fn category_switch_resets_path() {
		let f = fixture();
		let mut nav = PathNavigator::new();
		assert!(nav.columns(&f.store).is_empty());

		nav.jump_to(f.root.child(f.eng).child(f.platform));
		nav.select_category(f.root.category);
		assert_eq!(nav.path(), Some(&f.root));
	}

	#[test]
	fn shallow_reselection_prunes_deeper_state() {
		let f = fixture();
		let mut nav = PathNavigator::new();
		nav.select_category(f.root.category);
		nav.select_group_at_column(f.eng, 0);
		nav.select_group_at_column(f.platform, 1);
		nav.select_group_at_column(f.ios, 2);
		assert_eq!(nav.columns(&f.store).len(), 3);
		assert_eq!(nav.selected_group(&f.store).unwrap().id, f.ios);

		nav.select_group_at_column(f.legal, 0);
		assert_eq!(nav.path(), Some(&f.root.child(f.legal)));
		assert_eq!(nav.columns(&f.store).len(), 1);
		assert!(nav.is_selected_at(f.legal, 0));
		assert!(!nav.is_selected_at(f.eng, 0));
	}

	#[test]
	fn group_selection_without_category_is_ignored() {
		let f = fixture();
		let mut nav = PathNavigator::new();
		nav.select_group_at_column(f.eng, 0);
		assert_eq!(nav.path(), None);
	}
}
