//! Segment tree store.
//!
//! Groups live in an arena keyed by id; categories and groups refer to their
//! children through id lists, so a mutation touches only the node it targets.

use std::collections::HashMap;

use log::warn;

use super::ids::IdGenerator;
use super::types::{
	CATEGORY_PLACEHOLDER, Category, CategoryId, GROUP_PLACEHOLDER, Group, GroupId, SelectionPath,
	label_or,
};

/// Owns every category and group of a session.
#[derive(Clone, Debug, Default)]
pub struct SegmentStore {
	ids: IdGenerator,
	categories: Vec<Category>,
	groups: HashMap<GroupId, Group>,
}

impl SegmentStore {
	/// An empty store.
	pub fn new() -> Self {
		Self {
			ids: IdGenerator::new(),
			categories: Vec::new(),
			groups: HashMap::new(),
		}
	}

	/// Categories in display order.
	pub fn categories(&self) -> &[Category] {
		&self.categories
	}

	/// Look up a category.
	pub fn category(&self, id: CategoryId) -> Option<&Category> {
		self.categories.iter().find(|c| c.id == id)
	}

	fn category_mut(&mut self, id: CategoryId) -> Option<&mut Category> {
		self.categories.iter_mut().find(|c| c.id == id)
	}

	/// Look up a group anywhere in the forest.
	pub fn group(&self, id: GroupId) -> Option<&Group> {
		self.groups.get(&id)
	}

	/// Total number of groups across all categories.
	pub fn group_count(&self) -> usize {
		self.groups.len()
	}

	/// Append a category with no groups. Duplicate names are allowed.
	pub fn add_category(&mut self, name: &str) -> CategoryId {
		let id = self.ids.category();
		self.categories.push(Category {
			id,
			name: label_or(name, CATEGORY_PLACEHOLDER),
			groups: Vec::new(),
		});
		id
	}

	/// Append a group to the list designated by `parent`: the category roots
	/// for a bare category path, otherwise the children of its last group.
	///
	/// Returns `None` without touching the store when the trimmed name is
	/// empty or the path does not resolve.
	pub fn add_group(&mut self, parent: &SelectionPath, name: &str) -> Option<GroupId> {
		let name = name.trim();
		if name.is_empty() {
			return None;
		}
		if self.resolve_list(parent).is_none() {
			warn!("add_group: parent path {parent} does not resolve");
			return None;
		}

		let id = self.ids.group();
		let list = match parent.last_group() {
			None => &mut self.category_mut(parent.category)?.groups,
			Some(last) => &mut self.groups.get_mut(&last)?.children,
		};
		list.push(id);
		self.groups.insert(id, Group::new(id, name.to_string()));
		Some(id)
	}

	/// Rename a group; blank names become the group placeholder.
	pub fn rename_group(&mut self, id: GroupId, name: &str) -> bool {
		match self.groups.get_mut(&id) {
			Some(group) => {
				group.name = label_or(name, GROUP_PLACEHOLDER);
				true
			}
			None => {
				warn!("rename_group: unknown group {id}");
				false
			}
		}
	}

	/// Rename a category; blank names become the category placeholder.
	pub fn rename_category(&mut self, id: CategoryId, name: &str) -> bool {
		match self.category_mut(id) {
			Some(category) => {
				category.name = label_or(name, CATEGORY_PLACEHOLDER);
				true
			}
			None => {
				warn!("rename_category: unknown category {id}");
				false
			}
		}
	}

	/// Set or clear a group's owner. Blank owners are stored as `None`.
	pub fn set_owner(&mut self, id: GroupId, owner: Option<&str>) -> bool {
		let Some(group) = self.groups.get_mut(&id) else {
			warn!("set_owner: unknown group {id}");
			return false;
		};
		group.owner = owner
			.map(str::trim)
			.filter(|o| !o.is_empty())
			.map(str::to_string);
		true
	}

	/// Overwrite a group's member count.
	pub fn set_member_count(&mut self, id: GroupId, count: u32) -> bool {
		let Some(group) = self.groups.get_mut(&id) else {
			warn!("set_member_count: unknown group {id}");
			return false;
		};
		group.member_count = count;
		true
	}

	/// The id list `path` designates: the category roots for a bare category,
	/// otherwise the children of the last group. Every group of the path must
	/// be a child of the one before it.
	pub fn resolve_list(&self, path: &SelectionPath) -> Option<&[GroupId]> {
		let mut list = self.category(path.category)?.groups.as_slice();
		for id in &path.groups {
			if !list.contains(id) {
				return None;
			}
			list = self.groups.get(id)?.children.as_slice();
		}
		Some(list)
	}

	/// The group at the end of `path`, or `None` for a bare category or any
	/// dangling id along the way.
	pub fn find_group_by_path(&self, path: &SelectionPath) -> Option<&Group> {
		let last = path.last_group()?;
		self.resolve_list(&path.prefix(path.len() - 1))?
			.contains(&last)
			.then(|| self.groups.get(&last))
			.flatten()
	}

	/// Sum of the member counts of a category's root groups. Nested groups
	/// are not included. Widened to `u64` so any set of `u32` counts fits.
	pub fn category_member_count(&self, id: CategoryId) -> u64 {
		self.category(id)
			.map(|c| {
				c.groups
					.iter()
					.filter_map(|g| self.groups.get(g))
					.map(|g| u64::from(g.member_count))
					.sum()
			})
			.unwrap_or(0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn department() -> (SegmentStore, CategoryId, GroupId) {
		let mut store = SegmentStore::new();
		let cat = store.add_category("Department");
		let eng = store
			.add_group(&SelectionPath::root(cat), "Engineering")
			.unwrap();
		(store, cat, eng)
	}

	#[test]
	fn add_group_appends_in_order() {
		let (mut store, cat, _) = department();
		let root = SelectionPath::root(cat);
		let sales = store.add_group(&root, "  Sales ").unwrap();
		assert_eq!(store.group(sales).unwrap().name, "Sales");
		assert_eq!(store.category(cat).unwrap().groups.len(), 2);
		assert_eq!(store.category(cat).unwrap().groups[1], sales);
	}

	#[test]
	fn add_group_defaults_fields() {
		let (store, _, eng) = department();
		let group = store.group(eng).unwrap();
		assert_eq!(group.owner, None);
		assert_eq!(group.member_count, 0);
		assert!(group.children.is_empty());
	}

	#[test]
	fn add_group_rejects_blank_names() {
		let (mut store, cat, _) = department();
		assert_eq!(store.add_group(&SelectionPath::root(cat), "   "), None);
		assert_eq!(store.group_count(), 1);
	}

	#[test]
	fn add_group_ignores_unknown_parents() {
		let (mut store, cat, eng) = department();
		let bogus_cat = SelectionPath::root(CategoryId(999));
		assert_eq!(store.add_group(&bogus_cat, "Platform"), None);

		let dangling = SelectionPath::root(cat).child(eng).child(GroupId(999));
		assert_eq!(store.add_group(&dangling, "Platform"), None);
		assert_eq!(store.group_count(), 1);
	}

	#[test]
	fn add_group_nests_under_last_path_element() {
		let (mut store, cat, eng) = department();
		let eng_path = SelectionPath::root(cat).child(eng);
		let platform = store.add_group(&eng_path, "Platform").unwrap();
		let ios = store.add_group(&eng_path.child(platform), "iOS").unwrap();

		assert_eq!(store.group(eng).unwrap().children, vec![platform]);
		assert_eq!(store.group(platform).unwrap().children, vec![ios]);
		assert_eq!(store.category(cat).unwrap().groups, vec![eng]);
	}

	#[test]
	fn rename_falls_back_to_placeholder() {
		let (mut store, cat, eng) = department();
		assert!(store.rename_group(eng, ""));
		assert_eq!(store.group(eng).unwrap().name, GROUP_PLACEHOLDER);
		assert!(store.rename_group(eng, "   "));
		assert_eq!(store.group(eng).unwrap().name, GROUP_PLACEHOLDER);
		assert!(store.rename_group(eng, " R&D "));
		assert_eq!(store.group(eng).unwrap().name, "R&D");

		assert!(store.rename_category(cat, "\t"));
		assert_eq!(store.category(cat).unwrap().name, CATEGORY_PLACEHOLDER);
	}

	#[test]
	fn edits_on_unknown_ids_are_noops() {
		let (mut store, _, _) = department();
		assert!(!store.rename_group(GroupId(999), "x"));
		assert!(!store.rename_category(CategoryId(999), "x"));
		assert!(!store.set_owner(GroupId(999), Some("x")));
		assert!(!store.set_member_count(GroupId(999), 3));
	}

	#[test]
	fn owner_and_member_count_are_independent() {
		let (mut store, _, eng) = department();
		assert!(store.set_owner(eng, Some(" Alex Turner ")));
		assert!(store.set_member_count(eng, 85));
		let group = store.group(eng).unwrap();
		assert_eq!(group.owner.as_deref(), Some("Alex Turner"));
		assert_eq!(group.member_count, 85);

		store.set_owner(eng, Some("  "));
		assert_eq!(store.group(eng).unwrap().owner, None);
	}

	#[test]
	fn find_group_by_path_degrades_to_none() {
		let (mut store, cat, eng) = department();
		let platform = store
			.add_group(&SelectionPath::root(cat).child(eng), "Platform")
			.unwrap();

		let root = SelectionPath::root(cat);
		assert!(store.find_group_by_path(&root).is_none());
		assert_eq!(
			store.find_group_by_path(&root.child(eng).child(platform)).unwrap().name,
			"Platform"
		);
		// platform is not a root of the category
		assert!(store.find_group_by_path(&root.child(platform)).is_none());
		assert!(store.find_group_by_path(&root.child(GroupId(999))).is_none());
		assert!(
			store
				.find_group_by_path(&SelectionPath::root(CategoryId(999)).child(eng))
				.is_none()
		);
	}

	#[test]
	fn category_member_count_is_shallow() {
		let (mut store, cat, eng) = department();
		let root = SelectionPath::root(cat);
		let legal = store.add_group(&root, "Legal").unwrap();
		let platform = store.add_group(&root.child(eng), "Platform").unwrap();
		store.set_member_count(eng, 85);
		store.set_member_count(legal, 12);
		store.set_member_count(platform, 22);

		assert_eq!(store.category_member_count(cat), 97);
		assert_eq!(store.category_member_count(CategoryId(999)), 0);
	}

	#[test]
	fn category_member_count_does_not_overflow() {
		let (mut store, cat, eng) = department();
		let legal = store.add_group(&SelectionPath::root(cat), "Legal").unwrap();
		store.set_member_count(eng, u32::MAX);
		store.set_member_count(legal, 1);
		assert_eq!(store.category_member_count(cat), u64::from(u32::MAX) + 1);
	}

	#[test]
	fn duplicate_category_names_are_allowed() {
		let mut store = SegmentStore::new();
		let a = store.add_category("Age");
		let b = store.add_category("Age");
		assert_ne!(a, b);
		assert_eq!(store.categories().len(), 2);
		store.add_category("  ");
		assert_eq!(store.categories()[2].name, CATEGORY_PLACEHOLDER);
	}
}
