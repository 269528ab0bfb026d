//! Pre-order walk over a category forest.
//!
//! Search and layout both consume this walker so they agree on ordering:
//! depth first, children in array order, categories in display order.

use super::store::SegmentStore;
use super::types::{CategoryId, Group, GroupId, SelectionPath};

/// One group reached by a walk.
#[derive(Clone, Debug)]
pub struct Visit<'a> {
	/// The group itself.
	pub group: &'a Group,
	/// Path from the category down to and including `group`.
	pub path: SelectionPath,
}

impl Visit<'_> {
	/// Zero for category roots.
	pub fn depth(&self) -> usize {
		self.path.groups.len() - 1
	}
}

/// Iterator over one category's groups in pre-order.
pub struct Walk<'a> {
	store: &'a SegmentStore,
	category: CategoryId,
	stack: Vec<(GroupId, Vec<GroupId>)>,
}

impl<'a> Iterator for Walk<'a> {
	type Item = Visit<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let (id, mut ancestry) = self.stack.pop()?;
			// Ids that vanished from the arena are skipped along with their subtree.
			let Some(group) = self.store.group(id) else {
				continue;
			};
			ancestry.push(id);
			for child in group.children.iter().rev() {
				self.stack.push((*child, ancestry.clone()));
			}
			return Some(Visit {
				group,
				path: SelectionPath {
					category: self.category,
					groups: ancestry,
				},
			});
		}
	}
}

/// Walk a single category. Unknown categories yield nothing.
pub fn walk_category(store: &SegmentStore, category: CategoryId) -> Walk<'_> {
	let stack = store
		.category(category)
		.map(|c| c.groups.iter().rev().map(|id| (*id, Vec::new())).collect())
		.unwrap_or_default();
	Walk {
		store,
		category,
		stack,
	}
}

/// Walk every category in display order.
pub fn walk_all(store: &SegmentStore) -> impl Iterator<Item = Visit<'_>> {
	store
		.categories()
		.iter()
		.flat_map(move |c| walk_category(store, c.id))
}
