use super::store::SegmentStore;
use super::traverse::walk_all;
use super::types::{CategoryId, GroupId, SelectionPath};

/// How many hits the search dropdown shows.
pub const SEARCH_RESULT_LIMIT: usize = 10;

/// A group whose name matched a query, with enough context to jump to it.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchHit {
	/// The matching group.
	pub group: GroupId,
	/// Category holding the group.
	pub category: CategoryId,
	/// Path from the category down to and including the group.
	pub path: SelectionPath,
}

/// Case-insensitive substring search over every group name, in pre-order.
/// An empty query matches nothing.
pub fn search(store: &SegmentStore, query: &str) -> Vec<SearchHit> {
	if query.is_empty() {
		return Vec::new();
	}
	let needle = query.to_lowercase();
	walk_all(store)
		.filter(|v| v.group.name.to_lowercase().contains(&needle))
		.map(|v| SearchHit {
			group: v.group.id,
			category: v.path.category,
			path: v.path,
		})
		.collect()
}
