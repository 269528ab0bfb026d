use std::fmt;

/// Label used when a category is created or renamed with a blank name.
pub const CATEGORY_PLACEHOLDER: &str = "Untitled category";
/// Label used when a group is renamed with a blank name.
pub const GROUP_PLACEHOLDER: &str = "Untitled group";

/// Identifier of a top-level category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub(crate) u64);

/// Identifier of a group, unique across every category of a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub(crate) u64);

impl fmt::Display for CategoryId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "cat-{}", self.0)
	}
}

impl fmt::Display for GroupId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "g-{}", self.0)
	}
}

/// A named root collection holding its own forest of groups.
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
	/// Unique id.
	pub id: CategoryId,
	/// Display label.
	pub name: String,
	/// Root groups in display order.
	pub groups: Vec<GroupId>,
}

/// A node of a category forest.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
	/// Unique id.
	pub id: GroupId,
	/// Display label, never empty.
	pub name: String,
	/// Responsible person, if any.
	pub owner: Option<String>,
	/// Independently maintained member count.
	pub member_count: u32,
	/// Child groups in display order.
	pub children: Vec<GroupId>,
}

impl Group {
	pub(crate) fn new(id: GroupId, name: String) -> Self {
		Self {
			id,
			name,
			owner: None,
			member_count: 0,
			children: Vec::new(),
		}
	}

	/// Whether the group has at least one child.
	pub fn has_children(&self) -> bool {
		!self.children.is_empty()
	}
}

/// A walk from a category root down through nested groups.
///
/// Column `k` of the navigator is the children list of the prefix of length
/// `k + 1` (the category alone for column 0).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectionPath {
	/// The category the walk starts from.
	pub category: CategoryId,
	/// Group ids, outermost first.
	pub groups: Vec<GroupId>,
}

impl SelectionPath {
	/// A path consisting of the category alone.
	pub fn root(category: CategoryId) -> Self {
		Self {
			category,
			groups: Vec::new(),
		}
	}

	/// Number of ids, counting the category.
	pub fn len(&self) -> usize {
		self.groups.len() + 1
	}

	/// Paths always hold at least the category.
	pub fn is_empty(&self) -> bool {
		false
	}

	/// The last group of the walk, `None` for a bare category.
	pub fn last_group(&self) -> Option<GroupId> {
		self.groups.last().copied()
	}

	/// The group at `index` in the full id sequence (index 0 is the category).
	pub fn group_at(&self, index: usize) -> Option<GroupId> {
		index.checked_sub(1).and_then(|i| self.groups.get(i)).copied()
	}

	/// The prefix holding the first `len` ids (at least the category).
	pub fn prefix(&self, len: usize) -> Self {
		let keep = len.saturating_sub(1).min(self.groups.len());
		Self {
			category: self.category,
			groups: self.groups[..keep].to_vec(),
		}
	}

	/// This path extended by one group.
	pub fn child(&self, group: GroupId) -> Self {
		let mut next = self.clone();
		next.groups.push(group);
		next
	}

	/// Truncate to everything up to and including column `column`'s parent,
	/// then append `group`.
	pub fn select_at_column(&self, group: GroupId, column: usize) -> Self {
		self.prefix(column + 1).child(group)
	}
}

impl fmt::Display for SelectionPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.category)?;
		for group in &self.groups {
			write!(f, "/{group}")?;
		}
		Ok(())
	}
}

/// Trim `name`, falling back to `placeholder` when nothing is left.
pub(crate) fn label_or(name: &str, placeholder: &str) -> String {
	match name.trim() {
		"" => placeholder.to_string(),
		trimmed => trimmed.to_string(),
	}
}
