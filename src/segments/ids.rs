use super::types::{CategoryId, GroupId};

/// Hands out ids from one monotonic counter so category and group ids never
/// collide, no matter how quickly they are requested.
#[derive(Clone, Debug, Default)]
pub struct IdGenerator {
	next: u64,
}

impl IdGenerator {
	/// A generator starting at 1.
	pub fn new() -> Self {
		Self { next: 1 }
	}

	fn bump(&mut self) -> u64 {
		let id = self.next.max(1);
		self.next = id + 1;
		id
	}

	/// A fresh category id.
	pub fn category(&mut self) -> CategoryId {
		CategoryId(self.bump())
	}

	/// A fresh group id.
	pub fn group(&mut self) -> GroupId {
		GroupId(self.bump())
	}
}
