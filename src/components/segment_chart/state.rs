use crate::segments::{CategoryId, ChartLayout, ChartNode, GroupId, LayoutConfig};

use super::scale::ViewTransform;

/// Pointer travel, in pixels, below which a press-release counts as a click.
pub const CLICK_SLOP: f64 = 4.0;
pub const FIT_MARGIN: f64 = 40.0;

/// Coordinator-owned highlight state, copied in for each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Marks {
	pub selected: Option<GroupId>,
	pub editing: Option<GroupId>,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

pub struct ChartState {
	pub layout: ChartLayout,
	pub config: LayoutConfig,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub hover: Option<GroupId>,
	pub width: f64,
	pub height: f64,
	category: Option<CategoryId>,
	drawn: Option<Marks>,
	dirty: bool,
}

impl ChartState {
	pub fn new(config: LayoutConfig, width: f64, height: f64) -> Self {
		Self {
			layout: ChartLayout::default(),
			config,
			transform: ViewTransform::default(),
			pan: PanState::default(),
			hover: None,
			width,
			height,
			category: None,
			drawn: None,
			dirty: true,
		}
	}

	/// Swap in a freshly computed layout. Switching category re-fits the view;
	/// edits within the same category keep the user's pan and zoom.
	pub fn set_layout(&mut self, category: Option<CategoryId>, layout: ChartLayout) {
		let refit = category != self.category;
		self.category = category;
		self.layout = layout;
		if refit {
			self.fit();
		}
		self.dirty = true;
	}

	pub fn fit(&mut self) {
		self.transform = ViewTransform::fit(
			self.layout.width,
			self.layout.height,
			self.width,
			self.height,
			FIT_MARGIN,
		);
		self.dirty = true;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.dirty = true;
	}

	/// Whether the canvas is stale for `marks`; records them as drawn.
	pub fn take_redraw(&mut self, marks: Marks) -> bool {
		let stale = self.dirty || self.drawn != Some(marks);
		self.dirty = false;
		self.drawn = Some(marks);
		stale
	}

	fn contains(&self, node: &ChartNode, gx: f64, gy: f64) -> bool {
		let half = self.config.node_width / 2.0;
		gx >= node.x - half
			&& gx <= node.x + half
			&& gy >= node.y
			&& gy <= node.y + self.config.node_height
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<GroupId> {
		let (gx, gy) = self.transform.screen_to_graph(sx, sy);
		self.layout
			.nodes
			.iter()
			.rev()
			.find(|n| self.contains(n, gx, gy))
			.map(|n| n.id)
	}

	/// Screen rectangle `(left, top, width, height)` of a node's box.
	pub fn node_screen_rect(&self, id: GroupId) -> Option<(f64, f64, f64, f64)> {
		let node = self.layout.node(id)?;
		let (left, top) = self
			.transform
			.graph_to_screen(node.x - self.config.node_width / 2.0, node.y);
		let k = self.transform.k;
		Some((
			left,
			top,
			self.config.node_width * k,
			self.config.node_height * k,
		))
	}

	pub fn set_hover(&mut self, node: Option<GroupId>) {
		if self.hover != node {
			self.hover = node;
			self.dirty = true;
		}
	}

	pub fn begin_pan(&mut self, x: f64, y: f64) {
		self.pan = PanState {
			active: true,
			moved: false,
			start_x: x,
			start_y: y,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	pub fn drag_to(&mut self, x: f64, y: f64) {
		if !self.pan.active {
			return;
		}
		let (dx, dy) = (x - self.pan.start_x, y - self.pan.start_y);
		if dx.hypot(dy) > CLICK_SLOP {
			self.pan.moved = true;
		}
		if self.pan.moved {
			self.transform.x = self.pan.transform_start_x + dx;
			self.transform.y = self.pan.transform_start_y + dy;
			self.dirty = true;
		}
	}

	/// Finish a press; true when it never travelled far enough to be a drag.
	pub fn end_pan(&mut self) -> bool {
		let was_click = self.pan.active && !self.pan.moved;
		self.pan = PanState::default();
		was_click
	}

	pub fn zoom_at(&mut self, x: f64, y: f64, delta_y: f64) {
		self.transform.zoom_at(x, y, delta_y);
		self.dirty = true;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::segments::{SegmentStore, SelectionPath, compute_layout};

	fn state_with_two_roots() -> (ChartState, GroupId, GroupId) {
		let mut store = SegmentStore::new();
		let cat = store.add_category("Age");
		let young = store.add_group(&SelectionPath::root(cat), "18-25").unwrap();
		let old = store.add_group(&SelectionPath::root(cat), "46+").unwrap();
		let config = LayoutConfig::default();
		let mut state = ChartState::new(config, 800.0, 600.0);
		state.set_layout(Some(cat), compute_layout(&store, cat, &config));
		(state, young, old)
	}

	#[test]
	fn hit_testing_uses_node_boxes() {
		let (state, young, old) = state_with_two_roots();
		// layout is 320 wide, centered: origin at x = 240, y = 40
		assert_eq!(state.transform.x, 240.0);
		assert_eq!(state.node_at_position(240.0 + 70.0, 40.0 + 10.0), Some(young));
		assert_eq!(state.node_at_position(240.0 + 250.0, 40.0 + 50.0), Some(old));
		assert_eq!(state.node_at_position(240.0 + 160.0, 40.0 + 10.0), None);
		assert_eq!(state.node_at_position(240.0 + 70.0, 40.0 + 80.0), None);
	}

	#[test]
	fn screen_rect_follows_transform() {
		let (mut state, young, _) = state_with_two_roots();
		assert_eq!(state.node_screen_rect(young), Some((240.0, 40.0, 140.0, 56.0)));
		state.transform.k = 2.0;
		assert_eq!(state.node_screen_rect(young), Some((240.0, 40.0, 280.0, 112.0)));
	}

	#[test]
	fn short_press_is_a_click() {
		let (mut state, _, _) = state_with_two_roots();
		state.begin_pan(100.0, 100.0);
		state.drag_to(102.0, 101.0);
		assert_eq!(state.transform.x, 240.0);
		assert!(state.end_pan());

		state.begin_pan(100.0, 100.0);
		state.drag_to(130.0, 100.0);
		assert_eq!(state.transform.x, 270.0);
		assert!(!state.end_pan());
	}

	#[test]
	fn redraw_tracks_marks() {
		let (mut state, young, _) = state_with_two_roots();
		let marks = Marks::default();
		assert!(state.take_redraw(marks));
		assert!(!state.take_redraw(marks));
		let selected = Marks {
			selected: Some(young),
			editing: None,
		};
		assert!(state.take_redraw(selected));
		state.set_hover(Some(young));
		assert!(state.take_redraw(selected));
	}

	#[test]
	fn same_category_edit_keeps_view() {
		let (mut state, _, _) = state_with_two_roots();
		state.transform.x = 10.0;
		let category = state.category;
		let layout = state.layout.clone();
		state.set_layout(category, layout);
		assert_eq!(state.transform.x, 10.0);
	}
}
