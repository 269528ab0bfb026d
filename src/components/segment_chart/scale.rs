//! Pan and zoom transform between screen pixels and layout units.

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;

/// Screen position of the layout origin (`x`, `y`) and zoom factor `k`.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	/// Center a `layout_w x layout_h` drawing horizontally in the viewport with
	/// `margin` above it, shrinking it when it does not fit.
	pub fn fit(layout_w: f64, layout_h: f64, view_w: f64, view_h: f64, margin: f64) -> Self {
		let avail_w = (view_w - 2.0 * margin).max(1.0);
		let avail_h = (view_h - 2.0 * margin).max(1.0);
		let k = if layout_w <= 0.0 || layout_h <= 0.0 {
			1.0
		} else {
			(avail_w / layout_w)
				.min(avail_h / layout_h)
				.clamp(MIN_ZOOM, 1.0)
		};
		Self {
			x: (view_w - layout_w * k) / 2.0,
			y: margin,
			k,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.x) / self.k, (sy - self.y) / self.k)
	}

	pub fn graph_to_screen(&self, gx: f64, gy: f64) -> (f64, f64) {
		(gx * self.k + self.x, gy * self.k + self.y)
	}

	/// Zoom one wheel notch around the screen point `(sx, sy)`, which stays put.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.k;
		self.x = sx - (sx - self.x) * ratio;
		self.y = sy - (sy - self.y) * ratio;
		self.k = new_k;
	}
}
