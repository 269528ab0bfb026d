use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{ChartState, Marks};
use crate::segments::ChartNode;

const BACKGROUND: &str = "#f7f7f5";
const EDGE: &str = "#c9c9c4";
const NODE_FILL: &str = "#ffffff";
const NODE_HOVER_FILL: &str = "#f0f0ec";
const NODE_BORDER: &str = "#dcdcd6";
const ACCENT: &str = "#2f6fed";
const LABEL: &str = "#1d1d1b";
const SUBLABEL: &str = "#8a8a84";
const PADDING: f64 = 10.0;

pub fn render(state: &ChartState, marks: &Marks, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	for node in &state.layout.nodes {
		draw_node(state, marks, node, ctx);
	}
	ctx.restore();
}

/// Elbow connectors: down from the parent, across at mid-gap, down to the child.
fn draw_edges(state: &ChartState, ctx: &CanvasRenderingContext2d) {
	let (h, gap) = (state.config.node_height, state.config.vertical_gap);
	ctx.set_stroke_style_str(EDGE);
	ctx.set_line_width(1.5 / state.transform.k.max(0.5));
	ctx.begin_path();
	for edge in &state.layout.edges {
		let (Some(parent), Some(child)) = (
			state.layout.node(edge.source),
			state.layout.node(edge.target),
		) else {
			continue;
		};
		let mid_y = parent.y + h + gap / 2.0;
		ctx.move_to(parent.x, parent.y + h);
		ctx.line_to(parent.x, mid_y);
		ctx.line_to(child.x, mid_y);
		ctx.line_to(child.x, child.y);
	}
	ctx.stroke();
}

fn draw_node(state: &ChartState, marks: &Marks, node: &ChartNode, ctx: &CanvasRenderingContext2d) {
	let (w, h) = (state.config.node_width, state.config.node_height);
	let (left, top) = (node.x - w / 2.0, node.y);
	let selected = marks.selected == Some(node.id);
	let editing = marks.editing == Some(node.id);

	let fill = if state.hover == Some(node.id) && !selected {
		NODE_HOVER_FILL
	} else {
		NODE_FILL
	};
	ctx.set_fill_style_str(fill);
	ctx.fill_rect(left, top, w, h);

	if editing {
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(4.0),
			&JsValue::from_f64(3.0),
		));
	}
	ctx.set_stroke_style_str(if selected || editing { ACCENT } else { NODE_BORDER });
	ctx.set_line_width(if selected { 2.0 } else { 1.0 });
	ctx.stroke_rect(left, top, w, h);
	let _ = ctx.set_line_dash(&js_sys::Array::new());

	// the rename input sits on top of the box while editing
	if editing {
		return;
	}

	let max_text = w - 2.0 * PADDING;
	ctx.set_fill_style_str(LABEL);
	ctx.set_font("600 13px sans-serif");
	let label = fit_text(ctx, &node.label, max_text);
	let _ = ctx.fill_text(&label, left + PADDING, top + 22.0);

	ctx.set_fill_style_str(SUBLABEL);
	ctx.set_font("11px sans-serif");
	let owner = node.owner.as_deref().unwrap_or("No owner");
	let detail = fit_text(ctx, &format!("{owner} · {}", node.member_count), max_text);
	let _ = ctx.fill_text(&detail, left + PADDING, top + 42.0);
}

/// Shorten `text` with an ellipsis until it fits in `max_width`.
fn fit_text(ctx: &CanvasRenderingContext2d, text: &str, max_width: f64) -> String {
	let width = |s: &str| ctx.measure_text(s).map(|m| m.width()).unwrap_or(0.0);
	if width(text) <= max_width {
		return text.to_string();
	}
	let mut chars: Vec<char> = text.chars().collect();
	while !chars.is_empty() {
		chars.pop();
		let candidate: String = chars.iter().chain(std::iter::once(&'…')).collect();
		if width(&candidate) <= max_width {
			return candidate;
		}
	}
	String::from("…")
}
