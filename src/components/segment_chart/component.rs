use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::{error, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, WheelEvent};

use super::render;
use super::state::{ChartState, Marks};
use crate::components::group_card::{GroupCard, GroupSummary};
use crate::segments::{Coordinator, GroupId, LayoutConfig};

type Shared<T> = Rc<RefCell<Option<T>>>;

fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|(w, h)| *w > 0.0 && *h > 0.0)
		.unwrap_or((800.0, 600.0))
}

fn local_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?;
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Node-link chart of the selected category's forest.
#[component]
pub fn SegmentChart(
	coordinator: RwSignal<Coordinator>,
	on_edit: Callback<GroupId>,
	#[prop(default = LayoutConfig::default())] config: LayoutConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let rename_ref = NodeRef::<leptos::html::Input>::new();
	let state: Shared<ChartState> = Rc::new(RefCell::new(None));
	let animate: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let alive = Arc::new(AtomicBool::new(true));

	let category = Memo::new(move |_| coordinator.with(|c| c.selected_category()));
	let layout = Memo::new(move |_| coordinator.with(|c| c.chart_layout(&config)));
	let renaming = Memo::new(move |_| coordinator.with(|c| c.rename_draft().map(|r| r.node)));
	let rename_text = Memo::new(move |_| {
		coordinator.with(|c| c.rename_draft().map(|r| r.name.clone()).unwrap_or_default())
	});
	let header = Memo::new(move |_| {
		coordinator.with(|c| {
			let id = c.selected_category()?;
			let name = c.store().category(id)?.name.clone();
			Some((name, c.store().category_member_count(id)))
		})
	});
	let selected_card = Memo::new(move |_| {
		coordinator.with(|c| {
			c.selected_node()
				.and_then(|id| c.store().group(id))
				.map(GroupSummary::from)
		})
	});
	let rename_rect = RwSignal::new(None::<(f64, f64, f64, f64)>);

	let alive_cleanup = alive.clone();
	on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

	let (state_init, animate_init) = (state.clone(), animate.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = parent_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					error!("2d context has an unexpected type");
					return;
				}
			},
			_ => {
				error!("canvas has no 2d context");
				return;
			}
		};
		let mut chart = ChartState::new(config, w, h);
		chart.set_layout(category.get_untracked(), layout.get_untracked());
		*state_init.borrow_mut() = Some(chart);

		let (state_anim, animate_inner, alive_anim) =
			(state_init.clone(), animate_init.clone(), alive.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let marks = alive_anim
				.load(Ordering::Relaxed)
				.then(|| {
					coordinator.try_with_untracked(|c| Marks {
						selected: c.selected_node(),
						editing: c.rename_draft().map(|r| r.node),
					})
				})
				.flatten();
			let Some(marks) = marks else {
				// unmounted: release the loop's own handle so the closure and
				// the chart state it captures are freed after this frame
				let _ = animate_inner.borrow_mut().take();
				return;
			};
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				if s.take_redraw(marks) {
					render::render(s, &marks, &ctx);
				}
			}
			if let (Some(cb), Some(window)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		match (&*animate_init.borrow(), web_sys::window()) {
			(Some(cb), Some(window)) => {
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
			_ => warn!("no window to animate the chart in"),
		}
	});

	let state_resize = state.clone();
	let resize = window_event_listener(leptos::ev::resize, move |_| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (w, h) = parent_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		if let Some(ref mut s) = *state_resize.borrow_mut() {
			s.resize(w, h);
		}
	});
	on_cleanup(move || resize.remove());

	// Structural edits and category switches replace the layout wholesale.
	let state_layout = state.clone();
	Effect::new(move |_| {
		let (category, layout) = (category.get(), layout.get());
		if let Some(ref mut s) = *state_layout.borrow_mut() {
			s.set_layout(category, layout);
		}
	});

	let state_rename = state.clone();
	Effect::new(move |_| {
		let rect = renaming.get().and_then(|id| {
			state_rename
				.borrow()
				.as_ref()
				.and_then(|s| s.node_screen_rect(id))
		});
		rename_rect.set(rect);
	});
	Effect::new(move |_| {
		if let Some(input) = rename_ref.get() {
			let _ = input.focus();
			input.select();
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.begin_pan(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.pan.active {
				s.drag_to(x, y);
			} else {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		let clicked = match *state_mu.borrow_mut() {
			Some(ref mut s) => s.end_pan().then(|| s.node_at_position(x, y)),
			None => None,
		};
		match clicked {
			Some(Some(id)) => coordinator.update(|c| c.select_node(id)),
			Some(None) => coordinator.update(|c| c.clear_chart_selection()),
			None => {}
		}
	};

	let state_dc = state.clone();
	let on_dblclick = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		let hit = state_dc
			.borrow()
			.as_ref()
			.and_then(|s| s.node_at_position(x, y));
		if let Some(id) = hit {
			coordinator.update(|c| c.begin_rename(id));
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.end_pan();
			s.set_hover(None);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom_at(x, y, ev.delta_y());
			if let Some(id) = renaming.get_untracked() {
				rename_rect.set(s.node_screen_rect(id));
			}
		}
	};

	let on_rename_key = move |ev: KeyboardEvent| match ev.key().as_str() {
		"Enter" => coordinator.update(|c| c.commit_rename()),
		"Escape" => coordinator.update(|c| c.cancel_rename()),
		_ => {}
	};

	view! {
		<div class="segment-chart">
			<canvas
				node_ref=canvas_ref
				class="segment-chart-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:dblclick=on_dblclick
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
			/>
			<Show when=move || rename_rect.get().is_some()>
				<input
					node_ref=rename_ref
					class="chart-rename"
					type="text"
					style=move || {
						rename_rect
							.get()
							.map(|(left, top, width, height)| {
								format!(
									"left: {left}px; top: {top}px; width: {width}px; height: {height}px;",
								)
							})
							.unwrap_or_default()
					}
					prop:value=move || rename_text.get()
					on:input=move |ev| coordinator.update(|c| c.set_rename_draft(event_target_value(&ev)))
					on:keydown=on_rename_key
					on:blur=move |_| coordinator.update(|c| c.commit_rename())
				/>
			</Show>
			<div class="graph-overlay">
				{move || {
					header
						.get()
						.map(|(name, members)| {
							view! {
								<h2>{name}</h2>
								<p class="subtitle">{format!("{members} members")}</p>
							}
						})
				}}
				{move || {
					selected_card
						.get()
						.map(|summary| view! { <GroupCard summary=summary on_edit=on_edit /> })
				}}
				<p class="hint">"Double-click a group to rename it. Drag to pan, scroll to zoom."</p>
			</div>
		</div>
	}
}
