use leptos::html::{Div, Input};
use leptos::prelude::*;
use web_sys::{Event, KeyboardEvent};

use super::types::{ColumnView, column_views, scroll_thumb};
use crate::components::group_card::GroupCard;
use crate::segments::{Coordinator, GroupId};

const COLUMN_WIDTH: f64 = 256.0;

#[component]
pub fn ColumnsView(coordinator: RwSignal<Coordinator>, on_edit: Callback<GroupId>) -> impl IntoView {
	let container_ref = NodeRef::<Div>::new();
	let input_ref = NodeRef::<Input>::new();
	let columns = Memo::new(move |_| coordinator.with(column_views));
	let column_count = Memo::new(move |_| columns.with(Vec::len));
	let draft = Memo::new(move |_| {
		coordinator.with(|c| c.sibling_draft().map(|d| d.name.clone()).unwrap_or_default())
	});
	let no_category = Memo::new(move |_| coordinator.with(|c| c.selected_category().is_none()));
	let scrolled = RwSignal::new(0.0_f64);
	let thumb = Memo::new(move |_| scroll_thumb(column_count.get(), scrolled.get()));

	// keep the deepest column in view
	Effect::new(move |_| {
		let count = column_count.get();
		if let (Some(container), true) = (container_ref.get(), count > 0) {
			container.scroll_to_with_x_and_y((count - 1) as f64 * COLUMN_WIDTH, 0.0);
		}
	});
	let on_scroll = move |_: Event| {
		if let Some(container) = container_ref.get_untracked() {
			let range = (container.scroll_width() - container.client_width()) as f64;
			let left = container.scroll_left() as f64;
			scrolled.set(if range > 0.0 { left / range } else { 0.0 });
		}
	};
	Effect::new(move |_| {
		if let Some(input) = input_ref.get() {
			let _ = input.focus();
		}
	});

	let on_key = move |ev: KeyboardEvent| match ev.key().as_str() {
		"Enter" => {
			coordinator.update(|c| {
				c.submit_sibling_draft();
			});
		}
		"Escape" => coordinator.update(|c| c.cancel_sibling_draft()),
		_ => {}
	};

	let render_column = move |column: ColumnView| {
		let index = column.index;
		let rows = column
			.rows
			.into_iter()
			.map(|row| {
				let id = row.id;
				let class = if row.selected { "group-row selected" } else { "group-row" };
				view! {
					<button class=class on:click=move |_| coordinator.update(|c| c.select_group_at_column(id, index))>
						<span>{row.name}</span>
						{row.has_children.then(|| view! { <span class="chevron">"›"</span> })}
					</button>
				}
			})
			.collect_view();
		let footer = if column.adding {
			view! {
				<input
					node_ref=input_ref
					class="inline-input"
					type="text"
					placeholder="Group name"
					prop:value=move || draft.get()
					on:input=move |ev| coordinator.update(|c| c.set_sibling_draft(event_target_value(&ev)))
					on:keydown=on_key
					on:blur=move |_| coordinator.update(|c| c.blur_sibling_draft())
				/>
			}
			.into_any()
		} else {
			view! {
				<button class="link-button" on:click=move |_| coordinator.update(|c| c.begin_add_sibling(index))>
					"+ Add sibling"
				</button>
			}
			.into_any()
		};

		view! {
			<div class="column">
				{column.chrome.map(|summary| view! { <GroupCard summary=summary on_edit=on_edit /> })}
				{rows}
				{footer}
			</div>
		}
	};

	view! {
		<div class="columns-panel">
			<div class="columns" node_ref=container_ref on:scroll=on_scroll>
				{move || columns.get().into_iter().map(render_column).collect_view()}
				<Show when=move || no_category.get()>
					<div class="empty-state">"Select a category to view groups"</div>
				</Show>
			</div>
			{move || {
				thumb
					.get()
					.map(|(width, offset)| {
						view! {
							<div class="scroll-indicator">
								<div class="scroll-track">
									<div
										class="scroll-thumb"
										style=format!("width: {width}%; margin-left: {offset}%;")
									/>
								</div>
							</div>
						}
					})
			}}
		</div>
	}
}
