use leptos::html::Input;
use leptos::prelude::*;
use web_sys::KeyboardEvent;

use super::types::category_rows;
use crate::segments::Coordinator;

#[component]
pub fn CategoriesPanel(coordinator: RwSignal<Coordinator>) -> impl IntoView {
	let input_ref = NodeRef::<Input>::new();
	let rows = Memo::new(move |_| coordinator.with(category_rows));
	let adding = Memo::new(move |_| coordinator.with(|c| c.category_draft().is_some()));
	let draft = Memo::new(move |_| {
		coordinator.with(|c| c.category_draft().unwrap_or_default().to_string())
	});

	Effect::new(move |_| {
		if let Some(input) = input_ref.get() {
			let _ = input.focus();
		}
	});

	let on_key = move |ev: KeyboardEvent| match ev.key().as_str() {
		"Enter" => {
			coordinator.update(|c| {
				c.submit_category_draft();
			});
		}
		"Escape" => coordinator.update(|c| c.cancel_category_draft()),
		_ => {}
	};

	view! {
		<aside class="categories">
			<div class="categories-header">
				<h2>"Categories"</h2>
				<button class="secondary-button" on:click=move |_| coordinator.update(|c| c.begin_add_category())>
					"+ Add category"
				</button>
			</div>
			<div class="categories-list">
				{move || {
					rows.get()
						.into_iter()
						.map(|row| {
							let id = row.id;
							let class = if row.selected { "category-row selected" } else { "category-row" };
							view! {
								<button class=class on:click=move |_| coordinator.update(|c| c.select_category(id))>
									<span>{row.name}</span>
									<span class="chevron">"›"</span>
								</button>
							}
						})
						.collect_view()
				}}
				<Show when=move || adding.get()>
					<input
						node_ref=input_ref
						class="inline-input"
						type="text"
						placeholder="Category name"
						prop:value=move || draft.get()
						on:input=move |ev| coordinator.update(|c| c.set_category_draft(event_target_value(&ev)))
						on:keydown=on_key
						on:blur=move |_| coordinator.update(|c| c.blur_category_draft())
					/>
				</Show>
			</div>
		</aside>
	}
}
