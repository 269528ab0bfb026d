use leptos::prelude::*;
use web_sys::MouseEvent;

use super::types::hit_rows;
use crate::segments::Coordinator;

#[component]
pub fn SearchBox(coordinator: RwSignal<Coordinator>) -> impl IntoView {
	let focused = RwSignal::new(false);
	let query = Memo::new(move |_| coordinator.with(|c| c.search_query().to_string()));
	let hits = Memo::new(move |_| coordinator.with(hit_rows));

	view! {
		<div class="search">
			<input
				type="text"
				placeholder="Find a group"
				prop:value=move || query.get()
				on:input=move |ev| coordinator.update(|c| c.set_search_query(event_target_value(&ev)))
				on:focus=move |_| focused.set(true)
				on:blur=move |_| focused.set(false)
			/>
			<Show when=move || !query.get().is_empty()>
				<button class="search-clear" on:click=move |_| coordinator.update(|c| c.set_search_query(""))>
					"×"
				</button>
			</Show>
			<Show when=move || focused.get() && !hits.get().is_empty()>
				<div class="search-results">
					{move || {
						hits.get()
							.into_iter()
							.map(|row| {
								let hit = row.hit.clone();
								// mousedown runs before the input's blur hides the list
								let choose = move |ev: MouseEvent| {
									ev.prevent_default();
									coordinator.update(|c| c.choose_search_result(&hit));
									focused.set(false);
								};
								view! {
									<button class="search-result" on:mousedown=choose>
										<div class="search-result-name">{row.name}</div>
										<div class="search-result-category">{row.category_name}</div>
									</button>
								}
							})
							.collect_view()
					}}
				</div>
			</Show>
		</div>
	}
}
