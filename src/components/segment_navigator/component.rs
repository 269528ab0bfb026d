use leptos::prelude::*;
use log::info;

use super::categories::CategoriesPanel;
use super::columns::ColumnsView;
use super::search::SearchBox;
use crate::components::segment_chart::SegmentChart;
use crate::segments::{Coordinator, GroupId, LayoutConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
	Columns,
	Chart,
}

fn tab_class(active: bool) -> &'static str {
	if active { "tab active" } else { "tab" }
}

/// Group browser: search, category list, and either drill-down columns or
/// the chart of the selected category.
///
/// `on_edit` receives the id of a group the user asked to edit; without it
/// the request is only logged.
#[component]
pub fn SegmentNavigator(
	session: Coordinator,
	#[prop(optional, into)] on_edit: Option<Callback<GroupId>>,
	#[prop(optional)] layout: Option<LayoutConfig>,
) -> impl IntoView {
	let coordinator = RwSignal::new(session);
	let tab = RwSignal::new(Tab::Columns);
	let on_edit = on_edit.unwrap_or_else(|| Callback::new(|id: GroupId| info!("Edit group: {id}")));
	let config = layout.unwrap_or_default();

	view! {
		<div class="segment-navigator">
			<header class="navigator-header">
				<h1>"Groups"</h1>
				<SearchBox coordinator=coordinator />
			</header>
			<nav class="tabs">
				<button class=move || tab_class(tab.get() == Tab::Columns) on:click=move |_| tab.set(Tab::Columns)>
					"Columns"
				</button>
				<button class=move || tab_class(tab.get() == Tab::Chart) on:click=move |_| tab.set(Tab::Chart)>
					"Chart"
				</button>
			</nav>
			<div class="navigator-body">
				<CategoriesPanel coordinator=coordinator />
				{move || match tab.get() {
					Tab::Columns => view! { <ColumnsView coordinator=coordinator on_edit=on_edit /> }.into_any(),
					Tab::Chart => {
						view! { <SegmentChart coordinator=coordinator on_edit=on_edit config=config /> }.into_any()
					}
				}}
			</div>
		</div>
	}
}
