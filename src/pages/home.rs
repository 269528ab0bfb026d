use leptos::prelude::*;

use crate::components::segment_navigator::SegmentNavigator;
use crate::segments::seed;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			{seed::load_default()
				.map(|seeded| view! { <SegmentNavigator session=seeded.into_coordinator() /> })}
		</ErrorBoundary>
	}
}
