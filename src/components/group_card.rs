use leptos::prelude::*;

use crate::segments::{Group, GroupId};

/// Snapshot of the fields a card shows.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupSummary {
	pub id: GroupId,
	pub name: String,
	pub owner: Option<String>,
	pub member_count: u32,
}

impl From<&Group> for GroupSummary {
	fn from(group: &Group) -> Self {
		Self {
			id: group.id,
			name: group.name.clone(),
			owner: group.owner.clone(),
			member_count: group.member_count,
		}
	}
}

/// Name, member count and owner of a group, with a button handing the group
/// to the host's editor.
#[component]
pub fn GroupCard(summary: GroupSummary, on_edit: Callback<GroupId>) -> impl IntoView {
	let id = summary.id;
	let owner = summary.owner.unwrap_or_else(|| "No owner".to_string());

	view! {
		<div class="group-card">
			<div class="group-card-header">
				<span class="group-card-name">{summary.name}</span>
				<span class="group-card-members" title="Members">{summary.member_count}</span>
			</div>
			<div class="group-card-owner">{owner}</div>
			<button class="secondary-button" on:click=move |_| on_edit.run(id)>
				"Edit group"
			</button>
		</div>
	}
}
