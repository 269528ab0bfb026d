//! Initial forest loaded from a JSON document.
//!
//! Ids in the document are not used; every category and group gets a fresh
//! id from the store so later additions can never collide with seed data.

use log::info;
use serde::Deserialize;

use super::coordinator::Coordinator;
use super::store::SegmentStore;
use super::types::{CategoryId, GROUP_PLACEHOLDER, SelectionPath};
use crate::error::SeedError;

const DEFAULT_SEED: &str = include_str!("../../assets/groups.json");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedDocument {
	#[serde(default)]
	selected: Option<String>,
	categories: Vec<SeedCategory>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedCategory {
	name: String,
	#[serde(default)]
	groups: Vec<SeedGroup>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedGroup {
	name: String,
	#[serde(default)]
	owner: Option<String>,
	#[serde(default)]
	member_count: u32,
	#[serde(default)]
	children: Vec<SeedGroup>,
}

/// A populated store plus the category to open first.
#[derive(Debug)]
pub struct Seeded {
	/// The forest.
	pub store: SegmentStore,
	/// Initially selected category.
	pub selected: Option<CategoryId>,
}

impl Seeded {
	/// Hand the forest to a coordinator with the initial category selected.
	pub fn into_coordinator(self) -> Coordinator {
		let mut coordinator = Coordinator::new(self.store);
		if let Some(category) = self.selected {
			coordinator.select_category(category);
		}
		coordinator
	}
}

fn plant(store: &mut SegmentStore, parent: &SelectionPath, groups: &[SeedGroup]) {
	for seed in groups {
		let name = match seed.name.trim() {
			"" => GROUP_PLACEHOLDER,
			name => name,
		};
		let Some(id) = store.add_group(parent, name) else {
			continue;
		};
		store.set_owner(id, seed.owner.as_deref());
		store.set_member_count(id, seed.member_count);
		plant(store, &parent.child(id), &seed.children);
	}
}

/// Build a store from a seed document. Without a `selected` entry the first
/// category is opened.
pub fn load(json: &str) -> Result<Seeded, SeedError> {
	let document: SeedDocument = serde_json::from_str(json)?;
	let mut store = SegmentStore::new();
	for category in &document.categories {
		let id = store.add_category(&category.name);
		plant(&mut store, &SelectionPath::root(id), &category.groups);
	}

	let selected = match document.selected {
		Some(name) => Some(
			store
				.categories()
				.iter()
				.find(|c| c.name == name)
				.map(|c| c.id)
				.ok_or(SeedError::UnknownCategory(name))?,
		),
		None => store.categories().first().map(|c| c.id),
	};
	info!(
		"seeded {} categories, {} groups",
		store.categories().len(),
		store.group_count()
	);
	Ok(Seeded { store, selected })
}

/// The bundled demo forest.
pub fn load_default() -> Result<Seeded, SeedError> {
	load(DEFAULT_SEED)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_seed_loads() {
		let seeded = load_default().unwrap();
		let selected = seeded.selected.unwrap();
		let department = seeded.store.category(selected).unwrap();
		assert_eq!(department.name, "Department");
		assert_eq!(seeded.store.categories().len(), 7);
	}

	#[test]
	fn nested_groups_keep_fields() {
		let seeded = load(
			r#"{
				"categories": [{
					"name": "Department",
					"groups": [{
						"name": "Engineering",
						"owner": "Alex Turner",
						"memberCount": 85,
						"children": [{ "name": "Platform", "memberCount": 22 }]
					}]
				}]
			}"#,
		)
		.unwrap();
		let store = &seeded.store;
		let cat = seeded.selected.unwrap();
		let eng = store.category(cat).unwrap().groups[0];
		let platform = store.group(eng).unwrap().children[0];

		let eng_group = store.group(eng).unwrap();
		assert_eq!(eng_group.owner.as_deref(), Some("Alex Turner"));
		assert_eq!(eng_group.member_count, 85);
		let platform_group = store.group(platform).unwrap();
		assert_eq!(platform_group.name, "Platform");
		assert_eq!(platform_group.owner, None);
	}

	#[test]
	fn unknown_selection_is_an_error() {
		let err = load(r#"{ "selected": "Nope", "categories": [] }"#).unwrap_err();
		assert!(matches!(err, SeedError::UnknownCategory(ref n) if n == "Nope"));
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(matches!(
			load("{ categories: ").unwrap_err(),
			SeedError::Malformed(_)
		));
	}

	#[test]
	fn coordinator_opens_selected_category() {
		let coordinator = load_default().unwrap().into_coordinator();
		assert!(coordinator.selected_category().is_some());
		assert_eq!(coordinator.columns().len(), 1);
	}
}
