//! Top-to-bottom tree layout for the chart view.
//!
//! Two passes over the pre-order walk: subtree widths bottom-up (reverse
//! pre-order reaches every child before its parent), then left edges top-down.
//! A node is centered over its subtree and sibling subtrees are separated by
//! exactly one horizontal gap.

use std::collections::HashMap;

use super::store::SegmentStore;
use super::traverse::{Visit, walk_category};
use super::types::{CategoryId, GroupId};

/// Geometry constants of the chart, in canvas units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Width of every node box.
	pub node_width: f64,
	/// Height of every node box.
	pub node_height: f64,
	/// Space between sibling subtrees.
	pub horizontal_gap: f64,
	/// Space between tree levels.
	pub vertical_gap: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			node_width: 140.0,
			node_height: 56.0,
			horizontal_gap: 40.0,
			vertical_gap: 60.0,
		}
	}
}

/// A positioned group. `(x, y)` is the top-center of the node box.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartNode {
	/// Group the node draws.
	pub id: GroupId,
	/// Horizontal center.
	pub x: f64,
	/// Top edge.
	pub y: f64,
	/// Tree level, 0 for category roots.
	pub depth: usize,
	/// Group name.
	pub label: String,
	/// Group owner.
	pub owner: Option<String>,
	/// Group member count.
	pub member_count: u32,
}

/// Parent to child connector.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartEdge {
	/// `"{source}-{target}"`.
	pub id: String,
	/// Parent group.
	pub source: GroupId,
	/// Child group.
	pub target: GroupId,
}

/// Full layout of one category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartLayout {
	/// Nodes in pre-order.
	pub nodes: Vec<ChartNode>,
	/// One edge per parent/child pair, in pre-order of the parent.
	pub edges: Vec<ChartEdge>,
	/// Horizontal extent of the whole forest.
	pub width: f64,
	/// Vertical extent of the whole forest.
	pub height: f64,
}

impl ChartLayout {
	/// Look up a node by group id.
	pub fn node(&self, id: GroupId) -> Option<&ChartNode> {
		self.nodes.iter().find(|n| n.id == id)
	}
}

fn subtree_widths(visits: &[Visit<'_>], config: &LayoutConfig) -> HashMap<GroupId, f64> {
	let mut widths = HashMap::with_capacity(visits.len());
	for visit in visits.iter().rev() {
		let children: Vec<f64> = visit
			.group
			.children
			.iter()
			.filter_map(|c| widths.get(c).copied())
			.collect();
		let width = if children.is_empty() {
			config.node_width
		} else {
			children.iter().sum::<f64>() + (children.len() - 1) as f64 * config.horizontal_gap
		};
		widths.insert(visit.group.id, width);
	}
	widths
}

/// Lay out the forest of `category`. Unknown or empty categories produce an
/// empty layout.
pub fn compute_layout(
	store: &SegmentStore,
	category: CategoryId,
	config: &LayoutConfig,
) -> ChartLayout {
	let visits: Vec<_> = walk_category(store, category).collect();
	if visits.is_empty() {
		return ChartLayout::default();
	}
	let widths = subtree_widths(&visits, config);
	let row = config.node_height + config.vertical_gap;

	let mut lefts: HashMap<GroupId, f64> = HashMap::with_capacity(visits.len());
	let mut cursor = 0.0;
	for visit in visits.iter().filter(|v| v.depth() == 0) {
		lefts.insert(visit.group.id, cursor);
		cursor += widths[&visit.group.id] + config.horizontal_gap;
	}
	let width = cursor - config.horizontal_gap;

	let mut layout = ChartLayout {
		width,
		..ChartLayout::default()
	};
	let mut max_depth = 0;
	for visit in &visits {
		let group = visit.group;
		let left = lefts[&group.id];
		let depth = visit.depth();
		max_depth = max_depth.max(depth);
		layout.nodes.push(ChartNode {
			id: group.id,
			x: left + widths[&group.id] / 2.0,
			y: depth as f64 * row,
			depth,
			label: group.name.clone(),
			owner: group.owner.clone(),
			member_count: group.member_count,
		});

		let mut child_cursor = left;
		for child in &group.children {
			let Some(child_width) = widths.get(child) else {
				continue;
			};
			lefts.insert(*child, child_cursor);
			child_cursor += child_width + config.horizontal_gap;
			layout.edges.push(ChartEdge {
				id: format!("{}-{}", group.id, child),
				source: group.id,
				target: *child,
			});
		}
	}
	layout.height = max_depth as f64 * row + config.node_height;
	layout
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::segments::types::SelectionPath;

	const EPS: f64 = 1e-9;

	#[test]
	fn empty_forest_has_no_nodes() {
		let mut store = SegmentStore::new();
		let cat = store.add_category("Kids");
		let layout = compute_layout(&store, cat, &LayoutConfig::default());
		assert!(layout.nodes.is_empty());
		assert!(layout.edges.is_empty());
		assert_eq!(
			compute_layout(&store, CategoryId(77), &LayoutConfig::default()),
			ChartLayout::default()
		);
	}

	#[test]
	fn parent_is_centered_over_children() {
		let mut store = SegmentStore::new();
		let cat = store.add_category("Department");
		let root = SelectionPath::root(cat);
		let eng = store.add_group(&root, "Engineering").unwrap();
		let data = store.add_group(&root.child(eng), "Data Science").unwrap();
		let platform = store.add_group(&root.child(eng), "Platform").unwrap();

		let layout = compute_layout(&store, cat, &LayoutConfig::default());
		let eng_node = layout.node(eng).unwrap();
		assert_eq!(eng_node.x, 160.0);
		assert_eq!(eng_node.y, 0.0);
		assert_eq!(layout.node(data).unwrap().x, 70.0);
		assert_eq!(layout.node(platform).unwrap().x, 250.0);
		assert_eq!(layout.node(platform).unwrap().y, 116.0);
		assert_eq!(layout.width, 320.0);
		assert_eq!(layout.height, 172.0);

		let edges: Vec<_> = layout.edges.iter().map(|e| (e.source, e.target)).collect();
		assert_eq!(edges, vec![(eng, data), (eng, platform)]);
		assert_eq!(layout.edges[0].id, format!("{eng}-{data}"));
	}

	#[test]
	fn node_carries_group_metadata() {
		let mut store = SegmentStore::new();
		let cat = store.add_category("Department");
		let legal = store.add_group(&SelectionPath::root(cat), "Legal").unwrap();
		store.set_owner(legal, Some("Sarah Johnson"));
		store.set_member_count(legal, 12);

		let layout = compute_layout(&store, cat, &LayoutConfig::default());
		let node = layout.node(legal).unwrap();
		assert_eq!(node.label, "Legal");
		assert_eq!(node.owner.as_deref(), Some("Sarah Johnson"));
		assert_eq!(node.member_count, 12);
		assert_eq!(node.x, 70.0);
	}

	fn uneven_forest() -> (SegmentStore, CategoryId) {
		let mut store = SegmentStore::new();
		let cat = store.add_category("Department");
		let root = SelectionPath::root(cat);
		for (i, fanout) in [3usize, 0, 1, 4].iter().enumerate() {
			let parent = store.add_group(&root, &format!("Root {i}")).unwrap();
			for j in 0..*fanout {
				let child = store
					.add_group(&root.child(parent), &format!("Child {i}.{j}"))
					.unwrap();
				if j % 2 == 0 {
					for k in 0..j + 1 {
						store
							.add_group(
								&root.child(parent).child(child),
								&format!("Leaf {i}.{j}.{k}"),
							)
							.unwrap();
					}
				}
			}
		}
		(store, cat)
	}

	/// Horizontal extent covered by every node whose path passes through `id`.
	fn extent(layout: &ChartLayout, store: &SegmentStore, cat: CategoryId, id: GroupId) -> (f64, f64) {
		let half = LayoutConfig::default().node_width / 2.0;
		walk_category(store, cat)
			.filter(|v| v.path.groups.contains(&id))
			.map(|v| layout.node(v.group.id).unwrap().x)
			.fold((f64::MAX, f64::MIN), |(lo, hi), x| {
				(lo.min(x - half), hi.max(x + half))
			})
	}

	#[test]
	fn sibling_subtrees_never_overlap() {
		let (store, cat) = uneven_forest();
		let config = LayoutConfig::default();
		let layout = compute_layout(&store, cat, &config);
		assert_eq!(layout.nodes.len(), store.group_count());

		let mut sibling_lists = vec![store.category(cat).unwrap().groups.clone()];
		sibling_lists.extend(
			walk_category(&store, cat)
				.filter(|v| v.group.has_children())
				.map(|v| v.group.children.clone()),
		);
		for siblings in sibling_lists {
			for pair in siblings.windows(2) {
				let (_, left_max) = extent(&layout, &store, cat, pair[0]);
				let (right_min, _) = extent(&layout, &store, cat, pair[1]);
				assert!(
					right_min + EPS >= left_max + config.horizontal_gap,
					"subtrees {} and {} overlap",
					pair[0],
					pair[1]
				);
			}
		}
	}

	#[test]
	fn rows_follow_depth() {
		let (store, cat) = uneven_forest();
		let config = LayoutConfig::default();
		let layout = compute_layout(&store, cat, &config);
		for node in &layout.nodes {
			let expected = node.depth as f64 * (config.node_height + config.vertical_gap);
			assert!((node.y - expected).abs() < EPS);
		}
		let parents = walk_category(&store, cat).filter(|v| v.group.has_children());
		let expected_edges: usize = parents.map(|v| v.group.children.len()).sum();
		assert_eq!(layout.edges.len(), expected_edges);
	}
}
