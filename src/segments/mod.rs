//! In-memory model of the group browser: the category forest, the
//! drill-down selection, search, chart layout and the session coordinator.
//!
//! Nothing here touches the browser, so the whole model runs and tests on
//! the native target.

pub mod coordinator;
pub mod ids;
pub mod layout;
pub mod navigator;
pub mod search;
pub mod seed;
pub mod store;
pub mod traverse;
pub mod types;

pub use coordinator::{Coordinator, RenameDraft, SiblingDraft};
pub use layout::{ChartEdge, ChartLayout, ChartNode, LayoutConfig, compute_layout};
pub use navigator::{Column, PathNavigator, compute_columns};
pub use search::{SEARCH_RESULT_LIMIT, SearchHit, search};
pub use store::SegmentStore;
pub use types::{
	CATEGORY_PLACEHOLDER, Category, CategoryId, GROUP_PLACEHOLDER, Group, GroupId, SelectionPath,
};
