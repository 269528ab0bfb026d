mod categories;
mod columns;
mod component;
mod search;
mod types;

pub use component::SegmentNavigator;
