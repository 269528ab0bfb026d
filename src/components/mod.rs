pub mod group_card;
pub mod segment_chart;
pub mod segment_navigator;
