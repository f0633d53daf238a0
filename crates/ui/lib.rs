//! Terminal presentation of the repository dataset.

pub mod chart;
pub mod data;
pub mod tui;
