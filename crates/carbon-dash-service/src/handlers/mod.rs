//! API handlers.
//!
//! One handler per entity. List handlers return every row in the table's
//! fixed order; an empty table is an empty array, never an error.

pub mod alerts;
pub mod carbon_data;
pub mod catalog;
pub mod global_metrics;
pub mod health;
pub mod organizations;
pub mod realtime;
