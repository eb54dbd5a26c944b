//! College listing data.
//!
//! Provides the record model and dataset loading.

pub mod dataset;
pub mod models;

pub use models::{CollegeRecord, Placement};
