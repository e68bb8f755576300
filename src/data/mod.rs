//! Season data.
//!
//! The team table is read once from CSV at startup and shared read-only.

pub mod dataset;

pub use dataset::{Dataset, REQUIRED_COLUMNS};
