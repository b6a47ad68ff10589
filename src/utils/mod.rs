//! Utility functions and data structures.
//!
//! ## Modules
//!
//! - [`app_data`] - Config file and app data directory management
//! - [`progress`] - Progress bar that becomes a no-op without the `progress` feature

pub mod app_data;
pub mod progress;

pub use app_data::*;
