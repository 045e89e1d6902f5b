//! Core types for atmospheric river categorization
//!
//! This crate provides the foundations shared by the categorization schemes
//! and the gridded driver:
//!
//! - [`Error`] / [`Result`]: the error type used across all arcat crates
//! - [`CategorizationConfig`]: time resolution, bin width and category ceiling
//! - [`segments`]: the maximal-run iterator every stage is built on
//! - [`validation`]: intensity and length checks performed at scheme entry
//!
//! # Example
//!
//! ```rust
//! use arcat_core::{nonzero_runs, CategorizationConfig};
//!
//! let config = CategorizationConfig::default();
//! assert_eq!(config.steps_per_day(), 4);
//!
//! let durations: Vec<usize> = nonzero_runs(&[0, 1, 1, 0, 2]).map(|run| run.len()).collect();
//! assert_eq!(durations, vec![2, 1]);
//! ```

pub mod config;
pub mod error;
pub mod segments;
pub mod validation;

/// Integer atmospheric river category; zero means "no event"
pub type Category = u32;

pub use config::{CategorizationConfig, HOURS_PER_DAY};
pub use error::{Error, Result};
pub use segments::{nonzero_runs, segments_by, true_runs, Segment, Segments};
pub use validation::{ensure_same_len, validate_intensity};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        nonzero_runs, true_runs, CategorizationConfig, Category, Error, Result, Segment,
    };
}
