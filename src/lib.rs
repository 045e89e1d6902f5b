//! Atmospheric river categorization toolkit
//!
//! Re-exports the workspace crates under one roof:
//!
//! - [`arcat_core`]: configuration, errors and the segment iterator
//! - [`arcat_scheme`]: the event-based and evolution-based schemes
//! - [`arcat_grid`]: applying a scheme along the time axis of a gridded field
//!
//! # Example
//!
//! ```rust
//! use arcat::prelude::*;
//!
//! let ivt = [300.0, 300.0, 0.0];
//! let result = categorize_event(&ivt, &CategorizationConfig::default()).unwrap();
//! assert_eq!(result.categories(), &[0, 0, 0]); // too short to count
//! ```

pub use arcat_core::{
    nonzero_runs, true_runs, CategorizationConfig, Category, Error, Result, Segment,
    HOURS_PER_DAY,
};
pub use arcat_grid::{apply_along_time, apply_scheme, output_channels, GridField, GridOutput};
pub use arcat_scheme::{
    categorize_event, categorize_evolution, ArEvent, CategorizationResult, CategorizationScheme,
    Categorizer, Scheme,
};

pub use arcat_core;
pub use arcat_grid;
pub use arcat_scheme;

/// Prelude module for convenient imports
pub mod prelude {
    pub use arcat_core::prelude::*;
    pub use arcat_grid::{apply_along_time, apply_scheme, GridField, GridOutput};
    pub use arcat_scheme::{
        categorize_event, categorize_evolution, CategorizationResult, CategorizationScheme,
        Categorizer, Scheme, SchemeProperties,
    };
}
