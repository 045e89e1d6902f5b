//! Gridded atmospheric river categorization
//!
//! Reanalysis IVT arrives as multi-dimensional fields (time × lat × lon,
//! possibly with ensemble or level axes). This crate applies a
//! categorization scheme along the time axis of such a field, treating every
//! other index combination as an independent series, and returns the four
//! output channels in the input's shape.
//!
//! # Example
//!
//! ```rust
//! use arcat_grid::{apply_scheme, GridField};
//! use arcat_scheme::{CategorizationConfig, Scheme};
//!
//! // 12 six-hourly steps (time first) at 2 grid points
//! let mut data = Vec::new();
//! for _ in 0..12 {
//!     data.extend([800.0, 100.0]);
//! }
//! let field = GridField::new(&data, &[12, 2], 0).unwrap();
//! let output = apply_scheme(&field, Scheme::Event, &CategorizationConfig::default()).unwrap();
//!
//! assert_eq!(output.categories()[0], 4); // long event at point 0
//! assert_eq!(output.categories()[1], 0); // nothing at point 1
//! ```

pub mod apply;
pub mod field;

pub use apply::{
    apply_along_time, apply_scheme, output_channels, ChannelKind, GridOutput, OutputChannel,
    OUTPUT_CHANNELS,
};
pub use field::{GridField, Layout};
