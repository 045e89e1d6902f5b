//! Atmospheric river categorization schemes
//!
//! This crate turns an integrated vapor transport (IVT) time series into
//! discrete atmospheric river (AR) categories under two conventions:
//!
//! - **Event-based**: every timestep of an event takes the event's peak
//!   category
//! - **Evolution-based**: the category follows the instantaneous intensity
//!
//! Both apply a duration rule (events shorter than a day are downgraded,
//! events of two days or more are upgraded) and produce a cumulative IVT
//! trace that resets between events.
//!
//! ## Stages
//! - [`Binner`]: fixed-width IVT binning, clipped to the category ceiling
//! - [`PeakCollapser`]: event-wide peak collapse (event scheme only)
//! - [`DurationAdjuster`]: per-run ±1 shift by duration, then clip
//! - [`cumulative_reset`] / [`gate_by_mask`]: event-gated intensity traces
//!
//! ## Usage
//!
//! ```rust
//! use arcat_scheme::{categorize_event, CategorizationConfig};
//!
//! // Three days of 6-hourly IVT at 800 kg m⁻¹ s⁻¹
//! let ivt = vec![800.0; 12];
//! let result = categorize_event(&ivt, &CategorizationConfig::default()).unwrap();
//!
//! // 800 / 250 bins to category 3; a 3-day event is upgraded to 4
//! assert!(result.categories().iter().all(|&c| c == 4));
//! assert_eq!(result.cumulative_ivt()[11], 9600.0);
//! ```

pub mod binning;
pub mod collapse;
pub mod cumulative;
pub mod duration;
pub mod scheme;
pub mod traits;
pub mod types;

// Re-exports
pub use binning::Binner;
pub use collapse::PeakCollapser;
pub use cumulative::{cumulative_reset, gate_by_mask};
pub use duration::{DurationAdjuster, DurationAdjustment, DurationClass, DurationRule};
pub use scheme::{categorize_event, categorize_evolution, Categorizer, Scheme};
pub use traits::{CategorizationScheme, CategoryStage, SchemeProperties, StageProperties};
pub use types::{ArEvent, CategorizationResult};

pub use arcat_core::{CategorizationConfig, Category, Error, Result};
