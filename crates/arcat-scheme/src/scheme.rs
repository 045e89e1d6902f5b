//! Event-based and evolution-based categorization
//!
//! Both schemes share one pipeline:
//!
//! ```text
//! IVT ──► Binner ──► [PeakCollapser] ──► DurationAdjuster ──► categories, durations
//!  │                  (event only)              │
//!  └──────────────────────────────────────► mask = category > 0
//!                                               │
//!                          cumulative_reset / gate_by_mask ──► cumulative IVT, event IVT
//! ```
//!
//! The event scheme gives every timestep of an event the event's peak
//! category; the evolution scheme lets the category follow the
//! instantaneous intensity. In both, the duration rule is applied per run
//! of the sequence it receives, so in the evolution scheme a dip to
//! category 0 splits an event into two runs.

use crate::binning::Binner;
use crate::collapse::PeakCollapser;
use crate::cumulative::{cumulative_reset, gate_by_mask};
use crate::duration::{DurationAdjuster, DurationClass};
use crate::traits::{CategorizationScheme, CategoryStage, SchemeProperties};
use crate::types::CategorizationResult;
use arcat_core::{validate_intensity, CategorizationConfig, Error, Result};
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Which output convention to categorize with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Collapse each event to its peak category
    #[default]
    Event,
    /// Keep per-timestep intensity changes within an event
    Evolution,
}

impl Scheme {
    /// Lowercase scheme name
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Event => "event",
            Scheme::Evolution => "evolution",
        }
    }

    /// Whether the peak-collapse stage runs
    pub fn collapses_events(&self) -> bool {
        matches!(self, Scheme::Event)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "event" => Ok(Scheme::Event),
            "evolution" => Ok(Scheme::Evolution),
            other => Err(Error::InvalidConfiguration(format!(
                "unknown scheme '{other}', expected 'event' or 'evolution'"
            ))),
        }
    }
}

/// A scheme bound to a configuration
///
/// Stateless and `Copy`; one categorizer can be shared across threads and
/// applied to any number of independent series.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Categorizer {
    scheme: Scheme,
    config: CategorizationConfig,
}

impl Categorizer {
    /// Create a categorizer for a scheme and configuration
    pub fn new(scheme: Scheme, config: CategorizationConfig) -> Self {
        Self { scheme, config }
    }

    /// Event-based categorizer
    pub fn event(config: CategorizationConfig) -> Self {
        Self::new(Scheme::Event, config)
    }

    /// Evolution-based categorizer
    pub fn evolution(config: CategorizationConfig) -> Self {
        Self::new(Scheme::Evolution, config)
    }

    /// The selected scheme
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// The configuration in use
    pub fn config(&self) -> &CategorizationConfig {
        &self.config
    }

    /// Validate configuration and intensity, then categorize
    ///
    /// Fails before any scan starts if the configuration is invalid or the
    /// series holds a negative or non-finite value.
    #[instrument(level = "debug", skip_all, fields(scheme = %self.scheme, len = ivt.len()))]
    pub fn categorize<T: Float>(&self, ivt: &[T]) -> Result<CategorizationResult<T>> {
        self.config.validate()?;
        validate_intensity(ivt)?;
        self.run(ivt)
    }

    /// Categorize without checking the intensity values
    ///
    /// The configuration is still validated. Negative and NaN intensities
    /// bin to category 0 instead of being rejected.
    #[instrument(level = "debug", skip_all, fields(scheme = %self.scheme, len = ivt.len()))]
    pub fn categorize_unchecked<T: Float>(&self, ivt: &[T]) -> Result<CategorizationResult<T>> {
        self.config.validate()?;
        self.run(ivt)
    }

    fn run<T: Float>(&self, ivt: &[T]) -> Result<CategorizationResult<T>> {
        let binned = Binner::from_config(&self.config).bin(ivt);
        let staged = if self.scheme.collapses_events() {
            PeakCollapser.apply(&binned)
        } else {
            binned
        };

        let adjustment = DurationAdjuster::from_config(&self.config).adjust(&staged);
        debug!(
            runs = adjustment.runs.len(),
            short = adjustment.count(DurationClass::Short),
            long = adjustment.count(DurationClass::Long),
            "duration rule applied"
        );

        let mask: Vec<bool> = adjustment.categories.iter().map(|&c| c > 0).collect();
        let cumulative_ivt = cumulative_reset(ivt, &mask)?;
        let event_ivt = gate_by_mask(ivt, &mask)?;
        let durations = adjustment.durations.iter().map(|&d| steps_as(d)).collect();

        Ok(CategorizationResult::new(
            adjustment.categories,
            cumulative_ivt,
            event_ivt,
            durations,
        ))
    }
}

// Float conversions from usize are total; the fallback is unreachable.
fn steps_as<T: Float>(steps: usize) -> T {
    T::from(steps).unwrap_or_else(T::infinity)
}

impl SchemeProperties for Categorizer {
    fn scheme_name(&self) -> &'static str {
        self.scheme.name()
    }

    fn collapses_events(&self) -> bool {
        self.scheme.collapses_events()
    }

    fn config(&self) -> &CategorizationConfig {
        &self.config
    }
}

impl<T: Float> CategorizationScheme<T> for Categorizer {
    fn categorize(&self, ivt: &[T]) -> Result<CategorizationResult<T>> {
        Categorizer::categorize(self, ivt)
    }
}

/// Event-based categorization of one IVT series
pub fn categorize_event<T: Float>(
    ivt: &[T],
    config: &CategorizationConfig,
) -> Result<CategorizationResult<T>> {
    Categorizer::event(*config).categorize(ivt)
}

/// Evolution-based categorization of one IVT series
pub fn categorize_evolution<T: Float>(
    ivt: &[T],
    config: &CategorizationConfig,
) -> Result<CategorizationResult<T>> {
    Categorizer::evolution(*config).categorize(ivt)
}
