//! Categorization configuration
//!
//! A single [`CategorizationConfig`] drives every stage: the bin ladder used
//! to turn IVT into categories, the category ceiling, and the sampling
//! interval that converts run lengths into days.

use crate::error::{Error, Result};
use crate::Category;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Hours in one calendar day
pub const HOURS_PER_DAY: u32 = 24;

/// Parameters shared by the event-based and evolution-based schemes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategorizationConfig {
    /// Hours between consecutive timesteps
    pub time_resolution_hours: u32,
    /// IVT width of one category bin (kg m⁻¹ s⁻¹)
    pub bin_width: f64,
    /// Highest category a timestep can take
    pub max_category: Category,
}

impl Default for CategorizationConfig {
    fn default() -> Self {
        Self {
            time_resolution_hours: 6,
            bin_width: 250.0,
            max_category: 6,
        }
    }
}

impl CategorizationConfig {
    /// Create a configuration from explicit values
    pub fn new(time_resolution_hours: u32, bin_width: f64, max_category: Category) -> Self {
        Self {
            time_resolution_hours,
            bin_width,
            max_category,
        }
    }

    /// Set the sampling interval in hours
    pub fn with_time_resolution_hours(mut self, hours: u32) -> Self {
        self.time_resolution_hours = hours;
        self
    }

    /// Set the category bin width
    pub fn with_bin_width(mut self, bin_width: f64) -> Self {
        self.bin_width = bin_width;
        self
    }

    /// Set the category ceiling
    pub fn with_max_category(mut self, max_category: Category) -> Self {
        self.max_category = max_category;
        self
    }

    /// Check that the configuration can drive a categorization
    ///
    /// A resolution that does not divide 24 is accepted; see
    /// [`divides_day`](Self::divides_day).
    pub fn validate(&self) -> Result<()> {
        if self.time_resolution_hours == 0 {
            return Err(Error::InvalidConfiguration(
                "time_resolution_hours must be positive".to_string(),
            ));
        }
        if !self.bin_width.is_finite() || self.bin_width <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "bin_width must be a positive finite number, got {}",
                self.bin_width
            )));
        }
        Ok(())
    }

    /// Whether a whole number of timesteps makes up one day
    pub fn divides_day(&self) -> bool {
        self.time_resolution_hours != 0 && HOURS_PER_DAY % self.time_resolution_hours == 0
    }

    /// Log settings that are accepted but probably unintended
    pub fn log_warnings(&self) {
        if !self.divides_day() {
            warn!(
                time_resolution_hours = self.time_resolution_hours,
                steps_per_day = self.steps_per_day(),
                "time resolution does not divide a day evenly; steps per day is truncated"
            );
        }
    }

    /// Number of whole timesteps in one day
    ///
    /// Zero when the resolution exceeds a day, in which case every run is
    /// at least two "days" long.
    pub fn steps_per_day(&self) -> usize {
        if self.time_resolution_hours == 0 {
            return 0;
        }
        (HOURS_PER_DAY / self.time_resolution_hours) as usize
    }

    /// Convert a run length in timesteps to hours
    pub fn steps_to_hours(&self, steps: usize) -> u64 {
        steps as u64 * u64::from(self.time_resolution_hours)
    }

    /// Parse and validate a JSON document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        config.log_warnings();
        Ok(config)
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
