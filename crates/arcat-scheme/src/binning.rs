//! Fixed-width IVT binning
//!
//! Maps each intensity to `floor(ivt / bin_width)`, clipped into
//! `[0, max_category]`. With the default ladder (250 kg m⁻¹ s⁻¹ bins):
//!
//! | IVT       | Category |
//! |-----------|----------|
//! | 0–249     | 0        |
//! | 250–499   | 1        |
//! | 500–749   | 2        |
//! | ...       | ...      |
//! | ≥ 1500    | 6        |

use arcat_core::{CategorizationConfig, Category};
use num_traits::Float;

/// Elementwise IVT-to-category binner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binner {
    bin_width: f64,
    max_category: Category,
}

impl Binner {
    /// Create a binner with explicit bin width and ceiling
    pub fn new(bin_width: f64, max_category: Category) -> Self {
        Self {
            bin_width,
            max_category,
        }
    }

    /// Create a binner from a categorization configuration
    pub fn from_config(config: &CategorizationConfig) -> Self {
        Self::new(config.bin_width, config.max_category)
    }

    /// Width of one category bin
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Highest category produced
    pub fn max_category(&self) -> Category {
        self.max_category
    }

    /// Category for a single intensity value
    ///
    /// Negative and NaN inputs land in category 0; callers that need to
    /// reject them validate before binning.
    #[inline]
    pub fn category_of<T: Float>(&self, value: T) -> Category {
        let bin = (value.to_f64().unwrap_or(f64::NAN) / self.bin_width).floor();
        if bin.is_nan() || bin <= 0.0 {
            0
        } else if bin >= f64::from(self.max_category) {
            self.max_category
        } else {
            bin as Category
        }
    }

    /// Bin a whole intensity sequence
    pub fn bin<T: Float>(&self, values: &[T]) -> Vec<Category> {
        values.iter().map(|&v| self.category_of(v)).collect()
    }
}

impl Default for Binner {
    fn default() -> Self {
        Self::from_config(&CategorizationConfig::default())
    }
}
