//! Core traits for categorization
//!
//! Two layers:
//! - [`CategoryStage`]: a pure category-to-category transform (collapse,
//!   duration adjustment)
//! - [`CategorizationScheme`]: a full IVT-to-result pipeline

use crate::types::CategorizationResult;
use arcat_core::{CategorizationConfig, Category, Result};
use num_traits::Float;

/// Properties of a stage that don't depend on the data
pub trait StageProperties {
    /// Short name used in logs
    fn stage_name(&self) -> &'static str;
}

/// A pure transform of a category sequence
///
/// Implementations must return a sequence of the same length and must not
/// produce values outside `[0, max_category]` when given values inside it.
pub trait CategoryStage: StageProperties {
    /// Produce the transformed sequence, leaving the input untouched
    fn apply(&self, categories: &[Category]) -> Vec<Category>;
}

/// Properties of a scheme that don't depend on the data
pub trait SchemeProperties {
    /// Name of the scheme (`"event"` or `"evolution"`)
    fn scheme_name(&self) -> &'static str;

    /// Whether each event is collapsed to its peak category before the
    /// duration rule runs
    fn collapses_events(&self) -> bool;

    /// Configuration the scheme runs with
    fn config(&self) -> &CategorizationConfig;
}

/// A complete categorization pipeline over one time series
///
/// Implementations are stateless: separate calls share nothing and may run
/// on any thread in any order.
pub trait CategorizationScheme<T: Float>: SchemeProperties + Send + Sync {
    /// Validate the configuration and the input, then categorize
    fn categorize(&self, ivt: &[T]) -> Result<CategorizationResult<T>>;

    /// Categorize several independent series with the same configuration
    ///
    /// Default implementation processes sequentially and stops at the first
    /// failing series.
    fn categorize_batch(&self, series: &[&[T]]) -> Result<Vec<CategorizationResult<T>>> {
        series.iter().map(|ivt| self.categorize(ivt)).collect()
    }
}
