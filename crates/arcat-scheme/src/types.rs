//! Result types for categorization

use arcat_core::{nonzero_runs, CategorizationConfig, Category, Segment};
use num_traits::Float;
use std::fmt;

/// One atmospheric river event in the final category sequence
#[derive(Debug, Clone, PartialEq)]
pub struct ArEvent<T> {
    /// Timesteps covered by the event
    pub segment: Segment,
    /// Highest final category reached during the event
    pub peak_category: Category,
    /// Total IVT accumulated over the event
    pub total_ivt: T,
    /// Highest single-timestep IVT during the event
    pub peak_ivt: T,
}

impl<T> ArEvent<T> {
    /// Event length in timesteps
    pub fn duration_steps(&self) -> usize {
        self.segment.len()
    }

    /// Event length in hours for the given sampling interval
    pub fn duration_hours(&self, config: &CategorizationConfig) -> u64 {
        config.steps_to_hours(self.segment.len())
    }
}

impl<T: fmt::Display> fmt::Display for ArEvent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AR {{ steps: [{}, {}), category: {}, peak IVT: {:.1}, total IVT: {:.1} }}",
            self.segment.start, self.segment.end, self.peak_category, self.peak_ivt, self.total_ivt
        )
    }
}

/// The four parallel sequences produced by a categorization scheme
///
/// All sequences have the length of the input series. Wherever the final
/// category is 0, the cumulative and event IVT are 0 as well.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorizationResult<T> {
    categories: Vec<Category>,
    cumulative_ivt: Vec<T>,
    event_ivt: Vec<T>,
    durations: Vec<T>,
}

impl<T: Float> CategorizationResult<T> {
    pub(crate) fn new(
        categories: Vec<Category>,
        cumulative_ivt: Vec<T>,
        event_ivt: Vec<T>,
        durations: Vec<T>,
    ) -> Self {
        debug_assert_eq!(categories.len(), cumulative_ivt.len());
        debug_assert_eq!(categories.len(), event_ivt.len());
        debug_assert_eq!(categories.len(), durations.len());
        Self {
            categories,
            cumulative_ivt,
            event_ivt,
            durations,
        }
    }

    /// Final category per timestep
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Running IVT total within each event, 0 outside events
    pub fn cumulative_ivt(&self) -> &[T] {
        &self.cumulative_ivt
    }

    /// Original IVT during events, 0 outside events
    pub fn event_ivt(&self) -> &[T] {
        &self.event_ivt
    }

    /// Length (in timesteps) of the run each timestep belonged to when the
    /// duration rule was applied, 0 outside runs
    pub fn durations(&self) -> &[T] {
        &self.durations
    }

    /// Number of timesteps
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the result covers no timesteps
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// `true` at every timestep inside a final event
    pub fn mask(&self) -> Vec<bool> {
        self.categories.iter().map(|&c| c > 0).collect()
    }

    /// Highest final category, 0 when there are no events
    pub fn max_category(&self) -> Category {
        self.categories.iter().copied().max().unwrap_or(0)
    }

    /// Summarize every maximal run of the final categories
    pub fn events(&self) -> Vec<ArEvent<T>> {
        nonzero_runs(&self.categories)
            .map(|segment| ArEvent {
                segment,
                peak_category: segment
                    .slice(&self.categories)
                    .iter()
                    .copied()
                    .fold(0, Category::max),
                total_ivt: self.cumulative_ivt[segment.end - 1],
                peak_ivt: segment
                    .slice(&self.event_ivt)
                    .iter()
                    .copied()
                    .fold(T::zero(), T::max),
            })
            .collect()
    }

    /// Number of final events
    pub fn event_count(&self) -> usize {
        nonzero_runs(&self.categories).count()
    }

    /// Take ownership of `(categories, cumulative_ivt, event_ivt, durations)`
    pub fn into_parts(self) -> (Vec<Category>, Vec<T>, Vec<T>, Vec<T>) {
        (
            self.categories,
            self.cumulative_ivt,
            self.event_ivt,
            self.durations,
        )
    }
}

impl<T: Float + fmt::Display> fmt::Display for CategorizationResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Categorization Result:")?;
        writeln!(f, "  Timesteps: {}", self.len())?;
        writeln!(f, "  Peak category: {}", self.max_category())?;

        let events = self.events();
        writeln!(f, "  Events: {}", events.len())?;
        for event in &events {
            writeln!(f, "    {}", event)?;
        }

        Ok(())
    }
}
