//! Duration-based category adjustment
//!
//! Each maximal nonzero run is classified by its length relative to one
//! day and shifted as a whole:
//!
//! - shorter than one day: every value in the run drops by one
//! - one to two days: unchanged
//! - two days or longer: every value in the run rises by one
//!
//! The result is then clipped to `[0, max_category]`. A short run of
//! category 1 therefore disappears entirely.

use crate::traits::{CategoryStage, StageProperties};
use arcat_core::{nonzero_runs, CategorizationConfig, Category, Segment};
use std::fmt;

/// How a run's length compares to the one- and two-day thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationClass {
    /// Fewer than one day of timesteps
    Short,
    /// At least one day but less than two
    Moderate,
    /// Two days or more
    Long,
}

impl DurationClass {
    /// Apply this class's shift to one category value (before clipping)
    #[inline]
    pub fn shift(self, category: Category) -> Category {
        match self {
            DurationClass::Short => category.saturating_sub(1),
            DurationClass::Moderate => category,
            DurationClass::Long => category.saturating_add(1),
        }
    }
}

impl fmt::Display for DurationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationClass::Short => write!(f, "short"),
            DurationClass::Moderate => write!(f, "moderate"),
            DurationClass::Long => write!(f, "long"),
        }
    }
}

/// One-day / two-day duration thresholds in timesteps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationRule {
    steps_per_day: usize,
}

impl DurationRule {
    /// Create a rule for the given number of timesteps per day
    pub fn new(steps_per_day: usize) -> Self {
        Self { steps_per_day }
    }

    /// Create a rule from a categorization configuration
    pub fn from_config(config: &CategorizationConfig) -> Self {
        Self::new(config.steps_per_day())
    }

    /// Timesteps in one day
    pub fn steps_per_day(&self) -> usize {
        self.steps_per_day
    }

    /// Classify a run of `duration` timesteps
    pub fn classify(&self, duration: usize) -> DurationClass {
        if duration < self.steps_per_day {
            DurationClass::Short
        } else if duration >= 2 * self.steps_per_day {
            DurationClass::Long
        } else {
            DurationClass::Moderate
        }
    }
}

/// Output of [`DurationAdjuster::adjust`]
#[derive(Debug, Clone, PartialEq)]
pub struct DurationAdjustment {
    /// Adjusted and clipped categories
    pub categories: Vec<Category>,
    /// Length of the enclosing run at each timestep, 0 outside runs
    pub durations: Vec<usize>,
    /// Every run found in the input with its classification
    pub runs: Vec<(Segment, DurationClass)>,
}

impl DurationAdjustment {
    /// Number of runs in a given class
    pub fn count(&self, class: DurationClass) -> usize {
        self.runs.iter().filter(|(_, c)| *c == class).count()
    }
}

/// Applies the duration rule to every run of a category sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationAdjuster {
    rule: DurationRule,
    max_category: Category,
}

impl DurationAdjuster {
    /// Create an adjuster from a rule and a category ceiling
    pub fn new(rule: DurationRule, max_category: Category) -> Self {
        Self { rule, max_category }
    }

    /// Create an adjuster from a categorization configuration
    pub fn from_config(config: &CategorizationConfig) -> Self {
        Self::new(DurationRule::from_config(config), config.max_category)
    }

    /// The thresholds in use
    pub fn rule(&self) -> &DurationRule {
        &self.rule
    }

    /// Adjust every run and record per-timestep durations
    ///
    /// Runs are taken from `categories` as given: adjacent runs separated
    /// by a single zero are adjusted independently.
    pub fn adjust(&self, categories: &[Category]) -> DurationAdjustment {
        let mut adjusted = categories.to_vec();
        let mut durations = vec![0usize; categories.len()];
        let mut runs = Vec::new();

        for run in nonzero_runs(categories) {
            let duration = run.len();
            let class = self.rule.classify(duration);

            for value in &mut adjusted[run.range()] {
                *value = class.shift(*value);
            }
            durations[run.range()].fill(duration);
            runs.push((run, class));
        }

        for value in &mut adjusted {
            *value = (*value).min(self.max_category);
        }

        DurationAdjustment {
            categories: adjusted,
            durations,
            runs,
        }
    }
}

impl StageProperties for DurationAdjuster {
    fn stage_name(&self) -> &'static str {
        "duration-adjust"
    }
}

impl CategoryStage for DurationAdjuster {
    fn apply(&self, categories: &[Category]) -> Vec<Category> {
        self.adjust(categories).categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six_hourly() -> DurationAdjuster {
        DurationAdjuster::from_config(&CategorizationConfig::default())
    }

    #[test]
    fn test_classify_thresholds() {
        let rule = DurationRule::new(4);
        assert_eq!(rule.classify(1), DurationClass::Short);
        assert_eq!(rule.classify(3), DurationClass::Short);
        assert_eq!(rule.classify(4), DurationClass::Moderate);
        assert_eq!(rule.classify(7), DurationClass::Moderate);
        assert_eq!(rule.classify(8), DurationClass::Long);
        assert_eq!(rule.classify(40), DurationClass::Long);
    }

    #[test]
    fn test_zero_steps_per_day_is_always_long() {
        let rule = DurationRule::new(0);
        assert_eq!(rule.classify(1), DurationClass::Long);
    }

    #[test]
    fn test_short_run_downgraded_away() {
        let result = six_hourly().adjust(&[1, 1, 0]);
        assert_eq!(result.categories, vec![0, 0, 0]);
        assert_eq!(result.durations, vec![2, 2, 0]);
        assert_eq!(result.count(DurationClass::Short), 1);
    }

    #[test]
    fn test_moderate_run_unchanged() {
        let input = [0, 2, 3, 3, 2, 2, 0];
        let result = six_hourly().adjust(&input);
        assert_eq!(result.categories, input.to_vec());
        assert_eq!(result.durations, vec![0, 5, 5, 5, 5, 5, 0]);
    }

    #[test]
    fn test_long_run_upgraded_to_end() {
        let result = six_hourly().adjust(&[3; 12]);
        assert_eq!(result.categories, vec![4; 12]);
        assert_eq!(result.durations, vec![12; 12]);
        assert_eq!(result.runs, vec![(Segment::new(0, 12), DurationClass::Long)]);
    }

    #[test]
    fn test_upgrade_clipped_to_max_category() {
        let result = six_hourly().adjust(&[6, 5, 6, 6, 6, 6, 6, 6]);
        assert_eq!(result.categories, vec![6, 6, 6, 6, 6, 6, 6, 6]);
    }

    #[test]
    fn test_each_run_adjusted_independently() {
        let mut input = vec![2, 2];
        input.push(0);
        input.extend([1; 9]);
        let result = six_hourly().adjust(&input);

        let mut expected = vec![1, 1, 0];
        expected.extend([2; 9]);
        assert_eq!(result.categories, expected);
        assert_eq!(result.runs.len(), 2);
    }

    #[test]
    fn test_all_zero_unchanged() {
        let result = six_hourly().adjust(&[0, 0, 0, 0]);
        assert_eq!(result.categories, vec![0, 0, 0, 0]);
        assert_eq!(result.durations, vec![0, 0, 0, 0]);
        assert!(result.runs.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let result = six_hourly().adjust(&[]);
        assert!(result.categories.is_empty());
        assert!(result.durations.is_empty());
    }

    #[test]
    fn test_apply_matches_adjust() {
        let adjuster = six_hourly();
        let input = [0, 1, 2, 2, 1, 0, 3];
        assert_eq!(adjuster.apply(&input), adjuster.adjust(&input).categories);
        assert_eq!(adjuster.stage_name(), "duration-adjust");
    }
}
