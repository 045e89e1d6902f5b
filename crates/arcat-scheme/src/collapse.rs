//! Peak collapse for the event-based scheme
//!
//! Every maximal nonzero run takes the value of its largest element, so the
//! whole event reports its peak category:
//!
//! ```rust
//! use arcat_scheme::{CategoryStage, PeakCollapser};
//!
//! assert_eq!(PeakCollapser.apply(&[1, 2, 3, 0, 2, 1]), vec![3, 3, 3, 0, 2, 2]);
//! ```

use crate::traits::{CategoryStage, StageProperties};
use arcat_core::{nonzero_runs, Category};

/// Replaces each event with its peak category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeakCollapser;

impl StageProperties for PeakCollapser {
    fn stage_name(&self) -> &'static str {
        "peak-collapse"
    }
}

impl CategoryStage for PeakCollapser {
    fn apply(&self, categories: &[Category]) -> Vec<Category> {
        let mut collapsed = categories.to_vec();
        for run in nonzero_runs(categories) {
            let peak = run.slice(categories).iter().copied().fold(0, Category::max);
            collapsed[run.range()].fill(peak);
        }
        collapsed
    }
}
