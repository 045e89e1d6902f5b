//! Event-gated intensity traces
//!
//! Given the original intensity and an event mask, [`cumulative_reset`]
//! produces the running IVT total within each event, zero outside events,
//! and [`gate_by_mask`] passes intensity through only during events.

use arcat_core::{ensure_same_len, true_runs, Result};
use num_traits::Float;

/// Running sum of `values` that restarts at every `false` in `mask`
///
/// The output at `i` is the total after processing `i`: a masked-out
/// timestep reports 0 and the first timestep of the next event reports
/// exactly its own value.
///
/// ```rust
/// use arcat_scheme::cumulative_reset;
///
/// let total = cumulative_reset(&[100.0, 100.0, 0.0, 50.0], &[true, true, false, true]).unwrap();
/// assert_eq!(total, vec![100.0, 200.0, 0.0, 50.0]);
/// ```
pub fn cumulative_reset<T: Float>(values: &[T], mask: &[bool]) -> Result<Vec<T>> {
    ensure_same_len("cumulative mask", values.len(), mask.len())?;

    let mut totals = vec![T::zero(); values.len()];
    for run in true_runs(mask) {
        let mut running = T::zero();
        for (total, &value) in totals[run.range()].iter_mut().zip(run.slice(values)) {
            running = running + value;
            *total = running;
        }
    }
    Ok(totals)
}

/// `values` where `mask` is set, zero elsewhere
pub fn gate_by_mask<T: Float>(values: &[T], mask: &[bool]) -> Result<Vec<T>> {
    ensure_same_len("event mask", values.len(), mask.len())?;

    Ok(values
        .iter()
        .zip(mask)
        .map(|(&value, &set)| if set { value } else { T::zero() })
        .collect())
}
