//! Input validation for intensity sequences

use crate::error::{Error, Result};
use num_traits::Float;

/// Check that every intensity is finite and non-negative
///
/// Reports the first offending index. An empty sequence is valid.
pub fn validate_intensity<T: Float>(values: &[T]) -> Result<()> {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(Error::non_finite(index));
        }
        if value < T::zero() {
            return Err(Error::negative_intensity(
                index,
                value.to_f64().unwrap_or(f64::NAN),
            ));
        }
    }
    Ok(())
}

/// Check that a companion sequence matches the intensity length
pub fn ensure_same_len(context: &str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::size_mismatch(context, expected, actual));
    }
    Ok(())
}
