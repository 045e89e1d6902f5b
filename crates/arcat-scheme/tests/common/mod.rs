//! Common test utilities for arcat-scheme tests

#![allow(dead_code)]

use arcat_scheme::CategorizationResult;

/// Install a fmt subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `n` timesteps of constant IVT
pub fn constant(value: f64, n: usize) -> Vec<f64> {
    vec![value; n]
}

/// Concatenate IVT pieces into one series
pub fn series(pieces: &[&[f64]]) -> Vec<f64> {
    pieces.iter().flat_map(|piece| piece.iter().copied()).collect()
}

/// Assert every output of a result has the expected length
pub fn assert_lengths(result: &CategorizationResult<f64>, expected: usize) {
    assert_eq!(result.len(), expected);
    assert_eq!(result.categories().len(), expected);
    assert_eq!(result.cumulative_ivt().len(), expected);
    assert_eq!(result.event_ivt().len(), expected);
    assert_eq!(result.durations().len(), expected);
}
