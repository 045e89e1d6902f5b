//! Common test utilities for arcat-grid tests

#![allow(dead_code)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Install a fmt subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Synthetic IVT field with persistent AR-like episodes
///
/// Elements follow a two-state chain in buffer order so runs of several
/// values appear; values are quiet (< 250) or AR strength (250..1800).
pub fn synthetic_field(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut active = false;
    (0..size)
        .map(|_| {
            if rng.gen_bool(0.2) {
                active = !active;
            }
            if active {
                rng.gen_range(250.0..1800.0)
            } else {
                rng.gen_range(0.0..250.0)
            }
        })
        .collect()
}
