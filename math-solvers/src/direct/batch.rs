//! Batch solving of independent systems
//!
//! Constraint solvers typically produce many tiny systems per frame. Each one
//! is factored on its own copy of the matrix, so systems never share a buffer
//! and can be solved concurrently.

use super::lu::solve_in_place_with_config;
use crate::config::LuConfig;
use crate::error::Result;
use crate::parallel::{is_parallel_available, map_independent};
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Solve every `(A, b)` pair, in parallel when the `rayon` feature is enabled
///
/// Results are returned in input order; one failing system does not affect
/// the others.
pub fn solve_batch<T: RealField>(
    systems: &[(Array2<T>, Array1<T>)],
    config: &LuConfig,
) -> Vec<Result<Array1<T>>> {
    let results = map_independent(systems, |(a, b)| {
        let mut work = a.clone();
        solve_in_place_with_config(&mut work, b, config)
    });

    let failures = results.iter().filter(|r| r.is_err()).count();
    log::info!(
        "Solved batch of {} systems ({} failed, parallel: {})",
        systems.len(),
        failures,
        is_parallel_available()
    );

    results
}
