//! Fan-out over independent work items
//!
//! Solves on distinct buffers share no state, so a batch can be spread over
//! the rayon pool. Without the `rayon` feature the same call runs in order on
//! the current thread.

/// Whether [`map_independent`] runs on the rayon pool
pub fn is_parallel_available() -> bool {
    cfg!(feature = "rayon")
}

/// Apply `f` to every item, keeping input order in the output
#[cfg(feature = "rayon")]
pub fn map_independent<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    use rayon::prelude::*;
    items.par_iter().map(f).collect()
}

/// Apply `f` to every item, keeping input order in the output
#[cfg(not(feature = "rayon"))]
pub fn map_independent<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    items.iter().map(f).collect()
}
