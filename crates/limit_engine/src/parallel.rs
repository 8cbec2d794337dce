//! Rayon parallelisation gating.
//!
//! Per-customer evaluation has no cross-record dependency, so batches are
//! embarrassingly parallel. Small batches stay sequential: below the
//! threshold the thread-pool overhead outweighs the arithmetic.

/// Minimum batch size before Rayon is engaged.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// Configuration for parallel batch evaluation.
#[derive(Clone, Copy, Debug)]
pub struct ParallelConfig {
    /// Minimum number of profiles before using parallelism.
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    /// Returns whether to use parallel processing for the given batch size.
    #[inline]
    pub fn should_parallelize(&self, n_profiles: usize) -> bool {
        n_profiles >= self.parallel_threshold
    }
}
