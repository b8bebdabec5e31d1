//! Rayon-based parallelisation for grid evaluation.
//!
//! Sweep cells are independent, so a grid can be split by rows and filled
//! concurrently without any change to the result: each cell is computed by
//! exactly the same expression as in the serial path.

use pricer_core::types::{PricingError, PricingResult};
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cells per Rayon task.
///
/// Empirically tuned for cache efficiency.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Minimum grid size, in cells, before parallel evaluation is used.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Configuration for parallel execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParallelConfig {
    /// Cells per Rayon task
    pub batch_size: usize,
    /// Minimum cells before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a validated parallel configuration.
    ///
    /// # Errors
    ///
    /// `ConfigurationMisuse` when `batch_size` is zero.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> PricingResult<Self> {
        let config = Self {
            batch_size,
            parallel_threshold,
        };
        config.validate()?;
        Ok(config)
    }

    /// Configuration that never parallelises.
    pub fn serial() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: usize::MAX,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> PricingResult<()> {
        if self.batch_size == 0 {
            return Err(PricingError::configuration_misuse(
                "batch_size must be positive",
            ));
        }
        Ok(())
    }

    /// Returns whether to use parallel processing for the given cell count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }

    /// Rows per Rayon task for a grid with `cols` columns.
    #[inline]
    pub fn rows_per_task(&self, cols: usize) -> usize {
        (self.batch_size / cols.max(1)).max(1)
    }
}

/// Parallel map preserving input order.
pub fn parallel_map<T, R, F>(items: &[T], batch_size: usize, mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    items
        .par_iter()
        .with_min_len(batch_size.max(1))
        .map(mapper)
        .collect()
}

/// Fills a row-major buffer of width `cols` in parallel, one row at a time.
///
/// `fill_row(i, row)` must write every element of `row`.
pub fn fill_rows<F>(values: &mut [f64], cols: usize, rows_per_task: usize, fill_row: F)
where
    F: Fn(usize, &mut [f64]) + Sync + Send,
{
    if cols == 0 {
        return;
    }
    values
        .par_chunks_mut(cols)
        .enumerate()
        .with_min_len(rows_per_task.max(1))
        .for_each(|(i, row)| fill_row(i, row));
}
