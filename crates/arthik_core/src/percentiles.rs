//! Nearest-rank percentile extraction for Monte Carlo samples
//!
//! Percentiles are read by index `floor(n * p)` into the sorted sample, not
//! by linear interpolation. Index 0 is the minimum and `n - 1` the maximum.
//! Downstream consumers depend on these exact values, so this stays
//! nearest-rank even though interpolation would be statistically nicer.

use crate::model::PercentileBand;

/// Index of the `pct` percentile (0.0..=1.0) in a sample of `len` values.
#[inline]
pub fn nearest_rank_index(len: usize, pct: f64) -> usize {
    debug_assert!(len > 0);
    ((len as f64 * pct).floor() as usize).min(len - 1)
}

/// Read the `pct` percentile from an ascending-sorted sample.
#[inline]
pub fn nearest_rank(sorted: &[f64], pct: f64) -> f64 {
    sorted[nearest_rank_index(sorted.len(), pct)]
}

/// Extract the standard p10/p25/p50/p75/p90 band from a sorted sample.
pub fn band_from_sorted(sorted: &[f64]) -> PercentileBand {
    PercentileBand {
        p10: nearest_rank(sorted, 0.10),
        p25: nearest_rank(sorted, 0.25),
        p50: nearest_rank(sorted, 0.50),
        p75: nearest_rank(sorted, 0.75),
        p90: nearest_rank(sorted, 0.90),
    }
}
