/// A single fixed-width histogram bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramBucket {
    /// Human-readable `"{low}-{high}"` range, bounds rounded to whole
    /// units.
    pub label: String,
    /// Number of values falling in this bucket.
    pub count: u64,
}

/// Buckets `values` into `bin_count` equal-width bins over `[min, max]`.
///
/// The maximum value is kept inside the last bucket (closed interval at the
/// top), so for non-empty input every value lands in exactly one of the
/// `bin_count` buckets and the counts sum to the input length. If all
/// values are equal the bin width collapses to zero and everything counts
/// toward bucket 0.
///
/// # Panics
///
/// Panics if `bin_count` is zero.
///
/// # Examples
///
/// ```
/// # use tienda_charts::histogram::histogram;
/// let values = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
/// let buckets = histogram(&values, 5);
/// assert_eq!(buckets.len(), 5);
/// assert_eq!(buckets.iter().map(|b| b.count).sum::<u64>(), 10);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
#[must_use]
pub fn histogram(values: &[f64], bin_count: usize) -> Vec<HistogramBucket> {
    assert!(bin_count >= 1, "bin_count must be at least 1");
    if values.is_empty() {
        return vec![];
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let bin_width = (max - min) / bin_count as f64;

    let mut buckets = (0..bin_count)
        .map(|bin_idx| {
            let low = min + bin_idx as f64 * bin_width;
            let high = min + (bin_idx + 1) as f64 * bin_width;
            HistogramBucket {
                label: format!("{low:.0}-{high:.0}"),
                count: 0,
            }
        })
        .collect::<Vec<_>>();

    for &value in values {
        let bin_idx = if bin_width == 0.0 {
            // All values equal; everything counts toward the first bucket.
            0
        } else {
            let raw = ((value - min) / bin_width).floor() as usize;
            // Clamp so the maximum value stays inside the last bucket.
            raw.min(bin_count - 1)
        };
        buckets[bin_idx].count += 1;
    }

    buckets
}
