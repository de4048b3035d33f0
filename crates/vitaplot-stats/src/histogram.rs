/// Errors produced while building a histogram.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum HistogramError {
    #[display("cannot build a histogram from an empty sample")]
    EmptySample,
    #[display("histogram must have at least one bin")]
    NoBins,
    #[display("histogram cannot have more than {max} bins, got {requested}")]
    TooManyBins { requested: usize, max: usize },
    #[display("sample contains a non-finite value at index {index}: {value}")]
    NonFinite { index: usize, value: f64 },
}

/// A density-normalized histogram with equal-width bins.
///
/// The bins span `[min, max]` of the sample. Each bin is half-open `[lo, hi)`
/// except the last one, which also includes its right edge so that the
/// maximum value is counted. Bar heights are scaled so that the total area
/// of the histogram is 1, which allows direct comparison with a probability
/// density curve.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DensityHistogram {
    /// Bin edges in ascending order. Always `num_bins + 1` entries.
    pub edges: Vec<f64>,
    /// Number of sample values that fell into each bin.
    pub counts: Vec<u64>,
    /// Density of each bin: `count / (n * width)`.
    pub densities: Vec<f64>,
}

impl DensityHistogram {
    /// The largest number of bins [`Self::new`] accepts.
    pub const MAX_BINS: usize = 10_000;

    /// Builds a histogram of `values` with `num_bins` equal-width bins.
    ///
    /// When every value is identical the range is widened to
    /// `[value - 0.5, value + 0.5]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vitaplot_stats::histogram::DensityHistogram;
    /// let histogram = DensityHistogram::new(&[0.0, 1.0, 2.0, 3.0], 3).unwrap();
    /// assert_eq!(histogram.edges, vec![0.0, 1.0, 2.0, 3.0]);
    /// // The last bin includes its right edge
    /// assert_eq!(histogram.counts, vec![1, 1, 2]);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation,
        clippy::float_cmp
    )]
    pub fn new(values: &[f64], num_bins: usize) -> Result<Self, HistogramError> {
        if values.is_empty() {
            return Err(HistogramError::EmptySample);
        }
        if num_bins == 0 {
            return Err(HistogramError::NoBins);
        }
        if num_bins > Self::MAX_BINS {
            return Err(HistogramError::TooManyBins {
                requested: num_bins,
                max: Self::MAX_BINS,
            });
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(HistogramError::NonFinite { index, value });
        }

        let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        // Each edge is computed from its index to avoid accumulating rounding errors
        let span = hi - lo;
        let mut edges = (0..=num_bins)
            .map(|i| lo + span * (i as f64) / (num_bins as f64))
            .collect::<Vec<_>>();
        edges[num_bins] = hi;

        let mut counts = vec![0; num_bins];
        for &value in values {
            let position = (value - lo) / span * num_bins as f64;
            let mut idx = (position.max(0.0).floor() as usize).min(num_bins - 1);
            // Correct for rounding at bin boundaries
            if value < edges[idx] && idx > 0 {
                idx -= 1;
            } else if idx + 1 < num_bins && value >= edges[idx + 1] {
                idx += 1;
            }
            counts[idx] += 1;
        }

        let n = values.len() as f64;
        let densities = counts
            .iter()
            .zip(edges.windows(2))
            .map(|(&count, edge)| count as f64 / (n * (edge[1] - edge[0])))
            .collect();

        Ok(Self {
            edges,
            counts,
            densities,
        })
    }

    /// Returns the number of bins.
    #[must_use]
    pub fn num_bins(&self) -> usize {
        self.counts.len()
    }

    /// Returns the largest bin density, or 0 for a histogram without bins.
    #[must_use]
    pub fn max_density(&self) -> f64 {
        self.densities.iter().copied().fold(0.0, f64::max)
    }

    /// Returns the total area under the histogram.
    ///
    /// This is 1 (up to rounding) for every histogram built by [`Self::new`].
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.densities
            .iter()
            .zip(self.edges.windows(2))
            .map(|(density, edge)| density * (edge[1] - edge[0]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        assert_eq!(
            DensityHistogram::new(&[], 15),
            Err(HistogramError::EmptySample)
        );
    }

    #[test]
    fn test_zero_bins() {
        assert_eq!(
            DensityHistogram::new(&[1.0], 0),
            Err(HistogramError::NoBins)
        );
    }

    #[test]
    fn test_too_many_bins() {
        assert_eq!(
            DensityHistogram::new(&[1.0, 2.0], usize::MAX),
            Err(HistogramError::TooManyBins {
                requested: usize::MAX,
                max: DensityHistogram::MAX_BINS,
            })
        );
        let histogram = DensityHistogram::new(&[1.0, 2.0], DensityHistogram::MAX_BINS).unwrap();
        assert_eq!(histogram.num_bins(), DensityHistogram::MAX_BINS);
    }

    #[test]
    fn test_non_finite_value() {
        let err = DensityHistogram::new(&[1.0, f64::NAN], 3).unwrap_err();
        assert!(matches!(err, HistogramError::NonFinite { index: 1, .. }));
    }

    #[test]
    fn test_identical_values_widen_range() {
        let histogram = DensityHistogram::new(&[5.0, 5.0, 5.0], 2).unwrap();
        assert_eq!(histogram.edges, vec![4.5, 5.0, 5.5]);
        // 5.0 sits on the inner edge and belongs to the upper bin
        assert_eq!(histogram.counts, vec![0, 3]);
        assert!((histogram.total_area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_every_value_counted() {
        let values = (0..100).map(|i| f64::from(i) * 0.37 - 12.0).collect::<Vec<_>>();
        let histogram = DensityHistogram::new(&values, 15).unwrap();
        assert_eq!(histogram.num_bins(), 15);
        assert_eq!(histogram.edges.len(), 16);
        assert_eq!(histogram.counts.iter().sum::<u64>(), 100);
        assert!((histogram.total_area() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_edges_span_sample_range() {
        let values = [3.0, -1.0, 7.5, 2.0];
        let histogram = DensityHistogram::new(&values, 4).unwrap();
        assert_eq!(histogram.edges.first(), Some(&-1.0));
        assert_eq!(histogram.edges.last(), Some(&7.5));
    }

    #[test]
    fn test_density_values() {
        // width 1, n = 4
        let histogram = DensityHistogram::new(&[0.0, 0.5, 1.5, 2.0], 2).unwrap();
        assert_eq!(histogram.counts, vec![2, 2]);
        assert_eq!(histogram.densities, vec![0.5, 0.5]);
        assert_eq!(histogram.max_density(), 0.5);
    }
}
