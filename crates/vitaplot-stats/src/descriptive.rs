use statrs::statistics::Statistics;

/// Descriptive statistics summarizing a sample.
///
/// Dispersion measures use the population convention (denominator `n`),
/// the same convention as the maximum-likelihood normal fit.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DescriptiveStats {
    /// The number of values in the sample.
    pub count: usize,
    /// The minimum value in the sample.
    pub min: f64,
    /// The maximum value in the sample.
    pub max: f64,
    /// The arithmetic mean of the sample.
    pub mean: f64,
    /// The median of the sample (average of the two middle values for even counts).
    pub median: f64,
    /// The population variance of the sample.
    pub variance: f64,
    /// The population standard deviation of the sample.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort the values internally before computing order
    /// statistics. Moments are computed in input order.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the sample contains at least one value
    /// * `None` - if the sample is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use vitaplot_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert!((stats.mean - 3.0).abs() < 1e-12);
    /// assert!((stats.variance - 2.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        let (mean, variance) = mean_and_variance(&values)?;
        values.sort_by(f64::total_cmp);
        Some(Self::with_moments(&values, mean, variance))
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (mean, variance) = mean_and_variance(sorted_values)?;
        Some(Self::with_moments(sorted_values, mean, variance))
    }

    /// `sorted_values` must be non-empty and sorted.
    fn with_moments(sorted_values: &[f64], mean: f64, variance: f64) -> Self {
        let count = sorted_values.len();
        let median = if count % 2 == 0 {
            f64::midpoint(sorted_values[count / 2 - 1], sorted_values[count / 2])
        } else {
            sorted_values[count / 2]
        };

        Self {
            count,
            min: sorted_values[0],
            max: sorted_values[count - 1],
            mean,
            median,
            variance,
            std_dev: variance.sqrt(),
        }
    }
}

/// Returns the arithmetic mean and population variance of `values`.
///
/// Returns `None` for an empty slice.
///
/// # Examples
///
/// ```
/// # use vitaplot_stats::descriptive::mean_and_variance;
/// assert_eq!(mean_and_variance(&[2.0, 4.0]), Some((3.0, 1.0)));
/// assert_eq!(mean_and_variance(&[]), None);
/// ```
#[must_use]
pub fn mean_and_variance(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    Some((
        Statistics::mean(values),
        Statistics::population_variance(values),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        assert!(DescriptiveStats::new(Vec::<f64>::new()).is_none());
    }

    #[test]
    fn test_single_value() {
        let stats = DescriptiveStats::new([42.0]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.min, 42.0);
        assert_eq!(stats.max, 42.0);
        assert_eq!(stats.median, 42.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_even_count_median() {
        let stats = DescriptiveStats::new([4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.median, 2.5);
        assert!((stats.mean - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_population_convention() {
        let stats = DescriptiveStats::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(stats.variance, 2.0);
        assert!((stats.std_dev - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "values must be sorted")]
    fn test_from_sorted_rejects_unsorted() {
        let _ = DescriptiveStats::from_sorted(&[3.0, 1.0]);
    }
}
