use statrs::{
    distribution::{Continuous, Normal},
    statistics::Statistics,
};

/// Errors produced while fitting a normal distribution.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum FitError {
    #[display("cannot fit a distribution to an empty sample")]
    EmptySample,
    #[display("sample contains a non-finite value at index {index}: {value}")]
    NonFinite { index: usize, value: f64 },
}

/// Parameters of a normal distribution fitted to a sample.
///
/// The fit is the closed-form maximum-likelihood estimate: the arithmetic
/// mean and the population standard deviation (denominator `n`).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct NormalFit {
    /// Estimated mean.
    pub mean: f64,
    /// Estimated standard deviation.
    pub std_dev: f64,
}

impl NormalFit {
    /// Fits a normal distribution to `sample`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vitaplot_stats::normal::NormalFit;
    /// let fit = NormalFit::fit(&[5.0, 5.0, 5.0]).unwrap();
    /// assert_eq!(fit.mean, 5.0);
    /// assert_eq!(fit.std_dev, 0.0);
    /// ```
    pub fn fit(sample: &[f64]) -> Result<Self, FitError> {
        if let Some((index, &value)) = sample.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(FitError::NonFinite { index, value });
        }
        if sample.is_empty() {
            return Err(FitError::EmptySample);
        }
        Ok(Self {
            mean: Statistics::mean(sample),
            std_dev: Statistics::population_std_dev(sample),
        })
    }

    /// Evaluates the probability density function at `x`.
    ///
    /// A fit with zero standard deviation describes a point mass: the density
    /// is infinite at the mean and zero elsewhere.
    #[expect(clippy::float_cmp)]
    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        let Ok(normal) = Normal::new(self.mean, self.std_dev) else {
            return if x == self.mean { f64::INFINITY } else { 0.0 };
        };
        normal.pdf(x)
    }

    /// Evaluates the density at each of `xs`, returning `(x, pdf(x))` pairs.
    pub fn pdf_points<'a, I>(&self, xs: I) -> Vec<(f64, f64)>
    where
        I: IntoIterator<Item = &'a f64>,
    {
        xs.into_iter().map(|&x| (x, self.pdf(x))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_values() {
        let fit = NormalFit::fit(&[5.0, 5.0, 5.0]).unwrap();
        assert_eq!(fit.mean, 5.0);
        assert_eq!(fit.std_dev, 0.0);
    }

    #[test]
    fn test_population_std_dev() {
        let fit = NormalFit::fit(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(fit.mean, 3.0);
        assert!((fit.std_dev - 1.414_213_562_373_095).abs() < 1e-12);
    }

    #[test]
    fn test_fit_matches_descriptive_stats() {
        let sample = [39.2, 51.7, 28.4, 44.9, 40.1, 33.3, 47.6];
        let fit = NormalFit::fit(&sample).unwrap();
        let stats = crate::descriptive::DescriptiveStats::new(sample).unwrap();
        assert_eq!(fit.mean, stats.mean);
        assert_eq!(fit.std_dev, stats.std_dev);
    }

    #[test]
    fn test_empty_sample() {
        assert_eq!(NormalFit::fit(&[]), Err(FitError::EmptySample));
    }

    #[test]
    fn test_non_finite_sample() {
        let err = NormalFit::fit(&[1.0, 2.0, f64::INFINITY]).unwrap_err();
        assert!(matches!(err, FitError::NonFinite { index: 2, .. }));
    }

    #[test]
    fn test_standard_normal_pdf() {
        let fit = NormalFit {
            mean: 0.0,
            std_dev: 1.0,
        };
        assert!((fit.pdf(0.0) - 0.398_942_280_401_432_7).abs() < 1e-15);
        assert!((fit.pdf(1.0) - 0.241_970_724_519_143_37).abs() < 1e-15);
        assert!((fit.pdf(-1.0) - fit.pdf(1.0)).abs() < 1e-15);
    }

    #[test]
    fn test_scaled_pdf() {
        let fit = NormalFit {
            mean: 70.0,
            std_dev: 10.0,
        };
        assert!((fit.pdf(70.0) - 0.039_894_228_040_143_27).abs() < 1e-15);
    }

    #[test]
    fn test_degenerate_pdf() {
        let fit = NormalFit::fit(&[2.0, 2.0]).unwrap();
        assert_eq!(fit.pdf(2.0), f64::INFINITY);
        assert_eq!(fit.pdf(2.5), 0.0);
    }

    #[test]
    fn test_pdf_points_keep_order() {
        let fit = NormalFit {
            mean: 0.0,
            std_dev: 1.0,
        };
        let xs = [-1.0, 0.0, 1.0];
        let points = fit.pdf_points(&xs);
        assert_eq!(
            points.iter().map(|(x, _)| *x).collect::<Vec<_>>(),
            xs.to_vec()
        );
        assert_eq!(points[1].1, fit.pdf(0.0));
    }

    #[test]
    fn test_serialize() {
        let fit = NormalFit {
            mean: 1.5,
            std_dev: 0.5,
        };
        let json = serde_json::to_value(fit).unwrap();
        assert_eq!(json, serde_json::json!({ "mean": 1.5, "std_dev": 0.5 }));
    }
}
