//! Statistical routines for the vitaplot project.
//!
//! This crate provides the small set of statistics the pipeline needs:
//!
//! - **Descriptive statistics**: mean, median, population variance, standard deviation
//! - **Density histograms**: equal-width binning scaled so that the total area is 1
//! - **Normal fitting**: closed-form maximum-likelihood fit and probability density
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing samples
//! - [`histogram`]: Density-normalized histograms with equal-width bins
//! - [`normal`]: Normal distribution fitting and density evaluation
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use vitaplot_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! ```
//!
//! ## Fitting a normal distribution
//!
//! ```
//! use vitaplot_stats::normal::NormalFit;
//!
//! let fit = NormalFit::fit(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(fit.mean, 3.0);
//! assert!((fit.std_dev - 2.0_f64.sqrt()).abs() < 1e-12);
//! ```
//!
//! ## Building a density histogram
//!
//! ```
//! use vitaplot_stats::histogram::DensityHistogram;
//!
//! let values = [1.0, 2.0, 2.5, 3.0, 4.0];
//! let histogram = DensityHistogram::new(&values, 3).unwrap();
//! assert_eq!(histogram.edges.len(), 4);
//! assert!((histogram.total_area() - 1.0).abs() < 1e-12);
//! ```

pub mod descriptive;
pub mod histogram;
pub mod normal;
