//! Synthetic experiments for vitaplot: sample generation, fitting and the
//! figure model that the command line renders.
//!
//! # Pipeline
//!
//! ```text
//! Experiment catalog (catalog)
//!     ↓ group specs
//! Sample generator (sample), one seeded generator shared by all groups
//!     ↓ samples
//! Normal fit + density histogram (vitaplot-stats)
//!     ↓ series
//! Figure: one panel per experiment (figure)
//! ```
//!
//! Samples are drawn in catalog order (Low, Optimal, High, Standard,
//! Nutrient-rich) from a single generator, so a seed fully determines the
//! figure's data.
//!
//! # Example
//!
//! ```
//! use vitaplot_experiment::{figure::Figure, sample::DEFAULT_SEED, style::HistogramStyle};
//!
//! let figure = Figure::generate(DEFAULT_SEED, HistogramStyle::DEFAULT_BINS).unwrap();
//! for panel in &figure.panels {
//!     for series in &panel.series {
//!         println!(
//!             "{}: mean={:.2} std={:.2}",
//!             series.label(),
//!             series.fit.mean,
//!             series.fit.std_dev
//!         );
//!     }
//! }
//! ```

pub mod catalog;
pub mod figure;
pub mod sample;
pub mod style;
