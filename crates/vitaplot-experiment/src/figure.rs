use rand::Rng;
use vitaplot_stats::{
    descriptive::DescriptiveStats,
    histogram::{DensityHistogram, HistogramError},
    normal::{FitError, NormalFit},
};

use crate::{
    catalog::{Experiment, ExperimentKind},
    sample::{SampleError, SampleGenerator, SampleGroup},
    style::{CurveStyle, HistogramStyle},
};

pub const DENSITY_LABEL: &str = "Density";

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum FigureError {
    #[display("invalid experiment definition")]
    Sample(#[error(source)] SampleError),
    #[display("failed to fit a normal distribution to group '{label}'")]
    #[from(ignore)]
    Fit { label: String, source: FitError },
    #[display("failed to build the histogram of group '{label}'")]
    #[from(ignore)]
    Histogram {
        label: String,
        source: HistogramError,
    },
}

/// The complete chart: one panel per experiment, drawn side by side.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Figure {
    /// Seed the samples were generated from.
    pub seed: u64,
    pub panels: Vec<Panel>,
}

/// One plotting region with its own axes, title and legend.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Panel {
    pub kind: ExperimentKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<GroupSeries>,
}

/// Everything drawn for one sample group.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GroupSeries {
    pub sample: SampleGroup,
    pub stats: DescriptiveStats,
    pub fit: NormalFit,
    pub histogram: DensityHistogram,
    /// Fitted density evaluated at the histogram's bin edges.
    pub curve: Vec<(f64, f64)>,
    pub histogram_style: HistogramStyle,
    pub curve_style: CurveStyle,
}

impl Figure {
    /// Generates, fits and lays out both built-in experiments from `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vitaplot_experiment::{figure::Figure, style::HistogramStyle};
    /// let figure = Figure::generate(42, HistogramStyle::DEFAULT_BINS).unwrap();
    /// assert_eq!(figure.panels.len(), 2);
    /// ```
    pub fn generate(seed: u64, bins: usize) -> Result<Self, FigureError> {
        let experiments = Experiment::all()?;
        let mut generator = SampleGenerator::seeded(seed);
        let panels = experiments
            .iter()
            .map(|experiment| Panel::build(experiment, &mut generator, bins))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { seed, panels })
    }

    /// Iterates over every series of every panel, in drawing order.
    pub fn series(&self) -> impl Iterator<Item = (&Panel, &GroupSeries)> {
        self.panels
            .iter()
            .flat_map(|panel| panel.series.iter().map(move |series| (panel, series)))
    }
}

impl Panel {
    /// Draws the samples of `experiment` from `generator` and fits each group.
    pub fn build<R>(
        experiment: &Experiment,
        generator: &mut SampleGenerator<R>,
        bins: usize,
    ) -> Result<Self, FigureError>
    where
        R: Rng,
    {
        let series = experiment
            .groups
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let sample = generator.generate(spec);
                let histogram_style =
                    HistogramStyle::for_group(index, experiment.legend_label(spec), bins);
                GroupSeries::build(sample, histogram_style, CurveStyle::for_group(index))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            kind: experiment.kind,
            title: experiment.title.to_owned(),
            x_label: experiment.x_label.to_owned(),
            y_label: DENSITY_LABEL.to_owned(),
            series,
        })
    }

    /// Returns the x range covered by every histogram of the panel.
    #[must_use]
    pub fn x_bounds(&self) -> [f64; 2] {
        let edges = self.series.iter().flat_map(|s| &s.histogram.edges);
        let (min, max) = edges.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &x| {
            (min.min(x), max.max(x))
        });
        if min.is_finite() && max.is_finite() {
            [min, max]
        } else {
            [0.0, 1.0]
        }
    }

    /// Returns the y range `[0, top]` fitting every bar and curve point, with
    /// a 5% margin above the highest one.
    #[must_use]
    pub fn y_bounds(&self) -> [f64; 2] {
        let top = self
            .series
            .iter()
            .flat_map(|s| {
                s.histogram
                    .densities
                    .iter()
                    .chain(s.curve.iter().map(|(_, y)| y))
            })
            .copied()
            .filter(|y| y.is_finite())
            .fold(0.0, f64::max);
        if top > 0.0 {
            [0.0, top * 1.05]
        } else {
            [0.0, 1.0]
        }
    }
}

impl GroupSeries {
    /// Fits `sample` and bins it according to `histogram_style`.
    pub fn build(
        sample: SampleGroup,
        histogram_style: HistogramStyle,
        curve_style: CurveStyle,
    ) -> Result<Self, FigureError> {
        let fit = NormalFit::fit(sample.values()).map_err(|source| FigureError::Fit {
            label: sample.label().to_owned(),
            source,
        })?;
        let histogram =
            DensityHistogram::new(sample.values(), histogram_style.bins).map_err(|source| {
                FigureError::Histogram {
                    label: sample.label().to_owned(),
                    source,
                }
            })?;
        // A non-empty sample always has descriptive statistics
        let stats = DescriptiveStats::new(sample.values().iter().copied()).ok_or_else(|| {
            FigureError::Fit {
                label: sample.label().to_owned(),
                source: FitError::EmptySample,
            }
        })?;
        let curve = fit.pdf_points(&histogram.edges);
        Ok(Self {
            sample,
            stats,
            fit,
            histogram,
            curve,
            histogram_style,
            curve_style,
        })
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.histogram_style.label
    }
}
