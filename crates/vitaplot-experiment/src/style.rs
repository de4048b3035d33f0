//! Drawing configuration for chart series.

/// Named colors available to chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum SeriesColor {
    #[display("red")]
    Red,
    #[display("green")]
    Green,
    #[display("blue")]
    Blue,
    #[display("orange")]
    Orange,
}

impl SeriesColor {
    /// Colors of the fitted density curves, assigned by group index.
    pub const CURVE_PALETTE: [Self; 3] = [Self::Red, Self::Green, Self::Blue];
    /// Colors of the histograms, assigned by group index.
    pub const HISTOGRAM_PALETTE: [Self; 3] = [Self::Blue, Self::Orange, Self::Green];

    /// Returns the curve color for the group at `index`, cycling through
    /// [`Self::CURVE_PALETTE`].
    #[must_use]
    pub fn curve(index: usize) -> Self {
        Self::CURVE_PALETTE[index % Self::CURVE_PALETTE.len()]
    }

    /// Returns the histogram color for the group at `index`, cycling through
    /// [`Self::HISTOGRAM_PALETTE`].
    #[must_use]
    pub fn histogram(index: usize) -> Self {
        Self::HISTOGRAM_PALETTE[index % Self::HISTOGRAM_PALETTE.len()]
    }
}

/// How a group's histogram is binned and drawn.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct HistogramStyle {
    /// Number of equal-width bins.
    pub bins: usize,
    /// Fill opacity in `[0, 1]`.
    pub alpha: f64,
    /// Legend label.
    pub label: String,
    pub color: SeriesColor,
}

impl HistogramStyle {
    pub const DEFAULT_BINS: usize = 15;
    pub const DEFAULT_ALPHA: f64 = 0.7;

    /// Creates the style of the histogram for the group at `index`.
    #[must_use]
    pub fn for_group(index: usize, label: impl Into<String>, bins: usize) -> Self {
        Self {
            bins,
            alpha: Self::DEFAULT_ALPHA,
            label: label.into(),
            color: SeriesColor::histogram(index),
        }
    }

    /// Returns whether the fill is drawn translucent.
    #[must_use]
    pub fn is_translucent(&self) -> bool {
        self.alpha < 1.0
    }
}

/// How a group's fitted density curve is drawn.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct CurveStyle {
    pub color: SeriesColor,
    pub line_width: f64,
}

impl CurveStyle {
    pub const DEFAULT_LINE_WIDTH: f64 = 2.0;

    #[must_use]
    pub fn for_group(index: usize) -> Self {
        Self {
            color: SeriesColor::curve(index),
            line_width: Self::DEFAULT_LINE_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_colors_cycle() {
        let colors = (0..5).map(SeriesColor::curve).collect::<Vec<_>>();
        assert_eq!(
            colors,
            vec![
                SeriesColor::Red,
                SeriesColor::Green,
                SeriesColor::Blue,
                SeriesColor::Red,
                SeriesColor::Green,
            ]
        );
    }

    #[test]
    fn test_histogram_style_defaults() {
        let style = HistogramStyle::for_group(1, "Optimal Temp", HistogramStyle::DEFAULT_BINS);
        assert_eq!(style.bins, 15);
        assert_eq!(style.alpha, 0.7);
        assert_eq!(style.label, "Optimal Temp");
        assert_eq!(style.color, SeriesColor::Orange);
        assert!(style.is_translucent());
    }

    #[test]
    fn test_color_serialization() {
        let json = serde_json::to_string(&SeriesColor::Blue).unwrap();
        assert_eq!(json, "\"blue\"");
        assert_eq!(SeriesColor::Red.to_string(), "red");
    }
}
