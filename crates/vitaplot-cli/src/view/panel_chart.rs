use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    symbols::{Marker, merge::MergeStrategy},
    widgets::{Axis, Block, Chart, Dataset, GraphType, LegendPosition, Widget},
};
use vitaplot_experiment::{
    figure::{GroupSeries, Panel},
    style::{CurveStyle, HistogramStyle, SeriesColor},
};
use vitaplot_stats::histogram::DensityHistogram;

/// One experiment's histograms and fitted curves in shared axes.
pub(super) struct PanelChart<'a> {
    pub(super) panel: &'a Panel,
}

impl Widget for PanelChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let panel = self.panel;
        let outlines = panel
            .series
            .iter()
            .map(|series| step_outline(&series.histogram))
            .collect::<Vec<_>>();

        let datasets = panel
            .series
            .iter()
            .zip(&outlines)
            .flat_map(|(series, outline)| series_datasets(series, outline))
            .collect::<Vec<_>>();

        let x_bounds = panel.x_bounds();
        let y_bounds = panel.y_bounds();
        let x_axis = Axis::default()
            .title(panel.x_label.as_str())
            .bounds(x_bounds)
            .labels([
                format!("{:.0}", x_bounds[0]),
                format!("{:.0}", f64::midpoint(x_bounds[0], x_bounds[1])),
                format!("{:.0}", x_bounds[1]),
            ]);
        let y_axis = Axis::default()
            .title(panel.y_label.as_str())
            .bounds(y_bounds)
            .labels([
                format!("{:.3}", y_bounds[0]),
                format!("{:.3}", f64::midpoint(y_bounds[0], y_bounds[1])),
                format!("{:.3}", y_bounds[1]),
            ]);

        let chart = Chart::new(datasets)
            .block(
                Block::bordered()
                    .merge_borders(MergeStrategy::Exact)
                    .title(panel.title.as_str()),
            )
            .x_axis(x_axis)
            .y_axis(y_axis)
            .legend_position(Some(LegendPosition::TopRight))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

        Widget::render(chart, area, buf);
    }
}

/// Histogram outline followed by the fitted curve. Only the histogram gets a
/// legend entry.
fn series_datasets<'a>(series: &'a GroupSeries, outline: &'a [(f64, f64)]) -> [Dataset<'a>; 2] {
    let histogram = Dataset::default()
        .name(series.histogram_style.label.as_str())
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(histogram_style(&series.histogram_style))
        .data(outline);
    let curve = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(curve_style(series.curve_style))
        .data(&series.curve);
    [histogram, curve]
}

/// Traces the bars of `histogram` as a single polyline starting and ending
/// on the x axis.
fn step_outline(histogram: &DensityHistogram) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(histogram.num_bins() * 2 + 2);
    if let Some(&first) = histogram.edges.first() {
        points.push((first, 0.0));
    }
    for (edge, &density) in histogram.edges.windows(2).zip(&histogram.densities) {
        points.push((edge[0], density));
        points.push((edge[1], density));
    }
    if let Some(&last) = histogram.edges.last() {
        points.push((last, 0.0));
    }
    points
}

fn histogram_style(style: &HistogramStyle) -> Style {
    let base = Style::default().fg(terminal_color(style.color));
    if style.is_translucent() {
        base.add_modifier(Modifier::DIM)
    } else {
        base
    }
}

fn curve_style(style: CurveStyle) -> Style {
    let base = Style::default().fg(terminal_color(style.color));
    if style.line_width > 1.0 {
        base.add_modifier(Modifier::BOLD)
    } else {
        base
    }
}

fn terminal_color(color: SeriesColor) -> Color {
    match color {
        SeriesColor::Red => Color::Red,
        SeriesColor::Green => Color::Green,
        SeriesColor::Blue => Color::Blue,
        SeriesColor::Orange => Color::Rgb(255, 127, 14),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_outline() {
        let histogram = DensityHistogram::new(&[0.0, 0.5, 1.5, 2.0, 2.0], 2).unwrap();
        let outline = step_outline(&histogram);
        assert_eq!(
            outline,
            vec![
                (0.0, 0.0),
                (0.0, 0.4),
                (1.0, 0.4),
                (1.0, 0.6),
                (2.0, 0.6),
                (2.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_translucent_histogram_is_dimmed() {
        let style = HistogramStyle::for_group(0, "Low Temp", 15);
        assert_eq!(
            histogram_style(&style),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::DIM)
        );
    }

    #[test]
    fn test_curve_color() {
        assert_eq!(
            curve_style(CurveStyle::for_group(0)),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        );
    }
}
