pub(crate) use self::figure_screen::FigureScreen;

mod figure_screen;
mod panel_chart;
