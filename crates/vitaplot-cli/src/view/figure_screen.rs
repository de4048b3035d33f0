use crossterm::event::{Event, KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Spacing},
    style::{Color, Style},
    text::Text,
};
use vitaplot_experiment::figure::Figure;

use crate::{tui::App, view::panel_chart::PanelChart};

/// Shows every panel of a figure side by side until dismissed.
#[derive(Debug)]
pub(crate) struct FigureScreen {
    figure: Figure,
    should_exit: bool,
}

impl FigureScreen {
    #[must_use]
    pub(crate) fn new(figure: Figure) -> Self {
        Self {
            figure,
            should_exit: false,
        }
    }
}

impl App for FigureScreen {
    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn handle_event(&mut self, event: &Event) {
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
                KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.should_exit = true;
                }
                _ => {}
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        // Layout: panels + help line at bottom
        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        let panel_areas = Layout::horizontal(
            self.figure
                .panels
                .iter()
                .map(|_| Constraint::Fill(1)),
        )
        .spacing(Spacing::Overlap(1))
        .split(main_area);

        for (panel, area) in self.figure.panels.iter().zip(panel_areas.iter()) {
            frame.render_widget(PanelChart { panel }, *area);
        }

        let help_text = Text::from(format!("seed {} | q/Esc/Ctrl-C: Quit", self.figure.seed))
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(help_text, help_area);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;
    use ratatui::{Terminal, backend::TestBackend};
    use vitaplot_experiment::{sample::DEFAULT_SEED, style::HistogramStyle};

    use super::*;

    fn screen() -> FigureScreen {
        FigureScreen::new(Figure::generate(DEFAULT_SEED, HistogramStyle::DEFAULT_BINS).unwrap())
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_keys() {
        for event in [
            key(KeyCode::Char('q'), KeyModifiers::NONE),
            key(KeyCode::Esc, KeyModifiers::NONE),
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut screen = screen();
            assert!(!screen.should_exit());
            screen.handle_event(&event);
            assert!(screen.should_exit(), "{event:?} should exit");
        }
    }

    #[test]
    fn test_other_keys_keep_display() {
        let mut screen = screen();
        screen.handle_event(&key(KeyCode::Char('c'), KeyModifiers::NONE));
        screen.handle_event(&key(KeyCode::Enter, KeyModifiers::NONE));
        assert!(!screen.should_exit());
    }

    #[test]
    fn test_draw_shows_both_panels() {
        let screen = screen();
        let mut terminal = Terminal::new(TestBackend::new(180, 50)).unwrap();
        terminal.draw(|frame| screen.draw(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let content = buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        for expected in [
            "Embryo Viability Across Temperatures",
            "Maternal Stress Resilience Across Diets",
            "Low Temp",
            "Optimal Temp",
            "High Temp",
            "Standard Diet",
            "Nutrient-rich Diet",
            "Density",
            "q/Esc/Ctrl-C: Quit",
        ] {
            assert!(content.contains(expected), "missing {expected:?}");
        }
    }
}
