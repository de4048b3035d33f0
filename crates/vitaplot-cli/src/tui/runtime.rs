use std::io;

use crossterm::event;
use ratatui::DefaultTerminal;

use crate::tui::{App, event::TuiEvent};

/// Terminal application runtime.
///
/// Redraws only after state changes: once at startup and after every
/// terminal event. Between events it blocks on terminal input.
#[derive(Debug)]
pub(crate) struct Runtime {
    dirty: bool,
}

impl Runtime {
    #[must_use]
    pub(crate) fn new() -> Self {
        // Initial render is required on startup
        Self { dirty: true }
    }

    /// Runs the application until `app.should_exit()` returns true.
    ///
    /// The terminal is restored before returning, also on error.
    pub(crate) fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        let mut terminal = ratatui::try_init()?;
        let result = self.event_loop(&mut terminal, app);
        ratatui::try_restore()?;
        result
    }

    fn event_loop<A>(&mut self, terminal: &mut DefaultTerminal, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        while !app.should_exit() {
            match self.next_event()? {
                TuiEvent::Render => {
                    terminal.draw(|f| app.draw(f))?;
                }
                TuiEvent::Crossterm(event) => app.handle_event(&event),
            }
        }
        Ok(())
    }

    /// Returns the next event, blocking until a terminal event occurs when
    /// nothing needs to be redrawn.
    fn next_event(&mut self) -> io::Result<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }
        let event = event::read()?;
        self.dirty = true;
        Ok(event.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_event_is_render() {
        let mut runtime = Runtime::new();
        assert!(matches!(runtime.next_event().unwrap(), TuiEvent::Render));
        assert!(!runtime.dirty);
    }
}
