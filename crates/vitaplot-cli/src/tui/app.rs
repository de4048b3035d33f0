use crossterm::event::Event;
use ratatui::Frame;

/// Trait for terminal applications executed by [`Runtime::run`].
///
/// [`Runtime::run`]: crate::tui::Runtime::run
pub(crate) trait App {
    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, resize, etc.).
    fn handle_event(&mut self, event: &Event);

    /// Draws the screen.
    fn draw(&self, frame: &mut Frame);
}
