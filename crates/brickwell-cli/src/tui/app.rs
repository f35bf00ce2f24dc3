use std::time::Instant;

use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Runtime;

/// Trait for TUI applications run by [`Runtime::run`].
pub(crate) trait App {
    /// Called once the terminal is set up, before the first event.
    ///
    /// Use this to configure the tick interval and render mode.
    fn init(&mut self, runtime: &mut Runtime);

    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, resize, etc.).
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    /// Draws the screen.
    fn draw(&self, frame: &mut Frame);

    /// Advances time-based state to `now`.
    fn update(&mut self, runtime: &mut Runtime, now: Instant);
}
