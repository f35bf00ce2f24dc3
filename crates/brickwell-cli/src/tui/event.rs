use std::time::Instant;

use crossterm::event::Event as CrosstermEvent;

/// Events processed by TUI applications.
#[derive(Debug, Clone, derive_more::IsVariant)]
pub(super) enum TuiEvent {
    /// Game logic update timing, stamped with the time it was produced.
    Tick(Instant),
    /// Screen render timing.
    Render,
    /// Terminal events such as key input and resize.
    Crossterm(CrosstermEvent),
}
