use std::{io, time::Duration};

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute, terminal,
};
use ratatui::DefaultTerminal;

use crate::tui::{
    App,
    event::TuiEvent,
    event_loop::{EventLoop, RenderMode},
};

/// Terminal application runtime.
///
/// Owns the event loop and the terminal mode while an [`App`] runs.
#[derive(Debug, Default)]
pub(crate) struct Runtime {
    events: EventLoop,
    key_release_events: bool,
}

impl Runtime {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.events.set_tick_interval(interval);
    }

    pub(crate) fn set_render_mode(&mut self, mode: RenderMode) {
        self.events.set_render_mode(mode);
    }

    /// Whether the terminal reports key releases.
    ///
    /// Known once [`App::init`] is called.
    pub(crate) fn key_release_events(&self) -> bool {
        self.key_release_events
    }

    /// Runs `app` until it asks to exit.
    ///
    /// 1. Enters the alternate screen and, when the terminal supports it,
    ///    asks for key press/release reporting
    /// 2. Calls `app.init()`
    /// 3. Dispatches events until `app.should_exit()` returns true
    ///    - `Tick`: calls `app.update()`
    ///    - `Render`: calls `app.draw()`
    ///    - `Crossterm`: calls `app.handle_event()`
    /// 4. Restores the terminal, even when the loop failed
    pub(crate) fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| -> anyhow::Result<()> {
            self.key_release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);
            if self.key_release_events {
                execute!(
                    io::stdout(),
                    PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
                )?;
            }

            app.init(&mut self);
            let result = self.dispatch(terminal, app);

            if self.key_release_events {
                execute!(io::stdout(), PopKeyboardEnhancementFlags)?;
            }
            result?;
            Ok(())
        })
    }

    fn dispatch<A>(&mut self, terminal: &mut DefaultTerminal, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        while !app.should_exit() {
            match self.events.next()? {
                TuiEvent::Tick(now) => app.update(self, now),
                TuiEvent::Render => {
                    terminal.draw(|f| app.draw(f))?;
                }
                TuiEvent::Crossterm(event) => app.handle_event(self, event),
            }
        }
        Ok(())
    }
}
