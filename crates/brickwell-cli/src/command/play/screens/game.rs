use std::time::Instant;

use brickwell_engine::{GameSession, SessionPhase};
use crossterm::event::Event;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::{
    host::{Cadence, Controller, Intent},
    ui::widgets::{KeyBinding, KeyBindingDisplay, SessionDisplay},
};

/// Final numbers of a session, printed after the terminal is restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GameReport {
    pub player: String,
    pub score: u64,
    pub high_score: u64,
    pub lines_cleared: usize,
    pub completed_pieces: usize,
    /// Locks per number of rows cleared (index 0 counts locks that cleared nothing).
    pub line_clears: [usize; 5],
    pub persistence_failures: Vec<String>,
}

#[derive(Debug)]
pub(crate) struct GameScreen {
    session: GameSession,
    controller: Controller,
    is_exiting: bool,
}

impl GameScreen {
    pub(crate) fn new(
        session: GameSession,
        cadence: Cadence,
        key_release_events: bool,
        now: Instant,
    ) -> Self {
        Self {
            session,
            controller: Controller::new(cadence, key_release_events, now),
            is_exiting: false,
        }
    }

    pub(crate) fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    pub(crate) fn handle_event(&mut self, event: &Event, now: Instant) {
        let Some(intent) = event.as_key_event().and_then(|key| Intent::from_key_event(&key)) else {
            return;
        };
        if intent == Intent::Quit {
            self.is_exiting = true;
            return;
        }
        self.controller.apply(&mut self.session, intent, now);
    }

    pub(crate) fn update(&mut self, now: Instant) {
        self.controller.tick(&mut self.session, now);
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        let snapshot = self.session.snapshot();
        let session_display = SessionDisplay::new(&snapshot);
        let bindings: &[KeyBinding] = match self.session.phase() {
            SessionPhase::Idle => &[(&["Enter", "S"], "Start"), (&["Q"], "Quit")],
            SessionPhase::Active => &[
                (&["←", "→"], "Move"),
                (&["↓"], "Soft Drop"),
                (&["↑"], "Rotate"),
                (&["P"], "Pause"),
                (&["R"], "Restart"),
                (&["Q"], "Quit"),
            ],
            SessionPhase::Paused => &[(&["P"], "Resume"), (&["R"], "Restart"), (&["Q"], "Quit")],
            SessionPhase::Over => &[(&["Enter", "R"], "Restart"), (&["Q"], "Quit")],
        };

        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        frame.render_widget(session_display, main_area);
        frame.render_widget(KeyBindingDisplay::new(bindings), help_area);
    }

    pub(crate) fn report(&self) -> GameReport {
        let ledger = self.session.ledger();
        GameReport {
            player: self.session.player().to_owned(),
            score: ledger.score(),
            high_score: ledger.high_score(),
            lines_cleared: ledger.total_cleared_lines(),
            completed_pieces: ledger.completed_pieces(),
            line_clears: *ledger.line_cleared_counter(),
            persistence_failures: ledger
                .persistence_failures()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}
