use std::time::Instant;

use brickwell_engine::{ActionOutcome, GameSession, SessionPhase};

use super::{Cadence, DropClock, Intent, KeyRepeat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

/// Drives a [`GameSession`] from intents and elapsed time.
///
/// With key-release events the controller tracks held keys: direction keys
/// auto-repeat and the down key switches the drop clock to the soft-drop
/// interval until released. Without them every press is discrete: one
/// sideways step per left/right press and one row per down press.
#[derive(Debug)]
pub(crate) struct Controller {
    drop_clock: DropClock,
    left: KeyRepeat,
    right: KeyRepeat,
    key_release_events: bool,
}

impl Controller {
    pub(crate) fn new(cadence: Cadence, key_release_events: bool, now: Instant) -> Self {
        let repeat = KeyRepeat::new(cadence.initial_move_delay, cadence.move_repeat);
        Self {
            drop_clock: DropClock::new(cadence.drop_interval, cadence.soft_drop_interval, now),
            left: repeat.clone(),
            right: repeat,
            key_release_events,
        }
    }

    /// Applies one intent.
    ///
    /// Returns `None` when the intent only changed host state (a release, a
    /// held key, or [`Intent::Quit`], which the screen handles).
    pub(crate) fn apply(
        &mut self,
        session: &mut GameSession,
        intent: Intent,
        now: Instant,
    ) -> Option<ActionOutcome> {
        let outcome = match intent {
            Intent::MoveLeft => self.press(session, Direction::Left, now),
            Intent::MoveRight => self.press(session, Direction::Right, now),
            Intent::ReleaseLeft => {
                self.left.release();
                None
            }
            Intent::ReleaseRight => {
                self.right.release();
                None
            }
            Intent::Rotate => Some(session.rotate()),
            Intent::SoftDropOn if self.key_release_events => {
                self.drop_clock.set_soft_drop(true);
                None
            }
            Intent::SoftDropOn => Some(session.soft_drop()),
            Intent::SoftDropOff => {
                self.drop_clock.set_soft_drop(false);
                None
            }
            Intent::TogglePause => Some(session.toggle_pause()),
            Intent::Start => Some(match session.phase() {
                SessionPhase::Idle => session.start(),
                SessionPhase::Over => {
                    session.reset();
                    session.start()
                }
                SessionPhase::Active | SessionPhase::Paused => ActionOutcome::Ignored,
            }),
            Intent::Restart => {
                session.reset();
                Some(session.start())
            }
            Intent::Quit => None,
        };

        if let Some(ActionOutcome::Started | ActionOutcome::Resumed) = outcome {
            self.drop_clock.restart(now);
        }
        outcome
    }

    /// Advances time: fires due key repeats, then gravity.
    ///
    /// Returns the outcome of the gravity step if one happened.
    pub(crate) fn tick(&mut self, session: &mut GameSession, now: Instant) -> Option<ActionOutcome> {
        if !session.phase().is_active() {
            return None;
        }
        for direction in [Direction::Left, Direction::Right] {
            if self.repeat(direction).is_due(now) && Self::step(session, direction).is_moved() {
                self.repeat_mut(direction).record_move(now);
            }
        }
        self.drop_clock.poll(now).then(|| session.soft_drop())
    }

    fn press(
        &mut self,
        session: &mut GameSession,
        direction: Direction,
        now: Instant,
    ) -> Option<ActionOutcome> {
        if self.key_release_events && !self.repeat_mut(direction).press(now) {
            return None;
        }
        Some(Self::step(session, direction))
    }

    fn step(session: &mut GameSession, direction: Direction) -> ActionOutcome {
        match direction {
            Direction::Left => session.move_left(),
            Direction::Right => session.move_right(),
        }
    }

    fn repeat(&self, direction: Direction) -> &KeyRepeat {
        match direction {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    fn repeat_mut(&mut self, direction: Direction) -> &mut KeyRepeat {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use brickwell_engine::{
        Cell, MemoryHighScoreStore, PieceColor, PieceKind, Position, ScriptedPieceSource, Well,
        WellSize,
    };

    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn o_session() -> GameSession {
        GameSession::with_piece_source(
            "tester",
            WellSize::STANDARD,
            Box::new(ScriptedPieceSource::repeat(PieceKind::O, PieceColor::Yellow)),
            Box::new(MemoryHighScoreStore::new()),
        )
    }

    fn origin(session: &GameSession) -> Position {
        session.current_piece().origin()
    }

    #[test]
    fn test_gravity_follows_drop_interval() {
        let t0 = Instant::now();
        let mut session = o_session();
        let mut controller = Controller::new(Cadence::default(), true, t0);

        assert_eq!(
            controller.apply(&mut session, Intent::Start, t0),
            Some(ActionOutcome::Started)
        );
        assert_eq!(controller.tick(&mut session, t0 + 500 * MS), None);
        assert_eq!(
            controller.tick(&mut session, t0 + 501 * MS),
            Some(ActionOutcome::Moved)
        );
        assert_eq!(origin(&session), Position::new(4, 1));
    }

    #[test]
    fn test_held_soft_drop_uses_fast_interval() {
        let t0 = Instant::now();
        let mut session = o_session();
        let mut controller = Controller::new(Cadence::default(), true, t0);
        controller.apply(&mut session, Intent::Start, t0);

        assert_eq!(
            controller.apply(&mut session, Intent::SoftDropOn, t0 + 10 * MS),
            None
        );
        assert_eq!(controller.tick(&mut session, t0 + 50 * MS), None);
        assert!(controller.tick(&mut session, t0 + 51 * MS).is_some());
        assert!(controller.tick(&mut session, t0 + 102 * MS).is_some());
        assert_eq!(origin(&session).y, 2);

        controller.apply(&mut session, Intent::SoftDropOff, t0 + 110 * MS);
        assert_eq!(controller.tick(&mut session, t0 + 160 * MS), None);
    }

    #[test]
    fn test_held_direction_repeats_after_delay() {
        let t0 = Instant::now();
        let mut session = o_session();
        let mut controller = Controller::new(Cadence::default(), true, t0);
        controller.apply(&mut session, Intent::Start, t0);

        let pressed = t0 + 10 * MS;
        assert_eq!(
            controller.apply(&mut session, Intent::MoveLeft, pressed),
            Some(ActionOutcome::Moved)
        );
        assert_eq!(origin(&session).x, 3);

        // A second press while held does nothing.
        assert_eq!(
            controller.apply(&mut session, Intent::MoveLeft, pressed + 5 * MS),
            None
        );

        controller.tick(&mut session, pressed + 199 * MS);
        assert_eq!(origin(&session).x, 3);
        controller.tick(&mut session, pressed + 200 * MS);
        assert_eq!(origin(&session).x, 2);
        controller.tick(&mut session, pressed + 249 * MS);
        assert_eq!(origin(&session).x, 2);
        controller.tick(&mut session, pressed + 250 * MS);
        controller.tick(&mut session, pressed + 300 * MS);
        assert_eq!(origin(&session).x, 0);
        controller.tick(&mut session, pressed + 350 * MS);
        assert_eq!(origin(&session).x, 0, "wall stops the repeat");

        controller.apply(&mut session, Intent::ReleaseLeft, pressed + 360 * MS);
        controller.apply(&mut session, Intent::MoveRight, pressed + 370 * MS);
        controller.tick(&mut session, pressed + 480 * MS);
        assert_eq!(origin(&session).x, 1, "released key no longer repeats");
    }

    #[test]
    fn test_discrete_fallback_without_release_events() {
        let t0 = Instant::now();
        let mut session = o_session();
        let mut controller = Controller::new(Cadence::default(), false, t0);
        controller.apply(&mut session, Intent::Start, t0);

        controller.apply(&mut session, Intent::MoveRight, t0);
        controller.apply(&mut session, Intent::MoveRight, t0 + MS);
        assert_eq!(origin(&session).x, 6);

        controller.tick(&mut session, t0 + 400 * MS);
        assert_eq!(origin(&session).x, 6, "no auto-repeat");

        assert_eq!(
            controller.apply(&mut session, Intent::SoftDropOn, t0 + 410 * MS),
            Some(ActionOutcome::Moved)
        );
        assert_eq!(origin(&session).y, 1);
    }

    #[test]
    fn test_paused_session_does_not_fall() {
        let t0 = Instant::now();
        let mut session = o_session();
        let mut controller = Controller::new(Cadence::default(), true, t0);
        controller.apply(&mut session, Intent::Start, t0);
        controller.apply(&mut session, Intent::TogglePause, t0 + 100 * MS);

        assert_eq!(controller.tick(&mut session, t0 + 2000 * MS), None);
        assert_eq!(origin(&session).y, 0);

        assert_eq!(
            controller.apply(&mut session, Intent::TogglePause, t0 + 2000 * MS),
            Some(ActionOutcome::Resumed)
        );
        assert_eq!(controller.tick(&mut session, t0 + 2100 * MS), None);
        assert!(controller.tick(&mut session, t0 + 2501 * MS).is_some());
    }

    #[test]
    fn test_start_after_game_over_begins_new_game() {
        let t0 = Instant::now();
        let mut well = Well::new(WellSize::STANDARD);
        for x in 0..10 {
            well.fill_cell(x, 0, Cell::Locked(PieceColor::Green));
        }
        let mut session = o_session().with_well(well);
        let mut controller = Controller::new(Cadence::default(), true, t0);

        assert_eq!(
            controller.apply(&mut session, Intent::Start, t0),
            Some(ActionOutcome::GameOver { lines_cleared: 0 })
        );
        assert_eq!(
            controller.apply(&mut session, Intent::Start, t0 + MS),
            Some(ActionOutcome::Started)
        );
        assert!(session.well().is_empty());
    }

    #[test]
    fn test_restart_discards_progress() {
        let t0 = Instant::now();
        let mut session = o_session();
        let mut controller = Controller::new(Cadence::default(), false, t0);
        controller.apply(&mut session, Intent::Start, t0);
        while controller.apply(&mut session, Intent::SoftDropOn, t0) == Some(ActionOutcome::Moved)
        {
        }
        assert!(!session.well().is_empty());

        assert_eq!(
            controller.apply(&mut session, Intent::Restart, t0 + MS),
            Some(ActionOutcome::Started)
        );
        assert!(session.well().is_empty());
        assert_eq!(session.ledger().completed_pieces(), 0);
    }
}
