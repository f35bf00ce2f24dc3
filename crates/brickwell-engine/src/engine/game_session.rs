use crate::{
    HighScoreStore, Piece, PieceSource, RandomPieceSource, ScoreLedger, SessionSnapshot, Well,
    WellSize,
};

/// Lifecycle phase of a [`GameSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionPhase {
    /// Created or reset, waiting for `start`.
    Idle,
    /// Accepting movement and rotation.
    Active,
    Paused,
    /// A freshly spawned piece did not fit. Only `reset` leaves this phase.
    Over,
}

/// What a session call did.
///
/// Calls that make no sense in the current phase return [`Self::Ignored`]
/// and leave the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ActionOutcome {
    Started,
    Moved,
    Rotated,
    /// The move or rotation would collide; nothing changed.
    Blocked,
    /// The piece locked and the next one spawned.
    Locked { lines_cleared: usize },
    /// The piece locked and the next one did not fit.
    GameOver { lines_cleared: usize },
    Paused,
    Resumed,
    Reset,
    Ignored,
}

/// One player's game: the well, the falling piece and the score.
///
/// The session holds rules only. It has no clock: the host calls
/// [`Self::move_piece`] with `dy = 1` whenever its drop timer fires and
/// translates key presses into the other calls.
///
/// # Example
///
/// ```
/// use brickwell_engine::{
///     ActionOutcome, GameSession, MemoryHighScoreStore, PieceColor, PieceKind,
///     ScriptedPieceSource, WellSize,
/// };
///
/// let mut session = GameSession::with_piece_source(
///     "alice",
///     WellSize::STANDARD,
///     Box::new(ScriptedPieceSource::repeat(PieceKind::O, PieceColor::Yellow)),
///     Box::new(MemoryHighScoreStore::new()),
/// );
/// session.start();
///
/// assert_eq!(session.hard_drop_offset(), 18);
/// for _ in 0..18 {
///     assert_eq!(session.soft_drop(), ActionOutcome::Moved);
/// }
/// assert_eq!(session.soft_drop(), ActionOutcome::Locked { lines_cleared: 0 });
/// ```
#[derive(Debug)]
pub struct GameSession {
    player: String,
    well: Well,
    current: Piece,
    next: Piece,
    ledger: ScoreLedger,
    phase: SessionPhase,
    pieces: Box<dyn PieceSource>,
    store: Box<dyn HighScoreStore>,
}

impl GameSession {
    /// Creates an idle session drawing uniformly random pieces.
    ///
    /// The high score of `player` is loaded from `store` here, once.
    #[must_use]
    pub fn new(
        player: impl Into<String>,
        size: WellSize,
        store: Box<dyn HighScoreStore>,
    ) -> Self {
        Self::with_piece_source(player, size, Box::new(RandomPieceSource::new()), store)
    }

    #[must_use]
    pub fn with_piece_source(
        player: impl Into<String>,
        size: WellSize,
        mut pieces: Box<dyn PieceSource>,
        mut store: Box<dyn HighScoreStore>,
    ) -> Self {
        let player = player.into();
        let ledger = ScoreLedger::load(&player, store.as_mut());
        let current = pieces.next_piece(size.columns());
        let next = pieces.next_piece(size.columns());
        Self {
            player,
            well: Well::new(size),
            current,
            next,
            ledger,
            phase: SessionPhase::Idle,
            pieces,
            store,
        }
    }

    /// Replaces the well before the game starts.
    ///
    /// Has no effect outside [`SessionPhase::Idle`].
    #[must_use]
    pub fn with_well(mut self, well: Well) -> Self {
        if self.phase.is_idle() {
            let columns = well.columns();
            self.current = Piece::spawn(self.current.kind(), self.current.color(), columns);
            self.next = Piece::spawn(self.next.kind(), self.next.color(), columns);
            self.well = well;
        }
        self
    }

    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn well(&self) -> &Well {
        &self.well
    }

    #[must_use]
    pub fn current_piece(&self) -> &Piece {
        &self.current
    }

    #[must_use]
    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    #[must_use]
    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// Begins play: Idle → Active with freshly drawn pieces.
    ///
    /// Goes straight to [`SessionPhase::Over`] if the first piece does not fit.
    pub fn start(&mut self) -> ActionOutcome {
        if !self.phase.is_idle() {
            return ActionOutcome::Ignored;
        }
        let columns = self.well.columns();
        self.current = self.pieces.next_piece(columns);
        self.next = self.pieces.next_piece(columns);
        if self.well.is_valid(&self.current, 0, 0) {
            self.phase = SessionPhase::Active;
            ActionOutcome::Started
        } else {
            self.phase = SessionPhase::Over;
            ActionOutcome::GameOver { lines_cleared: 0 }
        }
    }

    /// Shifts the current piece by `(dx, dy)`.
    ///
    /// A blocked downward move locks the piece, clears lines, scores and
    /// spawns the next piece. A blocked sideways move changes nothing.
    pub fn move_piece(&mut self, dx: i32, dy: i32) -> ActionOutcome {
        if !self.phase.is_active() {
            return ActionOutcome::Ignored;
        }
        if self.well.is_valid(&self.current, dx, dy) {
            self.current = self.current.shifted(dx, dy);
            return ActionOutcome::Moved;
        }
        if dy == 0 {
            return ActionOutcome::Blocked;
        }
        self.lock_current()
    }

    pub fn move_left(&mut self) -> ActionOutcome {
        self.move_piece(-1, 0)
    }

    pub fn move_right(&mut self) -> ActionOutcome {
        self.move_piece(1, 0)
    }

    /// One row down; locks when the piece is resting.
    pub fn soft_drop(&mut self) -> ActionOutcome {
        self.move_piece(0, 1)
    }

    /// Rotates the current piece clockwise in place. There are no wall kicks.
    pub fn rotate(&mut self) -> ActionOutcome {
        if !self.phase.is_active() {
            return ActionOutcome::Ignored;
        }
        let rotated = self.current.rotated_clockwise();
        if self.well.is_valid(&rotated, 0, 0) {
            self.current = rotated;
            ActionOutcome::Rotated
        } else {
            ActionOutcome::Blocked
        }
    }

    pub fn toggle_pause(&mut self) -> ActionOutcome {
        match self.phase {
            SessionPhase::Active => {
                self.phase = SessionPhase::Paused;
                ActionOutcome::Paused
            }
            SessionPhase::Paused => {
                self.phase = SessionPhase::Active;
                ActionOutcome::Resumed
            }
            SessionPhase::Idle | SessionPhase::Over => ActionOutcome::Ignored,
        }
    }

    /// Back to Idle with an empty well and a zero score.
    ///
    /// The high score is kept and refreshed from the store.
    pub fn reset(&mut self) -> ActionOutcome {
        let columns = self.well.columns();
        self.well = Well::new(self.well.size());
        self.ledger.start_over(&self.player, self.store.as_mut());
        self.current = self.pieces.next_piece(columns);
        self.next = self.pieces.next_piece(columns);
        self.phase = SessionPhase::Idle;
        ActionOutcome::Reset
    }

    /// Rows the current piece would fall on a hard drop. Never mutates.
    #[must_use]
    pub fn hard_drop_offset(&self) -> u32 {
        self.well.drop_distance(&self.current)
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            player: &self.player,
            well: &self.well,
            current: self.current,
            next: self.next,
            ghost_offset: self.hard_drop_offset(),
            score: self.ledger.score(),
            high_score: self.ledger.high_score(),
            phase: self.phase,
            lines_cleared: self.ledger.total_cleared_lines(),
            completed_pieces: self.ledger.completed_pieces(),
        }
    }

    fn lock_current(&mut self) -> ActionOutcome {
        self.well.lock(&self.current);
        let lines_cleared = self.well.clear_lines();
        self.ledger
            .complete_piece_drop(lines_cleared, &self.player, self.store.as_mut());

        self.current = self.next;
        self.next = self.pieces.next_piece(self.well.columns());
        if self.well.is_valid(&self.current, 0, 0) {
            ActionOutcome::Locked { lines_cleared }
        } else {
            self.phase = SessionPhase::Over;
            ActionOutcome::GameOver { lines_cleared }
        }
    }
}
