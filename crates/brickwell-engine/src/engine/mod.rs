//! Session rules layered on top of the [`core`](crate::core) data structures.
//!
//! - [`GameSession`] - Idle/Active/Paused/Over state machine driven by discrete intents
//! - [`ScoreLedger`] - Score, high score and fail-soft persistence
//! - [`PieceSource`] - Where new pieces come from (seeded random or scripted)
//! - [`HighScoreStore`] - Persistence collaborator keyed by player identity
//! - [`SessionSnapshot`] - Read-only view handed to the renderer
//!
//! # Example
//!
//! ```
//! use brickwell_engine::{ActionOutcome, GameSession, MemoryHighScoreStore, WellSize};
//!
//! let store = MemoryHighScoreStore::new();
//! let mut session = GameSession::new("alice", WellSize::STANDARD, Box::new(store));
//!
//! assert_eq!(session.start(), ActionOutcome::Started);
//! session.move_left();
//! session.rotate();
//!
//! // Drive the piece down until it locks.
//! while session.soft_drop() == ActionOutcome::Moved {}
//!
//! assert_eq!(session.snapshot().score, 0);
//! ```

pub use self::{
    game_session::*, high_score_store::*, piece_source::*, score_ledger::*, snapshot::*,
};

mod game_session;
mod high_score_store;
mod piece_source;
mod score_ledger;
mod snapshot;
