//! Game-state engine for a falling-block puzzle.
//!
//! The engine owns the rules only: piece catalog, well (grid) collision and
//! line clears, scoring, and the session state machine. Timing, input and
//! rendering belong to the host, which drives a [`GameSession`] with discrete
//! intents and draws its [`SessionSnapshot`].

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Requested well dimensions cannot hold a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("well must be between 4x4 and 255x255 cells, got {columns}x{rows}")]
pub struct InvalidWellSize {
    columns: u32,
    rows: u32,
}

impl InvalidWellSize {
    pub(crate) const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }
}

/// High-score collaborator failed.
///
/// The session never propagates this error; it is recorded in the
/// [`ScoreLedger`] and play continues.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum HighScoreStoreError {
    #[display("high score store I/O failed: {_0}")]
    Io(std::io::Error),
    #[display("high score store is malformed: {_0}")]
    Malformed(#[error(not(source))] String),
    #[display("high score store is unavailable")]
    Unavailable,
}

/// Piece seed text is not 32 hexadecimal digits.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid piece seed: expected 32 hex digits, got {input:?}")]
pub struct ParsePieceSeedError {
    #[error(not(source))]
    input: String,
}

impl ParsePieceSeedError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }
}
