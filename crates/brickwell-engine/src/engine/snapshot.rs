use crate::{Piece, SessionPhase, Well};

/// Read-only view of a session for one frame.
///
/// Borrowing the well keeps snapshots free to take every frame; the host
/// drops it before sending the next intent.
#[derive(Debug, Clone, Copy)]
pub struct SessionSnapshot<'a> {
    pub player: &'a str,
    pub well: &'a Well,
    pub current: Piece,
    pub next: Piece,
    /// Rows the current piece can still fall (see [`Well::drop_distance`]).
    pub ghost_offset: u32,
    pub score: u64,
    pub high_score: u64,
    pub phase: SessionPhase,
    pub lines_cleared: usize,
    pub completed_pieces: usize,
}

impl SessionSnapshot<'_> {
    /// The current piece moved to where it would land.
    #[must_use]
    pub fn ghost_piece(&self) -> Piece {
        let offset = i32::try_from(self.ghost_offset).unwrap_or(0);
        self.current.shifted(0, offset)
    }
}
