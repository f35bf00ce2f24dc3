use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::HighScoreStoreError;

/// Persistence collaborator for per-player high scores.
///
/// The player identity is an opaque string chosen by the host (typically the
/// name typed on the login screen). A player with no record has a high score
/// of 0; implementations return `Ok(0)` rather than an error in that case.
pub trait HighScoreStore: fmt::Debug {
    fn load_high_score(&mut self, player: &str) -> Result<u64, HighScoreStoreError>;
    fn save_high_score(&mut self, player: &str, score: u64) -> Result<(), HighScoreStoreError>;
}

#[derive(Debug, Default)]
struct MemoryStoreState {
    scores: HashMap<String, u64>,
    unavailable: bool,
    saves: usize,
}

/// In-memory store.
///
/// Clones share the same map, so a host (or a test) can keep a handle and
/// observe what the session wrote after handing a boxed clone to it.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    state: Rc<RefCell<MemoryStoreState>>,
}

impl MemoryHighScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `scores`.
    #[must_use]
    pub fn with_scores<S>(scores: impl IntoIterator<Item = (S, u64)>) -> Self
    where
        S: Into<String>,
    {
        let this = Self::new();
        this.state
            .borrow_mut()
            .scores
            .extend(scores.into_iter().map(|(player, score)| (player.into(), score)));
        this
    }

    /// Makes every subsequent load and save fail with
    /// [`HighScoreStoreError::Unavailable`] while `unavailable` is set.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.borrow_mut().unavailable = unavailable;
    }

    /// Stored score for `player`, bypassing availability.
    #[must_use]
    pub fn get(&self, player: &str) -> Option<u64> {
        self.state.borrow().scores.get(player).copied()
    }

    /// Number of successful saves so far.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.state.borrow().saves
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load_high_score(&mut self, player: &str) -> Result<u64, HighScoreStoreError> {
        let state = self.state.borrow();
        if state.unavailable {
            return Err(HighScoreStoreError::Unavailable);
        }
        Ok(state.scores.get(player).copied().unwrap_or(0))
    }

    fn save_high_score(&mut self, player: &str, score: u64) -> Result<(), HighScoreStoreError> {
        let mut state = self.state.borrow_mut();
        if state.unavailable {
            return Err(HighScoreStoreError::Unavailable);
        }
        state.scores.insert(player.to_owned(), score);
        state.saves += 1;
        Ok(())
    }
}
