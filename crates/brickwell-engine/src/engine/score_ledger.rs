use crate::{HighScoreStore, HighScoreStoreError};

/// Points awarded for clearing `lines` rows with a single lock: `lines² × 10`.
///
/// # Example
///
/// ```
/// use brickwell_engine::line_clear_points;
///
/// assert_eq!(line_clear_points(0), 0);
/// assert_eq!(line_clear_points(1), 10);
/// assert_eq!(line_clear_points(4), 160);
/// ```
#[must_use]
pub fn line_clear_points(lines: usize) -> u64 {
    let lines = lines as u64;
    lines * lines * 10
}

/// Score, high score and play statistics for one player.
///
/// - **Score**: starts at 0 and only grows, by [`line_clear_points`] per lock
/// - **High score**: loaded once from the store, saved whenever the score passes it
/// - **Completed pieces** / **cleared lines**: running totals for the current game
///
/// Store failures never interrupt play. A failed load counts as 0, a failed
/// save keeps the in-memory value, and both are kept in
/// [`Self::persistence_failures`] for the host to report later.
#[derive(Debug)]
pub struct ScoreLedger {
    score: u64,
    high_score: u64,
    completed_pieces: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; 5],
    failures: Vec<HighScoreStoreError>,
}

impl ScoreLedger {
    /// Creates a ledger with the stored high score of `player`.
    pub fn load(player: &str, store: &mut dyn HighScoreStore) -> Self {
        let mut this = Self {
            score: 0,
            high_score: 0,
            completed_pieces: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; 5],
            failures: vec![],
        };
        this.high_score = this.fetch_high_score(player, store);
        this
    }

    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub const fn high_score(&self) -> u64 {
        self.high_score
    }

    /// Number of pieces locked in the current game.
    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Histogram of locks by lines cleared: `[0]` locks that cleared nothing,
    /// up to `[4]` for four-line clears.
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; 5] {
        &self.line_cleared_counter
    }

    /// Store errors seen so far, oldest first.
    #[must_use]
    pub fn persistence_failures(&self) -> &[HighScoreStoreError] {
        &self.failures
    }

    /// Records a lock that cleared `cleared_lines` rows and returns the points earned.
    pub fn complete_piece_drop(
        &mut self,
        cleared_lines: usize,
        player: &str,
        store: &mut dyn HighScoreStore,
    ) -> u64 {
        self.completed_pieces += 1;
        self.total_cleared_lines += cleared_lines;
        if let Some(count) = self.line_cleared_counter.get_mut(cleared_lines) {
            *count += 1;
        }

        let points = line_clear_points(cleared_lines);
        self.score += points;
        if self.score > self.high_score {
            self.high_score = self.score;
            if let Err(e) = store.save_high_score(player, self.high_score) {
                self.failures.push(e);
            }
        }
        points
    }

    /// Starts a new game: zeroes score and statistics, and refreshes the
    /// high score from the store without ever lowering it.
    pub fn start_over(&mut self, player: &str, store: &mut dyn HighScoreStore) {
        self.score = 0;
        self.completed_pieces = 0;
        self.total_cleared_lines = 0;
        self.line_cleared_counter = [0; 5];
        let stored = self.fetch_high_score(player, store);
        self.high_score = self.high_score.max(stored);
    }

    fn fetch_high_score(&mut self, player: &str, store: &mut dyn HighScoreStore) -> u64 {
        match store.load_high_score(player) {
            Ok(score) => score,
            Err(e) => {
                self.failures.push(e);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryHighScoreStore;

    #[test]
    fn test_points_per_line_count() {
        let points: Vec<_> = (1..=4).map(line_clear_points).collect();
        assert_eq!(points, [10, 40, 90, 160]);
    }

    #[test]
    fn test_load_reads_player_record() {
        let mut store = MemoryHighScoreStore::with_scores([("alice", 250), ("bob", 30)]);
        let ledger = ScoreLedger::load("alice", &mut store);
        assert_eq!(ledger.score(), 0);
        assert_eq!(ledger.high_score(), 250);
        assert!(ledger.persistence_failures().is_empty());
    }

    #[test]
    fn test_failed_load_counts_as_zero() {
        let mut store = MemoryHighScoreStore::with_scores([("alice", 250)]);
        store.set_unavailable(true);
        let ledger = ScoreLedger::load("alice", &mut store);
        assert_eq!(ledger.high_score(), 0);
        assert_eq!(ledger.persistence_failures().len(), 1);
    }

    #[test]
    fn test_statistics_accumulate() {
        let mut store = MemoryHighScoreStore::new();
        let mut ledger = ScoreLedger::load("p", &mut store);
        for lines in [0, 1, 0, 4, 2] {
            ledger.complete_piece_drop(lines, "p", &mut store);
        }
        assert_eq!(ledger.completed_pieces(), 5);
        assert_eq!(ledger.total_cleared_lines(), 7);
        assert_eq!(ledger.line_cleared_counter(), &[2, 1, 1, 0, 1]);
        assert_eq!(ledger.score(), 10 + 160 + 40);
    }

    #[test]
    fn test_high_score_saved_only_when_beaten() {
        let mut store = MemoryHighScoreStore::with_scores([("p", 45)]);
        let mut ledger = ScoreLedger::load("p", &mut store);

        ledger.complete_piece_drop(2, "p", &mut store);
        assert_eq!(ledger.high_score(), 45);
        assert_eq!(store.save_count(), 0);

        ledger.complete_piece_drop(1, "p", &mut store);
        assert_eq!(ledger.high_score(), 50);
        assert_eq!(store.get("p"), Some(50));
        assert_eq!(store.save_count(), 1);

        ledger.complete_piece_drop(0, "p", &mut store);
        assert_eq!(store.save_count(), 1, "no save without a score change");
    }

    #[test]
    fn test_failed_save_keeps_in_memory_high_score() {
        let mut store = MemoryHighScoreStore::new();
        let mut ledger = ScoreLedger::load("p", &mut store);
        store.set_unavailable(true);

        ledger.complete_piece_drop(3, "p", &mut store);
        assert_eq!(ledger.score(), 90);
        assert_eq!(ledger.high_score(), 90);
        assert_eq!(store.get("p"), None);
        assert!(matches!(
            ledger.persistence_failures(),
            [HighScoreStoreError::Unavailable]
        ));
    }

    #[test]
    fn test_start_over_keeps_best_high_score() {
        let mut store = MemoryHighScoreStore::new();
        let mut ledger = ScoreLedger::load("p", &mut store);
        store.set_unavailable(true);
        ledger.complete_piece_drop(4, "p", &mut store);

        // The store never saw 160, and now reports an older value.
        store.set_unavailable(false);
        let mut other = store.clone();
        other.save_high_score("p", 100).unwrap();

        ledger.start_over("p", &mut store);
        assert_eq!(ledger.score(), 0);
        assert_eq!(ledger.completed_pieces(), 0);
        assert_eq!(ledger.high_score(), 160);

        other.save_high_score("p", 500).unwrap();
        ledger.start_over("p", &mut store);
        assert_eq!(ledger.high_score(), 500);
    }
}
