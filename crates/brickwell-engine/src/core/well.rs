use crate::InvalidWellSize;

use super::piece::{Piece, PieceColor, Position};

/// A single cell of the well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum Cell {
    /// Nothing locked here.
    #[default]
    Empty,
    /// Locked by a piece of the given colour.
    Locked(PieceColor),
}

/// Dimensions of a well, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WellSize {
    columns: u8,
    rows: u8,
}

impl Default for WellSize {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl WellSize {
    /// Standard 10×20 well.
    pub const STANDARD: Self = Self {
        columns: 10,
        rows: 20,
    };

    // Smallest side that still fits an upright or lying I-piece.
    const MIN_SIDE: u32 = 4;

    pub fn new(columns: u32, rows: u32) -> Result<Self, InvalidWellSize> {
        let err = InvalidWellSize::new(columns, rows);
        if columns < Self::MIN_SIDE || rows < Self::MIN_SIDE {
            return Err(err);
        }
        let columns = u8::try_from(columns).map_err(|_| err)?;
        let rows = u8::try_from(rows).map_err(|_| err)?;
        Ok(Self { columns, rows })
    }

    /// Derives the row count from a play-field height and a cell size.
    ///
    /// A 600px field with 30px cells gives 20 rows.
    pub fn from_play_field(
        field_height: u32,
        cell_size: u32,
        columns: u32,
    ) -> Result<Self, InvalidWellSize> {
        let rows = field_height.checked_div(cell_size).unwrap_or(0);
        Self::new(columns, rows)
    }

    #[must_use]
    pub const fn columns(self) -> u8 {
        self.columns
    }

    #[must_use]
    pub const fn rows(self) -> u8 {
        self.rows
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct WellRow {
    cells: Vec<Cell>,
}

impl WellRow {
    fn empty(columns: u8) -> Self {
        Self {
            cells: vec![Cell::Empty; usize::from(columns)],
        }
    }

    fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_locked())
    }
}

/// The grid of locked cells.
///
/// Row-major: row 0 is the top of the well. The well only knows about cells
/// that have been locked; the falling piece lives in the session and is
/// tested against the well with [`Well::is_valid`].
///
/// # Example
///
/// ```
/// use brickwell_engine::{Piece, PieceColor, PieceKind, Well, WellSize};
///
/// let mut well = Well::new(WellSize::STANDARD);
/// let piece = Piece::spawn(PieceKind::O, PieceColor::Yellow, 10);
///
/// let landing = well.drop_distance(&piece);
/// assert_eq!(landing, 18);
///
/// well.lock(&piece.shifted(0, landing as i32));
/// assert_eq!(well.clear_lines(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Well {
    size: WellSize,
    rows: Vec<WellRow>,
}

impl Default for Well {
    fn default() -> Self {
        Self::new(WellSize::STANDARD)
    }
}

impl Well {
    /// Creates an empty well.
    #[must_use]
    pub fn new(size: WellSize) -> Self {
        Self {
            size,
            rows: vec![WellRow::empty(size.columns); usize::from(size.rows)],
        }
    }

    #[must_use]
    pub fn size(&self) -> WellSize {
        self.size
    }

    #[must_use]
    pub fn columns(&self) -> u8 {
        self.size.columns
    }

    #[must_use]
    pub fn rows(&self) -> u8 {
        self.size.rows
    }

    /// Returns the cell at column `x`, row `y`, or `None` outside the well.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.rows.get(y)?.cells.get(x).copied()
    }

    /// Iterates over the rows from top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|row| row.cells.as_slice())
    }

    /// Number of locked cells.
    #[must_use]
    pub fn locked_count(&self) -> usize {
        self.lines()
            .flatten()
            .filter(|cell| cell.is_locked())
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines().flatten().all(|cell| cell.is_empty())
    }

    /// Overwrites a single cell.
    ///
    /// Coordinates outside the well are ignored.
    pub fn fill_cell(&mut self, x: usize, y: usize, cell: Cell) {
        if let Some(slot) = self.rows.get_mut(y).and_then(|row| row.cells.get_mut(x)) {
            *slot = cell;
        }
    }

    /// Returns whether `piece`, shifted by `(dx, dy)`, fits in the well.
    ///
    /// A placement is rejected when any occupied cell lands left of column 0,
    /// right of the last column, below the last row, or on a locked cell.
    /// Cells above row 0 are allowed so pieces can spawn partly outside.
    #[must_use]
    pub fn is_valid(&self, piece: &Piece, dx: i32, dy: i32) -> bool {
        let columns = i32::from(self.size.columns);
        let rows = i32::from(self.size.rows);
        piece.cells().into_iter().all(|Position { x, y }| {
            let (x, y) = (x + dx, y + dy);
            if x < 0 || x >= columns || y >= rows {
                return false;
            }
            y < 0 || matches!(self.cell(x, y), Some(Cell::Empty))
        })
    }

    /// Writes every occupied cell of `piece` into the well with its colour.
    ///
    /// Placement is not validated; callers check [`Self::is_valid`] first.
    /// Cells above the well are discarded.
    pub fn lock(&mut self, piece: &Piece) {
        for Position { x, y } in piece.cells() {
            if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) {
                self.fill_cell(x, y, Cell::Locked(piece.color()));
            }
        }
    }

    /// Clears filled rows and returns how many were removed.
    ///
    /// Rows are compacted bottom-up in one pass, so every row that was full
    /// before the call is removed exactly once, adjacent or not. Empty rows
    /// are inserted at the top.
    pub fn clear_lines(&mut self) -> usize {
        let mut count = 0;
        for y in (0..self.rows.len()).rev() {
            if self.rows[y].is_filled() {
                count += 1;
                continue;
            }
            if count > 0 {
                self.rows.swap(y, y + count);
            }
        }
        for row in &mut self.rows[..count] {
            *row = WellRow::empty(self.size.columns);
        }
        count
    }

    /// Number of rows `piece` can fall before it would collide.
    ///
    /// Pure query used for the ghost preview; returns 0 when the piece is
    /// already resting (or already invalid).
    #[must_use]
    pub fn drop_distance(&self, piece: &Piece) -> u32 {
        let mut distance = 0;
        while self.is_valid(piece, 0, distance + 1) {
            distance += 1;
        }
        distance.unsigned_abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PieceKind;

    const RED: Cell = Cell::Locked(PieceColor::Salmon);

    fn fill_row(well: &mut Well, y: usize, cell: Cell) {
        for x in 0..usize::from(well.columns()) {
            well.fill_cell(x, y, cell);
        }
    }

    fn snapshot(well: &Well) -> Vec<Vec<Cell>> {
        well.lines().map(<[Cell]>::to_vec).collect()
    }

    #[test]
    fn test_well_size_validation() {
        assert_eq!(WellSize::new(10, 20), Ok(WellSize::STANDARD));
        assert!(WellSize::new(3, 20).is_err());
        assert!(WellSize::new(10, 3).is_err());
        assert!(WellSize::new(256, 20).is_err());
    }

    #[test]
    fn test_well_size_from_play_field() {
        let size = WellSize::from_play_field(600, 30, 10).unwrap();
        assert_eq!((size.columns(), size.rows()), (10, 20));
        assert!(WellSize::from_play_field(600, 0, 10).is_err());
        assert!(WellSize::from_play_field(60, 30, 10).is_err());
    }

    #[test]
    fn test_new_well_is_empty() {
        let well = Well::new(WellSize::STANDARD);
        assert_eq!(well.lines().count(), 20);
        assert!(well.lines().all(|row| row.len() == 10));
        assert_eq!(well.locked_count(), 0);
        assert_eq!(well.cell(0, 0), Some(Cell::Empty));
        assert_eq!(well.cell(10, 0), None);
        assert_eq!(well.cell(0, -1), None);
    }

    #[test]
    fn test_is_valid_walls_and_floor() {
        let well = Well::default();
        let piece = Piece::spawn(PieceKind::O, PieceColor::Yellow, 10);

        assert!(well.is_valid(&piece, 0, 0));
        assert!(well.is_valid(&piece, -4, 0));
        assert!(!well.is_valid(&piece, -5, 0));
        assert!(well.is_valid(&piece, 4, 0));
        assert!(!well.is_valid(&piece, 5, 0));
        assert!(well.is_valid(&piece, 0, 18));
        assert!(!well.is_valid(&piece, 0, 19));
    }

    #[test]
    fn test_is_valid_allows_rows_above_well() {
        let well = Well::default();
        let piece = Piece::spawn(PieceKind::I, PieceColor::Cyan, 10).rotated_clockwise();
        assert!(well.is_valid(&piece, 0, -3));
        assert!(!well.is_valid(&piece, -4, -3), "walls still apply above the well");
    }

    #[test]
    fn test_is_valid_rejects_locked_cells() {
        let mut well = Well::default();
        well.fill_cell(5, 1, RED);
        let piece = Piece::spawn(PieceKind::O, PieceColor::Yellow, 10);
        assert!(!well.is_valid(&piece, 0, 0));
        assert!(well.is_valid(&piece, -2, 0));
        assert!(!well.is_valid(&piece, 1, 0));
    }

    #[test]
    fn test_validity_matches_footprint() {
        let mut well = Well::default();
        well.fill_cell(3, 10, RED);
        well.fill_cell(7, 15, RED);
        for kind in PieceKind::ALL {
            let mut piece = Piece::spawn(kind, PieceColor::Green, 10);
            for _ in 0..4 {
                for dx in -6..=6 {
                    for dy in -3..=20 {
                        let all_free = piece.cells().into_iter().all(|p| {
                            let (x, y) = (p.x + dx, p.y + dy);
                            (0..10).contains(&x)
                                && y < 20
                                && (y < 0 || well.cell(x, y) == Some(Cell::Empty))
                        });
                        assert_eq!(
                            well.is_valid(&piece, dx, dy),
                            all_free,
                            "{kind:?} at ({dx}, {dy})"
                        );
                    }
                }
                piece = piece.rotated_clockwise();
            }
        }
    }

    #[test]
    fn test_lock_commits_exact_footprint() {
        let mut well = Well::default();
        well.fill_cell(0, 19, RED);
        let before = snapshot(&well);

        let piece = Piece::spawn(PieceKind::T, PieceColor::Magenta, 10).shifted(0, 10);
        let footprint = piece.cells();
        well.lock(&piece);

        for (y, row) in well.lines().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let pos = Position::new(i32::try_from(x).unwrap(), i32::try_from(y).unwrap());
                if footprint.contains(&pos) {
                    assert_eq!(*cell, Cell::Locked(PieceColor::Magenta), "({x}, {y})");
                } else {
                    assert_eq!(*cell, before[y][x], "({x}, {y}) should be untouched");
                }
            }
        }
        assert_eq!(well.locked_count(), 5);
    }

    #[test]
    fn test_lock_discards_cells_above_well() {
        let mut well = Well::default();
        let piece = Piece::spawn(PieceKind::I, PieceColor::Cyan, 10)
            .rotated_clockwise()
            .shifted(0, -2);
        well.lock(&piece);
        assert_eq!(well.locked_count(), 2);
    }

    #[test]
    fn test_clear_lines_none() {
        let mut well = Well::default();
        fill_row(&mut well, 19, RED);
        well.fill_cell(4, 19, Cell::Empty);
        let before = snapshot(&well);
        assert_eq!(well.clear_lines(), 0);
        assert_eq!(snapshot(&well), before);
    }

    #[test]
    fn test_clear_lines_non_adjacent_rows() {
        let mut well = Well::default();
        let marker = |n: usize| Cell::Locked(PieceColor::ALL[n % PieceColor::ALL.len()]);

        // Partial rows carrying a marker in column 0 so movement can be traced.
        for y in 0..20 {
            well.fill_cell(0, y, marker(y));
        }
        fill_row(&mut well, 2, RED);
        fill_row(&mut well, 5, RED);
        let before = snapshot(&well);

        assert_eq!(well.clear_lines(), 2);
        let after = snapshot(&well);

        assert!(after[0].iter().all(|c| c.is_empty()));
        assert!(after[1].iter().all(|c| c.is_empty()));
        // Rows 0,1 move down by two (above both cleared rows).
        assert_eq!(after[2], before[0]);
        assert_eq!(after[3], before[1]);
        // Rows 3,4 move down by one (between the cleared rows).
        assert_eq!(after[4], before[3]);
        assert_eq!(after[5], before[4]);
        // Rows below row 5 are unchanged.
        for y in 6..20 {
            assert_eq!(after[y], before[y], "row {y}");
        }
    }

    #[test]
    fn test_clear_lines_four_consecutive() {
        let mut well = Well::default();
        for y in 16..20 {
            fill_row(&mut well, y, RED);
        }
        well.fill_cell(3, 15, RED);

        assert_eq!(well.clear_lines(), 4);
        assert_eq!(well.locked_count(), 1);
        assert_eq!(well.cell(3, 19), Some(RED));
    }

    #[test]
    fn test_clear_lines_all_filled() {
        let mut well = Well::new(WellSize::new(4, 6).unwrap());
        for y in 0..6 {
            fill_row(&mut well, y, RED);
        }
        assert_eq!(well.clear_lines(), 6);
        assert_eq!(well.locked_count(), 0);
    }

    #[test]
    fn test_drop_distance_is_pure() {
        let mut well = Well::default();
        fill_row(&mut well, 19, RED);
        well.fill_cell(4, 19, Cell::Empty);
        let before = well.clone();

        let piece = Piece::spawn(PieceKind::O, PieceColor::Yellow, 10);
        assert_eq!(well.drop_distance(&piece), 17);
        assert_eq!(well, before);

        let resting = piece.shifted(0, 17);
        assert_eq!(well.drop_distance(&resting), 0);
    }
}
