/// Largest side length of a shape matrix.
pub const MAX_SHAPE_SIDE: usize = 4;

/// Immutable boolean matrix describing which cells of a piece are occupied.
///
/// Rows run top to bottom and columns left to right, matching well
/// coordinates. Rotated forms are not stored anywhere; [`Shape::rotated_clockwise`]
/// computes them on demand.
///
/// # Example
///
/// ```
/// use brickwell_engine::Shape;
///
/// let l = Shape::from_matrix([[1, 0, 0], [1, 1, 1]]);
/// let rotated = l.rotated_clockwise();
///
/// assert_eq!((rotated.width(), rotated.height()), (2, 3));
/// assert!(rotated.is_occupied(0, 0) && rotated.is_occupied(1, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl Shape {
    /// Builds a shape from a row-major 0/1 matrix.
    ///
    /// # Panics
    ///
    /// Panics if either side is zero or larger than [`MAX_SHAPE_SIDE`].
    #[must_use]
    pub const fn from_matrix<const W: usize, const H: usize>(matrix: [[u8; W]; H]) -> Self {
        assert!(W > 0 && W <= MAX_SHAPE_SIDE, "shape width out of range");
        assert!(H > 0 && H <= MAX_SHAPE_SIDE, "shape height out of range");

        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let mut y = 0;
        while y < H {
            let mut x = 0;
            while x < W {
                cells[y][x] = matrix[y][x] != 0;
                x += 1;
            }
            y += 1;
        }

        #[expect(clippy::cast_possible_truncation)]
        let (width, height) = (W as u8, H as u8);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns in the matrix.
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Number of rows in the matrix.
    #[must_use]
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Returns whether the cell at column `x`, row `y` is occupied.
    ///
    /// Cells outside the matrix are reported as empty.
    #[must_use]
    pub fn is_occupied(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height && self.cells[usize::from(y)][usize::from(x)]
    }

    /// Iterates over the `(x, y)` offsets of occupied cells, row by row.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).filter_map(move |x| self.is_occupied(x, y).then_some((x, y)))
        })
    }

    /// Returns the shape turned 90° clockwise.
    ///
    /// Reverses row order then transposes: `rotated[i][j] = self[height - 1 - j][i]`.
    /// Width and height swap.
    #[must_use]
    pub fn rotated_clockwise(&self) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for i in 0..self.width {
            for j in 0..self.height {
                cells[usize::from(i)][usize::from(j)] = self.is_occupied(i, self.height - 1 - j);
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}
