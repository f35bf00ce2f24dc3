use arrayvec::ArrayVec;
use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::shape::{MAX_SHAPE_SIDE, Shape};

/// A falling piece: shape, colour tag and position in the well.
///
/// Pieces are plain values. Moving or rotating returns a new `Piece`; the
/// session decides whether to keep it after asking the well.
///
/// # Example
///
/// ```
/// use brickwell_engine::{Piece, PieceColor, PieceKind};
///
/// let piece = Piece::spawn(PieceKind::O, PieceColor::Yellow, 10);
/// assert_eq!((piece.origin().x, piece.origin().y), (4, 0));
///
/// let moved = piece.shifted(1, 2);
/// assert_eq!((moved.origin().x, moved.origin().y), (5, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    shape: Shape,
    color: PieceColor,
    origin: Position,
}

impl Piece {
    /// Creates a piece in its spawn orientation, horizontally centred on the top row.
    ///
    /// `origin.x = columns / 2 - width / 2`, `origin.y = 0`.
    #[must_use]
    pub fn spawn(kind: PieceKind, color: PieceColor, columns: u8) -> Self {
        let shape = kind.shape();
        let x = i32::from(columns / 2) - i32::from(shape.width() / 2);
        Self {
            kind,
            shape,
            color,
            origin: Position::new(x, 0),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn color(&self) -> PieceColor {
        self.color
    }

    /// Top-left anchor of the shape matrix in well coordinates.
    #[must_use]
    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Returns the piece moved by `(dx, dy)`.
    #[must_use]
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            origin: Position::new(self.origin.x + dx, self.origin.y + dy),
            ..*self
        }
    }

    /// Returns the piece with its shape rotated 90° clockwise about the same origin.
    #[must_use]
    pub fn rotated_clockwise(&self) -> Self {
        Self {
            shape: self.shape.rotated_clockwise(),
            ..*self
        }
    }

    /// Well coordinates of every occupied cell, in row-major shape order.
    #[must_use]
    pub fn cells(&self) -> ArrayVec<Position, { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }> {
        self.shape
            .occupied_cells()
            .map(|(dx, dy)| {
                Position::new(self.origin.x + i32::from(dx), self.origin.y + i32::from(dy))
            })
            .collect()
    }
}

/// Draws a piece with a uniformly random kind and an independently uniform colour,
/// placed at the spawn position for a well `columns` wide.
pub fn random_piece<R>(rng: &mut R, columns: u8) -> Piece
where
    R: Rng + ?Sized,
{
    let kind: PieceKind = rng.random();
    let color: PieceColor = rng.random();
    Piece::spawn(kind, color, columns)
}

/// Cell coordinates in the well.
///
/// - X increases rightward (columns), Y increases downward (rows)
/// - Y may be negative while a piece pokes out above the well
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The seven tetromino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// S-piece.
    S = 2,
    /// Z-piece.
    Z = 3,
    /// L-piece.
    L = 4,
    /// J-piece.
    J = 5,
    /// T-piece.
    T = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
        PieceKind::T,
    ];

    /// Returns the spawn-orientation shape of this kind.
    #[must_use]
    pub const fn shape(self) -> Shape {
        PIECE_SHAPES[self as usize]
    }
}

// Spawn orientations. Rotations are derived at runtime.
const PIECE_SHAPES: [Shape; PieceKind::LEN] = [
    Shape::from_matrix([[1, 1, 1, 1]]),
    Shape::from_matrix([[1, 1], [1, 1]]),
    Shape::from_matrix([[0, 1, 1], [1, 1, 0]]),
    Shape::from_matrix([[1, 1, 0], [0, 1, 1]]),
    Shape::from_matrix([[1, 0, 0], [1, 1, 1]]),
    Shape::from_matrix([[0, 0, 1], [1, 1, 1]]),
    Shape::from_matrix([[0, 1, 0], [1, 1, 1]]),
];

/// Colour tag carried by a piece and by the cells it locks into the well.
///
/// Colour is chosen independently of the kind, so two pieces of the same
/// kind may carry different tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Yellow,
    Magenta,
    Green,
    Salmon,
    Periwinkle,
    Orange,
}

impl Distribution<PieceColor> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceColor {
        PieceColor::ALL[rng.random_range(0..PieceColor::ALL.len())]
    }
}

impl PieceColor {
    pub const ALL: [Self; 7] = [
        PieceColor::Cyan,
        PieceColor::Yellow,
        PieceColor::Magenta,
        PieceColor::Green,
        PieceColor::Salmon,
        PieceColor::Periwinkle,
        PieceColor::Orange,
    ];

    /// RGB triple of the colour.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            PieceColor::Cyan => (0, 255, 255),
            PieceColor::Yellow => (255, 255, 0),
            PieceColor::Magenta => (255, 0, 255),
            PieceColor::Green => (0, 255, 0),
            PieceColor::Salmon => (255, 100, 100),
            PieceColor::Periwinkle => (100, 100, 255),
            PieceColor::Orange => (255, 165, 0),
        }
    }
}
