use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ParsePieceSeedError, Piece, PieceColor, PieceKind, random_piece};

/// Supplies the pieces a session spawns.
///
/// The session asks for one piece at construction, one at `start`, and one
/// at every lock. Implementations return the piece already placed at its
/// spawn position for a well `columns` wide.
pub trait PieceSource: fmt::Debug {
    fn next_piece(&mut self, columns: u8) -> Piece;
}

/// Seed for deterministic piece generation.
///
/// A 128-bit value; the same seed always yields the same sequence of kinds
/// and colours, so a game can be replayed. Its text form is 32 hex digits.
///
/// # Example
///
/// ```
/// use brickwell_engine::{PieceSeed, PieceSource as _, RandomPieceSource};
/// use rand::Rng as _;
///
/// let seed: PieceSeed = rand::rng().random();
/// let mut a = RandomPieceSource::with_seed(seed);
/// let mut b = RandomPieceSource::with_seed(seed.to_string().parse().unwrap());
///
/// assert_eq!(a.next_piece(10), b.next_piece(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSeed([u8; 16]);

impl PieceSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl fmt::Display for PieceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for PieceSeed {
    type Err = ParsePieceSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // from_str_radix alone would accept a leading sign
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParsePieceSeedError::new(s));
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParsePieceSeedError::new(s))?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for PieceSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PieceSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PieceSeed(seed)
    }
}

/// Uniformly random pieces from a seeded PCG generator.
#[derive(Debug, Clone)]
pub struct RandomPieceSource {
    seed: PieceSeed,
    rng: Pcg32,
}

impl Default for RandomPieceSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPieceSource {
    /// Creates a source with a fresh random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self {
            seed,
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// The seed this source was created with.
    #[must_use]
    pub fn seed(&self) -> PieceSeed {
        self.seed
    }
}

impl PieceSource for RandomPieceSource {
    fn next_piece(&mut self, columns: u8) -> Piece {
        random_piece(&mut self.rng, columns)
    }
}

/// Replays a fixed list of pieces, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedPieceSource {
    script: Vec<(PieceKind, PieceColor)>,
    cursor: usize,
}

impl ScriptedPieceSource {
    /// # Panics
    ///
    /// Panics if `script` is empty.
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = (PieceKind, PieceColor)>) -> Self {
        let script: Vec<_> = script.into_iter().collect();
        assert!(!script.is_empty(), "piece script must not be empty");
        Self { script, cursor: 0 }
    }

    /// Every piece is `kind`, coloured `color`.
    #[must_use]
    pub fn repeat(kind: PieceKind, color: PieceColor) -> Self {
        Self::new([(kind, color)])
    }
}

impl PieceSource for ScriptedPieceSource {
    fn next_piece(&mut self, columns: u8) -> Piece {
        let (kind, color) = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        Piece::spawn(kind, color, columns)
    }
}
