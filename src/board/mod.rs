//! Board representation for five-in-a-row

pub mod board;


// Re-exports
pub use board::Board;

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;
/// Smallest board on which a five can be made
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest supported board; keeps labels at two digits
pub const MAX_BOARD_SIZE: usize = 99;
/// Run length that wins the game
pub const WIN_LENGTH: usize = 5;

/// Stone colors
///
/// Black is the first player, White the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Single-character glyph used by the text board
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
            Stone::Empty => '.',
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::Empty => "Empty",
        };
        f.write_str(name)
    }
}

/// Position on the board
///
/// A `Pos` carries no board size; bounds are checked against a concrete
/// [`Board`] with [`Board::in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: idx / size,
            col: idx % size,
        }
    }

    /// Step `dist` cells along `(dr, dc)`, or `None` when that leaves the
    /// `size`x`size` board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, dist: i32, size: usize) -> Option<Pos> {
        let r = self.row as i64 + (dr * dist) as i64;
        let c = self.col as i64 + (dc * dist) as i64;
        if Self::is_valid(r, c, size) {
            Some(Pos::new(r as usize, c as usize))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid(row: i64, col: i64, size: usize) -> bool {
        let size = size as i64;
        row >= 0 && row < size && col >= 0 && col < size
    }

    /// Chebyshev (king-move) distance
    #[inline]
    pub fn chebyshev(self, other: Pos) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
