//! Board structure: a flat row-major grid of stones

use super::{Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::ConfigError;

/// Game board
///
/// Cells are stored row-major in a single `Vec`, so a cell can be saved and
/// restored around a hypothetical placement without touching the rest of
/// the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Empty board of the default size (15x15)
    pub fn new() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![Stone::Empty; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
        }
    }

    /// Empty board of the given size.
    ///
    /// Fails when `size` is too small for a five to fit or larger than
    /// [`MAX_BOARD_SIZE`].
    pub fn with_size(size: usize) -> Result<Self, ConfigError> {
        let cells = Self::cell_count(size)?;
        Ok(Self {
            size,
            cells: vec![Stone::Empty; cells],
        })
    }

    /// Number of cells on a `size`x`size` board, if that size is supported.
    pub fn cell_count(size: usize) -> Result<usize, ConfigError> {
        if size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall {
                size,
                min: MIN_BOARD_SIZE,
            });
        }
        let too_large = ConfigError::BoardTooLarge {
            size,
            max: MAX_BOARD_SIZE,
        };
        if size > MAX_BOARD_SIZE {
            return Err(too_large);
        }
        size.checked_mul(size).ok_or(too_large)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Get stone at position (`Empty` outside the board)
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.in_bounds(pos) {
            self.cells[pos.to_index(self.size)]
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.get(pos) == Stone::Empty
    }

    /// Place a stone without any rule checks.
    /// Use `GameSession::place` for game moves.
    ///
    /// Out-of-bounds positions are ignored.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        if self.in_bounds(pos) {
            let idx = pos.to_index(self.size);
            self.cells[idx] = stone;
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.place_stone(pos, Stone::Empty);
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&s| s != Stone::Empty)
    }

    /// Iterate over every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.cells.len()).map(move |idx| Pos::from_index(idx, self.size))
    }

    /// Iterate over empty positions in row-major order
    pub fn empty_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == Stone::Empty)
            .map(move |(idx, _)| Pos::from_index(idx, self.size))
    }

    /// Check whether any stone lies within Chebyshev distance `distance`
    /// of `pos`, not counting `pos` itself.
    pub fn has_neighbor(&self, pos: Pos, distance: usize) -> bool {
        let row_lo = pos.row.saturating_sub(distance);
        let col_lo = pos.col.saturating_sub(distance);
        let row_hi = (pos.row + distance).min(self.size - 1);
        let col_hi = (pos.col + distance).min(self.size - 1);

        for r in row_lo..=row_hi {
            for c in col_lo..=col_hi {
                let other = Pos::new(r, c);
                if other != pos && self.get(other) != Stone::Empty {
                    return true;
                }
            }
        }
        false
    }

    /// Reset every cell to empty, keeping the size
    pub fn clear(&mut self) {
        self.cells.fill(Stone::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
