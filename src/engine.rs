//! Move selection for the automated opponent
//!
//! The opponent looks exactly one move ahead. Candidate tiers are tried in
//! priority order and the first tier with any candidate decides the move:
//!
//! 1. **Immediate win**: a cell that completes five for the AI
//! 2. **Block**: a cell that would complete five for the opponent
//! 3. **Proximity**: a random empty cell within two cells of any stone
//! 4. **Fallback**: a random empty cell anywhere
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Stone, Pos, SearchType};
//!
//! let mut engine = AIEngine::with_seed(7);
//! let mut board = Board::new();
//! for col in 3..7 {
//!     board.place_stone(Pos::new(7, col), Stone::White);
//! }
//!
//! let result = engine.get_move_with_stats(&board, Stone::White);
//! assert_eq!(result.best_move, Some(Pos::new(7, 2)));
//! assert_eq!(result.search_type, SearchType::ImmediateWin);
//! ```

use crate::board::{Board, Pos, Stone};
use crate::rules::check_win;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::debug;

/// Stones within this Chebyshev distance make an empty cell a proximity candidate
pub const NEIGHBOR_DISTANCE: usize = 2;

/// Tier of the heuristic that produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Move completes five for the AI
    ImmediateWin,
    /// Move takes the cell where the opponent would complete five
    Block,
    /// Random cell near existing stones
    Proximity,
    /// Random empty cell (board empty or nothing nearby)
    Fallback,
}

/// Result of a move selection with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Selected move, `None` only when the board is full
    pub best_move: Option<Pos>,
    /// Tier that selected the move
    pub search_type: SearchType,
    /// Number of cells the move was drawn from
    pub candidates: usize,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn forced(pos: Pos, search_type: SearchType) -> Self {
        Self {
            best_move: Some(pos),
            search_type,
            candidates: 1,
            time_ms: 0,
        }
    }

    #[inline]
    fn random(best_move: Option<Pos>, search_type: SearchType, candidates: usize) -> Self {
        Self {
            best_move,
            search_type,
            candidates,
            time_ms: 0,
        }
    }
}

/// Select a move for `ai`, playing against `opponent`.
///
/// Returns `None` only when the board has no empty cell; callers treat that
/// as a draw. Random tie-breaks in the proximity and fallback tiers draw from
/// `rng`, so a seeded generator makes the choice reproducible.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    ai: Stone,
    opponent: Stone,
    rng: &mut R,
) -> Option<Pos> {
    select_move_with_stats(board, ai, opponent, rng).best_move
}

/// Like [`select_move`], but also reports which tier decided.
pub fn select_move_with_stats<R: Rng + ?Sized>(
    board: &Board,
    ai: Stone,
    opponent: Stone,
    rng: &mut R,
) -> MoveResult {
    let start = Instant::now();
    let mut scratch = board.clone();

    let mut result = if let Some(pos) = find_immediate_win(&mut scratch, ai) {
        MoveResult::forced(pos, SearchType::ImmediateWin)
    } else if let Some(pos) = find_immediate_win(&mut scratch, opponent) {
        MoveResult::forced(pos, SearchType::Block)
    } else {
        let near: Vec<Pos> = board
            .empty_positions()
            .filter(|&pos| board.has_neighbor(pos, NEIGHBOR_DISTANCE))
            .collect();
        if !near.is_empty() {
            MoveResult::random(near.choose(rng).copied(), SearchType::Proximity, near.len())
        } else {
            let empty: Vec<Pos> = board.empty_positions().collect();
            MoveResult::random(empty.choose(rng).copied(), SearchType::Fallback, empty.len())
        }
    };
    result.time_ms = start.elapsed().as_millis() as u64;

    debug!(
        ai = %ai,
        best_move = ?result.best_move,
        search_type = ?result.search_type,
        candidates = result.candidates,
        "move selected"
    );
    result
}

/// First empty cell (row-major) where a `color` stone would make five.
///
/// Each candidate stone is placed on `board` and removed again before the
/// next cell is examined.
pub fn find_immediate_win(board: &mut Board, color: Stone) -> Option<Pos> {
    if color == Stone::Empty {
        return None;
    }
    let empties: Vec<Pos> = board.empty_positions().collect();
    empties.into_iter().find(|&pos| {
        let saved = board.get(pos);
        board.place_stone(pos, color);
        let wins = check_win(board, pos, color);
        board.place_stone(pos, saved);
        wins
    })
}

/// Heuristic opponent with its own random source.
///
/// # Example
///
/// ```
/// use gomoku::{AIEngine, Board, Stone, Pos};
///
/// let mut engine = AIEngine::with_seed(42);
/// let mut board = Board::new();
/// board.place_stone(Pos::new(7, 7), Stone::Black);
///
/// let pos = engine.get_move(&board, Stone::White).unwrap();
/// assert!(pos.chebyshev(Pos::new(7, 7)) <= 2);
/// ```
pub struct AIEngine {
    rng: SmallRng,
}

impl AIEngine {
    /// Engine seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Engine with a fixed seed; the same seed replays the same choices.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Reseed the random source.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    /// Best move for `color`, or `None` on a full board.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Best move for `color` with the deciding tier.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, color: Stone) -> MoveResult {
        select_move_with_stats(board, color, color.opponent(), &mut self.rng)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
