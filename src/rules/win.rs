//! Win condition checking for free-style five-in-a-row
//!
//! A player wins with five or more stones in a row along any of the four
//! axes. Overlines (six or more) also win.

use crate::board::{Board, Pos, Stone, WIN_LENGTH};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count consecutive `color` stones starting one step from `pos` along
/// `(dr, dc)`. Stops at the board edge or the first non-matching cell.
#[inline]
fn count_direction(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    let size = board.size();
    let mut count = 0;
    let mut dist = 1;
    while let Some(next) = pos.offset(dr, dc, dist, size) {
        if board.get(next) != color {
            break;
        }
        count += 1;
        dist += 1;
    }
    count
}

/// Length of the run of `color` through `pos` along one axis.
///
/// `pos` itself is counted as `color` whatever it currently holds.
#[inline]
pub fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    1 + count_direction(board, pos, dr, dc, color) + count_direction(board, pos, -dr, -dc, color)
}

/// Five-in-a-row check at a specific position.
///
/// Only checks the 4 axes through `pos`. The centre cell is treated as
/// `color`, so this answers "would a stone here win" as well as "did the
/// stone just played win".
#[must_use]
pub fn check_win(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty || !board.in_bounds(pos) {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| run_length(board, pos, dr, dc, color) >= WIN_LENGTH)
}

/// Find the winning run through `pos`, if any.
///
/// Returns every stone of the run (overlines included), ordered from the
/// negative end of the axis.
pub fn winning_line(board: &Board, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    if color == Stone::Empty || !board.in_bounds(pos) {
        return None;
    }
    let size = board.size();

    for &(dr, dc) in &DIRECTIONS {
        let back = count_direction(board, pos, -dr, -dc, color);
        let forward = count_direction(board, pos, dr, dc, color);
        if 1 + back + forward < WIN_LENGTH {
            continue;
        }

        let line = (-(back as i32)..=forward as i32)
            .filter_map(|dist| pos.offset(dr, dc, dist, size))
            .collect();
        return Some(line);
    }
    None
}
