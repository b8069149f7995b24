//! Text rendering of the board

use crate::{Board, Pos};
use std::fmt::Write;

/// Board view renders the grid with row/column labels
///
/// Each cell is three characters wide; labels have at most two digits
/// since boards stop at [`crate::MAX_BOARD_SIZE`]. The last move is wrapped in
/// parentheses and stones of a winning run in brackets.
#[derive(Debug, Default, Clone)]
pub struct BoardView {
    last_move: Option<Pos>,
    winning_line: Vec<Pos>,
}

impl BoardView {
    pub fn new(last_move: Option<Pos>, winning_line: Option<&[Pos]>) -> Self {
        Self {
            last_move,
            winning_line: winning_line.map(<[Pos]>::to_vec).unwrap_or_default(),
        }
    }

    /// Render the board as text, one line per row plus a header
    pub fn render(&self, board: &Board) -> String {
        let size = board.size();
        let mut out = String::with_capacity((size + 1) * (size * 3 + 4));

        out.push_str("   ");
        for col in 0..size {
            let _ = write!(out, "{col:^3}");
        }
        out.push('\n');

        for row in 0..size {
            let _ = write!(out, "{row:>2} ");
            for col in 0..size {
                let pos = Pos::new(row, col);
                let symbol = board.get(pos).symbol();
                let (open, close) = self.markers(pos);
                out.push(open);
                out.push(symbol);
                out.push(close);
            }
            out.push('\n');
        }
        out
    }

    fn markers(&self, pos: Pos) -> (char, char) {
        if self.winning_line.contains(&pos) {
            ('[', ']')
        } else if self.last_move == Some(pos) {
            ('(', ')')
        } else {
            (' ', ' ')
        }
    }
}
