//! Terminal front end for the game
//!
//! Renders the board as text and reads moves from a line-based prompt.

mod app;
mod board_view;

pub use app::{parse_command, Command, CommandError, TerminalApp};
pub use board_view::BoardView;
