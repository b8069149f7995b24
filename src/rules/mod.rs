//! Game rules for free-style five-in-a-row
//!
//! Five or more stones in a row along any axis wins. There are no captures
//! and no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, run_length, winning_line, DIRECTIONS};
