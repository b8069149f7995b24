//! Five-in-a-row board engine
//!
//! Board state, move validation, win detection and a one-move-lookahead
//! opponent for free-style five-in-a-row:
//! - 15x15 board by default (any size from 5 up)
//! - Black moves first, players alternate
//! - 5-in-a-row wins (overlines allowed)
//! - Full board with no five is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board representation
//! - [`rules`]: Win detection
//! - [`engine`]: Move selection for the automated opponent
//! - [`game`]: Game session (turns, status, history)
//! - [`config`]: Session configuration
//! - [`ui`]: Terminal front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameConfig, GameSession, GameStatus, Pos, Stone};
//!
//! let mut game = GameSession::new(GameConfig::default().with_seed(1)).unwrap();
//! game.place(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! // The opponent answers as White
//! let reply = game.play_ai_move().unwrap();
//! println!("AI plays {:?}", reply.result.best_move);
//! assert_eq!(reply.status, GameStatus::InProgress);
//! ```
//!
//! # Move Priority
//!
//! The opponent picks its move in this order:
//! 1. Immediate winning move
//! 2. Block the opponent's immediate win
//! 3. Random empty cell within two cells of a stone
//! 4. Random empty cell

pub mod board;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use config::GameConfig;
pub use engine::{select_move, AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, RuleViolation};
pub use game::{AiMove, GameSession, GameStatus};
