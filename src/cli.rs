//! Command-line interface for the terminal game

use clap::{Parser, ValueEnum};

use crate::{Board, GameConfig, Stone, DEFAULT_BOARD_SIZE};

/// Five-in-a-row against a one-move-lookahead opponent
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Five-in-a-row in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board edge length (5 to 99)
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = parse_board_size)]
    pub size: usize,

    /// Seed for the opponent's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Color played by the opponent
    #[arg(long, value_enum, default_value_t = Color::White)]
    pub ai_color: Color,

    /// Who plays whom
    #[arg(short, long, value_enum, default_value_t = PlayMode::VsAi)]
    pub mode: PlayMode,
}

fn parse_board_size(arg: &str) -> Result<usize, String> {
    let size: usize = arg.parse().map_err(|e| format!("`{arg}` is not a board size: {e}"))?;
    Board::cell_count(size).map_err(|e| e.to_string())?;
    Ok(size)
}

/// Stone color as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Color {
    Black,
    White,
}

impl From<Color> for Stone {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Stone::Black,
            Color::White => Stone::White,
        }
    }
}

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayMode {
    /// Human against the opponent
    VsAi,
    /// Two humans at one terminal
    TwoPlayer,
    /// The opponent plays both sides
    SelfPlay,
}

impl Cli {
    /// Session settings described by the flags
    pub fn game_config(&self) -> GameConfig {
        let mut config = GameConfig::default()
            .with_board_size(self.size)
            .with_ai_color(self.ai_color.into())
            .with_ai_enabled(self.mode == PlayMode::VsAi);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}
