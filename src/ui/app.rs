//! Terminal game loop

use std::io::{BufRead, Write};

use anyhow::Result;
use thiserror::Error;
use tracing::debug;

use super::board_view::BoardView;
use crate::cli::PlayMode;
use crate::{GameSession, GameStatus, Pos};

/// A line typed at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Pos),
    Reset,
    ToggleAi,
    Hint,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{0}` is not a coordinate, expected `row col`")]
    BadCoordinate(String),
}

/// Parse `row col`, `reset`, `ai`, `hint` or `quit`.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let mut words = line.split_whitespace();
    let first = words.next().ok_or(CommandError::Empty)?;

    match first.to_ascii_lowercase().as_str() {
        "reset" | "new" => return Ok(Command::Reset),
        "ai" => return Ok(Command::ToggleAi),
        "hint" => return Ok(Command::Hint),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        _ => {}
    }

    if !first.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(CommandError::Unknown(first.to_string()));
    }
    let bad = || CommandError::BadCoordinate(line.to_string());
    let row = first.parse().map_err(|_| bad())?;
    let col = words.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    if words.next().is_some() {
        return Err(bad());
    }
    Ok(Command::Place(Pos::new(row, col)))
}

/// Terminal front end driving a [`GameSession`]
///
/// The opponent's move is computed synchronously between prompts, so input
/// is never read while the board is being changed.
pub struct TerminalApp<R, W> {
    session: GameSession,
    mode: PlayMode,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalApp<R, W> {
    pub fn new(session: GameSession, mode: PlayMode, input: R, output: W) -> Self {
        Self {
            session,
            mode,
            input,
            output,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Play until the user quits or input ends; returns the final status.
    pub fn run(&mut self) -> Result<GameStatus> {
        if self.mode == PlayMode::SelfPlay {
            return self.run_self_play();
        }

        loop {
            self.render_board()?;

            if self.session.status().is_over() {
                self.render_result()?;
                writeln!(self.output, "Type `reset` to play again or `quit` to leave.")?;
            } else if self.session.is_ai_turn() {
                let ai_move = self.session.play_ai_move()?;
                if let Some(pos) = ai_move.result.best_move {
                    writeln!(
                        self.output,
                        "{} plays {} ({:?})",
                        self.session.config().ai_color,
                        pos,
                        ai_move.result.search_type
                    )?;
                }
                continue;
            }

            write!(self.output, "{} to move> ", self.session.current_turn())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(self.session.status());
            }

            match parse_command(&line) {
                Ok(Command::Quit) => return Ok(self.session.status()),
                Ok(command) => self.handle_command(command)?,
                Err(CommandError::Empty) => {}
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn handle_command(&mut self, command: Command) -> Result<()> {
        debug!(?command, "command");
        match command {
            Command::Place(pos) => {
                let player = self.session.current_turn();
                if let Err(violation) = self.session.place(pos, player) {
                    writeln!(self.output, "Illegal move: {violation}")?;
                }
            }
            Command::Reset => {
                self.session.reset();
                writeln!(self.output, "New game.")?;
            }
            Command::ToggleAi => {
                let on = self.session.toggle_ai();
                let text = if on { "on" } else { "off (two-player mode)" };
                writeln!(self.output, "Opponent {text}.")?;
            }
            Command::Hint => match self.session.suggest_move() {
                Ok(hint) => match hint.best_move {
                    Some(pos) => writeln!(self.output, "Hint: {pos} ({:?})", hint.search_type)?,
                    None => writeln!(self.output, "No move left.")?,
                },
                Err(violation) => writeln!(self.output, "{violation}")?,
            },
            Command::Quit => {}
        }
        Ok(())
    }

    fn run_self_play(&mut self) -> Result<GameStatus> {
        while !self.session.status().is_over() {
            let player = self.session.current_turn();
            let hint = self.session.suggest_move()?;
            let Some(pos) = hint.best_move else {
                break;
            };
            self.session.place(pos, player)?;
            writeln!(self.output, "{player} plays {pos} ({:?})", hint.search_type)?;
        }
        self.render_board()?;
        self.render_result()?;
        Ok(self.session.status())
    }

    fn render_board(&mut self) -> Result<()> {
        let view = BoardView::new(self.session.last_move(), self.session.winning_line());
        write!(self.output, "{}", view.render(self.session.board()))?;
        Ok(())
    }

    fn render_result(&mut self) -> Result<()> {
        match self.session.status() {
            GameStatus::Won(winner) => writeln!(self.output, "{winner} wins!")?,
            GameStatus::Draw => writeln!(self.output, "Board full, draw.")?,
            GameStatus::InProgress => {}
        }
        Ok(())
    }
}
