//! Game session: board, turn order, status and move history

use crate::board::{Board, Pos, Stone};
use crate::config::GameConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::error::{ConfigError, RuleViolation};
use crate::rules::{check_win, winning_line};
use tracing::{debug, info};

/// Outcome of the game so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Stone),
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// A move made by the automated opponent
#[derive(Debug, Clone)]
pub struct AiMove {
    /// Selection details; `best_move` is `None` when the board was full
    pub result: MoveResult,
    /// Status after the move
    pub status: GameStatus,
}

/// One game from an empty board to a win or draw.
///
/// All state lives in the session value, so independent sessions never
/// interfere with each other.
///
/// ```
/// use gomoku::{GameConfig, GameSession, GameStatus, Pos, RuleViolation, Stone};
///
/// let mut game = GameSession::new(GameConfig::default()).unwrap();
/// assert_eq!(game.place(Pos::new(7, 7), Stone::Black), Ok(GameStatus::InProgress));
/// assert_eq!(
///     game.place(Pos::new(7, 7), Stone::White),
///     Err(RuleViolation::CellOccupied(Pos::new(7, 7)))
/// );
/// assert_eq!(game.current_turn(), Stone::White);
/// ```
pub struct GameSession {
    board: Board,
    config: GameConfig,
    current_turn: Stone,
    status: GameStatus,
    last_move: Option<Pos>,
    move_history: Vec<(Pos, Stone)>,
    winning_line: Option<Vec<Pos>>,
    engine: AIEngine,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::with_size(config.board_size)?;
        Ok(Self {
            board,
            config,
            current_turn: Stone::Black,
            status: GameStatus::InProgress,
            last_move: None,
            move_history: Vec::new(),
            winning_line: None,
            engine: Self::make_engine(&config),
        })
    }

    fn make_engine(config: &GameConfig) -> AIEngine {
        match config.seed {
            Some(seed) => AIEngine::with_seed(seed),
            None => AIEngine::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Player to move (frozen once the game is over)
    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn move_history(&self) -> &[(Pos, Stone)] {
        &self.move_history
    }

    /// Stones of the winning run, once the game is won
    #[inline]
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    #[inline]
    pub fn ai_enabled(&self) -> bool {
        self.config.ai_enabled
    }

    /// Check if the automated opponent is due to move
    pub fn is_ai_turn(&self) -> bool {
        self.config.ai_enabled
            && !self.status.is_over()
            && self.current_turn == self.config.ai_color
    }

    /// Check if a human is due to move
    pub fn is_human_turn(&self) -> bool {
        !self.status.is_over() && !self.is_ai_turn()
    }

    /// Place `player`'s stone at `pos`.
    ///
    /// Rejected moves leave the session unchanged. On success the turn
    /// passes to the other player unless the move ended the game.
    pub fn place(&mut self, pos: Pos, player: Stone) -> Result<GameStatus, RuleViolation> {
        if let Err(violation) = self.validate_move(pos, player) {
            debug!(%pos, %player, %violation, "move rejected");
            return Err(violation);
        }

        self.board.place_stone(pos, player);
        self.move_history.push((pos, player));
        self.last_move = Some(pos);
        debug!(%pos, %player, moves = self.move_history.len(), "stone placed");

        if check_win(&self.board, pos, player) {
            self.status = GameStatus::Won(player);
            self.winning_line = winning_line(&self.board, pos, player);
            info!(winner = %player, moves = self.move_history.len(), "game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!(moves = self.move_history.len(), "game drawn");
        } else {
            self.current_turn = player.opponent();
        }

        Ok(self.status)
    }

    fn validate_move(&self, pos: Pos, player: Stone) -> Result<(), RuleViolation> {
        if self.status.is_over() {
            return Err(RuleViolation::GameAlreadyOver);
        }
        if !self.board.in_bounds(pos) {
            return Err(RuleViolation::OutOfBounds {
                pos,
                size: self.board.size(),
            });
        }
        if !self.board.is_empty(pos) {
            return Err(RuleViolation::CellOccupied(pos));
        }
        if player != self.current_turn {
            return Err(RuleViolation::NotYourTurn {
                expected: self.current_turn,
                got: player,
            });
        }
        Ok(())
    }

    /// Would (or did) a `player` stone at `pos` make five? No mutation.
    #[must_use]
    pub fn check_win(&self, pos: Pos, player: Stone) -> bool {
        check_win(&self.board, pos, player)
    }

    /// Start over on an empty board of the configured size.
    pub fn reset(&mut self) -> &Board {
        self.board.clear();
        self.current_turn = Stone::Black;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.move_history.clear();
        self.winning_line = None;
        self.engine = Self::make_engine(&self.config);
        info!(size = self.board.size(), "game reset");
        &self.board
    }

    /// Switch between playing the automated opponent and two-player mode.
    /// Returns the new setting.
    pub fn toggle_ai(&mut self) -> bool {
        self.config.ai_enabled = !self.config.ai_enabled;
        info!(ai_enabled = self.config.ai_enabled, "opponent toggled");
        self.config.ai_enabled
    }

    /// Move the heuristic would pick for the player to move, without playing it.
    ///
    /// Used for hints in two-player mode and to drive self-play.
    pub fn suggest_move(&mut self) -> Result<MoveResult, RuleViolation> {
        if self.status.is_over() {
            return Err(RuleViolation::GameAlreadyOver);
        }
        Ok(self.engine.get_move_with_stats(&self.board, self.current_turn))
    }

    /// Let the automated opponent make its move.
    ///
    /// A full board with no move left is recorded as a draw.
    pub fn play_ai_move(&mut self) -> Result<AiMove, RuleViolation> {
        if self.status.is_over() {
            return Err(RuleViolation::GameAlreadyOver);
        }
        let ai = self.config.ai_color;
        if ai != self.current_turn {
            return Err(RuleViolation::NotYourTurn {
                expected: self.current_turn,
                got: ai,
            });
        }

        let result = self.engine.get_move_with_stats(&self.board, ai);
        let status = match result.best_move {
            Some(pos) => self.place(pos, ai)?,
            None => {
                self.status = GameStatus::Draw;
                info!("no empty cell left, game drawn");
                self.status
            }
        };
        Ok(AiMove { result, status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{select_move, SearchType};
    use crate::rules::DIRECTIONS;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn session() -> GameSession {
        GameSession::new(GameConfig::default().with_seed(1)).unwrap()
    }

    /// Pattern with no run longer than two on any axis:
    /// pairs of columns alternate, and alternate again every row.
    fn draw_pattern(pos: Pos) -> Stone {
        if (pos.col / 2 + pos.row) % 2 == 0 {
            Stone::Black
        } else {
            Stone::White
        }
    }

    #[test]
    fn test_new_session() {
        let game = session();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_turn(), Stone::Black);
        assert!(game.board().is_board_empty());
        assert!(game.move_history().is_empty());
        assert!(game.is_human_turn());
    }

    #[test]
    fn test_new_rejects_small_board() {
        let err = GameSession::new(GameConfig::default().with_board_size(3)).err();
        assert_eq!(err, Some(ConfigError::BoardTooSmall { size: 3, min: 5 }));
    }

    #[test]
    fn test_new_rejects_oversized_board() {
        let err = GameSession::new(GameConfig::default().with_board_size(1 << 32)).err();
        assert_eq!(err, Some(ConfigError::BoardTooLarge { size: 1 << 32, max: 99 }));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = session();
        game.place(Pos::new(7, 7), Stone::Black).unwrap();
        let before = game.board().clone();

        assert_eq!(
            game.place(Pos::new(7, 7), Stone::White),
            Err(RuleViolation::CellOccupied(Pos::new(7, 7)))
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.board().get(Pos::new(7, 7)), Stone::Black);
        assert_eq!(game.current_turn(), Stone::White);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = session();
        assert_eq!(
            game.place(Pos::new(15, 0), Stone::Black),
            Err(RuleViolation::OutOfBounds {
                pos: Pos::new(15, 0),
                size: 15
            })
        );
        assert_eq!(
            game.place(Pos::new(3, 99), Stone::Black),
            Err(RuleViolation::OutOfBounds {
                pos: Pos::new(3, 99),
                size: 15
            })
        );
        assert!(game.board().is_board_empty());
        assert_eq!(game.current_turn(), Stone::Black);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = session();
        assert_eq!(
            game.place(Pos::new(0, 0), Stone::White),
            Err(RuleViolation::NotYourTurn {
                expected: Stone::Black,
                got: Stone::White
            })
        );
        game.place(Pos::new(0, 0), Stone::Black).unwrap();
        assert_eq!(
            game.place(Pos::new(0, 1), Stone::Black),
            Err(RuleViolation::NotYourTurn {
                expected: Stone::White,
                got: Stone::Black
            })
        );
        assert!(game.board().is_empty(Pos::new(0, 1)));
        game.place(Pos::new(0, 1), Stone::White).unwrap();
        assert_eq!(game.current_turn(), Stone::Black);
        assert_eq!(
            game.move_history(),
            &[(Pos::new(0, 0), Stone::Black), (Pos::new(0, 1), Stone::White)]
        );
        assert_eq!(game.last_move(), Some(Pos::new(0, 1)));
    }

    #[test]
    fn test_empty_player_rejected() {
        let mut game = session();
        assert_eq!(
            game.place(Pos::new(1, 1), Stone::Empty),
            Err(RuleViolation::NotYourTurn {
                expected: Stone::Black,
                got: Stone::Empty
            })
        );
    }

    #[test]
    fn test_horizontal_win() {
        let mut game = session();
        for col in 3..7 {
            game.place(Pos::new(7, col), Stone::Black).unwrap();
            game.place(Pos::new(0, col * 2), Stone::White).unwrap();
        }
        assert_eq!(game.place(Pos::new(7, 7), Stone::Black), Ok(GameStatus::Won(Stone::Black)));
        assert!(game.check_win(Pos::new(7, 7), Stone::Black));
        assert_eq!(game.winning_line().map(|l| l.len()), Some(5));
        // Turn stays with the winner
        assert_eq!(game.current_turn(), Stone::Black);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut game = session();
        for row in 0..4 {
            game.place(Pos::new(row, 0), Stone::Black).unwrap();
            game.place(Pos::new(row, 5), Stone::White).unwrap();
        }
        game.place(Pos::new(4, 0), Stone::Black).unwrap();
        let before = game.board().clone();

        for player in [Stone::White, Stone::Black] {
            assert_eq!(
                game.place(Pos::new(10, 10), player),
                Err(RuleViolation::GameAlreadyOver)
            );
        }
        assert_eq!(game.board(), &before);
        assert_eq!(game.status(), GameStatus::Won(Stone::Black));
        assert!(matches!(game.play_ai_move(), Err(RuleViolation::GameAlreadyOver)));
    }

    #[test]
    fn test_five_wins_four_does_not_all_sizes() {
        for size in 5..=9 {
            for &(dr, dc) in &DIRECTIONS {
                let mut board = Board::with_size(size).unwrap();
                // Anchor the run so it always fits: anti-diagonal starts at the right edge
                let start = if dc < 0 { Pos::new(0, size - 1) } else { Pos::new(0, 0) };
                let run: Vec<Pos> = (0..5)
                    .map(|d| start.offset(dr, dc, d, size).unwrap())
                    .collect();
                for &pos in &run[..4] {
                    board.place_stone(pos, Stone::White);
                }
                assert!(!check_win(&board, run[3], Stone::White));
                board.place_stone(run[4], Stone::White);
                for &pos in &run {
                    assert!(check_win(&board, pos, Stone::White), "size {size} axis ({dr}, {dc})");
                }
            }
        }
    }

    #[test]
    fn test_draw_on_full_board() {
        let mut game = session();
        let cells: Vec<Pos> = game.board().positions().collect();
        let blacks: Vec<Pos> = cells.iter().copied().filter(|&p| draw_pattern(p) == Stone::Black).collect();
        let whites: Vec<Pos> = cells.iter().copied().filter(|&p| draw_pattern(p) == Stone::White).collect();
        assert_eq!(blacks.len(), 113);
        assert_eq!(whites.len(), 112);

        let mut last = GameStatus::InProgress;
        for (i, &pos) in blacks.iter().enumerate() {
            last = game.place(pos, Stone::Black).unwrap();
            if let Some(&w) = whites.get(i) {
                assert_eq!(last, GameStatus::InProgress);
                last = game.place(w, Stone::White).unwrap();
                assert_eq!(last, GameStatus::InProgress);
            }
        }

        assert_eq!(last, GameStatus::Draw);
        assert!(game.board().is_full());
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(select_move(game.board(), Stone::White, Stone::Black, &mut rng), None);
        assert_eq!(
            game.place(Pos::new(0, 0), Stone::White),
            Err(RuleViolation::GameAlreadyOver)
        );
    }

    #[test]
    fn test_reset() {
        let mut game = GameSession::new(GameConfig::default().with_board_size(9)).unwrap();
        game.place(Pos::new(4, 4), Stone::Black).unwrap();
        game.place(Pos::new(4, 5), Stone::White).unwrap();

        let board = game.reset();
        assert!(board.is_board_empty());
        assert_eq!(board.size(), 9);
        assert_eq!(game.current_turn(), Stone::Black);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.move_history().is_empty());
        assert_eq!(game.last_move(), None);
        assert!(game.winning_line().is_none());
    }

    #[test]
    fn test_ai_turn_flow() {
        let mut game = session();
        assert!(!game.is_ai_turn());
        assert!(matches!(
            game.play_ai_move(),
            Err(RuleViolation::NotYourTurn { .. })
        ));

        game.place(Pos::new(7, 7), Stone::Black).unwrap();
        assert!(game.is_ai_turn());
        let ai_move = game.play_ai_move().unwrap();
        let pos = ai_move.result.best_move.unwrap();

        assert_eq!(ai_move.result.search_type, SearchType::Proximity);
        assert_eq!(ai_move.status, GameStatus::InProgress);
        assert_eq!(game.board().get(pos), Stone::White);
        assert!(pos.chebyshev(Pos::new(7, 7)) <= 2);
        assert_eq!(game.current_turn(), Stone::Black);
    }

    #[test]
    fn test_ai_blocks_in_session() {
        let mut game = session();
        game.toggle_ai();
        for col in 0..4 {
            game.place(Pos::new(3, col), Stone::Black).unwrap();
            if col < 3 {
                game.place(Pos::new(10, col * 2), Stone::White).unwrap();
            }
        }
        game.toggle_ai();

        let reply = game.play_ai_move().unwrap();
        assert_eq!(reply.result.best_move, Some(Pos::new(3, 4)));
        assert_eq!(reply.result.search_type, SearchType::Block);
        assert_eq!(reply.status, GameStatus::InProgress);
    }

    #[test]
    fn test_seeded_sessions_replay() {
        let play = || {
            let mut game = session();
            game.place(Pos::new(7, 7), Stone::Black).unwrap();
            game.play_ai_move().unwrap().result.best_move
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn test_suggest_move_does_not_play() {
        let mut game = session();
        game.place(Pos::new(0, 0), Stone::Black).unwrap();
        game.place(Pos::new(14, 14), Stone::White).unwrap();
        for row in 1..4 {
            game.place(Pos::new(row, 0), Stone::Black).unwrap();
            game.place(Pos::new(14, 14 - row), Stone::White).unwrap();
        }

        let hint = game.suggest_move().unwrap();
        assert_eq!(hint.best_move, Some(Pos::new(4, 0)));
        assert_eq!(hint.search_type, SearchType::ImmediateWin);
        assert!(game.board().is_empty(Pos::new(4, 0)));
        assert_eq!(game.move_history().len(), 8);
    }

    #[test]
    fn test_self_play_terminates() {
        let mut game = GameSession::new(GameConfig::default().with_board_size(7).with_seed(11)).unwrap();
        while !game.status().is_over() {
            let hint = game.suggest_move().unwrap();
            let pos = hint.best_move.unwrap();
            game.place(pos, game.current_turn()).unwrap();
        }
        assert!(game.move_history().len() <= 49);
        if let GameStatus::Won(winner) = game.status() {
            let (last, stone) = *game.move_history().last().unwrap();
            assert_eq!(stone, winner);
            assert!(game.check_win(last, winner));
        }
    }

    #[test]
    fn test_toggle_ai() {
        let mut game = session();
        game.place(Pos::new(7, 7), Stone::Black).unwrap();
        assert!(game.is_ai_turn());

        assert!(!game.toggle_ai());
        assert!(!game.is_ai_turn());
        assert!(game.is_human_turn());
        game.place(Pos::new(7, 8), Stone::White).unwrap();

        assert!(game.toggle_ai());
        assert!(!game.is_ai_turn());
    }
}
