//! # Game State Module
//!
//! Session management around the immutable board.
//!
//! A front end keeps exactly one [`GameState`]. It owns the current board,
//! the random source used for spawning and the running statistics, and
//! replaces its board with the result of each move. Every input is applied
//! to completion before the next one is accepted.

use crate::game::{Board, Direction, GameSettings};
use crate::input::PlayerInput;
use crate::GameResult;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Central game state for one player session.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The current board
    board: Board,
    /// Random source for tile spawning
    rng: StdRng,
    /// Rules of this session
    settings: GameSettings,
    /// Statistics across the session, including restarts
    pub statistics: GameStatistics,
}

/// Running statistics for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameStatistics {
    /// Moves that changed the board
    pub moves_made: u64,
    /// Moves that changed nothing
    pub blocked_moves: u64,
    /// Number of restarts
    pub restarts: u32,
    /// Best score reached in any game of the session
    pub best_score: u64,
    /// Highest tile reached in any game of the session
    pub highest_tile: u32,
}

impl GameStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    fn record_board(&mut self, board: &Board) {
        self.best_score = self.best_score.max(board.score());
        self.highest_tile = self.highest_tile.max(board.highest_tile());
    }
}

/// Where the current game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCompletionState {
    /// Moves are accepted
    Playing,
    /// The win value was reached and the session does not continue past it
    Won,
    /// No move can change the board
    GameOver,
}

/// What a single input did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The board changed; a tile was spawned
    Moved { score_gained: u64 },
    /// Nothing could slide in that direction
    Blocked,
    /// The game is finished and the move was not applied
    Ignored,
    /// A fresh board replaced the current one
    Restarted,
}

impl GameState {
    /// Starts a session with the given settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use slide2048::{GameCompletionState, GameSettings, GameState};
    ///
    /// let state = GameState::new(GameSettings::seeded(12345)).unwrap();
    /// assert_eq!(state.board().size(), 4);
    /// assert_eq!(state.completion_state(), GameCompletionState::Playing);
    /// ```
    pub fn new(settings: GameSettings) -> GameResult<Self> {
        settings.validate()?;
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let board = Self::initial_board(&settings, &mut rng)?;
        info!(
            "Started {}x{} game (seed: {:?})",
            settings.board_size, settings.board_size, settings.seed
        );

        let mut statistics = GameStatistics::new();
        statistics.record_board(&board);

        Ok(Self {
            board,
            rng,
            settings,
            statistics,
        })
    }

    fn initial_board(settings: &GameSettings, rng: &mut StdRng) -> GameResult<Board> {
        Ok(Board::empty(settings.board_size)?
            .with_spawner(settings.spawner()?)
            .add_random_tile(rng)
            .add_random_tile(rng)
            .with_win_value(settings.win_value))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Current completion state derived from the board.
    pub fn completion_state(&self) -> GameCompletionState {
        if self.board.is_won() && !self.settings.continue_after_win {
            GameCompletionState::Won
        } else if self.board.is_game_over() {
            GameCompletionState::GameOver
        } else {
            GameCompletionState::Playing
        }
    }

    pub fn is_finished(&self) -> bool {
        self.completion_state() != GameCompletionState::Playing
    }

    /// Applies one move to the current board.
    pub fn apply_direction(&mut self, direction: Direction) -> TurnOutcome {
        if self.is_finished() {
            debug!("Ignoring {} on a finished game", direction);
            return TurnOutcome::Ignored;
        }

        let was_won = self.board.is_won();
        let next = self.board.make_move(direction, &mut self.rng);
        if next == self.board {
            self.statistics.blocked_moves += 1;
            return TurnOutcome::Blocked;
        }

        let score_gained = next.score() - self.board.score();
        self.board = next;
        self.statistics.moves_made += 1;
        self.statistics.record_board(&self.board);

        if self.board.is_won() && !was_won {
            info!("Reached {} with score {}", self.settings.win_value, self.board.score());
        }
        if self.board.is_game_over() {
            info!("No moves left, final score {}", self.board.score());
        }

        TurnOutcome::Moved { score_gained }
    }

    /// Discards the current board and deals a new one.
    pub fn restart(&mut self) -> GameResult<()> {
        self.board = Self::initial_board(&self.settings, &mut self.rng)?;
        self.statistics.restarts += 1;
        self.statistics.record_board(&self.board);
        info!("Game restarted");
        Ok(())
    }

    /// Dispatches a player input.
    ///
    /// Returns `None` for inputs that do not touch the game (help, quit).
    pub fn handle_input(&mut self, input: PlayerInput) -> GameResult<Option<TurnOutcome>> {
        match input {
            PlayerInput::Move(direction) => Ok(Some(self.apply_direction(direction))),
            PlayerInput::Restart => {
                self.restart()?;
                Ok(Some(TurnOutcome::Restarted))
            }
            PlayerInput::Help | PlayerInput::Quit => Ok(None),
        }
    }
}
