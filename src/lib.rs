//! # Slide2048
//!
//! Rule engine for the 2048 sliding-tile puzzle.
//!
//! ## Architecture Overview
//!
//! The engine is a pure state machine over immutable boards:
//!
//! - **Tile**: value object holding a cell's value, its position and a one-move merge marker
//! - **Board**: immutable grid plus score and terminal flags; every move returns a new board
//! - **Generation**: random tile spawning driven by an injected random source
//! - **Game State**: session holder owning the current board, the RNG and statistics
//! - **Input / Rendering**: thin text front end used by the `slide2048` binary
//!
//! ## Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use slide2048::{Board, Direction};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let board = Board::from_rows(&[
//!     vec![0, 0, 2, 2],
//!     vec![0, 0, 0, 0],
//!     vec![0, 0, 0, 0],
//!     vec![0, 0, 0, 0],
//! ]).unwrap();
//!
//! let next = board.make_move(Direction::Left, &mut rng);
//! assert_eq!(next.get_tile(0, 0).unwrap().value(), 4);
//! assert_eq!(next.score(), 4);
//! ```

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;

/// Core error type for the slide2048 engine.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Board dimension below the playable minimum
    #[error("Invalid board size {size}: boards must be at least {min}x{min}")]
    InvalidSize { size: usize, min: usize },

    /// Coordinate outside the grid
    #[error("Position ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: i32, col: i32, size: usize },

    /// Attempt to merge two tiles of different value
    #[error("Cannot merge tile of value {left} with tile of value {right}")]
    InvalidMerge { left: u32, right: u32 },

    /// Tile value that is neither zero nor a power of two
    #[error("Invalid tile value {0}: must be zero or a power of two")]
    InvalidTileValue(u32),

    /// Seeded layout that does not describe a square grid
    #[error("Invalid board layout: {0}")]
    InvalidLayout(String),

    /// Settings failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type used throughout the slide2048 codebase.
pub type GameResult<T> = Result<T, GameError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Default board dimension
    pub const DEFAULT_BOARD_SIZE: usize = 4;

    /// Smallest board that can hold two distinct cells
    pub const MIN_BOARD_SIZE: usize = 2;

    /// Tile value that wins the game
    pub const DEFAULT_WIN_VALUE: u32 = 2048;

    /// Probability that a spawned tile is a 4 instead of a 2
    pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;
}
