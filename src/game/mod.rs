//! # Game Module
//!
//! Core rule engine: tiles, boards, the move algorithm and session state.
//!
//! This module contains the fundamental building blocks of the puzzle:
//! - Immutable tile values and board grids
//! - The line collapse-and-merge algorithm shared by all four directions
//! - Terminal-state and win detection
//! - Session management for the "current board" held by a front end

pub mod board;
pub mod line;
pub mod settings;
pub mod state;
pub mod tile;

pub use board::*;
pub use settings::*;
pub use state::*;
pub use tile::*;

use serde::{Deserialize, Serialize};

/// A grid coordinate expressed as a row and a column.
///
/// Coordinates are signed so that a tile which has not been placed yet can
/// carry the [`Position::UNPLACED`] sentinel, and so that callers can ask
/// for out-of-range cells and receive a proper error.
///
/// # Examples
///
/// ```
/// use slide2048::Position;
///
/// let pos = Position::new(1, 3);
/// assert_eq!(pos.row, 1);
/// assert_eq!(pos.col, 3);
/// assert!(pos.is_placed());
/// assert!(!Position::UNPLACED.is_placed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Sentinel for a tile that has no grid position yet.
    pub const UNPLACED: Position = Position { row: -1, col: -1 };

    /// Creates a new position with the given coordinates.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns true unless this is the unplaced sentinel.
    pub fn is_placed(self) -> bool {
        self.row >= 0 && self.col >= 0
    }

    /// Returns true if the position lies inside a `size`x`size` grid.
    pub fn is_within(self, size: usize) -> bool {
        let size = size as i64;
        (0..size).contains(&(self.row as i64)) && (0..size).contains(&(self.col as i64))
    }
}

/// Directions a move can slide the tiles towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns all four directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(2, 3);
        assert_eq!(pos.row, 2);
        assert_eq!(pos.col, 3);
    }

    #[test]
    fn test_position_within_bounds() {
        assert!(Position::new(0, 0).is_within(4));
        assert!(Position::new(3, 3).is_within(4));
        assert!(!Position::new(4, 0).is_within(4));
        assert!(!Position::new(0, -1).is_within(4));
        assert!(!Position::UNPLACED.is_within(4));
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Right.to_string(), "right");
    }
}
