//! # Tile
//!
//! Immutable cell value used by the board.

use crate::game::Position;
use crate::{GameError, GameResult};
use std::fmt;

/// A single board cell.
///
/// Tiles are plain values: two tiles are equal when value, position and
/// merge flag are equal. A value of zero marks an empty cell. The merge flag
/// is only set on a tile produced by a merge during the collapse step of a
/// move and never survives into the board a move returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    value: u32,
    position: Position,
    merged: bool,
}

impl Tile {
    /// Creates an unmerged tile at the given coordinates.
    pub fn new(value: u32, row: i32, col: i32) -> Self {
        Self {
            value,
            position: Position::new(row, col),
            merged: false,
        }
    }

    /// Creates an empty tile at the given coordinates.
    pub fn empty(row: i32, col: i32) -> Self {
        Self::new(0, row, col)
    }

    /// Creates a tile that has not been placed on a grid yet.
    pub fn unplaced(value: u32) -> Self {
        Self {
            value,
            position: Position::UNPLACED,
            merged: false,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn row(&self) -> i32 {
        self.position.row
    }

    pub fn col(&self) -> i32 {
        self.position.col
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_merged(&self) -> bool {
        self.merged
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Copy of this tile at new coordinates.
    pub fn with_position(self, row: i32, col: i32) -> Self {
        Self {
            position: Position::new(row, col),
            ..self
        }
    }

    /// Copy of this tile with the merge flag set to `merged`.
    pub fn with_merged(self, merged: bool) -> Self {
        Self { merged, ..self }
    }

    /// Combines two tiles of equal value into one of twice the value.
    ///
    /// The result keeps this tile's position and is flagged as merged.
    /// Two tiles whose doubled value would not fit in a `u32` cannot merge.
    ///
    /// # Examples
    ///
    /// ```
    /// use slide2048::Tile;
    ///
    /// let merged = Tile::new(8, 0, 1).merge_with(&Tile::new(8, 0, 2)).unwrap();
    /// assert_eq!(merged.value(), 16);
    /// assert_eq!(merged.col(), 1);
    /// assert!(merged.is_merged());
    ///
    /// assert!(Tile::new(2, 0, 0).merge_with(&Tile::new(4, 0, 1)).is_err());
    /// ```
    pub fn merge_with(&self, other: &Tile) -> GameResult<Tile> {
        if !self.can_merge_with(other) {
            return Err(GameError::InvalidMerge {
                left: self.value,
                right: other.value,
            });
        }
        self.doubled().ok_or(GameError::InvalidMerge {
            left: self.value,
            right: other.value,
        })
    }

    /// True when both tiles are occupied, equal, and their sum fits in a `u32`.
    pub fn can_merge_with(&self, other: &Tile) -> bool {
        !self.is_empty() && self.value == other.value && self.value.checked_mul(2).is_some()
    }

    /// Merge result for a caller that has already checked the values match.
    pub(crate) fn doubled(&self) -> Option<Tile> {
        Some(Tile {
            value: self.value.checked_mul(2)?,
            position: self.position,
            merged: true,
        })
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tile[value={}, pos=({},{}), merged={}]",
            self.value, self.position.row, self.position.col, self.merged
        )
    }
}

/// True for zero and for powers of two from 2 upwards.
pub fn is_valid_tile_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tile() {
        let tile = Tile::empty(1, 2);
        assert!(tile.is_empty());
        assert!(!tile.is_merged());
        assert_eq!(tile.position(), Position::new(1, 2));
    }

    #[test]
    fn test_unplaced_tile() {
        let tile = Tile::unplaced(0);
        assert_eq!(tile.row(), -1);
        assert_eq!(tile.col(), -1);
        assert!(!tile.position().is_placed());
    }

    #[test]
    fn test_with_position_keeps_value_and_flag() {
        let tile = Tile::new(4, 0, 0).with_merged(true).with_position(3, 2);
        assert_eq!(tile.value(), 4);
        assert!(tile.is_merged());
        assert_eq!((tile.row(), tile.col()), (3, 2));
    }

    #[test]
    fn test_merge_with_equal_value() {
        let merged = Tile::new(2, 1, 0).merge_with(&Tile::new(2, 1, 1)).unwrap();
        assert_eq!(merged, Tile::new(4, 1, 0).with_merged(true));
    }

    #[test]
    fn test_merge_with_unequal_value_fails() {
        let result = Tile::new(2, 0, 0).merge_with(&Tile::new(4, 0, 1));
        assert!(matches!(
            result,
            Err(GameError::InvalidMerge { left: 2, right: 4 })
        ));
    }

    #[test]
    fn test_largest_value_cannot_merge() {
        let top = Tile::new(1 << 31, 0, 0);
        assert!(!top.can_merge_with(&Tile::new(1 << 31, 0, 1)));
        assert!(matches!(
            top.merge_with(&Tile::new(1 << 31, 0, 1)),
            Err(GameError::InvalidMerge { .. })
        ));

        let below = Tile::new(1 << 30, 0, 0);
        assert_eq!(
            below.merge_with(&Tile::new(1 << 30, 0, 1)).unwrap().value(),
            1 << 31
        );
    }

    #[test]
    fn test_empty_tiles_do_not_merge() {
        assert!(!Tile::empty(0, 0).can_merge_with(&Tile::empty(0, 1)));
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Tile::new(8, 1, 1), Tile::new(8, 1, 1));
        assert_ne!(Tile::new(8, 1, 1), Tile::new(8, 1, 1).with_merged(true));
        assert_ne!(Tile::new(8, 1, 1), Tile::new(8, 1, 2));
    }

    #[test]
    fn test_valid_tile_values() {
        assert!(is_valid_tile_value(0));
        assert!(is_valid_tile_value(2));
        assert!(is_valid_tile_value(2048));
        assert!(!is_valid_tile_value(1));
        assert!(!is_valid_tile_value(3));
        assert!(!is_valid_tile_value(6));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Tile::new(16, 2, 3).to_string(),
            "Tile[value=16, pos=(2,3), merged=false]"
        );
    }
}
