//! # Board Module
//!
//! The immutable game grid and the move algorithm.
//!
//! A [`Board`] never changes after construction. Every operation that would
//! alter it (placing a tile, spawning, moving) returns a new board and leaves
//! the original untouched, so a front end can keep previous states around
//! freely.

use crate::config::{DEFAULT_WIN_VALUE, MIN_BOARD_SIZE};
use crate::game::line::{collapse_line, oriented_cell};
use crate::game::tile::is_valid_tile_value;
use crate::game::{Direction, Position, Tile};
use crate::generation::TileSpawner;
use crate::{GameError, GameResult};
use log::{debug, trace};
use rand::Rng;
use std::fmt;

/// A square grid of tiles together with the score and terminal flags.
///
/// Every cell is populated: empty cells hold a value-0 tile. Tiles are
/// stored in row-major order.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use slide2048::{Board, Direction};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let board = Board::create_initial(4, &mut rng).unwrap();
///
/// let filled = board.all_tiles().iter().filter(|t| !t.is_empty()).count();
/// assert_eq!(filled, 2);
/// assert_eq!(board.score(), 0);
/// assert!(!board.is_game_over());
///
/// let next = board.make_move(Direction::Up, &mut rng);
/// assert!(next.score() >= board.score());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    size: usize,
    cells: Vec<Tile>,
    score: u64,
    game_over: bool,
    won: bool,
    win_value: u32,
    spawner: TileSpawner,
}

/// The collapsed board produced by [`Board::slide`], before any spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideOutcome {
    /// Board after collapsing every line; merge flags are still set and the
    /// terminal flags are carried over from the source board
    pub board: Board,
    /// Whether any tile moved or merged
    pub changed: bool,
    /// Score earned by the merges of this slide
    pub score_gained: u64,
}

impl Board {
    /// Creates an all-empty board.
    pub fn empty(size: usize) -> GameResult<Self> {
        if size < MIN_BOARD_SIZE {
            return Err(GameError::InvalidSize {
                size,
                min: MIN_BOARD_SIZE,
            });
        }

        let cells = (0..size * size)
            .map(|index| Tile::empty((index / size) as i32, (index % size) as i32))
            .collect();

        Ok(Self {
            size,
            cells,
            score: 0,
            game_over: false,
            won: false,
            win_value: DEFAULT_WIN_VALUE,
            spawner: TileSpawner::default(),
        })
    }

    /// Creates the opening board: an empty grid with two random tiles.
    pub fn create_initial<R: Rng + ?Sized>(size: usize, rng: &mut R) -> GameResult<Self> {
        Ok(Self::empty(size)?.add_random_tile(rng).add_random_tile(rng))
    }

    /// Builds a board from a square grid of values, row by row.
    ///
    /// The score starts at zero. The won and game-over flags are derived
    /// from the layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use slide2048::Board;
    ///
    /// let board = Board::from_rows(&[vec![2, 4], vec![4, 2]]).unwrap();
    /// assert!(board.is_game_over());
    /// assert_eq!(board.to_string(), "2 4\n4 2");
    ///
    /// assert!(Board::from_rows(&[vec![2, 4], vec![4]]).is_err());
    /// assert!(Board::from_rows(&[vec![3, 0], vec![0, 0]]).is_err());
    /// ```
    pub fn from_rows(rows: &[Vec<u32>]) -> GameResult<Self> {
        let mut board = Self::empty(rows.len())?;
        let size = board.size;

        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(GameError::InvalidLayout(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    values.len(),
                    size
                )));
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile_value(value) {
                    return Err(GameError::InvalidTileValue(value));
                }
                board.cells[row * size + col] = Tile::new(value, row as i32, col as i32);
            }
        }

        Ok(board.with_derived_flags())
    }

    /// Copy of this board with a different score.
    pub fn with_score(self, score: u64) -> Self {
        Self { score, ..self }
    }

    /// Copy of this board that wins on `win_value` instead of the default.
    ///
    /// A board that has already won stays won.
    pub fn with_win_value(self, win_value: u32) -> Self {
        let board = Self { win_value, ..self };
        let won = board.won || board.has_won();
        Self { won, ..board }
    }

    /// Copy of this board that spawns tiles with `spawner`.
    pub fn with_spawner(self, spawner: TileSpawner) -> Self {
        Self { spawner, ..self }
    }

    fn with_derived_flags(self) -> Self {
        let won = self.has_won();
        let game_over = self.is_terminal_state();
        Self {
            won,
            game_over,
            ..self
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn win_value(&self) -> u32 {
        self.win_value
    }

    pub fn spawner(&self) -> TileSpawner {
        self.spawner
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn checked_index(&self, row: i32, col: i32) -> GameResult<usize> {
        if !Position::new(row, col).is_within(self.size) {
            return Err(GameError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(self.index(row as usize, col as usize))
    }

    /// Returns the tile at `(row, col)`.
    pub fn get_tile(&self, row: i32, col: i32) -> GameResult<Tile> {
        let index = self.checked_index(row, col)?;
        Ok(self.cells[index])
    }

    /// All tiles in row-major order.
    pub fn all_tiles(&self) -> &[Tile] {
        &self.cells
    }

    /// Iterates over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.size)
    }

    /// Returns a copy of this board with `tile` stored at its own position.
    ///
    /// Score and flags are left as they are.
    pub fn place_tile(&self, tile: Tile) -> GameResult<Self> {
        if !is_valid_tile_value(tile.value()) {
            return Err(GameError::InvalidTileValue(tile.value()));
        }
        let index = self.checked_index(tile.row(), tile.col())?;
        let mut cells = self.cells.clone();
        cells[index] = tile;
        Ok(Self {
            cells,
            ..self.clone()
        })
    }

    /// Positions of every empty cell, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|tile| tile.is_empty())
            .map(Tile::position)
            .collect()
    }

    /// Places one random tile on an empty cell.
    ///
    /// A full board is returned unchanged.
    pub fn add_random_tile<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let empty = self.empty_positions();
        match self.spawner.spawn(&empty, rng) {
            Some(tile) => {
                trace!(
                    "Spawned {} at ({}, {})",
                    tile.value(),
                    tile.row(),
                    tile.col()
                );
                let mut cells = self.cells.clone();
                let index = self.index(tile.row() as usize, tile.col() as usize);
                cells[index] = tile;
                Self {
                    cells,
                    ..self.clone()
                }
            }
            None => self.clone(),
        }
    }

    /// Collapses every line towards `direction` without spawning.
    ///
    /// Tiles created by a merge carry the merge flag in the returned board.
    pub fn slide(&self, direction: Direction) -> SlideOutcome {
        let size = self.size;
        let mut cells = self.cells.clone();
        let mut score_gained = 0u64;
        let mut changed = false;

        for line in 0..size {
            let tiles: Vec<Tile> = (0..size)
                .map(|offset| {
                    let (row, col) = oriented_cell(direction, size, line, offset);
                    self.cells[self.index(row, col)]
                })
                .collect();

            let collapse = collapse_line(&tiles);
            score_gained += collapse.score;
            changed |= collapse.changed;

            for (offset, tile) in collapse.tiles.into_iter().enumerate() {
                let (row, col) = oriented_cell(direction, size, line, offset);
                cells[self.index(row, col)] = tile.with_position(row as i32, col as i32);
            }
        }

        let board = Self {
            size,
            cells,
            score: self.score + score_gained,
            game_over: self.game_over,
            won: self.won,
            win_value: self.win_value,
            spawner: self.spawner,
        };

        SlideOutcome {
            board,
            changed,
            score_gained,
        }
    }

    /// Plays one move.
    ///
    /// If nothing can slide or merge in `direction` the board is returned as
    /// is: no tile spawns and the flags are not recomputed. Otherwise merge
    /// flags are cleared, one random tile spawns, and game-over and win are
    /// evaluated on the resulting board. A won board stays won.
    pub fn make_move<R: Rng + ?Sized>(&self, direction: Direction, rng: &mut R) -> Self {
        let outcome = self.slide(direction);
        if !outcome.changed {
            trace!("Move {} is blocked", direction);
            return self.clone();
        }

        let settled = outcome.board.clear_merge_flags().add_random_tile(rng);
        let game_over = settled.is_terminal_state();
        let won = self.won || settled.has_won();

        debug!(
            "Moved {}: +{} points, score {}",
            direction, outcome.score_gained, settled.score
        );

        Self {
            game_over,
            won,
            ..settled
        }
    }

    fn clear_merge_flags(self) -> Self {
        let cells = self
            .cells
            .into_iter()
            .map(|tile| tile.with_merged(false))
            .collect();
        Self { cells, ..self }
    }

    /// Whether a move in `direction` would change the board.
    pub fn can_move(&self, direction: Direction) -> bool {
        self.slide(direction).changed
    }

    /// True if a tile holds the win value.
    pub fn has_won(&self) -> bool {
        self.cells.iter().any(|tile| tile.value() == self.win_value)
    }

    /// True when no move can change the board.
    ///
    /// That is the case exactly when there is no empty cell and no two
    /// horizontally or vertically adjacent tiles can merge.
    pub fn is_terminal_state(&self) -> bool {
        if self.cells.iter().any(Tile::is_empty) {
            return false;
        }

        let size = self.size;
        for row in 0..size {
            for col in 0..size {
                let tile = &self.cells[self.index(row, col)];
                if col + 1 < size && tile.can_merge_with(&self.cells[self.index(row, col + 1)]) {
                    return false;
                }
                if row + 1 < size && tile.can_merge_with(&self.cells[self.index(row + 1, col)]) {
                    return false;
                }
            }
        }
        true
    }

    /// Largest value on the board.
    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().map(Tile::value).max().unwrap_or(0)
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|tile| u64::from(tile.value())).sum()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.rows().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for (col, tile) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", tile.value())?;
            }
        }
        Ok(())
    }
}
