//! # Line Collapse
//!
//! A move works on the board one line at a time. Every line is read so that
//! index 0 sits on the edge the tiles slide towards, which lets a single
//! collapse routine serve all four directions:
//!
//! | Direction | Line `i`  | Offset `k` maps to    |
//! |-----------|-----------|-----------------------|
//! | Left      | row `i`   | `(i, k)`              |
//! | Right     | row `i`   | `(i, size - 1 - k)`   |
//! | Up        | column `i`| `(k, i)`              |
//! | Down      | column `i`| `(size - 1 - k, i)`   |
//!
//! The same mapping is used to read a line and to write the collapsed line
//! back, so the mirror directions can never drift apart.

use crate::game::{Direction, Tile};

/// Maps offset `offset` along line `line` to a `(row, col)` grid coordinate.
pub fn oriented_cell(
    direction: Direction,
    size: usize,
    line: usize,
    offset: usize,
) -> (usize, usize) {
    match direction {
        Direction::Left => (line, offset),
        Direction::Right => (line, size - 1 - offset),
        Direction::Up => (offset, line),
        Direction::Down => (size - 1 - offset, line),
    }
}

/// Result of collapsing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCollapse {
    /// Collapsed tiles, packed towards index 0 and padded with empty tiles
    pub tiles: Vec<Tile>,
    /// Sum of the values produced by merges in this line
    pub score: u64,
    /// Whether any value in the line moved or merged
    pub changed: bool,
}

/// Collapses a line towards index 0.
///
/// Empty tiles are dropped, then a single left-to-right pass merges each tile
/// with its successor when their values match and the doubled value fits in
/// a `u32`. A merged tile is never revisited, so `[2, 2, 2]` becomes
/// `[4, 2]`. The output is padded with unplaced empty tiles back to the input
/// length; positions are assigned by the board when the line is written back.
pub fn collapse_line(line: &[Tile]) -> LineCollapse {
    let occupied: Vec<Tile> = line.iter().copied().filter(|tile| !tile.is_empty()).collect();

    let mut tiles = Vec::with_capacity(line.len());
    let mut score = 0u64;
    let mut i = 0;

    while i < occupied.len() {
        let current = occupied[i];
        let merged = occupied
            .get(i + 1)
            .filter(|next| current.can_merge_with(next))
            .and_then(|_| current.doubled());
        match merged {
            Some(merged) => {
                score += u64::from(merged.value());
                tiles.push(merged);
                i += 2;
            }
            None => {
                tiles.push(current);
                i += 1;
            }
        }
    }

    tiles.resize(line.len(), Tile::unplaced(0));

    let changed = tiles
        .iter()
        .zip(line)
        .any(|(after, before)| after.value() != before.value());

    LineCollapse {
        tiles,
        score,
        changed,
    }
}
