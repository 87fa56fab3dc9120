//! # Text Display
//!
//! Renders a session as a block of text: a score header, the grid with
//! right-aligned cells, and a status line.

use crate::game::{Board, GameCompletionState, GameState};
use std::fmt::Write;

/// Text renderer for the terminal front end.
#[derive(Debug, Clone)]
pub struct TextDisplay {
    /// Character drawn for empty cells
    pub empty_glyph: char,
}

impl Default for TextDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDisplay {
    pub fn new() -> Self {
        Self { empty_glyph: '.' }
    }

    /// Renders the full session view.
    pub fn render(&self, state: &GameState) -> String {
        let board = state.board();
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Score: {}  Best: {}",
            board.score(),
            state.statistics.best_score
        );
        out.push_str(&self.render_grid(board));
        out.push_str(self.status_line(state));
        out
    }

    /// Renders only the grid, one row per line.
    ///
    /// # Examples
    ///
    /// ```
    /// use slide2048::{Board, TextDisplay};
    ///
    /// let board = Board::from_rows(&[vec![2, 0], vec![0, 128]]).unwrap();
    /// assert_eq!(TextDisplay::new().render_grid(&board), "  2   .\n  . 128\n");
    /// ```
    pub fn render_grid(&self, board: &Board) -> String {
        let width = board.highest_tile().max(1).to_string().len();
        let mut out = String::new();

        for row in board.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|tile| {
                    if tile.is_empty() {
                        format!("{:>width$}", self.empty_glyph)
                    } else {
                        format!("{:>width$}", tile.value())
                    }
                })
                .collect();
            let _ = writeln!(out, "{}", cells.join(" "));
        }
        out
    }

    fn status_line(&self, state: &GameState) -> &'static str {
        match state.completion_state() {
            GameCompletionState::Won => "You win! Press r to restart",
            GameCompletionState::GameOver => {
                "Game over! No more moves possible. Press r to restart"
            }
            GameCompletionState::Playing if state.board().is_won() => "You win! Keep going...",
            GameCompletionState::Playing => "Playing... use the arrow keys to move",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameSettings;

    #[test]
    fn test_render_contains_score_and_grid() {
        let state = GameState::new(GameSettings::seeded(10)).unwrap();
        let text = TextDisplay::new().render(&state);
        assert!(text.starts_with("Score: 0"));
        assert_eq!(text.lines().count(), 1 + 4 + 1);
        assert!(text.ends_with("Playing... use the arrow keys to move"));
    }

    #[test]
    fn test_grid_columns_align() {
        let board = Board::from_rows(&[vec![2, 1024], vec![64, 0]]).unwrap();
        let grid = TextDisplay::new().render_grid(&board);
        let widths: Vec<usize> = grid.lines().map(str::len).collect();
        assert_eq!(widths, vec![9, 9]);
        assert_eq!(grid, "   2 1024\n  64    .\n");
    }
}
