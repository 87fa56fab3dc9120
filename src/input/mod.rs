//! # Input Module
//!
//! Maps raw text commands to player inputs.
//!
//! The terminal front end reads one command per line. Arrow names, WASD
//! and (optionally) vi-style `hjkl` keys move the tiles; `r` restarts,
//! `?` shows help and `q` quits. Anything else is rejected here, before it
//! can reach the game.

use crate::game::Direction;

/// Input handler for processing player commands.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Whether to enable Vi-style movement keys (hjkl)
    pub vi_keys_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use slide2048::{Direction, InputHandler, PlayerInput};
    ///
    /// let input_handler = InputHandler::new();
    /// assert_eq!(input_handler.parse("left"), Some(PlayerInput::Move(Direction::Left)));
    /// assert_eq!(input_handler.parse("k"), Some(PlayerInput::Move(Direction::Up)));
    /// assert_eq!(input_handler.parse("jump"), None);
    /// ```
    pub fn new() -> Self {
        Self {
            vi_keys_enabled: true,
        }
    }

    /// Parses one command line. Case and surrounding whitespace are ignored.
    pub fn parse(&self, line: &str) -> Option<PlayerInput> {
        let command = line.trim().to_ascii_lowercase();

        let input = match command.as_str() {
            "up" | "w" => PlayerInput::Move(Direction::Up),
            "down" | "s" => PlayerInput::Move(Direction::Down),
            "left" | "a" => PlayerInput::Move(Direction::Left),
            "right" | "d" => PlayerInput::Move(Direction::Right),
            "r" | "restart" => PlayerInput::Restart,
            "?" | "help" => PlayerInput::Help,
            "q" | "quit" | "exit" => PlayerInput::Quit,
            vi if self.vi_keys_enabled => match vi {
                "k" => PlayerInput::Move(Direction::Up),
                "j" => PlayerInput::Move(Direction::Down),
                "h" => PlayerInput::Move(Direction::Left),
                "l" => PlayerInput::Move(Direction::Right),
                _ => return None,
            },
            _ => return None,
        };

        Some(input)
    }

    /// Help text listing the accepted commands.
    pub fn help_text(&self) -> String {
        let mut text = String::from("Moves: up/w, down/s, left/a, right/d");
        if self.vi_keys_enabled {
            text.push_str(" (or k/j/h/l)");
        }
        text.push_str("\nr: restart  ?: help  q: quit");
        text
    }
}

/// Player input types that can be processed by the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Slide the tiles in a direction
    Move(Direction),
    /// Discard the board and start over
    Restart,
    /// Show help information
    Help,
    /// Quit the game
    Quit,
}
