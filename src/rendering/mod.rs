//! # Rendering Module
//!
//! Plain text rendering for the terminal front end.

pub mod display;

pub use display::*;
