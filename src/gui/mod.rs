//! Screen-Space GUI System
//!
//! Full-screen UI shown outside of gameplay. These components:
//! - Use logical screen coordinates (800x400)
//! - Are drawn instead of the world, not on top of it
//! - Use procedural rendering (SDL2 primitives + bitmap text)
//!
//! # Available Components
//!
//! - [`StartScreen`] - Logo and START button
//! - [`GameOverScreen`] - Final score, high score and restart prompt

pub mod game_over_screen;
pub mod start_screen;

pub use game_over_screen::GameOverScreen;
pub use start_screen::StartScreen;
