//! Grid Snake - the classic arcade snake on a fixed 60x40 grid
//!
//! This library provides:
//! - Core game logic: snake, food, the tick registry and the frame engine (game module)
//! - Terminal rendering behind a drawing-surface trait (render module)
//! - Keyboard mapping (input module)
//! - The interactive terminal session (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
