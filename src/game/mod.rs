//! Core game logic
//!
//! Snake movement, growth, wraparound and self-collision, food placement and
//! the per-frame state machine. Nothing in here touches the terminal; drawing
//! goes through the [`Surface`](crate::render::Surface) trait.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod geometry;
pub mod heading;
pub mod registry;
pub mod snake;

// Re-export commonly used types
pub use action::Action;
pub use config::GameConfig;
pub use engine::{GAME_OVER_TEXT, GameEngine, Phase};
pub use food::Food;
pub use geometry::{BOARD_HEIGHT, BOARD_WIDTH, Bounds, CELL_SIZE, Cell};
pub use heading::Heading;
pub use registry::{Entities, EntityKind, ObjectRegistry, Tick};
pub use snake::Snake;
