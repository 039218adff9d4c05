use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{
    geometry::{BOARD_HEIGHT, BOARD_WIDTH, Bounds, CELL_SIZE, Cell},
    heading::Heading,
};

/// Configuration for a game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board extent and cell size, in pixels
    pub bounds: Bounds,
    /// Starting body, head first
    pub initial_body: Vec<Cell>,
    /// Starting heading
    pub initial_heading: Heading,
    /// Simulation and render rate
    pub ticks_per_second: u32,
    /// How long the game-over message stays up, in milliseconds
    pub game_over_hold_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::new(BOARD_WIDTH, BOARD_HEIGHT, CELL_SIZE),
            initial_body: vec![Cell::new(100, 50), Cell::new(90, 50), Cell::new(80, 50)],
            initial_heading: Heading::Right,
            ticks_per_second: 10,
            game_over_hold_ms: 2000,
        }
    }
}

impl GameConfig {
    /// Create a configuration on a board of custom pixel size
    pub fn with_board(width: i32, height: i32) -> Self {
        Self {
            bounds: Bounds::new(width, height, CELL_SIZE),
            ..Default::default()
        }
    }

    /// Time between two ticks
    pub fn frame_period(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.ticks_per_second.max(1)))
    }

    pub fn game_over_hold(&self) -> Duration {
        Duration::from_millis(self.game_over_hold_ms)
    }
}
