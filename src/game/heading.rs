use serde::{Deserialize, Serialize};

/// Direction the snake is travelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// Returns the unit delta (dx, dy) for this heading; y grows downwards
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    /// Returns the pixel offset for one step of `cell_size`
    pub fn offset(&self, cell_size: i32) -> (i32, i32) {
        let (dx, dy) = self.delta();
        (dx * cell_size, dy * cell_size)
    }
}
