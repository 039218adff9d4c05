use anyhow::Result;

use crate::game::Cell;

/// An opaque colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
    pub const SNAKE: Rgb = Rgb::new(0, 255, 0);
    pub const FOOD: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Where a frame gets drawn.
///
/// A frame is a `clear`, any number of cell fills and at most one text
/// overlay, followed by `present`. Nothing is visible before `present`.
pub trait Surface {
    /// Fill the whole board with `color` and drop any overlay
    fn clear(&mut self, color: Rgb);

    /// Fill one grid cell. Cells off the board are ignored.
    fn fill_cell(&mut self, cell: Cell, color: Rgb);

    /// Show a line of text centred on the board, over the cells
    fn draw_centered_text(&mut self, text: &str, color: Rgb);

    /// Make the frame visible
    fn present(&mut self, score: u32) -> Result<()>;
}
