use serde::{Deserialize, Serialize};

/// Side length of one grid square, in pixels
pub const CELL_SIZE: i32 = 10;
/// Board width in pixels (60 cells)
pub const BOARD_WIDTH: i32 = 600;
/// Board height in pixels (40 cells)
pub const BOARD_HEIGHT: i32 = 400;

/// One grid square, addressed by its top-left pixel origin.
///
/// Cells on the board have both coordinates divisible by the cell size. A
/// freshly moved head may briefly sit one cell outside the board before
/// wraparound puts it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset the cell by a pixel delta
    pub fn offset_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Column index on a grid of `cell_size` squares
    pub fn column(&self, cell_size: i32) -> i32 {
        self.x.div_euclid(cell_size)
    }

    /// Row index on a grid of `cell_size` squares
    pub fn row(&self, cell_size: i32) -> i32 {
        self.y.div_euclid(cell_size)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Pixel extent of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Bounds {
    pub const fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    /// Number of cell columns
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cell rows
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Total number of cells on the board
    pub fn cell_count(&self) -> usize {
        (self.columns() * self.rows()) as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Corrects at most one out-of-range coordinate, checked in the order
    /// left, right, top, bottom. A cell past two edges at once keeps the
    /// second violation until the next call.
    pub fn wrap(&self, cell: Cell) -> Cell {
        if cell.x < 0 {
            Cell::new(self.width - self.cell_size, cell.y)
        } else if cell.x >= self.width {
            Cell::new(0, cell.y)
        } else if cell.y < 0 {
            Cell::new(cell.x, self.height - self.cell_size)
        } else if cell.y >= self.height {
            Cell::new(cell.x, 0)
        } else {
            cell
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT, CELL_SIZE)
    }
}
