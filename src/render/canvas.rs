use anyhow::Result;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use super::surface::{Rgb, Surface};
use crate::game::{Bounds, Cell};

/// Upper half block: foreground paints the top cell, background the bottom one
const HALF_BLOCK: &str = "▀";

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// In-memory board image, one colour per grid cell.
///
/// Rendered as a ratatui widget that packs two grid rows into each terminal
/// row, so a 60x40 board needs 60x20 terminal cells.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameCanvas {
    bounds: Bounds,
    cells: Vec<Rgb>,
    overlay: Option<(String, Rgb)>,
    presented: u32,
    score: u32,
}

impl FrameCanvas {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            cells: vec![Rgb::BACKGROUND; bounds.cell_count()],
            overlay: None,
            presented: 0,
            score: 0,
        }
    }

    /// Terminal cells needed to show the whole board (columns, rows)
    pub fn terminal_size(&self) -> (u16, u16) {
        let columns = self.bounds.columns() as u16;
        let rows = self.bounds.rows() as u16;
        (columns, rows.div_ceil(2))
    }

    fn index(&self, column: i32, row: i32) -> Option<usize> {
        let in_range = (0..self.bounds.columns()).contains(&column)
            && (0..self.bounds.rows()).contains(&row);
        in_range.then(|| (row * self.bounds.columns() + column) as usize)
    }

    /// Colour at a grid column/row, if on the board
    pub fn pixel(&self, column: i32, row: i32) -> Option<Rgb> {
        self.index(column, row).map(|index| self.cells[index])
    }

    /// Colour of the grid cell containing `cell`
    pub fn color_at(&self, cell: Cell) -> Option<Rgb> {
        let size = self.bounds.cell_size;
        self.pixel(cell.column(size), cell.row(size))
    }

    pub fn overlay(&self) -> Option<(&str, Rgb)> {
        self.overlay.as_ref().map(|(text, color)| (text.as_str(), *color))
    }

    /// Number of frames presented so far
    pub fn presented(&self) -> u32 {
        self.presented
    }

    /// Score passed with the last presented frame
    pub fn score(&self) -> u32 {
        self.score
    }
}

impl Surface for FrameCanvas {
    fn clear(&mut self, color: Rgb) {
        self.cells.fill(color);
        self.overlay = None;
    }

    fn fill_cell(&mut self, cell: Cell, color: Rgb) {
        let size = self.bounds.cell_size;
        if let Some(index) = self.index(cell.column(size), cell.row(size)) {
            self.cells[index] = color;
        }
    }

    fn draw_centered_text(&mut self, text: &str, color: Rgb) {
        self.overlay = Some((text.to_string(), color));
    }

    fn present(&mut self, score: u32) -> Result<()> {
        self.presented += 1;
        self.score = score;
        Ok(())
    }
}

impl Widget for &FrameCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (columns, rows) = self.terminal_size();
        let width = columns.min(area.width);
        let height = rows.min(area.height);

        for y in 0..height {
            for x in 0..width {
                let top = self
                    .pixel(i32::from(x), i32::from(y) * 2)
                    .unwrap_or(Rgb::BACKGROUND);
                let bottom = self
                    .pixel(i32::from(x), i32::from(y) * 2 + 1)
                    .unwrap_or(Rgb::BACKGROUND);

                if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                    cell.set_symbol(HALF_BLOCK).set_fg(top.into()).set_bg(bottom.into());
                }
            }
        }

        if let Some((text, color)) = self.overlay() {
            let text_width = text.chars().count() as u16;
            let x = area.x + width.saturating_sub(text_width) / 2;
            let y = area.y + height / 2;
            let style = Style::default()
                .fg(color.into())
                .bg(Rgb::BACKGROUND.into())
                .add_modifier(Modifier::BOLD);
            buf.set_string(x, y, text, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_and_fill() {
        let mut canvas = FrameCanvas::new(Bounds::default());
        canvas.clear(Rgb::BACKGROUND);
        canvas.fill_cell(Cell::new(100, 50), Rgb::SNAKE);

        assert_eq!(canvas.pixel(10, 5), Some(Rgb::SNAKE));
        assert_eq!(canvas.color_at(Cell::new(100, 50)), Some(Rgb::SNAKE));
        assert_eq!(canvas.color_at(Cell::new(110, 50)), Some(Rgb::BACKGROUND));

        canvas.clear(Rgb::BACKGROUND);
        assert_eq!(canvas.pixel(10, 5), Some(Rgb::BACKGROUND));
    }

    #[test]
    fn test_off_board_fill_ignored() {
        let mut canvas = FrameCanvas::new(Bounds::default());
        let before = canvas.clone();

        canvas.fill_cell(Cell::new(-10, 50), Rgb::SNAKE);
        canvas.fill_cell(Cell::new(600, 50), Rgb::SNAKE);
        canvas.fill_cell(Cell::new(50, 400), Rgb::SNAKE);

        assert_eq!(canvas, before);
        assert_eq!(canvas.pixel(-1, 5), None);
    }

    #[test]
    fn test_overlay_cleared_with_frame() {
        let mut canvas = FrameCanvas::new(Bounds::default());
        canvas.draw_centered_text("Game Over", Rgb::FOOD);
        assert_eq!(canvas.overlay(), Some(("Game Over", Rgb::FOOD)));

        canvas.clear(Rgb::BACKGROUND);
        assert_eq!(canvas.overlay(), None);
    }

    #[test]
    fn test_terminal_size() {
        assert_eq!(FrameCanvas::new(Bounds::default()).terminal_size(), (60, 20));
        assert_eq!(FrameCanvas::new(Bounds::new(50, 30, 10)).terminal_size(), (5, 2));
    }

    #[test]
    fn test_widget_packs_two_rows() {
        let mut canvas = FrameCanvas::new(Bounds::new(40, 40, 10));
        canvas.fill_cell(Cell::new(10, 0), Rgb::SNAKE);
        canvas.fill_cell(Cell::new(10, 10), Rgb::FOOD);

        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        (&canvas).render(area, &mut buf);

        let cell = &buf[(1, 0)];
        assert_eq!(cell.symbol(), HALF_BLOCK);
        assert_eq!(cell.fg, Color::Rgb(0, 255, 0));
        assert_eq!(cell.bg, Color::Rgb(255, 0, 0));
        assert_eq!(buf[(0, 1)].bg, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_widget_centres_overlay() {
        let mut canvas = FrameCanvas::new(Bounds::default());
        canvas.draw_centered_text("Game Over", Rgb::FOOD);

        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        (&canvas).render(area, &mut buf);

        // (60 - 9) / 2 = 25, row 10
        let line: String = (25..34).map(|x| buf[(x, 10)].symbol().to_string()).collect();
        assert_eq!(line, "Game Over");
        assert_eq!(buf[(25, 10)].fg, Color::Rgb(255, 0, 0));
    }
}
