use anyhow::{Context, Result};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

use super::{
    canvas::FrameCanvas,
    surface::{Rgb, Surface},
};
use crate::game::{Bounds, Cell};

/// Draws frames onto a ratatui terminal.
///
/// Cell draws land on an off-screen [`FrameCanvas`]; `present` pushes the
/// canvas to the terminal inside a bordered box titled with the score.
pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    canvas: FrameCanvas,
}

impl<B: Backend> TerminalSurface<B> {
    pub fn new(terminal: Terminal<B>, bounds: Bounds) -> Self {
        Self {
            terminal,
            canvas: FrameCanvas::new(bounds),
        }
    }

    /// Terminal size needed for the board and its border (columns, rows)
    pub fn required_size(&self) -> (u16, u16) {
        let (columns, rows) = self.canvas.terminal_size();
        (columns + 2, rows + 2)
    }

    pub fn canvas(&self) -> &FrameCanvas {
        &self.canvas
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Surface for TerminalSurface<B> {
    fn clear(&mut self, color: Rgb) {
        self.canvas.clear(color);
    }

    fn fill_cell(&mut self, cell: Cell, color: Rgb) {
        self.canvas.fill_cell(cell, color);
    }

    fn draw_centered_text(&mut self, text: &str, color: Rgb) {
        self.canvas.draw_centered_text(text, color);
    }

    fn present(&mut self, score: u32) -> Result<()> {
        self.canvas.present(score)?;

        let canvas = &self.canvas;
        self.terminal
            .draw(|frame| render_board(frame, canvas, score))
            .context("Failed to draw frame")?;

        Ok(())
    }
}

fn render_board(frame: &mut Frame, canvas: &FrameCanvas, score: u32) {
    let (columns, rows) = canvas.terminal_size();
    let board_area = centered(frame.area(), columns + 2, rows + 2);

    let title = Line::from(vec![
        Span::raw(" Snake  "),
        Span::styled("Score: ", Style::default().fg(Color::Yellow)),
        Span::styled(
            score.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::White))
        .title(title)
        .title_alignment(Alignment::Center);

    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);
    frame.render_widget(canvas, inner);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn surface() -> TerminalSurface<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        TerminalSurface::new(terminal, Bounds::default())
    }

    fn screen_text(surface: &TerminalSurface<TestBackend>) -> String {
        surface
            .terminal()
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_required_size() {
        assert_eq!(surface().required_size(), (62, 22));
    }

    #[test]
    fn test_present_draws_title_and_cells() {
        let mut surface = surface();
        surface.clear(Rgb::BACKGROUND);
        for x in [80, 90, 100] {
            surface.fill_cell(Cell::new(x, 50), Rgb::SNAKE);
        }
        surface.present(3).unwrap();

        assert!(screen_text(&surface).contains("Score: 3"));

        let green = Color::Rgb(0, 255, 0);
        let painted = surface
            .terminal()
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|cell| cell.fg == green || cell.bg == green)
            .count();
        assert_eq!(painted, 3);
        assert_eq!(surface.canvas().presented(), 1);
    }

    #[test]
    fn test_present_draws_overlay() {
        let mut surface = surface();
        surface.clear(Rgb::BACKGROUND);
        surface.draw_centered_text("Game Over", Rgb::FOOD);
        surface.present(0).unwrap();

        assert!(screen_text(&surface).contains("Game Over"));
    }

    #[test]
    fn test_small_terminal_clips() {
        let terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();
        let mut surface = TerminalSurface::new(terminal, Bounds::default());
        surface.clear(Rgb::BACKGROUND);
        assert!(surface.present(0).is_ok());
    }
}
