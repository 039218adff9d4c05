use super::{
    config::GameConfig,
    geometry::{Bounds, Cell},
    heading::Heading,
};

/// The player's snake.
///
/// One snake exists per game session; the engine owns it and is its only
/// mutator. The body is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Occupied cells, with head at index 0
    body: Vec<Cell>,
    heading: Heading,
    /// When set, the next tick keeps the tail
    pending_growth: bool,
    score: u32,
    is_over: bool,
    bounds: Bounds,
}

impl Snake {
    /// Create the starting snake described by `config`
    pub fn new(config: &GameConfig) -> Self {
        Self::with_body(config.initial_body.clone(), config.initial_heading, config.bounds)
    }

    /// Create a snake from an explicit body, head first.
    ///
    /// Panics if `body` is empty.
    pub fn with_body(body: Vec<Cell>, heading: Heading, bounds: Bounds) -> Self {
        assert!(!body.is_empty(), "snake body needs at least one cell");

        Self {
            body,
            heading,
            pending_growth: false,
            score: 0,
            is_over: false,
            bounds,
        }
    }

    /// Change heading. Reversing onto the neck is allowed and ends the game
    /// on the next tick for any snake longer than one cell.
    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    /// Request one cell of growth on the next tick and count the food eaten
    pub fn grow(&mut self) {
        self.pending_growth = true;
        self.score += 1;
    }

    /// Advance one step: move, trim or grow, detect self-collision, then wrap.
    ///
    /// Does nothing once the game is over.
    pub fn tick(&mut self) {
        if self.is_over {
            return;
        }

        self.advance_head();
        self.trim_or_grow();
        self.check_self_collision();
        self.wrap_head();
    }

    fn advance_head(&mut self) {
        let (dx, dy) = self.heading.offset(self.bounds.cell_size);
        let new_head = self.head().offset_by(dx, dy);
        self.body.insert(0, new_head);
    }

    fn trim_or_grow(&mut self) {
        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop();
        }
    }

    // Runs on the unwrapped head, so a head that just left the board never
    // matches a segment this tick.
    fn check_self_collision(&mut self) {
        let head = self.head();
        if self.body[1..].contains(&head) {
            self.is_over = true;
        }
    }

    fn wrap_head(&mut self) {
        self.body[0] = self.bounds.wrap(self.body[0]);
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn pending_growth(&self) -> bool {
        self.pending_growth
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true for a constructed snake
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
