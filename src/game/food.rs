use rand::{Rng, rngs::ThreadRng};

use super::geometry::{Bounds, Cell};

/// A single piece of food.
///
/// `randomize` picks any cell on the board, including cells the snake
/// occupies; keeping food off the snake is the engine's job.
#[derive(Debug, Clone)]
pub struct Food<R = ThreadRng> {
    position: Cell,
    bounds: Bounds,
    rng: R,
}

impl Food<ThreadRng> {
    pub fn new(bounds: Bounds) -> Self {
        Food::with_rng(bounds, rand::thread_rng())
    }
}

impl<R: Rng> Food<R> {
    /// Create food driven by a caller-supplied RNG, already placed at a random cell
    pub fn with_rng(bounds: Bounds, rng: R) -> Self {
        let mut food = Food {
            position: Cell::new(0, 0),
            bounds,
            rng,
        };
        food.randomize();
        food
    }

    /// Move to a uniformly random grid-aligned cell on the board
    pub fn randomize(&mut self) {
        let column = self.rng.gen_range(0..self.bounds.columns());
        let row = self.rng.gen_range(0..self.bounds.rows());
        self.position = Cell::new(column * self.bounds.cell_size, row * self.bounds.cell_size);
    }

    /// Put the food on a specific cell
    pub fn place(&mut self, cell: Cell) {
        self.position = cell;
    }

    pub fn position(&self) -> Cell {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_randomize_stays_on_grid() {
        let bounds = Bounds::default();
        let mut food = Food::with_rng(bounds, StdRng::seed_from_u64(7));

        for _ in 0..1000 {
            food.randomize();
            let pos = food.position();
            assert!(bounds.contains(pos), "{pos:?} off the board");
            assert_eq!(pos.x % 10, 0);
            assert_eq!(pos.y % 10, 0);
        }
    }

    #[test]
    fn test_randomize_reaches_corners() {
        // 2x2 board: every cell should come up quickly
        let bounds = Bounds::new(20, 20, 10);
        let mut food = Food::with_rng(bounds, StdRng::seed_from_u64(3));
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            food.randomize();
            seen.insert(food.position());
        }

        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let bounds = Bounds::default();
        let mut a = Food::with_rng(bounds, StdRng::seed_from_u64(42));
        let mut b = Food::with_rng(bounds, StdRng::seed_from_u64(42));

        for _ in 0..10 {
            a.randomize();
            b.randomize();
            assert_eq!(a.position(), b.position());
        }
    }

    #[test]
    fn test_thread_rng_food() {
        let food = Food::new(Bounds::default());
        assert!(Bounds::default().contains(food.position()));
    }
}
