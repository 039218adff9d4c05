use anyhow::Result;
use log::{debug, info};
use rand::{Rng, rngs::ThreadRng};

use super::{
    action::Action,
    config::GameConfig,
    food::Food,
    geometry::Cell,
    registry::{Entities, EntityKind, ObjectRegistry},
    snake::Snake,
};
use crate::render::{Rgb, Surface};

/// Text shown over the board when the snake runs into itself
pub const GAME_OVER_TEXT: &str = "Game Over";

/// Lifecycle of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// The snake hit itself; the overlay has been presented
    GameOver,
    /// The player asked to stop
    Quit,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::Running)
    }
}

/// Drives one game session frame by frame.
///
/// The engine owns the snake, the food and the registry that ticks them. It
/// does no I/O of its own: input arrives as [`Action`]s and every frame is
/// drawn onto a caller-supplied [`Surface`].
pub struct GameEngine<R = ThreadRng> {
    config: GameConfig,
    registry: ObjectRegistry,
    entities: Entities<R>,
    phase: Phase,
    frames: u64,
}

impl GameEngine<ThreadRng> {
    pub fn new(config: GameConfig) -> Self {
        GameEngine::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Start a session with the initial snake and food placed off its body
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let snake = Snake::new(&config);
        let food = Food::with_rng(config.bounds, rng);
        let mut engine = Self::from_entities(config, Entities::new(snake, food));
        engine.spawn_food();
        engine
    }

    /// Start a session from prepared entities, leaving the food where it is
    pub fn from_entities(config: GameConfig, entities: Entities<R>) -> Self {
        let mut registry = ObjectRegistry::new();
        registry.add(EntityKind::Snake);
        registry.add(EntityKind::Food);

        Self {
            config,
            registry,
            entities,
            phase: Phase::Running,
            frames: 0,
        }
    }

    /// Run one frame: apply input, tick, draw, resolve food and game over,
    /// then present. Returns the phase after the frame.
    ///
    /// Frames after the session has ended are ignored.
    pub fn frame<S: Surface>(&mut self, actions: &[Action], surface: &mut S) -> Result<Phase> {
        if self.phase.is_terminal() {
            return Ok(self.phase);
        }

        let mut quit_requested = false;
        for action in actions {
            match action {
                Action::Steer(heading) => self.entities.snake.set_heading(*heading),
                Action::Quit => quit_requested = true,
            }
        }

        self.registry.tick_all(&mut self.entities);
        self.frames += 1;

        self.draw(surface);

        if self.entities.snake.head() == self.entities.food.position() {
            self.entities.snake.grow();
            debug!("food eaten, score {}", self.entities.snake.score());
            self.spawn_food();
        }

        if self.entities.snake.is_over() {
            surface.draw_centered_text(GAME_OVER_TEXT, Rgb::FOOD);
            self.phase = Phase::GameOver;
            info!(
                "game over after {} frames, score {}",
                self.frames,
                self.entities.snake.score()
            );
        } else if quit_requested {
            self.phase = Phase::Quit;
            info!("quit requested after {} frames", self.frames);
        }

        surface.present(self.entities.snake.score())?;

        Ok(self.phase)
    }

    fn draw<S: Surface>(&self, surface: &mut S) {
        surface.clear(Rgb::BACKGROUND);
        for cell in self.entities.snake.body() {
            surface.fill_cell(*cell, Rgb::SNAKE);
        }
        surface.fill_cell(self.entities.food.position(), Rgb::FOOD);
    }

    /// Re-roll the food until it lands off the snake.
    ///
    /// Retries are unbounded; they end quickly while the snake covers a small
    /// share of the board.
    pub fn spawn_food(&mut self) -> Cell {
        let mut attempts = 1;
        self.entities.food.randomize();
        while self.entities.snake.contains(self.entities.food.position()) {
            self.entities.food.randomize();
            attempts += 1;
        }

        let position = self.entities.food.position();
        debug!("food spawned at ({}, {}) after {attempts} roll(s)", position.x, position.y);
        position
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.entities.snake
    }

    pub fn food(&self) -> &Food<R> {
        &self.entities.food
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
