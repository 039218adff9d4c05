//! Entities advanced once per frame.
//!
//! The set of entity kinds is closed: a snake and a piece of food. The
//! registry records which of them take part in a tick, in insertion order,
//! and resolves each member against the live [`Entities`] when ticking, so
//! every tick sees the engine's latest mutations.

use rand::Rng;

use super::{food::Food, snake::Snake};

/// Something that can be advanced by one simulation step
pub trait Tick {
    fn tick(&mut self);
}

impl Tick for Snake {
    fn tick(&mut self) {
        Snake::tick(self);
    }
}

impl<R: Rng> Tick for Food<R> {
    fn tick(&mut self) {}
}

/// Registry member handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Snake,
    Food,
}

/// Live game objects owned by the engine
#[derive(Debug, Clone)]
pub struct Entities<R> {
    pub snake: Snake,
    pub food: Food<R>,
}

impl<R: Rng> Entities<R> {
    pub fn new(snake: Snake, food: Food<R>) -> Self {
        Self { snake, food }
    }

    pub fn get_mut(&mut self, kind: EntityKind) -> &mut dyn Tick {
        match kind {
            EntityKind::Snake => &mut self.snake,
            EntityKind::Food => &mut self.food,
        }
    }
}

/// Ordered collection of entities ticked each frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectRegistry {
    members: Vec<EntityKind>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: EntityKind) {
        self.members.push(kind);
    }

    /// Remove the first occurrence of `kind`; returns whether one was found
    pub fn remove(&mut self, kind: EntityKind) -> bool {
        match self.members.iter().position(|member| *member == kind) {
            Some(index) => {
                self.members.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn members(&self) -> &[EntityKind] {
        &self.members
    }

    /// Tick every member once, in insertion order
    pub fn tick_all<R: Rng>(&self, entities: &mut Entities<R>) {
        for kind in &self.members {
            entities.get_mut(*kind).tick();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Bounds, GameConfig};
    use rand::{SeedableRng, rngs::StdRng};

    fn entities() -> Entities<StdRng> {
        let config = GameConfig::default();
        Entities::new(
            Snake::new(&config),
            Food::with_rng(config.bounds, StdRng::seed_from_u64(1)),
        )
    }

    #[test]
    fn test_add_preserves_order() {
        let mut registry = ObjectRegistry::new();
        registry.add(EntityKind::Snake);
        registry.add(EntityKind::Food);
        assert_eq!(registry.members(), &[EntityKind::Snake, EntityKind::Food]);
    }

    #[test]
    fn test_remove() {
        let mut registry = ObjectRegistry::new();
        registry.add(EntityKind::Snake);
        registry.add(EntityKind::Food);

        assert!(registry.remove(EntityKind::Snake));
        assert_eq!(registry.members(), &[EntityKind::Food]);
        assert!(!registry.remove(EntityKind::Snake));
    }

    #[test]
    fn test_tick_all_advances_snake_only() {
        let mut registry = ObjectRegistry::new();
        registry.add(EntityKind::Snake);
        registry.add(EntityKind::Food);

        let mut entities = entities();
        let food_before = entities.food.position();

        registry.tick_all(&mut entities);

        assert_eq!(entities.snake.head().x, 110);
        assert_eq!(entities.food.position(), food_before);
    }

    #[test]
    fn test_tick_all_sees_live_mutations() {
        let mut registry = ObjectRegistry::new();
        registry.add(EntityKind::Snake);

        let mut entities = entities();
        entities.snake.grow();
        registry.tick_all(&mut entities);
        assert_eq!(entities.snake.len(), 4);
    }

    #[test]
    fn test_removed_member_not_ticked() {
        let mut registry = ObjectRegistry::new();
        registry.add(EntityKind::Snake);
        registry.remove(EntityKind::Snake);

        let mut entities = entities();
        let before = entities.snake.clone();
        registry.tick_all(&mut entities);
        assert_eq!(entities.snake, before);
    }

    #[test]
    fn test_duplicate_member_ticks_twice() {
        let mut registry = ObjectRegistry::new();
        registry.add(EntityKind::Snake);
        registry.add(EntityKind::Snake);

        let mut entities = entities();
        registry.tick_all(&mut entities);
        assert_eq!(entities.snake.head().x, 120);
        assert!(Bounds::default().contains(entities.snake.head()));
    }
}
