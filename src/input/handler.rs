use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, Heading};

/// Maps key presses to game actions
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Arrow keys steer; `q`, `Esc` and `Ctrl+C` quit. Other keys are ignored.
    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Action> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Up => Some(Action::Steer(Heading::Up)),
            KeyCode::Down => Some(Action::Steer(Heading::Down)),
            KeyCode::Left => Some(Action::Steer(Heading::Left)),
            KeyCode::Right => Some(Action::Steer(Heading::Right)),

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),

            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
