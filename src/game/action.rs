use super::heading::Heading;

/// Player command for the next frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Point the snake in a new heading
    Steer(Heading),
    /// Stop the game once the current frame is done
    Quit,
}

impl From<Heading> for Action {
    fn from(heading: Heading) -> Self {
        Action::Steer(heading)
    }
}
