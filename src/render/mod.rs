pub mod canvas;
pub mod renderer;
pub mod surface;

pub use canvas::FrameCanvas;
pub use renderer::TerminalSurface;
pub use surface::{Rgb, Surface};
