pub mod draw;
pub mod traits;

// Re-export key types for convenient access
pub use draw::{DrawCommand, DrawList};
pub use traits::{FrameData, Renderer};
