/// Input the host forwards to the engine.
/// Applied as soon as it arrives, between frames; there is no queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer or pen moved to canvas coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// The canvas was resized. New play-field bounds.
    Resize { width: f32, height: f32 },
}
