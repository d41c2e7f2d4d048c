use glam::Vec2;
use crate::assets::registry::SpriteHandle;

/// One 2D drawing operation. Coordinates are canvas units; sprites are
/// drawn centered on `pos`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole surface.
    Clear { width: f32, height: f32 },
    /// A square sprite of side `size`, rotated about its center (radians).
    Sprite {
        sprite: SpriteHandle,
        pos: Vec2,
        rotation: f32,
        size: f32,
    },
    /// A filled circle.
    FillCircle { pos: Vec2, radius: f32, color: String },
    /// A circle outline.
    StrokeCircle {
        pos: Vec2,
        radius: f32,
        color: String,
        line_width: f32,
    },
}

/// Ordered draw commands for a single frame, replayed by a backend.
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(32),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}
