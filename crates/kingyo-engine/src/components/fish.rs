use glam::Vec2;
use crate::api::types::{FishId, FishType};

/// A live fish agent swimming in the pond.
#[derive(Debug, Clone)]
pub struct Fish {
    /// Unique identifier within the round.
    pub id: FishId,
    /// Species this fish belongs to. Never mutated after spawn.
    pub fish_type: FishType,
    /// Position in canvas space.
    pub pos: Vec2,
    /// Displacement applied every frame.
    pub vel: Vec2,
    /// Steering target. Not used by the current swim behavior.
    pub target: Option<Vec2>,
}

impl Fish {
    /// Create a stationary fish at the origin.
    pub fn new(id: FishId, fish_type: FishType) -> Self {
        Self {
            id,
            fish_type,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            target: None,
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_target(mut self, target: Vec2) -> Self {
        self.target = Some(target);
        self
    }

    /// Sprite rotation in radians: the velocity heading plus a quarter turn,
    /// since fish sprites are drawn facing up.
    pub fn heading(&self) -> f32 {
        self.vel.y.atan2(self.vel.x) + std::f32::consts::FRAC_PI_2
    }
}
