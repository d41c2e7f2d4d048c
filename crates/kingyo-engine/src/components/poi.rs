use glam::Vec2;

/// The player's paper scoop. Follows the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct Poi {
    /// Center in canvas space.
    pub pos: Vec2,
    /// 0-100. Reported in the result; no mechanic wears it down yet.
    pub durability: f32,
}

impl Poi {
    pub fn new(pos: Vec2, durability: f32) -> Self {
        Self { pos, durability }
    }
}
