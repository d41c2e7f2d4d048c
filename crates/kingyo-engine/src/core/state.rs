use glam::Vec2;
use crate::api::game::GameConfig;
use crate::api::types::FishId;
use crate::components::fish::Fish;
use crate::components::poi::Poi;
use crate::core::time::RoundClock;

/// Active focus: one fish is under the poi and its hold timer is running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Focus {
    /// Focused fish, by id. The fish may be gone from the pond.
    pub target: FishId,
    /// Timestamp (ms) at which focus began.
    pub started_ms: f64,
}

/// Aggregate state of one round.
/// Fish are kept in a flat Vec in spawn order; scan order matters to the
/// focus detector, so removal preserves it.
#[derive(Debug, Clone)]
pub struct GameState {
    pub running: bool,
    pub clock: RoundClock,
    /// Seconds left, floors at 0.
    pub time_remaining: f32,
    /// Play-field width and height.
    pub bounds: Vec2,
    fishes: Vec<Fish>,
    pub poi: Poi,
    /// `Some` exactly while in focus mode.
    pub focus: Option<Focus>,
    /// Proximity threshold for focusing.
    pub focus_radius: f32,
}

impl GameState {
    /// Build a stopped round with the poi centered and no fish.
    pub fn new(config: &GameConfig) -> Self {
        let bounds = Vec2::new(config.world_width, config.world_height);
        Self {
            running: false,
            clock: RoundClock::new(config.round_secs),
            time_remaining: config.round_secs,
            bounds,
            fishes: Vec::with_capacity(config.fish_count),
            poi: Poi::new(bounds / 2.0, config.poi_durability),
            focus: None,
            focus_radius: config.focus_distance,
        }
    }

    /// Add a fish at the end of the scan order.
    pub fn spawn(&mut self, fish: Fish) {
        self.fishes.push(fish);
    }

    /// Remove a fish by ID, keeping the order of the rest.
    pub fn despawn(&mut self, id: FishId) -> Option<Fish> {
        let idx = self.fishes.iter().position(|f| f.id == id)?;
        Some(self.fishes.remove(idx))
    }

    pub fn get(&self, id: FishId) -> Option<&Fish> {
        self.fishes.iter().find(|f| f.id == id)
    }

    pub fn get_mut(&mut self, id: FishId) -> Option<&mut Fish> {
        self.fishes.iter_mut().find(|f| f.id == id)
    }

    /// Iterate over fish in scan order.
    pub fn fishes(&self) -> impl Iterator<Item = &Fish> {
        self.fishes.iter()
    }

    pub fn fishes_mut(&mut self) -> impl Iterator<Item = &mut Fish> {
        self.fishes.iter_mut()
    }

    pub fn fish_count(&self) -> usize {
        self.fishes.len()
    }

    pub fn focus_mode(&self) -> bool {
        self.focus.is_some()
    }

    pub fn focus_target(&self) -> Option<FishId> {
        self.focus.map(|f| f.target)
    }

    pub fn focus_started_ms(&self) -> Option<f64> {
        self.focus.map(|f| f.started_ms)
    }

    /// Drop focus state entirely.
    pub fn clear_focus(&mut self) {
        self.focus = None;
    }
}
