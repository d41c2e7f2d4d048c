use serde::{Deserialize, Serialize};

pub const DEFAULT_SEED: u64 = 42;

/// Gameplay configuration for a round.
///
/// Every field has a default, so a partial JSON object from the host
/// (`{"fish_count": 8}`) is enough to override individual values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Play-field width in canvas units. Spawn range and bounce limit.
    pub world_width: f32,
    /// Play-field height in canvas units.
    pub world_height: f32,
    /// Round length in seconds.
    pub round_secs: f32,
    /// Number of fish spawned at round start.
    pub fish_count: usize,
    /// Poi-to-fish distance below which a fish can be focused.
    pub focus_distance: f32,
    /// A focused fish must stay the in-range candidate for longer than this
    /// many seconds to be caught.
    pub catch_hold_secs: f32,
    /// Starting poi durability (0-100).
    pub poi_durability: f32,
    /// Seed for the spawn generator. `None` uses `DEFAULT_SEED`; hosts
    /// that want a fresh school every round fill it in.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            round_secs: 30.0,
            fish_count: 15,
            focus_distance: 50.0,
            catch_hold_secs: 0.5,
            poi_durability: 100.0,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a config from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn rng_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    pub fn with_world_size(mut self, width: f32, height: f32) -> Self {
        self.world_width = width;
        self.world_height = height;
        self
    }
}
