use serde::{Deserialize, Serialize};

/// Unique identifier for a fish within one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FishId(pub u32);

/// Rarity tier of a fish species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Legendary,
    Bugged,
}

/// Immutable catalog entry describing what kind of fish an agent is.
/// Serialized in camelCase because it crosses into the JavaScript shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FishType {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    /// 1-100.
    pub strength: u32,
    /// 1-10.
    pub speed: f32,
    /// CSS color used for the fallback shape.
    pub color: String,
    /// Sprite path, matched against loaded images by suffix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub behavior: String,
    /// 0-1. Carried for the shell; catches are unconditional.
    pub catch_rate: f32,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResultKind {
    Success,
    Failure,
    Timeout,
}

/// Outcome record handed to the presentation shell, once per round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    #[serde(rename = "type")]
    pub kind: GameResultKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fish_caught: Option<FishType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    pub poi_final_durability: f32,
    /// Seconds of play, `round_secs - time_remaining`.
    pub play_duration: f32,
}

impl GameResult {
    pub fn is_success(&self) -> bool {
        self.kind == GameResultKind::Success
    }
}
