use serde::{Deserialize, Serialize};

/// Sprite paths the round needs: one poi sprite and any number of fish
/// sprite variants. Loaded from a JSON file or taken from the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Path to the poi sprite.
    #[serde(default = "default_poi")]
    pub poi: String,
    /// Fish sprite variants. Each spawned fish picks one.
    #[serde(default = "default_fish")]
    pub fish: Vec<String>,
}

fn default_poi() -> String {
    "/poi_new.png".to_string()
}

fn default_fish() -> Vec<String> {
    (1..=4).map(|i| format!("/fish{}.png", i)).collect()
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            poi: default_poi(),
            fish: default_fish(),
        }
    }
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// All sprite paths, poi first.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.poi.as_str()).chain(self.fish.iter().map(String::as_str))
    }
}
