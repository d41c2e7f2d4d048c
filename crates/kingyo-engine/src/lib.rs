pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::engine::{GameEngine, FrameStatus, GameOverCallback};
pub use api::game::GameConfig;
pub use api::types::{FishId, FishType, Rarity, GameResult, GameResultKind};
pub use components::fish::Fish;
pub use components::poi::Poi;
pub use core::state::{GameState, Focus};
pub use core::time::RoundClock;
pub use core::rng::Rng;
pub use renderer::draw::{DrawCommand, DrawList};
pub use renderer::traits::{Renderer, FrameData};
pub use input::event::InputEvent;
pub use assets::manifest::AssetManifest;
pub use assets::registry::{SpriteRegistry, SpriteHandle};
pub use bridge::protocol::{encode_result, decode_result};
pub use systems::focus::FocusEvent;
pub use systems::simulation::StepOutcome;
