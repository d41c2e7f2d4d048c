use glam::Vec2;
use crate::api::game::GameConfig;
use crate::api::types::{FishId, FishType, Rarity};
use crate::assets::manifest::AssetManifest;
use crate::components::fish::Fish;
use crate::core::rng::Rng;
use crate::core::state::GameState;

const GOLDFISH_NAME: &str = "Goldfish";
const GOLDFISH_COLOR: &str = "#FF6B6B";
const GOLDFISH_STRENGTH: u32 = 30;
const GOLDFISH_CATCH_RATE: f32 = 0.7;
const BASE_SPEED: f32 = 2.0;
const SPEED_SPREAD: f32 = 2.0;
/// Each velocity component is drawn from [-MAX_DRIFT, MAX_DRIFT).
const MAX_DRIFT: f32 = 1.0;

/// Fill the pond with `config.fish_count` goldfish at random positions
/// inside the current bounds, each with a random sprite variant.
pub fn spawn_school(state: &mut GameState, config: &GameConfig, manifest: &AssetManifest, rng: &mut Rng) {
    for i in 0..config.fish_count {
        let image = if manifest.fish.is_empty() {
            None
        } else {
            let idx = rng.next_int(manifest.fish.len() as u32) as usize;
            Some(manifest.fish[idx].clone())
        };

        let fish_type = FishType {
            id: format!("fish-{}", i),
            name: GOLDFISH_NAME.to_string(),
            rarity: Rarity::Common,
            strength: GOLDFISH_STRENGTH,
            speed: BASE_SPEED + rng.next_f32() * SPEED_SPREAD,
            color: GOLDFISH_COLOR.to_string(),
            image,
            behavior: "normal".to_string(),
            catch_rate: GOLDFISH_CATCH_RATE,
        };

        let pos = Vec2::new(rng.next_f32() * state.bounds.x, rng.next_f32() * state.bounds.y);
        let vel = Vec2::new(
            (rng.next_f32() - 0.5) * 2.0 * MAX_DRIFT,
            (rng.next_f32() - 0.5) * 2.0 * MAX_DRIFT,
        );

        state.spawn(Fish::new(FishId(i as u32), fish_type).with_pos(pos).with_vel(vel));
    }
    log::info!("spawned {} fish in {}x{}", config.fish_count, state.bounds.x, state.bounds.y);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn(config: &GameConfig, manifest: &AssetManifest) -> GameState {
        let mut state = GameState::new(config);
        let mut rng = Rng::new(config.rng_seed());
        spawn_school(&mut state, config, manifest, &mut rng);
        state
    }

    #[test]
    fn spawns_configured_count_inside_bounds() {
        let config = GameConfig::default();
        let state = spawn(&config, &AssetManifest::default());
        assert_eq!(state.fish_count(), 15);
        for fish in state.fishes() {
            assert!(fish.pos.x >= 0.0 && fish.pos.x <= config.world_width);
            assert!(fish.pos.y >= 0.0 && fish.pos.y <= config.world_height);
            assert!(fish.vel.x.abs() <= 1.0 && fish.vel.y.abs() <= 1.0);
            assert!(fish.fish_type.speed >= 2.0 && fish.fish_type.speed <= 4.0);
            assert!(fish.target.is_none());
        }
    }

    #[test]
    fn ids_follow_spawn_order() {
        let state = spawn(&GameConfig::default(), &AssetManifest::default());
        for (i, fish) in state.fishes().enumerate() {
            assert_eq!(fish.id, FishId(i as u32));
            assert_eq!(fish.fish_type.id, format!("fish-{}", i));
        }
    }

    #[test]
    fn sprites_come_from_manifest() {
        let manifest = AssetManifest::default();
        let state = spawn(&GameConfig::default(), &manifest);
        for fish in state.fishes() {
            let image = fish.fish_type.image.as_ref().unwrap();
            assert!(manifest.fish.contains(image));
        }
    }

    #[test]
    fn no_fish_sprites_means_no_image() {
        let manifest = AssetManifest { fish: Vec::new(), ..AssetManifest::default() };
        let state = spawn(&GameConfig::default(), &manifest);
        assert!(state.fishes().all(|f| f.fish_type.image.is_none()));
    }

    #[test]
    fn same_seed_same_school() {
        let config = GameConfig::default();
        let a = spawn(&config, &AssetManifest::default());
        let b = spawn(&config, &AssetManifest::default());
        for (fa, fb) in a.fishes().zip(b.fishes()) {
            assert_eq!(fa.pos, fb.pos);
            assert_eq!(fa.vel, fb.vel);
            assert_eq!(fa.fish_type, fb.fish_type);
        }
    }
}
