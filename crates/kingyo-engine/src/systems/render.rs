use crate::assets::registry::SpriteRegistry;
use crate::core::state::GameState;
use crate::renderer::draw::{DrawCommand, DrawList};

/// On-screen side length of a fish sprite.
pub const FISH_SIZE: f32 = 60.0;
/// Radius of the dot drawn while a fish sprite is loading.
pub const FISH_FALLBACK_RADIUS: f32 = 10.0;
/// On-screen side length of the poi sprite.
pub const POI_SIZE: f32 = 100.0;
pub const POI_FALLBACK_RADIUS: f32 = 40.0;
pub const POI_FALLBACK_COLOR: &str = "white";
pub const POI_FALLBACK_LINE_WIDTH: f32 = 2.0;
/// Full radius of the focus ring.
pub const FOCUS_RING_RADIUS: f32 = 40.0;
/// Time for the focus ring to grow to full size. Purely visual; the catch
/// threshold is configured separately.
pub const FOCUS_RING_GROW_MS: f64 = 500.0;
pub const FOCUS_RING_COLOR: &str = "#4CAF50";
pub const FOCUS_RING_LINE_WIDTH: f32 = 4.0;

/// Focus ring growth in [0, 1] at `now_ms`.
pub fn focus_ring_progress(started_ms: f64, now_ms: f64) -> f32 {
    let elapsed_ms = (now_ms - started_ms).max(0.0);
    (elapsed_ms / FOCUS_RING_GROW_MS).min(1.0) as f32
}

/// Build the frame's draw list: clear, fish, poi, then the focus ring.
/// Anything whose sprite has not loaded is drawn as a plain circle.
pub fn build_draw_list(state: &GameState, sprites: &SpriteRegistry, now_ms: f64, list: &mut DrawList) {
    list.clear();
    list.push(DrawCommand::Clear {
        width: state.bounds.x,
        height: state.bounds.y,
    });

    for fish in state.fishes() {
        let sprite = fish
            .fish_type
            .image
            .as_deref()
            .and_then(|path| sprites.find_loaded(path));

        match sprite {
            Some(sprite) => list.push(DrawCommand::Sprite {
                sprite,
                pos: fish.pos,
                rotation: fish.heading(),
                size: FISH_SIZE,
            }),
            None => list.push(DrawCommand::FillCircle {
                pos: fish.pos,
                radius: FISH_FALLBACK_RADIUS,
                color: fish.fish_type.color.clone(),
            }),
        }
    }

    let poi = state.poi.pos;
    match sprites.poi().filter(|h| sprites.is_loaded(*h)) {
        Some(sprite) => list.push(DrawCommand::Sprite {
            sprite,
            pos: poi,
            rotation: 0.0,
            size: POI_SIZE,
        }),
        None => list.push(DrawCommand::StrokeCircle {
            pos: poi,
            radius: POI_FALLBACK_RADIUS,
            color: POI_FALLBACK_COLOR.to_string(),
            line_width: POI_FALLBACK_LINE_WIDTH,
        }),
    }

    if let Some(started_ms) = state.focus_started_ms() {
        list.push(DrawCommand::StrokeCircle {
            pos: poi,
            radius: FOCUS_RING_RADIUS * focus_ring_progress(started_ms, now_ms),
            color: FOCUS_RING_COLOR.to_string(),
            line_width: FOCUS_RING_LINE_WIDTH,
        });
    }
}
