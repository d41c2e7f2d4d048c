use crate::core::state::GameState;

/// Advance every fish by one frame of its velocity and bounce it off the
/// pond edges. One unit step per frame, so swim speed follows the display
/// refresh rate. Fish pass through each other.
pub fn swim(state: &mut GameState) {
    let bounds = state.bounds;
    for fish in state.fishes_mut() {
        fish.pos += fish.vel;

        // Each axis flips on its own; a corner hit flips both.
        if fish.pos.x < 0.0 || fish.pos.x > bounds.x {
            fish.vel.x = -fish.vel.x;
        }
        if fish.pos.y < 0.0 || fish.pos.y > bounds.y {
            fish.vel.y = -fish.vel.y;
        }
    }
}
