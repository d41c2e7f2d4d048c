use crate::components::fish::Fish;
use crate::core::state::GameState;
use crate::systems::focus::{update_focus, FocusEvent};
use crate::systems::movement::swim;

/// Result of one simulation step.
#[derive(Debug, Clone)]
pub enum StepOutcome {
    /// The round goes on.
    Continue(FocusEvent),
    /// The countdown hit zero. Fish were not moved this frame.
    TimedOut,
    /// A fish was caught and removed from the pond.
    Caught(Fish),
}

/// Advance the round to `now_ms`: countdown, swim, then focus detection.
pub fn step(state: &mut GameState, now_ms: f64, hold_secs: f32) -> StepOutcome {
    state.time_remaining = state.clock.remaining(now_ms);
    if state.time_remaining <= 0.0 {
        return StepOutcome::TimedOut;
    }

    swim(state);

    match update_focus(state, now_ms, hold_secs) {
        FocusEvent::Caught(id) => {
            state.clear_focus();
            match state.despawn(id) {
                Some(fish) => StepOutcome::Caught(fish),
                // The detector only reports fish it just found in the pond.
                None => StepOutcome::Continue(FocusEvent::Cleared),
            }
        }
        event => StepOutcome::Continue(event),
    }
}
