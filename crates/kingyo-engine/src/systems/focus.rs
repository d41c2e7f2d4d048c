//! Focus/capture detection.
//!
//! Each frame the poi is compared against the fish in scan order. The first
//! fish closer than the focus radius is the candidate; the rest are not
//! looked at. Holding the same candidate under the poi for longer than the
//! hold threshold catches it.

use crate::api::types::FishId;
use crate::core::state::{Focus, GameState};
use crate::core::time::secs_between;

/// What the detector did this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusEvent {
    /// Nothing in range and nothing was focused.
    Idle,
    /// Nothing in range; the previous focus was dropped.
    Cleared,
    /// A fish came into range and focus started on it.
    Entered(FishId),
    /// The focused fish is still the candidate but not held long enough.
    Holding { target: FishId, held_secs: f32 },
    /// A different fish is the candidate while another is focused.
    /// Focus and its timer stay on `target`.
    Contested { target: FishId, candidate: FishId },
    /// The focused fish was held past the threshold.
    Caught(FishId),
}

/// First fish in scan order strictly within the focus radius of the poi.
pub fn find_candidate(state: &GameState) -> Option<FishId> {
    let poi = state.poi.pos;
    let radius = state.focus_radius;
    state
        .fishes()
        .find(|fish| fish.pos.distance(poi) < radius)
        .map(|fish| fish.id)
}

/// Run the focus transition for one frame.
pub fn update_focus(state: &mut GameState, now_ms: f64, hold_secs: f32) -> FocusEvent {
    let candidate = find_candidate(state);

    match (candidate, state.focus) {
        (None, None) => FocusEvent::Idle,
        (None, Some(focus)) => {
            log::debug!("focus lost on {:?}", focus.target);
            state.clear_focus();
            FocusEvent::Cleared
        }
        (Some(id), None) => {
            log::debug!("focus on {:?}", id);
            state.focus = Some(Focus { target: id, started_ms: now_ms });
            FocusEvent::Entered(id)
        }
        (Some(id), Some(focus)) if focus.target == id => {
            let held_secs = secs_between(focus.started_ms, now_ms);
            if held_secs > hold_secs {
                FocusEvent::Caught(id)
            } else {
                FocusEvent::Holding { target: id, held_secs }
            }
        }
        (Some(id), Some(focus)) => FocusEvent::Contested {
            target: focus.target,
            candidate: id,
        },
    }
}
