//! JSON shapes exchanged with the JavaScript shell.
//! Field names must stay in sync with the shell's `GameResult` type:
//!
//! ```text
//! { type: "success" | "failure" | "timeout",
//!   fishCaught?: FishType, failureReason?: string,
//!   poiFinalDurability: number, playDuration: number }
//! ```

use crate::api::types::GameResult;

/// Encode a round result for the shell.
pub fn encode_result(result: &GameResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Decode a result produced by `encode_result`.
pub fn decode_result(json: &str) -> Result<GameResult, serde_json::Error> {
    serde_json::from_str(json)
}
