//! Browser bridge for the Kingyo round engine.
//!
//! The shell calls `kingyo_init` once the canvas is mounted and sized,
//! then `kingyo_start`. Pointer and resize events are forwarded as they
//! happen. The round result arrives through the `on_game_over` callback
//! as a plain object:
//!
//! ```text
//! kingyo_init("pond", null, null, (result) => showResult(result));
//! kingyo_start();
//! canvas.onpointermove = (e) => kingyo_pointer_move(e.clientX, e.clientY);
//! // on unmount:
//! kingyo_dispose();
//! ```

pub mod canvas;
pub mod runner;

pub use runner::WebRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use kingyo_engine::{AssetManifest, GameConfig};

thread_local! {
    static RUNNER: RefCell<Option<WebRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&WebRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let borrow = cell.borrow();
        match borrow.as_ref() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("kingyo: not initialized, call kingyo_init() first");
                None
            }
        }
    })
}

fn find_canvas(canvas_id: &str) -> Result<HtmlCanvasElement, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element #{}", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not a canvas", canvas_id)))
}

/// Build a fresh round on the canvas with id `canvas_id`, replacing any
/// previous one. `config_json` and `manifest_json` override the defaults.
#[wasm_bindgen]
pub fn kingyo_init(
    canvas_id: &str,
    config_json: Option<String>,
    manifest_json: Option<String>,
    on_game_over: js_sys::Function,
) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let mut config = match config_json {
        Some(json) => GameConfig::from_json(&json)
            .map_err(|e| JsValue::from_str(&format!("config: {}", e)))?,
        None => GameConfig::default(),
    };
    config
        .seed
        .get_or_insert_with(|| (js_sys::Math::random() * u32::MAX as f64) as u64);

    let manifest = match manifest_json {
        Some(json) => AssetManifest::from_json(&json)
            .map_err(|e| JsValue::from_str(&format!("manifest: {}", e)))?,
        None => AssetManifest::default(),
    };

    let canvas = find_canvas(canvas_id).map_err(|e| {
        log::error!("kingyo: {:?}", e);
        e
    })?;
    let runner = WebRunner::new(canvas, config, &manifest, on_game_over)?;

    // Drop the old runner outside the borrow.
    let previous = RUNNER.with(|cell| cell.borrow_mut().replace(runner));
    drop(previous);

    log::info!("kingyo: initialized");
    Ok(())
}

#[wasm_bindgen]
pub fn kingyo_start() -> Result<(), JsValue> {
    with_runner(|r| r.start()).unwrap_or(Ok(()))
}

#[wasm_bindgen]
pub fn kingyo_stop() {
    with_runner(|r| r.stop());
}

/// Stop and release the current round.
#[wasm_bindgen]
pub fn kingyo_dispose() {
    let previous = RUNNER.with(|cell| cell.borrow_mut().take());
    drop(previous);
}

#[wasm_bindgen]
pub fn kingyo_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.pointer_move(x, y));
}

#[wasm_bindgen]
pub fn kingyo_resize(width: u32, height: u32) {
    with_runner(|r| r.resize(width, height));
}

#[wasm_bindgen]
pub fn kingyo_time_remaining() -> f32 {
    with_runner(|r| r.time_remaining()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn kingyo_is_running() -> bool {
    with_runner(|r| r.is_running()).unwrap_or(false)
}
