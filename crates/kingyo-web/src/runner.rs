use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use kingyo_engine::{
    encode_result, AssetManifest, FrameStatus, GameConfig, GameEngine, GameResult, InputEvent,
    Renderer,
};

use crate::canvas::CanvasRenderer;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Everything a frame touches.
struct Session {
    engine: GameEngine,
    renderer: CanvasRenderer,
    /// Handle of the scheduled animation frame, if any.
    pending: Option<i32>,
}

impl Session {
    /// Step, draw, and report whether another frame is wanted.
    fn run_frame(&mut self, timestamp: f64) -> bool {
        let Session { engine, renderer, .. } = self;
        renderer.sync_loaded(engine.sprites_mut());
        let status = engine.tick(timestamp);
        if status != FrameStatus::Idle {
            renderer.draw(&engine.frame());
        }
        status == FrameStatus::Running
    }
}

/// Binds a `GameEngine` to a canvas and to `requestAnimationFrame`.
///
/// The frame callback holds the session and itself through `Rc`s; `Drop`
/// cancels the pending frame and releases the callback to break the cycle.
pub struct WebRunner {
    session: Rc<RefCell<Session>>,
    frame: Rc<RefCell<Option<FrameCallback>>>,
}

impl WebRunner {
    pub fn new(
        canvas: HtmlCanvasElement,
        config: GameConfig,
        manifest: &AssetManifest,
        on_game_over: Function,
    ) -> Result<Self, JsValue> {
        let config = config.with_world_size(canvas.width() as f32, canvas.height() as f32);
        let engine = GameEngine::new(config, manifest, move |result: &GameResult| {
            post_result(&on_game_over, result)
        });
        let renderer = CanvasRenderer::new(canvas, engine.sprites())?;
        log::info!("renderer: {}", renderer.backend());

        let runner = Self {
            session: Rc::new(RefCell::new(Session {
                engine,
                renderer,
                pending: None,
            })),
            frame: Rc::new(RefCell::new(None)),
        };
        runner.install_frame_callback();
        Ok(runner)
    }

    fn install_frame_callback(&self) {
        let session = self.session.clone();
        let frame = self.frame.clone();
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let mut session = session.borrow_mut();
            session.pending = None;
            if !session.run_frame(timestamp) {
                return;
            }
            if let Some(cb) = frame.borrow().as_ref() {
                match request_frame(cb) {
                    Ok(handle) => session.pending = Some(handle),
                    Err(err) => log::error!("requestAnimationFrame failed: {:?}", err),
                }
            }
        }) as Box<dyn FnMut(f64)>);
        *self.frame.borrow_mut() = Some(callback);
    }

    /// Start the round and schedule its first frame.
    pub fn start(&self) -> Result<(), JsValue> {
        let mut session = self.session.borrow_mut();
        session.engine.start(now_ms()?);
        if !session.engine.is_running() || session.pending.is_some() {
            return Ok(());
        }
        let frame = self.frame.borrow();
        let cb = frame
            .as_ref()
            .ok_or_else(|| JsValue::from_str("runner: frame callback missing"))?;
        session.pending = Some(request_frame(cb)?);
        Ok(())
    }

    /// Stop the round and cancel the scheduled frame. Idempotent.
    pub fn stop(&self) {
        let mut session = self.session.borrow_mut();
        session.engine.stop();
        if let Some(handle) = session.pending.take() {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.cancel_animation_frame(handle) {
                    log::error!("cancelAnimationFrame failed: {:?}", err);
                }
            }
        }
    }

    pub fn pointer_move(&self, x: f32, y: f32) {
        self.session
            .borrow_mut()
            .engine
            .handle_input(InputEvent::PointerMove { x, y });
    }

    pub fn resize(&self, width: u32, height: u32) {
        let mut session = self.session.borrow_mut();
        session.renderer.resize(width, height);
        session.engine.handle_input(InputEvent::Resize {
            width: width as f32,
            height: height as f32,
        });
    }

    pub fn time_remaining(&self) -> f32 {
        self.session.borrow().engine.time_remaining()
    }

    pub fn is_running(&self) -> bool {
        self.session.borrow().engine.is_running()
    }
}

impl Drop for WebRunner {
    fn drop(&mut self) {
        self.stop();
        self.frame.borrow_mut().take();
    }
}

fn request_frame(cb: &FrameCallback) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("runner: no window"))?
        .request_animation_frame(cb.as_ref().unchecked_ref())
}

fn now_ms() -> Result<f64, JsValue> {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .ok_or_else(|| JsValue::from_str("runner: no performance clock"))
}

/// Hand the result to the shell on a fresh task, so the shell never runs
/// inside a frame callback and may stop or replace the runner freely.
fn post_result(on_game_over: &Function, result: &GameResult) {
    let payload = match encode_result(result) {
        Ok(json) => match js_sys::JSON::parse(&json) {
            Ok(value) => value,
            Err(err) => {
                log::error!("result: JSON.parse failed: {:?}", err);
                return;
            }
        },
        Err(err) => {
            log::error!("result: encode failed: {}", err);
            return;
        }
    };

    let Some(window) = web_sys::window() else {
        log::error!("result: no window to post to");
        return;
    };
    if let Err(err) =
        window.set_timeout_with_callback_and_timeout_and_arguments_1(on_game_over, 0, &payload)
    {
        log::error!("result: setTimeout failed: {:?}", err);
    }
}
