use glam::Vec2;
use crate::api::game::GameConfig;
use crate::api::types::{FishType, GameResult, GameResultKind};
use crate::assets::manifest::AssetManifest;
use crate::assets::registry::SpriteRegistry;
use crate::core::rng::Rng;
use crate::core::state::GameState;
use crate::input::event::InputEvent;
use crate::renderer::draw::DrawList;
use crate::renderer::traits::FrameData;
use crate::systems::render::build_draw_list;
use crate::systems::simulation::{step, StepOutcome};
use crate::systems::spawn::spawn_school;

/// Receives the round's result. Called exactly once per round.
pub type GameOverCallback = Box<dyn FnMut(&GameResult)>;

/// What a tick did.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameStatus {
    /// The engine is stopped; nothing happened.
    Idle,
    /// A frame was simulated and drawn; the round continues.
    Running,
    /// The round ended on this frame.
    Finished(GameResult),
}

/// Drives one round: owns the state, steps it each frame, builds the draw
/// list and reports the outcome.
///
/// Lifecycle: stopped -> `start` -> running -> (`stop` | catch | timeout) -> stopped.
/// The host owns the frame schedule and calls `tick` once per display refresh.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    sprites: SpriteRegistry,
    draw_list: DrawList,
    on_game_over: GameOverCallback,
    /// Set once the result has been reported.
    finished: bool,
}

impl GameEngine {
    /// Build a stopped round and spawn its fish.
    pub fn new(
        config: GameConfig,
        manifest: &AssetManifest,
        on_game_over: impl FnMut(&GameResult) + 'static,
    ) -> Self {
        let mut state = GameState::new(&config);
        let mut rng = Rng::new(config.rng_seed());
        spawn_school(&mut state, &config, manifest, &mut rng);

        Self {
            sprites: SpriteRegistry::from_manifest(manifest),
            config,
            state,
            draw_list: DrawList::new(),
            on_game_over: Box::new(on_game_over),
            finished: false,
        }
    }

    /// Begin the round at `now_ms`. No-op while running; ignored once the
    /// round has reported its result.
    pub fn start(&mut self, now_ms: f64) {
        if self.finished {
            log::warn!("start ignored: round already finished");
            return;
        }
        if self.state.running {
            return;
        }
        self.state.running = true;
        self.state.clock.start(now_ms);
        // A hold never carries across a pause.
        self.state.clear_focus();
        log::info!(
            "round started: {} fish, {}s",
            self.state.fish_count(),
            self.config.round_secs
        );
    }

    /// Stop without reporting a result. Idempotent.
    pub fn stop(&mut self) {
        if self.state.running {
            log::info!("round stopped with {:.1}s left", self.state.time_remaining);
        }
        self.state.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Apply host input immediately. It is seen by the next tick.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => self.update_poi_position(Vec2::new(x, y)),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    pub fn update_poi_position(&mut self, pos: Vec2) {
        self.state.poi.pos = pos;
    }

    /// New play-field bounds for bouncing. Fish already outside turn back
    /// on their next step.
    pub fn resize(&mut self, width: f32, height: f32) {
        log::debug!("pond resized to {}x{}", width, height);
        self.state.bounds = Vec2::new(width, height);
    }

    /// Run one frame at `now_ms`: simulate, draw, and on catch or timeout
    /// stop and report the result.
    pub fn tick(&mut self, now_ms: f64) -> FrameStatus {
        if !self.state.running {
            return FrameStatus::Idle;
        }

        let result = match step(&mut self.state, now_ms, self.config.catch_hold_secs) {
            StepOutcome::Continue(_) => None,
            StepOutcome::TimedOut => Some(self.finish(GameResultKind::Timeout, None)),
            StepOutcome::Caught(fish) => Some(self.finish(GameResultKind::Success, Some(fish.fish_type))),
        };

        build_draw_list(&self.state, &self.sprites, now_ms, &mut self.draw_list);

        match result {
            Some(result) => {
                (self.on_game_over)(&result);
                FrameStatus::Finished(result)
            }
            None => FrameStatus::Running,
        }
    }

    fn finish(&mut self, kind: GameResultKind, fish_caught: Option<FishType>) -> GameResult {
        self.state.running = false;
        self.finished = true;
        let result = GameResult {
            kind,
            fish_caught,
            failure_reason: None,
            poi_final_durability: self.state.poi.durability,
            play_duration: self.config.round_secs - self.state.time_remaining,
        };
        log::info!("round over: {:?} after {:.2}s", result.kind, result.play_duration);
        result
    }

    /// The last frame's draw data.
    pub fn frame(&self) -> FrameData<'_> {
        FrameData {
            commands: self.draw_list.commands(),
            width: self.state.bounds.x,
            height: self.state.bounds.y,
        }
    }

    pub fn time_remaining(&self) -> f32 {
        self.state.time_remaining
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn sprites(&self) -> &SpriteRegistry {
        &self.sprites
    }

    /// Load state for sprites is updated by the host as images arrive.
    pub fn sprites_mut(&mut self) -> &mut SpriteRegistry {
        &mut self.sprites
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::FishId;
    use crate::core::state::tests::goldfish;
    use crate::renderer::draw::DrawCommand;
    use std::cell::RefCell;
    use std::rc::Rc;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Engine with an empty pond and a shared log of reported results.
    fn engine() -> (GameEngine, Rc<RefCell<Vec<GameResult>>>) {
        let results = Rc::new(RefCell::new(Vec::new()));
        let sink = results.clone();
        let config = GameConfig {
            fish_count: 0,
            ..GameConfig::default()
        };
        let engine = GameEngine::new(config, &AssetManifest::default(), move |r: &GameResult| {
            sink.borrow_mut().push(r.clone())
        });
        (engine, results)
    }

    #[test]
    fn new_engine_spawns_configured_school() {
        let engine = GameEngine::new(GameConfig::default(), &AssetManifest::default(), |_: &GameResult| {});
        assert_eq!(engine.state().fish_count(), 15);
        assert!(!engine.is_running());
        assert_eq!(engine.sprites().len(), 5);
    }

    #[test]
    fn tick_before_start_is_idle() {
        let (mut engine, results) = engine();
        assert_eq!(engine.tick(0.0), FrameStatus::Idle);
        assert!(engine.frame().commands.is_empty());
        assert!(results.borrow().is_empty());
    }

    #[test]
    fn poi_held_on_a_fish_catches_it() {
        let (mut engine, results) = engine();
        engine.state_mut().spawn(goldfish(7).with_pos(Vec2::new(200.0, 200.0)).with_vel(Vec2::new(0.5, 0.0)));
        engine.update_poi_position(Vec2::new(200.0, 200.0));
        engine.start(0.0);

        let mut now = 0.0;
        let mut outcome = FrameStatus::Running;
        while now <= 600.0 {
            outcome = engine.tick(now);
            if outcome != FrameStatus::Running {
                break;
            }
            now += 100.0;
        }

        match outcome {
            FrameStatus::Finished(result) => {
                assert!(result.is_success());
                assert_eq!(result.fish_caught.as_ref().map(|f| f.id.as_str()), Some("fish-7"));
                assert_eq!(result.poi_final_durability, 100.0);
                assert!((result.play_duration - 0.6).abs() < 1e-3);
            }
            other => panic!("expected a catch, got {:?}", other),
        }
        assert!(!engine.is_running());
        assert!(engine.is_finished());
        assert!(engine.state().get(FishId(7)).is_none());
        assert_eq!(results.borrow().len(), 1);
    }

    #[test]
    fn hold_of_490ms_does_not_catch() {
        let (mut engine, results) = engine();
        engine.state_mut().spawn(goldfish(1).with_pos(Vec2::new(200.0, 200.0)));
        engine.update_poi_position(Vec2::new(200.0, 200.0));
        engine.start(0.0);

        assert_eq!(engine.tick(0.0), FrameStatus::Running);
        assert_eq!(engine.tick(490.0), FrameStatus::Running);
        assert!(results.borrow().is_empty());
        assert_eq!(engine.state().focus_target(), Some(FishId(1)));
    }

    #[test]
    fn far_poi_times_out_after_thirty_seconds() {
        let (mut engine, results) = engine();
        engine.state_mut().spawn(goldfish(1).with_pos(Vec2::new(10.0, 10.0)));
        engine.update_poi_position(Vec2::new(700.0, 500.0));
        engine.start(0.0);

        let mut now = 0.0;
        let mut frames = 0;
        let mut last_remaining = f32::MAX;
        loop {
            match engine.tick(now) {
                FrameStatus::Running => {}
                FrameStatus::Finished(result) => {
                    assert_eq!(result.kind, GameResultKind::Timeout);
                    assert!(!result.is_success());
                    assert!(result.fish_caught.is_none());
                    assert!((result.play_duration - 30.0).abs() < 1e-3);
                    break;
                }
                FrameStatus::Idle => panic!("engine stopped without a result"),
            }
            assert!(engine.time_remaining() <= last_remaining);
            last_remaining = engine.time_remaining();
            now += FRAME_MS;
            frames += 1;
            assert!(frames < 2_000, "round never ended");
        }
        assert_eq!(engine.time_remaining(), 0.0);
        assert_eq!(results.borrow().len(), 1);
    }

    #[test]
    fn result_is_reported_once() {
        let (mut engine, results) = engine();
        engine.start(0.0);
        assert!(matches!(engine.tick(31_000.0), FrameStatus::Finished(_)));
        assert_eq!(engine.tick(32_000.0), FrameStatus::Idle);

        engine.start(40_000.0);
        assert!(!engine.is_running());
        assert_eq!(engine.tick(41_000.0), FrameStatus::Idle);
        assert_eq!(results.borrow().len(), 1);
    }

    #[test]
    fn stop_is_idempotent_and_silent() {
        let (mut engine, results) = engine();
        engine.start(0.0);
        engine.tick(FRAME_MS);
        engine.stop();
        engine.stop();
        assert!(!engine.is_running());
        assert!(!engine.is_finished());
        assert_eq!(engine.tick(31_000.0), FrameStatus::Idle);
        assert!(results.borrow().is_empty());
    }

    #[test]
    fn restart_after_stop_resets_clock() {
        let (mut engine, _results) = engine();
        engine.start(0.0);
        engine.tick(5_000.0);
        engine.stop();
        engine.start(100_000.0);
        assert_eq!(engine.tick(100_000.0), FrameStatus::Running);
        assert_eq!(engine.time_remaining(), 30.0);
    }

    #[test]
    fn restart_after_stop_drops_the_old_hold() {
        let (mut engine, results) = engine();
        engine.state_mut().spawn(goldfish(1).with_pos(Vec2::new(200.0, 200.0)).with_vel(Vec2::ZERO));
        engine.update_poi_position(Vec2::new(200.0, 200.0));
        engine.start(0.0);
        assert_eq!(engine.tick(0.0), FrameStatus::Running);
        assert_eq!(engine.tick(100.0), FrameStatus::Running);
        engine.stop();

        engine.start(10_000.0);
        assert_eq!(engine.state().focus_target(), None);
        assert_eq!(engine.tick(10_000.0), FrameStatus::Running);
        assert_eq!(engine.state().focus_started_ms(), Some(10_000.0));
        assert_eq!(engine.tick(10_400.0), FrameStatus::Running);
        assert!(results.borrow().is_empty());

        match engine.tick(10_600.0) {
            FrameStatus::Finished(result) => {
                assert!(result.is_success());
                assert!((result.play_duration - 0.6).abs() < 1e-3);
            }
            other => panic!("expected a catch, got {:?}", other),
        }
    }

    #[test]
    fn start_while_running_keeps_clock() {
        let (mut engine, _results) = engine();
        engine.start(0.0);
        engine.start(10_000.0);
        engine.tick(10_000.0);
        assert_eq!(engine.time_remaining(), 20.0);
    }

    #[test]
    fn input_applies_immediately() {
        let (mut engine, _results) = engine();
        engine.handle_input(InputEvent::PointerMove { x: 12.0, y: 34.0 });
        assert_eq!(engine.state().poi.pos, Vec2::new(12.0, 34.0));
        engine.handle_input(InputEvent::Resize { width: 320.0, height: 240.0 });
        assert_eq!(engine.state().bounds, Vec2::new(320.0, 240.0));
    }

    #[test]
    fn resize_changes_bounce_limits() {
        let (mut engine, _results) = engine();
        engine.state_mut().spawn(goldfish(1).with_pos(Vec2::new(99.5, 50.0)).with_vel(Vec2::new(1.0, 0.0)));
        engine.update_poi_position(Vec2::new(-500.0, -500.0));
        engine.resize(100.0, 100.0);
        engine.start(0.0);
        engine.tick(0.0);
        assert_eq!(engine.state().get(FishId(1)).unwrap().vel.x, -1.0);
    }

    #[test]
    fn final_frame_is_drawn() {
        let (mut engine, _results) = engine();
        engine.state_mut().spawn(goldfish(1).with_pos(Vec2::new(10.0, 10.0)));
        engine.start(0.0);
        engine.tick(30_000.0);
        let frame = engine.frame();
        assert_eq!(frame.width, 800.0);
        assert!(matches!(frame.commands[0], DrawCommand::Clear { .. }));
        assert_eq!(frame.commands.len(), 3);
    }
}
