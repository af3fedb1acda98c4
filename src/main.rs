//! Invaders entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use invaders::renderer::RenderState;
    use invaders::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
    use invaders::tuning::Tuning;

    /// Game instance holding all state
    ///
    /// A single instance lives behind `Rc<RefCell<..>>` for the whole page
    /// lifetime; restart swaps the `GameState` inside it, so the animation
    /// loop can never keep driving a discarded session.
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        tuning: Tuning,
        last_time: f64,
        input: TickInput,
    }

    impl Game {
        fn new(seed: u64, tuning: Tuning) -> Self {
            Self {
                state: GameState::with_tuning(seed, tuning),
                render_state: None,
                tuning,
                last_time: 0.0,
                input: TickInput::default(),
            }
        }

        /// Advance the simulation by one frame of elapsed milliseconds
        fn update(&mut self, dt_ms: f32) {
            let input = self.input;
            tick(&mut self.state, &input, dt_ms);
            // Fire is a one-shot; held movement keys persist
            self.input.fire = false;
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.state) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Push pending simulation events into the DOM HUD
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            for event in self.state.drain_events() {
                match event {
                    GameEvent::ScoreChanged(score) => {
                        if let Some(el) = document.get_element_by_id("score") {
                            el.set_text_content(Some(&score.to_string()));
                        }
                    }
                    GameEvent::LivesChanged(lives) => {
                        if let Some(el) = document.get_element_by_id("lives") {
                            el.set_text_content(Some(&lives.to_string()));
                        }
                    }
                    GameEvent::WaveCleared(wave) => {
                        if let Some(el) = document.get_element_by_id("wave") {
                            el.set_text_content(Some(&(wave + 1).to_string()));
                        }
                    }
                    GameEvent::GameOver { final_score } => {
                        if let Some(el) = document.get_element_by_id("final-score") {
                            el.set_text_content(Some(&final_score.to_string()));
                        }
                        if let Some(el) = document.get_element_by_id("game-over") {
                            let _ = el.set_attribute("class", "");
                        }
                    }
                }
            }

            // Start prompt tracks the lifecycle phase
            if let Some(el) = document.get_element_by_id("start-prompt") {
                if self.state.phase == GamePhase::NotStarted {
                    let _ = el.set_attribute("class", "");
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }

        /// Discard the session and start a fresh one. Nothing carries over.
        fn restart(&mut self, seed: u64) {
            self.state = GameState::with_tuning(seed, self.tuning);
            self.input = TickInput::default();

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("game-over") {
                let _ = el.set_attribute("class", "hidden");
            }
            for (id, text) in [("score", "0"), ("lives", "3"), ("wave", "1")] {
                if let Some(el) = document.get_element_by_id(id) {
                    el.set_text_content(Some(text));
                }
            }
        }
    }

    /// Read an optional balance override from the page:
    /// `<script type="application/json" id="tuning">{...}</script>`
    fn read_tuning(document: &web_sys::Document) -> Tuning {
        let Some(el) = document.get_element_by_id("tuning") else {
            return Tuning::default();
        };
        let Some(json) = el.text_content() else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning override from page");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring malformed tuning override: {e}");
                Tuning::default()
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Invaders starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let tuning = read_tuning(&document);
        let game = Rc::new(RefCell::new(Game::new(seed, tuning)));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());
        setup_restart_button(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Invaders running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down: held movement + one-shot fire
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "ArrowLeft" | "KeyA" => g.input.left = true,
                    "ArrowRight" | "KeyD" => g.input.right = true,
                    "Space" => {
                        event.prevent_default();
                        g.input.fire = true;
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up: release held movement
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "ArrowLeft" | "KeyA" => g.input.left = false,
                    "ArrowRight" | "KeyD" => g.input.right = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                game.borrow_mut().restart(seed);
                log::info!("Game restarted with seed: {}", seed);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt_ms = if g.last_time > 0.0 {
                (time - g.last_time) as f32
            } else {
                0.0
            };
            g.last_time = time;

            g.update(dt_ms);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use invaders::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Invaders (native) starting...");
    log::info!("Native mode is a headless smoke run - build for wasm32 for the playable game");

    // Drive a short scripted session at a simulated 60 Hz
    let mut state = GameState::new(424242);
    tick(
        &mut state,
        &TickInput {
            fire: true,
            ..Default::default()
        },
        16.0,
    );
    assert_eq!(state.phase, GamePhase::Running);

    for frame in 0..3600u32 {
        let input = TickInput {
            left: frame % 120 < 60,
            right: frame % 120 >= 60,
            fire: frame % 30 == 0,
        };
        tick(&mut state, &input, 16.0);
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    println!(
        "Smoke run done: score {}, lives {}, wave {}, phase {:?}",
        state.score,
        state.lives,
        state.wave_index + 1,
        state.phase
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
