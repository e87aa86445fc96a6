//! Coin Hopper entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement, KeyboardEvent,
        MouseEvent,
    };

    use coin_hopper::platform::{FrameClock, InputState, Key};
    use coin_hopper::renderer::{CanvasSurface, ImageId, draw_frame};
    use coin_hopper::sim::{GameState, tick};
    use coin_hopper::{Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        input: InputState,
        clock: FrameClock,
        settings: Settings,
    }

    impl Game {
        /// Run the ticks this frame owes, then draw
        fn frame(&mut self, time: f64) {
            let substeps = self.clock.advance(time);
            for _ in 0..substeps {
                let input = self.input.sample();
                tick(&mut self.state, &input, time);
                // Clear one-shot inputs after processing
                self.input.consume_one_shots();
            }

            draw_frame(
                &mut self.surface,
                &self.state,
                &self.settings,
                time,
                self.clock.fps(),
            );
        }
    }

    /// Optional `<script id="tuning" type="application/json">` override
    fn load_tuning(document: &Document) -> Tuning {
        let Some(json) = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from page");
                tuning
            }
            Err(e) => {
                log::warn!("{}; using default tuning", e);
                Tuning::default()
            }
        }
    }

    /// Start loading every image. Draws skip images until they are ready.
    fn load_images(surface: &mut CanvasSurface) {
        for id in ImageId::ALL {
            let Ok(img) = HtmlImageElement::new() else {
                log::warn!("Could not create image element for {:?}", id);
                continue;
            };
            img.set_src(id.src());

            let decode = img.decode();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = JsFuture::from(decode).await {
                    log::warn!("Image {} failed to load: {:?}", id.src(), e);
                }
            });

            surface.insert_image(id, img);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Coin Hopper starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("getContext failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let tuning = load_tuning(&document);
        canvas.set_width(tuning.canvas_width as u32);
        canvas.set_height(tuning.canvas_height as u32);

        let mut surface = CanvasSurface::new(ctx);
        load_images(&mut surface);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, tuning),
            surface,
            input: InputState::new(),
            clock: FrameClock::new(),
            settings: Settings::load(),
        }));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);
        log::info!("Coin Hopper running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Key down: movement keys, plus settings toggles
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if let Some(k) = Key::from_dom_key(&key) {
                    if k == Key::Jump {
                        // Keep space from scrolling the page
                        event.prevent_default();
                    }
                    g.input.key_down(k);
                    return;
                }
                match key.as_str() {
                    "f" | "F" => {
                        g.settings.toggle_fps();
                        g.settings.save();
                    }
                    "m" | "M" => {
                        g.settings.toggle_reduced_motion();
                        g.settings.save();
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(k) = Key::from_dom_key(&event.key()) {
                    game.borrow_mut().input.key_up(k);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyup events for held keys never arrive
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().input.release_all();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click: canvas-relative, scaled from CSS pixels to logical pixels.
        // The simulation decides whether it hit the start button.
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                if rect.width() <= 0.0 || rect.height() <= 0.0 {
                    return;
                }
                let scale_x = canvas_clone.width() as f64 / rect.width();
                let scale_y = canvas_clone.height() as f64 / rect.height();
                let x = (event.client_x() as f64 - rect.left()) * scale_x;
                let y = (event.client_y() as f64 - rect.top()) * scale_y;
                game.borrow_mut().input.click(Vec2::new(x as f32, y as f32));
            });
            let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Coin Hopper (native) starting...");
    log::info!("Native mode runs a headless session - run with `trunk serve` for the web version");

    let summary = headless::run(2024, 60 * 60);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not encode session summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted session for native builds: press start, run right, hop regularly
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use coin_hopper::Tuning;
    use coin_hopper::consts::SIM_DT;
    use coin_hopper::platform::{InputState, Key};
    use coin_hopper::sim::{GameEvent, GameState, tick};
    use serde_json::{Value, json};

    pub fn run(seed: u64, ticks: u64) -> Value {
        let mut state = GameState::new(seed, Tuning::default());
        let mut input = InputState::new();
        input.click(state.start_button().center());

        let mut falls = 0u32;
        let mut jumps = 0u32;
        let mut completed_at = None;

        for t in 0..ticks {
            // Sweep back and forth across the level every 20 seconds
            let heading_right = (t / 1200) % 2 == 0;
            if heading_right {
                input.key_up(Key::Left);
                input.key_down(Key::Right);
            } else {
                input.key_up(Key::Right);
                input.key_down(Key::Left);
            }
            if t % 45 == 0 {
                input.key_down(Key::Jump);
            }

            let now_ms = t as f64 * SIM_DT as f64 * 1000.0;
            tick(&mut state, &input.sample(), now_ms);
            input.consume_one_shots();

            for event in &state.events {
                match event {
                    GameEvent::FellOff => falls += 1,
                    GameEvent::Jumped => jumps += 1,
                    GameEvent::LevelCompleted => completed_at = Some(t),
                    _ => {}
                }
            }
        }

        log::info!(
            "Headless session done: {}/{} coins",
            state.coins_collected,
            state.coins_total
        );

        json!({
            "seed": seed,
            "ticks": ticks,
            "screen": state.screen,
            "score": state.score,
            "coins_remaining": state.coins.len(),
            "jumps": jumps,
            "falls": falls,
            "completed_at_tick": completed_at,
            "character": state.character,
            "camera_x": state.camera.x,
        })
    }
}
