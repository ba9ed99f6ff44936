//! Flappy entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{AddEventListenerOptions, HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use flappy::Tuning;
    use flappy::persistence::LocalStorageStore;
    use flappy::platform::{InputEvent, Key, ScoreDisplay, Session, best_text, score_text};
    use flappy::renderer::CanvasSurface;

    /// `#score` / `#best` text elements
    struct DomScoreDisplay {
        document: web_sys::Document,
    }

    impl ScoreDisplay for DomScoreDisplay {
        fn show(&mut self, score: u32, best: u32) {
            if let Some(el) = self.document.get_element_by_id("score") {
                el.set_text_content(Some(&score_text(score)));
            }
            if let Some(el) = self.document.get_element_by_id("best") {
                el.set_text_content(Some(&best_text(best)));
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        session: Session<LocalStorageStore>,
        surface: CanvasSurface,
        display: DomScoreDisplay,
    }

    impl Game {
        fn frame(&mut self) {
            self.session.frame();
            self.session.render(&mut self.surface);
            self.session.show_score(&mut self.display);
        }

        fn input(&mut self, event: InputEvent) {
            self.session.input(event);
            self.session.show_score(&mut self.display);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Flappy starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("game")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("Canvas #game not found");
            return;
        };

        let tuning = Tuning::default();
        let surface = match CanvasSurface::new(&canvas, tuning.game_width, tuning.game_height) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to set up canvas: {:?}", e);
                return;
            }
        };

        let spawn_interval_ms = (tuning.spawn_interval_secs * 1000.0).round() as i32;
        let seed = js_sys::Date::now() as u64;
        let session = Session::new(tuning, seed, LocalStorageStore::default());
        let game = Rc::new(RefCell::new(Game {
            session,
            surface,
            display: DomScoreDisplay {
                document: document.clone(),
            },
        }));
        {
            let mut g = game.borrow_mut();
            let g = &mut *g;
            g.session.show_score(&mut g.display);
        }

        setup_keyboard(&document, game.clone());
        setup_pointer(&canvas, game.clone());
        setup_restart_button(&document, game.clone());
        setup_spawn_timer(&window, spawn_interval_ms, game.clone());
        start_frame_loop(game);
    }

    fn request_animation_frame(f: &Closure<dyn FnMut()>) {
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(f.as_ref().unchecked_ref());
        }
    }

    fn start_frame_loop(game: Rc<RefCell<Game>>) {
        let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();

        *g.borrow_mut() = Some(Closure::new(move || {
            game.borrow_mut().frame();
            if let Some(cb) = f.borrow().as_ref() {
                request_animation_frame(cb);
            }
        }));

        if let Some(cb) = g.borrow().as_ref() {
            request_animation_frame(cb);
        }
    }

    fn setup_spawn_timer(window: &web_sys::Window, interval_ms: i32, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().session.spawn();
        });
        if window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                interval_ms,
            )
            .is_err()
        {
            log::error!("Failed to start spawn timer");
        }
        closure.forget();
    }

    fn setup_keyboard(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = Key::from_code(&event.code());
            if key.prevents_default() {
                event.prevent_default();
            }
            game.borrow_mut().input(InputEvent::KeyDown(key));
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
            "keydown",
            closure.as_ref().unchecked_ref(),
            &options,
        );
        closure.forget();
    }

    fn setup_pointer(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Pointer events cover mouse and touch
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
            event.prevent_default();
            game.borrow_mut().input(InputEvent::PointerDown);
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        let _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
            "pointerdown",
            closure.as_ref().unchecked_ref(),
            &options,
        );
        closure.forget();
    }

    fn setup_restart_button(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("restart") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().input(InputEvent::RestartButton);
                log::info!("Game restarted");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
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
    log::info!("Flappy (native) starting...");
    log::info!("Native mode runs a headless autopilot round - build for wasm32 to play");

    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::Path;
    use std::time::{SystemTime, UNIX_EPOCH};

    use flappy::Tuning;
    use flappy::consts::FRAME_DT;
    use flappy::persistence::FileStore;
    use flappy::platform::{InputEvent, Key, ScoreDisplay, Session};
    use flappy::sim::autopilot;

    /// Where the headless run keeps its best score
    const BEST_SCORE_PATH: &str = "flappy_best.json";
    /// Ten simulated minutes at 60 Hz
    const MAX_FRAMES: u32 = 60 * 60 * 10;

    struct LogDisplay;

    impl ScoreDisplay for LogDisplay {
        fn show(&mut self, score: u32, best: u32) {
            log::info!("Score: {}  Best: {}", score, best);
        }
    }

    /// Play one autopilot round: `flappy [tuning.json]`
    pub fn run() {
        let tuning = match std::env::args().nth(1) {
            Some(path) => Tuning::load(Path::new(&path)),
            None => Tuning::default(),
        };
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let mut session = Session::new(tuning, seed, FileStore::new(BEST_SCORE_PATH));

        let mut frames = 0;
        while frames < MAX_FRAMES && !session.state().is_over() {
            if autopilot::should_flap(session.state()) {
                session.input(InputEvent::KeyDown(Key::Space));
            }
            session.advance(FRAME_DT);
            frames += 1;
        }

        log::info!(
            "Round finished after {} frames ({:.1} s simulated)",
            frames,
            frames as f32 * FRAME_DT
        );
        session.show_score(&mut LogDisplay);
    }
}
