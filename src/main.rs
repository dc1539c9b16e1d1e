//! Rod Bounce entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};

    use rod_bounce::highscores::HighScoreBook;
    use rod_bounce::platform::canvas::{AlertNotifier, CanvasDisplay, PromptName};
    use rod_bounce::platform::storage::{KeyValueStore, LocalStore, or_memory};
    use rod_bounce::sim::InputEvent;
    use rod_bounce::{Game, RoundSimulator, Settings};

    type WebGame =
        Game<CanvasDisplay, HighScoreBook<Box<dyn KeyValueStore>, PromptName>, AlertNotifier>;

    const CANVAS_ID: &str = "gameCanvas";
    const START_BUTTON_ID: &str = "startGame";

    /// Browser-side state around the game
    struct App {
        game: WebGame,
        start_button: Option<HtmlElement>,
        /// Whether the start button is currently shown
        button_shown: bool,
    }

    impl App {
        /// Show the start button only while the ball is waiting for a serve
        fn sync_start_button(&mut self) {
            let show = !self.game.sim.is_playing();
            if show == self.button_shown {
                return;
            }
            if let Some(btn) = &self.start_button {
                let display = if show { "inline-block" } else { "none" };
                if let Err(e) = btn.style().set_property("display", display) {
                    log::warn!("Could not toggle start button: {:?}", e);
                }
            }
            self.button_shown = show;
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&JsValue::from_str(
                "Logger already initialized, continuing without console_log",
            ));
        }

        log::info!("Rod Bounce starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window available");
            return;
        };

        let Some(display) = CanvasDisplay::from_element_id(CANVAS_ID) else {
            log::error!("Canvas #{} not found", CANVAS_ID);
            return;
        };

        // One backend for settings and scores; private browsing may refuse
        // LocalStorage, in which case the session runs without persistence
        let mut storage = or_memory(LocalStore::open());
        let settings = Settings::sync(&mut storage);

        let store = HighScoreBook::new(storage, PromptName::new(window.clone()));
        let sim = RoundSimulator::with_settings(
            display,
            store,
            AlertNotifier::new(window.clone()),
            &settings,
        );

        let start_button = window
            .document()
            .and_then(|d| d.get_element_by_id(START_BUTTON_ID))
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());

        let app = Rc::new(RefCell::new(App {
            game: Game::new(sim),
            start_button,
            button_shown: true,
        }));

        setup_input_handlers(&window, app.clone());
        request_animation_frame(app);

        log::info!("Rod Bounce running!");
    }

    fn setup_input_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                match event.key().as_str() {
                    "i" | "I" => a.game.toggle_idle_mode(),
                    key => {
                        a.game.input.push_key(key);
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Start button
        let button = app.borrow().start_button.clone();
        if let Some(btn) = button {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().game.input.push(InputEvent::Serve);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            a.game.frame();
            a.sync_start_button();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Frames to play when no count is given on the command line
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FRAMES: u64 = 3600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rod_bounce::display::{FrameRecorder, LogNotifier};
    use rod_bounce::highscores::{FixedName, HighScoreBook};
    use rod_bounce::platform::storage::MemoryStore;
    use rod_bounce::{Game, RoundSimulator, Settings};

    env_logger::init();
    log::info!("Rod Bounce (native) starting...");
    log::info!("Native mode runs a headless autopilot session - build for wasm32 to play");

    let frames = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let settings = Settings::default();
    let sim = RoundSimulator::with_settings(
        FrameRecorder::new(settings.surface_width, settings.surface_height),
        HighScoreBook::new(MemoryStore::default(), FixedName(Some("Autopilot".into()))),
        LogNotifier::default(),
        &settings,
    );
    let mut game = Game::new(sim);

    // Autopilot rallies for the first half, then lets the ball go
    game.toggle_idle_mode();
    for frame in 0..frames {
        if frame == frames / 2 {
            game.toggle_idle_mode();
        }
        game.frame();
    }

    log::info!(
        "Played {} frames, {} rounds finished, score on court {}",
        game.frames(),
        game.rounds(),
        game.sim.court().score
    );
    match game.sim.high_score() {
        Some(record) => log::info!("Best score: {} by {}", record.score, record.name),
        None => log::info!("No round finished"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
