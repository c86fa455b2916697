//! Cell Chomp entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use cell_chomp::best_score::LocalStorageStore;
    use cell_chomp::renderer::canvas::CanvasPresenter;
    use cell_chomp::sim::Arena;
    use cell_chomp::{Game, Tuning};

    /// Game plus the canvas it draws on
    struct App {
        game: Game,
        presenter: CanvasPresenter,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Cell Chomp starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };

        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(cell_chomp::consts::ARENA_WIDTH as f64);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(cell_chomp::consts::ARENA_HEIGHT as f64);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let Some(presenter) = CanvasPresenter::new(canvas.clone(), document.clone()) else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let now = js_sys::Date::now();
        let seed = now as u64;
        let game = Game::new(
            seed,
            Tuning::load(),
            Arena::new(width as f32, height as f32),
            Box::new(LocalStorageStore),
            now,
        );
        let app = Rc::new(RefCell::new(App { game, presenter }));

        setup_pointer(&canvas, app.clone());
        setup_resize(&window, &canvas, app.clone());
        setup_acknowledge(&document, app.clone());
        request_animation_frame(app);

        log::info!("Cell Chomp running!");
    }

    fn setup_pointer(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let bounds = canvas_clone.get_bounding_client_rect();
            let x = event.client_x() as f64 - bounds.left();
            let y = event.client_y() as f64 - bounds.top();
            app.borrow_mut().game.set_pointer(x as f32, y as f32);
        });
        let _ =
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Keep the canvas and arena matched to the window
    fn setup_resize(window: &web_sys::Window, canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window_clone = window.clone();
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let (Some(width), Some(height)) = (
                window_clone.inner_width().ok().and_then(|v| v.as_f64()),
                window_clone.inner_height().ok().and_then(|v| v.as_f64()),
            ) else {
                return;
            };
            canvas_clone.set_width(width as u32);
            canvas_clone.set_height(height as u32);
            app.borrow_mut().game.resize(width as f32, height as f32);
            log::debug!("Resized to {}x{}", width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_acknowledge(document: &web_sys::Document, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut app = app.borrow_mut();
            if app.game.acknowledge(js_sys::Date::now()) {
                log::info!("Game over acknowledged");
            }
        });
        let _ =
            document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
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
            let mut guard = app.borrow_mut();
            let App { game, presenter } = &mut *guard;
            game.frame(js_sys::Date::now(), presenter);
        }

        // Reschedule unconditionally, frozen or not
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Cell Chomp (native) starting...");
    log::info!("Native mode runs a headless session - run with `trunk serve` for the web version");

    headless::run();
}

/// Scripted session with a pointer orbiting the arena center
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use cell_chomp::best_score::FileStore;
    use cell_chomp::renderer::{Frame, Hud, Presenter};
    use cell_chomp::sim::Arena;
    use cell_chomp::{Game, Tuning};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const SESSION_MS: f64 = 120_000.0;
    const BEST_SCORE_FILE: &str = "cell-chomp-best.json";

    /// Logs instead of drawing
    #[derive(Default)]
    struct LogPresenter {
        last_hud: Hud,
        game_overs: u32,
    }

    impl Presenter for LogPresenter {
        fn render(&mut self, frame: &Frame<'_>) {
            log::trace!(
                "player at ({:.1}, {:.1}) size {:.1}, {} enemies, {} food",
                frame.player.pos.x,
                frame.player.pos.y,
                frame.player.size,
                frame.enemies.len(),
                frame.food.len()
            );
        }

        fn show_hud(&mut self, hud: &Hud) {
            if hud.clock.seconds != self.last_hud.clock.seconds {
                log::debug!("{} {} {}", hud.score_text(), hud.best_text(), hud.time_text());
            }
            self.last_hud = *hud;
        }

        fn game_over(&mut self, message: &str) {
            self.game_overs += 1;
            log::info!("{}", message);
        }
    }

    pub fn run() {
        let tuning = Tuning::load();
        let arena = Arena::default();
        let center = glam::Vec2::new(arena.width / 2.0, arena.height / 2.0);
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let mut game = Game::new(
            seed,
            tuning,
            arena,
            Box::new(FileStore::new(BEST_SCORE_FILE)),
            0.0,
        );
        let mut presenter = LogPresenter::default();

        let mut now = 0.0;
        while now < SESSION_MS {
            let angle = (now / 4000.0) as f32;
            let radius = arena.height / 3.0;
            game.set_pointer(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );

            game.frame(now, &mut presenter);
            if game.is_game_over() {
                // Acknowledge straight away and keep playing
                game.acknowledge(now);
            }
            now += FRAME_MS;
        }

        println!(
            "Simulated {:.0}s: {} game over(s), last score {}, best {}",
            SESSION_MS / 1000.0,
            presenter.game_overs,
            presenter.last_hud.score,
            game.best_score()
        );
    }
}
