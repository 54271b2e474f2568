//! Driftfield entry point
//!
//! Handles platform-specific initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use driftfield::render::canvas::CanvasAdapter;
    use driftfield::sim::{Scene, Viewport, tick};
    use driftfield::SceneConfig;
    use glam::Vec2;

    /// App instance holding the scene and its canvas adapter
    struct App {
        scene: Scene,
        adapter: CanvasAdapter,
    }

    impl App {
        /// Run one animation tick: advance the scene, then draw it
        fn frame(&mut self) {
            tick(&mut self.scene, &mut self.adapter);
        }
    }

    fn event_pos(canvas: &HtmlCanvasElement, client_x: f32, client_y: f32) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(client_x - rect.left() as f32, client_y - rect.top() as f32)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Driftfield starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0) as f32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0) as f32;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let config = SceneConfig::load();
        let viewport = Viewport::new(width, height);
        let mut scene = Scene::new(seed, viewport, config);
        scene.on_resize(width, height);

        log::info!(
            "Scene initialized: seed {}, {} shapes",
            seed,
            scene.shapes.len()
        );

        let app = Rc::new(RefCell::new(App {
            scene,
            adapter: CanvasAdapter::new(ctx, viewport),
        }));

        setup_input_handlers(&canvas, app.clone());
        request_animation_frame(app);

        log::info!("Driftfield running");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Pointer move
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = event_pos(
                    &canvas_clone,
                    event.client_x() as f32,
                    event.client_y() as f32,
                );
                app.borrow_mut().scene.on_pointer_move(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer leaving the window stops its influence
        {
            let app = app.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().scene.on_pointer_leave();
            });
            let _ = window
                .add_event_listener_with_callback("mouseout", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click explosion
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = event_pos(
                    &canvas_clone,
                    event.client_x() as f32,
                    event.client_y() as f32,
                );
                app.borrow_mut().scene.on_click(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch: move drives the pointer, a tap is a click
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let pos = event_pos(
                        &canvas_clone,
                        touch.client_x() as f32,
                        touch.client_y() as f32,
                    );
                    app.borrow_mut().scene.on_pointer_move(pos);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let pos = event_pos(
                        &canvas_clone,
                        touch.client_x() as f32,
                        touch.client_y() as f32,
                    );
                    app.borrow_mut().scene.on_click(pos);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Resize: grow the canvas and move the wrap boundary
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let window = web_sys::window().unwrap();
                let w = window
                    .inner_width()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(800.0) as f32;
                let h = window
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(600.0) as f32;
                canvas_clone.set_width(w as u32);
                canvas_clone.set_height(h as u32);
                app.borrow_mut().scene.on_resize(w, h);
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            app.borrow_mut().frame();
            request_animation_frame(app.clone());
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use driftfield::render::NullAdapter;
    use driftfield::sim::{Scene, Viewport, advance, draw};
    use driftfield::SceneConfig;
    use glam::Vec2;

    env_logger::init();
    log::info!("Driftfield (headless) starting...");

    // No canvas natively; run the scene for a while as a sanity pass
    // and log what it did. The web version is served with `trunk serve`.
    let mut scene = Scene::new(42, Viewport::new(1280.0, 720.0), SceneConfig::default());
    let mut adapter = NullAdapter;

    scene.on_pointer_move(Vec2::new(640.0, 360.0));
    for t in 0..600u32 {
        if t == 120 {
            scene.on_click(Vec2::new(640.0, 360.0));
        }
        if t == 400 {
            scene.on_pointer_leave();
        }
        advance(&mut scene);
        draw(&scene, &mut adapter);

        if t % 120 == 0 {
            let avg_speed: f32 =
                scene.shapes.iter().map(|s| s.speed()).sum::<f32>() / scene.shapes.len() as f32;
            log::info!(
                "tick {}: avg speed {:.2}, {} particles, {} shockwaves",
                t,
                avg_speed,
                scene.particles.len(),
                scene.shockwaves.len()
            );
        }
    }

    log::info!("Done: {} ticks simulated", scene.tick_count);
}
