//! Dapper Dasher entry point
//!
//! On the web this sets up WebGPU, fetches the sprite sheets and runs the
//! frame loop. Natively there is no window; it plays a seeded headless run
//! and prints a JSON summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{HtmlCanvasElement, Response};

    use dapper_dasher::assets::{AssetError, DecodedTexture, TextureId, decode_texture};
    use dapper_dasher::consts::*;
    use dapper_dasher::renderer::{DrawCommand, DrawList, SpriteRenderState};
    use dapper_dasher::game::key_input;
    use dapper_dasher::{FrameInput, Game};

    /// Browser-side loop state
    struct WebGame {
        game: Game,
        render_state: SpriteRenderState,
        frame: DrawList,
        input: FrameInput,
        last_time: f64,
        /// Text commands mirrored into the overlay last frame
        shown_text: Vec<DrawCommand>,
    }

    impl WebGame {
        fn update(&mut self, dt: f32) {
            self.frame.reset();
            self.game.frame(dt, &self.input, &mut self.frame);

            // One-shot inputs
            self.input = FrameInput::default();
        }

        fn render(&mut self) {
            match self.render_state.render(&self.frame) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Mirror the frame's text commands into the DOM overlay
        fn update_hud(&mut self) {
            let texts: Vec<DrawCommand> = self
                .frame
                .commands
                .iter()
                .filter(|c| matches!(c, DrawCommand::Text { .. }))
                .cloned()
                .collect();
            if texts == self.shown_text {
                return;
            }

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Some(hud) = document.get_element_by_id("hud-text") else {
                return;
            };
            hud.set_inner_html("");

            // Text is laid out in window pixels; scale to the overlay
            let scale = hud.client_height() as f32 / WINDOW_HEIGHT;
            for command in &texts {
                let DrawCommand::Text {
                    text,
                    pos,
                    size,
                    color,
                } = command
                else {
                    continue;
                };
                let Ok(el) = document.create_element("div") else {
                    continue;
                };
                let [r, g, b, a] = *color;
                let style = format!(
                    "position:absolute;left:{:.1}%;top:{:.1}%;font-size:{:.1}px;\
                     color:rgba({},{},{},{});white-space:nowrap",
                    pos.x / WINDOW_WIDTH * 100.0,
                    pos.y / WINDOW_HEIGHT * 100.0,
                    size * scale,
                    (r * 255.0) as u8,
                    (g * 255.0) as u8,
                    (b * 255.0) as u8,
                    a
                );
                let _ = el.set_attribute("style", &style);
                el.set_text_content(Some(text));
                let _ = hud.append_child(&el);
            }
            self.shown_text = texts;
        }
    }

    /// Fetch and decode one sprite sheet
    async fn fetch_texture(
        window: &web_sys::Window,
        id: TextureId,
    ) -> Result<DecodedTexture, AssetError> {
        let fetch_err = |reason: String| AssetError::Fetch { id, reason };

        let resp = JsFuture::from(window.fetch_with_str(id.path()))
            .await
            .map_err(|e| fetch_err(format!("{:?}", e)))?;
        let resp: Response = resp
            .dyn_into()
            .map_err(|_| fetch_err("not a Response".to_string()))?;
        if !resp.ok() {
            return Err(fetch_err(format!("HTTP {}", resp.status())));
        }

        let buffer = resp
            .array_buffer()
            .map_err(|e| fetch_err(format!("{:?}", e)))?;
        let buffer = JsFuture::from(buffer)
            .await
            .map_err(|e| fetch_err(format!("{:?}", e)))?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

        decode_texture(id, &bytes)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("{} starting...", WINDOW_TITLE);

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        document.set_title(WINDOW_TITLE);

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

        let mut render_state = SpriteRenderState::new(surface, &adapter, width, height).await;

        // Every sheet is required; a missing one aborts startup
        for id in TextureId::ALL {
            match fetch_texture(&window, id).await {
                Ok(decoded) => render_state.load_texture(&decoded),
                Err(e) => {
                    log::error!("{}", e);
                    if let Some(loading) = document.get_element_by_id("loading") {
                        loading.set_text_content(Some(&e.to_string()));
                    }
                    return;
                }
            }
        }

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(seed, render_state.sizes);
        log::info!("Game initialized with seed: {}", seed);

        let web_game = Rc::new(RefCell::new(WebGame {
            game,
            render_state,
            frame: DrawList::new(),
            input: FrameInput::default(),
            last_time: 0.0,
            shown_text: Vec::new(),
        }));

        setup_input_handlers(web_game.clone());

        // Start game loop
        request_animation_frame(web_game);

        log::info!("{} running!", WINDOW_TITLE);
    }

    fn setup_input_handlers(web_game: Rc<RefCell<WebGame>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let mut g = web_game.borrow_mut();
            if key_input(&event.key(), event.repeat(), &mut g.input) {
                event.prevent_default();
            }
        });
        let _ = window
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(web_game: Rc<RefCell<WebGame>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(web_game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(web_game: Rc<RefCell<WebGame>>, time: f64) {
        {
            let mut g = web_game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                1.0 / TARGET_FPS as f32
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
        }

        request_animation_frame(web_game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dapper_dasher::autopilot::run_headless;
    use dapper_dasher::consts::TARGET_FPS;

    /// Two minutes of play at the target frame rate
    const MAX_FRAMES: u64 = 120 * TARGET_FPS as u64;
    const DEFAULT_SEED: u64 = 42;

    env_logger::init();
    log::info!("Dapper Dasher (native) starting...");
    log::info!("Native mode runs headless - use `trunk serve` for the playable web version");

    let seed = match std::env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(seed) => seed,
            Err(e) => {
                log::warn!("Ignoring seed {:?}: {}", arg, e);
                DEFAULT_SEED
            }
        },
        None => DEFAULT_SEED,
    };

    let summary = run_headless(seed, MAX_FRAMES, true);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
