//! Carrier Ring entry point
//!
//! Web: sizes the page canvas, builds the ring and drives it from
//! `requestAnimationFrame`. Native: runs the ring headless for a number of
//! frames and prints the last frame's draw commands as JSON.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use carrier_ring::consts::{DEFAULT_MOON_COUNT, DEFAULT_RING_RADIUS};
    use carrier_ring::platform::{FrameClock, color_provider};
    use carrier_ring::{CarrierRing, SceneConfig, Settings, update_and_render};

    /// App instance holding all state
    struct App {
        ring: CarrierRing,
        settings: Settings,
        clock: FrameClock,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
    }

    impl App {
        /// Clear, draw and advance one frame
        fn frame(&mut self, time: f64) -> Result<(), JsValue> {
            let dt = self.clock.tick(time);

            let w = self.canvas.width() as f64;
            let h = self.canvas.height() as f64;
            self.ctx.clear_rect(0.0, 0.0, w, h);
            self.ctx.set_line_width(self.settings.line_width as f64);

            let colors = color_provider(self.settings.theme);
            update_and_render(&mut self.ring, dt, &mut self.ctx, colors)
        }
    }

    /// Scene from `?seed=N&moons=M`, or the default two-moon scene
    fn scene_from_query() -> SceneConfig {
        let params = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .and_then(|s| web_sys::UrlSearchParams::new_with_str(&s).ok());

        let Some(params) = params else {
            return SceneConfig::default();
        };

        let seed = match params.get("seed").map(|s| s.parse::<u64>()) {
            Some(Ok(seed)) => seed,
            Some(Err(_)) => {
                log::warn!("Ignoring invalid seed");
                return SceneConfig::default();
            }
            None => return SceneConfig::default(),
        };

        let moons = params
            .get("moons")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MOON_COUNT);

        log::info!("Random scene: seed {} with {} moons", seed, moons);
        SceneConfig::random(seed, moons, DEFAULT_RING_RADIUS)
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            app_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn app_loop(app: Rc<RefCell<App>>, time: f64) {
        // A failed draw means the context is gone; stop rather than fail every frame
        if let Err(e) = app.borrow_mut().frame(time) {
            log::error!("Render error, stopping: {:?}", e);
            return;
        }
        request_animation_frame(app);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Carrier Ring starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document");
            return;
        };

        let canvas = match document
            .get_element_by_id("canvas")
            .map(|el| el.dyn_into::<HtmlCanvasElement>())
        {
            Some(Ok(canvas)) => canvas,
            _ => {
                log::error!("No <canvas id=\"canvas\"> element");
                return;
            }
        };

        // Fill the viewport
        if let Some(root) = document.document_element() {
            canvas.set_width(root.client_width().max(0) as u32);
            canvas.set_height(root.client_height().max(0) as u32);
        }

        let ctx = match canvas.get_context("2d") {
            Ok(Some(obj)) => match obj.dyn_into::<CanvasRenderingContext2d>() {
                Ok(ctx) => ctx,
                Err(_) => {
                    log::error!("2d context has unexpected type");
                    return;
                }
            },
            _ => {
                log::error!("Canvas 2d context unavailable");
                return;
            }
        };

        let settings = Settings::from_query();
        let scene = scene_from_query();
        if let Err(e) = scene.validate() {
            log::error!("Invalid scene: {}", e);
            return;
        }

        let ring = scene.build(canvas.width() as f32 / 2.0, canvas.height() as f32 / 2.0);
        log::info!(
            "Ring radius {} with {} moons on {}x{} canvas",
            ring.radius,
            ring.moons.len(),
            canvas.width(),
            canvas.height()
        );

        let app = Rc::new(RefCell::new(App {
            ring,
            clock: FrameClock::new(settings.max_frame_dt),
            settings,
            canvas,
            ctx,
        }));

        request_animation_frame(app);
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
mod native {
    use carrier_ring::consts::{DEFAULT_MOON_COUNT, DEFAULT_RING_RADIUS};
    use carrier_ring::platform::{FrameClock, color_provider};
    use carrier_ring::renderer::{RecordingSurface, TessellatingSurface, Vertex};
    use carrier_ring::sim::render;
    use carrier_ring::{SceneConfig, update_and_render};

    /// Frames to run when `--frames` is not given
    const DEFAULT_FRAMES: u32 = 600;
    /// Simulated display refresh (ms per frame)
    const FRAME_MS: f64 = 1000.0 / 60.0;

    #[derive(Debug, Default)]
    struct Args {
        scene_path: Option<String>,
        seed: Option<u64>,
        moons: usize,
        frames: u32,
    }

    fn parse_args() -> Result<Args, String> {
        let mut args = Args {
            moons: DEFAULT_MOON_COUNT,
            frames: DEFAULT_FRAMES,
            ..Default::default()
        };

        let mut iter = std::env::args().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--frames" => args.frames = parse_value(&arg, iter.next())?,
                "--seed" => args.seed = Some(parse_value(&arg, iter.next())?),
                "--moons" => args.moons = parse_value(&arg, iter.next())?,
                flag if flag.starts_with("--") => return Err(format!("unknown option {}", flag)),
                path => args.scene_path = Some(path.to_string()),
            }
        }

        Ok(args)
    }

    fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
        value
            .as_deref()
            .ok_or_else(|| format!("{} needs a value", flag))?
            .parse()
            .map_err(|_| format!("invalid value for {}", flag))
    }

    pub fn run() -> Result<(), String> {
        let args = parse_args()?;

        let scene = match (&args.scene_path, args.seed) {
            (Some(path), _) => SceneConfig::load(path).map_err(|e| e.to_string())?,
            (None, Some(seed)) => SceneConfig::random(seed, args.moons, DEFAULT_RING_RADIUS),
            (None, None) => SceneConfig::default(),
        };
        scene.validate().map_err(|e| e.to_string())?;

        // Centre the ring on a canvas just big enough to hold it
        let half = scene.ring_radius * 1.25;
        let mut ring = scene.build(half, half);
        let mut clock = FrameClock::new(scene.settings.max_frame_dt);
        let colors = color_provider(scene.settings.theme);
        let mut surface = RecordingSurface::new();

        for frame in 0..args.frames {
            surface.clear();
            let dt = clock.tick(frame as f64 * FRAME_MS);
            let Ok(()) = update_and_render(&mut ring, dt, &mut surface, &colors);
        }

        let mut tessellated = TessellatingSurface::new(scene.settings.line_width);
        let Ok(()) = render(&ring, &mut tessellated, &colors);
        log::debug!(
            "Ran {} frames: {} strokes last frame, {} vertices ({} bytes) tessellated",
            args.frames,
            surface.stroke_count(),
            tessellated.vertices().len(),
            Vertex::as_bytes(tessellated.vertices()).len()
        );

        let output = serde_json::json!({
            "frames": args.frames,
            "moons": ring.moons,
            "commands": surface.commands(),
        });
        let json = serde_json::to_string_pretty(&output).map_err(|e| e.to_string())?;
        println!("{}", json);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Carrier Ring (native) starting...");

    if let Err(e) = native::run() {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
