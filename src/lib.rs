#![cfg(target_arch = "wasm32")]
//! Browser front-end: canvas, DOM events, tuning panel and the wgpu renderer
//! around the `orb-core` pipeline.

use orb_core::{FrameDriver, Scene, SceneConfig, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod controls;
mod dom;
mod events;
mod frame;
mod input;
mod panel;
mod render;

use constants::{CANVAS_ID, VARIANT_ATTR};

/// Everything that has to be undone when the page goes away.
struct App {
    scene: Rc<RefCell<Scene>>,
    frame_loop: frame::AnimationLoop,
    listeners: events::EventListeners,
    panel: Option<panel::Panel>,
}

impl App {
    fn shutdown(mut self) {
        self.frame_loop.stop();
        let removed = self.listeners.len();
        self.listeners.clear();
        {
            let mut scene = self.scene.borrow_mut();
            if let Some(panel) = self.panel.take() {
                panel.remove(&mut scene);
            }
            scene.teardown();
        }
        log::info!("[app] shut down ({} listeners removed)", removed);
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orb-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stops the animation and detaches everything. Safe to call more than once.
#[wasm_bindgen]
pub fn shutdown() {
    if let Some(app) = APP.with(|a| a.borrow_mut().take()) {
        app.shutdown();
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;

    let config = SceneConfig::from_attr(canvas.get_attribute(VARIANT_ATTR).as_deref());
    dom::sync_canvas_backing_size(&canvas);
    let (css_w, css_h) = dom::css_size(&canvas);
    let scene = Scene::new(config, Viewport::new(css_w, css_h))?;
    let scene = Rc::new(RefCell::new(scene));

    let gpu = render::GpuState::new(&canvas).await?;

    let mut listeners = events::EventListeners::new();
    events::wire_resize(&mut listeners, &window, &canvas, scene.clone());
    if config.mouse {
        events::wire_pointer_follow(&mut listeners, &window, &canvas, scene.clone());
    }
    if config.orbit != orb_core::orbit::OrbitMode::Disabled {
        events::wire_orbit_drag(&mut listeners, &canvas, scene.clone());
    }
    let panel = if config.panel {
        Some(panel::Panel::build(&document, &scene)?)
    } else {
        None
    };

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: scene.clone(),
        driver: FrameDriver::new(),
        gpu,
        canvas: canvas.clone(),
    }));
    let frame_loop = frame::AnimationLoop::start(ctx);

    // Kept out of `listeners`: shutdown clears that registry from inside this handler.
    let on_pagehide =
        Closure::wrap(Box::new(move |_ev: web::Event| shutdown()) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pagehide", on_pagehide.as_ref().unchecked_ref());
    on_pagehide.forget();

    log::info!("[app] variant={} listeners={}", config.variant.name(), listeners.len());
    APP.with(|a| {
        *a.borrow_mut() = Some(App {
            scene,
            frame_loop,
            listeners,
            panel,
        })
    });
    Ok(())
}
