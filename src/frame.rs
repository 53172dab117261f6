use crate::render::GpuState;
use orb_core::{FrameDriver, Scene};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub driver: FrameDriver,
    pub gpu: GpuState,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        let mut scene = self.scene.borrow_mut();
        self.driver.tick(&mut scene, &mut self.gpu);
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop that can be cancelled.
pub struct AnimationLoop {
    ctx: Rc<RefCell<FrameContext>>,
    tick: TickClosure,
    handle: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    pub fn start(ctx: Rc<RefCell<FrameContext>>) -> Self {
        ctx.borrow_mut().driver.start();
        let tick: TickClosure = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let handle_tick = handle.clone();
        let ctx_tick = ctx.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let running = {
                let mut ctx = ctx_tick.borrow_mut();
                ctx.frame();
                ctx.driver.is_running()
            };
            if running {
                handle_tick.set(request_frame(&tick_clone));
            } else {
                handle_tick.set(None);
            }
        }) as Box<dyn FnMut()>));
        handle.set(request_frame(&tick));
        Self { ctx, tick, handle }
    }

    pub fn stop(&mut self) {
        self.ctx.borrow_mut().driver.stop();
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure's reference to itself.
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &TickClosure) -> Option<i32> {
    let w = web::window()?;
    let guard = tick.borrow();
    let closure = guard.as_ref()?;
    match w.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
