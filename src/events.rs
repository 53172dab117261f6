//! DOM listener wiring.
//!
//! Every listener goes through [`EventListeners`], which removes it again on
//! drop, so tearing the page down leaves nothing attached to the window,
//! the canvas or the panel.

use crate::dom;
use crate::input::{self, DragState};
use orb_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Registered {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

#[derive(Default)]
pub struct EventListeners {
    registered: Vec<Registered>,
}

impl EventListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let callback = closure.as_ref().unchecked_ref();
        if let Err(e) = target.add_event_listener_with_callback(kind, callback) {
            log::warn!("[events] cannot listen for {}: {:?}", kind, e);
            return;
        }
        self.registered.push(Registered {
            target: target.clone(),
            kind,
            closure,
        });
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn clear(&mut self) {
        for r in self.registered.drain(..) {
            _ = r
                .target
                .remove_event_listener_with_callback(r.kind, r.closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for EventListeners {
    fn drop(&mut self) {
        self.clear();
    }
}

pub fn wire_resize(
    listeners: &mut EventListeners,
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    scene: Rc<RefCell<Scene>>,
) {
    let canvas = canvas.clone();
    listeners.add(window.as_ref(), "resize", move |_ev| {
        dom::sync_canvas_backing_size(&canvas);
        let (w, h) = dom::css_size(&canvas);
        scene.borrow_mut().resize(w, h);
    });
}

/// Pointer moves anywhere in the window feed `uMouse` (variants with mouse
/// reactivity only; `Scene` drops the rest).
pub fn wire_pointer_follow(
    listeners: &mut EventListeners,
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    scene: Rc<RefCell<Scene>>,
) {
    let canvas = canvas.clone();
    listeners.add(window.as_ref(), "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let rect = input::element_rect(&canvas);
        scene
            .borrow_mut()
            .pointer_move(ev.client_x() as f32, ev.client_y() as f32, rect);
    });
}

/// Orbit drags on the canvas: down captures the pointer, move rotates, up releases.
pub fn wire_orbit_drag(
    listeners: &mut EventListeners,
    canvas: &web::HtmlCanvasElement,
    scene: Rc<RefCell<Scene>>,
) {
    let drag = Rc::new(RefCell::new(DragState::default()));
    let target: &web::EventTarget = canvas.as_ref();

    let drag_down = drag.clone();
    let canvas_down = canvas.clone();
    listeners.add(target, "pointerdown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        drag_down
            .borrow_mut()
            .begin(ev.pointer_id(), ev.client_x() as f32, ev.client_y() as f32);
        _ = canvas_down.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });

    let drag_move = drag.clone();
    listeners.add(target, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let delta =
            drag_move
                .borrow_mut()
                .update(ev.pointer_id(), ev.client_x() as f32, ev.client_y() as f32);
        if let Some((dx, dy)) = delta {
            scene.borrow_mut().drag(dx, dy);
        }
    });

    for kind in ["pointerup", "pointercancel"] {
        let drag_up = drag.clone();
        let canvas_up = canvas.clone();
        listeners.add(target, kind, move |ev| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            if drag_up.borrow_mut().end(ev.pointer_id()) {
                _ = canvas_up.release_pointer_capture(ev.pointer_id());
            }
        });
    }
}
