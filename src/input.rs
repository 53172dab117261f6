use orb_core::ViewportRect;
use web_sys as web;

/// Orbit drag in progress on the canvas, tracked per pointer.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last_x: f32,
    pub last_y: f32,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, x: f32, y: f32) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last_x = x;
        self.last_y = y;
    }

    /// Pixel delta since the last call, or `None` if this pointer is not dragging.
    pub fn update(&mut self, pointer_id: i32, x: f32, y: f32) -> Option<(f32, f32)> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.active && pointer_id == self.pointer_id {
            self.active = false;
            return true;
        }
        false
    }
}

#[inline]
pub fn element_rect(el: &web::Element) -> ViewportRect {
    let r = el.get_bounding_client_rect();
    ViewportRect {
        left: r.left() as f32,
        top: r.top() as f32,
        width: r.width() as f32,
        height: r.height() as f32,
    }
}

/// Backing-store size for a CSS size at the given device pixel ratio.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64, min_px: u32) -> (u32, u32) {
    let scale = |v: f64| {
        let px = (v * dpr).round();
        if px.is_finite() && px > 0.0 {
            (px as u32).max(min_px)
        } else {
            min_px
        }
    };
    (scale(css_width), scale(css_height))
}
