use crate::camera::{CameraRig, Viewport};
use crate::constants::{POINTER_FOLLOW_FACTOR, POINTER_REST_FACTOR};
use crate::uniforms::{UniformBlock, UniformValue, U_MOUSE, U_RESOLUTION};

/// Smoothed pointer position in normalized device coordinates.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn manhattan(&self) -> f32 {
        self.x.abs() + self.y.abs()
    }
}

/// Client-space bounds of the canvas, as reported by `getBoundingClientRect`.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct ViewportRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Maps client coordinates to NDC: x right, y up. Points outside the rect
/// are clamped to its edge, so the result always lies in [-1, 1].
#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, rect: ViewportRect) -> Option<[f32; 2]> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let x = (client_x - rect.left) / rect.width * 2.0 - 1.0;
    let y = -(client_y - rect.top) / rect.height * 2.0 + 1.0;
    (x.is_finite() && y.is_finite()).then(|| [x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0)])
}

/// Turns pointer and resize events into uniform and camera updates.
///
/// The pointer never snaps: each move eases the state a little toward the
/// cursor, and every tick eases it back toward the centre, so the effect
/// drifts home once the pointer stops or leaves.
#[derive(Clone, Copy, Debug)]
pub struct InteractionAdapter {
    pointer: PointerState,
    follow: f32,
    rest: f32,
}

impl Default for InteractionAdapter {
    fn default() -> Self {
        Self::new(POINTER_FOLLOW_FACTOR, POINTER_REST_FACTOR)
    }
}

impl InteractionAdapter {
    pub fn new(follow: f32, rest: f32) -> Self {
        Self {
            pointer: PointerState::default(),
            follow,
            rest,
        }
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
    }

    pub fn on_pointer_move(
        &mut self,
        client_x: f32,
        client_y: f32,
        rect: ViewportRect,
    ) -> PointerState {
        if let Some([x1, y1]) = client_to_ndc(client_x, client_y, rect) {
            self.pointer.x += (x1 - self.pointer.x) * self.follow;
            self.pointer.y += (y1 - self.pointer.y) * self.follow;
        }
        self.pointer
    }

    pub fn decay_step(&mut self) -> PointerState {
        self.pointer.x -= self.pointer.x * self.rest;
        self.pointer.y -= self.pointer.y * self.rest;
        self.pointer
    }

    pub fn push_mouse(&self, block: &mut UniformBlock) {
        block.set(U_MOUSE, UniformValue::Vec2([self.pointer.x, self.pointer.y]));
    }

    /// Resolution uniform and camera projection are updated together.
    pub fn on_resize(
        &self,
        width: f32,
        height: f32,
        block: &mut UniformBlock,
        rig: &mut CameraRig,
    ) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        block.set(U_RESOLUTION, UniformValue::Vec2([width, height]));
        rig.resize(Viewport::new(width, height));
    }
}
