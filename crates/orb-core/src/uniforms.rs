//! Shader uniforms and the binder that keeps them in step with parameters.
//!
//! A [`UniformSlot`] names a uniform, the parameter that feeds it and the
//! coercion between the two. [`UniformBinder`] turns each slot into a
//! store listener writing into a shared [`UniformBlock`]; the block is packed
//! into [`ShaderUniforms`] once per frame for upload.

use crate::color::parse_css_color;
use crate::easing::easing_code;
use crate::error::ValidationError;
use crate::params::{ListenerId, ParamValue, ParameterStore};
use glam::Mat4;
use std::cell::RefCell;
use std::rc::Rc;

pub const U_TIME: &str = "uTime";
pub const U_RESOLUTION: &str = "uResolution";
pub const U_MOUSE: &str = "uMouse";
pub const U_ORDER: &str = "uOrder";
pub const U_DEGREE: &str = "uDegree";
pub const U_LINE_WIDTH: &str = "uLineWidth";
pub const U_LINE_COUNT: &str = "uLineCount";
pub const U_LINE_MULTIPLIER: &str = "uLineMultiplier";
pub const U_COLOR1: &str = "uColor1";
pub const U_COLOR2: &str = "uColor2";
pub const U_EASING: &str = "uEasing";
pub const U_ROTATION: &str = "uRotation";
pub const U_RADIUS: &str = "uRadius";
pub const U_OFFSET_X: &str = "uOffsetX";
pub const U_OFFSET_Y: &str = "uOffsetY";
pub const U_ENABLE_MOUSE: &str = "uEnableMouse";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Int(i32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
}

impl UniformValue {
    pub fn as_float(&self) -> Option<f32> {
        match self {
            UniformValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

pub type Coerce = fn(&ParamValue) -> Option<UniformValue>;

pub fn coerce_number(v: &ParamValue) -> Option<UniformValue> {
    v.as_number().map(UniformValue::Float)
}

pub fn coerce_color(v: &ParamValue) -> Option<UniformValue> {
    match v {
        ParamValue::Color(s) => parse_css_color(s)
            .ok()
            .map(|c| UniformValue::Vec3(c.to_array())),
        _ => None,
    }
}

pub fn coerce_easing(v: &ParamValue) -> Option<UniformValue> {
    v.as_str().map(|s| UniformValue::Int(easing_code(s)))
}

#[derive(Clone, Copy)]
pub struct UniformSlot {
    pub uniform: &'static str,
    pub source: &'static str,
    pub coerce: Coerce,
}

impl UniformSlot {
    pub const fn new(uniform: &'static str, source: &'static str, coerce: Coerce) -> Self {
        Self {
            uniform,
            source,
            coerce,
        }
    }
}

impl std::fmt::Debug for UniformSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UniformSlot")
            .field("uniform", &self.uniform)
            .field("source", &self.source)
            .finish()
    }
}

/// Parameter-fed slots. `timeSpeed`, `cameraType` and `fov` have none:
/// they drive the clock and the camera rig instead.
pub fn default_slots() -> Vec<UniformSlot> {
    vec![
        UniformSlot::new(U_ORDER, "order", coerce_number),
        UniformSlot::new(U_DEGREE, "degree", coerce_number),
        UniformSlot::new(U_LINE_WIDTH, "lineWidth", coerce_number),
        UniformSlot::new(U_LINE_COUNT, "lineCount", coerce_number),
        UniformSlot::new(U_LINE_MULTIPLIER, "lineMultiplier", coerce_number),
        UniformSlot::new(U_COLOR1, "color1", coerce_color),
        UniformSlot::new(U_COLOR2, "color2", coerce_color),
        UniformSlot::new(U_EASING, "easing", coerce_easing),
        UniformSlot::new(U_ROTATION, "rotation", coerce_number),
        UniformSlot::new(U_RADIUS, "radius", coerce_number),
        UniformSlot::new(U_OFFSET_X, "offsetX", coerce_number),
        UniformSlot::new(U_OFFSET_Y, "offsetY", coerce_number),
        UniformSlot::new(U_ENABLE_MOUSE, "enableMouse", coerce_number),
    ]
}

/// GPU layout of the orb program's uniform buffer (see `shaders/orb.wgsl`).
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShaderUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub color1: [f32; 4],
    pub color2: [f32; 4],
    pub resolution: [f32; 2],
    pub mouse: [f32; 2],
    pub time: f32,
    pub order: f32,
    pub degree: f32,
    pub line_width: f32,
    pub line_count: f32,
    pub line_multiplier: f32,
    pub rotation: f32,
    pub radius: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub easing: i32,
    pub enable_mouse: f32,
}

/// Current value of every uniform, by name, in first-write order.
#[derive(Clone, Debug, Default)]
pub struct UniformBlock {
    values: Vec<(&'static str, UniformValue)>,
    writes: u64,
}

impl UniformBlock {
    pub fn new() -> Self {
        let mut block = Self::default();
        block.set(U_TIME, UniformValue::Float(0.0));
        block.set(U_RESOLUTION, UniformValue::Vec2([1.0, 1.0]));
        block.set(U_MOUSE, UniformValue::Vec2([0.0, 0.0]));
        block
    }

    pub fn set(&mut self, name: &'static str, value: UniformValue) {
        self.writes += 1;
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.values.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<UniformValue> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    /// Total number of writes so far; lets callers observe pushes.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    fn float(&self, name: &str) -> f32 {
        match self.get(name) {
            Some(UniformValue::Float(v)) => v,
            Some(UniformValue::Int(v)) => v as f32,
            _ => 0.0,
        }
    }

    fn int(&self, name: &str) -> i32 {
        match self.get(name) {
            Some(UniformValue::Int(v)) => v,
            Some(UniformValue::Float(v)) => v as i32,
            _ => 0,
        }
    }

    fn vec2(&self, name: &str) -> [f32; 2] {
        match self.get(name) {
            Some(UniformValue::Vec2(v)) => v,
            _ => [0.0; 2],
        }
    }

    fn rgba(&self, name: &str) -> [f32; 4] {
        match self.get(name) {
            Some(UniformValue::Vec3([r, g, b])) => [r, g, b, 1.0],
            _ => [0.0, 0.0, 0.0, 1.0],
        }
    }

    pub fn pack(&self, view_proj: Mat4) -> ShaderUniforms {
        ShaderUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            color1: self.rgba(U_COLOR1),
            color2: self.rgba(U_COLOR2),
            resolution: self.vec2(U_RESOLUTION),
            mouse: self.vec2(U_MOUSE),
            time: self.float(U_TIME),
            order: self.float(U_ORDER),
            degree: self.float(U_DEGREE),
            line_width: self.float(U_LINE_WIDTH),
            line_count: self.float(U_LINE_COUNT),
            line_multiplier: self.float(U_LINE_MULTIPLIER),
            rotation: self.float(U_ROTATION),
            radius: self.float(U_RADIUS),
            offset_x: self.float(U_OFFSET_X),
            offset_y: self.float(U_OFFSET_Y),
            easing: self.int(U_EASING),
            enable_mouse: self.float(U_ENABLE_MOUSE),
        }
    }
}

fn push(block: &RefCell<UniformBlock>, slot: &UniformSlot, value: &ParamValue) {
    match (slot.coerce)(value) {
        Some(u) => block.borrow_mut().set(slot.uniform, u),
        None => log::warn!(
            "[uniforms] cannot coerce {} for {}: {:?}",
            slot.source,
            slot.uniform,
            value
        ),
    }
}

/// Installs one store listener per slot. Binding again always removes the
/// previous listeners first, so a parameter never feeds a uniform twice.
pub struct UniformBinder {
    block: Rc<RefCell<UniformBlock>>,
    slots: Vec<UniformSlot>,
    bindings: Vec<ListenerId>,
}

impl UniformBinder {
    pub fn new(block: Rc<RefCell<UniformBlock>>) -> Self {
        Self {
            block,
            slots: Vec::new(),
            bindings: Vec::new(),
        }
    }

    pub fn block(&self) -> &Rc<RefCell<UniformBlock>> {
        &self.block
    }

    pub fn slots(&self) -> &[UniformSlot] {
        &self.slots
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    pub fn bind(
        &mut self,
        store: &mut ParameterStore,
        slots: Vec<UniformSlot>,
    ) -> Result<(), ValidationError> {
        self.unbind(store);
        for slot in &slots {
            let block = self.block.clone();
            let s = *slot;
            let listener = Box::new(move |v: &ParamValue| push(&block, &s, v));
            let id = match store.on_change(slot.source, listener) {
                Ok(id) => id,
                Err(e) => {
                    self.unbind(store);
                    return Err(e);
                }
            };
            self.bindings.push(id);
        }
        self.slots = slots;
        self.push_all(store);
        log::info!("[uniforms] bound {} slots", self.bindings.len());
        Ok(())
    }

    pub fn rebind(
        &mut self,
        store: &mut ParameterStore,
        slots: Vec<UniformSlot>,
    ) -> Result<(), ValidationError> {
        self.bind(store, slots)
    }

    /// Point the existing slots at a new block, e.g. after the material changed.
    pub fn retarget(
        &mut self,
        store: &mut ParameterStore,
        block: Rc<RefCell<UniformBlock>>,
    ) -> Result<(), ValidationError> {
        self.unbind(store);
        self.block = block;
        let slots = std::mem::take(&mut self.slots);
        self.bind(store, slots)
    }

    pub fn unbind(&mut self, store: &mut ParameterStore) {
        for id in self.bindings.drain(..) {
            store.remove_listener(id);
        }
    }

    pub fn push_all(&self, store: &ParameterStore) {
        for slot in &self.slots {
            if let Some(v) = store.get(slot.source) {
                push(&self.block, slot, v);
            }
        }
    }
}
