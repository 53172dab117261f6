//! Everything the page mutates, wired together.
//!
//! `Scene` owns the parameter store and installs the listeners that connect
//! it to the uniform block (through [`UniformBinder`]), the camera rig
//! (`cameraType`, `fov`) and the clock (`timeSpeed` edits request a reset).
//! [`Scene::teardown`] removes every one of them.

use crate::camera::{CameraRig, CameraSpec, Viewport, PERSPECTIVE_CAMERA};
use crate::config::SceneConfig;
use crate::constants::DEFAULT_FOV_DEG;
use crate::error::ValidationError;
use crate::params::{Listener, ListenerId, ParamValue, ParameterStore};
use crate::pointer::{InteractionAdapter, PointerState, ViewportRect};
use crate::uniforms::{
    default_slots, ShaderUniforms, UniformBinder, UniformBlock, UniformValue, U_MOUSE,
    U_RESOLUTION, U_TIME,
};
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

pub struct Scene {
    config: SceneConfig,
    store: ParameterStore,
    binder: UniformBinder,
    block: Rc<RefCell<UniformBlock>>,
    rig: Rc<RefCell<CameraRig>>,
    adapter: InteractionAdapter,
    clock_reset: Rc<Cell<bool>>,
    listeners: Vec<ListenerId>,
}

impl Scene {
    pub fn new(config: SceneConfig, viewport: Viewport) -> Result<Self, ValidationError> {
        let mut store = ParameterStore::with_defaults();
        let fov = store.number("fov").unwrap_or(DEFAULT_FOV_DEG);
        let kind = store.text("cameraType").unwrap_or(PERSPECTIVE_CAMERA);
        let spec = CameraSpec::from_kind(kind, fov);
        let rig = Rc::new(RefCell::new(CameraRig::new(spec, viewport, config.orbit)));
        let block = Rc::new(RefCell::new(UniformBlock::new()));
        let clock_reset = Rc::new(Cell::new(false));

        let mut binder = UniformBinder::new(block.clone());
        binder.bind(&mut store, default_slots())?;

        let mut listeners = Vec::new();
        let rig_kind = rig.clone();
        listeners.push(store.on_change(
            "cameraType",
            Box::new(move |v: &ParamValue| {
                if let Some(kind) = v.as_str() {
                    rig_kind.borrow_mut().set_kind(kind);
                }
            }),
        )?);
        let rig_fov = rig.clone();
        listeners.push(store.on_change(
            "fov",
            Box::new(move |v: &ParamValue| {
                if let Some(fov) = v.as_number() {
                    rig_fov.borrow_mut().set_fov(fov);
                }
            }),
        )?);
        let reset = clock_reset.clone();
        listeners.push(store.on_change(
            "timeSpeed",
            Box::new(move |_: &ParamValue| reset.set(true)),
        )?);

        let adapter = InteractionAdapter::default();
        adapter.on_resize(
            viewport.width,
            viewport.height,
            &mut block.borrow_mut(),
            &mut rig.borrow_mut(),
        );
        log::info!(
            "[scene] variant={} params={} slots={}",
            config.variant.name(),
            store.len(),
            binder.binding_count()
        );

        Ok(Self {
            config,
            store,
            binder,
            block,
            rig,
            adapter,
            clock_reset,
            listeners,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    pub fn binder(&self) -> &UniformBinder {
        &self.binder
    }

    pub fn rig(&self) -> Ref<'_, CameraRig> {
        self.rig.borrow()
    }

    pub fn pointer(&self) -> PointerState {
        self.adapter.pointer()
    }

    pub fn uniform(&self, name: &str) -> Option<UniformValue> {
        self.block.borrow().get(name)
    }

    /// The tuning panel's only way in.
    pub fn set_param(&mut self, name: &str, value: ParamValue) -> Result<(), ValidationError> {
        match self.store.set(name, value) {
            Ok(()) => {
                log::debug!("[params] {name} updated");
                Ok(())
            }
            Err(e) => {
                log::warn!("[params] rejected: {e}");
                Err(e)
            }
        }
    }

    pub fn on_change(
        &mut self,
        name: &str,
        listener: Listener,
    ) -> Result<ListenerId, ValidationError> {
        self.store.on_change(name, listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.store.remove_listener(id)
    }

    pub fn pointer_move(&mut self, client_x: f32, client_y: f32, rect: ViewportRect) {
        if !self.config.mouse {
            return;
        }
        self.adapter.on_pointer_move(client_x, client_y, rect);
        self.adapter.push_mouse(&mut self.block.borrow_mut());
    }

    pub fn drag(&mut self, dx_px: f32, dy_px: f32) {
        self.rig.borrow_mut().drag(dx_px, dy_px);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.adapter.on_resize(
            width,
            height,
            &mut self.block.borrow_mut(),
            &mut self.rig.borrow_mut(),
        );
    }

    pub(crate) fn take_clock_reset(&self) -> bool {
        self.clock_reset.replace(false)
    }

    pub(crate) fn time_speed(&self) -> f32 {
        self.store.number("timeSpeed").unwrap_or(0.0)
    }

    pub(crate) fn push_time(&self, elapsed: f32) {
        self.block.borrow_mut().set(U_TIME, UniformValue::Float(elapsed));
    }

    pub(crate) fn decay_pointer(&mut self) {
        self.adapter.decay_step();
        self.adapter.push_mouse(&mut self.block.borrow_mut());
    }

    pub fn pack(&self) -> ShaderUniforms {
        let view_proj = self.rig.borrow().view_proj();
        self.block.borrow().pack(view_proj)
    }

    /// Swap in a fresh uniform block, as when the shader material is rebuilt.
    /// Parameter slots are rebound; frame-driven uniforms are carried over.
    pub fn replace_material(&mut self) -> Result<(), ValidationError> {
        let old = self.block.borrow().clone();
        let block = Rc::new(RefCell::new(UniformBlock::new()));
        {
            let mut b = block.borrow_mut();
            for name in [U_TIME, U_RESOLUTION, U_MOUSE] {
                if let Some(v) = old.get(name) {
                    b.set(name, v);
                }
            }
        }
        self.binder.retarget(&mut self.store, block.clone())?;
        self.block = block;
        Ok(())
    }

    pub fn teardown(&mut self) {
        self.binder.unbind(&mut self.store);
        for id in self.listeners.drain(..) {
            self.store.remove_listener(id);
        }
        log::info!("[scene] torn down");
    }
}
