//! Per-frame driver.
//!
//! The host calls [`FrameDriver::tick`] once per display refresh. Inside a
//! tick the order is fixed: advance time, decay the pointer, then ask the
//! renderer to draw, so the draw always sees the tick's final uniforms.

use crate::clock::ClockState;
use crate::scene::Scene;
use crate::uniforms::ShaderUniforms;

/// The drawing side of the pipeline. Implemented by the wgpu front-end and by
/// test doubles.
pub trait Renderer {
    fn redraw(&mut self, uniforms: &ShaderUniforms) -> anyhow::Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
    Stopped,
}

pub struct FrameDriver {
    state: DriverState,
    clock: ClockState,
    frames: u64,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDriver {
    pub fn new() -> Self {
        Self {
            state: DriverState::Idle,
            clock: ClockState::new(),
            frames: 0,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn start(&mut self) {
        if self.state != DriverState::Running {
            log::info!("[frame] driver running");
            self.state = DriverState::Running;
        }
    }

    pub fn stop(&mut self) {
        if self.state == DriverState::Running {
            log::info!("[frame] driver stopped after {} frames", self.frames);
        }
        self.state = DriverState::Stopped;
    }

    pub fn clock(&self) -> &ClockState {
        &self.clock
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn tick<R: Renderer + ?Sized>(&mut self, scene: &mut Scene, renderer: &mut R) {
        if self.state != DriverState::Running {
            return;
        }
        if scene.take_clock_reset() {
            self.clock.reset();
        }
        let elapsed = self.clock.advance(scene.time_speed());
        scene.push_time(elapsed);

        scene.decay_pointer();

        let uniforms = scene.pack();
        if let Err(e) = renderer.redraw(&uniforms) {
            log::error!("[frame] render error: {:?}", e);
        }
        self.frames += 1;
    }
}
