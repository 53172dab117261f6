//! Camera description and projection.
//!
//! A camera is rebuilt from a [`CameraSpec`] rather than mutated field by
//! field, and every change to its projection goes through
//! [`apply_projection`], which writes the projection fields and the matrix
//! in the same call.

use crate::constants::{CAMERA_FAR, CAMERA_NEAR, CAMERA_Z, DEFAULT_FOV_DEG, ORTHO_HALF_HEIGHT};
use crate::orbit::{OrbitControls, OrbitMode};
use glam::{Mat4, Vec3};

pub const PERSPECTIVE_CAMERA: &str = "PerspectiveCamera";
pub const ORTHOGRAPHIC_CAMERA: &str = "OrthographicCamera";
pub const CAMERA_KINDS: &[&str] = &[PERSPECTIVE_CAMERA, ORTHOGRAPHIC_CAMERA];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraSpec {
    Perspective { fov_deg: f32 },
    Orthographic,
}

impl CameraSpec {
    /// `kind` is one of [`CAMERA_KINDS`]; anything else falls back to perspective.
    pub fn from_kind(kind: &str, fov_deg: f32) -> Self {
        match kind {
            ORTHOGRAPHIC_CAMERA => CameraSpec::Orthographic,
            _ => CameraSpec::Perspective { fov_deg },
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            CameraSpec::Perspective { .. } => PERSPECTIVE_CAMERA,
            CameraSpec::Orthographic => ORTHOGRAPHIC_CAMERA,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 && self.width > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    Perspective {
        fov_deg: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
    Orthographic {
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
        near: f32,
        far: f32,
    },
}

impl Projection {
    pub fn matrix(&self) -> Mat4 {
        match *self {
            Projection::Perspective {
                fov_deg,
                aspect,
                near,
                far,
            } => Mat4::perspective_rh(fov_deg.clamp(1e-3, 179.9).to_radians(), aspect, near, far),
            Projection::Orthographic {
                left,
                right,
                top,
                bottom,
                near,
                far,
            } => Mat4::orthographic_rh(left, right, bottom, top, near, far),
        }
    }
}

pub fn projection_for(spec: CameraSpec, viewport: Viewport) -> Projection {
    let aspect = viewport.aspect();
    match spec {
        CameraSpec::Perspective { fov_deg } => Projection::Perspective {
            fov_deg,
            aspect,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        },
        CameraSpec::Orthographic => Projection::Orthographic {
            left: -ORTHO_HALF_HEIGHT * aspect,
            right: ORTHO_HALF_HEIGHT * aspect,
            top: ORTHO_HALF_HEIGHT,
            bottom: -ORTHO_HALF_HEIGHT,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        },
    }
}

#[derive(Clone, Debug)]
pub struct CameraHandle {
    pub spec: CameraSpec,
    pub projection: Projection,
    projection_matrix: Mat4,
}

impl CameraHandle {
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }
}

pub fn rebuild_camera(spec: CameraSpec, viewport: Viewport) -> CameraHandle {
    let projection = projection_for(spec, viewport);
    CameraHandle {
        spec,
        projection,
        projection_matrix: projection.matrix(),
    }
}

pub fn apply_projection(camera: &mut CameraHandle, viewport: Viewport) {
    camera.projection = projection_for(camera.spec, viewport);
    camera.projection_matrix = camera.projection.matrix();
}

/// Camera plus its controls. Switching camera kind replaces both.
pub struct CameraRig {
    kind: CameraSpec,
    fov_deg: f32,
    viewport: Viewport,
    orbit_mode: OrbitMode,
    camera: CameraHandle,
    orbit: OrbitControls,
}

impl CameraRig {
    pub fn new(spec: CameraSpec, viewport: Viewport, orbit_mode: OrbitMode) -> Self {
        let fov_deg = match spec {
            CameraSpec::Perspective { fov_deg } => fov_deg,
            CameraSpec::Orthographic => DEFAULT_FOV_DEG,
        };
        Self {
            kind: spec,
            fov_deg,
            viewport,
            orbit_mode,
            camera: rebuild_camera(spec, viewport),
            orbit: OrbitControls::new(orbit_mode, CAMERA_Z),
        }
    }

    pub fn camera(&self) -> &CameraHandle {
        &self.camera
    }

    pub fn orbit(&self) -> &OrbitControls {
        &self.orbit
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_kind(&mut self, kind: &str) {
        let spec = CameraSpec::from_kind(kind, self.fov_deg);
        if spec.kind_name() == self.kind.kind_name() {
            return;
        }
        log::info!("[camera] switching to {}", spec.kind_name());
        self.kind = spec;
        self.camera = rebuild_camera(spec, self.viewport);
        self.orbit = OrbitControls::new(self.orbit_mode, CAMERA_Z);
    }

    /// Remembered for orthographic cameras so switching back restores it.
    pub fn set_fov(&mut self, fov_deg: f32) {
        self.fov_deg = fov_deg;
        if let CameraSpec::Perspective { .. } = self.kind {
            self.kind = CameraSpec::Perspective { fov_deg };
            self.camera.spec = self.kind;
            apply_projection(&mut self.camera, self.viewport);
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        apply_projection(&mut self.camera, viewport);
    }

    pub fn drag(&mut self, dx_px: f32, dy_px: f32) {
        self.orbit.drag(dx_px, dy_px);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.orbit.eye(), Vec3::ZERO, Vec3::Y)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.camera.projection_matrix() * self.view_matrix()
    }
}
