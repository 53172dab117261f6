use crate::constants::{ORBIT_POLAR_MARGIN, ORBIT_RADIANS_PER_PX};
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

/// How far the user may orbit the camera around the orb.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OrbitMode {
    Disabled,
    /// Azimuth follows drags, polar angle stays at the given value.
    FixedPolar(f32),
    Free,
}

/// Spherical orbit around the origin. Polar angle is measured from +Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitControls {
    mode: OrbitMode,
    distance: f32,
    azimuth: f32,
    polar: f32,
}

impl OrbitControls {
    pub fn new(mode: OrbitMode, distance: f32) -> Self {
        let polar = match mode {
            OrbitMode::FixedPolar(p) => clamp_polar(p),
            _ => FRAC_PI_2,
        };
        Self {
            mode,
            distance,
            azimuth: 0.0,
            polar,
        }
    }

    pub fn mode(&self) -> OrbitMode {
        self.mode
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn drag(&mut self, dx_px: f32, dy_px: f32) {
        if !dx_px.is_finite() || !dy_px.is_finite() {
            return;
        }
        match self.mode {
            OrbitMode::Disabled => {}
            OrbitMode::FixedPolar(_) => {
                self.azimuth -= dx_px * ORBIT_RADIANS_PER_PX;
            }
            OrbitMode::Free => {
                self.azimuth -= dx_px * ORBIT_RADIANS_PER_PX;
                self.polar = clamp_polar(self.polar - dy_px * ORBIT_RADIANS_PER_PX);
            }
        }
    }

    /// Eye position; at rest this is (0, 0, distance).
    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        Vec3::new(sp * sa, cp, sp * ca) * self.distance
    }
}

#[inline]
fn clamp_polar(p: f32) -> f32 {
    p.clamp(ORBIT_POLAR_MARGIN, PI - ORBIT_POLAR_MARGIN)
}
