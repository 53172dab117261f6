//! Geometry for the orb (a UV sphere squashed into a disc) and its ring.

use crate::constants::{
    RING_RADIAL_SEGMENTS, RING_RADIUS, RING_TUBE, RING_TUBULAR_SEGMENTS, SPHERE_FLATTEN_Z,
    SPHERE_RADIUS, SPHERE_SEGMENTS,
};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Scales positions per axis and renormalizes normals accordingly.
    pub fn scaled(mut self, scale: Vec3) -> Self {
        let inv = Vec3::new(1.0 / scale.x, 1.0 / scale.y, 1.0 / scale.z);
        for v in &mut self.vertices {
            v.position = (Vec3::from(v.position) * scale).to_array();
            v.normal = (Vec3::from(v.normal) * inv).normalize_or_zero().to_array();
        }
        self
    }
}

/// Grid of `(segments + 1)^2` vertices; seams and poles are duplicated so uvs stay continuous.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let theta = v * PI;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let phi = u * TAU;
            let n = Vec3::new(-phi.cos() * theta.sin(), theta.cos(), phi.sin() * theta.sin());
            vertices.push(Vertex {
                position: (n * radius).to_array(),
                normal: n.to_array(),
                uv: [u, 1.0 - v],
            });
        }
    }
    let row = ws + 1;
    let mut indices = Vec::with_capacity((ws * hs * 6) as usize);
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    Mesh { vertices, indices }
}

pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Mesh {
    let rs = radial_segments.max(3);
    let ts = tubular_segments.max(3);
    let mut vertices = Vec::with_capacity(((rs + 1) * (ts + 1)) as usize);
    for j in 0..=rs {
        let v = j as f32 / rs as f32 * TAU;
        for i in 0..=ts {
            let u = i as f32 / ts as f32 * TAU;
            let position = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            vertices.push(Vertex {
                position: position.to_array(),
                normal: (position - center).normalize_or_zero().to_array(),
                uv: [i as f32 / ts as f32, j as f32 / rs as f32],
            });
        }
    }
    let row = ts + 1;
    let mut indices = Vec::with_capacity((rs * ts * 6) as usize);
    for j in 1..=rs {
        for i in 1..=ts {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    Mesh { vertices, indices }
}

/// The orb as the page draws it: a sphere flattened along z.
pub fn orb_mesh() -> Mesh {
    uv_sphere(SPHERE_RADIUS, SPHERE_SEGMENTS, SPHERE_SEGMENTS)
        .scaled(Vec3::new(1.0, 1.0, SPHERE_FLATTEN_Z))
}

pub fn ring_mesh() -> Mesh {
    torus(
        RING_RADIUS,
        RING_TUBE,
        RING_RADIAL_SEGMENTS,
        RING_TUBULAR_SEGMENTS,
    )
}
