// Host-side tests for the orb and ring geometry.

use orb_core::mesh::{orb_mesh, ring_mesh, torus, uv_sphere};

#[test]
fn sphere_grid_and_index_counts() {
    let m = uv_sphere(2.0, 64, 64);
    assert_eq!(m.vertices.len(), 65 * 65);
    // Pole rows contribute one triangle per quad.
    assert_eq!(m.indices.len(), 64 * 62 * 6 + 2 * 64 * 3);
    assert_eq!(m.index_count() as usize, m.indices.len());
    let max = m.vertices.len() as u32;
    assert!(m.indices.iter().all(|&i| i < max));
}

#[test]
fn sphere_vertices_sit_on_the_radius() {
    let m = uv_sphere(1.5, 12, 8);
    for v in &m.vertices {
        let [x, y, z] = v.position;
        assert!(((x * x + y * y + z * z).sqrt() - 1.5).abs() < 1e-5);
        assert!((0.0..=1.0).contains(&v.uv[0]) && (0.0..=1.0).contains(&v.uv[1]));
    }
}

#[test]
fn orb_is_flattened_into_a_disc() {
    let m = orb_mesh();
    let max_z = m
        .vertices
        .iter()
        .map(|v| v.position[2].abs())
        .fold(0.0f32, f32::max);
    let max_x = m
        .vertices
        .iter()
        .map(|v| v.position[0].abs())
        .fold(0.0f32, f32::max);
    assert!(max_z <= 0.02 + 1e-5, "{max_z}");
    assert!((max_x - 2.0).abs() < 1e-3, "{max_x}");
    for v in &m.vertices {
        let [nx, ny, nz] = v.normal;
        let len = (nx * nx + ny * ny + nz * nz).sqrt();
        assert!(len == 0.0 || (len - 1.0).abs() < 1e-4);
    }
}

#[test]
fn torus_counts_and_extent() {
    let m = torus(2.5, 0.5, 16, 100);
    assert_eq!(m.vertices.len(), 17 * 101);
    assert_eq!(m.indices.len(), 16 * 100 * 6);
    for v in &m.vertices {
        let [x, y, _] = v.position;
        let r = (x * x + y * y).sqrt();
        assert!(r >= 2.0 - 1e-4 && r <= 3.0 + 1e-4, "{r}");
    }
    assert_eq!(ring_mesh().indices.len(), m.indices.len());
}
