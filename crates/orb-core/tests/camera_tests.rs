// Host-side tests for camera rebuilds, projection updates and orbit controls.

use glam::Vec3;
use orb_core::camera::{
    apply_projection, projection_for, rebuild_camera, CameraRig, CameraSpec, Projection,
    Viewport, ORTHOGRAPHIC_CAMERA, PERSPECTIVE_CAMERA,
};
use orb_core::orbit::{OrbitControls, OrbitMode};

const PERSPECTIVE_63: CameraSpec = CameraSpec::Perspective { fov_deg: 63.0 };

fn vp() -> Viewport {
    Viewport::new(1920.0, 1080.0)
}

#[test]
fn kind_names_round_trip() {
    let p = CameraSpec::from_kind(PERSPECTIVE_CAMERA, 45.0);
    assert_eq!(p, CameraSpec::Perspective { fov_deg: 45.0 });
    assert_eq!(p.kind_name(), PERSPECTIVE_CAMERA);
    let o = CameraSpec::from_kind(ORTHOGRAPHIC_CAMERA, 45.0);
    assert_eq!(o, CameraSpec::Orthographic);
    assert_eq!(o.kind_name(), ORTHOGRAPHIC_CAMERA);
    assert_eq!(
        CameraSpec::from_kind("FisheyeCamera", 45.0),
        CameraSpec::Perspective { fov_deg: 45.0 }
    );
}

#[test]
fn degenerate_viewports_use_unit_aspect() {
    assert_eq!(Viewport::new(0.0, 100.0).aspect(), 1.0);
    assert_eq!(Viewport::new(100.0, 0.0).aspect(), 1.0);
    assert_eq!(Viewport::new(200.0, 100.0).aspect(), 2.0);
}

#[test]
fn rebuild_produces_the_requested_projection() {
    let cam = rebuild_camera(PERSPECTIVE_63, vp());
    assert!(matches!(cam.projection, Projection::Perspective { .. }));
    assert_eq!(cam.projection_matrix(), cam.projection.matrix());

    let cam = rebuild_camera(CameraSpec::Orthographic, vp());
    assert_eq!(cam.projection, projection_for(CameraSpec::Orthographic, vp()));
    assert_eq!(cam.projection_matrix(), cam.projection.matrix());
}

#[test]
fn apply_projection_keeps_matrix_in_step() {
    let mut cam = rebuild_camera(PERSPECTIVE_63, Viewport::new(1.0, 1.0));
    let before = cam.projection_matrix();
    apply_projection(&mut cam, vp());
    assert_ne!(cam.projection_matrix(), before);
    assert_eq!(cam.projection_matrix(), cam.projection.matrix());
    match cam.projection {
        Projection::Perspective { aspect, near, far, .. } => {
            assert!((aspect - 1920.0 / 1080.0).abs() < 1e-6);
            assert_eq!((near, far), (0.1, 1000.0));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn switching_kinds_preserves_the_chosen_fov() {
    let mut rig = CameraRig::new(PERSPECTIVE_63, vp(), OrbitMode::Free);
    rig.set_kind(ORTHOGRAPHIC_CAMERA);
    assert_eq!(rig.camera().spec, CameraSpec::Orthographic);
    assert!(matches!(rig.camera().projection, Projection::Orthographic { .. }));

    // Edited while orthographic: remembered, not applied.
    rig.set_fov(40.0);
    assert_eq!(rig.camera().spec, CameraSpec::Orthographic);

    rig.set_kind(PERSPECTIVE_CAMERA);
    assert_eq!(rig.camera().spec, CameraSpec::Perspective { fov_deg: 40.0 });
    assert_eq!(rig.camera().projection_matrix(), rig.camera().projection.matrix());
}

#[test]
fn switching_kinds_resets_the_orbit() {
    let mut rig = CameraRig::new(PERSPECTIVE_63, vp(), OrbitMode::Free);
    rig.drag(120.0, 40.0);
    assert_ne!(rig.orbit().azimuth(), 0.0);
    rig.set_kind(ORTHOGRAPHIC_CAMERA);
    assert_eq!(rig.orbit().azimuth(), 0.0);
    assert_eq!(rig.orbit().mode(), OrbitMode::Free);
}

#[test]
fn fov_edits_reproject_perspective_cameras() {
    let mut rig = CameraRig::new(PERSPECTIVE_63, vp(), OrbitMode::Disabled);
    let before = rig.view_proj();
    rig.set_fov(30.0);
    assert_ne!(rig.view_proj(), before);
    match rig.camera().projection {
        Projection::Perspective { fov_deg, .. } => assert_eq!(fov_deg, 30.0),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn orbit_at_rest_looks_down_the_z_axis() {
    let orbit = OrbitControls::new(OrbitMode::Free, 3.3);
    assert!((orbit.eye() - Vec3::new(0.0, 0.0, 3.3)).length() < 1e-5);
}

#[test]
fn disabled_orbit_ignores_drags() {
    let mut orbit = OrbitControls::new(OrbitMode::Disabled, 3.3);
    let eye = orbit.eye();
    orbit.drag(300.0, -200.0);
    assert_eq!(orbit.eye(), eye);
}

#[test]
fn fixed_polar_orbit_only_turns_azimuth() {
    let mut orbit = OrbitControls::new(OrbitMode::FixedPolar(std::f32::consts::FRAC_PI_2), 3.3);
    let polar = orbit.polar();
    orbit.drag(100.0, 100.0);
    assert_eq!(orbit.polar(), polar);
    assert!((orbit.azimuth() + 0.5).abs() < 1e-6);
    assert!((orbit.eye().length() - 3.3).abs() < 1e-5);
}

#[test]
fn free_orbit_stays_off_the_poles() {
    let mut orbit = OrbitControls::new(OrbitMode::Free, 3.3);
    orbit.drag(0.0, 100_000.0);
    assert!(orbit.polar() > 0.0);
    orbit.drag(0.0, -100_000.0);
    assert!(orbit.polar() < std::f32::consts::PI);
    orbit.drag(f32::NAN, 1.0);
    assert!(orbit.polar().is_finite());
}
