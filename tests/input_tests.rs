// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn drag_reports_deltas_for_its_own_pointer() {
    let mut drag = DragState::default();
    assert_eq!(drag.update(1, 10.0, 10.0), None);

    drag.begin(1, 100.0, 50.0);
    assert_eq!(drag.update(1, 110.0, 45.0), Some((10.0, -5.0)));
    assert_eq!(drag.update(1, 110.0, 45.0), Some((0.0, 0.0)));
    // A second finger does not steer the orbit.
    assert_eq!(drag.update(2, 500.0, 500.0), None);

    assert!(!drag.end(2));
    assert!(drag.end(1));
    assert!(!drag.active);
    assert_eq!(drag.update(1, 120.0, 40.0), None);
}

#[test]
fn backing_size_scales_by_device_pixel_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 1.0, 1), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, 2.0, 1), (1600, 1200));
    assert_eq!(backing_size(333.3, 100.0, 1.5, 1), (500, 150));
}

#[test]
fn backing_size_never_reaches_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0, 1), (1, 1));
    assert_eq!(backing_size(f64::NAN, 10.0, 1.0, 1), (1, 10));
    assert_eq!(backing_size(-5.0, 10.0, 1.0, 4), (4, 10));
}
