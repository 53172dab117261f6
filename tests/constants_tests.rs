// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn dom_hooks_are_single_tokens() {
    let hooks = [CANVAS_ID, PANEL_ID, PANEL_CLASS, PANEL_ROW_CLASS, HIDDEN_CLASS];
    for hook in hooks {
        assert!(!hook.is_empty());
        assert!(!hook.contains(char::is_whitespace), "{hook} must be a single token");
    }
    assert_ne!(CANVAS_ID, PANEL_ID);
    assert!(PANEL_ROW_CLASS.starts_with(PANEL_CLASS));
    assert!(VARIANT_ATTR.starts_with("data-"));
    assert!(PARAM_ATTR.starts_with("data-"));
}

#[test]
fn panel_hooks_name_real_parameters() {
    let store = orb_core::ParameterStore::with_defaults();
    assert!(store.get(CAMERA_KIND_PARAM).is_some());
    assert!(store.get(FOV_PARAM).is_some());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn render_setup_is_sane() {
    assert!(RANGE_FALLBACK_STEPS >= 10.0);
    assert!(SURFACE_FRAME_LATENCY >= 1);
    assert!(MIN_BACKING_PX >= 1);
}
