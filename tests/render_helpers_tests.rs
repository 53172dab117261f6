// Host-side tests for the surface setup helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod helpers {
    include!("../src/render/helpers.rs");
}

use helpers::*;
use wgpu::{CompositeAlphaMode, TextureFormat};

#[test]
fn premultiplied_alpha_is_preferred() {
    let modes = [CompositeAlphaMode::Opaque, CompositeAlphaMode::PreMultiplied];
    assert_eq!(pick_alpha_mode(&modes), CompositeAlphaMode::PreMultiplied);
    assert_eq!(pick_alpha_mode(&[CompositeAlphaMode::Opaque]), CompositeAlphaMode::Opaque);
    assert_eq!(pick_alpha_mode(&[]), CompositeAlphaMode::Auto);
}

#[test]
fn background_is_transparent_when_the_surface_blends() {
    let color1 = [0.97, 0.96, 0.95, 1.0];
    assert_eq!(
        clear_color(CompositeAlphaMode::PreMultiplied, color1),
        wgpu::Color::TRANSPARENT
    );
    let opaque = clear_color(CompositeAlphaMode::Opaque, color1);
    assert_eq!(opaque.a, 1.0);
    assert!((opaque.r - 0.97).abs() < 1e-6);
    assert!((opaque.b - 0.95).abs() < 1e-6);
}

#[test]
fn linear_surface_formats_are_preferred() {
    let formats = [TextureFormat::Bgra8UnormSrgb, TextureFormat::Bgra8Unorm];
    assert_eq!(pick_surface_format(&formats), Some(TextureFormat::Bgra8Unorm));
    assert_eq!(
        pick_surface_format(&[TextureFormat::Rgba16Float]),
        Some(TextureFormat::Rgba16Float)
    );
    assert_eq!(pick_surface_format(&[]), None);
}
