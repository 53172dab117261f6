// Host-side tests for variant selection.

use orb_core::orbit::OrbitMode;
use orb_core::{SceneConfig, Variant, VariantParseError};

#[test]
fn variant_names_parse_case_insensitively() {
    assert_eq!("showcase".parse::<Variant>(), Ok(Variant::Showcase));
    assert_eq!(" Reactive ".parse::<Variant>(), Ok(Variant::Reactive));
    assert_eq!("STUDIO".parse::<Variant>(), Ok(Variant::Studio));
    assert_eq!("".parse::<Variant>(), Ok(Variant::Showcase));
    assert_eq!(
        "gallery".parse::<Variant>(),
        Err(VariantParseError("gallery".into()))
    );
    for v in [Variant::Showcase, Variant::Reactive, Variant::Studio] {
        assert_eq!(v.name().parse::<Variant>(), Ok(v));
    }
}

#[test]
fn variants_differ_only_in_controls() {
    let showcase = SceneConfig::for_variant(Variant::Showcase);
    assert_eq!(showcase.orbit, OrbitMode::Disabled);
    assert!(!showcase.mouse && !showcase.panel);

    let reactive = SceneConfig::for_variant(Variant::Reactive);
    assert!(matches!(reactive.orbit, OrbitMode::FixedPolar(_)));
    assert!(reactive.mouse && !reactive.panel);

    let studio = SceneConfig::for_variant(Variant::Studio);
    assert_eq!(studio.orbit, OrbitMode::Free);
    assert!(studio.mouse && studio.panel);
}

#[test]
fn bad_attributes_fall_back_to_the_default() {
    assert_eq!(SceneConfig::from_attr(None), SceneConfig::default());
    assert_eq!(SceneConfig::from_attr(Some("nope")), SceneConfig::default());
    assert_eq!(SceneConfig::from_attr(Some("studio")).variant, Variant::Studio);
}
