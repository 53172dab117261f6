// Host-side tests for panel control mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod controls {
    include!("../src/controls.rs");
}

use controls::*;
use orb_core::{ParamValue, Parameter, ParameterStore};

#[test]
fn every_parameter_gets_a_control() {
    let store = ParameterStore::with_defaults();
    for p in store.iter() {
        let spec = ControlSpec::for_parameter(p, 1000.0);
        match (&p.value, &spec) {
            (ParamValue::Number(_), ControlSpec::Range { min, max, step }) => {
                assert!(min < max, "{}", p.name);
                assert!(*step > 0.0, "{}", p.name);
                assert_eq!(spec.input_type(), Some("range"));
            }
            (ParamValue::Color(_), ControlSpec::Color) => {
                assert_eq!(spec.input_type(), Some("color"));
            }
            (ParamValue::Choice(c), ControlSpec::Select(choices)) => {
                assert!(choices.contains(&c.as_str()), "{}", p.name);
                assert_eq!(spec.input_type(), None);
            }
            other => panic!("{}: mismatched control {other:?}", p.name),
        }
    }
}

#[test]
fn declared_steps_are_kept_and_missing_ones_derived() {
    let stepped = Parameter::stepped("order", 2.0, 1.0, 10.0, 1.0);
    assert_eq!(
        ControlSpec::for_parameter(&stepped, 1000.0),
        ControlSpec::Range {
            min: 1.0,
            max: 10.0,
            step: 1.0
        }
    );
    let free = Parameter::number("radius", 0.8, 0.0, 5.0);
    match ControlSpec::for_parameter(&free, 1000.0) {
        ControlSpec::Range { step, .. } => assert!((step - 0.005).abs() < 1e-6),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn raw_control_values_parse_by_kind() {
    let range = ControlSpec::Range {
        min: 0.0,
        max: 1.0,
        step: 0.1,
    };
    assert_eq!(range.parse("0.5"), Some(ParamValue::Number(0.5)));
    assert_eq!(range.parse(" 1 "), Some(ParamValue::Number(1.0)));
    assert_eq!(range.parse("abc"), None);
    assert_eq!(
        ControlSpec::Color.parse("#00ff00"),
        Some(ParamValue::Color("#00ff00".into()))
    );
    assert_eq!(
        ControlSpec::Select(&["linear", "sineIn"]).parse("sineIn"),
        Some(ParamValue::Choice("sineIn".into()))
    );
}

#[test]
fn display_values_suit_html_inputs() {
    assert_eq!(display_value(&ParamValue::Number(23.0)), "23");
    assert_eq!(display_value(&ParamValue::Number(-79.4)), "-79.4");
    assert_eq!(display_value(&ParamValue::Color("#000".into())), "#000000");
    assert_eq!(display_value(&ParamValue::Color("#f8f6f3".into())), "#f8f6f3");
    assert_eq!(display_value(&ParamValue::Choice("linear".into())), "linear");
}
