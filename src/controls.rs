// What each parameter looks like in the tuning panel, independent of the DOM.

use orb_core::color::parse_css_color;
use orb_core::{Domain, ParamValue, Parameter};

#[derive(Clone, Debug, PartialEq)]
pub enum ControlSpec {
    Range { min: f32, max: f32, step: f32 },
    Color,
    Select(&'static [&'static str]),
}

impl ControlSpec {
    pub fn for_parameter(param: &Parameter, fallback_steps: f32) -> Self {
        match param.domain {
            Domain::Range { min, max, step } => ControlSpec::Range {
                min,
                max,
                step: step.unwrap_or_else(|| default_step(min, max, fallback_steps)),
            },
            Domain::Color => ControlSpec::Color,
            Domain::Choices(choices) => ControlSpec::Select(choices),
        }
    }

    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            ControlSpec::Range { .. } => Some("range"),
            ControlSpec::Color => Some("color"),
            ControlSpec::Select(_) => None,
        }
    }

    /// Reads a control's raw string back into a parameter value.
    pub fn parse(&self, raw: &str) -> Option<ParamValue> {
        match self {
            ControlSpec::Range { .. } => raw.trim().parse::<f32>().ok().map(ParamValue::Number),
            ControlSpec::Color => Some(ParamValue::Color(raw.trim().to_string())),
            ControlSpec::Select(_) => Some(ParamValue::Choice(raw.to_string())),
        }
    }
}

#[inline]
fn default_step(min: f32, max: f32, steps: f32) -> f32 {
    let span = (max - min).abs();
    if span > 0.0 && steps > 0.0 {
        span / steps
    } else {
        1.0
    }
}

/// The string a control shows for a value. Colors are normalized to
/// `#rrggbb` because `<input type=color>` accepts nothing else.
pub fn display_value(value: &ParamValue) -> String {
    match value {
        ParamValue::Number(v) => v.to_string(),
        ParamValue::Color(s) => parse_css_color(s)
            .map(|c| c.to_css_hex())
            .unwrap_or_else(|_| "#000000".to_string()),
        ParamValue::Choice(s) => s.clone(),
    }
}
