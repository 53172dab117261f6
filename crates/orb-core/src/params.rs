//! Named animation parameters with validated writes and change listeners.
//!
//! The store is the single source of truth for everything the tuning panel
//! can edit. Writes are checked against the parameter's declared domain;
//! a rejected write leaves the previous value in place and notifies nobody.
//! Listeners run synchronously inside [`ParameterStore::set`], in the order
//! they were registered.

use crate::camera::CAMERA_KINDS;
use crate::color::parse_css_color;
use crate::constants::DEFAULT_FOV_DEG;
use crate::easing::EASING_CHOICES;
use crate::error::ValidationError;
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_2, TAU};

#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Number(f32),
    Color(String),
    Choice(String),
}

impl ParamValue {
    pub fn as_number(&self) -> Option<f32> {
        match self {
            ParamValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Color(s) | ParamValue::Choice(s) => Some(s),
            ParamValue::Number(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    Number,
    Color,
    Enum,
}

impl ParamKind {
    fn label(self) -> &'static str {
        match self {
            ParamKind::Number => "number",
            ParamKind::Color => "color",
            ParamKind::Enum => "choice",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Domain {
    /// Inclusive range. `step` is a hint for slider controls and is not enforced.
    Range {
        min: f32,
        max: f32,
        step: Option<f32>,
    },
    Color,
    Choices(&'static [&'static str]),
}

impl Domain {
    pub fn kind(&self) -> ParamKind {
        match self {
            Domain::Range { .. } => ParamKind::Number,
            Domain::Color => ParamKind::Color,
            Domain::Choices(_) => ParamKind::Enum,
        }
    }

    fn validate(&self, name: &str, value: &ParamValue) -> Result<(), ValidationError> {
        let mismatch = || ValidationError::KindMismatch {
            name: name.to_string(),
            expected: self.kind().label(),
        };
        match (self, value) {
            (Domain::Range { min, max, .. }, ParamValue::Number(v)) => {
                if !v.is_finite() {
                    return Err(ValidationError::NotFinite {
                        name: name.to_string(),
                    });
                }
                if *v < *min || *v > *max {
                    return Err(ValidationError::OutOfRange {
                        name: name.to_string(),
                        value: *v,
                        min: *min,
                        max: *max,
                    });
                }
                Ok(())
            }
            (Domain::Color, ParamValue::Color(s)) => parse_css_color(s)
                .map(|_| ())
                .map_err(|source| ValidationError::InvalidColor {
                    name: name.to_string(),
                    source,
                }),
            (Domain::Choices(choices), ParamValue::Choice(s)) => {
                if choices.contains(&s.as_str()) {
                    Ok(())
                } else {
                    Err(ValidationError::NotAChoice {
                        name: name.to_string(),
                        value: s.clone(),
                    })
                }
            }
            _ => Err(mismatch()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub value: ParamValue,
    pub domain: Domain,
}

impl Parameter {
    pub fn number(name: &str, value: f32, min: f32, max: f32) -> Self {
        Self {
            name: name.to_string(),
            value: ParamValue::Number(value),
            domain: Domain::Range {
                min,
                max,
                step: None,
            },
        }
    }

    pub fn stepped(name: &str, value: f32, min: f32, max: f32, step: f32) -> Self {
        Self {
            name: name.to_string(),
            value: ParamValue::Number(value),
            domain: Domain::Range {
                min,
                max,
                step: Some(step),
            },
        }
    }

    pub fn color(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: ParamValue::Color(value.to_string()),
            domain: Domain::Color,
        }
    }

    pub fn choice(name: &str, value: &str, choices: &'static [&'static str]) -> Self {
        Self {
            name: name.to_string(),
            value: ParamValue::Choice(value.to_string()),
            domain: Domain::Choices(choices),
        }
    }

    pub fn kind(&self) -> ParamKind {
        self.domain.kind()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type Listener = Box<dyn FnMut(&ParamValue)>;

struct Entry {
    param: Parameter,
    listeners: SmallVec<[(ListenerId, Listener); 2]>,
}

#[derive(Default)]
pub struct ParameterStore {
    entries: Vec<Entry>,
    index: FnvHashMap<String, usize>,
    next_listener: u64,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The parameter table shared by every variant.
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        for p in default_parameters() {
            if let Err(e) = store.define(p) {
                // Only reachable if the table above is edited inconsistently.
                log::error!("[params] bad default: {e}");
            }
        }
        store
    }

    pub fn define(&mut self, param: Parameter) -> Result<(), ValidationError> {
        if self.index.contains_key(&param.name) {
            return Err(ValidationError::DuplicateParameter(param.name));
        }
        param.domain.validate(&param.name, &param.value)?;
        self.index.insert(param.name.clone(), self.entries.len());
        self.entries.push(Entry {
            param,
            listeners: SmallVec::new(),
        });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.parameter(name).map(|p| &p.value)
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.index.get(name).map(|&i| &self.entries[i].param)
    }

    pub fn number(&self, name: &str) -> Option<f32> {
        self.get(name).and_then(ParamValue::as_number)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParamValue::as_str)
    }

    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<(), ValidationError> {
        let idx = *self
            .index
            .get(name)
            .ok_or_else(|| ValidationError::UnknownParameter(name.to_string()))?;
        let Entry { param, listeners } = &mut self.entries[idx];
        param.domain.validate(name, &value)?;
        param.value = value;
        for (_, listener) in listeners.iter_mut() {
            listener(&param.value);
        }
        Ok(())
    }

    pub fn on_change(
        &mut self,
        name: &str,
        listener: Listener,
    ) -> Result<ListenerId, ValidationError> {
        let idx = *self
            .index
            .get(name)
            .ok_or_else(|| ValidationError::UnknownParameter(name.to_string()))?;
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.entries[idx].listeners.push((id, listener));
        Ok(id)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        for entry in &mut self.entries {
            if let Some(pos) = entry.listeners.iter().position(|(lid, _)| *lid == id) {
                drop(entry.listeners.remove(pos));
                return true;
            }
        }
        false
    }

    pub fn listener_count(&self, name: &str) -> usize {
        self.index
            .get(name)
            .map(|&i| self.entries[i].listeners.len())
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.entries.iter().map(|e| &e.param)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn default_parameters() -> Vec<Parameter> {
    vec![
        Parameter::number("timeSpeed", 0.0042, 0.001, 0.05),
        Parameter::stepped("order", 2.0, 1.0, 10.0, 1.0),
        Parameter::stepped("degree", 4.0, 1.0, 10.0, 1.0),
        Parameter::number("lineWidth", 1.0, 0.001, 5.0),
        Parameter::stepped("lineCount", 23.0, 1.0, 100.0, 1.0),
        Parameter::stepped("lineMultiplier", 15.0, 1.0, 100.0, 1.0),
        Parameter::color("color1", "#f8f6f3"),
        Parameter::color("color2", "#000"),
        Parameter::choice("easing", "linear", EASING_CHOICES),
        Parameter::choice("cameraType", "PerspectiveCamera", CAMERA_KINDS),
        Parameter::number("radius", 0.8, 0.1, 5.0),
        Parameter::number("rotation", FRAC_PI_2, 0.0, TAU),
        Parameter::stepped("offsetX", 0.0, 0.0, 100.0, 0.01),
        Parameter::number("offsetY", -79.4, -100.0, 100.0),
        Parameter::stepped("enableMouse", 0.0, 0.0, 1.0, 1.0),
        Parameter::number("fov", DEFAULT_FOV_DEG, 0.0, 180.0),
    ]
}
