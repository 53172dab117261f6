/// Easing curves the shader knows how to apply to normalized time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    SineIn,
}

pub const EASING_CHOICES: &[&str] = &["linear", "sineIn"];

/// Code used by unrecognized names. The shader treats it as a quadratic ease.
pub const EASING_FALLBACK_CODE: i32 = 1;

impl Easing {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Easing::Linear),
            "sineIn" => Some(Easing::SineIn),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::SineIn => "sineIn",
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Easing::Linear => 0,
            Easing::SineIn => 4,
        }
    }
}

#[inline]
pub fn easing_code(name: &str) -> i32 {
    Easing::from_name(name)
        .map(Easing::code)
        .unwrap_or(EASING_FALLBACK_CODE)
}
