use crate::constants::REACTIVE_POLAR_ANGLE;
use crate::error::VariantParseError;
use crate::orbit::OrbitMode;
use std::str::FromStr;

/// Page flavours. They share the whole pipeline and differ only in camera
/// controls, pointer reactivity and whether the tuning panel is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Showcase,
    Reactive,
    Studio,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Showcase => "showcase",
            Variant::Reactive => "reactive",
            Variant::Studio => "studio",
        }
    }
}

impl FromStr for Variant {
    type Err = VariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "showcase" => Ok(Variant::Showcase),
            "reactive" => Ok(Variant::Reactive),
            "studio" => Ok(Variant::Studio),
            other => Err(VariantParseError(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub variant: Variant,
    pub orbit: OrbitMode,
    /// Pointer moves feed `uMouse`.
    pub mouse: bool,
    pub panel: bool,
}

impl SceneConfig {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Showcase => Self {
                variant,
                orbit: OrbitMode::Disabled,
                mouse: false,
                panel: false,
            },
            Variant::Reactive => Self {
                variant,
                orbit: OrbitMode::FixedPolar(REACTIVE_POLAR_ANGLE),
                mouse: true,
                panel: false,
            },
            Variant::Studio => Self {
                variant,
                orbit: OrbitMode::Free,
                mouse: true,
                panel: true,
            },
        }
    }

    /// Unknown names fall back to the default variant with a warning.
    pub fn from_attr(attr: Option<&str>) -> Self {
        let variant = match attr.map(str::parse::<Variant>) {
            None => Variant::default(),
            Some(Ok(v)) => v,
            Some(Err(e)) => {
                log::warn!("[config] {e}; using {}", Variant::default().name());
                Variant::default()
            }
        };
        Self::for_variant(variant)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}
