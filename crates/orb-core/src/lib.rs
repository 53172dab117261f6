//! Animation-parameter pipeline for the harmonic orb.
//!
//! Platform independent: the web front-end feeds DOM events in and
//! implements [`Renderer`]; everything here also runs under host tests.

pub mod camera;
pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod driver;
pub mod easing;
pub mod error;
pub mod mesh;
pub mod orbit;
pub mod params;
pub mod pointer;
pub mod scene;
pub mod uniforms;

pub use camera::{apply_projection, rebuild_camera, CameraHandle, CameraRig, CameraSpec, Viewport};
pub use clock::ClockState;
pub use color::Rgb;
pub use config::{SceneConfig, Variant};
pub use driver::{DriverState, FrameDriver, Renderer};
pub use error::{ColorParseError, ValidationError, VariantParseError};
pub use params::{Domain, ParamKind, ParamValue, Parameter, ParameterStore};
pub use pointer::{InteractionAdapter, PointerState, ViewportRect};
pub use scene::Scene;
pub use uniforms::{ShaderUniforms, UniformBinder, UniformBlock, UniformSlot, UniformValue};
