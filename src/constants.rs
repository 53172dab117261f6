// Front-end constants: DOM hooks, panel layout and render setup.

// DOM
pub const CANVAS_ID: &str = "canvas";
pub const VARIANT_ATTR: &str = "data-variant"; // on the canvas; showcase | reactive | studio
pub const PANEL_ID: &str = "orb-panel";
pub const PANEL_CLASS: &str = "orb-panel";
pub const PANEL_ROW_CLASS: &str = "orb-panel__row";
pub const HIDDEN_CLASS: &str = "is-hidden";
pub const PARAM_ATTR: &str = "data-param"; // on each control, names its parameter

// Panel controls
pub const RANGE_FALLBACK_STEPS: f32 = 1000.0; // slider resolution when a range declares no step
pub const CAMERA_KIND_PARAM: &str = "cameraType";
pub const FOV_PARAM: &str = "fov";

// Rendering
pub const SURFACE_FRAME_LATENCY: u32 = 2;
pub const MIN_BACKING_PX: u32 = 1;
