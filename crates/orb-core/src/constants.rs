// Shared tuning constants for the parameter pipeline and scene layout.

// Pointer smoothing
pub const POINTER_FOLLOW_FACTOR: f32 = 0.002; // ease toward the cursor per move event
pub const POINTER_REST_FACTOR: f32 = 0.001; // ease toward (0,0) per tick

// Camera
pub const CAMERA_Z: f32 = 3.3; // eye distance from the orb
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const DEFAULT_FOV_DEG: f32 = 63.0;
pub const ORTHO_HALF_HEIGHT: f32 = 2.0; // top = +2, bottom = -2

// Orbit controls
pub const ORBIT_RADIANS_PER_PX: f32 = 0.005;
pub const ORBIT_POLAR_MARGIN: f32 = 0.05; // keep away from the poles
pub const REACTIVE_POLAR_ANGLE: f32 = std::f32::consts::FRAC_PI_2;

// Geometry
pub const SPHERE_RADIUS: f32 = 2.0;
pub const SPHERE_SEGMENTS: u32 = 64;
pub const SPHERE_FLATTEN_Z: f32 = 0.01; // squash the sphere into a disc
pub const RING_RADIUS: f32 = 2.5;
pub const RING_TUBE: f32 = 0.5;
pub const RING_RADIAL_SEGMENTS: u32 = 16;
pub const RING_TUBULAR_SEGMENTS: u32 = 100;

// Initial viewport before the canvas reports its size
pub const DEFAULT_VIEWPORT: (f32, f32) = (800.0, 600.0);
