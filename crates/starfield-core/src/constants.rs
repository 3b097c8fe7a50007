// Shared tuning constants for the starfield simulation and its renderer.

// Particle field
pub const PARTICLE_COUNT: usize = 6000;
pub const FIELD_EXTENT: f32 = 2000.0; // side of the bounding cube, centered on the origin

// Speed (world units per frame)
pub const NORMAL_SPEED: f32 = 2.0;
pub const WARP_SPEED: f32 = 40.0;
pub const SPEED_SMOOTHING: f32 = 0.02;

// Rotation follow
pub const ROTATION_SMOOTHING: f32 = 0.05;
pub const LOOK_SCALE: f32 = 0.0001; // raw look units -> radians

// Device orientation mapping
pub const ORIENTATION_AMPLIFICATION: f32 = 4.0;
pub const ORIENTATION_SCALE: f32 = 5.0; // brings tilt into the pointer's pixel range
pub const HOLDING_ANGLE_DEG: f32 = 45.0; // typical front/back tilt of a handheld device

// Visual state
pub const WARP_VISUAL_THRESHOLD: f32 = 5.0;
pub const RESTING_COLOR: [f32; 3] = [0.0, 240.0 / 255.0, 1.0]; // 0x00f0ff
pub const RESTING_OPACITY: f32 = 0.6;
pub const WARP_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const WARP_OPACITY: f32 = 0.8;
pub const POINT_SIZE: f32 = 2.0;

// Fog (exponential squared)
pub const FOG_COLOR: [f32; 3] = [5.0 / 255.0, 5.0 / 255.0, 5.0 / 255.0]; // 0x050505
pub const FOG_DENSITY: f32 = 0.002;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 2000.0;
pub const CAMERA_Z: f32 = 1000.0;
