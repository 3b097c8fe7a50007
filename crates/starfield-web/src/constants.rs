// DOM hooks and front-end tuning for the web starfield

// Host element the canvas is appended into
pub const CONTAINER_ID: &str = "canvas-container";
pub const CANVAS_STYLE: &str = "display:block;width:100%;height:100%";

// Sensor API names looked up on the global object
pub const ORIENTATION_EVENT_CTOR: &str = "DeviceOrientationEvent";
pub const REQUEST_PERMISSION_FN: &str = "requestPermission";

// Speed gap treated as settled when logging warp transitions
pub const WARP_SETTLE_EPSILON: f32 = 0.01;

// Frame-rate diagnostics cadence (seconds)
pub const FPS_LOG_INTERVAL_SEC: f32 = 5.0;

// Transparent clear so the page background shows through
pub const CLEAR_RGBA: [f64; 4] = [0.0, 0.0, 0.0, 0.0];

// `document.readyState` once the window `load` event has already fired
pub const READY_STATE_COMPLETE: &str = "complete";
