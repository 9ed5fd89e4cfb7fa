// Shared interaction/camera tuning constants used by the pure core.

// Progress thresholds: a step counts as open above OPEN_THRESHOLD and
// closed below CLOSED_THRESHOLD.
pub const OPEN_THRESHOLD: f32 = 0.98;
pub const CLOSED_THRESHOLD: f32 = 0.02;

// Auto-rewind speed while deactivating or switching characters
// (progress units per second)
pub const AUTO_CLOSE_SPEED: f32 = 2.0;

// Pull-up snap: arm within this distance of a bound, then traverse at
// SNAP_SPEED (full 0..1 range in 0.25 s)
pub const SNAP_THRESHOLD: f32 = 0.20;
pub const SNAP_SPEED: f32 = 4.0;

// Drag feel
pub const DRAG_SMOOTH_DESKTOP: f32 = 0.3; // per-move lerp toward the raw target
pub const DRAG_SMOOTH_TOUCH: f32 = 0.4;
pub const TOUCH_DRAG_SCALE: f32 = 0.6; // smaller gesture range on touch devices
pub const DEFAULT_DRAG_PIXELS_FOR_FULL: f32 = 300.0;

// Curtain: movement needed from the drag-start progress before the scrub
// sheet takes over from the idle loop
pub const CURTAIN_DRAG_EPSILON: f32 = 0.001;

// Threshold used when hunting for the step to rewind
pub const REWIND_EPSILON: f32 = 0.001;

// Camera target depths (world z)
pub const DEFAULT_TARGET_Z_DESKTOP: f32 = 17.5;
pub const DEFAULT_TARGET_Z_TOUCH: f32 = 16.5;
pub const ZOOMED_TARGET_Z_DESKTOP: f32 = 17.1;
pub const ZOOMED_TARGET_Z_TOUCH: f32 = 15.8;
pub const ZOOM_DONE_EPSILON: f32 = 0.1;

// Camera motion (per-frame factors at the 60 Hz reference rate,
// dt-corrected in CameraRig::tick)
pub const INTRO_SPEED_DESKTOP: f32 = 0.005;
pub const INTRO_SPEED_TOUCH: f32 = 0.004;
pub const ZOOM_SMOOTH_FACTOR: f32 = 0.05;
pub const LOOK_SMOOTH_FACTOR: f32 = 0.08;
pub const SHAKE_DECAY: f32 = 0.93;

// Projection shared by rendering and picking
pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;

// Wind sway on vegetation planes
pub const SWAY_AMPLITUDE: f32 = 0.04;
pub const SWAY_RATE: f32 = 0.5;
