// Browser-side constants: DOM ids, asset paths, render tuning.

// DOM contract with index.html
pub const CANVAS_ID: &str = "scene-canvas";
pub const START_OVERLAY_ID: &str = "start-overlay";
pub const START_BUTTON_ID: &str = "start-button";
pub const CHARACTER_BUTTON_SELECTOR: &str = ".character-btn";
pub const CHARACTER_DATA_ATTR: &str = "data-character";

// Scene clear color (sky behind the backdrop)
pub const CLEAR_R: f64 = 0.84;
pub const CLEAR_G: f64 = 0.88;
pub const CLEAR_B: f64 = 0.92;

// Audio assets
pub const AMBIENCE_SRC: &str = "sounds/ambience.mp3";
pub const REVEAL_SRC: &str = "sounds/reveal.mp3";
pub const AMBIENCE_VOLUME: f64 = 0.35;
pub const REVEAL_VOLUME: f64 = 0.8;

// Cap the backing-store scale; full DPR is wasted on a soft painted scene
pub const MAX_PIXEL_RATIO: f64 = 2.0;
