//! Pure scene logic, free of browser and GPU types. Everything in here is
//! driven through the [`stage::Stage`] trait and plain numbers, which keeps
//! it testable on the host.

pub mod camera;
pub mod characters;
pub mod config;
pub mod constants;
pub mod interactions;
pub mod sprite;
pub mod stage;
pub mod steps;
pub mod switcher;

pub use camera::CameraRig;
pub use characters::{BirdCycle, CharacterSet, BONES_NAME};
pub use interactions::{Interactions, Transition};
pub use stage::{PlaneId, SheetSpec, Stage};
pub use switcher::SwitchState;
