// Shared harness for host-side tests.
// The main crate is wasm-only, so the pure scene-logic modules are included
// directly, mirroring their in-crate layout.

#![allow(dead_code)]

pub mod diorama {
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod sprite {
        include!("../../src/core/sprite.rs");
    }
    pub mod stage {
        include!("../../src/core/stage.rs");
    }
    pub mod steps {
        include!("../../src/core/steps.rs");
    }
    pub mod switcher {
        include!("../../src/core/switcher.rs");
    }
    pub mod camera {
        include!("../../src/core/camera.rs");
    }
    pub mod characters {
        include!("../../src/core/characters.rs");
    }
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod interactions {
        include!("../../src/core/interactions.rs");
    }
}

use self::diorama::stage::{resolve_name, PlaneId, SheetSpec, Stage};
use self::diorama::steps::{StepConfig, StepKind};
use glam::Vec3;

/// In-memory stage: records every mutation and serves scripted hit results.
pub struct MockStage {
    pub names: Vec<&'static str>,
    pub base_ys: Vec<f32>,
    pub xs: Vec<f32>,
    pub ys: Vec<f32>,
    pub sheets: Vec<&'static str>,
    pub frames: Vec<f32>,
    pub visible: Vec<bool>,
    /// Scripted per-plane hit distance for `hit`.
    pub hits: Vec<Option<f32>>,
}

impl MockStage {
    pub fn new(planes: &[(&'static str, f32)]) -> Self {
        let n = planes.len();
        Self {
            names: planes.iter().map(|p| p.0).collect(),
            base_ys: planes.iter().map(|p| p.1).collect(),
            xs: vec![0.0; n],
            ys: planes.iter().map(|p| p.1).collect(),
            sheets: vec![""; n],
            frames: vec![0.0; n],
            visible: vec![true; n],
            hits: vec![None; n],
        }
    }

    pub fn idx(&self, name: &str) -> usize {
        self.names
            .iter()
            .position(|n| *n == name)
            .unwrap_or_else(|| panic!("no plane {name}"))
    }

    pub fn sheet_of(&self, name: &str) -> &'static str {
        self.sheets[self.idx(name)]
    }

    pub fn y_of(&self, name: &str) -> f32 {
        self.ys[self.idx(name)]
    }
}

impl Stage for MockStage {
    fn resolve(&self, id: &str) -> Option<PlaneId> {
        resolve_name(self.names.iter().copied(), id).map(PlaneId)
    }

    fn base_y(&self, plane: PlaneId) -> f32 {
        self.base_ys[plane.0]
    }

    fn set_y(&mut self, plane: PlaneId, y: f32) {
        self.ys[plane.0] = y;
    }

    fn set_pos(&mut self, plane: PlaneId, x: f32, y: f32) {
        self.xs[plane.0] = x;
        self.ys[plane.0] = y;
    }

    fn set_sheet(&mut self, plane: PlaneId, sheet: &SheetSpec) {
        self.sheets[plane.0] = sheet.path;
    }

    fn set_frame(&mut self, plane: PlaneId, frame: f32) {
        self.frames[plane.0] = frame;
    }

    fn set_visible(&mut self, plane: PlaneId, visible: bool) {
        self.visible[plane.0] = visible;
    }

    fn hit(&self, plane: PlaneId, _ray_origin: Vec3, _ray_dir: Vec3) -> Option<f32> {
        self.hits[plane.0]
    }
}

pub fn curtain_config() -> StepConfig {
    StepConfig {
        id: "curtain",
        kind: StepKind::Curtain,
        drag_pixels_for_full: 300.0,
        max_offset: 0.0,
        static_sheet: SheetSpec::still("curtain_static.png"),
        idle_sheet: Some(SheetSpec::strip("curtain_idle.png", 8, 8.0)),
        anim_sheet: Some(SheetSpec::strip("curtain_scrub.png", 20, 0.0)),
        end_sheet: Some(SheetSpec::still("curtain_end.png")),
    }
}

pub fn pull_up_config(id: &'static str) -> StepConfig {
    StepConfig {
        id,
        kind: StepKind::PullUp,
        drag_pixels_for_full: 150.0,
        max_offset: 4.0,
        static_sheet: SheetSpec::still("plant_static.png"),
        idle_sheet: None,
        anim_sheet: Some(SheetSpec::strip("plant_anim.png", 8, 8.0)),
        end_sheet: None,
    }
}
