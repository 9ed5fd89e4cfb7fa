// Content tables: which planes make up the decor, which figures can be
// selected, and which decor elements each character's interaction sequence
// drives. Pure data, consumed once at init.

use super::characters::CharacterDef;
use super::stage::SheetSpec;
use super::steps::{StepConfig, StepKind};

/// One textured plane of the scene: base sheet plus placement.
#[derive(Clone, Copy, Debug)]
pub struct PlaneConfig {
    pub name: &'static str,
    pub sheet: SheetSpec,
    /// World-space center.
    pub pos: [f32; 3],
    /// World-space width/height of the quad.
    pub size: [f32; 2],
    /// Wind sway applied by the frame loop.
    pub sway: bool,
    pub visible: bool,
}

impl PlaneConfig {
    const fn decor(
        name: &'static str,
        sprite: &'static str,
        pos: [f32; 3],
        size: [f32; 2],
    ) -> Self {
        Self {
            name,
            sheet: SheetSpec::still(sprite),
            pos,
            size,
            sway: false,
            visible: true,
        }
    }

    const fn swaying(
        name: &'static str,
        sprite: &'static str,
        pos: [f32; 3],
        size: [f32; 2],
    ) -> Self {
        Self {
            sway: true,
            ..Self::decor(name, sprite, pos, size)
        }
    }

    const fn hidden(
        name: &'static str,
        sheet: SheetSpec,
        pos: [f32; 3],
        size: [f32; 2],
    ) -> Self {
        Self {
            name,
            sheet,
            pos,
            size,
            sway: false,
            visible: false,
        }
    }
}

/// Decor and vegetation planes (all start on their static base image).
pub fn scene_planes() -> Vec<PlaneConfig> {
    vec![
        PlaneConfig::decor("decor1", "images/fond.png", [0.0, 4.0, -6.0], [40.0, 12.0]),
        PlaneConfig::decor("decor2", "images/face.png", [0.0, 3.0, -2.0], [24.0, 10.0]),
        PlaneConfig::decor("decor3", "images/droite.png", [10.0, 3.0, -1.0], [6.0, 8.0]),
        PlaneConfig::decor("decor4", "images/droite.png", [12.5, 3.0, 0.0], [6.0, 8.0]),
        PlaneConfig::swaying("tree1", "images/tree.png", [-7.0, 3.0, -3.0], [10.0, 8.0]),
        PlaneConfig::swaying("tree2", "images/tree.png", [6.0, 3.4, -4.0], [10.0, 8.0]),
        PlaneConfig::swaying("plante1", "images/plante.png", [-4.0, 1.0, 1.0], [3.0, 4.0]),
        PlaneConfig::decor(
            "plante2",
            "images/planteText.png",
            [4.2, 1.2, 2.0],
            [2.6, 3.4],
        ),
        PlaneConfig::swaying(
            "plante3",
            "images/blurplante.png",
            [-9.0, 1.0, 0.0],
            [3.2, 4.2],
        ),
        PlaneConfig::swaying("palm1", "images/palm.png", [8.0, 4.0, -5.0], [6.0, 10.0]),
        PlaneConfig::decor(
            "palm2",
            "images/blurpalm.png",
            [-11.0, 4.0, 2.0],
            [6.5, 10.5],
        ),
        PlaneConfig::decor("grasse1", "images/grasse.png", [-2.5, 0.6, 2.5], [2.2, 2.8]),
        PlaneConfig::decor("rideau", "images/rideau.png", [0.0, 2.4, 3.0], [5.0, 4.8]),
    ]
}

/// Sprite planes of the selectable figures, hidden until chosen.
pub fn character_planes() -> Vec<PlaneConfig> {
    let figure = [0.0, 1.6, 1.5];
    let size = [2.2, 3.2];
    vec![
        PlaneConfig::hidden(
            "spriteplane_student",
            SheetSpec::strip("images/spritesheet1.png", 23, 3.0),
            figure,
            size,
        ),
        PlaneConfig::hidden(
            "spriteplane_assassin",
            SheetSpec::strip("images/spritesheet2.png", 12, 3.0),
            figure,
            size,
        ),
        PlaneConfig::hidden(
            "spriteplane_martyr",
            SheetSpec::strip("images/spritesheet3.png", 8, 3.0),
            figure,
            size,
        ),
        PlaneConfig::hidden(
            "spriteplane_hero",
            SheetSpec::strip("images/spritesheet4.png", 8, 6.0),
            figure,
            size,
        ),
        PlaneConfig::hidden(
            "spriteplane_body",
            SheetSpec::strip("images/spritesheet5.png", 30, 3.0),
            figure,
            size,
        ),
        PlaneConfig::hidden(
            "spriteplane_musee",
            SheetSpec::strip("images/spritesheet7.png", 4, 3.0),
            figure,
            size,
        ),
        PlaneConfig::hidden(
            "bones_plane",
            SheetSpec::still("images/ossement.png"),
            [0.0, 0.4, 1.8],
            [3.0, 1.6],
        ),
        PlaneConfig::hidden(
            "bird_plane",
            SheetSpec::strip("images/spritesheet6.png", 77, 0.0),
            [0.0, 2.0, 1.9],
            [1.6, 1.6],
        ),
    ]
}

/// Selectable figures. `bones` is driven by the bird cycle instead and has
/// no entry here.
pub fn characters() -> Vec<CharacterDef> {
    vec![
        CharacterDef {
            name: "student",
            plane_id: "spriteplane_student",
            sheet: SheetSpec::strip("images/spritesheet1.png", 23, 3.0),
        },
        CharacterDef {
            name: "assassin",
            plane_id: "spriteplane_assassin",
            sheet: SheetSpec::strip("images/spritesheet2.png", 12, 3.0),
        },
        CharacterDef {
            name: "martyr",
            plane_id: "spriteplane_martyr",
            sheet: SheetSpec::strip("images/spritesheet3.png", 8, 3.0),
        },
        CharacterDef {
            name: "hero",
            plane_id: "spriteplane_hero",
            sheet: SheetSpec::strip("images/spritesheet4.png", 8, 6.0),
        },
        CharacterDef {
            name: "body",
            plane_id: "spriteplane_body",
            sheet: SheetSpec::strip("images/spritesheet5.png", 30, 3.0),
        },
        CharacterDef {
            name: "museum",
            plane_id: "spriteplane_musee",
            sheet: SheetSpec::strip("images/spritesheet7.png", 4, 3.0),
        },
    ]
}

/// A character's interaction sequence (ordered).
#[derive(Clone, Debug)]
pub struct CharacterConfig {
    pub name: &'static str,
    pub sequence: Vec<StepConfig>,
}

/// Interactive decor per character. Only `student` has one today: the
/// curtain, then two pull-up plants, unlocked strictly in that order.
pub fn character_interactions() -> Vec<CharacterConfig> {
    vec![CharacterConfig {
        name: "student",
        sequence: vec![
            StepConfig {
                id: "rideau",
                kind: StepKind::Curtain,
                drag_pixels_for_full: 300.0,
                max_offset: 0.0,
                static_sheet: SheetSpec::still("images/rideau.png"),
                idle_sheet: Some(SheetSpec::strip("images/spritesheetB.png", 8, 8.0)),
                // fps 0: the scrub frame is driven by drag progress.
                anim_sheet: Some(SheetSpec::strip("images/spritesheetR.png", 20, 0.0)),
                end_sheet: Some(SheetSpec::still("images/rideauEnd.png")),
            },
            StepConfig {
                id: "grasse1",
                kind: StepKind::PullUp,
                drag_pixels_for_full: 150.0,
                max_offset: 4.3,
                static_sheet: SheetSpec::still("images/grasse.png"),
                idle_sheet: None,
                anim_sheet: Some(SheetSpec::strip("images/grasseAnim.png", 8, 8.0)),
                end_sheet: None,
            },
            StepConfig {
                id: "plante2",
                kind: StepKind::PullUp,
                drag_pixels_for_full: 150.0,
                max_offset: 4.1,
                static_sheet: SheetSpec::still("images/planteText.png"),
                idle_sheet: None,
                anim_sheet: Some(SheetSpec::strip("images/planteTextAnim.png", 8, 8.0)),
                end_sheet: None,
            },
        ],
    }]
}
