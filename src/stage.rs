//! Concrete scene backing the [`Stage`] trait: a flat list of textured quads
//! with per-plane sprite playback and a little wind sway on the vegetation.

use fnv::FnvHashMap;
use glam::{Vec2, Vec3};

use crate::core::config::PlaneConfig;
use crate::core::constants::{SWAY_AMPLITUDE, SWAY_RATE};
use crate::core::sprite::SpritePlayer;
use crate::core::stage::{ray_rect_z, resolve_name, PlaneId, SheetSpec, Stage};

pub struct Plane {
    pub name: &'static str,
    /// Placement from the scene tables; `pos` drifts from it at runtime.
    pub base_pos: Vec3,
    pub pos: Vec3,
    pub size: Vec2,
    pub sway: bool,
    sway_phase: f32,
    pub visible: bool,
    pub sheet: SheetSpec,
    pub player: SpritePlayer,
}

pub struct WebStage {
    planes: Vec<Plane>,
    index: FnvHashMap<&'static str, usize>,
    time_sec: f32,
}

impl WebStage {
    pub fn new(configs: &[PlaneConfig]) -> Self {
        let mut planes = Vec::with_capacity(configs.len());
        let mut index = FnvHashMap::default();
        for (i, c) in configs.iter().enumerate() {
            index.insert(c.name, i);
            planes.push(Plane {
                name: c.name,
                base_pos: Vec3::from_array(c.pos),
                pos: Vec3::from_array(c.pos),
                size: Vec2::from_array(c.size),
                sway: c.sway,
                // Decorrelate the swaying planes
                sway_phase: i as f32 * 1.7,
                visible: c.visible,
                sheet: c.sheet,
                player: SpritePlayer::new(c.sheet.frames, c.sheet.fps),
            });
        }
        Self {
            planes,
            index,
            time_sec: 0.0,
        }
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    /// Advance every visible looping sprite and the sway clock.
    pub fn advance(&mut self, delta_ms: f32) {
        self.time_sec += (delta_ms / 1000.0).max(0.0);
        for plane in &mut self.planes {
            if plane.visible {
                plane.player.advance(delta_ms);
            }
        }
    }

    /// Horizontal wind offset for plane `i` this frame.
    pub fn sway_offset(&self, i: usize) -> f32 {
        let plane = &self.planes[i];
        if plane.sway {
            (self.time_sec * SWAY_RATE * std::f32::consts::TAU + plane.sway_phase).sin()
                * SWAY_AMPLITUDE
        } else {
            0.0
        }
    }
}

impl Stage for WebStage {
    fn resolve(&self, id: &str) -> Option<PlaneId> {
        if let Some(&i) = self.index.get(id) {
            return Some(PlaneId(i));
        }
        resolve_name(self.planes.iter().map(|p| p.name), id).map(PlaneId)
    }

    fn base_y(&self, plane: PlaneId) -> f32 {
        self.planes[plane.0].base_pos.y
    }

    fn set_y(&mut self, plane: PlaneId, y: f32) {
        self.planes[plane.0].pos.y = y;
    }

    fn set_pos(&mut self, plane: PlaneId, x: f32, y: f32) {
        let p = &mut self.planes[plane.0];
        p.pos.x = x;
        p.pos.y = y;
    }

    fn set_sheet(&mut self, plane: PlaneId, sheet: &SheetSpec) {
        let p = &mut self.planes[plane.0];
        if p.sheet.path != sheet.path {
            p.sheet = *sheet;
            p.player = SpritePlayer::new(sheet.frames, sheet.fps);
        }
    }

    fn set_frame(&mut self, plane: PlaneId, frame: f32) {
        self.planes[plane.0].player.scrub(frame);
    }

    fn set_visible(&mut self, plane: PlaneId, visible: bool) {
        self.planes[plane.0].visible = visible;
    }

    fn hit(&self, plane: PlaneId, ray_origin: Vec3, ray_dir: Vec3) -> Option<f32> {
        let p = &self.planes[plane.0];
        if !p.visible {
            return None;
        }
        ray_rect_z(ray_origin, ray_dir, p.pos, p.size.x * 0.5, p.size.y * 0.5)
    }
}
