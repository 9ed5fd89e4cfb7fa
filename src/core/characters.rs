// Selectable characters: exclusive visibility, looping idle sprites, and
// the bones/bird vignette with its timed flight cycle.

use super::sprite::SpritePlayer;
use super::stage::{PlaneId, SheetSpec, Stage};

/// Static description of one selectable character figure.
#[derive(Clone, Copy, Debug)]
pub struct CharacterDef {
    pub name: &'static str,
    /// Scene plane carrying the figure's sprite.
    pub plane_id: &'static str,
    pub sheet: SheetSpec,
}

struct CharacterSlot {
    def: CharacterDef,
    plane: Option<PlaneId>,
    player: SpritePlayer,
}

/// Registry of all figures plus the bird vignette. At most one figure is
/// visible at a time; previews and committed selections both go through
/// [`CharacterSet::show`].
pub struct CharacterSet {
    slots: Vec<CharacterSlot>,
    visible: Option<usize>,
    bird: BirdCycle,
    bird_planes: Option<(PlaneId, PlaneId)>,
}

/// Name of the selection that shows the bones/bird vignette instead of a
/// standing figure.
pub const BONES_NAME: &str = "bones";
const BONES_PLANE: &str = "bones_plane";
const BIRD_PLANE: &str = "bird_plane";

impl CharacterSet {
    pub fn new(defs: Vec<CharacterDef>) -> Self {
        let slots = defs
            .into_iter()
            .map(|def| CharacterSlot {
                plane: None,
                player: SpritePlayer::new(def.sheet.frames, def.sheet.fps),
                def,
            })
            .collect();
        Self {
            slots,
            visible: None,
            bird: BirdCycle::default(),
            bird_planes: None,
        }
    }

    fn ensure_slot_plane(slot: &mut CharacterSlot, stage: &mut impl Stage) {
        if slot.plane.is_some() {
            return;
        }
        match stage.resolve(slot.def.plane_id) {
            Some(plane) => {
                slot.plane = Some(plane);
                stage.set_sheet(plane, &slot.def.sheet);
            }
            None => log::warn!("no plane found for character {:?}", slot.def.name),
        }
    }

    fn ensure_bird_planes(&mut self, stage: &impl Stage) {
        if self.bird_planes.is_none() {
            if let (Some(bones), Some(bird)) =
                (stage.resolve(BONES_PLANE), stage.resolve(BIRD_PLANE))
            {
                self.bird_planes = Some((bones, bird));
            }
        }
    }

    /// Hide every figure and stop the bird vignette.
    pub fn hide_all(&mut self, stage: &mut impl Stage) {
        for slot in &mut self.slots {
            if let Some(plane) = slot.plane {
                stage.set_visible(plane, false);
            }
        }
        self.visible = None;
        self.bird.stop();
        if let Some((bones, bird)) = self.bird_planes {
            stage.set_visible(bones, false);
            stage.set_visible(bird, false);
        }
    }

    /// Show exactly one selection: a figure by name, or the bird vignette
    /// for [`BONES_NAME`]. Unknown names just hide everything (logged).
    pub fn show(&mut self, name: &str, stage: &mut impl Stage) {
        self.hide_all(stage);
        if name == BONES_NAME {
            self.ensure_bird_planes(stage);
            if let Some((bones, bird)) = self.bird_planes {
                stage.set_visible(bones, true);
                stage.set_visible(bird, true);
                if let Some(pose) = self.bird.start() {
                    stage.set_frame(bird, pose.frame as f32);
                    stage.set_pos(bird, pose.x, pose.y);
                }
            }
            return;
        }
        match self.slots.iter().position(|s| s.def.name == name) {
            Some(i) => {
                Self::ensure_slot_plane(&mut self.slots[i], stage);
                if let Some(plane) = self.slots[i].plane {
                    stage.set_visible(plane, true);
                    self.visible = Some(i);
                }
            }
            None => log::warn!("unknown character {:?}", name),
        }
    }

    /// Advance the visible figure's idle loop and the bird flight.
    pub fn update(&mut self, delta_ms: f32, stage: &mut impl Stage) {
        if let Some(i) = self.visible {
            let slot = &mut self.slots[i];
            if slot.player.advance(delta_ms) {
                if let Some(plane) = slot.plane {
                    stage.set_frame(plane, slot.player.frame as f32);
                }
            }
        }
        if self.bird.is_active() {
            if let Some((_, bird)) = self.bird_planes {
                if let Some(pose) = self.bird.tick(delta_ms) {
                    stage.set_frame(bird, pose.frame as f32);
                    stage.set_pos(bird, pose.x, pose.y);
                }
            }
        }
    }
}

// ---------------- Bird flight cycle ----------------

/// One sample of the bird's animation: sprite frame plus plane-local
/// position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BirdPose {
    pub frame: u32,
    pub x: f32,
    pub y: f32,
}

/// Timed loop: initial delay, fly-in / perch / fly-out over the sprite
/// strip, then a long pause before the cycle repeats. Restarted from zero on
/// every `start`.
#[derive(Clone, Debug)]
pub struct BirdCycle {
    pub frames: u32,
    pub fps: f32,
    time_ms: f32,
    active: bool,
}

const BIRD_START_DELAY_MS: f32 = 2000.0;
const BIRD_PAUSE_MS: f32 = 6000.0;

// Flight waypoints in plane-local units.
const BIRD_X_IN: f32 = -8.0;
const BIRD_X_OUT: f32 = 8.0;
const BIRD_Y_HIGH_IN: f32 = 2.0;
const BIRD_Y_PERCH: f32 = -0.14;
const BIRD_Y_HIGH_OUT: f32 = 1.4;

impl Default for BirdCycle {
    fn default() -> Self {
        Self {
            frames: 77,
            fps: 10.0,
            time_ms: 0.0,
            active: false,
        }
    }
}

impl BirdCycle {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Begin a fresh cycle; returns the starting pose.
    pub fn start(&mut self) -> Option<BirdPose> {
        self.time_ms = 0.0;
        self.active = true;
        Some(BirdPose {
            frame: 0,
            x: BIRD_X_IN,
            y: BIRD_Y_HIGH_IN,
        })
    }

    pub fn stop(&mut self) {
        self.active = false;
        self.time_ms = 0.0;
    }

    fn anim_duration_ms(&self) -> f32 {
        self.frames as f32 / self.fps * 1000.0
    }

    /// Advance the cycle. Returns a pose during the flight; `None` while
    /// waiting (initial delay keeps the start pose, the trailing pause keeps
    /// the last flight pose).
    pub fn tick(&mut self, delta_ms: f32) -> Option<BirdPose> {
        if !self.active {
            return None;
        }
        let full_cycle = BIRD_START_DELAY_MS + self.anim_duration_ms() + BIRD_PAUSE_MS;
        self.time_ms += delta_ms.max(0.0);
        if self.time_ms >= full_cycle {
            self.time_ms -= full_cycle;
        }

        let t = self.time_ms;
        if t < BIRD_START_DELAY_MS {
            return None;
        }
        let t_anim = t - BIRD_START_DELAY_MS;
        let duration = self.anim_duration_ms();
        if t_anim >= duration {
            return None;
        }

        let t_norm = t_anim / duration;
        let frame = ((t_norm * self.frames as f32) as u32).min(self.frames - 1);

        // Trajectory keyed to the sheet: frames 0..11 approach, 11..60
        // perched, then leave.
        let approach_end = 11.0 / self.frames as f32;
        let perch_end = 60.0 / self.frames as f32;
        let (x, y) = if t_norm < approach_end {
            let e = smoothstep(t_norm / approach_end);
            (
                lerp(BIRD_X_IN, 0.0, e),
                lerp(BIRD_Y_HIGH_IN, BIRD_Y_PERCH, e),
            )
        } else if t_norm < perch_end {
            (0.0, BIRD_Y_PERCH)
        } else {
            let e = smoothstep((t_norm - perch_end) / (1.0 - perch_end));
            (
                lerp(0.0, BIRD_X_OUT, e),
                lerp(BIRD_Y_PERCH, BIRD_Y_HIGH_OUT, e),
            )
        };
        Some(BirdPose { frame, x, y })
    }
}

#[inline]
fn smoothstep(v: f32) -> f32 {
    let v = v.clamp(0.0, 1.0);
    v * v * (3.0 - 2.0 * v)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
