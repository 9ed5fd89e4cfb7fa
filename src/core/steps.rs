// Step state machine: one draggable decor element in a character's
// sequence, plus the ordering gate over a sequence of steps.
//
// `progress` runs 0..1 (0 = at rest / hidden, 1 = fully pulled / revealed)
// and is the single source of truth for both the plane transform and the
// sprite phase. Pull-up steps translate their plane vertically and snap to
// the nearest bound on release; curtain steps scrub a sprite sheet frame by
// frame and carry an explicit visual phase.

use super::constants::*;
use super::stage::{PlaneId, SheetSpec, Stage};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StepKind {
    /// Vertical offset transform, smoothed drag, snap on release.
    PullUp,
    /// Horizontal scrub, raw drag (the frame must track the finger exactly).
    Curtain,
}

/// Visual phase of a curtain step, selecting which sheet is shown.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CurtainPhase {
    /// At rest while its character is active: looping idle sheet.
    Idle,
    /// Scrub sheet active, frame driven by `progress` (drag or rewind).
    Dragging,
    /// Released mid-range: scrub sheet frozen at the current frame.
    Held,
    /// Fully pulled: fixed end-state image.
    Closed,
}

/// Static configuration for one step, resolved against the scene by name.
#[derive(Clone, Debug)]
pub struct StepConfig {
    pub id: &'static str,
    pub kind: StepKind,
    /// Screen pixels of drag for a full 0..1 traverse (desktop reference).
    pub drag_pixels_for_full: f32,
    /// Pull-up: world-space rise at progress 1.
    pub max_offset: f32,
    /// Shown when no character is active.
    pub static_sheet: SheetSpec,
    /// Curtain: looping sheet while at rest and active.
    pub idle_sheet: Option<SheetSpec>,
    /// Scrub sheet (curtain, fps 0) or looping anim (pull-up).
    pub anim_sheet: Option<SheetSpec>,
    /// Fixed image once fully open.
    pub end_sheet: Option<SheetSpec>,
}

/// Device-dependent drag conversion parameters.
#[derive(Clone, Copy, Debug)]
pub struct DragTuning {
    pub touch: bool,
}

impl DragTuning {
    pub fn pixels_for_full(&self, config: &StepConfig) -> f32 {
        let base = if config.drag_pixels_for_full > 0.0 {
            config.drag_pixels_for_full
        } else {
            DEFAULT_DRAG_PIXELS_FOR_FULL
        };
        if self.touch {
            base * TOUCH_DRAG_SCALE
        } else {
            base
        }
    }

    pub fn smooth(&self) -> f32 {
        if self.touch {
            DRAG_SMOOTH_TOUCH
        } else {
            DRAG_SMOOTH_DESKTOP
        }
    }
}

/// Mutable state of one step. Created once at init; only scalar/phase
/// fields change afterwards.
#[derive(Clone, Debug)]
pub struct Step {
    pub config: StepConfig,
    /// Resolved lazily by name, cached once found. Not owned.
    pub plane: Option<PlaneId>,
    pub base_y: Option<f32>,
    pub progress: f32,
    pub phase: CurtainPhase,
    pub is_snapping: bool,
    pub snap_target: Option<f32>,
}

impl Step {
    pub fn new(config: StepConfig) -> Self {
        Self {
            config,
            plane: None,
            base_y: None,
            progress: 0.0,
            phase: CurtainPhase::Idle,
            is_snapping: false,
            snap_target: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.progress >= OPEN_THRESHOLD
    }

    /// Resolve and cache the backing plane. A step whose id matches nothing
    /// in the scene stays inert; the warning fires once thanks to the cache.
    pub fn ensure_plane(&mut self, stage: &impl Stage) {
        if self.plane.is_some() {
            return;
        }
        match stage.resolve(self.config.id) {
            Some(plane) => {
                self.plane = Some(plane);
                self.base_y = Some(stage.base_y(plane));
            }
            None => {
                log::warn!("no plane found for step id {:?}", self.config.id);
            }
        }
    }

    /// Raw drag target from a pointer delta, before any smoothing.
    ///
    /// Curtain progresses along +X; pull-up along -Y (dragging up raises).
    pub fn drag_target(
        &self,
        start_progress: f32,
        delta_x_px: f32,
        delta_y_px: f32,
        tuning: &DragTuning,
    ) -> f32 {
        let pixels_for_full = tuning.pixels_for_full(&self.config);
        let delta_progress = match self.config.kind {
            StepKind::Curtain => delta_x_px / pixels_for_full,
            StepKind::PullUp => -delta_y_px / pixels_for_full,
        };
        (start_progress + delta_progress).clamp(0.0, 1.0)
    }

    /// Apply one pointer-move worth of drag.
    pub fn apply_drag(
        &mut self,
        start_progress: f32,
        delta_x_px: f32,
        delta_y_px: f32,
        tuning: &DragTuning,
        stage: &mut impl Stage,
    ) {
        let target = self.drag_target(start_progress, delta_x_px, delta_y_px, tuning);
        match self.config.kind {
            StepKind::Curtain => {
                // The scrub frame must track the drag exactly.
                self.progress = target;
                self.curtain_drag_move(start_progress, stage);
            }
            StepKind::PullUp => {
                let smooth = tuning.smooth();
                self.progress = (self.progress + (target - self.progress) * smooth).clamp(0.0, 1.0);
                self.apply_transform(stage);
            }
        }
    }

    /// Pointer released on a pull-up step: arm a snap when close to a bound.
    pub fn release_pull_up(&mut self) {
        self.progress = self.progress.clamp(0.0, 1.0);
        let target = if self.progress > 1.0 - SNAP_THRESHOLD {
            Some(1.0)
        } else if self.progress < SNAP_THRESHOLD {
            Some(0.0)
        } else {
            None
        };
        if let Some(target) = target {
            self.snap_target = Some(target);
            self.is_snapping = true;
        }
    }

    /// Advance an armed snap; clamps and disarms on arrival.
    pub fn tick_snap(&mut self, dt_sec: f32, stage: &mut impl Stage) {
        if !self.is_snapping {
            return;
        }
        let Some(target) = self.snap_target else {
            self.is_snapping = false;
            return;
        };
        let dir = if target > self.progress { 1.0 } else { -1.0 };
        let mut next = self.progress + dir * SNAP_SPEED * dt_sec;
        if (dir > 0.0 && next >= target) || (dir < 0.0 && next <= target) {
            next = target;
            self.is_snapping = false;
            self.snap_target = None;
        }
        self.progress = next.clamp(0.0, 1.0);
        self.apply_transform(stage);
    }

    /// Write the positional transform for the current progress. Curtains
    /// have no positional transform; their feedback is purely the sprite.
    pub fn apply_transform(&mut self, stage: &mut impl Stage) {
        self.ensure_plane(stage);
        let (Some(plane), Some(base_y)) = (self.plane, self.base_y) else {
            return;
        };
        if self.config.kind == StepKind::PullUp {
            stage.set_y(plane, base_y + self.progress * self.config.max_offset);
        }
    }

    /// Reset to progress 0 with the given resting sheet applied.
    pub fn reset(&mut self, stage: &mut impl Stage, resting: RestingSheet) {
        self.ensure_plane(stage);
        self.progress = 0.0;
        self.phase = CurtainPhase::Idle;
        self.is_snapping = false;
        self.snap_target = None;
        self.apply_transform(stage);
        let Some(plane) = self.plane else { return };
        let sheet = match resting {
            RestingSheet::Static => Some(self.config.static_sheet),
            RestingSheet::IdleLoop => self.config.idle_sheet.or(Some(self.config.static_sheet)),
        };
        if let Some(sheet) = sheet {
            stage.set_sheet(plane, &sheet);
        }
    }

    // ---------------- Curtain phase machine ----------------

    /// Drag movement on a curtain: switch idle -> scrub once the pointer has
    /// actually moved, then drive the scrub frame from progress.
    pub fn curtain_drag_move(&mut self, start_progress: f32, stage: &mut impl Stage) {
        let Some(plane) = self.plane else { return };
        if self.phase != CurtainPhase::Dragging
            && (self.progress - start_progress).abs() > CURTAIN_DRAG_EPSILON
        {
            if let Some(sheet) = self.config.anim_sheet {
                stage.set_sheet(plane, &sheet);
                self.phase = CurtainPhase::Dragging;
            }
        }
        if self.phase == CurtainPhase::Dragging {
            if let Some(sheet) = self.config.anim_sheet {
                stage.set_frame(plane, self.progress * (sheet.frames.saturating_sub(1)) as f32);
            }
        }
    }

    /// Pointer released on a curtain: revert to the idle loop at rest,
    /// otherwise freeze the scrub where it is.
    pub fn curtain_release(&mut self, stage: &mut impl Stage) {
        let Some(plane) = self.plane else { return };
        if self.progress <= CURTAIN_DRAG_EPSILON {
            if let Some(idle) = self.config.idle_sheet {
                stage.set_sheet(plane, &idle);
                self.phase = CurtainPhase::Idle;
                return;
            }
        }
        if self.phase == CurtainPhase::Dragging {
            self.phase = CurtainPhase::Held;
        }
    }

    /// Per-tick curtain refresh: lock in the end-state image once fully
    /// pulled. The next drag re-enters the scrub sheet from Closed.
    pub fn curtain_refresh(&mut self, stage: &mut impl Stage) {
        if self.progress < OPEN_THRESHOLD {
            return;
        }
        let Some(end) = self.config.end_sheet else {
            return;
        };
        let Some(plane) = self.plane else { return };
        stage.set_sheet(plane, &end);
        self.phase = CurtainPhase::Closed;
    }

    /// One tick of automatic reverse scrub during a character switch.
    pub fn curtain_rewind(&mut self, dt_sec: f32, speed: f32, stage: &mut impl Stage) {
        self.ensure_plane(stage);
        let Some(plane) = self.plane else { return };
        let Some(sheet) = self.config.anim_sheet else {
            return;
        };
        if self.phase != CurtainPhase::Dragging {
            // First rewind tick: put the scrub sheet up at the current frame.
            stage.set_sheet(plane, &sheet);
            stage.set_frame(plane, self.progress * (sheet.frames.saturating_sub(1)) as f32);
            self.phase = CurtainPhase::Dragging;
        }
        self.progress = (self.progress - speed * dt_sec).max(0.0);
        stage.set_frame(plane, self.progress * (sheet.frames.saturating_sub(1)) as f32);
    }

    /// Per-tick pull-up sprite refresh.
    ///
    /// The next openable step advertises itself with its looping anim sheet;
    /// a finished step with an end image shows that; everything else is
    /// static.
    pub fn pull_up_refresh(&mut self, is_openable: bool, stage: &mut impl Stage) {
        self.ensure_plane(stage);
        let Some(plane) = self.plane else { return };
        if is_openable && self.progress < 0.999 {
            if let Some(anim) = self.config.anim_sheet {
                stage.set_sheet(plane, &anim);
                return;
            }
        } else if self.progress >= OPEN_THRESHOLD {
            if let Some(end) = self.config.end_sheet {
                stage.set_sheet(plane, &end);
                return;
            }
        }
        stage.set_sheet(plane, &self.config.static_sheet);
    }
}

/// Which sheet a step rests on after a reset.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RestingSheet {
    /// No character active: plain static image.
    Static,
    /// Character just activated: curtains loop their idle sheet.
    IdleLoop,
}

// ---------------- Sequence gate ----------------

/// First step whose predecessors are all open and which is not itself open.
/// This is the only step a drag may open; the unlock order is strictly
/// left to right.
pub fn next_openable(steps: &[Step]) -> Option<usize> {
    for (i, step) in steps.iter().enumerate() {
        if step.progress >= OPEN_THRESHOLD {
            continue;
        }
        let all_prev_open = steps[..i].iter().all(|s| s.progress >= OPEN_THRESHOLD);
        if all_prev_open {
            return Some(i);
        }
    }
    None
}

/// Last step with any progress above `threshold`: the candidate for manual
/// re-closing and the target of the auto-rewind.
pub fn last_closable(steps: &[Step], threshold: f32) -> Option<usize> {
    let mut last = None;
    for (i, step) in steps.iter().enumerate() {
        if step.progress > threshold {
            last = Some(i);
        }
    }
    last
}
