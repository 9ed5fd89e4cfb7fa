// Interaction coordinator: routes pointer input to the active character's
// step sequence and runs the rewind that precedes deactivation or a switch.
//
// All progress mutation goes through here. The frame loop calls
// `Interactions::update` once per tick; pointer events arrive between
// ticks and only record or apply drags.

use glam::Vec3;
use smallvec::SmallVec;

use super::config::CharacterConfig;
use super::constants::*;
use super::steps::{
    last_closable, next_openable, DragTuning, RestingSheet, Step, StepKind,
};
use super::stage::Stage;
use super::switcher::SwitchState;

/// Where the coordinator is between characters.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Transition {
    /// No character active, all decor at rest on static sheets.
    Inactive,
    /// A character's sequence is live and accepting drags.
    Active(String),
    /// Auto-rewinding the named character's decor, then going inactive.
    RewindingToInactive { from: String },
    /// Auto-rewinding `from`'s decor on the way to activating `to`.
    RewindingToSwitch { from: String, to: String },
}

/// An in-flight drag: which step, and where the pointer started.
#[derive(Clone, Copy, Debug)]
struct DragState {
    seq: usize,
    step: usize,
    start_progress: f32,
    start_x: f32,
    start_y: f32,
}

struct Sequence {
    name: &'static str,
    steps: Vec<Step>,
}

/// Owns every character's step sequence plus the transition state between
/// them.
pub struct Interactions {
    sequences: Vec<Sequence>,
    transition: Transition,
    /// Set on activation; the next `update` tick initialises the sequence.
    just_activated: bool,
    drag: Option<DragState>,
    tuning: DragTuning,
}

impl Interactions {
    pub fn new(configs: Vec<CharacterConfig>, touch: bool) -> Self {
        let sequences = configs
            .into_iter()
            .map(|c| Sequence {
                name: c.name,
                steps: c.sequence.into_iter().map(Step::new).collect(),
            })
            .collect();
        Self {
            sequences,
            transition: Transition::Inactive,
            just_activated: false,
            drag: None,
            tuning: DragTuning { touch },
        }
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn active_name(&self) -> Option<&str> {
        match &self.transition {
            Transition::Active(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_rewinding(&self) -> bool {
        matches!(
            self.transition,
            Transition::RewindingToInactive { .. } | Transition::RewindingToSwitch { .. }
        )
    }

    fn seq_index(&self, name: &str) -> Option<usize> {
        self.sequences.iter().position(|s| s.name == name)
    }

    /// Steps of the active character, for progress queries.
    pub fn active_steps(&self) -> &[Step] {
        self.active_name()
            .and_then(|name| self.seq_index(name))
            .map(|i| self.sequences[i].steps.as_slice())
            .unwrap_or(&[])
    }

    fn reset_sequence(&mut self, name: &str, resting: RestingSheet, stage: &mut impl Stage) {
        if let Some(i) = self.seq_index(name) {
            for step in &mut self.sequences[i].steps {
                step.reset(stage, resting);
            }
        }
    }

    fn activate(&mut self, name: &str) {
        self.transition = Transition::Active(name.to_owned());
        self.just_activated = true;
        self.drag = None;
    }

    /// Change the active character. Idempotent for the already-active name.
    ///
    /// If the outgoing character's decor carries any progress, the change is
    /// deferred behind an auto-rewind; `None` while already inactive forces a
    /// full reset of every sequence.
    pub fn set_active(&mut self, name: Option<&str>, stage: &mut impl Stage) {
        self.drag = None;
        match (&self.transition, name) {
            (Transition::Active(current), Some(to)) if current == to => {}
            (Transition::Active(current), Some(to)) => {
                // Always route through the rewind phase, even with nothing to
                // rewind: the next update tick finishes instantly and reports
                // completion, so the switch rendezvous sees a consistent
                // sequence of events.
                self.transition = Transition::RewindingToSwitch {
                    from: current.clone(),
                    to: to.to_owned(),
                };
            }
            (Transition::Inactive, Some(to)) => self.activate(to),
            (
                Transition::RewindingToInactive { from }
                | Transition::RewindingToSwitch { from, .. },
                Some(to),
            ) => {
                self.transition = Transition::RewindingToSwitch {
                    from: from.clone(),
                    to: to.to_owned(),
                };
            }
            (Transition::Active(current), None) => {
                self.transition = Transition::RewindingToInactive {
                    from: current.clone(),
                };
            }
            (
                Transition::RewindingToInactive { from }
                | Transition::RewindingToSwitch { from, .. },
                None,
            ) => {
                self.transition = Transition::RewindingToInactive { from: from.clone() };
            }
            (Transition::Inactive, None) => {
                // Belt and braces: force everything back to its static rest.
                let names: Vec<&'static str> = self.sequences.iter().map(|s| s.name).collect();
                for name in names {
                    self.reset_sequence(name, RestingSheet::Static, stage);
                }
            }
        }
    }

    // ---------------- Pointer input ----------------

    /// Pointer press: hit-test the grabbable steps and begin a drag on the
    /// nearest one. Returns whether the press grabbed anything.
    ///
    /// Only two steps are ever grabbable: the next openable step and the
    /// last step with progress (for manual re-closing).
    pub fn pointer_down(
        &mut self,
        ray_origin: Vec3,
        ray_dir: Vec3,
        x: f32,
        y: f32,
        stage: &mut impl Stage,
    ) -> bool {
        let Some(name) = self.active_name().map(str::to_owned) else {
            return false;
        };
        let Some(seq) = self.seq_index(&name) else {
            return false;
        };

        let mut candidates: SmallVec<[usize; 2]> = SmallVec::new();
        if let Some(i) = next_openable(&self.sequences[seq].steps) {
            candidates.push(i);
        }
        if let Some(i) = last_closable(&self.sequences[seq].steps, CLOSED_THRESHOLD) {
            if !candidates.contains(&i) {
                candidates.push(i);
            }
        }

        let mut best: Option<(usize, f32)> = None;
        for &i in &candidates {
            let step = &mut self.sequences[seq].steps[i];
            step.ensure_plane(stage);
            let Some(plane) = step.plane else { continue };
            if let Some(dist) = stage.hit(plane, ray_origin, ray_dir) {
                if best.map_or(true, |(_, d)| dist < d) {
                    best = Some((i, dist));
                }
            }
        }

        if let Some((step, _)) = best {
            let grabbed = &mut self.sequences[seq].steps[step];
            // A grab takes over from any snap still in flight.
            grabbed.is_snapping = false;
            grabbed.snap_target = None;
            self.drag = Some(DragState {
                seq,
                step,
                start_progress: grabbed.progress,
                start_x: x,
                start_y: y,
            });
            true
        } else {
            false
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, stage: &mut impl Stage) {
        let Some(drag) = self.drag else { return };
        if !matches!(self.transition, Transition::Active(_)) {
            return;
        }
        let step = &mut self.sequences[drag.seq].steps[drag.step];
        step.apply_drag(
            drag.start_progress,
            x - drag.start_x,
            y - drag.start_y,
            &self.tuning,
            stage,
        );
    }

    pub fn pointer_up(&mut self, stage: &mut impl Stage) {
        let Some(drag) = self.drag.take() else { return };
        let step = &mut self.sequences[drag.seq].steps[drag.step];
        match step.config.kind {
            StepKind::Curtain => step.curtain_release(stage),
            StepKind::PullUp => step.release_pull_up(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    // ---------------- Per-tick drive ----------------

    /// Advance snaps, rewinds and sprite phases by `delta_ms`.
    ///
    /// While rewinding, completion is reported to `switch` (the camera half
    /// of the rendezvous is fed in by the frame loop).
    pub fn update(&mut self, delta_ms: f32, switch: &mut SwitchState, stage: &mut impl Stage) {
        let dt = (delta_ms / 1000.0).max(0.0);

        if self.just_activated {
            self.just_activated = false;
            if let Some(name) = self.active_name().map(str::to_owned) {
                self.reset_sequence(&name, RestingSheet::IdleLoop, stage);
            }
        }

        match self.transition.clone() {
            Transition::Inactive => {}
            Transition::Active(name) => self.update_active(&name, dt, stage),
            Transition::RewindingToInactive { from } => {
                if self.rewind_tick(&from, dt, stage) {
                    self.reset_sequence(&from, RestingSheet::Static, stage);
                    if switch.is_pending() {
                        switch.decor_rewind_done = true;
                    }
                    self.transition = Transition::Inactive;
                }
            }
            Transition::RewindingToSwitch { from, to } => {
                if self.rewind_tick(&from, dt, stage) {
                    self.reset_sequence(&from, RestingSheet::Static, stage);
                    if switch.is_pending() {
                        // The swap itself waits for the camera; the commit
                        // re-activates us.
                        switch.decor_rewind_done = true;
                        self.transition = Transition::Inactive;
                    } else {
                        self.activate(&to);
                    }
                }
            }
        }
    }

    /// One tick of auto-rewind on `name`'s rearmost progressed step.
    /// Returns true once nothing is left to rewind.
    fn rewind_tick(&mut self, name: &str, dt: f32, stage: &mut impl Stage) -> bool {
        let Some(seq) = self.seq_index(name) else {
            return true;
        };
        let steps = &mut self.sequences[seq].steps;
        let Some(i) = last_closable(steps, REWIND_EPSILON) else {
            return true;
        };
        let step = &mut steps[i];
        match step.config.kind {
            StepKind::Curtain => step.curtain_rewind(dt, AUTO_CLOSE_SPEED, stage),
            StepKind::PullUp => {
                step.progress = (step.progress - AUTO_CLOSE_SPEED * dt).max(0.0);
                step.is_snapping = false;
                step.snap_target = None;
                step.apply_transform(stage);
            }
        }
        false
    }

    fn update_active(&mut self, name: &str, dt: f32, stage: &mut impl Stage) {
        let Some(seq) = self.seq_index(name) else {
            return;
        };
        let steps = &mut self.sequences[seq].steps;

        for step in steps.iter_mut() {
            step.tick_snap(dt, stage);
        }

        let openable = next_openable(steps);
        let dragging = self.drag.map(|d| d.step);
        for (i, step) in steps.iter_mut().enumerate() {
            match step.config.kind {
                StepKind::Curtain => step.curtain_refresh(stage),
                StepKind::PullUp => {
                    // Leave the sheet alone mid-drag; the anim loop keeps
                    // running on the grabbed step anyway.
                    if dragging != Some(i) {
                        step.pull_up_refresh(openable == Some(i), stage);
                    }
                }
            }
        }
    }
}
