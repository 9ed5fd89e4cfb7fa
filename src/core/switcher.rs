// Rendezvous between the camera zoom-out, the decor auto-rewind and a
// pending character selection.
//
// Switching from character A to B plays out as: zoom the camera back out,
// rewind A's decor, and only once BOTH have finished, swap to B and zoom
// back in. The swap must land in the same tick the re-zoom starts, never
// earlier, or the new character pops in over half-rewound decor.

/// 2-of-2 rendezvous state. Updated once per tick from the frame loop.
#[derive(Clone, Debug, Default)]
pub struct SwitchState {
    pending: Option<String>,
    target_z: Option<f32>,
    /// Set by the camera subsystem when it is back at the default depth.
    pub zoom_out_done: bool,
    /// Set by the transition coordinator when the old decor reaches zero.
    pub decor_rewind_done: bool,
}

impl SwitchState {
    /// Arm a switch toward `name`, to be committed at depth `zoomed_z`.
    /// Re-arming replaces any previous pending switch and clears both
    /// completion flags.
    pub fn begin(&mut self, name: &str, zoomed_z: f32) {
        self.pending = Some(name.to_owned());
        self.target_z = Some(zoomed_z);
        self.zoom_out_done = false;
        self.decor_rewind_done = false;
    }

    /// Drop any pending switch without committing.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.target_z = None;
        self.zoom_out_done = false;
        self.decor_rewind_done = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_name(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Fire the switch if every prerequisite holds. Fires at most once per
    /// pending switch: all fields reset together on commit, so a second call
    /// with no new `begin` does nothing.
    pub fn try_commit(&mut self) -> Option<(String, f32)> {
        if !(self.zoom_out_done && self.decor_rewind_done) {
            return None;
        }
        let name = self.pending.take()?;
        let z = self.target_z.take()?;
        self.zoom_out_done = false;
        self.decor_rewind_done = false;
        Some((name, z))
    }
}
