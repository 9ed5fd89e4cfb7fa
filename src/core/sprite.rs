// Sprite-sheet playback state for a single plane.
//
// A sheet is a horizontal strip of equally sized frames; showing frame `n`
// means offsetting the texture window by `n / frames` in U. The player only
// tracks which frame should be visible; applying the offset is the
// renderer's job.

/// Frame clock for one sprite sheet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpritePlayer {
    pub frames: u32,
    pub fps: f32,
    pub frame: u32,
    accum_ms: f32,
}

impl SpritePlayer {
    pub fn new(frames: u32, fps: f32) -> Self {
        Self {
            frames: frames.max(1),
            fps,
            frame: 0,
            accum_ms: 0.0,
        }
    }

    /// Advance the loop by `delta_ms`. Still images (`frames <= 1`) and
    /// scrub sheets (`fps <= 0`) are inert. Returns true when the visible
    /// frame changed.
    pub fn advance(&mut self, delta_ms: f32) -> bool {
        if self.frames <= 1 || self.fps <= 0.0 {
            return false;
        }
        let frame_duration_ms = 1000.0 / self.fps;
        self.accum_ms += delta_ms.max(0.0);
        let mut changed = false;
        while self.accum_ms >= frame_duration_ms {
            self.accum_ms -= frame_duration_ms;
            self.frame = (self.frame + 1) % self.frames;
            changed = true;
        }
        changed
    }

    /// Jump to a (fractional) frame, rounded and clamped to the strip.
    pub fn scrub(&mut self, frame: f32) {
        if self.frames <= 1 {
            return;
        }
        let max = (self.frames - 1) as f32;
        self.frame = frame.round().clamp(0.0, max) as u32;
        self.accum_ms = 0.0;
    }

    /// Texture U offset of the current frame.
    pub fn u_offset(&self) -> f32 {
        self.frame as f32 / self.frames as f32
    }

    /// Width of one frame's texture window in U.
    pub fn u_scale(&self) -> f32 {
        1.0 / self.frames as f32
    }
}
