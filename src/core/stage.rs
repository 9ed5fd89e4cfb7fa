// Narrow interface between the interaction core and the scene.
//
// The core never touches the renderer or the DOM directly: everything it
// needs from the scene goes through `Stage`. The web frontend implements
// this over its plane table; tests implement it with an in-memory mock.

use glam::Vec3;

/// Opaque handle to one textured plane in the scene.
///
/// Handles are resolved by name once (see [`Stage::resolve`]) and cached by
/// the caller; the scene owns the plane for the application's lifetime, so a
/// handle never dangles.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PlaneId(pub usize);

/// Description of a sprite sheet: a horizontal strip of `frames` frames.
///
/// `fps == 0.0` means the sheet does not auto-advance (either a still image
/// or a scrub sheet whose frame is driven externally).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SheetSpec {
    pub path: &'static str,
    pub frames: u32,
    pub fps: f32,
}

impl SheetSpec {
    /// A single-frame still image.
    pub const fn still(path: &'static str) -> Self {
        Self {
            path,
            frames: 1,
            fps: 0.0,
        }
    }

    /// A sheet with an explicit frame count and playback rate.
    pub const fn strip(path: &'static str, frames: u32, fps: f32) -> Self {
        Self { path, frames, fps }
    }
}

/// What the interaction core is allowed to do to the scene.
///
/// All mutating operations no-op safely when the underlying texture is not
/// resolved yet; a misconfigured plane must never stall the frame loop.
pub trait Stage {
    /// Resolve a plane by name: exact match first, then case-insensitive,
    /// then case-insensitive substring (see [`resolve_name`]). Returns
    /// `None` when nothing matches (callers log and the step becomes inert).
    fn resolve(&self, id: &str) -> Option<PlaneId>;

    /// Vertical rest position recorded at scene build time.
    fn base_y(&self, plane: PlaneId) -> f32;

    /// Move the plane vertically (pull-up steps).
    fn set_y(&mut self, plane: PlaneId, y: f32);

    /// Move the plane in its own XY plane (bird flight).
    fn set_pos(&mut self, plane: PlaneId, x: f32, y: f32);

    /// Begin or replace sheet playback on a plane. Re-applying the sheet
    /// already shown is a no-op (the texture is not reloaded).
    fn set_sheet(&mut self, plane: PlaneId, sheet: &SheetSpec);

    /// Explicit scrub to a (fractional) frame; rounded and clamped.
    fn set_frame(&mut self, plane: PlaneId, frame: f32);

    fn set_visible(&mut self, plane: PlaneId, visible: bool);

    /// Ray test against this plane's world-space rectangle. Returns the ray
    /// parameter `t` of the hit, or `None`.
    fn hit(&self, plane: PlaneId, ray_origin: Vec3, ray_dir: Vec3) -> Option<f32>;
}

/// Name lookup shared by [`Stage`] implementations. Content tables and
/// scene names come from different hands, so an exact miss falls back to a
/// case-insensitive scan and then to a case-insensitive substring scan.
pub fn resolve_name<'a, I>(names: I, id: &str) -> Option<usize>
where
    I: Iterator<Item = &'a str> + Clone,
{
    if let Some(i) = names.clone().position(|n| n == id) {
        return Some(i);
    }
    if let Some(i) = names.clone().position(|n| n.eq_ignore_ascii_case(id)) {
        return Some(i);
    }
    let lower = id.to_ascii_lowercase();
    names
        .clone()
        .position(|n| n.to_ascii_lowercase().contains(&lower))
}

/// Ray against an axis-aligned rectangle in a constant-z plane, the shape of
/// every scene quad. Returns the ray distance on hit.
#[inline]
pub fn ray_rect_z(
    ray_origin: Vec3,
    ray_dir: Vec3,
    center: Vec3,
    half_w: f32,
    half_h: f32,
) -> Option<f32> {
    if ray_dir.z.abs() < 1e-6 {
        return None;
    }
    let t = (center.z - ray_origin.z) / ray_dir.z;
    if t < 0.0 {
        return None;
    }
    let hit = ray_origin + ray_dir * t;
    let inside = (hit.x - center.x).abs() <= half_w && (hit.y - center.y).abs() <= half_h;
    inside.then_some(t)
}
