// Camera rig: intro travel, zoom in/out between two target depths, shake,
// and the picking ray shared with pointer hit-testing.

use super::constants::*;
use glam::{Mat4, Vec3, Vec4};
use rand::Rng;

/// Smoothly moving perspective camera with a fixed look target.
///
/// The camera flies from `start_position` to the default target during the
/// intro, then eases toward `target_position` every frame. Zooming only ever
/// changes `target_position.z` between the two configured depths.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub start_position: Vec3,
    pub target_position: Vec3,
    pub default_z: f32,
    pub zoomed_z: f32,
    /// Smoothed camera position before shake.
    pub base_pos: Vec3,
    /// Final eye position for this frame (base + shake).
    pub eye: Vec3,
    pub look_target: Vec3,
    pub intro_progress: f32,
    pub shake_amp: f32,
    intro_speed: f32,
    started: bool,
}

impl CameraRig {
    pub fn new(touch: bool) -> Self {
        let (default_z, zoomed_z, intro_speed) = if touch {
            (
                DEFAULT_TARGET_Z_TOUCH,
                ZOOMED_TARGET_Z_TOUCH,
                INTRO_SPEED_TOUCH,
            )
        } else {
            (
                DEFAULT_TARGET_Z_DESKTOP,
                ZOOMED_TARGET_Z_DESKTOP,
                INTRO_SPEED_DESKTOP,
            )
        };
        let start_position = Vec3::new(-5.0, 5.0, 70.0);
        Self {
            start_position,
            target_position: Vec3::new(0.0, 1.5, default_z),
            default_z,
            zoomed_z,
            base_pos: start_position,
            eye: start_position,
            look_target: Vec3::new(0.0, 1.5, 0.0),
            intro_progress: 0.0,
            shake_amp: 0.0,
            intro_speed,
            started: false,
        }
    }

    /// Begin the intro travel (the scene sits on the start frame until the
    /// user presses start).
    pub fn start(&mut self) {
        self.started = true;
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn intro_done(&self) -> bool {
        self.intro_progress >= 1.0
    }

    pub fn zoom_in(&mut self) {
        self.target_position.z = self.zoomed_z;
    }

    pub fn zoom_out(&mut self) {
        self.target_position.z = self.default_z;
    }

    pub fn zoom_to(&mut self, z: f32) {
        self.target_position.z = z;
    }

    /// Zoom-out completion signal for the switch rendezvous: the camera is
    /// targeting the default depth and has effectively arrived there.
    pub fn zoom_out_done(&self) -> bool {
        self.intro_done()
            && self.target_position.z == self.default_z
            && (self.base_pos.z - self.default_z).abs() < ZOOM_DONE_EPSILON
    }

    /// Advance the rig by `dt_sec`. Smoothing constants are expressed at a
    /// 60 Hz reference rate and corrected for the actual dt.
    pub fn tick(&mut self, dt_sec: f32, rng: &mut impl Rng) {
        if !self.started {
            return;
        }
        let frames = dt_sec * 60.0;

        if self.intro_progress < 1.0 {
            self.intro_progress = (self.intro_progress + self.intro_speed * frames).min(1.0);
            self.base_pos = self
                .start_position
                .lerp(self.target_position, self.intro_progress);
        } else {
            let alpha = 1.0 - (1.0 - ZOOM_SMOOTH_FACTOR).powf(frames);
            self.base_pos = self.base_pos.lerp(self.target_position, alpha);
        }

        self.eye = self.base_pos;
        if self.shake_amp > 0.0 {
            self.eye.x += (rng.gen::<f32>() - 0.5) * self.shake_amp;
            self.eye.y += (rng.gen::<f32>() - 0.5) * self.shake_amp * 0.5;
            self.eye.z += (rng.gen::<f32>() - 0.5) * self.shake_amp * 0.2;
            self.shake_amp *= SHAKE_DECAY;
            // Below a visible amplitude, settle exactly on the base position.
            if self.shake_amp < 0.001 {
                self.shake_amp = 0.0;
            }
        }

        let look_alpha = 1.0 - (1.0 - LOOK_SMOOTH_FACTOR).powf(frames);
        self.look_target = self.look_target.lerp(Vec3::new(0.0, 1.5, 0.0), look_alpha);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.look_target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(CAMERA_FOVY, aspect.max(1e-3), CAMERA_NEAR, CAMERA_FAR)
    }

    /// World-space picking ray through backing-store pixel (`sx`, `sy`).
    pub fn screen_to_world_ray(&self, width: f32, height: f32, sx: f32, sy: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
        let aspect = width / height.max(1.0);
        let inv = (self.projection_matrix(aspect) * self.view_matrix()).inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p_far: Vec3 = p_far.truncate() / p_far.w;
        let rd = (p_far - self.eye).normalize();
        (self.eye, rd)
    }
}
