//! Application state: the scene, the interaction core and the camera, plus
//! the selection flow the UI drives.

use rand::Rng;

use crate::audio::AudioBank;
use crate::core::config::{character_interactions, character_planes, characters, scene_planes};
use crate::core::{CameraRig, CharacterSet, Interactions, SwitchState};
use crate::stage::WebStage;

pub struct App {
    pub stage: WebStage,
    pub interactions: Interactions,
    pub switch: SwitchState,
    pub camera: CameraRig,
    pub characters: CharacterSet,
    pub audio: AudioBank,
    pub selected: Option<String>,
    /// Open steps last frame, for the reveal sting.
    open_count: usize,
}

impl App {
    pub fn new(touch: bool) -> Self {
        let mut plane_configs = scene_planes();
        plane_configs.extend(character_planes());
        Self {
            stage: WebStage::new(&plane_configs),
            interactions: Interactions::new(character_interactions(), touch),
            switch: SwitchState::default(),
            camera: CameraRig::new(touch),
            characters: CharacterSet::new(characters()),
            audio: AudioBank::new(),
            selected: None,
            open_count: 0,
        }
    }

    /// Start button: begin the camera intro and the ambience loop.
    pub fn start(&mut self) {
        if self.camera.is_started() {
            return;
        }
        self.camera.start();
        self.audio.start_ambience();
    }

    // ---------------- Selection flow ----------------

    /// Menu hover: show the figure without committing. Suppressed while a
    /// switch is in flight so the rendezvous target stays visible.
    pub fn preview(&mut self, name: &str) {
        if !self.camera.is_started() || self.switch.is_pending() {
            return;
        }
        if self.selected.as_deref() == Some(name) {
            return;
        }
        self.characters.show(name, &mut self.stage);
    }

    /// Hover ended: back to the committed selection (or nothing).
    pub fn end_preview(&mut self) {
        if self.switch.is_pending() {
            return;
        }
        match self.selected.clone() {
            Some(sel) => self.characters.show(&sel, &mut self.stage),
            None => self.characters.hide_all(&mut self.stage),
        }
    }

    /// Menu click: commit a selection, or toggle the current one off. The
    /// first selection lands directly; changing selection goes through the
    /// zoom-out / rewind rendezvous.
    pub fn select(&mut self, name: &str) {
        if !self.camera.is_started() {
            return;
        }
        if self.selected.as_deref() == Some(name) && !self.switch.is_pending() {
            // Clicking the active character again toggles it off.
            self.deselect();
            return;
        }
        if self.selected.is_none() {
            let z = self.camera.zoomed_z;
            self.apply_selection(name, z);
            return;
        }
        self.switch.begin(name, self.camera.zoomed_z);
        self.camera.zoom_out();
        self.interactions.set_active(None, &mut self.stage);
    }

    /// Clear the selection: zoom out and rewind, ending with empty decor.
    pub fn deselect(&mut self) {
        self.switch.cancel();
        self.camera.zoom_out();
        self.interactions.set_active(None, &mut self.stage);
        self.characters.hide_all(&mut self.stage);
        self.selected = None;
        self.open_count = 0;
    }

    fn apply_selection(&mut self, name: &str, zoomed_z: f32) {
        self.characters.show(name, &mut self.stage);
        self.interactions.set_active(Some(name), &mut self.stage);
        self.camera.zoom_to(zoomed_z);
        self.selected = Some(name.to_owned());
        self.open_count = 0;
    }

    // ---------------- Pointer input ----------------

    pub fn pointer_down(&mut self, width: f32, height: f32, x: f32, y: f32) -> bool {
        if !self.camera.is_started() {
            return false;
        }
        let (ro, rd) = self.camera.screen_to_world_ray(width, height, x, y);
        self.interactions.pointer_down(ro, rd, x, y, &mut self.stage)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.interactions.pointer_move(x, y, &mut self.stage);
    }

    pub fn pointer_up(&mut self) {
        self.interactions.pointer_up(&mut self.stage);
    }

    // ---------------- Per-frame drive ----------------

    pub fn frame(&mut self, delta_ms: f32, rng: &mut impl Rng) {
        let dt_sec = delta_ms / 1000.0;

        self.camera.tick(dt_sec, rng);
        self.characters.update(delta_ms, &mut self.stage);
        self.stage.advance(delta_ms);
        self.interactions
            .update(delta_ms, &mut self.switch, &mut self.stage);

        if self.switch.is_pending() && self.camera.zoom_out_done() {
            self.switch.zoom_out_done = true;
        }
        if let Some((name, z)) = self.switch.try_commit() {
            self.apply_selection(&name, z);
        }

        let open = self
            .interactions
            .active_steps()
            .iter()
            .filter(|s| s.is_open())
            .count();
        if open > self.open_count {
            self.audio.play_reveal();
        }
        self.open_count = open;
    }
}
