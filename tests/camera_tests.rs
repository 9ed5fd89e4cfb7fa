// Host-side tests for the camera rig.

mod common;

use common::diorama::camera::CameraRig;
use common::diorama::constants::*;
use common::diorama::stage::ray_rect_z;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const DT: f32 = 1.0 / 60.0;

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(7)
}

fn settle(rig: &mut CameraRig, ticks: usize) {
    let mut rng = rng();
    for _ in 0..ticks {
        rig.tick(DT, &mut rng);
    }
}

#[test]
fn camera_sits_still_until_started() {
    let mut rig = CameraRig::new(false);
    let before = rig.base_pos;
    settle(&mut rig, 100);
    assert_eq!(rig.base_pos, before);
    assert!(!rig.intro_done());
}

#[test]
fn intro_travels_to_default_depth() {
    let mut rig = CameraRig::new(false);
    rig.start();
    // 0.005 per reference frame -> 200 frames to finish
    settle(&mut rig, 250);
    assert!(rig.intro_done());
    assert!((rig.base_pos.z - DEFAULT_TARGET_Z_DESKTOP).abs() < 0.5);
    settle(&mut rig, 500);
    assert!(rig.zoom_out_done());
}

#[test]
fn touch_frames_the_scene_closer() {
    let desktop = CameraRig::new(false);
    let touch = CameraRig::new(true);
    assert!(touch.default_z < desktop.default_z);
    assert!(touch.zoomed_z < desktop.zoomed_z);
}

#[test]
fn zoom_in_clears_the_rendezvous_signal() {
    let mut rig = CameraRig::new(false);
    rig.start();
    settle(&mut rig, 800);
    assert!(rig.zoom_out_done());

    rig.zoom_in();
    assert!(!rig.zoom_out_done());
    settle(&mut rig, 800);
    assert!((rig.base_pos.z - ZOOMED_TARGET_Z_DESKTOP).abs() < ZOOM_DONE_EPSILON);
    assert!(!rig.zoom_out_done());

    rig.zoom_out();
    settle(&mut rig, 800);
    assert!(rig.zoom_out_done());
}

#[test]
fn zoom_only_moves_depth() {
    let mut rig = CameraRig::new(false);
    rig.start();
    settle(&mut rig, 800);
    let before = rig.base_pos;
    rig.zoom_in();
    settle(&mut rig, 800);
    assert!((rig.base_pos.x - before.x).abs() < 1e-3);
    assert!((rig.base_pos.y - before.y).abs() < 1e-3);
    assert!(rig.base_pos.z < before.z);
}

#[test]
fn shake_decays_back_to_base() {
    let mut rig = CameraRig::new(false);
    rig.start();
    settle(&mut rig, 800);
    rig.shake_amp = 0.5;
    let mut r = rng();
    rig.tick(DT, &mut r);
    assert!(rig.eye != rig.base_pos);
    settle(&mut rig, 800);
    assert_eq!(rig.shake_amp, 0.0);
    assert_eq!(rig.eye, rig.base_pos);
}

#[test]
fn center_ray_hits_the_look_target() {
    let mut rig = CameraRig::new(false);
    rig.start();
    settle(&mut rig, 1000);
    let (ro, rd) = rig.screen_to_world_ray(1920.0, 1080.0, 960.0, 540.0);
    assert!((ro - rig.eye).length() < 1e-3);
    // Looking toward the scene at (0, 1.5, 0)
    assert!(rd.z < 0.0);
    let t = -ro.z / rd.z;
    let hit = ro + rd * t;
    assert!((hit.x - 0.0).abs() < 0.1);
    assert!((hit.y - 1.5).abs() < 0.1);
}

#[test]
fn picking_ray_intersects_scene_planes() {
    let mut rig = CameraRig::new(false);
    rig.start();
    settle(&mut rig, 1000);
    let (ro, rd) = rig.screen_to_world_ray(1920.0, 1080.0, 960.0, 540.0);
    // A large quad in front of the camera must be hit by the center ray
    let t = ray_rect_z(ro, rd, Vec3::new(0.0, 1.5, 3.0), 5.0, 5.0);
    assert!(t.is_some());
    assert!(t.unwrap() > 0.0);
}

#[test]
fn off_axis_ray_misses_small_quads() {
    let mut rig = CameraRig::new(false);
    rig.start();
    settle(&mut rig, 1000);
    let (ro, rd) = rig.screen_to_world_ray(1920.0, 1080.0, 10.0, 10.0);
    assert!(ray_rect_z(ro, rd, Vec3::new(0.0, 1.5, 3.0), 0.5, 0.5).is_none());
}
