// Host-side tests for the step state machine and the sequence gate.

mod common;

use common::diorama::steps::{
    last_closable, next_openable, CurtainPhase, DragTuning, RestingSheet, Step,
};
use common::{curtain_config, pull_up_config, MockStage};

const DESKTOP: DragTuning = DragTuning { touch: false };
const TOUCH: DragTuning = DragTuning { touch: true };

fn stage() -> MockStage {
    MockStage::new(&[("curtain", 2.4), ("plant_a", 0.6), ("plant_b", 1.2)])
}

// ---------------- Drag math ----------------

#[test]
fn pull_up_drag_target_maps_pixels_up() {
    let step = Step::new(pull_up_config("plant_a"));
    // Dragging up 150 px opens fully on desktop
    let t = step.drag_target(0.0, 0.0, -150.0, &DESKTOP);
    assert!((t - 1.0).abs() < 1e-6);
    // Dragging down from mid closes
    let t = step.drag_target(0.5, 0.0, 75.0, &DESKTOP);
    assert!((t - 0.0).abs() < 1e-6);
}

#[test]
fn curtain_drag_target_maps_pixels_right() {
    let step = Step::new(curtain_config());
    let t = step.drag_target(0.0, 150.0, 0.0, &DESKTOP);
    assert!((t - 0.5).abs() < 1e-6);
}

#[test]
fn drag_target_clamps_to_unit_range() {
    let step = Step::new(pull_up_config("plant_a"));
    assert_eq!(step.drag_target(0.9, 0.0, -500.0, &DESKTOP), 1.0);
    assert_eq!(step.drag_target(0.1, 0.0, 500.0, &DESKTOP), 0.0);
}

#[test]
fn touch_shortens_the_gesture() {
    let step = Step::new(pull_up_config("plant_a"));
    // 150 px * 0.6 = 90 px for a full traverse on touch
    let t = step.drag_target(0.0, 0.0, -90.0, &TOUCH);
    assert!((t - 1.0).abs() < 1e-6);
}

#[test]
fn pull_up_drag_is_smoothed() {
    let mut stage = stage();
    let mut step = Step::new(pull_up_config("plant_a"));
    step.ensure_plane(&stage);
    step.apply_drag(0.0, 0.0, -150.0, &DESKTOP, &mut stage);
    // One move covers smooth-factor worth of the way to the raw target
    assert!((step.progress - 0.3).abs() < 1e-6);
    step.apply_drag(0.0, 0.0, -150.0, &DESKTOP, &mut stage);
    assert!((step.progress - 0.51).abs() < 1e-6);
}

#[test]
fn curtain_drag_is_raw() {
    let mut stage = stage();
    let mut step = Step::new(curtain_config());
    step.ensure_plane(&stage);
    step.apply_drag(0.0, 150.0, 0.0, &DESKTOP, &mut stage);
    assert!((step.progress - 0.5).abs() < 1e-6);
}

// ---------------- Pull-up transform and snap ----------------

#[test]
fn transform_rises_with_progress() {
    let mut stage = stage();
    let mut step = Step::new(pull_up_config("plant_a"));
    step.ensure_plane(&stage);
    step.progress = 0.5;
    step.apply_transform(&mut stage);
    // base 0.6 + 0.5 * 4.0
    assert!((stage.y_of("plant_a") - 2.6).abs() < 1e-6);
}

#[test]
fn release_near_top_snaps_open() {
    let mut stage = stage();
    let mut step = Step::new(pull_up_config("plant_a"));
    step.ensure_plane(&stage);
    step.progress = 0.85;
    step.release_pull_up();
    assert!(step.is_snapping);
    // 0.15 of progress at 4.0/s lands exactly at the bound
    step.tick_snap(0.0375, &mut stage);
    assert_eq!(step.progress, 1.0);
    assert!(!step.is_snapping);
    assert!(step.is_open());
}

#[test]
fn release_near_bottom_snaps_closed() {
    let mut stage = stage();
    let mut step = Step::new(pull_up_config("plant_a"));
    step.ensure_plane(&stage);
    step.progress = 0.1;
    step.release_pull_up();
    for _ in 0..10 {
        step.tick_snap(0.016, &mut stage);
    }
    assert_eq!(step.progress, 0.0);
    assert!(!step.is_snapping);
}

#[test]
fn release_mid_range_holds() {
    let mut step = Step::new(pull_up_config("plant_a"));
    step.progress = 0.5;
    step.release_pull_up();
    assert!(!step.is_snapping);
    assert_eq!(step.progress, 0.5);
}

// ---------------- Curtain phases ----------------

#[test]
fn curtain_switches_to_scrub_once_moved() {
    let mut stage = stage();
    let mut step = Step::new(curtain_config());
    step.ensure_plane(&stage);
    assert_eq!(step.phase, CurtainPhase::Idle);
    step.apply_drag(0.0, 150.0, 0.0, &DESKTOP, &mut stage);
    assert_eq!(step.phase, CurtainPhase::Dragging);
    assert_eq!(stage.sheet_of("curtain"), "curtain_scrub.png");
    // Frame tracks progress across the 20-frame strip
    assert!((stage.frames[stage.idx("curtain")] - 9.5).abs() < 1e-4);
}

#[test]
fn curtain_release_at_rest_returns_to_idle() {
    let mut stage = stage();
    let mut step = Step::new(curtain_config());
    step.ensure_plane(&stage);
    step.apply_drag(0.0, 150.0, 0.0, &DESKTOP, &mut stage);
    step.apply_drag(0.0, 0.0, 0.0, &DESKTOP, &mut stage);
    step.curtain_release(&mut stage);
    assert_eq!(step.phase, CurtainPhase::Idle);
    assert_eq!(stage.sheet_of("curtain"), "curtain_idle.png");
}

#[test]
fn curtain_release_mid_range_freezes() {
    let mut stage = stage();
    let mut step = Step::new(curtain_config());
    step.ensure_plane(&stage);
    step.apply_drag(0.0, 150.0, 0.0, &DESKTOP, &mut stage);
    step.curtain_release(&mut stage);
    assert_eq!(step.phase, CurtainPhase::Held);
    assert!((step.progress - 0.5).abs() < 1e-6);
}

#[test]
fn curtain_locks_end_state_when_fully_pulled() {
    let mut stage = stage();
    let mut step = Step::new(curtain_config());
    step.ensure_plane(&stage);
    step.apply_drag(0.0, 300.0, 0.0, &DESKTOP, &mut stage);
    step.curtain_refresh(&mut stage);
    assert_eq!(step.phase, CurtainPhase::Closed);
    assert_eq!(stage.sheet_of("curtain"), "curtain_end.png");
}

#[test]
fn curtain_rewind_primes_scrub_and_runs_backwards() {
    let mut stage = stage();
    let mut step = Step::new(curtain_config());
    step.ensure_plane(&stage);
    step.progress = 1.0;
    step.phase = CurtainPhase::Closed;
    step.curtain_rewind(0.1, 2.0, &mut stage);
    assert_eq!(stage.sheet_of("curtain"), "curtain_scrub.png");
    assert!((step.progress - 0.8).abs() < 1e-6);
    step.curtain_rewind(0.5, 2.0, &mut stage);
    assert!(step.progress.abs() < 1e-6);
    assert!(stage.frames[stage.idx("curtain")].abs() < 1e-6);
}

// ---------------- Reset ----------------

#[test]
fn reset_restores_rest_position_and_sheet() {
    let mut stage = stage();
    let mut step = Step::new(pull_up_config("plant_a"));
    step.ensure_plane(&stage);
    step.progress = 1.0;
    step.apply_transform(&mut stage);
    step.reset(&mut stage, RestingSheet::Static);
    assert_eq!(step.progress, 0.0);
    assert!((stage.y_of("plant_a") - 0.6).abs() < 1e-6);
    assert_eq!(stage.sheet_of("plant_a"), "plant_static.png");
}

#[test]
fn reset_to_idle_loop_prefers_idle_sheet() {
    let mut stage = stage();
    let mut step = Step::new(curtain_config());
    step.reset(&mut stage, RestingSheet::IdleLoop);
    assert_eq!(stage.sheet_of("curtain"), "curtain_idle.png");
    assert_eq!(step.phase, CurtainPhase::Idle);
}

// ---------------- Sequence gate ----------------

fn sequence() -> Vec<Step> {
    vec![
        Step::new(curtain_config()),
        Step::new(pull_up_config("plant_a")),
        Step::new(pull_up_config("plant_b")),
    ]
}

#[test]
fn gate_unlocks_strictly_in_order() {
    let mut steps = sequence();
    assert_eq!(next_openable(&steps), Some(0));

    steps[0].progress = 1.0;
    assert_eq!(next_openable(&steps), Some(1));

    // Opening a later step out of order does not skip the gate
    steps[2].progress = 1.0;
    assert_eq!(next_openable(&steps), Some(1));

    steps[1].progress = 1.0;
    assert_eq!(next_openable(&steps), None);
}

#[test]
fn gate_treats_threshold_as_open() {
    let mut steps = sequence();
    steps[0].progress = 0.98;
    assert_eq!(next_openable(&steps), Some(1));
    steps[0].progress = 0.97;
    assert_eq!(next_openable(&steps), Some(0));
}

#[test]
fn last_closable_finds_rearmost_progress() {
    let mut steps = sequence();
    assert_eq!(last_closable(&steps, 0.02), None);
    steps[0].progress = 1.0;
    steps[1].progress = 0.4;
    assert_eq!(last_closable(&steps, 0.02), Some(1));
    steps[2].progress = 0.01;
    assert_eq!(last_closable(&steps, 0.02), Some(1));
    steps[2].progress = 0.1;
    assert_eq!(last_closable(&steps, 0.02), Some(2));
}

#[test]
fn unresolved_plane_leaves_step_inert() {
    let mut stage = MockStage::new(&[("other", 0.0)]);
    let mut step = Step::new(pull_up_config("plant_a"));
    step.ensure_plane(&stage);
    assert!(step.plane.is_none());
    // Transforms and drags must not panic without a plane
    step.apply_drag(0.0, 0.0, -50.0, &DESKTOP, &mut stage);
    step.apply_transform(&mut stage);
}
