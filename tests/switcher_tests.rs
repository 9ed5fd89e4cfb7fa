// Host-side tests for the character-switch rendezvous.

mod common;

use common::diorama::switcher::SwitchState;

#[test]
fn commit_requires_both_halves() {
    let mut sw = SwitchState::default();
    sw.begin("hero", 17.1);
    assert!(sw.is_pending());
    assert!(sw.try_commit().is_none());

    sw.zoom_out_done = true;
    assert!(sw.try_commit().is_none());

    sw.decor_rewind_done = true;
    let (name, z) = sw.try_commit().unwrap();
    assert_eq!(name, "hero");
    assert_eq!(z, 17.1);
}

#[test]
fn commit_fires_exactly_once() {
    let mut sw = SwitchState::default();
    sw.begin("hero", 17.1);
    sw.zoom_out_done = true;
    sw.decor_rewind_done = true;
    assert!(sw.try_commit().is_some());
    assert!(sw.try_commit().is_none());
    assert!(!sw.is_pending());
}

#[test]
fn completion_flags_alone_never_commit() {
    let mut sw = SwitchState::default();
    sw.zoom_out_done = true;
    sw.decor_rewind_done = true;
    assert!(sw.try_commit().is_none());
}

#[test]
fn rearming_replaces_the_pending_switch() {
    let mut sw = SwitchState::default();
    sw.begin("hero", 17.1);
    sw.zoom_out_done = true;
    sw.decor_rewind_done = true;

    // A second click before the rendezvous lands retargets and restarts it
    sw.begin("martyr", 15.8);
    assert!(sw.try_commit().is_none());
    assert_eq!(sw.pending_name(), Some("martyr"));

    sw.zoom_out_done = true;
    sw.decor_rewind_done = true;
    let (name, z) = sw.try_commit().unwrap();
    assert_eq!(name, "martyr");
    assert_eq!(z, 15.8);
}

#[test]
fn cancel_clears_everything() {
    let mut sw = SwitchState::default();
    sw.begin("hero", 17.1);
    sw.zoom_out_done = true;
    sw.cancel();
    assert!(!sw.is_pending());
    assert!(!sw.zoom_out_done);
    sw.decor_rewind_done = true;
    sw.zoom_out_done = true;
    assert!(sw.try_commit().is_none());
}
