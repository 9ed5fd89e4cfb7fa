// Host-side tests for sprite playback and the bird flight cycle.

mod common;

use common::diorama::characters::BirdCycle;
use common::diorama::sprite::SpritePlayer;

#[test]
fn advance_steps_frames_at_fps() {
    let mut p = SpritePlayer::new(8, 8.0);
    // 8 fps -> 125 ms per frame
    assert!(!p.advance(100.0));
    assert_eq!(p.frame, 0);
    assert!(p.advance(30.0));
    assert_eq!(p.frame, 1);
}

#[test]
fn advance_wraps_around() {
    let mut p = SpritePlayer::new(4, 10.0);
    p.advance(450.0); // 4.5 frames
    assert_eq!(p.frame, 0);
    p.advance(100.0);
    assert_eq!(p.frame, 1);
}

#[test]
fn still_images_and_scrub_sheets_do_not_advance() {
    let mut still = SpritePlayer::new(1, 8.0);
    assert!(!still.advance(10_000.0));
    assert_eq!(still.frame, 0);

    let mut scrub = SpritePlayer::new(20, 0.0);
    assert!(!scrub.advance(10_000.0));
    assert_eq!(scrub.frame, 0);
}

#[test]
fn scrub_rounds_and_clamps() {
    let mut p = SpritePlayer::new(20, 0.0);
    p.scrub(9.4);
    assert_eq!(p.frame, 9);
    p.scrub(9.6);
    assert_eq!(p.frame, 10);
    p.scrub(-3.0);
    assert_eq!(p.frame, 0);
    p.scrub(99.0);
    assert_eq!(p.frame, 19);
}

#[test]
fn uv_window_matches_frame() {
    let mut p = SpritePlayer::new(4, 0.0);
    assert!((p.u_scale() - 0.25).abs() < 1e-6);
    p.scrub(2.0);
    assert!((p.u_offset() - 0.5).abs() < 1e-6);
}

#[test]
fn bird_waits_before_flying() {
    let mut bird = BirdCycle::default();
    let start = bird.start().unwrap();
    assert_eq!(start.frame, 0);
    assert!(start.x < 0.0);

    // Still in the initial delay
    assert!(bird.tick(1_500.0).is_none());
}

#[test]
fn bird_perches_mid_flight() {
    let mut bird = BirdCycle::default();
    bird.start();
    // 2000 ms delay + half of the 7700 ms flight
    let pose = bird.tick(2_000.0 + 3_850.0).unwrap();
    assert!((pose.x - 0.0).abs() < 1e-4);
    assert!((pose.y - (-0.14)).abs() < 1e-4);
    assert_eq!(pose.frame, 38);
}

#[test]
fn bird_frame_tracks_flight_progress() {
    let mut bird = BirdCycle::default();
    bird.start();
    let early = bird.tick(2_100.0).unwrap();
    let later = bird.tick(3_000.0).unwrap();
    assert!(later.frame > early.frame);
    assert!(later.frame < 77);
}

#[test]
fn bird_pauses_then_cycles() {
    let mut bird = BirdCycle::default();
    bird.start();
    // Past the flight, into the trailing pause
    assert!(bird.tick(2_000.0 + 7_700.0 + 1_000.0).is_none());
    // Full cycle is 15_700 ms; wrap into the next flight
    let pose = bird.tick(15_700.0 - 10_700.0 + 2_500.0);
    assert!(pose.is_some());
}

#[test]
fn bird_stop_halts_ticking() {
    let mut bird = BirdCycle::default();
    bird.start();
    bird.stop();
    assert!(!bird.is_active());
    assert!(bird.tick(5_000.0).is_none());
}
