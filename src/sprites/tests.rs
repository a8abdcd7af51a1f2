//! Sprites domain: unit tests for frame playback and key selection.

use super::animation::{PlayerAnimation, RUN_FRAME_COUNT, sprite_key};
use crate::movement::MotionState;

const DT: f32 = 0.02;

#[test]
fn run_frames_advance_and_wrap() {
    let mut animation = PlayerAnimation::default();

    // 0.1 s per frame at 0.02 s ticks: one frame every five ticks
    for _ in 0..5 {
        animation.advance(MotionState::Run, DT);
    }
    assert_eq!(animation.frame, 1);

    for _ in 0..(5 * 9) {
        animation.advance(MotionState::Run, DT);
    }
    assert_eq!(animation.frame, 10 % RUN_FRAME_COUNT);
}

#[test]
fn non_run_states_reset_the_frame() {
    let mut animation = PlayerAnimation::default();
    for _ in 0..12 {
        animation.advance(MotionState::Run, DT);
    }
    assert!(animation.frame > 0 || animation.frame_timer < animation.frame_time);

    animation.advance(MotionState::Fall, DT);
    assert_eq!(animation.frame, 0);
    assert_eq!(animation.frame_timer, animation.frame_time);
}

#[test]
fn sprite_keys_select_hold_variants() {
    assert_eq!(
        sprite_key(MotionState::Stand, false, 0),
        "player.base.stand"
    );
    assert_eq!(sprite_key(MotionState::Jump, true, 0), "player.hold.jump");
    assert_eq!(sprite_key(MotionState::Fall, false, 3), "player.base.fall");
    assert_eq!(sprite_key(MotionState::Run, true, 2), "player.hold.run_3");
}
