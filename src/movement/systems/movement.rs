//! Movement domain: timer ticking and fixed-step integration systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::PlaySound;
use crate::movement::step::integrate_step;
use crate::movement::timing::TimingTick;
use crate::movement::{ContactState, MovementInput, MovementState, MovementTuning, Player};

/// Tick the buffered windows on the frame clock. Buffer expiry drops the
/// queued jump; coyote expiry ends the post-ground jump grace.
pub(crate) fn update_timers(time: Res<Time>, mut query: Query<&mut MovementState, With<Player>>) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        if let TimingTick::Expired = state.jump_buffer.tick(dt) {
            state.jump_queued = false;
        }
        if let TimingTick::Expired = state.coyote.tick(dt) {
            state.can_jump = false;
        }
    }
}

/// One physics step: run the integrator over the probed contacts and commit
/// the resulting velocity. The engine advances the body from that velocity;
/// this system is the sole writer of it.
pub(crate) fn integrate_motion(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut sounds: MessageWriter<PlaySound>,
    mut query: Query<(&ContactState, &mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (contacts, mut state, mut velocity) in &mut query {
        let mut queued_sounds = Vec::new();
        let next = integrate_step(
            &mut state,
            *contacts,
            input.axis,
            velocity.0,
            &tuning,
            dt,
            &mut queued_sounds,
        );
        velocity.0 = next;

        for kind in queued_sounds {
            sounds.write(PlaySound {
                kind,
                randomize_pitch: false,
            });
        }
    }
}
