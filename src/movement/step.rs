//! Movement domain: the per-step velocity integrator.
//!
//! `integrate_step` is a pure function over plain data so the fixed-step
//! semantics can be exercised directly in unit tests. The `integrate_motion`
//! system feeds it contacts and input, then commits the returned velocity to
//! the physics body.

use bevy::prelude::*;

use crate::audio::SoundKind;
use crate::movement::{
    ContactState, Facing, JumpPhase, MotionState, MovementState, MovementTuning,
};

/// Momentum below this magnitude snaps to zero during ground friction decay.
pub(crate) const MOMENTUM_ZERO_THRESHOLD: f32 = 0.05;

/// Advance the body by one physics step. Order is load-bearing: horizontal
/// blend, momentum overlay, facing, vertical integration against contacts,
/// jump resolution, active jump override, release handling.
pub(crate) fn integrate_step(
    state: &mut MovementState,
    contacts: ContactState,
    input_axis: f32,
    velocity: Vec2,
    tuning: &MovementTuning,
    dt: f32,
    sounds: &mut Vec<SoundKind>,
) -> Vec2 {
    let dx = tuning.run_acceleration * dt * input_axis;
    let mut x_vel = blend_horizontal(velocity.x, input_axis, dx, tuning.max_run_speed);

    if state.momentum.is_active() {
        x_vel = overlay_momentum(state, x_vel, input_axis, dx);
    }

    if input_axis != 0.0 {
        state.facing = if input_axis < 0.0 {
            Facing::Left
        } else {
            Facing::Right
        };
    }

    let mut y_vel;
    if contacts.on_ground {
        state.can_jump = true;
        state
            .momentum
            .decay(tuning.ground_momentum_friction, MOMENTUM_ZERO_THRESHOLD);
        if velocity.y < 0.0 {
            sounds.push(SoundKind::Land);
        }
        y_vel = 0.0;
        state.motion = if x_vel == 0.0 {
            MotionState::Stand
        } else {
            MotionState::Run
        };
    } else {
        y_vel = (velocity.y - tuning.gravity * dt).max(-tuning.max_fall_speed);
        if state.was_on_ground {
            state.coyote.start(tuning.coyote_grace_time);
        }
        if y_vel < 0.0 {
            state.motion = MotionState::Fall;
        }
    }
    state.was_on_ground = contacts.on_ground;

    if contacts.on_ceiling && y_vel > 0.0 {
        y_vel = 0.0;
        sounds.push(SoundKind::Land);
    }

    resolve_jump(state, contacts, sounds);

    match state.jump_phase {
        JumpPhase::Idle => {}
        JumpPhase::Floating { elapsed } => {
            y_vel = tuning.jump_force;
            let elapsed = elapsed + dt;
            state.jump_phase = if elapsed >= tuning.max_jump_hold_time {
                JumpPhase::Idle
            } else {
                JumpPhase::Floating { elapsed }
            };
        }
        JumpPhase::WallJumping { direction, elapsed } => {
            y_vel = tuning.wall_jump_up;
            x_vel = tuning.wall_jump_side * direction;
            let elapsed = elapsed + dt;
            state.jump_phase = if elapsed >= tuning.max_wall_jump_time {
                JumpPhase::Idle
            } else {
                JumpPhase::WallJumping { direction, elapsed }
            };
        }
    }

    apply_release(state);

    Vec2::new(x_vel, y_vel)
}

/// Run acceleration with instant direction reversal: velocity against the
/// input's sign snaps straight to zero instead of decelerating through it.
/// The speed cap scales with the axis magnitude, so partial analog input
/// also stops the body when the axis returns to zero.
fn blend_horizontal(prev: f32, input_axis: f32, dx: f32, max_run_speed: f32) -> f32 {
    if prev != 0.0 && input_axis != 0.0 && input_axis.signum() != prev.signum() {
        return 0.0;
    }
    let cap = (input_axis * max_run_speed).abs();
    (prev + dx).clamp(-cap, cap)
}

/// Blend active momentum over the input-driven velocity: with no input the
/// force is kept as-is; with input in the same direction the larger
/// magnitude wins (absorbing the force when input outruns it); input in the
/// opposing direction only erodes the force, it cannot push against it.
fn overlay_momentum(state: &mut MovementState, x_vel: f32, input_axis: f32, dx: f32) -> f32 {
    let force = state.momentum.get();
    if input_axis == 0.0 {
        force
    } else if input_axis.signum() == force.signum() {
        if x_vel.abs() >= force.abs() {
            state.momentum.clear();
            x_vel
        } else {
            force
        }
    } else {
        state.momentum.erode(dx)
    }
}

/// Consume a queued jump. The wall check runs before, not instead of, the
/// ground/coyote check; the wall branch clears `can_jump`, so both cannot
/// start in the same step.
fn resolve_jump(state: &mut MovementState, contacts: ContactState, sounds: &mut Vec<SoundKind>) {
    if !state.jump_queued {
        return;
    }

    if !contacts.on_ground {
        if contacts.on_wall_right {
            begin_jump(
                state,
                JumpPhase::WallJumping {
                    direction: -1.0,
                    elapsed: 0.0,
                },
                sounds,
            );
        } else if contacts.on_wall_left {
            begin_jump(
                state,
                JumpPhase::WallJumping {
                    direction: 1.0,
                    elapsed: 0.0,
                },
                sounds,
            );
        }
    }

    if state.can_jump {
        begin_jump(state, JumpPhase::Floating { elapsed: 0.0 }, sounds);
    }
}

fn begin_jump(state: &mut MovementState, phase: JumpPhase, sounds: &mut Vec<SoundKind>) {
    state.jump_buffer.cancel();
    state.jump_queued = false;
    state.can_jump = false;
    state.momentum.clear();
    state.jump_phase = phase;
    state.motion = MotionState::Jump;
    sounds.push(SoundKind::Jump);
}

/// A pending release cancels an active jump. The flag is cleared once it
/// either cancelled a Floating state or no queued jump remains to protect;
/// a release must never unqueue a buffered jump that has not started yet.
fn apply_release(state: &mut MovementState) {
    if !state.release_queued {
        return;
    }

    match state.jump_phase {
        JumpPhase::Floating { .. } => {
            state.jump_phase = JumpPhase::Idle;
            state.release_queued = false;
        }
        JumpPhase::WallJumping { .. } => {
            state.jump_phase = JumpPhase::Idle;
        }
        JumpPhase::Idle => {}
    }

    if !state.jump_queued {
        state.release_queued = false;
    }
}
