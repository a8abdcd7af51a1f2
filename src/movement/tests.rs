//! Movement domain: unit tests for the fixed-step integrator, momentum
//! blending, and timing windows. All tests drive the pure step function at
//! the physics rate (dt = 0.02) with hand-built contact states.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::step::integrate_step;
use super::{
    ContactState, Facing, JumpPhase, MotionState, Momentum, MovementState, MovementTuning,
    TimingTick, TimingWindow,
};
use crate::audio::SoundKind;

const DT: f32 = 0.02;

struct Sim {
    state: MovementState,
    tuning: MovementTuning,
    velocity: Vec2,
    sounds: Vec<SoundKind>,
}

impl Sim {
    fn new() -> Self {
        Self {
            state: MovementState::default(),
            tuning: MovementTuning::default(),
            velocity: Vec2::ZERO,
            sounds: Vec::new(),
        }
    }

    /// One physics step preceded by one frame tick of the buffered windows,
    /// the way the schedules interleave when both clocks run at 50 Hz.
    /// Presses queued before calling this are one frame old by the time the
    /// integrator sees them.
    fn step(&mut self, contacts: ContactState, input_axis: f32) {
        if let TimingTick::Expired = self.state.jump_buffer.tick(DT) {
            self.state.jump_queued = false;
        }
        if let TimingTick::Expired = self.state.coyote.tick(DT) {
            self.state.can_jump = false;
        }

        self.sounds.clear();
        self.velocity = integrate_step(
            &mut self.state,
            contacts,
            input_axis,
            self.velocity,
            &self.tuning,
            DT,
            &mut self.sounds,
        );
    }

    fn press_jump(&mut self) {
        self.state.jump_buffer.start(self.tuning.jump_buffer_time);
        self.state.jump_queued = true;
    }

    fn release_jump(&mut self) {
        self.state.release_queued = true;
    }
}

fn grounded() -> ContactState {
    ContactState {
        on_ground: true,
        ..Default::default()
    }
}

fn airborne() -> ContactState {
    ContactState::default()
}

fn wall_right() -> ContactState {
    ContactState {
        on_wall_right: true,
        ..Default::default()
    }
}

fn wall_left() -> ContactState {
    ContactState {
        on_wall_left: true,
        ..Default::default()
    }
}

// --- timing windows ---

#[test]
fn window_expires_exactly_once() {
    let mut window = TimingWindow::default();
    window.start(0.05);
    assert_eq!(window.tick(DT), TimingTick::Armed);
    assert_eq!(window.tick(DT), TimingTick::Armed);
    assert_eq!(window.tick(DT), TimingTick::Expired);
    assert_eq!(window.tick(DT), TimingTick::Idle);
    assert!(!window.armed());
}

#[test]
fn cancelled_window_does_not_fire() {
    let mut window = TimingWindow::default();
    window.start(0.01);
    window.cancel();
    assert_eq!(window.tick(DT), TimingTick::Idle);
}

#[test]
fn cancel_then_restart_within_one_tick_leaves_no_residue() {
    let mut window = TimingWindow::default();
    window.start(0.01);
    window.cancel();
    window.start(0.1);

    // The replaced arming would have fired on the first tick; the fresh one
    // must run its full duration and fire exactly once.
    let mut expirations = 0;
    for _ in 0..10 {
        if window.tick(DT) == TimingTick::Expired {
            expirations += 1;
        }
    }
    assert_eq!(expirations, 1);
}

// --- momentum ---

#[test]
fn momentum_friction_decays_and_snaps_to_zero() {
    let mut momentum = Momentum::default();
    momentum.set(5.0);
    momentum.decay(0.8, 0.05);
    assert_eq!(momentum.get(), 4.0);

    momentum.set(0.06);
    momentum.decay(0.8, 0.05);
    assert_eq!(momentum.get(), 0.0);
}

#[test]
fn momentum_erosion_never_crosses_zero() {
    let mut momentum = Momentum::default();
    momentum.set(-3.0);
    for _ in 0..20 {
        let eroded = momentum.erode(0.3);
        assert!(eroded <= 0.0);
    }
    assert_eq!(momentum.get(), 0.0);
}

// --- horizontal blend ---

#[test]
fn run_acceleration_first_step() {
    let mut sim = Sim::new();
    sim.step(grounded(), 1.0);
    assert_eq!(sim.velocity.x, 15.0 * DT);
    assert_eq!(sim.state.motion, MotionState::Run);
}

#[test]
fn partial_analog_input_scales_the_speed_cap() {
    let mut sim = Sim::new();
    for _ in 0..40 {
        sim.step(grounded(), 0.5);
    }
    assert_eq!(sim.velocity.x, 3.5);
}

#[test]
fn opposite_input_snaps_velocity_to_zero() {
    let mut sim = Sim::new();
    for _ in 0..10 {
        sim.step(grounded(), 1.0);
    }
    assert!(sim.velocity.x > 0.0);
    sim.step(grounded(), -1.0);
    assert_eq!(sim.velocity.x, 0.0);
}

#[test]
fn zero_input_stops_and_stays_stopped() {
    let mut sim = Sim::new();
    sim.velocity.x = 3.0;
    sim.step(grounded(), 0.0);
    assert_eq!(sim.velocity.x, 0.0);

    for _ in 0..10 {
        sim.step(grounded(), 0.0);
        assert_eq!(sim.velocity.x, 0.0);
    }
    assert_eq!(sim.state.motion, MotionState::Stand);
}

// --- momentum overlay ---

#[test]
fn momentum_overrides_velocity_with_no_input() {
    let mut sim = Sim::new();
    sim.state.momentum.set(5.0);
    sim.step(grounded(), 0.0);
    assert_eq!(sim.velocity.x, 5.0);
    // ground friction decays the force after the override
    assert_eq!(sim.state.momentum.get(), 4.0);
}

#[test]
fn same_direction_input_absorbs_momentum_once_faster() {
    let mut sim = Sim::new();
    sim.state.momentum.set(2.0);
    sim.step(grounded(), 1.0);
    // input velocity (0.3) is still slower: the force wins
    assert_eq!(sim.velocity.x, 2.0);
    assert_eq!(sim.state.momentum.get(), 1.6);

    sim.step(grounded(), 1.0);
    // carried velocity (2.3) now outruns the decayed force: absorbed
    assert_eq!(sim.state.momentum.get(), 0.0);
    assert!((sim.velocity.x - 2.3).abs() < 1e-5);
}

#[test]
fn opposing_input_erodes_momentum_and_drives_velocity() {
    let mut sim = Sim::new();
    sim.state.momentum.set(-3.0);

    sim.step(airborne(), 1.0);
    assert!((sim.velocity.x - -2.7).abs() < 1e-5);
    assert!((sim.state.momentum.get() - -2.7).abs() < 1e-5);

    for _ in 0..20 {
        sim.step(airborne(), 1.0);
        assert!(sim.state.momentum.get() <= 0.0);
    }
    assert_eq!(sim.state.momentum.get(), 0.0);
}

// --- facing ---

#[test]
fn facing_updates_only_from_nonzero_input() {
    let mut sim = Sim::new();
    sim.step(grounded(), 1.0);
    assert_eq!(sim.state.facing, Facing::Right);

    // momentum drags the body left, but with no input the facing holds
    sim.state.momentum.set(-5.0);
    sim.step(grounded(), 0.0);
    assert!(sim.velocity.x < 0.0);
    assert_eq!(sim.state.facing, Facing::Right);

    sim.step(grounded(), -1.0);
    assert_eq!(sim.state.facing, Facing::Left);
}

// --- vertical integration ---

#[test]
fn gravity_accumulates_and_floors_at_max_fall_speed() {
    let mut sim = Sim::new();
    sim.step(airborne(), 0.0);
    assert_eq!(sim.velocity.y, -40.0 * DT);
    assert_eq!(sim.state.motion, MotionState::Fall);

    for _ in 0..200 {
        sim.step(airborne(), 0.0);
    }
    assert_eq!(sim.velocity.y, -50.0);
}

#[test]
fn landing_while_falling_plays_the_land_sound() {
    let mut sim = Sim::new();
    sim.velocity.y = -2.0;
    sim.step(grounded(), 0.0);
    assert_eq!(sim.velocity.y, 0.0);
    assert!(sim.sounds.contains(&SoundKind::Land));
}

#[test]
fn ceiling_contact_zeroes_upward_velocity() {
    let mut sim = Sim::new();
    sim.velocity.y = 3.0;
    let contacts = ContactState {
        on_ceiling: true,
        ..Default::default()
    };
    sim.step(contacts, 0.0);
    assert_eq!(sim.velocity.y, 0.0);
    assert!(sim.sounds.contains(&SoundKind::Land));
}

// --- jumps ---

#[test]
fn grounded_jump_floats_for_fifteen_steps_then_ends() {
    let mut sim = Sim::new();
    sim.step(grounded(), 0.0);
    sim.press_jump();
    sim.step(grounded(), 0.0);

    // the jump begins within the same step the press is resolved
    assert_eq!(sim.velocity.y, 8.0);
    assert!(sim.sounds.contains(&SoundKind::Jump));
    assert_eq!(sim.state.motion, MotionState::Jump);
    assert!(!sim.state.jump_queued);
    assert!(!sim.state.can_jump);

    let mut float_steps = 1;
    for _ in 0..30 {
        sim.step(airborne(), 0.0);
        if sim.velocity.y == 8.0 {
            float_steps += 1;
        } else {
            break;
        }
    }
    // 0.3 s of hold at 0.02 s per step, ending even with the button held
    assert_eq!(float_steps, 15);
    assert_eq!(sim.state.jump_phase, JumpPhase::Idle);
}

#[test]
fn releasing_early_cuts_the_float_short() {
    let mut sim = Sim::new();
    sim.step(grounded(), 0.0);
    sim.press_jump();
    sim.step(grounded(), 0.0);
    sim.step(airborne(), 0.0);
    assert_eq!(sim.velocity.y, 8.0);

    sim.release_jump();
    sim.step(airborne(), 0.0);
    assert_eq!(sim.state.jump_phase, JumpPhase::Idle);
    assert!(!sim.state.release_queued);

    sim.step(airborne(), 0.0);
    assert!(sim.velocity.y < 8.0);
}

#[test]
fn buffered_jump_executes_on_the_landing_step() {
    let mut sim = Sim::new();
    sim.velocity.y = -1.0;
    sim.press_jump();

    // 0.06 s in the air: well inside the 0.1 s buffer
    for _ in 0..3 {
        sim.step(airborne(), 0.0);
        assert_eq!(sim.state.jump_phase, JumpPhase::Idle);
    }

    sim.step(grounded(), 0.0);
    assert_eq!(sim.state.jump_phase, JumpPhase::Floating { elapsed: DT });
    assert_eq!(sim.velocity.y, 8.0);
}

#[test]
fn expired_buffer_drops_the_queued_jump() {
    let mut sim = Sim::new();
    sim.velocity.y = -1.0;
    sim.press_jump();

    // 0.12 s in the air: the 0.1 s buffer runs out
    for _ in 0..6 {
        sim.step(airborne(), 0.0);
    }
    assert!(!sim.state.jump_queued);

    sim.step(grounded(), 0.0);
    assert_eq!(sim.state.jump_phase, JumpPhase::Idle);
    assert_eq!(sim.velocity.y, 0.0);
}

#[test]
fn coyote_grace_allows_a_late_jump() {
    let mut sim = Sim::new();
    sim.step(grounded(), 0.0);

    // 0.08 s after walking off the edge, still inside the 0.1 s grace
    for _ in 0..4 {
        sim.step(airborne(), 0.0);
    }
    assert!(sim.state.can_jump);

    sim.press_jump();
    sim.step(airborne(), 0.0);
    assert_eq!(sim.velocity.y, 8.0);
    assert!(matches!(sim.state.jump_phase, JumpPhase::Floating { .. }));
}

#[test]
fn coyote_grace_expires() {
    let mut sim = Sim::new();
    sim.step(grounded(), 0.0);

    for _ in 0..6 {
        sim.step(airborne(), 0.0);
    }
    assert!(!sim.state.can_jump);

    sim.press_jump();
    sim.step(airborne(), 0.0);
    assert_eq!(sim.state.jump_phase, JumpPhase::Idle);
}

#[test]
fn wall_jump_right_pushes_left() {
    let mut sim = Sim::new();
    sim.step(airborne(), 0.0);
    sim.press_jump();
    sim.step(wall_right(), 0.0);

    assert_eq!(
        sim.state.jump_phase,
        JumpPhase::WallJumping {
            direction: -1.0,
            elapsed: DT
        }
    );
    assert_eq!(sim.velocity.x, -sim.tuning.wall_jump_side);
    assert_eq!(sim.velocity.y, sim.tuning.wall_jump_up);
    assert!(sim.sounds.contains(&SoundKind::Jump));
}

#[test]
fn wall_jump_left_pushes_right() {
    let mut sim = Sim::new();
    sim.step(airborne(), 0.0);
    sim.press_jump();
    sim.step(wall_left(), 0.0);

    assert!(matches!(
        sim.state.jump_phase,
        JumpPhase::WallJumping { direction, .. } if direction == 1.0
    ));
    assert_eq!(sim.velocity.x, sim.tuning.wall_jump_side);
}

#[test]
fn wall_jump_ends_after_its_hold_time_or_release() {
    let mut sim = Sim::new();
    sim.step(airborne(), 0.0);
    sim.press_jump();
    sim.step(wall_right(), 0.0);

    let mut steps = 1;
    for _ in 0..30 {
        sim.step(airborne(), 0.0);
        if sim.velocity.y == sim.tuning.wall_jump_up {
            steps += 1;
        } else {
            break;
        }
    }
    assert_eq!(steps, 15);

    // and a fresh wall jump dies immediately on release
    sim.press_jump();
    sim.step(wall_right(), 0.0);
    assert!(matches!(
        sim.state.jump_phase,
        JumpPhase::WallJumping { .. }
    ));
    sim.release_jump();
    sim.step(airborne(), 0.0);
    assert_eq!(sim.state.jump_phase, JumpPhase::Idle);
}

#[test]
fn wall_check_runs_before_the_coyote_check() {
    let mut sim = Sim::new();
    sim.step(grounded(), 0.0);
    sim.step(airborne(), 0.0);
    assert!(sim.state.can_jump); // coyote still live

    // with a wall on the right, the wall branch wins over the coyote jump
    sim.press_jump();
    sim.step(wall_right(), 0.0);
    assert!(matches!(
        sim.state.jump_phase,
        JumpPhase::WallJumping { direction, .. } if direction == -1.0
    ));
    assert!(!sim.state.can_jump);
}

#[test]
fn jump_start_clears_momentum() {
    let mut sim = Sim::new();
    sim.state.momentum.set(5.0);
    sim.step(grounded(), 0.0);
    sim.press_jump();
    sim.step(grounded(), 0.0);
    assert_eq!(sim.state.momentum.get(), 0.0);
}

#[test]
fn queued_jump_is_consumed_exactly_once() {
    let mut sim = Sim::new();
    sim.step(grounded(), 0.0);
    sim.press_jump();

    let mut jump_sounds = 0;
    sim.step(grounded(), 0.0);
    jump_sounds += sim.sounds.iter().filter(|s| **s == SoundKind::Jump).count();
    for _ in 0..20 {
        sim.step(airborne(), 0.0);
        jump_sounds += sim.sounds.iter().filter(|s| **s == SoundKind::Jump).count();
    }
    assert_eq!(jump_sounds, 1);
    assert!(!sim.state.jump_queued);
}

#[test]
fn stale_release_does_not_unqueue_a_buffered_jump() {
    let mut sim = Sim::new();
    sim.velocity.y = -1.0;
    sim.press_jump();
    sim.release_jump();

    sim.step(airborne(), 0.0);
    assert!(sim.state.jump_queued);
    assert!(sim.state.release_queued);

    // the buffered jump still begins on landing; the stale release then
    // ends it after its first step
    sim.step(grounded(), 0.0);
    assert_eq!(sim.velocity.y, 8.0);
    assert_eq!(sim.state.jump_phase, JumpPhase::Idle);
    assert!(!sim.state.release_queued);
}

#[test]
fn release_with_nothing_active_and_nothing_queued_clears_itself() {
    let mut sim = Sim::new();
    sim.release_jump();
    sim.step(grounded(), 0.0);
    assert!(!sim.state.release_queued);
}

// --- invariants ---

#[test]
fn horizontal_speed_stays_bounded() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut sim = Sim::new();

    for _ in 0..500 {
        let choice: usize = rng.random_range(0..3);
        let input = [-1.0, 0.0, 1.0][choice];
        let contacts = if rng.random_bool(0.5) {
            grounded()
        } else if rng.random_bool(0.2) {
            wall_right()
        } else {
            airborne()
        };
        if rng.random_bool(0.1) {
            sim.press_jump();
        }
        if rng.random_bool(0.1) {
            sim.release_jump();
        }
        if rng.random_bool(0.05) {
            sim.state.momentum.set(rng.random_range(-12.0..12.0));
        }

        let momentum_before = sim.state.momentum.get().abs();
        sim.step(contacts, input);

        let bound = sim
            .tuning
            .max_run_speed
            .max(momentum_before)
            .max(sim.tuning.wall_jump_side);
        assert!(
            sim.velocity.x.abs() <= bound + 1e-4,
            "|vx| = {} exceeded bound {}",
            sim.velocity.x.abs(),
            bound
        );
    }
}
