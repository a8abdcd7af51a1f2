//! Movement domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub run_acceleration: f32,
    pub max_run_speed: f32,
    /// Vertical speed held for the duration of a floaty jump.
    pub jump_force: f32,
    pub wall_jump_up: f32,
    pub wall_jump_side: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub max_jump_hold_time: f32,
    pub max_wall_jump_time: f32,
    /// Per-step decay factor applied to momentum while grounded.
    pub ground_momentum_friction: f32,
    /// Time before becoming eligible that a jump press stays queued.
    pub jump_buffer_time: f32,
    /// Time after leaving ground during which a jump is still permitted.
    pub coyote_grace_time: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            run_acceleration: 15.0,
            max_run_speed: 7.0,
            jump_force: 8.0,
            wall_jump_up: 8.0 / std::f32::consts::SQRT_2,
            wall_jump_side: 8.0 / std::f32::consts::SQRT_2,
            gravity: 40.0,
            max_fall_speed: 50.0,
            max_jump_hold_time: 0.3,
            max_wall_jump_time: 0.3,
            ground_momentum_friction: 0.8,
            jump_buffer_time: 0.1,
            coyote_grace_time: 0.1,
        }
    }
}

/// Device-independent input sampled once per frame. Edges are consumed by
/// `queue_actions` in the same frame they are sampled.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Horizontal axis in [-1, 1]; magnitude scales the run speed cap.
    pub axis: f32,
    pub jump_pressed: bool,
    pub jump_released: bool,
    pub grab_pressed: bool,
    /// Latch for the analog triggers so a grab fires on the zero crossing.
    pub trigger_was_held: bool,
}
