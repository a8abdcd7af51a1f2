//! Content domain: serde definitions for data files.

use serde::Deserialize;

use crate::movement::MovementTuning;

/// On-disk mirror of [`MovementTuning`] (assets/data/movement.ron).
#[derive(Debug, Clone, Deserialize)]
pub struct MovementDef {
    pub run_acceleration: f32,
    pub max_run_speed: f32,
    pub jump_force: f32,
    pub wall_jump_up: f32,
    pub wall_jump_side: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub max_jump_hold_time: f32,
    pub max_wall_jump_time: f32,
    pub ground_momentum_friction: f32,
    pub jump_buffer_time: f32,
    pub coyote_grace_time: f32,
}

impl From<MovementDef> for MovementTuning {
    fn from(def: MovementDef) -> Self {
        Self {
            run_acceleration: def.run_acceleration,
            max_run_speed: def.max_run_speed,
            jump_force: def.jump_force,
            wall_jump_up: def.wall_jump_up,
            wall_jump_side: def.wall_jump_side,
            gravity: def.gravity,
            max_fall_speed: def.max_fall_speed,
            max_jump_hold_time: def.max_jump_hold_time,
            max_wall_jump_time: def.max_wall_jump_time,
            ground_momentum_friction: def.ground_momentum_friction,
            jump_buffer_time: def.jump_buffer_time,
            coyote_grace_time: def.coyote_grace_time,
        }
    }
}
