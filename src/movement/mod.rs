//! Movement domain: deterministic fixed-step locomotion for the player body.
//!
//! Two clocks cooperate: the frame clock (`Update`) samples input edges and
//! ticks the buffered timing windows; the physics clock (`FixedUpdate`)
//! probes contacts and integrates velocity. The integrator is the only
//! writer of the body's velocity and momentum.

mod bootstrap;
mod components;
mod resources;
mod step;
mod systems;
mod timing;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::core::GameState;

pub use components::{
    BodyOutline, ContactState, Facing, GameLayer, HeldItem, JumpPhase, MotionState, Momentum,
    MovementState, Player, Tile,
};
pub use resources::{MovementInput, MovementTuning};
pub use timing::{TimingTick, TimingWindow};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(OnEnter(GameState::Playing), bootstrap::spawn_player)
            .add_systems(
                Update,
                (
                    systems::update_timers,
                    systems::read_input,
                    systems::queue_actions,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                FixedUpdate,
                (
                    systems::handle_wall_contacts,
                    systems::probe_contacts,
                    systems::integrate_motion,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
