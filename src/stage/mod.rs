//! Stage domain: static tile geometry and holdable props for the demo stage.

mod items;
mod spawn;

use bevy::prelude::*;

use crate::core::GameState;

pub use items::Holdable;

pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn::spawn_stage)
            .add_systems(
                Update,
                (items::resolve_grab, items::carry_held_item)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
