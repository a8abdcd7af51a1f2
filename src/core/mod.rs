//! Core domain: game states, session configuration, and bootstrapping.

mod resources;
mod state;
mod systems;

use bevy::prelude::*;

pub use resources::SessionConfig;
pub use state::GameState;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<SessionConfig>()
            .add_systems(Startup, (systems::setup_camera, systems::begin_session));
    }
}
