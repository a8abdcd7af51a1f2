//! Core domain: camera setup and session start.

use bevy::prelude::*;

use crate::core::{GameState, SessionConfig};

/// Camera zoom; the simulation runs in small world units (the player is
/// under one unit tall), so the view is scaled to roughly 48 px per unit.
const CAMERA_SCALE: f32 = 1.0 / 48.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_xyz(0.0, 2.5, 0.0).with_scale(Vec3::splat(CAMERA_SCALE)),
    ));
}

pub(crate) fn begin_session(
    config: Res<SessionConfig>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    info!("Starting session with seed {}", config.seed);
    next_state.set(GameState::Playing);
}
