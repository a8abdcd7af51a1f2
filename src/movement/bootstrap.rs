//! Movement domain: player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{BodyOutline, ContactState, GameLayer, HeldItem, MovementState, Player};
use crate::sprites::PlayerAnimation;

/// Player body size in world units; the collider and probe outline share it.
pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(0.9, 0.9);

pub(crate) fn spawn_player(mut commands: Commands) {
    let half = PLAYER_SIZE / 2.0;

    commands.spawn((
        (
            Player,
            MovementState::default(),
            ContactState::default(),
            BodyOutline::from_half_extents(half),
            HeldItem::default(),
            PlayerAnimation::default(),
        ),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 2.0, 1.0),
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // the integrator applies gravity itself
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Tiles]),
        ),
    ));

    info!("Spawned player");
}
