//! Stage domain: demo stage layout.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Tile};
use crate::stage::items::Holdable;

pub(crate) fn spawn_stage(mut commands: Commands) {
    let tile_color = Color::srgb(0.35, 0.4, 0.35);
    let wall_color = Color::srgb(0.25, 0.25, 0.35);
    let gem_color = Color::srgb(0.4, 0.8, 0.9);

    let tile_layers = CollisionLayers::new(GameLayer::Tiles, [GameLayer::Player]);

    // Ground slab
    spawn_tile(
        &mut commands,
        Vec2::new(0.0, -0.5),
        Vec2::new(16.0, 1.0),
        tile_color,
        tile_layers,
    );

    // Side walls
    spawn_tile(
        &mut commands,
        Vec2::new(-8.5, 4.0),
        Vec2::new(1.0, 10.0),
        wall_color,
        tile_layers,
    );
    spawn_tile(
        &mut commands,
        Vec2::new(8.5, 4.0),
        Vec2::new(1.0, 10.0),
        wall_color,
        tile_layers,
    );

    // Floating platform
    spawn_tile(
        &mut commands,
        Vec2::new(3.0, 2.0),
        Vec2::new(3.0, 0.5),
        tile_color,
        tile_layers,
    );

    // A holdable gem resting on the ground
    commands.spawn((
        Holdable,
        Sprite {
            color: gem_color,
            custom_size: Some(Vec2::splat(0.4)),
            ..default()
        },
        Transform::from_xyz(-3.0, 0.2, 0.5),
    ));

    info!("Spawned demo stage");
}

fn spawn_tile(
    commands: &mut Commands,
    center: Vec2,
    size: Vec2,
    color: Color,
    layers: CollisionLayers,
) {
    commands.spawn((
        Tile,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        layers,
    ));
}
