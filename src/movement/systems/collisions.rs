//! Movement domain: contact probes and collision response.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{PlaySound, SoundKind};
use crate::movement::{BodyOutline, ContactState, GameLayer, MovementState, Player, Tile};

/// Offset of each probe away from the outline, avoiding self-intersection.
const PROBE_EPSILON: f32 = 0.02;

/// Recompute the four contact flags from short raycasts against the tile
/// layer. Runs first in the fixed-step chain; absent geometry is the normal
/// "no contact" result.
pub(crate) fn probe_contacts(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &BodyOutline, &mut ContactState), With<Player>>,
) {
    let filter = SpatialQueryFilter::from_mask(GameLayer::Tiles);

    for (transform, outline, mut contacts) in &mut query {
        let position = transform.translation.truncate();

        contacts.on_ground =
            probe_side(&spatial_query, &filter, position, outline, 0, 1, Vec2::NEG_Y);
        contacts.on_ceiling = probe_side(&spatial_query, &filter, position, outline, 2, 3, Vec2::Y);
        contacts.on_wall_right =
            probe_side(&spatial_query, &filter, position, outline, 1, 2, Vec2::X);
        contacts.on_wall_left =
            probe_side(&spatial_query, &filter, position, outline, 3, 4, Vec2::NEG_X);
    }
}

/// Cast along one outline edge, pushed out by the probe epsilon in the
/// contact direction. A hit on the tile layer means contact on that side.
fn probe_side(
    spatial_query: &SpatialQuery,
    filter: &SpatialQueryFilter,
    position: Vec2,
    outline: &BodyOutline,
    point0: usize,
    point1: usize,
    direction: Vec2,
) -> bool {
    let start = position + outline.points[point0] + direction * PROBE_EPSILON;
    let end = position + outline.points[point1] + direction * PROBE_EPSILON;
    let delta = end - start;
    let Ok(cast_direction) = Dir2::new(delta) else {
        return false;
    };

    spatial_query
        .cast_ray(start, cast_direction, delta.length(), true, filter)
        .is_some()
}

/// Collision response for solid side contacts: a hit whose normal has a
/// horizontal component kills any active momentum, with a bump sound if
/// momentum was live. Floor and ceiling contacts are the probes' business.
pub(crate) fn handle_wall_contacts(
    mut collision_messages: MessageReader<CollisionStart>,
    collisions: Collisions,
    tiles: Query<(), With<Tile>>,
    mut players: Query<&mut MovementState, With<Player>>,
    mut sounds: MessageWriter<PlaySound>,
) {
    for message in collision_messages.read() {
        let pairs = [
            (message.collider1, message.collider2),
            (message.collider2, message.collider1),
        ];

        for (player_entity, tile_entity) in pairs {
            let Ok(mut state) = players.get_mut(player_entity) else {
                continue;
            };
            if tiles.get(tile_entity).is_err() {
                continue;
            }

            let Some(contact_pair) = collisions.get(player_entity, tile_entity) else {
                continue;
            };
            let Some(manifold) = contact_pair.manifolds.first() else {
                continue;
            };
            if manifold.normal.x == 0.0 {
                continue;
            }

            if state.momentum.is_active() {
                sounds.write(PlaySound {
                    kind: SoundKind::Land,
                    randomize_pitch: false,
                });
            }
            state.momentum.clear();
        }
    }
}
