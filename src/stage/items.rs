//! Stage domain: holdable props and the grab interaction.
//!
//! The controller core only tracks held-item presence; this module is the
//! collaborator that sets and clears it.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::{PlaySound, SoundKind};
use crate::movement::{HeldItem, MovementState, Player};

/// Maximum distance at which a grab picks up a holdable.
const GRAB_RANGE: f32 = 1.2;

/// Local offset at which a held item is carried.
const CARRY_OFFSET: Vec2 = Vec2::new(0.0, 0.8);

#[derive(Component, Debug)]
pub struct Holdable;

/// Consume the grab edge: drop the held item, or pick up the nearest
/// holdable in reach.
pub(crate) fn resolve_grab(
    mut players: Query<(&Transform, &mut MovementState, &mut HeldItem), With<Player>>,
    holdables: Query<(Entity, &Transform), (With<Holdable>, Without<Player>)>,
    mut sounds: MessageWriter<PlaySound>,
) {
    for (transform, mut state, mut held) in &mut players {
        if !state.grab_queued {
            continue;
        }
        state.grab_queued = false;

        if held.0.is_some() {
            held.0 = None;
            continue;
        }

        let position = transform.translation.truncate();
        let nearest = holdables
            .iter()
            .map(|(entity, holdable)| {
                (entity, position.distance(holdable.translation.truncate()))
            })
            .filter(|(_, distance)| *distance <= GRAB_RANGE)
            .min_by(|a, b| a.1.total_cmp(&b.1));

        if let Some((entity, _)) = nearest {
            held.0 = Some(entity);
            sounds.write(PlaySound {
                kind: SoundKind::Pickup,
                randomize_pitch: true,
            });
        }
    }
}

/// Keep the held item parked above the player.
pub(crate) fn carry_held_item(
    players: Query<(&Transform, &HeldItem), With<Player>>,
    mut holdables: Query<&mut Transform, (With<Holdable>, Without<Player>)>,
) {
    for (player_transform, held) in &players {
        let Some(entity) = held.0 else {
            continue;
        };
        let Ok(mut transform) = holdables.get_mut(entity) else {
            continue;
        };

        let carried = player_transform.translation.truncate() + CARRY_OFFSET;
        transform.translation.x = carried.x;
        transform.translation.y = carried.y;
    }
}
