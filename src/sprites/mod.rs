//! Sprites module for player sprite selection and animation.

pub mod animation;
pub mod manifest;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::core::GameState;

pub use animation::*;
pub use manifest::*;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteManifest>()
            .add_systems(Startup, load_sprite_manifest)
            .add_systems(
                Update,
                (advance_player_animation, sync_player_sprite)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// System to load the sprite manifest at startup.
fn load_sprite_manifest(mut manifest: ResMut<SpriteManifest>, asset_server: Res<AssetServer>) {
    manifest.load_from_file("assets/sprites/manifest.json", &asset_server);
}
