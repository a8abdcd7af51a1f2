mod audio;
mod content;
mod core;
mod movement;
mod sprites;
mod stage;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Gemfall".to_string(),
                resolution: (1280.0, 720.0).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        // Physics clock at 50 Hz; the behavioral constants assume 0.02 s steps.
        .insert_resource(Time::<Fixed>::from_hz(50.0))
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            movement::MovementPlugin,
            sprites::SpritesPlugin,
            audio::GameAudioPlugin,
            stage::StagePlugin,
        ))
        .run();
}
