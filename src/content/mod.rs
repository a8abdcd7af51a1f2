//! Content domain: config-time tuning loaded from RON data files.

mod data;
mod loader;


use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementTuning;

pub use data::MovementDef;
pub use loader::ContentLoadError;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, apply_movement_tuning);
    }
}

/// Apply assets/data/movement.ron over the compiled tuning defaults. The
/// constants need no validation beyond parsing; a missing or malformed file
/// keeps the defaults and is non-fatal.
fn apply_movement_tuning(mut tuning: ResMut<MovementTuning>) {
    match loader::load_single_file::<MovementDef>(Path::new("assets/data/movement.ron")) {
        Ok(def) => {
            *tuning = def.into();
            info!("Loaded movement tuning from assets/data/movement.ron");
        }
        Err(e) => {
            warn!("{}; using built-in movement tuning", e);
        }
    }
}
