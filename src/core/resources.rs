//! Core domain: session-wide configuration.

use bevy::prelude::*;
use rand::Rng;

/// Per-session configuration. The seed drives every draw outside the fixed
/// simulation (sound pitch), so two sessions with the same seed replay the
/// same playback.
#[derive(Resource, Debug, Clone)]
pub struct SessionConfig {
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}
