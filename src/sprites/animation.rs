//! Player animation playback and sprite selection.
//!
//! Pure derivation from the motion state the integrator wrote: only the run
//! cycle animates, everything else holds frame zero. No feedback into
//! motion.

use bevy::prelude::*;

use crate::movement::{Facing, HeldItem, MotionState, MovementState, Player};
use crate::sprites::SpriteManifest;

/// Seconds per run-cycle frame.
pub const RUN_FRAME_TIME: f32 = 0.1;

/// Number of frames in the run cycle.
pub const RUN_FRAME_COUNT: usize = 4;

/// Frame playback state for the player sprite.
#[derive(Component, Debug)]
pub struct PlayerAnimation {
    /// Current frame index (0-based).
    pub frame: usize,
    /// Seconds per frame of the active animation.
    pub frame_time: f32,
    /// Counts down from `frame_time` to zero.
    pub frame_timer: f32,
}

impl Default for PlayerAnimation {
    fn default() -> Self {
        Self {
            frame: 0,
            frame_time: RUN_FRAME_TIME,
            frame_timer: RUN_FRAME_TIME,
        }
    }
}

impl PlayerAnimation {
    /// Advance playback by one frame-clock tick.
    pub fn advance(&mut self, motion: MotionState, dt: f32) {
        if motion == MotionState::Run {
            self.frame_time = RUN_FRAME_TIME;
            self.advance_frame(RUN_FRAME_COUNT, dt);
        } else {
            self.frame = 0;
            self.frame_timer = self.frame_time;
        }
    }

    fn advance_frame(&mut self, frame_count: usize, dt: f32) {
        if self.frame >= frame_count {
            self.frame = 0;
        }

        self.frame_timer -= dt;
        if self.frame_timer <= 0.0 {
            self.frame_timer = self.frame_time;
            self.frame = (self.frame + 1) % frame_count;
        }
    }
}

/// Manifest key for a motion state, holding flag, and run frame.
pub fn sprite_key(motion: MotionState, holding: bool, frame: usize) -> String {
    let variant = if holding { "hold" } else { "base" };
    let name = match motion {
        MotionState::Stand => "stand".to_string(),
        MotionState::Jump => "jump".to_string(),
        MotionState::Fall => "fall".to_string(),
        MotionState::Run => format!("run_{}", frame + 1),
    };
    format!("player.{}.{}", variant, name)
}

pub(crate) fn advance_player_animation(
    time: Res<Time>,
    mut query: Query<(&MovementState, &mut PlayerAnimation), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, mut animation) in &mut query {
        animation.advance(state.motion, dt);
    }
}

/// Assign the selected sprite and mirror it when facing left (the source
/// images face right).
pub(crate) fn sync_player_sprite(
    manifest: Res<SpriteManifest>,
    mut query: Query<(&MovementState, &PlayerAnimation, &HeldItem, &mut Sprite), With<Player>>,
) {
    for (state, animation, held, mut sprite) in &mut query {
        sprite.flip_x = state.facing == Facing::Left;

        let key = sprite_key(state.motion, held.0.is_some(), animation.frame);
        if let Some(texture) = manifest.get_texture(&key) {
            sprite.image = texture;
        }
    }
}
