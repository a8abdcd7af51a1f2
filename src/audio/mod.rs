//! Audio domain: queued sound-effect playback with seeded pitch variation.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::SessionConfig;

/// Fractional playback-speed variation applied to randomized requests.
const PITCH_VARIATION: f32 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    Jump,
    /// Landing and bumps share one clip.
    Land,
    Pickup,
}

/// Request to play a sound effect, optionally with randomized pitch.
#[derive(Debug)]
pub struct PlaySound {
    pub kind: SoundKind,
    pub randomize_pitch: bool,
}

impl Message for PlaySound {}

/// Handles to the game-wide sound clips, kept alive for the session. A kind
/// without a loaded handle is the one degraded-input case in the game: the
/// request is logged and skipped.
#[derive(Resource, Default)]
pub struct SoundBank {
    pub jump: Option<Handle<AudioSource>>,
    pub land: Option<Handle<AudioSource>>,
    pub pickup: Option<Handle<AudioSource>>,
}

impl SoundBank {
    fn get(&self, kind: SoundKind) -> Option<Handle<AudioSource>> {
        match kind {
            SoundKind::Jump => self.jump.clone(),
            SoundKind::Land => self.land.clone(),
            SoundKind::Pickup => self.pickup.clone(),
        }
    }
}

/// Pitch source seeded from the session seed, so a replayed session issues
/// identical playback.
#[derive(Resource)]
pub struct PitchRng(pub ChaCha8Rng);

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundBank>()
            .add_message::<PlaySound>()
            .add_systems(Startup, (load_sound_bank, seed_pitch_rng))
            .add_systems(Update, play_queued_sounds);
    }
}

fn load_sound_bank(asset_server: Res<AssetServer>, mut bank: ResMut<SoundBank>) {
    bank.jump = Some(asset_server.load("audio/jump.ogg"));
    bank.land = Some(asset_server.load("audio/land.ogg"));
    bank.pickup = Some(asset_server.load("audio/pickup.ogg"));
}

fn seed_pitch_rng(config: Res<SessionConfig>, mut commands: Commands) {
    commands.insert_resource(PitchRng(ChaCha8Rng::seed_from_u64(config.seed)));
}

fn play_queued_sounds(
    mut requests: MessageReader<PlaySound>,
    bank: Res<SoundBank>,
    mut pitch: ResMut<PitchRng>,
    mut commands: Commands,
) {
    for request in requests.read() {
        let Some(handle) = bank.get(request.kind) else {
            warn!("Missing sound for {:?}, skipping playback", request.kind);
            continue;
        };

        let speed = if request.randomize_pitch {
            1.0 + pitch.0.random_range(-PITCH_VARIATION..PITCH_VARIATION)
        } else {
            1.0
        };

        commands.spawn((
            AudioPlayer::new(handle),
            PlaybackSettings::DESPAWN.with_speed(speed),
        ));
    }
}
