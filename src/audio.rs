//! Audio playback using SDL2_mixer
//!
//! Background music loops from startup; sound effects are triggered by
//! gameplay events. If the audio device cannot be opened the manager runs
//! silently and the game carries on.

use log::{info, warn};
use sdl2::mixer::{self, Channel, Chunk, InitFlag, Music, Sdl2MixerContext};
use sdl2::AudioSubsystem;

use crate::assets::{AssetPaths, BACKGROUND_MUSIC, JUMP_SOUND};
use crate::game::GameEvent;
use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Jump,
}

/// Sound effects to play for one tick's events
pub fn effects_for(events: &[GameEvent]) -> Vec<SoundEffect> {
    events
        .iter()
        .filter_map(|event| match event {
            GameEvent::Jumped => Some(SoundEffect::Jump),
            GameEvent::Scored { .. } | GameEvent::Died { .. } => None,
        })
        .collect()
}

// Field order is drop order: sounds before the mixer, mixer before the subsystem
struct LoadedAudio {
    music: Music<'static>,
    jump: Chunk,
    _mixer: Sdl2MixerContext,
    _subsystem: AudioSubsystem,
}

/// Audio manager for the game
pub struct AudioManager {
    loaded: Option<LoadedAudio>,
}

impl AudioManager {
    /// Open the audio device and load the music and effects.
    ///
    /// Never fails: any problem is logged and leaves the manager silent.
    pub fn new(sdl_context: &sdl2::Sdl, assets: &AssetPaths, settings: &Settings) -> Self {
        match Self::open(sdl_context, assets, settings) {
            Ok(loaded) => AudioManager {
                loaded: Some(loaded),
            },
            Err(e) => {
                warn!("Audio disabled: {}", e);
                Self::silent()
            }
        }
    }

    /// A manager that plays nothing
    pub fn silent() -> Self {
        AudioManager { loaded: None }
    }

    fn open(
        sdl_context: &sdl2::Sdl,
        assets: &AssetPaths,
        settings: &Settings,
    ) -> Result<LoadedAudio, String> {
        let subsystem = sdl_context.audio()?;
        mixer::open_audio(
            mixer::DEFAULT_FREQUENCY,
            mixer::DEFAULT_FORMAT,
            mixer::DEFAULT_CHANNELS,
            1024,
        )?;
        let mixer_context = mixer::init(InitFlag::MP3)?;
        mixer::allocate_channels(4);

        let music = Music::from_file(assets.path(BACKGROUND_MUSIC))?;
        let mut jump = Chunk::from_file(assets.path(JUMP_SOUND))?;

        Music::set_volume(settings.mixer_volume(settings.music_volume));
        jump.set_volume(settings.mixer_volume(settings.sfx_volume));

        info!("Audio initialized");
        Ok(LoadedAudio {
            music,
            jump,
            _mixer: mixer_context,
            _subsystem: subsystem,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.loaded.is_some()
    }

    /// Start the background track, looping forever
    pub fn start_music(&self) {
        if let Some(audio) = &self.loaded {
            if let Err(e) = audio.music.play(-1) {
                warn!("Could not play background music: {}", e);
            }
        }
    }

    pub fn play(&self, effect: SoundEffect) {
        let Some(audio) = &self.loaded else {
            return;
        };
        let chunk = match effect {
            SoundEffect::Jump => &audio.jump,
        };
        if let Err(e) = Channel::all().play(chunk, 0) {
            warn!("Could not play {:?}: {}", effect, e);
        }
    }

    /// Play whatever sounds this tick's events call for
    pub fn handle_events(&self, events: &[GameEvent]) {
        for effect in effects_for(events) {
            self.play(effect);
        }
    }
}

impl Drop for AudioManager {
    fn drop(&mut self) {
        if let Some(audio) = self.loaded.take() {
            Music::halt();
            drop(audio.music);
            drop(audio.jump);
            mixer::close_audio();
        }
    }
}
