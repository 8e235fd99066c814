//! Sound cue boundary
//!
//! The core only asks for cues by name. A backend that actually makes noise
//! implements [`AudioSink`]; missing cues degrade to silence.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Food or bonus eaten
    Eat,
    /// Last life lost
    GameOver,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 2] = [SoundEffect::Eat, SoundEffect::GameOver];

    /// Asset file backing this cue
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::Eat => "eat.wav",
            SoundEffect::GameOver => "gameover.wav",
        }
    }

    /// Cue requested for a simulation event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::FoodEaten { .. } | GameEvent::BonusEaten { .. } => Some(SoundEffect::Eat),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            _ => None,
        }
    }
}

/// Something that can play a cue at a volume in [0, 1]
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Sink that only logs; used by the headless driver
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("♪ {:?} at {:.2}", effect, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Box<dyn AudioSink>,
    /// Cues whose assets were found
    available: Vec<SoundEffect>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    /// Manager with every cue available
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self::with_available(sink, SoundEffect::ALL.to_vec())
    }

    /// Manager that plays only `available` cues; the rest are silent
    pub fn with_available(sink: Box<dyn AudioSink>, available: Vec<SoundEffect>) -> Self {
        for effect in SoundEffect::ALL {
            if !available.contains(&effect) {
                log::warn!("Sound {} unavailable - cue disabled", effect.file_name());
            }
        }
        Self {
            sink,
            available,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a cue; silently ignored when muted or unavailable
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 || !self.available.contains(&effect) {
            return;
        }
        self.sink.play(effect, vol);
    }
}
