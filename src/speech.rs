//! Audio output seam for the desktop shell.
//!
//! The engine only asks for speech and cues through [`Effect`]s; whatever sits
//! behind [`Speaker`] performs them. The bundled [`LogSpeaker`] writes them to
//! the log and remembers the utterance in flight, which is enough for
//! platforms without a speech backend and for tests.

use crate::engine::{Cue, Effect};
use tracing::{debug, info};

pub trait Speaker {
    /// Speaks `text`, cutting off anything still being spoken.
    fn speak(&mut self, text: &str);

    fn cancel(&mut self);

    fn play(&mut self, cue: Cue);
}

#[derive(Debug, Default)]
pub struct LogSpeaker {
    current: Option<String>,
    cues: Vec<Cue>,
}

impl LogSpeaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }
}

impl Speaker for LogSpeaker {
    fn speak(&mut self, text: &str) {
        if let Some(previous) = self.current.take() {
            debug!(%previous, "utterance cancelled");
        }
        info!(%text, "speak");
        self.current = Some(text.to_string());
    }

    fn cancel(&mut self) {
        self.current = None;
    }

    fn play(&mut self, cue: Cue) {
        debug!(?cue, "sound cue");
        self.cues.push(cue);
    }
}

/// Performs the audio part of `effects` in order. Other effects are left to
/// the caller.
pub fn voice_effects(speaker: &mut dyn Speaker, effects: &[Effect]) {
    for effect in effects {
        match effect {
            Effect::Speak(text) => speaker.speak(text),
            Effect::Sound(cue) => speaker.play(*cue),
            Effect::Celebrate | Effect::Checkpoint(_) => {}
        }
    }
}
