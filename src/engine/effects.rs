//! Side effects requested by the engines. The engines never perform I/O; the
//! caller executes these in order.

use crate::models::Progress;

/// Short audio cues played alongside answers and stage changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Success,
    Error,
    Reveal,
    LevelUp,
    BossHit,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Speak the text, cancelling any utterance still playing.
    Speak(String),
    Sound(Cue),
    /// Confetti-style celebration.
    Celebrate,
    /// Persist this snapshot.
    Checkpoint(Progress),
}

impl Effect {
    pub fn speak(text: &str) -> Self {
        Effect::Speak(text.to_string())
    }
}

/// Helpers for asserting on effect lists.
pub trait EffectsExt {
    fn spoken(&self) -> Vec<&str>;
    fn has_cue(&self, cue: Cue) -> bool;
    fn checkpoint(&self) -> Option<&Progress>;
    fn celebrates(&self) -> bool;
}

impl EffectsExt for [Effect] {
    fn spoken(&self) -> Vec<&str> {
        self.iter()
            .filter_map(|effect| match effect {
                Effect::Speak(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn has_cue(&self, cue: Cue) -> bool {
        self.iter().any(|effect| *effect == Effect::Sound(cue))
    }

    fn checkpoint(&self) -> Option<&Progress> {
        self.iter().rev().find_map(|effect| match effect {
            Effect::Checkpoint(progress) => Some(progress),
            _ => None,
        })
    }

    fn celebrates(&self) -> bool {
        self.contains(&Effect::Celebrate)
    }
}
