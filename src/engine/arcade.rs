//! Arcade challenges: seven scored modes over the whole deck.

use super::Context;
use super::effects::{Cue, Effect};
use super::rounds;
use super::scoring::Scoreboard;
use super::timer::{TimerPurpose, TimerToken};
use crate::error::EngineError;
use crate::models::{Card, CardId};
use rand::seq::SliceRandom;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArcadeMode {
    TimeAttack,
    WordHunt,
    MissingLetter,
    ListenType,
    Confusion,
    Daily,
    Boss,
}

impl ArcadeMode {
    pub const ALL: [ArcadeMode; 7] = [
        ArcadeMode::TimeAttack,
        ArcadeMode::WordHunt,
        ArcadeMode::MissingLetter,
        ArcadeMode::ListenType,
        ArcadeMode::Confusion,
        ArcadeMode::Daily,
        ArcadeMode::Boss,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ArcadeMode::TimeAttack => "Time Attack",
            ArcadeMode::WordHunt => "Word Hunt",
            ArcadeMode::MissingLetter => "Missing Letter",
            ArcadeMode::ListenType => "Listen & Type",
            ArcadeMode::Confusion => "Confusion",
            ArcadeMode::Daily => "Daily Challenge",
            ArcadeMode::Boss => "Boss Fight",
        }
    }

    /// Answered by typing rather than by picking an option.
    pub fn is_typed(self) -> bool {
        matches!(self, ArcadeMode::MissingLetter | ArcadeMode::ListenType)
    }

    /// A single miss ends the game.
    pub fn is_fail_fast(self) -> bool {
        self == ArcadeMode::Boss
    }
}

/// What the learner is shown for the current card.
#[derive(Clone, Debug, PartialEq)]
pub enum Prompt {
    /// Front shown, pick the matching back among these options.
    Choice { options: Vec<Card> },
    /// Front with some characters hidden, type the whole front.
    Masked { masked: String },
    /// Front only spoken, type it.
    Listen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArcadeOutcome {
    Won,
    Lost,
    TimedOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArcadeSummary {
    pub outcome: ArcadeOutcome,
    pub score: u32,
    pub max_streak: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ArcadeState {
    Playing { index: usize, prompt: Prompt },
    Finished(ArcadeSummary),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ArcadeEvent {
    /// Verdict decided by the caller.
    Answer(bool),
    /// Option picked in a choice round; judged by id.
    Choose(CardId),
    /// Typed answer in a masked or listening round.
    Type(String),
    TimerExpired(TimerToken),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArcadeSession {
    mode: ArcadeMode,
    queue: Vec<Card>,
    board: Scoreboard,
    state: ArcadeState,
}

impl ArcadeSession {
    pub(crate) fn start(
        mode: ArcadeMode,
        cx: &mut Context<'_>,
    ) -> Result<(Self, Vec<Effect>), EngineError> {
        let queue = build_queue(mode, cx)?;
        info!(?mode, cards = queue.len(), "arcade started");

        let mut fx = Vec::new();
        if mode == ArcadeMode::TimeAttack {
            cx.timer.start(cx.config.time_attack_seconds, TimerPurpose::TimeAttack);
        }
        let mut session = Self {
            mode,
            queue,
            board: Scoreboard::default(),
            state: ArcadeState::Playing {
                index: 0,
                prompt: Prompt::Listen,
            },
        };
        session.state = session.begin_round(0, cx, &mut fx);
        Ok((session, fx))
    }

    pub fn mode(&self) -> ArcadeMode {
        self.mode
    }

    pub fn queue(&self) -> &[Card] {
        &self.queue
    }

    pub fn state(&self) -> &ArcadeState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.board.score
    }

    pub fn streak(&self) -> u32 {
        self.board.streak
    }

    pub fn max_streak(&self) -> u32 {
        self.board.max_streak
    }

    pub fn summary(&self) -> Option<ArcadeSummary> {
        match self.state {
            ArcadeState::Finished(summary) => Some(summary),
            ArcadeState::Playing { .. } => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.summary().is_some()
    }

    pub fn current_card(&self) -> Option<&Card> {
        match self.state {
            ArcadeState::Playing { index, .. } => self.queue.get(index),
            ArcadeState::Finished(_) => None,
        }
    }

    pub(crate) fn transition(mut self, event: ArcadeEvent, cx: &mut Context<'_>) -> (Self, Vec<Effect>) {
        let mut fx = Vec::new();
        let (index, is_choice) = match &self.state {
            ArcadeState::Playing { index, prompt } => (*index, matches!(prompt, Prompt::Choice { .. })),
            ArcadeState::Finished(_) => return (self, fx),
        };
        let Some(card) = self.queue.get(index).cloned() else {
            return (self, fx);
        };

        let verdict = match &event {
            ArcadeEvent::Answer(correct) => Some(*correct),
            ArcadeEvent::Choose(option) if is_choice => Some(*option == card.id),
            ArcadeEvent::Type(text) if !is_choice => Some(rounds::answers_match(text, &card.front)),
            ArcadeEvent::TimerExpired(token) => {
                match (self.mode, token.purpose) {
                    (ArcadeMode::TimeAttack, TimerPurpose::TimeAttack) => {
                        self.state = self.finish(ArcadeOutcome::TimedOut, cx, &mut fx);
                        return (self, fx);
                    }
                    (ArcadeMode::WordHunt, TimerPurpose::WordHunt { round }) if round == index => Some(false),
                    _ => {
                        debug!(?token, "ignoring stale arcade timer");
                        None
                    }
                }
            }
            _ => None,
        };

        if let Some(correct) = verdict {
            self.state = self.resolve(index, &card, correct, cx, &mut fx);
        }
        (self, fx)
    }

    fn resolve(
        &mut self,
        index: usize,
        card: &Card,
        correct: bool,
        cx: &mut Context<'_>,
        fx: &mut Vec<Effect>,
    ) -> ArcadeState {
        if self.mode == ArcadeMode::WordHunt {
            cx.timer.cancel();
        }

        if correct {
            let points = self.board.hit();
            debug!(points, streak = self.board.streak, "arcade hit");
            fx.push(Effect::Sound(Cue::Success));
        } else {
            cx.deck.record_mistake(card.id);
            self.board.miss();
            if self.mode.is_fail_fast() {
                fx.push(Effect::Sound(Cue::BossHit));
                return self.finish(ArcadeOutcome::Lost, cx, fx);
            }
            fx.push(Effect::Sound(Cue::Error));
            fx.push(Effect::speak(&card.front));
        }

        if index + 1 < self.queue.len() {
            self.begin_round(index + 1, cx, fx)
        } else {
            self.finish(ArcadeOutcome::Won, cx, fx)
        }
    }

    fn begin_round(&self, index: usize, cx: &mut Context<'_>, fx: &mut Vec<Effect>) -> ArcadeState {
        let card = &self.queue[index];
        let pool = cx.deck.all_cards();
        let prompt = match self.mode {
            ArcadeMode::TimeAttack | ArcadeMode::Daily | ArcadeMode::Boss => Prompt::Choice {
                options: rounds::multiple_choice_options(card, pool, cx.config.quiz_distractors, cx.rng),
            },
            ArcadeMode::WordHunt => {
                let options = rounds::multiple_choice_options(card, pool, cx.config.word_hunt_distractors, cx.rng);
                cx.timer.start(cx.config.word_hunt_seconds, TimerPurpose::WordHunt { round: index });
                Prompt::Choice { options }
            }
            ArcadeMode::Confusion => Prompt::Choice {
                options: rounds::confusion_options(card, pool, cx.config.quiz_distractors, cx.rng),
            },
            ArcadeMode::MissingLetter => Prompt::Masked {
                masked: rounds::masked_text(&card.front, cx.rng),
            },
            ArcadeMode::ListenType => Prompt::Listen,
        };

        if self.mode != ArcadeMode::MissingLetter {
            fx.push(Effect::speak(&card.front));
        }
        ArcadeState::Playing { index, prompt }
    }

    fn finish(&self, outcome: ArcadeOutcome, cx: &mut Context<'_>, fx: &mut Vec<Effect>) -> ArcadeState {
        cx.timer.cancel();
        let summary = ArcadeSummary {
            outcome,
            score: self.board.score,
            max_streak: self.board.max_streak,
        };
        info!(
            mode = ?self.mode,
            ?outcome,
            score = summary.score,
            max_streak = summary.max_streak,
            "arcade finished"
        );

        if outcome == ArcadeOutcome::Won {
            fx.push(Effect::Celebrate);
        }
        fx.push(Effect::Checkpoint(cx.snapshot()));
        ArcadeState::Finished(summary)
    }
}

fn build_queue(mode: ArcadeMode, cx: &mut Context<'_>) -> Result<Vec<Card>, EngineError> {
    let cards = cx.deck.all_cards();

    let mut queue = match mode {
        ArcadeMode::Boss => {
            let mut hard: Vec<Card> = cards
                .iter()
                .filter(|card| card.mistake_count > 0)
                .cloned()
                .collect();
            if hard.is_empty() {
                return Err(EngineError::NoEligibleCards);
            }
            hard.sort_by(|a, b| b.mistake_count.cmp(&a.mistake_count));
            hard
        }
        ArcadeMode::Daily => cards
            .choose_multiple(cx.rng, cx.config.daily_sample_size)
            .cloned()
            .collect(),
        _ => cards.to_vec(),
    };

    if cards.len() < cx.config.arcade_min_cards {
        return Err(EngineError::NotEnoughCards {
            required: cx.config.arcade_min_cards,
            available: cards.len(),
        });
    }

    if !matches!(mode, ArcadeMode::Boss | ArcadeMode::Daily) {
        rounds::shuffle(&mut queue, cx.rng);
    }
    Ok(queue)
}
