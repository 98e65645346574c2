//! The learning engine: group sessions, arcade games and the single countdown
//! they share.
//!
//! [`Engine`] owns the deck, the set of completed groups, the random source and
//! the timer. At most one session is active at a time. Every entry point
//! returns an [`Update`]: where the engine now stands plus the effects the
//! caller should perform, in order.

pub mod arcade;
pub mod effects;
pub mod rounds;
pub mod scoring;
pub mod session;
pub mod timer;

pub use arcade::{
    ArcadeEvent, ArcadeMode, ArcadeOutcome, ArcadeSession, ArcadeState, ArcadeSummary, Prompt,
};
pub use effects::{Cue, Effect, EffectsExt};
pub use rounds::{Facet, FacetId, Side};
pub use session::{GroupEvent, GroupSession, IntroStep, Stage, StageKind, ThinkPhase};
pub use timer::{Tick, Timer, TimerPurpose, TimerToken};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::models::{Card, CardId, Deck, Progress};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Mutable state a transition may touch, borrowed from the engine for the
/// duration of one event.
pub(crate) struct Context<'a> {
    pub deck: &'a mut Deck,
    pub completed: &'a mut BTreeSet<usize>,
    pub rng: &'a mut StdRng,
    pub timer: &'a mut Timer,
    pub config: &'a EngineConfig,
}

impl Context<'_> {
    pub fn snapshot(&self) -> Progress {
        snapshot(self.deck, self.completed)
    }
}

fn snapshot(deck: &Deck, completed: &BTreeSet<usize>) -> Progress {
    Progress {
        completed_groups: completed.clone(),
        mistake_counts: deck.mistake_counts(),
        last_played_at: None,
    }
}

#[derive(Clone, Debug, PartialEq)]
enum ActiveSession {
    Group(GroupSession),
    Arcade(ArcadeSession),
}

impl ActiveSession {
    fn is_terminal(&self) -> bool {
        match self {
            ActiveSession::Group(session) => session.is_finished(),
            ActiveSession::Arcade(session) => session.is_finished(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArcadeStatus {
    Playing,
    Finished(ArcadeSummary),
}

/// Where the engine stands after an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Group(StageKind),
    Arcade(ArcadeStatus),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Update {
    pub status: Status,
    pub effects: Vec<Effect>,
}

pub struct Engine {
    deck: Deck,
    completed: BTreeSet<usize>,
    config: EngineConfig,
    rng: StdRng,
    timer: Timer,
    active: Option<ActiveSession>,
}

impl Engine {
    /// Builds an engine over `deck`, restoring completed groups and mistake
    /// counters from `progress`. Counters in `progress` replace the deck's own.
    pub fn new(deck: Deck, progress: Progress, config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_rng(deck, progress, config, StdRng::from_entropy())
    }

    pub fn seeded(
        deck: Deck,
        progress: Progress,
        config: EngineConfig,
        seed: u64,
    ) -> Result<Self, EngineError> {
        Self::with_rng(deck, progress, config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(
        mut deck: Deck,
        progress: Progress,
        mut config: EngineConfig,
        rng: StdRng,
    ) -> Result<Self, EngineError> {
        if deck.is_empty() {
            return Err(EngineError::EmptyDeck);
        }
        config.group_size = config.group_size.max(1);
        deck.apply_mistake_counts(&progress.mistake_counts);

        Ok(Self {
            deck,
            completed: progress.completed_groups,
            config,
            rng,
            timer: Timer::new(),
            active: None,
        })
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current snapshot. `last_played_at` is left for the caller to stamp.
    pub fn progress(&self) -> Progress {
        snapshot(&self.deck, &self.completed)
    }

    pub fn group_count(&self) -> usize {
        self.deck.group_count(self.config.group_size)
    }

    pub fn cards_in_group(&self, index: usize) -> &[Card] {
        self.deck.cards_in_group(index, self.config.group_size)
    }

    /// 1-based inclusive card positions covered by the group, for labels.
    pub fn group_range(&self, index: usize) -> Option<(usize, usize)> {
        self.deck.group_range(index, self.config.group_size)
    }

    pub fn is_group_unlocked(&self, index: usize) -> bool {
        index == 0 || self.completed.contains(&(index - 1))
    }

    pub fn is_group_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub fn group_session(&self) -> Option<&GroupSession> {
        match &self.active {
            Some(ActiveSession::Group(session)) => Some(session),
            _ => None,
        }
    }

    pub fn arcade_session(&self) -> Option<&ArcadeSession> {
        match &self.active {
            Some(ActiveSession::Arcade(session)) => Some(session),
            _ => None,
        }
    }

    pub fn timer_remaining(&self) -> Option<u32> {
        self.timer.remaining()
    }

    /// Identifies the running countdown; changes whenever one is restarted.
    pub fn timer_token(&self) -> Option<TimerToken> {
        self.timer.token()
    }

    pub fn status(&self) -> Status {
        match &self.active {
            None => Status::Idle,
            Some(ActiveSession::Group(session)) => Status::Group(session.stage().kind()),
            Some(ActiveSession::Arcade(session)) => Status::Arcade(match session.summary() {
                Some(summary) => ArcadeStatus::Finished(summary),
                None => ArcadeStatus::Playing,
            }),
        }
    }

    pub fn start_group(&mut self, index: usize) -> Result<Update, EngineError> {
        let groups = self.group_count();
        if index >= groups {
            warn!(index, groups, "group index out of range");
            return Err(EngineError::GroupOutOfRange { index, groups });
        }
        if !self.is_group_unlocked(index) {
            warn!(index, "group is locked");
            return Err(EngineError::GroupLocked { index });
        }
        self.ensure_replaceable()?;

        self.timer.cancel();
        let queue = self.cards_in_group(index).to_vec();
        self.active = Some(ActiveSession::Group(GroupSession::start(index, queue)));
        Ok(self.update(Vec::new()))
    }

    pub fn start_arcade(&mut self, mode: ArcadeMode) -> Result<Update, EngineError> {
        self.ensure_replaceable()?;
        self.timer.cancel();

        let (session, effects) = ArcadeSession::start(mode, &mut self.context()).inspect_err(|err| {
            warn!(?mode, %err, "arcade start rejected");
        })?;
        self.active = Some(ActiveSession::Arcade(session));
        Ok(self.update(effects))
    }

    pub fn advance_intro(&mut self) -> Update {
        self.group_event(GroupEvent::AdvanceIntro)
    }

    pub fn select_match_facet(&mut self, facet: FacetId) -> Update {
        self.group_event(GroupEvent::SelectFacet(facet))
    }

    pub fn answer_quiz(&mut self, option: CardId) -> Update {
        self.group_event(GroupEvent::AnswerQuiz(option))
    }

    pub fn submit_typing(&mut self, text: &str) -> Update {
        self.group_event(GroupEvent::SubmitTyping(text.to_string()))
    }

    pub fn reveal_think(&mut self) -> Update {
        self.group_event(GroupEvent::RevealThink)
    }

    pub fn vote_think(&mut self, was_correct: bool) -> Update {
        self.group_event(GroupEvent::VoteThink(was_correct))
    }

    pub fn answer_arcade(&mut self, is_correct: bool) -> Update {
        self.arcade_event(ArcadeEvent::Answer(is_correct))
    }

    pub fn choose_arcade_option(&mut self, option: CardId) -> Update {
        self.arcade_event(ArcadeEvent::Choose(option))
    }

    pub fn submit_arcade_typing(&mut self, text: &str) -> Update {
        self.arcade_event(ArcadeEvent::Type(text.to_string()))
    }

    /// One elapsed second. An expiry is routed to the active session.
    pub fn tick(&mut self) -> Update {
        let Tick::Expired(token) = self.timer.tick() else {
            return self.update(Vec::new());
        };
        debug!(?token, "countdown expired");

        match self.active {
            Some(ActiveSession::Group(_)) => self.group_event(GroupEvent::TimerExpired(token)),
            Some(ActiveSession::Arcade(_)) => self.arcade_event(ArcadeEvent::TimerExpired(token)),
            None => self.update(Vec::new()),
        }
    }

    /// Tears down the active session. Mistakes recorded so far are kept and
    /// handed back in a checkpoint.
    pub fn exit_session(&mut self) -> Update {
        self.timer.cancel();
        let effects = match self.active.take() {
            Some(_) => {
                info!("session exited");
                vec![Effect::Checkpoint(self.progress())]
            }
            None => Vec::new(),
        };
        self.update(effects)
    }

    fn ensure_replaceable(&self) -> Result<(), EngineError> {
        match &self.active {
            Some(active) if !active.is_terminal() => {
                warn!("start rejected: a session is still in progress");
                Err(EngineError::SessionAlreadyActive)
            }
            _ => Ok(()),
        }
    }

    fn context(&mut self) -> Context<'_> {
        Context {
            deck: &mut self.deck,
            completed: &mut self.completed,
            rng: &mut self.rng,
            timer: &mut self.timer,
            config: &self.config,
        }
    }

    fn group_event(&mut self, event: GroupEvent) -> Update {
        match self.active.take() {
            Some(ActiveSession::Group(session)) => {
                let (session, effects) = session.transition(event, &mut self.context());
                self.active = Some(ActiveSession::Group(session));
                self.update(effects)
            }
            other => {
                self.active = other;
                self.update(Vec::new())
            }
        }
    }

    fn arcade_event(&mut self, event: ArcadeEvent) -> Update {
        match self.active.take() {
            Some(ActiveSession::Arcade(session)) => {
                let (session, effects) = session.transition(event, &mut self.context());
                self.active = Some(ActiveSession::Arcade(session));
                self.update(effects)
            }
            other => {
                self.active = other;
                self.update(Vec::new())
            }
        }
    }

    fn update(&self, effects: Vec<Effect>) -> Update {
        Update {
            status: self.status(),
            effects,
        }
    }
}
