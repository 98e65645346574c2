//! Structured group session.
//!
//! A group walks through `intro → match → quiz → typing → think → results`.
//! Each stage is its own type carrying only its own sub-state, and only that
//! type knows how to react to its events. [`GroupSession::transition`] routes
//! an event to the current stage and hands back the next session plus the
//! effects to perform; an event addressed to another stage leaves the session
//! untouched.

use super::Context;
use super::effects::{Cue, Effect};
use super::rounds::{self, Facet, FacetId, Side};
use super::timer::{TimerPurpose, TimerToken};
use crate::models::{Card, CardId};
use tracing::{debug, info};

/// Learner input and timer expiry, as seen by a group session.
#[derive(Clone, Debug, PartialEq)]
pub enum GroupEvent {
    AdvanceIntro,
    SelectFacet(FacetId),
    AnswerQuiz(CardId),
    SubmitTyping(String),
    RevealThink,
    VoteThink(bool),
    TimerExpired(TimerToken),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageKind {
    Intro,
    Match,
    Quiz,
    Typing,
    Think,
    Results,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stage {
    Intro(Intro),
    Match(Matching),
    Quiz(Quiz),
    Typing(Typing),
    Think(Think),
    Results,
}

impl Stage {
    pub fn kind(&self) -> StageKind {
        match self {
            Stage::Intro(_) => StageKind::Intro,
            Stage::Match(_) => StageKind::Match,
            Stage::Quiz(_) => StageKind::Quiz,
            Stage::Typing(_) => StageKind::Typing,
            Stage::Think(_) => StageKind::Think,
            Stage::Results => StageKind::Results,
        }
    }
}

/// The fixed part of a session: which group, and its cards in deck order.
#[derive(Clone, Debug, PartialEq)]
pub struct Lesson {
    pub group_index: usize,
    pub queue: Vec<Card>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GroupSession {
    lesson: Lesson,
    stage: Stage,
}

impl GroupSession {
    pub(crate) fn start(group_index: usize, queue: Vec<Card>) -> Self {
        info!(group_index, cards = queue.len(), "group session started");
        Self {
            lesson: Lesson { group_index, queue },
            stage: Stage::Intro(Intro {
                index: 0,
                step: IntroStep::Front,
            }),
        }
    }

    pub fn group_index(&self) -> usize {
        self.lesson.group_index
    }

    pub fn queue(&self) -> &[Card] {
        &self.lesson.queue
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.stage, Stage::Results)
    }

    /// The card the current stage is asking about, if it asks about one.
    pub fn current_card(&self) -> Option<&Card> {
        let queue = &self.lesson.queue;
        match &self.stage {
            Stage::Intro(intro) => queue.get(intro.index),
            Stage::Quiz(quiz) => queue.get(quiz.index),
            Stage::Typing(typing) => queue.get(typing.index),
            Stage::Think(think) => think.current(),
            Stage::Match(_) | Stage::Results => None,
        }
    }

    pub(crate) fn transition(self, event: GroupEvent, cx: &mut Context<'_>) -> (Self, Vec<Effect>) {
        let GroupSession { lesson, stage } = self;
        let mut fx = Vec::new();
        let before = stage.kind();

        let stage = match (stage, event) {
            (Stage::Intro(intro), GroupEvent::AdvanceIntro) => intro.advance(&lesson, cx, &mut fx),
            (Stage::Match(board), GroupEvent::SelectFacet(id)) => board.select(id, &lesson, cx, &mut fx),
            (Stage::Quiz(quiz), GroupEvent::AnswerQuiz(option)) => quiz.answer(option, &lesson, cx, &mut fx),
            (Stage::Typing(typing), GroupEvent::SubmitTyping(text)) => {
                typing.submit(&text, &lesson, cx, &mut fx)
            }
            (Stage::Think(think), GroupEvent::RevealThink) => think.reveal(cx, &mut fx),
            (Stage::Think(think), GroupEvent::TimerExpired(token)) => think.expire(token, &mut fx),
            (Stage::Think(think), GroupEvent::VoteThink(correct)) => think.vote(correct, &lesson, cx, &mut fx),
            (stage, _) => stage,
        };

        if stage.kind() != before {
            debug!(group_index = lesson.group_index, from = ?before, to = ?stage.kind(), "stage change");
        }
        (GroupSession { lesson, stage }, fx)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroStep {
    /// Only the front is shown.
    Front,
    /// Back shown with the front repeated.
    Back,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Intro {
    pub index: usize,
    pub step: IntroStep,
}

impl Intro {
    fn advance(self, lesson: &Lesson, cx: &mut Context<'_>, fx: &mut Vec<Effect>) -> Stage {
        match self.step {
            IntroStep::Front => {
                if let Some(card) = lesson.queue.get(self.index) {
                    fx.push(Effect::speak(&card.front));
                }
                Stage::Intro(Intro {
                    index: self.index,
                    step: IntroStep::Back,
                })
            }
            IntroStep::Back if self.index + 1 < lesson.queue.len() => Stage::Intro(Intro {
                index: self.index + 1,
                step: IntroStep::Front,
            }),
            IntroStep::Back => enter_match(lesson, cx),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Matching {
    pub facets: Vec<Facet>,
    pub selected: Option<FacetId>,
}

impl Matching {
    pub fn facet(&self, id: FacetId) -> Option<&Facet> {
        self.facets.iter().find(|facet| facet.id() == id)
    }

    pub fn is_complete(&self) -> bool {
        self.facets.iter().all(|facet| facet.matched)
    }

    fn select(mut self, id: FacetId, lesson: &Lesson, cx: &mut Context<'_>, fx: &mut Vec<Effect>) -> Stage {
        let Some(tapped) = self.facet(id).filter(|facet| !facet.matched).cloned() else {
            return Stage::Match(self);
        };

        let Some(first_id) = self.selected else {
            if tapped.side == Side::Front {
                fx.push(Effect::speak(&tapped.text));
            }
            self.selected = Some(id);
            return Stage::Match(self);
        };

        self.selected = None;
        if first_id == id {
            return Stage::Match(self);
        }

        let is_pair = self.facet(first_id).is_some_and(|first| first.pairs_with(&tapped));
        if !is_pair {
            fx.push(Effect::Sound(Cue::Error));
            return Stage::Match(self);
        }

        for facet in &mut self.facets {
            if facet.card == tapped.card {
                facet.matched = true;
            }
        }
        fx.push(Effect::Sound(Cue::Success));

        if self.is_complete() {
            enter_quiz(lesson, cx, fx)
        } else {
            Stage::Match(self)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Quiz {
    pub index: usize,
    /// The current card plus distractors, shuffled. Shown by their back text.
    pub options: Vec<Card>,
}

impl Quiz {
    fn at(index: usize, lesson: &Lesson, cx: &mut Context<'_>, fx: &mut Vec<Effect>) -> Stage {
        let target = &lesson.queue[index];
        let options =
            rounds::multiple_choice_options(target, cx.deck.all_cards(), cx.config.quiz_distractors, cx.rng);
        fx.push(Effect::speak(&target.front));
        Stage::Quiz(Quiz { index, options })
    }

    fn answer(self, option: CardId, lesson: &Lesson, cx: &mut Context<'_>, fx: &mut Vec<Effect>) -> Stage {
        let target = &lesson.queue[self.index];
        if option != target.id {
            cx.deck.record_mistake(target.id);
            fx.push(Effect::Sound(Cue::Error));
            return Stage::Quiz(self);
        }

        fx.push(Effect::Sound(Cue::Success));
        if self.index + 1 < lesson.queue.len() {
            Quiz::at(self.index + 1, lesson, cx, fx)
        } else {
            enter_typing(lesson, fx)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Typing {
    pub index: usize,
    /// The expected answer, revealed after a wrong attempt.
    pub hint: Option<String>,
}

impl Typing {
    fn at(index: usize, lesson: &Lesson, fx: &mut Vec<Effect>) -> Stage {
        fx.push(Effect::speak(&lesson.queue[index].front));
        Stage::Typing(Typing { index, hint: None })
    }

    fn submit(mut self, text: &str, lesson: &Lesson, cx: &mut Context<'_>, fx: &mut Vec<Effect>) -> Stage {
        let target = &lesson.queue[self.index];
        if !rounds::answers_match(text, &target.front) {
            cx.deck.record_mistake(target.id);
            self.hint = Some(target.front.clone());
            fx.push(Effect::Sound(Cue::Error));
            return Stage::Typing(self);
        }

        fx.push(Effect::Sound(Cue::Success));
        if self.index + 1 < lesson.queue.len() {
            Typing::at(self.index + 1, lesson, fx)
        } else {
            enter_think(lesson, cx)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThinkPhase {
    /// Countdown running, answer hidden.
    Pondering,
    /// Answer shown; `timed_out` when the countdown revealed it.
    Revealed { timed_out: bool },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Think {
    /// Doubled queue; missed cards are appended while it is being walked.
    pub entries: Vec<Card>,
    pub index: usize,
    pub phase: ThinkPhase,
}

impl Think {
    pub fn current(&self) -> Option<&Card> {
        self.entries.get(self.index)
    }

    fn show(mut self, timed_out: bool, fx: &mut Vec<Effect>) -> Stage {
        self.phase = ThinkPhase::Revealed { timed_out };
        fx.push(Effect::Sound(Cue::Reveal));
        if let Some(card) = self.current() {
            fx.push(Effect::speak(&card.front));
        }
        Stage::Think(self)
    }

    fn reveal(self, cx: &mut Context<'_>, fx: &mut Vec<Effect>) -> Stage {
        if self.phase != ThinkPhase::Pondering {
            return Stage::Think(self);
        }
        cx.timer.cancel();
        self.show(false, fx)
    }

    fn expire(self, token: TimerToken, fx: &mut Vec<Effect>) -> Stage {
        let ours = token.purpose == TimerPurpose::Think { entry: self.index };
        if !ours || self.phase != ThinkPhase::Pondering {
            debug!(?token, "ignoring stale think timer");
            return Stage::Think(self);
        }
        self.show(true, fx)
    }

    fn vote(mut self, correct: bool, lesson: &Lesson, cx: &mut Context<'_>, fx: &mut Vec<Effect>) -> Stage {
        if self.phase == ThinkPhase::Pondering {
            return Stage::Think(self);
        }
        cx.timer.cancel();

        if correct {
            fx.push(Effect::Sound(Cue::Success));
        } else if let Some(card) = self.current().cloned() {
            cx.deck.record_mistake(card.id);
            self.entries.push(card);
            fx.push(Effect::Sound(Cue::Error));
        }

        let next = self.index + 1;
        if next >= self.entries.len() {
            return enter_results(lesson, cx, fx);
        }
        self.index = next;
        self.phase = ThinkPhase::Pondering;
        cx.timer.start(cx.config.think_seconds, TimerPurpose::Think { entry: next });
        Stage::Think(self)
    }
}

fn enter_match(lesson: &Lesson, cx: &mut Context<'_>) -> Stage {
    Stage::Match(Matching {
        facets: rounds::matching_deck(&lesson.queue, cx.rng),
        selected: None,
    })
}

fn enter_quiz(lesson: &Lesson, cx: &mut Context<'_>, fx: &mut Vec<Effect>) -> Stage {
    Quiz::at(0, lesson, cx, fx)
}

fn enter_typing(lesson: &Lesson, fx: &mut Vec<Effect>) -> Stage {
    Typing::at(0, lesson, fx)
}

fn enter_think(lesson: &Lesson, cx: &mut Context<'_>) -> Stage {
    let mut entries = lesson.queue.clone();
    entries.extend_from_slice(&lesson.queue);
    cx.timer.start(cx.config.think_seconds, TimerPurpose::Think { entry: 0 });
    Stage::Think(Think {
        entries,
        index: 0,
        phase: ThinkPhase::Pondering,
    })
}

fn enter_results(lesson: &Lesson, cx: &mut Context<'_>, fx: &mut Vec<Effect>) -> Stage {
    cx.timer.cancel();
    let newly_completed = cx.completed.insert(lesson.group_index);
    info!(group_index = lesson.group_index, newly_completed, "group completed");

    fx.push(Effect::Sound(Cue::LevelUp));
    fx.push(Effect::Celebrate);
    fx.push(Effect::Checkpoint(cx.snapshot()));
    Stage::Results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::engine::effects::EffectsExt;
    use crate::engine::timer::{Tick, Timer};
    use crate::models::Deck;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    struct Fixture {
        deck: Deck,
        completed: BTreeSet<usize>,
        rng: StdRng,
        timer: Timer,
        config: EngineConfig,
    }

    impl Fixture {
        fn new(len: usize) -> Self {
            Self {
                deck: Deck::from_pairs("Test", (0..len).map(|i| (format!("word{i}"), format!("so'z{i}")))),
                completed: BTreeSet::new(),
                rng: StdRng::seed_from_u64(11),
                timer: Timer::new(),
                config: EngineConfig::default(),
            }
        }

        fn session(&self, group_index: usize) -> GroupSession {
            let cards = self.deck.cards_in_group(group_index, self.config.group_size).to_vec();
            GroupSession::start(group_index, cards)
        }

        fn step(&mut self, session: GroupSession, event: GroupEvent) -> (GroupSession, Vec<Effect>) {
            let mut cx = Context {
                deck: &mut self.deck,
                completed: &mut self.completed,
                rng: &mut self.rng,
                timer: &mut self.timer,
                config: &self.config,
            };
            session.transition(event, &mut cx)
        }
    }

    impl Fixture {
        /// Answers everything correctly until the session reaches `target`.
        fn play_until(&mut self, mut session: GroupSession, target: StageKind) -> GroupSession {
            while session.stage().kind() != target && !session.is_finished() {
                let event = match session.stage() {
                    Stage::Intro(_) => GroupEvent::AdvanceIntro,
                    Stage::Match(board) => {
                        let facet = board.selected.map_or_else(
                            || board.facets.iter().find(|f| !f.matched).map(|f| f.id()),
                            |selected| {
                                let side = match selected.side {
                                    Side::Front => Side::Back,
                                    Side::Back => Side::Front,
                                };
                                Some(FacetId { card: selected.card, side })
                            },
                        );
                        match facet {
                            Some(id) => GroupEvent::SelectFacet(id),
                            None => break,
                        }
                    }
                    Stage::Quiz(quiz) => GroupEvent::AnswerQuiz(session.queue()[quiz.index].id),
                    Stage::Typing(typing) => GroupEvent::SubmitTyping(session.queue()[typing.index].front.clone()),
                    Stage::Think(think) if think.phase == ThinkPhase::Pondering => GroupEvent::RevealThink,
                    Stage::Think(_) => GroupEvent::VoteThink(true),
                    Stage::Results => break,
                };
                session = self.step(session, event).0;
            }
            session
        }

        fn started_at(&mut self, target: StageKind) -> GroupSession {
            let session = self.session(0);
            self.play_until(session, target)
        }
    }

    fn think(session: &GroupSession) -> &Think {
        match session.stage() {
            Stage::Think(think) => think,
            other => panic!("expected think stage, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_intro_two_step_reveal_speaks_on_back_step() {
        let mut fx = Fixture::new(2);
        let session = fx.session(0);

        let (session, effects) = fx.step(session, GroupEvent::AdvanceIntro);
        assert_eq!(effects.spoken(), vec!["word0"]);
        assert_eq!(
            session.stage(),
            &Stage::Intro(Intro { index: 0, step: IntroStep::Back })
        );

        let (session, effects) = fx.step(session, GroupEvent::AdvanceIntro);
        assert!(effects.is_empty());
        assert_eq!(session.current_card().map(|c| c.front.as_str()), Some("word1"));

        let (session, _) = fx.step(session, GroupEvent::AdvanceIntro);
        let (session, _) = fx.step(session, GroupEvent::AdvanceIntro);
        assert_eq!(session.stage().kind(), StageKind::Match);
    }

    #[test]
    fn test_events_for_other_stages_are_ignored() {
        let mut fx = Fixture::new(3);
        let session = fx.session(0);
        let card = session.queue()[0].id;

        let (after, effects) = fx.step(session.clone(), GroupEvent::AnswerQuiz(card));
        assert_eq!(after, session);
        assert!(effects.is_empty());

        let (after, _) = fx.step(session.clone(), GroupEvent::VoteThink(true));
        assert_eq!(after, session);
    }

    #[test]
    fn test_match_select_deselect_and_mismatch() {
        let mut fx = Fixture::new(3);
        let session = fx.started_at(StageKind::Match);
        let a = session.queue()[0].id;
        let b = session.queue()[1].id;

        let front_a = FacetId { card: a, side: Side::Front };
        let (session, effects) = fx.step(session, GroupEvent::SelectFacet(front_a));
        assert_eq!(effects.spoken(), vec!["word0"]);

        let (session, _) = fx.step(session, GroupEvent::SelectFacet(front_a));
        let Stage::Match(board) = session.stage() else { panic!("not matching") };
        assert_eq!(board.selected, None);

        let (session, _) = fx.step(session, GroupEvent::SelectFacet(front_a));
        let (session, effects) = fx.step(session, GroupEvent::SelectFacet(FacetId { card: b, side: Side::Back }));
        assert!(effects.has_cue(Cue::Error));
        let Stage::Match(board) = session.stage() else { panic!("not matching") };
        assert_eq!(board.selected, None);
        assert!(board.facets.iter().all(|f| !f.matched));
        assert_eq!(fx.deck.mistake_counts().len(), 0);
    }

    #[test]
    fn test_same_side_of_two_cards_is_not_a_pair() {
        let mut fx = Fixture::new(2);
        let session = fx.started_at(StageKind::Match);
        let a = session.queue()[0].id;
        let b = session.queue()[1].id;

        let (session, _) = fx.step(session, GroupEvent::SelectFacet(FacetId { card: a, side: Side::Back }));
        let (session, effects) = fx.step(session, GroupEvent::SelectFacet(FacetId { card: b, side: Side::Back }));
        assert!(effects.has_cue(Cue::Error));
        assert_eq!(session.stage().kind(), StageKind::Match);
    }

    #[test]
    fn test_matched_facets_ignore_taps() {
        let mut fx = Fixture::new(2);
        let session = fx.started_at(StageKind::Match);
        let a = session.queue()[0].id;

        let (session, _) = fx.step(session, GroupEvent::SelectFacet(FacetId { card: a, side: Side::Front }));
        let (session, effects) = fx.step(session, GroupEvent::SelectFacet(FacetId { card: a, side: Side::Back }));
        assert!(effects.has_cue(Cue::Success));

        let (after, effects) = fx.step(session.clone(), GroupEvent::SelectFacet(FacetId { card: a, side: Side::Front }));
        assert_eq!(after, session);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_quiz_wrong_answer_keeps_card_and_counts_mistake() {
        let mut fx = Fixture::new(5);
        let session = fx.started_at(StageKind::Quiz);
        let Stage::Quiz(quiz) = session.stage().clone() else { panic!("not quiz") };
        assert_eq!(quiz.options.len(), 4);

        let target = session.queue()[0].id;
        let wrong = quiz.options.iter().find(|c| c.id != target).map(|c| c.id).unwrap();
        let (session, effects) = fx.step(session, GroupEvent::AnswerQuiz(wrong));

        assert!(effects.has_cue(Cue::Error));
        assert_eq!(session.stage(), &Stage::Quiz(quiz));
        assert_eq!(fx.deck.card(target).unwrap().mistake_count, 1);
    }

    #[test]
    fn test_typing_wrong_answer_shows_hint() {
        let mut fx = Fixture::new(2);
        let session = fx.started_at(StageKind::Typing);
        assert_eq!(session.stage().kind(), StageKind::Typing);

        let (session, effects) = fx.step(session, GroupEvent::SubmitTyping(String::new()));
        assert!(effects.has_cue(Cue::Error));
        assert_eq!(
            session.stage(),
            &Stage::Typing(Typing { index: 0, hint: Some("word0".to_string()) })
        );

        let (session, _) = fx.step(session, GroupEvent::SubmitTyping("  WORD0 ".to_string()));
        assert_eq!(session.stage(), &Stage::Typing(Typing { index: 1, hint: None }));
    }

    #[test]
    fn test_think_doubles_queue_and_starts_countdown() {
        let mut fx = Fixture::new(3);
        let session = fx.started_at(StageKind::Think);

        let think = think(&session);
        assert_eq!(think.entries.len(), 6);
        assert_eq!(think.entries[3].id, session.queue()[0].id);
        assert_eq!(fx.timer.remaining(), Some(7));
        assert_eq!(fx.timer.purpose(), Some(TimerPurpose::Think { entry: 0 }));
    }

    #[test]
    fn test_think_vote_requires_reveal() {
        let mut fx = Fixture::new(1);
        let session = fx.started_at(StageKind::Think);

        let (after, effects) = fx.step(session.clone(), GroupEvent::VoteThink(true));
        assert_eq!(after, session);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_think_timer_expiry_reveals_without_scoring() {
        let mut fx = Fixture::new(1);
        let session = fx.started_at(StageKind::Think);

        let mut expired = None;
        for _ in 0..7 {
            if let Tick::Expired(token) = fx.timer.tick() {
                expired = Some(token);
            }
        }
        let token = expired.expect("countdown should expire after seven ticks");

        let (session, effects) = fx.step(session, GroupEvent::TimerExpired(token));
        assert_eq!(think(&session).phase, ThinkPhase::Revealed { timed_out: true });
        assert!(effects.has_cue(Cue::Reveal));
        assert_eq!(think(&session).index, 0);
        assert_eq!(fx.deck.mistake_counts().len(), 0);
    }

    #[test]
    fn test_stale_think_timer_is_ignored() {
        let mut fx = Fixture::new(2);
        let session = fx.started_at(StageKind::Think);
        let stale = fx.timer.start(7, TimerPurpose::Think { entry: 0 });

        let (session, _) = fx.step(session, GroupEvent::RevealThink);
        let (session, _) = fx.step(session, GroupEvent::VoteThink(true));
        assert_eq!(think(&session).index, 1);

        let (after, effects) = fx.step(session.clone(), GroupEvent::TimerExpired(stale));
        assert_eq!(after, session);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_think_misses_requeue_without_cap() {
        let mut fx = Fixture::new(1);
        let mut session = fx.started_at(StageKind::Think);
        let id = session.queue()[0].id;

        for _ in 0..4 {
            session = fx.step(session, GroupEvent::RevealThink).0;
            session = fx.step(session, GroupEvent::VoteThink(false)).0;
        }
        // 2 original entries + 4 requeued misses, 4 walked so far.
        assert_eq!(think(&session).entries.len(), 6);
        assert_eq!(think(&session).index, 4);
        assert_eq!(fx.deck.card(id).unwrap().mistake_count, 4);

        while session.stage().kind() == StageKind::Think {
            session = fx.step(session, GroupEvent::RevealThink).0;
            session = fx.step(session, GroupEvent::VoteThink(true)).0;
        }
        assert!(session.is_finished());
    }

    #[test]
    fn test_results_marks_group_once_and_checkpoints() {
        let mut fx = Fixture::new(1);
        let mut session = fx.started_at(StageKind::Think);
        let mut last_effects = Vec::new();
        while !session.is_finished() {
            session = fx.step(session, GroupEvent::RevealThink).0;
            let (next, effects) = fx.step(session, GroupEvent::VoteThink(true));
            session = next;
            last_effects = effects;
        }

        assert!(last_effects.celebrates());
        assert!(last_effects.has_cue(Cue::LevelUp));
        let checkpoint = last_effects.checkpoint().unwrap();
        assert!(checkpoint.completed_groups.contains(&0));
        assert!(!fx.timer.is_running());

        assert_eq!(fx.completed.iter().copied().collect::<Vec<_>>(), vec![0]);
    }
}
