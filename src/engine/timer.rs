//! Single-slot countdown.
//!
//! The engine owns one `Timer`. Starting a countdown replaces whatever was
//! running; every countdown is stamped with a [`TimerToken`] so an expiry can be
//! checked against the state that started it.

/// What a countdown was started for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerPurpose {
    /// Think stage, entry at this position of the think queue.
    Think { entry: usize },
    /// Time attack: one countdown for the whole game.
    TimeAttack,
    /// Word hunt, round at this queue position.
    WordHunt { round: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerToken {
    generation: u64,
    pub purpose: TimerPurpose,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Idle,
    Running { remaining: u32 },
    Expired(TimerToken),
}

#[derive(Debug)]
struct Countdown {
    token: TimerToken,
    remaining: u32,
}

#[derive(Debug, Default)]
pub struct Timer {
    slot: Option<Countdown>,
    generation: u64,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a countdown, cancelling the running one.
    pub fn start(&mut self, seconds: u32, purpose: TimerPurpose) -> TimerToken {
        self.generation += 1;
        let token = TimerToken {
            generation: self.generation,
            purpose,
        };
        self.slot = Some(Countdown {
            token,
            remaining: seconds,
        });
        token
    }

    pub fn cancel(&mut self) {
        self.slot = None;
    }

    pub fn is_running(&self) -> bool {
        self.slot.is_some()
    }

    pub fn remaining(&self) -> Option<u32> {
        self.slot.as_ref().map(|countdown| countdown.remaining)
    }

    /// Token of the running countdown. Each `start` yields a new one.
    pub fn token(&self) -> Option<TimerToken> {
        self.slot.as_ref().map(|countdown| countdown.token)
    }

    pub fn purpose(&self) -> Option<TimerPurpose> {
        self.slot.as_ref().map(|countdown| countdown.token.purpose)
    }

    /// True while `token`'s countdown is the one in the slot.
    pub fn is_current(&self, token: TimerToken) -> bool {
        self.slot
            .as_ref()
            .is_some_and(|countdown| countdown.token == token)
    }

    /// One elapsed second. The slot is emptied on expiry.
    pub fn tick(&mut self) -> Tick {
        let Some(countdown) = self.slot.as_mut() else {
            return Tick::Idle;
        };

        countdown.remaining = countdown.remaining.saturating_sub(1);
        if countdown.remaining > 0 {
            return Tick::Running {
                remaining: countdown.remaining,
            };
        }

        let token = countdown.token;
        self.slot = None;
        Tick::Expired(token)
    }
}
