//! Arcade scoring: a streak-tiered multiplier on a flat base, used by every mode.

pub const BASE_POINTS: u32 = 10;

/// 1x up to a streak of 2, 1.5x for streaks 3 through 6, 2x from 7 on.
pub fn multiplier(streak: u32) -> f32 {
    if streak > 6 {
        2.0
    } else if streak > 2 {
        1.5
    } else {
        1.0
    }
}

/// Points for a correct answer that brought the streak to `streak`.
pub fn points_for(streak: u32) -> u32 {
    (BASE_POINTS as f32 * multiplier(streak)).round() as u32
}

/// Score and streak of one arcade game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: u32,
    pub streak: u32,
    pub max_streak: u32,
}

impl Scoreboard {
    /// Returns the points awarded.
    pub fn hit(&mut self) -> u32 {
        self.streak += 1;
        self.max_streak = self.max_streak.max(self.streak);
        let points = points_for(self.streak);
        self.score += points;
        points
    }

    pub fn miss(&mut self) {
        self.streak = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_thresholds() {
        assert_eq!(multiplier(0), 1.0);
        assert_eq!(multiplier(2), 1.0);
        assert_eq!(multiplier(3), 1.5);
        assert_eq!(multiplier(5), 1.5);
        assert_eq!(multiplier(6), 1.5);
        assert_eq!(multiplier(7), 2.0);
    }

    #[test]
    fn test_points_per_tier() {
        assert_eq!(points_for(1), 10);
        assert_eq!(points_for(3), 15);
        assert_eq!(points_for(7), 20);
    }

    #[test]
    fn test_scoreboard_streak_and_reset() {
        let mut board = Scoreboard::default();
        for _ in 0..3 {
            board.hit();
        }
        assert_eq!(board.score, 10 + 10 + 15);
        assert_eq!(board.streak, 3);

        board.miss();
        assert_eq!(board.streak, 0);
        assert_eq!(board.max_streak, 3);
        assert_eq!(board.score, 35);

        board.hit();
        assert_eq!(board.score, 45);
        assert_eq!(board.max_streak, 3);
    }
}
