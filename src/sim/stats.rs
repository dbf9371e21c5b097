use crate::game::{Collision, StepInfo};

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// The snake hit a wall or itself
    Died(Collision),
    /// The reset switch cleared the board mid-round
    Aborted,
}

/// Per-session record of rounds, built from the engine's step reports
///
/// A round runs from a start edge to either a fatal collision or a reset.
/// Resets while idle do not count.
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    in_round: bool,
    round_food: u32,
    round_ticks: u32,
    rounds_played: u32,
    deaths: u32,
    aborted: u32,
    high_score: u32,
    food_eaten: u32,
    longest: usize,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one engine iteration into the record; returns how the round ended, if it did.
    ///
    /// `length` is the snake length after the iteration.
    pub fn record(&mut self, info: &StepInfo, length: usize) -> Option<RoundEnd> {
        if info.reset {
            // A reset tick does nothing else
            if !self.in_round {
                return None;
            }
            return Some(self.finish(RoundEnd::Aborted));
        }
        if info.started {
            self.in_round = true;
            self.round_food = 0;
            self.round_ticks = 0;
        }
        if !self.in_round {
            return None;
        }

        self.round_ticks += 1;
        self.longest = self.longest.max(length);
        if info.ate_food {
            self.round_food += 1;
            self.food_eaten += 1;
        }

        info.collision.map(|collision| self.finish(RoundEnd::Died(collision)))
    }

    fn finish(&mut self, end: RoundEnd) -> RoundEnd {
        self.in_round = false;
        self.rounds_played += 1;
        self.high_score = self.high_score.max(self.round_food);
        match end {
            RoundEnd::Died(_) => self.deaths += 1,
            RoundEnd::Aborted => self.aborted += 1,
        }
        end
    }

    pub fn in_round(&self) -> bool {
        self.in_round
    }

    /// Running ticks in the current or most recent round
    pub fn round_ticks(&self) -> u32 {
        self.round_ticks
    }

    /// Rounds that ended by death or reset
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn deaths(&self) -> u32 {
        self.deaths
    }

    pub fn aborted(&self) -> u32 {
        self.aborted
    }

    /// Most food eaten in one finished round
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Food eaten across the whole session
    pub fn food_eaten(&self) -> u32 {
        self.food_eaten
    }

    /// Longest snake seen this session
    pub fn longest(&self) -> usize {
        self.longest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> StepInfo {
        StepInfo {
            started: true,
            ..Default::default()
        }
    }

    fn ate() -> StepInfo {
        StepInfo {
            ate_food: true,
            ..Default::default()
        }
    }

    fn died(collision: Collision) -> StepInfo {
        StepInfo {
            collision: Some(collision),
            ..Default::default()
        }
    }

    fn reset() -> StepInfo {
        StepInfo {
            reset: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_idle_ticks_are_not_a_round() {
        let mut stats = SessionStats::new();
        assert_eq!(stats.record(&StepInfo::default(), 3), None);
        assert_eq!(stats.record(&reset(), 3), None);

        assert_eq!(stats.rounds_played(), 0);
        assert_eq!(stats.aborted(), 0);
        assert_eq!(stats.round_ticks(), 0);
    }

    #[test]
    fn test_death_closes_round_with_food_as_score() {
        let mut stats = SessionStats::new();
        stats.record(&started(), 3);
        stats.record(&ate(), 4);
        stats.record(&ate(), 5);
        stats.record(&StepInfo::default(), 5);

        let end = stats.record(&died(Collision::Wall), 5);

        assert_eq!(end, Some(RoundEnd::Died(Collision::Wall)));
        assert!(!stats.in_round());
        assert_eq!(stats.round_ticks(), 5);
        assert_eq!(stats.high_score(), 2);
        assert_eq!(stats.longest(), 5);
        assert_eq!((stats.deaths(), stats.aborted()), (1, 0));
    }

    #[test]
    fn test_high_score_spans_rounds() {
        let mut stats = SessionStats::new();
        stats.record(&started(), 3);
        stats.record(&ate(), 4);
        stats.record(&ate(), 5);
        stats.record(&reset(), 3);

        stats.record(&started(), 3);
        stats.record(&ate(), 4);
        stats.record(&died(Collision::SelfCollision), 4);

        assert_eq!(stats.rounds_played(), 2);
        assert_eq!(stats.high_score(), 2);
        assert_eq!(stats.food_eaten(), 3);
        assert_eq!((stats.deaths(), stats.aborted()), (1, 1));
    }

    #[test]
    fn test_new_start_clears_round_counters() {
        let mut stats = SessionStats::new();
        stats.record(&started(), 3);
        stats.record(&ate(), 4);
        stats.record(&died(Collision::Wall), 4);

        stats.record(&started(), 3);
        assert!(stats.in_round());
        assert_eq!(stats.round_ticks(), 1);
        assert_eq!(stats.food_eaten(), 1);
    }
}
