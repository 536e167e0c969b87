use bevy::prelude::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    #[default]
    Playing,
    /// World frozen, waiting for the reset trigger.
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StarId(pub usize);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u32,
    pub high_score: u32,
}

impl ScoreState {
    /// Raise the high score to `final_score` if it beats it. Returns whether it changed.
    pub fn commit_high_score(&mut self, final_score: u32) -> bool {
        if final_score > self.high_score {
            self.high_score = final_score;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSlot {
    /// Grid position the star (re)spawns at.
    pub home: Vec2,
    pub active: bool,
}

/// Fixed-size ordered star row.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRow(Vec<StarSlot>);

impl StarRow {
    pub fn new(homes: impl IntoIterator<Item = Vec2>) -> Self {
        Self(
            homes
                .into_iter()
                .map(|home| StarSlot { home, active: true })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.0.iter().filter(|s| s.active).count()
    }

    pub fn is_active(&self, id: StarId) -> bool {
        self.0.get(id.0).is_some_and(|s| s.active)
    }

    /// Deactivate one star. False if it was already inactive or does not exist.
    pub fn deactivate(&mut self, id: StarId) -> bool {
        match self.0.get_mut(id.0) {
            Some(slot) if slot.active => {
                slot.active = false;
                true
            }
            _ => false,
        }
    }

    pub fn activate_all(&mut self) {
        for slot in &mut self.0 {
            slot.active = true;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (StarId, &StarSlot)> {
        self.0.iter().enumerate().map(|(i, s)| (StarId(i), s))
    }
}

/// One-shot reset handler: armed at most once per game over, disarmed when fired.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResetTrigger {
    armed: bool,
}

impl ResetTrigger {
    /// False when already armed.
    pub fn arm(&mut self) -> bool {
        !std::mem::replace(&mut self.armed, true)
    }

    /// True exactly once per arming.
    pub fn fire(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

/// Everything the session controller owns between ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub score: ScoreState,
    pub stars: StarRow,
    pub bombs: usize,
    pub rounds_completed: u32,
    pub reset: ResetTrigger,
    /// Score frozen at the moment of the last bomb hit.
    pub score_at_collision: Option<u32>,
}

impl SessionState {
    pub fn new(star_homes: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            phase: SessionPhase::Playing,
            score: ScoreState::default(),
            stars: StarRow::new(star_homes),
            bombs: 0,
            rounds_completed: 0,
            reset: ResetTrigger::default(),
            score_at_collision: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_trigger_arms_once_and_fires_once() {
        let mut t = ResetTrigger::default();
        assert!(!t.fire());
        assert!(t.arm());
        assert!(!t.arm(), "second arm in the same episode must be refused");
        assert!(t.is_armed());
        assert!(t.fire());
        assert!(!t.fire());
        assert!(t.arm(), "next episode can arm again");
    }

    #[test]
    fn star_row_deactivation_is_idempotent() {
        let mut row = StarRow::new([Vec2::ZERO, Vec2::X]);
        assert_eq!(row.active_count(), 2);
        assert!(row.deactivate(StarId(1)));
        assert!(!row.deactivate(StarId(1)));
        assert!(!row.deactivate(StarId(7)));
        assert_eq!(row.active_count(), 1);
        row.activate_all();
        assert_eq!(row.active_count(), 2);
    }

    #[test]
    fn high_score_never_decreases() {
        let mut s = ScoreState { score: 0, high_score: 5 };
        assert!(!s.commit_high_score(2));
        assert_eq!(s.high_score, 5);
        assert!(s.commit_high_score(9));
        assert_eq!(s.high_score, 9);
    }
}
