//! Scoring module - catch awards and combo tracking
//!
//! A perfect catch (jumper lands in the lane the player holds this tick)
//! extends the combo and refreshes its window; combo tiers multiply the
//! award. A grace catch (player held the lane one tick earlier) is worth a
//! flat point and leaves the combo alone. A miss breaks the combo at once.

use crate::types::{COMBO_TIER_DOUBLE, COMBO_TIER_TRIPLE, COMBO_WINDOW_MS};

/// How a resolving jumper was caught, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchKind {
    Perfect,
    Grace,
    Miss,
}

/// Classify a resolution against the current and previous player lanes.
///
/// A lane matching both counts once, as perfect.
pub fn classify(lane: u8, player_pos: u8, prev_player_pos: u8) -> CatchKind {
    if lane == player_pos {
        CatchKind::Perfect
    } else if lane == prev_player_pos {
        CatchKind::Grace
    } else {
        CatchKind::Miss
    }
}

/// Points for a perfect catch at the given (already incremented) combo.
pub fn combo_points(combo: u32) -> u32 {
    if combo >= COMBO_TIER_TRIPLE {
        3
    } else if combo >= COMBO_TIER_DOUBLE {
        2
    } else {
        1
    }
}

/// Combo counter with a decaying window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Combo {
    count: u32,
    timer_ms: u32,
}

impl Combo {
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn timer_ms(&self) -> u32 {
        self.timer_ms
    }

    /// Register a perfect catch and return its award.
    pub fn perfect(&mut self) -> u32 {
        self.count = self.count.saturating_add(1);
        self.timer_ms = COMBO_WINDOW_MS;
        combo_points(self.count)
    }

    pub fn clear(&mut self) {
        self.count = 0;
        self.timer_ms = 0;
    }

    /// Run the window down by one tick; the combo lapses when it empties.
    pub fn decay(&mut self, elapsed_ms: u32) {
        if self.timer_ms == 0 {
            return;
        }
        self.timer_ms = self.timer_ms.saturating_sub(elapsed_ms);
        if self.timer_ms == 0 {
            self.count = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_prefers_current_lane() {
        assert_eq!(classify(1, 1, 1), CatchKind::Perfect);
        assert_eq!(classify(1, 1, 0), CatchKind::Perfect);
        assert_eq!(classify(0, 1, 0), CatchKind::Grace);
        assert_eq!(classify(2, 1, 0), CatchKind::Miss);
    }

    #[test]
    fn combo_tiers() {
        assert_eq!(combo_points(1), 1);
        assert_eq!(combo_points(2), 1);
        assert_eq!(combo_points(3), 2);
        assert_eq!(combo_points(4), 2);
        assert_eq!(combo_points(5), 3);
        assert_eq!(combo_points(50), 3);
    }

    #[test]
    fn perfect_catches_escalate() {
        let mut combo = Combo::default();
        let awards: Vec<u32> = (0..6).map(|_| combo.perfect()).collect();
        assert_eq!(awards, vec![1, 1, 2, 2, 3, 3]);
        assert_eq!(combo.count(), 6);
        assert_eq!(combo.timer_ms(), COMBO_WINDOW_MS);
    }

    #[test]
    fn combo_lapses_when_window_runs_out() {
        let mut combo = Combo::default();
        combo.perfect();
        combo.perfect();

        for _ in 0..9 {
            combo.decay(200);
        }
        assert_eq!(combo.count(), 2);
        assert_eq!(combo.timer_ms(), 200);

        combo.decay(200);
        assert_eq!(combo.count(), 0);
        assert_eq!(combo.timer_ms(), 0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut combo = Combo::default();
        combo.perfect();
        combo.clear();
        assert_eq!(combo, Combo::default());
    }
}
