//! Fixed-timestep accumulator.
//!
//! Converts wall-clock frame time into whole simulation ticks so the game
//! advances in identical steps regardless of the render rate. The tick
//! length is re-read from the state after every step because the difficulty
//! ramp can shorten it mid-frame.

use crate::game_state::{GameState, TickEvents};
use crate::types::MAX_FRAME_MS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedStep {
    acc_ms: u32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds banked toward the next tick.
    pub fn pending_ms(&self) -> u32 {
        self.acc_ms
    }

    pub fn clear(&mut self) {
        self.acc_ms = 0;
    }

    /// Feed `elapsed_ms` of real time and run every tick it pays for.
    ///
    /// Frames longer than [`MAX_FRAME_MS`] are clipped so a stalled terminal
    /// doesn't trigger a burst of catch-up ticks. Returns the tick count.
    pub fn advance(
        &mut self,
        elapsed_ms: u32,
        state: &mut GameState,
        mut on_events: impl FnMut(&TickEvents),
    ) -> u32 {
        self.acc_ms = self.acc_ms.saturating_add(elapsed_ms.min(MAX_FRAME_MS));

        let mut ticks = 0;
        while self.acc_ms >= state.tick_ms() {
            self.acc_ms -= state.tick_ms();
            let events = state.tick();
            if !events.is_empty() {
                on_events(&events);
            }
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mode;

    #[test]
    fn banks_partial_ticks() {
        let mut state = GameState::new(Mode::A, 0);
        state.start();
        let mut step = FixedStep::new();

        assert_eq!(step.advance(150, &mut state, |_| {}), 0);
        assert_eq!(step.pending_ms(), 150);
        assert_eq!(step.advance(100, &mut state, |_| {}), 1);
        assert_eq!(step.pending_ms(), 50);
        assert_eq!(state.game_time_ms(), 200);
    }

    #[test]
    fn runs_multiple_ticks_per_frame() {
        let mut state = GameState::new(Mode::A, 0);
        state.start();
        let mut step = FixedStep::new();

        let ticks: u32 = (0..6).map(|_| step.advance(200, &mut state, |_| {})).sum();
        assert_eq!(ticks, 6);
        assert_eq!(state.spawn_timer_ms(), 1200);
    }

    #[test]
    fn clips_long_frames() {
        let mut state = GameState::new(Mode::A, 0);
        state.start();
        let mut step = FixedStep::new();

        assert_eq!(step.advance(10_000, &mut state, |_| {}), 1);
        assert_eq!(step.pending_ms(), MAX_FRAME_MS - 200);
    }

    #[test]
    fn drains_while_paused() {
        let mut state = GameState::new(Mode::A, 0);
        let mut step = FixedStep::new();

        assert_eq!(step.advance(200, &mut state, |_| {}), 1);
        assert_eq!(state.game_time_ms(), 0);
        assert_eq!(step.pending_ms(), 0);
    }

    #[test]
    fn forwards_events() {
        let mut state = GameState::new(Mode::A, 0);
        state.start();
        let mut step = FixedStep::new();

        let mut seen = Vec::new();
        for _ in 0..40 {
            step.advance(200, &mut state, |events| seen.extend(events.iter().copied()));
        }
        assert!(!seen.is_empty());
    }
}
