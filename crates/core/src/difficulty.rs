//! Difficulty curves.
//!
//! Every curve is a pure function of the score (and mode), recomputed each
//! tick. Nothing here accumulates, so calling them twice is harmless.

use crate::types::{
    Mode, ACTOR_MAX_SPEED, ACTOR_START_SPEED, MIN_TICK_MS, MODE_B_SPEED_SCORE,
    MODE_B_SPEED_STEP, SPAWN_RATE_MS_PER_POINT, START_TICK_MS, TICK_STEP_MS, TICK_STEP_SCORE,
};

/// Tick duration for a given score, floored at [`MIN_TICK_MS`].
pub fn tick_ms(score: u32) -> u32 {
    let speedup = (score / TICK_STEP_SCORE).saturating_mul(TICK_STEP_MS);
    START_TICK_MS.saturating_sub(speedup).max(MIN_TICK_MS)
}

/// Spawn interval for a given mode and score.
pub fn spawn_interval_ms(mode: Mode, score: u32) -> u32 {
    let ramp = score.saturating_mul(SPAWN_RATE_MS_PER_POINT);
    mode.base_spawn_interval_ms()
        .saturating_sub(ramp)
        .max(mode.min_spawn_interval_ms())
}

/// Minimum fall speed for jumpers.
///
/// Mode A never ramps; mode B gains [`MODE_B_SPEED_STEP`] per
/// [`MODE_B_SPEED_SCORE`] points up to terminal speed.
pub fn speed_floor(mode: Mode, score: u32) -> u32 {
    match mode {
        Mode::A => ACTOR_START_SPEED,
        Mode::B => {
            let ramp = (score / MODE_B_SPEED_SCORE).saturating_mul(MODE_B_SPEED_STEP);
            ACTOR_START_SPEED.saturating_add(ramp).min(ACTOR_MAX_SPEED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_ms_steps_every_twelve_points() {
        assert_eq!(tick_ms(0), 200);
        assert_eq!(tick_ms(11), 200);
        assert_eq!(tick_ms(12), 195);
        assert_eq!(tick_ms(120), 150);
    }

    #[test]
    fn tick_ms_is_floored() {
        assert_eq!(tick_ms(192), 120);
        assert_eq!(tick_ms(10_000), MIN_TICK_MS);
        assert_eq!(tick_ms(u32::MAX), MIN_TICK_MS);
    }

    #[test]
    fn spawn_interval_ramps_per_mode() {
        assert_eq!(spawn_interval_ms(Mode::A, 0), 1400);
        assert_eq!(spawn_interval_ms(Mode::A, 50), 1100);
        assert_eq!(spawn_interval_ms(Mode::A, 500), 700);

        assert_eq!(spawn_interval_ms(Mode::B, 0), 1000);
        assert_eq!(spawn_interval_ms(Mode::B, 50), 700);
        assert_eq!(spawn_interval_ms(Mode::B, 500), 550);
        assert_eq!(spawn_interval_ms(Mode::B, u32::MAX), 550);
    }

    #[test]
    fn speed_floor_only_ramps_in_mode_b() {
        assert_eq!(speed_floor(Mode::A, 400), ACTOR_START_SPEED);
        assert_eq!(speed_floor(Mode::B, 39), ACTOR_START_SPEED);
        assert_eq!(speed_floor(Mode::B, 40), ACTOR_START_SPEED + MODE_B_SPEED_STEP);
        assert_eq!(speed_floor(Mode::B, 10_000), ACTOR_MAX_SPEED);
    }
}
