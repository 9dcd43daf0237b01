//! RNG module - deterministic xorshift lane selection
//!
//! The handheld picks a window for each jumper from a 32-bit xorshift
//! generator (shifts 13/17/5) reduced to `[0, 1)` through `% 1000`. The
//! reduction is coarse on purpose: runs must match recorded golden sequences
//! bit for bit, so the exact shifts, the signed right shift and the modulus
//! are all part of the contract.

use crate::types::LANES;

/// Advance the generator once.
///
/// Returns the drawn value in `[0, 1)` and the next state. The right shift
/// is arithmetic on the signed view of the state.
pub fn next(state: u32) -> (f64, u32) {
    let mut x = state as i32;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    let out = x as u32;
    (f64::from(out % 1000) / 1000.0, out)
}

/// Seeded xorshift generator carried inside the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Create a generator. A zero seed is a fixed point of xorshift, so it is
    /// remapped to 1.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Next value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        let (value, state) = next(self.state);
        self.state = state;
        value
    }

    /// Draw a lane in `0..LANES`.
    ///
    /// Equal to `floor(next_unit() * LANES)` but computed on the integer
    /// residue so no rounding can creep in.
    pub fn next_lane(&mut self) -> u8 {
        let (_, state) = next(self.state);
        self.state = state;
        ((state % 1000) * LANES as u32 / 1000) as u8
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}
