//! Jumpers and their fixed lane paths.

use crate::types::{
    Cell, ACTOR_ACCEL, ACTOR_MAX_SPEED, GRID_H, LANES, SPAWN_HANG_TICKS, STEP_UNIT,
};

const fn lane_path(lane: u8) -> [Cell; GRID_H as usize] {
    let mut cells = [Cell::new(lane, 0); GRID_H as usize];
    let mut depth = 0;
    while depth < GRID_H {
        cells[depth as usize] = Cell::new(lane, depth);
        depth += 1;
    }
    cells
}

/// The three window-to-net paths, indexed by lane.
pub static LANE_PATHS: [[Cell; GRID_H as usize]; LANES as usize] =
    [lane_path(0), lane_path(1), lane_path(2)];

/// A jumper falling from a window toward the net.
///
/// Progression is continuous: while moving, `speed` ramps by `accel` up to
/// [`ACTOR_MAX_SPEED`] and accumulates into `step_acc`; each full
/// [`STEP_UNIT`] advances one cell and the remainder carries over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: u32,
    pub path: &'static [Cell; GRID_H as usize],
    pub i: usize,
    pub alive: bool,
    pub hang: u8,
    pub speed: u32,
    pub accel: u32,
    pub step_acc: u32,
}

impl Actor {
    /// Spawn a jumper at the top of `lane`'s path.
    pub fn spawn(id: u32, lane: u8, speed: u32) -> Self {
        let lane = lane.min(LANES - 1);
        Self {
            id,
            path: &LANE_PATHS[lane as usize],
            i: 0,
            alive: true,
            hang: SPAWN_HANG_TICKS,
            speed: speed.min(ACTOR_MAX_SPEED),
            accel: ACTOR_ACCEL,
            step_acc: 0,
        }
    }

    /// Current cell. Indices past the end clamp to the last cell.
    pub fn cell(&self) -> Cell {
        self.path[self.i.min(self.path.len() - 1)]
    }

    pub fn lane(&self) -> u8 {
        self.cell().lane
    }

    pub fn is_hanging(&self) -> bool {
        self.hang > 0
    }

    /// Advance by one tick: burn a hang tick, or accelerate and maybe step.
    pub fn advance(&mut self) {
        if self.hang > 0 {
            self.hang -= 1;
            return;
        }

        self.speed = self.speed.saturating_add(self.accel).min(ACTOR_MAX_SPEED);
        self.step_acc += self.speed;
        if self.step_acc >= STEP_UNIT {
            self.step_acc -= STEP_UNIT;
            self.i += 1;
        }
    }

    /// Whether the jumper has reached the net row and must resolve now.
    pub fn at_bottom(&self) -> bool {
        self.cell().is_bottom()
    }

    /// Raise speed to at least `floor` (mode B ramp).
    pub fn raise_speed_floor(&mut self, floor: u32) {
        self.speed = self.speed.max(floor.min(ACTOR_MAX_SPEED));
    }
}
