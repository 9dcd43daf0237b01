//! Game state module - owns a run and advances it one tick at a time
//!
//! This module ties together the PRNG, jumper actors, scoring and the
//! difficulty curves. `GameState::tick` is the only place simulation state
//! changes during play; the lifecycle methods (`new`, `reset`, `toggle_mode`,
//! `start`, `toggle_pause`) and the buffered lane move are the only inputs.

use arrayvec::ArrayVec;

use crate::actor::Actor;
use crate::difficulty;
use crate::rng::Xorshift32;
use crate::scoring::{classify, CatchKind, Combo};
use crate::snapshot::{ActorSnapshot, GameSnapshot};
use crate::types::*;

/// Events produced by one tick, in resolution order.
///
/// Bounded by one event per live actor plus the game-over notice.
pub type TickEvents = ArrayVec<TickEvent, MAX_TICK_EVENTS>;

/// Complete state of one run.
#[derive(Debug, Clone)]
pub struct GameState {
    tick_ms: u32,
    score: u32,
    misses: u8,
    mode: Mode,
    running: bool,
    /// Set by the first `start`; separates NotStarted from Paused.
    started: bool,
    player_pos: u8,
    prev_player_pos: u8,
    pending_dir: i8,
    actors: Vec<Actor>,
    next_actor_id: u32,
    spawn_timer_ms: u32,
    spawn_interval_ms: u32,
    rng: Xorshift32,
    high_score: u32,
    combo: Combo,
    perfect_catches: u32,
    game_time_ms: u64,
    shake: u8,
}

impl GameState {
    /// Fresh, non-running state for `mode`. `high_score` comes from the
    /// persisted preferences.
    pub fn new(mode: Mode, high_score: u32) -> Self {
        Self {
            tick_ms: START_TICK_MS,
            score: 0,
            misses: 0,
            mode,
            running: false,
            started: false,
            player_pos: START_LANE,
            prev_player_pos: START_LANE,
            pending_dir: 0,
            actors: Vec::with_capacity(COMPACT_THRESHOLD + 1),
            next_actor_id: 1,
            spawn_timer_ms: 0,
            spawn_interval_ms: mode.base_spawn_interval_ms(),
            rng: Xorshift32::new(RNG_SEED),
            high_score,
            combo: Combo::default(),
            perfect_catches: 0,
            game_time_ms: 0,
            shake: 0,
        }
    }

    /// Start over in the same mode. The high score carries over.
    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.high_score);
    }

    /// Start over in the other mode.
    pub fn toggle_mode(&mut self) {
        *self = Self::new(self.mode.toggled(), self.high_score);
    }

    /// Begin or resume the run. No effect once the run is over.
    pub fn start(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.started = true;
        self.running = true;
    }

    /// Flip between Running and Paused. Starts a run that hasn't begun;
    /// no effect after game over.
    pub fn toggle_pause(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.started = true;
        self.running = !self.running;
    }

    /// Buffer a lane move for the next tick. The latest request wins.
    pub fn set_pending_dir(&mut self, dir: i8) {
        self.pending_dir = dir.clamp(-1, 1);
    }

    /// Apply a player intent. Returns whether it was handled by the core.
    ///
    /// `ToggleMute` belongs to the audio adapter and is ignored here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft | GameAction::MoveRight => {
                if let Some(dir) = action.lane_delta() {
                    self.set_pending_dir(dir);
                }
                true
            }
            GameAction::Start => {
                self.start();
                true
            }
            GameAction::Pause => {
                self.toggle_pause();
                true
            }
            GameAction::Reset => {
                self.reset();
                true
            }
            GameAction::ToggleMode => {
                self.toggle_mode();
                true
            }
            GameAction::ToggleMute => false,
        }
    }

    /// Advance the simulation by one tick of `tick_ms`.
    ///
    /// Does nothing (and reports nothing) while not running.
    pub fn tick(&mut self) -> TickEvents {
        let mut events = TickEvents::new();
        if !self.running {
            return events;
        }

        let elapsed = self.tick_ms;

        // The lane held before this tick's move is the grace reference.
        self.prev_player_pos = self.player_pos;

        if self.pending_dir != 0 {
            let next = self.player_pos as i8 + self.pending_dir;
            self.player_pos = next.clamp(0, LANES as i8 - 1) as u8;
            self.pending_dir = 0;
        }

        self.spawn_timer_ms = self.spawn_timer_ms.saturating_add(elapsed);
        if self.spawn_timer_ms >= self.spawn_interval_ms
            && self.alive_count() < self.mode.concurrency_cap()
        {
            self.spawn_timer_ms = 0;
            self.spawn_actor();
        }

        self.shake = self.shake.saturating_sub(SHAKE_DECAY);
        self.combo.decay(elapsed);
        self.game_time_ms = self.game_time_ms.saturating_add(u64::from(elapsed));

        for idx in 0..self.actors.len() {
            if !self.actors[idx].alive {
                continue;
            }

            let actor = &mut self.actors[idx];
            actor.advance();
            if !actor.at_bottom() {
                continue;
            }

            let lane = actor.lane();
            actor.alive = false;
            self.resolve(lane, &mut events);

            if !self.running {
                // The run is over: clear the board without scoring the rest.
                for rest in &mut self.actors[idx + 1..] {
                    rest.alive = false;
                }
                break;
            }
        }

        if self.actors.len() > COMPACT_THRESHOLD {
            self.actors.retain(|a| a.alive);
        }

        self.tick_ms = difficulty::tick_ms(self.score);
        self.spawn_interval_ms = difficulty::spawn_interval_ms(self.mode, self.score);
        if self.mode == Mode::B {
            let floor = difficulty::speed_floor(self.mode, self.score);
            for actor in self.actors.iter_mut().filter(|a| a.alive) {
                actor.raise_speed_floor(floor);
            }
        }

        events
    }

    fn spawn_actor(&mut self) {
        let lane = self.rng.next_lane();
        let id = self.next_actor_id;
        self.next_actor_id = self.next_actor_id.wrapping_add(1);
        let speed = difficulty::speed_floor(self.mode, self.score);
        log::trace!("spawn actor {id} in lane {lane}");
        self.actors.push(Actor::spawn(id, lane, speed));
    }

    fn resolve(&mut self, lane: u8, events: &mut TickEvents) {
        match classify(lane, self.player_pos, self.prev_player_pos) {
            CatchKind::Perfect => {
                let points = self.combo.perfect();
                self.perfect_catches = self.perfect_catches.saturating_add(1);
                self.score = self.score.saturating_add(points);
                events.push(TickEvent::Caught {
                    lane,
                    perfect: true,
                    points,
                });
            }
            CatchKind::Grace => {
                self.score = self.score.saturating_add(1);
                events.push(TickEvent::Caught {
                    lane,
                    perfect: false,
                    points: 1,
                });
            }
            CatchKind::Miss => {
                self.misses = (self.misses + 1).min(MAX_MISSES);
                self.combo.clear();
                self.shake = SHAKE_ON_MISS;
                events.push(TickEvent::Missed { lane });

                if self.misses >= MAX_MISSES {
                    self.running = false;
                    let new_high_score = self.score > self.high_score;
                    if new_high_score {
                        self.high_score = self.score;
                    }
                    log::info!(
                        "game over in mode {}: score {} (new best: {})",
                        self.mode.as_str(),
                        self.score,
                        new_high_score
                    );
                    events.push(TickEvent::GameOver {
                        score: self.score,
                        new_high_score,
                    });
                }
            }
        }
    }

    fn alive_count(&self) -> usize {
        self.actors.iter().filter(|a| a.alive).count()
    }

    pub fn phase(&self) -> RunPhase {
        if self.is_game_over() {
            RunPhase::GameOver
        } else if self.running {
            RunPhase::Running
        } else if self.started {
            RunPhase::Paused
        } else {
            RunPhase::NotStarted
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.misses >= MAX_MISSES
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn misses(&self) -> u8 {
        self.misses
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn player_pos(&self) -> u8 {
        self.player_pos
    }

    pub fn prev_player_pos(&self) -> u8 {
        self.prev_player_pos
    }

    pub fn pending_dir(&self) -> i8 {
        self.pending_dir
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn alive_actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter().filter(|a| a.alive)
    }

    pub fn spawn_timer_ms(&self) -> u32 {
        self.spawn_timer_ms
    }

    pub fn spawn_interval_ms(&self) -> u32 {
        self.spawn_interval_ms
    }

    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn combo(&self) -> u32 {
        self.combo.count()
    }

    pub fn combo_timer_ms(&self) -> u32 {
        self.combo.timer_ms()
    }

    pub fn perfect_catches(&self) -> u32 {
        self.perfect_catches
    }

    pub fn game_time_ms(&self) -> u64 {
        self.game_time_ms
    }

    pub fn shake(&self) -> u8 {
        self.shake
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.mode = self.mode;
        out.phase = self.phase();
        out.score = self.score;
        out.high_score = self.high_score;
        out.misses = self.misses;
        out.player_pos = self.player_pos;
        out.prev_player_pos = self.prev_player_pos;
        out.tick_ms = self.tick_ms;
        out.combo = self.combo.count();
        out.combo_timer_ms = self.combo.timer_ms();
        out.perfect_catches = self.perfect_catches;
        out.game_time_ms = self.game_time_ms;
        out.shake = self.shake;

        out.actors = [None; MAX_CONCURRENT_ACTORS];
        for (slot, actor) in out.actors.iter_mut().zip(self.alive_actors()) {
            *slot = Some(ActorSnapshot::from(actor));
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Mode::A, 0)
    }
}
