//! Session: the glue between the simulation core and the platform adapters.
//!
//! The core never sees storage or audio. It reports what happened through
//! `TickEvent`s and the session turns those into cues and persisted
//! preferences. Adapter failures are logged and dropped here so the run
//! keeps going.

use crate::core::{FixedStep, GameSnapshot, GameState};
use crate::platform::{Cue, KeyValueStore, Prefs, Sound};
use crate::term::HudStatus;
use crate::types::{GameAction, Mode, RunPhase, TickEvent};

pub struct Session<S: KeyValueStore, A: Sound> {
    state: GameState,
    step: FixedStep,
    prefs: Prefs,
    store: S,
    sound: A,
}

impl<S: KeyValueStore, A: Sound> Session<S, A> {
    /// Load preferences from `store` and set up a fresh run in `mode`.
    pub fn new(mode: Mode, store: S, sound: A) -> Self {
        let prefs = Prefs::load(&store);
        log::info!(
            "session ready: mode {} high score {} sound {}",
            mode.as_str(),
            prefs.high_score,
            prefs.sound_enabled
        );
        Self {
            state: GameState::new(mode, prefs.high_score),
            step: FixedStep::new(),
            prefs,
            store,
            sound,
        }
    }

    /// Override sound for this session without touching the stored value.
    pub fn with_sound_enabled(mut self, enabled: bool) -> Self {
        self.prefs.sound_enabled = enabled;
        self
    }

    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::ToggleMute => self.toggle_mute(),
            GameAction::Reset | GameAction::ToggleMode => {
                self.state.apply_action(action);
                self.step.clear();
                log::debug!("fresh run in mode {}", self.state.mode().as_str());
            }
            GameAction::Start | GameAction::Pause => {
                let before = self.state.phase();
                self.state.apply_action(action);
                if before != RunPhase::Running && self.state.phase() == RunPhase::Running {
                    self.cue(Cue::Start);
                }
            }
            GameAction::MoveLeft | GameAction::MoveRight => {
                self.state.apply_action(action);
            }
        }
    }

    /// Feed wall-clock time. Returns the number of ticks simulated.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let Self {
            state,
            step,
            prefs,
            store,
            sound,
        } = self;

        step.advance(elapsed_ms, state, |events| {
            for event in events {
                if prefs.sound_enabled {
                    sound.play(Cue::for_event(event));
                }
                if let TickEvent::GameOver {
                    score,
                    new_high_score: true,
                } = *event
                {
                    prefs.high_score = score;
                    if let Err(err) = prefs.save_high_score(&mut *store) {
                        log::warn!("could not save high score {score}: {err}");
                    }
                }
            }
        })
    }

    fn toggle_mute(&mut self) {
        self.prefs.sound_enabled = !self.prefs.sound_enabled;
        if let Err(err) = self.prefs.save_sound_enabled(&mut self.store) {
            log::warn!("could not save sound setting: {err}");
        }
    }

    fn cue(&mut self, cue: Cue) {
        if self.prefs.sound_enabled {
            self.sound.play(cue);
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn hud_status(&self) -> HudStatus {
        HudStatus {
            sound_enabled: self.prefs.sound_enabled,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn prefs(&self) -> Prefs {
        self.prefs
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sound(&self) -> &A {
        &self.sound
    }
}
