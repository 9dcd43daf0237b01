//! Audio cues.
//!
//! The handheld only beeps: each cue is a short square-wave tone. A terminal
//! can't synthesize tones, so [`Bell`] rings the terminal bell instead and
//! keeps the tone table for richer backends. Output failures never
//! propagate.

use std::io::Write;

use crate::types::TickEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Start,
    Catch,
    PerfectCatch,
    Miss,
    GameOver,
    NewHighScore,
}

/// Square-wave beep description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub freq_hz: u32,
    pub duration_ms: u32,
}

impl Cue {
    pub fn tone(&self) -> Tone {
        let (freq_hz, duration_ms) = match self {
            Cue::Start => (660, 80),
            Cue::Catch => (880, 60),
            Cue::PerfectCatch => (1320, 60),
            Cue::Miss => (220, 150),
            Cue::GameOver => (110, 400),
            Cue::NewHighScore => (1760, 300),
        };
        Tone {
            freq_hz,
            duration_ms,
        }
    }

    /// Cue for a simulation event.
    pub fn for_event(event: &TickEvent) -> Self {
        match *event {
            TickEvent::Caught { perfect: true, .. } => Cue::PerfectCatch,
            TickEvent::Caught { perfect: false, .. } => Cue::Catch,
            TickEvent::Missed { .. } => Cue::Miss,
            TickEvent::GameOver {
                new_high_score: true,
                ..
            } => Cue::NewHighScore,
            TickEvent::GameOver { .. } => Cue::GameOver,
        }
    }
}

/// Sound output. Implementations must swallow their own failures.
pub trait Sound {
    fn play(&mut self, cue: Cue);
}

/// Discards every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Sound for Silent {
    fn play(&mut self, _cue: Cue) {}
}

/// Rings the terminal bell (BEL) on the given writer.
///
/// Only cues that matter (misses and the end of a run) ring, so catches
/// don't turn into a stream of bells.
#[derive(Debug)]
pub struct Bell<W: Write> {
    out: W,
}

impl<W: Write> Bell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn rings_for(cue: Cue) -> bool {
        matches!(cue, Cue::Miss | Cue::GameOver | Cue::NewHighScore)
    }
}

impl<W: Write> Sound for Bell<W> {
    fn play(&mut self, cue: Cue) {
        if !Self::rings_for(cue) {
            return;
        }
        let tone = cue.tone();
        log::debug!("bell for {cue:?} ({} Hz, {} ms)", tone.freq_hz, tone.duration_ms);
        if let Err(e) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            log::debug!("bell unavailable: {e}");
        }
    }
}
