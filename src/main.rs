//! Terminal lane-catch game (default binary).
//!
//! Renders through the framebuffer renderer, reads keys and mouse presses
//! through crossterm and drives the simulation with a fixed timestep.

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_jumper::core::GameSnapshot;
use tui_jumper::input::{handle_key_event, handle_mouse_event, should_quit};
use tui_jumper::platform::{Bell, JsonFileStore, KeyValueStore, Sound};
use tui_jumper::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_jumper::types::Mode;
use tui_jumper::Session;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(name = "tui-jumper", version, about = "Catch the jumpers before they hit the ground")]
struct Cli {
    /// Game variant to start in (A or B).
    #[arg(long, default_value = "A", value_parser = parse_mode)]
    mode: Mode,

    /// Where preferences and the high score are kept.
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Start with sound off (the stored setting is left alone).
    #[arg(long)]
    mute: bool,

    /// Write logs to this file. Without it logging is off so the screen stays clean.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::from_str(s).ok_or_else(|| format!("unknown mode {s:?} (expected A or B)"))
}

fn default_data_file() -> PathBuf {
    let base = std::env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/share")));
    match base {
        Some(dir) => dir.join("tui-jumper").join("prefs.json"),
        None => PathBuf::from("tui-jumper-prefs.json"),
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("opening log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let data_file = cli.data_file.clone().unwrap_or_else(default_data_file);
    let store = JsonFileStore::open(data_file);
    let mut session = Session::new(cli.mode, store, Bell::new(std::io::stdout()));
    if cli.mute {
        session = session.with_sound_enabled(false);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run<S: KeyValueStore, A: Sound>(
    term: &mut TerminalRenderer,
    session: &mut Session<S, A>,
) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        session.snapshot_into(&mut snap);
        let status = session.hud_status();
        view.render_into_with_status(&snap, Some(&status), viewport, &mut fb);
        term.present(&mut fb)?;

        let timeout = FRAME.saturating_sub(last.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        log::info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    for action in handle_mouse_event(mouse, view.board_split_x(viewport)) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last).as_millis().min(u128::from(u32::MAX)) as u32;
        last = now;
        session.advance(elapsed);
    }
}
