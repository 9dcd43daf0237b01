//! Integration tests for the simulation driven through the public API.

use tui_jumper::core::{FixedStep, GameState, Xorshift32};
use tui_jumper::types::{GameAction, Mode, RunPhase, TickEvent, MAX_MISSES, RNG_SEED};

/// Tick until game over (or `limit` ticks), recording every event with the
/// tick it happened on.
fn play_idle(state: &mut GameState, limit: u32) -> Vec<(u32, TickEvent)> {
    let mut log = Vec::new();
    for n in 1..=limit {
        for event in state.tick() {
            log.push((n, event));
        }
        if state.is_game_over() {
            break;
        }
    }
    log
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(Mode::A, 0);
    assert_eq!(state.phase(), RunPhase::NotStarted);

    state.apply_action(GameAction::Start);
    assert_eq!(state.phase(), RunPhase::Running);

    state.apply_action(GameAction::Pause);
    assert_eq!(state.phase(), RunPhase::Paused);
    assert!(state.tick().is_empty());

    state.apply_action(GameAction::Pause);
    assert_eq!(state.phase(), RunPhase::Running);

    state.apply_action(GameAction::ToggleMode);
    assert_eq!(state.mode(), Mode::B);
    assert_eq!(state.phase(), RunPhase::NotStarted);
}

#[test]
fn test_seed_scenario_idle_player() {
    // An idle player in the middle lane with the default seed: jumpers come
    // from lanes 1, 2, 1, 2, 0. The middle ones are caught, the rest fall.
    let mut state = GameState::new(Mode::A, 0);
    state.start();
    let log = play_idle(&mut state, 200);

    let resolutions: Vec<(u32, u8, bool)> = log
        .iter()
        .filter_map(|&(n, e)| match e {
            TickEvent::Caught { lane, .. } => Some((n, lane, true)),
            TickEvent::Missed { lane } => Some((n, lane, false)),
            TickEvent::GameOver { .. } => None,
        })
        .collect();
    assert_eq!(
        resolutions,
        vec![
            (17, 1, true),
            (28, 2, false),
            (39, 1, true),
            (50, 2, false),
            (61, 0, false),
        ]
    );

    assert_eq!(
        log.last(),
        Some(&(
            61,
            TickEvent::GameOver {
                score: 2,
                new_high_score: true
            }
        ))
    );
    assert_eq!(state.score(), 2);
    assert_eq!(state.high_score(), 2);
    assert_eq!(state.misses(), MAX_MISSES);
    assert_eq!(state.phase(), RunPhase::GameOver);
}

#[test]
fn test_spawned_lanes_follow_the_generator() {
    let mut state = GameState::new(Mode::A, 0);
    state.start();
    let mut rng = Xorshift32::new(RNG_SEED);

    let mut seen = Vec::new();
    for _ in 0..200 {
        state.tick();
        for a in state.actors() {
            if !seen.contains(&a.id) {
                seen.push(a.id);
                assert_eq!(a.lane(), rng.next_lane());
            }
        }
        if state.is_game_over() {
            break;
        }
    }
    assert!(seen.len() >= 5);
}

#[test]
fn test_game_over_is_sticky_until_reset() {
    let mut state = GameState::new(Mode::A, 10);
    state.start();
    let log = play_idle(&mut state, 200);
    assert!(state.is_game_over());
    assert!(log.iter().any(|(_, e)| *e
        == TickEvent::GameOver {
            score: 2,
            new_high_score: false
        }));
    assert_eq!(state.high_score(), 10);

    state.apply_action(GameAction::Start);
    state.apply_action(GameAction::Pause);
    assert_eq!(state.phase(), RunPhase::GameOver);
    assert!(state.tick().is_empty());

    state.apply_action(GameAction::Reset);
    assert_eq!(state.phase(), RunPhase::NotStarted);
    assert_eq!(state.score(), 0);
    assert_eq!(state.misses(), 0);
    assert_eq!(state.high_score(), 10);
}

#[test]
fn test_moving_under_the_jumper_catches_it() {
    // Shadow the spawned lane so every jumper is caught.
    let mut state = GameState::new(Mode::A, 0);
    state.start();

    let mut caught = 0;
    for _ in 0..400 {
        let target = state.alive_actors().next().map(|a| a.lane());
        if let Some(target) = target {
            let dir = (target as i8 - state.player_pos() as i8).signum();
            state.set_pending_dir(dir);
        }
        for event in state.tick() {
            match event {
                TickEvent::Caught { perfect, .. } => {
                    assert!(perfect);
                    caught += 1;
                }
                other => panic!("unexpected {other:?}"),
            }
        }
    }
    assert!(caught >= 10, "caught {caught}");
    assert_eq!(state.misses(), 0);
    assert_eq!(state.phase(), RunPhase::Running);
}

#[test]
fn test_fixed_step_matches_manual_ticks() {
    let mut stepped = GameState::new(Mode::B, 0);
    let mut manual = GameState::new(Mode::B, 0);
    stepped.start();
    manual.start();

    let mut step = FixedStep::new();
    let mut ticks = 0;
    for _ in 0..300 {
        ticks += step.advance(16, &mut stepped, |_| {});
    }
    for _ in 0..ticks {
        manual.tick();
    }
    assert_eq!(stepped.snapshot(), manual.snapshot());
    assert_eq!(stepped.rng_state(), manual.rng_state());
}
