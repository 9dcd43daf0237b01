//! Property tests over random action sequences.

use proptest::prelude::*;

use tui_jumper::core::GameState;
use tui_jumper::types::{GameAction, Mode, RunPhase, TickEvent, LANES, MAX_MISSES};

fn arb_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::A), Just(Mode::B)]
}

/// Mostly movement and idle ticks, with the occasional lifecycle action.
fn arb_input() -> impl Strategy<Value = Option<GameAction>> {
    prop_oneof![
        6 => Just(None),
        3 => Just(Some(GameAction::MoveLeft)),
        3 => Just(Some(GameAction::MoveRight)),
        1 => Just(Some(GameAction::Pause)),
        1 => Just(Some(GameAction::Start)),
        1 => Just(Some(GameAction::ToggleMute)),
    ]
}

fn run(mode: Mode, inputs: &[Option<GameAction>]) -> GameState {
    let mut state = GameState::new(mode, 0);
    state.start();
    for input in inputs {
        if let Some(action) = input {
            state.apply_action(*action);
        }
        state.tick();
    }
    state
}

proptest! {
    #[test]
    fn prop_counters_stay_in_range_and_monotone(
        mode in arb_mode(),
        inputs in prop::collection::vec(arb_input(), 1..600),
    ) {
        let mut state = GameState::new(mode, 0);
        state.start();
        let mut last_score = 0;
        let mut last_misses = 0;
        let mut game_overs = 0;

        for input in &inputs {
            if let Some(action) = input {
                state.apply_action(*action);
            }
            let was_over = state.is_game_over();
            let events = state.tick();
            if was_over {
                prop_assert!(events.is_empty());
            }
            game_overs += events.iter().filter(|e| e.is_game_over()).count();

            prop_assert!(state.score() >= last_score);
            prop_assert!(state.misses() >= last_misses);
            prop_assert!(state.misses() <= MAX_MISSES);
            prop_assert!(state.player_pos() < LANES);
            prop_assert!(state.alive_actors().count() <= mode.concurrency_cap());
            prop_assert!(state.tick_ms() >= 120 && state.tick_ms() <= 200);

            if state.misses() == MAX_MISSES {
                prop_assert_eq!(state.phase(), RunPhase::GameOver);
                prop_assert!(!state.running());
            }
            last_score = state.score();
            last_misses = state.misses();
        }
        prop_assert!(game_overs <= 1);
        if state.is_game_over() {
            prop_assert!(state.high_score() >= state.score());
        }
    }

    #[test]
    fn prop_each_resolution_scores_once(
        mode in arb_mode(),
        inputs in prop::collection::vec(arb_input(), 1..600),
    ) {
        let mut state = GameState::new(mode, 0);
        state.start();
        for input in &inputs {
            if let Some(action) = input {
                state.apply_action(*action);
            }
            let before = state.score();
            let gained: u32 = state
                .tick()
                .iter()
                .map(|e| match *e {
                    TickEvent::Caught { points, perfect, .. } => {
                        if !perfect {
                            assert_eq!(points, 1);
                        }
                        points
                    }
                    _ => 0,
                })
                .sum();
            prop_assert_eq!(state.score(), before + gained);
        }
    }

    #[test]
    fn prop_same_inputs_same_run(
        mode in arb_mode(),
        inputs in prop::collection::vec(arb_input(), 1..400),
    ) {
        let a = run(mode, &inputs);
        let b = run(mode, &inputs);
        prop_assert_eq!(a.snapshot(), b.snapshot());
        prop_assert_eq!(a.rng_state(), b.rng_state());
    }

    #[test]
    fn prop_reset_keeps_only_the_high_score(
        mode in arb_mode(),
        inputs in prop::collection::vec(arb_input(), 1..600),
    ) {
        let mut state = run(mode, &inputs);
        let high = state.high_score();
        state.apply_action(GameAction::Reset);

        let fresh = GameState::new(mode, high);
        prop_assert_eq!(state.snapshot(), fresh.snapshot());
        prop_assert_eq!(state.rng_state(), fresh.rng_state());
    }
}
