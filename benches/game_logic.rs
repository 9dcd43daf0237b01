use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_jumper::core::{FixedStep, GameSnapshot, GameState};
use tui_jumper::term::{FrameBuffer, GameView, Viewport};
use tui_jumper::types::Mode;

fn running_state(mode: Mode) -> GameState {
    let mut state = GameState::new(mode, 0);
    state.start();
    state
}

fn bench_tick(c: &mut Criterion) {
    c.bench_function("tick_mode_b", |b| {
        let mut state = running_state(Mode::B);
        b.iter(|| {
            if state.is_game_over() {
                state.reset();
                state.start();
            }
            black_box(state.tick());
        })
    });
}

fn bench_fixed_step(c: &mut Criterion) {
    c.bench_function("fixed_step_16ms", |b| {
        let mut state = running_state(Mode::A);
        let mut step = FixedStep::new();
        b.iter(|| {
            if state.is_game_over() {
                state.reset();
                state.start();
            }
            step.advance(black_box(16), &mut state, |events| {
                black_box(events);
            })
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = running_state(Mode::B);
    for _ in 0..20 {
        state.tick();
    }
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_80x24", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), viewport, &mut fb);
        })
    });
}

criterion_group!(benches, bench_tick, bench_fixed_step, bench_render);
criterion_main!(benches);
