use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{GameConfig, GameLoopController, GameSession, SnakeBody};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{Cell, Direction, DrawCommand, KeyStates};

fn playing() -> GameLoopController {
    let mut game = GameLoopController::new(GameConfig::default().with_seed(12345));
    game.update(
        KeyStates {
            confirm: true,
            ..KeyStates::default()
        },
        Duration::ZERO,
    );
    game
}

/// A long snake snaking through the lower half of the board.
fn long_session() -> GameSession {
    let mut cells = Vec::new();
    for y in (1..10).rev() {
        let xs: Vec<i32> = if y % 2 == 1 {
            (1..19).collect()
        } else {
            (1..19).rev().collect()
        };
        cells.extend(xs.into_iter().map(|x| Cell::new(x, y)));
    }
    let snake = SnakeBody::from_cells(cells).expect("non-empty snake");
    GameSession::with_state(&GameConfig::default(), snake, Direction::Up, None, 1)
}

fn bench_frame_update(c: &mut Criterion) {
    let mut game = playing();

    c.bench_function("update_16ms", |b| {
        b.iter(|| {
            black_box(game.update(KeyStates::default(), black_box(Duration::from_millis(16))));
        })
    });
}

fn bench_step(c: &mut Criterion) {
    c.bench_function("step_long_snake", |b| {
        b.iter_batched(
            long_session,
            |mut session| black_box(session.step()),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_render(c: &mut Criterion) {
    let game = playing();
    let mut out: Vec<DrawCommand> = Vec::with_capacity(512);

    c.bench_function("render_into", |b| {
        b.iter(|| {
            game.render_into(&mut out);
            black_box(out.len());
        })
    });
}

fn bench_term_view(c: &mut Criterion) {
    let game = playing();
    let commands = game.render();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("term_view_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&commands), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_frame_update,
    bench_step,
    bench_render,
    bench_term_view
);
criterion_main!(benches);
