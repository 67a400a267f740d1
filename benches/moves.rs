//! Micro-benchmarks for the move pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use twenty48_engine::{merge_row, Direction, GameRng, Grid, GridEngine};

fn bench_merge_row(c: &mut Criterion) {
    c.bench_function("merge_row dense", |b| {
        b.iter(|| merge_row(black_box([2, 2, 4, 4])))
    });

    c.bench_function("merge_row sparse", |b| {
        b.iter(|| merge_row(black_box([0, 2, 0, 4])))
    });
}

fn bench_move_tiles(c: &mut Criterion) {
    let mut engine = GridEngine::new(GameRng::new(42));
    engine.set_grid(Grid::from_rows([
        [2, 2, 4, 4],
        [8, 0, 8, 0],
        [2, 4, 2, 4],
        [16, 16, 16, 16],
    ]));

    c.bench_function("move_tiles all directions", |b| {
        b.iter_batched(
            || engine.clone(),
            |mut engine| {
                for direction in Direction::ALL {
                    black_box(engine.move_tiles(direction));
                }
                engine
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("random game to completion", |b| {
        b.iter(|| {
            let mut engine = GridEngine::new(GameRng::new(7));
            let mut dice = GameRng::new(13);
            while !engine.game_over() {
                let direction = *dice.choose(&Direction::ALL).unwrap();
                engine.apply_move(direction);
            }
            black_box(engine.score())
        })
    });
}

criterion_group!(benches, bench_merge_row, bench_move_tiles, bench_full_game);
criterion_main!(benches);
