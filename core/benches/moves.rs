use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use twenty48_core::{Board, Direction, GameConfig, MoveOutcome, PlayEngine};

/// Boards of increasing density, replayed from a fixed seed.
fn corpus() -> Vec<Board> {
    let mut engine = PlayEngine::from_seed(GameConfig::default(), 42);
    let mut boards = vec![engine.board().clone()];

    for direction in Direction::ALL.into_iter().cycle().take(120) {
        if engine.play(direction) == MoveOutcome::GameOver {
            break;
        }
        boards.push(engine.board().clone());
    }
    boards
}

fn bench_shift(c: &mut Criterion) {
    let boards = corpus();

    for direction in Direction::ALL {
        c.bench_function(&format!("shift/{direction}"), |b| {
            b.iter(|| {
                let mut acc = 0;
                for board in &boards {
                    acc ^= black_box(board).shift(direction).1;
                }
                black_box(acc)
            })
        });
    }
}

fn bench_terminal(c: &mut Criterion) {
    let boards = corpus();

    c.bench_function("is_terminal", |b| {
        b.iter(|| boards.iter().filter(|board| black_box(*board).is_terminal()).count())
    });
}

fn bench_play(c: &mut Criterion) {
    c.bench_function("play/full_game", |b| {
        b.iter_batched(
            || PlayEngine::from_seed(GameConfig::default(), 7),
            |mut engine| {
                for direction in Direction::ALL.into_iter().cycle() {
                    if engine.play(direction) == MoveOutcome::GameOver {
                        break;
                    }
                }
                black_box(engine.score())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_shift, bench_terminal, bench_play);
criterion_main!(benches);
