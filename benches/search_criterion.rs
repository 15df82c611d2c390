use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use x_rudder::game_state::rudder_types::{GameState, Move};
use x_rudder::move_generation::move_generator::{MoveOrdering, OrderedMoveGenerator};
use x_rudder::search::alpha_beta::{alpha_beta_search, SearchConfig};
use x_rudder::search::board_scoring::{BoardScorer, NeighborhoodScorer, PatternScorer};

fn opened_position() -> GameState {
    let mut state = GameState::new_game();
    for mv in [
        Move::place(6, 5),
        Move::place(5, 4),
        Move::place(7, 6),
        Move::place(5, 6),
        Move::place(7, 4),
        Move::place(6, 3),
        Move::shift(7, 6, 8, 6),
    ] {
        state.make_move(&mv).expect("benchmark setup move should be legal");
    }
    state
}

fn bench_search(c: &mut Criterion) {
    let position = opened_position();

    let mut group = c.benchmark_group("alpha_beta");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    let orderings = [
        ("raster", MoveOrdering::Raster),
        ("kernel", MoveOrdering::Kernel { shuffle: false }),
        ("kernel_shuffled", MoveOrdering::Kernel { shuffle: true }),
    ];

    for depth in 1..=3u8 {
        for (label, ordering) in orderings {
            let config = SearchConfig {
                max_depth: depth,
                movetime_ms: None,
            };
            let mut workspace = position.clone();
            let mut generator = OrderedMoveGenerator::new(ordering, Some(42));
            let scorer = PatternScorer::balanced();

            group.bench_with_input(
                BenchmarkId::new(label, format!("d{depth}")),
                &config,
                |b, config| {
                    b.iter(|| {
                        let result = alpha_beta_search(
                            black_box(&mut workspace),
                            &mut generator,
                            &scorer,
                            *config,
                        );
                        black_box(result.best_move)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_scorers(c: &mut Criterion) {
    let position = opened_position();
    let mut group = c.benchmark_group("scorers");

    let pattern = PatternScorer::balanced();
    group.bench_function("neighborhood", |b| {
        b.iter(|| NeighborhoodScorer.score(black_box(&position)))
    });
    group.bench_function("pattern_balanced", |b| {
        b.iter(|| pattern.score(black_box(&position)))
    });

    group.finish();
}

criterion_group!(search_benches, bench_search, bench_scorers);
criterion_main!(search_benches);
