use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use othello::board::Tile;
use othello::rules::generate_moves;
use othello::search::{KeepFirst, SearchContext, Searcher};
use othello::state::GameState;

/// Leaf counts from the start position (no passes occur this shallow).
const PERFT_NODES: &[u64] = &[4, 12, 56, 244, 1396];

fn perft(state: &GameState, side: Tile, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    state
        .children(side)
        .iter()
        .map(|child| perft(child, side.opponent(), depth - 1))
        .sum()
}

/// Position a few plies in, reached by always taking the first legal move.
fn opening_line(plies: usize) -> (GameState, Tile) {
    let mut state = GameState::new();
    let mut side = Tile::Black;
    for _ in 0..plies {
        let Some(pos) = state.legal_moves.iter_ones().next() else {
            break;
        };
        state = state.child(pos, side);
        side = side.opponent();
    }
    (state, side)
}

fn bench_movegen(c: &mut Criterion) {
    let (state, side) = opening_line(12);
    c.bench_function("generate_moves_midgame", |b| {
        b.iter(|| black_box(generate_moves(black_box(&state.board), side)))
    });
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_start");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    let root = GameState::new();
    for (depth_idx, expected) in PERFT_NODES.iter().enumerate() {
        let depth = (depth_idx + 1) as u8;

        // Correctness guard before benchmarking.
        assert_eq!(perft(&root, Tile::Black, depth), *expected, "perft depth {depth}");

        group.throughput(Throughput::Elements(*expected));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(perft(black_box(&root), Tile::Black, depth)));
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("alphabeta");
    group.sample_size(10);

    let (state, side) = opening_line(8);
    for depth in [4u8, 6] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            let ctx = SearchContext::new(depth, side);
            b.iter(|| {
                let result = Searcher::new(KeepFirst).search(black_box(&state), &ctx);
                black_box(result.stats.nodes)
            });
        });
    }

    group.finish();
}

criterion_group!(search_benches, bench_movegen, bench_perft, bench_search);
criterion_main!(search_benches);
