use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use oxo_engine::game_state::board::Board;
use oxo_engine::search::negamax::{search_best_move, search_best_move_uncached};
use oxo_engine::search::transposition_table::TranspositionTable;

fn bench_empty_board_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("empty_board_search");

    group.bench_function("memoized", |b| {
        let mut tt = TranspositionTable::new();
        b.iter(|| {
            let mut board = Board::new_game();
            let result = search_best_move(&mut board, &mut tt).expect("search should run");
            black_box(result)
        })
    });

    group.bench_function("uncached", |b| {
        b.iter(|| {
            let mut board = Board::new_game();
            let result = search_best_move_uncached(&mut board).expect("search should run");
            black_box(result)
        })
    });

    group.finish();
}

fn bench_midgame_search(c: &mut Criterion) {
    c.bench_function("midgame_memoized", |b| {
        let mut tt = TranspositionTable::new();
        b.iter(|| {
            let mut board = Board::new_game();
            for cell in [0u8, 2, 8] {
                board.apply_move(cell).expect("cell should be empty");
            }
            let result = search_best_move(&mut board, &mut tt).expect("search should run");
            black_box(result)
        })
    });
}

criterion_group!(benches, bench_empty_board_search, bench_midgame_search);
criterion_main!(benches);
