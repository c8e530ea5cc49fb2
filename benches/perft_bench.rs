use criterion::{criterion_group, criterion_main, Criterion, black_box};
use oxo::perft::{count_games, perft};
use oxo::{Board, Side};

fn bench_perft(c: &mut Criterion) {
    c.bench_function("perft_depth_6_empty", |ben| {
        ben.iter(|| {
            let mut b = Board::empty();
            black_box(perft(&mut b, Side::X, black_box(6)))
        })
    });
    c.bench_function("count_games_empty", |ben| {
        ben.iter(|| {
            let mut b = Board::empty();
            black_box(count_games(&mut b, Side::X))
        })
    });
}

criterion_group!(benches, bench_perft);
criterion_main!(benches);
