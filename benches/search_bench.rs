use criterion::{criterion_group, criterion_main, Criterion, black_box};
use oxo::{Board, SearchParams, Searcher, Side};

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_empty_board");
    let cases = [("pruned_t1", true, 1usize), ("pruned_t4", true, 4), ("minimax_t1", false, 1)];
    for (name, pruning, threads) in cases {
        group.bench_function(name, |ben| {
            ben.iter(|| {
                let mut b = Board::empty();
                let mut s = Searcher::new(SearchParams { pruning, threads });
                let r = s.search(black_box(&mut b), Side::X);
                black_box(r.nodes)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
