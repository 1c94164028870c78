use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

fn placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("place_mines");
    for (name, config) in [
        ("beginner", GameConfig::BEGINNER),
        ("intermediate", GameConfig::INTERMEDIATE),
        ("expert", GameConfig::EXPERT),
        ("dense_30x50", GameConfig::custom(30, 50, 1400)),
    ] {
        let grid = Grid::new(config.size()).unwrap();
        let safe = (config.rows() / 2, config.cols() / 2);
        let mut seed = 0;
        group.bench_function(name, |b| {
            b.iter(|| {
                seed += 1;
                black_box(grid.place_mines(config.mines(), safe, seed).unwrap())
            })
        });
    }
    group.finish();
}

fn flood_fill(c: &mut Criterion) {
    // single corner mine, the opposite corner opens almost the whole board
    let grid = Grid::from_mine_coords((30, 50), &[(0, 0)]).unwrap();
    c.bench_function("reveal_flood_30x50", |b| {
        b.iter_batched(
            || grid.clone(),
            |grid| black_box(grid.reveal((29, 49)).unwrap()),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, placement, flood_fill);
criterion_main!(benches);
