use criterion::{black_box, criterion_group, criterion_main, Criterion};
use minesweeper_engine::{reveal, Board, Position};

fn bench_generation(c: &mut Criterion) {
    c.bench_function("generate 20x20, 50 mines (rejection path)", |b| {
        b.iter(|| Board::new(black_box(20), black_box(50)).unwrap())
    });

    c.bench_function("generate 20x20, 300 mines (sampled path)", |b| {
        b.iter(|| Board::new(black_box(20), black_box(300)).unwrap())
    });
}

fn bench_reveal(c: &mut Criterion) {
    // A mine-free board forces the cascade to sweep the whole grid
    let open = Board::with_mines(50, &[]).unwrap();
    c.bench_function("full-board cascade on mine-free 50x50", |b| {
        b.iter(|| reveal(black_box(&open), Position::new(0, 0)).unwrap())
    });

    let dense_mines: Vec<Position> = Board::with_mines(20, &[])
        .unwrap()
        .iter_positions()
        .filter(|pos| *pos != Position::new(0, 0))
        .collect();
    let dense = Board::with_mines(20, &dense_mines).unwrap();
    c.bench_function("loss reveal on 20x20 with 399 mines", |b| {
        b.iter(|| reveal(black_box(&dense), Position::new(10, 10)).unwrap())
    });
}

criterion_group!(benches, bench_generation, bench_reveal);
criterion_main!(benches);
