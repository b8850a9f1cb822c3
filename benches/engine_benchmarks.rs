//! Benchmarks for engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rotachess::board::attack_tables::{diagonal_attacks_by_walk, straight_attacks_by_walk};
use rotachess::board::{Color, Piece, Position, SearchContext};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn kiwipete() -> Position {
    Position::from_fen(KIWIPETE).expect("valid FEN")
}

fn bench_sliders(c: &mut Criterion) {
    rotachess::board::attack_tables::init();
    let mut group = c.benchmark_group("sliders");
    let pos = kiwipete();
    let occupied = pos.occupied();

    group.bench_function("rotated_lookup", |b| {
        b.iter(|| {
            (0..64).fold(0u64, |acc, sq| {
                acc ^ pos.attacks_of(Piece::Queen, Color::White, black_box(sq))
            })
        })
    });
    group.bench_function("ray_walk", |b| {
        b.iter(|| {
            (0..64).fold(0u64, |acc, sq| {
                acc ^ straight_attacks_by_walk(black_box(occupied), sq)
                    ^ diagonal_attacks_by_walk(black_box(occupied), sq)
            })
        })
    });

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Position::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.generate_moves()))
    });

    let busy = kiwipete();
    group.bench_function("kiwipete", |b| b.iter(|| black_box(busy.generate_moves())));
    group.bench_function("kiwipete_captures", |b| {
        b.iter(|| black_box(busy.generate_captures()))
    });
    group.bench_function("kiwipete_play_all", |b| {
        let moves = busy.generate_moves();
        b.iter(|| moves.iter().fold(0u64, |acc, &mv| acc ^ busy.play(mv).hash()))
    });

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let startpos = Position::new();
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let busy = kiwipete();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| busy.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let busy = kiwipete();
    c.bench_function("evaluate_kiwipete", |b| b.iter(|| black_box(&busy).evaluate(0)));
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for depth in [3, 4, 5] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut ctx = SearchContext::default();
                black_box(ctx.search(&Position::new(), depth, None))
            })
        });
    }

    let busy = kiwipete();
    group.bench_function("kiwipete_depth_4", |b| {
        b.iter(|| {
            let mut ctx = SearchContext::default();
            black_box(ctx.search(&busy, 4, None))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_sliders,
    bench_movegen,
    bench_perft,
    bench_eval,
    bench_search
);
criterion_main!(benches);
