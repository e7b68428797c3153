use bitchess::game_repr::Position;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft_start(c: &mut Criterion) {
    let mut pos = Position::default();
    c.bench_function("perft start depth 4", |b| b.iter(|| black_box(pos.perft(4))));
}

fn bench_perft_kiwipete(c: &mut Criterion) {
    let mut pos = Position::from_fen(KIWIPETE).expect("valid FEN");
    c.bench_function("perft kiwipete depth 3", |b| b.iter(|| black_box(pos.perft(3))));
}

fn bench_perft_parallel(c: &mut Criterion) {
    let pos = Position::default();
    c.bench_function("perft_parallel start depth 5", |b| {
        b.iter(|| black_box(pos.perft_parallel(5)))
    });
}

criterion_group!(benches, bench_perft_start, bench_perft_kiwipete, bench_perft_parallel);
criterion_main!(benches);
