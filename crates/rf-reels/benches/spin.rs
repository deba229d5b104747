//! Reel Engine Benchmarks
//!
//! Spin, evaluation and full-round throughput for a few grid sizes.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rf_reels::{GridSpec, Line, MachineConfig, ReelEngine, SlotMachine, Symbol, SymbolTable, Wager};

const GRIDS: &[(usize, usize)] = &[(3, 3), (5, 3), (5, 5)];

fn wide_table() -> SymbolTable {
    let glyphs = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];
    SymbolTable::new(
        glyphs.iter().map(|&g| (Symbol::new(g), 8)),
        glyphs.iter().enumerate().map(|(i, &g)| (Symbol::new(g), i as u32 + 1)),
    )
    .expect("valid table")
}

fn bench_spin(c: &mut Criterion) {
    let mut group = c.benchmark_group("spin");
    let table = wide_table();

    for &(reels, rows) in GRIDS {
        let spec = GridSpec::new(reels, rows);
        let engine = ReelEngine::new(spec, table.clone()).expect("grid fits");
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        group.throughput(Throughput::Elements((reels * rows) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{reels}x{rows}")),
            &spec,
            |b, _| b.iter(|| black_box(engine.spin(&mut rng).expect("grid fits"))),
        );
    }

    group.finish();
}

fn bench_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("round");

    for &(reels, rows) in GRIDS {
        let machine = SlotMachine::new(MachineConfig {
            grid: GridSpec::new(reels, rows),
            symbols: wide_table(),
            ..MachineConfig::classic()
        })
        .expect("valid machine");
        let wager = Wager::new(Line::all(rows), "100".parse().expect("bet")).expect("wager");
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        group.bench_function(BenchmarkId::from_parameter(format!("{reels}x{rows}")), |b| {
            b.iter(|| black_box(machine.play(&wager, &mut rng).expect("round")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_spin, bench_round);
criterion_main!(benches);
