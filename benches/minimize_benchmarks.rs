//! Benchmarks for truth-table minimization and simulation ticks
//!
//! Tables come in three shapes: counters (structured, few terms), parity
//! (worst case, one term per minterm) and seeded random functions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pal_logic::{util::bit_range, Chip, Simulation, TruthTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_table(bits: usize, seed: u64) -> TruthTable {
    let mut rng = StdRng::seed_from_u64(seed);
    let values: Vec<bool> = (0..1usize << bits).map(|_| rng.gen_bool(0.5)).collect();
    TruthTable::create("random", bits, |i| values[i as usize]).unwrap()
}

fn bench_minimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize");

    for bits in [8usize, 12, 16] {
        let tables = [
            (
                "counter_msb",
                TruthTable::create_sampled("Q", bits, |i| i.wrapping_add(1), bits as u32 - 1)
                    .unwrap(),
            ),
            (
                "parity",
                TruthTable::create("P", bits, |i| i.count_ones() % 2 == 1).unwrap(),
            ),
            ("random", random_table(bits, 0x5eed)),
        ];

        group.throughput(Throughput::Elements(1 << bits));
        for (shape, table) in &tables {
            group.bench_with_input(BenchmarkId::new(*shape, bits), table, |b, table| {
                b.iter(|| black_box(table).optimise().unwrap())
            });
        }
    }

    group.finish();
}

fn bench_simulation(c: &mut Criterion) {
    let counter = Chip::from_operator("ctr", &["EN"], &bit_range("Q", 0, 8), |v| {
        let count = v & 0xff;
        if v & 0x100 != 0 {
            (count + 1) & 0xff
        } else {
            count
        }
    })
    .unwrap();
    let simulation = Simulation::new(vec![counter]).unwrap();

    c.bench_function("simulation/256_ticks", |b| {
        b.iter(|| {
            let mut state = simulation.zero_state();
            for _ in 0..256 {
                state = state.with("EN", true).unwrap().next();
            }
            black_box(state.number("Q0", 8).unwrap())
        })
    });
}

criterion_group!(benches, bench_minimize, bench_simulation);
criterion_main!(benches);
