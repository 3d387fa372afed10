use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use flakeid::{
    CompactGenerator, DEFAULT_EPOCH, FlakeGenerator, FlakeId, RandSource, StandardGenerator,
    TimeSource,
};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};

struct FixedMockTime {
    millis: i64,
}

impl TimeSource for FixedMockTime {
    fn unix_millis(&self) -> i64 {
        self.millis
    }
}

struct FixedMockRand;

impl RandSource<u32> for FixedMockRand {
    fn rand(&self) -> u32 {
        0
    }
}

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_IDS: usize = 4096;

/// Benchmarks a single thread minting IDs back to back.
fn bench_generator<ID, G>(c: &mut Criterion, group_name: &str, generator_factory: impl Fn() -> G)
where
    ID: FlakeId,
    G: FlakeGenerator<ID>,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();
            for _ in 0..iters {
                let generator = generator_factory();
                for _ in 0..TOTAL_IDS {
                    black_box(generator.get());
                }
            }
            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks several threads contending on one shared generator.
fn bench_generator_threaded<ID, G>(
    c: &mut Criterion,
    group_name: &str,
    generator_factory: impl Fn() -> G,
) where
    ID: FlakeId,
    G: FlakeGenerator<ID> + Send + Sync,
{
    let mut group = c.benchmark_group(group_name);

    for threads in [2, 4, 8] {
        group.throughput(Throughput::Elements((threads * TOTAL_IDS) as u64));
        group.bench_function(format!("threads/{threads}/elems/{TOTAL_IDS}"), |b| {
            b.iter_custom(|iters| {
                let mut total = core::time::Duration::ZERO;
                for _ in 0..iters {
                    let generator = generator_factory();
                    let barrier = Arc::new(Barrier::new(threads + 1));
                    let start = scope(|s| {
                        for _ in 0..threads {
                            let barrier = Arc::clone(&barrier);
                            let generator = &generator;
                            s.spawn(move || {
                                barrier.wait();
                                for _ in 0..TOTAL_IDS {
                                    black_box(generator.get());
                                }
                            });
                        }
                        barrier.wait();
                        Instant::now()
                    });
                    total += start.elapsed();
                }
                total
            });
        });
    }

    group.finish();
}

fn bench_standard(c: &mut Criterion) {
    bench_generator(c, "standard/mock", || {
        StandardGenerator::with_sources(
            DEFAULT_EPOCH,
            FixedMockTime { millis: 1_700_000_000_000 },
            FixedMockRand,
        )
    });
    bench_generator(c, "standard/system", || StandardGenerator::new(DEFAULT_EPOCH));
    bench_generator_threaded(c, "standard/system/threaded", || {
        StandardGenerator::new(DEFAULT_EPOCH)
    });
}

fn bench_compact(c: &mut Criterion) {
    bench_generator(c, "compact/mock", || {
        CompactGenerator::from_components(DEFAULT_EPOCH, 0, FixedMockTime { millis: 1_700_000_000_000 })
    });
    bench_generator(c, "compact/system", || CompactGenerator::new(DEFAULT_EPOCH));
    bench_generator_threaded(c, "compact/system/threaded", || {
        CompactGenerator::new(DEFAULT_EPOCH)
    });
}

fn bench_text(c: &mut Criterion) {
    let generator = StandardGenerator::new(DEFAULT_EPOCH);
    let text = generator.get().to_string();

    let mut group = c.benchmark_group("text");
    group.bench_function("standard/to_string", |b| {
        b.iter(|| black_box(generator.get().to_string()));
    });
    group.bench_function("standard/parse_str", |b| {
        b.iter(|| black_box(generator.parse_str(black_box(&text))));
    });
    group.finish();
}

criterion_group!(benches, bench_standard, bench_compact, bench_text);
criterion_main!(benches);
