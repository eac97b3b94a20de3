use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use ssid::{DEFAULT_EPOCH, Ssid, SsidConfig, SsidGenerator, TimeSource};
use std::{sync::Arc, thread::scope, time::Instant};

struct FixedMockTime {
    millis: u64,
}

impl TimeSource for FixedMockTime {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded). Stays under the sequence wrap.
const TOTAL_IDS: usize = 4096;

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("single");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("mock/elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();
            for _ in 0..iters {
                let time = FixedMockTime {
                    millis: DEFAULT_EPOCH.as_millis() as u64 + 1_000,
                };
                let generator = SsidGenerator::with_clock(&SsidConfig::default(), time).unwrap();
                for _ in 0..TOTAL_IDS {
                    black_box(generator.try_next_id().unwrap());
                }
            }
            start.elapsed()
        });
    });

    group.bench_function(format!("system/elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();
            for _ in 0..iters {
                let generator = SsidGenerator::new(&SsidConfig::default()).unwrap();
                for _ in 0..TOTAL_IDS {
                    black_box(generator.try_next_id().unwrap());
                }
            }
            start.elapsed()
        });
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for count in [1, 64, 4096, Ssid::SEQUENCE_MASK as usize] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("elems/{count}"), |b| {
            b.iter_custom(|iters| {
                let start = Instant::now();
                for _ in 0..iters {
                    let generator = SsidGenerator::new(&SsidConfig::default()).unwrap();
                    black_box(generator.try_next_ids(count).unwrap());
                }
                start.elapsed()
            });
        });
    }

    group.finish();
}

fn bench_threaded(c: &mut Criterion) {
    let mut group = c.benchmark_group("threaded");

    for threads in [2, 4, 8] {
        group.throughput(Throughput::Elements((TOTAL_IDS * threads) as u64));
        group.bench_function(format!("threads/{threads}/elems/{TOTAL_IDS}"), |b| {
            b.iter_custom(|iters| {
                let start = Instant::now();
                for _ in 0..iters {
                    let generator = Arc::new(SsidGenerator::new(&SsidConfig::default()).unwrap());
                    scope(|s| {
                        for _ in 0..threads {
                            let generator = Arc::clone(&generator);
                            s.spawn(move || {
                                for _ in 0..TOTAL_IDS {
                                    black_box(generator.try_next_id().unwrap());
                                }
                            });
                        }
                    });
                }
                start.elapsed()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single, bench_batch, bench_threaded);
criterion_main!(benches);
