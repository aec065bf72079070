use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::sync::{Arc, Barrier};
use std::thread;

use sundry::refcount::AtomicRef;

const OPS_PER_THREAD: usize = 10_000;

// Balanced acquire/release pairs from several threads on one counter
fn contended_benchmark(c: &mut Criterion, threads: usize) {
    let mut group = c.benchmark_group(format!("refcount_{}_threads", threads));
    group.throughput(Throughput::Elements((threads * OPS_PER_THREAD) as u64));

    for (name, conditional) in [("add_sub", false), ("add_unless_zero_sub", true)] {
        group.bench_function(BenchmarkId::new(name, OPS_PER_THREAD), |b| {
            b.iter_with_setup(
                || (Arc::new(AtomicRef::new()), Arc::new(Barrier::new(threads))),
                |(refs, barrier)| {
                    thread::scope(|s| {
                        for _ in 0..threads {
                            let refs = Arc::clone(&refs);
                            let barrier = Arc::clone(&barrier);
                            s.spawn(move || {
                                barrier.wait();
                                for _ in 0..OPS_PER_THREAD {
                                    if conditional {
                                        black_box(refs.inc_unless_zero());
                                    } else {
                                        refs.inc();
                                    }
                                    refs.dec_unreachable();
                                }
                            });
                        }
                    });
                    assert_eq!(refs.get(), AtomicRef::INIT);
                },
            );
        });
    }

    group.finish();
}

fn single_thread_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("refcount_single_thread");

    group.bench_function("inc_dec", |b| {
        let refs = AtomicRef::new();
        b.iter(|| {
            black_box(refs.inc());
            refs.dec_unreachable();
        });
    });

    group.bench_function("create_release", |b| {
        b.iter(|| {
            let refs = black_box(AtomicRef::new());
            black_box(refs.release(1).is_some())
        });
    });

    group.finish();
}

fn refcount_benchmarks(c: &mut Criterion) {
    single_thread_benchmark(c);
    for threads in [2, 4, 8] {
        contended_benchmark(c, threads);
    }
}

criterion_group!(benches, refcount_benchmarks);
criterion_main!(benches);
