//! SignalRegistry 性能基准测试

use std::hint::black_box;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use signal_registry::registry::{SignalRegistry, TimingOptions, TimingUpdate};

fn prefilled(count: usize) -> SignalRegistry {
    let registry = SignalRegistry::new();
    for i in 0..count {
        registry
            .create(format!("TL{}", i), TimingOptions::default())
            .unwrap();
    }
    registry
}

// ============== CRUD 基准测试 ==============

fn bench_create(c: &mut Criterion) {
    let registry = SignalRegistry::new();
    let counter = AtomicU64::new(0);

    c.bench_function("registry/create", |b| {
        b.iter(|| {
            let i = counter.fetch_add(1, Ordering::Relaxed);
            registry
                .create(format!("create_{}", i), TimingOptions::default())
                .unwrap();
        });
    });
}

fn bench_read(c: &mut Criterion) {
    let registry = prefilled(10_000);

    let mut group = c.benchmark_group("registry/read");
    group.bench_function("hit", |b| {
        b.iter(|| assert!(registry.read(black_box("TL5000")).is_some()));
    });
    group.bench_function("miss", |b| {
        b.iter(|| assert!(registry.read(black_box("nonexistent")).is_none()));
    });
    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let registry = prefilled(1_000);

    c.bench_function("registry/update_green", |b| {
        b.iter(|| {
            registry
                .update("TL500", TimingUpdate::default().green(black_box(40)))
                .unwrap();
        });
    });
}

// ============== 优化与分析基准测试 ==============

fn bench_optimize_and_summarize(c: &mut Criterion) {
    let registry = prefilled(1_000);

    let mut group = c.benchmark_group("registry/analysis");
    group.bench_function("optimize", |b| {
        b.iter(|| {
            // 先重置，避免数值持续增长
            registry
                .update("TL1", TimingUpdate::default().green(30).red(30))
                .unwrap();
            registry.optimize(black_box("TL1")).unwrap()
        });
    });
    group.bench_function("summarize", |b| {
        b.iter(|| registry.summarize(black_box("TL1")).unwrap());
    });
    group.finish();
}

fn bench_concurrent_read(c: &mut Criterion) {
    let registry = Arc::new(prefilled(1_000));
    let mut group = c.benchmark_group("registry/concurrent_read");

    for num_threads in [2, 4, 8] {
        group.throughput(Throughput::Elements(1000));
        group.bench_with_input(
            BenchmarkId::new("threads", num_threads),
            &num_threads,
            |b, &num_threads| {
                b.iter(|| {
                    let handles: Vec<_> = (0..num_threads)
                        .map(|t| {
                            let registry = Arc::clone(&registry);
                            thread::spawn(move || {
                                for i in 0..(1000 / num_threads) {
                                    let id = format!("TL{}", t * (1000 / num_threads) + i);
                                    black_box(registry.read(&id));
                                }
                            })
                        })
                        .collect();
                    for handle in handles {
                        handle.join().unwrap();
                    }
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_create,
    bench_read,
    bench_update,
    bench_optimize_and_summarize,
    bench_concurrent_read,
);
criterion_main!(benches);
