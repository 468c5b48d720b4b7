//! Benchmarks for the key-value cache.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kv_cache::{Cache, CacheConfig, MAX_CACHED};

/// Benchmark single-threaded get/put operations at the default capacity.
fn bench_single_threaded(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_threaded");

    let cache = Cache::default();

    // Fill to capacity
    for i in 0..MAX_CACHED {
        cache.put(format!("key_{}", i), format!("value_{}", i));
    }

    group.bench_function("get_existing", |b| {
        let mut i = 0;
        b.iter(|| {
            let key = format!("key_{}", i % MAX_CACHED);
            black_box(cache.get(&key));
            i += 1;
        });
    });

    group.bench_function("get_missing", |b| {
        let mut i = 0;
        b.iter(|| {
            let key = format!("missing_{}", i);
            black_box(cache.get(&key));
            i += 1;
        });
    });

    group.bench_function("put_existing", |b| {
        let mut i = 0;
        b.iter(|| {
            let key = format!("key_{}", i % MAX_CACHED);
            cache.put(key, "updated_value");
            i += 1;
        });
    });

    group.finish();
}

/// Benchmark the linear oldest-write scan as capacity grows.
fn bench_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("eviction");

    for capacity in [16, MAX_CACHED, 4096].iter() {
        let cache = Cache::new(CacheConfig::new().max_capacity(*capacity).build());
        for i in 0..*capacity {
            cache.put(format!("key_{}", i), "value");
        }

        group.bench_with_input(
            BenchmarkId::new("put_with_eviction", capacity),
            capacity,
            |b, &capacity| {
                let mut i = capacity;
                b.iter(|| {
                    cache.put(format!("key_{}", i), "value");
                    i += 1;
                });
            },
        );
    }

    group.finish();
}

/// Benchmark concurrent operations contending on the single lock.
fn bench_concurrent(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent");

    for num_threads in [2, 4, 8].iter() {
        let cache = Cache::default();

        group.throughput(Throughput::Elements(1000));
        group.bench_with_input(
            BenchmarkId::new("mixed_ops", num_threads),
            num_threads,
            |b, &num_threads| {
                b.iter(|| {
                    let handles: Vec<_> = (0..num_threads)
                        .map(|t| {
                            let cache = cache.clone();
                            std::thread::spawn(move || {
                                for i in 0..1000 {
                                    let key = format!("key_{}", (t * 1000 + i) % 512);
                                    match i % 5 {
                                        0 => cache.put(key, "value"),
                                        1 => {
                                            cache.delete(&key);
                                        }
                                        _ => {
                                            black_box(cache.get(&key));
                                        }
                                    }
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

criterion_group!(benches, bench_single_threaded, bench_eviction, bench_concurrent);
criterion_main!(benches);
