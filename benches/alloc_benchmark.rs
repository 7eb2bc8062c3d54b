/*!
 * Allocator Benchmarks
 *
 * Compare allocate/deallocate churn and coalescing cost across the three
 * placement policies
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mmu_sim::{MemoryManager, PlacementPolicy};

const PARTITION: usize = 1 << 20;

fn bench_alloc_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("alloc_churn");

    for policy in [
        PlacementPolicy::FirstAvailable,
        PlacementPolicy::BestFit,
        PlacementPolicy::WorstFit,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(policy),
            &policy,
            |b, &policy| {
                b.iter(|| {
                    let mut manager = MemoryManager::new(PARTITION, policy);
                    for pid in 1..=128u32 {
                        let _ = manager.allocate(black_box(1024), pid);
                    }
                    // Free every other block to fragment the registry.
                    for pid in (1..=128u32).step_by(2) {
                        let _ = manager.deallocate(pid);
                    }
                    for pid in 129..=160u32 {
                        let _ = manager.allocate(black_box(512), pid);
                    }
                    manager
                });
            },
        );
    }

    group.finish();
}

fn bench_coalesce(c: &mut Criterion) {
    c.bench_function("coalesce_fragmented", |b| {
        b.iter_with_setup(
            || {
                let mut manager =
                    MemoryManager::new(PARTITION, PlacementPolicy::FirstAvailable);
                for pid in 1..=256u32 {
                    let _ = manager.allocate(2048, pid);
                }
                for pid in 1..=256u32 {
                    let _ = manager.deallocate(pid);
                }
                manager
            },
            |mut manager| {
                manager.coalesce();
                manager
            },
        );
    });
}

criterion_group!(benches, bench_alloc_churn, bench_coalesce);
criterion_main!(benches);
