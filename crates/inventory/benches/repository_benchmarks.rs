use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use warehouse_core::ItemId;
use warehouse_inventory::{ElectronicItem, InventoryRepository, SharedInventoryRepository};

fn item(id: i64) -> ElectronicItem {
    ElectronicItem::try_new(id, "Laptop", 10, "Dell", 24).unwrap()
}

fn filled(n: i64) -> InventoryRepository<ElectronicItem> {
    let mut repo = InventoryRepository::new();
    for id in 0..n {
        repo.add(item(id)).unwrap();
    }
    repo
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    for n in [100i64, 1_000, 10_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(filled(n)));
        });
    }
    group.finish();
}

fn bench_update_quantity(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_quantity");
    for n in [100i64, 10_000] {
        let mut repo = filled(n);
        group.bench_with_input(BenchmarkId::new("plain", n), &n, |b, &n| {
            let mut q = 0i64;
            b.iter(|| {
                q += 1;
                repo.update_quantity(ItemId::new(q % n), black_box(q)).unwrap();
            });
        });

        let shared = SharedInventoryRepository::from_repository(filled(n));
        group.bench_with_input(BenchmarkId::new("shared", n), &n, |b, &n| {
            let mut q = 0i64;
            b.iter(|| {
                q += 1;
                shared.adjust_quantity(ItemId::new(q % n), black_box(1)).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let repo = filled(10_000);
    c.bench_function("all/10000", |b| b.iter(|| black_box(repo.all())));
}

criterion_group!(benches, bench_add, bench_update_quantity, bench_snapshot);
criterion_main!(benches);
