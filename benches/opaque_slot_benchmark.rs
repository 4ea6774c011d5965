use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use inlay::OpaqueSlot;
use std::mem::{align_of, size_of};

type Payload = [u64; 4];
type PayloadSlot = OpaqueSlot<Payload, { size_of::<Payload>() }, { align_of::<Payload>() }>;

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("plain value", |b| {
        b.iter(|| {
            let v: Payload = black_box([1, 2, 3, 4]);
            black_box(v);
        })
    });

    group.bench_function("Box::new", |b| {
        b.iter(|| {
            black_box(Box::new(black_box([1u64, 2, 3, 4])));
        })
    });

    group.bench_function("OpaqueSlot::new", |b| {
        b.iter(|| {
            black_box(PayloadSlot::new(black_box([1, 2, 3, 4])));
        })
    });

    group.finish();
}

fn bench_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("access");

    let plain: Payload = [1, 2, 3, 4];
    let boxed = Box::new(plain);
    let slot = PayloadSlot::new(plain);

    group.bench_function("plain value", |b| {
        b.iter(|| black_box(black_box(&plain)[2]))
    });

    group.bench_function("Box deref", |b| {
        b.iter(|| black_box(black_box(&boxed)[2]))
    });

    group.bench_function("OpaqueSlot deref", |b| {
        b.iter(|| black_box(black_box(&slot)[2]))
    });

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    group.bench_function("Box clone", |b| {
        b.iter_batched(
            || Box::new([1u64, 2, 3, 4]),
            |boxed| black_box(boxed.clone()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("OpaqueSlot clone", |b| {
        b.iter_batched(
            || PayloadSlot::new([1, 2, 3, 4]),
            |slot| black_box(slot.clone()),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_construction, bench_access, bench_clone);
criterion_main!(benches);
