use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use spritegen_core::pack_layout;

fn generate_images(count: usize, min_size: u32, max_size: u32) -> Vec<(String, u32, u32)> {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| {
            let w = rng.gen_range(min_size..=max_size);
            let h = rng.gen_range(min_size..=max_size);
            (format!("img_{}", i), w, h)
        })
        .collect()
}

fn bench_shelf_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("shelf_pack");

    for count in [50, 200, 1000] {
        let images = generate_images(count, 8, 128);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("pack_layout", count),
            &images,
            |b, images| {
                b.iter(|| black_box(pack_layout(images.clone(), 2).expect("pack")));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_shelf_pack);
criterion_main!(benches);
