use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hexgrid_h3::*;

fn sf_res9() -> H3Index {
  geo_to_h3(&GeoCoord::from_degrees(37.779265, -122.419277), 9)
}

fn bench_k_ring(c: &mut Criterion) {
  let origin = sf_res9();
  let mut pentagons = [H3_NULL; 12];
  let _ = get_pentagon_indexes(9, &mut pentagons);

  let mut group = c.benchmark_group("k_ring");
  for k in [1, 5, 20] {
    let mut out = vec![H3_NULL; max_kring_size(k) as usize];
    group.bench_with_input(BenchmarkId::new("hexagon", k), &k, |b, &k| {
      b.iter(|| k_ring(black_box(origin), k, &mut out));
    });
    group.bench_with_input(BenchmarkId::new("pentagon", k), &k, |b, &k| {
      b.iter(|| k_ring(black_box(pentagons[0]), k, &mut out));
    });
  }
  group.finish();
}

fn bench_hex_range(c: &mut Criterion) {
  let origin = sf_res9();
  let mut group = c.benchmark_group("hex_range");
  for k in [1, 5, 20] {
    let mut out = vec![H3_NULL; max_kring_size(k) as usize];
    group.bench_with_input(BenchmarkId::new("range", k), &k, |b, &k| {
      b.iter(|| hex_range(black_box(origin), k, &mut out));
    });
    let mut ring = vec![H3_NULL; 6 * k as usize];
    group.bench_with_input(BenchmarkId::new("ring", k), &k, |b, &k| {
      b.iter(|| hex_ring(black_box(origin), k, &mut ring));
    });
  }
  group.finish();
}

fn bench_compact(c: &mut Criterion) {
  let mut disk = vec![H3_NULL; max_kring_size(20) as usize];
  let _ = k_ring(sf_res9(), 20, &mut disk);
  let mut compacted = vec![H3_NULL; disk.len()];
  let _ = compact(&disk, &mut compacted);
  let compacted: Vec<H3Index> = compacted.into_iter().filter(|h| !h.is_null()).collect();
  let mut restored = vec![H3_NULL; disk.len()];

  c.benchmark_group("compaction")
    .bench_function("compact_k20", |b| {
      let mut out = vec![H3_NULL; disk.len()];
      b.iter(|| compact(black_box(&disk), &mut out));
    })
    .bench_function("uncompact_k20", |b| b.iter(|| uncompact(black_box(&compacted), 9, &mut restored)));
}

criterion_group!(traversal_benches, bench_k_ring, bench_hex_range, bench_compact);
criterion_main!(traversal_benches);
