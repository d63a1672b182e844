use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexgrid_h3::*;

fn sf() -> GeoCoord {
  GeoCoord::from_degrees(37.779265, -122.419277)
}

fn sf_res5() -> H3Index {
  H3Index::from_raw(0x85283083fffffff)
}

fn sf_res10() -> H3Index {
  H3Index::from_raw(0x8a2830828767fff)
}

fn pentagon_res5() -> H3Index {
  H3Index::from_raw(0x85080003fffffff)
}

fn bench_geo_to_h3(c: &mut Criterion) {
  let geo = sf();
  let mut group = c.benchmark_group("geo_to_h3");
  for res in [0, 5, 10, 15] {
    group.bench_with_input(format!("res_{res}"), &res, |b, &r| {
      b.iter(|| geo_to_h3(black_box(&geo), black_box(r)));
    });
  }
  group.finish();
}

fn bench_h3_to_geo(c: &mut Criterion) {
  c.benchmark_group("h3_to_geo")
    .bench_function("res_5", |b| b.iter(|| h3_to_geo(black_box(sf_res5()))))
    .bench_function("res_10", |b| b.iter(|| h3_to_geo(black_box(sf_res10()))));
}

fn bench_h3_to_geo_boundary(c: &mut Criterion) {
  c.benchmark_group("h3_to_geo_boundary")
    .bench_function("hex_res_5", |b| b.iter(|| h3_to_geo_boundary(black_box(sf_res5()), false)))
    .bench_function("hex_res_10", |b| b.iter(|| h3_to_geo_boundary(black_box(sf_res10()), false)))
    .bench_function("pent_res_5", |b| b.iter(|| h3_to_geo_boundary(black_box(pentagon_res5()), false)))
    .bench_function("pent_res_5_edges", |b| b.iter(|| h3_to_geo_boundary(black_box(pentagon_res5()), true)));
}

fn bench_h3_is_valid(c: &mut Criterion) {
  let wrong_mode = H3Index::from_raw(0x05283083fffffff);
  c.benchmark_group("h3_is_valid")
    .bench_function("valid", |b| b.iter(|| h3_is_valid(black_box(sf_res10()))))
    .bench_function("wrong_mode", |b| b.iter(|| h3_is_valid(black_box(wrong_mode))));
}

fn bench_string_conv(c: &mut Criterion) {
  c.benchmark_group("string_conv")
    .bench_function("h3_to_string", |b| b.iter(|| h3_to_string(black_box(sf_res10()))))
    .bench_function("string_to_h3", |b| b.iter(|| string_to_h3(black_box("8a2830828767fff"))));
}

criterion_group!(
  indexing_benches,
  bench_geo_to_h3,
  bench_h3_to_geo,
  bench_h3_to_geo_boundary,
  bench_h3_is_valid,
  bench_string_conv
);
criterion_main!(indexing_benches);
