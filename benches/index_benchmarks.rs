use covgrid::{DatasetBuilder, TileConfig};
use covgrid_types::{CoverageFlags, Coords, CoveragePoint};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use geo::Point;

fn point_cloud(count: usize) -> Vec<CoveragePoint> {
    let mut state: u64 = 0x9E3779B97F4A7C15;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };

    (0..count)
        .map(|i| {
            let longitude = -4.8 + next() * 12.8;
            let latitude = 42.3 + next() * 8.8;
            CoveragePoint::new(
                Coords::new(longitude, latitude),
                CoverageFlags::new(true, i % 3 != 0, i % 2 == 0),
            )
        })
        .collect()
}

fn national_config() -> TileConfig {
    TileConfig::default()
        .with_max_inner(50)
        .with_max_outer(150)
        .with_min_set(10)
        .with_forced_splits(1, 2)
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("tile_tree_build");
    group.sample_size(10);

    for count in [1_000, 10_000, 50_000] {
        let points = point_cloud(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            b.iter(|| {
                DatasetBuilder::new(national_config())
                    .extend(black_box(points.iter().copied()))
                    .build()
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn benchmark_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_query");

    let dataset = DatasetBuilder::new(national_config())
        .extend(point_cloud(50_000))
        .build()
        .unwrap();

    group.bench_function("query_hit", |b| {
        let mut counter = 0usize;
        b.iter(|| {
            let point = dataset.points()[counter % dataset.len()];
            counter += 1;
            black_box(dataset.query(black_box(point.coords.to_point())))
        })
    });

    group.bench_function("query_outside_area", |b| {
        b.iter(|| black_box(dataset.query(black_box(Point::new(30.0, 10.0)))))
    });

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_query);
criterion_main!(benches);
