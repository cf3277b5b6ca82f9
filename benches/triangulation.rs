//! Benchmarks for Delaunay triangulation and Voronoi duals.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use circumsweep::{triangulate, Algorithm, Point2, Session, SessionConfig};

const VIEWPORT: f64 = 1000.0;

/// Generates uniformly distributed points in the viewport.
fn generate_random_points(count: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(count);
    let mut state = seed;

    for _ in 0..count {
        // xorshift for deterministic random
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let x = (state as f64 / u64::MAX as f64) * VIEWPORT;

        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let y = (state as f64 / u64::MAX as f64) * VIEWPORT;

        points.push(Point2::new(x, y));
    }

    points
}

fn bench_sweep_circle(c: &mut Criterion) {
    let mut group = c.benchmark_group("delaunay_sweep_circle");

    for count in [100, 1000, 10000, 100000] {
        let points = generate_random_points(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("points", count), &points, |b, pts| {
            b.iter(|| triangulate(black_box(pts), Algorithm::SweepCircle))
        });
    }

    group.finish();
}

fn bench_incremental(c: &mut Criterion) {
    let mut group = c.benchmark_group("delaunay_incremental");
    group.sample_size(10);

    // Quadratic, so stop well before the sweep sizes.
    for count in [100, 500, 2000] {
        let points = generate_random_points(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("points", count), &points, |b, pts| {
            b.iter(|| triangulate(black_box(pts), Algorithm::Incremental))
        });
    }

    group.finish();
}

fn bench_voronoi(c: &mut Criterion) {
    let mut group = c.benchmark_group("voronoi");

    for algorithm in [Algorithm::Incremental, Algorithm::SweepCircle] {
        let points = generate_random_points(1000, 54321);

        group.bench_with_input(
            BenchmarkId::new(format!("{:?}", algorithm), 1000),
            &points,
            |b, pts| {
                let mut session = Session::new(pts, SessionConfig::new(algorithm));
                session.compute_delaunay().ok();
                b.iter(|| {
                    session
                        .compute_voronoi(black_box(VIEWPORT), black_box(VIEWPORT))
                        .map(|v| v.edges.len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sweep_circle, bench_incremental, bench_voronoi);
criterion_main!(benches);
