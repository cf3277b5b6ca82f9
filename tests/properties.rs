//! Randomized checks of the triangulation and Voronoi invariants.
//!
//! Point sets come from seeded `StdRng`s so failures reproduce.

use circumsweep::predicates::{in_circumcircle, orientation};
use circumsweep::{triangulate, Algorithm, Edge, Point2, Session, SessionConfig, Triangle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

const ALGORITHMS: [Algorithm; 2] = [Algorithm::Incremental, Algorithm::SweepCircle];

fn random_points(seed: u64, n: usize, lo: f64, hi: f64) -> Vec<Point2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point2::new(rng.gen_range(lo..hi), rng.gen_range(lo..hi)))
        .collect()
}

/// Order-independent identity of a triangle's vertex set.
fn vertex_key(tri: &Triangle<f64>) -> [(u64, u64); 3] {
    let mut key = tri.vertices().map(|p| (p.x.to_bits(), p.y.to_bits()));
    key.sort_unstable();
    key
}

fn sorted_keys(triangles: &[Triangle<f64>]) -> Vec<[(u64, u64); 3]> {
    let mut keys: Vec<_> = triangles.iter().map(vertex_key).collect();
    keys.sort_unstable();
    keys
}

#[test]
fn test_delaunay_property_random() {
    for (seed, n) in [(1, 10), (2, 50), (3, 120), (4, 200)] {
        let points = random_points(seed, n, 0.0, 500.0);

        for algorithm in ALGORITHMS {
            let triangles = triangulate(&points, algorithm).unwrap();
            assert!(!triangles.is_empty());

            for tri in &triangles {
                assert!(tri.orientation() < 0.0);
                for &p in &points {
                    if tri.has_vertex(p) {
                        continue;
                    }
                    assert!(
                        !in_circumcircle(tri.a(), tri.b(), tri.c(), p),
                        "{:?}, n = {}: {} inside circumcircle of {}",
                        algorithm,
                        n,
                        p,
                        tri
                    );
                }
            }
        }
    }
}

#[test]
fn test_algorithms_agree_random() {
    for seed in 0..17u64 {
        let n = 20 + 30 * seed as usize;
        let points = random_points(seed, n, 0.0, 500.0);

        let sweep = triangulate(&points, Algorithm::SweepCircle).unwrap();
        let incremental = triangulate(&points, Algorithm::Incremental).unwrap();

        assert_eq!(
            sorted_keys(&sweep),
            sorted_keys(&incremental),
            "triangulations differ for n = {}",
            n
        );
    }
}

#[test]
fn test_sweep_triangle_count_matches_hull() {
    for (seed, n) in [(21, 30), (22, 300), (23, 1000)] {
        let points = random_points(seed, n, -50.0, 50.0);
        let mut session = Session::new(&points, SessionConfig::new(Algorithm::SweepCircle));
        let count = session.compute_delaunay().unwrap().len();
        let hull = session.hull().unwrap();

        assert_eq!(count, 2 * n - 2 - hull.len());
    }
}

#[test]
fn test_sweep_hull_is_convex_and_encloses_points() {
    let points = random_points(31, 400, 0.0, 1.0);
    let mut session = Session::new(&points, SessionConfig::default());
    session.compute_delaunay().unwrap();
    let hull = session.hull().unwrap();
    let h = hull.len();
    assert!(h >= 3);

    for i in 0..h {
        let (a, b, c) = (hull[i], hull[(i + 1) % h], hull[(i + 2) % h]);
        assert!(orientation(a, b, c) < 0.0, "hull turns the wrong way at {}", b);

        for &p in &points {
            assert!(orientation(a, b, p) <= 0.0, "{} outside hull edge {} -> {}", p, a, b);
        }
    }
}

#[test]
fn test_sweep_dual_consistency() {
    for (seed, n) in [(41, 25), (42, 250)] {
        let points = random_points(seed, n, 0.0, 800.0);
        let mut session = Session::new(&points, SessionConfig::default());
        let triangle_count = session.compute_delaunay().unwrap().len();
        let hull_len = session.hull().unwrap().len();

        let voronoi = session.compute_voronoi(800.0, 800.0).unwrap();
        assert_eq!(voronoi.vertices.len(), triangle_count);
        assert_eq!(voronoi.clipped.len(), hull_len);

        // Interior Delaunay edges: (3t - h) / 2
        assert_eq!(voronoi.edges.len(), (3 * triangle_count - hull_len) / 2);

        let mut seen: HashSet<Edge<f64>> = HashSet::new();
        for edge in &voronoi.edges {
            assert!(!edge.is_degenerate(), "self-loop at {}", edge.start());
            assert!(seen.insert(*edge), "duplicate edge {}", edge);
        }
    }
}

#[test]
fn test_incremental_dual_consistency() {
    let points = random_points(51, 120, 0.0, 500.0);
    let mut session = Session::new(&points, SessionConfig::new(Algorithm::Incremental));
    let triangle_count = session.compute_delaunay().unwrap().len();

    let voronoi = session.compute_voronoi(0.0, 0.0).unwrap();
    assert_eq!(voronoi.vertices.len(), triangle_count);
    assert!(voronoi.clipped.is_empty());

    let mut seen: HashSet<Edge<f64>> = HashSet::new();
    for edge in &voronoi.edges {
        assert!(!edge.is_degenerate());
        assert!(seen.insert(*edge));
    }
}

#[test]
fn test_trivial_and_collinear_inputs() {
    let diagonal: Vec<Point2<f64>> = (0..8).map(|i| Point2::new(i as f64, 3.0 * i as f64)).collect();

    for algorithm in ALGORITHMS {
        for points in [&diagonal[..0], &diagonal[..1], &diagonal[..2], &diagonal[..]] {
            let mut session = Session::new(points, SessionConfig::new(algorithm));
            assert!(session.compute_delaunay().unwrap().is_empty());

            let voronoi = session.compute_voronoi(100.0, 100.0).unwrap();
            assert!(voronoi.vertices.is_empty());
            assert_eq!(voronoi.all_edges().count(), 0);
        }
    }
}

#[test]
fn test_cocircular_square() {
    let points = vec![
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(10.0, 10.0),
        Point2::new(0.0, 10.0),
    ];

    for algorithm in ALGORITHMS {
        let mut session = Session::new(&points, SessionConfig::new(algorithm));
        let triangles = session.compute_delaunay().unwrap().to_vec();
        assert_eq!(triangles.len(), 2);

        // The two triangles share exactly one diagonal.
        let shared = triangles[0]
            .edges()
            .iter()
            .filter(|e| triangles[1].edges().contains(*e))
            .count();
        assert_eq!(shared, 1);

        let voronoi = session.compute_voronoi(10.0, 10.0).unwrap();
        assert!(voronoi.vertices.iter().all(|&v| v == Point2::new(5.0, 5.0)));
        assert!(voronoi.edges.is_empty());
    }
}

#[test]
fn test_triangle_with_centroid() {
    let (a, b, c) = (
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(5.0, 8.0),
    );
    let centroid = Point2::centroid(a, b, c);
    let points = vec![a, b, c, centroid];

    for algorithm in ALGORITHMS {
        let mut session = Session::new(&points, SessionConfig::new(algorithm));
        let triangles = session.compute_delaunay().unwrap().to_vec();
        assert_eq!(triangles.len(), 3);
        assert!(triangles.iter().all(|t| t.has_vertex(centroid)));

        let voronoi = session.compute_voronoi(100.0, 100.0).unwrap();
        assert_eq!(voronoi.edges.len(), 3);

        // Every bounded edge is dual to one of the three spokes.
        for edge in &voronoi.edges {
            assert!(!edge.is_degenerate());
        }
    }
}

#[test]
fn test_f32_points() {
    let points: Vec<Point2<f32>> = vec![
        Point2::new(0.0, 0.0),
        Point2::new(4.0, 0.5),
        Point2::new(3.0, 4.0),
        Point2::new(-1.0, 3.0),
        Point2::new(1.5, 1.5),
    ];

    for algorithm in ALGORITHMS {
        let triangles = triangulate(&points, algorithm).unwrap();
        assert_eq!(triangles.len(), 4);
    }
}
