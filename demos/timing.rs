//! Times Delaunay and Voronoi computation over uniformly random points.
//!
//! Usage: `cargo run --release --example timing -- [points] [runs] [algorithm]`
//! where `algorithm` is `sweep` (default) or `incremental`. Set `RUST_LOG`
//! to `debug` to see per-pass events from the library.

use std::time::Instant;

use circumsweep::{Algorithm, Point2, Session, SessionConfig, VoronoiError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), VoronoiError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = std::env::args().skip(1);
    let count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(1_000_000);
    let runs: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);
    let algorithm = match args.next().as_deref() {
        Some("incremental") => Algorithm::Incremental,
        _ => Algorithm::SweepCircle,
    };

    let mut rng = StdRng::from_entropy();
    let points: Vec<Point2<f64>> = (0..count)
        .map(|_| {
            Point2::new(
                rng.gen_range(0..i32::MAX) as f64,
                rng.gen_range(0..i32::MAX) as f64,
            )
        })
        .collect();

    for _ in 0..runs {
        let mut session = Session::new(&points, SessionConfig::new(algorithm));

        let start = Instant::now();
        let triangles = session.compute_delaunay()?.len();
        let delaunay_secs = start.elapsed().as_secs_f64();

        let start = Instant::now();
        let edges = session.compute_voronoi(1.0, 1.0)?.all_edges().count();
        let voronoi_secs = start.elapsed().as_secs_f64();

        info!(
            ?algorithm,
            points = count,
            triangles,
            edges,
            "Delaunay {:.2} s, Voronoi {:.2} s, Total {:.2} s",
            delaunay_secs,
            voronoi_secs,
            delaunay_secs + voronoi_secs
        );
    }

    Ok(())
}
