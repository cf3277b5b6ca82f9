//! Delaunay triangulation of point sets and its Voronoi dual.
//!
//! Two interchangeable strategies compute the same triangulation:
//!
//! - [`Algorithm::Incremental`]: Bowyer-Watson insertion into a
//!   super-triangle, O(n²)
//! - [`Algorithm::SweepCircle`]: radial sweep over a half-edge mesh with
//!   edge-flip legalization, O(n log n) expected
//!
//! A [`Session`] runs one strategy over a borrowed point set and derives the
//! Voronoi diagram from the result.
//!
//! # Example
//!
//! ```
//! use circumsweep::triangulation::{triangulate, Algorithm};
//! use circumsweep::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//!     Point2::new(0.5, 0.5),
//! ];
//!
//! let sweep = triangulate(&points, Algorithm::SweepCircle).unwrap();
//! let incremental = triangulate(&points, Algorithm::Incremental).unwrap();
//!
//! // Square with center point produces 4 triangles either way
//! assert_eq!(sweep.len(), 4);
//! assert_eq!(incremental.len(), 4);
//! ```

mod incremental;
mod session;
mod sweep;
mod voronoi;

pub use incremental::SUPER_TRIANGLE_SCALE;
pub use session::{Session, SessionConfig};
pub use voronoi::VoronoiDiagram;

use crate::error::VoronoiError;
use crate::primitives::{Point2, Triangle};
use num_traits::Float;

/// Triangulation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Bowyer-Watson insertion in input order.
    Incremental,
    /// Sweep-circle insertion in order of distance from a seed triangle.
    #[default]
    SweepCircle,
}

/// Computes the Delaunay triangulation of `points` in one call.
///
/// Every returned triangle has negative [`orientation`], i.e. it is wound
/// counter-clockwise with the y axis pointing down.
///
/// # Errors
///
/// Only [`Algorithm::SweepCircle`] can fail, see
/// [`Session::compute_delaunay`].
///
/// [`orientation`]: crate::predicates::orientation
pub fn triangulate<F: Float>(
    points: &[Point2<F>],
    algorithm: Algorithm,
) -> Result<Vec<Triangle<F>>, VoronoiError> {
    match algorithm {
        Algorithm::Incremental => Ok(incremental::triangulate(points, None)),
        Algorithm::SweepCircle => Ok(sweep::triangulate(points, None)?
            .map(|pass| pass.triangles(points))
            .unwrap_or_default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_algorithm() {
        assert_eq!(Algorithm::default(), Algorithm::SweepCircle);
    }

    #[test]
    fn test_triangulate_matches_session() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(3.0, 1.0),
            Point2::new(9.0, 2.0),
            Point2::new(6.0, 7.0),
            Point2::new(1.0, 6.0),
            Point2::new(5.0, 4.0),
        ];

        for algorithm in [Algorithm::Incremental, Algorithm::SweepCircle] {
            let direct = triangulate(&points, algorithm).unwrap();
            let mut session = Session::new(&points, SessionConfig::new(algorithm));
            assert_eq!(session.compute_delaunay().unwrap(), direct.as_slice());
        }
    }

    #[test]
    fn test_algorithms_agree() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(3.0, 1.0),
            Point2::new(9.0, 2.0),
            Point2::new(6.0, 7.0),
            Point2::new(1.0, 6.0),
            Point2::new(5.0, 4.0),
            Point2::new(8.0, 5.5),
        ];
        let sweep = triangulate(&points, Algorithm::SweepCircle).unwrap();
        let incremental = triangulate(&points, Algorithm::Incremental).unwrap();

        assert_eq!(sweep.len(), incremental.len());
        for tri in &sweep {
            assert!(incremental.iter().any(|other| tri.same_vertices(other)));
        }
    }
}
