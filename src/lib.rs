//! circumsweep - Delaunay triangulation and Voronoi duals
//!
//! Triangulates a 2D point set with either incremental Bowyer-Watson
//! insertion or a sweep-circle pass over a half-edge mesh, then derives the
//! Voronoi diagram from the circumcenters of the result. Predicates are plain
//! floating-point, with no tolerances and no exact-arithmetic fallback.
//!
//! # Example
//!
//! ```
//! use circumsweep::{Algorithm, Point2, Session, SessionConfig};
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ];
//!
//! let mut session = Session::new(&points, SessionConfig::new(Algorithm::Incremental));
//! assert_eq!(session.compute_delaunay().unwrap().len(), 2);
//!
//! // Both triangles share one circumcenter, so there is no bounded edge.
//! let voronoi = session.compute_voronoi(10.0, 10.0).unwrap();
//! assert!(voronoi.edges.is_empty());
//! ```

pub mod bounds;
pub mod diagnostics;
pub mod error;
pub mod predicates;
pub mod primitives;
pub mod triangulation;

pub use bounds::Aabb2;
pub use diagnostics::{DiagnosticColor, DiagnosticGeometry, DiagnosticShape};
pub use error::VoronoiError;
pub use primitives::{Edge, Point2, PolarPoint, Triangle, Vec2};
pub use triangulation::{triangulate, Algorithm, Session, SessionConfig, VoronoiDiagram};
