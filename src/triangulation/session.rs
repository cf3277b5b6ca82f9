//! Triangulation sessions over one borrowed point set.

use super::sweep::{self, SweepTriangulation};
use super::{incremental, Algorithm, VoronoiDiagram};
use crate::diagnostics::{DiagnosticGeometry, Diagnostics};
use crate::error::VoronoiError;
use crate::primitives::{Point2, Triangle};
use num_traits::Float;
use tracing::debug;

/// Options for a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SessionConfig {
    /// Triangulation strategy.
    pub algorithm: Algorithm,
    /// Whether to record diagnostic geometry.
    pub diagnostics: bool,
}

impl SessionConfig {
    /// Creates a configuration for `algorithm` with diagnostics disabled.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            diagnostics: false,
        }
    }

    /// Enables or disables diagnostic geometry.
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }
}

/// Computes the Delaunay triangulation of a point set and then its Voronoi
/// dual.
///
/// The session borrows the points for its whole lifetime. Use a new session
/// for a new point set.
///
/// # Example
///
/// ```
/// use circumsweep::triangulation::{Algorithm, Session, SessionConfig};
/// use circumsweep::Point2;
///
/// let points = vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(5.0, 8.0),
///     Point2::new(5.0, 3.0),
/// ];
///
/// let mut session = Session::new(&points, SessionConfig::new(Algorithm::SweepCircle));
/// assert_eq!(session.compute_delaunay().unwrap().len(), 3);
///
/// let voronoi = session.compute_voronoi(100.0, 100.0).unwrap();
/// assert_eq!(voronoi.vertices.len(), 3);
/// assert_eq!(voronoi.edges.len(), 3);
/// assert_eq!(voronoi.clipped.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Session<'a, F> {
    points: &'a [Point2<F>],
    config: SessionConfig,
    delaunay: Option<Vec<Triangle<F>>>,
    sweep: Option<SweepTriangulation<F>>,
    voronoi: Option<VoronoiDiagram<F>>,
    diagnostics: Option<Diagnostics<F>>,
}

impl<'a, F: Float> Session<'a, F> {
    pub fn new(points: &'a [Point2<F>], config: SessionConfig) -> Self {
        Self {
            points,
            config,
            delaunay: None,
            sweep: None,
            voronoi: None,
            diagnostics: config.diagnostics.then(Diagnostics::new),
        }
    }

    /// Computes the Delaunay triangulation.
    ///
    /// Calling this again recomputes from scratch and discards the previous
    /// Voronoi dual and diagnostics. Fewer than three points, or collinear
    /// points, give an empty triangulation.
    ///
    /// # Errors
    ///
    /// [`VoronoiError::NoVisibleHullEdge`] or [`VoronoiError::HashExhausted`]
    /// when the sweep-circle hull becomes inconsistent. No result is kept in
    /// that case.
    pub fn compute_delaunay(&mut self) -> Result<&[Triangle<F>], VoronoiError> {
        self.delaunay = None;
        self.sweep = None;
        self.voronoi = None;
        if let Some(diag) = self.diagnostics.as_mut() {
            diag.clear();
        }

        debug!(
            points = self.points.len(),
            algorithm = ?self.config.algorithm,
            "computing delaunay triangulation"
        );

        let triangles = match self.config.algorithm {
            Algorithm::Incremental => {
                incremental::triangulate(self.points, self.diagnostics.as_mut())
            }
            Algorithm::SweepCircle => {
                match sweep::triangulate(self.points, self.diagnostics.as_mut()) {
                    Ok(Some(pass)) => {
                        let triangles = pass.triangles(self.points);
                        self.sweep = Some(pass);
                        triangles
                    }
                    Ok(None) => Vec::new(),
                    Err(err) => {
                        if let Some(diag) = self.diagnostics.as_mut() {
                            diag.clear();
                        }
                        return Err(err);
                    }
                }
            }
        };

        if let Some(diag) = self.diagnostics.as_mut() {
            diag.circumcircles(&triangles);
        }

        Ok(self.delaunay.insert(triangles).as_slice())
    }

    /// Computes the Voronoi dual of the current triangulation.
    ///
    /// On the sweep-circle path hull edges are clipped to the
    /// `viewport_width` x `viewport_height` rectangle anchored at the origin.
    /// The incremental path ignores the viewport.
    ///
    /// # Errors
    ///
    /// - [`VoronoiError::DelaunayNotComputed`] before a successful
    ///   [`Session::compute_delaunay`]
    /// - [`VoronoiError::InvalidViewport`] for a non-positive or non-finite
    ///   viewport on the sweep-circle path
    pub fn compute_voronoi(
        &mut self,
        viewport_width: F,
        viewport_height: F,
    ) -> Result<&VoronoiDiagram<F>, VoronoiError> {
        self.voronoi = None;
        let delaunay = self
            .delaunay
            .as_deref()
            .ok_or(VoronoiError::DelaunayNotComputed)?;

        let diagram = match self.config.algorithm {
            Algorithm::Incremental => incremental::voronoi(delaunay),
            Algorithm::SweepCircle => {
                validate_viewport(viewport_width, viewport_height)?;
                match &self.sweep {
                    Some(pass) => pass.voronoi(delaunay, viewport_width, viewport_height),
                    None => VoronoiDiagram::empty(),
                }
            }
        };

        debug!(
            vertices = diagram.vertices.len(),
            edges = diagram.edges.len(),
            clipped = diagram.clipped.len(),
            "voronoi dual computed"
        );

        Ok(self.voronoi.insert(diagram))
    }

    /// The input points.
    #[inline]
    pub fn points(&self) -> &'a [Point2<F>] {
        self.points
    }

    #[inline]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    /// The last triangulation, if one was computed.
    pub fn delaunay(&self) -> Option<&[Triangle<F>]> {
        self.delaunay.as_deref()
    }

    /// The last Voronoi dual, if one was computed.
    pub fn voronoi(&self) -> Option<&VoronoiDiagram<F>> {
        self.voronoi.as_ref()
    }

    /// Diagnostic geometry of the last triangulation, or `None` when
    /// diagnostics are disabled.
    pub fn diagnostics(&self) -> Option<&[DiagnosticGeometry<F>]> {
        self.diagnostics.as_ref().map(Diagnostics::shapes)
    }

    /// Convex hull points in hull order after a sweep-circle triangulation.
    ///
    /// `None` for the incremental algorithm or before triangulating.
    pub fn hull(&self) -> Option<Vec<Point2<F>>> {
        self.sweep.as_ref().map(SweepTriangulation::hull_points)
    }
}

fn validate_viewport<F: Float>(width: F, height: F) -> Result<(), VoronoiError> {
    let usable = |v: F| v.is_finite() && v > F::zero();
    if usable(width) && usable(height) {
        Ok(())
    } else {
        Err(VoronoiError::InvalidViewport {
            width: width.to_f64().unwrap_or(f64::NAN),
            height: height.to_f64().unwrap_or(f64::NAN),
        })
    }
}
