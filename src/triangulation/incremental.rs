//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! # Algorithm
//!
//! 1. Start with a super-triangle containing all points
//! 2. Insert points one at a time in input order: remove every triangle
//!    whose circumcircle contains the point and re-fan the cavity boundary
//!    to the point
//! 3. Remove triangles connected to the super-triangle vertices
//!
//! # Complexity
//!
//! - Time: O(n²), every insertion scans all triangles
//! - Space: O(n)
//!
//! Exact duplicate points must be removed by the caller.

use super::VoronoiDiagram;
use crate::bounds::Aabb2;
use crate::diagnostics::Diagnostics;
use crate::predicates::in_circumcircle;
use crate::primitives::{Edge, Point2, Triangle};
use num_traits::Float;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Size of the super-triangle relative to the larger bounding-box dimension.
///
/// Thin hull triangles have circumcircles reaching far outside the bounding
/// box. A super vertex inside such a circle evicts the triangle, so the
/// super-triangle must sit well beyond them.
pub const SUPER_TRIANGLE_SCALE: f64 = 1.0e4;

/// Builds the super-triangle around `bounds`, wound counter-clockwise in
/// screen coordinates.
pub(crate) fn super_triangle<F: Float>(bounds: &Aabb2<F>) -> Triangle<F> {
    let scale = F::from(SUPER_TRIANGLE_SCALE).unwrap_or_else(F::one);
    let d = bounds.max_extent();
    let mid = bounds.center();

    Triangle::new(
        Point2::new(mid.x - scale * d, mid.y - d),
        Point2::new(mid.x, mid.y + scale * d),
        Point2::new(mid.x + scale * d, mid.y - d),
    )
}

/// Computes the Delaunay triangulation of `points`.
///
/// Returns an empty vector for fewer than three points or when all points
/// are collinear.
pub(crate) fn triangulate<F: Float>(
    points: &[Point2<F>],
    diagnostics: Option<&mut Diagnostics<F>>,
) -> Vec<Triangle<F>> {
    if points.len() < 3 {
        return Vec::new();
    }
    let Some(bounds) = Aabb2::from_points(points) else {
        return Vec::new();
    };

    if let Some(diag) = diagnostics {
        diag.bounding_box(bounds);
    }

    let outer = super_triangle(&bounds);
    let mut triangles = vec![outer];
    let mut conflicts: Vec<usize> = Vec::new();
    let mut boundary: Vec<Edge<F>> = Vec::new();

    for &p in points {
        conflicts.clear();
        conflicts.extend(
            triangles
                .iter()
                .enumerate()
                // Strict: a cocircular point does not conflict.
                .filter(|(_, tri)| in_circumcircle(tri.a(), tri.b(), tri.c(), p))
                .map(|(i, _)| i),
        );

        // Edges shared by two conflicting triangles cancel out.
        boundary.clear();
        for &i in &conflicts {
            for edge in triangles[i].edges() {
                match boundary.iter().position(|e| *e == edge) {
                    Some(pos) => {
                        boundary.swap_remove(pos);
                    }
                    None => boundary.push(edge),
                }
            }
        }

        // Indices are ascending, so removing from the back keeps the rest valid.
        for &i in conflicts.iter().rev() {
            triangles.swap_remove(i);
        }

        triangles.extend(
            boundary
                .iter()
                .map(|edge| Triangle::new(edge.start(), edge.end(), p)),
        );

        trace!(
            conflicts = conflicts.len(),
            boundary = boundary.len(),
            "inserted point"
        );
    }

    triangles.retain(|tri| {
        !tri.has_vertex(outer.a()) && !tri.has_vertex(outer.b()) && !tri.has_vertex(outer.c())
    });

    debug!(
        points = points.len(),
        triangles = triangles.len(),
        "bowyer-watson triangulation finished"
    );

    triangles
}

/// Builds the Voronoi dual of an incremental triangulation.
///
/// Only edges shared by two triangles produce Voronoi edges. Hull edges are
/// left unresolved, so `clipped` is always empty.
pub(crate) fn voronoi<F: Float>(delaunay: &[Triangle<F>]) -> VoronoiDiagram<F> {
    let vertices: Vec<Point2<F>> = delaunay.iter().map(Triangle::circumcenter).collect();

    // First-seen order keeps the output deterministic.
    let mut order: Vec<Edge<F>> = Vec::new();
    let mut adjacency: HashMap<Edge<F>, Vec<usize>> = HashMap::new();

    for (i, tri) in delaunay.iter().enumerate() {
        for edge in tri.edges() {
            adjacency
                .entry(edge)
                .or_insert_with(|| {
                    order.push(edge);
                    Vec::with_capacity(2)
                })
                .push(i);
        }
    }

    let edges = order
        .iter()
        .filter_map(|edge| match adjacency.get(edge).map(Vec::as_slice) {
            Some(&[t1, t2]) => {
                let (c1, c2) = (vertices[t1], vertices[t2]);
                (c1 != c2).then(|| Edge::new(c1, c2))
            }
            _ => None,
        })
        .collect();

    VoronoiDiagram {
        vertices,
        edges,
        clipped: Vec::new(),
    }
}
