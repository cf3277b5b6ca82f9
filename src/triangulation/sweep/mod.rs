//! Delaunay triangulation by sweep-circle insertion.
//!
//! Points are inserted in order of increasing distance from a seed triangle,
//! so every new point lies outside the current triangulation. Each insertion
//! fans triangles over the hull edges visible from the point and restores the
//! Delaunay property with recursive edge flips.
//!
//! # Algorithm
//!
//! 1. Pick a seed triangle near the bounding-box center with a small
//!    circumcircle, and use its vertex average as the sweep origin
//! 2. Sort all points by squared distance to the origin
//! 3. For each point, locate a visible hull edge through an angular hash,
//!    add triangles for all visible edges and legalize them
//!
//! # Complexity
//!
//! - Time: O(n log n) expected
//! - Space: O(n)
//!
//! # References
//!
//! Biniaz, Dastghaibyfard: "A faster circle-sweep Delaunay triangulation
//! algorithm", Advances in Engineering Software 43 (2012).

mod hull;
mod mesh;

use self::hull::{Hull, NodeId};
use self::mesh::{next_halfedge, prev_halfedge, HalfEdgeMesh, EMPTY};
use super::VoronoiDiagram;
use crate::bounds::Aabb2;
use crate::diagnostics::{DiagnosticColor, DiagnosticGeometry, Diagnostics};
use crate::error::VoronoiError;
use crate::predicates::{circumradius2, in_circumcircle, orientation};
use crate::primitives::{Edge, Point2, PolarPoint, Triangle, Vec2};
use num_traits::Float;
use std::cmp::Ordering;
use tracing::{debug, trace, warn};

/// Seed triangle of a sweep, wound counter-clockwise in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Seed<F> {
    pub(crate) i0: usize,
    pub(crate) i1: usize,
    pub(crate) i2: usize,
    /// Vertex average of the seed triangle.
    pub(crate) origin: Point2<F>,
    pub(crate) bounds: Aabb2<F>,
}

/// Index of the point nearest to `target`, skipping `skip`.
fn closest_point<F: Float>(points: &[Point2<F>], target: Point2<F>, skip: Option<usize>) -> Option<usize> {
    let mut best = None;
    let mut min_dist = F::max_value();

    for (i, &p) in points.iter().enumerate() {
        if Some(i) == skip {
            continue;
        }
        let dist = p.distance_squared(target);
        if dist < min_dist {
            best = Some(i);
            min_dist = dist;
        }
    }

    best
}

/// Selects the seed triangle.
///
/// Returns `None` when no third point yields a finite circumcircle with the
/// first two, i.e. all remaining points are collinear with them.
pub(crate) fn find_seed<F: Float>(points: &[Point2<F>]) -> Option<Seed<F>> {
    let bounds = Aabb2::from_points(points)?;

    let i0 = closest_point(points, bounds.center(), None)?;
    let i1 = closest_point(points, points[i0], Some(i0))?;

    // Third point with the smallest circumcircle through the first two
    let mut i2 = None;
    let mut min_radius2 = F::max_value();
    for (i, &p) in points.iter().enumerate() {
        if i == i0 || i == i1 {
            continue;
        }
        let r2 = circumradius2(points[i0], points[i1], p);
        if r2 < min_radius2 {
            i2 = Some(i);
            min_radius2 = r2;
        }
    }
    let i2 = i2?;

    let (i1, i2) = if orientation(points[i0], points[i1], points[i2]) > F::zero() {
        (i2, i1)
    } else {
        (i1, i2)
    };

    Some(Seed {
        i0,
        i1,
        i2,
        origin: Point2::centroid(points[i0], points[i1], points[i2]),
        bounds,
    })
}

/// The finished mesh and hull of one sweep pass, kept for the Voronoi dual.
#[derive(Debug, Clone)]
pub(crate) struct SweepTriangulation<F> {
    mesh: HalfEdgeMesh,
    hull: Hull<F>,
}

impl<F: Float> SweepTriangulation<F> {
    /// The Delaunay triangles, in mesh order.
    pub(crate) fn triangles(&self, points: &[Point2<F>]) -> Vec<Triangle<F>> {
        self.mesh
            .triangles
            .chunks_exact(3)
            .map(|t| Triangle::new(points[t[0]], points[t[1]], points[t[2]]))
            .collect()
    }

    /// Convex hull points in hull order.
    pub(crate) fn hull_points(&self) -> Vec<Point2<F>> {
        self.hull.live_nodes().map(|node| self.hull.point(node)).collect()
    }

    /// Builds the Voronoi dual of `delaunay`, which must be the output of
    /// [`SweepTriangulation::triangles`] for this pass.
    ///
    /// Hull edges become segments from the circumcenter of their triangle to
    /// the boundary of the `width` x `height` viewport.
    pub(crate) fn voronoi(&self, delaunay: &[Triangle<F>], width: F, height: F) -> VoronoiDiagram<F> {
        let vertices: Vec<Point2<F>> = delaunay.iter().map(Triangle::circumcenter).collect();

        let mut edges = Vec::with_capacity(self.mesh.halfedges.len() / 2);
        for (i, &j) in self.mesh.halfedges.iter().enumerate() {
            if j == EMPTY || j < i {
                continue;
            }
            let (c1, c2) = (vertices[i / 3], vertices[j / 3]);
            if c1 == c2 {
                continue;
            }
            edges.push(Edge::new(c1, c2));
        }

        let clipped = self
            .hull
            .live_nodes()
            .filter_map(|node| {
                let c = *vertices.get(self.hull.t(node) / 3)?;
                let p1 = self.hull.point(node);
                let p2 = self.hull.point(self.hull.next(node));
                Some(Edge::new(c, clip_to_viewport(p1, p2, c, width, height)))
            })
            .collect();

        VoronoiDiagram {
            vertices,
            edges,
            clipped,
        }
    }
}

/// End point of the unbounded Voronoi edge that starts at circumcenter `c`
/// and crosses hull edge `p1 -> p2`, stretched onto the viewport boundary.
///
/// The ray runs from `c` through the edge midpoint, away from the
/// triangulation. Whichever axis dominates the direction decides the side it
/// ends on: `x = 0` or `x = width`, else `y = 0` or `y = height`.
pub(crate) fn clip_to_viewport<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    c: Point2<F>,
    width: F,
    height: F,
) -> Point2<F> {
    let mut d = p1.midpoint(p2) - c;
    if d == Vec2::zero() {
        // Circumcenter on the hull edge: leave along the outward edge normal.
        let e = p2 - p1;
        d = Vec2::new(-e.y, e.x);
    } else if orientation(p1, p2, c) > F::zero() {
        d = -d;
    }

    let dx_abs = d.x.abs();
    let dy_abs = d.y.abs();

    let offset = if dx_abs > dy_abs {
        let reach = if d.x < F::zero() { c.x } else { width - c.x };
        d / dx_abs * reach
    } else {
        let reach = if d.y < F::zero() { c.y } else { height - c.y };
        d / dy_abs * reach
    };

    c + offset
}

/// Runs the sweep over `points`.
///
/// Returns `Ok(None)` for fewer than three points or when no seed triangle
/// exists.
pub(crate) fn triangulate<F: Float>(
    points: &[Point2<F>],
    diagnostics: Option<&mut Diagnostics<F>>,
) -> Result<Option<SweepTriangulation<F>>, VoronoiError> {
    if points.len() < 3 {
        return Ok(None);
    }

    let Some(seed) = find_seed(points) else {
        debug!(points = points.len(), "no seed triangle, all points collinear");
        return Ok(None);
    };
    debug!(
        points = points.len(),
        i0 = seed.i0,
        i1 = seed.i1,
        i2 = seed.i2,
        "sweep-circle seed selected"
    );

    if let Some(diag) = diagnostics {
        let [a, b, c] = [points[seed.i0], points[seed.i1], points[seed.i2]];
        diag.push(DiagnosticGeometry::line(DiagnosticColor::Red, vec![a, b]));
        diag.push(DiagnosticGeometry::line(DiagnosticColor::Red, vec![b, c]));
        diag.push(DiagnosticGeometry::line(DiagnosticColor::Red, vec![c, a]));
        diag.bounding_box(seed.bounds);
        diag.push(DiagnosticGeometry::vertex(DiagnosticColor::Red, seed.origin));
    }

    let mut sweep = Sweep::new(points, &seed);
    sweep.run(&seed)?;
    debug_assert!(sweep.mesh.links_are_symmetric());

    debug!(
        triangles = sweep.mesh.len(),
        flips = sweep.flips,
        "sweep-circle triangulation finished"
    );

    Ok(Some(SweepTriangulation {
        mesh: sweep.mesh,
        hull: sweep.hull,
    }))
}

/// Mutable state of one sweep pass.
struct Sweep<'a, F> {
    points: &'a [Point2<F>],
    polar: Vec<PolarPoint<F>>,
    mesh: HalfEdgeMesh,
    hull: Hull<F>,
    flips: usize,
}

impl<'a, F: Float> Sweep<'a, F> {
    fn new(points: &'a [Point2<F>], seed: &Seed<F>) -> Self {
        let mut polar: Vec<PolarPoint<F>> = points
            .iter()
            .enumerate()
            .map(|(i, &p)| PolarPoint::new(i, p, seed.origin))
            .collect();

        let hull = Hull::new(
            seed.origin,
            [polar[seed.i0], polar[seed.i1], polar[seed.i2]],
            points.len(),
        );

        // NaN radii (non-finite input) sort last so the order stays total.
        let radius = |p: &PolarPoint<F>| {
            if p.radius2.is_nan() {
                F::infinity()
            } else {
                p.radius2
            }
        };
        polar.sort_by(|a, b| radius(a).partial_cmp(&radius(b)).unwrap_or(Ordering::Equal));

        let mut mesh = HalfEdgeMesh::with_capacity(points.len());
        mesh.add_triangle(seed.i0, seed.i1, seed.i2, EMPTY, EMPTY, EMPTY);

        Self {
            points,
            polar,
            mesh,
            hull,
            flips: 0,
        }
    }

    fn run(&mut self, seed: &Seed<F>) -> Result<(), VoronoiError> {
        let seed_points = [
            self.points[seed.i0],
            self.points[seed.i1],
            self.points[seed.i2],
        ];
        let mut prev: Option<Point2<F>> = None;
        let mut duplicates = 0usize;

        for k in 0..self.polar.len() {
            let pp = self.polar[k];

            if seed_points.contains(&pp.point) {
                continue;
            }
            if prev == Some(pp.point) {
                duplicates += 1;
                continue;
            }

            self.insert(pp)?;
            prev = Some(pp.point);
        }

        if duplicates > 0 {
            warn!(duplicates, "skipped duplicate points");
        }

        Ok(())
    }

    /// Inserts one point lying outside the current hull.
    fn insert(&mut self, pp: PolarPoint<F>) -> Result<(), VoronoiError> {
        let p = pp.point;

        let start = self
            .hull
            .find_start(&pp)
            .ok_or(VoronoiError::HashExhausted { point: pp.index })?;

        // Walk forward to the first hull edge visible from p.
        let mut e = start;
        while orientation(p, self.hull.point(e), self.hull.point(self.hull.next(e))) <= F::zero() {
            e = self.hull.next(e);
            if e == start {
                return Err(VoronoiError::NoVisibleHullEdge { point: pp.index });
            }
        }
        let walk_back = e == start;

        let t = self.mesh.add_triangle(
            self.hull.index(e),
            pp.index,
            self.hull.index(self.hull.next(e)),
            EMPTY,
            EMPTY,
            self.hull.t(e),
        );
        let node = self.hull.insert_after(pp, e);
        let legal = self.legalize(t + 2);
        self.hull.set_t(node, legal);
        self.hull.set_t(e, t);

        let absorbed_forward = self.absorb_forward(node, p);
        let absorbed_back = if walk_back {
            self.absorb_backward(node, p)
        } else {
            0
        };
        trace!(
            point = pp.index,
            absorbed_forward,
            absorbed_back,
            "inserted point"
        );

        self.hull.hash_node(node);
        self.hull.hash_node(self.hull.prev(node));

        Ok(())
    }

    /// Fans triangles over visible hull edges after `node`, dropping the
    /// hull nodes they cover.
    fn absorb_forward(&mut self, node: NodeId, p: Point2<F>) -> usize {
        let index = self.hull.index(node);
        let mut count = 0;

        let mut q = self.hull.next(node);
        while orientation(p, self.hull.point(q), self.hull.point(self.hull.next(q))) > F::zero() {
            let t = self.mesh.add_triangle(
                self.hull.index(q),
                index,
                self.hull.index(self.hull.next(q)),
                self.hull.t(node),
                EMPTY,
                self.hull.t(q),
            );
            let legal = self.legalize(t + 2);
            self.hull.set_t(node, legal);
            self.hull.remove(q);
            q = self.hull.next(q);
            count += 1;
        }

        count
    }

    /// Same as [`Sweep::absorb_forward`], walking backwards from `node`.
    fn absorb_backward(&mut self, node: NodeId, p: Point2<F>) -> usize {
        let index = self.hull.index(node);
        let mut count = 0;

        let mut q = self.hull.prev(node);
        while orientation(p, self.hull.point(self.hull.prev(q)), self.hull.point(q)) > F::zero() {
            let before = self.hull.prev(q);
            let t = self.mesh.add_triangle(
                self.hull.index(before),
                index,
                self.hull.index(q),
                EMPTY,
                self.hull.t(q),
                self.hull.t(before),
            );
            self.legalize(t + 2);
            self.hull.set_t(before, t);
            self.hull.remove(q);
            q = before;
            count += 1;
        }

        count
    }

    /// Flips half-edge `a` and its twin until both adjacent triangles are
    /// locally Delaunay, recursing into the newly exposed edges.
    ///
    /// ```text
    ///           pl                    pl
    ///          /||\                  /  \
    ///       al/ || \bl            al/    \a
    ///        /  ||  \              /      \
    ///       /  a||b  \    flip    /___ar___\
    ///     p0\   ||   /p1   =>   p0\---bl---/p1
    ///        \  ||  /              \      /
    ///       ar\ || /br             b\    /br
    ///          \||/                  \  /
    ///           pr                    pr
    /// ```
    ///
    /// Returns the slot now holding the edge that `prev_halfedge(a)` held.
    fn legalize(&mut self, a: usize) -> usize {
        let b = self.mesh.twin(a);
        let ar = prev_halfedge(a);

        if b == EMPTY {
            return ar;
        }

        let al = next_halfedge(a);
        let bl = prev_halfedge(b);

        let p0 = self.mesh.triangles[ar];
        let pr = self.mesh.triangles[a];
        let pl = self.mesh.triangles[al];
        let p1 = self.mesh.triangles[bl];

        let pts = self.points;
        if !in_circumcircle(pts[p0], pts[pr], pts[pl], pts[p1]) {
            return ar;
        }

        self.flips += 1;
        trace!(a, b, "flipping edge");
        self.mesh.triangles[a] = p1;
        self.mesh.triangles[b] = p0;

        let hbl = self.mesh.twin(bl);
        let har = self.mesh.twin(ar);

        // bl was a hull edge; it now lives in slot a.
        if hbl == EMPTY {
            self.hull.retarget(bl, a);
        }

        self.mesh.link(a, hbl);
        self.mesh.link(b, har);
        self.mesh.link(ar, bl);

        let br = next_halfedge(b);

        self.legalize(a);
        self.legalize(br)
    }
}
