//! Triangle with a cached circumcenter.

use super::{Edge, Point2};
use crate::predicates;
use num_traits::Float;
use std::fmt;

/// An ordered triangle `(a, b, c)` with its circumcenter computed once at
/// construction.
///
/// Vertex order is significant for the orientation-dependent predicates.
/// Producers never build a triangle from collinear points, whose
/// circumcenter would not be finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<F> {
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    circumcenter: Point2<F>,
}

impl<F: Float> Triangle<F> {
    /// Creates a triangle and caches its circumcenter.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self {
            a,
            b,
            c,
            circumcenter: predicates::circumcenter(a, b, c),
        }
    }

    #[inline]
    pub fn a(&self) -> Point2<F> {
        self.a
    }

    #[inline]
    pub fn b(&self) -> Point2<F> {
        self.b
    }

    #[inline]
    pub fn c(&self) -> Point2<F> {
        self.c
    }

    /// The vertices in stored order.
    #[inline]
    pub fn vertices(&self) -> [Point2<F>; 3] {
        [self.a, self.b, self.c]
    }

    /// The cached circumcenter.
    #[inline]
    pub fn circumcenter(&self) -> Point2<F> {
        self.circumcenter
    }

    /// Squared radius of the circumcircle.
    #[inline]
    pub fn circumradius_squared(&self) -> F {
        self.circumcenter.distance_squared(self.a)
    }

    /// Twice the signed area, see [`predicates::orientation`].
    #[inline]
    pub fn orientation(&self) -> F {
        predicates::orientation(self.a, self.b, self.c)
    }

    /// Returns the edges AB, BC and CA.
    #[inline]
    pub fn edges(&self) -> [Edge<F>; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.b, self.c),
            Edge::new(self.c, self.a),
        ]
    }

    /// Checks if `p` is exactly one of the vertices.
    #[inline]
    pub fn has_vertex(&self, p: Point2<F>) -> bool {
        self.a == p || self.b == p || self.c == p
    }

    /// Checks if `p` lies inside or on the circumcircle, by distance to the
    /// cached circumcenter. Independent of winding.
    #[inline]
    pub fn contains_in_circumcircle(&self, p: Point2<F>) -> bool {
        self.circumcenter.distance_squared(p) <= self.circumradius_squared()
    }

    /// Returns true if the triangles have the same vertex set, in any order.
    pub fn same_vertices(&self, other: &Self) -> bool {
        let [a, b, c] = other.vertices();
        self.has_vertex(a) && self.has_vertex(b) && self.has_vertex(c)
    }
}

impl<F: Float + fmt::Display> fmt::Display for Triangle<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}, {{{}}}, {{{}}}", self.a, self.b, self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Triangle<f64> {
        Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 3.0),
        )
    }

    #[test]
    fn test_cached_circumcenter() {
        let tri = sample();
        assert_relative_eq!(tri.circumcenter().x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(tri.circumcenter().y, 1.5, epsilon = 1e-12);
        assert_relative_eq!(tri.circumradius_squared(), 6.25, epsilon = 1e-12);
    }

    #[test]
    fn test_triangle_edges() {
        let tri = sample();
        let edges = tri.edges();
        assert_eq!(edges[0], Edge::new(tri.a(), tri.b()));
        assert_eq!(edges[1], Edge::new(tri.b(), tri.c()));
        assert_eq!(edges[2], Edge::new(tri.c(), tri.a()));
    }

    #[test]
    fn test_has_vertex() {
        let tri = sample();
        assert!(tri.has_vertex(Point2::new(4.0, 0.0)));
        assert!(!tri.has_vertex(Point2::new(4.0, 1e-12)));
    }

    #[test]
    fn test_contains_in_circumcircle_is_inclusive() {
        let tri = Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
        );
        assert!(tri.contains_in_circumcircle(Point2::new(0.0, 10.0)));
        assert!(tri.contains_in_circumcircle(Point2::new(5.0, 5.0)));
        assert!(!tri.contains_in_circumcircle(Point2::new(-1.0, 10.0)));
    }

    #[test]
    fn test_same_vertices_ignores_order() {
        let tri = sample();
        let rotated = Triangle::new(tri.c(), tri.a(), tri.b());
        assert!(tri.same_vertices(&rotated));
        assert_eq!(tri.orientation(), rotated.orientation());
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "{0, 0}, {4, 0}, {0, 3}");
    }
}
