//! Undirected edge between two points.

use super::Point2;
use num_traits::Float;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An undirected edge between two points.
///
/// `Edge::new(a, b) == Edge::new(b, a)`, and both orderings hash identically:
/// the hash is computed from the endpoints in canonical order (by x, then y).
/// Endpoints are expected to be finite; a NaN coordinate makes the edge
/// unequal to itself.
#[derive(Debug, Clone, Copy)]
pub struct Edge<F> {
    start: Point2<F>,
    end: Point2<F>,
}

impl<F: Float> Edge<F> {
    /// Creates an edge. The given direction is kept for display and for
    /// consumers that draw the edge, but ignored by equality and hashing.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// The first endpoint as given at construction.
    #[inline]
    pub fn start(&self) -> Point2<F> {
        self.start
    }

    /// The second endpoint as given at construction.
    #[inline]
    pub fn end(&self) -> Point2<F> {
        self.end
    }

    /// Returns the same edge with its endpoints swapped.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Squared length of the edge.
    #[inline]
    pub fn length_squared(&self) -> F {
        self.start.distance_squared(self.end)
    }

    /// Returns true if both endpoints coincide exactly.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Endpoints ordered by x, then by y.
    pub fn canonical(&self) -> (Point2<F>, Point2<F>) {
        let (a, b) = (self.start, self.end);
        if a.x != b.x {
            if a.x > b.x {
                return (b, a);
            }
        } else if a.y > b.y {
            return (b, a);
        }
        (a, b)
    }
}

impl<F: Float> PartialEq for Edge<F> {
    fn eq(&self, other: &Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}

impl<F: Float> Eq for Edge<F> {}

impl<F: Float> Hash for Edge<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (a, b) = self.canonical();
        hash_coordinate(a.x, state);
        hash_coordinate(a.y, state);
        hash_coordinate(b.x, state);
        hash_coordinate(b.y, state);
    }
}

// 0.0 and -0.0 compare equal, so they must hash equal.
fn hash_coordinate<F: Float, H: Hasher>(v: F, state: &mut H) {
    let v = if v == F::zero() { F::zero() } else { v };
    v.integer_decode().hash(state);
}

impl<F: Float + fmt::Display> fmt::Display for Edge<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})-({})", self.start, self.end)
    }
}
