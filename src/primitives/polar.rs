//! Points annotated with polar ordering keys.

use super::Point2;
use crate::predicates;
use num_traits::Float;
use std::fmt;

/// An input point annotated with its squared distance and pseudo-angle
/// relative to a sweep origin.
///
/// Only meaningful for the sweep pass that computed it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint<F> {
    /// Index of the point in the input slice.
    pub index: usize,
    /// The Cartesian point.
    pub point: Point2<F>,
    /// Squared distance to the origin.
    pub radius2: F,
    /// Pseudo-angle around the origin, in `[0, 2]`.
    pub angle: F,
}

impl<F: Float> PolarPoint<F> {
    /// Annotates `point` relative to `origin`.
    #[inline]
    pub fn new(index: usize, point: Point2<F>, origin: Point2<F>) -> Self {
        Self {
            index,
            point,
            radius2: origin.distance_squared(point),
            angle: predicates::pseudo_angle(origin, point),
        }
    }
}

impl<F: Float + fmt::Display> fmt::Display for PolarPoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[radius² {:.1}, angle {:.4} ({:.3}, {:.3})]",
            self.radius2, self.angle, self.point.x, self.point.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_keys() {
        let pp = PolarPoint::new(3, Point2::new(0.0_f64, 2.0), Point2::origin());
        assert_eq!(pp.index, 3);
        assert_eq!(pp.radius2, 4.0);
        assert_eq!(pp.angle, 1.0);
    }

    #[test]
    fn test_display() {
        let pp = PolarPoint::new(0, Point2::new(1.0_f64, 0.0), Point2::origin());
        assert_eq!(pp.to_string(), "[radius² 1.0, angle 0.0000 (1.000, 0.000)]");
    }
}
