//! Floating-point geometric predicates.
//!
//! Everything here is plain `F` arithmetic with no tolerance and no
//! adaptive-precision fallback. Results near degeneracy follow whatever the
//! floating-point evaluation yields.
//!
//! # Winding convention
//!
//! [`orientation`] returns twice the signed area of a triangle: negative for
//! clockwise, positive for counter-clockwise (y axis up), zero for collinear.
//! The triangulators work in screen coordinates (y axis down), where a
//! triangle with *negative* orientation is seen counter-clockwise.
//! [`in_circumcircle`] expects that screen-counter-clockwise winding.

use crate::primitives::Point2;
use num_traits::Float;

/// Twice the signed area of triangle `a`, `b`, `c`.
///
/// | Result   | Meaning           |
/// |----------|-------------------|
/// | `< 0`    | clockwise         |
/// | `> 0`    | counter-clockwise |
/// | `== 0`   | collinear         |
///
/// # Example
///
/// ```
/// use circumsweep::predicates::orientation;
/// use circumsweep::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// let c = Point2::new(0.0, 1.0);
/// assert_eq!(orientation(a, b, c), 1.0);
/// assert_eq!(orientation(a, c, b), -1.0);
/// ```
#[inline]
pub fn orientation<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (b.x - a.x) * (c.y - b.y) - (c.x - b.x) * (b.y - a.y)
}

/// Returns true if `a`, `b`, `c` are exactly collinear.
#[inline]
pub fn is_collinear<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    orientation(a, b, c) == F::zero()
}

/// Returns true if `a`, `b`, `c` wind clockwise (y axis up).
#[inline]
pub fn is_clockwise<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    orientation(a, b, c) < F::zero()
}

/// Returns true if `a`, `b`, `c` wind counter-clockwise (y axis up).
#[inline]
pub fn is_counter_clockwise<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    orientation(a, b, c) > F::zero()
}

/// Tests if `p` lies strictly inside the circumcircle of `a`, `b`, `c`.
///
/// Evaluated as the 3x3 determinant of the coordinates of `a`, `b`, `c`
/// shifted by `p`, with their squared lengths in the last column.
///
/// The triangle must be wound counter-clockwise in screen coordinates, i.e.
/// `orientation(a, b, c) < 0`. For the opposite winding the answer is
/// inverted. The winding is not checked here; callers guarantee it.
///
/// # Example
///
/// ```
/// use circumsweep::predicates::in_circumcircle;
/// use circumsweep::Point2;
///
/// // orientation(a, b, c) < 0
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(0.5, 0.866);
/// let c = Point2::new(1.0, 0.0);
///
/// assert!(in_circumcircle(a, b, c, Point2::new(0.5, 0.29)));
/// assert!(!in_circumcircle(a, b, c, Point2::new(10.0, 10.0)));
/// ```
#[inline]
pub fn in_circumcircle<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, p: Point2<F>) -> bool {
    let ax = a.x - p.x;
    let ay = a.y - p.y;
    let bx = b.x - p.x;
    let by = b.y - p.y;
    let cx = c.x - p.x;
    let cy = c.y - p.y;

    let ap = ax * ax + ay * ay;
    let bp = bx * bx + by * by;
    let cp = cx * cx + cy * cy;

    ax * (by * cp - bp * cy) - ay * (bx * cp - bp * cx) + ap * (bx * cy - by * cx) < F::zero()
}

/// Computes the circumcenter of triangle `a`, `b`, `c`.
///
/// The common denominator is `2 * orientation(a, b, c)`, so collinear or
/// nearly collinear input yields non-finite coordinates. Callers must not
/// rely on the result for such triangles.
///
/// # Example
///
/// ```
/// use circumsweep::predicates::circumcenter;
/// use circumsweep::Point2;
///
/// let c = circumcenter(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
/// );
/// assert_eq!(c, Point2::new(5.0, 5.0));
/// ```
#[inline]
pub fn circumcenter<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Point2<F> {
    let two = F::one() + F::one();

    let ah = a.x * a.x + a.y * a.y;
    let bh = b.x * b.x + b.y * b.y;
    let ch = c.x * c.x + c.y * c.y;

    let dab_x = a.x - b.x;
    let dab_y = a.y - b.y;
    let dbc_x = b.x - c.x;
    let dbc_y = b.y - c.y;
    let dca_x = c.x - a.x;
    let dca_y = c.y - a.y;

    let d = F::one() / (two * (a.x * dbc_y + b.x * dca_y + c.x * dab_y));

    let x = (ah * dbc_y + bh * dca_y + ch * dab_y) * d;
    let y = -(ah * dbc_x + bh * dca_x + ch * dab_x) * d;

    Point2::new(x, y)
}

/// Squared circumradius of triangle `a`, `b`, `c`.
///
/// Non-finite (or NaN) for collinear input, see [`circumcenter`].
#[inline]
pub fn circumradius2<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    circumcenter(a, b, c).distance_squared(a)
}

/// A trig-free proxy for the angle of `p` around `center`.
///
/// Computes `1 - dx / (|dx| + |dy|)`, which lies in `[0, 2]` and increases
/// monotonically with the true angle within each half-plane above and below
/// the horizontal through `center`. Only useful for relative ordering and
/// bucketing. NaN when `p == center`.
#[inline]
pub fn pseudo_angle<F: Float>(center: Point2<F>, p: Point2<F>) -> F {
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    F::one() - dx / (dx.abs() + dy.abs())
}
