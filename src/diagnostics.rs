//! Debug geometry emitted alongside a triangulation.
//!
//! Diagnostics are a write-only side channel for visual debugging: bounding
//! boxes, seed triangles, sweep origins and circumcircles. Nothing in the
//! crate reads them back.

use crate::bounds::Aabb2;
use crate::primitives::{Point2, Triangle};
use num_traits::Float;

/// Display color tag for a diagnostic shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticColor {
    Red,
    Yellow,
}

/// The shape of a diagnostic entry.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticShape<F> {
    /// A single marked vertex.
    Vertex(Point2<F>),
    /// An open polyline through the given points.
    Line(Vec<Point2<F>>),
    /// A circle outline.
    Circle {
        /// Center of the circle.
        center: Point2<F>,
        /// Radius of the circle.
        radius: F,
    },
}

/// A colored diagnostic shape.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticGeometry<F> {
    pub shape: DiagnosticShape<F>,
    pub color: DiagnosticColor,
}

impl<F: Float> DiagnosticGeometry<F> {
    pub fn vertex(color: DiagnosticColor, p: Point2<F>) -> Self {
        Self {
            shape: DiagnosticShape::Vertex(p),
            color,
        }
    }

    pub fn line(color: DiagnosticColor, points: Vec<Point2<F>>) -> Self {
        Self {
            shape: DiagnosticShape::Line(points),
            color,
        }
    }

    pub fn circle(color: DiagnosticColor, center: Point2<F>, radius: F) -> Self {
        Self {
            shape: DiagnosticShape::Circle { center, radius },
            color,
        }
    }

    /// The points describing the shape: one for a vertex or circle center,
    /// all of them for a polyline.
    pub fn points(&self) -> &[Point2<F>] {
        match &self.shape {
            DiagnosticShape::Vertex(p) => std::slice::from_ref(p),
            DiagnosticShape::Line(points) => points,
            DiagnosticShape::Circle { center, .. } => std::slice::from_ref(center),
        }
    }
}

/// Accumulates diagnostic shapes during one pass.
#[derive(Debug, Clone, Default)]
pub(crate) struct Diagnostics<F> {
    shapes: Vec<DiagnosticGeometry<F>>,
}

impl<F: Float> Diagnostics<F> {
    pub(crate) fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    pub(crate) fn clear(&mut self) {
        self.shapes.clear();
    }

    pub(crate) fn push(&mut self, shape: DiagnosticGeometry<F>) {
        self.shapes.push(shape);
    }

    pub(crate) fn bounding_box(&mut self, aabb: Aabb2<F>) {
        self.push(DiagnosticGeometry::line(DiagnosticColor::Red, aabb.outline()));
    }

    pub(crate) fn circumcircles(&mut self, triangles: &[Triangle<F>]) {
        self.shapes.extend(triangles.iter().map(|tri| {
            DiagnosticGeometry::circle(
                DiagnosticColor::Yellow,
                tri.circumcenter(),
                tri.circumradius_squared().sqrt(),
            )
        }));
    }

    pub(crate) fn shapes(&self) -> &[DiagnosticGeometry<F>] {
        &self.shapes
    }
}
