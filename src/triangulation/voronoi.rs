//! Voronoi diagram computed as the dual of a Delaunay triangulation.
//!
//! The Voronoi diagram is the dual of the Delaunay triangulation:
//! - Each Delaunay triangle's circumcenter becomes a Voronoi vertex
//! - Each Delaunay edge shared by two triangles becomes a Voronoi edge
//! - Edges on the convex hull create unbounded edges, which only the
//!   sweep-circle path resolves by clipping them to a viewport
//!
//! Two triangles with the same circumcenter (four cocircular points) share a
//! degenerate Voronoi edge, which is never emitted.

use crate::primitives::{Edge, Point2};

/// A Voronoi diagram.
#[derive(Debug, Clone)]
pub struct VoronoiDiagram<F> {
    /// The Voronoi vertices (circumcenters of Delaunay triangles), one per
    /// triangle and in triangle order.
    pub vertices: Vec<Point2<F>>,

    /// Bounded edges between the circumcenters of adjacent triangles. Each
    /// undirected edge appears once.
    pub edges: Vec<Edge<F>>,

    /// Hull edges resolved into segments from a circumcenter to the viewport
    /// boundary. Always empty for the incremental algorithm.
    pub clipped: Vec<Edge<F>>,
}

impl<F> VoronoiDiagram<F> {
    /// An empty diagram, the dual of an empty triangulation.
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            clipped: Vec::new(),
        }
    }

    /// Iterates bounded edges followed by clipped hull edges.
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge<F>> + '_ {
        self.edges.iter().chain(self.clipped.iter())
    }

    /// Returns true if the diagram has no vertices and no edges.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty() && self.clipped.is_empty()
    }
}

impl<F> Default for VoronoiDiagram<F> {
    fn default() -> Self {
        Self::empty()
    }
}
