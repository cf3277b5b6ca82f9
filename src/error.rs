//! Error types for triangulation sessions.

use thiserror::Error;

/// Errors that can occur while computing a Delaunay triangulation or its
/// Voronoi dual.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VoronoiError {
    /// The Voronoi dual was requested before the Delaunay triangulation.
    #[error("delaunay triangulation needs to be calculated first")]
    DelaunayNotComputed,

    /// No hull edge is visible from a point being inserted by the sweep.
    ///
    /// Only reachable when earlier numerical error or malformed input broke
    /// the hull's geometric invariants.
    #[error("no visible hull edge for input point {point}: hull is inconsistent")]
    NoVisibleHullEdge {
        /// Index of the offending point in the input slice.
        point: usize,
    },

    /// The angular hull hash holds no live hull node.
    #[error("hull hash exhausted while locating input point {point}")]
    HashExhausted {
        /// Index of the offending point in the input slice.
        point: usize,
    },

    /// The viewport used for clipping unbounded Voronoi edges is unusable.
    #[error("invalid viewport {width} x {height}: dimensions must be positive and finite")]
    InvalidViewport {
        /// Requested viewport width.
        width: f64,
        /// Requested viewport height.
        height: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            VoronoiError::DelaunayNotComputed.to_string(),
            "delaunay triangulation needs to be calculated first"
        );
        assert_eq!(
            VoronoiError::NoVisibleHullEdge { point: 7 }.to_string(),
            "no visible hull edge for input point 7: hull is inconsistent"
        );
        assert!(VoronoiError::InvalidViewport {
            width: -1.0,
            height: 2.0
        }
        .to_string()
        .contains("-1 x 2"));
    }
}
