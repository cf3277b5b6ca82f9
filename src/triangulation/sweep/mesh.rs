//! Flat half-edge mesh.
//!
//! Triangle `t` owns the half-edge slots `3t`, `3t + 1` and `3t + 2`. Slot `e`
//! stores the index of the input point the half-edge starts from, and runs to
//! the point stored in [`next_halfedge`]`(e)`. A parallel array maps every
//! slot to its twin in the adjacent triangle, or to [`EMPTY`] on the hull.

/// Marks a half-edge without a twin (hull boundary).
pub(crate) const EMPTY: usize = usize::MAX;

/// Next half-edge in the same triangle.
#[inline]
pub(crate) fn next_halfedge(e: usize) -> usize {
    if e % 3 == 2 {
        e - 2
    } else {
        e + 1
    }
}

/// Previous half-edge in the same triangle.
#[inline]
pub(crate) fn prev_halfedge(e: usize) -> usize {
    if e % 3 == 0 {
        e + 2
    } else {
        e - 1
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct HalfEdgeMesh {
    /// Point index per half-edge slot; each triple is one triangle.
    pub(crate) triangles: Vec<usize>,
    /// Twin slot per half-edge slot, or [`EMPTY`].
    pub(crate) halfedges: Vec<usize>,
}

impl HalfEdgeMesh {
    /// Reserves room for the triangulation of `n` points.
    pub(crate) fn with_capacity(n: usize) -> Self {
        let max_triangles = if n > 2 { 2 * n - 5 } else { 0 };
        Self {
            triangles: Vec::with_capacity(max_triangles * 3),
            halfedges: Vec::with_capacity(max_triangles * 3),
        }
    }

    /// Number of triangles.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Appends triangle `(i0, i1, i2)` and links its three half-edges to the
    /// given twins. Returns the first slot of the new triangle.
    pub(crate) fn add_triangle(
        &mut self,
        i0: usize,
        i1: usize,
        i2: usize,
        a: usize,
        b: usize,
        c: usize,
    ) -> usize {
        let t = self.triangles.len();

        self.triangles.extend_from_slice(&[i0, i1, i2]);
        self.halfedges.extend_from_slice(&[EMPTY, EMPTY, EMPTY]);

        self.link(t, a);
        self.link(t + 1, b);
        self.link(t + 2, c);

        t
    }

    /// Makes `a` and `b` twins. `b` may be [`EMPTY`].
    #[inline]
    pub(crate) fn link(&mut self, a: usize, b: usize) {
        self.halfedges[a] = b;
        if b != EMPTY {
            self.halfedges[b] = a;
        }
    }

    /// Twin of slot `e`, or [`EMPTY`].
    #[inline]
    pub(crate) fn twin(&self, e: usize) -> usize {
        self.halfedges[e]
    }

    /// Checks that every twin link is mutual.
    pub(crate) fn links_are_symmetric(&self) -> bool {
        self.halfedges
            .iter()
            .enumerate()
            .all(|(e, &f)| f == EMPTY || self.halfedges.get(f) == Some(&e))
    }
}
