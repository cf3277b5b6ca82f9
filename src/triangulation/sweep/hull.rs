//! Advancing convex hull of the sweep: an arena-backed circular doubly
//! linked list plus an angular hash for locating hull edges near a point.

use super::mesh::EMPTY;
use crate::primitives::{Point2, PolarPoint};
use num_traits::Float;

/// Handle of a node in the hull arena.
pub(crate) type NodeId = usize;

#[derive(Debug, Clone)]
struct HullNode<F> {
    point: PolarPoint<F>,
    prev: NodeId,
    next: NodeId,
    /// Mesh slot of the half-edge running from this node to `next`.
    t: usize,
    removed: bool,
}

/// The hull, wound counter-clockwise in screen coordinates.
///
/// Removed nodes stay in the arena with their links intact: the hash may
/// still point at them, and a walk that just removed a node continues
/// through its links.
#[derive(Debug, Clone)]
pub(crate) struct Hull<F> {
    nodes: Vec<HullNode<F>>,
    start: NodeId,
    hash: Vec<Option<NodeId>>,
    center: Point2<F>,
}

impl<F: Float> Hull<F> {
    /// Builds the three-node hull of the seed triangle `(s0, s1, s2)`, whose
    /// edges occupy mesh slots 0, 1 and 2.
    pub(crate) fn new(center: Point2<F>, seed: [PolarPoint<F>; 3], point_count: usize) -> Self {
        let hash_len = (point_count as f64).sqrt().ceil() as usize + 2;

        let mut hull = Self {
            nodes: Vec::with_capacity(point_count),
            start: 0,
            hash: vec![None; hash_len],
            center,
        };

        for (i, p) in seed.into_iter().enumerate() {
            hull.nodes.push(HullNode {
                point: p,
                prev: (i + 2) % 3,
                next: (i + 1) % 3,
                t: i,
                removed: false,
            });
            hull.hash_node(i);
        }

        hull
    }

    #[inline]
    pub(crate) fn polar(&self, node: NodeId) -> &PolarPoint<F> {
        &self.nodes[node].point
    }

    #[inline]
    pub(crate) fn point(&self, node: NodeId) -> Point2<F> {
        self.nodes[node].point.point
    }

    /// Input index of the node's point.
    #[inline]
    pub(crate) fn index(&self, node: NodeId) -> usize {
        self.nodes[node].point.index
    }

    #[inline]
    pub(crate) fn next(&self, node: NodeId) -> NodeId {
        self.nodes[node].next
    }

    #[inline]
    pub(crate) fn prev(&self, node: NodeId) -> NodeId {
        self.nodes[node].prev
    }

    #[inline]
    pub(crate) fn t(&self, node: NodeId) -> usize {
        self.nodes[node].t
    }

    #[inline]
    pub(crate) fn set_t(&mut self, node: NodeId, t: usize) {
        self.nodes[node].t = t;
    }

    #[inline]
    pub(crate) fn is_removed(&self, node: NodeId) -> bool {
        self.nodes[node].removed
    }

    /// Inserts a node for `p` right after `prev`. Its mesh slot is unset.
    pub(crate) fn insert_after(&mut self, p: PolarPoint<F>, prev: NodeId) -> NodeId {
        let id = self.nodes.len();
        let next = self.nodes[prev].next;

        self.nodes.push(HullNode {
            point: p,
            prev,
            next,
            t: EMPTY,
            removed: false,
        });
        self.nodes[prev].next = id;
        self.nodes[next].prev = id;

        id
    }

    /// Unlinks `node` and tombstones it. Returns its (live) predecessor,
    /// which also becomes the walk start for [`Hull::live_nodes`].
    pub(crate) fn remove(&mut self, node: NodeId) -> NodeId {
        let (prev, next) = (self.nodes[node].prev, self.nodes[node].next);
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[node].removed = true;
        self.start = prev;
        prev
    }

    /// Bucket of `p` in the angular hash.
    pub(crate) fn hash_key(&self, p: &PolarPoint<F>) -> usize {
        let len = self.hash.len();
        let two = F::one() + F::one();
        let four = two + two;

        let angle = if p.point.y - self.center.y < F::zero() {
            -p.angle
        } else {
            p.angle
        };
        let scaled = (two + angle) / four * F::from(len).unwrap_or_else(F::zero);

        scaled.floor().to_usize().unwrap_or(0).min(len - 1)
    }

    /// Makes `node` the representative of its hash bucket.
    pub(crate) fn hash_node(&mut self, node: NodeId) {
        let key = self.hash_key(self.polar(node));
        self.hash[key] = Some(node);
    }

    /// Finds a live hull node starting from the bucket of `p`, probing the
    /// buckets circularly.
    pub(crate) fn find_start(&self, p: &PolarPoint<F>) -> Option<NodeId> {
        let len = self.hash.len();
        let key = self.hash_key(p);

        (0..len)
            .filter_map(|j| self.hash[(key + j) % len])
            .find(|&node| !self.is_removed(node))
    }

    /// Re-targets the live node whose mesh slot is `from` to `to`.
    ///
    /// Needed when an edge flip moves a hull half-edge to another slot.
    pub(crate) fn retarget(&mut self, from: usize, to: usize) {
        let mut node = self.start;
        loop {
            if self.nodes[node].t == from {
                self.nodes[node].t = to;
                return;
            }
            node = self.nodes[node].prev;
            if node == self.start {
                return;
            }
        }
    }

    /// Live nodes in hull order, starting from the most recent walk start.
    pub(crate) fn live_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        let start = self.start;
        let mut node = Some(start);
        std::iter::from_fn(move || {
            let current = node?;
            let next = self.nodes[current].next;
            node = (next != start).then_some(next);
            Some(current)
        })
    }
}
