//! The graph container contract these data structures are meant to sit
//! alongside. Consumed, not implemented, here: a concrete
//! graph type is out of scope for this crate — these
//! traits exist only so algorithm collaborators have a typed interface to
//! depend on. `0` means "no such vertex/edge" throughout, matching every
//! other module's index convention.

/// An undirected graph: vertices `1..=n`, edges `1..=m`.
pub trait Graph {
    /// Number of vertices.
    fn n(&self) -> usize;
    /// Number of edges.
    fn m(&self) -> usize;

    /// The first edge in the graph's edge list, or `0`.
    fn first(&self) -> usize;
    /// The edge following `e` in the graph's edge list, or `0`.
    fn next(&self, e: usize) -> usize;

    /// The first edge incident on `u`, or `0`.
    fn first_at(&self, u: usize) -> usize;
    /// The edge following `e` in `u`'s incidence list, or `0`.
    fn next_at(&self, u: usize, e: usize) -> usize;

    /// One endpoint of `e`.
    fn left(&self, e: usize) -> usize;
    /// The other endpoint of `e`.
    fn right(&self, e: usize) -> usize;

    /// The endpoint of `e` that is not `u`.
    fn mate(&self, u: usize, e: usize) -> usize {
        if u == self.left(e) {
            self.right(e)
        } else {
            self.left(e)
        }
    }
}

/// A directed graph: every edge additionally has a distinguished tail and
/// head, with separate in/out incidence lists per vertex.
pub trait Digraph: Graph {
    /// The first edge directed into `u`, or `0`.
    fn first_in(&self, u: usize) -> usize;
    /// The edge following `e` in `u`'s in-incidence list, or `0`.
    fn next_in(&self, u: usize, e: usize) -> usize;
    /// The first edge directed out of `u`, or `0`.
    fn first_out(&self, u: usize) -> usize;
    /// The edge following `e` in `u`'s out-incidence list, or `0`.
    fn next_out(&self, u: usize, e: usize) -> usize;

    /// The source endpoint of `e`.
    fn tail(&self, e: usize) -> usize;
    /// The destination endpoint of `e`.
    fn head(&self, e: usize) -> usize;
}

/// A graph with a scalar weight (or length) on every edge.
pub trait WeightedGraph: Graph {
    /// The weight of edge `e`.
    fn weight(&self, e: usize) -> i64;
    /// Assign the weight of edge `e`.
    fn set_weight(&mut self, e: usize, w: i64);
}

/// A directed graph augmented with per-(vertex, edge) capacity, flow, cost,
/// and a minimum-flow requirement.
pub trait FlowGraph: Digraph {
    /// Residual capacity leaving `u` along `e`.
    fn cap(&self, u: usize, e: usize) -> i64;
    /// Current flow leaving `u` along `e`.
    fn f(&self, u: usize, e: usize) -> i64;
    /// Per-unit cost of flow leaving `u` along `e`.
    fn cost(&self, u: usize, e: usize) -> i64;
    /// The minimum required flow on `e`.
    fn min_flo(&self, e: usize) -> i64;

    /// Assign the capacity leaving `u` along `e`.
    fn set_cap(&mut self, u: usize, e: usize, c: i64);
    /// Assign the per-unit cost of flow leaving `u` along `e`.
    fn set_cost(&mut self, u: usize, e: usize, c: i64);
    /// Push `delta` additional units of flow from `u` along `e`.
    fn add_flow(&mut self, u: usize, e: usize, delta: i64);
}
