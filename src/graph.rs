use std::fmt::Debug;
use std::hash::Hash;

/// Weighted undirected graph.
/// Should be implemented by the graph representing the network the shortest
/// path engine runs on. The graph is treated as read-only and immutable for
/// the whole lifetime of a computation.
pub trait WeightedGraph {
    /// Uniquely identify a node that belongs to the graph.
    type Node: Debug + Clone + Eq + Hash;
    /// Weight of an edge between two adjacent nodes.
    type Weight: Clone;

    /// Gets an iterator over all the nodes of the graph.
    /// Must yield every node exactly once.
    fn nodes(&self) -> impl Iterator<Item = Self::Node>;

    /// Gets an iterator over all the nodes adjacent to the given node.
    /// Adjacency must be symmetric: if `b` is a neighbor of `a` then `a` is a
    /// neighbor of `b`, with the same edge weight in both directions.
    fn neighbors(&self, node: &Self::Node) -> impl Iterator<Item = Self::Node>;

    /// Gets the weight of the edge between two adjacent nodes.
    /// Returns None if the nodes are not adjacent.
    fn edge_weight(&self, a: &Self::Node, b: &Self::Node) -> Option<Self::Weight>;
}
