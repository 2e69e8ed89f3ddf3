use std::fmt::Debug;
use num_traits::PrimInt;

/// External label of a vertex, as it appears in the input edge list
pub type NodeId = i64;

/// Trait representing an immutable weighted directed graph over labelled nodes
///
/// Every node also has a dense position in `0..node_count()`, assigned by
/// sorting the labels ascending. Algorithms index their scratch arrays by that
/// position.
pub trait Graph<W>: Debug
where
    W: PrimInt + Debug,
{
    /// Returns the number of distinct nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges included
    fn edge_count(&self) -> usize;

    /// Returns the dense position of a node label, if the node exists
    fn index_of(&self, node: NodeId) -> Option<usize>;

    /// Returns the node label at a dense position
    fn node_at(&self, index: usize) -> Option<NodeId>;

    /// Returns true if the node appears as the source of at least one edge
    fn has_outgoing(&self, node: NodeId) -> bool;

    /// Returns an iterator over the outgoing edges from a node, in input order
    fn outgoing_edges(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_>;

    /// Returns true if the node exists in the graph
    fn contains_node(&self, node: NodeId) -> bool {
        self.index_of(node).is_some()
    }
}
