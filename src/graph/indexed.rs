use crate::graph::traits::{Graph, NodeId};
use crate::{Error, Result};
use log::info;
use num_traits::PrimInt;
use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;

/// A directed, weighted edge `source -> destination`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W = i64> {
    pub source: NodeId,
    pub destination: NodeId,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(source: NodeId, destination: NodeId, weight: W) -> Self {
        Edge {
            source,
            destination,
            weight,
        }
    }
}

impl<W> From<(NodeId, NodeId, W)> for Edge<W> {
    fn from((source, destination, weight): (NodeId, NodeId, W)) -> Self {
        Edge::new(source, destination, weight)
    }
}

/// An immutable directed graph built once from an edge list
///
/// Holds the adjacency map (source label -> `[(neighbor, weight)]`) and the
/// index map that assigns every distinct label a dense, sorted position.
#[derive(Debug, Clone)]
pub struct IndexedGraph<W = i64>
where
    W: PrimInt + Debug,
{
    /// Outgoing edges for each source node: node -> [(target, weight)]
    adjacency: HashMap<NodeId, Vec<(NodeId, W)>>,

    /// Dense position for each node label
    indexes: HashMap<NodeId, usize>,

    /// Node labels sorted ascending; `labels[indexes[id]] == id`
    labels: Vec<NodeId>,

    /// Total number of edges, parallel edges included
    edge_count: usize,
}

impl<W> IndexedGraph<W>
where
    W: PrimInt + Debug,
{
    /// Builds the graph from an edge list
    ///
    /// Fails with [`Error::NegativeWeight`] if any weight is below zero; all
    /// weights are checked before anything is built.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = Edge<W>>,
    {
        let edges: Vec<Edge<W>> = edges.into_iter().collect();

        if let Some(bad) = edges.iter().find(|e| e.weight < W::zero()) {
            return Err(Error::NegativeWeight {
                from: bad.source,
                to: bad.destination,
                // Only negative values get here, and every signed primitive fits in i128
                weight: bad.weight.to_i128().unwrap_or(i128::MIN),
            });
        }

        let mut adjacency: HashMap<NodeId, Vec<(NodeId, W)>> = HashMap::new();
        let mut distinct = BTreeSet::new();
        for edge in &edges {
            adjacency
                .entry(edge.source)
                .or_default()
                .push((edge.destination, edge.weight));
            distinct.insert(edge.source);
            distinct.insert(edge.destination);
        }

        // BTreeSet iterates ascending, which fixes the dense ordering
        let labels: Vec<NodeId> = distinct.into_iter().collect();
        let indexes = labels
            .iter()
            .enumerate()
            .map(|(position, &label)| (label, position))
            .collect();

        info!(
            "Built graph with {} nodes and {} edges",
            labels.len(),
            edges.len()
        );

        Ok(IndexedGraph {
            adjacency,
            indexes,
            labels,
            edge_count: edges.len(),
        })
    }

    /// Builds the graph from plain `(source, destination, weight)` triples
    pub fn from_triples<I>(triples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId, W)>,
    {
        Self::from_edges(triples.into_iter().map(Edge::from))
    }

    /// Returns all node labels in ascending order
    pub fn nodes(&self) -> &[NodeId] {
        &self.labels
    }

    /// Returns the outgoing edges of a node as a slice, if it is a source
    pub fn neighbors(&self, node: NodeId) -> Option<&[(NodeId, W)]> {
        self.adjacency.get(&node).map(Vec::as_slice)
    }
}

impl<W> Graph<W> for IndexedGraph<W>
where
    W: PrimInt + Debug,
{
    fn node_count(&self) -> usize {
        self.labels.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn index_of(&self, node: NodeId) -> Option<usize> {
        self.indexes.get(&node).copied()
    }

    fn node_at(&self, index: usize) -> Option<NodeId> {
        self.labels.get(index).copied()
    }

    fn has_outgoing(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    fn outgoing_edges(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_> {
        if let Some(edges) = self.adjacency.get(&node) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_indexes_follow_sorted_labels() {
        let graph: IndexedGraph =
            IndexedGraph::from_triples(vec![(40, -3, 1), (7, 40, 2), (-3, 7, 5)]).unwrap();

        assert_eq!(graph.nodes(), &[-3, 7, 40]);
        assert_eq!(graph.index_of(-3), Some(0));
        assert_eq!(graph.index_of(7), Some(1));
        assert_eq!(graph.index_of(40), Some(2));
        assert_eq!(graph.node_at(2), Some(40));
        assert_eq!(graph.index_of(8), None);
    }

    #[test]
    fn adjacency_preserves_input_order_and_parallel_edges() {
        let graph: IndexedGraph =
            IndexedGraph::from_triples(vec![(1, 3, 9), (1, 2, 4), (1, 3, 1)]).unwrap();

        let out: Vec<_> = graph.outgoing_edges(1).collect();
        assert_eq!(out, vec![(3, 9), (2, 4), (3, 1)]);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn destination_only_node_has_index_but_no_adjacency() {
        let graph: IndexedGraph = IndexedGraph::from_triples(vec![(0, 5, 2)]).unwrap();

        assert!(graph.contains_node(5));
        assert!(!graph.has_outgoing(5));
        assert!(graph.neighbors(5).is_none());
        assert_eq!(graph.outgoing_edges(5).count(), 0);
    }

    #[test]
    fn negative_weight_is_rejected() {
        let err = IndexedGraph::<i64>::from_triples(vec![(0, 1, 3), (1, 2, -4)]).unwrap_err();
        assert_eq!(
            err,
            Error::NegativeWeight {
                from: 1,
                to: 2,
                weight: -4
            }
        );
    }

    #[test]
    fn empty_edge_list_builds_empty_graph() {
        let graph = IndexedGraph::<i64>::from_edges(Vec::<Edge<i64>>::new()).unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
