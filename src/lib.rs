//! Dist Query - reusable shortest-distance queries on a static directed graph
//!
//! A graph is built once from an edge list of `(source, destination, weight)`
//! triples with non-negative integer weights. Node labels are arbitrary integers
//! and are mapped to a dense, sorted index space. The resulting
//! [`ShortestPathEngine`] then answers any number of independent
//! `(start, end)` distance queries with Dijkstra's algorithm, resetting its
//! scratch state at the start of every query.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{QueryScratch, ShortestPathEngine},
    DistanceQuery, QueryOutcome,
};
pub use config::{EngineConfig, StartPolicy};
/// Re-export main types for convenient use
pub use graph::{Edge, IndexedGraph, NodeId};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Negative edge weight {weight} on edge from {from} to {to}")]
    NegativeWeight { from: NodeId, to: NodeId, weight: i128 },

    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
