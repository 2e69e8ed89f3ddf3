use std::fmt::Debug;
use std::sync::{Arc, OnceLock};

use log::{debug, log_enabled, trace, warn, Level};
use num_traits::PrimInt;
use rayon::prelude::*;

use crate::algorithm::DistanceQuery;
use crate::config::{EngineConfig, StartPolicy};
use crate::data_structures::{FinalizedSet, Frontier};
use crate::graph::{Edge, Graph, IndexedGraph, NodeId};
use crate::{Error, Result};

/// Working state of one distance query
///
/// Everything in here is reset at the start of a query and meaningless once it
/// returns. One scratch serves one query at a time; give each thread its own
/// to run queries concurrently against a shared graph.
#[derive(Debug)]
pub struct QueryScratch<W>
where
    W: PrimInt + Debug,
{
    /// Best known distance from the start, by dense position (`None` is infinity)
    distances: Vec<Option<W>>,
    /// Positions whose distance is final
    finalized: FinalizedSet,
    /// Candidates by tentative distance, stale duplicates allowed
    frontier: Frontier<usize, W>,
    /// Nodes finalized by the last query
    settled: usize,
    /// Frontier insertions made by the last query
    pushes: usize,
}

impl<W> QueryScratch<W>
where
    W: PrimInt + Debug,
{
    /// Creates scratch state sized for a graph with `node_count` nodes
    pub fn new(node_count: usize) -> Self {
        QueryScratch {
            distances: vec![None; node_count],
            finalized: FinalizedSet::with_capacity(node_count),
            frontier: Frontier::with_capacity(node_count),
            settled: 0,
            pushes: 0,
        }
    }

    /// Number of nodes finalized by the last query
    pub fn settled_count(&self) -> usize {
        self.settled
    }

    /// Number of frontier insertions made by the last query
    pub fn frontier_pushes(&self) -> usize {
        self.pushes
    }

    /// Zeroes the statistics; called on every query, including early exits
    fn clear_stats(&mut self) {
        self.settled = 0;
        self.pushes = 0;
    }

    fn reset(&mut self, node_count: usize) {
        self.distances.clear();
        self.distances.resize(node_count, None);
        self.finalized.reset(node_count);
        self.frontier.clear();
        self.clear_stats();
    }

    fn settle(&mut self, index: usize) -> bool {
        let fresh = self.finalized.insert(index);
        if fresh {
            self.settled += 1;
        }
        fresh
    }

    fn push(&mut self, index: usize, distance: W) {
        self.frontier.push(index, distance);
        self.pushes += 1;
    }
}

/// Classic Dijkstra query engine over a fixed graph
///
/// Built once from an edge list, then asked for any number of `(start, end)`
/// distances. The graph is immutable and shared behind an [`Arc`]; the engine
/// additionally owns one [`QueryScratch`] for the `&mut self` query path.
#[derive(Debug)]
pub struct ShortestPathEngine<W = i64>
where
    W: PrimInt + Debug,
{
    graph: Arc<IndexedGraph<W>>,
    scratch: QueryScratch<W>,
    config: EngineConfig,
    /// Dedicated pool for batched queries, built on first use
    pool: OnceLock<Option<rayon::ThreadPool>>,
}

impl<W> ShortestPathEngine<W>
where
    W: PrimInt + Debug,
{
    /// Builds an engine from `(source, destination, weight)` triples
    ///
    /// Fails with [`Error::NegativeWeight`] if any weight is negative.
    pub fn new<I>(triples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId, W)>,
    {
        Ok(Self::from_graph(Arc::new(IndexedGraph::from_triples(triples)?)))
    }

    /// Builds an engine from an edge list
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = Edge<W>>,
    {
        Ok(Self::from_graph(Arc::new(IndexedGraph::from_edges(edges)?)))
    }

    /// Creates an engine over an already built, possibly shared, graph
    pub fn from_graph(graph: Arc<IndexedGraph<W>>) -> Self {
        let scratch = QueryScratch::new(graph.node_count());
        ShortestPathEngine {
            graph,
            scratch,
            config: EngineConfig::default(),
            pool: OnceLock::new(),
        }
    }

    /// Replace the engine configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self.pool = OnceLock::new();
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The underlying graph
    pub fn graph(&self) -> &Arc<IndexedGraph<W>> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.graph.contains_node(node)
    }

    /// Dense position of a node label
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.graph.index_of(node)
    }

    /// The engine-owned scratch, holding statistics of the last `&mut self` query
    pub fn last_scratch(&self) -> &QueryScratch<W> {
        &self.scratch
    }

    /// Creates fresh scratch state sized for this engine's graph
    pub fn new_scratch(&self) -> QueryScratch<W> {
        QueryScratch::new(self.graph.node_count())
    }

    /// Answers a query using caller-owned scratch state
    ///
    /// Only reads the engine, so several threads may call this at once as long
    /// as each brings its own scratch.
    pub fn distance_with(
        &self,
        scratch: &mut QueryScratch<W>,
        start: NodeId,
        end: NodeId,
    ) -> Option<W> {
        shortest_distance(&self.graph, scratch, &self.config, start, end)
    }
}

impl<W> ShortestPathEngine<W>
where
    W: PrimInt + Debug + Send + Sync,
{
    /// Answers many queries in parallel, one scratch per rayon worker
    ///
    /// Results line up with `pairs` by position.
    pub fn distances_batch(&self, pairs: &[(NodeId, NodeId)]) -> Vec<Option<W>> {
        let run = || {
            pairs
                .par_iter()
                .map_init(
                    || self.new_scratch(),
                    |scratch, &(start, end)| self.distance_with(scratch, start, end),
                )
                .collect::<Vec<_>>()
        };

        match self.batch_pool() {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    /// The configured batch pool, or `None` for the global rayon pool
    ///
    /// Built once per engine configuration and reused by later batches.
    fn batch_pool(&self) -> Option<&rayon::ThreadPool> {
        let threads = self.config.batch_threads;
        if threads == 0 {
            return None;
        }

        self.pool
            .get_or_init(|| match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                Ok(pool) => Some(pool),
                Err(err) => {
                    warn!(
                        "Could not build a {}-thread pool ({}), using the global pool",
                        threads, err
                    );
                    None
                }
            })
            .as_ref()
    }
}

impl<W> DistanceQuery<W> for ShortestPathEngine<W>
where
    W: PrimInt + Debug,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn distance(&mut self, start: NodeId, end: NodeId) -> Option<W> {
        shortest_distance(&self.graph, &mut self.scratch, &self.config, start, end)
    }

    fn checked_distance(&mut self, start: NodeId, end: NodeId) -> Result<Option<W>> {
        if start == end {
            return Ok(Some(W::zero()));
        }
        for node in [start, end] {
            if !self.graph.contains_node(node) {
                return Err(Error::UnknownNode(node));
            }
        }
        Ok(self.distance(start, end))
    }
}

/// Point-to-point Dijkstra from `start`, stopping as soon as `end` is settled
fn shortest_distance<W>(
    graph: &IndexedGraph<W>,
    scratch: &mut QueryScratch<W>,
    config: &EngineConfig,
    start: NodeId,
    end: NodeId,
) -> Option<W>
where
    W: PrimInt + Debug,
{
    scratch.clear_stats();

    if start == end {
        return Some(W::zero());
    }

    if config.start_policy == StartPolicy::RequireOutgoing && !graph.has_outgoing(start) {
        debug!("Query {} -> {}: start has no outgoing edges", start, end);
        return None;
    }

    let (Some(start_index), Some(end_index)) = (graph.index_of(start), graph.index_of(end)) else {
        debug!("Query {} -> {}: node not in graph", start, end);
        return None;
    };

    let node_count = graph.node_count();
    scratch.reset(node_count);
    scratch.distances[start_index] = Some(W::zero());
    scratch.push(start_index, W::zero());

    while !scratch.finalized.is_full() {
        let Some((u, _)) = scratch.frontier.pop() else {
            break;
        };

        // A node popped again through a stale entry is already settled
        if !scratch.settle(u) {
            continue;
        }

        let Some(dist_u) = scratch.distances[u] else {
            continue;
        };

        if u == end_index {
            debug!(
                "Query {} -> {}: found distance {:?} after settling {} nodes",
                start,
                end,
                dist_u,
                scratch.settled
            );
            return Some(dist_u);
        }

        let Some(label) = graph.node_at(u) else {
            continue;
        };
        let Some(edges) = graph.neighbors(label) else {
            continue;
        };

        for &(neighbor, weight) in edges {
            let Some(v) = graph.index_of(neighbor) else {
                continue;
            };
            if scratch.finalized.contains(v) {
                continue;
            }

            // An overflowing sum can never beat a representable distance
            if let Some(candidate) = dist_u.checked_add(&weight) {
                if scratch.distances[v].map_or(true, |current| candidate < current) {
                    if log_enabled!(Level::Trace) {
                        trace!(
                            "Relax {} -> {}: {:?} -> {:?}",
                            label,
                            neighbor,
                            scratch.distances[v],
                            candidate
                        );
                    }
                    scratch.distances[v] = Some(candidate);
                }
            }

            if let Some(dist_v) = scratch.distances[v] {
                scratch.push(v, dist_v);
            }
        }
    }

    debug!(
        "Query {} -> {}: unreachable, frontier exhausted after settling {} of {} nodes",
        start,
        end,
        scratch.settled,
        node_count
    );
    None
}
