/// Which start nodes the query routine is willing to expand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartPolicy {
    /// A start node that never appears as an edge source is answered as
    /// unreachable without running the relaxation loop
    #[default]
    RequireOutgoing,
    /// Any node known to the graph is expanded, including destination-only
    /// nodes with no outgoing edges
    AnyNode,
}

/// Settings for a [`ShortestPathEngine`](crate::ShortestPathEngine)
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// How start nodes without outgoing edges are handled
    pub start_policy: StartPolicy,
    /// Worker threads for batched queries (0 uses the global rayon pool)
    pub batch_threads: usize,
}

impl EngineConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start node policy
    pub fn with_start_policy(mut self, policy: StartPolicy) -> Self {
        self.start_policy = policy;
        self
    }

    /// Set the number of worker threads used by batched queries
    pub fn with_batch_threads(mut self, threads: usize) -> Self {
        self.batch_threads = threads;
        self
    }
}
