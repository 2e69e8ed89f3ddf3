use std::fmt::Debug;
use num_traits::PrimInt;

use crate::graph::NodeId;
use crate::Result;

/// Outcome of a single distance query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome<W> {
    /// Length of a shortest path from start to end
    Reachable(W),
    /// No directed path leads from start to end
    Unreachable,
}

impl<W: Copy> QueryOutcome<W> {
    pub fn distance(&self) -> Option<W> {
        match self {
            QueryOutcome::Reachable(d) => Some(*d),
            QueryOutcome::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, QueryOutcome::Reachable(_))
    }
}

impl<W> From<Option<W>> for QueryOutcome<W> {
    fn from(distance: Option<W>) -> Self {
        match distance {
            Some(d) => QueryOutcome::Reachable(d),
            None => QueryOutcome::Unreachable,
        }
    }
}

/// Trait for engines answering point-to-point distance queries on a fixed graph
pub trait DistanceQuery<W>
where
    W: PrimInt + Debug,
{
    /// Shortest distance from `start` to `end`, or `None` if unreachable
    fn distance(&mut self, start: NodeId, end: NodeId) -> Option<W>;

    /// Like [`distance`](Self::distance), but fails on nodes the graph does not know
    ///
    /// `start == end` is always answered with zero.
    fn checked_distance(&mut self, start: NodeId, end: NodeId) -> Result<Option<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Same as [`distance`](Self::distance), wrapped as a [`QueryOutcome`]
    fn query(&mut self, start: NodeId, end: NodeId) -> QueryOutcome<W> {
        self.distance(start, end).into()
    }
}
