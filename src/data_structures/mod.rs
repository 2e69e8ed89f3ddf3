pub mod finalized;
pub mod priority_queue;

pub use finalized::FinalizedSet;
pub use priority_queue::Frontier;
