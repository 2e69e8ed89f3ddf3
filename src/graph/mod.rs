pub mod traits;
pub mod indexed;
pub mod generators;

pub use traits::{Graph, NodeId};
pub use indexed::{Edge, IndexedGraph};
