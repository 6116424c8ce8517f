mod arc;
pub mod loader;
mod node;
mod system;

pub use arc::Arc;
pub use node::{Node, NodeId};
pub use system::{Graph, GraphError};
