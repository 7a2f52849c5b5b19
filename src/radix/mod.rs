mod error;
mod insert;
pub mod node;
mod traversal;
mod tree;

pub use error::{RadixError, RadixResult};
pub use node::{MethodTable, Node, NodeId, NodeKind};
pub use tree::RadixTree;
