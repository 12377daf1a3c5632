pub mod node;
pub mod query;

pub use node::{Bounds, NodeId, UiTree, UiTreeBuilder};
