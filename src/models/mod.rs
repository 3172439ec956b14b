pub mod chain;
pub mod node;

pub use chain::{Chain, ChainSnapshot, ChainStep, Cursor, Direction, NodeSnapshot};
pub use node::Node;
