//! Core graph data structures

mod arena;
mod cursor;
mod edge;
mod error;
mod iter;
mod node;
mod snapshot;
mod store;


pub use cursor::Cursor;
pub use error::{GraphError, GraphResult, Operation};
pub use iter::Iter;
pub use node::NodeId;
pub use snapshot::{Endpoint, GraphSnapshot, SnapshotError};
pub use store::Graph;
