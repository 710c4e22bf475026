//! Multigraph: an in-memory directed weighted multigraph
//!
//! Nodes carry unique, ordered values. Edges connect an ordered pair of
//! nodes and carry an ordered weight; several edges may join the same pair
//! as long as their weights differ, and self-loops are allowed.
//!
//! # Core Concepts
//!
//! - **Graph**: owns every node and edge and keeps them unique and ordered
//! - **Cursor**: a position in the global edge order
//!   (source, destination, weight), stable across [`Graph::erase_at`]
//! - **Snapshot**: the serde form of a graph
//!
//! # Example
//!
//! ```
//! use multigraph::Graph;
//!
//! let mut g: Graph<&str, u32> = Graph::from(["a", "b"]);
//! g.insert_edge(&"a", &"b", 3).unwrap();
//! g.insert_edge(&"a", &"a", 1).unwrap();
//!
//! let edges: Vec<_> = g.iter().collect();
//! assert_eq!(edges, vec![(&"a", &"a", &1u32), (&"a", &"b", &3u32)]);
//! ```

mod graph;

pub use graph::{
    Cursor, Endpoint, Graph, GraphError, GraphResult, GraphSnapshot, Iter, NodeId, Operation,
    SnapshotError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
