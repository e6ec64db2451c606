//! nw-graph: undirected reachability networks for netreach.
//!
//! Provides:
//! - `Network`: fixed-size, loop-free, undirected network with BFS reachability
//! - Pluggable adjacency storage (dense matrix by default, neighbor lists for large N)
//! - Incremental builder that validates every edge before allocating
//!
//! # Example
//!
//! ```
//! use nw_graph::Network;
//!
//! let mut network = Network::new(4).unwrap();
//! network.connect(1, 2).unwrap();
//! network.connect(2, 3).unwrap();
//!
//! assert!(network.query(1, 3).unwrap());
//! assert!(!network.query(1, 4).unwrap());
//! ```

pub mod adjacency;
pub mod builder;
pub mod network;
pub(crate) mod search;
pub mod validate;

// Re-exports for ergonomics
pub use adjacency::{Adjacency, AdjacencyList, DenseMatrix};
pub use builder::NetworkBuilder;
pub use network::Network;
pub use nw_core::{InvalidReason, NodeId, NwError, NwResult};
