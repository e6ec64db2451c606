//! nw-core: stable foundation for netreach.
//!
//! Contains:
//! - ids (1-based node identifiers backed by 0-based matrix indices)
//! - error (the shared `InvalidArgument` error kind)

pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use error::{InvalidReason, NwError, NwResult};
pub use ids::NodeId;
