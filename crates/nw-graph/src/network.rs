//! The reachability network.

use nw_core::{NodeId, NwResult};
use rayon::prelude::*;

use crate::adjacency::{Adjacency, DenseMatrix};
use crate::search;
use crate::validate;

/// A fixed-size, undirected, loop-free network of nodes.
///
/// Nodes are addressed by 1-based ids in `1..=N` where `N` is chosen at
/// construction and never changes. Edges are only ever added.
///
/// The storage backend `A` is a representation choice; every backend
/// answers every operation identically. `Network::new` uses the dense
/// matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network<A = DenseMatrix> {
    adjacency: A,
}

impl Network<DenseMatrix> {
    /// Create a network of `nodes_number` nodes backed by a dense matrix.
    ///
    /// Fails with `InvalidArgument` when `nodes_number <= 1` or above
    /// `DenseMatrix::MAX_NODES`.
    pub fn new(nodes_number: i64) -> NwResult<Self> {
        Self::with_representation(nodes_number)
    }
}

impl<A: Adjacency> Network<A> {
    /// Create a network of `nodes_number` nodes with the chosen backend.
    pub fn with_representation(nodes_number: i64) -> NwResult<Self> {
        let nodes = validate::validate_node_count(nodes_number, A::MAX_NODES)?;
        tracing::debug!(nodes, "allocated network");
        Ok(Self {
            adjacency: A::with_nodes(nodes),
        })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.node_count()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// Connect two distinct nodes. Connecting an existing pair is a no-op.
    ///
    /// Validation runs before any mutation, so an error leaves the
    /// network untouched.
    pub fn connect(&mut self, source: i64, target: i64) -> NwResult<()> {
        let (s, t) = validate::validate_pair(source, target, self.node_count())?;
        self.adjacency.insert_edge(s, t);
        tracing::trace!(source, target, "connected");
        Ok(())
    }

    /// Whether any path links `source` and `target`.
    pub fn query(&self, source: i64, target: i64) -> NwResult<bool> {
        let (s, t) = validate::validate_pair(source, target, self.node_count())?;
        Ok(search::reachable(&self.adjacency, s, t))
    }

    /// Whether `source` and `target` share an edge. No search is performed.
    pub fn is_connected(&self, source: i64, target: i64) -> NwResult<bool> {
        let (s, t) = validate::validate_pair(source, target, self.node_count())?;
        Ok(self.adjacency.has_edge(s, t))
    }

    /// Direct neighbors of `node`, ascending.
    pub fn neighbors(&self, node: i64) -> NwResult<Vec<NodeId>> {
        let idx = validate::validate_node(node, self.node_count())?;
        Ok(self
            .adjacency
            .neighbors(idx)
            .into_iter()
            .map(NodeId::from_index)
            .collect())
    }

    /// Deep copy of the adjacency matrix; entry `[i][j]` describes the edge
    /// between nodes `i + 1` and `j + 1`.
    pub fn matrix_copy(&self) -> Vec<Vec<bool>> {
        self.adjacency.to_matrix()
    }
}

impl<A: Adjacency + Sync> Network<A> {
    /// Answer many queries in parallel. Results keep the input order and
    /// each pair is validated on its own.
    pub fn query_batch(&self, pairs: &[(i64, i64)]) -> Vec<NwResult<bool>> {
        pairs
            .par_iter()
            .map(|&(source, target)| self.query(source, target))
            .collect()
    }
}
