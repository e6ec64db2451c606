//! Incremental network builder.

use nw_core::NwResult;

use crate::adjacency::Adjacency;
use crate::network::Network;

/// Builder for constructing a network from an edge list.
///
/// Use `connect` and `connect_all` to record edges, then call `build()` to
/// validate them and produce a `Network`. Nothing is allocated until
/// `build()`, and the first invalid edge (in insertion order) is reported.
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    nodes_number: i64,
    edges: Vec<(i64, i64)>,
}

impl NetworkBuilder {
    /// Create a builder for a network of `nodes_number` nodes.
    pub fn new(nodes_number: i64) -> Self {
        Self {
            nodes_number,
            edges: Vec::new(),
        }
    }

    /// Record an edge between two 1-based node ids.
    pub fn connect(&mut self, source: i64, target: i64) -> &mut Self {
        self.edges.push((source, target));
        self
    }

    /// Record every edge yielded by `edges`.
    pub fn connect_all<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        self.edges.extend(edges);
        self
    }

    /// Number of recorded edges, duplicates included.
    pub fn pending_edges(&self) -> usize {
        self.edges.len()
    }

    /// Build a dense-matrix network.
    pub fn build(&self) -> NwResult<Network> {
        self.build_with()
    }

    /// Build a network with the chosen storage backend.
    pub fn build_with<A: Adjacency>(&self) -> NwResult<Network<A>> {
        let mut network = Network::<A>::with_representation(self.nodes_number)?;
        for &(source, target) in &self.edges {
            network.connect(source, target)?;
        }
        tracing::debug!(
            nodes = network.node_count(),
            edges = network.edge_count(),
            "built network"
        );
        Ok(network)
    }
}
