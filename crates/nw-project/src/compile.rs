//! Compile a validated description into a live network.

use nw_core::NwResult;
use nw_graph::{AdjacencyList, DenseMatrix, Network, NetworkBuilder};

use crate::ProjectResult;
use crate::schema::{NetworkDef, Representation};
use crate::validate::validate_network_def;

/// A network built from a description, in whichever representation the
/// description asked for.
#[derive(Debug, Clone)]
pub enum LoadedNetwork {
    Dense(Network<DenseMatrix>),
    Sparse(Network<AdjacencyList>),
}

impl LoadedNetwork {
    pub fn representation(&self) -> Representation {
        match self {
            LoadedNetwork::Dense(_) => Representation::Dense,
            LoadedNetwork::Sparse(_) => Representation::Sparse,
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            LoadedNetwork::Dense(n) => n.node_count(),
            LoadedNetwork::Sparse(n) => n.node_count(),
        }
    }

    pub fn edge_count(&self) -> usize {
        match self {
            LoadedNetwork::Dense(n) => n.edge_count(),
            LoadedNetwork::Sparse(n) => n.edge_count(),
        }
    }

    pub fn query(&self, source: i64, target: i64) -> NwResult<bool> {
        match self {
            LoadedNetwork::Dense(n) => n.query(source, target),
            LoadedNetwork::Sparse(n) => n.query(source, target),
        }
    }

    pub fn query_batch(&self, pairs: &[(i64, i64)]) -> Vec<NwResult<bool>> {
        match self {
            LoadedNetwork::Dense(n) => n.query_batch(pairs),
            LoadedNetwork::Sparse(n) => n.query_batch(pairs),
        }
    }

    pub fn matrix_copy(&self) -> Vec<Vec<bool>> {
        match self {
            LoadedNetwork::Dense(n) => n.matrix_copy(),
            LoadedNetwork::Sparse(n) => n.matrix_copy(),
        }
    }
}

/// Validate `def` and build its network.
pub fn build_network(def: &NetworkDef) -> ProjectResult<LoadedNetwork> {
    validate_network_def(def)?;

    let mut builder = NetworkBuilder::new(def.nodes);
    builder.connect_all(def.edges.iter().map(|e| (e.source, e.target)));

    let network = match def.representation {
        Representation::Dense => LoadedNetwork::Dense(builder.build()?),
        Representation::Sparse => LoadedNetwork::Sparse(builder.build_with()?),
    };
    tracing::debug!(
        name = %def.name,
        nodes = network.node_count(),
        edges = network.edge_count(),
        "compiled network"
    );
    Ok(network)
}

/// Result of one declared query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOutcome {
    pub source: i64,
    pub target: i64,
    pub reachable: bool,
    pub expect: Option<bool>,
}

impl QueryOutcome {
    /// False only when the description asserted a different answer.
    pub fn matches(&self) -> bool {
        self.expect.is_none_or(|expected| expected == self.reachable)
    }
}

/// Build the network and evaluate every declared query, in file order.
pub fn check_queries(def: &NetworkDef) -> ProjectResult<Vec<QueryOutcome>> {
    let network = build_network(def)?;
    let pairs: Vec<(i64, i64)> = def.queries.iter().map(|q| (q.source, q.target)).collect();

    let mut outcomes = Vec::with_capacity(pairs.len());
    for (query, result) in def.queries.iter().zip(network.query_batch(&pairs)) {
        outcomes.push(QueryOutcome {
            source: query.source,
            target: query.target,
            reachable: result?,
            expect: query.expect,
        });
    }
    Ok(outcomes)
}
