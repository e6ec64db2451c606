//! Network description validation.

use nw_core::NwError;
use nw_graph::validate::{validate_node_count, validate_pair};
use nw_graph::{Adjacency, AdjacencyList, DenseMatrix};

use crate::schema::{LATEST_VERSION, NetworkDef, Representation};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid edge #{index}: {source}")]
    InvalidEdge { index: usize, source: NwError },

    #[error("Invalid query #{index}: {source}")]
    InvalidQuery { index: usize, source: NwError },
}

/// Check a description without building any network.
///
/// Edges and queries go through the same rules as the live network, and the
/// node count is capped by the chosen representation. Nothing proportional
/// to the node count is allocated, so cost is O(E + Q).
pub fn validate_network_def(def: &NetworkDef) -> Result<(), ValidationError> {
    if def.version == 0 || def.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: def.version,
        });
    }

    if def.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            value: format!("{:?}", def.name),
            reason: "must not be empty".to_string(),
        });
    }

    let max_nodes = match def.representation {
        Representation::Dense => DenseMatrix::MAX_NODES,
        Representation::Sparse => AdjacencyList::MAX_NODES,
    };
    let nodes = validate_node_count(def.nodes, max_nodes).map_err(|err| {
        ValidationError::InvalidValue {
            field: "nodes".to_string(),
            value: def.nodes.to_string(),
            reason: err.reason().to_string(),
        }
    })?;

    for (index, edge) in def.edges.iter().enumerate() {
        validate_pair(edge.source, edge.target, nodes)
            .map_err(|source| ValidationError::InvalidEdge { index, source })?;
    }

    for (index, query) in def.queries.iter().enumerate() {
        validate_pair(query.source, query.target, nodes)
            .map_err(|source| ValidationError::InvalidQuery { index, source })?;
    }

    Ok(())
}
