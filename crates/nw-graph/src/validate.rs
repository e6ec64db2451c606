//! Argument validation shared by every network operation.

use nw_core::{InvalidReason, NwResult};

/// Check the requested node count against `2..=max_nodes` and convert it
/// to a storage size. Nothing is allocated here.
pub fn validate_node_count(nodes_number: i64, max_nodes: usize) -> NwResult<usize> {
    if nodes_number <= 1 {
        return Err(InvalidReason::TooFewNodes {
            nodes: nodes_number,
        }
        .into());
    }
    match usize::try_from(nodes_number) {
        Ok(nodes) if nodes <= max_nodes => Ok(nodes),
        _ => Err(InvalidReason::TooManyNodes {
            nodes: nodes_number,
            max: max_nodes,
        }
        .into()),
    }
}

/// Validate a 1-based `(source, target)` pair against a network of `nodes`
/// nodes and return the 0-based indices.
///
/// Rules are checked in order and the first violation is reported:
/// below range, above range, self loop.
pub fn validate_pair(source: i64, target: i64, nodes: usize) -> NwResult<(usize, usize)> {
    if source < 1 || target < 1 {
        return Err(InvalidReason::BelowRange {
            source_node: source,
            target_node: target,
        }
        .into());
    }

    let limit = i64::try_from(nodes).unwrap_or(i64::MAX);
    if source > limit || target > limit {
        return Err(InvalidReason::AboveRange {
            source_node: source,
            target_node: target,
            nodes,
        }
        .into());
    }

    if source == target {
        return Err(InvalidReason::SelfLoop { node: source }.into());
    }

    // Both values are in 1..=nodes here, so the casts are lossless.
    Ok((source as usize - 1, target as usize - 1))
}

/// Validate a single 1-based node id and return its 0-based index.
pub fn validate_node(node: i64, nodes: usize) -> NwResult<usize> {
    let limit = i64::try_from(nodes).unwrap_or(i64::MAX);
    if node < 1 || node > limit {
        return Err(InvalidReason::NodeOutOfRange { node, nodes }.into());
    }
    Ok(node as usize - 1)
}
