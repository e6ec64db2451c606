//! Breadth-first reachability over any adjacency backend.

use std::collections::VecDeque;

use crate::adjacency::Adjacency;

/// Whether `target` can be reached from `source` (0-based, distinct, in range).
///
/// Neighbors are expanded in ascending index order. Nodes are marked visited
/// when enqueued, so each node enters the frontier at most once.
pub(crate) fn reachable<A: Adjacency>(adjacency: &A, source: usize, target: usize) -> bool {
    if adjacency.has_edge(source, target) {
        tracing::trace!(source, target, "direct edge");
        return true;
    }

    // An isolated endpoint cannot be part of any path.
    if !adjacency.has_adjacent(source) || !adjacency.has_adjacent(target) {
        tracing::trace!(source, target, "isolated endpoint");
        return false;
    }

    let mut visited = vec![false; adjacency.node_count()];
    let mut frontier = VecDeque::new();
    visited[source] = true;
    frontier.push_back(source);

    while let Some(node) = frontier.pop_front() {
        for next in adjacency.neighbors(node) {
            if next == target {
                tracing::trace!(source, target, via = node, "target reached");
                return true;
            }
            if !visited[next] {
                visited[next] = true;
                frontier.push_back(next);
            }
        }
    }

    tracing::trace!(source, target, "frontier exhausted");
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::{AdjacencyList, DenseMatrix};

    fn chain<A: Adjacency>(nodes: usize) -> A {
        let mut adj = A::with_nodes(nodes);
        for i in 0..nodes - 1 {
            adj.insert_edge(i, i + 1);
        }
        adj
    }

    #[test]
    fn long_chain_is_traversed() {
        let dense: DenseMatrix = chain(50);
        assert!(reachable(&dense, 0, 49));
        assert!(reachable(&dense, 49, 0));

        let list: AdjacencyList = chain(50);
        assert!(reachable(&list, 0, 49));
    }

    #[test]
    fn isolated_endpoint_is_unreachable() {
        let mut adj = DenseMatrix::with_nodes(4);
        adj.insert_edge(0, 1);
        adj.insert_edge(1, 2);
        assert!(!reachable(&adj, 0, 3));
        assert!(!reachable(&adj, 3, 0));
    }

    #[test]
    fn separate_components_do_not_mix() {
        let mut adj = AdjacencyList::with_nodes(6);
        adj.insert_edge(0, 1);
        adj.insert_edge(1, 2);
        adj.insert_edge(3, 4);
        adj.insert_edge(4, 5);
        assert!(reachable(&adj, 0, 2));
        assert!(reachable(&adj, 5, 3));
        assert!(!reachable(&adj, 2, 3));
    }

    #[test]
    fn cycles_terminate() {
        let mut adj = DenseMatrix::with_nodes(5);
        adj.insert_edge(0, 1);
        adj.insert_edge(1, 2);
        adj.insert_edge(2, 0);
        adj.insert_edge(3, 4);
        assert!(!reachable(&adj, 0, 4));
    }
}
