//! Adjacency storage backends.
//!
//! All indices here are 0-based and assumed valid: `Network` runs the
//! shared validation before anything reaches a backend.

use std::collections::BTreeSet;
use std::fmt;

/// Storage for an undirected, loop-free edge set over a fixed node count.
///
/// Implementations keep the relation symmetric: `insert_edge(a, b)` makes
/// both `has_edge(a, b)` and `has_edge(b, a)` true.
pub trait Adjacency: Clone + fmt::Debug {
    /// Largest node count this backend accepts. `Network` rejects anything
    /// above it before allocating.
    const MAX_NODES: usize;

    /// Allocate storage for `nodes` nodes with no edges.
    ///
    /// `nodes` must not exceed [`Self::MAX_NODES`].
    fn with_nodes(nodes: usize) -> Self
    where
        Self: Sized;

    /// Number of nodes this storage was allocated for.
    fn node_count(&self) -> usize;

    fn has_edge(&self, a: usize, b: usize) -> bool;

    /// Insert the undirected edge `a <-> b`. Re-inserting is a no-op.
    fn insert_edge(&mut self, a: usize, b: usize);

    /// Neighbors of `node` in ascending index order.
    fn neighbors(&self, node: usize) -> Vec<usize>;

    /// True if `node` has at least one neighbor.
    fn has_adjacent(&self, node: usize) -> bool {
        !self.neighbors(node).is_empty()
    }

    /// Number of undirected edges.
    fn edge_count(&self) -> usize;

    /// Dense N×N snapshot, independent of the storage.
    fn to_matrix(&self) -> Vec<Vec<bool>>;
}

/// Dense boolean matrix stored row-major in a single allocation.
///
/// Row `i` occupies `cells[i * nodes..(i + 1) * nodes]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix {
    nodes: usize,
    cells: Vec<bool>,
}

impl DenseMatrix {
    /// Row `node` of the matrix.
    pub fn row(&self, node: usize) -> &[bool] {
        let start = node * self.nodes;
        &self.cells[start..start + self.nodes]
    }
}

impl Adjacency for DenseMatrix {
    /// 32 768 nodes, a 1 GiB matrix. `MAX_NODES²` fits a 32-bit `usize`.
    const MAX_NODES: usize = 1 << 15;

    fn with_nodes(nodes: usize) -> Self {
        Self {
            nodes,
            cells: vec![false; nodes * nodes],
        }
    }

    fn node_count(&self) -> usize {
        self.nodes
    }

    fn has_edge(&self, a: usize, b: usize) -> bool {
        self.cells[a * self.nodes + b]
    }

    fn insert_edge(&mut self, a: usize, b: usize) {
        self.cells[a * self.nodes + b] = true;
        self.cells[b * self.nodes + a] = true;
    }

    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.row(node)
            .iter()
            .enumerate()
            .filter_map(|(i, &present)| present.then_some(i))
            .collect()
    }

    fn has_adjacent(&self, node: usize) -> bool {
        self.row(node).iter().any(|&present| present)
    }

    fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&present| present).count() / 2
    }

    fn to_matrix(&self) -> Vec<Vec<bool>> {
        (0..self.nodes).map(|i| self.row(i).to_vec()).collect()
    }
}

/// One ordered neighbor set per node. Memory grows with the edge count
/// instead of N², which suits large sparse networks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList {
    adjacent: Vec<BTreeSet<usize>>,
}

impl Adjacency for AdjacencyList {
    /// 16 777 216 nodes, one empty set each.
    const MAX_NODES: usize = 1 << 24;

    fn with_nodes(nodes: usize) -> Self {
        Self {
            adjacent: vec![BTreeSet::new(); nodes],
        }
    }

    fn node_count(&self) -> usize {
        self.adjacent.len()
    }

    fn has_edge(&self, a: usize, b: usize) -> bool {
        self.adjacent[a].contains(&b)
    }

    fn insert_edge(&mut self, a: usize, b: usize) {
        self.adjacent[a].insert(b);
        self.adjacent[b].insert(a);
    }

    fn neighbors(&self, node: usize) -> Vec<usize> {
        // BTreeSet iterates in ascending order.
        self.adjacent[node].iter().copied().collect()
    }

    fn has_adjacent(&self, node: usize) -> bool {
        !self.adjacent[node].is_empty()
    }

    fn edge_count(&self) -> usize {
        self.adjacent.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    fn to_matrix(&self) -> Vec<Vec<bool>> {
        let nodes = self.adjacent.len();
        self.adjacent
            .iter()
            .map(|set| {
                let mut row = vec![false; nodes];
                for &j in set {
                    row[j] = true;
                }
                row
            })
            .collect()
    }
}
