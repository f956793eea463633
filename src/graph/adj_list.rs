//! An immutable adjacency-list directed graph.
//!
//! Vertices are the dense identifiers `0..n`. Each vertex owns an ordered list of
//! out-neighbours, and that order is the order traversals explore edges in.
//! Undirected graphs are expressed by listing every edge in both directions.

use serde::Serialize;

use crate::graph::error::GraphError;

/// A read-only adjacency list graph.
///
/// Built once from per-vertex neighbour lists and never mutated afterwards, so a
/// single instance can be borrowed by any number of traversals.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_adjacency` | \(O(n + m)\) | Validates every edge once |
/// | `neighbors` | \(O(1)\) | Borrows the stored slice |
/// | `out_degree` | \(O(1)\) | returns `Vec::len` |
/// | `edge_count` | \(O(n)\) | Sums the list lengths |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdjacencyList {
    adjacency: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Creates a graph from adjacency lists.
    ///
    /// Duplicate neighbours and self-loops are kept as given.
    ///
    /// # Panics
    /// Panics if any neighbour index is out of bounds.
    pub fn from_adjacency(adjacency_lists: Vec<Vec<usize>>) -> Self {
        match Self::try_from_adjacency(adjacency_lists) {
            Ok(graph) => graph,
            Err(e) => panic!("{e}"),
        }
    }

    /// Creates a graph from adjacency lists, rejecting dangling edges.
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeOutOfBounds`] for the first neighbour that is not a
    /// vertex of the graph.
    pub fn try_from_adjacency(adjacency_lists: Vec<Vec<usize>>) -> Result<Self, GraphError> {
        let vertex_count = adjacency_lists.len();
        for (u, nbrs) in adjacency_lists.iter().enumerate() {
            if let Some(&v) = nbrs.iter().find(|&&v| v >= vertex_count) {
                return Err(GraphError::EdgeOutOfBounds {
                    from: u,
                    to: v,
                    vertex_count,
                });
            }
        }
        Ok(Self {
            adjacency: adjacency_lists,
        })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the number of directed edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns `true` if `vertex` names a vertex of this graph.
    #[inline]
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Checks that `vertex` is in range.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfBounds`] otherwise.
    pub fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfBounds {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Returns the out-degree of a vertex.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    #[inline]
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).len()
    }

    /// Returns the out-neighbours of a vertex in insertion order.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    #[inline]
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        assert!(self.contains_vertex(vertex), "vertex {vertex} out of bounds");
        &self.adjacency[vertex]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_adjacency_basic() {
        // 0 -> 1, 2
        // 1 -> 2
        // 2 ->
        let graph = AdjacencyList::from_adjacency(vec![vec![1, 2], vec![2], vec![]]);

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.neighbors(0), &[1, 2]);
        assert_eq!(graph.out_degree(1), 1);
        assert_eq!(graph.out_degree(2), 0);
        assert!(graph.contains_vertex(2));
        assert!(!graph.contains_vertex(3));
    }

    #[test]
    fn test_keeps_duplicates_and_self_loops() {
        let graph = AdjacencyList::from_adjacency(vec![vec![0, 1, 1], vec![]]);
        assert_eq!(graph.neighbors(0), &[0, 1, 1]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_try_from_adjacency_rejects_dangling_edge() {
        let err = AdjacencyList::try_from_adjacency(vec![vec![1], vec![0, 5]]).unwrap_err();
        assert_eq!(
            err,
            GraphError::EdgeOutOfBounds {
                from: 1,
                to: 5,
                vertex_count: 2
            }
        );
    }

    #[test]
    #[should_panic(expected = "edge 0->3 out of bounds for n=2")]
    fn test_from_adjacency_panics_on_dangling_edge() {
        let _ = AdjacencyList::from_adjacency(vec![vec![3], vec![]]);
    }

    #[test]
    #[should_panic(expected = "vertex 4 out of bounds")]
    fn test_neighbors_out_of_bounds() {
        let graph = AdjacencyList::from_adjacency(vec![vec![]]);
        let _ = graph.neighbors(4);
    }

    #[test]
    fn test_check_vertex() {
        let graph = AdjacencyList::from_adjacency(vec![vec![], vec![]]);
        assert!(graph.check_vertex(1).is_ok());
        assert_eq!(
            graph.check_vertex(2),
            Err(GraphError::VertexOutOfBounds {
                vertex: 2,
                vertex_count: 2
            })
        );
    }

    #[test]
    fn test_empty_graph() {
        let graph = AdjacencyList::default();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_serializes_as_adjacency_lists() {
        let graph = AdjacencyList::from_adjacency(vec![vec![1], vec![0]]);
        let json = serde_json::to_string(&graph).unwrap();
        assert_eq!(json, r#"{"adjacency":[[1],[0]]}"#);
    }
}
