//! The built-in demonstration graph.

use crate::graph::AdjacencyList;

/// Vertex every demonstration traversal starts from.
pub const START_VERTEX: usize = 0;

/// Builds the ten-vertex sample graph.
///
/// Every edge is listed in both directions, so the graph is effectively
/// undirected:
///
/// ```text
///         0
///        / \
///       1   2
///      / \   \
///     3   4   5
///        / \   \
///       6   7   8
///           |
///           9
/// ```
pub fn sample_graph() -> AdjacencyList {
    AdjacencyList::from_adjacency(vec![
        vec![1, 2],    // 0
        vec![0, 3, 4], // 1
        vec![0, 5],    // 2
        vec![1],       // 3
        vec![1, 6, 7], // 4
        vec![2, 8],    // 5
        vec![4],       // 6
        vec![4, 9],    // 7
        vec![5],       // 8
        vec![7],       // 9
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_graph_shape() {
        let graph = sample_graph();
        assert_eq!(graph.vertex_count(), 10);
        assert_eq!(graph.edge_count(), 18);

        // Symmetric edge lists.
        for u in 0..graph.vertex_count() {
            for &v in graph.neighbors(u) {
                assert!(graph.neighbors(v).contains(&u), "{u}->{v} has no reverse edge");
            }
        }
    }
}
