//! Error type for checked graph construction and traversal.

/// Errors reported by the checked (`try_*`) graph entry points.
///
/// The panicking entry points assert the same conditions instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex identifier is not below the graph's vertex count.
    VertexOutOfBounds {
        /// The offending vertex.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An adjacency list names a neighbour that does not exist.
    EdgeOutOfBounds {
        /// Source vertex of the edge.
        from: usize,
        /// Target vertex of the edge.
        to: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

impl core::fmt::Display for GraphError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::VertexOutOfBounds {
                vertex,
                vertex_count,
            } => write!(f, "vertex {vertex} out of bounds for n={vertex_count}"),
            Self::EdgeOutOfBounds {
                from,
                to,
                vertex_count,
            } => write!(f, "edge {from}->{to} out of bounds for n={vertex_count}"),
        }
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = GraphError::VertexOutOfBounds {
            vertex: 12,
            vertex_count: 10,
        };
        assert_eq!(e.to_string(), "vertex 12 out of bounds for n=10");

        let e = GraphError::EdgeOutOfBounds {
            from: 3,
            to: 7,
            vertex_count: 4,
        };
        assert_eq!(e.to_string(), "edge 3->7 out of bounds for n=4");
    }
}
