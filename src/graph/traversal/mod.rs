//! Traversal algorithms over [`AdjacencyList`].
//!
//! - `bfs`: queue-based breadth-first order
//! - `dfs`: stack-based and recursive depth-first pre-order
//!
//! Every traversal borrows the graph read-only and owns its visited state, so
//! one graph can be traversed any number of times with identical results.

pub mod bfs;
pub mod dfs;


pub use bfs::{bfs, bfs_distances, try_bfs, Bfs};
pub use dfs::{dfs, dfs_recursive, dfs_recursive_with, try_dfs, try_dfs_recursive, Dfs};

use serde::Serialize;

use crate::graph::{AdjacencyList, GraphError};

/// Selects one of the traversal algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Traversal {
    /// Breadth-first, see [`bfs`].
    Bfs,
    /// Depth-first with an explicit stack, see [`dfs`].
    Dfs,
    /// Depth-first by recursion, see [`dfs_recursive`].
    DfsRecursive,
}

impl Traversal {
    /// All traversals, in the order they are reported.
    pub const ALL: [Traversal; 3] = [Traversal::Bfs, Traversal::Dfs, Traversal::DfsRecursive];

    /// Console label printed before the visited vertices.
    pub fn label(self) -> &'static str {
        match self {
            Traversal::Bfs => "BFS",
            Traversal::Dfs => "DFS não recursiva",
            Traversal::DfsRecursive => "DFS recursiva",
        }
    }

    /// Runs this traversal over `graph` from `start`.
    ///
    /// # Panics
    /// Panics if `start` is out of bounds.
    pub fn run(self, graph: &AdjacencyList, start: usize) -> Vec<usize> {
        match self {
            Traversal::Bfs => bfs(graph, start),
            Traversal::Dfs => dfs(graph, start),
            Traversal::DfsRecursive => dfs_recursive(graph, start),
        }
    }

    /// Checked form of [`Traversal::run`].
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfBounds`] if `start` is not a vertex of `graph`.
    pub fn try_run(self, graph: &AdjacencyList, start: usize) -> Result<Vec<usize>, GraphError> {
        graph.check_vertex(start)?;
        Ok(self.run(graph, start))
    }

    /// Runs this traversal and wraps the result in a [`TraversalReport`].
    ///
    /// # Errors
    /// Same as [`Traversal::try_run`].
    pub fn report(self, graph: &AdjacencyList, start: usize) -> Result<TraversalReport, GraphError> {
        Ok(TraversalReport {
            traversal: self,
            start,
            order: self.try_run(graph, start)?,
        })
    }
}

/// The outcome of one traversal, ready for printing or serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalReport {
    /// Which algorithm produced `order`.
    pub traversal: Traversal,
    /// Start vertex.
    pub start: usize,
    /// Visited vertices in visitation order.
    pub order: Vec<usize>,
}

impl core::fmt::Display for TraversalReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:", self.traversal.label())?;
        for v in &self.order {
            write!(f, " {v}")?;
        }
        Ok(())
    }
}
