//! Depth-first traversals: one driven by an explicit stack, one by recursion.
//!
//! Both produce the same pre-order. The iterative form pushes neighbours in
//! reverse so that they pop in listed order; that is only there for ordering
//! compatibility with the recursive form, any push order would still visit the
//! same set.

use crate::graph::{AdjacencyList, GraphError, VisitedSet};

/// Returns the vertices reachable from `start` in depth-first pre-order,
/// using an explicit stack.
///
/// Vertices are marked on *pop*: a vertex may sit on the stack several times
/// and later copies are discarded.
///
/// # Panics
/// Panics if `start` is out of bounds.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(graph)))]
pub fn dfs(graph: &AdjacencyList, start: usize) -> Vec<usize> {
    let order: Vec<usize> = Dfs::new(graph, start).collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(visited = order.len(), "dfs finished");

    order
}

/// Checked form of [`dfs`].
///
/// # Errors
/// Returns [`GraphError::VertexOutOfBounds`] if `start` is not a vertex of `graph`.
pub fn try_dfs(graph: &AdjacencyList, start: usize) -> Result<Vec<usize>, GraphError> {
    graph.check_vertex(start)?;
    Ok(dfs(graph, start))
}

/// Returns the vertices reachable from `start` in depth-first pre-order,
/// by recursive descent.
///
/// Recursion depth grows with the longest path explored from `start`; for very
/// deep graphs prefer [`dfs`], which yields the same order without using the
/// call stack.
///
/// # Panics
/// Panics if `start` is out of bounds.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(graph)))]
pub fn dfs_recursive(graph: &AdjacencyList, start: usize) -> Vec<usize> {
    assert!(
        graph.contains_vertex(start),
        "start vertex {start} out of bounds"
    );

    let mut visited = VisitedSet::new(graph.vertex_count());
    let mut order = Vec::new();
    dfs_recursive_with(graph, start, &mut visited, &mut order);

    #[cfg(feature = "tracing")]
    tracing::trace!(visited = order.len(), "recursive dfs finished");

    order
}

/// Checked form of [`dfs_recursive`].
///
/// # Errors
/// Returns [`GraphError::VertexOutOfBounds`] if `start` is not a vertex of `graph`.
pub fn try_dfs_recursive(graph: &AdjacencyList, start: usize) -> Result<Vec<usize>, GraphError> {
    graph.check_vertex(start)?;
    Ok(dfs_recursive(graph, start))
}

/// Recursive DFS over caller-owned state.
///
/// Appends `start` and every vertex reachable from it that is not yet in
/// `visited` to `order`, in pre-order. The same `visited` borrow is threaded
/// through every level of the recursion, so reusing it across calls walks a
/// forest without revisiting shared vertices.
///
/// If `start` is already visited nothing is appended.
///
/// # Panics
/// Panics if `start` is out of bounds or `visited` is smaller than the graph.
pub fn dfs_recursive_with(
    graph: &AdjacencyList,
    start: usize,
    visited: &mut VisitedSet,
    order: &mut Vec<usize>,
) {
    assert!(
        visited.len() >= graph.vertex_count(),
        "visited set too small for vertex_count"
    );
    if !visited.try_visit(start) {
        return;
    }
    order.push(start);

    for &next in graph.neighbors(start) {
        if !visited.is_visited(next) {
            dfs_recursive_with(graph, next, visited, order);
        }
    }
}

/// An iterator for Depth-First Search (DFS).
///
/// Yields the same sequence as [`dfs`] and [`dfs_recursive`].
pub struct Dfs<'a> {
    graph: &'a AdjacencyList,
    visited: VisitedSet,
    stack: Vec<usize>,
}

impl<'a> Dfs<'a> {
    /// Creates a new DFS iterator starting from `start`.
    ///
    /// # Panics
    /// Panics if `start` is out of bounds.
    pub fn new(graph: &'a AdjacencyList, start: usize) -> Self {
        assert!(
            graph.contains_vertex(start),
            "start vertex {start} out of bounds"
        );

        Self {
            graph,
            visited: VisitedSet::new(graph.vertex_count()),
            stack: vec![start],
        }
    }
}

impl Iterator for Dfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let u = self.stack.pop()?;
            if !self.visited.try_visit(u) {
                continue;
            }

            // Reverse push: the first listed neighbour ends up on top.
            for &v in self.graph.neighbors(u).iter().rev() {
                if !self.visited.is_visited(v) {
                    self.stack.push(v);
                }
            }

            return Some(u);
        }
    }
}
