//! Breadth-first traversal.
//!
//! Vertices are marked visited when they are *enqueued*, not when they are
//! dequeued, so a vertex reached through several in-flight paths enters the
//! queue exactly once.

use std::collections::VecDeque;

use crate::graph::{AdjacencyList, GraphError, VisitedSet};

/// Returns the vertices reachable from `start` in breadth-first order.
///
/// Vertices appear in non-decreasing hop distance from `start`; ties follow
/// adjacency-list insertion order. Unreachable vertices are never emitted.
///
/// # Panics
/// Panics if `start` is out of bounds.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(graph)))]
pub fn bfs(graph: &AdjacencyList, start: usize) -> Vec<usize> {
    assert!(
        graph.contains_vertex(start),
        "start vertex {start} out of bounds"
    );

    let mut visited = VisitedSet::new(graph.vertex_count());
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited.try_visit(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);

        for &neighbor in graph.neighbors(current) {
            if visited.try_visit(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(visited = order.len(), "bfs finished");

    order
}

/// Checked form of [`bfs`].
///
/// # Errors
/// Returns [`GraphError::VertexOutOfBounds`] if `start` is not a vertex of `graph`.
pub fn try_bfs(graph: &AdjacencyList, start: usize) -> Result<Vec<usize>, GraphError> {
    graph.check_vertex(start)?;
    Ok(bfs(graph, start))
}

/// Hop distance of every vertex from `start`, `None` where unreachable.
///
/// # Panics
/// Panics if `start` is out of bounds.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(graph)))]
pub fn bfs_distances(graph: &AdjacencyList, start: usize) -> Vec<Option<usize>> {
    assert!(
        graph.contains_vertex(start),
        "start vertex {start} out of bounds"
    );

    let mut dist = vec![None; graph.vertex_count()];
    let mut queue = VecDeque::new();

    dist[start] = Some(0);
    queue.push_back((start, 0usize));

    while let Some((u, d)) = queue.pop_front() {
        for &v in graph.neighbors(u) {
            if dist[v].is_none() {
                dist[v] = Some(d + 1);
                queue.push_back((v, d + 1));
            }
        }
    }

    dist
}

/// An iterator for Breadth-First Search (BFS).
///
/// Yields the same sequence as [`bfs`], one vertex per call to `next`.
pub struct Bfs<'a> {
    graph: &'a AdjacencyList,
    visited: VisitedSet,
    queue: VecDeque<usize>,
}

impl<'a> Bfs<'a> {
    /// Creates a new BFS iterator starting from `start`.
    ///
    /// # Panics
    /// Panics if `start` is out of bounds.
    pub fn new(graph: &'a AdjacencyList, start: usize) -> Self {
        assert!(
            graph.contains_vertex(start),
            "start vertex {start} out of bounds"
        );

        let mut visited = VisitedSet::new(graph.vertex_count());
        let mut queue = VecDeque::new();
        visited.try_visit(start);
        queue.push_back(start);

        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl Iterator for Bfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for &v in self.graph.neighbors(u) {
            if self.visited.try_visit(v) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }
}
