//! # `adjwalk` - Adjacency-List Graph Traversals
//!
//! Breadth-first and depth-first traversals over a small, immutable
//! adjacency-list graph, with the visitation order as the primary output.
//!
//! ## Traversals
//!
//! 1. **BFS** (`bfs`, `Bfs`):
//!    - FIFO frontier
//!    - Vertices are marked visited when enqueued
//!    - Emits vertices in non-decreasing hop distance from the start
//!
//! 2. **Iterative DFS** (`dfs`, `Dfs`):
//!    - LIFO frontier, no call-stack recursion
//!    - Vertices are marked visited when popped; stale stack entries are skipped
//!    - Neighbours are pushed in reverse so the order matches the recursive form
//!
//! 3. **Recursive DFS** (`dfs_recursive`, `dfs_recursive_with`):
//!    - Strict pre-order
//!    - The visited set is an explicit `&mut` borrow threaded through each call
//!
//! All three emit exactly the vertices reachable from the start vertex, each
//! once. Unreachable vertices are silently left out. Panicking entry points
//! assert that the start vertex is in range; the `try_*` forms return a
//! [`GraphError`] instead.
//!
//! ## Example
//!
//! ```rust
//! use adjwalk::graph::traversal::{bfs, dfs, dfs_recursive};
//! use adjwalk::AdjacencyList;
//!
//! // 0 -> 1,2 ; 1 -> 3 ; 2 -> 3
//! let graph = AdjacencyList::from_adjacency(vec![vec![1, 2], vec![3], vec![3], vec![]]);
//!
//! assert_eq!(bfs(&graph, 0), vec![0, 1, 2, 3]);
//! assert_eq!(dfs(&graph, 0), vec![0, 1, 3, 2]);
//! assert_eq!(dfs_recursive(&graph, 0), dfs(&graph, 0));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod fixture;
pub mod graph;

pub use graph::{AdjacencyList, GraphError, Traversal, TraversalReport, VisitedSet};

// The graph is shared read-only between traversals.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdjacencyList>();
};
