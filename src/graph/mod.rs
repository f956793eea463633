//! Adjacency-list graphs and their traversals.
//!
//! - `adj_list`: the immutable graph representation
//! - `visited`: word-packed visited sets
//! - `traversal`: BFS and DFS (iterative and recursive)

pub mod adj_list;
pub mod error;
pub mod traversal;
pub mod visited;

pub use adj_list::AdjacencyList;
pub use error::GraphError;
pub use traversal::{Traversal, TraversalReport};
pub use visited::VisitedSet;
