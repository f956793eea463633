//! Visited sets for graph traversals.
//!
//! A dense, word-packed bitset sized to the vertex count. Every traversal owns one
//! for its duration; the recursive DFS lets the caller thread its own through.

const WORD_BITS: usize = u64::BITS as usize;

/// A dense, word-packed visited set for fixed-size graphs.
///
/// Each vertex moves from unvisited to visited at most once between calls to
/// [`VisitedSet::clear`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    /// Creates a set of `len` unvisited vertices.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Number of vertices tracked.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set tracks no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Marks every vertex unvisited again.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Returns whether `node` has been visited.
    ///
    /// # Panics
    /// Panics if `node >= self.len()`.
    #[inline(always)]
    pub fn is_visited(&self, node: usize) -> bool {
        assert!(node < self.len, "vertex {node} out of bounds");
        self.words[node / WORD_BITS] & Self::mask(node) != 0
    }

    /// Returns `true` iff this call observed the node as not-yet-visited and marks it visited.
    ///
    /// # Panics
    /// Panics if `node >= self.len()`.
    #[inline(always)]
    pub fn try_visit(&mut self, node: usize) -> bool {
        assert!(node < self.len, "vertex {node} out of bounds");
        let word = &mut self.words[node / WORD_BITS];
        let mask = Self::mask(node);
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    /// Number of vertices currently marked visited.
    pub fn count_visited(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    #[inline(always)]
    fn mask(node: usize) -> u64 {
        1 << (node % WORD_BITS)
    }
}
