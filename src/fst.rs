//! The finished, immutable trie artifact.
//!
//! [`Fst`] owns every vector the builder produced: the 256-way bitmaps
//! for the dense levels, the label/indicator/LOUDS vectors for the
//! sparse levels, and the two position lists mapping terminal slots
//! back to input ranks. All state is read-only after construction, so
//! the artifact can be shared across threads freely; the read side
//! attaches [`RankIndex`](crate::rank::RankIndex) and
//! [`SelectIndex`](crate::select::SelectIndex) over
//! [`BitVector::from_levels`](crate::bitvec::BitVector::from_levels)
//! regions as needed.

/// The finished Fast Succinct Trie.
///
/// Levels `[0, sparse_start_level)` are stored dense, levels
/// `[sparse_start_level, tree_height)` sparse. Sparse per-level slices
/// are indexed *relative* to `sparse_start_level`: `labels()[0]` is the
/// label sequence of level `sparse_start_level`.
#[derive(Clone)]
pub struct Fst {
    pub(crate) sparse_start_level: usize,
    pub(crate) tree_height: usize,
    pub(crate) node_counts: Vec<usize>,

    // LOUDS-Dense levels [0, sparse_start_level).
    pub(crate) bitmap_labels: Vec<Vec<u64>>,
    pub(crate) bitmap_child_indicator_bits: Vec<Vec<u64>>,
    pub(crate) prefixkey_indicator_bits: Vec<Vec<u64>>,
    pub(crate) positions_dense: Vec<u64>,

    // LOUDS-Sparse levels [sparse_start_level, tree_height).
    pub(crate) labels: Vec<Vec<u8>>,
    pub(crate) child_indicator_bits: Vec<Vec<u64>>,
    pub(crate) louds_bits: Vec<Vec<u64>>,
    pub(crate) positions_sparse: Vec<u64>,
}

impl std::fmt::Debug for Fst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fst")
            .field("tree_height", &self.tree_height)
            .field("sparse_start_level", &self.sparse_start_level)
            .field("num_keys", &self.num_keys())
            .finish()
    }
}

impl Fst {
    /// Return the first level stored in sparse form; all levels above
    /// it are dense.
    pub fn sparse_start_level(&self) -> usize {
        self.sparse_start_level
    }

    /// Return the number of levels in the trie.
    pub fn tree_height(&self) -> usize {
        self.tree_height
    }

    /// Return the number of nodes at each level (dense levels included).
    pub fn node_counts(&self) -> &[usize] {
        &self.node_counts
    }

    /// Return the number of distinct keys indexed.
    pub fn num_keys(&self) -> usize {
        self.positions_dense.len() + self.positions_sparse.len()
    }

    /// Label bitmaps of the dense levels, 256 bits per node.
    pub fn bitmap_labels(&self) -> &[Vec<u64>] {
        &self.bitmap_labels
    }

    /// Child indicator bitmaps of the dense levels, parallel to
    /// [`bitmap_labels`](Self::bitmap_labels).
    pub fn bitmap_child_indicator_bits(&self) -> &[Vec<u64>] {
        &self.bitmap_child_indicator_bits
    }

    /// Prefix-key indicators of the dense levels, one bit per node.
    pub fn prefixkey_indicator_bits(&self) -> &[Vec<u64>] {
        &self.prefixkey_indicator_bits
    }

    /// Input ranks of keys whose terminal slot lies in the dense
    /// region, level-major, input order within each level.
    pub fn positions_dense(&self) -> &[u64] {
        &self.positions_dense
    }

    /// Byte labels of the sparse levels, one entry per slot.
    pub fn labels(&self) -> &[Vec<u8>] {
        &self.labels
    }

    /// Child indicator bits of the sparse levels, parallel to
    /// [`labels`](Self::labels).
    pub fn child_indicator_bits(&self) -> &[Vec<u64>] {
        &self.child_indicator_bits
    }

    /// LOUDS node-start bits of the sparse levels, parallel to
    /// [`labels`](Self::labels).
    pub fn louds_bits(&self) -> &[Vec<u64>] {
        &self.louds_bits
    }

    /// Input ranks of keys whose terminal slot lies in the sparse
    /// region, level-major, input order within each level.
    pub fn positions_sparse(&self) -> &[u64] {
        &self.positions_sparse
    }

    /// Logical bit counts of the sparse per-level vectors, in the same
    /// relative order as [`labels`](Self::labels).
    ///
    /// These are the `num_bits_per_level` values expected by
    /// [`BitVector::from_levels`](crate::bitvec::BitVector::from_levels)
    /// when carving rank/select regions out of the artifact.
    pub fn sparse_level_item_counts(&self) -> Vec<usize> {
        self.labels.iter().map(|level| level.len()).collect()
    }

    /// Approximate heap memory usage in bytes.
    pub fn size_in_bytes(&self) -> usize {
        fn words(vectors: &[Vec<u64>]) -> usize {
            vectors.iter().map(|v| v.capacity() * 8).sum()
        }
        words(&self.bitmap_labels)
            + words(&self.bitmap_child_indicator_bits)
            + words(&self.prefixkey_indicator_bits)
            + words(&self.child_indicator_bits)
            + words(&self.louds_bits)
            + self.labels.iter().map(|v| v.capacity()).sum::<usize>()
            + (self.positions_dense.capacity() + self.positions_sparse.capacity()) * 8
            + self.node_counts.capacity() * std::mem::size_of::<usize>()
    }
}
