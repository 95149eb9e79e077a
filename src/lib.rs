//! # Fast Succinct Trie
//!
//! *An ordered byte-string index whose space approaches the
//! information-theoretic lower bound of its own shape.*
//!
//! ## Intuition First
//!
//! Picture a phone book compressed so far that the page structure itself
//! has almost disappeared: no page numbers, no margins, just the letters
//! and a thin ribbon of punctuation marking where entries begin. A Fast
//! Succinct Trie (FST) stores a sorted set of byte strings that way. The
//! trie's shape is flattened into bit vectors, and instead of pointers,
//! *counting* navigates the structure: "my third child" becomes "the
//! third set bit after my own position".
//!
//! ## The Problem
//!
//! A pointer-based trie pays 8 bytes per edge before storing a single
//! label. For large sorted key sets most of that is redundancy: the
//! topology of an $n$-node trie needs only about $2n$ bits. But a
//! structure at that limit is useless unless it can still be queried
//! without decompression, which is exactly what rank and select over
//! the topology bits provide.
//!
//! ## Historical Context
//!
//! ```text
//! 1989  Jacobson    LOUDS: trees encoded as bit sequences + rank/select
//! 1996  Munro-Raman Constant-time rank and select in o(n) extra space
//! 2018  Zhang et al. SuRF: the FST, mixing 256-way bitmaps with LOUDS
//! ```
//!
//! The FST's contribution is *hybridization*: the top of a trie is short
//! and bushy, so each node there gets a 256-bit label bitmap with $O(1)$
//! child lookup (LOUDS-Dense); the bottom is tall and narrow, so nodes
//! there store only their actually-present labels (LOUDS-Sparse). A
//! space-ratio policy picks the cutoff level automatically.
//!
//! ## Mathematical Formulation
//!
//! For a level $\ell$ with $m$ slots and $c$ nodes, the sparse form
//! costs $10m$ bits ($8m$ label bits plus two parallel indicator bits
//! per slot); the dense form costs $512c$ bits plus one prefix-key bit
//! per node. The builder keeps the dense region while
//! $\mathrm{dense}(\ell) \cdot R < \mathrm{sparse}(\ell)$ for a
//! configured ratio $R$.
//!
//! Each distinct key also receives a **position**: its 0-based rank in
//! the input, recorded at the level where the key's unique prefix ends.
//! The index is therefore order-preserving and can back a key-to-rank
//! map without storing the keys again.
//!
//! ## Complexity Analysis
//!
//! - **Build**: one pass over the keys, $O(\text{total key bytes})$.
//! - **Rank/Select**: $O(1)$ queries over the finished bit vectors with
//!   sub-linear auxiliary space.
//! - **Space**: within a small constant of the trie's entropy bound,
//!   tunable via the dense/sparse ratio.
//!
//! ## What Could Go Wrong
//!
//! 1. **Static only**: the structure is build-once, query-many. An
//!    insertion invalidates every offset after it; rebuild instead.
//! 2. **Reserved label**: one byte value (0xFF) marks key termini. Keys
//!    containing it would be misread; pick a different encoding for
//!    such alphabets.
//! 3. **Unsorted input**: the single-pass construction silently builds
//!    garbage when keys arrive out of order (debug builds assert).
//!
//! ## Implementation Notes
//!
//! This crate provides the write side of the index:
//!
//! - [`FstBuilder`]: single-pass construction from sorted keys.
//! - [`Fst`]: the immutable artifact (bitmaps, label vectors, positions).
//! - [`BitVector`], [`RankIndex`], [`SelectIndex`]: the flat bit storage
//!   and the auxiliary query structures the read side attaches to it.
//!
//! Traversal, persistence, and the perfect-hash value mapping layered on
//! positions live with the consumers of the artifact.
//!
//! ## References
//!
//! - Jacobson, G. (1989). "Space-efficient Static Trees and Graphs."
//! - Zhang, H., et al. (2018). "SuRF: Practical Range Query Filtering
//!   with Fast Succinct Tries."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod bitvec;
pub mod builder;
pub mod error;
pub mod fst;
pub mod rank;
pub mod select;

pub use bitvec::BitVector;
pub use builder::{FstBuilder, DEFAULT_SPARSE_DENSE_RATIO, FANOUT, TERMINATOR};
pub use error::Error;
pub use fst::Fst;
pub use rank::RankIndex;
pub use select::SelectIndex;
