//! Error types for trie construction.

use thiserror::Error;

/// Error variants for building the succinct trie.
#[derive(Debug, Error)]
pub enum Error {
    /// `build` was called with an empty key list.
    #[error("cannot build a trie from an empty key list")]
    EmptyInput,

    /// A trie level grew past the range addressable by the `u32`
    /// position samples used by the rank/select indexes.
    #[error("level {level} holds {items} slots, exceeding the u32 position range")]
    OversizedLevel {
        /// The level that overflowed.
        level: usize,
        /// The number of slots the level reached.
        items: usize,
    },
}

/// A specialized Result type for trie construction.
pub type Result<T> = std::result::Result<T, Error>;
