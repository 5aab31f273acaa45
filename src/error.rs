use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TrieError>;

/// Errors raised by value-trie insertion and pattern encoding.
///
/// Lookups never fail with an error; a missing key is reported through a
/// `bool` flag or an empty result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// The value slice is neither as long as the key nor one longer.
    #[error("invalid argument: {values_len} values for a key of {key_len} characters (expected {key_len} or {})", .key_len + 1)]
    InvalidArgument { key_len: usize, values_len: usize },

    /// A value cannot be written as a single pattern digit.
    #[error("value {value} at position {index} does not fit in a single pattern digit")]
    ValueOutOfRange { index: usize, value: i32 },
}
