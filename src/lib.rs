//! Code point tries with per-character values, built for TeX hyphenation
//! pattern tables.
//!
//! This crate provides two prefix trees keyed by `char`:
//!
//! - [`Trie`], a plain set of strings
//! - [`ValueTrie`], which also stores one integer per character plus an
//!   optional value in front of the first character
//!
//! The value trie understands interspersed pattern strings such as
//! `hy3phe2n5a4t2io2n` and can report every member found inside a text,
//! which is what [`Hyphenator`] builds on.
//!
//! # Features
//!
//! - Lookups in O(k) for a key of k code points
//! - Substring scans returning every matching member with its values
//! - Permissive pattern decoding and checked pattern encoding

mod as_chars;
mod error;
mod hyphenator;
mod iter;
mod node;
mod pattern;
mod trie;
mod value_trie;

pub use as_chars::AsChars;
pub use error::{Result, TrieError};
pub use hyphenator::{Hyphenator, HyphenatorConfig};
pub use iter::{SubstringMatch, Substrings};
pub use pattern::{Pattern, encode_pattern};
pub use trie::Trie;
pub use value_trie::ValueTrie;

#[cfg(test)]
mod proptest_trie;
