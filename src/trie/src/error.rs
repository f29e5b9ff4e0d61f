//! Error types for the permission trie

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrieError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrieError {
    #[error("Trie option `{0}` must not be empty")]
    EmptyOption(&'static str),

    #[error("Trie options `{a}` and `{b}` must be distinct (both are {value:?})")]
    OptionClash {
        a: &'static str,
        b: &'static str,
        value: String,
    },
}
