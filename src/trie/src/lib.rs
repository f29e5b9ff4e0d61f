//! # Permtrie
//!
//! Trie-based permission matching with scope expansion and wildcard tokens.
//!
//! Callers register hierarchical permission grants once, then repeatedly
//! check candidate permission strings against the registered set. A grant
//! like `"printer:print,query"` expands into two sibling branches, and a
//! wildcard token (`"*"` by default) matches any single candidate token at
//! lookup time, with exact tokens always preferred over the wildcard edge.
//!
//! ## Features
//!
//! - **Scope lists**: `"n:s1,s2:x"` registers both `n:s1:x` and `n:s2:x`
//! - **Wildcard tokens**: `"n:*"` authorizes any single token under `n`
//! - **Most-specific match**: exact branches beat wildcard branches
//! - **Configurable separators** via [`TrieOptions`], validated up front
//! - **Read-side thread safety**: checking takes `&self`, so a fully built
//!   trie can serve any number of concurrent readers
//!
//! ## Example
//!
//! ```rust
//! use permtrie::PermissionTrie;
//!
//! let mut trie = PermissionTrie::new();
//! trie.add(&[
//!     "document:read,write",
//!     "printer:*",
//!     "admin:user:delete",
//! ]);
//!
//! assert!(trie.check("document:write"));
//! assert!(trie.check("printer:lobby"));
//! assert!(trie.check("admin:user:delete"));
//! assert!(!trie.check("document:delete"));
//! assert!(!trie.check("printer:lobby:eject"));
//!
//! assert_eq!(trie.count(), 4);
//! ```

pub mod error;
pub mod node;
pub mod options;
pub mod trie;

pub use error::{Result, TrieError};
pub use node::TrieNode;
pub use options::TrieOptions;
pub use trie::PermissionTrie;
