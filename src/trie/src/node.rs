//! Trie node: a token-keyed mapping to child nodes
//!
//! Each node exclusively owns its children; the structure is a strict tree
//! with no sharing and no cycles. A node is *terminal* iff it has no
//! children — terminal-ness is derived, never stored, and terminal nodes
//! mark the end of one fully expanded permission string.

use std::collections::HashMap;

/// A single node of a [`PermissionTrie`](crate::PermissionTrie).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    children: HashMap<String, TrieNode>,
}

impl TrieNode {
    /// Creates an empty (terminal) node.
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
        }
    }

    /// Inserts a child for `token` if absent and returns it.
    ///
    /// The token is trimmed of surrounding whitespace before use as a key.
    /// Re-adding an existing token returns the existing child unchanged, so
    /// repeated registration of the same permission is idempotent.
    pub fn add_child(&mut self, token: &str) -> &mut TrieNode {
        self.children.entry(token.trim().to_string()).or_default()
    }

    /// Returns whether a child exists for exactly this (trimmed) token.
    pub fn has_child(&self, token: &str) -> bool {
        self.children.contains_key(token)
    }

    /// Looks up the child for `token`.
    ///
    /// Returns `None` when no such child exists; callers guard with
    /// [`has_child`](TrieNode::has_child) or match on the result. A `None`
    /// on a path the trie itself produced indicates a broken tree invariant.
    pub fn child(&self, token: &str) -> Option<&TrieNode> {
        self.children.get(token)
    }

    /// Returns whether this node has no children.
    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }

    /// Snapshot of the child tokens, sorted for deterministic iteration.
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = self.children.keys().cloned().collect();
        tokens.sort();
        tokens
    }

    /// Children in sorted token order, for deterministic traversal.
    pub(crate) fn sorted_children(&self) -> Vec<(&str, &TrieNode)> {
        let mut entries: Vec<(&str, &TrieNode)> = self
            .children
            .iter()
            .map(|(token, child)| (token.as_str(), child))
            .collect();
        entries.sort_by_key(|&(token, _)| token);
        entries
    }
}
