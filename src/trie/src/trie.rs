//! The permission trie: registration, wildcard-aware matching, introspection
//!
//! Registration tokenizes each grant on the namespace separator, expands
//! scope lists (`"s1,s2"`) into sibling branches sharing the remaining
//! suffix, and grows the tree in place. Matching walks the candidate tokens
//! from the root, preferring exact children over the wildcard edge so that a
//! broad wildcard grant never masks a narrower exact grant registered
//! alongside it.

use tracing::{debug, trace};

use crate::error::Result;
use crate::node::TrieNode;
use crate::options::TrieOptions;

/// Trie of registered permission grants.
///
/// Build the trie once with [`add`], then query it with [`check`]. Checking
/// takes `&self` and performs no mutation, so once registration is finished
/// any number of threads may check candidates concurrently; registration
/// itself must be serialized by the caller.
///
/// # Examples
///
/// ```
/// use permtrie::PermissionTrie;
///
/// let mut trie = PermissionTrie::new();
/// trie.add(&["printer:print,query", "scanner:*"]);
///
/// assert!(trie.check("printer:query"));
/// assert!(trie.check("scanner:office-3"));
/// assert!(!trie.check("printer:manage"));
/// assert_eq!(trie.count(), 3);
/// ```
///
/// [`add`]: PermissionTrie::add
/// [`check`]: PermissionTrie::check
#[derive(Debug, Clone, Default)]
pub struct PermissionTrie {
    root: TrieNode,
    options: TrieOptions,
    count: usize,
}

impl PermissionTrie {
    /// Creates an empty trie with the default options (`":"`, `","`, `"*"`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty trie with custom separators and wildcard token.
    ///
    /// Fails if any option is empty or two options collide; see
    /// [`TrieOptions::validate`].
    pub fn with_options(options: TrieOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            root: TrieNode::new(),
            options,
            count: 0,
        })
    }

    /// Returns the options this trie was built with.
    pub fn options(&self) -> &TrieOptions {
        &self.options
    }

    /// Registers a batch of permission grant strings.
    ///
    /// Empty, all-whitespace, or otherwise malformed strings are skipped
    /// silently so one bad entry in an upstream batch never fails the whole
    /// registration. A token equal to the wildcard string is stored as an
    /// ordinary literal key; it only gains special meaning during
    /// [`check`](PermissionTrie::check).
    ///
    /// The terminal count is recomputed by full traversal after the batch —
    /// registration is a rare build-time operation, lookups are the hot path.
    pub fn add<S: AsRef<str>>(&mut self, permissions: &[S]) {
        for permission in permissions {
            let permission = permission.as_ref();
            match self.tokenize(permission) {
                Some(tokens) => {
                    trace!("Registering permission: {:?}", permission);
                    insert(&mut self.root, &tokens);
                }
                None => {
                    debug!("Skipping malformed permission: {:?}", permission);
                }
            }
        }

        self.count = if self.root.is_terminal() {
            0
        } else {
            count_terminals(&self.root)
        };
        debug!("Permission trie now holds {} permissions", self.count);
    }

    /// Checks whether a candidate permission string is covered by a
    /// registered grant.
    ///
    /// The walk prefers an exact child over the wildcard edge at every node;
    /// a wildcard edge consumes exactly one candidate token regardless of
    /// its value. A grant shorter or longer than the candidate does not
    /// match, with one exception: when the walk is already inside a wildcard
    /// branch, a trailing wildcard grant absorbs a one-token shortfall, so
    /// grants like `*:*` remain reachable alongside `*:*:*`.
    ///
    /// Empty or all-whitespace candidates are never authorized.
    pub fn check(&self, candidate: &str) -> bool {
        let tokens: Vec<&str> = candidate
            .split(&self.options.namespace_separator)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect();

        if tokens.is_empty() {
            return false;
        }

        let wildcard = self.options.wildcard.as_str();
        let mut node = &self.root;
        let mut via_wildcard = false;

        for token in tokens {
            // The registered grant ended before the candidate did.
            if node.is_terminal() {
                return false;
            }

            if let Some(child) = node.child(token) {
                node = child;
                via_wildcard = false;
            } else if let Some(child) = node.child(wildcard) {
                node = child;
                via_wildcard = true;
            } else {
                trace!("No branch for token {:?} in {:?}", token, candidate);
                return false;
            }
        }

        if node.is_terminal() {
            return true;
        }

        via_wildcard
            && node
                .child(wildcard)
                .is_some_and(|child| child.is_terminal())
    }

    /// Checks whether any candidate in a list is authorized.
    pub fn check_any<S: AsRef<str>>(&self, candidates: &[S]) -> bool {
        candidates.iter().any(|c| self.check(c.as_ref()))
    }

    /// Checks whether every candidate in a list is authorized.
    ///
    /// An empty list is vacuously authorized.
    pub fn check_all<S: AsRef<str>>(&self, candidates: &[S]) -> bool {
        candidates.iter().all(|c| self.check(c.as_ref()))
    }

    /// Number of distinct fully expanded permissions registered.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.root.is_terminal()
    }

    /// Lists every registered permission, fully expanded.
    ///
    /// One string per terminal node, path tokens joined with the namespace
    /// separator, in sorted token order at every level so structurally equal
    /// tries produce identical output regardless of insertion order.
    pub fn permissions(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.count);
        collect(&self.root, "", &self.options.namespace_separator, &mut out);
        out
    }

    /// Splits a permission string into per-level lists of scope components.
    ///
    /// Tokens are trimmed and empty segments are dropped, so separators that
    /// touch only whitespace collapse. Returns `None` for strings that
    /// register nothing: empty input, or a level containing nothing but
    /// scope separators (malformed; skipped before any tree mutation so a
    /// partial insert can never leave a phantom permission behind).
    fn tokenize(&self, permission: &str) -> Option<Vec<Vec<String>>> {
        let mut tokens = Vec::new();

        for raw in permission.split(&self.options.namespace_separator) {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }

            let components: Vec<String> = raw
                .split(&self.options.scope_separator)
                .map(str::trim)
                .filter(|component| !component.is_empty())
                .map(str::to_string)
                .collect();

            if components.is_empty() {
                return None;
            }

            tokens.push(components);
        }

        if tokens.is_empty() {
            None
        } else {
            Some(tokens)
        }
    }
}

/// Grows one branch per scope component at this level, each continuing with
/// the same remaining suffix.
fn insert(node: &mut TrieNode, tokens: &[Vec<String>]) {
    let Some((components, rest)) = tokens.split_first() else {
        return;
    };

    for component in components {
        insert(node.add_child(component), rest);
    }
}

fn count_terminals(node: &TrieNode) -> usize {
    if node.is_terminal() {
        return 1;
    }

    node.sorted_children()
        .into_iter()
        .map(|(_, child)| count_terminals(child))
        .sum()
}

fn collect(node: &TrieNode, prefix: &str, separator: &str, out: &mut Vec<String>) {
    if node.is_terminal() {
        if !prefix.is_empty() {
            out.push(prefix.to_string());
        }
        return;
    }

    for (token, child) in node.sorted_children() {
        let path = if prefix.is_empty() {
            token.to_string()
        } else {
            format!("{}{}{}", prefix, separator, token)
        };
        collect(child, &path, separator, out);
    }
}
