//! Separator and wildcard configuration
//!
//! Options are fixed at construction time; every insertion and lookup on a
//! trie uses the same configuration, so branches built by different `add`
//! calls are always structurally compatible.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrieError};

/// Configuration for a [`PermissionTrie`](crate::PermissionTrie).
///
/// All three fields must be non-empty and mutually distinct; [`validate`]
/// enforces this and trie construction rejects anything else.
///
/// The serde derives allow options to be loaded from a configuration file,
/// with missing fields falling back to their defaults:
///
/// ```
/// use permtrie::TrieOptions;
///
/// let options: TrieOptions = serde_json::from_str(r#"{ "wildcard": "?" }"#).unwrap();
/// assert_eq!(options.namespace_separator, ":");
/// assert_eq!(options.wildcard, "?");
/// ```
///
/// [`validate`]: TrieOptions::validate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieOptions {
    /// Separator between hierarchy levels of a permission string.
    #[serde(default = "default_namespace_separator")]
    pub namespace_separator: String,

    /// Separator between scope alternatives within a single level.
    #[serde(default = "default_scope_separator")]
    pub scope_separator: String,

    /// Token that matches any single candidate token at lookup time.
    #[serde(default = "default_wildcard")]
    pub wildcard: String,
}

fn default_namespace_separator() -> String {
    ":".to_string()
}

fn default_scope_separator() -> String {
    ",".to_string()
}

fn default_wildcard() -> String {
    "*".to_string()
}

impl Default for TrieOptions {
    fn default() -> Self {
        Self {
            namespace_separator: default_namespace_separator(),
            scope_separator: default_scope_separator(),
            wildcard: default_wildcard(),
        }
    }
}

impl TrieOptions {
    /// Checks that every field is non-empty and no two fields collide.
    ///
    /// A separator equal to the wildcard (or to the other separator) would
    /// make permission strings ambiguous to parse, so such configurations
    /// are rejected outright.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("namespace_separator", &self.namespace_separator),
            ("scope_separator", &self.scope_separator),
            ("wildcard", &self.wildcard),
        ];

        for (name, value) in fields {
            if value.is_empty() {
                return Err(TrieError::EmptyOption(name));
            }
        }

        for (i, &(a, value_a)) in fields.iter().enumerate() {
            for &(b, value_b) in &fields[i + 1..] {
                if value_a == value_b {
                    return Err(TrieError::OptionClash {
                        a,
                        b,
                        value: value_a.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
