//! Grant registration and matching scenarios
//!
//! End-to-end coverage of the trie surface: batch registration with scope
//! expansion, wildcard matching, whitespace handling, and the structural
//! properties (idempotence, insertion-order independence).

use permtrie::{PermissionTrie, TrieError, TrieOptions};
use proptest::prelude::*;

// ============================================================================
// REGISTRATION & COUNTING
// ============================================================================

#[test]
fn test_builds_trie_with_exact_counts() {
    let grants = [
        "n1:s1",             // 1
        "n1:s2",             // 1
        "n1:s3,s4,s5",       // 3
        "n2:s1,s2:s3,s4",    // 4
        "n3:s1,s2:s3,s4:s5", // 4
        "n4:*",              // 1
        "n5",                // 1
        " ",                 // empty strings are ignored
        "",
    ];

    let mut trie = PermissionTrie::new();
    trie.add(&grants);

    assert_eq!(trie.count(), 15);
    assert_eq!(trie.permissions().len(), 15);
}

#[test]
fn test_registration_across_batches_equals_single_batch() {
    let mut batched = PermissionTrie::new();
    batched.add(&["n1:s1", "n2:s1,s2"]);

    let mut split = PermissionTrie::new();
    split.add(&["n1:s1"]);
    split.add(&["n2:s1,s2"]);

    assert_eq!(batched.permissions(), split.permissions());
    assert_eq!(batched.count(), split.count());
}

// ============================================================================
// WHITESPACE HANDLING
// ============================================================================

#[test]
fn test_ignores_whitespace_around_separators() {
    let grants = ["n1:s1 ", "n1:s2, s3", "n1  :  s4", " n1  :  s5:  s6"];

    let authorized = [
        "n1:s1", "n1:s2", "n1:s3", "n1:s4", "n1:s5 :s6", "n1:s1 ", "n1: s2 ", " n1 : s3 ",
    ];
    let denied = ["n1:s5", "n1:s6", "n1:s 1", "n 1:s1", "n1"];

    let mut trie = PermissionTrie::new();
    trie.add(&grants);

    for candidate in authorized {
        assert!(trie.check(candidate), "expected match for {:?}", candidate);
    }
    for candidate in denied {
        assert!(!trie.check(candidate), "expected no match for {:?}", candidate);
    }
}

// ============================================================================
// WILDCARD MATCHING
// ============================================================================

#[test]
fn test_respects_wildcard_tokens() {
    let grants = ["n1:s1:*", "n2:*", "n3:*:s1", "n4:*:s1:*"];

    let authorized = [
        "n1:s1:x1",
        "n1:s1:x3",
        "n2:x1",
        "n2:x2",
        "n3:x1:s1",
        "n3:x2:s1",
        "n4:x1:s1:x2",
        "n4:x3:s1:x4",
    ];
    let denied = [
        "n1:s2:x1",
        "n2:x1:s1",
        "n3:x1:s2",
        "n4:x1:s3:x2",
        "n4:x3:s1:x4:s4",
    ];

    let mut trie = PermissionTrie::new();
    trie.add(&grants);

    for candidate in authorized {
        assert!(trie.check(candidate), "expected match for {:?}", candidate);
    }
    for candidate in denied {
        assert!(!trie.check(candidate), "expected no match for {:?}", candidate);
    }
}

#[test]
fn test_wildcard_only_grants_of_mixed_depth() {
    let grants = ["*:*", "*:*:*"];

    let mut trie = PermissionTrie::new();
    trie.add(&grants);

    // two- and three-token candidates are covered
    assert!(trie.check("n1:s1"));
    assert!(trie.check("n1:s1:x1"));

    // one- and four-token candidates are not
    assert!(!trie.check("n1"));
    assert!(!trie.check("n2:x1:s1:s3"));
}

// ============================================================================
// SCOPE EXPANSION
// ============================================================================

#[test]
fn test_respects_scope_separator() {
    let grants = ["n1:s1,s2", "n2:s1,s2:s3,s4", "n3,n4"];

    let authorized = [
        "n1:s1", "n1:s2", "n2:s1:s3", "n2:s1:s4", "n2:s2:s3", "n2:s2:s4", "n3", "n4",
    ];
    let denied = [
        "n1:s1:s2",
        "n1:s3",
        "n2:s3",
        "n2:s4",
        "n2:s1:s5",
        "n2:s5:s4",
        "n5",
        "n3:s1",
        "n4:s1:s2",
    ];

    let mut trie = PermissionTrie::new();
    trie.add(&grants);

    for candidate in authorized {
        assert!(trie.check(candidate), "expected match for {:?}", candidate);
    }
    for candidate in denied {
        assert!(!trie.check(candidate), "expected no match for {:?}", candidate);
    }
}

// ============================================================================
// OPTIONS
// ============================================================================

#[test]
fn test_custom_separators_end_to_end() {
    let options = TrieOptions {
        namespace_separator: "/".to_string(),
        scope_separator: "+".to_string(),
        wildcard: "?".to_string(),
    };

    let mut trie = PermissionTrie::with_options(options).unwrap();
    trie.add(&["repo/pull+push", "ci/?"]);

    assert!(trie.check("repo/pull"));
    assert!(trie.check("repo/push"));
    assert!(trie.check("ci/deploy"));
    assert!(!trie.check("repo/admin"));
    assert_eq!(trie.count(), 3);
}

#[test]
fn test_degenerate_options_rejected() {
    let empty = TrieOptions {
        namespace_separator: String::new(),
        ..TrieOptions::default()
    };
    assert!(matches!(
        PermissionTrie::with_options(empty),
        Err(TrieError::EmptyOption("namespace_separator"))
    ));

    let clashing = TrieOptions {
        wildcard: ":".to_string(),
        ..TrieOptions::default()
    };
    assert!(matches!(
        PermissionTrie::with_options(clashing),
        Err(TrieError::OptionClash { .. })
    ));
}

// ============================================================================
// STRUCTURAL PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn test_registration_is_idempotent(
        grants in prop::collection::vec("[a-z]{1,4}(:[a-z]{1,4}){0,2}", 1..6)
    ) {
        let mut once = PermissionTrie::new();
        once.add(&grants);

        let mut twice = PermissionTrie::new();
        twice.add(&grants);
        twice.add(&grants);

        prop_assert_eq!(once.count(), twice.count());
        prop_assert_eq!(once.permissions(), twice.permissions());
    }

    #[test]
    fn test_registration_order_is_irrelevant(
        grants in prop::collection::vec("[a-z]{1,4}(,[a-z]{1,4})?(:[a-z]{1,4}){0,2}", 1..6)
    ) {
        let mut forward = PermissionTrie::new();
        forward.add(&grants);

        let reversed: Vec<String> = grants.iter().rev().cloned().collect();
        let mut backward = PermissionTrie::new();
        backward.add(&reversed);

        prop_assert_eq!(forward.permissions(), backward.permissions());
        prop_assert_eq!(forward.count(), backward.count());
    }

    #[test]
    fn test_lone_grant_matches_itself(
        grant in "[a-z]{1,4}(:[a-z]{1,4}){0,3}"
    ) {
        let mut trie = PermissionTrie::new();
        trie.add(std::slice::from_ref(&grant));

        prop_assert!(trie.check(&grant));
        prop_assert_eq!(trie.count(), 1);
    }
}
