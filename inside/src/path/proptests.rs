//! Property-based tests for containment and relationships.
//!
//! The normalize, resolver and cache modules carry their own quick property
//! tests. This module runs the heavier cross-module properties.

use super::relationship::PathRelationship;
use crate::containment::ContainmentChecker;
use proptest::prelude::*;
use std::path::PathBuf;

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

fn relative_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..6)
        .prop_map(|parts| parts.iter().collect::<PathBuf>())
}

fn checker() -> ContainmentChecker {
    ContainmentChecker::with_base("/base/dir").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // A path never strictly contains itself
    #[test]
    fn containment_irreflexive(path in absolute_path_strategy()) {
        prop_assert!(!checker().is_inside(&path, &path));
    }

    // Anything built by appending components is inside its base
    #[test]
    fn appended_paths_are_inside(base in absolute_path_strategy(), depth in 1..5usize) {
        let mut child = base.clone();
        for i in 0..depth {
            child.push(format!("level{i}"));
        }

        let mut checker = checker();
        prop_assert!(checker.is_inside(&child, &base));
        prop_assert!(!checker.is_inside(&base, &child));
    }

    // Containment is antisymmetric
    #[test]
    fn containment_antisymmetric(path1 in absolute_path_strategy(), path2 in absolute_path_strategy()) {
        let mut checker = checker();
        let forward = checker.is_inside(&path1, &path2);
        let backward = checker.is_inside(&path2, &path1);
        prop_assert!(!(forward && backward));
    }

    // Containment is transitive
    #[test]
    fn containment_transitive(base in absolute_path_strategy(), parts1 in 1..5usize, parts2 in 1..5usize) {
        let mut path_b = base.clone();
        for i in 0..parts1 {
            path_b.push(format!("sub{i}"));
        }

        let mut path_c = path_b.clone();
        for i in 0..parts2 {
            path_c.push(format!("deep{i}"));
        }

        let mut checker = checker();
        if checker.is_inside(&path_b, &base) && checker.is_inside(&path_c, &path_b) {
            prop_assert!(checker.is_inside(&path_c, &base));
        }
    }

    // Relative and absolute spellings of the same location agree
    #[test]
    fn relative_matches_absolute(child in relative_path_strategy(), parent in relative_path_strategy()) {
        let mut checker = checker();
        let base = PathBuf::from("/base/dir");
        let relative = checker.is_inside(&child, &parent);
        let absolute = checker.is_inside(base.join(&child), base.join(&parent));
        prop_assert_eq!(relative, absolute);
    }

    // Warm and cold caches give the same answer
    #[test]
    fn cache_transparent(child in relative_path_strategy(), parent in relative_path_strategy()) {
        let mut warm = checker();
        let first = warm.is_inside(&child, &parent);
        let second = warm.is_inside(&child, &parent);
        let cold = checker().is_inside(&child, &parent);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first, cold);
    }

    // Relationship symmetry: if A is ancestor of B, then B is descendant of A
    #[test]
    fn relationship_symmetric(path1 in absolute_path_strategy(), path2 in absolute_path_strategy()) {
        let mut checker = checker();
        let rel_12 = checker.relationship(&path1, &path2);
        let rel_21 = checker.relationship(&path2, &path1);
        prop_assert_eq!(rel_12, rel_21.reversed());
    }

    // Relationship agrees with the predicate
    #[test]
    fn relationship_matches_predicate(path1 in absolute_path_strategy(), path2 in absolute_path_strategy()) {
        let mut checker = checker();
        let rel = checker.relationship(&path1, &path2);
        prop_assert_eq!(rel == PathRelationship::Descendant, checker.is_inside(&path1, &path2));
        prop_assert_eq!(rel == PathRelationship::Ancestor, checker.is_inside(&path2, &path1));
    }
}
