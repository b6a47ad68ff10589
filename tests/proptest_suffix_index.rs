//! Property-based tests for suffix tree and suffix array invariants.

use proptest::prelude::*;
use sfx::index::suffix_tree::{Node, SuffixTree, ROOT};
use sfx::{build_suffix_array, build_suffix_tree, find_pattern_in_array, find_pattern_in_tree};
use std::collections::BTreeMap;

/// Small alphabets produce many repeats and edge splits
fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ab]{0,24}",
        "[acgt]{0,32}",
        "[a-z ]{0,24}",
        "[äöü€x]{0,12}",
    ]
}

fn pattern_strategy() -> impl Strategy<Value = String> {
    "[abcgt]{1,4}"
}

/// Leaf value -> root path label, for every leaf
fn leaf_paths(tree: &SuffixTree) -> BTreeMap<usize, Vec<String>> {
    let mut paths: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    let mut stack = vec![(ROOT, String::new())];

    while let Some((id, path)) = stack.pop() {
        match tree.node(id) {
            Some(Node::Leaf(value)) => paths.entry(*value).or_default().push(path),
            Some(Node::Internal(edges)) => {
                for edge in edges {
                    stack.push((edge.child, format!("{}{}", path, edge.label)));
                }
            }
            None => {}
        }
    }

    paths
}

fn suffixes(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    (0..chars.len())
        .map(|i| chars[i..].iter().chain(std::iter::once(&'\0')).collect())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every offset has exactly one leaf, spelling exactly its suffix
    #[test]
    fn prop_one_leaf_per_suffix(text in text_strategy()) {
        let tree = build_suffix_tree(&text).unwrap();
        let paths = leaf_paths(&tree);
        let expected = suffixes(&text);

        prop_assert_eq!(paths.len(), expected.len());
        for (i, suffix) in expected.iter().enumerate() {
            prop_assert_eq!(paths.get(&(i + 1)), Some(&vec![suffix.clone()]));
        }
    }

    /// Sibling edges never share a first character
    #[test]
    fn prop_sibling_labels_disjoint(text in text_strategy()) {
        let tree = build_suffix_tree(&text).unwrap();

        for id in 0..tree.node_count() {
            let mut firsts: Vec<char> = tree
                .edges(id)
                .iter()
                .map(|e| e.label.chars().next().unwrap())
                .collect();
            let count = firsts.len();
            firsts.sort_unstable();
            firsts.dedup();
            prop_assert_eq!(firsts.len(), count);
        }
    }

    /// The suffix array holds every suffix once, in strictly ascending order
    #[test]
    fn prop_suffix_array_sorted_and_complete(text in text_strategy()) {
        let tree = build_suffix_tree(&text).unwrap();
        let array = build_suffix_array(&tree);

        for pair in array.entries().windows(2) {
            prop_assert!(pair[0].suffix < pair[1].suffix);
        }

        let mut expected = suffixes(&text);
        expected.sort();
        let actual: Vec<String> = array.iter().map(|e| e.suffix.clone()).collect();
        prop_assert_eq!(actual, expected);

        for entry in array.iter() {
            prop_assert_eq!(tree.suffix(entry.leaf), Some(entry.suffix.clone()));
        }
    }

    /// Tree search and array search return the same leaf set
    #[test]
    fn prop_search_agreement(text in text_strategy(), pattern in pattern_strategy()) {
        let tree = build_suffix_tree(&text).unwrap();
        let array = build_suffix_array(&tree);

        let mut from_tree = find_pattern_in_tree(&tree, &pattern);
        let mut from_array = find_pattern_in_array(&array, &pattern);
        from_tree.sort_unstable();
        from_array.sort_unstable();

        prop_assert_eq!(from_tree, from_array);
    }

    /// The longest repeat occurs at least twice and nothing longer does
    #[test]
    fn prop_longest_repeat(text in text_strategy()) {
        let tree = build_suffix_tree(&text).unwrap();
        let repeat = tree.longest_repeat();
        let array = tree.suffix_array();

        if !repeat.is_empty() {
            prop_assert!(array.count_matches(&repeat) >= 2);
        }

        let n = repeat.chars().count() + 1;
        let chars: Vec<char> = text.chars().collect();
        if chars.len() >= n {
            for window in chars.windows(n) {
                let candidate: String = window.iter().collect();
                prop_assert!(array.count_matches(&candidate) < 2);
            }
        }
    }
}
