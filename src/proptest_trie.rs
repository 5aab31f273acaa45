use super::*;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};

fn words(min: usize, max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-e]{1,8}".prop_map(String::from), min..max)
}

fn pattern_parts() -> impl Strategy<Value = (String, Vec<i32>)> {
    "[a-zé.]{1,10}".prop_flat_map(|letters| {
        let len = letters.chars().count();
        (
            Just(letters),
            proptest::collection::vec(0..=9i32, len..=len + 1),
        )
    })
}

#[derive(Debug, Clone)]
enum Operation {
    Add(String),
    Remove(String),
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(
        prop_oneof![
            "[a-c]{1,5}".prop_map(Operation::Add),
            "[a-c]{1,5}".prop_map(Operation::Remove),
        ],
        1..60,
    )
}

fn distinct_prefixes<'a>(members: impl IntoIterator<Item = &'a String>) -> usize {
    let mut prefixes = HashSet::new();
    for member in members {
        let chars: Vec<char> = member.chars().collect();
        for end in 1..=chars.len() {
            prefixes.insert(chars[..end].to_vec());
        }
    }
    prefixes.len()
}

#[test]
fn test_shared_prefix_accounting() {
    let trie = Trie::from(["hello, world!", "hello, there!", "this is a sentence."]);
    assert_eq!(
        trie.size(),
        "hello, ".len() + "world!".len() + "there!".len() + "this is a sentence.".len()
    );
}

proptest! {
    #[test]
    fn add_is_idempotent(members in words(1, 30), again in "[a-e]{1,8}") {
        let mut trie: Trie = members.iter().collect();
        trie.add(&again);
        let size = trie.size();

        trie.add(&again);
        prop_assert_eq!(trie.size(), size);
        prop_assert!(trie.contains(&again));
    }

    #[test]
    fn add_then_remove_restores_size(members in words(0, 30), fresh in "[x-z]{1,8}") {
        let mut trie: Trie = members.iter().collect();
        let size = trie.size();

        trie.add(&fresh);
        prop_assert!(trie.contains(&fresh));
        prop_assert_eq!(trie.size(), size + fresh.len());

        trie.remove(&fresh);
        prop_assert!(!trie.contains(&fresh));
        prop_assert_eq!(trie.size(), size);
    }

    #[test]
    fn operations_match_reference_set(ops in operations()) {
        let mut trie = Trie::new();
        let mut reference = BTreeSet::new();

        for op in ops {
            match op {
                Operation::Add(key) => {
                    trie.add(&key);
                    reference.insert(key);
                }
                Operation::Remove(key) => {
                    let empty = trie.remove(&key);
                    reference.remove(&key);
                    prop_assert_eq!(empty, reference.is_empty());
                }
            }
        }

        let expected: Vec<String> = reference.iter().cloned().collect();
        prop_assert_eq!(trie.members(), expected);
        prop_assert_eq!(trie.size(), distinct_prefixes(&reference));
    }

    #[test]
    fn pure_prefixes_are_not_members(word in "[a-e]{2,10}") {
        let trie = Trie::from([word.as_str()]);
        let chars: Vec<char> = word.chars().collect();
        for end in 1..chars.len() {
            let prefix: String = chars[..end].iter().collect();
            prop_assert!(!trie.contains(&prefix));
            prop_assert!(trie.starts_with(&prefix));
        }
    }

    #[test]
    fn encoded_patterns_round_trip((letters, values) in pattern_parts()) {
        let encoded = encode_pattern(&letters, &values).unwrap();
        let mut trie = ValueTrie::new();
        trie.add_pattern_string(&encoded);

        prop_assert_eq!(trie.members(), vec![letters.clone()]);
        prop_assert_eq!(trie.values_for_string(&letters), (values.clone(), true));
        prop_assert_eq!(trie.member_values(&letters), Some(values.as_slice()));
    }

    #[test]
    fn longest_substring_is_a_prefix(patterns in words(1, 20), text in "[a-e]{0,12}") {
        let trie = ValueTrie::from_patterns(&patterns);
        let (found, values) = trie.longest_substring(&text);

        prop_assert!(text.starts_with(found));
        prop_assert_eq!(values.len(), found.chars().count());
        prop_assert!(trie.starts_with(found));

        for word in &patterns {
            if text.starts_with(word.as_str()) {
                prop_assert!(found.len() >= word.len());
            }
        }
    }

    #[test]
    fn all_substrings_match_brute_force(members in words(1, 20), text in "[a-e]{0,12}") {
        let trie: Trie = members.iter().collect();
        let values_trie = ValueTrie::from_patterns(&members);
        let chars: Vec<char> = text.chars().collect();

        let mut expected = Vec::new();
        for start in 0..chars.len() {
            for end in start + 1..=chars.len() {
                let candidate: String = chars[start..end].iter().collect();
                if trie.contains(&candidate) {
                    expected.push(candidate);
                }
            }
        }

        prop_assert_eq!(trie.all_substrings(&text), expected.clone());

        let (found, values) = values_trie.all_substrings_and_values(&text);
        prop_assert_eq!(&found, &expected);
        for (member, member_values) in found.iter().zip(&values) {
            prop_assert_eq!(member_values, &values_trie.values_for_string(member).0);
        }
    }
}
