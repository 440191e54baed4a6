#![cfg(feature = "collections")]
//! Property-based tests for StringHashMap.
//!
//! Verifies uniqueness, round trip, resize transparency, iteration
//! completeness and copy independence against `std::collections::HashMap`
//! as a model.

use chainmap::collections::StringHashMap;
use chainmap::collections::hash::{bucket_index, fnv1a_64};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_key() -> impl Strategy<Value = String> {
    "[a-z]{1,10}".prop_map(|s| s)
}

fn arbitrary_value() -> impl Strategy<Value = i32> {
    any::<i32>()
}

fn arbitrary_entry() -> impl Strategy<Value = (String, i32)> {
    (arbitrary_key(), arbitrary_value())
}

fn arbitrary_entries() -> impl Strategy<Value = Vec<(String, i32)>> {
    prop::collection::vec(arbitrary_entry(), 0..200)
}

// =============================================================================
// Get-Insert Law: after insert(k, v), get(k) == Some(v)
// =============================================================================

proptest! {
    #[test]
    fn prop_get_insert_law(
        entries in arbitrary_entries(),
        key in arbitrary_key(),
        value in arbitrary_value()
    ) {
        let mut map: StringHashMap<i32> = entries.into_iter().collect();
        map.insert(&key, value);

        prop_assert_eq!(map.get(&key), Some(&value));
    }
}

// =============================================================================
// Get-Insert-Other Law: k1 != k2 => insert(k1, v) leaves get(k2) unchanged
// =============================================================================

proptest! {
    #[test]
    fn prop_get_insert_other_law(
        entries in arbitrary_entries(),
        key1 in arbitrary_key(),
        key2 in arbitrary_key(),
        value in arbitrary_value()
    ) {
        prop_assume!(key1 != key2);

        let mut map: StringHashMap<i32> = entries.into_iter().collect();
        let before = map.get(&key2).copied();
        map.insert(&key1, value);

        prop_assert_eq!(map.get(&key2).copied(), before);
    }
}

// =============================================================================
// Model Law: the map agrees with std HashMap on every key and on len
// =============================================================================

proptest! {
    #[test]
    fn prop_agrees_with_std_hash_map(entries in arbitrary_entries()) {
        let mut map = StringHashMap::new();
        let mut model = HashMap::new();

        for (key, value) in &entries {
            let previous = map.insert(key, *value);
            let model_previous = model.insert(key.clone(), *value);
            prop_assert_eq!(previous, model_previous);
        }

        prop_assert_eq!(map.len(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(map.get(key), Some(value));
        }
    }
}

// =============================================================================
// Uniqueness Law: inserting the same key twice adds exactly one entry
// =============================================================================

proptest! {
    #[test]
    fn prop_uniqueness_law(
        entries in arbitrary_entries(),
        key in arbitrary_key(),
        first in arbitrary_value(),
        second in arbitrary_value()
    ) {
        let mut map: StringHashMap<i32> = entries.into_iter().collect();
        let existed = map.contains_key(&key);
        let len = map.len();

        map.insert(&key, first);
        map.insert(&key, second);

        prop_assert_eq!(map.len(), if existed { len } else { len + 1 });
        prop_assert_eq!(map.get(&key), Some(&second));
    }
}

// =============================================================================
// Resize Transparency Law: growth never changes lookups
// =============================================================================

proptest! {
    #[test]
    fn prop_resize_transparency_law(entries in arbitrary_entries()) {
        let mut map = StringHashMap::new();
        let mut model: HashMap<String, i32> = HashMap::new();

        for (key, value) in entries {
            let bucket_count = map.bucket_count();
            map.insert(&key, value);
            model.insert(key, value);

            if map.bucket_count() != bucket_count {
                prop_assert_eq!(map.bucket_count(), bucket_count * 2);
                for (model_key, model_value) in &model {
                    prop_assert_eq!(map.get(model_key), Some(model_value));
                }
            }
        }
    }
}

// =============================================================================
// Bucket Invariant: power-of-two count, load below 75%, entries in hash bucket
// =============================================================================

proptest! {
    #[test]
    fn prop_bucket_invariants(entries in arbitrary_entries()) {
        let map: StringHashMap<i32> = entries.into_iter().collect();

        prop_assert!(map.bucket_count().is_power_of_two());
        prop_assert!(map.len() < 3 * map.bucket_count() / 4);

        let mut cursor = map.cursor();
        loop {
            let bucket = cursor.bucket();
            let Some((key, _)) = map.next_entry(&mut cursor) else {
                break;
            };
            prop_assert_eq!(bucket_index(fnv1a_64(key), map.bucket_count()), bucket);
        }
    }
}

// =============================================================================
// Iteration Completeness Law: every live key exactly once
// =============================================================================

proptest! {
    #[test]
    fn prop_iteration_completeness_law(entries in arbitrary_entries()) {
        let expected: HashSet<String> = entries.iter().map(|(key, _)| key.clone()).collect();
        let map: StringHashMap<i32> = entries.into_iter().collect();

        let keys: Vec<&str> = map.keys().collect();
        let unique: HashSet<&str> = keys.iter().copied().collect();

        prop_assert_eq!(keys.len(), map.len());
        prop_assert_eq!(unique.len(), keys.len());
        prop_assert_eq!(unique, expected.iter().map(String::as_str).collect::<HashSet<_>>());
    }
}

// =============================================================================
// Copy Independence Law: mutating one map is invisible in the other
// =============================================================================

proptest! {
    #[test]
    fn prop_copy_independence_law(
        entries in prop::collection::vec(arbitrary_entry(), 1..50),
        delta in 1..1000i32
    ) {
        let mut original: StringHashMap<i32> = entries.into_iter().collect();
        let copied = original.copy_with(|value| *value);
        let snapshot: Vec<(String, i32)> = copied
            .iter()
            .map(|(key, value)| (key.to_string(), *value))
            .collect();

        for (_, value) in &mut original {
            *value = value.wrapping_add(delta);
        }

        for (key, value) in &snapshot {
            prop_assert_eq!(copied.get(key), Some(value));
            prop_assert_eq!(original.get(key), Some(&value.wrapping_add(delta)));
        }
    }
}

// =============================================================================
// Cleanup Law: clear_with visits len values and leaves the map empty
// =============================================================================

proptest! {
    #[test]
    fn prop_clear_with_visits_len_values(entries in arbitrary_entries()) {
        let mut map: StringHashMap<i32> = entries.into_iter().collect();
        let len = map.len();
        let bucket_count = map.bucket_count();

        let mut visited = 0;
        map.clear_with(|_| visited += 1);

        prop_assert_eq!(visited, len);
        prop_assert!(map.is_empty());
        prop_assert_eq!(map.bucket_count(), bucket_count);
    }
}
