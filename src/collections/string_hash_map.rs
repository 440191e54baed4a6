//! Mutable string-keyed hash map with separate chaining.
//!
//! This module provides [`StringHashMap`], an associative container whose keys
//! are text and whose values are any owned type. It is the lookup store behind
//! [`ShaderStore`](crate::shader::ShaderStore), but nothing in it is specific to
//! shaders.
//!
//! # Overview
//!
//! - Keys are hashed with 64-bit FNV-1a ([`fnv1a_64`]) and masked to a bucket.
//! - Each bucket owns a chain of entries in insertion order.
//! - The bucket count starts at [`DEFAULT_BUCKET_COUNT`] and doubles whenever
//!   the live count reaches 75% of it.
//! - There is no removal by key. Entries leave the map only through bulk
//!   cleanup ([`clear`](StringHashMap::clear),
//!   [`clear_with`](StringHashMap::clear_with),
//!   [`drain`](StringHashMap::drain)) or when the map is dropped.
//!
//! # Examples
//!
//! ```rust
//! use chainmap::collections::StringHashMap;
//!
//! let mut map = StringHashMap::new();
//! map.insert("a", 1);
//! map.insert("b", 2);
//! map.insert("c", 3);
//! assert_eq!(map.get("b"), Some(&2));
//!
//! // Updating returns the previous value instead of adding an entry
//! assert_eq!(map.insert("b", 99), Some(2));
//! assert_eq!(map.get("b"), Some(&99));
//! assert_eq!(map.len(), 3);
//!
//! assert_eq!(map.get("z"), None);
//! ```
//!
//! # Iteration order
//!
//! Entries are visited by ascending bucket index, then in insertion order
//! within a bucket. This is not global insertion order, and it changes when
//! the map grows. [`Iter`] borrows the map, so the compiler rejects inserts
//! while it is alive. A detached [`Cursor`] does not borrow the map; using one
//! across an insert that grew the map may skip or repeat entries (it never
//! reads out of bounds).

use std::collections::TryReserveError;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::mem;
use std::ops::Index;

use static_assertions::const_assert;

use super::error::MapError;
use super::hash::{bucket_index, fnv1a_64};

// =============================================================================
// Constants
// =============================================================================

/// Number of buckets allocated when a map is created.
pub const DEFAULT_BUCKET_COUNT: usize = 4;

const_assert!(DEFAULT_BUCKET_COUNT.is_power_of_two());

/// Load factor numerator: the map grows at `len >= 3 * buckets / 4`.
const LOAD_FACTOR_NUMERATOR: usize = 3;

/// Load factor denominator.
const LOAD_FACTOR_DENOMINATOR: usize = 4;

/// Allocates `count` empty chains. Empty chains do not allocate.
fn empty_buckets<V>(count: usize) -> Vec<Vec<Entry<V>>> {
    let mut buckets = Vec::with_capacity(count);
    buckets.resize_with(count, Vec::new);
    buckets
}

// =============================================================================
// Entry Definition
// =============================================================================

/// A key-value pair stored in a [`StringHashMap`].
///
/// The key is a private copy made when the entry was inserted.
#[derive(Clone, PartialEq, Eq)]
pub struct Entry<V> {
    key: Box<str>,
    value: V,
}

impl<V> Entry<V> {
    /// Returns the entry's key.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns a reference to the entry's value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the entry's value.
    #[inline]
    pub const fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    #[inline]
    fn as_pair(&self) -> (&str, &V) {
        (&*self.key, &self.value)
    }
}

impl<V: fmt::Debug> fmt::Debug for Entry<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Entry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

// =============================================================================
// StringHashMap Definition
// =============================================================================

/// A string-keyed hash map with separate chaining and FNV-1a hashing.
///
/// # Time Complexity
///
/// | Operation      | Complexity                       |
/// |----------------|----------------------------------|
/// | `new`          | O(1)                             |
/// | `get`          | O(1) average, O(n) worst case    |
/// | `insert`       | O(1) amortized                   |
/// | `iter`         | O(n + buckets)                   |
/// | `clear`        | O(n + buckets)                   |
/// | `len`          | O(1)                             |
///
/// # Value lifecycle
///
/// The map owns its values. How they are released at cleanup is chosen by the
/// caller:
///
/// - [`clear`](Self::clear) drops them.
/// - [`clear_with`](Self::clear_with) passes each one to a destructor closure.
/// - [`drain`](Self::drain) hands them back to the caller.
///
/// A value displaced by [`insert`](Self::insert) is always returned to the
/// caller, never dropped by the map.
///
/// # Examples
///
/// ```rust
/// use chainmap::collections::StringHashMap;
///
/// let mut map = StringHashMap::new();
/// for (index, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
///     map.insert(key, index);
/// }
/// assert_eq!(map.bucket_count(), 8);
/// assert_eq!(map.get("d"), Some(&3));
/// ```
#[derive(Clone)]
pub struct StringHashMap<V> {
    /// Bucket chains; the length is always a power of two.
    buckets: Vec<Vec<Entry<V>>>,
    /// Number of live entries.
    length: usize,
}

impl<V> StringHashMap<V> {
    /// Creates an empty map with [`DEFAULT_BUCKET_COUNT`] buckets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainmap::collections::{StringHashMap, DEFAULT_BUCKET_COUNT};
    ///
    /// let map: StringHashMap<i32> = StringHashMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.bucket_count(), DEFAULT_BUCKET_COUNT);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: empty_buckets(DEFAULT_BUCKET_COUNT),
            length: 0,
        }
    }

    /// Creates an empty map, reporting allocation failure instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::AllocationFailure`] if the bucket array cannot be
    /// allocated.
    pub fn try_new() -> Result<Self, MapError> {
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(DEFAULT_BUCKET_COUNT)
            .map_err(|_| MapError::AllocationFailure {
                operation: "create",
            })?;
        buckets.resize_with(DEFAULT_BUCKET_COUNT, Vec::new);
        Ok(Self { buckets, length: 0 })
    }

    /// Returns the number of entries in the map.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the current number of buckets. Always a power of two.
    #[inline]
    #[must_use]
    pub const fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `len / bucket_count`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.length as f64 / self.buckets.len() as f64
    }

    #[inline]
    fn bucket_of(&self, key: &str) -> usize {
        bucket_index(fnv1a_64(key), self.buckets.len())
    }

    #[inline]
    const fn resize_trigger_limit(&self) -> usize {
        LOAD_FACTOR_NUMERATOR * self.buckets.len() / LOAD_FACTOR_DENOMINATOR
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Complexity
    ///
    /// O(1) average
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainmap::collections::StringHashMap;
    ///
    /// let mut map = StringHashMap::new();
    /// map.insert("invert_color", 1);
    ///
    /// assert_eq!(map.get("invert_color"), Some(&1));
    /// assert_eq!(map.get("crt_effect"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.get_entry(key).map(Entry::value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.bucket_of(key);
        self.buckets[index]
            .iter_mut()
            .find(|entry| &*entry.key == key)
            .map(Entry::value_mut)
    }

    /// Returns the entry stored under `key`.
    #[must_use]
    pub fn get_entry(&self, key: &str) -> Option<&Entry<V>> {
        self.buckets[self.bucket_of(key)]
            .iter()
            .find(|entry| &*entry.key == key)
    }

    /// Returns `true` if the map contains `key`.
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get_entry(key).is_some()
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Inserts a value under `key`, copying the key.
    ///
    /// If the key is already present its value is replaced in place and the
    /// previous value is returned; the entry count does not change. Otherwise
    /// a new entry is appended to the end of the key's chain and the map may
    /// grow.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainmap::collections::StringHashMap;
    ///
    /// let mut map = StringHashMap::new();
    /// assert_eq!(map.insert("key", 1), None);
    /// assert_eq!(map.insert("key", 2), Some(1));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        let index = self.bucket_of(key);
        let chain = &mut self.buckets[index];

        if let Some(entry) = chain.iter_mut().find(|entry| &*entry.key == key) {
            return Some(mem::replace(&mut entry.value, value));
        }

        chain.push(Entry {
            key: Box::from(key),
            value,
        });
        self.length += 1;
        self.grow_if_needed();
        None
    }

    /// Like [`insert`](Self::insert), but reports allocation failure.
    ///
    /// Space for the chain slot and the key copy is reserved before anything
    /// is modified, so on error the map is unchanged and `value` is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::AllocationFailure`] if the new entry cannot be
    /// allocated. A failed growth is not an error: the map keeps its current
    /// bucket count.
    pub fn try_insert(&mut self, key: &str, value: V) -> Result<Option<V>, MapError> {
        let index = self.bucket_of(key);
        let chain = &mut self.buckets[index];

        if let Some(entry) = chain.iter_mut().find(|entry| &*entry.key == key) {
            return Ok(Some(mem::replace(&mut entry.value, value)));
        }

        let allocation_failure = |_| MapError::AllocationFailure {
            operation: "insert",
        };
        let mut key_copy = String::new();
        key_copy
            .try_reserve_exact(key.len())
            .map_err(allocation_failure)?;
        key_copy.push_str(key);
        chain.try_reserve(1).map_err(allocation_failure)?;

        chain.push(Entry {
            key: key_copy.into_boxed_str(),
            value,
        });
        self.length += 1;
        self.grow_if_needed();
        Ok(None)
    }

    /// Doubles the bucket count once the load factor reaches 75%.
    ///
    /// If the larger table cannot be allocated the map keeps its current
    /// buckets.
    fn grow_if_needed(&mut self) {
        if self.length < self.resize_trigger_limit() {
            return;
        }
        let Some(new_bucket_count) = self.buckets.len().checked_mul(2) else {
            return;
        };
        // On failure the old buckets are untouched.
        let _ = self.rehome(new_bucket_count);
    }

    /// Moves every entry into `new_bucket_count` buckets.
    ///
    /// All storage, including each new chain, is reserved before the first
    /// entry moves, so an error leaves the map exactly as it was. Entries are
    /// moved in old bucket order then chain order, to the tail of their new
    /// chain.
    fn rehome(&mut self, new_bucket_count: usize) -> Result<(), TryReserveError> {
        let mut chain_lengths: Vec<usize> = Vec::new();
        chain_lengths.try_reserve_exact(new_bucket_count)?;
        chain_lengths.resize(new_bucket_count, 0);
        for entry in self.buckets.iter().flatten() {
            chain_lengths[bucket_index(fnv1a_64(&entry.key), new_bucket_count)] += 1;
        }

        let mut new_buckets: Vec<Vec<Entry<V>>> = Vec::new();
        new_buckets.try_reserve_exact(new_bucket_count)?;
        for chain_length in chain_lengths {
            let mut chain = Vec::new();
            chain.try_reserve_exact(chain_length)?;
            new_buckets.push(chain);
        }

        for chain in mem::take(&mut self.buckets) {
            for entry in chain {
                let index = bucket_index(fnv1a_64(&entry.key), new_bucket_count);
                new_buckets[index].push(entry);
            }
        }
        self.buckets = new_buckets;
        Ok(())
    }

    // =========================================================================
    // Copy
    // =========================================================================

    /// Builds a new map with the same keys and `copy` applied to every value.
    ///
    /// Entries are re-inserted in this map's iteration order, so the two maps
    /// own independent values as long as `copy` produces independent clones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainmap::collections::StringHashMap;
    ///
    /// let mut original = StringHashMap::new();
    /// original.insert("a", vec![1]);
    ///
    /// let mut copied = original.copy_with(|value| value.clone());
    /// copied.get_mut("a").unwrap().push(2);
    ///
    /// assert_eq!(original.get("a"), Some(&vec![1]));
    /// assert_eq!(copied.get("a"), Some(&vec![1, 2]));
    /// ```
    #[must_use]
    pub fn copy_with<F>(&self, mut copy: F) -> Self
    where
        F: FnMut(&V) -> V,
    {
        let mut copied = Self::new();
        for (key, value) in self {
            copied.insert(key, copy(value));
        }
        copied
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns a cursor positioned on the first entry.
    ///
    /// See [`next_entry`](Self::next_entry).
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        Cursor {
            bucket: self.first_occupied_bucket_from(0),
            position: 0,
        }
    }

    /// Returns the entry under `cursor` and advances it.
    ///
    /// Returns `None` once every entry has been visited. A cursor is only
    /// meaningful for the map that created it, and only until that map is
    /// mutated structurally.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainmap::collections::StringHashMap;
    ///
    /// let mut map = StringHashMap::new();
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    ///
    /// let mut cursor = map.cursor();
    /// let mut visited = 0;
    /// while let Some((_key, _value)) = map.next_entry(&mut cursor) {
    ///     visited += 1;
    /// }
    /// assert_eq!(visited, 2);
    /// ```
    pub fn next_entry<'a>(&'a self, cursor: &mut Cursor) -> Option<(&'a str, &'a V)> {
        let chain = self.buckets.get(cursor.bucket)?;
        let entry = chain.get(cursor.position)?;

        if cursor.position + 1 < chain.len() {
            cursor.position += 1;
        } else {
            cursor.bucket = self.first_occupied_bucket_from(cursor.bucket + 1);
            cursor.position = 0;
        }
        Some(entry.as_pair())
    }

    /// Index of the first non-empty bucket at or after `start`, or
    /// `bucket_count` if there is none.
    fn first_occupied_bucket_from(&self, start: usize) -> usize {
        self.buckets
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, chain)| !chain.is_empty())
            .map_or(self.buckets.len(), |(index, _)| index)
    }

    /// Returns an iterator over `(key, value)` pairs.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            map: self,
            cursor: self.cursor(),
            remaining: self.length,
        }
    }

    /// Returns an iterator over `(key, mutable value)` pairs.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            buckets: self.buckets.iter_mut(),
            chain: std::slice::IterMut::default(),
            remaining: self.length,
        }
    }

    /// Returns an iterator over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    // =========================================================================
    // Cleanup
    // =========================================================================

    /// Removes every entry, dropping keys and values.
    ///
    /// The bucket count is kept and the map stays usable.
    pub fn clear(&mut self) {
        self.clear_with(drop);
    }

    /// Removes every entry, passing each value to `cleanup`.
    ///
    /// Keys are always released by the map. `cleanup` is called exactly once
    /// per live value, in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainmap::collections::StringHashMap;
    ///
    /// let mut map = StringHashMap::new();
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    ///
    /// let mut released = Vec::new();
    /// map.clear_with(|value| released.push(value));
    ///
    /// released.sort_unstable();
    /// assert_eq!(released, vec![1, 2]);
    /// assert!(map.is_empty());
    /// ```
    pub fn clear_with<F>(&mut self, mut cleanup: F)
    where
        F: FnMut(V),
    {
        for chain in &mut self.buckets {
            for entry in mem::take(chain) {
                cleanup(entry.value);
            }
        }
        self.length = 0;
    }

    /// Removes every entry and returns them to the caller.
    ///
    /// The map is empty as soon as this returns, even if the iterator is
    /// dropped without being consumed.
    pub fn drain(&mut self) -> IntoIter<V> {
        let bucket_count = self.buckets.len();
        let buckets = mem::replace(&mut self.buckets, empty_buckets(bucket_count));
        let remaining = mem::take(&mut self.length);
        IntoIter::new(buckets, remaining)
    }

    /// Tears down the map held in `slot`, dropping its values.
    ///
    /// `slot` is left as `None`. Calling this on an empty slot does nothing,
    /// so repeated teardown is harmless.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainmap::collections::StringHashMap;
    ///
    /// let mut slot = Some(StringHashMap::<i32>::new());
    /// StringHashMap::cleanup(&mut slot);
    /// assert!(slot.is_none());
    ///
    /// StringHashMap::cleanup(&mut slot);
    /// assert!(slot.is_none());
    /// ```
    pub fn cleanup(slot: &mut Option<Self>) {
        Self::cleanup_with(slot, drop);
    }

    /// Tears down the map held in `slot`, passing each value to `cleanup`.
    ///
    /// `slot` is left as `None`; an empty slot is a no-op.
    pub fn cleanup_with<F>(slot: &mut Option<Self>, cleanup: F)
    where
        F: FnMut(V),
    {
        if let Some(mut map) = slot.take() {
            map.clear_with(cleanup);
        }
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// A detached position inside a [`StringHashMap`].
///
/// Created by [`StringHashMap::cursor`] and advanced by
/// [`StringHashMap::next_entry`]. It holds the current bucket index and the
/// position within that bucket's chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    bucket: usize,
    position: usize,
}

impl Cursor {
    /// Bucket of the entry the cursor will yield next.
    ///
    /// Equal to the map's bucket count once the cursor is exhausted.
    #[inline]
    #[must_use]
    pub const fn bucket(&self) -> usize {
        self.bucket
    }

    /// Position within the current bucket's chain.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over key-value pairs of a [`StringHashMap`].
pub struct Iter<'a, V> {
    map: &'a StringHashMap<V>,
    cursor: Cursor,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.map.next_entry(&mut self.cursor)?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<V> FusedIterator for Iter<'_, V> {}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            map: self.map,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

/// A mutable iterator over key-value pairs of a [`StringHashMap`].
pub struct IterMut<'a, V> {
    buckets: std::slice::IterMut<'a, Vec<Entry<V>>>,
    chain: std::slice::IterMut<'a, Entry<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining -= 1;
                return Some((&*entry.key, &mut entry.value));
            }
            self.chain = self.buckets.next()?.iter_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<V> FusedIterator for IterMut<'_, V> {}

/// An owning iterator over key-value pairs of a [`StringHashMap`].
///
/// Returned by [`StringHashMap::into_iter`] and [`StringHashMap::drain`].
pub struct IntoIter<V> {
    buckets: std::vec::IntoIter<Vec<Entry<V>>>,
    chain: std::vec::IntoIter<Entry<V>>,
    remaining: usize,
}

impl<V> IntoIter<V> {
    fn new(buckets: Vec<Vec<Entry<V>>>, remaining: usize) -> Self {
        Self {
            buckets: buckets.into_iter(),
            chain: Vec::new().into_iter(),
            remaining,
        }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining -= 1;
                return Some((entry.key.into_string(), entry.value));
            }
            self.chain = self.buckets.next()?.into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<V> FusedIterator for IntoIter<V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<V> Default for StringHashMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for StringHashMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: AsRef<str>, V> Extend<(K, V)> for StringHashMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key.as_ref(), value);
        }
    }
}

impl<V> IntoIterator for StringHashMap<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.buckets, self.length)
    }
}

impl<'a, V> IntoIterator for &'a StringHashMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut StringHashMap<V> {
    type Item = (&'a str, &'a mut V);
    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<V> Index<&str> for StringHashMap<V> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present.
    fn index(&self, key: &str) -> &Self::Output {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key {key:?} not found in StringHashMap"),
        }
    }
}

impl<V: PartialEq> PartialEq for StringHashMap<V> {
    /// Maps are equal when they hold the same key-value pairs, regardless of
    /// bucket count or chain order.
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|other_value| other_value == value))
    }
}

impl<V: Eq> Eq for StringHashMap<V> {}

impl<V: fmt::Debug> fmt::Debug for StringHashMap<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<V: serde::Serialize> serde::Serialize for StringHashMap<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct StringHashMapVisitor<V> {
    marker: std::marker::PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<'de, V> serde::de::Visitor<'de> for StringHashMapVisitor<V>
where
    V: serde::Deserialize<'de>,
{
    type Value = StringHashMap<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = StringHashMap::new();
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            map.insert(&key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, V> serde::Deserialize<'de> for StringHashMap<V>
where
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(StringHashMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
