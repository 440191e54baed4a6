//! FNV-1a hashing for string keys.
//!
//! [`StringHashMap`](super::StringHashMap) hashes the raw bytes of a key with
//! 64-bit FNV-1a and masks the result down to a bucket index. The hash is
//! exposed here so callers can predict bucket placement (and so the tests can).
//!
//! # Examples
//!
//! ```rust
//! use chainmap::collections::hash::{bucket_index, fnv1a_64, FNV_OFFSET_BASIS};
//!
//! assert_eq!(fnv1a_64(""), FNV_OFFSET_BASIS);
//! assert!(bucket_index(fnv1a_64("key"), 8) < 8);
//! ```

use std::hash::{BuildHasher, Hasher};

// =============================================================================
// Constants
// =============================================================================

/// FNV-1a 64-bit offset basis.
pub const FNV_OFFSET_BASIS: u64 = 14_695_981_039_346_656_037;

/// FNV-1a 64-bit prime.
pub const FNV_PRIME: u64 = 1_099_511_628_211;

// =============================================================================
// Hash computation
// =============================================================================

/// Computes the 64-bit FNV-1a hash of the key's bytes.
///
/// Each byte is XORed into the running hash, which is then multiplied by
/// [`FNV_PRIME`]. There is no length prefix and no finalization step, so the
/// result differs from `str`'s `Hash` impl (which appends a terminator byte).
#[inline]
#[must_use]
pub const fn fnv1a_64(key: &str) -> u64 {
    let bytes = key.as_bytes();
    let mut hash = FNV_OFFSET_BASIS;
    let mut index = 0;
    while index < bytes.len() {
        hash ^= bytes[index] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        index += 1;
    }
    hash
}

/// Masks a hash down to a bucket index.
///
/// `bucket_count` must be a power of two.
#[inline]
#[must_use]
pub const fn bucket_index(hash: u64, bucket_count: usize) -> usize {
    debug_assert!(bucket_count.is_power_of_two());
    // Truncation is fine: the mask is below `bucket_count`, which fits in usize.
    #[allow(clippy::cast_possible_truncation)]
    let index = (hash & (bucket_count as u64 - 1)) as usize;
    index
}

// =============================================================================
// Hasher
// =============================================================================

/// A [`Hasher`] computing FNV-1a over everything written to it.
///
/// Feeding a key through `write(key.as_bytes())` yields the same value as
/// [`fnv1a_64`]. Going through `key.hash(&mut hasher)` does not, because `str`
/// writes an extra `0xff` terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv1aHasher {
    hash: u64,
}

impl Fnv1aHasher {
    /// Creates a hasher initialized with [`FNV_OFFSET_BASIS`].
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hash: FNV_OFFSET_BASIS,
        }
    }
}

impl Default for Fnv1aHasher {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1aHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.hash ^= u64::from(*byte);
            self.hash = self.hash.wrapping_mul(FNV_PRIME);
        }
    }
}

/// [`BuildHasher`] for [`Fnv1aHasher`].
///
/// Lets other std collections share the map's hash function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildFnv1aHasher;

impl BuildHasher for BuildFnv1aHasher {
    type Hasher = Fnv1aHasher;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        Fnv1aHasher::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
