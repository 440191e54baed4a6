//! Mutable collections keyed by text.
//!
//! - [`StringHashMap`]: separate-chaining hash map with FNV-1a hashing,
//!   power-of-two bucket counts and 75% load-factor growth
//! - [`hash`]: the hash function and bucket masking used by the map
//!
//! # Examples
//!
//! ```rust
//! use chainmap::collections::StringHashMap;
//!
//! let mut cache = StringHashMap::new();
//! cache.insert("invert_color", "void main() {}".to_string());
//!
//! // A deep copy owns its own values
//! let snapshot = cache.copy_with(String::clone);
//! cache.insert("invert_color", String::new());
//! assert_eq!(snapshot.get("invert_color").map(String::as_str), Some("void main() {}"));
//!
//! // Teardown clears the caller's handle
//! let mut handle = Some(cache);
//! StringHashMap::cleanup(&mut handle);
//! assert!(handle.is_none());
//! ```

mod error;
pub mod hash;
mod string_hash_map;

pub use error::MapError;
pub use string_hash_map::Cursor;
pub use string_hash_map::DEFAULT_BUCKET_COUNT;
pub use string_hash_map::Entry;
pub use string_hash_map::IntoIter;
pub use string_hash_map::Iter;
pub use string_hash_map::IterMut;
pub use string_hash_map::StringHashMap;
