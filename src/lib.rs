//! # chainmap
//!
//! A string-keyed hash map with explicit value lifecycle control, and the
//! shader source cache it was written for.
//!
//! ## Overview
//!
//! - **Collections**: [`StringHashMap`](collections::StringHashMap), a
//!   separate-chaining map with FNV-1a hashing and 75% load-factor growth.
//!   Values are released by dropping, by a caller-supplied destructor, or by
//!   handing them back to the caller.
//! - **Shader**: [`ShaderStore`](shader::ShaderStore), a name-to-source cache
//!   loaded from a directory, and [`ShaderPipeline`](shader::ShaderPipeline),
//!   the `"a ! b ! c"` chain description resolved against it.
//!
//! ## Feature Flags
//!
//! - `collections`: the hash map
//! - `shader`: the shader store (implies `collections`, pulls in `tracing`)
//! - `serde`: `Serialize`/`Deserialize` for the map and the store configuration
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use chainmap::prelude::*;
//!
//! let mut map = StringHashMap::new();
//! map.insert("a", 1);
//! map.insert("b", 2);
//! assert_eq!(map.insert("b", 99), Some(2));
//! assert_eq!(map.get("b"), Some(&99));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use chainmap::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "collections")]
    pub use crate::collections::*;

    #[cfg(feature = "shader")]
    pub use crate::shader::*;
}

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "shader")]
pub mod shader;
