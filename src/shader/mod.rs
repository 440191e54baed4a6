//! Shader source cache and shader chain descriptions.
//!
//! This module is the caller-side layer on top of
//! [`StringHashMap`](crate::collections::StringHashMap):
//!
//! - [`ShaderStore`]: loads GLSL sources from a directory and serves them by name
//! - [`ShaderPipeline`]: parses `"a ! b ! c"` chains and resolves them against a store
//! - [`ShaderStoreConfig`]: source directory, accepted extensions, default pipeline
//!   and version header
//!
//! Unlike the map, this layer logs through `tracing`: one `debug` event per
//! loaded file, an `info` summary per directory, and a `warn` when a file
//! replaces an already cached shader.
//!
//! # Examples
//!
//! ```rust,no_run
//! use chainmap::shader::{ShaderStore, ShaderStoreConfig};
//!
//! # fn main() -> Result<(), chainmap::shader::ShaderStoreError> {
//! let mut store = ShaderStore::with_config(ShaderStoreConfig::from_env());
//! store.load_configured()?;
//!
//! let pipeline = store.default_pipeline()?;
//! for stage in pipeline.resolve(&store)? {
//!     println!("{}: {} bytes", stage.name, stage.source.len());
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod pipeline;
mod store;

pub use config::DEFAULT_PIPELINE;
pub use config::DEFAULT_SHADER_VERSION;
pub use config::DEFAULT_SOURCE_DIRECTORY;
pub use config::ShaderStoreConfig;
pub use error::ShaderStoreError;
pub use pipeline::MAX_SHADER_STAGES;
pub use pipeline::ResolvedStage;
pub use pipeline::STAGE_SEPARATOR;
pub use pipeline::ShaderPipeline;
pub use store::ShaderStore;
