//! Error types for the shader store.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::pipeline::MAX_SHADER_STAGES;
use crate::collections::MapError;

/// Errors that can occur while loading shaders or resolving a pipeline.
#[derive(Debug, Error)]
pub enum ShaderStoreError {
    /// The shader source directory could not be listed.
    #[error("failed to read shader directory '{}': {source}", .path.display())]
    ReadDirectory {
        /// The directory that was being listed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A shader file could not be read as UTF-8 text.
    #[error("failed to open shader file '{}': {source}", .path.display())]
    ReadFile {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file has no usable stem to name the shader after.
    #[error("cannot derive a shader name from '{}'", .path.display())]
    InvalidFileName {
        /// The offending path.
        path: PathBuf,
    },

    /// A pipeline description contained an empty stage.
    #[error("pipeline '{description}' has an empty stage at position {position}")]
    EmptyStage {
        /// The full pipeline description.
        description: String,
        /// Zero-based index of the empty stage.
        position: usize,
    },

    /// A pipeline description named more stages than supported.
    #[error("pipeline has {count} stages; at most {max} are supported", max = MAX_SHADER_STAGES)]
    TooManyStages {
        /// Number of stages in the description.
        count: usize,
    },

    /// A pipeline stage names a shader that is not in the store.
    #[error("unknown shader '{name}'")]
    UnknownShader {
        /// The missing shader name.
        name: String,
    },

    /// The backing map could not allocate.
    #[error(transparent)]
    Map(#[from] MapError),
}
