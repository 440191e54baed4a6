//! Shader source cache keyed by shader name.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::config::ShaderStoreConfig;
use super::error::ShaderStoreError;
use super::pipeline::ShaderPipeline;
use crate::collections::StringHashMap;

/// Directive that marks a source as already versioned.
const VERSION_DIRECTIVE: &str = "#version";

/// A cache from shader name to GLSL source text.
///
/// Shaders are named after the stem of the file they were loaded from, so
/// `shaders/invert_color.frag` is served as `invert_color`. Loading a file
/// whose name is already present replaces the cached source.
///
/// # Examples
///
/// ```rust
/// use chainmap::shader::{ShaderPipeline, ShaderStore};
///
/// let mut store = ShaderStore::new();
/// store.insert("vertical_flip", "void main() { /* flip */ }");
/// store.insert("invert_color", "void main() { /* invert */ }");
///
/// let pipeline = ShaderPipeline::parse("vertical_flip ! invert_color").unwrap();
/// let stages = pipeline.resolve(&store).unwrap();
/// assert_eq!(stages.len(), 2);
///
/// // Unversioned sources are served with the configured header
/// assert!(store.get_versioned("invert_color").unwrap().starts_with("#version 130"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShaderStore {
    shaders: StringHashMap<String>,
    config: ShaderStoreConfig,
}

impl ShaderStore {
    /// Creates an empty store with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the given configuration.
    #[must_use]
    pub fn with_config(config: ShaderStoreConfig) -> Self {
        Self {
            shaders: StringHashMap::new(),
            config,
        }
    }

    /// Returns the store's configuration.
    #[must_use]
    pub const fn config(&self) -> &ShaderStoreConfig {
        &self.config
    }

    /// Returns the number of cached shaders.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.shaders.len()
    }

    /// Returns `true` if no shader is cached.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.shaders.is_empty()
    }

    /// Caches `source` under `name`, returning the source it replaced.
    pub fn insert(&mut self, name: &str, source: impl Into<String>) -> Option<String> {
        self.shaders.insert(name, source.into())
    }

    /// Returns the source cached under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.shaders.get(name).map(String::as_str)
    }

    /// Returns the source cached under `name`, prefixed with the configured
    /// version directive when the source does not declare one.
    #[must_use]
    pub fn get_versioned(&self, name: &str) -> Option<Cow<'_, str>> {
        let source = self.get(name)?;
        if source.trim_start().starts_with(VERSION_DIRECTIVE) {
            Some(Cow::Borrowed(source))
        } else {
            Some(Cow::Owned(format!("{}{source}", self.config.default_version)))
        }
    }

    /// Returns `true` if a shader named `name` is cached.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.shaders.contains_key(name)
    }

    /// Returns the cached shader names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.shaders.keys()
    }

    /// Returns `(name, source)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.shaders
            .iter()
            .map(|(name, source)| (name, source.as_str()))
    }

    /// Reads one shader file into the store.
    ///
    /// Returns the previously cached source if the name was already present.
    ///
    /// # Errors
    ///
    /// - [`ShaderStoreError::InvalidFileName`] if the path has no UTF-8 stem
    /// - [`ShaderStoreError::ReadFile`] if the file cannot be read as text
    /// - [`ShaderStoreError::Map`] if the entry cannot be allocated
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<Option<String>, ShaderStoreError> {
        let path = path.as_ref();
        let name = shader_name(path)?;
        let source = fs::read_to_string(path).map_err(|source| ShaderStoreError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let bytes = source.len();

        let previous = self.shaders.try_insert(name, source)?;
        if previous.is_some() {
            warn!(shader = name, path = %path.display(), "replaced previously loaded shader");
        }
        debug!(shader = name, path = %path.display(), bytes, "loaded shader");
        Ok(previous)
    }

    /// Loads every accepted file in `directory`, in file-name order.
    ///
    /// Subdirectories are skipped. Returns the number of files loaded.
    ///
    /// # Errors
    ///
    /// Returns [`ShaderStoreError::ReadDirectory`] if the directory cannot be
    /// listed, or the first error from [`load_file`](Self::load_file).
    pub fn load_directory(&mut self, directory: impl AsRef<Path>) -> Result<usize, ShaderStoreError> {
        let directory = directory.as_ref();
        let read_directory_error = |source| ShaderStoreError::ReadDirectory {
            path: directory.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(directory).map_err(read_directory_error)? {
            let path = entry.map_err(read_directory_error)?.path();
            if !path.is_file() {
                continue;
            }
            let extension = path.extension().and_then(|extension| extension.to_str());
            if self.config.accepts_extension(extension) {
                paths.push(path);
            } else {
                debug!(path = %path.display(), "skipping file with unaccepted extension");
            }
        }
        paths.sort();

        for path in &paths {
            self.load_file(path)?;
        }
        info!(
            directory = %directory.display(),
            loaded = paths.len(),
            cached = self.len(),
            "loaded shaders from directory"
        );
        Ok(paths.len())
    }

    /// Loads the configured source directory.
    ///
    /// # Errors
    ///
    /// See [`load_directory`](Self::load_directory).
    pub fn load_configured(&mut self) -> Result<usize, ShaderStoreError> {
        let directory: PathBuf = self.config.source_directory.clone();
        self.load_directory(directory)
    }

    /// Parses the configured default pipeline.
    ///
    /// # Errors
    ///
    /// See [`ShaderPipeline::parse`].
    pub fn default_pipeline(&self) -> Result<ShaderPipeline, ShaderStoreError> {
        ShaderPipeline::parse(&self.config.default_pipeline)
    }

    /// Returns an independent copy of the cached sources.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        Self {
            shaders: self.shaders.copy_with(String::clone),
            config: self.config.clone(),
        }
    }

    /// Drops every cached shader. The store stays usable.
    pub fn clear(&mut self) {
        let released = self.len();
        self.shaders.clear();
        debug!(released, "cleared shader store");
    }
}

/// Derives the shader name from a file path.
fn shader_name(path: &Path) -> Result<&str, ShaderStoreError> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| ShaderStoreError::InvalidFileName {
            path: path.to_path_buf(),
        })
}
