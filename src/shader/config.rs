//! Configuration for [`ShaderStore`](super::ShaderStore).

use std::env;
use std::path::PathBuf;

/// Default directory shader sources are loaded from.
pub const DEFAULT_SOURCE_DIRECTORY: &str = "./shaders";

/// Default shader chain applied to the input stream.
pub const DEFAULT_PIPELINE: &str = "vertical_flip ! invert_color";

/// GLSL version directive prepended to sources that do not declare one.
pub const DEFAULT_SHADER_VERSION: &str = "#version 130\n";

/// Configuration for loading and serving shader sources.
///
/// Build it with [`Default`], [`ShaderStoreConfig::from_env`] or the `with_*`
/// methods.
///
/// # Examples
///
/// ```rust
/// use chainmap::shader::ShaderStoreConfig;
///
/// let config = ShaderStoreConfig::default()
///     .with_source_directory("../shaders")
///     .with_extensions(["frag", "glsl"]);
///
/// assert!(config.accepts_extension(Some("frag")));
/// assert!(!config.accepts_extension(Some("txt")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShaderStoreConfig {
    /// Directory scanned by [`ShaderStore::load_configured`](super::ShaderStore::load_configured).
    pub source_directory: PathBuf,
    /// File extensions (without the dot) that are loaded. Empty accepts all.
    pub extensions: Vec<String>,
    /// Pipeline description used when the host supplies none.
    pub default_pipeline: String,
    /// Version directive for sources that lack `#version`.
    pub default_version: String,
}

impl Default for ShaderStoreConfig {
    fn default() -> Self {
        Self {
            source_directory: PathBuf::from(DEFAULT_SOURCE_DIRECTORY),
            extensions: Vec::new(),
            default_pipeline: DEFAULT_PIPELINE.to_string(),
            default_version: DEFAULT_SHADER_VERSION.to_string(),
        }
    }
}

impl ShaderStoreConfig {
    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SHADER_SRC_PATH`: source directory (default: `./shaders`)
    /// - `SHADER_PIPELINE`: default pipeline (default: `vertical_flip ! invert_color`)
    /// - `SHADER_EXTENSIONS`: comma-separated extensions (default: all files)
    ///
    /// Empty or whitespace-only values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Creates a configuration from a variable lookup, with the same names and
    /// fallbacks as [`from_env`](Self::from_env).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainmap::shader::ShaderStoreConfig;
    ///
    /// let config = ShaderStoreConfig::from_lookup(|name| match name {
    ///     "SHADER_PIPELINE" => Some("crt_effect".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.default_pipeline, "crt_effect");
    /// ```
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(directory) = non_empty("SHADER_SRC_PATH") {
            config.source_directory = PathBuf::from(directory);
        }
        if let Some(pipeline) = non_empty("SHADER_PIPELINE") {
            config.default_pipeline = pipeline;
        }
        if let Some(extensions) = non_empty("SHADER_EXTENSIONS") {
            config.extensions = parse_extensions(&extensions);
        }
        config
    }

    /// Sets the source directory.
    #[must_use]
    pub fn with_source_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.source_directory = directory.into();
        self
    }

    /// Restricts loading to the given extensions.
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the default pipeline description.
    #[must_use]
    pub fn with_default_pipeline(mut self, pipeline: impl Into<String>) -> Self {
        self.default_pipeline = pipeline.into();
        self
    }

    /// Sets the version directive prepended to unversioned sources.
    #[must_use]
    pub fn with_default_version(mut self, version: impl Into<String>) -> Self {
        self.default_version = version.into();
        self
    }

    /// Returns `true` if a file with this extension should be loaded.
    #[must_use]
    pub fn accepts_extension(&self, extension: Option<&str>) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        extension.is_some_and(|extension| {
            self.extensions
                .iter()
                .any(|accepted| accepted.trim_start_matches('.').eq_ignore_ascii_case(extension))
        })
    }
}

fn parse_extensions(list: &str) -> Vec<String> {
    list.split(',')
        .map(|extension| extension.trim().trim_start_matches('.'))
        .filter(|extension| !extension.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_default_values() {
        let config = ShaderStoreConfig::default();
        assert_eq!(config.source_directory, PathBuf::from("./shaders"));
        assert_eq!(config.default_pipeline, "vertical_flip ! invert_color");
        assert_eq!(config.default_version, "#version 130\n");
        assert!(config.extensions.is_empty());
    }

    #[rstest]
    #[case(Some("frag"), true)]
    #[case(Some("FRAG"), true)]
    #[case(Some("vert"), false)]
    #[case(None, false)]
    fn test_accepts_extension_with_filter(#[case] extension: Option<&str>, #[case] expected: bool) {
        let config = ShaderStoreConfig::default().with_extensions([".frag"]);
        assert_eq!(config.accepts_extension(extension), expected);
    }

    #[rstest]
    fn test_empty_filter_accepts_everything() {
        let config = ShaderStoreConfig::default();
        assert!(config.accepts_extension(None));
        assert!(config.accepts_extension(Some("anything")));
    }

    #[rstest]
    #[case("frag,glsl", vec!["frag", "glsl"])]
    #[case(" .frag , ,glsl ", vec!["frag", "glsl"])]
    #[case(",", vec![])]
    fn test_parse_extensions(#[case] list: &str, #[case] expected: Vec<&str>) {
        assert_eq!(parse_extensions(list), expected);
    }

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
        }
    }

    #[rstest]
    fn test_from_lookup_reads_every_variable() {
        let vars = [
            ("SHADER_SRC_PATH", "../shaders"),
            ("SHADER_PIPELINE", " horizontal_flip ! crt_effect "),
            ("SHADER_EXTENSIONS", "frag, .glsl"),
        ];
        let config = ShaderStoreConfig::from_lookup(lookup_from(&vars));

        assert_eq!(config.source_directory, PathBuf::from("../shaders"));
        assert_eq!(config.default_pipeline, "horizontal_flip ! crt_effect");
        assert_eq!(config.extensions, vec!["frag".to_string(), "glsl".to_string()]);
        assert_eq!(config.default_version, DEFAULT_SHADER_VERSION);
    }

    #[rstest]
    #[case::unset(&[])]
    #[case::empty(&[("SHADER_SRC_PATH", ""), ("SHADER_PIPELINE", ""), ("SHADER_EXTENSIONS", "")])]
    #[case::blank(&[("SHADER_SRC_PATH", "   "), ("SHADER_PIPELINE", "\t"), ("SHADER_EXTENSIONS", " ")])]
    fn test_from_lookup_blank_values_fall_back_to_defaults(#[case] vars: &[(&str, &str)]) {
        let config = ShaderStoreConfig::from_lookup(lookup_from(vars));
        assert_eq!(config, ShaderStoreConfig::default());
    }

    #[rstest]
    fn test_from_lookup_extensions_of_only_separators_accept_everything() {
        let config = ShaderStoreConfig::from_lookup(lookup_from(&[("SHADER_EXTENSIONS", ", ,")]));
        assert!(config.extensions.is_empty());
        assert!(config.accepts_extension(Some("txt")));
    }

    #[rstest]
    fn test_builder_methods() {
        let config = ShaderStoreConfig::default()
            .with_source_directory("/tmp/shaders")
            .with_default_pipeline("crt_effect")
            .with_default_version("#version 330\n");
        assert_eq!(config.source_directory, PathBuf::from("/tmp/shaders"));
        assert_eq!(config.default_pipeline, "crt_effect");
        assert_eq!(config.default_version, "#version 330\n");
    }
}
