//! Shader chain descriptions of the form `"a ! b ! c"`.

use std::fmt;
use std::str::FromStr;

use super::error::ShaderStoreError;
use super::store::ShaderStore;

/// Maximum number of shader stages in one pipeline.
pub const MAX_SHADER_STAGES: usize = 8;

/// Separator between stage names in a pipeline description.
pub const STAGE_SEPARATOR: char = '!';

/// An ordered list of shader names to apply to a stream.
///
/// # Examples
///
/// ```rust
/// use chainmap::shader::ShaderPipeline;
///
/// let pipeline = ShaderPipeline::parse("horizontal_flip ! invert_color ! crt_effect").unwrap();
/// assert_eq!(pipeline.stages(), ["horizontal_flip", "invert_color", "crt_effect"]);
/// assert_eq!(pipeline.to_string(), "horizontal_flip ! invert_color ! crt_effect");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderPipeline {
    stages: Vec<String>,
}

/// A pipeline stage together with its source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStage<'a> {
    /// Shader name.
    pub name: &'a str,
    /// Shader source as stored.
    pub source: &'a str,
}

impl ShaderPipeline {
    /// Parses a `!`-separated description.
    ///
    /// Whitespace around stage names is ignored. A blank description yields
    /// an empty pipeline.
    ///
    /// # Errors
    ///
    /// - [`ShaderStoreError::EmptyStage`] if a stage between separators is blank
    /// - [`ShaderStoreError::TooManyStages`] if there are more than
    ///   [`MAX_SHADER_STAGES`] stages
    pub fn parse(description: &str) -> Result<Self, ShaderStoreError> {
        if description.trim().is_empty() {
            return Ok(Self { stages: Vec::new() });
        }

        let stages = description
            .split(STAGE_SEPARATOR)
            .map(str::trim)
            .enumerate()
            .map(|(position, stage)| {
                if stage.is_empty() {
                    Err(ShaderStoreError::EmptyStage {
                        description: description.to_string(),
                        position,
                    })
                } else {
                    Ok(stage.to_string())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if stages.len() > MAX_SHADER_STAGES {
            return Err(ShaderStoreError::TooManyStages {
                count: stages.len(),
            });
        }
        Ok(Self { stages })
    }

    /// Returns the stage names in order.
    #[must_use]
    pub fn stages(&self) -> &[String] {
        &self.stages
    }

    /// Returns the number of stages.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the pipeline has no stages.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Looks every stage up in `store`.
    ///
    /// # Errors
    ///
    /// Returns [`ShaderStoreError::UnknownShader`] for the first stage that is
    /// not in the store.
    pub fn resolve<'a>(&'a self, store: &'a ShaderStore) -> Result<Vec<ResolvedStage<'a>>, ShaderStoreError> {
        self.stages
            .iter()
            .map(|name| {
                store
                    .get(name)
                    .map(|source| ResolvedStage { name, source })
                    .ok_or_else(|| ShaderStoreError::UnknownShader { name: name.clone() })
            })
            .collect()
    }
}

impl FromStr for ShaderPipeline {
    type Err = ShaderStoreError;

    fn from_str(description: &str) -> Result<Self, Self::Err> {
        Self::parse(description)
    }
}

impl fmt::Display for ShaderPipeline {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, stage) in self.stages.iter().enumerate() {
            if index > 0 {
                write!(formatter, " {STAGE_SEPARATOR} ")?;
            }
            formatter.write_str(stage)?;
        }
        Ok(())
    }
}
