//! Configuration loading.
//!
//! `defaults/scitok.default.toml` is embedded into the binary so that the
//! documented defaults and runtime behavior stay in sync. User files and
//! single-key overrides are layered on top via [`Loader`] before
//! deserializing into [`ScitokConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::error::BuildError;
use crate::tokenizer::{ExceptionTable, NoMatch, Tokenizer, TokenizerBuilder, UrlMatch};

const DEFAULT_TOML: &str = include_str!("../defaults/scitok.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct ScitokConfig {
    pub exceptions: ExceptionsConfig,
    pub token_match: TokenMatchConfig,
    pub preprocess: PreprocessConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExceptionsConfig {
    pub english_defaults: bool,
    #[serde(default)]
    pub extra_abbreviations: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenMatchConfig {
    pub urls: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreprocessConfig {
    pub remove_line_wrap_hyphens: bool,
}

impl ScitokConfig {
    /// Build the tokenizer this configuration describes.
    pub fn build_tokenizer(&self) -> Result<Tokenizer, BuildError> {
        let defaults = if self.exceptions.english_defaults {
            ExceptionTable::english()
        } else {
            ExceptionTable::new()
        };
        let mut additions = ExceptionTable::scientific();
        for abbreviation in &self.exceptions.extra_abbreviations {
            additions.insert_whole(abbreviation);
        }

        let builder = TokenizerBuilder::new()
            .default_exceptions(defaults)
            .exceptions(additions);
        let builder = if self.token_match.urls {
            builder.token_match(UrlMatch)
        } else {
            builder.token_match(NoMatch)
        };
        builder.build()
    }
}

/// Builds a [`ScitokConfig`] from the embedded defaults plus whatever the
/// caller stacks on top. Later sources win key by key, so a user file only
/// needs the keys it changes.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// `--config FILE`: a missing file fails [`Loader::build`].
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.add_toml(path.as_ref(), true)
    }

    /// A file that may or may not be present, such as a per-project
    /// `scitok.toml`.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.add_toml(path.as_ref(), false)
    }

    fn add_toml(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Set one dotted key, e.g. `preprocess.remove_line_wrap_hyphens`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<ScitokConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The shipped defaults with nothing layered on top.
pub fn load_defaults() -> Result<ScitokConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.exceptions.english_defaults);
        assert!(config.exceptions.extra_abbreviations.is_empty());
        assert!(config.token_match.urls);
        assert!(config.preprocess.remove_line_wrap_hyphens);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("token_match.urls", false)
            .expect("override to apply")
            .set_override("preprocess.remove_line_wrap_hyphens", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(!config.token_match.urls);
        assert!(!config.preprocess.remove_line_wrap_hyphens);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new().with_file("/nonexistent/scitok.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/scitok.toml")
            .build()
            .expect("config to build");
        assert!(config.token_match.urls);
    }

    #[test]
    fn default_config_builds_the_scientific_tokenizer() {
        let tokenizer = load_defaults().unwrap().build_tokenizer().unwrap();
        let texts: Vec<_> = tokenizer.tokenize("see Fig. 2").iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["see", "Fig.", "2"]);
        assert!(tokenizer.exceptions().contains("don't"));
    }

    #[test]
    fn extra_abbreviations_and_no_english_defaults() {
        let mut config = load_defaults().unwrap();
        config.exceptions.english_defaults = false;
        config.exceptions.extra_abbreviations = vec!["resp.".to_string()];
        let tokenizer = config.build_tokenizer().unwrap();
        assert!(tokenizer.exceptions().contains("resp."));
        assert!(tokenizer.exceptions().contains("Fig."));
        assert!(!tokenizer.exceptions().contains("don't"));
    }
}
