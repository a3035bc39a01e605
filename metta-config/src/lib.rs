//! Shared configuration loader for the metta-highlight toolchain.
//!
//! `defaults/metta.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`HighlightConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use metta_highlight::formats::{FormatRegistry, HtmlFormat, JsonFormat, SimpleFormat};
use metta_highlight::{Highlighter, LanguageRegistry};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/metta.default.toml");

/// Prefix of environment variables read by [`Loader::with_environment`]
pub const ENV_PREFIX: &str = "METTA_HL";

/// Top-level configuration consumed by metta-highlight applications.
#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    pub highlight: DefaultsConfig,
    pub html: HtmlConfig,
    pub json: JsonConfig,
}

/// What to highlight with when the caller doesn't say.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    pub language: String,
    pub format: String,
}

/// Mirrors the knobs exposed by the HTML format.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub class_prefix: String,
    pub include_aliases: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    pub pretty: bool,
}

impl HighlightConfig {
    /// Format registry with the built-in formats configured from this file
    pub fn formats(&self) -> FormatRegistry {
        let mut registry = FormatRegistry::new();
        registry.register(HtmlFormat::new(
            self.html.class_prefix.clone(),
            self.html.include_aliases,
        ));
        registry.register(JsonFormat {
            pretty: self.json.pretty,
        });
        registry.register(SimpleFormat);
        registry
    }

    /// Highlighter over the built-in languages, rendering with the configured
    /// default format
    pub fn highlighter(&self) -> Highlighter {
        Highlighter::new(LanguageRegistry::with_defaults(), self.formats())
            .with_format(self.highlight.format.clone())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `METTA_HL__SECTION__KEY` environment variables
    /// (e.g. `METTA_HL__HIGHLIGHT__FORMAT=json`).
    pub fn with_environment(mut self) -> Self {
        let source = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<HighlightConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<HighlightConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.highlight.language, "metta");
        assert_eq!(config.highlight.format, "html");
        assert_eq!(config.html.class_prefix, "token");
        assert!(config.html.include_aliases);
        assert!(!config.json.pretty);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("highlight.format", "json")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.highlight.format, "json");
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[html]\nclass_prefix = \"hl\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.html.class_prefix, "hl");
        assert!(config.html.include_aliases);
        assert_eq!(config.highlight.language, "metta");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/metta-highlight.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.highlight.format, "html");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new()
            .with_file("/nonexistent/metta-highlight.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn reads_environment_overrides() {
        std::env::set_var("METTA_HL__JSON__PRETTY", "true");
        let config = Loader::new()
            .with_environment()
            .build()
            .expect("config to build");
        std::env::remove_var("METTA_HL__JSON__PRETTY");
        assert!(config.json.pretty);
    }

    #[test]
    fn highlighter_uses_configured_html_classes() {
        let config = Loader::new()
            .set_override("html.class_prefix", "")
            .expect("override to apply")
            .set_override("html.include_aliases", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        let html = config.highlighter().highlight("metta", "$x").unwrap();
        assert_eq!(html, "<span class=\"variable\">$x</span>");
    }

    #[test]
    fn highlighter_uses_configured_format() {
        let config = Loader::new()
            .set_override("highlight.format", "simple")
            .expect("override to apply")
            .build()
            .expect("config to build");
        let listing = config.highlighter().highlight("metta", "!").unwrap();
        assert_eq!(listing, "metta-execute@0..1 \"!\"\n");
    }
}
