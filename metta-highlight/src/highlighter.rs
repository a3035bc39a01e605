//! Language lookup plus output format in one call
//!
//! A [`Highlighter`] owns a language registry, a format registry and the name
//! of the format to render with. `highlight` is pure: the same language and
//! source always render to the same output.

use crate::error::HighlightError;
use crate::formats::FormatRegistry;
use crate::registry::LanguageRegistry;
use crate::token::Token;

/// Default output format name
pub const DEFAULT_FORMAT: &str = "html";

#[derive(Debug)]
pub struct Highlighter {
    languages: LanguageRegistry,
    formats: FormatRegistry,
    format: String,
}

impl Highlighter {
    pub fn new(languages: LanguageRegistry, formats: FormatRegistry) -> Self {
        Self {
            languages,
            formats,
            format: DEFAULT_FORMAT.to_string(),
        }
    }

    /// Render with the named format instead of the default
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn languages(&self) -> &LanguageRegistry {
        &self.languages
    }

    pub fn formats(&self) -> &FormatRegistry {
        &self.formats
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    /// Tokenize `source` with the grammar registered for `language`
    pub fn tokens<'h, 's>(
        &'h self,
        language: &str,
        source: &'s str,
    ) -> Result<Vec<Token<'h, 's>>, HighlightError> {
        let grammar = self.languages.get(language)?;
        Ok(grammar.tokenize(source).collect())
    }

    /// Tokenize and render `source`
    pub fn highlight(&self, language: &str, source: &str) -> Result<String, HighlightError> {
        let tokens = self.tokens(language, source)?;
        Ok(self.formats.serialize(&tokens, &self.format)?)
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(LanguageRegistry::with_defaults(), FormatRegistry::with_defaults())
    }
}
