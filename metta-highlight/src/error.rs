//! Error types for grammar construction, language lookup and serialization
//!
//! Tokenization itself has no error type: once a [`Grammar`](crate::grammar::Grammar)
//! is built, every input produces a complete token sequence.

use thiserror::Error;

/// Errors raised while building a grammar from rule definitions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GrammarError {
    /// A rule's pattern failed to compile
    #[error("invalid pattern for rule '{rule}': {message}")]
    InvalidPattern { rule: String, message: String },

    /// A rule's lookbehind pattern failed to compile
    #[error("invalid lookbehind for rule '{rule}': {message}")]
    InvalidLookbehind { rule: String, message: String },

    /// Two rules in the same grammar share a name
    #[error("duplicate rule name '{0}'")]
    DuplicateRule(String),
}

/// Errors raised by the language registry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("language not found: {0}")]
    LanguageNotFound(String),

    #[error("cannot alias '{alias}' to unregistered language '{target}'")]
    UnknownAliasTarget { alias: String, target: String },

    /// The alias is already the id of a registered language
    #[error("cannot alias '{0}': a language with that id is registered")]
    AliasShadowsLanguage(String),
}

/// Errors raised while serializing tokens
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("format not found: {0}")]
    FormatNotFound(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Errors surfaced by [`Highlighter`](crate::highlighter::Highlighter)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HighlightError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_error_display() {
        let err = GrammarError::InvalidPattern {
            rule: "string".to_string(),
            message: "unclosed group".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid pattern for rule 'string': unclosed group"
        );
    }

    #[test]
    fn test_highlight_error_is_transparent() {
        let err: HighlightError = RegistryError::LanguageNotFound("lisp".to_string()).into();
        assert_eq!(err.to_string(), "language not found: lisp");
    }
}
