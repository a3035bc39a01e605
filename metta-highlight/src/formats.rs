//! Format implementations and the registry used to select them
//!
//! - `html`: `<span class="token ...">` markup for documentation pages
//! - `json`: serde_json token arrays
//! - `simple`: one token per line, for debugging grammars

pub mod html;
pub mod json;
pub mod simple;

pub use html::HtmlFormat;
pub use json::JsonFormat;
pub use simple::SimpleFormat;

use crate::error::FormatError;
use crate::format::Format;
use crate::token::Token;
use std::collections::HashMap;

/// Registry of token formats
///
/// Formats can be registered and retrieved by name.
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Serialize tokens using the specified format
    pub fn serialize(&self, tokens: &[Token<'_, '_>], format: &str) -> Result<String, FormatError> {
        self.get(format)?.serialize(tokens)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(HtmlFormat::default());
        registry.register(JsonFormat::default());
        registry.register(SimpleFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("formats", &self.list_formats())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountFormat;
    impl Format for CountFormat {
        fn name(&self) -> &str {
            "count"
        }
        fn serialize(&self, tokens: &[Token<'_, '_>]) -> Result<String, FormatError> {
            Ok(tokens.len().to_string())
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert!(registry.list_formats().is_empty());
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        registry.register(CountFormat);

        assert!(registry.has("count"));
        assert_eq!(registry.list_formats(), vec!["count"]);
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(CountFormat);
        assert_eq!(registry.serialize(&[], "count").unwrap(), "0");
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = FormatRegistry::new();
        match registry.serialize(&[], "nonexistent").unwrap_err() {
            FormatError::FormatNotFound(name) => assert_eq!(name, "nonexistent"),
            _ => panic!("Expected FormatNotFound error"),
        }
    }

    #[test]
    fn test_defaults() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.list_formats(), vec!["html", "json", "simple"]);
    }
}
