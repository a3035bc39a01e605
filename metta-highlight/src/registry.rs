//! Language registry for grammar lookup by id
//!
//! Grammars are registered under a canonical language id. Extra ids can be
//! aliased to an already registered language; aliases resolve to the same
//! shared [`Grammar`].
//!
//! # Examples
//!
//! ```ignore
//! let mut registry = LanguageRegistry::new();
//! registry.register("metta", languages::metta::grammar());
//! registry.alias("MeTTa", "metta")?;
//!
//! let grammar = registry.get("MeTTa")?;
//! ```

use crate::error::RegistryError;
use crate::grammar::Grammar;
use crate::languages;
use std::collections::HashMap;

/// Registry of named grammars
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: HashMap<String, Grammar>,
    aliases: HashMap<String, String>,
}

impl LanguageRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a grammar
    ///
    /// If a language with the same id already exists, it will be replaced.
    pub fn register(&mut self, id: impl Into<String>, grammar: Grammar) {
        let id = id.into();
        log::debug!("registering language '{}' ({} rules)", id, grammar.len());
        self.aliases.remove(&id);
        self.languages.insert(id, grammar);
    }

    /// Make `alias` resolve to the language registered as `target`
    ///
    /// Fails when `alias` is itself a registered language id, since the
    /// language would always win the lookup.
    pub fn alias(
        &mut self,
        alias: impl Into<String>,
        target: &str,
    ) -> Result<(), RegistryError> {
        let alias = alias.into();
        if self.languages.contains_key(&alias) {
            return Err(RegistryError::AliasShadowsLanguage(alias));
        }
        let canonical = self.resolve(target).map(str::to_string).ok_or_else(|| {
            RegistryError::UnknownAliasTarget {
                alias: alias.clone(),
                target: target.to_string(),
            }
        })?;
        log::debug!("aliasing '{}' to '{}'", alias, canonical);
        self.aliases.insert(alias, canonical);
        Ok(())
    }

    /// Canonical id for an id or alias, if known
    pub fn resolve<'a>(&'a self, id: &'a str) -> Option<&'a str> {
        if self.languages.contains_key(id) {
            return Some(id);
        }
        self.aliases.get(id).map(String::as_str)
    }

    /// Get a grammar by id or alias
    pub fn get(&self, id: &str) -> Result<&Grammar, RegistryError> {
        self.resolve(id)
            .and_then(|canonical| self.languages.get(canonical))
            .ok_or_else(|| RegistryError::LanguageNotFound(id.to_string()))
    }

    /// Check if a language id or alias is known
    pub fn has(&self, id: &str) -> bool {
        self.resolve(id).is_some()
    }

    /// List canonical language ids (sorted)
    pub fn list_languages(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.languages.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// List aliases of a canonical language id (sorted)
    pub fn aliases_of(&self, id: &str) -> Vec<String> {
        let mut aliases: Vec<_> = self
            .aliases
            .iter()
            .filter(|(_, target)| target.as_str() == id)
            .map(|(alias, _)| alias.clone())
            .collect();
        aliases.sort();
        aliases
    }

    /// Create a registry with the built-in languages
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(languages::metta::LANGUAGE_ID, languages::metta::grammar());
        for alias in languages::metta::ALIASES {
            registry.aliases.insert(
                alias.to_string(),
                languages::metta::LANGUAGE_ID.to_string(),
            );
        }

        registry
    }
}
