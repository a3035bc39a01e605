//! Grammar definition: an ordered table of named pattern rules
//!
//! A grammar is plain data. Rules are declared in priority order (first
//! declared wins when two rules match at the same offset) and compiled once by
//! [`GrammarBuilder::build`]. Malformed patterns are reported there, never
//! during tokenization.
//!
//! ```text
//! let grammar = Grammar::builder()
//!     .rule(RuleDefinition::new("comment", ";.*").greedy())
//!     .rule(RuleDefinition::new("equality", r"\s*=").lookbehind_literal("("))
//!     .rule(RuleDefinition::new("symbol", r"[\w-]+"))
//!     .build()?;
//! ```

pub mod alternatives;
pub mod lookbehind;

use crate::error::GrammarError;
use crate::tokenizer::Tokens;
use alternatives::split_alternatives;
pub use lookbehind::{Lookbehind, LookbehindSource};
use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;

/// An uncompiled rule, as written by a grammar author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDefinition {
    pub name: String,
    pub pattern: String,
    pub lookbehind: Option<LookbehindSource>,
    pub greedy: bool,
    pub alias: Option<String>,
}

impl RuleDefinition {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            lookbehind: None,
            greedy: false,
            alias: None,
        }
    }

    /// Prefer the longest top-level alternative at the match start
    pub fn greedy(mut self) -> Self {
        self.greedy = true;
        self
    }

    /// Presentation label used instead of the name when emitting tokens
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Require the text before the match to end with `literal`
    pub fn lookbehind_literal(mut self, literal: impl Into<String>) -> Self {
        self.lookbehind = Some(LookbehindSource::Literal(literal.into()));
        self
    }

    /// Require the text before the match to end with a match of `pattern`
    pub fn lookbehind_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.lookbehind = Some(LookbehindSource::Pattern(pattern.into()));
        self
    }

    fn compile(self) -> Result<Rule, GrammarError> {
        let pattern = Regex::new(&self.pattern).map_err(|e| GrammarError::InvalidPattern {
            rule: self.name.clone(),
            message: e.to_string(),
        })?;

        let lookbehind = self
            .lookbehind
            .as_ref()
            .map(Lookbehind::compile)
            .transpose()
            .map_err(|e| GrammarError::InvalidLookbehind {
                rule: self.name.clone(),
                message: e.to_string(),
            })?;

        // Branches are only needed when there is a choice to make
        let alternatives = if self.greedy {
            let branches = split_alternatives(&self.pattern);
            if branches.len() > 1 {
                branches
                    .iter()
                    .map(|branch| Regex::new(branch))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| GrammarError::InvalidPattern {
                        rule: self.name.clone(),
                        message: e.to_string(),
                    })?
            } else {
                Vec::new()
            }
        } else {
            Vec::new()
        };

        Ok(Rule {
            name: self.name,
            source: self.pattern,
            pattern,
            alternatives,
            lookbehind,
            greedy: self.greedy,
            alias: self.alias,
        })
    }
}

/// A compiled rule
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    source: String,
    pattern: Regex,
    alternatives: Vec<Regex>,
    lookbehind: Option<Lookbehind>,
    greedy: bool,
    alias: Option<String>,
}

impl Rule {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The pattern as written in the definition
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_greedy(&self) -> bool {
        self.greedy
    }

    pub fn lookbehind(&self) -> Option<&Lookbehind> {
        self.lookbehind.as_ref()
    }

    /// Find this rule's earliest accepted match starting at or after `from`
    ///
    /// Candidates rejected by the lookbehind are skipped and the search
    /// resumes one character past the rejected start.
    pub(crate) fn find_from(&self, text: &str, from: usize) -> Option<(usize, usize)> {
        let mut at = from;
        while at <= text.len() {
            let m = self.pattern.find_at(text, at)?;
            let start = m.start();
            let accepted = self
                .lookbehind
                .as_ref()
                .map_or(true, |lb| lb.holds(&text[..start]));
            if accepted {
                return Some((start, self.longest_end(text, start, m.end())));
            }
            at = next_boundary(text, start)?;
        }
        None
    }

    /// Widen a match to the longest alternative starting at `start`
    fn longest_end(&self, text: &str, start: usize, end: usize) -> usize {
        self.alternatives
            .iter()
            .filter_map(|branch| branch.find_at(text, start))
            .filter(|m| m.start() == start)
            .map(|m| m.end())
            .fold(end, usize::max)
    }
}

/// Offset of the character boundary following `offset`, if any
pub(crate) fn next_boundary(text: &str, offset: usize) -> Option<usize> {
    text[offset..].chars().next().map(|c| offset + c.len_utf8())
}

/// An immutable, ordered set of rules
///
/// Cloning is cheap; the compiled rules are shared.
#[derive(Debug, Clone)]
pub struct Grammar {
    rules: Arc<[Rule]>,
}

impl Grammar {
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    /// Compile a grammar from definitions in priority order
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = RuleDefinition>,
    ) -> Result<Self, GrammarError> {
        definitions
            .into_iter()
            .fold(GrammarBuilder::new(), GrammarBuilder::rule)
            .build()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Tokenize `text` with this grammar
    pub fn tokenize<'g, 't>(&'g self, text: &'t str) -> Tokens<'g, 't> {
        crate::tokenizer::tokenize(self, text)
    }
}

/// Collects rule definitions and compiles them into a [`Grammar`]
#[derive(Debug, Clone, Default)]
pub struct GrammarBuilder {
    definitions: Vec<RuleDefinition>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule; it gets lower priority than every rule added before it
    pub fn rule(mut self, definition: RuleDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    pub fn build(self) -> Result<Grammar, GrammarError> {
        let mut seen = HashSet::new();
        for definition in &self.definitions {
            if !seen.insert(definition.name.as_str()) {
                return Err(GrammarError::DuplicateRule(definition.name.clone()));
            }
        }

        let rules = self
            .definitions
            .into_iter()
            .map(RuleDefinition::compile)
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("built grammar with {} rules", rules.len());
        Ok(Grammar {
            rules: rules.into(),
        })
    }
}
