//! Zero-width preconditions on the text preceding a match
//!
//! The regex engine has no native lookbehind, so a rule that must be preceded
//! by something carries an explicit predicate instead. The predicate peeks
//! backward from the candidate start without consuming any input.

use regex::Regex;

/// Source form of a lookbehind, as written in a rule definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookbehindSource {
    /// The preceding text must end with this literal
    Literal(String),
    /// The preceding text must end with a match of this pattern
    Pattern(String),
}

/// A compiled lookbehind predicate
#[derive(Debug, Clone)]
pub enum Lookbehind {
    Literal(String),
    Pattern(Regex),
}

impl Lookbehind {
    /// Compile a lookbehind from its source form
    ///
    /// Patterns are anchored to the end of the preceding text, so `\(\s*`
    /// holds when the candidate follows an open paren and optional spaces.
    pub fn compile(source: &LookbehindSource) -> Result<Self, regex::Error> {
        match source {
            LookbehindSource::Literal(literal) => Ok(Lookbehind::Literal(literal.clone())),
            LookbehindSource::Pattern(pattern) => {
                let anchored = format!(r"(?:{})\z", pattern);
                Ok(Lookbehind::Pattern(Regex::new(&anchored)?))
            }
        }
    }

    /// Check the predicate against everything scanned before the candidate
    pub fn holds(&self, preceding: &str) -> bool {
        match self {
            Lookbehind::Literal(literal) => preceding.ends_with(literal.as_str()),
            Lookbehind::Pattern(regex) => regex.is_match(preceding),
        }
    }
}
