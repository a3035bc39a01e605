//! Classified, positioned slices of the input

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::ops::Range;

/// Name given to input no rule claimed
pub const TEXT: &str = "text";

/// A token produced by the tokenizer
///
/// Borrows its rule name and alias from the grammar and its text from the
/// input, so producing one never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'g, 't> {
    /// Name of the rule that matched, or [`TEXT`] for uncovered input
    pub name: &'g str,
    pub alias: Option<&'g str>,
    pub text: &'t str,
    pub start: usize,
    pub end: usize,
}

impl<'g, 't> Token<'g, 't> {
    pub(crate) fn plain(text: &'t str, start: usize, end: usize) -> Self {
        Token {
            name: TEXT,
            alias: None,
            text: &text[start..end],
            start,
            end,
        }
    }

    /// The presentation type: the alias when present, else the rule name
    pub fn ty(&self) -> &'g str {
        self.alias.unwrap_or(self.name)
    }

    /// Whether this token covers input no rule claimed
    pub fn is_text(&self) -> bool {
        self.name == TEXT && self.alias.is_none()
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Token<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}..{} {:?}", self.ty(), self.start, self.end, self.text)
    }
}

impl Serialize for Token<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = if self.alias.is_some() { 6 } else { 5 };
        let mut state = serializer.serialize_struct("Token", fields)?;
        state.serialize_field("type", self.ty())?;
        state.serialize_field("name", self.name)?;
        if let Some(alias) = self.alias {
            state.serialize_field("alias", alias)?;
        } else {
            state.skip_field("alias")?;
        }
        state.serialize_field("text", self.text)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variable() -> Token<'static, 'static> {
        Token {
            name: "variable",
            alias: Some("metta-variable"),
            text: "$x",
            start: 3,
            end: 5,
        }
    }

    #[test]
    fn test_ty_prefers_alias() {
        assert_eq!(variable().ty(), "metta-variable");
        assert_eq!(Token::plain("ab", 0, 2).ty(), "text");
    }

    #[test]
    fn test_display() {
        assert_eq!(variable().to_string(), "metta-variable@3..5 \"$x\"");
    }

    #[test]
    fn test_serialize_skips_missing_alias() {
        let json = serde_json::to_string(&Token::plain("a b", 1, 2)).unwrap();
        assert_eq!(
            json,
            r#"{"type":"text","name":"text","text":" ","start":1,"end":2}"#
        );
    }

    #[test]
    fn test_serialize_with_alias() {
        let json = serde_json::to_string(&variable()).unwrap();
        assert_eq!(
            json,
            r#"{"type":"metta-variable","name":"variable","alias":"metta-variable","text":"$x","start":3,"end":5}"#
        );
    }
}
