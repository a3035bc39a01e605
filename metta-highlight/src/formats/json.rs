//! JSON format implementation
//!
//! Serializes the token sequence as an array of
//! `{"type", "name", "alias"?, "text", "start", "end"}` objects.

use crate::error::FormatError;
use crate::format::Format;
use crate::token::Token;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl JsonFormat {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Token array as JSON"
    }

    fn serialize(&self, tokens: &[Token<'_, '_>]) -> Result<String, FormatError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(tokens)
        } else {
            serde_json::to_string(tokens)
        };
        result.map_err(|e| FormatError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::metta;
    use serde_json::Value;

    #[test]
    fn test_json_round_trips_through_value() {
        let grammar = metta::grammar();
        let tokens: Vec<_> = grammar.tokenize("(: x Type)").collect();
        let json = JsonFormat::default().serialize(&tokens).unwrap();

        let value: Value = serde_json::from_str(&json).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), tokens.len());
        assert_eq!(items[1]["type"], "metta-type-decl");
        assert_eq!(items[1]["name"], "type-decl");
        assert_eq!(items[1]["text"], ":");
        assert_eq!(items[1]["start"], 1);
        assert!(items[2].get("alias").is_none());
    }

    #[test]
    fn test_pretty_output_is_multiline() {
        let grammar = metta::grammar();
        let tokens: Vec<_> = grammar.tokenize("x").collect();
        let json = JsonFormat::pretty().serialize(&tokens).unwrap();
        assert!(json.contains('\n'));
        assert!(JsonFormat::default().serialize(&tokens).unwrap().lines().count() == 1);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(JsonFormat::default().serialize(&[]).unwrap(), "[]");
    }
}
