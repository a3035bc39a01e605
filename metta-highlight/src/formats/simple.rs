//! Line-per-token listing
//!
//! ```text
//! punctuation@0..1 "("
//! metta-equality@1..2 "="
//! text@2..3 " "
//! ```

use crate::error::FormatError;
use crate::format::Format;
use crate::token::Token;

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleFormat;

impl Format for SimpleFormat {
    fn name(&self) -> &str {
        "simple"
    }

    fn description(&self) -> &str {
        "One token per line: type@start..end \"text\""
    }

    fn serialize(&self, tokens: &[Token<'_, '_>]) -> Result<String, FormatError> {
        Ok(tokens
            .iter()
            .map(|token| format!("{}\n", token))
            .collect())
    }
}
