//! Format trait definition
//!
//! A format turns a token sequence into text. Formats are looked up by name
//! through [`FormatRegistry`](crate::formats::FormatRegistry).

use crate::error::FormatError;
use crate::token::Token;

/// Trait for token output formats
///
/// # Examples
///
/// ```ignore
/// struct CountFormat;
///
/// impl Format for CountFormat {
///     fn name(&self) -> &str {
///         "count"
///     }
///
///     fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError> {
///         Ok(tokens.len().to_string())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Serialize tokens into text
    fn serialize(&self, tokens: &[Token<'_, '_>]) -> Result<String, FormatError>;
}
