//! HTML format implementation
//!
//! Each classified token becomes a span whose classes are the prefix, the
//! rule name and (optionally) the alias, which is the markup documentation
//! themes style:
//!
//! ```text
//! <span class="token punctuation">(</span><span class="token equality metta-equality">=</span> ...
//! ```
//!
//! Uncovered input is written as escaped text without a wrapper.

use crate::error::FormatError;
use crate::format::Format;
use crate::token::Token;

/// HTML format with configurable class layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlFormat {
    /// First class on every span; empty to omit
    pub class_prefix: String,
    /// Append the rule alias as an extra class
    pub include_aliases: bool,
}

impl Default for HtmlFormat {
    fn default() -> Self {
        Self {
            class_prefix: "token".to_string(),
            include_aliases: true,
        }
    }
}

impl HtmlFormat {
    pub fn new(class_prefix: impl Into<String>, include_aliases: bool) -> Self {
        Self {
            class_prefix: class_prefix.into(),
            include_aliases,
        }
    }

    fn classes(&self, token: &Token<'_, '_>) -> String {
        let mut classes = Vec::with_capacity(3);
        if !self.class_prefix.is_empty() {
            classes.push(self.class_prefix.as_str());
        }
        classes.push(token.name);
        if self.include_aliases {
            if let Some(alias) = token.alias {
                classes.push(alias);
            }
        }
        classes.join(" ")
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML spans with token classes"
    }

    fn serialize(&self, tokens: &[Token<'_, '_>]) -> Result<String, FormatError> {
        let mut out = String::new();
        for token in tokens {
            if token.is_text() {
                out.push_str(&escape_html(token.text));
            } else {
                out.push_str("<span class=\"");
                out.push_str(&escape_html(&self.classes(token)));
                out.push_str("\">");
                out.push_str(&escape_html(token.text));
                out.push_str("</span>");
            }
        }
        Ok(out)
    }
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::metta;

    fn render(format: &HtmlFormat, source: &str) -> String {
        let grammar = metta::grammar();
        let tokens: Vec<_> = grammar.tokenize(source).collect();
        format.serialize(&tokens).unwrap()
    }

    #[test]
    fn test_html_format_name() {
        assert_eq!(HtmlFormat::default().name(), "html");
    }

    #[test]
    fn test_spans_with_aliases() {
        let html = render(&HtmlFormat::default(), "(= $x)");
        assert_eq!(
            html,
            "<span class=\"token punctuation\">(</span>\
             <span class=\"token equality metta-equality\">=</span> \
             <span class=\"token variable metta-variable\">$x</span>\
             <span class=\"token punctuation\">)</span>"
        );
    }

    #[test]
    fn test_without_prefix_or_aliases() {
        let html = render(&HtmlFormat::new("", false), "!x");
        assert_eq!(
            html,
            "<span class=\"execute\">!</span><span class=\"symbol\">x</span>"
        );
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_html(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
        let html = render(&HtmlFormat::default(), "\"<b>\"");
        assert_eq!(html, "<span class=\"token string\">&quot;&lt;b&gt;&quot;</span>");
    }

    #[test]
    fn test_text_is_not_wrapped() {
        let html = render(&HtmlFormat::default(), "  ");
        assert_eq!(html, "  ");
    }
}
