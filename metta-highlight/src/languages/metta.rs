//! MeTTa grammar
//!
//! MeTTa programs are s-expressions with a handful of lexical extras: `;` line
//! comments, `$`-prefixed variables, the `!` execution marker, and the `:` and
//! `=` heads of type declarations and equalities.
//!
//! Rules are listed in priority order. The keyword sets (builtin,
//! type-keyword, constructor) are disjoint; `symbol` is the catch-all and must
//! stay last so every categorical rule gets first refusal.
//!
//! Word characters, digits and word boundaries are ASCII only: `λ` or `٣` is
//! never part of a symbol or number and falls through to text. A comment ends
//! at any line terminator, `\r` included.

use crate::grammar::{Grammar, RuleDefinition};
use once_cell::sync::Lazy;

/// Primary language id
pub const LANGUAGE_ID: &str = "metta";

/// Alternative ids resolving to the same grammar
pub const ALIASES: &[&str] = &["MeTTa"];

pub const BUILTINS: &[&str] = &[
    "match",
    "superpose",
    "collapse",
    "let",
    r"let\*",
    "if",
    "case",
    "assertEqual",
    "assertEqualToResult",
    "get-type",
    "unify",
    "eval",
    "chain",
    "cons-atom",
    "decons-atom",
    "add-atom",
    "remove-atom",
    "get-atoms",
    "new-space",
    "pragma!",
];

pub const TYPE_KEYWORDS: &[&str] = &[
    "Type",
    "Atom",
    "Symbol",
    "Expression",
    "Variable",
    "Grounded",
    "Number",
    "String",
    "Bool",
];

pub const CONSTRUCTORS: &[&str] = &["Nil", "Cons", "Nothing", "Something", "Left", "Right", "Z", "S"];

static GRAMMAR: Lazy<Grammar> = Lazy::new(|| {
    Grammar::from_definitions(definitions()).expect("MeTTa rule table is valid")
});

/// ASCII word boundary
const BOUNDARY: &str = r"(?-u:\b)";

/// ASCII word character or hyphen
const WORD: &str = "[0-9A-Za-z_-]";

/// Bounded alternation over a closed word set
fn word_set(words: &[&str]) -> String {
    format!("{BOUNDARY}(?:{}){BOUNDARY}", words.join("|"))
}

/// The MeTTa rule table, highest priority first
pub fn definitions() -> Vec<RuleDefinition> {
    vec![
        RuleDefinition::new("comment", r";[^\r\n\u{2028}\u{2029}]*").greedy(),
        RuleDefinition::new("string", r#""(?:[^"\\]|\\.)*""#).greedy(),
        RuleDefinition::new("variable", format!(r"\${WORD}+")).alias("metta-variable"),
        RuleDefinition::new("execute", "!").alias("metta-execute"),
        RuleDefinition::new("type-decl", r"\s*:")
            .lookbehind_literal("(")
            .alias("metta-type-decl"),
        RuleDefinition::new(
            "number",
            format!(r"-?{BOUNDARY}[0-9]+(?:\.[0-9]+)?{BOUNDARY}"),
        )
        .alias("metta-number"),
        RuleDefinition::new("builtin", word_set(BUILTINS)).alias("metta-builtin"),
        RuleDefinition::new("boolean", word_set(&["True", "False"])).alias("metta-keyword"),
        RuleDefinition::new("type-keyword", word_set(TYPE_KEYWORDS)).alias("metta-type-decl"),
        RuleDefinition::new("constructor", word_set(CONSTRUCTORS)).alias("metta-keyword"),
        RuleDefinition::new("arrow", "->").alias("metta-type-decl"),
        RuleDefinition::new("equality", r"\s*=")
            .lookbehind_literal("(")
            .alias("metta-equality"),
        RuleDefinition::new("self", format!("&self{BOUNDARY}")).alias("metta-builtin"),
        RuleDefinition::new("punctuation", "[()]"),
        RuleDefinition::new("symbol", format!("{WORD}+")),
    ]
}

/// The shared, compiled MeTTa grammar
pub fn grammar() -> Grammar {
    GRAMMAR.clone()
}
