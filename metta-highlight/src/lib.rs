//! # metta-highlight
//!
//! Ordered-pattern tokenizer and highlighter for the MeTTa language.
//!
//! A [`Grammar`] is an ordered table of named regex rules. [`tokenize`] runs it
//! over an input and lazily yields [`Token`]s that cover the input exactly,
//! using `text` tokens for anything no rule claims. The rest of the crate is
//! the plumbing a documentation viewer needs around that core.
//!
//! File Layout
//!
//! src
//!   ├── grammar        Rule definitions, lookbehind predicates, greedy branches
//!   ├── tokenizer      The engine: earliest match wins, ties by declaration order
//!   ├── token          Token values and their serialization
//!   ├── languages      Built-in grammars (MeTTa)
//!   ├── registry       Language ids and aliases
//!   ├── format(s)      html / json / simple output and their registry
//!   ├── highlighter    Language lookup plus format in one call
//!   ├── hooks          Re-highlighting after page navigation
//!   └── error
//!
//! Tokenization never fails. Bad patterns are rejected when the grammar is
//! built.

pub mod error;
pub mod format;
pub mod formats;
pub mod grammar;
pub mod highlighter;
pub mod hooks;
pub mod languages;
pub mod registry;
pub mod token;
pub mod tokenizer;

pub use error::{FormatError, GrammarError, HighlightError, RegistryError};
pub use format::Format;
pub use formats::FormatRegistry;
pub use grammar::{Grammar, GrammarBuilder, Rule, RuleDefinition};
pub use highlighter::Highlighter;
pub use registry::LanguageRegistry;
pub use token::Token;
pub use tokenizer::{tokenize, Tokens};
