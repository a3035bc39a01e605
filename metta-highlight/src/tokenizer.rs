//! Ordered-pattern tokenizer
//!
//! Runs a [`Grammar`] over an input and lazily yields [`Token`]s that
//! partition the input exactly: no gaps, no overlaps, first token starting at
//! 0 and the last ending at `text.len()`.
//!
//! ## Algorithm
//!
//! At each step every rule searches for its earliest accepted match at or after
//! the cursor. The match with the smallest start offset wins; ties go to the
//! rule declared first, whatever the match lengths. Input between the cursor
//! and the winning start is emitted as a [`TEXT`](crate::token::TEXT) token
//! before the rule's token.
//!
//! A winning match of zero width would stall the cursor, so instead the
//! character at its start is emitted as a text token of its own, after the gap
//! token if there is one. Every step therefore consumes at least one character
//! and the sequence is finite.
//!
//! ## Memoization
//!
//! The input never changes during a run, so a rule's leftmost match found from
//! an earlier cursor is still its leftmost match from any cursor not past that
//! match's start. Each rule's last result is kept and only recomputed once the
//! cursor moves beyond it.

use crate::grammar::{next_boundary, Grammar};
use crate::token::Token;
use std::iter::FusedIterator;

/// Tokenize `text` with `grammar`
///
/// The returned iterator is lazy; tokenizing the same pair again yields an
/// identical sequence.
pub fn tokenize<'g, 't>(grammar: &'g Grammar, text: &'t str) -> Tokens<'g, 't> {
    Tokens {
        grammar,
        text,
        cursor: 0,
        pending: None,
        slots: vec![Slot::Unknown; grammar.len()],
    }
}

/// Last search result of one rule within a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Unknown,
    /// The rule has no accepted match anywhere at or after the cursor
    Exhausted,
    At { start: usize, end: usize },
}

/// Winning candidate of one step
#[derive(Debug, Clone, Copy)]
struct Candidate {
    rule: usize,
    start: usize,
    end: usize,
}

/// Lazy token sequence produced by [`tokenize`]
#[derive(Debug, Clone)]
pub struct Tokens<'g, 't> {
    grammar: &'g Grammar,
    text: &'t str,
    cursor: usize,
    /// Rule token waiting behind the gap token emitted before it
    pending: Option<Token<'g, 't>>,
    slots: Vec<Slot>,
}

impl<'g, 't> Tokens<'g, 't> {
    /// Offset up to which the input has been consumed
    pub fn offset(&self) -> usize {
        match &self.pending {
            Some(token) => token.start,
            None => self.cursor,
        }
    }

    fn earliest(&mut self) -> Option<Candidate> {
        let grammar = self.grammar;
        let mut best: Option<Candidate> = None;

        for (index, rule) in grammar.rules().iter().enumerate() {
            let (start, end) = match self.slots[index] {
                Slot::Exhausted => continue,
                Slot::At { start, end } if start >= self.cursor => (start, end),
                _ => match rule.find_from(self.text, self.cursor) {
                    Some((start, end)) => {
                        self.slots[index] = Slot::At { start, end };
                        (start, end)
                    }
                    None => {
                        self.slots[index] = Slot::Exhausted;
                        continue;
                    }
                },
            };

            if best.map_or(true, |b| start < b.start) {
                best = Some(Candidate {
                    rule: index,
                    start,
                    end,
                });
            }

            // Nothing declared later can start earlier than the cursor
            if start == self.cursor {
                break;
            }
        }

        best
    }
}

impl<'g, 't> Iterator for Tokens<'g, 't> {
    type Item = Token<'g, 't>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }

        let len = self.text.len();
        if self.cursor >= len {
            return None;
        }

        let from = self.cursor;
        let Some(candidate) = self.earliest() else {
            self.cursor = len;
            return Some(Token::plain(self.text, from, len));
        };

        if candidate.start == candidate.end {
            let stop = next_boundary(self.text, candidate.start).unwrap_or(len);
            self.cursor = stop;
            let forced = Token::plain(self.text, candidate.start, stop);
            if candidate.start > from {
                self.pending = Some(forced);
                return Some(Token::plain(self.text, from, candidate.start));
            }
            return Some(forced);
        }

        let grammar = self.grammar;
        let rule = &grammar.rules()[candidate.rule];
        let token = Token {
            name: rule.name(),
            alias: rule.alias(),
            text: &self.text[candidate.start..candidate.end],
            start: candidate.start,
            end: candidate.end,
        };
        log::trace!("{}", token);
        self.cursor = candidate.end;

        if candidate.start > from {
            self.pending = Some(token);
            return Some(Token::plain(self.text, from, candidate.start));
        }
        Some(token)
    }
}

impl FusedIterator for Tokens<'_, '_> {}
