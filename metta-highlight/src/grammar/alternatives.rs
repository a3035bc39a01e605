//! Top-level alternative splitting for greedy rules
//!
//! A greedy rule picks the longest of its alternatives at the winning start
//! offset. The regex engine only reports leftmost-first matches, so each
//! top-level branch of the pattern is compiled on its own and tried
//! separately.
//!
//! Splitting is purely lexical: `|` counts as a separator only outside of
//! groups, character classes and escapes. Inline flag groups such as `(?i)`
//! that appear at the top level are carried into every later branch so each
//! branch keeps the flags it would have had inside the full pattern.

/// Split a pattern into its top-level alternatives
///
/// Returns a single element when the pattern has no top-level `|`.
pub fn split_alternatives(pattern: &str) -> Vec<String> {
    let mut branches = Vec::new();
    let mut current = String::new();
    let mut carried_flags = String::new();
    let mut group_depth = 0usize;
    let mut class_depth = 0usize;
    let mut chars = pattern.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        match c {
            '\\' => {
                current.push(c);
                if let Some((_, escaped)) = chars.next() {
                    current.push(escaped);
                }
            }
            '[' => {
                current.push(c);
                class_depth += 1;
                // A `]` right after `[` or `[^` is a literal member of the class
                if let Some(&(_, '^')) = chars.peek() {
                    current.push('^');
                    chars.next();
                }
                if let Some(&(_, ']')) = chars.peek() {
                    current.push(']');
                    chars.next();
                }
            }
            ']' if class_depth > 0 => {
                current.push(c);
                class_depth -= 1;
            }
            _ if class_depth > 0 => current.push(c),
            '(' => {
                if group_depth == 0 {
                    if let Some(flags) = flag_group_at(&pattern[idx..]) {
                        carried_flags.push_str(flags);
                        current.push_str(flags);
                        // Skip the rest of the flag group
                        for _ in 1..flags.chars().count() {
                            chars.next();
                        }
                        continue;
                    }
                }
                current.push(c);
                group_depth += 1;
            }
            ')' => {
                current.push(c);
                group_depth = group_depth.saturating_sub(1);
            }
            '|' if group_depth == 0 => {
                branches.push(std::mem::take(&mut current));
                current.push_str(&carried_flags);
            }
            _ => current.push(c),
        }
    }
    branches.push(current);
    branches
}

/// Recognize a bare flag group like `(?i)` or `(?-u)` at the start of `s`
fn flag_group_at(s: &str) -> Option<&str> {
    let rest = s.strip_prefix("(?")?;
    let end = rest.find(')')?;
    let flags = &rest[..end];
    if !flags.is_empty() && flags.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
        Some(&s[..end + 3])
    } else {
        None
    }
}
