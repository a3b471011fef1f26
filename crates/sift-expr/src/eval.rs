//! Expression evaluation against free text.
//!
//! A leaf matches when it occurs in the text as a case-insensitive
//! whole-word match: the occurrence must not be adjacent to a word
//! character on either side. The boundary check shares the lexer's word
//! character class, so `cat` does not match inside `category` and
//! `#thehills` matches in `"watching #TheHills"` as a unit. Phrase leaves
//! match as one literal space-joined run under the same boundary rule.

use crate::{ast::Expr, lexer::is_word_char};

/// Tests whether `text` satisfies the expression.
pub fn evaluate(expr: &Expr, text: &str) -> bool {
    let lowered = text.to_lowercase();
    eval_node(expr, &lowered)
}

/// Recursive evaluation over an already-lowercased text.
fn eval_node(expr: &Expr, text: &str) -> bool {
    match expr {
        Expr::Leaf(leaf) => contains_whole_word(text, &leaf.to_lowercase()),
        Expr::Not(inner) => !eval_node(inner, text),
        Expr::And(left, right) => eval_node(left, text) && eval_node(right, text),
        Expr::Or(left, right) => eval_node(left, text) || eval_node(right, text),
    }
}

/// Returns true if `needle` occurs in `haystack` bounded by non-word
/// characters (or the ends of the string) on both sides.
fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    for (start, _) in haystack.match_indices(needle) {
        let bounded_before = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !is_word_char(c));
        let bounded_after = haystack[start + needle.len()..]
            .chars()
            .next()
            .is_none_or(|c| !is_word_char(c));

        if bounded_before && bounded_after {
            return true;
        }
    }

    false
}
