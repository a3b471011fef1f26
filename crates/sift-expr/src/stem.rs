//! Leaf stemming pass.
//!
//! Rewrites every leaf of an expression to its stemmed form so a filter is
//! insensitive to its own wording's morphology. Each leaf is split into
//! word tokens, every token is lowercased and reduced with the Snowball
//! English (Porter2) stemmer, and the tokens are rejoined with single
//! spaces. Operator kind and arity are preserved exactly.

use rust_stemmers::{Algorithm, Stemmer};

use crate::ast::Expr;

/// Splits text into alphanumeric word tokens.
///
/// Punctuation separates tokens and is dropped, including the `#`/`@`/`'`
/// characters the query language allows inside words: stemming `#thehills`
/// yields `thehill`.
pub fn tokenize_words(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Returns the expression with every leaf stemmed.
///
/// Consumes the input tree and rebuilds it, so no other holder can observe
/// the rewrite. The pass is idempotent: stemming an already-stemmed tree
/// is a no-op.
pub fn stem_tree(expr: Expr) -> Expr {
    let stemmer = Stemmer::create(Algorithm::English);
    stem_node(expr, &stemmer)
}

/// Recursive rewrite mirroring the tree shape exactly.
fn stem_node(expr: Expr, stemmer: &Stemmer) -> Expr {
    match expr {
        Expr::Leaf(text) => Expr::Leaf(stem_leaf(&text, stemmer)),
        Expr::Not(inner) => Expr::not(stem_node(*inner, stemmer)),
        Expr::And(left, right) => {
            Expr::and(stem_node(*left, stemmer), stem_node(*right, stemmer))
        }
        Expr::Or(left, right) => Expr::or(stem_node(*left, stemmer), stem_node(*right, stemmer)),
    }
}

/// Stems each word of a leaf independently and rejoins with single spaces.
///
/// A leaf with no alphanumeric content is kept unchanged so leaves never
/// become empty.
fn stem_leaf(text: &str, stemmer: &Stemmer) -> String {
    let words = tokenize_words(text);
    if words.is_empty() {
        return text.to_string();
    }

    words
        .iter()
        .map(|word| stemmer.stem(&word.to_lowercase()).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
