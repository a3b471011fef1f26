//! Positive term extraction.
//!
//! Collects the leaves of an expression reachable under an even number of
//! negations, in depth-first left-to-right order. This answers "which
//! positive terms does the filter reference" for keyword indexing or
//! highlighting; it has no boolean-evaluation meaning.

use crate::ast::Expr;

/// Returns the positive (non-negated) leaf terms of the expression.
///
/// Duplicates are kept and insertion order is preserved. A leaf under an
/// odd number of enclosing `NOT`s is excluded; `NOT NOT` restores positive
/// polarity.
pub fn flatten(expr: &Expr) -> Vec<String> {
    let mut leaves = Vec::new();
    collect_leaves(expr, &mut leaves, true);
    leaves
}

/// Depth-first walk carrying the current polarity.
///
/// Only `Not` flips polarity; `And`/`Or` pass it through unchanged.
fn collect_leaves(expr: &Expr, leaves: &mut Vec<String>, positive: bool) {
    match expr {
        Expr::Leaf(text) => {
            if positive {
                leaves.push(text.clone());
            }
        }
        Expr::Not(inner) => collect_leaves(inner, leaves, !positive),
        Expr::And(left, right) | Expr::Or(left, right) => {
            collect_leaves(left, leaves, positive);
            collect_leaves(right, leaves, positive);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    /// Parses a query and flattens its tree.
    fn terms(query: &str) -> Vec<String> {
        flatten(&parse(query).unwrap())
    }

    #[test]
    fn single_leaf() {
        assert_eq!(terms("a"), vec!["a"]);
    }

    #[test]
    fn negated_leaf_excluded() {
        assert_eq!(terms("a AND NOT b"), vec!["a"]);
    }

    #[test]
    fn double_negation_included() {
        assert_eq!(terms("NOT NOT a"), vec!["a"]);
    }

    #[test]
    fn triple_negation_excluded() {
        assert_eq!(terms("NOT NOT NOT a"), Vec::<String>::new());
    }

    #[test]
    fn negated_group_excludes_all() {
        assert_eq!(terms("NOT (a OR b)"), Vec::<String>::new());
    }

    #[test]
    fn negation_inside_negation() {
        // b sits under two NOTs and is collected; a under one and is not.
        assert_eq!(terms("NOT (a AND NOT b)"), vec!["b"]);
    }

    #[test]
    fn depth_first_order_with_duplicates() {
        assert_eq!(terms("(b OR a) AND a"), vec!["b", "a", "a"]);
    }

    #[test]
    fn phrases_flatten_as_joined_strings() {
        assert_eq!(
            terms("\"hello world\" OR hills"),
            vec!["hello world", "hills"]
        );
    }

    #[test]
    fn demo_query_terms() {
        assert_eq!(
            terms("(((#thehills OR thehills) OR ((hills AND the) AND mtv)) OR @MTV_TheHills)"),
            vec!["#thehills", "thehills", "hills", "the", "mtv", "@MTV_TheHills"]
        );
    }
}
