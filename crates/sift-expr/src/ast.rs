//! Filter expression abstract syntax tree.
//!
//! Represents parsed filter queries. The tree is immutable after parsing;
//! every holder owns its tree exclusively.

use std::fmt;

use serde::Serialize;

/// A parsed filter expression.
///
/// Operator arity is encoded structurally: `Not` has exactly one child and
/// `And`/`Or` have exactly two, so malformed shapes are not constructible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Expr {
    /// A single term or space-joined phrase, case as written in the query.
    Leaf(String),

    /// Negation: the text must NOT match the inner expression.
    Not(Box<Self>),

    /// Conjunction: the text must match both sides.
    And(Box<Self>, Box<Self>),

    /// Disjunction: the text must match at least one side.
    Or(Box<Self>, Box<Self>),
}

impl Expr {
    /// Creates a leaf from a term or phrase string.
    pub fn leaf(text: impl Into<String>) -> Self {
        Self::Leaf(text.into())
    }

    /// Creates a negation.
    pub fn not(inner: Self) -> Self {
        Self::Not(Box::new(inner))
    }

    /// Creates a conjunction of two expressions.
    pub fn and(left: Self, right: Self) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    /// Creates a disjunction of two expressions.
    pub fn or(left: Self, right: Self) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    /// Formats the expression as a tree structure with the given indentation level.
    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let prefix = "  ".repeat(indent);
        match self {
            Self::Leaf(text) => writeln!(f, "{prefix}Leaf({text:?})"),
            Self::Not(inner) => {
                writeln!(f, "{prefix}Not")?;
                inner.fmt_tree(f, indent + 1)
            }
            Self::And(left, right) => {
                writeln!(f, "{prefix}And")?;
                left.fmt_tree(f, indent + 1)?;
                right.fmt_tree(f, indent + 1)
            }
            Self::Or(left, right) => {
                writeln!(f, "{prefix}Or")?;
                left.fmt_tree(f, indent + 1)?;
                right.fmt_tree(f, indent + 1)
            }
        }
    }

    /// Formats the expression as a query string (human-readable form).
    ///
    /// Binary operators are always parenthesized, so the output parses back
    /// to the same tree: `(a AND (NOT b))` rather than `a AND NOT b`.
    pub fn to_query_string(&self) -> String {
        match self {
            Self::Leaf(text) => {
                if text.contains(' ') {
                    format!("\"{text}\"")
                } else {
                    text.clone()
                }
            }
            Self::Not(inner) => format!("NOT {}", inner.to_query_string()),
            Self::And(left, right) => {
                format!("({} AND {})", left.to_query_string(), right.to_query_string())
            }
            Self::Or(left, right) => {
                format!("({} OR {})", left.to_query_string(), right.to_query_string())
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_indented_tree() {
        let expr = Expr::and(
            Expr::leaf("a"),
            Expr::not(Expr::or(Expr::leaf("b"), Expr::leaf("c"))),
        );

        let rendered = expr.to_string();
        assert_eq!(
            rendered,
            "And\n  Leaf(\"a\")\n  Not\n    Or\n      Leaf(\"b\")\n      Leaf(\"c\")\n"
        );
    }

    #[test]
    fn query_string_quotes_phrases() {
        let expr = Expr::leaf("hello world");
        assert_eq!(expr.to_query_string(), "\"hello world\"");
    }

    #[test]
    fn query_string_parenthesizes_operators() {
        let expr = Expr::or(
            Expr::and(Expr::leaf("a"), Expr::leaf("b")),
            Expr::not(Expr::leaf("c")),
        );
        assert_eq!(expr.to_query_string(), "((a AND b) OR NOT c)");
    }

    #[test]
    fn serializes_to_tagged_json() {
        let expr = Expr::and(Expr::leaf("a"), Expr::leaf("b"));
        let json = serde_json::to_value(&expr).unwrap();
        assert_eq!(json["And"][0]["Leaf"], "a");
        assert_eq!(json["And"][1]["Leaf"], "b");
    }
}
