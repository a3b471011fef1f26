//! The public filter value: one compiled query, tested many times.

use crate::{ast::Expr, error::SyntaxError, eval, flatten, parser, stem};

/// A compiled text filter.
///
/// Construction parses the query once (and stems it once, when requested);
/// [`test`](Self::test) and [`flatten`](Self::flatten) then run against the
/// retained tree without re-parsing. Each `Expression` owns its tree
/// exclusively and never mutates it after construction, so shared
/// references are safe to use from multiple threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// The parsed (and possibly stemmed) tree.
    tree: Expr,
    /// Whether leaves were stemmed at construction.
    stemmed: bool,
}

impl Expression {
    /// Compiles a filter query.
    ///
    /// When `stem` is true, every leaf is reduced to its stemmed form
    /// (word by word for phrases) so the filter matches on word roots
    /// rather than the exact forms written in the query.
    ///
    /// Fails with a [`SyntaxError`] on a malformed query; no partial
    /// expression is produced.
    pub fn new(query: &str, stem: bool) -> Result<Self, SyntaxError> {
        let mut tree = parser::parse(query)?;
        if stem {
            tree = stem::stem_tree(tree);
        }

        Ok(Self {
            tree,
            stemmed: stem,
        })
    }

    /// Tests whether `text` satisfies the filter.
    pub fn test(&self, text: &str) -> bool {
        eval::evaluate(&self.tree, text)
    }

    /// Returns the positive leaf terms the filter references, in
    /// depth-first order.
    pub fn flatten(&self) -> Vec<String> {
        flatten::flatten(&self.tree)
    }

    /// Returns the retained expression tree.
    pub fn tree(&self) -> &Expr {
        &self.tree
    }

    /// Returns true if leaves were stemmed at construction.
    pub fn is_stemmed(&self) -> bool {
        self.stemmed
    }
}
