//! Boolean filter expressions for matching free text.
//!
//! This crate provides a small query language for describing text filters:
//!
//! - **Terms**: `rust` - a word the text must contain
//! - **Phrases**: `"error handling"` - an exact word sequence
//! - **Negation**: `NOT deprecated` - the text must not match
//! - **AND / OR**: `rust AND (tokio OR "async runtime")` - boolean combination
//!
//! Leaf matching is case-insensitive and whole-word: `cat` does not match
//! inside `category`. Queries compile once into an [`Expression`] which can
//! then be tested against any number of texts.
//!
//! # Example
//!
//! ```
//! use sift_expr::Expression;
//!
//! let filter = Expression::new("(#thehills OR thehills) AND NOT finale", false).unwrap();
//! assert!(filter.test("Can't stop watching #TheHills tonight"));
//! assert_eq!(filter.flatten(), vec!["#thehills", "thehills"]);
//! ```

#![warn(missing_docs)]

mod ast;
mod error;
mod eval;
mod expression;
mod flatten;
mod lexer;
mod parser;
mod stem;

pub use ast::Expr;
pub use error::SyntaxError;
pub use eval::evaluate;
pub use expression::Expression;
pub use flatten::flatten;
pub use lexer::{SpannedToken, Token, tokenize};
pub use parser::parse;
pub use stem::{stem_tree, tokenize_words};
