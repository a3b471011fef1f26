//! Filter query parser.
//!
//! Parses a token stream into an expression tree using recursive descent.
//!
//! # Grammar
//!
//! ```text
//! expr       → term ("OR" term)*
//! term       → not_factor ("AND" not_factor)*
//! not_factor → "NOT" not_factor | factor
//! factor     → "(" expr ")" | PHRASE | WORD
//! ```
//!
//! # Precedence (highest to lowest)
//!
//! 1. Grouping: `(...)`
//! 2. Negation: `NOT` (stacks: `NOT NOT a` double-negates)
//! 3. `AND`
//! 4. `OR`
//!
//! Both binary operators require an explicit keyword (there is no implicit
//! AND between adjacent words) and associate to the left: `a OR b OR c`
//! parses as `Or(Or(a, b), c)`.
//!
//! Keyword matching is positional: `AND`/`OR`/`NOT` act as operators only
//! at operator positions. At an operand position they are ordinary words,
//! so `cat AND and` parses as `And(cat, and)` and a lone `not` is a leaf.

use crate::{
    ast::Expr,
    error::SyntaxError,
    lexer::{SpannedToken, Token, is_word_char, tokenize},
};

/// Recursive descent parser for filter expressions.
struct Parser<'a> {
    /// The original query string, kept for error reporting.
    input: &'a str,
    /// Token stream to parse.
    tokens: Vec<SpannedToken>,
    /// Current position in token stream.
    position: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser from a token stream.
    fn new(input: &'a str, tokens: Vec<SpannedToken>) -> Self {
        Self {
            input,
            tokens,
            position: 0,
        }
    }

    /// Parses the token stream into a single expression.
    ///
    /// The whole stream must reduce to one `expr` production; leftover
    /// tokens after a complete parse are an error.
    fn parse(mut self) -> Result<Expr, SyntaxError> {
        let expr = self.parse_expr()?;

        if let Some(spanned) = self.peek_spanned() {
            return Err(SyntaxError::new(
                format!("unexpected trailing input: {:?}", spanned.token),
                spanned.offset,
                self.input,
            ));
        }

        Ok(expr)
    }

    /// Parses: expr → term ("OR" term)*
    fn parse_expr(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_term()?;

        while matches!(self.peek_token(), Some(Token::Or(_))) {
            self.advance(); // consume OR
            let right = self.parse_term()?;
            left = Expr::or(left, right);
        }

        Ok(left)
    }

    /// Parses: term → not_factor ("AND" not_factor)*
    fn parse_term(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_not_factor()?;

        while matches!(self.peek_token(), Some(Token::And(_))) {
            self.advance(); // consume AND
            let right = self.parse_not_factor()?;
            left = Expr::and(left, right);
        }

        Ok(left)
    }

    /// Parses: not_factor → "NOT" not_factor | factor
    ///
    /// Ordered choice with backtracking: a `NOT` with no operand after it
    /// is not a negation, so the parser rewinds and lets `parse_factor`
    /// take the keyword as a word leaf (`a AND not` is `And(a, not)`).
    fn parse_not_factor(&mut self) -> Result<Expr, SyntaxError> {
        if matches!(self.peek_token(), Some(Token::Not(_))) {
            let saved = self.position;
            self.advance(); // consume NOT

            match self.parse_not_factor() {
                Ok(inner) => return Ok(Expr::not(inner)),
                Err(_) => self.position = saved,
            }
        }

        self.parse_factor()
    }

    /// Parses: factor → "(" expr ")" | PHRASE | WORD
    fn parse_factor(&mut self) -> Result<Expr, SyntaxError> {
        let Some(spanned) = self.peek_spanned().cloned() else {
            return Err(SyntaxError::new(
                "unexpected end of query",
                self.input.len(),
                self.input,
            ));
        };

        match spanned.token {
            // A keyword at an operand position is an ordinary word, with
            // its lexed casing.
            Token::Word(text) | Token::And(text) | Token::Or(text) | Token::Not(text) => {
                self.advance();
                Ok(Expr::Leaf(text))
            }

            Token::Phrase(content) => {
                self.advance();
                self.phrase_leaf(&content, spanned.offset)
            }

            Token::LParen => self.parse_group(),

            Token::RParen => Err(self.error_at("unexpected closing parenthesis", spanned.offset)),
        }
    }

    /// Builds a leaf from a phrase body: one or more words joined with
    /// single spaces.
    fn phrase_leaf(&self, content: &str, offset: usize) -> Result<Expr, SyntaxError> {
        let words: Vec<&str> = content.split_whitespace().collect();

        if words.is_empty() {
            return Err(self.error_at("empty phrase", offset));
        }

        if let Some(bad) = words.iter().find(|w| !w.chars().all(is_word_char)) {
            return Err(self.error_at(format!("invalid word in phrase: {bad:?}"), offset));
        }

        Ok(Expr::Leaf(words.join(" ")))
    }

    /// Parses a parenthesized group, consuming the surrounding parentheses.
    fn parse_group(&mut self) -> Result<Expr, SyntaxError> {
        self.advance(); // consume (
        let inner = self.parse_expr()?;

        if !matches!(self.peek_token(), Some(Token::RParen)) {
            let position = self
                .peek_spanned()
                .map_or(self.input.len(), |spanned| spanned.offset);
            return Err(self.error_at("expected closing parenthesis", position));
        }
        self.advance(); // consume )

        Ok(inner)
    }

    /// Creates an error at a byte position in the query.
    fn error_at(&self, message: impl Into<String>, position: usize) -> SyntaxError {
        SyntaxError::new(message, position, self.input)
    }

    /// Returns the current token with its offset, without consuming it.
    fn peek_spanned(&self) -> Option<&SpannedToken> {
        self.tokens.get(self.position)
    }

    /// Returns the current token, without consuming it.
    fn peek_token(&self) -> Option<&Token> {
        self.peek_spanned().map(|spanned| &spanned.token)
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }
}

/// Parses a query string into an expression tree.
///
/// Fails with a [`SyntaxError`] carrying the offending byte position when
/// the query is malformed, including an empty query and trailing input
/// after a complete expression.
pub fn parse(input: &str) -> Result<Expr, SyntaxError> {
    let tokens = tokenize(input)?;
    Parser::new(input, tokens).parse()
}
