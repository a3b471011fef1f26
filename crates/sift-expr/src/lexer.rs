//! Filter query lexer.
//!
//! Converts a query string into a stream of tokens for the parser. Each
//! token carries its byte offset so parse errors can point back into the
//! query.

use std::{iter::Peekable, str::Chars};

use crate::error::SyntaxError;

/// A token in the filter query language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A bare word (term).
    Word(String),

    /// A quoted phrase (quotes stripped, content preserved).
    Phrase(String),

    /// The AND keyword, original casing preserved.
    ///
    /// Keywords are positional: at an operand position the parser treats
    /// the lexed text as an ordinary word leaf.
    And(String),

    /// The OR keyword, original casing preserved.
    Or(String),

    /// The NOT keyword, original casing preserved.
    Not(String),

    /// Left parenthesis.
    LParen,

    /// Right parenthesis.
    RParen,
}

/// A token together with its start position in the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    /// The token.
    pub token: Token,
    /// Byte offset of the token's first character in the query.
    pub offset: usize,
}

/// Returns true for characters that may appear inside a word.
///
/// Unicode alphanumerics plus the punctuation the filter language allows in
/// terms: hashtags, mentions, hyphenated and possessive forms. The same
/// class defines whole-word match boundaries during evaluation.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '#' | '@' | '_' | '-' | '\'' | '&' | '!')
}

/// Tokenizes a query string.
struct Lexer<'a> {
    /// The original input string.
    input: &'a str,
    /// Character iterator with one-character lookahead.
    chars: Peekable<Chars<'a>>,
    /// Current byte position in input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().peekable(),
            position: 0,
        }
    }

    /// Creates an error at a specific position.
    fn error_at(&self, message: impl Into<String>, position: usize) -> SyntaxError {
        SyntaxError::new(message, position, self.input)
    }

    /// Tokenizes the entire input, returning all tokens or an error.
    fn tokenize(mut self) -> Result<Vec<SpannedToken>, SyntaxError> {
        let mut tokens = Vec::new();

        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }

        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input.
    fn next_token(&mut self) -> Result<Option<SpannedToken>, SyntaxError> {
        self.skip_whitespace();
        let offset = self.position;

        let Some(&ch) = self.chars.peek() else {
            return Ok(None);
        };

        let token = match ch {
            '"' => self.read_phrase(offset)?,
            '(' => {
                self.advance();
                Token::LParen
            }
            ')' => {
                self.advance();
                Token::RParen
            }
            c if is_word_char(c) => self.read_word(),
            c => {
                return Err(self.error_at(format!("unexpected character {c:?}"), offset));
            }
        };

        Ok(Some(SpannedToken { token, offset }))
    }

    /// Reads a quoted phrase, consuming both quotes.
    fn read_phrase(&mut self, start_pos: usize) -> Result<Token, SyntaxError> {
        self.advance(); // consume opening quote

        let mut content = String::new();

        loop {
            match self.chars.peek() {
                Some(&'"') => {
                    self.advance(); // consume closing quote
                    return Ok(Token::Phrase(content));
                }
                Some(&ch) => {
                    content.push(ch);
                    self.advance();
                }
                None => {
                    return Err(self.error_at("unclosed quote", start_pos));
                }
            }
        }
    }

    /// Reads a word or one of the AND/OR/NOT keywords.
    ///
    /// Keywords are matched case-insensitively, but only as whole lexed
    /// words: `android` is a single word, not `AND` followed by `roid`.
    fn read_word(&mut self) -> Token {
        let mut word = String::new();

        while let Some(&ch) = self.chars.peek() {
            if !is_word_char(ch) {
                break;
            }
            word.push(ch);
            self.advance();
        }

        if word.eq_ignore_ascii_case("AND") {
            Token::And(word)
        } else if word.eq_ignore_ascii_case("OR") {
            Token::Or(word)
        } else if word.eq_ignore_ascii_case("NOT") {
            Token::Not(word)
        } else {
            Token::Word(word)
        }
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Advances to the next character.
    fn advance(&mut self) {
        if let Some(ch) = self.chars.next() {
            self.position += ch.len_utf8();
        }
    }
}

/// Convenience function to tokenize a query string.
pub fn tokenize(input: &str) -> Result<Vec<SpannedToken>, SyntaxError> {
    Lexer::new(input).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Strips offsets for assertions that only care about token identity.
    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|spanned| spanned.token)
            .collect()
    }

    #[test]
    fn empty_input() {
        assert_eq!(tokens(""), vec![]);
        assert_eq!(tokens("   "), vec![]);
    }

    #[test]
    fn single_word() {
        assert_eq!(tokens("rust"), vec![Token::Word("rust".into())]);
    }

    #[test]
    fn keywords_case_insensitive() {
        assert_eq!(
            tokens("a AND b or NOT c"),
            vec![
                Token::Word("a".into()),
                Token::And("AND".into()),
                Token::Word("b".into()),
                Token::Or("or".into()),
                Token::Not("NOT".into()),
                Token::Word("c".into()),
            ]
        );
    }

    #[test]
    fn keyword_inside_word_is_a_word() {
        assert_eq!(tokens("android"), vec![Token::Word("android".into())]);
        assert_eq!(tokens("nothing"), vec![Token::Word("nothing".into())]);
        assert_eq!(tokens("corn"), vec![Token::Word("corn".into())]);
    }

    #[test]
    fn word_punctuation() {
        assert_eq!(
            tokens("#thehills @MTV_TheHills can't e-mail"),
            vec![
                Token::Word("#thehills".into()),
                Token::Word("@MTV_TheHills".into()),
                Token::Word("can't".into()),
                Token::Word("e-mail".into()),
            ]
        );
    }

    #[test]
    fn accented_word() {
        assert_eq!(tokens("café"), vec![Token::Word("café".into())]);
    }

    #[test]
    fn parentheses() {
        assert_eq!(
            tokens("(a OR b)"),
            vec![
                Token::LParen,
                Token::Word("a".into()),
                Token::Or("OR".into()),
                Token::Word("b".into()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn quoted_phrase() {
        assert_eq!(
            tokens("\"hello world\""),
            vec![Token::Phrase("hello world".into())]
        );
    }

    #[test]
    fn unclosed_quote_error() {
        let err = tokenize("abc \"hello").unwrap_err();
        assert_eq!(err.position, 4);
        assert!(err.message.contains("unclosed"));
    }

    #[test]
    fn unexpected_character_error() {
        let err = tokenize("a + b").unwrap_err();
        assert_eq!(err.position, 2);
        assert!(err.message.contains("unexpected character"));
    }

    #[test]
    fn offsets_track_token_starts() {
        let spanned = tokenize("a AND  b").unwrap();
        let offsets: Vec<usize> = spanned.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0, 2, 7]);
    }
}
