//! Tokens and lexers: classifying lexical units with matchers.
//!
//! A [`Token`] pairs a matcher with a constructor that turns the consumed
//! sub-range into a domain value. A [`Lexer`] is an ordered token list tried
//! against the cursor until one matches. Both are immutable after
//! construction and reusable across independent inputs.

use std::fmt;

use crate::cursor::Cursor;
use crate::matcher::{IntoElements, Matcher};

/// Errors raised by the token layer.
///
/// Match failure inside the engine is a value, not an error; these are the
/// hard stops of code that committed to finding a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A forced token read found input its matcher rejects.
    IllegalSequence { at: usize },
    /// Every token of a lexer rejected the input at this position.
    NoMatchingToken { at: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalSequence { at } => {
                write!(f, "Illegal sequence at element {at}")
            }
            Self::NoMatchingToken { at } => {
                write!(f, "No token matches at element {at}")
            }
        }
    }
}

impl std::error::Error for LexError {}

/// A matcher paired with a constructor from the matched sub-range to a
/// domain value. The constructor runs exactly once per successful match,
/// never on failure.
pub struct Token<T, V> {
    matcher: Matcher<T>,
    build: Box<dyn Fn(&[T]) -> V + Send + Sync>,
}

impl<T: Clone + PartialOrd, V> Token<T, V> {
    pub fn new(
        matcher: Matcher<T>,
        build: impl Fn(&[T]) -> V + Send + Sync + 'static,
    ) -> Self {
        Self {
            matcher,
            build: Box::new(build),
        }
    }

    /// Forced read: the input *must* be this token here.
    ///
    /// On success the cursor has consumed the token and the constructor's
    /// value is returned. Failure is a hard [`LexError::IllegalSequence`];
    /// use [`try_read`](Self::try_read) to probe speculatively.
    pub fn read(&self, cursor: &mut Cursor<'_, T>) -> Result<V, LexError> {
        let at = cursor.pos();
        self.try_read(cursor)
            .ok_or(LexError::IllegalSequence { at })
    }

    /// Speculative read: `None` on failure, with the cursor restored to
    /// where the attempt started.
    pub fn try_read(&self, cursor: &mut Cursor<'_, T>) -> Option<V> {
        let start = cursor.pos();
        let saved = cursor.save();
        match self.matcher.parse(cursor) {
            Some(_) => Some((self.build)(cursor.consumed_since(start))),
            None => {
                cursor.restore(saved);
                None
            }
        }
    }
}

/// An ordered list of tokens defining a lexical grammar.
///
/// Holds no mutable state; the shared cursor carries all progress, so one
/// lexer can serve any number of independent inputs.
pub struct Lexer<T, V> {
    tokens: Vec<Token<T, V>>,
}

impl<T: Clone + PartialOrd, V> Lexer<T, V> {
    pub fn new(tokens: Vec<Token<T, V>>) -> Self {
        Self { tokens }
    }

    /// Classify the next lexical unit: each token is tried in list order at
    /// the current position, and the first match wins. Fails with
    /// [`LexError::NoMatchingToken`] once every token has rejected.
    pub fn next(&self, cursor: &mut Cursor<'_, T>) -> Result<V, LexError> {
        let at = cursor.pos();
        self.tokens
            .iter()
            .find_map(|token| token.try_read(cursor))
            .ok_or(LexError::NoMatchingToken { at })
    }

    /// Scan a whole input into domain values.
    ///
    /// A token that matches without consuming would stall the scan, so a
    /// zero-width match is reported as [`LexError::NoMatchingToken`].
    pub fn tokenize(&self, input: impl IntoElements<T>) -> Result<Vec<V>, LexError> {
        let elements = input.into_elements();
        let mut cursor = Cursor::new(&elements);
        let mut values = Vec::new();
        while !cursor.at_end() {
            let before = cursor.pos();
            values.push(self.next(&mut cursor)?);
            if cursor.pos() == before {
                return Err(LexError::NoMatchingToken { at: before });
            }
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{literal, one_of, range};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn text(consumed: &[char]) -> String {
        consumed.iter().collect()
    }

    fn identifier_token() -> Token<char, String> {
        let symbol = range('a', 'z') | range('A', 'Z') | one_of("_");
        let number = range('0', '9');
        let identifier = symbol.clone() & (symbol | number).zero_or_more();
        Token::new(identifier, |consumed| format!("identifier{{\"{}\"}}", text(consumed)))
    }

    #[test]
    fn token_builds_from_the_consumed_range() {
        let token = identifier_token();
        let input = chars("abcd");
        let mut cursor = Cursor::new(&input);
        assert_eq!(token.read(&mut cursor), Ok(r#"identifier{"abcd"}"#.to_string()));
        assert!(cursor.at_end());
    }

    #[test]
    fn token_stops_at_the_match_boundary() {
        let token = identifier_token();
        let input = chars("abc def");
        let mut cursor = Cursor::new(&input);
        assert_eq!(token.read(&mut cursor), Ok(r#"identifier{"abc"}"#.to_string()));
        assert_eq!(cursor.pos(), 3);
    }

    #[test]
    fn forced_read_raises_on_mismatch() {
        let token = identifier_token();
        let input = chars("9lives");
        let mut cursor = Cursor::new(&input);
        assert_eq!(
            token.read(&mut cursor),
            Err(LexError::IllegalSequence { at: 0 })
        );
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn try_read_restores_the_cursor_on_failure() {
        // A conjunction can consume before failing; the speculative form
        // must still leave the cursor where the attempt started.
        let token = Token::new(literal("ab") & literal("cd"), |consumed: &[char]| text(consumed));
        let input = chars("abxx");
        let mut cursor = Cursor::new(&input);
        assert_eq!(token.try_read(&mut cursor), None);
        assert_eq!(cursor.pos(), 0);
    }

    fn number_token() -> Token<char, String> {
        Token::new(range('0', '9').one_or_more(), |consumed| {
            format!("number{{{}}}", text(consumed))
        })
    }

    #[test]
    fn lexer_returns_the_first_matching_token() {
        let lexer = Lexer::new(vec![identifier_token(), number_token()]);

        let input = chars("abcd");
        let mut cursor = Cursor::new(&input);
        assert_eq!(
            lexer.next(&mut cursor),
            Ok(r#"identifier{"abcd"}"#.to_string())
        );

        let input = chars("1234");
        let mut cursor = Cursor::new(&input);
        assert_eq!(lexer.next(&mut cursor), Ok("number{1234}".to_string()));
    }

    #[test]
    fn lexer_fails_once_every_token_rejects() {
        let lexer = Lexer::new(vec![identifier_token(), number_token()]);
        let input = chars("!?");
        let mut cursor = Cursor::new(&input);
        assert_eq!(
            lexer.next(&mut cursor),
            Err(LexError::NoMatchingToken { at: 0 })
        );
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn lexer_reports_the_failing_position() {
        let lexer = Lexer::new(vec![identifier_token(), number_token()]);
        assert_eq!(
            lexer.tokenize("abc!"),
            Err(LexError::NoMatchingToken { at: 3 })
        );
    }

    #[test]
    fn lexer_is_reusable_across_inputs() {
        let lexer = Lexer::new(vec![identifier_token(), number_token()]);
        assert_eq!(
            lexer.tokenize("abcd"),
            Ok(vec![r#"identifier{"abcd"}"#.to_string()])
        );
        assert_eq!(lexer.tokenize("99"), Ok(vec!["number{99}".to_string()]));
    }
}
