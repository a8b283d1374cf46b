//! A small Lua-flavoured lexer built on the token layer.
//!
//! Covers the subset needed to exercise the whole stack end to end:
//! keywords, identifiers, decimal integers, operators and punctuation, and
//! whitespace. Keyword recognition happens in the identifier token's
//! constructor against a static set, so `local` and `locale` share one
//! matcher but produce different token kinds.

use phf::{Set, phf_set};

use crate::matcher::{Matcher, literal, one_of, range};
use crate::token::{LexError, Lexer, Token};

/// One lexical unit of the Lua subset.
#[derive(Debug, Clone, PartialEq)]
pub enum LuaToken {
    Keyword(String),
    Identifier(String),
    Integer(i64),
    Symbol(String),
    Space,
}

static KEYWORDS: Set<&'static str> = phf_set! {
    "and", "break", "do", "else", "elseif", "end", "false", "for",
    "function", "goto", "if", "in", "local", "nil", "not", "or",
    "repeat", "return", "then", "true", "until", "while",
};

fn name_start() -> Matcher<char> {
    range('a', 'z') | range('A', 'Z') | one_of("_")
}

fn name() -> Matcher<char> {
    name_start() & (name_start() | range('0', '9')).zero_or_more()
}

fn integer() -> Matcher<char> {
    range('0', '9').one_or_more()
}

/// Two-character operators; must be tried before the single-character
/// symbols so `==` never lexes as two `=`.
fn wide_operator() -> Matcher<char> {
    literal("==") | literal("~=") | literal("<=") | literal(">=") | literal("..")
}

fn narrow_symbol() -> Matcher<char> {
    one_of("+-*/%^#<>=(){}[];:,.")
}

fn whitespace() -> Matcher<char> {
    one_of(" \t\r\n").one_or_more()
}

fn text(consumed: &[char]) -> String {
    consumed.iter().collect()
}

/// A ready-made lexer for the Lua subset. Reusable across inputs.
pub fn lexer() -> Lexer<char, LuaToken> {
    Lexer::new(vec![
        Token::new(whitespace(), |_| LuaToken::Space),
        Token::new(name(), |consumed| {
            let name = text(consumed);
            if KEYWORDS.contains(name.as_str()) {
                LuaToken::Keyword(name)
            } else {
                LuaToken::Identifier(name)
            }
        }),
        Token::new(integer(), |consumed| {
            // Saturates on literals beyond i64 range.
            LuaToken::Integer(text(consumed).parse().unwrap_or(i64::MAX))
        }),
        Token::new(wide_operator(), |consumed| LuaToken::Symbol(text(consumed))),
        Token::new(narrow_symbol(), |consumed| LuaToken::Symbol(text(consumed))),
    ])
}

/// Lex `source` into tokens, dropping whitespace.
pub fn tokens(source: &str) -> Result<Vec<LuaToken>, LexError> {
    Ok(lexer()
        .tokenize(source)?
        .into_iter()
        .filter(|token| *token != LuaToken::Space)
        .collect())
}
