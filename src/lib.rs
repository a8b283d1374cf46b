//! Composable pattern matching and lexing over element sequences.
//!
//! Matchers describe grammar rules over any ordered, equality-comparable
//! element type. They compose algebraically — alternation, conjunction,
//! repetition, optional — and evaluate in two directions: parsing consumes
//! a cursor and produces a structured [`Value`], generation reconstructs
//! the matched element sequence from such a value.
//!
//! # Example
//!
//! ```rust
//! use relex::{one_of, range};
//!
//! // An identifier: a letter or underscore, then letters, digits,
//! // underscores.
//! let symbol = range('a', 'z') | range('A', 'Z') | one_of("_");
//! let number = one_of("0123456789");
//! let identifier = symbol.clone() & (symbol | number).zero_or_more();
//!
//! assert!(identifier.matches("some_value"));
//! assert!(identifier.matches("LegalIdentifier"));
//! assert!(!identifier.matches("122_bytes"));
//!
//! // A successful parse round-trips back to the input.
//! let value = identifier.parse_all("x9").unwrap();
//! assert_eq!(identifier.generate(&value), Some(vec!['x', '9']));
//! ```

mod cursor;
pub mod lua;
pub mod matcher;
mod token;

pub use cursor::{Cursor, Position};
pub use matcher::{IntoElements, Matcher, Shape, Value, any, literal, one_of, range};
pub use token::{LexError, Lexer, Token};
