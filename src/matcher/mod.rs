//! The pattern-matching engine: matcher descriptions, the combinator
//! algebra, and the dual parse/generate evaluation.
//!
//! Matchers are built bottom-up from primitives and composed with the
//! operator algebra:
//!
//! | Construction          | Meaning                                        |
//! |-----------------------|------------------------------------------------|
//! | `any()`               | One element, whatever it is                    |
//! | `literal("ab")`       | The exact sequence `ab`                        |
//! | `one_of("abc")`       | One element from the set                       |
//! | `range('a', 'z')`     | One element in the inclusive range             |
//! | `a \| b`              | Alternation, first match wins                  |
//! | `a & b`               | Conjunction, left to right                     |
//! | `a.zero_or_more()`    | Repeat until failure, never fails              |
//! | `a.one_or_more()`     | Repeat, at least one required                  |
//! | `a.optional()`        | Inner outcome wrapped, never fails             |
//!
//! Evaluation runs in two directions. [`Matcher::parse`] consumes a
//! [`Cursor`](crate::Cursor) and produces a [`Value`] describing
//! what matched; [`Matcher::generate`] reconstructs the element sequence
//! from such a value, and [`Matcher::rematch`] restricts a value to the
//! sub-grammar that could have produced it.

pub mod ast;
pub mod value;

mod generate;
mod parse;

pub use ast::{IntoElements, Matcher, Shape, any, literal, one_of, range};
pub use value::Value;
