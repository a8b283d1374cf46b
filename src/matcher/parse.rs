//! Parse direction: cursor-consuming evaluation of a matcher.

use crate::cursor::Cursor;

use super::ast::{IntoElements, Matcher};
use super::value::Value;

impl<T: Clone + PartialOrd> Matcher<T> {
    /// Try to match at the cursor.
    ///
    /// On success the cursor has advanced past exactly the consumed elements
    /// and the returned value is shaped per [`Value`]. On failure the cursor
    /// is left where it was, with one exception: a conjunction keeps the
    /// consumption of operands that succeeded before the failing one.
    pub fn parse(&self, cursor: &mut Cursor<'_, T>) -> Option<Value<T>> {
        match self {
            Matcher::Any => {
                let element = cursor.peek()?.clone();
                cursor.advance(1);
                Some(Value::Element(element))
            }
            Matcher::Literal(sequence) => {
                if cursor.remaining().starts_with(sequence) {
                    cursor.advance(sequence.len());
                    Some(Value::Matched)
                } else {
                    None
                }
            }
            Matcher::OneOf(set) => {
                let element = cursor.peek()?;
                let index = set.iter().position(|member| member == element)?;
                cursor.advance(1);
                Some(Value::Index(index))
            }
            Matcher::Range(lo, hi) => {
                let element = cursor.peek()?;
                if lo <= element && element <= hi {
                    let element = element.clone();
                    cursor.advance(1);
                    Some(Value::Element(element))
                } else {
                    None
                }
            }
            Matcher::Or(branches) => {
                for (index, branch) in branches.iter().enumerate() {
                    if let Some(value) = branch.parse(cursor) {
                        return Some(Value::branch(index, value));
                    }
                }
                None
            }
            Matcher::And(branches) => branches
                .iter()
                .map(|branch| branch.parse(cursor))
                .collect::<Option<Vec<_>>>()
                .map(Value::Record),
            Matcher::ZeroOrMore(inner) => {
                let mut values = Vec::new();
                collect_repeats(inner, cursor, &mut values);
                Some(Value::Repeat(values))
            }
            Matcher::OneOrMore(inner) => {
                let before = cursor.pos();
                let first = inner.parse(cursor)?;
                let mut values = vec![first];
                if cursor.pos() != before {
                    collect_repeats(inner, cursor, &mut values);
                }
                Some(Value::Repeat(values))
            }
            Matcher::Optional(inner) => Some(Value::Optional(inner.parse(cursor).map(Box::new))),
        }
    }

    /// Match a whole sequence, requiring it to be consumed exactly to its
    /// end. Trailing unconsumed input is a failure even if a prefix matched;
    /// use [`parse`](Self::parse) for the prefix-tolerant form.
    pub fn parse_all(&self, input: impl IntoElements<T>) -> Option<Value<T>> {
        let elements = input.into_elements();
        let mut cursor = Cursor::new(&elements);
        let value = self.parse(&mut cursor)?;
        cursor.at_end().then_some(value)
    }

    /// Whether the whole input matches; see [`parse_all`](Self::parse_all).
    pub fn matches(&self, input: impl IntoElements<T>) -> bool {
        self.parse_all(input).is_some()
    }
}

/// Keep applying `inner`, collecting each success, until it fails or stops
/// consuming. The zero-progress stop keeps repetition over vacuous matchers
/// (empty literals, optionals) from looping.
fn collect_repeats<T: Clone + PartialOrd>(
    inner: &Matcher<T>,
    cursor: &mut Cursor<'_, T>,
    values: &mut Vec<Value<T>>,
) {
    loop {
        let before = cursor.pos();
        let Some(value) = inner.parse(cursor) else {
            break;
        };
        values.push(value);
        if cursor.pos() == before {
            break;
        }
    }
}
