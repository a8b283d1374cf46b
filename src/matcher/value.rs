//! Result values produced by successful matches.

/// The value produced by a successful match, shaped by the matcher's kind.
///
/// A parse returns `Option<Value<T>>`; `None` is the "no match" state, so
/// the variants here only describe successes:
///
/// | Matcher kind          | Value variant                          |
/// |-----------------------|----------------------------------------|
/// | `Any`, `Range`        | [`Element`](Value::Element)            |
/// | `Literal`             | [`Matched`](Value::Matched)            |
/// | `OneOf`               | [`Index`](Value::Index)                |
/// | `Or`                  | [`Branch`](Value::Branch)              |
/// | `And`                 | [`Record`](Value::Record)              |
/// | `ZeroOrMore`, `OneOrMore` | [`Repeat`](Value::Repeat)          |
/// | `Optional`            | [`Optional`](Value::Optional)          |
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T> {
    /// The single matched element.
    Element(T),
    /// A literal matched; its content equals the matcher's own sequence, so
    /// success needs no payload.
    Matched,
    /// Index of the matched member within a `OneOf` set (first matching
    /// index when the set holds duplicates).
    Index(usize),
    /// Which alternation branch matched, and that branch's own value.
    Branch(usize, Box<Value<T>>),
    /// One value per conjunction branch, in branch order.
    Record(Vec<Value<T>>),
    /// The collected values of a repetition, in match order.
    Repeat(Vec<Value<T>>),
    /// The full envelope of an optional's inner attempt: `Some` with the
    /// inner value if it matched, `None` if it did not. The optional itself
    /// always succeeds.
    Optional(Option<Box<Value<T>>>),
}

impl<T> Value<T> {
    /// Build the alternation value for branch `index`.
    pub fn branch(index: usize, inner: Value<T>) -> Self {
        Value::Branch(index, Box::new(inner))
    }

    /// Build the envelope of a successful optional.
    pub fn some(inner: Value<T>) -> Self {
        Value::Optional(Some(Box::new(inner)))
    }

    /// The envelope of an optional whose inner matcher did not match.
    pub fn none() -> Self {
        Value::Optional(None)
    }
}
