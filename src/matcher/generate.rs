//! Generate direction: reconstructing element sequences from result values,
//! and re-matching a value against a candidate sub-grammar.

use itertools::Itertools;

use super::ast::Matcher;
use super::value::Value;

impl<T: Clone + PartialOrd> Matcher<T> {
    /// Reconstruct the element sequence a value was matched from.
    ///
    /// The inverse of [`parse`](Self::parse): a literal contributes its own
    /// stored content, a one-of contributes the member at the value's index,
    /// combinators concatenate their children's output in branch order.
    /// Returns `None` when the value's shape does not correspond to this
    /// matcher (wrong variant, out-of-range branch or member index).
    pub fn generate(&self, value: &Value<T>) -> Option<Vec<T>> {
        match (self, value) {
            (Matcher::Any, Value::Element(element))
            | (Matcher::Range(_, _), Value::Element(element)) => Some(vec![element.clone()]),
            (Matcher::Literal(sequence), Value::Matched) => Some(sequence.clone()),
            (Matcher::OneOf(set), Value::Index(index)) => {
                set.get(*index).map(|member| vec![member.clone()])
            }
            (Matcher::Or(branches), Value::Branch(index, inner)) => {
                branches.get(*index)?.generate(inner)
            }
            (Matcher::And(branches), Value::Record(values)) if branches.len() == values.len() => {
                branches
                    .iter()
                    .zip(values)
                    .map(|(branch, value)| branch.generate(value))
                    .collect::<Option<Vec<_>>>()
                    .map(|parts| parts.concat())
            }
            (Matcher::ZeroOrMore(inner), Value::Repeat(values))
            | (Matcher::OneOrMore(inner), Value::Repeat(values)) => values
                .iter()
                .map(|value| inner.generate(value))
                .collect::<Option<Vec<_>>>()
                .map(|parts| parts.concat()),
            (Matcher::Optional(inner), Value::Optional(envelope)) => match envelope {
                Some(value) => inner.generate(value),
                None => Some(Vec::new()),
            },
            _ => None,
        }
    }

    /// Ask whether `subrule` could have produced `value` (or part of it),
    /// and decompose the value under it.
    ///
    /// This is a query, not an assertion: an empty result means "no", never
    /// an error. It exists because alternations get merged and widened after
    /// the fact, and later code needs to know which sub-rule of the merged
    /// grammar an already-parsed value belongs to without re-parsing.
    ///
    /// Matching shapes are decided by structural equality: an equal subrule
    /// delegates to its own [`generate`](Self::generate), a same-shaped but
    /// unequal one yields nothing. An alternation dispatches on the value's
    /// branch tag; against an alternation subrule, every subrule branch
    /// sharing the producing branch's shape is tried and the decompositions
    /// concatenated — flattening erases which alternation a branch came
    /// from, so the shape tag is the only discriminator left. A conjunction
    /// contains each of its parts, and repetition and optional delegate
    /// through their collected values.
    pub fn rematch(&self, value: &Value<T>, subrule: &Matcher<T>) -> Vec<T> {
        if self.shape() == subrule.shape() {
            if self == subrule {
                return subrule.generate(value).unwrap_or_default();
            }
            return Vec::new();
        }
        match (self, value) {
            (Matcher::Or(branches), Value::Branch(index, inner)) => {
                let Some(producer) = branches.get(*index) else {
                    return Vec::new();
                };
                match subrule {
                    Matcher::Or(candidates) => {
                        let tag = producer.shape();
                        candidates
                            .iter()
                            .filter(|candidate| candidate.shape() == tag)
                            .map(|candidate| producer.rematch(inner, candidate))
                            .concat()
                    }
                    _ => producer.rematch(inner, subrule),
                }
            }
            (Matcher::And(branches), Value::Record(values)) if branches.len() == values.len() => {
                branches
                    .iter()
                    .zip(values)
                    .map(|(branch, value)| branch.rematch(value, subrule))
                    .concat()
            }
            (Matcher::ZeroOrMore(inner), Value::Repeat(values))
            | (Matcher::OneOrMore(inner), Value::Repeat(values)) => values
                .iter()
                .map(|value| inner.rematch(value, subrule))
                .concat(),
            (Matcher::Optional(inner), Value::Optional(envelope)) => envelope
                .as_ref()
                .map(|value| inner.rematch(value, subrule))
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}
