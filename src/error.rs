//! The failure-message algebra: [`Message`], its `merge`/`expect` operations, and the
//! stable rendered error format.
//!
//! Most `Message` values constructed during a parse are never read — a later success
//! overwrites them. Construction is therefore deferred through [`Lazy`] and forced only
//! when a caller actually inspects the message (via [`Message::position`],
//! [`Message::symbol`], [`Message::expected`], or [`Message::render`]).

use std::fmt;

use crate::lazy::Lazy;

/// An ordered, duplicate-tolerant list of human-readable "expected" labels.
///
/// Duplicates are permitted structurally (`merge` is a plain concatenation, kept O(1)
/// amortised by never re-walking either input) and folded away only when rendered.
#[derive(Clone, Debug, Default)]
pub struct ExpectedList(Vec<&'static str>);

impl ExpectedList {
    /// The empty list.
    pub fn empty() -> Self {
        ExpectedList(Vec::new())
    }

    /// A list containing exactly one label.
    pub fn single(name: &'static str) -> Self {
        ExpectedList(vec![name])
    }

    /// Concatenates `self` then `other`, preserving order.
    pub fn append(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Labels in order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }

    /// Comma-joined, duplicate-folded rendering, e.g. `"digit,letter"`.
    pub fn render(&self) -> String {
        let mut seen: Vec<&'static str> = Vec::new();
        for &label in &self.0 {
            if !seen.contains(&label) {
                seen.push(label);
            }
        }
        seen.join(",")
    }
}

struct Record<S> {
    position: usize,
    symbol: Option<S>,
    expected: ExpectedList,
}

/// A structured, lazily-materialised failure description.
///
/// `symbol = None` is the end-of-input sentinel. Even `Ok` replies carry a `Message`:
/// it records what would have been expected next, which is what makes `or`'s
/// empty-empty merge able to report "expected X or Y".
pub struct Message<S>(Lazy<Record<S>>);

impl<S: 'static> Message<S> {
    /// Builds an already-known message.
    pub fn of(position: usize, symbol: Option<S>, expected: ExpectedList) -> Self {
        Message(Lazy::ready(Record {
            position,
            symbol,
            expected,
        }))
    }

    /// Wraps a deferred constructor; the fields are not computed until first read.
    pub fn lazy(f: impl FnOnce() -> (usize, Option<S>, ExpectedList) + 'static) -> Self {
        Message(Lazy::new(move || {
            let (position, symbol, expected) = f();
            Record {
                position,
                symbol,
                expected,
            }
        }))
    }

    /// A message with no attached expectations, for contexts where none apply (e.g.
    /// `return`'s trivial success message).
    pub fn no_expectations(position: usize) -> Self {
        Self::of(position, None, ExpectedList::empty())
    }

    /// The position at which the underlying event was observed.
    pub fn position(&self) -> usize {
        self.0.force().position
    }

    /// The offending symbol, or `None` for the end-of-input sentinel.
    pub fn symbol(&self) -> Option<&S> {
        self.0.force().symbol.as_ref()
    }

    /// The attached expectation labels.
    pub fn expected(&self) -> &ExpectedList {
        &self.0.force().expected
    }

    /// `self.expected ++ other.expected`, keeping `self`'s position and symbol.
    ///
    /// Deferred: neither `self` nor `other` is forced until the *merged* message is
    /// itself read, so a discarded merge costs nothing beyond allocating the thunk.
    pub fn merge(self, other: Message<S>) -> Message<S> {
        Message(Lazy::new(move || {
            let a = self.0.into_inner();
            let b = other.0.into_inner();
            Record {
                position: a.position,
                symbol: a.symbol,
                expected: a.expected.append(b.expected),
            }
        }))
    }

    /// Replaces the expectation list with `[name]`, keeping position and symbol.
    pub fn expect(self, name: &'static str) -> Message<S> {
        Message(Lazy::new(move || {
            let a = self.0.into_inner();
            Record {
                position: a.position,
                symbol: a.symbol,
                expected: ExpectedList::single(name),
            }
        }))
    }
}

impl<S: fmt::Display + 'static> Message<S> {
    /// The stable, user-visible rendering:
    /// `Unexpected '<symbol-or-"EOF">' at position <N-or-"EOF">. Expecting one of [<labels>]`.
    pub fn render(&self) -> String {
        let record = self.0.force();
        let symbol = match &record.symbol {
            Some(s) => format!("{s}"),
            None => "EOF".to_string(),
        };
        format!(
            "Unexpected '{}' at position {}. Expecting one of [{}]",
            symbol,
            record.position,
            record.expected.render()
        )
    }
}
