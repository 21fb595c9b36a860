//! The immutable cursor abstraction over a symbol sequence, and its two concrete
//! representations: a generic slice-backed stream for arbitrary symbols, and a
//! text-specialised stream that additionally exposes a contiguous `&str` view for
//! the regex-backed client parser.

use std::fmt;
use std::rc::Rc;

/// An immutable cursor over an ordered sequence of symbols of type [`Stream::Token`].
///
/// Implementations are persistent values: `advance` returns a new cursor and never
/// mutates `self`. A cheap `Clone` (structural sharing, not a deep copy) is part of
/// the contract, since combinators freely clone the stream to try an alternative.
pub trait Stream: Clone {
    /// The symbol type yielded by [`current`](Stream::current).
    type Token: Clone;

    /// The offset of this cursor from the beginning of the sequence.
    fn position(&self) -> usize;

    /// `true` iff `position()` equals the length of the underlying sequence.
    fn at_end(&self) -> bool;

    /// The symbol at `position()`.
    ///
    /// # Panics
    /// Calling this when [`at_end`](Stream::at_end) is `true` is a contract violation.
    fn current(&self) -> Self::Token;

    /// A cursor advanced by `n` symbols. `n` must be `>= 1` and must not run past the
    /// end of the sequence except when the caller has just checked `at_end()`.
    fn advance(&self, n: usize) -> Self;
}

/// A cursor over an arbitrary sequence of symbols, backed by a reference-counted slice
/// so that cloning is O(1) regardless of symbol type.
#[derive(Clone)]
pub struct SliceStream<S> {
    data: Rc<[S]>,
    pos: usize,
}

impl<S: Clone> SliceStream<S> {
    /// Builds a stream positioned at the start of `symbols`.
    pub fn new(symbols: impl Into<Rc<[S]>>) -> Self {
        SliceStream {
            data: symbols.into(),
            pos: 0,
        }
    }
}

impl<S: Clone> Stream for SliceStream<S> {
    type Token = S;

    fn position(&self) -> usize {
        self.pos
    }

    fn at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn current(&self) -> S {
        self.data[self.pos].clone()
    }

    fn advance(&self, n: usize) -> Self {
        debug_assert!(n >= 1);
        SliceStream {
            data: self.data.clone(),
            pos: self.pos + n,
        }
    }
}

/// A cursor over text, backed by a reference-counted string. `position` reports a byte
/// offset, but [`advance`](Stream::advance) steps by `char` count as the trait contract
/// requires; multibyte characters are never split. [`current`](Stream::current) yields
/// the `char` starting at the current offset.
#[derive(Clone)]
pub struct TextStream {
    data: Rc<str>,
    pos: usize,
}

impl TextStream {
    /// Builds a stream positioned at the start of `text`.
    pub fn new(text: impl Into<Rc<str>>) -> Self {
        TextStream {
            data: text.into(),
            pos: 0,
        }
    }

    /// The contiguous, unconsumed text from the current position onward.
    ///
    /// This is the text specialisation mentioned in the data model: the core engine
    /// never calls it, but the `regex` client parser needs a contiguous view to hand
    /// to a regular-expression engine.
    pub fn rest(&self) -> &str {
        &self.data[self.pos..]
    }
}

impl fmt::Debug for TextStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextStream")
            .field("pos", &self.pos)
            .field("rest", &self.rest())
            .finish()
    }
}

impl Stream for TextStream {
    type Token = char;

    fn position(&self) -> usize {
        self.pos
    }

    fn at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn current(&self) -> char {
        self.rest()
            .chars()
            .next()
            .expect("current() called at end of stream")
    }

    fn advance(&self, n: usize) -> Self {
        debug_assert!(n >= 1);
        let new_pos = self
            .rest()
            .char_indices()
            .nth(n)
            .map(|(i, _)| self.pos + i)
            .unwrap_or(self.data.len());
        TextStream {
            data: self.data.clone(),
            pos: new_pos,
        }
    }
}
