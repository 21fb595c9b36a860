//! [`Reply`], the success/failure sum that every parse produces, and [`Consumed`], the
//! tag wrapping it that records whether the input cursor advanced.

use crate::error::Message;
use crate::input::Stream;
use crate::lazy::Lazy;

/// The outcome of running a parser: either a value plus the unconsumed remainder, or
/// a failure message. Both variants carry a [`Message`] — even `Ok`, since it records
/// what would have been expected next, needed for `or`'s merge on an empty-empty fork.
pub enum Reply<St: Stream, A> {
    /// Success.
    Ok {
        /// The parsed value.
        value: A,
        /// The stream positioned after the parsed value.
        remainder: St,
        /// What would have been expected had this parser not matched.
        msg: Message<St::Token>,
    },
    /// Failure.
    Err {
        /// The failure description.
        msg: Message<St::Token>,
    },
}

/// Tags a [`Reply`] as *consumed* (the input cursor advanced at some point) or *empty*
/// (it did not). This tag is what drives `bind`/`or`/`attempt`'s four-way dispatch.
///
/// The consumed branch defers its reply behind a [`Lazy`] thunk so that a caller who
/// only needs the tag — e.g. `or` deciding whether to try its second branch — never
/// pays for building a reply it will discard.
pub enum Consumed<St: Stream, A> {
    /// Input was advanced; the reply is computed on first access and cached.
    Consumed(Lazy<Reply<St, A>>),
    /// Input was not advanced; the reply is already known.
    Empty(Reply<St, A>),
}

impl<St, A> Consumed<St, A>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
{
    /// Builds a consumed result whose reply is computed lazily.
    pub fn consumed(thunk: impl FnOnce() -> Reply<St, A> + 'static) -> Self {
        Consumed::Consumed(Lazy::new(thunk))
    }

    /// Builds an empty result from an already-known reply.
    pub fn empty(reply: Reply<St, A>) -> Self {
        Consumed::Empty(reply)
    }

    /// `true` iff this result is tagged consumed. Never forces the reply.
    pub fn is_consumed(&self) -> bool {
        matches!(self, Consumed::Consumed(_))
    }

    /// Forces (if needed) and extracts the underlying reply.
    pub fn into_reply(self) -> Reply<St, A> {
        match self {
            Consumed::Consumed(lazy) => lazy.into_inner(),
            Consumed::Empty(reply) => reply,
        }
    }
}
