//! An LL(∞) monadic parser-combinator engine in the Parsec tradition.
//!
//! A [`parser::Parser`] is a plain function from an immutable input cursor to a
//! [`reply::Consumed`] reply: either a value plus the unconsumed remainder, or a
//! structured failure message naming the position and the productions that were
//! expected there. Small parsers built from [`parser::satisfy`] compose, through
//! [`parser::bind`]/[`parser::then`]/[`parser::or`], into grammars of arbitrary size —
//! the same combinator built once is reused everywhere it appears in a larger grammar.
//!
//! The hard part is tracking, for every sub-parser, whether it *consumed* input as
//! well as whether it *succeeded*. Those two independent bits drive deterministic
//! LL(1) choice in [`parser::or`] (which commits to a branch once it has consumed a
//! symbol — wrap a branch in [`parser::attempt`] to allow backtracking past it), error
//! messages that merge rather than overwrite at an empty-empty fork, and the
//! early-exit behaviour of every repetition combinator in [`combinator`].
//!
//! ```
//! use parsekit::character::digit;
//! use parsekit::combinator::many1;
//! use parsekit::failure::parse;
//! use parsekit::input::TextStream;
//!
//! let digits = parse(many1(digit()), TextStream::new("123abc")).unwrap();
//! assert_eq!(digits, vec!['1', '2', '3']);
//! ```
//!
//! Recursive grammars close over themselves through [`forward::Forward`], the single
//! mutable cell this crate needs; everything else is a pure, cheaply-cloned value.
//!
//! With the `debug` feature enabled, wrapping any parser in [`trace::trace`] — every
//! combinator in this crate already does, under its own name — reports each call's
//! depth, input position, and `(consumed?, ok?)` outcome to stderr.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod character;
pub mod combinator;
pub mod error;
pub mod failure;
pub mod forward;
pub mod input;
mod lazy;
pub mod parser;
pub mod reply;
pub mod trace;

/// Re-exports the names most grammars need: the [`parser::Parser`] trait itself, the
/// six core combinators, and the two concrete [`input::Stream`] implementations.
pub mod prelude {
    pub use crate::failure::{parse, ParseFailure};
    pub use crate::input::{SliceStream, Stream, TextStream};
    pub use crate::parser::{attempt, bind, eof, fail, label, or, pure, satisfy, then, Parser};
}
