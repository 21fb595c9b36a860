//! The crate boundary: converting a raw [`Reply`] into a `Result` suitable for `?`
//! propagation in an embedding application.
//!
//! Everything in [`crate::parser`] and [`crate::combinator`] speaks `Consumed`/`Reply`
//! — values, not exceptions. [`ParseFailure`] exists only at the edge, for callers who
//! want an `std::error::Error` rather than a raw reply to pattern-match on. Converting
//! is a one-way door: a `ParseFailure` carries the rendered message only, not enough
//! structure to resume or retry the parse.

use std::fmt;

use crate::error::Message;
use crate::input::Stream;
use crate::parser::Parser;
use crate::reply::Reply;

/// A parse failure at the crate boundary: the rendered, stable error message plus the
/// byte/symbol position it occurred at.
#[derive(Debug)]
pub struct ParseFailure {
    rendered: String,
    position: usize,
}

impl ParseFailure {
    fn from_message<S: fmt::Display + 'static>(msg: Message<S>) -> Self {
        ParseFailure {
            position: msg.position(),
            rendered: msg.render(),
        }
    }

    /// The position (in `InputStream` units: bytes for text, elements for a slice
    /// stream) at which the failure was reported.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl std::error::Error for ParseFailure {}

/// Runs `parser` against `input` to completion, converting failure into a
/// [`ParseFailure`]. Does not itself require the parser to consume all of `input` —
/// wrap `parser` with `then(parser, eof())` (discarding `eof`'s value, or chaining via
/// `bind`) to reject trailing input.
pub fn parse<St, A, P>(parser: P, input: St) -> Result<A, ParseFailure>
where
    St: Stream + 'static,
    St::Token: fmt::Display + 'static,
    A: 'static,
    P: Parser<St, A>,
{
    match parser.parse(input).into_reply() {
        Reply::Ok { value, .. } => Ok(value),
        Reply::Err { msg } => Err(ParseFailure::from_message(msg)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TextStream;
    use crate::parser::satisfy;

    #[test]
    fn ok_reply_becomes_ok_value() {
        let result = parse(satisfy(|c: &char| *c == 'a'), TextStream::new("a"));
        assert_eq!(result.unwrap(), 'a');
    }

    #[test]
    fn err_reply_becomes_rendered_failure() {
        let result = parse(satisfy(|c: &char| *c == 'a'), TextStream::new("b"));
        let err = result.unwrap_err();
        assert_eq!(err.position(), 0);
        assert!(err.to_string().starts_with("Unexpected 'b' at position 0."));
    }
}
