//! The forward-reference cell: the sole mechanism for mutual recursion in grammars.

use std::cell::RefCell;
use std::rc::Rc;

use crate::input::Stream;
use crate::parser::Parser;
use crate::reply::Consumed;

/// An initially-empty, single-assignment parser cell.
///
/// Declare it, weave it into the rest of the grammar by reference, then [`set`](Forward::set)
/// it once the recursive definition is complete:
///
/// ```
/// use parsekit::forward::Forward;
/// use parsekit::input::TextStream;
/// use parsekit::parser::{or, satisfy, then, Parser};
///
/// let balanced: Forward<TextStream, ()> = Forward::new();
/// let inner = balanced.clone();
/// balanced.set(or(
///     then(
///         satisfy(|c: &char| *c == '('),
///         then(inner, then(satisfy(|c: &char| *c == ')'), parsekit::parser::pure(()))),
///     ),
///     parsekit::parser::pure(()),
/// ));
/// let reply = balanced.parse(TextStream::new("(())"));
/// assert!(matches!(reply.into_reply(), parsekit::reply::Reply::Ok { .. }));
/// ```
pub struct Forward<St: Stream, A>(Rc<RefCell<Option<Rc<dyn Parser<St, A>>>>>);

impl<St: Stream, A> Clone for Forward<St, A> {
    fn clone(&self) -> Self {
        Forward(self.0.clone())
    }
}

impl<St: Stream + 'static, A: 'static> Forward<St, A> {
    /// An empty cell. Calling [`parse`](Parser::parse) before [`set`](Forward::set) panics.
    pub fn new() -> Self {
        Forward(Rc::new(RefCell::new(None)))
    }

    /// Installs the parser this cell dispatches to. Intended to be called exactly
    /// once, after the recursive grammar referencing a clone of this cell has been
    /// built.
    pub fn set(&self, parser: impl Parser<St, A> + 'static) {
        *self.0.borrow_mut() = Some(Rc::new(parser));
    }
}

impl<St: Stream + 'static, A: 'static> Default for Forward<St, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<St: Stream + 'static, A: 'static> Parser<St, A> for Forward<St, A> {
    fn parse(&self, input: St) -> Consumed<St, A> {
        let parser = self
            .0
            .borrow()
            .clone()
            .expect("forward-reference parser used before assignment");
        parser.parse(input)
    }
}
