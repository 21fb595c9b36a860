//! The `Parser` contract and the six core combinators: `pure`, `fail`, `satisfy`,
//! `eof`, `bind`, `then`, `or`, `attempt`, and `label`. Every derived combinator in
//! [`crate::combinator`] is expressible in terms of these.

use crate::error::{ExpectedList, Message};
use crate::input::Stream;
use crate::reply::{Consumed, Reply};
use crate::trace::trace;

/// A parser over a stream of `St::Token`, producing a value of type `A`.
///
/// A `Parser` is a pure function from an input cursor to a [`Consumed`] reply:
/// composable, capturable, and safe to share across threads (running the same parser
/// concurrently on two distinct streams needs no synchronisation). `parse` never
/// mutates `input`.
pub trait Parser<St: Stream, A> {
    /// Runs this parser against `input`.
    fn parse(&self, input: St) -> Consumed<St, A>;
}

impl<St, A, F> Parser<St, A> for F
where
    St: Stream,
    F: Fn(St) -> Consumed<St, A>,
{
    fn parse(&self, input: St) -> Consumed<St, A> {
        self(input)
    }
}

impl<St: Stream, A> Parser<St, A> for Box<dyn Parser<St, A>> {
    fn parse(&self, input: St) -> Consumed<St, A> {
        (**self).parse(input)
    }
}

/// `return(x)` in the Parsec vocabulary — renamed since `return` is a reserved word.
///
/// Never consumes, never fails.
///
/// # Example
/// ```
/// use parsekit::input::TextStream;
/// use parsekit::parser::{pure, Parser};
///
/// let p = pure::<TextStream, _>(42);
/// let reply = p.parse(TextStream::new("anything")).into_reply();
/// match reply {
///     parsekit::reply::Reply::Ok { value, .. } => assert_eq!(value, 42),
///     parsekit::reply::Reply::Err { .. } => unreachable!(),
/// }
/// ```
#[doc(alias = "return")]
pub fn pure<St, A>(value: A) -> impl Parser<St, A>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: Clone + 'static,
{
    trace("pure", move |input: St| {
        let pos = input.position();
        Consumed::Empty(Reply::Ok {
            value: value.clone(),
            remainder: input,
            msg: Message::no_expectations(pos),
        })
    })
}

/// A parser that always fails without consuming input.
pub fn fail<St, A>() -> impl Parser<St, A>
where
    St: Stream + 'static,
    St::Token: 'static,
{
    trace("fail", move |input: St| {
        Consumed::Empty(Reply::Err {
            msg: Message::no_expectations(input.position()),
        })
    })
}

/// The sole primitive that advances the stream: succeeds, consuming one symbol, iff
/// `predicate` holds for the current symbol.
///
/// On a non-matching symbol the failure is labelled `"<test>"`; wrap with [`label`] to
/// give it a more specific name.
pub fn satisfy<St, F>(predicate: F) -> impl Parser<St, St::Token>
where
    St: Stream + 'static,
    St::Token: 'static,
    F: Fn(&St::Token) -> bool + 'static,
{
    trace("satisfy", move |input: St| {
        if input.at_end() {
            Consumed::Empty(Reply::Err {
                msg: Message::of(input.position(), None, ExpectedList::empty()),
            })
        } else {
            let symbol = input.current();
            if predicate(&symbol) {
                let remainder = input.advance(1);
                let pos = remainder.position();
                Consumed::consumed(move || Reply::Ok {
                    value: symbol,
                    remainder,
                    msg: Message::no_expectations(pos),
                })
            } else {
                Consumed::Empty(Reply::Err {
                    msg: Message::of(
                        input.position(),
                        Some(symbol),
                        ExpectedList::single("<test>"),
                    ),
                })
            }
        }
    })
}

/// Succeeds with `()` iff the stream is exhausted; never consumes.
pub fn eof<St>() -> impl Parser<St, ()>
where
    St: Stream + 'static,
    St::Token: 'static,
{
    trace("eof", move |input: St| {
        if input.at_end() {
            let pos = input.position();
            Consumed::Empty(Reply::Ok {
                value: (),
                remainder: input,
                msg: Message::of(pos, None, ExpectedList::single("EOF")),
            })
        } else {
            let symbol = input.current();
            Consumed::Empty(Reply::Err {
                msg: Message::of(
                    input.position(),
                    Some(symbol),
                    ExpectedList::single("EOF"),
                ),
            })
        }
    })
}

/// The monadic sequencer: run `p`, then feed its value to `f` to obtain the next
/// parser. Implements the four-way `(consumed?, ok?)` dispatch described in the data
/// model: a consumed `p` forces its continuation lazily and always reports consumed;
/// an empty `p` merges failure messages with its continuation on the empty-empty fork.
pub fn bind<St, A, B, P, F, Q>(p: P, f: F) -> impl Parser<St, B>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    B: 'static,
    P: Parser<St, A> + 'static,
    F: Fn(A) -> Q + 'static,
    Q: Parser<St, B> + 'static,
{
    let f = std::rc::Rc::new(f);
    move |input: St| match p.parse(input) {
        Consumed::Consumed(reply) => {
            let f = f.clone();
            Consumed::consumed(move || match reply.into_inner() {
                Reply::Ok {
                    value, remainder, ..
                } => f(value).parse(remainder).into_reply(),
                Reply::Err { msg } => Reply::Err { msg },
            })
        }
        Consumed::Empty(Reply::Ok {
            value,
            remainder,
            msg: m1,
        }) => match f(value).parse(remainder) {
            Consumed::Consumed(reply2) => Consumed::Consumed(reply2),
            Consumed::Empty(Reply::Ok {
                value: y,
                remainder: s2,
                msg: m2,
            }) => Consumed::Empty(Reply::Ok {
                value: y,
                remainder: s2,
                msg: m1.merge(m2),
            }),
            Consumed::Empty(Reply::Err { msg: m2 }) => {
                Consumed::Empty(Reply::Err { msg: m1.merge(m2) })
            }
        },
        Consumed::Empty(Reply::Err { msg }) => Consumed::Empty(Reply::Err { msg }),
    }
}

/// `then(p, q)` — optimised `bind(p, _ => q)`: the same four-way dispatch, without
/// threading `p`'s value.
pub fn then<St, A, B, P, Q>(p: P, q: Q) -> impl Parser<St, B>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    B: 'static,
    P: Parser<St, A> + 'static,
    Q: Parser<St, B> + 'static,
{
    let q = std::rc::Rc::new(q);
    move |input: St| match p.parse(input) {
        Consumed::Consumed(reply) => {
            let q = q.clone();
            Consumed::consumed(move || match reply.into_inner() {
                Reply::Ok { remainder, .. } => q.parse(remainder).into_reply(),
                Reply::Err { msg } => Reply::Err { msg },
            })
        }
        Consumed::Empty(Reply::Ok {
            remainder, msg: m1, ..
        }) => match q.parse(remainder) {
            Consumed::Consumed(reply2) => Consumed::Consumed(reply2),
            Consumed::Empty(Reply::Ok {
                value,
                remainder,
                msg: m2,
            }) => Consumed::Empty(Reply::Ok {
                value,
                remainder,
                msg: m1.merge(m2),
            }),
            Consumed::Empty(Reply::Err { msg: m2 }) => {
                Consumed::Empty(Reply::Err { msg: m1.merge(m2) })
            }
        },
        Consumed::Empty(Reply::Err { msg }) => Consumed::Empty(Reply::Err { msg }),
    }
}

/// Deterministic LL(1) choice: tries `p`; if it failed *and* did not consume, tries
/// `q` on the original input. **Commits after the first consumed symbol** — wrap a
/// branch in [`attempt`] to allow backtracking past symbols it has already consumed.
pub fn or<St, A, P, Q>(p: P, q: Q) -> impl Parser<St, A>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    P: Parser<St, A> + 'static,
    Q: Parser<St, A> + 'static,
{
    move |input: St| {
        let retry = input.clone();
        match p.parse(input) {
            Consumed::Consumed(reply) => Consumed::Consumed(reply),
            Consumed::Empty(Reply::Ok {
                value,
                remainder,
                msg: m1,
            }) => match q.parse(retry) {
                Consumed::Consumed(reply) => Consumed::Consumed(reply),
                Consumed::Empty(Reply::Ok { msg: m2, .. })
                | Consumed::Empty(Reply::Err { msg: m2 }) => Consumed::Empty(Reply::Ok {
                    value,
                    remainder,
                    msg: m1.merge(m2),
                }),
            },
            Consumed::Empty(Reply::Err { msg: m1 }) => match q.parse(retry) {
                Consumed::Consumed(reply) => Consumed::Consumed(reply),
                Consumed::Empty(Reply::Ok {
                    value,
                    remainder,
                    msg: m2,
                }) => Consumed::Empty(Reply::Ok {
                    value,
                    remainder,
                    msg: m1.merge(m2),
                }),
                Consumed::Empty(Reply::Err { msg: m2 }) => {
                    Consumed::Empty(Reply::Err { msg: m1.merge(m2) })
                }
            },
        }
    }
}

/// Converts a *consumed* failure into an *empty* one, so that an enclosing [`or`] may
/// still try its next alternative. The sole lookahead mechanism; O(1), but forfeits
/// the LL(1) commitment performance benefit for the wrapped parser.
pub fn attempt<St, A, P>(p: P) -> impl Parser<St, A>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    P: Parser<St, A> + 'static,
{
    move |input: St| match p.parse(input) {
        Consumed::Consumed(reply) => match reply.into_inner() {
            ok @ Reply::Ok { .. } => Consumed::Consumed(crate::lazy::Lazy::ready(ok)),
            Reply::Err { msg } => Consumed::Empty(Reply::Err { msg }),
        },
        Consumed::Empty(reply) => Consumed::Empty(reply),
    }
}

/// Relabels empty failures and empty successes so that `name` replaces the list of
/// lower-level expected productions. Consumed replies pass through unchanged: once
/// input has been consumed, the inner expectation is the informative one.
pub fn label<St, A, P>(p: P, name: &'static str) -> impl Parser<St, A>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    P: Parser<St, A> + 'static,
{
    move |input: St| match p.parse(input) {
        Consumed::Consumed(reply) => Consumed::Consumed(reply),
        Consumed::Empty(Reply::Ok {
            value,
            remainder,
            msg,
        }) => Consumed::Empty(Reply::Ok {
            value,
            remainder,
            msg: msg.expect(name),
        }),
        Consumed::Empty(Reply::Err { msg }) => Consumed::Empty(Reply::Err {
            msg: msg.expect(name),
        }),
    }
}
