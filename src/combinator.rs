//! Derived combinators expressible from the six core ones in [`crate::parser`]:
//! repetition (`many`, `many1`, `skip_many`, `skip_many1`, `count`), separation
//! (`sep_by(1)`, `end_by(1)`, `sep_end_by(1)`), chaining (`chainl1`, `chainr1`,
//! `chainl`, `chainr`), and the small shape combinators (`between`, `option`,
//! `optional`, `choice`).
//!
//! The repetition/separation/chaining family is implemented as an iterative loop
//! inspecting the `Consumed` tag inline, rather than by structural recursion on
//! `bind`/`or`: a recursive encoding is no less correct, but its call-stack depth
//! tracks input length, which overflows on long inputs. A sub-parser that succeeds
//! without consuming inside one of these loops would otherwise spin forever; that is
//! a grammar bug, not a parse failure, so it aborts the loop with a panic rather than
//! hanging or silently misbehaving.

use crate::error::Message;
use crate::input::Stream;
use crate::parser::{bind, or, pure, Parser};
use crate::reply::{Consumed, Reply};

/// Zero or more `p`, greedily. Stops at the first `Empty(Err)` and succeeds with the
/// values collected so far; a `Consumed(Err)` mid-sequence fails the whole combinator.
pub fn many<St, A, P>(p: P) -> impl Parser<St, Vec<A>>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    P: Parser<St, A> + 'static,
{
    move |input: St| {
        let mut items = Vec::new();
        let mut state = input;
        let mut consumed_any = false;
        loop {
            match p.parse(state.clone()) {
                Consumed::Consumed(reply) => match reply.into_inner() {
                    Reply::Ok {
                        value, remainder, ..
                    } => {
                        consumed_any = true;
                        items.push(value);
                        state = remainder;
                    }
                    Reply::Err { msg } => return Consumed::consumed(move || Reply::Err { msg }),
                },
                Consumed::Empty(Reply::Ok { .. }) => {
                    panic!("many: sub-parser succeeded without consuming input");
                }
                Consumed::Empty(Reply::Err { msg }) => {
                    let reply = Reply::Ok {
                        value: items,
                        remainder: state,
                        msg,
                    };
                    return if consumed_any {
                        Consumed::consumed(move || reply)
                    } else {
                        Consumed::Empty(reply)
                    };
                }
            }
        }
    }
}

/// One or more `p`; fails if the first application fails.
pub fn many1<St, A, P>(p: P) -> impl Parser<St, Vec<A>>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    P: Parser<St, A> + 'static,
{
    move |input: St| match p.parse(input) {
        Consumed::Consumed(reply) => match reply.into_inner() {
            Reply::Ok {
                value, remainder, ..
            } => many_rest(&p, vec![value], remainder, true),
            Reply::Err { msg } => Consumed::consumed(move || Reply::Err { msg }),
        },
        Consumed::Empty(Reply::Ok { .. }) => {
            panic!("many1: sub-parser succeeded without consuming input")
        }
        Consumed::Empty(Reply::Err { msg }) => Consumed::Empty(Reply::Err { msg }),
    }
}

fn many_rest<St, A, P>(p: &P, mut items: Vec<A>, mut state: St, mut consumed_any: bool) -> Consumed<St, Vec<A>>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    P: Parser<St, A>,
{
    loop {
        match p.parse(state.clone()) {
            Consumed::Consumed(reply) => match reply.into_inner() {
                Reply::Ok {
                    value, remainder, ..
                } => {
                    consumed_any = true;
                    items.push(value);
                    state = remainder;
                }
                Reply::Err { msg } => return Consumed::consumed(move || Reply::Err { msg }),
            },
            Consumed::Empty(Reply::Ok { .. }) => {
                panic!("many1: sub-parser succeeded without consuming input");
            }
            Consumed::Empty(Reply::Err { msg }) => {
                let reply = Reply::Ok {
                    value: items,
                    remainder: state,
                    msg,
                };
                return if consumed_any {
                    Consumed::consumed(move || reply)
                } else {
                    Consumed::Empty(reply)
                };
            }
        }
    }
}

/// `many(p)`, discarding the accumulated values.
pub fn skip_many<St, A, P>(p: P) -> impl Parser<St, ()>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    P: Parser<St, A> + 'static,
{
    map(many(p), |_| ())
}

/// `many1(p)`, discarding the accumulated values.
pub fn skip_many1<St, A, P>(p: P) -> impl Parser<St, ()>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    P: Parser<St, A> + 'static,
{
    map(many1(p), |_| ())
}

/// Applies `f` to a parser's eventual value. `A` must be `Clone` only in the trivial
/// sense that the returned parser is itself a reusable `Fn` value; `map`'s closure
/// runs once per `parse` call like any other combinator.
pub(crate) fn map<St, A, B, P, F>(p: P, f: F) -> impl Parser<St, B>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    B: 'static,
    P: Parser<St, A> + 'static,
    F: Fn(A) -> B + 'static,
{
    let f = std::rc::Rc::new(f);
    move |input: St| match p.parse(input) {
        Consumed::Consumed(reply) => {
            let f = f.clone();
            Consumed::consumed(move || match reply.into_inner() {
                Reply::Ok {
                    value,
                    remainder,
                    msg,
                } => Reply::Ok {
                    value: f(value),
                    remainder,
                    msg,
                },
                Reply::Err { msg } => Reply::Err { msg },
            })
        }
        Consumed::Empty(Reply::Ok {
            value,
            remainder,
            msg,
        }) => Consumed::Empty(Reply::Ok {
            value: f(value),
            remainder,
            msg,
        }),
        Consumed::Empty(Reply::Err { msg }) => Consumed::Empty(Reply::Err { msg }),
    }
}

/// Exactly `n` applications of `p`; never attempts an `(n+1)`-th.
pub fn count<St, A, P>(p: P, n: usize) -> impl Parser<St, Vec<A>>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    P: Parser<St, A> + 'static,
{
    move |input: St| {
        if n == 0 {
            let pos = input.position();
            return Consumed::Empty(Reply::Ok {
                value: Vec::new(),
                remainder: input,
                msg: Message::no_expectations(pos),
            });
        }
        let mut items = Vec::with_capacity(n);
        let mut state = input;
        let mut consumed_any = false;
        for _ in 0..n {
            match p.parse(state.clone()) {
                Consumed::Consumed(reply) => match reply.into_inner() {
                    Reply::Ok {
                        value, remainder, ..
                    } => {
                        consumed_any = true;
                        items.push(value);
                        state = remainder;
                    }
                    Reply::Err { msg } => return Consumed::consumed(move || Reply::Err { msg }),
                },
                Consumed::Empty(Reply::Ok {
                    value, remainder, ..
                }) => {
                    items.push(value);
                    state = remainder;
                }
                Consumed::Empty(Reply::Err { msg }) => {
                    return if consumed_any {
                        Consumed::consumed(move || Reply::Err { msg })
                    } else {
                        Consumed::Empty(Reply::Err { msg })
                    };
                }
            }
        }
        let pos = state.position();
        let reply = Reply::Ok {
            value: items,
            remainder: state,
            msg: Message::no_expectations(pos),
        };
        if consumed_any {
            Consumed::consumed(move || reply)
        } else {
            Consumed::Empty(reply)
        }
    }
}

/// One or more `p` separated by `sep`.
pub fn sep_by1<St, A, B, P, Sep>(p: P, sep: Sep) -> impl Parser<St, Vec<A>>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    B: 'static,
    P: Parser<St, A> + 'static,
    Sep: Parser<St, B> + 'static,
{
    move |input: St| match p.parse(input) {
        Consumed::Consumed(reply) => match reply.into_inner() {
            Reply::Ok {
                value, remainder, ..
            } => sep_by1_rest(&p, &sep, vec![value], remainder, true),
            Reply::Err { msg } => Consumed::consumed(move || Reply::Err { msg }),
        },
        Consumed::Empty(Reply::Ok {
            value, remainder, ..
        }) => sep_by1_rest(&p, &sep, vec![value], remainder, false),
        Consumed::Empty(Reply::Err { msg }) => Consumed::Empty(Reply::Err { msg }),
    }
}

fn sep_by1_rest<St, A, B, P, Sep>(
    p: &P,
    sep: &Sep,
    mut items: Vec<A>,
    mut state: St,
    mut consumed_any: bool,
) -> Consumed<St, Vec<A>>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    B: 'static,
    P: Parser<St, A>,
    Sep: Parser<St, B>,
{
    loop {
        match sep.parse(state.clone()) {
            Consumed::Consumed(sep_reply) => match sep_reply.into_inner() {
                Reply::Ok { remainder, .. } => {
                    consumed_any = true;
                    match p.parse(remainder) {
                        Consumed::Consumed(reply) => match reply.into_inner() {
                            Reply::Ok {
                                value, remainder, ..
                            } => {
                                items.push(value);
                                state = remainder;
                            }
                            Reply::Err { msg } => {
                                return Consumed::consumed(move || Reply::Err { msg })
                            }
                        },
                        Consumed::Empty(Reply::Ok {
                            value, remainder, ..
                        }) => {
                            items.push(value);
                            state = remainder;
                        }
                        // sep committed us to another element; a missing one is a hard failure.
                        Consumed::Empty(Reply::Err { msg }) => {
                            return Consumed::consumed(move || Reply::Err { msg })
                        }
                    }
                }
                Reply::Err { msg } => return Consumed::consumed(move || Reply::Err { msg }),
            },
            Consumed::Empty(Reply::Ok { .. }) => {
                panic!("sepBy: separator succeeded without consuming input")
            }
            Consumed::Empty(Reply::Err { msg }) => {
                let reply = Reply::Ok {
                    value: items,
                    remainder: state,
                    msg,
                };
                return if consumed_any {
                    Consumed::consumed(move || reply)
                } else {
                    Consumed::Empty(reply)
                };
            }
        }
    }
}

/// Zero or more `p` separated by `sep`; `[]` when the first `p` fails without
/// consuming.
pub fn sep_by<St, A, B, P, Sep>(p: P, sep: Sep) -> impl Parser<St, Vec<A>>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: Clone + 'static,
    B: 'static,
    P: Parser<St, A> + 'static,
    Sep: Parser<St, B> + 'static,
{
    or(sep_by1(p, sep), pure(Vec::new()))
}

/// One or more occurrences of `p`, each followed by `sep`.
pub fn end_by1<St, A, B, P, Sep>(p: P, sep: Sep) -> impl Parser<St, Vec<A>>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    B: 'static,
    P: Parser<St, A> + 'static,
    Sep: Parser<St, B> + 'static,
{
    move |input: St| end_by1_rest(&p, &sep, Vec::new(), input, false)
}

fn end_by1_rest<St, A, B, P, Sep>(
    p: &P,
    sep: &Sep,
    mut items: Vec<A>,
    mut state: St,
    mut consumed_any: bool,
) -> Consumed<St, Vec<A>>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    B: 'static,
    P: Parser<St, A>,
    Sep: Parser<St, B>,
{
    loop {
        let (value, next) = match p.parse(state.clone()) {
            Consumed::Consumed(reply) => match reply.into_inner() {
                Reply::Ok {
                    value, remainder, ..
                } => (value, remainder),
                Reply::Err { msg } => return Consumed::consumed(move || Reply::Err { msg }),
            },
            Consumed::Empty(Reply::Ok {
                value, remainder, ..
            }) => (value, remainder),
            Consumed::Empty(Reply::Err { msg }) => {
                let reply = Reply::Ok {
                    value: items,
                    remainder: state,
                    msg,
                };
                return if consumed_any {
                    Consumed::consumed(move || reply)
                } else {
                    Consumed::Empty(reply)
                };
            }
        };
        match sep.parse(next) {
            Consumed::Consumed(reply) => match reply.into_inner() {
                Reply::Ok { remainder, .. } => {
                    items.push(value);
                    state = remainder;
                    consumed_any = true;
                }
                Reply::Err { msg } => return Consumed::consumed(move || Reply::Err { msg }),
            },
            Consumed::Empty(Reply::Ok { .. }) => {
                panic!("endBy: separator succeeded without consuming input")
            }
            // p succeeded but the mandatory trailing separator is missing.
            Consumed::Empty(Reply::Err { msg }) => {
                return Consumed::consumed(move || Reply::Err { msg })
            }
        }
    }
}

/// Zero or more occurrences of `p`, each followed by `sep`.
pub fn end_by<St, A, B, P, Sep>(p: P, sep: Sep) -> impl Parser<St, Vec<A>>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: Clone + 'static,
    B: 'static,
    P: Parser<St, A> + 'static,
    Sep: Parser<St, B> + 'static,
{
    or(end_by1(p, sep), pure(Vec::new()))
}

/// One or more `p` separated by `sep`, with an optional trailing `sep`.
pub fn sep_end_by1<St, A, B, P, Sep>(p: P, sep: Sep) -> impl Parser<St, Vec<A>>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    B: 'static,
    P: Parser<St, A> + 'static,
    Sep: Parser<St, B> + 'static,
{
    move |input: St| match p.parse(input) {
        Consumed::Consumed(reply) => match reply.into_inner() {
            Reply::Ok {
                value, remainder, ..
            } => sep_end_by1_rest(&p, &sep, vec![value], remainder, true),
            Reply::Err { msg } => Consumed::consumed(move || Reply::Err { msg }),
        },
        Consumed::Empty(Reply::Ok {
            value, remainder, ..
        }) => sep_end_by1_rest(&p, &sep, vec![value], remainder, false),
        Consumed::Empty(Reply::Err { msg }) => Consumed::Empty(Reply::Err { msg }),
    }
}

fn sep_end_by1_rest<St, A, B, P, Sep>(
    p: &P,
    sep: &Sep,
    mut items: Vec<A>,
    mut state: St,
    mut consumed_any: bool,
) -> Consumed<St, Vec<A>>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    B: 'static,
    P: Parser<St, A>,
    Sep: Parser<St, B>,
{
    loop {
        match sep.parse(state.clone()) {
            Consumed::Consumed(sep_reply) => match sep_reply.into_inner() {
                Reply::Ok { remainder, .. } => {
                    consumed_any = true;
                    match p.parse(remainder.clone()) {
                        Consumed::Consumed(reply) => match reply.into_inner() {
                            Reply::Ok {
                                value, remainder, ..
                            } => {
                                items.push(value);
                                state = remainder;
                            }
                            Reply::Err { msg } => {
                                return Consumed::consumed(move || Reply::Err { msg })
                            }
                        },
                        Consumed::Empty(Reply::Ok {
                            value, remainder, ..
                        }) => {
                            items.push(value);
                            state = remainder;
                        }
                        // trailing separator with nothing after it: stop here, success.
                        Consumed::Empty(Reply::Err { msg }) => {
                            let reply = Reply::Ok {
                                value: items,
                                remainder,
                                msg,
                            };
                            return Consumed::consumed(move || reply);
                        }
                    }
                }
                Reply::Err { msg } => return Consumed::consumed(move || Reply::Err { msg }),
            },
            Consumed::Empty(Reply::Ok { .. }) => {
                panic!("sepEndBy: separator succeeded without consuming input")
            }
            Consumed::Empty(Reply::Err { msg }) => {
                let reply = Reply::Ok {
                    value: items,
                    remainder: state,
                    msg,
                };
                return if consumed_any {
                    Consumed::consumed(move || reply)
                } else {
                    Consumed::Empty(reply)
                };
            }
        }
    }
}

/// Zero or more `p` separated by `sep`, with an optional trailing `sep`.
pub fn sep_end_by<St, A, B, P, Sep>(p: P, sep: Sep) -> impl Parser<St, Vec<A>>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: Clone + 'static,
    B: 'static,
    P: Parser<St, A> + 'static,
    Sep: Parser<St, B> + 'static,
{
    or(sep_end_by1(p, sep), pure(Vec::new()))
}

/// `p (op p)*` folded left-associatively: `op` yields a binary combining function.
/// Removes left recursion from expression grammars.
pub fn chainl1<St, A, Op, P, F>(p: P, op: Op) -> impl Parser<St, A>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    P: Parser<St, A> + 'static,
    Op: Parser<St, F> + 'static,
    F: Fn(A, A) -> A + 'static,
{
    move |input: St| match p.parse(input) {
        Consumed::Consumed(reply) => match reply.into_inner() {
            Reply::Ok {
                value, remainder, ..
            } => chainl1_rest(&p, &op, value, remainder, true),
            Reply::Err { msg } => Consumed::consumed(move || Reply::Err { msg }),
        },
        Consumed::Empty(Reply::Ok {
            value, remainder, ..
        }) => chainl1_rest(&p, &op, value, remainder, false),
        Consumed::Empty(Reply::Err { msg }) => Consumed::Empty(Reply::Err { msg }),
    }
}

fn chainl1_rest<St, A, Op, P, F>(
    p: &P,
    op: &Op,
    mut acc: A,
    mut state: St,
    mut consumed_any: bool,
) -> Consumed<St, A>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    P: Parser<St, A>,
    Op: Parser<St, F>,
    F: Fn(A, A) -> A,
{
    loop {
        match op.parse(state.clone()) {
            Consumed::Consumed(op_reply) => match op_reply.into_inner() {
                Reply::Ok {
                    value: f, remainder, ..
                } => {
                    consumed_any = true;
                    match p.parse(remainder) {
                        Consumed::Consumed(reply) => match reply.into_inner() {
                            Reply::Ok {
                                value, remainder, ..
                            } => {
                                acc = f(acc, value);
                                state = remainder;
                            }
                            Reply::Err { msg } => {
                                return Consumed::consumed(move || Reply::Err { msg })
                            }
                        },
                        Consumed::Empty(Reply::Ok {
                            value, remainder, ..
                        }) => {
                            acc = f(acc, value);
                            state = remainder;
                        }
                        Consumed::Empty(Reply::Err { msg }) => {
                            return Consumed::consumed(move || Reply::Err { msg })
                        }
                    }
                }
                Reply::Err { msg } => return Consumed::consumed(move || Reply::Err { msg }),
            },
            Consumed::Empty(Reply::Ok { .. }) => {
                panic!("chainl1: operator succeeded without consuming input")
            }
            Consumed::Empty(Reply::Err { msg }) => {
                let reply = Reply::Ok {
                    value: acc,
                    remainder: state,
                    msg,
                };
                return if consumed_any {
                    Consumed::consumed(move || reply)
                } else {
                    Consumed::Empty(reply)
                };
            }
        }
    }
}

/// `chainl1`, or `x` when no `p` matches at all.
pub fn chainl<St, A, Op, P, F>(p: P, op: Op, x: A) -> impl Parser<St, A>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: Clone + 'static,
    P: Parser<St, A> + 'static,
    Op: Parser<St, F> + 'static,
    F: Fn(A, A) -> A + 'static,
{
    or(chainl1(p, op), pure(x))
}

/// `p (op p)*` folded right-associatively. Collects the flat sequence of values and
/// operators iteratively, then folds from the right, so recursion depth tracks
/// neither input length nor nesting depth.
pub fn chainr1<St, A, Op, P, F>(p: P, op: Op) -> impl Parser<St, A>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    P: Parser<St, A> + 'static,
    Op: Parser<St, F> + 'static,
    F: Fn(A, A) -> A + 'static,
{
    move |input: St| {
        let mut values: Vec<A> = Vec::new();
        let mut ops: Vec<F> = Vec::new();
        let mut consumed_any;
        let mut state;

        match p.parse(input) {
            Consumed::Consumed(reply) => match reply.into_inner() {
                Reply::Ok {
                    value, remainder, ..
                } => {
                    values.push(value);
                    state = remainder;
                    consumed_any = true;
                }
                Reply::Err { msg } => return Consumed::consumed(move || Reply::Err { msg }),
            },
            Consumed::Empty(Reply::Ok {
                value, remainder, ..
            }) => {
                values.push(value);
                state = remainder;
                consumed_any = false;
            }
            Consumed::Empty(Reply::Err { msg }) => return Consumed::Empty(Reply::Err { msg }),
        }

        let final_msg = loop {
            match op.parse(state.clone()) {
                Consumed::Consumed(op_reply) => match op_reply.into_inner() {
                    Reply::Ok {
                        value: f, remainder, ..
                    } => {
                        consumed_any = true;
                        match p.parse(remainder) {
                            Consumed::Consumed(reply) => match reply.into_inner() {
                                Reply::Ok {
                                    value,
                                    remainder: r2,
                                    ..
                                } => {
                                    ops.push(f);
                                    values.push(value);
                                    state = r2;
                                }
                                Reply::Err { msg } => {
                                    return Consumed::consumed(move || Reply::Err { msg })
                                }
                            },
                            Consumed::Empty(Reply::Ok {
                                value,
                                remainder: r2,
                                ..
                            }) => {
                                ops.push(f);
                                values.push(value);
                                state = r2;
                            }
                            Consumed::Empty(Reply::Err { msg }) => {
                                return Consumed::consumed(move || Reply::Err { msg })
                            }
                        }
                    }
                    Reply::Err { msg } => return Consumed::consumed(move || Reply::Err { msg }),
                },
                Consumed::Empty(Reply::Ok { .. }) => {
                    panic!("chainr1: operator succeeded without consuming input")
                }
                Consumed::Empty(Reply::Err { msg }) => break msg,
            }
        };

        let mut acc = values.pop().expect("at least one value was parsed");
        while let Some(f) = ops.pop() {
            let left = values.pop().expect("one value per operator, by construction");
            acc = f(left, acc);
        }
        let reply = Reply::Ok {
            value: acc,
            remainder: state,
            msg: final_msg,
        };
        if consumed_any {
            Consumed::consumed(move || reply)
        } else {
            Consumed::Empty(reply)
        }
    }
}

/// `chainr1`, or `x` when no `p` matches at all.
pub fn chainr<St, A, Op, P, F>(p: P, op: Op, x: A) -> impl Parser<St, A>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: Clone + 'static,
    P: Parser<St, A> + 'static,
    Op: Parser<St, F> + 'static,
    F: Fn(A, A) -> A + 'static,
{
    or(chainr1(p, op), pure(x))
}

/// `open then p then close`, returning only `p`'s value.
pub fn between<St, A, O, C, Open, Close, P>(open: Open, close: Close, p: P) -> impl Parser<St, A>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: Clone + 'static,
    O: 'static,
    C: 'static,
    Open: Parser<St, O> + 'static,
    Close: Parser<St, C> + 'static,
    P: Parser<St, A> + 'static,
{
    let close = std::rc::Rc::new(close);
    crate::parser::then(
        open,
        bind(p, move |x: A| {
            let close = close.clone();
            crate::parser::then(move |input: St| close.parse(input), pure(x))
        }),
    )
}

/// `p`'s value, or `x` when `p` fails without consuming.
pub fn option<St, A, P>(p: P, x: A) -> impl Parser<St, A>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: Clone + 'static,
    P: Parser<St, A> + 'static,
{
    or(p, pure(x))
}

/// Runs `p` for its effect; succeeds whether or not `p` matched, as long as it didn't
/// fail having consumed input.
pub fn optional<St, A, P>(p: P) -> impl Parser<St, ()>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
    P: Parser<St, A> + 'static,
{
    or(map(p, |_| ()), pure(()))
}

/// Tries each alternative in order, left to right, per [`or`]'s commitment rule.
pub fn choice<St, A>(parsers: Vec<Box<dyn Parser<St, A>>>) -> impl Parser<St, A>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
{
    let mut iter = parsers.into_iter();
    let first: Box<dyn Parser<St, A>> = iter
        .next()
        .unwrap_or_else(|| Box::new(crate::parser::fail()));
    iter.fold(first, |acc, next| Box::new(or(acc, next)))
}
