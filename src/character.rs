//! Text-facing client parsers, built entirely on [`satisfy`] and the text
//! specialisation of [`crate::input`]. None of these reach into the engine's
//! internals except [`regex`], which needs the contiguous `&str` view to hand to a
//! regular-expression engine.

use crate::combinator::skip_many;
use crate::error::{ExpectedList, Message};
use crate::input::{Stream, TextStream};
use crate::parser::{label, satisfy, Parser};
use crate::reply::{Consumed, Reply};
use crate::trace::trace;

/// A single ASCII digit.
pub fn digit() -> impl Parser<TextStream, char> {
    label(satisfy(|c: &char| c.is_ascii_digit()), "digit")
}

/// A single alphabetic character (Unicode-aware, via `char::is_alphabetic`).
pub fn alpha() -> impl Parser<TextStream, char> {
    label(satisfy(|c: &char| c.is_alphabetic()), "letter")
}

/// A single alphabetic or numeric character.
pub fn alpha_num() -> impl Parser<TextStream, char> {
    label(satisfy(|c: &char| c.is_alphanumeric()), "letter or digit")
}

/// Zero or more whitespace characters; never fails.
pub fn wspaces() -> impl Parser<TextStream, ()> {
    skip_many(satisfy(|c: &char| c.is_whitespace()))
}

fn current_opt(input: &TextStream) -> Option<char> {
    if input.at_end() {
        None
    } else {
        Some(input.current())
    }
}

/// Matches `literal` symbol by symbol. Stops at the first mismatching character —
/// whatever prefix matched up to that point stays consumed; wrap in [`crate::parser::attempt`]
/// to backtrack over a failed alternative.
pub fn string(literal: &'static str) -> impl Parser<TextStream, &'static str> {
    trace("string", move |input: TextStream| {
        let mut state = input;
        let mut consumed_any = false;
        for expected in literal.chars() {
            if state.at_end() || state.current() != expected {
                let msg = Message::of(
                    state.position(),
                    current_opt(&state),
                    ExpectedList::single(literal),
                );
                return if consumed_any {
                    Consumed::consumed(move || Reply::Err { msg })
                } else {
                    Consumed::Empty(Reply::Err { msg })
                };
            }
            state = state.advance(1);
            consumed_any = true;
        }
        let pos = state.position();
        let reply = Reply::Ok {
            value: literal,
            remainder: state,
            msg: Message::no_expectations(pos),
        };
        if consumed_any {
            Consumed::consumed(move || reply)
        } else {
            Consumed::Empty(reply)
        }
    })
}

/// An optional sign followed by one or more digits, folded into a signed integer.
/// Fails (consumed, if a sign was read) when no digit follows the sign.
pub fn intr() -> impl Parser<TextStream, i64> {
    trace("intr", move |input: TextStream| {
        let mut text = String::new();
        let mut state = input;
        let mut consumed_any = false;

        if matches!(current_opt(&state), Some('-') | Some('+')) {
            text.push(state.current());
            state = state.advance(1);
            consumed_any = true;
        }

        let mut saw_digit = false;
        while matches!(current_opt(&state), Some(c) if c.is_ascii_digit()) {
            text.push(state.current());
            state = state.advance(1);
            consumed_any = true;
            saw_digit = true;
        }

        if !saw_digit {
            let msg = Message::of(
                state.position(),
                current_opt(&state),
                ExpectedList::single("digit"),
            );
            return if consumed_any {
                Consumed::consumed(move || Reply::Err { msg })
            } else {
                Consumed::Empty(Reply::Err { msg })
            };
        }

        let pos = state.position();
        let value: i64 = text
            .parse()
            .expect("sign followed by one or more digits is a well-formed integer");
        let reply = Reply::Ok {
            value,
            remainder: state,
            msg: Message::no_expectations(pos),
        };
        if consumed_any {
            Consumed::consumed(move || reply)
        } else {
            Consumed::Empty(reply)
        }
    })
}

/// An optional sign, an integer part, an optional `.`-fraction, and an optional
/// `e`/`E` exponent, folded into a signed double. The fractional and exponent parts
/// only consume when followed by at least one digit; a bare trailing `.` or `e` is
/// left for whatever parses next.
pub fn dble() -> impl Parser<TextStream, f64> {
    trace("dble", move |input: TextStream| {
        let mut text = String::new();
        let mut state = input;
        let mut consumed_any = false;

        if matches!(current_opt(&state), Some('-') | Some('+')) {
            text.push(state.current());
            state = state.advance(1);
            consumed_any = true;
        }

        let mut saw_digit = false;
        while matches!(current_opt(&state), Some(c) if c.is_ascii_digit()) {
            text.push(state.current());
            state = state.advance(1);
            consumed_any = true;
            saw_digit = true;
        }

        if !saw_digit {
            let msg = Message::of(
                state.position(),
                current_opt(&state),
                ExpectedList::single("digit"),
            );
            return if consumed_any {
                Consumed::consumed(move || Reply::Err { msg })
            } else {
                Consumed::Empty(Reply::Err { msg })
            };
        }

        if current_opt(&state) == Some('.') {
            let after_dot = state.advance(1);
            if matches!(current_opt(&after_dot), Some(c) if c.is_ascii_digit()) {
                text.push('.');
                state = after_dot;
                while matches!(current_opt(&state), Some(c) if c.is_ascii_digit()) {
                    text.push(state.current());
                    state = state.advance(1);
                }
            }
        }

        if matches!(current_opt(&state), Some('e') | Some('E')) {
            let mut probe = state.advance(1);
            let mut exponent = String::new();
            exponent.push(state.current());
            if matches!(current_opt(&probe), Some('-') | Some('+')) {
                exponent.push(probe.current());
                probe = probe.advance(1);
            }
            let mut saw_exp_digit = false;
            let mut digits = String::new();
            let mut scan = probe.clone();
            while matches!(current_opt(&scan), Some(c) if c.is_ascii_digit()) {
                digits.push(scan.current());
                scan = scan.advance(1);
                saw_exp_digit = true;
            }
            if saw_exp_digit {
                exponent.push_str(&digits);
                text.push_str(&exponent);
                state = scan;
            }
        }

        let pos = state.position();
        let value: f64 = text
            .parse()
            .expect("numeral text is well-formed by construction");
        let reply = Reply::Ok {
            value,
            remainder: state,
            msg: Message::no_expectations(pos),
        };
        if consumed_any {
            Consumed::consumed(move || reply)
        } else {
            Consumed::Empty(reply)
        }
    })
}

#[cfg(feature = "regex")]
/// Matches the longest prefix of the contiguous remaining text accepted by `pattern`,
/// anchored at the current position. The expression is compiled once, at construction
/// time, and reused across every `parse` call.
pub fn regex(pattern: &str) -> impl Parser<TextStream, String> {
    let anchored = format!("^(?:{pattern})");
    let re = regex::Regex::new(&anchored).expect("valid regular expression");
    // Leaked once, at construction time, alongside the compiled expression itself --
    // not on every failed match -- so it can serve as the `'static` expectation label.
    let label: &'static str = String::leak(pattern.to_string());
    trace("regex", move |input: TextStream| match re.find(input.rest()) {
        Some(found) if !found.as_str().is_empty() => {
            let matched = found.as_str().to_string();
            let char_count = matched.chars().count();
            let remainder = input.advance(char_count);
            let pos = remainder.position();
            let reply = Reply::Ok {
                value: matched,
                remainder,
                msg: Message::no_expectations(pos),
            };
            Consumed::consumed(move || reply)
        }
        _ => Consumed::Empty(Reply::Err {
            msg: Message::of(input.position(), current_opt(&input), ExpectedList::single(label)),
        }),
    })
}
