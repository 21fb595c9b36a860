//! End-to-end scenarios exercising the core engine alone, independent of the client
//! text parsers.

use parsekit::combinator::{chainl1, many};
use parsekit::input::{Stream, TextStream};
use parsekit::parser::{attempt, bind, or, pure, satisfy, then, Parser};
use parsekit::reply::Reply;

fn a() -> impl Parser<TextStream, char> {
    satisfy(|c: &char| *c == 'a')
}

fn b() -> impl Parser<TextStream, char> {
    satisfy(|c: &char| *c == 'b')
}

#[test]
fn scenario_1_ab_then_return() {
    let grammar = bind(a(), |_| bind(b(), |_| pure("ab")));
    let reply = grammar.parse(TextStream::new("ab"));
    match reply.into_reply() {
        Reply::Ok {
            value, remainder, ..
        } => {
            assert_eq!(value, "ab");
            assert_eq!(remainder.position(), 2);
        }
        Reply::Err { .. } => panic!("expected Ok"),
    }
}

#[test]
fn scenario_2_ab_then_return_on_short_input() {
    let grammar = bind(a(), |_| bind(b(), |_| pure("ab")));
    let reply = grammar.parse(TextStream::new("a"));
    match reply.into_reply() {
        Reply::Err { msg } => assert_eq!(msg.position(), 1),
        Reply::Ok { .. } => panic!("expected Err"),
    }
}

#[test]
fn scenario_3_or_picks_second_branch() {
    let grammar = or(a(), b());
    let reply = grammar.parse(TextStream::new("b"));
    match reply.into_reply() {
        Reply::Ok {
            value, remainder, ..
        } => {
            assert_eq!(value, 'b');
            assert_eq!(remainder.position(), 1);
        }
        Reply::Err { .. } => panic!("expected Ok"),
    }
}

#[test]
fn scenario_4_many_digits() {
    let grammar = many(satisfy(|c: &char| c.is_ascii_digit()));
    let reply = grammar.parse(TextStream::new("0123x"));
    match reply.into_reply() {
        Reply::Ok {
            value, remainder, ..
        } => {
            assert_eq!(value, vec!['0', '1', '2', '3']);
            assert_eq!(remainder.position(), 4);
        }
        Reply::Err { .. } => panic!("expected Ok"),
    }
}

#[test]
fn scenario_5_chainl1_sums_left_associatively() {
    let digit_as_int = bind(satisfy(|c: &char| c.is_ascii_digit()), |c: char| {
        pure(c.to_digit(10).unwrap() as i32)
    });
    let plus = then(
        satisfy(|c: &char| *c == '+'),
        pure((|x: i32, y: i32| x + y) as fn(i32, i32) -> i32),
    );
    let grammar = chainl1(digit_as_int, plus);
    let reply = grammar.parse(TextStream::new("1+2+3"));
    match reply.into_reply() {
        Reply::Ok {
            value, remainder, ..
        } => {
            assert_eq!(value, 6);
            assert_eq!(remainder.position(), 5);
        }
        Reply::Err { .. } => panic!("expected Ok"),
    }
}

fn abcd() -> impl Parser<TextStream, &'static str> {
    parsekit::character::string("abcd")
}

fn abef() -> impl Parser<TextStream, &'static str> {
    parsekit::character::string("abef")
}

#[test]
fn scenario_6_unwrapped_or_commits_to_first_branch() {
    let grammar = or(abcd(), abef());
    let reply = grammar.parse(TextStream::new("abef"));
    assert!(reply.is_consumed(), "the shared 'ab' prefix commits or to the first branch");
    match reply.into_reply() {
        Reply::Err { msg } => assert_eq!(msg.position(), 2),
        Reply::Ok { .. } => panic!("expected Err: second branch is never tried"),
    }
}

#[test]
fn scenario_7_attempt_allows_backtracking() {
    let grammar = or(attempt(abcd()), abef());
    let reply = grammar.parse(TextStream::new("abef"));
    match reply.into_reply() {
        Reply::Ok {
            value, remainder, ..
        } => {
            assert_eq!(value, "abef");
            assert_eq!(remainder.position(), 4);
        }
        Reply::Err { .. } => panic!("expected Ok"),
    }
}
