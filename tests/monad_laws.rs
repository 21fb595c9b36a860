//! The three monad laws, verified by reply equality on identical inputs.

use parsekit::input::{Stream, TextStream};
use parsekit::parser::{bind, pure, satisfy, Parser};
use parsekit::reply::Reply;

fn assert_same_result(left: Reply<TextStream, char>, right: Reply<TextStream, char>) {
    match (left, right) {
        (
            Reply::Ok {
                value: lv,
                remainder: lr,
                ..
            },
            Reply::Ok {
                value: rv,
                remainder: rr,
                ..
            },
        ) => {
            assert_eq!(lv, rv);
            assert_eq!(lr.position(), rr.position());
        }
        (Reply::Err { .. }, Reply::Err { .. }) => {}
        _ => panic!("left and right identity must agree on success/failure"),
    }
}

#[test]
fn left_identity() {
    let f = |c: char| satisfy(move |x: &char| *x == c);
    let a = 'a';

    let lhs = bind(pure::<TextStream, _>(a), f).parse(TextStream::new("a"));
    let rhs = f(a).parse(TextStream::new("a"));
    assert_same_result(lhs.into_reply(), rhs.into_reply());
}

#[test]
fn right_identity() {
    let p = || satisfy(|c: &char| *c == 'a');

    let lhs = bind(p(), pure::<TextStream, _>).parse(TextStream::new("ax"));
    let rhs = p().parse(TextStream::new("ax"));
    assert_same_result(lhs.into_reply(), rhs.into_reply());
}

#[test]
fn associativity() {
    let p = || satisfy(|c: &char| *c == 'a');
    let f = |c: char| satisfy(move |x: &char| *x == (c as u8 + 1) as char);
    let g = |c: char| satisfy(move |x: &char| *x == (c as u8 + 1) as char);

    let lhs = bind(bind(p(), f), g).parse(TextStream::new("abc"));
    let rhs = bind(p(), move |x| bind(f(x), g)).parse(TextStream::new("abc"));
    assert_same_result(lhs.into_reply(), rhs.into_reply());
}
