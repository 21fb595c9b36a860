//! Algebraic laws on `or`, using `attempt` where an empty-branch comparison requires
//! it.

use parsekit::input::TextStream;
use parsekit::parser::{fail, or, satisfy, Parser};
use parsekit::reply::Reply;

#[test]
fn left_identity_under_fail_when_p_is_empty() {
    let p = || satisfy(|c: &char| *c == 'a');
    let lhs = or(fail(), p()).parse(TextStream::new("b"));
    let rhs = p().parse(TextStream::new("b"));
    assert_eq!(lhs.is_consumed(), rhs.is_consumed());
    assert!(matches!(lhs.into_reply(), Reply::Err { .. }));
    assert!(matches!(rhs.into_reply(), Reply::Err { .. }));
}

#[test]
fn left_identity_under_fail_when_p_is_consumed_ok() {
    let p = || satisfy(|c: &char| *c == 'a');
    let lhs = or(fail(), p()).parse(TextStream::new("a"));
    let rhs = p().parse(TextStream::new("a"));
    assert!(lhs.is_consumed());
    assert!(rhs.is_consumed());
    match (lhs.into_reply(), rhs.into_reply()) {
        (Reply::Ok { value: l, .. }, Reply::Ok { value: r, .. }) => assert_eq!(l, r),
        _ => panic!("expected both Ok"),
    }
}

#[test]
fn associativity_on_empty_branches() {
    let p = || satisfy(|c: &char| *c == 'a');
    let q = || satisfy(|c: &char| *c == 'b');
    let r = || satisfy(|c: &char| *c == 'c');

    for input in ["a", "b", "c", "d"] {
        let lhs = or(or(p(), q()), r()).parse(TextStream::new(input));
        let rhs = or(p(), or(q(), r())).parse(TextStream::new(input));
        assert_eq!(lhs.is_consumed(), rhs.is_consumed());
        match (lhs.into_reply(), rhs.into_reply()) {
            (Reply::Ok { value: l, .. }, Reply::Ok { value: r, .. }) => assert_eq!(l, r),
            (Reply::Err { .. }, Reply::Err { .. }) => {}
            _ => panic!("grouping of or must not change the outcome on {input}"),
        }
    }
}
