//! Per-combinator consumption-tagging invariants, checked directly against the public
//! API rather than against internal representations.

use parsekit::input::{Stream, TextStream};
use parsekit::parser::{attempt, eof, label, or, pure, satisfy, Parser};
use parsekit::reply::Reply;

#[test]
fn pure_is_always_empty() {
    let reply = pure::<TextStream, _>(()).parse(TextStream::new("x"));
    assert!(!reply.is_consumed());
}

#[test]
fn eof_is_always_empty() {
    assert!(!eof::<TextStream>().parse(TextStream::new("")).is_consumed());
    assert!(!eof::<TextStream>().parse(TextStream::new("x")).is_consumed());
}

#[test]
fn satisfy_is_empty_on_mismatch_and_consumed_on_match() {
    let p = || satisfy(|c: &char| *c == 'a');

    let miss = p().parse(TextStream::new("b"));
    assert!(!miss.is_consumed());
    assert!(matches!(miss.into_reply(), Reply::Err { .. }));

    let hit = p().parse(TextStream::new("a"));
    assert!(hit.is_consumed());
    match hit.into_reply() {
        Reply::Ok { remainder, .. } => assert_eq!(remainder.position(), 1),
        Reply::Err { .. } => panic!("expected Ok"),
    }
}

#[test]
fn or_ignores_q_once_p_has_consumed() {
    // p consumes 'a' then fails on the second character; q would match 'a' alone, but
    // must never be tried because p already consumed input before failing.
    let p = parsekit::parser::bind(satisfy(|c: &char| *c == 'a'), |_| {
        satisfy(|c: &char| *c == 'z')
    });
    let q = satisfy(|c: &char| *c == 'a');
    let reply = or(p, q).parse(TextStream::new("ab"));
    assert!(reply.is_consumed());
    assert!(matches!(reply.into_reply(), Reply::Err { .. }));
}

#[test]
fn attempt_converts_consumed_err_to_empty_err() {
    let p = parsekit::parser::then(satisfy(|c: &char| *c == 'a'), satisfy(|c: &char| *c == 'z'));
    let reply = attempt(p).parse(TextStream::new("ab"));
    assert!(!reply.is_consumed());
    assert!(matches!(reply.into_reply(), Reply::Err { .. }));
}

#[test]
fn attempt_leaves_other_tags_unchanged() {
    let ok_empty = attempt(pure::<TextStream, _>(1)).parse(TextStream::new("x"));
    assert!(!ok_empty.is_consumed());

    let ok_consumed = attempt(satisfy(|c: &char| *c == 'a')).parse(TextStream::new("a"));
    assert!(ok_consumed.is_consumed());

    let err_empty = attempt(satisfy(|c: &char| *c == 'a')).parse(TextStream::new("b"));
    assert!(!err_empty.is_consumed());
}

#[test]
fn label_replaces_expectations_only_on_empty_replies() {
    let empty_fail = label(satisfy(|c: &char| c.is_ascii_digit()), "digit").parse(TextStream::new("x"));
    match empty_fail.into_reply() {
        Reply::Err { msg } => assert_eq!(msg.expected().render(), "digit"),
        Reply::Ok { .. } => panic!("expected Err"),
    }

    let consumed = parsekit::parser::then(satisfy(|c: &char| *c == 'a'), satisfy(|c: &char| *c == 'z'));
    let labelled = label(consumed, "az").parse(TextStream::new("ab"));
    assert!(labelled.is_consumed());
    match labelled.into_reply() {
        Reply::Err { msg } => assert_ne!(msg.expected().render(), "az"),
        Reply::Ok { .. } => panic!("expected Err"),
    }
}
