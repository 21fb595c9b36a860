//! Property-based checks over randomly generated parser trees: the monad laws and the
//! `or`-commitment invariant, rather than hand-picked examples.

use proptest::prelude::*;

use parsekit::input::TextStream;
use parsekit::parser::{bind, or, pure, satisfy, Parser};
use parsekit::reply::Reply;

/// A small grammar of primitives, built only from `satisfy`, `pure`, `then`, and `or`
/// over a 5-letter alphabet -- enough to exercise every quadrant of the consumption
/// dispatch without an unbounded search space.
#[derive(Clone, Debug)]
enum Expr {
    Sat(char),
    Pure(char),
    Or(Box<Expr>, Box<Expr>),
    Then(Box<Expr>, Box<Expr>),
}

fn interpret(expr: &Expr) -> Box<dyn Parser<TextStream, char>> {
    match expr {
        Expr::Sat(c) => {
            let c = *c;
            Box::new(satisfy(move |x: &char| *x == c))
        }
        Expr::Pure(c) => Box::new(pure::<TextStream, _>(*c)),
        Expr::Or(a, b) => Box::new(or(interpret(a), interpret(b))),
        Expr::Then(a, b) => Box::new(parsekit::parser::then(interpret(a), interpret(b))),
    }
}

fn arb_expr() -> impl Strategy<Item = Expr> {
    let leaf = prop_oneof![
        proptest::char::range('a', 'e').prop_map(Expr::Sat),
        proptest::char::range('a', 'e').prop_map(Expr::Pure),
    ];
    leaf.prop_recursive(3, 12, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone())
                .prop_map(|(a, b)| Expr::Or(Box::new(a), Box::new(b))),
            (inner.clone(), inner).prop_map(|(a, b)| Expr::Then(Box::new(a), Box::new(b))),
        ]
    })
}

fn same_outcome(left: Reply<TextStream, char>, right: Reply<TextStream, char>) -> bool {
    match (left, right) {
        (Reply::Ok { value: l, .. }, Reply::Ok { value: r, .. }) => l == r,
        (Reply::Err { .. }, Reply::Err { .. }) => true,
        _ => false,
    }
}

proptest! {
    #[test]
    fn or_commits_once_first_branch_has_consumed(
        p in arb_expr(),
        q in arb_expr(),
        input in "[a-e]{0,5}",
    ) {
        let p_reply = interpret(&p).parse(TextStream::new(input.clone()));
        if p_reply.is_consumed() {
            let combined = or(interpret(&p), interpret(&q)).parse(TextStream::new(input));
            prop_assert!(combined.is_consumed());
            prop_assert!(same_outcome(p_reply.into_reply(), combined.into_reply()));
        }
    }

    #[test]
    fn bind_left_identity(a in proptest::char::range('a', 'e'), expr in arb_expr(), input in "[a-e]{0,5}") {
        let f = move |_: char| interpret(&expr);
        let lhs = bind(pure::<TextStream, _>(a), f.clone()).parse(TextStream::new(input.clone()));
        let rhs = f(a).parse(TextStream::new(input));
        prop_assert_eq!(lhs.is_consumed(), rhs.is_consumed());
        prop_assert!(same_outcome(lhs.into_reply(), rhs.into_reply()));
    }

    #[test]
    fn bind_right_identity(p in arb_expr(), input in "[a-e]{0,5}") {
        let lhs = bind(interpret(&p), pure::<TextStream, _>).parse(TextStream::new(input.clone()));
        let rhs = interpret(&p).parse(TextStream::new(input));
        prop_assert_eq!(lhs.is_consumed(), rhs.is_consumed());
        prop_assert!(same_outcome(lhs.into_reply(), rhs.into_reply()));
    }

    #[test]
    fn bind_associativity(p in arb_expr(), fe in arb_expr(), ge in arb_expr(), input in "[a-e]{0,5}") {
        let f = move |_: char| interpret(&fe);
        let g = move |_: char| interpret(&ge);

        let lhs = bind(bind(interpret(&p), f.clone()), g.clone()).parse(TextStream::new(input.clone()));
        let rhs = bind(interpret(&p), move |x| bind(f(x), g.clone())).parse(TextStream::new(input));
        prop_assert_eq!(lhs.is_consumed(), rhs.is_consumed());
        prop_assert!(same_outcome(lhs.into_reply(), rhs.into_reply()));
    }
}
