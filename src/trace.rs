//! Optional parser execution tracing, compiled out entirely unless the `debug`
//! feature is enabled.
//!
//! Wrapping a combinator with [`trace`] lets its entry/exit — name, input position,
//! whether it consumed, whether it succeeded — be observed without affecting the
//! parse result. This is a logging concern, not a functional one: every core and
//! derived combinator in this crate wraps itself in `trace(name, ...)`, the same way
//! it would reach for a `tracing`/`log` call site in an application crate.

use crate::input::Stream;
use crate::parser::Parser;
use crate::reply::Consumed;

#[cfg(feature = "debug")]
mod internals {
    use std::cell::Cell;
    use std::io::Write;

    thread_local! {
        static DEPTH: Cell<usize> = const { Cell::new(0) };
    }

    pub struct Guard(usize);

    impl Guard {
        pub fn enter() -> Self {
            let depth = DEPTH.with(|d| {
                let v = d.get();
                d.set(v + 1);
                v
            });
            Guard(depth)
        }

        pub fn depth(&self) -> usize {
            self.0
        }
    }

    impl Drop for Guard {
        fn drop(&mut self) {
            DEPTH.with(|d| d.set(self.0));
        }
    }

    pub fn report(depth: usize, name: &str, position: usize, consumed: bool, ok: bool) {
        use anstyle::{AnsiColor, Style};

        let indent = "  ".repeat(depth);
        let style = if ok {
            Style::new().fg_color(Some(AnsiColor::Green.into()))
        } else {
            Style::new().fg_color(Some(AnsiColor::Red.into()))
        };
        let mut out = anstream::stderr();
        let _ = writeln!(
            out,
            "{indent}{style}{name}{style:#} @{position} consumed={consumed} ok={ok}"
        );
    }
}

/// Wraps `parser` so that, when the `debug` feature is enabled, its entry and exit are
/// reported to stderr with the calling depth, the input position, and the
/// `(consumed?, ok?)` outcome. Without the feature this is a transparent no-op.
#[cfg_attr(not(feature = "debug"), allow(unused_variables))]
pub fn trace<St, A>(
    name: &'static str,
    parser: impl Parser<St, A> + 'static,
) -> impl Parser<St, A>
where
    St: Stream + 'static,
    St::Token: 'static,
    A: 'static,
{
    move |input: St| {
        #[cfg(feature = "debug")]
        {
            let guard = internals::Guard::enter();
            let position = input.position();
            let result = parser.parse(input);
            let (consumed, ok) = match &result {
                Consumed::Consumed(lazy) => {
                    (true, matches!(lazy.force(), crate::reply::Reply::Ok { .. }))
                }
                Consumed::Empty(reply) => (
                    false,
                    matches!(reply, crate::reply::Reply::Ok { .. }),
                ),
            };
            internals::report(guard.depth(), name, position, consumed, ok);
            result
        }
        #[cfg(not(feature = "debug"))]
        {
            parser.parse(input)
        }
    }
}
