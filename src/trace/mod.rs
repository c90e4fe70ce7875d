//! Driver execution tracing.
//!
//! Adapted from `winnow`'s `trace::trace`/`trace_result`, which wrap a
//! combinator's `parse_next` call to print entry/exit. Here the thing being
//! wrapped is one [`Parser::step`][crate::parser::Parser::step] call inside
//! the [driver][crate::driver]'s main loop, so the printed "result" is a
//! [`Step`] variant (commit/skip/stop/error) rather than an `IResult`.

#[cfg(feature = "debug")]
mod internals;

use crate::core::Step;

/// Trace one `step` dispatch under `--features debug`; a no-op otherwise.
///
/// `name` identifies the parser/combinator issuing the step (combinators
/// pass their own name, e.g. `"alt"`, `"split_many"`); `token_count` is the
/// number of tokens fed to this parser so far, used purely for the printed
/// call index.
#[cfg_attr(not(feature = "debug"), allow(unused_variables))]
pub fn trace_step<S, B>(
    name: impl crate::lib::std::fmt::Display,
    token_count: usize,
    f: impl FnOnce() -> Step<S, B>,
) -> Step<S, B> {
    #[cfg(feature = "debug")]
    {
        let depth = internals::Depth::new();
        internals::call(*depth, &name, token_count);
        let step = f();
        let severity = internals::Severity::with_step(&step);
        internals::result(*depth, &name, severity);
        step
    }
    #[cfg(not(feature = "debug"))]
    {
        f()
    }
}
