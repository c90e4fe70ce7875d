//! The driver command alphabet.
//!
//! Every parser `step` call returns a [`Step`]: it is the only channel
//! through which a parser talks to the [driver][crate::driver] that is
//! feeding it tokens. The short version of the contract:
//!
//! - [`Step::Yield`] / [`Step::YieldB`] commit: once one of these is
//!   returned, the parser that returned it is forbidden to ever return
//!   [`Step::Error`] again.
//! - [`Step::Skip`] asks for more input without committing; its rewind
//!   count must never reach further back than the last commit point.
//! - [`Step::Stop`] is a success terminal with `n` unused trailing tokens.
//! - [`Step::Error`] is a failure terminal: the driver rewinds to the start
//!   of the uncommitted region and either tries an alternative or reports
//!   failure.

use crate::error::ParseError;

/// The five-variant command a parser's `step` emits per token.
///
/// `S` is the parser's own (existentially-stated) state type; `B` is its
/// result type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<S, B> {
    /// Commit: a result is now extractable. The driver may retain only the
    /// `n` most recently buffered tokens. No `Error` may follow from the
    /// resulting state.
    Yield(usize, S),
    /// Commit, then rewind `n` tokens into the retained tail and replay
    /// them. Same commit guarantee as [`Step::Yield`].
    YieldB(usize, S),
    /// No commit. Rewind the cursor by `n` tokens (`n = 0` just asks for
    /// more input). `n` must not exceed the distance to the last commit
    /// point.
    Skip(usize, S),
    /// Success terminal. `n` is the count of unused trailing tokens
    /// (including the current one) to return to the input.
    Stop(usize, B),
    /// Failure terminal, carrying a message.
    Error(ParseError),
}

impl<S, B> Step<S, B> {
    /// Map the state carried by `Yield`/`YieldB`/`Skip`, leaving terminal
    /// variants untouched. Used by combinators that wrap a child parser's
    /// state in their own state enum.
    pub fn map_state<S2>(self, f: impl FnOnce(S) -> S2) -> Step<S2, B> {
        match self {
            Step::Yield(n, s) => Step::Yield(n, f(s)),
            Step::YieldB(n, s) => Step::YieldB(n, f(s)),
            Step::Skip(n, s) => Step::Skip(n, f(s)),
            Step::Stop(n, b) => Step::Stop(n, b),
            Step::Error(e) => Step::Error(e),
        }
    }

    /// Map the result carried by `Stop`, leaving every other variant
    /// untouched. Used by `map` and by [`split_with`][crate::combinator::split_with]'s
    /// right-hand branch.
    pub fn map_result<B2>(self, f: impl FnOnce(B) -> B2) -> Step<S, B2> {
        match self {
            Step::Yield(n, s) => Step::Yield(n, s),
            Step::YieldB(n, s) => Step::YieldB(n, s),
            Step::Skip(n, s) => Step::Skip(n, s),
            Step::Stop(n, b) => Step::Stop(n, f(b)),
            Step::Error(e) => Step::Error(e),
        }
    }

    /// `true` for [`Step::Yield`]/[`Step::YieldB`] — the two commit
    /// variants. Exposed for combinators and tests that need to assert,
    /// at their own seams, that no `Error` follows a commit.
    pub fn is_commit(&self) -> bool {
        matches!(self, Step::Yield(..) | Step::YieldB(..))
    }
}

/// A non-failing accumulator used by [`split_many`][crate::combinator::split_many]
/// and [`split_some`][crate::combinator::split_some] to fold a parser's
/// repeated results into a single value. Same `initial`/`step`/`extract`
/// shape as [`Parser`][crate::parser::Parser], but it never returns a
/// [`Step`] and never fails.
pub trait Fold<B, C> {
    /// This fold's own state type.
    type State;

    /// Produce a fresh accumulator state.
    fn initial(&mut self) -> Self::State;

    /// Fold one successful parser result into the accumulator.
    fn step(&mut self, state: Self::State, item: B) -> Self::State;

    /// Finalize the accumulator into its result.
    fn extract(&mut self, state: Self::State) -> C;
}
