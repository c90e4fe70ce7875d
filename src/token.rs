//! A handful of illustrative leaf parsers: `satisfy`, `take`, `take_eq`,
//! `take_ge`, `take_while`, `take_while1`, `peek`, `eof`, `look_ahead`,
//! `slice_sep_by`.
//!
//! Concrete leaf parsers are an external collaborator, out of this
//! crate's core scope, beyond a handful of examples that illustrate
//! protocol usage. These exist only so the combinators above have
//! something concrete to compose and test against. A real text/byte-format
//! front end (the `winnow::token`/`winnow::bytes` equivalent) would live
//! in a separate crate built on top of this one.

use crate::core::Step;
use crate::error::ParseError;
use crate::lib::std::vec::Vec;
use crate::parser::Parser;

// ---------------------------------------------------------------------
// satisfy

/// State of [`satisfy`]: a single-shot parser that either consumes one
/// matching token or fails, never asking for a second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SatisfyState(bool);

/// Succeed with the first token iff `predicate` holds for it; fail
/// otherwise. Consumes exactly zero or one token.
pub struct Satisfy<F> {
    predicate: F,
}

/// Build a [`Satisfy`] parser from a predicate over `&A`.
pub fn satisfy<A, F>(predicate: F) -> Satisfy<F>
where
    F: FnMut(&A) -> bool,
{
    Satisfy { predicate }
}

impl<A: Clone, F> Parser<A, A> for Satisfy<F>
where
    F: FnMut(&A) -> bool,
{
    type State = SatisfyState;

    fn initial(&mut self) -> Self::State {
        SatisfyState(false)
    }

    fn step(&mut self, state: Self::State, token: &A) -> Step<Self::State, A> {
        debug_assert!(!state.0, "satisfy: stepped again after resolving");
        if (self.predicate)(token) {
            Step::Stop(0, token.clone())
        } else {
            Step::Error(ParseError::new("satisfy: predicate rejected token"))
        }
    }

    fn extract(&mut self, _state: Self::State) -> Result<A, ParseError> {
        Err(ParseError::new("satisfy: unexpected end of input"))
    }
}

// ---------------------------------------------------------------------
// eof

/// Succeeds, with `()`, iff the input is exhausted. Any token at all
/// makes it fail without consuming.
pub struct Eof;

/// Build an [`Eof`] parser.
pub fn eof() -> Eof {
    Eof
}

impl<A> Parser<A, ()> for Eof {
    type State = ();

    fn initial(&mut self) {}

    fn step(&mut self, _state: (), _token: &A) -> Step<(), ()> {
        Step::Error(ParseError::new("eof: expected end of input"))
    }

    fn extract(&mut self, _state: ()) -> Result<(), ParseError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------
// peek

/// State of [`peek`]: runs the inner parser's state machine, then on
/// success rewinds every token the inner parser consumed.
pub struct PeekState<S> {
    inner: S,
    consumed: usize,
}

/// Run `parser`, then rewind: the leftover equals the original input
/// unchanged. Failure passes through, also without consuming (since
/// nothing has committed yet by definition: `peek` never emits
/// `Yield`/`YieldB` itself).
pub struct Peek<P> {
    parser: P,
}

/// Build a [`Peek`] wrapper around `parser`.
pub fn peek<A, B, P: Parser<A, B>>(parser: P) -> Peek<P> {
    Peek { parser }
}

impl<A, B, P: Parser<A, B>> Parser<A, B> for Peek<P> {
    type State = PeekState<P::State>;

    fn initial(&mut self) -> Self::State {
        PeekState {
            inner: self.parser.initial(),
            consumed: 0,
        }
    }

    fn step(&mut self, state: Self::State, token: &A) -> Step<Self::State, B> {
        let PeekState { inner, consumed } = state;
        match self.parser.step(inner, token) {
            // The inner parser committed. A committed state's `extract`
            // cannot raise, so this just finalizes the result now instead
            // of carrying the commit outward — `peek` itself never commits.
            Step::Yield(n, s2) | Step::YieldB(n, s2) => match self.parser.extract(s2) {
                Ok(b) => Step::Stop(n + consumed + 1, b),
                Err(e) => Step::Error(e),
            },
            Step::Skip(n, s2) => Step::Skip(
                n,
                PeekState {
                    inner: s2,
                    consumed: consumed + 1 - n,
                },
            ),
            Step::Stop(n, b) => Step::Stop(n + consumed + 1, b),
            Step::Error(e) => Step::Error(e),
        }
    }

    fn extract(&mut self, state: Self::State) -> Result<B, ParseError> {
        self.parser.extract(state.inner)
    }
}

// ---------------------------------------------------------------------
// take / take_eq / take_while / take_while1

/// Shared state for the `take*` family: an accumulating buffer plus how
/// many more tokens (if bounded) are wanted.
pub struct TakeState<A> {
    buf: Vec<A>,
}

/// Collect exactly `n` tokens. Behavior on shorter input is left
/// implementation-defined by this family of leaf parsers: here, it fails
/// rather than returning a short prefix, matching `take_eq`'s stricter
/// sibling below and winnow's own `take`/`take_exact` split.
pub struct Take {
    n: usize,
}

/// Build a [`Take`] parser collecting exactly `n` tokens.
pub fn take(n: usize) -> Take {
    Take { n }
}

impl<A: Clone> Parser<A, Vec<A>> for Take {
    type State = TakeState<A>;

    fn initial(&mut self) -> Self::State {
        TakeState { buf: Vec::new() }
    }

    fn step(&mut self, mut state: Self::State, token: &A) -> Step<Self::State, Vec<A>> {
        if self.n == 0 {
            return Step::Stop(1, state.buf);
        }
        state.buf.push(token.clone());
        if state.buf.len() == self.n {
            Step::Stop(0, state.buf)
        } else {
            Step::Skip(0, state)
        }
    }

    fn extract(&mut self, state: Self::State) -> Result<Vec<A>, ParseError> {
        if self.n == 0 {
            Ok(state.buf)
        } else {
            Err(ParseError::new(format!(
                "take: needed {} tokens, stream ended after {}",
                self.n,
                state.buf.len()
            )))
        }
    }
}

/// `take_eq(n)`: succeeds with the first `n` tokens iff at least `n` are
/// available, otherwise fails. Distinct from [`take`] only in name — both
/// share the same "implementation-defined on short input, but here: fail"
/// contract — kept as its own type so callers can name the stricter
/// variant explicitly.
pub fn take_eq(n: usize) -> Take {
    Take { n }
}

/// State of [`TakeGe`]: the buffered prefix plus how many more tokens are
/// still required to clear the `n` threshold.
pub struct TakeGeState<A> {
    buf: Vec<A>,
}

/// `takeGE n`: succeed with *all* remaining tokens iff at least `n` are
/// available by the time the stream is exhausted, fail otherwise. Unlike
/// [`take`]/[`take_eq`], this does not stop after
/// exactly `n` tokens — it keeps buffering until input exhaustion, the
/// same "take everything, then check the count" shape as
/// [`take_while`]/[`take_while1`] but counting rather than predicating.
pub struct TakeGe {
    n: usize,
}

/// Build a [`TakeGe`] parser requiring at least `n` tokens total.
pub fn take_ge(n: usize) -> TakeGe {
    TakeGe { n }
}

impl<A: Clone> Parser<A, Vec<A>> for TakeGe {
    type State = TakeGeState<A>;

    fn initial(&mut self) -> Self::State {
        TakeGeState { buf: Vec::new() }
    }

    fn step(&mut self, mut state: Self::State, token: &A) -> Step<Self::State, Vec<A>> {
        state.buf.push(token.clone());
        Step::Skip(0, state)
    }

    fn extract(&mut self, state: Self::State) -> Result<Vec<A>, ParseError> {
        if state.buf.len() >= self.n {
            Ok(state.buf)
        } else {
            Err(ParseError::new(format!(
                "take_ge: needed at least {} tokens, stream ended after {}",
                self.n,
                state.buf.len()
            )))
        }
    }
}

/// Collect tokens while `predicate` holds; always succeeds, possibly with
/// an empty `Vec`.
pub struct TakeWhile<F> {
    predicate: F,
}

/// Build a [`TakeWhile`] parser.
pub fn take_while<A, F>(predicate: F) -> TakeWhile<F>
where
    F: FnMut(&A) -> bool,
{
    TakeWhile { predicate }
}

impl<A: Clone, F> Parser<A, Vec<A>> for TakeWhile<F>
where
    F: FnMut(&A) -> bool,
{
    type State = TakeState<A>;

    fn initial(&mut self) -> Self::State {
        TakeState { buf: Vec::new() }
    }

    fn step(&mut self, mut state: Self::State, token: &A) -> Step<Self::State, Vec<A>> {
        if (self.predicate)(token) {
            state.buf.push(token.clone());
            Step::Skip(0, state)
        } else {
            Step::Stop(1, state.buf)
        }
    }

    fn extract(&mut self, state: Self::State) -> Result<Vec<A>, ParseError> {
        Ok(state.buf)
    }
}

/// Like [`take_while`], but requires at least one matching token.
pub struct TakeWhile1<F> {
    predicate: F,
}

/// Build a [`TakeWhile1`] parser.
pub fn take_while1<A, F>(predicate: F) -> TakeWhile1<F>
where
    F: FnMut(&A) -> bool,
{
    TakeWhile1 { predicate }
}

impl<A: Clone, F> Parser<A, Vec<A>> for TakeWhile1<F>
where
    F: FnMut(&A) -> bool,
{
    type State = TakeState<A>;

    fn initial(&mut self) -> Self::State {
        TakeState { buf: Vec::new() }
    }

    fn step(&mut self, mut state: Self::State, token: &A) -> Step<Self::State, Vec<A>> {
        if (self.predicate)(token) {
            state.buf.push(token.clone());
            Step::Skip(0, state)
        } else if state.buf.is_empty() {
            Step::Error(ParseError::new("take_while1: no matching token"))
        } else {
            Step::Stop(1, state.buf)
        }
    }

    fn extract(&mut self, state: Self::State) -> Result<Vec<A>, ParseError> {
        if state.buf.is_empty() {
            Err(ParseError::new("take_while1: no matching token"))
        } else {
            Ok(state.buf)
        }
    }
}

// ---------------------------------------------------------------------
// look_ahead

/// Idempotent alias of [`peek`]: running `look_ahead(p)` twice in a row
/// observes the same value without the cursor advancing between runs —
/// true of [`peek`] by construction since each call builds its own fresh
/// state.
pub fn look_ahead<A, B, P: Parser<A, B>>(parser: P) -> Peek<P> {
    peek(parser)
}

// ---------------------------------------------------------------------
// slice_sep_by

/// State of [`slice_sep_by`]: the running fold plus whether the separator
/// has fired yet.
pub struct SliceSepByState<FS> {
    fold: FS,
}

/// Collect tokens up to (not including) the first one for which `is_sep`
/// holds, folding them through `fold` as they arrive.
///
/// This is the only leaf parser in this set whose collected prefix is
/// threaded through an explicit fold collaborator rather than buffered into
/// a `Vec` directly, since it exists to illustrate `Fold` composing with a
/// leaf parser, not just with `split_many`/`split_some`.

/// Build a [`SliceSepBy`] parser: collect the leading run of tokens for
/// which `is_sep` is `false` into `fold`, stopping (without consuming the
/// separator) the first time `is_sep` holds.
pub fn slice_sep_by<A, F, Fld>(is_sep: F, fold: Fld) -> SliceSepBy<F, Fld> {
    SliceSepBy { is_sep, fold }
}

/// Parser built by [`slice_sep_by`].
pub struct SliceSepBy<F, Fld> {
    is_sep: F,
    fold: Fld,
}

impl<A, F, Fld, C> Parser<A, C> for SliceSepBy<F, Fld>
where
    A: Clone,
    F: FnMut(&A) -> bool,
    Fld: crate::core::Fold<A, C>,
{
    type State = SliceSepByState<Fld::State>;

    fn initial(&mut self) -> Self::State {
        SliceSepByState {
            fold: self.fold.initial(),
        }
    }

    fn step(&mut self, state: Self::State, token: &A) -> Step<Self::State, C> {
        if (self.is_sep)(token) {
            Step::Stop(1, self.fold.extract(state.fold))
        } else {
            let fold = self.fold.step(state.fold, token.clone());
            Step::Skip(0, SliceSepByState { fold })
        }
    }

    fn extract(&mut self, state: Self::State) -> Result<C, ParseError> {
        Ok(self.fold.extract(state.fold))
    }
}
