//! Sequential composition: `split_with`/`split_`, plus
//! the `pair`/`preceded`/`terminated`/`delimited` convenience wrappers
//! grounded on `winnow`'s `combinator::sequence` module of the same names.

use crate::core::Step;
use crate::error::ParseError;
use crate::parser::Parser;

/// State of [`split_with`]: `Left(sl) | Right(b1, sr)`. The
/// right branch carries the left's already-produced result alongside the
/// right parser's own state, so it can be combined with the right's result
/// once the right parser reaches its own `Stop`.
pub enum SplitState<LS, B1, RS> {
    /// Still running the left parser.
    Left(LS),
    /// Running the right parser; `b1` is the left's held result, applied
    /// to `f` once the right parser stops.
    Right(B1, RS),
}

/// `splitWith(f, left, right)`: run `left`, then `right`,
/// combining their results with `f`.
///
/// **Quadratic caveat**: each composition interposes a layer that
/// inspects every token; there is no auto-flattening. A long
/// `split_with(.., p1, split_with(.., p2, p3))` chain degrades O(n²) in
/// chain length. This is documented, not a bug — a continuation-passing
/// representation would avoid it but is out of scope for this crate.
pub struct SplitWith<F, L, R> {
    f: F,
    left: L,
    right: R,
}

/// Run `left`, then `right`, combining their results with `f`.
pub fn split_with<A, B1, B2, B, F, L, R>(f: F, left: L, right: R) -> SplitWith<F, L, R>
where
    F: FnMut(B1, B2) -> B,
    L: Parser<A, B1>,
    R: Parser<A, B2>,
{
    SplitWith { f, left, right }
}

impl<A, B1, B2, B, F, L, R> Parser<A, B> for SplitWith<F, L, R>
where
    F: FnMut(B1, B2) -> B,
    L: Parser<A, B1>,
    R: Parser<A, B2>,
{
    type State = SplitState<L::State, B1, R::State>;

    fn initial(&mut self) -> Self::State {
        SplitState::Left(self.left.initial())
    }

    fn step(&mut self, state: Self::State, token: &A) -> Step<Self::State, B> {
        match state {
            SplitState::Left(ls) => match self.left.step(ls, token) {
                // The left's own commits are not yet commits of the whole
                // composite — only a `Stop` does that. Translated to
                // `Skip 0` so the token stays buffered for a possible
                // enclosing `alt`.
                Step::Yield(_, ls2) => Step::Skip(0, SplitState::Left(ls2)),
                Step::YieldB(n, ls2) => Step::Skip(n, SplitState::Left(ls2)),
                Step::Skip(n, ls2) => Step::Skip(n, SplitState::Left(ls2)),
                Step::Stop(n, b1) => {
                    let rs = self.right.initial();
                    Step::Skip(n, SplitState::Right(b1, rs))
                }
                Step::Error(e) => Step::Error(e),
            },
            SplitState::Right(b1, rs) => match self.right.step(rs, token) {
                Step::Yield(n, rs2) => Step::Yield(n, SplitState::Right(b1, rs2)),
                Step::YieldB(n, rs2) => Step::YieldB(n, SplitState::Right(b1, rs2)),
                Step::Skip(n, rs2) => Step::Skip(n, SplitState::Right(b1, rs2)),
                Step::Stop(n, b2) => Step::Stop(n, (self.f)(b1, b2)),
                Step::Error(e) => Step::Error(e),
            },
        }
    }

    fn extract(&mut self, state: Self::State) -> Result<B, ParseError> {
        match state {
            SplitState::Right(b1, rs) => {
                let b2 = self.right.extract(rs)?;
                Ok((self.f)(b1, b2))
            }
            // Stream ended mid-left: both parsers must still produce a
            // final value, so a fresh right is built from `initial` and
            // finalized immediately.
            SplitState::Left(ls) => {
                let b1 = self.left.extract(ls)?;
                let rs = self.right.initial();
                let b2 = self.right.extract(rs)?;
                Ok((self.f)(b1, b2))
            }
        }
    }
}

/// `split_(left, right)`: like [`split_with`] but discards
/// the left result. Specified separately because it admits a slightly
/// tighter state — no held left value to carry through the right branch,
/// since there is nothing left to combine.
pub struct Split<L, R> {
    left: L,
    right: R,
}

/// State of [`split_`]: `Left(sl) | Right(sr)`.
pub enum SplitDiscardState<LS, RS> {
    /// Still running the left parser.
    Left(LS),
    /// Running the right parser; the left's result has already been
    /// discarded.
    Right(RS),
}

/// Run `left`, then `right`, keeping only the right's result.
pub fn split_<A, B1, B2, L, R>(left: L, right: R) -> Split<L, R>
where
    L: Parser<A, B1>,
    R: Parser<A, B2>,
{
    Split { left, right }
}

impl<A, B1, B2, L, R> Parser<A, B2> for Split<L, R>
where
    L: Parser<A, B1>,
    R: Parser<A, B2>,
{
    type State = SplitDiscardState<L::State, R::State>;

    fn initial(&mut self) -> Self::State {
        SplitDiscardState::Left(self.left.initial())
    }

    fn step(&mut self, state: Self::State, token: &A) -> Step<Self::State, B2> {
        match state {
            SplitDiscardState::Left(ls) => match self.left.step(ls, token) {
                Step::Yield(_, ls2) => Step::Skip(0, SplitDiscardState::Left(ls2)),
                Step::YieldB(n, ls2) => Step::Skip(n, SplitDiscardState::Left(ls2)),
                Step::Skip(n, ls2) => Step::Skip(n, SplitDiscardState::Left(ls2)),
                Step::Stop(n, _b1) => {
                    let rs = self.right.initial();
                    Step::Skip(n, SplitDiscardState::Right(rs))
                }
                Step::Error(e) => Step::Error(e),
            },
            SplitDiscardState::Right(rs) => self
                .right
                .step(rs, token)
                .map_state(SplitDiscardState::Right),
        }
    }

    fn extract(&mut self, state: Self::State) -> Result<B2, ParseError> {
        match state {
            SplitDiscardState::Right(rs) => self.right.extract(rs),
            SplitDiscardState::Left(ls) => {
                self.left.extract(ls)?;
                let rs = self.right.initial();
                self.right.extract(rs)
            }
        }
    }
}

// ---------------------------------------------------------------------
// pair / preceded / terminated / delimited
//
// Ambient convenience trio/quartet grounded on winnow's
// `sequence::{pair, preceded, terminated, delimited}` — every one of these
// is a one-line specialization of `split_with`/`split_`.

/// Run `left`, then `right`, keeping both results as a tuple.
pub fn pair<A, B1, B2, L, R>(left: L, right: R) -> SplitWith<fn(B1, B2) -> (B1, B2), L, R>
where
    L: Parser<A, B1>,
    R: Parser<A, B2>,
{
    split_with(|a, b| (a, b), left, right)
}

/// Run `first`, then `second`, keeping only `second`'s result.
pub fn preceded<A, B1, B2, F, S>(first: F, second: S) -> Split<F, S>
where
    F: Parser<A, B1>,
    S: Parser<A, B2>,
{
    split_(first, second)
}

/// Run `first`, then `second`, keeping only `first`'s result.
pub fn terminated<A, B1, B2, F, S>(first: F, second: S) -> SplitWith<fn(B1, B2) -> B1, F, S>
where
    F: Parser<A, B1>,
    S: Parser<A, B2>,
{
    split_with(|a, _| a, first, second)
}

/// Run `open`, then `inner`, then `close`, keeping only `inner`'s result.
pub fn delimited<A, B1, B2, B3, O, I2, C>(
    open: O,
    inner: I2,
    close: C,
) -> Split<O, SplitWith<fn(B2, B3) -> B2, I2, C>>
where
    O: Parser<A, B1>,
    I2: Parser<A, B2>,
    C: Parser<A, B3>,
{
    split_(open, terminated(inner, close))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::parse;
    use crate::token::satisfy;

    #[test]
    fn split_with_combines_both_results() {
        let p = split_with(
            |a, b| (a, b),
            satisfy(|t: &i32| *t == 1),
            satisfy(|t: &i32| *t == 2),
        );
        let (v, leftover) = parse(p, vec![1, 2, 3].into_iter()).unwrap();
        assert_eq!(v, (1, 2));
        assert_eq!(leftover, vec![3]);
    }

    #[test]
    fn split_with_propagates_left_error() {
        let p = split_with(
            |a, b| (a, b),
            satisfy(|t: &i32| *t == 9),
            satisfy(|t: &i32| *t == 2),
        );
        parse(p, vec![1, 2].into_iter()).unwrap_err();
    }

    #[test]
    fn split_with_propagates_right_error() {
        let p = split_with(
            |a, b| (a, b),
            satisfy(|t: &i32| *t == 1),
            satisfy(|t: &i32| *t == 9),
        );
        parse(p, vec![1, 2].into_iter()).unwrap_err();
    }

    #[test]
    fn split_discards_left_result() {
        let p = split_(satisfy(|t: &i32| *t == 1), satisfy(|t: &i32| *t == 2));
        let (v, leftover) = parse(p, vec![1, 2, 3].into_iter()).unwrap();
        assert_eq!(v, 2);
        assert_eq!(leftover, vec![3]);
    }

    #[test]
    fn pair_preceded_terminated() {
        let (v, _) = parse(
            pair(satisfy(|t: &i32| *t == 1), satisfy(|t: &i32| *t == 2)),
            vec![1, 2].into_iter(),
        )
        .unwrap();
        assert_eq!(v, (1, 2));

        let (v, _) = parse(
            preceded(satisfy(|t: &i32| *t == 1), satisfy(|t: &i32| *t == 2)),
            vec![1, 2].into_iter(),
        )
        .unwrap();
        assert_eq!(v, 2);

        let (v, _) = parse(
            terminated(satisfy(|t: &i32| *t == 1), satisfy(|t: &i32| *t == 2)),
            vec![1, 2].into_iter(),
        )
        .unwrap();
        assert_eq!(v, 1);
    }

    #[test]
    fn delimited_keeps_only_inner() {
        let p = delimited(
            satisfy(|t: &i32| *t == 0),
            satisfy(|t: &i32| *t == 1),
            satisfy(|t: &i32| *t == 0),
        );
        let (v, leftover) = parse(p, vec![0, 1, 0, 9].into_iter()).unwrap();
        assert_eq!(v, 1);
        assert_eq!(leftover, vec![9]);
    }

    #[test]
    fn extract_builds_fresh_right_when_stream_ends_mid_left() {
        let p = split_with(
            |a: i32, b: i32| a + b,
            crate::combinator::yield_(1),
            crate::combinator::yield_(2),
        );
        let (v, leftover) = parse(p, Vec::<i32>::new().into_iter()).unwrap();
        assert_eq!(v, 3);
        assert_eq!(leftover, Vec::<i32>::new());
    }
}
