//! Repetition: `split_many`/`split_some`, fold-driven over a
//! child parser applied zero-or-more / one-or-more times. Plus the
//! `to_vec_fold`/`many`/`some`/`many_m_n` ambient supplements
//! grounded on `winnow`'s `multi::repeat` family.

use crate::core::{Fold, Step};
use crate::error::ParseError;
use crate::lib::std::vec::Vec;
use crate::parser::Parser;

// ---------------------------------------------------------------------
// split_many

/// State of [`split_many`]: the parser's own state, the token count
/// consumed since the last successful iteration (`cnt`, used to compute
/// the `Stop` tail length when an `Error` ends the repetition), and the
/// running fold state.
pub struct SplitManyState<PS, FS> {
    parser: PS,
    cnt: usize,
    fold: FS,
}

/// `splitMany(fold, p)`: apply `p` zero or more times,
/// folding each success into `fold`. Stops (successfully) the first time
/// `p` fails in-band, or on input exhaustion — the final partial iteration
/// is tolerated either way.
pub struct SplitMany<P, Fld> {
    parser: P,
    fold: Fld,
}

/// Apply `p` zero or more times, accumulating results through `fold`.
pub fn split_many<A, B, C, P, Fld>(fold: Fld, parser: P) -> SplitMany<P, Fld>
where
    P: Parser<A, B>,
    Fld: Fold<B, C>,
{
    SplitMany { parser, fold }
}

impl<A, B, C, P, Fld> Parser<A, C> for SplitMany<P, Fld>
where
    P: Parser<A, B>,
    Fld: Fold<B, C>,
{
    type State = SplitManyState<P::State, Fld::State>;

    fn initial(&mut self) -> Self::State {
        SplitManyState {
            parser: self.parser.initial(),
            cnt: 0,
            fold: self.fold.initial(),
        }
    }

    fn step(&mut self, state: Self::State, token: &A) -> Step<Self::State, C> {
        let SplitManyState { parser, cnt, fold } = state;
        match self.parser.step(parser, token) {
            Step::Yield(_, ps2) => Step::Skip(
                0,
                SplitManyState {
                    parser: ps2,
                    cnt: cnt + 1,
                    fold,
                },
            ),
            Step::YieldB(n, ps2) => {
                debug_assert!(n <= cnt + 1, "split_many: rewind past consumed tokens");
                Step::Skip(
                    n,
                    SplitManyState {
                        parser: ps2,
                        cnt: cnt + 1 - n,
                        fold,
                    },
                )
            }
            Step::Skip(n, ps2) => {
                debug_assert!(n <= cnt + 1, "split_many: rewind past consumed tokens");
                Step::Skip(
                    n,
                    SplitManyState {
                        parser: ps2,
                        cnt: cnt + 1 - n,
                        fold,
                    },
                )
            }
            Step::Stop(n, b) => {
                let fold2 = self.fold.step(fold, b);
                let fresh = self.parser.initial();
                Step::YieldB(
                    n,
                    SplitManyState {
                        parser: fresh,
                        cnt: 0,
                        fold: fold2,
                    },
                )
            }
            Step::Error(_) => Step::Stop(cnt + 1, self.fold.extract(fold)),
        }
    }

    fn extract(&mut self, state: Self::State) -> Result<C, ParseError> {
        let SplitManyState { parser, fold, .. } = state;
        match self.parser.extract(parser) {
            Ok(b) => {
                let fold2 = self.fold.step(fold, b);
                Ok(self.fold.extract(fold2))
            }
            // Tolerant of a partial last iteration: `many`
            // never fails just because the stream ran out mid-attempt.
            Err(_) => Ok(self.fold.extract(fold)),
        }
    }
}

// ---------------------------------------------------------------------
// split_some

/// State of [`split_some`]: `Before(ps, fs)` while no iteration has
/// succeeded yet, `After(ps, cnt, fs)` once at least one has — the two
/// variants needed since the in-band `Error` handling differs between them.
pub enum SplitSomeState<PS, FS> {
    /// No successful iteration yet: an `Error` here propagates unchanged.
    Before(PS, FS),
    /// At least one success: an `Error` here converts to a `Stop` the same
    /// way [`SplitMany`] does.
    After(PS, usize, FS),
}

/// `splitSome(fold, p)`: like [`split_many`] but requires at
/// least one successful application of `p`.
pub struct SplitSome<P, Fld> {
    parser: P,
    fold: Fld,
}

/// Apply `p` one or more times, accumulating results through `fold`.
pub fn split_some<A, B, C, P, Fld>(fold: Fld, parser: P) -> SplitSome<P, Fld>
where
    P: Parser<A, B>,
    Fld: Fold<B, C>,
{
    SplitSome { parser, fold }
}

impl<A, B, C, P, Fld> Parser<A, C> for SplitSome<P, Fld>
where
    P: Parser<A, B>,
    Fld: Fold<B, C>,
{
    type State = SplitSomeState<P::State, Fld::State>;

    fn initial(&mut self) -> Self::State {
        SplitSomeState::Before(self.parser.initial(), self.fold.initial())
    }

    fn step(&mut self, state: Self::State, token: &A) -> Step<Self::State, C> {
        match state {
            SplitSomeState::Before(ps, fs) => match self.parser.step(ps, token) {
                Step::Yield(_, ps2) => Step::Skip(0, SplitSomeState::Before(ps2, fs)),
                Step::YieldB(n, ps2) => Step::Skip(n, SplitSomeState::Before(ps2, fs)),
                Step::Skip(n, ps2) => Step::Skip(n, SplitSomeState::Before(ps2, fs)),
                Step::Stop(n, b) => {
                    let fs2 = self.fold.step(fs, b);
                    let fresh = self.parser.initial();
                    Step::YieldB(n, SplitSomeState::After(fresh, 0, fs2))
                }
                // Before any success: propagate, do not convert to Stop.
                Step::Error(e) => Step::Error(e),
            },
            SplitSomeState::After(ps, cnt, fs) => match self.parser.step(ps, token) {
                Step::Yield(_, ps2) => Step::Skip(0, SplitSomeState::After(ps2, cnt + 1, fs)),
                Step::YieldB(n, ps2) => {
                    debug_assert!(n <= cnt + 1, "split_some: rewind past consumed tokens");
                    Step::Skip(n, SplitSomeState::After(ps2, cnt + 1 - n, fs))
                }
                Step::Skip(n, ps2) => {
                    debug_assert!(n <= cnt + 1, "split_some: rewind past consumed tokens");
                    Step::Skip(n, SplitSomeState::After(ps2, cnt + 1 - n, fs))
                }
                Step::Stop(n, b) => {
                    let fs2 = self.fold.step(fs, b);
                    let fresh = self.parser.initial();
                    Step::YieldB(n, SplitSomeState::After(fresh, 0, fs2))
                }
                // At least one success already folded in: tolerate the
                // failed final attempt, same as split_many.
                Step::Error(_) => Step::Stop(cnt + 1, self.fold.extract(fs)),
            },
        }
    }

    fn extract(&mut self, state: Self::State) -> Result<C, ParseError> {
        match state {
            SplitSomeState::Before(ps, fs) => match self.parser.extract(ps) {
                Ok(b) => {
                    let fs2 = self.fold.step(fs, b);
                    Ok(self.fold.extract(fs2))
                }
                // No success at all: split_some must fail, unlike
                // split_many's unconditional tolerance.
                Err(e) => Err(e),
            },
            SplitSomeState::After(ps, _cnt, fs) => match self.parser.extract(ps) {
                Ok(b) => {
                    let fs2 = self.fold.step(fs, b);
                    Ok(self.fold.extract(fs2))
                }
                Err(_) => Ok(self.fold.extract(fs)),
            },
        }
    }
}

// ---------------------------------------------------------------------
// to_vec_fold / many / some
//
// The corpus's ever-present default accumulator, grounded on winnow's
// `multi::repeat` defaulting to `Vec` output.

/// The canonical [`Fold<B, Vec<B>>`][Fold]: strict accumulation into a
/// growable vector; a lazy streaming variant is deliberately not offered.
pub struct ToVecFold;

/// Build the default `Vec`-accumulating fold used by [`many`]/[`some`].
pub fn to_vec_fold<B>() -> ToVecFold {
    ToVecFold
}

impl<B> Fold<B, Vec<B>> for ToVecFold {
    type State = Vec<B>;

    fn initial(&mut self) -> Self::State {
        Vec::new()
    }

    fn step(&mut self, mut state: Self::State, item: B) -> Self::State {
        state.push(item);
        state
    }

    fn extract(&mut self, state: Self::State) -> Vec<B> {
        state
    }
}

/// `many(p)` = `split_many(to_vec_fold(), p)` — zero or more, collected
/// into a `Vec`. The corpus's `many0`/`repeat(0.., p)` naming.
pub fn many<A, B, P>(parser: P) -> SplitMany<P, ToVecFold>
where
    P: Parser<A, B>,
{
    split_many(to_vec_fold(), parser)
}

/// `some(p)` = `split_some(to_vec_fold(), p)` — one or more, collected
/// into a `Vec`. The corpus's `many1`/`repeat(1.., p)` naming.
pub fn some<A, B, P>(parser: P) -> SplitSome<P, ToVecFold>
where
    P: Parser<A, B>,
{
    split_some(to_vec_fold(), parser)
}

// ---------------------------------------------------------------------
// many_m_n

/// State of [`many_m_n`]: the running parser/fold pair plus how many
/// successes have been folded in so far.
pub struct ManyMNState<PS, FS> {
    parser: PS,
    cnt: usize,
    fold: FS,
    successes: usize,
}

/// `many_m_n(m, n, fold, p)`: bounded repetition, grounded on winnow's
/// `repeat(m..=n, f)`. Stops folding once `n` successes have accumulated;
/// fails if fewer than `m` have been folded by the time the repetition
/// ends (in-band `Error` or input exhaustion). A natural generalization of
/// [`split_many`]/[`split_some`] (`m=0, n=usize::MAX` and `m=1,
/// n=usize::MAX` respectively).
pub struct ManyMN<P, Fld> {
    parser: P,
    fold: Fld,
    m: usize,
    n: usize,
}

/// Apply `p` between `m` and `n` times (inclusive), accumulating through
/// `fold`.
pub fn many_m_n<A, B, C, P, Fld>(m: usize, n: usize, fold: Fld, parser: P) -> ManyMN<P, Fld>
where
    P: Parser<A, B>,
    Fld: Fold<B, C>,
{
    assert!(m <= n, "many_m_n: m ({m}) must not exceed n ({n})");
    ManyMN {
        parser,
        fold,
        m,
        n,
    }
}

impl<A, B, C, P, Fld> Parser<A, C> for ManyMN<P, Fld>
where
    P: Parser<A, B>,
    Fld: Fold<B, C>,
{
    type State = ManyMNState<P::State, Fld::State>;

    fn initial(&mut self) -> Self::State {
        ManyMNState {
            parser: self.parser.initial(),
            cnt: 0,
            fold: self.fold.initial(),
            successes: 0,
        }
    }

    fn step(&mut self, state: Self::State, token: &A) -> Step<Self::State, C> {
        let ManyMNState {
            parser,
            cnt,
            fold,
            successes,
        } = state;
        match self.parser.step(parser, token) {
            Step::Yield(_, ps2) => Step::Skip(
                0,
                ManyMNState {
                    parser: ps2,
                    cnt: cnt + 1,
                    fold,
                    successes,
                },
            ),
            Step::YieldB(n, ps2) => Step::Skip(
                n,
                ManyMNState {
                    parser: ps2,
                    cnt: cnt + 1 - n,
                    fold,
                    successes,
                },
            ),
            Step::Skip(n, ps2) => Step::Skip(
                n,
                ManyMNState {
                    parser: ps2,
                    cnt: cnt + 1 - n,
                    fold,
                    successes,
                },
            ),
            Step::Stop(n, b) => {
                let fold2 = self.fold.step(fold, b);
                let successes2 = successes + 1;
                if successes2 >= self.n {
                    Step::Stop(n, self.fold.extract(fold2))
                } else {
                    let fresh = self.parser.initial();
                    Step::YieldB(
                        n,
                        ManyMNState {
                            parser: fresh,
                            cnt: 0,
                            fold: fold2,
                            successes: successes2,
                        },
                    )
                }
            }
            Step::Error(e) => {
                if successes >= self.m {
                    Step::Stop(cnt + 1, self.fold.extract(fold))
                } else {
                    Step::Error(e)
                }
            }
        }
    }

    fn extract(&mut self, state: Self::State) -> Result<C, ParseError> {
        let ManyMNState {
            parser,
            fold,
            successes,
            ..
        } = state;
        match self.parser.extract(parser) {
            Ok(b) => {
                let fold2 = self.fold.step(fold, b);
                if successes + 1 >= self.m {
                    Ok(self.fold.extract(fold2))
                } else {
                    Err(ParseError::new("many_m_n: too few repetitions"))
                }
            }
            Err(e) => {
                if successes >= self.m {
                    Ok(self.fold.extract(fold))
                } else {
                    Err(e)
                }
            }
        }
    }
}
