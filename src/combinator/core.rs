//! Primitive constructors, `map`, `alt`, and `concat_map`.

use crate::core::Step;
use crate::error::ParseError;
use crate::lib::std::fmt;
use crate::parser::Parser;

// ---------------------------------------------------------------------
// yield_ / yield_m

/// Always succeeds with `value` without consuming its first token — the
/// "current token unused" form of [`Step::Stop`]. On empty input,
/// `extract` returns `value` too.
pub struct Yield<B> {
    value: B,
}

/// `yield(b)`. Named with a trailing underscore because `yield` is
/// reserved in Rust.
pub fn yield_<B: Clone>(value: B) -> Yield<B> {
    Yield { value }
}

impl<A, B: Clone> Parser<A, B> for Yield<B> {
    type State = ();

    fn initial(&mut self) {}

    fn step(&mut self, _state: (), _token: &A) -> Step<(), B> {
        Step::Stop(1, self.value.clone())
    }

    fn extract(&mut self, _state: ()) -> Result<B, ParseError> {
        Ok(self.value.clone())
    }
}

/// Like [`yield_`], but the value is produced by running `f` — the
/// monadic variant (`yieldM`).
pub struct YieldM<F> {
    f: F,
}

/// `yieldM(mb)`.
pub fn yield_m<F>(f: F) -> YieldM<F> {
    YieldM { f }
}

impl<A, B, F: FnMut() -> B> Parser<A, B> for YieldM<F> {
    type State = ();

    fn initial(&mut self) {}

    fn step(&mut self, _state: (), _token: &A) -> Step<(), B> {
        Step::Stop(1, (self.f)())
    }

    fn extract(&mut self, _state: ()) -> Result<B, ParseError> {
        Ok((self.f)())
    }
}

// ---------------------------------------------------------------------
// die / die_m

/// Always fails, in-band and from `extract` alike.
pub struct Die<B> {
    message: ParseError,
    _marker: core::marker::PhantomData<fn() -> B>,
}

/// `die(msg)`.
pub fn die<A, B>(message: impl Into<ParseError>) -> Die<B> {
    Die {
        message: message.into(),
        _marker: core::marker::PhantomData,
    }
}

impl<A, B> Parser<A, B> for Die<B> {
    type State = ();

    fn initial(&mut self) {}

    fn step(&mut self, _state: (), _token: &A) -> Step<(), B> {
        Step::Error(self.message.clone())
    }

    fn extract(&mut self, _state: ()) -> Result<B, ParseError> {
        Err(self.message.clone())
    }
}

/// Like [`die`], but the message is produced by running `f` (`dieM`).
pub struct DieM<F, B> {
    f: F,
    _marker: core::marker::PhantomData<fn() -> B>,
}

/// `dieM(m_msg)`.
pub fn die_m<F, B>(f: F) -> DieM<F, B>
where
    F: FnMut() -> ParseError,
{
    DieM {
        f,
        _marker: core::marker::PhantomData,
    }
}

impl<A, B, F: FnMut() -> ParseError> Parser<A, B> for DieM<F, B> {
    type State = ();

    fn initial(&mut self) {}

    fn step(&mut self, _state: (), _token: &A) -> Step<(), B> {
        Step::Error((self.f)())
    }

    fn extract(&mut self, _state: ()) -> Result<B, ParseError> {
        Err((self.f)())
    }
}

// ---------------------------------------------------------------------
// map / value / void

/// `map f p`. The `Step` tag and its `n` offsets pass
/// through unchanged; only a `Stop`'s carried result (or a successful
/// `extract`) is transformed.
pub struct Map<P, F> {
    parser: P,
    f: F,
}

/// Transform a parser's result with `f`, leaving its driver behavior
/// untouched.
pub fn map<A, B, B2, P, F>(parser: P, f: F) -> Map<P, F>
where
    P: Parser<A, B>,
    F: FnMut(B) -> B2,
{
    Map { parser, f }
}

impl<A, B, B2, P, F> Parser<A, B2> for Map<P, F>
where
    P: Parser<A, B>,
    F: FnMut(B) -> B2,
{
    type State = P::State;

    fn initial(&mut self) -> Self::State {
        self.parser.initial()
    }

    fn step(&mut self, state: Self::State, token: &A) -> Step<Self::State, B2> {
        let f = &mut self.f;
        self.parser.step(state, token).map_result(move |b| f(b))
    }

    fn extract(&mut self, state: Self::State) -> Result<B2, ParseError> {
        self.parser.extract(state).map(&mut self.f)
    }
}

/// Replace a parser's result with a constant, keeping its driver behavior.
/// Ambient convenience grounded on `winnow`'s `combinator::value`.
pub fn value<A, B, B2: Clone, P>(result: B2, parser: P) -> Map<P, impl FnMut(B) -> B2>
where
    P: Parser<A, B>,
{
    map(parser, move |_| result.clone())
}

/// Discard a parser's result. Ambient convenience grounded on `winnow`'s
/// `combinator::void`.
pub fn void<A, B, P>(parser: P) -> Map<P, fn(B)>
where
    P: Parser<A, B>,
{
    map(parser, drop)
}

// ---------------------------------------------------------------------
// alt

/// State of [`alt`]: `AltL(cnt, sl) | AltR(sr)`.
pub enum AltState<LS, RS> {
    /// Still trying the left parser; `cnt` counts tokens consumed since
    /// entering the combinator, net of rewinds, and bounds how many
    /// buffered tokens must be replayed into the right parser on failure.
    Left(usize, LS),
    /// Left failed; delegating every command verbatim to the right parser.
    Right(RS),
}

/// `alt(left, right)`: try `left`; on `Error`, rewind and
/// retry with `right` fed the same tokens from the start.
pub struct Alt<L, R> {
    left: L,
    right: R,
}

/// Try `left`; if it fails before yielding, rewind and try `right`.
pub fn alt<A, B, L, R>(left: L, right: R) -> Alt<L, R>
where
    L: Parser<A, B>,
    R: Parser<A, B>,
{
    Alt { left, right }
}

impl<A, B, L, R> Parser<A, B> for Alt<L, R>
where
    L: Parser<A, B>,
    R: Parser<A, B>,
{
    type State = AltState<L::State, R::State>;

    fn initial(&mut self) -> Self::State {
        AltState::Left(0, self.left.initial())
    }

    fn step(&mut self, state: Self::State, token: &A) -> Step<Self::State, B> {
        match state {
            AltState::Left(cnt, ls) => match self.left.step(ls, token) {
                Step::Yield(n, ls2) => Step::Yield(n, AltState::Left(0, ls2)),
                Step::YieldB(n, ls2) => Step::YieldB(n, AltState::Left(0, ls2)),
                Step::Skip(n, ls2) => {
                    debug_assert!(
                        n <= cnt + 1,
                        "alt: left rewound past what it had consumed"
                    );
                    Step::Skip(n, AltState::Left(cnt + 1 - n, ls2))
                }
                Step::Stop(n, b) => Step::Stop(n, b),
                Step::Error(_message) => {
                    let rs = self.right.initial();
                    Step::Skip(cnt + 1, AltState::Right(rs))
                }
            },
            AltState::Right(rs) => self.right.step(rs, token).map_state(AltState::Right),
        }
    }

    fn extract(&mut self, state: Self::State) -> Result<B, ParseError> {
        match state {
            AltState::Left(_cnt, ls) => self.left.extract(ls),
            AltState::Right(rs) => self.right.extract(rs),
        }
    }
}

// ---------------------------------------------------------------------
// concat_map

/// State of [`concat_map`]: `Left(sl) | Right(p', sr)`.
///
/// Unlike re-running `p'.initial` on every step of the right parser,
/// this holds the constructed right parser's state alongside the parser
/// itself, computing it once on the `Left -> Right` transition. This
/// caching is observably identical to the naive re-init, since `initial`
/// has no externally visible effect beyond producing the state
/// `step`/`extract` consume.
pub enum ConcatMapState<LS, R, RS> {
    /// Still running the left parser.
    Left(LS),
    /// Running the dynamically constructed right parser `k(b)`.
    Right(R, RS),
}

/// `concatMap(k, p)`: monadic bind. `p`'s result selects
/// the next parser to run via `k`.
pub struct ConcatMap<P, K> {
    parser: P,
    k: K,
}

/// Run `parser`, then run `k(result)` — monadic bind over parsers.
pub fn concat_map<A, B, B2, P, K, R>(parser: P, k: K) -> ConcatMap<P, K>
where
    P: Parser<A, B>,
    K: FnMut(B) -> R,
    R: Parser<A, B2>,
{
    ConcatMap { parser, k }
}

impl<A, B, B2, P, K, R> Parser<A, B2> for ConcatMap<P, K>
where
    P: Parser<A, B>,
    K: FnMut(B) -> R,
    R: Parser<A, B2>,
{
    type State = ConcatMapState<P::State, R, R::State>;

    fn initial(&mut self) -> Self::State {
        ConcatMapState::Left(self.parser.initial())
    }

    fn step(&mut self, state: Self::State, token: &A) -> Step<Self::State, B2> {
        match state {
            ConcatMapState::Left(ls) => match self.parser.step(ls, token) {
                Step::Yield(n, ls2) => Step::Yield(n, ConcatMapState::Left(ls2)),
                Step::YieldB(n, ls2) => Step::YieldB(n, ConcatMapState::Left(ls2)),
                Step::Skip(n, ls2) => Step::Skip(n, ConcatMapState::Left(ls2)),
                Step::Stop(n, b) => {
                    let mut right = (self.k)(b);
                    let rs = right.initial();
                    Step::Skip(n, ConcatMapState::Right(right, rs))
                }
                Step::Error(e) => Step::Error(e),
            },
            ConcatMapState::Right(mut right, rs) => {
                let step = right.step(rs, token);
                step.map_state(move |rs2| ConcatMapState::Right(right, rs2))
            }
        }
    }

    fn extract(&mut self, state: Self::State) -> Result<B2, ParseError> {
        match state {
            ConcatMapState::Left(ls) => {
                let b = self.parser.extract(ls)?;
                let mut right = (self.k)(b);
                let rs = right.initial();
                right.extract(rs)
            }
            ConcatMapState::Right(mut right, rs) => right.extract(rs),
        }
    }
}

impl<LS, RS> fmt::Debug for AltState<LS, RS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AltState::Left(cnt, _) => f.debug_tuple("Left").field(cnt).finish(),
            AltState::Right(_) => f.write_str("Right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::parse;
    use crate::token::satisfy;

    #[test]
    fn map_transforms_result_not_leftover() {
        let p = map(satisfy(|t: &i32| *t == 1), |n| n * 10);
        let (v, leftover) = parse(p, vec![1, 2].into_iter()).unwrap();
        assert_eq!(v, 10);
        assert_eq!(leftover, vec![2]);
    }

    #[test]
    fn value_ignores_inner_result() {
        let p = value("matched", satisfy(|t: &i32| *t == 1));
        let (v, _) = parse(p, vec![1].into_iter()).unwrap();
        assert_eq!(v, "matched");
    }

    #[test]
    fn alt_prefers_left_when_it_succeeds() {
        let p = alt(satisfy(|t: &i32| *t == 1), satisfy(|t: &i32| *t == 2));
        let (v, _) = parse(p, vec![1].into_iter()).unwrap();
        assert_eq!(v, 1);
    }

    #[test]
    fn alt_replays_into_right_on_left_failure() {
        let p = alt(satisfy(|t: &i32| *t == 9), satisfy(|t: &i32| *t == 1));
        let (v, leftover) = parse(p, vec![1].into_iter()).unwrap();
        assert_eq!(v, 1);
        assert_eq!(leftover, Vec::<i32>::new());
    }

    #[test]
    fn alt_die_left_is_identity() {
        // alt(die, p) == p
        let p = alt(die::<i32, i32>("left never matches"), yield_(7));
        let (v, _) = parse(p, vec![1].into_iter()).unwrap();
        assert_eq!(v, 7);
    }

    #[test]
    fn concat_map_threads_result_into_continuation() {
        let p = concat_map(satisfy(|t: &i32| *t == 1), |first| {
            map(satisfy(move |t: &i32| *t == first + 1), move |second| (first, second))
        });
        let (v, leftover) = parse(p, vec![1, 2, 3].into_iter()).unwrap();
        assert_eq!(v, (1, 2));
        assert_eq!(leftover, vec![3]);
    }

    #[test]
    fn concat_map_propagates_left_error() {
        let p = concat_map(die::<i32, i32>("nope"), |_: i32| yield_(0));
        let err = parse(p, vec![1].into_iter()).unwrap_err();
        assert_eq!(err.message(), "nope");
    }
}
