//! # Producer: the resumable-generator companion
//!
//! A [`Producer`] is a generator whose state can be paused, inspected, and
//! resumed: unlike a plain unfold, its [`Producer::extract`] can surrender
//! the seed `A` back out of the state, so a paused iteration can be handed
//! to another caller instead of simply being driven to completion.
//!
//! This module has no [`crate::parser::Parser`] in it — a producer never
//! fails and is never fed a token stream by the [`crate::driver`]; it is
//! driven purely by repeatedly calling its own `step`.

use crate::lib::std::vec::Vec;

/// The triple `(inject, step, extract)` over an existential state `S`,
/// producing outputs `B` from a seed `A`.
pub trait Producer<A, B> {
    /// The producer's internal state, opaque to callers.
    type State;

    /// Build fresh state from a seed.
    fn inject(&mut self, seed: A) -> Self::State;

    /// Advance one step.
    fn step(&mut self, state: Self::State) -> ProducerStep<Self::State, A, B>;

    /// Finalize, surrendering the residual seed if one remains. Unlike
    /// [`crate::parser::Parser::extract`], this never fails — a producer
    /// has no `ParseError` path.
    fn extract(&mut self, state: Self::State) -> Option<A>;
}

/// The three outcomes of a [`Producer::step`].
pub enum ProducerStep<S, A, B> {
    /// An output is ready; `s` is the state to resume from.
    Yield(B, S),
    /// No output yet; `s` is the state to resume from.
    Skip(S),
    /// Terminal: no more output. Carries the residual seed, if the
    /// producer has one left to surrender.
    Stop(Option<A>),
}

// ---------------------------------------------------------------------
// simplify

/// `simplify(p)`: discard `extract`, driving a producer as
/// a plain Rust [`Iterator`] — `Stop(_)` maps to `None`.
pub struct Simplify<P, S> {
    producer: P,
    state: Option<S>,
}

/// Inject `seed` into `producer` and view the result as a plain
/// [`Iterator`].
pub fn simplify<A, B, P>(mut producer: P, seed: A) -> Simplify<P, P::State>
where
    P: Producer<A, B>,
{
    let state = producer.inject(seed);
    Simplify {
        producer,
        state: Some(state),
    }
}

impl<A, B, P> Iterator for Simplify<P, P::State>
where
    P: Producer<A, B>,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        loop {
            let state = self.state.take()?;
            match self.producer.step(state) {
                ProducerStep::Yield(b, s2) => {
                    self.state = Some(s2);
                    return Some(b);
                }
                ProducerStep::Skip(s2) => self.state = Some(s2),
                ProducerStep::Stop(_) => return None,
            }
        }
    }
}

// ---------------------------------------------------------------------
// from_list

/// `fromList`: the seed is the whole list; each step pops
/// its head.
pub struct FromList<B> {
    _marker: core::marker::PhantomData<fn() -> B>,
}

/// Build a producer whose seed is a `Vec` and which yields its elements
/// one at a time, front to back.
pub fn from_list<B>() -> FromList<B> {
    FromList {
        _marker: core::marker::PhantomData,
    }
}

impl<B> Producer<Vec<B>, B> for FromList<B> {
    type State = crate::lib::std::collections::VecDeque<B>;

    fn inject(&mut self, seed: Vec<B>) -> Self::State {
        seed.into_iter().collect()
    }

    fn step(&mut self, mut state: Self::State) -> ProducerStep<Self::State, Vec<B>, B> {
        match state.pop_front() {
            Some(b) => ProducerStep::Yield(b, state),
            None => ProducerStep::Stop(None),
        }
    }

    fn extract(&mut self, state: Self::State) -> Option<Vec<B>> {
        if state.is_empty() {
            None
        } else {
            Some(state.into_iter().collect())
        }
    }
}

// ---------------------------------------------------------------------
// from_iter

/// `fromStreamD`, renamed `from_iter`: embeds an external
/// [`Iterator`] as the seed, the Rust-native analogue of "an external
/// stream" — same role, idiomatic name.
///
/// An `Iterator` cannot report "is there more" without consuming an item,
/// so unlike [`FromList`], `extract` always surrenders the iterator back
/// (`Some(state)`) rather than inspecting it first; a resumed, truly
/// exhausted iterator simply reports `Stop(None)` on its first step.
pub struct FromIter<I> {
    _marker: core::marker::PhantomData<fn() -> I>,
}

/// Build a producer whose seed is an [`Iterator`] and which yields its
/// items in order.
pub fn from_iter<I: Iterator>() -> FromIter<I> {
    FromIter {
        _marker: core::marker::PhantomData,
    }
}

impl<I: Iterator> Producer<I, I::Item> for FromIter<I> {
    type State = I;

    fn inject(&mut self, seed: I) -> Self::State {
        seed
    }

    fn step(&mut self, mut state: Self::State) -> ProducerStep<Self::State, I, I::Item> {
        match state.next() {
            Some(item) => ProducerStep::Yield(item, state),
            None => ProducerStep::Stop(None),
        }
    }

    fn extract(&mut self, state: Self::State) -> Option<I> {
        Some(state)
    }
}

// ---------------------------------------------------------------------
// unfoldr_m

/// `unfoldrM(f)`: the standard generator built from a step
/// function `&A -> Option<(B, A)>`. No separate non-monadic `unfoldr` is
/// offered — the crate has no ambient monad, so `f` is an ordinary
/// `FnMut` closure threading whatever side effects it needs, the same way
/// `yield_m`/`die_m` stand in for monadic parser constructors.
///
/// `f` borrows the seed rather than consuming it, so the seed is still
/// available to surrender as the residual on `Stop`.
pub struct UnfoldrM<F> {
    f: F,
}

/// Build a generator from a step function `&A -> Option<(B, A)>`.
pub fn unfoldr_m<A, B, F>(f: F) -> UnfoldrM<F>
where
    F: FnMut(&A) -> Option<(B, A)>,
{
    UnfoldrM { f }
}

impl<A, B, F> Producer<A, B> for UnfoldrM<F>
where
    F: FnMut(&A) -> Option<(B, A)>,
{
    type State = A;

    fn inject(&mut self, seed: A) -> Self::State {
        seed
    }

    fn step(&mut self, state: Self::State) -> ProducerStep<Self::State, A, B> {
        match (self.f)(&state) {
            Some((b, a2)) => ProducerStep::Yield(b, a2),
            None => ProducerStep::Stop(Some(state)),
        }
    }

    fn extract(&mut self, state: Self::State) -> Option<A> {
        Some(state)
    }
}

// ---------------------------------------------------------------------
// translate / lmap / map

/// `translate(f, g, p)`: bijectively change a producer's
/// seed type, `f` forward (new seed to old) and `g` backward (old seed to
/// new, used to translate the residual a [`Producer::extract`] surrenders).
pub struct Translate<F, G, P> {
    f: F,
    g: G,
    inner: P,
}

/// Change `inner`'s seed type bijectively via `f`/`g`.
pub fn translate<A1, A2, B, F, G, P>(f: F, g: G, inner: P) -> Translate<F, G, P>
where
    P: Producer<A1, B>,
    F: FnMut(A2) -> A1,
    G: FnMut(A1) -> A2,
{
    Translate { f, g, inner }
}

impl<A1, A2, B, F, G, P> Producer<A2, B> for Translate<F, G, P>
where
    P: Producer<A1, B>,
    F: FnMut(A2) -> A1,
    G: FnMut(A1) -> A2,
{
    type State = P::State;

    fn inject(&mut self, seed: A2) -> Self::State {
        self.inner.inject((self.f)(seed))
    }

    fn step(&mut self, state: Self::State) -> ProducerStep<Self::State, A2, B> {
        match self.inner.step(state) {
            ProducerStep::Yield(b, s2) => ProducerStep::Yield(b, s2),
            ProducerStep::Skip(s2) => ProducerStep::Skip(s2),
            ProducerStep::Stop(a1) => ProducerStep::Stop(a1.map(&mut self.g)),
        }
    }

    fn extract(&mut self, state: Self::State) -> Option<A2> {
        self.inner.extract(state).map(&mut self.g)
    }
}

/// `lmap(f, p)`: pre-transform a producer's seed,
/// one-directionally. Since there is no inverse of `f`, the resulting
/// producer's `extract` cannot translate a surrendered seed back to `A2`
/// and always returns `None` — use [`translate`] when a round-trippable
/// seed mapping is needed.
pub struct LMap<F, P> {
    f: F,
    inner: P,
}

/// Pre-transform `inner`'s seed via `f`, one-directionally.
pub fn lmap<A1, A2, B, F, P>(f: F, inner: P) -> LMap<F, P>
where
    P: Producer<A1, B>,
    F: FnMut(A2) -> A1,
{
    LMap { f, inner }
}

impl<A1, A2, B, F, P> Producer<A2, B> for LMap<F, P>
where
    P: Producer<A1, B>,
    F: FnMut(A2) -> A1,
{
    type State = P::State;

    fn inject(&mut self, seed: A2) -> Self::State {
        self.inner.inject((self.f)(seed))
    }

    fn step(&mut self, state: Self::State) -> ProducerStep<Self::State, A2, B> {
        match self.inner.step(state) {
            ProducerStep::Yield(b, s2) => ProducerStep::Yield(b, s2),
            ProducerStep::Skip(s2) => ProducerStep::Skip(s2),
            ProducerStep::Stop(_a1) => ProducerStep::Stop(None),
        }
    }

    fn extract(&mut self, _state: Self::State) -> Option<A2> {
        None
    }
}

/// `map(f, p)`: post-transform a producer's output.
pub struct Map<F, P> {
    f: F,
    inner: P,
}

/// Post-transform `inner`'s output via `f`.
pub fn map<A, B1, B2, F, P>(f: F, inner: P) -> Map<F, P>
where
    P: Producer<A, B1>,
    F: FnMut(B1) -> B2,
{
    Map { f, inner }
}

impl<A, B1, B2, F, P> Producer<A, B2> for Map<F, P>
where
    P: Producer<A, B1>,
    F: FnMut(B1) -> B2,
{
    type State = P::State;

    fn inject(&mut self, seed: A) -> Self::State {
        self.inner.inject(seed)
    }

    fn step(&mut self, state: Self::State) -> ProducerStep<Self::State, A, B2> {
        match self.inner.step(state) {
            ProducerStep::Yield(b, s2) => ProducerStep::Yield((self.f)(b), s2),
            ProducerStep::Skip(s2) => ProducerStep::Skip(s2),
            ProducerStep::Stop(a) => ProducerStep::Stop(a),
        }
    }

    fn extract(&mut self, state: Self::State) -> Option<A> {
        self.inner.extract(state)
    }
}

// ---------------------------------------------------------------------
// cross

/// State of [`Cross`]: `Outer(ps)` while driving `p`, `Inner(b, qs)` once
/// `p` has yielded a `b` and handed its residual seed off to `q`.
pub enum CrossState<PS, B, QS> {
    /// Driving the outer producer.
    Outer(PS),
    /// Draining the inner producer built from the outer's last `b` and
    /// its surrendered seed; `b` is kept around to pair with every inner
    /// output.
    Inner(B, QS),
}

/// `cross(p, q)`: cartesian product. `p` yields `b`, then
/// `p`'s own `extract` surrenders a fresh seed used to `inject` `q`; the
/// inner loop pairs that same `b` with every `c` `q` yields.
///
/// Once the
/// inner producer stops, `cross` stops too rather than resuming the
/// outer for a second round — by the time inner exhaustion is reached,
/// the outer's own continuation has already been traded away for `q`'s
/// seed, so there is nothing left to resume. Pairing the same `b` with
/// multiple `c`s requires `B: Clone`.
pub struct Cross<P, Q> {
    p: P,
    q: Q,
}

/// Build the cartesian-product producer of `p` and `q`.
pub fn cross<A, B, C, P, Q>(p: P, q: Q) -> Cross<P, Q>
where
    P: Producer<A, B>,
    Q: Producer<A, C>,
{
    Cross { p, q }
}

impl<A, B, C, P, Q> Producer<A, (B, C)> for Cross<P, Q>
where
    P: Producer<A, B>,
    Q: Producer<A, C>,
    B: Clone,
{
    type State = CrossState<P::State, B, Q::State>;

    fn inject(&mut self, seed: A) -> Self::State {
        CrossState::Outer(self.p.inject(seed))
    }

    fn step(&mut self, state: Self::State) -> ProducerStep<Self::State, A, (B, C)> {
        match state {
            CrossState::Outer(ps) => match self.p.step(ps) {
                ProducerStep::Yield(b, ps2) => match self.p.extract(ps2) {
                    Some(a) => {
                        let qs = self.q.inject(a);
                        ProducerStep::Skip(CrossState::Inner(b, qs))
                    }
                    // Resolved open question: the outer's
                    // extract returning None after a Yield stops the
                    // composite, rather than raising an error.
                    None => ProducerStep::Stop(None),
                },
                ProducerStep::Skip(ps2) => ProducerStep::Skip(CrossState::Outer(ps2)),
                ProducerStep::Stop(a) => ProducerStep::Stop(a),
            },
            CrossState::Inner(b, qs) => match self.q.step(qs) {
                ProducerStep::Yield(c, qs2) => {
                    let b_next = b.clone();
                    ProducerStep::Yield((b, c), CrossState::Inner(b_next, qs2))
                }
                ProducerStep::Skip(qs2) => ProducerStep::Skip(CrossState::Inner(b, qs2)),
                ProducerStep::Stop(_residual) => ProducerStep::Stop(None),
            },
        }
    }

    fn extract(&mut self, state: Self::State) -> Option<A> {
        match state {
            CrossState::Outer(ps) => self.p.extract(ps),
            CrossState::Inner(_b, qs) => self.q.extract(qs),
        }
    }
}

// ---------------------------------------------------------------------
// concat

/// State of [`Concat`]: `Outer(ps)` while driving `p`, `Inner(ps, qs)`
/// while draining the inner producer built from `p`'s last yielded seed —
/// `ps` is kept around, untouched, so control can return to it once the
/// inner producer stops.
pub enum ConcatState<PS, QS> {
    /// Driving the outer producer.
    Outer(PS),
    /// Draining the inner producer; `ps` is the outer's saved
    /// continuation, resumed once the inner producer stops.
    Inner(PS, QS),
}

/// `concat(p, q)`: nested loop. Each `b` `p` yields seeds a
/// fresh `q`, whose output is flattened into the composite's output;
/// when the inner producer stops, its residual seed is discarded — the
/// common case for a finite inner producer — and control returns to `p`'s
/// saved state.
pub struct Concat<P, Q> {
    p: P,
    q: Q,
}

/// Build the flattening producer of `p` and `q`.
pub fn concat<A, B, C, P, Q>(p: P, q: Q) -> Concat<P, Q>
where
    P: Producer<A, B>,
    Q: Producer<B, C>,
{
    Concat { p, q }
}

impl<A, B, C, P, Q> Producer<A, C> for Concat<P, Q>
where
    P: Producer<A, B>,
    Q: Producer<B, C>,
{
    type State = ConcatState<P::State, Q::State>;

    fn inject(&mut self, seed: A) -> Self::State {
        ConcatState::Outer(self.p.inject(seed))
    }

    fn step(&mut self, state: Self::State) -> ProducerStep<Self::State, A, C> {
        match state {
            ConcatState::Outer(ps) => match self.p.step(ps) {
                ProducerStep::Yield(b, ps2) => {
                    let qs = self.q.inject(b);
                    ProducerStep::Skip(ConcatState::Inner(ps2, qs))
                }
                ProducerStep::Skip(ps2) => ProducerStep::Skip(ConcatState::Outer(ps2)),
                ProducerStep::Stop(a) => ProducerStep::Stop(a),
            },
            ConcatState::Inner(ps, qs) => match self.q.step(qs) {
                ProducerStep::Yield(c, qs2) => ProducerStep::Yield(c, ConcatState::Inner(ps, qs2)),
                ProducerStep::Skip(qs2) => ProducerStep::Skip(ConcatState::Inner(ps, qs2)),
                ProducerStep::Stop(_residual_b) => ProducerStep::Skip(ConcatState::Outer(ps)),
            },
        }
    }

    fn extract(&mut self, state: Self::State) -> Option<A> {
        match state {
            ConcatState::Outer(ps) => self.p.extract(ps),
            ConcatState::Inner(ps, _qs) => self.p.extract(ps),
        }
    }
}

// ---------------------------------------------------------------------
// drain / for_each
//
// `simplify` alone only gets a caller to a plain unfold; these two eager
// consumers realize it into a collection or a side effect, grounded on
// the producer/generator lineage's common `toList`/`drain` convenience.

/// Inject `seed` into `producer` and collect every yielded value.
pub fn drain<A, B, P>(producer: P, seed: A) -> Vec<B>
where
    P: Producer<A, B>,
{
    simplify(producer, seed).collect()
}

/// Inject `seed` into `producer` and run `f` over every yielded value.
pub fn for_each<A, B, P, F>(producer: P, seed: A, mut f: F)
where
    P: Producer<A, B>,
    F: FnMut(B),
{
    for b in simplify(producer, seed) {
        f(b);
    }
}
