//! Primitive combinators over [`Parser`][crate::parser::Parser]:
//! `map`/`yield_`/`die` and their monadic siblings, `alt`,
//! `concat_map`, `split_with`/`split_`, and `split_many`/`split_some`.
//!
//! Each combinator is a small generic struct implementing `Parser` over a
//! sum-typed `State` built from its children's `State`s — never a boxed
//! `dyn` erasure; tagged variants, not inheritance hierarchies. `core`
//! carries the single-parser and binary constructs
//! (`yield_`, `die`, `map`, `alt`, `concat_map`); `sequence` carries the
//! two-parser `Left -> Right` machines (`split_with`, `split_`); `multi`
//! carries the fold-driven repetition combinators (`split_many`,
//! `split_some`).

mod core;
mod multi;
mod sequence;

pub use self::core::{
    alt, concat_map, die, die_m, map, value, void, yield_, yield_m, Alt, AltState, ConcatMap,
    ConcatMapState, Die, DieM, Map, Yield, YieldM,
};
pub use self::multi::{
    many, many_m_n, some, split_many, split_some, to_vec_fold, ManyMNState, SplitMany,
    SplitManyState, SplitSome, SplitSomeState, ToVecFold,
};
pub use self::sequence::{
    delimited, pair, preceded, split_, split_with, terminated, Split, SplitDiscardState,
    SplitState, SplitWith,
};

/// Helper trait for applying [`alt`] across a tuple of parsers, the way
/// `winnow`'s own `branch::Alt` trait lets `alt((p1, p2, p3))` read as a
/// single call instead of nested binary `alt(p1, alt(p2, p3))`. This
/// tuple sugar desugars to nested binary `alt` calls left-to-right at
/// every arity, so the underlying binary primitive never changes shape —
/// `alt_tuple` below only ever constructs values out of [`alt`].
pub trait AltTuple<A, B> {
    /// The nested binary `Alt` chain this tuple desugars to.
    type Parser: crate::parser::Parser<A, B>;

    /// Build the nested binary `alt` chain for this tuple, tried
    /// left-to-right exactly as a hand-written `alt(p1, alt(p2, p3))`
    /// would be.
    fn into_alt_chain(self) -> Self::Parser;
}

impl<A, B, P1, P2> AltTuple<A, B> for (P1, P2)
where
    P1: crate::parser::Parser<A, B>,
    P2: crate::parser::Parser<A, B>,
{
    type Parser = Alt<P1, P2>;

    fn into_alt_chain(self) -> Self::Parser {
        alt(self.0, self.1)
    }
}

impl<A, B, P1, P2, P3> AltTuple<A, B> for (P1, P2, P3)
where
    P1: crate::parser::Parser<A, B>,
    P2: crate::parser::Parser<A, B>,
    P3: crate::parser::Parser<A, B>,
{
    type Parser = Alt<P1, Alt<P2, P3>>;

    fn into_alt_chain(self) -> Self::Parser {
        alt(self.0, alt(self.1, self.2))
    }
}

impl<A, B, P1, P2, P3, P4> AltTuple<A, B> for (P1, P2, P3, P4)
where
    P1: crate::parser::Parser<A, B>,
    P2: crate::parser::Parser<A, B>,
    P3: crate::parser::Parser<A, B>,
    P4: crate::parser::Parser<A, B>,
{
    type Parser = Alt<P1, Alt<P2, Alt<P3, P4>>>;

    fn into_alt_chain(self) -> Self::Parser {
        alt(self.0, alt(self.1, alt(self.2, self.3)))
    }
}

impl<A, B, P1, P2, P3, P4, P5> AltTuple<A, B> for (P1, P2, P3, P4, P5)
where
    P1: crate::parser::Parser<A, B>,
    P2: crate::parser::Parser<A, B>,
    P3: crate::parser::Parser<A, B>,
    P4: crate::parser::Parser<A, B>,
    P5: crate::parser::Parser<A, B>,
{
    type Parser = Alt<P1, Alt<P2, Alt<P3, Alt<P4, P5>>>>;

    fn into_alt_chain(self) -> Self::Parser {
        alt(self.0, alt(self.1, alt(self.2, alt(self.3, self.4))))
    }
}

/// Try each parser in `tuple` left-to-right, returning the first success —
/// `alt_tuple((p1, p2, p3))` instead of nested `alt(p1, alt(p2, p3))`.
/// Implemented for tuples of 2 to 5 parsers.
pub fn alt_tuple<A, B, T: AltTuple<A, B>>(tuple: T) -> T::Parser {
    tuple.into_alt_chain()
}
