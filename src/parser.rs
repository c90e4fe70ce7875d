//! The `Parser` triple.

use crate::core::Step;
use crate::error::ParseError;

/// A parser over tokens of type `A` producing a result of type `B`.
///
/// A parser is conceptually an existentially-quantified triple
/// `(initial, step, extract)` sharing a hidden state type. This crate
/// realizes that existential the way `winnow` realizes its own `Parser`
/// trait: as a trait with an associated type, implemented by concrete,
/// named structs (see [`combinator`][crate::combinator]) rather than by
/// type-erasing every parser into a trait object. Combinators compose
/// children by wrapping their `State` types in a local sum type (`Left |
/// Right`, `AltL | AltR`, ...), not by hiding them behind `dyn`.
///
/// `step`/`extract` take `&mut self` so a parser built from a closure can
/// close over mutable captured state — the closest Rust analogue to
/// allowing a parser's own effects up to monadic generality, since this
/// crate threads no explicit monad.
pub trait Parser<A, B> {
    /// This parser's own state type.
    type State;

    /// Produce fresh state. Called once per parse.
    fn initial(&mut self) -> Self::State;

    /// Consume one token, returning the next driver command. Must not
    /// panic; failure is reported through [`Step::Error`].
    fn step(&mut self, state: Self::State, token: &A) -> Step<Self::State, B>;

    /// Finalize on input exhaustion. May fail with a [`ParseError`] only if
    /// this parser has never yielded.
    fn extract(&mut self, state: Self::State) -> Result<B, ParseError>;
}
