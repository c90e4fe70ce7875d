//! # Error management
//!
//! The driver protocol recognizes exactly one failure type: a
//! [`ParseError`] carrying a human-readable message. There is no
//! structured location, no error-kind enum, and no cut/backtrack
//! distinction — those are `winnow`-lineage concerns this core
//! deliberately does not carry (see `DESIGN.md`).
//!
//! Two distinct moments raise a [`ParseError`]:
//! - in-band, via [`Step::Error`][crate::core::Step::Error], interpreted by
//!   the driver or by an enclosing [`alt`][crate::combinator::alt]/
//!   [`split_many`][crate::combinator::split_many]/
//!   [`split_some`][crate::combinator::split_some];
//! - from [`Parser::extract`][crate::parser::Parser::extract], when the
//!   input is exhausted before a commit.

use crate::lib::std::fmt;
use crate::lib::std::string::String;

/// The only failure type the driver protocol raises.
///
/// Wire form is a single field: a `message: String`. No location, no
/// error-kind, no chained cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    message: String,
}

impl ParseError {
    /// Build a `ParseError` from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable message carried by this error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

impl From<&str> for ParseError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ParseError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_round_trips() {
        let e = ParseError::new("unexpected token");
        assert_eq!(e.message(), "unexpected token");
        assert_eq!(e.to_string(), "unexpected token");
    }

    #[test]
    fn from_str_and_string() {
        let a: ParseError = "boom".into();
        let b: ParseError = String::from("boom").into();
        assert_eq!(a, b);
    }
}
