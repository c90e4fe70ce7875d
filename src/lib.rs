//! # stepparse, a streaming backtracking parser driver
//!
//! `stepparse` is the core of a direct-style parser-combinator library. A
//! parser is a triple of `initial`/`step`/`extract` functions; `step` is a
//! fold over the input stream that emits one of five *driver commands*
//! (`Step::{Yield, YieldB, Skip, Stop, Error}`) telling the [`driver`]
//! whether to keep consuming, commit, rewind, finish, or fail.
//!
//! This crate does not include concrete leaf parsers for any particular text
//! or byte format (see [`token`] for a handful of illustrative ones), a
//! stream/source library, or fold primitives beyond what [`multi`] needs.
//! Those are meant to live in separate crates built on top of this one, the
//! same way `winnow`'s byte/string parsers sit on top of its `Stream`
//! abstraction.
//!
//! ## Example
//!
//! ```rust
//! use stepparse::combinator::{split_with, alt};
//! use stepparse::driver::parse;
//! use stepparse::token::satisfy;
//!
//! let pair = split_with(
//!     |a, b| (a, b),
//!     satisfy(|t: &i32| *t == 1),
//!     satisfy(|t: &i32| *t == 2),
//! );
//! let (value, leftover) = parse(pair, vec![1, 2, 3].into_iter()).unwrap();
//! assert_eq!(value, (1, 2));
//! assert_eq!(leftover, vec![3]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
// BEGIN - Embark standard lints v6 for Rust 1.55+
// do not change or add/remove here, but one can add exceptions after this section
#![warn(clippy::all)]
#![warn(clippy::checked_conversions)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::empty_enum)]
#![warn(clippy::enum_glob_use)]
#![warn(clippy::exit)]
#![warn(clippy::expl_impl_clone_on_copy)]
#![warn(clippy::explicit_deref_methods)]
#![warn(clippy::explicit_into_iter_loop)]
#![warn(clippy::fallible_impl_from)]
#![warn(clippy::filter_map_next)]
#![warn(clippy::flat_map_option)]
#![warn(clippy::float_cmp_const)]
#![warn(clippy::from_iter_instead_of_collect)]
#![warn(clippy::implicit_clone)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::invalid_upcast_comparisons)]
#![warn(clippy::large_digit_groups)]
#![warn(clippy::linkedlist)]
#![warn(clippy::macro_use_imports)]
#![warn(clippy::manual_ok_or)]
#![warn(clippy::map_err_ignore)]
#![warn(clippy::mem_forget)]
#![warn(clippy::needless_continue)]
#![warn(clippy::needless_for_each)]
#![warn(clippy::path_buf_push_overwrite)]
#![warn(clippy::rc_mutex)]
#![warn(clippy::same_functions_in_if_condition)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::string_add_assign)]
#![warn(clippy::string_add)]
#![warn(clippy::todo)]
#![warn(clippy::trait_duplication_in_bounds)]
#![warn(clippy::unimplemented)]
#![warn(clippy::zero_sized_map_values)]
#![warn(future_incompatible)]
#![warn(nonstandard_style)]
#![warn(rust_2018_idioms)]
// END - Embark standard lints v6 for Rust 1.55+
#![allow(clippy::branches_sharing_code)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::if_same_then_else)]
#![allow(clippy::let_and_return)]

#[cfg(feature = "alloc")]
#[macro_use]
extern crate alloc;

/// Facade allowing `std`/`core`+`alloc` to be interchangeable, the same
/// trick `serde` (and `winnow`) use to keep one source tree building both
/// ways.
#[cfg_attr(nightly, allow(rustdoc::missing_doc_code_examples))]
pub mod lib {
    #[cfg(not(feature = "std"))]
    #[doc(hidden)]
    pub mod std {
        #[cfg(feature = "alloc")]
        #[doc(hidden)]
        pub use alloc::{boxed, collections, string, vec};

        #[doc(hidden)]
        pub use core::{cmp, convert, fmt, mem, ops};
    }

    #[cfg(feature = "std")]
    #[doc(hidden)]
    pub mod std {
        #[doc(hidden)]
        pub use std::{boxed, cmp, collections, convert, fmt, mem, ops, string, vec};
    }
}

pub mod combinator;
pub mod core;
pub mod driver;
pub mod error;
pub mod producer;
pub mod token;
pub mod trace;

pub use crate::core::Step;
pub use crate::error::ParseError;
pub use crate::parser::Parser;

mod parser;

/// Core concepts available for glob import.
///
/// ```rust
/// use stepparse::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::Step;
    pub use crate::driver::parse;
    pub use crate::error::ParseError;
    pub use crate::parser::Parser;
}
