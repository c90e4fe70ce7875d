//! A worked example: read `\n`-separated, `,`-separated rows of decimal
//! numbers out of a token stream of `char`s, using nothing but the
//! primitives this crate's core exports.
//!
//! Mirrors the shape of winnow's own small, single-file `examples/*.rs`
//! demos: compose a few combinators, run them against sample input, assert
//! the result. No string/byte-format front end is implied by this file —
//! `char` is treated as an opaque token the same way any other `A` would
//! be; a real text-format front end would layer something richer over
//! this core.

use stepparse::combinator::{alt, map, many, preceded, split_with, void};
use stepparse::driver::parse;
use stepparse::token::{eof, satisfy, take_while1};

/// One comma-separated number: a run of ASCII digits, parsed as `u32`.
fn number() -> impl stepparse::Parser<char, u32> {
    map(take_while1(|c: &char| c.is_ascii_digit()), |digits| {
        digits
            .iter()
            .collect::<String>()
            .parse::<u32>()
            .expect("take_while1 only collects ASCII digits")
    })
}

fn comma() -> impl stepparse::Parser<char, ()> {
    void(satisfy(|c: &char| *c == ','))
}

/// One row: a leading number followed by zero or more `,`-prefixed
/// numbers, collected into a single `Vec<u32>`.
fn row() -> impl stepparse::Parser<char, Vec<u32>> {
    split_with(
        |first: u32, rest: Vec<u32>| {
            let mut values = vec![first];
            values.extend(rest);
            values
        },
        number(),
        many(preceded(comma(), number())),
    )
}

/// All rows in the input, each terminated by `\n` except possibly the
/// last.
fn csv_rows() -> impl stepparse::Parser<char, Vec<Vec<u32>>> {
    let row_end = alt(void(satisfy(|c: &char| *c == '\n')), void(eof()));
    many(split_with(|values, ()| values, row(), row_end))
}

fn main() {
    let input = "1,2,3\n4,5\n6,7,8,9";
    let (rows, leftover) = parse(csv_rows(), input.chars()).expect("well-formed CSV");
    assert_eq!(leftover, Vec::<char>::new());
    println!("{rows:?}");
}

#[test]
fn parses_three_rows() {
    let input = "1,2,3\n4,5\n6,7,8,9";
    let (rows, leftover) = parse(csv_rows(), input.chars()).unwrap();
    assert_eq!(rows, vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8, 9]]);
    assert_eq!(leftover, Vec::<char>::new());
}

#[test]
fn single_row_with_no_trailing_newline() {
    let (rows, leftover) = parse(csv_rows(), "42".chars()).unwrap();
    assert_eq!(rows, vec![vec![42]]);
    assert_eq!(leftover, Vec::<char>::new());
}
