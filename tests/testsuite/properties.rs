//! Algebraic properties each combinator is expected to satisfy, each
//! named after the behavior it checks.

use proptest::prelude::*;

use stepparse::combinator::{alt, concat_map, die, map, split_many, to_vec_fold, yield_};
use stepparse::driver::parse;
use stepparse::token::{eof, peek, satisfy, take_eq, take_ge, take_while, take_while1};

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0..100i32, 0..20)
}

proptest! {
    // parse(fromFold(F), xs) = fold(F, xs) for any total fold F.
    // `split_many` over a parser that always consumes exactly one token is
    // this crate's "run a fold directly over the stream" shape.
    #[test]
    fn accumulator_equivalence(xs in small_vec()) {
        let p = split_many(to_vec_fold(), satisfy(|_: &i32| true));
        let (value, leftover) = parse(p, xs.clone().into_iter()).unwrap();
        prop_assert_eq!(value, xs);
        prop_assert_eq!(leftover, Vec::<i32>::new());
    }

    // yield identity, on every input including empty.
    #[test]
    fn yield_identity(xs in small_vec()) {
        let (value, leftover) = parse(yield_(42), xs.clone().into_iter()).unwrap();
        prop_assert_eq!(value, 42);
        prop_assert_eq!(leftover, xs);
    }

    // die totality, on every input including empty.
    #[test]
    fn die_totality(xs in small_vec()) {
        let err = parse(die::<i32, ()>("nope"), xs.into_iter()).unwrap_err();
        prop_assert_eq!(err.message(), "nope");
    }

    // peek leaves the leftover exactly equal to the input.
    #[test]
    fn peek_does_not_consume(x in 0..100i32, rest in small_vec()) {
        let mut xs = vec![x];
        xs.extend(rest.iter().copied());
        let p = peek(satisfy(move |t: &i32| *t == x));
        let (_value, leftover) = parse(p, xs.clone().into_iter()).unwrap();
        prop_assert_eq!(leftover, xs);
    }

    // eof succeeds iff the input is empty.
    #[test]
    fn eof_matches_only_empty_input(xs in small_vec()) {
        let result = parse(eof(), xs.clone().into_iter());
        prop_assert_eq!(result.is_ok(), xs.is_empty());
    }

    // satisfy succeeds with the head iff it matches, else fails.
    #[test]
    fn satisfy_matches_the_predicate(x in 0..100i32, rest in small_vec()) {
        let mut xs = vec![x];
        xs.extend(rest.iter().copied());

        let matches = parse(satisfy(|t: &i32| t % 2 == 0), xs.clone().into_iter());
        prop_assert_eq!(matches.is_ok(), x % 2 == 0);

        let never_matches = parse(satisfy(|_: &i32| false), xs.into_iter());
        prop_assert!(never_matches.is_err());
    }

    // take_eq(n) succeeds with the first n iff |xs| >= n.
    #[test]
    fn take_eq_needs_at_least_n(xs in small_vec(), n in 0usize..25) {
        let result = parse(take_eq(n), xs.clone().into_iter());
        if xs.len() >= n {
            let (value, leftover) = result.unwrap();
            prop_assert_eq!(&value[..], &xs[..n]);
            prop_assert_eq!(leftover, xs[n..].to_vec());
        } else {
            prop_assert!(result.is_err());
        }
    }

    // take_ge(n) succeeds with everything iff |xs| >= n.
    #[test]
    fn take_ge_needs_at_least_n(xs in small_vec(), n in 0usize..25) {
        let result = parse(take_ge(n), xs.clone().into_iter());
        if xs.len() >= n {
            let (value, leftover) = result.unwrap();
            prop_assert_eq!(value, xs);
            prop_assert_eq!(leftover, Vec::<i32>::new());
        } else {
            prop_assert!(result.is_err());
        }
    }

    // take_while collects exactly the matching prefix.
    #[test]
    fn take_while_collects_the_matching_prefix(xs in small_vec()) {
        let expected: Vec<i32> = xs.iter().take_while(|t| **t < 50).copied().collect();
        let expected_leftover: Vec<i32> = xs.iter().skip(expected.len()).copied().collect();
        let (value, leftover) = parse(take_while(|t: &i32| *t < 50), xs.into_iter()).unwrap();
        prop_assert_eq!(value, expected);
        prop_assert_eq!(leftover, expected_leftover);
    }

    // take_while1 requires the first token to match.
    #[test]
    fn take_while1_requires_a_matching_head(xs in small_vec()) {
        let result = parse(take_while1(|t: &i32| *t < 50), xs.clone().into_iter());
        match xs.first() {
            Some(head) if *head < 50 => {
                let (value, _leftover) = result.unwrap();
                let expected: Vec<i32> = xs.iter().take_while(|t| **t < 50).copied().collect();
                prop_assert_eq!(value, expected);
            }
            _ => prop_assert!(result.is_err()),
        }
    }

    // alt(p, die) is p wherever p succeeds; alt(die, p) is p unconditionally.
    #[test]
    fn alt_with_die_is_identity(x in 0..100i32, rest in small_vec()) {
        let mut xs = vec![x];
        xs.extend(rest.iter().copied());

        let bare = parse(satisfy(|t: &i32| *t == x), xs.clone().into_iter());
        let with_right_die = parse(
            alt(satisfy(move |t: &i32| *t == x), die::<i32, i32>("unreachable")),
            xs.clone().into_iter(),
        );
        prop_assert_eq!(bare, with_right_die);

        let (v, leftover) = parse(
            alt(die::<i32, i32>("always fails"), satisfy(move |t: &i32| *t == x)),
            xs.clone().into_iter(),
        )
        .unwrap();
        prop_assert_eq!(v, x);
        prop_assert_eq!(leftover, xs[1..].to_vec());
    }

    // alt(p, q) replays exactly the tokens p consumed into q once p fails.
    // `left` takes `k` tokens, then demands a non-negative one and fails
    // in-band when it sees the `-1` sentinel; `right` simply takes `k + 1`
    // tokens, so its success value shows exactly which prefix got replayed.
    #[test]
    fn alt_backtrack_replays_the_same_prefix(k in 1usize..6) {
        let mut xs: Vec<i32> = (0..k as i32).collect();
        xs.push(-1); // the token that makes `left` fail.
        xs.push(99);

        let left = map(
            concat_map(take_eq(k), move |_prefix: Vec<i32>| satisfy(|t: &i32| *t >= 0)),
            |_: i32| Vec::new(),
        );
        let right = take_eq(k + 1);
        let p = alt(left, right);
        let (value, leftover) = parse(p, xs.clone().into_iter()).unwrap();
        prop_assert_eq!(value, xs[..k + 1].to_vec());
        prop_assert_eq!(leftover, xs[k + 1..].to_vec());
    }

    // bind associativity, observed through the result and leftover a
    // three-step arithmetic chain produces.
    #[test]
    fn bind_associativity(a in 0..10i32, b in 0..10i32, c in 0..10i32) {
        let xs = vec![a, b, c, 999];

        let left_assoc = concat_map(
            concat_map(satisfy(|_: &i32| true), move |first: i32| {
                map(satisfy(|_: &i32| true), move |second: i32| (first, second))
            }),
            move |(first, second): (i32, i32)| {
                map(satisfy(|_: &i32| true), move |third: i32| (first, second, third))
            },
        );
        let right_assoc = concat_map(satisfy(|_: &i32| true), move |first: i32| {
            concat_map(satisfy(|_: &i32| true), move |second: i32| {
                map(satisfy(|_: &i32| true), move |third: i32| (first, second, third))
            })
        });

        let left_result = parse(left_assoc, xs.clone().into_iter()).unwrap();
        let right_result = parse(right_assoc, xs.into_iter()).unwrap();
        prop_assert_eq!(left_result, right_result);
    }
}
