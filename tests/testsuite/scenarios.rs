//! End-to-end scenarios over a handful of small combinator pipelines,
//! each named after the behavior it exercises.

use stepparse::combinator::{alt, pair, split_many, split_some, to_vec_fold};
use stepparse::driver::parse;
use stepparse::producer::{cross, drain, from_list};
use stepparse::token::{satisfy, slice_sep_by};

#[test]
fn sequencing_combines_left_and_right_and_leaves_the_rest() {
    let p = pair(satisfy(|t: &i32| *t == 1), satisfy(|t: &i32| *t == 2));
    let (value, leftover) = parse(p, vec![1, 2, 3].into_iter()).unwrap();
    assert_eq!(value, (1, 2));
    assert_eq!(leftover, vec![3]);
}

#[test]
fn alt_rewinds_the_failed_branch_into_the_next_one() {
    let first_guess = pair(satisfy(|t: &i32| *t == 1), satisfy(|t: &i32| *t == 9));
    let second_guess = pair(satisfy(|t: &i32| *t == 1), satisfy(|t: &i32| *t == 2));
    let p = alt(first_guess, second_guess);
    let (value, leftover) = parse(p, vec![1, 2].into_iter()).unwrap();
    assert_eq!(value, (1, 2));
    assert_eq!(leftover, Vec::<i32>::new());
}

#[test]
fn many_collects_the_matching_prefix_and_stops_at_the_first_mismatch() {
    let p = split_many(to_vec_fold(), satisfy(|t: &i32| *t < 5));
    let (value, leftover) = parse(p, vec![1, 2, 3, 5, 6].into_iter()).unwrap();
    assert_eq!(value, vec![1, 2, 3]);
    assert_eq!(leftover, vec![5, 6]);
}

#[test]
fn some_fails_outright_when_the_very_first_attempt_fails() {
    let p = split_some(to_vec_fold(), satisfy(|t: &i32| *t < 5));
    let err = parse(p, vec![9].into_iter()).unwrap_err();
    assert!(!err.message().is_empty());
}

#[test]
fn producer_cross_pairs_the_head_with_every_remaining_element() {
    let p = cross(from_list(), from_list());
    let values = drain(p, vec![1, 2, 3, 4]);
    assert_eq!(values, vec![(1, 2), (1, 3), (1, 4)]);
}

#[test]
fn slice_sep_by_collects_up_to_but_not_including_the_separator() {
    let p = slice_sep_by(|t: &i32| *t == 1, to_vec_fold());
    let (value, leftover) = parse(p, vec![0, 0, 1, 0].into_iter()).unwrap();
    assert_eq!(value, vec![0, 0]);
    // The separator itself is the current token at the Stop(1, _) step, so
    // it is returned as leftover alongside whatever followed it.
    assert_eq!(leftover, vec![1, 0]);
}

// Fallible test helper grounded on winnow's own `tests/testsuite` use of
// `anyhow` for `?`-based assertions instead of a chain of `.unwrap()`s.
#[test]
fn sequencing_chain_reads_through_question_mark() -> anyhow::Result<()> {
    let p = pair(
        pair(satisfy(|t: &i32| *t == 1), satisfy(|t: &i32| *t == 2)),
        satisfy(|t: &i32| *t == 3),
    );
    let (value, leftover) = parse(p, vec![1, 2, 3, 4].into_iter())?;
    assert_eq!(value, ((1, 2), 3));
    assert_eq!(leftover, vec![4]);
    Ok(())
}
