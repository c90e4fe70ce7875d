//! The driver protocol's well-formedness invariants, checked against
//! every combinator that is responsible for upholding them (`alt`,
//! `split_many`/`split_some` for the rewind bound; any commit-capable
//! combinator for the no-error-after-commit and total-extract rules).
//!
//! Each combinator's happy path is run once and its name recorded in an
//! `FxHashSet` (the one place this crate's `rustc-hash` dev-dependency is
//! used — a small deduplicated coverage set, not a hot-path structure, so
//! `FxHashSet`'s non-cryptographic speed is just "any fast hasher will
//! do" rather than a load-bearing choice) so the final assertion catches
//! a combinator silently dropped from this suite as the crate grows, the
//! same role winnow's own fuzz corpus dedup set plays for its targets.

use rustc_hash::FxHashSet;

use stepparse::combinator::{alt, concat_map, many, map, split_many, split_some, to_vec_fold};
use stepparse::core::Step;
use stepparse::driver::parse;
use stepparse::error::ParseError;
use stepparse::token::{peek, satisfy, take_while};
use stepparse::Parser;

/// Invariant 1: once a parser's `step` has returned `Yield`/`YieldB`, no
/// later step from the resulting state may return `Error`. `split_many`'s
/// own success path commits (`YieldB`) on every completed iteration, so
/// running it to a clean finish is exactly this invariant holding for the
/// whole repetition, not just one step.
fn covers_commit_then_no_error(covered: &mut FxHashSet<&'static str>) {
    let p = split_many(to_vec_fold(), satisfy(|t: &i32| *t < 5));
    let (value, leftover) = parse(p, vec![1, 2, 3, 5].into_iter()).unwrap();
    assert_eq!(value, vec![1, 2, 3]);
    assert_eq!(leftover, vec![5]);
    covered.insert("split_many");

    let p = split_some(to_vec_fold(), satisfy(|t: &i32| *t < 5));
    let (value, leftover) = parse(p, vec![1, 2, 9].into_iter()).unwrap();
    assert_eq!(value, vec![1, 2]);
    assert_eq!(leftover, vec![9]);
    covered.insert("split_some");
}

/// Invariant 2: `alt`'s `Skip`/rewind bookkeeping (`cnt`) never rewinds
/// past what the left branch actually consumed since entering the
/// combinator — exercised here across a handful of consumed-then-failed
/// prefixes of increasing length.
fn covers_alt_rewind_bound(covered: &mut FxHashSet<&'static str>) {
    for prefix_len in 0..5usize {
        let mut xs: Vec<i32> = vec![0; prefix_len];
        xs.push(-1);
        xs.push(7);

        let left = concat_map(stepparse::token::take_eq(prefix_len), |_: Vec<i32>| {
            satisfy(|t: &i32| *t >= 0)
        });
        let right = map(stepparse::token::take_eq(prefix_len + 1), |v: Vec<i32>| {
            v.len() as i32
        });
        let p = alt(left, right);
        let (value, leftover) = parse(p, xs.into_iter()).unwrap();
        assert_eq!(value, (prefix_len + 1) as i32);
        assert_eq!(leftover, vec![7]);
    }
    covered.insert("alt");
}

/// Invariant 3: `extract` must be total (never raise) once a state has
/// passed through a commit — `split_many`'s tolerant final extract over a
/// partial trailing iteration is the load-bearing case.
fn covers_extract_total_after_commit(covered: &mut FxHashSet<&'static str>) {
    let p = many(satisfy(|t: &i32| *t < 5));
    let (value, leftover) = parse(p, vec![1, 2, 3].into_iter()).unwrap();
    assert_eq!(value, vec![1, 2, 3]);
    assert_eq!(leftover, Vec::<i32>::new());
    covered.insert("many");

    let p = peek(satisfy(|t: &i32| *t == 1));
    let (value, leftover) = parse(p, vec![1].into_iter()).unwrap();
    assert_eq!(value, 1);
    assert_eq!(leftover, vec![1]);
    covered.insert("peek");

    let p = take_while(|t: &i32| *t < 5);
    let (value, leftover) = parse(p, vec![1, 2].into_iter()).unwrap();
    assert_eq!(value, vec![1, 2]);
    assert_eq!(leftover, Vec::<i32>::new());
    covered.insert("take_while");
}

#[test]
fn every_commit_capable_combinator_upholds_its_invariants() {
    let mut covered = FxHashSet::default();
    covers_commit_then_no_error(&mut covered);
    covers_alt_rewind_bound(&mut covered);
    covers_extract_total_after_commit(&mut covered);

    let expected: FxHashSet<&'static str> = [
        "split_many",
        "split_some",
        "alt",
        "many",
        "peek",
        "take_while",
    ]
    .into_iter()
    .collect();
    assert_eq!(covered, expected, "a combinator was dropped from this suite");
}

/// Invariant 4: `Stop n b`'s `n` never exceeds what the driver can
/// actually return — `peek`'s own `Stop`/`Yield` translation adds the
/// tokens it consumed internally to whatever the wrapped parser reports,
/// so this checks that composed `n` still lines up with the real leftover.
#[test]
fn stop_n_matches_the_real_leftover() {
    let p = peek(map(stepparse::token::take_eq(2), |v: Vec<i32>| v));
    let (value, leftover) = parse(p, vec![1, 2, 3].into_iter()).unwrap();
    assert_eq!(value, vec![1, 2]);
    assert_eq!(leftover, vec![1, 2, 3]);
}

/// A hand-rolled malformed parser is used, instead of one built from this
/// crate's own combinators, to show what invariant 1 actually rules out:
/// a well-formed composed parser can never reach this state, but the
/// `Step` type itself does not stop you from writing one that does.
struct ErrorsAfterCommit;

impl Parser<i32, i32> for ErrorsAfterCommit {
    type State = bool;

    fn initial(&mut self) -> bool {
        false
    }

    fn step(&mut self, committed: bool, _token: &i32) -> Step<bool, i32> {
        if !committed {
            Step::Yield(1, true)
        } else {
            Step::Error(ParseError::new("invariant 1 violation"))
        }
    }

    fn extract(&mut self, _state: bool) -> Result<i32, ParseError> {
        Ok(0)
    }
}

#[test]
fn the_step_type_does_not_itself_enforce_invariant_1() {
    // Demonstrates why invariant 1 is documented, not type-enforced: this
    // parser commits on its first token and then errors on its second,
    // which no combinator in this crate would ever construct, but nothing
    // stops a hand-written `Parser` impl from doing it.
    let err = parse(ErrorsAfterCommit, vec![1, 2].into_iter()).unwrap_err();
    assert_eq!(err.message(), "invariant 1 violation");
}
