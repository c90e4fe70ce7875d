//! The parser driver: input buffering, replay, and the top-level `parse`
//! entry point.
//!
//! The driver is a single-threaded token pump. It owns a [`RingBuffer`] of
//! recently-seen tokens split (conceptually) into a committed prefix,
//! which it may drop, and an uncommitted tail, which it must be able to
//! replay to an enclosing [`alt`][crate::combinator::alt]. A byte-only ring
//! buffer crate was evaluated for this role and dropped (see `DESIGN.md`):
//! buffering an arbitrary token type rules out anything specialized to
//! bytes.

use crate::core::Step;
use crate::error::ParseError;
use crate::lib::std::collections::VecDeque;
use crate::lib::std::vec::Vec;
use crate::parser::Parser;
use crate::trace::trace_step;

/// A pull-based token source. Blanket-implemented for any `Iterator`, so
/// `parse(p, tokens.into_iter())` needs no adapter.
pub trait Source<A> {
    /// Produce the next token, or `None` once the source is exhausted.
    fn pull(&mut self) -> Option<A>;
}

impl<A, I: Iterator<Item = A>> Source<A> for I {
    fn pull(&mut self) -> Option<A> {
        self.next()
    }
}

/// The buffer of recently-seen tokens a driver replays on backtrack.
///
/// A `VecDeque` with a cursor gives O(1) amortized push-back and cheap
/// suffix retention. The front of the deque is always the last commit
/// point — tokens before it are never retained, so [`Step::Skip`]'s rewind
/// distance is simply bounded by the cursor itself.
pub struct RingBuffer<A> {
    tokens: VecDeque<A>,
    cursor: usize,
}

impl<A> RingBuffer<A> {
    fn new() -> Self {
        Self {
            tokens: VecDeque::new(),
            cursor: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.cursor == self.tokens.len()
    }

    fn push(&mut self, token: A) {
        self.tokens.push_back(token);
    }

    fn current(&self) -> &A {
        &self.tokens[self.cursor]
    }

    fn advance(&mut self) {
        self.cursor += 1;
    }

    /// Commit: retain only the `n` most recently consumed tokens, dropping
    /// everything before them. Returns the new cursor position (`n`).
    fn commit_keep(&mut self, n: usize) {
        debug_assert!(
            n <= self.cursor,
            "Yield({n}) retains more tokens than have been consumed"
        );
        let drop_count = self.cursor - n;
        self.tokens.drain(..drop_count);
        self.cursor -= drop_count;
    }

    /// Rewind the cursor by `n` tokens without dropping anything.
    fn rewind(&mut self, n: usize) {
        debug_assert!(
            n <= self.cursor,
            "Skip/YieldB({n}) rewinds past the last commit point"
        );
        self.cursor -= n;
    }

    /// Drain the last `n` consumed-but-unused tokens out as owned leftover,
    /// in order.
    fn drain_tail(&mut self, n: usize) -> Vec<A> {
        debug_assert!(n <= self.cursor, "Stop({n}) claims more tail than consumed");
        self.tokens.drain(self.cursor - n..).collect()
    }
}

/// Run `parser` to completion against `source`, returning the parsed value
/// alongside whatever tokens were never consumed.
///
/// On success, `leftover` is every token the parser did not consume, in
/// order: the [`Step::Stop`] tail followed by whatever the source had not
/// yet produced.
pub fn parse<A, B, P, S>(mut parser: P, mut source: S) -> Result<(B, Vec<A>), ParseError>
where
    P: Parser<A, B>,
    S: Source<A>,
{
    let mut buffer: RingBuffer<A> = RingBuffer::new();
    let mut state = parser.initial();
    let mut token_count = 0usize;

    loop {
        if buffer.at_end() {
            match source.pull() {
                Some(token) => buffer.push(token),
                None => break,
            }
        }

        let step = trace_step("driver", token_count, || {
            let token = buffer.current();
            parser.step(state, token)
        });
        buffer.advance();
        token_count += 1;

        match step {
            Step::Yield(n, s2) => {
                buffer.commit_keep(n);
                state = s2;
            }
            Step::YieldB(n, s2) => {
                buffer.commit_keep(n);
                buffer.rewind(n);
                state = s2;
            }
            Step::Skip(n, s2) => {
                buffer.rewind(n);
                state = s2;
            }
            Step::Stop(n, b) => {
                let mut leftover = buffer.drain_tail(n);
                while let Some(token) = source.pull() {
                    leftover.push(token);
                }
                return Ok((b, leftover));
            }
            Step::Error(e) => return Err(e),
        }
    }

    let value = parser.extract(state)?;
    Ok((value, Vec::new()))
}
