//! The answer module contract.
//!
//! An [`Answerer`] is a self-contained intent handler. Its static half
//! (type tag, trigger sources, cache eligibility, required request
//! dimensions) is read once at registration and frozen into a descriptor.
//! Its dynamic half is [`Answerer::solve`], called at most once per request
//! and only after one of its triggers matched.

use crate::context::Request;
use crate::engine::Match;
use crate::error::AnswerError;
use crate::solution::{AnswerType, Solution};
use async_trait::async_trait;

bitflags::bitflags! {
    /// Optional request dimensions a module consumes.
    ///
    /// Undeclared dimensions are hidden from the module's [`Request`] view.
    /// `LOCATION` also makes the caller's IP part of the cache key.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Requires: u8 {
        const USER_AGENT = 1 << 0;
        const LOCATION = 1 << 1;
    }
}

#[async_trait]
pub trait Answerer: Send + Sync {
    /// Primary type tag. Unique within a registry.
    fn answer_type(&self) -> AnswerType;

    /// Ordered trigger pattern sources. Compiled once at registration.
    fn triggers(&self) -> Vec<String>;

    /// Whether successful answers may be cached and replayed.
    fn cacheable(&self) -> bool {
        false
    }

    fn requires(&self) -> Requires {
        Requires::empty()
    }

    /// Resolve a matched query. Never panics on bad input; every failure is
    /// reported through [`Solved::err`].
    async fn solve(&self, m: &Match, req: &Request<'_>) -> Solved;
}

/// Outcome of a solve step.
#[derive(Debug, Clone, PartialEq)]
pub struct Solved {
    /// Replaces the module's primary type on the envelope (`local weather`,
    /// `ups`, `wikidata age`, ...).
    pub answer_type: Option<AnswerType>,
    pub solution: Option<Solution>,
    pub err: Option<AnswerError>,
    /// Cleared when this particular answer must not be cached even though the
    /// module is cache-eligible.
    pub cacheable: bool,
}

impl Solved {
    pub fn answer(solution: impl Into<Solution>) -> Self {
        Self { answer_type: None, solution: Some(solution.into()), err: None, cacheable: true }
    }

    pub fn error(err: impl Into<AnswerError>) -> Self {
        Self { answer_type: None, solution: None, err: Some(err.into()), cacheable: true }
    }

    /// A solution that still carries a non-fatal error.
    ///
    /// Only the prime ceiling uses this: the truncated list is returned along
    /// with the error explaining the truncation. Envelopes built from it are
    /// never cached.
    pub fn partial(solution: impl Into<Solution>, err: impl Into<AnswerError>) -> Self {
        Self { answer_type: None, solution: Some(solution.into()), err: Some(err.into()), cacheable: true }
    }

    pub fn retype(mut self, answer_type: AnswerType) -> Self {
        self.answer_type = Some(answer_type);
        self
    }

    pub fn uncached(mut self) -> Self {
        self.cacheable = false;
        self
    }

    pub fn is_ok(&self) -> bool {
        self.err.is_none()
    }
}

impl<E: Into<AnswerError>> From<Result<Solution, E>> for Solved {
    fn from(result: Result<Solution, E>) -> Self {
        match result {
            Ok(solution) => Solved::answer(solution),
            Err(err) => Solved::error(err),
        }
    }
}
