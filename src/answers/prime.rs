use crate::answerer::{Answerer, Solved};
use crate::context::Request;
use crate::engine::{Match, affixes};
use crate::error::{AnswerError, PRIME_CEILING};
use crate::solution::{AnswerType, Solution};
use async_trait::async_trait;

/// Prime numbers between two bounds.
///
/// Bounds given in reverse order are swapped and the lower bound is clamped
/// to 1. An upper bound above [`PRIME_CEILING`] is clamped too; that answer
/// carries both the truncated list and an [`AnswerError::PrimeCeiling`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Prime;

#[async_trait]
impl Answerer for Prime {
    fn answer_type(&self) -> AnswerType {
        AnswerType::Prime
    }

    fn triggers(&self) -> Vec<String> {
        affixes(&["prime numbers", "prime number", "prime"])
    }

    fn cacheable(&self) -> bool {
        true
    }

    async fn solve(&self, m: &Match, _req: &Request<'_>) -> Solved {
        let Some(caps) = regex!(i r"^between (-?[0-9]+) and (-?[0-9]+)").captures(&m.remainder) else {
            return Solved::error(AnswerError::InvalidParameter(m.remainder.clone()));
        };

        let (mut start, mut end) = (parse_bound(&caps[1]), parse_bound(&caps[2]));
        if end < start {
            std::mem::swap(&mut start, &mut end);
        }

        let ceiling = PRIME_CEILING as i64;
        let truncated = end > ceiling;
        let start = start.max(1) as usize;
        let end = end.min(ceiling).max(0) as usize;

        let list = primes(start, end).iter().map(usize::to_string).collect::<Vec<_>>().join(", ");

        match (list.is_empty(), truncated) {
            (false, false) => Solved::answer(Solution::Text(list)),
            (false, true) => Solved::partial(Solution::Text(list), AnswerError::PrimeCeiling { max: PRIME_CEILING }),
            (true, true) => Solved::error(AnswerError::PrimeCeiling { max: PRIME_CEILING }),
            (true, false) => Solved::error(AnswerError::NotFound(m.remainder.clone())),
        }
    }
}

/// Parses a matched bound, saturating at the `i64` range so oversized
/// bounds still clamp to the ceiling.
fn parse_bound(digits: &str) -> i64 {
    digits.parse().unwrap_or(if digits.starts_with('-') { i64::MIN } else { i64::MAX })
}

/// Primes `p` with `start <= p < end - 1`.
///
/// The two highest integers of the range are never reported; answers served
/// so far were computed with this bound.
fn primes(start: usize, end: usize) -> Vec<usize> {
    if end < 3 {
        return Vec::new();
    }

    let mut composite = vec![false; end];
    let mut n = 2;
    while n * n < end {
        if !composite[n] {
            for multiple in (n * n..end).step_by(n) {
                composite[multiple] = true;
            }
        }
        n += 1;
    }

    (start.max(2)..end - 1).filter(|&x| !composite[x]).collect()
}
