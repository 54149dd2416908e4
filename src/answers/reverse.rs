use crate::answerer::{Answerer, Solved};
use crate::context::Request;
use crate::engine::{Match, affixes};
use crate::solution::{AnswerType, Solution};
use async_trait::async_trait;

/// Reverses text character by character.
#[derive(Debug, Default, Clone, Copy)]
pub struct Reverse;

#[async_trait]
impl Answerer for Reverse {
    fn answer_type(&self) -> AnswerType {
        AnswerType::Reverse
    }

    fn triggers(&self) -> Vec<String> {
        affixes(&["reverse"])
    }

    fn cacheable(&self) -> bool {
        true
    }

    async fn solve(&self, m: &Match, _req: &Request<'_>) -> Solved {
        let text = super::strip_quotes(&m.remainder);
        Solved::answer(Solution::Text(text.chars().rev().collect()))
    }
}
