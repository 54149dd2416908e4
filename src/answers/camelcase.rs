use crate::answerer::{Answerer, Solved};
use crate::context::Request;
use crate::engine::{Match, affixes};
use crate::solution::{AnswerType, Solution};
use async_trait::async_trait;

/// `camelcase metallica rocks` → `MetallicaRocks`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CamelCase;

#[async_trait]
impl Answerer for CamelCase {
    fn answer_type(&self) -> AnswerType {
        AnswerType::CamelCase
    }

    fn triggers(&self) -> Vec<String> {
        affixes(&["camel case", "camelcase"])
    }

    fn cacheable(&self) -> bool {
        true
    }

    async fn solve(&self, m: &Match, _req: &Request<'_>) -> Solved {
        Solved::answer(Solution::Text(camel_case(&m.remainder)))
    }
}

pub(crate) fn camel_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
