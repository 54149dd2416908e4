use crate::answerer::{Answerer, Solved};
use crate::context::Request;
use crate::engine::{Match, affixes};
use crate::solution::AnswerType;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Count {
    pub text: String,
    pub characters: usize,
}

/// Number of characters in a phrase, quotes excluded.
#[derive(Debug, Default, Clone, Copy)]
pub struct Characters;

#[async_trait]
impl Answerer for Characters {
    fn answer_type(&self) -> AnswerType {
        AnswerType::Characters
    }

    fn triggers(&self) -> Vec<String> {
        affixes(&[
            "number of characters in",
            "number of characters",
            "number of chars in",
            "number of chars",
            "characters in",
            "character count",
            "char count",
            "characters",
            "chars",
        ])
    }

    fn cacheable(&self) -> bool {
        true
    }

    async fn solve(&self, m: &Match, _req: &Request<'_>) -> Solved {
        let text = super::strip_quotes(&m.remainder).to_string();
        let characters = text.chars().count();
        Solved::answer(Count { text, characters })
    }
}
