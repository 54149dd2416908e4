use crate::answerer::{Answerer, Solved};
use crate::context::Request;
use crate::engine::{Match, affixes};
use crate::error::AnswerError;
use crate::fetch::breach::BreachFetcher;
use crate::solution::AnswerType;
use async_trait::async_trait;
use std::sync::Arc;

/// Data breaches an account (usually an email address) appears in.
pub struct Breach {
    fetcher: Arc<dyn BreachFetcher>,
}

impl Breach {
    pub fn new(fetcher: Arc<dyn BreachFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl Answerer for Breach {
    fn answer_type(&self) -> AnswerType {
        AnswerType::Breach
    }

    fn triggers(&self) -> Vec<String> {
        affixes(&["have i been pwned?", "have i been pwned", "data breaches", "data breach", "breaches", "breach", "pwned"])
    }

    async fn solve(&self, m: &Match, _req: &Request<'_>) -> Solved {
        let account = m.remainder.trim();
        if account.is_empty() || account.contains(char::is_whitespace) {
            return Solved::error(AnswerError::InvalidParameter(m.remainder.clone()));
        }
        super::settle(self.fetcher.fetch(account).await)
    }
}
