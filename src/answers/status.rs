use crate::answerer::{Answerer, Solved};
use crate::context::Request;
use crate::engine::{Match, affixes};
use crate::error::AnswerError;
use crate::fetch::status::{StatusFetcher, fix_domain};
use crate::solution::AnswerType;
use async_trait::async_trait;
use std::sync::Arc;

/// Whether a site is up.
pub struct Status {
    fetcher: Arc<dyn StatusFetcher>,
}

impl Status {
    pub fn new(fetcher: Arc<dyn StatusFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl Answerer for Status {
    fn answer_type(&self) -> AnswerType {
        AnswerType::Status
    }

    fn triggers(&self) -> Vec<String> {
        affixes(&["is it down", "is it up", "isitdown", "isitup", "status of", "status", "working", "down", "up"])
    }

    async fn solve(&self, m: &Match, _req: &Request<'_>) -> Solved {
        let Some(domain) = fix_domain(&m.remainder) else {
            return Solved::error(AnswerError::InvalidParameter(m.remainder.clone()));
        };
        super::settle(self.fetcher.fetch(&domain).await)
    }
}
