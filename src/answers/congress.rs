use crate::answerer::{Answerer, Solved};
use crate::context::Request;
use crate::engine::{Match, alternation};
use crate::error::AnswerError;
use crate::fetch::congress::{CongressFetcher, validate_state};
use crate::solution::AnswerType;
use async_trait::async_trait;
use std::sync::Arc;

/// A state's senators, or its House delegation.
pub struct Congress {
    fetcher: Arc<dyn CongressFetcher>,
}

impl Congress {
    pub fn new(fetcher: Arc<dyn CongressFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl Answerer for Congress {
    fn answer_type(&self) -> AnswerType {
        AnswerType::Congress
    }

    fn triggers(&self) -> Vec<String> {
        let senate = alternation(&["senators", "senator", "senate"]);
        let members = alternation(&["house members", "members", "member", "congress"]);
        vec![
            format!(r"^(?P<senate>{senate}) (?P<state>.*)$"),
            format!(r"^(?P<state>.*) (?P<senate>{senate})$"),
            format!(r"^(?P<members>{members}) (?P<state>.*)$"),
            format!(r"^(?P<state>.*) (?P<members>{members})$"),
        ]
    }

    fn cacheable(&self) -> bool {
        true
    }

    async fn solve(&self, m: &Match, _req: &Request<'_>) -> Solved {
        let raw = m.get("state").unwrap_or_default();
        let Some(location) = validate_state(raw) else {
            return Solved::error(AnswerError::InvalidState(raw.to_string()));
        };

        let response = if m.has("members") {
            self.fetcher.fetch_members(&location).await
        } else {
            self.fetcher.fetch_senators(&location).await
        };
        super::settle(response)
    }
}
