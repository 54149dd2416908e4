use crate::answerer::{Answerer, Requires, Solved};
use crate::context::Request;
use crate::engine::{Match, alternation};
use crate::error::AnswerError;
use crate::solution::{AnswerType, Solution};
use async_trait::async_trait;

/// Echoes the caller's user agent.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserAgent;

#[async_trait]
impl Answerer for UserAgent {
    fn answer_type(&self) -> AnswerType {
        AnswerType::UserAgent
    }

    fn triggers(&self) -> Vec<String> {
        let t = alternation(&[
            "what is my user agent",
            "what's my user agent",
            "what is my useragent",
            "what's my useragent",
            "my user agent",
            "my useragent",
            "user agent",
            "useragent",
            "user-agent",
        ]);
        vec![format!(r"^(?P<trigger>{t})\??$")]
    }

    fn requires(&self) -> Requires {
        Requires::USER_AGENT
    }

    async fn solve(&self, _m: &Match, req: &Request<'_>) -> Solved {
        match req.client_user_agent() {
            Some(ua) if !ua.trim().is_empty() => Solved::answer(Solution::Text(ua.to_string())),
            _ => Solved::error(AnswerError::NotFound("user agent".to_string())),
        }
    }
}
