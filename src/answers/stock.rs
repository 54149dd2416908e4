use crate::answerer::{Answerer, Solved};
use crate::context::Request;
use crate::engine::{Match, alternation};
use crate::fetch::stock::StockFetcher;
use crate::solution::AnswerType;
use async_trait::async_trait;
use std::sync::Arc;

/// Latest quote for a ticker symbol.
pub struct Stock {
    fetcher: Arc<dyn StockFetcher>,
}

impl Stock {
    pub fn new(fetcher: Arc<dyn StockFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl Answerer for Stock {
    fn answer_type(&self) -> AnswerType {
        AnswerType::StockQuote
    }

    fn triggers(&self) -> Vec<String> {
        let t = alternation(&["stock quote", "stock price", "share price", "stock", "shares"]);
        vec![
            format!(r"^(?P<trigger>{t}) (?P<ticker>[a-z][a-z.]{{0,5}})$"),
            format!(r"^(?P<ticker>[a-z][a-z.]{{0,5}}) (?P<trigger>{t})$"),
        ]
    }

    async fn solve(&self, m: &Match, _req: &Request<'_>) -> Solved {
        let ticker = m.get("ticker").unwrap_or_default().to_uppercase();
        super::settle(self.fetcher.fetch(&ticker).await)
    }
}
