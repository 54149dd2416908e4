use super::FetchResult;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Last {
    pub price: f64,
    pub time: DateTime<Utc>,
    pub change: f64,
    pub change_percent: f64,
}

/// End-of-day bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eod {
    pub date: NaiveDate,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub ticker: String,
    pub name: String,
    pub exchange: String,
    pub last: Last,
    #[serde(default)]
    pub history: Vec<Eod>,
    pub provider: String,
}

#[async_trait]
pub trait StockFetcher: Send + Sync {
    async fn fetch(&self, ticker: &str) -> FetchResult<Quote>;
}
