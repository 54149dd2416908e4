use super::FetchResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breach {
    pub name: String,
    pub domain: String,
    pub date: NaiveDate,
    pub count: u64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub account: String,
    pub breaches: Vec<Breach>,
    pub provider: String,
}

/// Looks up the known data breaches an account appears in.
#[async_trait]
pub trait BreachFetcher: Send + Sync {
    async fn fetch(&self, account: &str) -> FetchResult<Response>;
}
