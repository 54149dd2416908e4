use super::FetchResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Exchange rates quoted against `base`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rates {
    pub base: String,
    pub date: NaiveDate,
    /// ISO 4217 code → units of that currency per one unit of `base`.
    pub rates: BTreeMap<String, f64>,
    pub provider: String,
}

impl Rates {
    pub fn rate(&self, to: &str) -> Option<f64> {
        if to.eq_ignore_ascii_case(&self.base) {
            return Some(1.0);
        }
        self.rates.get(to).copied()
    }
}

#[async_trait]
pub trait CurrencyFetcher: Send + Sync {
    async fn fetch(&self, base: &str) -> FetchResult<Rates>;
}
