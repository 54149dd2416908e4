//! Economic time series (GDP, population).

use super::FetchResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub history: Vec<Observation>,
    pub provider: String,
}

impl Series {
    /// Oldest observation first.
    pub fn sort(&mut self) {
        self.history.sort_by_key(|o| o.date);
    }
}

/// Both fetchers take an ISO 3166-1 alpha-2 code and an inclusive date range.
#[async_trait]
pub trait GdpFetcher: Send + Sync {
    async fn fetch(&self, country: &str, from: NaiveDate, to: NaiveDate) -> FetchResult<Series>;
}

#[async_trait]
pub trait PopulationFetcher: Send + Sync {
    async fn fetch(&self, country: &str, from: NaiveDate, to: NaiveDate) -> FetchResult<Series>;
}
