use super::FetchResult;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Carrier {
    #[serde(rename = "fedex")]
    FedEx,
    #[serde(rename = "ups")]
    Ups,
    #[serde(rename = "usps")]
    Usps,
}

impl Carrier {
    pub fn name(&self) -> &'static str {
        match self {
            Carrier::FedEx => "FedEx",
            Carrier::Ups => "UPS",
            Carrier::Usps => "USPS",
        }
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Place {
    pub city: String,
    pub state: String,
    pub country: String,
}

/// One scan event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub date_time: DateTime<Utc>,
    pub location: Place,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub carrier: Carrier,
    pub tracking_number: String,
    pub updates: Vec<Update>,
    pub expected: Option<NaiveDate>,
    /// Carrier page for the shipment.
    pub url: String,
}

#[async_trait]
pub trait ParcelFetcher: Send + Sync {
    async fn fetch(&self, carrier: Carrier, number: &str) -> FetchResult<Response>;
}
