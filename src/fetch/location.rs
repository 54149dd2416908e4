use super::FetchResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Where an IP address is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    #[serde(default)]
    pub state: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA zone name, e.g. `America/Denver`.
    pub time_zone: String,
}

#[async_trait]
pub trait LocationFetcher: Send + Sync {
    async fn fetch(&self, ip: IpAddr) -> FetchResult<City>;
}
