use super::FetchResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conditions {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
    Mist,
    Windy,
    Unknown,
}

/// Weather at one point in time. Temperatures are in Fahrenheit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: DateTime<Utc>,
    pub conditions: Conditions,
    pub description: String,
    pub temperature: f64,
    pub low: f64,
    pub high: f64,
    pub wind: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub city: String,
    pub current: Observation,
    #[serde(default)]
    pub forecast: Vec<Observation>,
    pub time_zone: Option<String>,
    pub provider: String,
}

#[async_trait]
pub trait WeatherFetcher: Send + Sync {
    async fn fetch_by_city(&self, city: &str) -> FetchResult<Weather>;
    async fn fetch_by_zip(&self, zip: u32) -> FetchResult<Weather>;
    async fn fetch_by_lat_long(&self, latitude: f64, longitude: f64, time_zone: &str) -> FetchResult<Weather>;
}
