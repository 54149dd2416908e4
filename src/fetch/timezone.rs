use super::FetchResult;
use async_trait::async_trait;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

/// A resolved time zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    /// Current offset from UTC, daylight saving included.
    pub utc_offset_seconds: i32,
}

impl Zone {
    pub fn offset(&self) -> Option<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_seconds)
    }
}

/// Resolves coordinates to the zone in force there.
#[async_trait]
pub trait TimeZoneFetcher: Send + Sync {
    async fn fetch(&self, latitude: f64, longitude: f64) -> FetchResult<Zone>;
}
