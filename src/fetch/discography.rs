use super::FetchResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
    pub published: NaiveDate,
    /// Cover art URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// Studio albums of an artist, oldest first.
#[async_trait]
pub trait DiscographyFetcher: Send + Sync {
    async fn fetch(&self, artist: &str) -> FetchResult<Vec<Album>>;
}
