//! Answer caching.
//!
//! Entries are JSON-encoded [`Envelope`](crate::Envelope)s keyed by
//!
//! ```text
//! instant:{language}:{location}:{query}
//! ```
//!
//! where `location` is the caller's IP for modules that declare
//! `Requires::LOCATION` and `*` otherwise, so location-independent answers are
//! shared across callers.

use crate::clock::Clock;
use crate::context::LanguageTag;
use crate::error::CacheError;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

const KEY_PREFIX: &str = "instant";

/// A shared key/value store with per-entry TTL.
///
/// A failing store never fails a request: the dispatcher logs the error and
/// carries on as if the entry were absent.
#[async_trait]
pub trait Cacher: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
    async fn put(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;
}

pub fn cache_key(query: &str, language: &LanguageTag, location: Option<IpAddr>) -> String {
    match location {
        Some(ip) => format!("{KEY_PREFIX}:{language}:{ip}:{query}"),
        None => format!("{KEY_PREFIX}:{language}:*:{query}"),
    }
}

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires: DateTime<Utc>,
}

/// In-process store. Expired entries are dropped when read.
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
    clock: Arc<dyn Clock>,
}

impl MemoryCache {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { entries: Mutex::new(HashMap::new()), clock }
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[async_trait]
impl Cacher for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let now = self.clock.now();
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if now < entry.expires => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        // A TTL past chrono's range means the entry never expires.
        let now = self.clock.now();
        let expires = TimeDelta::from_std(ttl)
            .ok()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.entries.lock().insert(key.to_string(), Entry { value, expires });
        Ok(())
    }
}
