//! Wikipedia, Wikidata, Wikiquote and Wiktionary lookups.
//!
//! A lookup returns [`Item`]s: an article extract plus the structured
//! Wikidata claims modules read facts from.

use super::FetchResult;
use crate::context::LanguageTag;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A Wikidata time value, kept in its wire form (`+1963-02-17T00:00:00Z`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WikiDate {
    pub value: String,
    #[serde(default)]
    pub calendar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub amount: String,
    pub unit: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Claims {
    pub birthday: Vec<WikiDate>,
    pub death: Vec<WikiDate>,
    pub height: Vec<Quantity>,
    pub weight: Vec<Quantity>,
    pub coordinate: Vec<Coordinate>,
    /// Wikidata ids of the "instance of" claims (`Q515` for a city).
    pub instance: Vec<String>,
    /// Labels of the current capital claims.
    pub capital: Vec<String>,
    /// Labels of the country claims.
    pub country: Vec<String>,
    /// Labels of the first-level administrative division claims.
    pub state: Vec<String>,
    /// USDA nutrient database numbers.
    pub usda: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub part: String,
    pub meaning: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wiktionary {
    pub title: String,
    pub language: String,
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    /// Wikidata label.
    pub label: String,
    /// Article extract.
    pub text: String,
    #[serde(default)]
    pub claims: Claims,
    #[serde(default)]
    pub quotes: Vec<String>,
    #[serde(default)]
    pub wiktionary: Option<Wiktionary>,
}

#[async_trait]
pub trait WikipediaFetcher: Send + Sync {
    /// Items for a title, best match first. No match is an empty list.
    async fn fetch(&self, query: &str, language: &LanguageTag) -> FetchResult<Vec<Item>>;
}
