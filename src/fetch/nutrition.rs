use super::FetchResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub label: String,
    pub equivalent: f64,
    pub units: String,
    pub quantity: f64,
    pub value: f64,
}

/// One nutrient row of a food report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    /// USDA nutrient number, e.g. `208` for energy.
    pub id: String,
    pub name: String,
    pub units: String,
    /// Per 100 g.
    pub value: f64,
    #[serde(default)]
    pub measures: Vec<Measure>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    /// USDA database number.
    pub ndbno: String,
    pub name: String,
    pub nutrients: Vec<Nutrient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub foods: Vec<Food>,
    pub provider: String,
}

/// A search hit in the food database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub ndbno: String,
    pub name: String,
    #[serde(default)]
    pub manufacturer: String,
}

#[async_trait]
pub trait NutritionFetcher: Send + Sync {
    /// Search foods by name.
    async fn lookup(&self, query: &str) -> FetchResult<Vec<Listing>>;
    /// Food reports by USDA database number.
    async fn fetch(&self, ndbnos: &[String]) -> FetchResult<Response>;
}
