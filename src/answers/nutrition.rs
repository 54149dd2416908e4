use crate::answerer::{Answerer, Solved};
use crate::context::Request;
use crate::engine::{Match, alternation};
use crate::error::AnswerError;
use crate::fetch::nutrition::{Food, NutritionFetcher};
use crate::fetch::wikipedia::WikipediaFetcher;
use crate::solution::AnswerType;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A USDA nutrient the module answers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nutrient {
    pub name: &'static str,
    /// USDA nutrient number.
    pub code: &'static str,
    pub units: &'static str,
    pub aliases: &'static [&'static str],
}

pub static NUTRIENTS: &[Nutrient] = &[
    Nutrient { name: "calcium", code: "301", units: "mg", aliases: &[] },
    Nutrient { name: "calories", code: "208", units: "calories", aliases: &["energy"] },
    Nutrient { name: "carbohydrates", code: "205", units: "g", aliases: &["carbs"] },
    Nutrient { name: "cholesterol", code: "601", units: "mg", aliases: &[] },
    Nutrient { name: "saturated fat", code: "606", units: "g", aliases: &[] },
    Nutrient { name: "fat", code: "204", units: "g", aliases: &["lipid"] },
    Nutrient { name: "fiber", code: "291", units: "g", aliases: &[] },
    Nutrient { name: "iron", code: "303", units: "mg", aliases: &[] },
    Nutrient { name: "magnesium", code: "304", units: "mg", aliases: &[] },
    Nutrient { name: "potassium", code: "306", units: "mg", aliases: &[] },
    Nutrient { name: "protein", code: "203", units: "g", aliases: &[] },
    Nutrient { name: "sodium", code: "307", units: "mg", aliases: &[] },
    Nutrient { name: "sugars", code: "269", units: "g", aliases: &["sugar"] },
    Nutrient { name: "vitamin a", code: "318", units: "IU", aliases: &[] },
    Nutrient { name: "vitamin b", code: "418", units: "µg", aliases: &["vitamin b12", "vitamin b-12", "vitamin b 12"] },
    Nutrient { name: "vitamin c", code: "401", units: "mg", aliases: &[] },
    Nutrient { name: "vitamin d", code: "328", units: "µg", aliases: &[] },
    Nutrient { name: "zinc", code: "309", units: "mg", aliases: &[] },
];

static SPELLINGS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut all: Vec<&'static str> =
        NUTRIENTS.iter().flat_map(|n| std::iter::once(n.name).chain(n.aliases.iter().copied())).collect();
    all.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    all
});

pub fn nutrient(spelling: &str) -> Option<&'static Nutrient> {
    NUTRIENTS.iter().find(|n| n.name == spelling || n.aliases.iter().any(|a| *a == spelling))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    /// Canonical nutrient name.
    pub nutrient: String,
    pub code: String,
    pub units: String,
    pub food: String,
    pub foods: Vec<Food>,
    pub provider: String,
}

/// `calories in a big mac`, `how much protein in eggs`, `banana potassium`.
///
/// Database numbers come from the food's Wikidata claims, widened with the
/// food database's own search: when Wikidata knows the food, only products
/// from the same manufacturer are added.
pub struct NutritionFacts {
    wikipedia: Arc<dyn WikipediaFetcher>,
    fetcher: Arc<dyn NutritionFetcher>,
}

impl NutritionFacts {
    pub fn new(wikipedia: Arc<dyn WikipediaFetcher>, fetcher: Arc<dyn NutritionFetcher>) -> Self {
        Self { wikipedia, fetcher }
    }

    async fn ndbnos(&self, food: &str, req: &Request<'_>) -> Result<Vec<String>, AnswerError> {
        if matches!(food.to_lowercase().as_str(), "egg" | "eggs") {
            return Ok(vec!["01123".to_string()]);
        }

        let items = self.wikipedia.fetch(food, req.language()).await?;
        let mut ndbnos: Vec<String> = items.iter().flat_map(|i| i.claims.usda.iter().cloned()).collect();
        let from_wikidata = !ndbnos.is_empty();

        let listings = self.fetcher.lookup(food).await?;
        let manufacturer = listings
            .iter()
            .find(|l| ndbnos.contains(&l.ndbno))
            .map(|l| l.manufacturer.clone())
            .filter(|m| !m.is_empty());

        for listing in listings {
            if ndbnos.contains(&listing.ndbno) {
                continue;
            }
            let wanted = match (&manufacturer, from_wikidata) {
                (_, false) => true,
                (Some(m), true) => *m == listing.manufacturer,
                (None, true) => false,
            };
            if wanted {
                ndbnos.push(listing.ndbno);
            }
        }

        if ndbnos.is_empty() {
            return Err(AnswerError::NotFound(food.to_string()));
        }
        Ok(ndbnos)
    }
}

#[async_trait]
impl Answerer for NutritionFacts {
    fn answer_type(&self) -> AnswerType {
        AnswerType::Nutrition
    }

    fn triggers(&self) -> Vec<String> {
        let t = alternation(&SPELLINGS);
        vec![
            format!(r"^how (?:many|much) (?P<trigger>{t}) are in an? (?P<remainder>.*)$"),
            format!(r"^how (?:many|much) (?P<trigger>{t}) in an? (?P<remainder>.*)$"),
            format!(r"^how (?:many|much) (?P<trigger>{t}) in (?P<remainder>.*)$"),
            format!(r"^(?P<trigger>{t}) in an? (?P<remainder>.*)$"),
            format!(r"^(?P<trigger>{t}) in (?P<remainder>.*)$"),
            format!(r"^(?P<trigger>{t}) (?P<remainder>.*)$"),
            format!(r"^(?P<remainder>.*) (?P<trigger>{t})$"),
        ]
    }

    async fn solve(&self, m: &Match, req: &Request<'_>) -> Solved {
        let Some(nutrient) = nutrient(&m.trigger) else {
            return Solved::error(AnswerError::InvalidParameter(m.trigger.clone()));
        };
        let food = m.remainder.trim_end_matches('?').trim();

        let ndbnos = match self.ndbnos(food, req).await {
            Ok(ndbnos) => ndbnos,
            Err(err) => return Solved::error(err),
        };

        match self.fetcher.fetch(&ndbnos).await {
            Ok(response) => Solved::answer(Nutrition {
                nutrient: nutrient.name.to_string(),
                code: nutrient.code.to_string(),
                units: nutrient.units.to_string(),
                food: food.to_string(),
                foods: response.foods,
                provider: response.provider,
            }),
            Err(err) => Solved::error(err),
        }
    }
}
