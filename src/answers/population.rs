use super::countries::{self, CountrySeries};
use super::gdp::HISTORY_YEARS;
use crate::answerer::{Answerer, Solved};
use crate::context::Request;
use crate::engine::Match;
use crate::error::AnswerError;
use crate::fetch::econ::PopulationFetcher;
use crate::solution::AnswerType;
use async_trait::async_trait;
use std::sync::Arc;

/// Population history of a country.
pub struct Population {
    fetcher: Arc<dyn PopulationFetcher>,
}

impl Population {
    pub fn new(fetcher: Arc<dyn PopulationFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl Answerer for Population {
    fn answer_type(&self) -> AnswerType {
        AnswerType::Population
    }

    fn triggers(&self) -> Vec<String> {
        super::country_patterns(&["population"])
    }

    fn cacheable(&self) -> bool {
        true
    }

    async fn solve(&self, m: &Match, req: &Request<'_>) -> Solved {
        let raw = m.get("country").unwrap_or_default();
        let Some(country) = countries::find(raw) else {
            return Solved::error(AnswerError::InvalidCountry(raw.to_string()));
        };

        let (from, to) = super::history_range(req.clock(), HISTORY_YEARS);
        match self.fetcher.fetch(country.alpha2, from, to).await {
            Ok(mut series) => {
                series.sort();
                Solved::answer(CountrySeries {
                    country: country.name.to_string(),
                    history: series.history,
                    provider: series.provider,
                })
            }
            Err(err) => Solved::error(err),
        }
    }
}
