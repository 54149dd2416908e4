use super::countries::{self, CountrySeries};
use crate::answerer::{Answerer, Solved};
use crate::context::Request;
use crate::engine::Match;
use crate::error::AnswerError;
use crate::fetch::econ::GdpFetcher;
use crate::solution::AnswerType;
use async_trait::async_trait;
use std::sync::Arc;

/// Years of history requested from the provider.
pub(crate) const HISTORY_YEARS: i32 = 50;

/// Gross domestic product history of a country.
pub struct Gdp {
    fetcher: Arc<dyn GdpFetcher>,
}

impl Gdp {
    pub fn new(fetcher: Arc<dyn GdpFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl Answerer for Gdp {
    fn answer_type(&self) -> AnswerType {
        AnswerType::Gdp
    }

    fn triggers(&self) -> Vec<String> {
        super::country_patterns(&["gdp", "gross domestic product"])
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
