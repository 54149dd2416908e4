use crate::answerer::{Answerer, Requires, Solved};
use crate::context::Request;
use crate::engine::{Match, alternation};
use crate::error::{AnswerError, FetchError};
use crate::fetch::location::LocationFetcher;
use crate::fetch::weather::WeatherFetcher;
use crate::solution::AnswerType;
use async_trait::async_trait;
use std::sync::Arc;

/// Weather by city, by US zip code, or for the caller's location.
pub struct Weather {
    fetcher: Arc<dyn WeatherFetcher>,
    location: Option<Arc<dyn LocationFetcher>>,
}

impl Weather {
    pub fn new(fetcher: Arc<dyn WeatherFetcher>, location: Option<Arc<dyn LocationFetcher>>) -> Self {
        Self { fetcher, location }
    }

    async fn local(&self, req: &Request<'_>) -> Solved {
        let Some(locator) = &self.location else {
            return Solved::error(FetchError::Unavailable("location lookup".to_string()));
        };
        let Some(ip) = req.ip() else {
            return Solved::error(AnswerError::NotFound("caller location".to_string()));
        };

        let weather = match locator.fetch(ip).await {
            Ok(city) => self.fetcher.fetch_by_lat_long(city.latitude, city.longitude, &city.time_zone).await,
            Err(err) => Err(err),
        };
        super::settle(weather).retype(AnswerType::LocalWeather)
    }
}

#[async_trait]
impl Answerer for Weather {
    fn answer_type(&self) -> AnswerType {
        AnswerType::Weather
    }

    fn triggers(&self) -> Vec<String> {
        let t = alternation(&[
            "weather forecast for",
            "weather forecast in",
            "weather forecast",
            "weather fore cast for",
            "weather fore cast in",
            "weather fore cast",
            "weather for",
            "weather in",
            "weather",
            "forecast for",
            "forecast",
            "fore cast for",
            "fore cast",
            "climate for",
            "climate",
        ]);
        vec![
            r"^(?P<trigger>weather forecast|weather fore cast|weather|forecast|fore cast|climate)$".to_string(),
            format!(r"^(?P<trigger>{t})\s(?P<remainder>.*)$"),
            format!(r"^(?P<remainder>.*)\s(?P<trigger>{t})$"),
        ]
    }

    fn cacheable(&self) -> bool {
        true
    }

    fn requires(&self) -> Requires {
        Requires::LOCATION
    }

    async fn solve(&self, m: &Match, req: &Request<'_>) -> Solved {
        let place = m.remainder.as_str();
        if place.is_empty() || place.eq_ignore_ascii_case("local") {
            return self.local(req).await;
        }

        if place.len() == 5 {
            if let Ok(zip) = place.parse::<u32>() {
                return super::settle(self.fetcher.fetch_by_zip(zip).await);
            }
        }

        super::settle(self.fetcher.fetch_by_city(place).await)
    }
}
