use crate::answerer::{Answerer, Requires, Solved};
use crate::context::Request;
use crate::engine::{Match, affixes, catch_all};
use crate::error::{AnswerError, FetchError};
use crate::fetch::location::LocationFetcher;
use crate::fetch::timezone::TimeZoneFetcher;
use crate::fetch::wikipedia::{Item, WikiDate, WikipediaFetcher};
use crate::solution::{AnswerType, Solution};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Wikidata "instance of" ids treated as a city.
const CITY: &[&str] = &["Q515", "Q1093829"];
const COUNTRY: &str = "Q6256";

const LOCAL_CLOCK: &[&str] = &["clock", "current time", "time in", "time"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Birthday {
    pub birthday: WikiDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Death {
    pub death: WikiDate,
}

/// Current age, or age at death when `death` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Age {
    pub birthday: WikiDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death: Option<WikiDate>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Place {
    pub city: String,
    pub state: String,
    pub country: String,
}

/// The current time somewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldClock {
    pub time: DateTime<FixedOffset>,
    pub zone: String,
    pub location: Place,
}

/// Wikipedia summaries and Wikidata facts. Matches anything, so it is always
/// the last module.
pub struct Wikipedia {
    fetcher: Arc<dyn WikipediaFetcher>,
    timezone: Option<Arc<dyn TimeZoneFetcher>>,
    location: Option<Arc<dyn LocationFetcher>>,
}

impl Wikipedia {
    pub fn new(
        fetcher: Arc<dyn WikipediaFetcher>,
        timezone: Option<Arc<dyn TimeZoneFetcher>>,
        location: Option<Arc<dyn LocationFetcher>>,
    ) -> Self {
        Self { fetcher, timezone, location }
    }

    async fn first_item(&self, query: &str, req: &Request<'_>) -> Result<Item, AnswerError> {
        let items = self.fetcher.fetch(query, req.language()).await?;
        items.into_iter().next().ok_or_else(|| AnswerError::NotFound(query.to_string()))
    }

    async fn clock_at(&self, latitude: f64, longitude: f64, location: Place, req: &Request<'_>) -> Solved {
        let Some(timezone) = &self.timezone else {
            return Solved::error(FetchError::Unavailable("time zone lookup".to_string()));
        };
        let zone = match timezone.fetch(latitude, longitude).await {
            Ok(zone) => zone,
            Err(err) => return Solved::error(err),
        };
        let Some(offset) = zone.offset() else {
            return Solved::error(FetchError::Decode {
                provider: zone.name.clone(),
                message: format!("utc offset {} out of range", zone.utc_offset_seconds),
            });
        };

        let clock = WorldClock { time: req.clock().now().with_timezone(&offset), zone: zone.name, location };
        Solved::answer(clock).retype(AnswerType::Clock).uncached()
    }

    async fn local_clock(&self, req: &Request<'_>) -> Solved {
        let Some(locator) = &self.location else {
            return Solved::error(FetchError::Unavailable("location lookup".to_string()));
        };
        let Some(ip) = req.ip() else {
            return Solved::error(AnswerError::NotFound("caller location".to_string()));
        };
        let city = match locator.fetch(ip).await {
            Ok(city) => city,
            Err(err) => return Solved::error(err),
        };

        let place = Place { city: city.name, state: city.state, country: city.country };
        self.clock_at(city.latitude, city.longitude, place, req).await
    }

    async fn place_clock(&self, item: Item, req: &Request<'_>) -> Solved {
        let claims = &item.claims;
        let mut place = Place::default();
        if claims.instance.iter().any(|id| CITY.contains(&id.as_str())) {
            place.city = item.label.clone();
            place.state = claims.state.first().cloned().unwrap_or_default();
            place.country = claims.country.first().cloned().unwrap_or_default();
        } else if claims.instance.iter().any(|id| id == COUNTRY) {
            place.country = item.label.clone();
            place.city = claims.capital.first().cloned().unwrap_or_default();
        }

        let Some(coordinate) = claims.coordinate.first().copied() else {
            return Solved::error(AnswerError::NotFound(item.title.clone()));
        };
        self.clock_at(coordinate.latitude, coordinate.longitude, place, req).await
    }
}

#[async_trait]
impl Answerer for Wikipedia {
    fn answer_type(&self) -> AnswerType {
        AnswerType::Wikipedia
    }

    fn triggers(&self) -> Vec<String> {
        let mut rules = affixes(&[
            "how old is",
            "how tall was",
            "how tall is",
            "current time",
            "time in",
            "definition",
            "birthday",
            "quotes",
            "height",
            "weight",
            "define",
            "quote",
            "clock",
            "death",
            "died",
            "born",
            "mass",
            "weigh",
            "time",
            "age",
        ]);
        rules.push(catch_all());
        rules
    }

    fn cacheable(&self) -> bool {
        true
    }

    fn requires(&self) -> Requires {
        Requires::LOCATION
    }

    async fn solve(&self, m: &Match, req: &Request<'_>) -> Solved {
        let subject = m.remainder.trim_end_matches('?').trim();
        let trigger = m.trigger.as_str();

        if trigger.is_empty() && LOCAL_CLOCK.contains(&subject.to_lowercase().as_str()) {
            return self.local_clock(req).await;
        }

        let item = match self.first_item(subject, req).await {
            Ok(item) => item,
            Err(err) => return Solved::error(err),
        };
        let missing = || Solved::error(AnswerError::NotFound(subject.to_string()));

        match trigger {
            "age" | "how old is" => match item.claims.birthday.first() {
                Some(birthday) => {
                    let age = Age { birthday: birthday.clone(), death: item.claims.death.first().cloned() };
                    Solved::answer(age).retype(AnswerType::Age)
                }
                None => missing(),
            },
            "birthday" | "born" => match item.claims.birthday.first() {
                Some(birthday) => Solved::answer(Birthday { birthday: birthday.clone() }).retype(AnswerType::Birthday),
                None => missing(),
            },
            "death" | "died" => match item.claims.death.first() {
                Some(death) => Solved::answer(Death { death: death.clone() }).retype(AnswerType::Death),
                None => missing(),
            },
            "height" | "how tall is" | "how tall was" if !item.claims.height.is_empty() => {
                Solved::answer(Solution::Quantities(item.claims.height)).retype(AnswerType::Height)
            }
            "weight" | "mass" | "weigh" if !item.claims.weight.is_empty() => {
                Solved::answer(Solution::Quantities(item.claims.weight)).retype(AnswerType::Weight)
            }
            "quote" | "quotes" if !item.quotes.is_empty() => {
                Solved::answer(Solution::Quotes(item.quotes)).retype(AnswerType::Wikiquote)
            }
            "define" | "definition" => match item.wiktionary {
                Some(entry) if !entry.definitions.is_empty() => Solved::answer(entry).retype(AnswerType::Wiktionary),
                _ => missing(),
            },
            "clock" | "current time" | "time in" | "time" => self.place_clock(item, req).await,
            "" => Solved::answer(item),
            _ => missing(),
        }
    }
}
