//! Answer modules.
//!
//! Each submodule is one [`Answerer`](crate::Answerer). Modules without
//! external data (birthstone, hash, prime, ...) are plain unit structs;
//! fetcher-backed modules take their collaborators at construction.
//!
//! [`standard`] assembles the built-in registry in its documented order.
//! Registration order is precedence: `currency` must see "usd to eur" before
//! anything broader does, and `wikipedia` matches everything so it is last.

mod birthstone;
mod breach;
mod camelcase;
mod characters;
mod congress;
mod countries;
mod country_code;
mod currency;
mod discography;
mod gdp;
mod hash;
mod nutrition;
mod parcel;
mod population;
mod prime;
mod reverse;
mod status;
mod stock;
mod user_agent;
mod weather;
mod wikipedia;

#[cfg(test)]
mod tests;

pub use birthstone::Birthstone;
pub use breach::Breach;
pub use camelcase::CamelCase;
pub use characters::{Characters, Count};
pub use congress::Congress;
pub use countries::{Country, CountrySeries};
pub use country_code::{CountryCode, CountryCodes};
pub use currency::{Conversion, Currency, CurrencyConverter};
pub use discography::Discography;
pub use gdp::Gdp;
pub use hash::{Digest, Hash};
pub use nutrition::{NUTRIENTS, Nutrient, Nutrition, NutritionFacts, nutrient};
pub use parcel::Parcel;
pub use population::Population;
pub use prime::Prime;
pub use reverse::Reverse;
pub use status::Status;
pub use stock::Stock;
pub use user_agent::UserAgent;
pub use weather::Weather;
pub use wikipedia::{Age, Birthday, Death, Place, Wikipedia, WorldClock};

use crate::answerer::{Answerer, Solved};
use crate::clock::Clock;
use crate::engine::Registry;
use crate::error::{FetchError, RegistryError};
use crate::fetch::breach::BreachFetcher;
use crate::fetch::congress::CongressFetcher;
use crate::fetch::currency::CurrencyFetcher;
use crate::fetch::discography::DiscographyFetcher;
use crate::fetch::econ::{GdpFetcher, PopulationFetcher};
use crate::fetch::location::LocationFetcher;
use crate::fetch::nutrition::NutritionFetcher;
use crate::fetch::parcel::ParcelFetcher;
use crate::fetch::status::StatusFetcher;
use crate::fetch::stock::StockFetcher;
use crate::fetch::timezone::TimeZoneFetcher;
use crate::fetch::weather::WeatherFetcher;
use crate::fetch::wikipedia::WikipediaFetcher;
use crate::solution::Solution;
use chrono::{Datelike, NaiveDate};
use std::sync::Arc;

/// Provider integrations. A module whose required fetchers are missing is
/// left out of [`standard`].
#[derive(Clone, Default)]
pub struct Fetchers {
    pub breach: Option<Arc<dyn BreachFetcher>>,
    pub congress: Option<Arc<dyn CongressFetcher>>,
    pub currency: Option<Arc<dyn CurrencyFetcher>>,
    pub discography: Option<Arc<dyn DiscographyFetcher>>,
    pub gdp: Option<Arc<dyn GdpFetcher>>,
    pub location: Option<Arc<dyn LocationFetcher>>,
    pub nutrition: Option<Arc<dyn NutritionFetcher>>,
    pub parcel: Option<Arc<dyn ParcelFetcher>>,
    pub population: Option<Arc<dyn PopulationFetcher>>,
    pub status: Option<Arc<dyn StatusFetcher>>,
    pub stock: Option<Arc<dyn StockFetcher>>,
    pub timezone: Option<Arc<dyn TimeZoneFetcher>>,
    pub weather: Option<Arc<dyn WeatherFetcher>>,
    pub wikipedia: Option<Arc<dyn WikipediaFetcher>>,
}

/// The built-in registry.
pub fn standard(fetchers: &Fetchers) -> Result<Registry, RegistryError> {
    let mut modules: Vec<Arc<dyn Answerer>> = vec![Arc::new(Birthstone)];

    if let Some(f) = &fetchers.breach {
        modules.push(Arc::new(Breach::new(f.clone())));
    }
    modules.push(Arc::new(CamelCase));
    modules.push(Arc::new(Characters));
    if let Some(f) = &fetchers.congress {
        modules.push(Arc::new(Congress::new(f.clone())));
    }
    modules.push(Arc::new(CountryCode));
    if let Some(f) = &fetchers.currency {
        modules.push(Arc::new(CurrencyConverter::new(f.clone())));
    }
    if let Some(f) = &fetchers.discography {
        modules.push(Arc::new(Discography::new(f.clone())));
    }
    if let Some(f) = &fetchers.parcel {
        modules.push(Arc::new(Parcel::new(f.clone())));
    }
    if let Some(f) = &fetchers.gdp {
        modules.push(Arc::new(Gdp::new(f.clone())));
    }
    modules.push(Arc::new(Hash));
    if let Some(f) = &fetchers.population {
        modules.push(Arc::new(Population::new(f.clone())));
    }
    modules.push(Arc::new(Prime));
    modules.push(Arc::new(Reverse));
    if let Some(f) = &fetchers.status {
        modules.push(Arc::new(Status::new(f.clone())));
    }
    if let Some(f) = &fetchers.stock {
        modules.push(Arc::new(Stock::new(f.clone())));
    }
    modules.push(Arc::new(UserAgent));
    if let Some(f) = &fetchers.weather {
        modules.push(Arc::new(Weather::new(f.clone(), fetchers.location.clone())));
    }
    if let (Some(wiki), Some(f)) = (&fetchers.wikipedia, &fetchers.nutrition) {
        modules.push(Arc::new(NutritionFacts::new(wiki.clone(), f.clone())));
    }
    if let Some(wiki) = &fetchers.wikipedia {
        modules.push(Arc::new(Wikipedia::new(wiki.clone(), fetchers.timezone.clone(), fetchers.location.clone())));
    }

    Registry::new(modules)
}

/// Turn a fetch result into a module outcome.
pub(crate) fn settle<T: Into<Solution>>(result: Result<T, FetchError>) -> Solved {
    match result {
        Ok(value) => Solved::answer(value),
        Err(err) => Solved::error(err),
    }
}

/// Strip one pair of surrounding double quotes, then single quotes.
pub(crate) fn strip_quotes(text: &str) -> &str {
    let mut text = text;
    for quote in ['"', '\''] {
        text = text.strip_prefix(quote).unwrap_or(text);
        text = text.strip_suffix(quote).unwrap_or(text);
    }
    text
}

/// "{country} gdp", "{country} gdp of", "gdp of {country}", "gdp {country}"
/// for every spelling.
pub(crate) fn country_patterns(words: &[&str]) -> Vec<String> {
    words
        .iter()
        .flat_map(|word| {
            let w = regex::escape(word);
            [
                format!(r"^(?P<country>.*) {w}$"),
                format!(r"^(?P<country>.*) {w} of$"),
                format!(r"^{w} of (?P<country>.*)$"),
                format!(r"^{w} (?P<country>.*)$"),
            ]
        })
        .collect()
}

/// January 1st `years` years ago through January 1st of the current year.
pub(crate) fn history_range(clock: &dyn Clock, years: i32) -> (NaiveDate, NaiveDate) {
    let year = clock.now().year();
    let january = |y| NaiveDate::from_ymd_opt(y, 1, 1).unwrap_or(NaiveDate::MIN);
    (january(year - years), january(year))
}
