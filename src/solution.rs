//! Answer type tags and solution payloads.
//!
//! [`AnswerType`] is what a renderer switches on. [`Solution`] is the payload;
//! it serializes untagged, so the envelope's `type` field is the only
//! discriminator on the wire. Replaying a cached envelope therefore goes
//! through [`decode_solution`], a closed `AnswerType → variant` mapping that
//! the compiler keeps exhaustive.

use crate::answers::{Age, Birthday, Conversion, CountryCodes, CountrySeries, Count, Death, Digest, Nutrition, WorldClock};
use crate::fetch::{breach, congress, discography, parcel, status, stock, weather, wikipedia};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

macro_rules! answer_types {
    ($($variant:ident => $tag:literal),+ $(,)?) => {
        /// Stable type tags. The strings are part of the wire format.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum AnswerType {
            $(#[serde(rename = $tag)] $variant,)+
        }

        impl AnswerType {
            pub const ALL: &'static [AnswerType] = &[$(AnswerType::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(AnswerType::$variant => $tag,)+
                }
            }
        }
    };
}

answer_types! {
    Birthstone => "birthstone",
    Breach => "breach",
    CamelCase => "camelcase",
    Characters => "characters",
    Congress => "congress",
    CountryCode => "country code",
    Currency => "currency",
    Discography => "discography",
    FedEx => "fedex",
    Ups => "ups",
    Usps => "usps",
    Gdp => "gdp",
    Hash => "hash",
    Population => "population",
    Prime => "prime",
    Reverse => "reverse",
    Status => "status",
    StockQuote => "stock quote",
    UserAgent => "user agent",
    Weather => "weather",
    LocalWeather => "local weather",
    Nutrition => "wikidata nutrition",
    Wikipedia => "wikipedia",
    Age => "wikidata age",
    Birthday => "wikidata birthday",
    Clock => "wikidata clock",
    Death => "wikidata death",
    Height => "wikidata height",
    Weight => "wikidata weight",
    Wikiquote => "wikiquote",
    Wiktionary => "wiktionary",
}

impl fmt::Display for AnswerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnswerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnswerType::ALL.iter().copied().find(|t| t.as_str() == s).ok_or_else(|| format!("unknown answer type '{s}'"))
    }
}

/// Typed answer payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Solution {
    Text(String),
    Breach(breach::Response),
    Characters(Count),
    Congress(congress::Response),
    CountryCode(CountryCodes),
    Currency(Conversion),
    Discography(Vec<discography::Album>),
    Parcel(parcel::Response),
    Series(CountrySeries),
    Hash(Digest),
    Status(status::Response),
    Stock(stock::Quote),
    Weather(weather::Weather),
    Nutrition(Nutrition),
    Wikipedia(wikipedia::Item),
    Age(Age),
    Birthday(Birthday),
    Death(Death),
    Clock(WorldClock),
    Quantities(Vec<wikipedia::Quantity>),
    Quotes(Vec<String>),
    Definitions(wikipedia::Wiktionary),
}

macro_rules! solution_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(impl From<$ty> for Solution {
            fn from(value: $ty) -> Self {
                Solution::$variant(value)
            }
        })+
    };
}

solution_from! {
    String => Text,
    breach::Response => Breach,
    Count => Characters,
    congress::Response => Congress,
    CountryCodes => CountryCode,
    Conversion => Currency,
    Vec<discography::Album> => Discography,
    parcel::Response => Parcel,
    CountrySeries => Series,
    Digest => Hash,
    status::Response => Status,
    stock::Quote => Stock,
    weather::Weather => Weather,
    Nutrition => Nutrition,
    wikipedia::Item => Wikipedia,
    Age => Age,
    Birthday => Birthday,
    Death => Death,
    WorldClock => Clock,
    wikipedia::Wiktionary => Definitions,
}

fn decode<T: DeserializeOwned>(value: Value, variant: fn(T) -> Solution) -> Result<Solution, serde_json::Error> {
    serde_json::from_value(value).map(variant)
}

/// Rebuild a solution from its JSON form, using the envelope's type tag to
/// pick the variant.
pub fn decode_solution(answer_type: AnswerType, value: Value) -> Result<Solution, serde_json::Error> {
    use AnswerType as T;

    match answer_type {
        T::Birthstone | T::CamelCase | T::Prime | T::Reverse | T::UserAgent => decode(value, Solution::Text),
        T::Breach => decode(value, Solution::Breach),
        T::Characters => decode(value, Solution::Characters),
        T::Congress => decode(value, Solution::Congress),
        T::CountryCode => decode(value, Solution::CountryCode),
        T::Currency => decode(value, Solution::Currency),
        T::Discography => decode(value, Solution::Discography),
        T::FedEx | T::Ups | T::Usps => decode(value, Solution::Parcel),
        T::Gdp | T::Population => decode(value, Solution::Series),
        T::Hash => decode(value, Solution::Hash),
        T::Status => decode(value, Solution::Status),
        T::StockQuote => decode(value, Solution::Stock),
        T::Weather | T::LocalWeather => decode(value, Solution::Weather),
        T::Nutrition => decode(value, Solution::Nutrition),
        T::Wikipedia => decode(value, Solution::Wikipedia),
        T::Age => decode(value, Solution::Age),
        T::Birthday => decode(value, Solution::Birthday),
        T::Death => decode(value, Solution::Death),
        T::Clock => decode(value, Solution::Clock),
        T::Height | T::Weight => decode(value, Solution::Quantities),
        T::Wikiquote => decode(value, Solution::Quotes),
        T::Wiktionary => decode(value, Solution::Definitions),
    }
}
