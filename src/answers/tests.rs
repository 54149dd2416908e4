//! End-to-end answer scenarios through the standard registry, with canned
//! fetchers standing in for the providers.

use super::{
    Age, Count, CountryCodes, CountrySeries, CurrencyConverter, Digest, Fetchers, Nutrition, Place, UserAgent,
    WorldClock, standard,
};
use crate::answerer::{Answerer, Requires};
use crate::clock::ManualClock;
use crate::config::{CacheConfig, Config};
use crate::context::{LanguageTag, Request, RequestContext};
use crate::engine::{CacheStatus, Dispatcher, Match, MemoryCache};
use crate::envelope::Envelope;
use crate::error::{AnswerError, FetchError, PRIME_CEILING};
use crate::fetch::FetchResult;
use crate::fetch::breach::{self, BreachFetcher};
use crate::fetch::congress::{CongressFetcher, Location, Response as Delegation};
use crate::fetch::currency::{CurrencyFetcher, Rates};
use crate::fetch::discography::{Album, DiscographyFetcher};
use crate::fetch::econ::{GdpFetcher, Observation, Series};
use crate::fetch::location::{City, LocationFetcher};
use crate::fetch::nutrition::{Food, Listing, NutritionFetcher, Response as FoodReport};
use crate::fetch::parcel::{Carrier, ParcelFetcher, Response as Shipment};
use crate::fetch::status::{self, StatusFetcher};
use crate::fetch::stock::{Last, Quote, StockFetcher};
use crate::fetch::timezone::{TimeZoneFetcher, Zone};
use crate::fetch::weather::{self, Conditions, WeatherFetcher};
use crate::fetch::wikipedia::{Claims, Coordinate, Item, WikiDate, WikipediaFetcher};
use crate::solution::{AnswerType, Solution};
use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

const CALLER: IpAddr = IpAddr::V4(Ipv4Addr::new(161, 59, 224, 138));

// --- canned fetchers ---------------------------------------------------------

#[derive(Default)]
struct FakeEcon {
    calls: Mutex<Vec<(String, NaiveDate, NaiveDate)>>,
}

#[async_trait]
impl GdpFetcher for FakeEcon {
    async fn fetch(&self, country: &str, from: NaiveDate, to: NaiveDate) -> FetchResult<Series> {
        self.calls.lock().push((country.to_string(), from, to));
        let d = |y| NaiveDate::from_ymd_opt(y, 1, 1).unwrap();
        Ok(Series {
            history: vec![
                Observation { date: d(2016), value: 2.47e12 },
                Observation { date: d(1968), value: 1.29e11 },
            ],
            provider: "World Bank".into(),
        })
    }
}

struct FakeWeather;

fn forecast(city: String) -> weather::Weather {
    let observation = weather::Observation {
        date: Utc.with_ymd_and_hms(2018, 4, 1, 18, 0, 0).unwrap(),
        conditions: Conditions::Clear,
        description: "clear sky".into(),
        temperature: 61.0,
        low: 45.0,
        high: 66.0,
        wind: 4.0,
        humidity: 20.0,
    };
    weather::Weather { city, current: observation, forecast: Vec::new(), time_zone: None, provider: "Yr.no".into() }
}

#[async_trait]
impl WeatherFetcher for FakeWeather {
    async fn fetch_by_city(&self, city: &str) -> FetchResult<weather::Weather> {
        Ok(forecast(format!("city:{city}")))
    }

    async fn fetch_by_zip(&self, zip: u32) -> FetchResult<weather::Weather> {
        Ok(forecast(format!("zip:{zip}")))
    }

    async fn fetch_by_lat_long(&self, latitude: f64, longitude: f64, time_zone: &str) -> FetchResult<weather::Weather> {
        Ok(forecast(format!("{latitude},{longitude},{time_zone}")))
    }
}

struct FakeLocation;

#[async_trait]
impl LocationFetcher for FakeLocation {
    async fn fetch(&self, ip: IpAddr) -> FetchResult<City> {
        if ip != CALLER {
            return Err(FetchError::NotFound(ip.to_string()));
        }
        Ok(City {
            name: "Denver".into(),
            state: "Colorado".into(),
            country: "United States".into(),
            latitude: 39.74,
            longitude: -104.99,
            time_zone: "America/Denver".into(),
        })
    }
}

struct FakeTimeZone;

#[async_trait]
impl TimeZoneFetcher for FakeTimeZone {
    async fn fetch(&self, _latitude: f64, _longitude: f64) -> FetchResult<Zone> {
        Ok(Zone { name: "America/Denver".into(), utc_offset_seconds: -6 * 3600 })
    }
}

struct FakeCongress;

#[async_trait]
impl CongressFetcher for FakeCongress {
    async fn fetch_senators(&self, location: &Location) -> FetchResult<Delegation> {
        Ok(Delegation { location: location.clone(), members: Vec::new(), provider: "senators".into() })
    }

    async fn fetch_members(&self, location: &Location) -> FetchResult<Delegation> {
        Ok(Delegation { location: location.clone(), members: Vec::new(), provider: "house".into() })
    }
}

struct FakeParcel;

#[async_trait]
impl ParcelFetcher for FakeParcel {
    async fn fetch(&self, carrier: Carrier, number: &str) -> FetchResult<Shipment> {
        Ok(Shipment {
            carrier,
            tracking_number: number.to_string(),
            updates: Vec::new(),
            expected: None,
            url: format!("https://track.example/{number}"),
        })
    }
}

struct FakeWikipedia;

fn date(value: &str) -> WikiDate {
    WikiDate { value: value.into(), calendar: "gregorian".into() }
}

#[async_trait]
impl WikipediaFetcher for FakeWikipedia {
    async fn fetch(&self, query: &str, _language: &LanguageTag) -> FetchResult<Vec<Item>> {
        let item = match query.to_lowercase().as_str() {
            "jimi hendrix" => Item {
                title: "Jimi Hendrix".into(),
                label: "Jimi Hendrix".into(),
                text: "James Marshall \"Jimi\" Hendrix was an American rock guitarist.".into(),
                claims: Claims {
                    birthday: vec![date("+1942-11-27T00:00:00Z")],
                    death: vec![date("+1970-09-18T00:00:00Z")],
                    ..Claims::default()
                },
                quotes: vec!["Knowledge speaks, but wisdom listens.".into()],
                wiktionary: None,
            },
            "denver" => Item {
                title: "Denver".into(),
                label: "Denver".into(),
                text: "Denver is the capital of Colorado.".into(),
                claims: Claims {
                    instance: vec!["Q515".into()],
                    state: vec!["Colorado".into()],
                    country: vec!["United States".into()],
                    coordinate: vec![Coordinate { latitude: 39.74, longitude: -104.99 }],
                    ..Claims::default()
                },
                quotes: Vec::new(),
                wiktionary: None,
            },
            _ => return Ok(Vec::new()),
        };
        Ok(vec![item])
    }
}

struct FakeNutrition;

#[async_trait]
impl NutritionFetcher for FakeNutrition {
    async fn lookup(&self, query: &str) -> FetchResult<Vec<Listing>> {
        Err(FetchError::Unavailable(format!("lookup {query}")))
    }

    async fn fetch(&self, ndbnos: &[String]) -> FetchResult<FoodReport> {
        let foods = ndbnos
            .iter()
            .map(|ndbno| Food { ndbno: ndbno.clone(), name: "Egg, whole, raw, fresh".into(), nutrients: Vec::new() })
            .collect();
        Ok(FoodReport { foods, provider: "USDA".into() })
    }
}

struct FakeCurrency;

#[async_trait]
impl CurrencyFetcher for FakeCurrency {
    async fn fetch(&self, base: &str) -> FetchResult<Rates> {
        let rates = BTreeMap::from([("EUR".to_string(), 0.5), ("GBP".to_string(), 0.25)]);
        Ok(Rates {
            base: base.to_string(),
            date: NaiveDate::from_ymd_opt(2018, 3, 29).unwrap(),
            rates,
            provider: "ECB".into(),
        })
    }
}

struct FakeDiscography;

#[async_trait]
impl DiscographyFetcher for FakeDiscography {
    async fn fetch(&self, artist: &str) -> FetchResult<Vec<Album>> {
        let album = |name: &str, y, m, d| Album {
            name: name.into(),
            published: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            image: None,
        };
        match artist.to_lowercase().as_str() {
            "metallica" => Ok(vec![album("Ride the Lightning", 1984, 7, 30), album("Kill 'Em All", 1983, 7, 25)]),
            "offline" => Err(FetchError::Unavailable("discography".into())),
            _ => Ok(Vec::new()),
        }
    }
}

struct FakeStock;

#[async_trait]
impl StockFetcher for FakeStock {
    async fn fetch(&self, ticker: &str) -> FetchResult<Quote> {
        if ticker != "AAPL" {
            return Err(FetchError::NotFound(ticker.to_string()));
        }
        Ok(Quote {
            ticker: ticker.to_string(),
            name: "Apple Inc.".into(),
            exchange: "NASDAQ".into(),
            last: Last {
                price: 167.78,
                time: Utc.with_ymd_and_hms(2018, 3, 29, 20, 0, 0).unwrap(),
                change: 0.8,
                change_percent: 0.48,
            },
            history: Vec::new(),
            provider: "IEX".into(),
        })
    }
}

struct FakeBreach;

#[async_trait]
impl BreachFetcher for FakeBreach {
    async fn fetch(&self, account: &str) -> FetchResult<breach::Response> {
        if account == "down@example.com" {
            return Err(FetchError::Http { provider: "HIBP".into(), message: "503".into() });
        }
        Ok(breach::Response { account: account.to_string(), breaches: Vec::new(), provider: "HIBP".into() })
    }
}

struct FakeStatus;

#[async_trait]
impl StatusFetcher for FakeStatus {
    async fn fetch(&self, domain: &str) -> FetchResult<status::Response> {
        if domain != "google.com" {
            return Err(FetchError::Http { provider: "isitup".into(), message: format!("{domain} timed out") });
        }
        Ok(status::Response {
            domain: domain.to_string(),
            port: 80,
            ip: "172.217.4.46".into(),
            status_code: Some(200),
            response_time: 0.01,
            up: true,
            provider: "isitup".into(),
        })
    }
}

// --- harness -----------------------------------------------------------------

fn clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2018, 4, 1, 18, 58, 0).unwrap()))
}

fn fetchers(econ: Arc<FakeEcon>) -> Fetchers {
    let wikipedia: Arc<dyn WikipediaFetcher> = Arc::new(FakeWikipedia);
    Fetchers {
        breach: Some(Arc::new(FakeBreach)),
        congress: Some(Arc::new(FakeCongress)),
        currency: Some(Arc::new(FakeCurrency)),
        discography: Some(Arc::new(FakeDiscography)),
        gdp: Some(econ),
        location: Some(Arc::new(FakeLocation)),
        nutrition: Some(Arc::new(FakeNutrition)),
        parcel: Some(Arc::new(FakeParcel)),
        status: Some(Arc::new(FakeStatus)),
        stock: Some(Arc::new(FakeStock)),
        timezone: Some(Arc::new(FakeTimeZone)),
        weather: Some(Arc::new(FakeWeather)),
        wikipedia: Some(wikipedia),
        ..Fetchers::default()
    }
}

fn dispatcher() -> Dispatcher {
    let registry = standard(&fetchers(Arc::default())).unwrap();
    Dispatcher::new(registry).with_clock(clock())
}

async fn ask(dispatcher: &Dispatcher, query: &str) -> Envelope {
    dispatcher.answer(query, &RequestContext::default().with_ip(CALLER)).await
}

fn text(env: &Envelope) -> &str {
    match &env.solution {
        Some(Solution::Text(s)) => s.as_str(),
        other => panic!("expected a text solution, got {other:?}"),
    }
}

// --- scenarios ---------------------------------------------------------------

#[test]
fn standard_registry_order() {
    let registry = standard(&fetchers(Arc::default())).unwrap();
    let names: Vec<_> = registry.descriptors().map(|d| d.name()).collect();
    assert_eq!(
        names,
        [
            "birthstone",
            "breach",
            "camelcase",
            "characters",
            "congress",
            "country code",
            "currency",
            "discography",
            "fedex",
            "gdp",
            "hash",
            "prime",
            "reverse",
            "status",
            "stock quote",
            "user agent",
            "weather",
            "wikidata nutrition",
            "wikipedia",
        ]
    );
}

#[tokio::test]
async fn reverse_is_case_insensitive() {
    let d = dispatcher();
    for query in ["REVERSE hello", "reverse hello", "hello reverse", "reverse \"hello\""] {
        let env = ask(&d, query).await;
        assert_eq!(env.answer_type, Some(AnswerType::Reverse), "{query}");
        assert_eq!(text(&env), "olleh", "{query}");
        assert!(env.cache);
    }
}

#[tokio::test]
async fn prime_ranges() {
    let d = dispatcher();
    let cases = [
        (
            "prime numbers between 5 and 121",
            "5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97, 101, 103, 107, 109, 113",
        ),
        ("prime number between 537 and 614", "541, 547, 557, 563, 569, 571, 577, 587, 593, 599, 601, 607"),
        ("prime number between 614 and 537", "541, 547, 557, 563, 569, 571, 577, 587, 593, 599, 601, 607"),
        ("prime numbers between -484 and 87", "2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83"),
    ];
    for (query, expected) in cases {
        let env = ask(&d, query).await;
        assert_eq!(env.answer_type, Some(AnswerType::Prime), "{query}");
        assert_eq!(env.err, None, "{query}");
        assert_eq!(text(&env), expected, "{query}");
    }
}

#[tokio::test]
async fn prime_ceiling_returns_the_truncated_list() {
    let env = ask(&dispatcher(), "prime numbers between 999764 and 1000351").await;
    assert_eq!(env.err, Some(AnswerError::PrimeCeiling { max: PRIME_CEILING }));
    let list: Vec<&str> = text(&env).split(", ").collect();
    assert_eq!(list.len(), 14);
    assert_eq!(list.first(), Some(&"999769"));
    assert_eq!(list.last(), Some(&"999983"));
    assert!(!env.is_storable());
}

#[tokio::test]
async fn oversized_prime_bounds_clamp_to_the_ceiling() {
    let d = dispatcher();

    let env = ask(&d, "prime numbers between 999764 and 99999999999999999999").await;
    assert_eq!(env.err, Some(AnswerError::PrimeCeiling { max: PRIME_CEILING }));
    assert_eq!(text(&env).split(", ").count(), 14);

    let env = ask(&d, "prime numbers between 999990 and 99999999999999999999").await;
    assert_eq!(env.err, Some(AnswerError::PrimeCeiling { max: PRIME_CEILING }));
    assert!(env.solution.is_none());
}

#[tokio::test]
async fn gdp_history() {
    let econ = Arc::new(FakeEcon::default());
    let d = Dispatcher::new(standard(&fetchers(econ.clone())).unwrap()).with_clock(clock());

    let env = ask(&d, "gdp of france").await;
    let Some(Solution::Series(CountrySeries { country, history, .. })) = &env.solution else {
        panic!("expected a series, got {:?}", env.solution);
    };
    assert_eq!(country, "France");
    assert!(history.windows(2).all(|w| w[0].date <= w[1].date));

    let calls = econ.calls.lock();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "FR");
    assert_eq!(calls[0].1, NaiveDate::from_ymd_opt(1968, 1, 1).unwrap());
    assert_eq!(calls[0].2, NaiveDate::from_ymd_opt(2018, 1, 1).unwrap());
}

#[tokio::test]
async fn gdp_of_an_unknown_country() {
    let econ = Arc::new(FakeEcon::default());
    let d = Dispatcher::new(standard(&fetchers(econ.clone())).unwrap());

    let env = ask(&d, "gdp of atlantis").await;
    assert!(env.triggered);
    assert_eq!(env.answer_type, Some(AnswerType::Gdp));
    assert_eq!(env.err, Some(AnswerError::InvalidCountry("atlantis".into())));
    assert!(env.solution.is_none());
    assert!(econ.calls.lock().is_empty());
}

#[tokio::test]
async fn earlier_modules_win_over_the_catch_all() {
    let d = dispatcher();
    assert_eq!(ask(&d, "camelcase hello world").await.answer_type, Some(AnswerType::CamelCase));
    assert_eq!(ask(&d, "jimi hendrix").await.answer_type, Some(AnswerType::Wikipedia));
}

#[tokio::test]
async fn nothing_triggers_without_a_catch_all() {
    let d = Dispatcher::new(standard(&Fetchers::default()).unwrap());
    let env = d.answer("what is the meaning of life", &RequestContext::default()).await;
    assert_eq!(env, Envelope::untriggered());
    assert_eq!(d.stats().solves, 0);
}

#[tokio::test]
async fn cached_answers_expire() {
    let clock = clock();
    let config = Config { cache: CacheConfig { enabled: true, ttl_secs: 30 }, ..Config::default() };
    let d = Dispatcher::new(standard(&Fetchers::default()).unwrap())
        .with_config(config)
        .with_cache(Arc::new(MemoryCache::new(clock.clone())))
        .with_clock(clock.clone());
    let ctx = RequestContext::default();

    let first = d.answer_verbose("birthstone april", &ctx).await;
    assert_eq!(first.metrics.cache, CacheStatus::Stored);
    let second = d.answer_verbose("birthstone april", &ctx).await;
    assert_eq!(second.metrics.cache, CacheStatus::Hit);
    assert_eq!(second.envelope, first.envelope);

    clock.advance(chrono::Duration::seconds(31));
    let third = d.answer_verbose("birthstone april", &ctx).await;
    assert_eq!(third.metrics.cache, CacheStatus::Stored);
}

#[tokio::test]
async fn weather_by_place() {
    let d = dispatcher();
    let city = |env: &Envelope| match &env.solution {
        Some(Solution::Weather(w)) => w.city.clone(),
        other => panic!("expected weather, got {other:?}"),
    };

    let env = ask(&d, "weather in paris").await;
    assert_eq!(env.answer_type, Some(AnswerType::Weather));
    assert_eq!(city(&env), "city:paris");

    let env = ask(&d, "weather 80202").await;
    assert_eq!(city(&env), "zip:80202");

    let env = ask(&d, "weather").await;
    assert_eq!(env.answer_type, Some(AnswerType::LocalWeather));
    assert_eq!(city(&env), "39.74,-104.99,America/Denver");
}

#[tokio::test]
async fn local_weather_needs_a_caller_address() {
    let env = dispatcher().answer("weather", &RequestContext::default()).await;
    assert_eq!(env.err, Some(AnswerError::NotFound("caller location".into())));
}

#[tokio::test]
async fn congress_by_state() {
    let d = dispatcher();

    let env = ask(&d, "senators atlantis").await;
    assert_eq!(env.err, Some(AnswerError::InvalidState("atlantis".into())));

    let env = ask(&d, "colorado senators").await;
    let Some(Solution::Congress(delegation)) = &env.solution else {
        panic!("expected a delegation, got {:?}", env.solution);
    };
    assert_eq!(delegation.location.short, "CO");
    assert_eq!(delegation.provider, "senators");

    let env = ask(&d, "house members new mexico").await;
    let Some(Solution::Congress(delegation)) = &env.solution else {
        panic!("expected a delegation, got {:?}", env.solution);
    };
    assert_eq!(delegation.location.short, "NM");
    assert_eq!(delegation.provider, "house");
}

#[tokio::test]
async fn parcels_are_typed_by_carrier() {
    let d = dispatcher();
    let cases = [
        ("1z9999w99999999999", AnswerType::Ups, "1Z9999W99999999999"),
        ("usps 9400111899223100000000", AnswerType::Usps, "9400111899223100000000"),
        ("track fedex 123456789012", AnswerType::FedEx, "123456789012"),
    ];
    for (query, answer_type, number) in cases {
        let env = ask(&d, query).await;
        assert_eq!(env.answer_type, Some(answer_type), "{query}");
        let Some(Solution::Parcel(shipment)) = &env.solution else {
            panic!("expected a shipment for {query}, got {:?}", env.solution);
        };
        assert_eq!(shipment.tracking_number, number);
        assert!(!env.cache);
    }
}

#[tokio::test]
async fn wikidata_facts() {
    let d = dispatcher();

    let env = ask(&d, "how old is jimi hendrix").await;
    assert_eq!(env.answer_type, Some(AnswerType::Age));
    assert_eq!(
        env.solution,
        Some(Solution::Age(Age {
            birthday: date("+1942-11-27T00:00:00Z"),
            death: Some(date("+1970-09-18T00:00:00Z")),
        }))
    );

    let env = ask(&d, "jimi hendrix quotes").await;
    assert_eq!(env.answer_type, Some(AnswerType::Wikiquote));

    let env = ask(&d, "jimi hendrix height").await;
    assert_eq!(env.answer_type, Some(AnswerType::Wikipedia));
    assert_eq!(env.err, Some(AnswerError::NotFound("jimi hendrix".into())));

    let env = ask(&d, "atlantis").await;
    assert_eq!(env.err, Some(AnswerError::NotFound("atlantis".into())));
}

#[tokio::test]
async fn world_clocks_are_never_cached() {
    let d = dispatcher();
    let expected = |city: &str| {
        Solution::Clock(WorldClock {
            time: chrono::DateTime::parse_from_rfc3339("2018-04-01T12:58:00-06:00").unwrap(),
            zone: "America/Denver".into(),
            location: Place { city: city.into(), state: "Colorado".into(), country: "United States".into() },
        })
    };

    let env = ask(&d, "time in denver").await;
    assert_eq!(env.answer_type, Some(AnswerType::Clock));
    assert_eq!(env.solution, Some(expected("Denver")));
    assert!(!env.cache);

    let env = ask(&d, "clock").await;
    assert_eq!(env.answer_type, Some(AnswerType::Clock));
    assert_eq!(env.solution, Some(expected("Denver")));
}

#[tokio::test]
async fn nutrition_of_eggs() {
    let env = ask(&dispatcher(), "how many calories in an egg").await;
    assert_eq!(env.answer_type, Some(AnswerType::Nutrition));
    let Some(Solution::Nutrition(Nutrition { nutrient, code, food, foods, .. })) = &env.solution else {
        panic!("expected nutrition, got {:?}", env.solution);
    };
    assert_eq!(nutrient, "calories");
    assert_eq!(code, "208");
    assert_eq!(food, "egg");
    assert_eq!(foods[0].ndbno, "01123");
    assert!(!env.cache);
}

#[tokio::test]
async fn nutrition_fetch_failures_surface() {
    let env = ask(&dispatcher(), "protein in a big mac").await;
    assert_eq!(env.err, Some(AnswerError::Fetch(FetchError::Unavailable("lookup big mac".into()))));
}

#[tokio::test]
async fn gdp_of_smaller_countries() {
    let econ = Arc::new(FakeEcon::default());
    let d = Dispatcher::new(standard(&fetchers(econ.clone())).unwrap()).with_clock(clock());

    for query in ["gdp of luxembourg", "cuba gdp", "gdp jamaica", "qatar gdp", "gdp of ghana", "gdp of uruguay"] {
        let env = ask(&d, query).await;
        assert_eq!(env.err, None, "{query}");
        assert!(env.solution.is_some(), "{query}");
    }
    let codes: Vec<String> = econ.calls.lock().iter().map(|(code, _, _)| code.clone()).collect();
    assert_eq!(codes, ["LU", "CU", "JM", "QA", "GH", "UY"]);
}

#[tokio::test]
async fn currency_conversions() {
    let d = dispatcher();

    let env = ask(&d, "convert 10 usd to eur").await;
    assert_eq!(env.answer_type, Some(AnswerType::Currency));
    let Some(Solution::Currency(conversion)) = &env.solution else {
        panic!("expected a conversion, got {:?}", env.solution);
    };
    assert_eq!(conversion.from.code, "USD");
    assert_eq!(conversion.to.code, "EUR");
    assert_eq!(conversion.amount, 10.0);
    assert_eq!(conversion.rate, 0.5);
    assert_eq!(conversion.value, 5.0);
    assert_eq!(conversion.provider, "ECB");
    assert!(!env.cache);

    let env = ask(&d, "pounds in euros").await;
    let Some(Solution::Currency(conversion)) = &env.solution else {
        panic!("expected a conversion, got {:?}", env.solution);
    };
    assert_eq!(conversion.from.code, "GBP");
    assert_eq!((conversion.amount, conversion.value), (1.0, 0.5));

    let env = ask(&d, "usd to yen").await;
    assert_eq!(env.err, Some(AnswerError::Fetch(FetchError::NotFound("JPY rate for USD".into()))));
    assert!(env.solution.is_none());
}

#[tokio::test]
async fn unknown_currencies_are_rejected() {
    let clock = clock();
    let ctx = RequestContext::default();
    let req = Request::configure(&ctx, "q", "test", Requires::empty(), clock.as_ref());
    let m = Match {
        captures: [("from", "usd"), ("to", "doubloons")].into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        ..Match::default()
    };

    let solved = CurrencyConverter::new(Arc::new(FakeCurrency)).solve(&m, &req).await;
    assert_eq!(solved.err, Some(AnswerError::InvalidCurrency("doubloons".into())));
    assert!(solved.solution.is_none());
}

#[tokio::test]
async fn discographies() {
    let d = dispatcher();

    let env = ask(&d, "metallica discography").await;
    assert_eq!(env.answer_type, Some(AnswerType::Discography));
    let Some(Solution::Discography(albums)) = &env.solution else {
        panic!("expected albums, got {:?}", env.solution);
    };
    let names: Vec<&str> = albums.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Kill 'Em All", "Ride the Lightning"]);
    assert!(env.cache);

    let env = ask(&d, "discography nobody at all").await;
    assert_eq!(env.err, Some(AnswerError::NotFound("nobody at all".into())));

    let env = ask(&d, "albums by offline").await;
    assert_eq!(env.err, Some(AnswerError::Fetch(FetchError::Unavailable("discography".into()))));
}

#[tokio::test]
async fn fetcher_errors_reach_the_envelope() {
    let d = dispatcher();

    let env = ask(&d, "stock aapl").await;
    assert_eq!(env.answer_type, Some(AnswerType::StockQuote));
    assert!(matches!(&env.solution, Some(Solution::Stock(q)) if q.ticker == "AAPL"));
    let env = ask(&d, "zzzz stock").await;
    assert_eq!(env.err, Some(AnswerError::Fetch(FetchError::NotFound("ZZZZ".into()))));
    assert!(env.solution.is_none());

    let env = ask(&d, "pwned test@example.com").await;
    assert_eq!(env.answer_type, Some(AnswerType::Breach));
    assert!(matches!(&env.solution, Some(Solution::Breach(b)) if b.account == "test@example.com"));
    let env = ask(&d, "pwned down@example.com").await;
    assert_eq!(
        env.err,
        Some(AnswerError::Fetch(FetchError::Http { provider: "HIBP".into(), message: "503".into() }))
    );
    let env = ask(&d, "breach two words").await;
    assert_eq!(env.err, Some(AnswerError::InvalidParameter("two words".into())));

    let env = ask(&d, "google up").await;
    assert_eq!(env.answer_type, Some(AnswerType::Status));
    assert!(matches!(&env.solution, Some(Solution::Status(s)) if s.up && s.domain == "google.com"));
    let env = ask(&d, "jivesearch.com down").await;
    assert_eq!(
        env.err,
        Some(AnswerError::Fetch(FetchError::Http {
            provider: "isitup".into(),
            message: "jivesearch.com timed out".into(),
        }))
    );
}

#[tokio::test]
async fn hash_digests() {
    let d = dispatcher();
    let cases = [
        ("md5 abc", "md5", "900150983cd24fb0d6963f7d28e17f72"),
        ("sha224 abc", "sha224", "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"),
        ("abc sha256", "sha256", "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
        (
            "sha384 hash abc",
            "sha384",
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7",
        ),
        (
            "sha512 abc",
            "sha512",
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
        ),
    ];
    for (query, algorithm, hash) in cases {
        let env = ask(&d, query).await;
        assert_eq!(
            env.solution,
            Some(Solution::Hash(Digest { algorithm: algorithm.into(), original: "abc".into(), hash: hash.into() })),
            "{query}"
        );
    }
}

#[tokio::test]
async fn character_counts() {
    let d = dispatcher();

    let env = ask(&d, "characters in \"hello world\"").await;
    assert_eq!(env.solution, Some(Solution::Characters(Count { text: "hello world".into(), characters: 11 })));

    let env = ask(&d, "ñandú char count").await;
    assert_eq!(env.solution, Some(Solution::Characters(Count { text: "ñandú".into(), characters: 5 })));
}

#[tokio::test]
async fn country_codes() {
    let d = dispatcher();

    let env = ask(&d, "country code of luxembourg").await;
    assert_eq!(
        env.solution,
        Some(Solution::CountryCode(CountryCodes {
            country: "Luxembourg".into(),
            alpha2: "LU".into(),
            alpha3: "LUX".into(),
            calling_code: "+352".into(),
        }))
    );

    let env = ask(&d, "cuba calling code").await;
    assert!(matches!(&env.solution, Some(Solution::CountryCode(c)) if c.calling_code == "+53"));

    let env = ask(&d, "country code of atlantis").await;
    assert_eq!(env.err, Some(AnswerError::InvalidCountry("atlantis".into())));
}

#[tokio::test]
async fn user_agents_are_echoed_only_when_required() {
    let d = dispatcher();
    let ctx = RequestContext::default().with_user_agent("curl/8.0");

    let env = d.answer("what's my user agent", &ctx).await;
    assert_eq!(env.answer_type, Some(AnswerType::UserAgent));
    assert_eq!(text(&env), "curl/8.0");
    assert!(!env.cache);

    let env = d.answer("user agent", &RequestContext::default()).await;
    assert_eq!(env.err, Some(AnswerError::NotFound("user agent".into())));

    let clock = clock();
    let hidden = Request::configure(&ctx, "q", "test", Requires::empty(), clock.as_ref());
    let solved = UserAgent.solve(&Match::default(), &hidden).await;
    assert_eq!(solved.err, Some(AnswerError::NotFound("user agent".into())));
}
