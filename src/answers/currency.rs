use crate::answerer::{Answerer, Solved};
use crate::context::Request;
use crate::engine::{Match, alternation};
use crate::error::{AnswerError, FetchError};
use crate::fetch::currency::CurrencyFetcher;
use crate::solution::AnswerType;
use async_trait::async_trait;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

struct Known {
    code: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
}

static CURRENCIES: &[Known] = &[
    Known { code: "USD", name: "US Dollar", aliases: &["us dollars", "us dollar", "dollars", "dollar", "$"] },
    Known { code: "EUR", name: "Euro", aliases: &["euros", "€"] },
    Known { code: "GBP", name: "British Pound", aliases: &["pounds sterling", "british pounds", "pounds", "pound", "£"] },
    Known { code: "JPY", name: "Japanese Yen", aliases: &["yen", "¥"] },
    Known { code: "CAD", name: "Canadian Dollar", aliases: &["canadian dollars"] },
    Known { code: "AUD", name: "Australian Dollar", aliases: &["australian dollars"] },
    Known { code: "NZD", name: "New Zealand Dollar", aliases: &["new zealand dollars"] },
    Known { code: "CHF", name: "Swiss Franc", aliases: &["swiss francs", "francs", "franc"] },
    Known { code: "CNY", name: "Chinese Yuan", aliases: &["renminbi", "yuan", "rmb"] },
    Known { code: "HKD", name: "Hong Kong Dollar", aliases: &["hong kong dollars"] },
    Known { code: "SGD", name: "Singapore Dollar", aliases: &["singapore dollars"] },
    Known { code: "INR", name: "Indian Rupee", aliases: &["rupees", "rupee"] },
    Known { code: "MXN", name: "Mexican Peso", aliases: &["pesos", "peso"] },
    Known { code: "BRL", name: "Brazilian Real", aliases: &["reais"] },
    Known { code: "RUB", name: "Russian Ruble", aliases: &["rubles", "ruble", "roubles", "rouble"] },
    Known { code: "KRW", name: "South Korean Won", aliases: &["korean won"] },
    Known { code: "ZAR", name: "South African Rand", aliases: &["rand"] },
    Known { code: "SEK", name: "Swedish Krona", aliases: &["swedish kronor"] },
    Known { code: "NOK", name: "Norwegian Krone", aliases: &["norwegian kroner"] },
    Known { code: "DKK", name: "Danish Krone", aliases: &["danish kroner"] },
    Known { code: "PLN", name: "Polish Zloty", aliases: &["zloty"] },
    Known { code: "TRY", name: "Turkish Lira", aliases: &["lira"] },
];

/// Every accepted spelling, longest first so alternation prefers it.
static SPELLINGS: Lazy<Vec<String>> = Lazy::new(|| {
    let mut all: Vec<String> = CURRENCIES
        .iter()
        .flat_map(|c| {
            [c.code.to_lowercase(), c.name.to_lowercase()].into_iter().chain(c.aliases.iter().map(|a| a.to_string()))
        })
        .collect();
    all.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b)));
    all.dedup();
    all
});

impl Known {
    fn currency(&self) -> Currency {
        Currency { code: self.code.to_string(), name: self.name.to_string() }
    }
}

fn lookup(raw: &str) -> Option<&'static Known> {
    let raw = raw.trim().to_lowercase();
    CURRENCIES.iter().find(|c| {
        c.code.to_lowercase() == raw || c.name.to_lowercase() == raw || c.aliases.iter().any(|a| *a == raw)
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub from: Currency,
    pub to: Currency,
    pub amount: f64,
    pub rate: f64,
    pub value: f64,
    pub date: NaiveDate,
    pub provider: String,
}

/// `convert 10 usd to eur`, `euros in yen`, `usd eur exchange rate`.
pub struct CurrencyConverter {
    fetcher: Arc<dyn CurrencyFetcher>,
}

impl CurrencyConverter {
    pub fn new(fetcher: Arc<dyn CurrencyFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl Answerer for CurrencyConverter {
    fn answer_type(&self) -> AnswerType {
        AnswerType::Currency
    }

    fn triggers(&self) -> Vec<String> {
        let words: Vec<&str> = SPELLINGS.iter().map(String::as_str).collect();
        let c = alternation(&words);
        vec![
            format!(r"^(?:convert )?(?:(?P<amount>[0-9]+(?:\.[0-9]+)?) ?)?(?P<from>{c}) (?:to|in|into) (?P<to>{c})$"),
            format!(r"^(?P<from>{c}) (?:to |in )?(?P<to>{c}) (?:exchange rate|conversion|rate)$"),
            format!(r"^(?:exchange rate|currency exchange|forex) (?P<from>{c}) (?:to |in )?(?P<to>{c})$"),
        ]
    }

    async fn solve(&self, m: &Match, _req: &Request<'_>) -> Solved {
        let raw_from = m.get("from").unwrap_or_default();
        let raw_to = m.get("to").unwrap_or_default();
        let (Some(from), Some(to)) = (lookup(raw_from), lookup(raw_to)) else {
            let bad = if lookup(raw_from).is_none() { raw_from } else { raw_to };
            return Solved::error(AnswerError::InvalidCurrency(bad.to_string()));
        };

        let amount = match m.get("amount") {
            Some(raw) => match raw.parse::<f64>() {
                Ok(amount) => amount,
                Err(_) => return Solved::error(AnswerError::InvalidParameter(raw.to_string())),
            },
            None => 1.0,
        };

        let rates = match self.fetcher.fetch(from.code).await {
            Ok(rates) => rates,
            Err(err) => return Solved::error(err),
        };
        let Some(rate) = rates.rate(to.code) else {
            return Solved::error(FetchError::NotFound(format!("{} rate for {}", to.code, from.code)));
        };

        Solved::answer(Conversion {
            from: from.currency(),
            to: to.currency(),
            amount,
            rate,
            value: amount * rate,
            date: rates.date,
            provider: rates.provider,
        })
    }
}
