use super::countries;
use crate::answerer::{Answerer, Solved};
use crate::context::Request;
use crate::engine::{Match, affixes};
use crate::error::AnswerError;
use crate::solution::AnswerType;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryCodes {
    pub country: String,
    pub alpha2: String,
    pub alpha3: String,
    pub calling_code: String,
}

/// ISO 3166 codes and the dialing prefix of a country.
#[derive(Debug, Default, Clone, Copy)]
pub struct CountryCode;

#[async_trait]
impl Answerer for CountryCode {
    fn answer_type(&self) -> AnswerType {
        AnswerType::CountryCode
    }

    fn triggers(&self) -> Vec<String> {
        let mut rules = affixes(&[
            "country calling code",
            "country codes",
            "country code",
            "calling code",
            "dialing code",
            "iso code",
        ]);
        rules.push(
            r"^(?P<trigger>country code|calling code|dialing code|iso code) (?:of|for) (?P<remainder>.*)$".to_string(),
        );
        rules.rotate_right(1);
        rules
    }

    fn cacheable(&self) -> bool {
        true
    }

    async fn solve(&self, m: &Match, _req: &Request<'_>) -> Solved {
        match countries::find(&m.remainder) {
            Some(c) => Solved::answer(CountryCodes {
                country: c.name.to_string(),
                alpha2: c.alpha2.to_string(),
                alpha3: c.alpha3.to_string(),
                calling_code: c.calling_code.to_string(),
            }),
            None => Solved::error(AnswerError::InvalidCountry(m.remainder.clone())),
        }
    }
}
