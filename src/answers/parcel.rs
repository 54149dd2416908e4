use crate::answerer::{Answerer, Solved};
use crate::context::Request;
use crate::engine::Match;
use crate::error::AnswerError;
use crate::fetch::parcel::{Carrier, ParcelFetcher};
use crate::solution::AnswerType;
use async_trait::async_trait;
use std::sync::Arc;

/// Package tracking. The carrier is told apart by the tracking number's
/// shape; a leading carrier name is optional.
pub struct Parcel {
    fetcher: Arc<dyn ParcelFetcher>,
}

impl Parcel {
    pub fn new(fetcher: Arc<dyn ParcelFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl Answerer for Parcel {
    fn answer_type(&self) -> AnswerType {
        AnswerType::FedEx
    }

    fn triggers(&self) -> Vec<String> {
        vec![
            r"^(?:(?P<trigger>ups tracking|track ups|ups) )?(?P<ups>1z[0-9a-z]{16})$".to_string(),
            r"^(?:(?P<trigger>usps tracking|track usps|usps) )?(?P<usps>(?:9[2-5][0-9]{20})|(?:[a-z]{2}[0-9]{9}us))$"
                .to_string(),
            r"^(?:(?P<trigger>fedex tracking|track fedex|fedex) )?(?P<fedex>[0-9]{12}|[0-9]{15})$".to_string(),
        ]
    }

    async fn solve(&self, m: &Match, _req: &Request<'_>) -> Solved {
        let slots = [
            (Carrier::Ups, "ups", AnswerType::Ups),
            (Carrier::Usps, "usps", AnswerType::Usps),
            (Carrier::FedEx, "fedex", AnswerType::FedEx),
        ];
        let found = slots
            .into_iter()
            .find_map(|(carrier, slot, answer_type)| m.get(slot).map(|number| (carrier, number, answer_type)));

        let Some((carrier, number, answer_type)) = found else {
            return Solved::error(AnswerError::InvalidParameter(m.remainder.clone()));
        };

        let number = number.to_uppercase();
        tracing::debug!(%carrier, %number, "tracking parcel");
        super::settle(self.fetcher.fetch(carrier, &number).await).retype(answer_type)
    }
}
