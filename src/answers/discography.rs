use crate::answerer::{Answerer, Solved};
use crate::context::Request;
use crate::engine::{Match, affixes};
use crate::error::AnswerError;
use crate::fetch::discography::DiscographyFetcher;
use crate::solution::{AnswerType, Solution};
use async_trait::async_trait;
use std::sync::Arc;

/// An artist's albums.
pub struct Discography {
    fetcher: Arc<dyn DiscographyFetcher>,
}

impl Discography {
    pub fn new(fetcher: Arc<dyn DiscographyFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl Answerer for Discography {
    fn answer_type(&self) -> AnswerType {
        AnswerType::Discography
    }

    fn triggers(&self) -> Vec<String> {
        affixes(&["discography", "albums by", "albums"])
    }

    fn cacheable(&self) -> bool {
        true
    }

    async fn solve(&self, m: &Match, _req: &Request<'_>) -> Solved {
        let artist = super::strip_quotes(m.remainder.trim_end_matches('?').trim());
        if artist.is_empty() {
            return Solved::error(AnswerError::InvalidParameter(m.remainder.clone()));
        }

        match self.fetcher.fetch(artist).await {
            Ok(albums) if albums.is_empty() => Solved::error(AnswerError::NotFound(artist.to_string())),
            Ok(mut albums) => {
                albums.sort_by_key(|a| a.published);
                Solved::answer(Solution::Discography(albums))
            }
            Err(err) => Solved::error(err),
        }
    }
}
