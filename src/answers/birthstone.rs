use crate::answerer::{Answerer, Solved};
use crate::context::Request;
use crate::engine::{Match, affixes};
use crate::error::AnswerError;
use crate::solution::{AnswerType, Solution};
use async_trait::async_trait;

static STONES: &[(&str, &str, &str)] = &[
    ("january", "jan", "Garnet"),
    ("february", "feb", "Amethyst"),
    ("march", "mar", "Aquamarine, Bloodstone"),
    ("april", "apr", "Diamond"),
    ("may", "may", "Emerald"),
    ("june", "jun", "Pearl, Moonstone, Alexandrite"),
    ("july", "jul", "Ruby"),
    ("august", "aug", "Peridot, Spinel"),
    ("september", "sep", "Sapphire"),
    ("october", "oct", "Opal, Tourmaline"),
    ("november", "nov", "Topaz, Citrine"),
    ("december", "dec", "Turquoise, Zircon, Tanzanite"),
];

/// Birthstones of a month.
#[derive(Debug, Default, Clone, Copy)]
pub struct Birthstone;

#[async_trait]
impl Answerer for Birthstone {
    fn answer_type(&self) -> AnswerType {
        AnswerType::Birthstone
    }

    fn triggers(&self) -> Vec<String> {
        affixes(&["birth stones", "birth stone", "birthstones", "birthstone"])
    }

    fn cacheable(&self) -> bool {
        true
    }

    async fn solve(&self, m: &Match, _req: &Request<'_>) -> Solved {
        let month = m.remainder.to_lowercase();
        let month = month.trim_end_matches('?').trim();
        match STONES.iter().find(|(name, short, _)| *name == month || *short == month) {
            Some((_, _, stones)) => Solved::answer(Solution::Text(stones.to_string())),
            None => Solved::error(AnswerError::InvalidParameter(m.remainder.clone())),
        }
    }
}
