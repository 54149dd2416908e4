use crate::answerer::{Answerer, Solved};
use crate::context::Request;
use crate::engine::{Match, affixes};
use crate::error::AnswerError;
use crate::solution::AnswerType;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha224, Sha256, Sha384, Sha512};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Digest {
    pub algorithm: String,
    pub original: String,
    pub hash: String,
}

/// Hex digest of the remainder.
#[derive(Debug, Default, Clone, Copy)]
pub struct Hash;

#[async_trait]
impl Answerer for Hash {
    fn answer_type(&self) -> AnswerType {
        AnswerType::Hash
    }

    fn triggers(&self) -> Vec<String> {
        affixes(&[
            "md5 hash",
            "sha224 hash",
            "sha256 hash",
            "sha384 hash",
            "sha512 hash",
            "md5",
            "sha224",
            "sha256",
            "sha384",
            "sha512",
        ])
    }

    fn cacheable(&self) -> bool {
        true
    }

    async fn solve(&self, m: &Match, _req: &Request<'_>) -> Solved {
        let algorithm = m.trigger.trim_end_matches(" hash");
        let input = m.remainder.as_bytes();

        let hash = match algorithm {
            "md5" => format!("{:x}", md5::compute(input)),
            "sha224" => format!("{:x}", Sha224::digest(input)),
            "sha256" => format!("{:x}", Sha256::digest(input)),
            "sha384" => format!("{:x}", Sha384::digest(input)),
            "sha512" => format!("{:x}", Sha512::digest(input)),
            other => return Solved::error(AnswerError::InvalidParameter(other.to_string())),
        };

        Solved::answer(Digest { algorithm: algorithm.to_string(), original: m.remainder.clone(), hash })
    }
}
