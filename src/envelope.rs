//! The uniform answer envelope.
//!
//! Wire form:
//!
//! ```json
//! {"type": "reverse", "triggered": true, "solution": "olleh", "cache": true}
//! ```
//!
//! `type`, `solution` and `error` are omitted when empty. `error` carries the
//! error's display message.

use crate::answerer::Solved;
use crate::error::{AnswerError, CacheError};
use crate::solution::{AnswerType, Solution, decode_solution};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub answer_type: Option<AnswerType>,
    pub triggered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<Solution>,
    #[serde(rename = "error", serialize_with = "error_message", skip_serializing_if = "Option::is_none")]
    pub err: Option<AnswerError>,
    /// The module declared this answer cache-eligible.
    pub cache: bool,
}

fn error_message<S: Serializer>(err: &Option<AnswerError>, s: S) -> Result<S::Ok, S::Error> {
    match err {
        Some(err) => s.serialize_some(&err.to_string()),
        None => s.serialize_none(),
    }
}

#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(rename = "type")]
    answer_type: Option<String>,
    triggered: bool,
    #[serde(default)]
    solution: Option<Value>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    cache: bool,
}

impl Envelope {
    /// The envelope for a query no module matched.
    pub fn untriggered() -> Self {
        Self { answer_type: None, triggered: false, solution: None, err: None, cache: false }
    }

    /// Normalize a module's outcome. `answer_type` is the module's primary
    /// type; the outcome may override it.
    pub fn from_solved(answer_type: AnswerType, solved: Solved, cacheable: bool) -> Self {
        Self {
            answer_type: Some(solved.answer_type.unwrap_or(answer_type)),
            triggered: true,
            cache: cacheable && solved.cacheable,
            solution: solved.solution,
            err: solved.err,
        }
    }

    /// Only clean, triggered, cache-eligible answers are ever stored.
    pub fn is_storable(&self) -> bool {
        self.triggered && self.cache && self.err.is_none() && self.solution.is_some()
    }

    pub fn to_json(&self) -> Result<String, CacheError> {
        serde_json::to_string(self).map_err(CacheError::Encode)
    }

    /// Decode a cached envelope. The solution is rebuilt through
    /// [`decode_solution`] using the stored type tag.
    pub fn from_json(raw: &str) -> Result<Self, CacheError> {
        let raw: RawEnvelope = serde_json::from_str(raw).map_err(CacheError::Decode)?;
        if raw.error.is_some() {
            return Err(CacheError::ErrorEntry);
        }

        let answer_type = match raw.answer_type {
            Some(tag) => Some(tag.parse::<AnswerType>().map_err(|_| CacheError::UnknownType(tag))?),
            None => None,
        };

        let solution = match (answer_type, raw.solution) {
            (Some(t), Some(value)) => Some(decode_solution(t, value).map_err(CacheError::Decode)?),
            (None, Some(_)) => return Err(CacheError::UnknownType(String::new())),
            (_, None) => None,
        };

        Ok(Self { answer_type, triggered: raw.triggered, solution, err: None, cache: raw.cache })
    }
}
