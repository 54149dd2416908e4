//! Error types.
//!
//! Errors are split by where they can surface:
//!
//! - [`AnswerError`] lives inside an [`Envelope`](crate::Envelope). It is the
//!   only error a request can produce and it never escapes the dispatcher.
//! - [`FetchError`] is returned by fetcher collaborators and always becomes an
//!   `AnswerError::Fetch` on the envelope.
//! - [`RegistryError`] is a startup error: a registry that fails validation
//!   must not serve requests.
//! - [`CacheError`] is returned by cache stores and by envelope decoding. The
//!   dispatcher logs it and treats the lookup as a miss.

use std::time::Duration;
use thiserror::Error;

/// Upper bound for the prime module. Ranges above it are truncated.
pub const PRIME_CEILING: u64 = 1_000_000;

/// Per-request answer errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnswerError {
    #[error("invalid country: {0}")]
    InvalidCountry(String),

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("invalid currency: {0}")]
    InvalidCurrency(String),

    #[error("could not understand \"{0}\"")]
    InvalidParameter(String),

    #[error("no results for \"{0}\"")]
    NotFound(String),

    #[error("Prime numbers greater than {max} not returned")]
    PrimeCeiling { max: u64 },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("answer timed out after {0:?}")]
    Timeout(Duration),

    #[error("answer cancelled")]
    Cancelled,
}

impl AnswerError {
    /// True for errors caused by the request deadline or cancellation.
    pub fn is_timeout(&self) -> bool {
        matches!(self, AnswerError::Timeout(_) | AnswerError::Cancelled)
    }

    /// True when the query itself could not be interpreted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AnswerError::InvalidCountry(_)
                | AnswerError::InvalidState(_)
                | AnswerError::InvalidCurrency(_)
                | AnswerError::InvalidParameter(_)
        )
    }
}

/// Errors returned by fetcher collaborators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("{provider} request failed: {message}")]
    Http { provider: String, message: String },

    #[error("{provider} returned a malformed response: {message}")]
    Decode { provider: String, message: String },

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} is unavailable")]
    Unavailable(String),
}

/// Registry validation failures. These are configuration bugs.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("module `{module}` declares no trigger patterns")]
    MissingPatterns { module: &'static str },

    #[error("module `{module}` has an invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        module: &'static str,
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("module `{module}` declares its catch-all pattern at position {index}; it must be last")]
    CatchAllNotLast { module: &'static str, index: usize },

    #[error("module `{module}` has a catch-all pattern but is followed by `{next}`, which it would shadow")]
    ShadowingCatchAll { module: &'static str, next: &'static str },

    #[error("answer type `{0}` is registered twice")]
    DuplicateType(&'static str),
}

/// Cache store and cache entry errors.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("failed to encode envelope: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode cached envelope: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("cached envelope has unknown answer type `{0}`")]
    UnknownType(String),

    #[error("cached envelope carries an error and cannot be replayed")]
    ErrorEntry,

    #[error("cache store error: {0}")]
    Store(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prime_ceiling_message_names_the_limit() {
        let err = AnswerError::PrimeCeiling { max: PRIME_CEILING };
        assert_eq!(err.to_string(), "Prime numbers greater than 1000000 not returned");
    }

    #[test]
    fn fetch_errors_convert_transparently() {
        let err: AnswerError = FetchError::Unavailable("weather".into()).into();
        assert_eq!(err.to_string(), "weather is unavailable");
        assert!(!err.is_validation());
        assert!(!err.is_timeout());
    }

    #[test]
    fn classification() {
        assert!(AnswerError::Timeout(Duration::from_millis(5)).is_timeout());
        assert!(AnswerError::Cancelled.is_timeout());
        assert!(AnswerError::InvalidCountry("atlantis".into()).is_validation());
        assert!(!AnswerError::NotFound("x".into()).is_validation());
    }
}
