//! Fetcher contracts.
//!
//! One async trait per external data domain, plus the response types the
//! matching answer modules return. The crate ships no network clients: a
//! deployment plugs its own provider integrations in through these traits
//! (see [`Fetchers`](crate::answers::Fetchers)).
//!
//! Every failure is a [`FetchError`]. Modules turn it into
//! `AnswerError::Fetch` on the envelope; an empty result is never used to
//! signal a failure.

pub mod breach;
pub mod congress;
pub mod currency;
pub mod discography;
pub mod econ;
pub mod location;
pub mod nutrition;
pub mod parcel;
pub mod status;
pub mod stock;
pub mod timezone;
pub mod weather;
pub mod wikipedia;

pub use crate::error::FetchError;

pub type FetchResult<T> = Result<T, FetchError>;
