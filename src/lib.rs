//! Instant answers for free-text search queries.
//!
//! A query such as `"reverse hello"` or `"weather in paris"` is matched
//! against the ordered trigger patterns of every registered answer module.
//! The first module that matches solves the query and its outcome is wrapped
//! in a uniform [`Envelope`], optionally served from and stored to a cache.
//!
//! ```no_run
//! use instant_answers::{Dispatcher, RequestContext, answers};
//!
//! # async fn demo() -> Result<(), instant_answers::RegistryError> {
//! let registry = answers::standard(&answers::Fetchers::default())?;
//! let dispatcher = Dispatcher::new(registry);
//! let envelope = dispatcher.answer("reverse hello", &RequestContext::default()).await;
//! assert!(envelope.triggered);
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

mod answerer;
mod api;
pub mod answers;
pub mod clock;
pub mod config;
pub mod context;
pub mod engine;
mod envelope;
pub mod error;
pub mod fetch;
pub mod solution;

pub use answerer::{Answerer, Requires, Solved};
pub use api::{answer, answer_verbose_with, answer_with};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use context::{InboundRequest, LanguageMatcher, LanguageTag, Request, RequestContext, SimpleRequest};
pub use engine::{AnswerRun, Cacher, Dispatcher, Match, MemoryCache, Registry};
pub use envelope::Envelope;
pub use error::{AnswerError, CacheError, FetchError, RegistryError};
pub use solution::{AnswerType, Solution};
