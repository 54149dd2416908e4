//! Answer dispatch engine.
//!
//! ## How the parts work together
//!
//! ```text
//! answerers ──┐
//!             │  Registry::new                 (registry.rs)
//!             │    - read static descriptors
//!             │    - compile triggers once     (trigger.rs)
//!             │    - validate ordering
//!             └──────────────┬───────────────
//!                            │
//! query, ctx ─────────▶ Dispatcher::answer      (dispatch.rs)
//!                         - first matching module
//!                         - cache gate          (cache.rs)
//!                         - solve under deadline
//!                         - envelope + metrics  (metrics.rs)
//!                            │
//!                            v
//!                         Envelope
//! ```
//!
//! ## Responsibilities by module
//!
//! - `trigger.rs`: compiles a module's pattern sources and matches a query,
//!   producing a [`Match`] with named captures.
//! - `registry.rs`: ordered, validated, immutable list of modules.
//! - `dispatch.rs`: the per-request lifecycle and its deadlines.
//! - `cache.rs`: the [`Cacher`] store contract, key layout and the in-memory
//!   store.
//! - `metrics.rs`: per-run timings and process-wide counters.
//!
//! ## Adding a module
//!
//! Implement [`Answerer`](crate::Answerer), add its type tag to
//! [`AnswerType`](crate::AnswerType) together with a decoder arm in
//! [`decode_solution`](crate::solution::decode_solution), and register it.
//! Anything with a catch-all rule must be registered last.
//!
//! ## Debugging
//!
//! Run with `RUST_LOG=instant_answers=debug` to trace which module fired,
//! with which rule and captures.

#[path = "engine/cache.rs"]
mod cache;
#[path = "engine/dispatch.rs"]
mod dispatch;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/registry.rs"]
mod registry;
#[path = "engine/trigger.rs"]
mod trigger;

pub use cache::{Cacher, MemoryCache, cache_key};
pub use dispatch::Dispatcher;
pub use metrics::{AnswerRun, CacheStatus, RunMetrics, StatsSnapshot};
pub use registry::{Descriptor, Registry, RegistryBuilder};
pub use trigger::{Match, REMAINDER, TRIGGER, Triggers, affixes, alternation, catch_all};
