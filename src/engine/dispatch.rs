//! Per-request dispatch.
//!
//! ```text
//! query ─ trim ─▶ modules in order ─ first match ─▶ cache get ─hit──▶ Envelope
//!                      │ none                          │ miss
//!                      ▼                               ▼
//!                 untriggered              solve (deadline, cancel)
//!                                                      │
//!                                                      ▼
//!                                          Envelope ─ storable? ─▶ cache put
//! ```
//!
//! Only the first matching module runs. A failed solve is still the answer:
//! later modules are never consulted.

use super::cache::{Cacher, cache_key};
use super::metrics::{AnswerRun, CacheStatus, RunMetrics, Stats, StatsSnapshot};
use super::registry::{Module, Registry};
use super::trigger::Match;
use crate::answerer::{Requires, Solved};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::context::{InboundRequest, LanguageMatcher, Request, RequestContext};
use crate::envelope::Envelope;
use crate::error::AnswerError;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Routes queries to answer modules.
///
/// Cheap to share: wrap it in an `Arc` and call it from any task.
pub struct Dispatcher {
    registry: Arc<Registry>,
    cache: Option<Arc<dyn Cacher>>,
    config: Config,
    languages: LanguageMatcher,
    clock: Arc<dyn Clock>,
    stats: Stats,
}

impl Dispatcher {
    pub fn new(registry: Registry) -> Self {
        Self::with_registry(Arc::new(registry))
    }

    pub fn with_registry(registry: Arc<Registry>) -> Self {
        let config = Config::default();
        let languages = LanguageMatcher::from_config(&config.languages, &config.default_language);
        Self { registry, cache: None, config, languages, clock: Arc::new(SystemClock), stats: Stats::default() }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.languages = LanguageMatcher::from_config(&config.languages, &config.default_language);
        self.config = config;
        self
    }

    pub fn with_cache(mut self, cache: Arc<dyn Cacher>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Answer `query` for the caller described by `ctx`.
    pub async fn answer(&self, query: &str, ctx: &RequestContext) -> Envelope {
        self.answer_verbose(query, ctx).await.envelope
    }

    /// Extract query and context from a transport request, then answer it.
    pub async fn answer_request(&self, req: &impl InboundRequest) -> Envelope {
        let (query, ctx) = RequestContext::extract(req, &self.config.query_var, &self.languages);
        self.answer(&query, &ctx).await
    }

    /// Like [`answer`](Self::answer), also reporting which module ran and
    /// how long each phase took.
    pub async fn answer_verbose(&self, query: &str, ctx: &RequestContext) -> AnswerRun {
        let started = Instant::now();
        let mut run = self.dispatch(query.trim(), ctx).await;
        run.metrics.total = started.elapsed();
        self.stats.record(&run);
        run
    }

    async fn dispatch(&self, query: &str, ctx: &RequestContext) -> AnswerRun {
        let mut metrics = RunMetrics::default();
        if query.is_empty() {
            return AnswerRun { envelope: Envelope::untriggered(), module: None, matched: None, metrics };
        }

        let matching = Instant::now();
        let mut hit = None;
        for module in self.registry.modules() {
            metrics.modules_tried += 1;
            if let Some(m) = module.descriptor.triggers.find(query) {
                hit = Some((module, m));
                break;
            }
        }
        metrics.matching = matching.elapsed();

        let Some((module, matched)) = hit else {
            tracing::debug!(query, tried = metrics.modules_tried, "no module triggered");
            return AnswerRun { envelope: Envelope::untriggered(), module: None, matched: None, metrics };
        };

        let descriptor = &module.descriptor;
        tracing::debug!(
            module = descriptor.name(),
            trigger = %matched.trigger,
            remainder = %matched.remainder,
            rule = matched.rule,
            "module triggered"
        );

        let cacheable = descriptor.cacheable && self.config.cache.enabled;
        let cache = if cacheable { self.cache.as_ref() } else { None };
        let location = if descriptor.requires.contains(Requires::LOCATION) { ctx.ip } else { None };
        let key = cache_key(query, &ctx.language, location);

        if let Some(cache) = cache {
            metrics.cache = CacheStatus::Miss;
            match cache.get(&key).await {
                Ok(Some(raw)) => match Envelope::from_json(&raw) {
                    Ok(envelope) => {
                        tracing::info!(module = descriptor.name(), %key, "cache hit");
                        metrics.cache = CacheStatus::Hit;
                        return AnswerRun {
                            envelope,
                            module: Some(descriptor.answer_type),
                            matched: Some(matched),
                            metrics,
                        };
                    }
                    Err(err) => {
                        tracing::warn!(%key, error = %err, "discarding undecodable cache entry");
                        metrics.cache = CacheStatus::Failed;
                    }
                },
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(%key, error = %err, "cache lookup failed");
                    metrics.cache = CacheStatus::Failed;
                }
            }
        }

        let solving = Instant::now();
        let solved = self.solve(module, &matched, ctx).await;
        metrics.solve = solving.elapsed();

        let envelope = Envelope::from_solved(descriptor.answer_type, solved, descriptor.cacheable);
        if let Some(err) = &envelope.err {
            tracing::debug!(module = descriptor.name(), error = %err, "module answered with an error");
        }

        if let Some(cache) = cache {
            if envelope.is_storable() {
                match envelope.to_json() {
                    Ok(raw) => match cache.put(&key, raw, self.config.cache_ttl()).await {
                        Ok(()) => {
                            tracing::info!(module = descriptor.name(), %key, "cached answer");
                            metrics.cache = CacheStatus::Stored;
                        }
                        Err(err) => {
                            tracing::warn!(%key, error = %err, "cache store failed");
                            metrics.cache = CacheStatus::Failed;
                        }
                    },
                    Err(err) => {
                        tracing::warn!(%key, error = %err, "could not encode answer for caching");
                        metrics.cache = CacheStatus::Failed;
                    }
                }
            }
        }

        AnswerRun { envelope, module: Some(descriptor.answer_type), matched: Some(matched), metrics }
    }

    /// Run the module's solve step under the request deadline, racing the
    /// request's cancellation token.
    async fn solve(&self, module: &Module, matched: &Match, ctx: &RequestContext) -> Solved {
        let deadline: Duration = ctx.timeout.unwrap_or_else(|| self.config.solve_timeout());
        let request = Request::configure(
            ctx,
            &self.config.query_var,
            &self.config.user_agent,
            module.descriptor.requires,
            self.clock.as_ref(),
        );

        tokio::select! {
            biased;
            _ = ctx.cancel.cancelled() => {
                tracing::debug!(module = module.descriptor.name(), "solve cancelled");
                Solved::error(AnswerError::Cancelled)
            }
            outcome = tokio::time::timeout(deadline, module.answerer.solve(matched, &request)) => match outcome {
                Ok(solved) => solved,
                Err(_) => {
                    tracing::debug!(module = module.descriptor.name(), ?deadline, "solve timed out");
                    Solved::error(AnswerError::Timeout(deadline))
                }
            },
        }
    }
}
