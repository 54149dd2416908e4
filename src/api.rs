use crate::answers::{self, Fetchers};
use crate::context::RequestContext;
use crate::engine::{AnswerRun, Dispatcher};
use crate::envelope::Envelope;
use once_cell::sync::Lazy;

/// The fetcher-free modules, built on first use.
static DEFAULT_DISPATCHER: Lazy<Dispatcher> = Lazy::new(|| {
    let registry = answers::standard(&Fetchers::default()).expect("built-in registry must validate");
    Dispatcher::new(registry)
});

/// Answer `query` with the built-in modules and a default [`RequestContext`].
///
/// Only modules that need no external data are available here; build a
/// [`Dispatcher`] from [`answers::standard`] to plug providers in.
///
/// # Example
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let envelope = instant_answers::answer("reverse hello").await;
/// assert!(envelope.triggered);
/// # }
/// ```
pub async fn answer(query: &str) -> Envelope {
    answer_with(query, &RequestContext::default()).await
}

/// Answer `query` with the built-in modules for the caller in `ctx`.
pub async fn answer_with(query: &str, ctx: &RequestContext) -> Envelope {
    DEFAULT_DISPATCHER.answer(query, ctx).await
}

/// Like [`answer_with`], also returning the matched module and timings.
pub async fn answer_verbose_with(query: &str, ctx: &RequestContext) -> AnswerRun {
    DEFAULT_DISPATCHER.answer_verbose(query, ctx).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::{AnswerType, Solution};

    #[tokio::test]
    async fn answer_uses_the_builtin_modules() {
        let env = answer("reverse hello").await;
        assert_eq!(env.answer_type, Some(AnswerType::Reverse));
        assert_eq!(env.solution, Some(Solution::Text("olleh".into())));
    }

    #[tokio::test]
    async fn verbose_reports_the_module_and_rule() {
        let run = answer_verbose_with("sha256 abc", &RequestContext::default()).await;
        assert_eq!(run.module, Some(AnswerType::Hash));
        let matched = run.matched.unwrap();
        assert_eq!(matched.trigger, "sha256");
        assert_eq!(matched.remainder, "abc");
        assert!(run.metrics.total >= run.metrics.solve);
    }

    #[tokio::test]
    async fn unknown_queries_are_untriggered() {
        assert_eq!(answer("lorem ipsum dolor").await, Envelope::untriggered());
    }
}
