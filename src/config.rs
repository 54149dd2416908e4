//! Engine configuration.
//!
//! Sources are merged in increasing priority:
//!
//! 1. Built-in defaults ([`Config::default`])
//! 2. `./instant.toml`, when present
//! 3. An explicit file passed to [`Config::load`]
//! 4. `INSTANT_*` environment variables (`__` separates nested keys, e.g.
//!    `INSTANT_CACHE__TTL_SECS=60`)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const PROJECT_FILE: &str = "instant.toml";
const ENV_PREFIX: &str = "INSTANT_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the query-string parameter holding the search text.
    pub query_var: String,
    /// Language used when negotiation finds nothing better.
    pub default_language: String,
    /// Supported languages in order of preference. Empty means any.
    pub languages: Vec<String>,
    /// User agent modules identify themselves with on outbound calls.
    pub user_agent: String,
    pub cache: CacheConfig,
    pub solve: SolveConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    /// Shared TTL for every cacheable answer.
    pub ttl_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveConfig {
    /// Default deadline for a module's solve step.
    pub timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query_var: "q".to_string(),
            default_language: "en".to_string(),
            languages: Vec::new(),
            user_agent: concat!("instant-answers/", env!("CARGO_PKG_VERSION")).to_string(),
            cache: CacheConfig::default(),
            solve: SolveConfig::default(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { enabled: true, ttl_secs: 1 }
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self { timeout_ms: 5_000 }
    }
}

impl Config {
    /// Load configuration from every source (see module docs).
    pub fn load(path: Option<&Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(path).extract().map_err(Box::new)
    }

    /// The merged provider chain, exposed for callers that want to layer more
    /// sources on top.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        let project = PathBuf::from(PROJECT_FILE);
        if project.exists() {
            figment = figment.merge(Toml::file(&project));
        }

        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.ttl_secs)
    }

    pub fn solve_timeout(&self) -> Duration {
        Duration::from_millis(self.solve.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.query_var, "q");
        assert_eq!(config.default_language, "en");
        assert!(config.cache.enabled);
        assert_eq!(config.cache_ttl(), Duration::from_secs(1));
        assert_eq!(config.solve_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
query_var = "query"
languages = ["en", "fr"]

[cache]
ttl_secs = 600

[solve]
timeout_ms = 250
"#
        )
        .unwrap();

        let config: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(file.path()))
            .extract()
            .unwrap();

        assert_eq!(config.query_var, "query");
        assert_eq!(config.languages, vec!["en".to_string(), "fr".to_string()]);
        assert_eq!(config.cache_ttl(), Duration::from_secs(600));
        assert!(config.cache.enabled);
        assert_eq!(config.solve_timeout(), Duration::from_millis(250));
        assert_eq!(config.default_language, "en");
    }
}
