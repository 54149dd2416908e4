use super::FetchResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub domain: String,
    pub port: u16,
    pub ip: String,
    /// HTTP status code of the probe, when it got that far.
    pub status_code: Option<u16>,
    /// Round-trip time of the probe in seconds.
    pub response_time: f64,
    pub up: bool,
    pub provider: String,
}

/// Probes whether a site is reachable.
#[async_trait]
pub trait StatusFetcher: Send + Sync {
    async fn fetch(&self, domain: &str) -> FetchResult<Response>;
}

/// Normalize user input into a probe-able domain.
///
/// Strips the scheme and path, lower-cases, and appends `.com` to bare names
/// (`google` → `google.com`). Returns `None` for text that cannot be a host.
pub fn fix_domain(raw: &str) -> Option<String> {
    let mut domain = raw.trim().to_lowercase();
    for scheme in ["https://", "http://"] {
        if let Some(rest) = domain.strip_prefix(scheme) {
            domain = rest.to_string();
        }
    }
    if let Some(idx) = domain.find('/') {
        domain.truncate(idx);
    }

    if !regex!(r"^[a-z0-9-]+(?:\.[a-z0-9-]+)*$").is_match(&domain) {
        return None;
    }

    if !domain.contains('.') {
        domain.push_str(".com");
    }
    Some(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fix_domain_cases() {
        assert_eq!(fix_domain("google").as_deref(), Some("google.com"));
        assert_eq!(fix_domain("Example.ORG").as_deref(), Some("example.org"));
        assert_eq!(fix_domain("https://jivesearch.com/about").as_deref(), Some("jivesearch.com"));
        assert_eq!(fix_domain("not a site"), None);
        assert_eq!(fix_domain(""), None);
    }
}
