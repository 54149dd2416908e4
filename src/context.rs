//! Request context adapter.
//!
//! Modules never see the transport. The front-end implements
//! [`InboundRequest`] for whatever request type it has, and
//! [`RequestContext::extract`] pulls out the three things the engine cares
//! about: the raw query, the negotiated language and the caller's IP address.
//!
//! Per module, the dispatcher narrows the context further into a [`Request`]
//! view that only exposes the dimensions the module declared in its
//! [`Requires`] set.

use crate::answerer::Requires;
use crate::clock::Clock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Query parameter that forces a language, bypassing `Accept-Language`.
pub const LANGUAGE_PARAM: &str = "l";

// --- Language tags ----------------------------------------------------------

/// A BCP-47 language tag, normalized to canonical casing (`en`, `en-US`,
/// `zh-Hant-TW`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Parse and normalize a tag. Both `-` and `_` are accepted as separators.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut subtags = raw.trim().split(['-', '_']);
        let primary = subtags.next()?;
        if !(2..=8).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        let mut out = primary.to_ascii_lowercase();
        for sub in subtags {
            if sub.is_empty() || sub.len() > 8 || !sub.chars().all(|c| c.is_ascii_alphanumeric()) {
                return None;
            }
            out.push('-');
            match sub.len() {
                2 if sub.chars().all(|c| c.is_ascii_alphabetic()) => out.push_str(&sub.to_ascii_uppercase()),
                4 if sub.chars().all(|c| c.is_ascii_alphabetic()) => {
                    let mut chars = sub.chars();
                    if let Some(first) = chars.next() {
                        out.push(first.to_ascii_uppercase());
                    }
                    out.extend(chars.map(|c| c.to_ascii_lowercase()));
                }
                _ => out.push_str(&sub.to_ascii_lowercase()),
            }
        }

        Some(LanguageTag(out))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag (`en` for `en-US`).
    pub fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl Default for LanguageTag {
    fn default() -> Self {
        LanguageTag("en".to_string())
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageTag::parse(s).ok_or_else(|| format!("invalid language tag '{s}'"))
    }
}

impl TryFrom<String> for LanguageTag {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> Self {
        tag.0
    }
}

/// Picks the best supported language for a request.
#[derive(Debug, Clone)]
pub struct LanguageMatcher {
    supported: Vec<LanguageTag>,
    default: LanguageTag,
}

impl LanguageMatcher {
    /// An empty `supported` list accepts any well-formed tag.
    pub fn new(supported: Vec<LanguageTag>, default: LanguageTag) -> Self {
        Self { supported, default }
    }

    /// Build from configuration strings, skipping malformed entries.
    pub fn from_config(supported: &[String], default: &str) -> Self {
        let supported = supported.iter().filter_map(|s| LanguageTag::parse(s)).collect();
        Self::new(supported, LanguageTag::parse(default).unwrap_or_default())
    }

    /// Match a single tag: exact match first, then primary subtag.
    pub fn pick(&self, tag: &LanguageTag) -> Option<LanguageTag> {
        if self.supported.is_empty() {
            return Some(tag.clone());
        }
        if let Some(exact) = self.supported.iter().find(|s| *s == tag) {
            return Some(exact.clone());
        }
        self.supported.iter().find(|s| s.primary() == tag.primary()).cloned()
    }

    /// Negotiate against an `Accept-Language` header value.
    ///
    /// Entries are tried by descending `q` (ties keep header order). `*`
    /// selects the default. Nothing usable selects the default.
    pub fn negotiate(&self, accept_language: &str) -> LanguageTag {
        let mut ranges: Vec<(f32, &str)> = accept_language
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.split(';');
                let range = parts.next()?.trim();
                if range.is_empty() {
                    return None;
                }
                let q = parts
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .map(|q| q.trim().parse::<f32>().unwrap_or(0.0))
                    .unwrap_or(1.0);
                (q > 0.0).then_some((q, range))
            })
            .collect();
        ranges.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        for (_, range) in ranges {
            if range == "*" {
                return self.default.clone();
            }
            if let Some(found) = LanguageTag::parse(range).and_then(|tag| self.pick(&tag)) {
                return found;
            }
        }

        self.default.clone()
    }

    pub fn default_language(&self) -> &LanguageTag {
        &self.default
    }
}

// --- Inbound requests -------------------------------------------------------

/// The slice of a transport request the engine reads.
pub trait InboundRequest {
    fn query_param(&self, name: &str) -> Option<&str>;
    /// Header lookup; names are case-insensitive.
    fn header(&self, name: &str) -> Option<&str>;
    fn remote_addr(&self) -> Option<IpAddr>;
}

/// A plain in-memory request, used by the CLI and tests.
#[derive(Debug, Clone, Default)]
pub struct SimpleRequest {
    params: HashMap<String, String>,
    headers: HashMap<String, String>,
    remote: Option<IpAddr>,
}

impl SimpleRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers.insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    pub fn remote(mut self, addr: IpAddr) -> Self {
        self.remote = Some(addr);
        self
    }
}

impl InboundRequest for SimpleRequest {
    fn query_param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    fn remote_addr(&self) -> Option<IpAddr> {
        self.remote
    }
}

/// Caller IP: first `X-Forwarded-For` hop, then `X-Real-IP`, then the socket
/// address.
pub fn client_ip(req: &impl InboundRequest) -> Option<IpAddr> {
    if let Some(forwarded) = req.header("x-forwarded-for") {
        if let Some(ip) = forwarded.split(',').next().and_then(|hop| hop.trim().parse().ok()) {
            return Some(ip);
        }
    }
    if let Some(ip) = req.header("x-real-ip").and_then(|v| v.trim().parse().ok()) {
        return Some(ip);
    }
    req.remote_addr()
}

// --- Request context --------------------------------------------------------

/// Everything the dispatcher knows about the caller.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub language: LanguageTag,
    pub ip: Option<IpAddr>,
    pub user_agent: Option<String>,
    /// Overrides the configured solve deadline for this request.
    pub timeout: Option<Duration>,
    pub cancel: CancellationToken,
}

impl RequestContext {
    pub fn new(language: LanguageTag) -> Self {
        Self { language, ..Self::default() }
    }

    /// Extract the raw query and caller context from a transport request.
    pub fn extract(req: &impl InboundRequest, query_var: &str, languages: &LanguageMatcher) -> (String, Self) {
        let query = req.query_param(query_var).unwrap_or_default().to_string();

        let forced = req.query_param(LANGUAGE_PARAM).and_then(LanguageTag::parse).and_then(|t| languages.pick(&t));
        let language = match forced {
            Some(language) => language,
            None => match req.header("accept-language") {
                Some(header) => languages.negotiate(header),
                None => languages.default_language().clone(),
            },
        };

        let ctx = Self {
            language,
            ip: client_ip(req),
            user_agent: req.header("user-agent").map(str::to_string),
            ..Self::default()
        };

        (query, ctx)
    }

    pub fn with_ip(mut self, ip: IpAddr) -> Self {
        self.ip = Some(ip);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}

/// What a single module is allowed to see while solving.
///
/// The raw query is absent: modules work from their [`Match`](crate::Match)
/// only.
#[derive(Clone, Copy)]
pub struct Request<'a> {
    query_var: &'a str,
    language: &'a LanguageTag,
    client_user_agent: Option<&'a str>,
    outbound_user_agent: &'a str,
    ip: Option<IpAddr>,
    clock: &'a dyn Clock,
}

impl<'a> Request<'a> {
    /// Bind the request to one module, hiding undeclared dimensions.
    pub(crate) fn configure(
        ctx: &'a RequestContext,
        query_var: &'a str,
        outbound_user_agent: &'a str,
        requires: Requires,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            query_var,
            language: &ctx.language,
            client_user_agent: if requires.contains(Requires::USER_AGENT) { ctx.user_agent.as_deref() } else { None },
            outbound_user_agent,
            ip: if requires.contains(Requires::LOCATION) { ctx.ip } else { None },
            clock,
        }
    }

    pub fn query_var(&self) -> &str {
        self.query_var
    }

    pub fn language(&self) -> &LanguageTag {
        self.language
    }

    /// The caller's user agent. `None` unless the module requires it.
    pub fn client_user_agent(&self) -> Option<&str> {
        self.client_user_agent
    }

    /// The identity to present on outbound calls.
    pub fn outbound_user_agent(&self) -> &str {
        self.outbound_user_agent
    }

    /// The caller's IP. `None` unless the module requires location.
    pub fn ip(&self) -> Option<IpAddr> {
        self.ip
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock
    }
}

impl fmt::Debug for Request<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("query_var", &self.query_var)
            .field("language", &self.language)
            .field("client_user_agent", &self.client_user_agent)
            .field("ip", &self.ip)
            .field("clock", &"<clock>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use std::net::Ipv4Addr;

    fn tag(s: &str) -> LanguageTag {
        LanguageTag::parse(s).unwrap()
    }

    #[test]
    fn language_tags_are_normalized() {
        assert_eq!(tag("EN").as_str(), "en");
        assert_eq!(tag("en_us").as_str(), "en-US");
        assert_eq!(tag("zh-hant-tw").as_str(), "zh-Hant-TW");
        assert_eq!(tag("en-US").primary(), "en");
        assert!(LanguageTag::parse("").is_none());
        assert!(LanguageTag::parse("e").is_none());
        assert!(LanguageTag::parse("en--us").is_none());
    }

    #[test]
    fn negotiate_prefers_quality_then_order() {
        let matcher = LanguageMatcher::new(vec![tag("en"), tag("fr"), tag("de")], tag("en"));
        assert_eq!(matcher.negotiate("fr-CH, fr;q=0.9, en;q=0.8"), tag("fr"));
        assert_eq!(matcher.negotiate("de;q=0.2, fr;q=0.7"), tag("fr"));
        assert_eq!(matcher.negotiate("ja, *;q=0.5"), tag("en"));
        assert_eq!(matcher.negotiate("ja"), tag("en"));
        assert_eq!(matcher.negotiate("fr;q=0"), tag("en"));
    }

    #[test]
    fn empty_supported_list_accepts_anything() {
        let matcher = LanguageMatcher::new(Vec::new(), tag("en"));
        assert_eq!(matcher.negotiate("pt-BR"), tag("pt-BR"));
    }

    #[test]
    fn extract_reads_query_language_ip_and_agent() {
        let matcher = LanguageMatcher::new(vec![tag("en"), tag("fr")], tag("en"));
        let req = SimpleRequest::new()
            .param("q", "  weather in Paris ")
            .with_header("Accept-Language", "fr-FR,fr;q=0.9")
            .with_header("X-Forwarded-For", "161.59.224.138, 10.0.0.1")
            .with_header("User-Agent", "Mozilla/5.0")
            .remote(IpAddr::V4(Ipv4Addr::LOCALHOST));

        let (query, ctx) = RequestContext::extract(&req, "q", &matcher);
        assert_eq!(query, "  weather in Paris ");
        assert_eq!(ctx.language, tag("fr"));
        assert_eq!(ctx.ip, Some(IpAddr::V4(Ipv4Addr::new(161, 59, 224, 138))));
        assert_eq!(ctx.user_agent.as_deref(), Some("Mozilla/5.0"));
    }

    #[test]
    fn language_param_overrides_header() {
        let matcher = LanguageMatcher::new(vec![tag("en"), tag("de")], tag("en"));
        let req = SimpleRequest::new().param("query", "x").param("l", "de").with_header("accept-language", "en");
        let (query, ctx) = RequestContext::extract(&req, "query", &matcher);
        assert_eq!(query, "x");
        assert_eq!(ctx.language, tag("de"));
    }

    #[test]
    fn ip_falls_back_to_real_ip_then_remote() {
        let remote = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 2));
        let req = SimpleRequest::new().with_header("X-Real-IP", "8.8.8.8").remote(remote);
        assert_eq!(client_ip(&req), Some(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8))));

        let req = SimpleRequest::new().with_header("X-Forwarded-For", "garbage").remote(remote);
        assert_eq!(client_ip(&req), Some(remote));
    }

    #[test]
    fn request_view_hides_undeclared_dimensions() {
        let ctx = RequestContext::new(tag("en"))
            .with_ip(IpAddr::V4(Ipv4Addr::LOCALHOST))
            .with_user_agent("curl/8.0");
        let clock = SystemClock;

        let bare = Request::configure(&ctx, "q", "bot", Requires::empty(), &clock);
        assert_eq!(bare.ip(), None);
        assert_eq!(bare.client_user_agent(), None);
        assert_eq!(bare.outbound_user_agent(), "bot");

        let full = Request::configure(&ctx, "q", "bot", Requires::LOCATION | Requires::USER_AGENT, &clock);
        assert_eq!(full.ip(), Some(IpAddr::V4(Ipv4Addr::LOCALHOST)));
        assert_eq!(full.client_user_agent(), Some("curl/8.0"));
        assert_eq!(full.language().as_str(), "en");
    }
}
