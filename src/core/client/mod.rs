//! Public client surface + builder.
//! Internals are split into `cache` (per-call cache mode) and `constants` (UA + defaults).

mod cache;
mod constants;

pub use cache::CacheMode;
pub(crate) use constants::INFO_TABLE_RENDER_DIR;

use crate::core::SecError;
use constants::{DEFAULT_BASE_ARCHIVES, DEFAULT_BASE_SUBMISSIONS, USER_AGENT};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use url::Url;

#[derive(Debug)]
struct CacheEntry {
    body: String,
    expires_at: Instant,
}

#[derive(Debug)]
struct CacheStore {
    map: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
}

/// Client for the EDGAR submissions API and filing archives.
///
/// Cloning is cheap: the HTTP connection pool and the response cache are shared.
#[derive(Debug, Clone)]
pub struct SecClient {
    http: Client,
    base_submissions: Url,
    base_archives: Url,
    cache: Option<Arc<CacheStore>>,
}

impl Default for SecClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl SecClient {
    /// Create a new builder.
    pub fn builder() -> SecClientBuilder {
        SecClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn base_submissions(&self) -> &Url {
        &self.base_submissions
    }
    pub(crate) fn base_archives(&self) -> &Url {
        &self.base_archives
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Drops every cached response.
    pub async fn clear_cache(&self) {
        if let Some(store) = &self.cache {
            store.map.write().await.clear();
        }
    }

    pub(crate) async fn cache_get(&self, url: &Url) -> Option<String> {
        let store = self.cache.as_ref()?;
        let guard = store.map.read().await;
        if let Some(entry) = guard.get(url.as_str())
            && Instant::now() <= entry.expires_at
        {
            return Some(entry.body.clone());
        }
        None
    }

    pub(crate) async fn cache_put(&self, url: &Url, body: &str, ttl_override: Option<Duration>) {
        let store = match &self.cache {
            Some(s) => s.clone(),
            None => return,
        };
        let ttl = ttl_override.unwrap_or(store.default_ttl);
        let entry = CacheEntry {
            body: body.to_string(),
            expires_at: Instant::now() + ttl,
        };
        let mut guard = store.map.write().await;
        guard.insert(url.as_str().to_string(), entry);
    }

    /// Sends a GET and maps non-success statuses to [`SecError::Status`].
    pub(crate) async fn get(&self, url: &Url) -> Result<reqwest::Response, SecError> {
        let resp = self.http.get(url.clone()).send().await?;
        if !resp.status().is_success() {
            return Err(SecError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct SecClientBuilder {
    user_agent: Option<String>,
    base_submissions: Option<Url>,
    base_archives: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache_ttl: Option<Duration>,
}

impl SecClientBuilder {
    /// Override the User-Agent. EDGAR expects `"<org or name> <contact email>"`.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the submissions API base (e.g., `https://data.sec.gov/submissions/`).
    #[must_use]
    pub fn base_submissions(mut self, url: Url) -> Self {
        self.base_submissions = Some(url);
        self
    }

    /// Override the archives base (e.g., `https://www.sec.gov/Archives/edgar/data/`).
    #[must_use]
    pub fn base_archives(mut self, url: Url) -> Self {
        self.base_archives = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Enable in-memory caching with a default TTL.
    /// If not set, caching is disabled.
    #[must_use]
    pub fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    pub fn build(self) -> Result<SecClient, SecError> {
        let base_submissions = match self.base_submissions {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_SUBMISSIONS)?,
        };
        let base_archives = match self.base_archives {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_ARCHIVES)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(SecClient {
            http,
            base_submissions,
            base_archives,
            cache: self.cache_ttl.map(|ttl| {
                Arc::new(CacheStore {
                    map: RwLock::new(HashMap::new()),
                    default_ttl: ttl,
                })
            }),
        })
    }
}
