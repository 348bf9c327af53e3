//! HTTP client for IMDb
//!
//! This module provides the page fetching primitive used by the scraper:
//! a reqwest client carrying a fixed Accept-Language and a User-Agent drawn
//! from a pool of desktop browsers, plus an optional sink that receives every
//! fetched page for debugging.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, warn};

use crate::error::{ImdbError, Result};

/// Base URL for IMDb
pub const IMDB_BASE_URL: &str = "https://www.imdb.com";

/// Default locale sent as Accept-Language
const DEFAULT_LANGUAGE: &str = "en";

/// Directory used by debug mode
const DEBUG_DIR: &str = "scraps";

const DESKTOP_USER_AGENTS: [&str; 5] = [
    "Mozilla/5.0 (Windows NT 6.2; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/83.0.4103.116 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/83.0.4103.116 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_5) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/83.0.4103.116 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_11_6) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/11.1.2 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/83.0.4103.116 Safari/537.36",
];

/// Pool of User-Agent strings a client picks from once, at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgentPool {
    agents: Vec<String>,
}

impl UserAgentPool {
    /// The built-in pool of desktop browser strings.
    pub fn desktop() -> Self {
        Self {
            agents: DESKTOP_USER_AGENTS.iter().map(|ua| ua.to_string()).collect(),
        }
    }

    /// Create a pool from custom strings. An empty list falls back to
    /// [`UserAgentPool::desktop`].
    pub fn new(agents: Vec<String>) -> Self {
        if agents.is_empty() {
            return Self::desktop();
        }
        Self { agents }
    }

    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    /// Pick one agent from the pool.
    pub fn pick(&self, selector: UserAgentSelector) -> &str {
        let index = match selector {
            UserAgentSelector::Random => rand::rng().random_range(0..self.agents.len()),
            UserAgentSelector::Fixed(index) => index % self.agents.len(),
        };
        &self.agents[index]
    }
}

impl Default for UserAgentPool {
    fn default() -> Self {
        Self::desktop()
    }
}

/// How a client chooses its User-Agent from the pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserAgentSelector {
    /// Uniformly random entry
    #[default]
    Random,
    /// Entry at the given index (wrapping)
    Fixed(usize),
}

/// Kind of page fetched for an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Main,
    Technical,
    Credits,
    Episodes,
    Season(u32),
    Person,
    Search,
}

impl PageKind {
    /// Suffix used in debug dump file names; `None` for the entity's own page.
    fn slug(&self) -> Option<String> {
        match self {
            PageKind::Main | PageKind::Person => None,
            PageKind::Technical => Some("technical".to_string()),
            PageKind::Credits => Some("fullcredits".to_string()),
            PageKind::Episodes => Some("episodes".to_string()),
            PageKind::Season(season) => Some(format!("episodes_season_{}", season)),
            PageKind::Search => Some("find".to_string()),
        }
    }
}

/// A page body that was fetched successfully.
#[derive(Debug, Clone, Copy)]
pub struct FetchedPage<'a> {
    /// Title or person id, or the search query for search pages
    pub identifier: &'a str,
    pub kind: PageKind,
    /// Locale the page was requested in
    pub language: &'a str,
    pub body: &'a str,
}

/// Receives every successfully fetched page.
///
/// Sinks are a diagnostics side channel; they must not fail the fetch.
pub trait PageSink: Send + Sync {
    fn store(&self, page: &FetchedPage<'_>);
}

/// Writes fetched pages as HTML files into a directory.
#[derive(Debug, Clone)]
pub struct DebugDirSink {
    dir: PathBuf,
}

impl DebugDirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File name for a page: `{identifier}[_{page}]_{language}.html`.
    pub fn file_name(page: &FetchedPage<'_>) -> String {
        let identifier: String = page
            .identifier
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        match page.kind.slug() {
            Some(slug) => format!("{}_{}_{}.html", identifier, slug, page.language),
            None => format!("{}_{}.html", identifier, page.language),
        }
    }
}

impl PageSink for DebugDirSink {
    fn store(&self, page: &FetchedPage<'_>) {
        let path = self.dir.join(Self::file_name(page));
        let written = std::fs::create_dir_all(&self.dir)
            .and_then(|_| std::fs::write(&path, page.body));

        if let Err(e) = written {
            warn!(path = %path.display(), error = %e, "could not save debug page");
        }
    }
}

/// Configuration for the IMDb HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Locale tag sent as Accept-Language (default: "en")
    pub language: String,
    /// Save every fetched page under `scraps/` (default: false)
    pub debug_mode: bool,
    /// Site root, overridable for tests (default: https://www.imdb.com)
    pub base_url: String,
    /// Request timeout in seconds (default: none, transport decides)
    pub timeout_secs: Option<u64>,
    pub user_agents: UserAgentPool,
    pub user_agent_selector: UserAgentSelector,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            debug_mode: false,
            base_url: IMDB_BASE_URL.to_string(),
            timeout_secs: None,
            user_agents: UserAgentPool::desktop(),
            user_agent_selector: UserAgentSelector::Random,
        }
    }
}

impl ClientConfig {
    /// Default configuration with another locale.
    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Default::default()
        }
    }
}

/// HTTP client for IMDb pages
///
/// Non-success statuses are reported as `Ok(None)` so callers can name the
/// failed operation; transport errors are returned as they come.
pub struct ImdbClient {
    client: reqwest::Client,
    base_url: String,
    language: String,
    user_agent: String,
    sink: Option<Arc<dyn PageSink>>,
}

impl fmt::Debug for ImdbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImdbClient")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("user_agent", &self.user_agent)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

impl ImdbClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns an error if the language is not a valid header value or the
    /// HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let user_agent = config
            .user_agents
            .pick(config.user_agent_selector)
            .to_string();

        let accept_language = reqwest::header::HeaderValue::from_str(&config.language)
            .map_err(|_| ImdbError::InvalidConfig(format!("language {:?}", config.language)))?;

        let mut builder = reqwest::Client::builder()
            .user_agent(user_agent.clone())
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(reqwest::header::ACCEPT_LANGUAGE, accept_language);
                headers
            });
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let sink: Option<Arc<dyn PageSink>> = if config.debug_mode {
            Some(Arc::new(DebugDirSink::new(DEBUG_DIR)))
        } else {
            None
        };

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language,
            user_agent,
            sink,
        })
    }

    /// Replace the page sink (debug mode installs a [`DebugDirSink`]).
    pub fn with_page_sink(mut self, sink: Arc<dyn PageSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Absolute URL for a site path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the HTML of a site path.
    ///
    /// # Arguments
    /// * `path` - Path on the site (e.g., "/title/tt0096697")
    /// * `identifier` - Subject of the page, passed to the page sink
    /// * `kind` - Kind of page, passed to the page sink
    ///
    /// # Returns
    /// * `Ok(Some(html))` on a success status
    /// * `Ok(None)` on any other status
    ///
    /// # Errors
    /// - `ImdbError::Http` - Network error or unreadable body
    pub async fn fetch(&self, path: &str, identifier: &str, kind: PageKind) -> Result<Option<String>> {
        let url = self.url(path);
        debug!(%url, page = ?kind, "fetching page");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "page request was not successful");
            return Ok(None);
        }

        let body = response.text().await?;

        if let Some(sink) = &self.sink {
            sink.store(&FetchedPage {
                identifier,
                kind,
                language: &self.language,
                body: &body,
            });
        }

        Ok(Some(body))
    }
}
