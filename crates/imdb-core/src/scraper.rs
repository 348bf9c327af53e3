//! IMDb fetch orchestration
//!
//! Combines the HTTP client with the extraction rules. Each operation decides
//! which pages it needs, loads independent pages concurrently, and hands the
//! bodies to synchronous extraction helpers. Parsed documents never outlive
//! those helpers, so every future returned here is `Send`.

use std::future::Future;
use std::sync::Arc;

use futures::future::try_join_all;
use scraper::Html;
use tracing::debug;

use crate::client::{ClientConfig, ImdbClient, PageKind};
use crate::error::{ImdbError, Resource, Result};
use crate::parser::{ImdbRules, RuleSet};
use crate::types::{
    DataSelection, EpisodeReference, Person, Reference, SearchType, Show, ShowData, ShowKind,
};

/// Loads IMDb pages and turns them into shows, people and search results.
///
/// # Example
/// ```no_run
/// use imdb_core::ImdbScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = ImdbScraper::new()?;
///
///     let show = scraper.fetch_show_info("tt0096697").await?;
///     println!("{:?}", show.data().name);
///
///     Ok(())
/// }
/// ```
pub struct ImdbScraper {
    client: ImdbClient,
    rules: Arc<dyn RuleSet>,
}

impl ImdbScraper {
    /// Create a scraper with the default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(ImdbClient::new()?))
    }

    /// Create a scraper from a client configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_client(ImdbClient::with_config(config)?))
    }

    /// Create a scraper around a pre-configured client.
    pub fn with_client(client: ImdbClient) -> Self {
        Self {
            client,
            rules: Arc::new(ImdbRules),
        }
    }

    /// Replace the extraction rules.
    pub fn with_rules(mut self, rules: Arc<dyn RuleSet>) -> Self {
        self.rules = rules;
        self
    }

    pub fn client(&self) -> &ImdbClient {
        &self.client
    }

    /// Main information of a show: title page plus technical specs page.
    ///
    /// # Errors
    /// - `ImdbError::InvalidId` - Empty identifier
    /// - `ImdbError::Unavailable(Resource::ShowInfo)` - Either page failed
    /// - `ImdbError::MalformedResponse` - Title page lacks its metadata block
    pub async fn fetch_show_info(&self, id: &str) -> Result<Show> {
        let id = validate_id(id)?;
        debug!(id, "fetching show info");

        let (main, technical) = self.fetch_info_pages(id).await?;
        let (kind, show) = self.read_show_info(id, &main, &technical)?;
        debug!(id, ?kind, "parsed show info");
        Ok(Show::new(kind, show))
    }

    /// Directors, writers and cast of a show.
    ///
    /// # Errors
    /// - `ImdbError::InvalidId` - Empty identifier
    /// - `ImdbError::Unavailable(Resource::ShowCredits)` - Credits page failed
    pub async fn fetch_show_credits(&self, id: &str) -> Result<Show> {
        let id = validate_id(id)?;
        debug!(id, "fetching show credits");

        let body = self.fetch_credits_page(id).await?;
        let (kind, show) = self.read_credits(id, &body);
        debug!(id, ?kind, "parsed show credits");
        Ok(Show::new(kind, show))
    }

    /// Season count and every episode of a series.
    ///
    /// The episodes index is loaded first; a series then has all of its season
    /// pages loaded concurrently. A movie comes back without season data.
    ///
    /// # Errors
    /// - `ImdbError::InvalidId` - Empty identifier
    /// - `ImdbError::Unavailable(Resource::SeriesEpisodes)` - Index or any
    ///   season page failed
    pub async fn fetch_series_episodes(&self, id: &str) -> Result<Show> {
        let id = validate_id(id)?;
        debug!(id, "fetching series episodes");

        let body = self.fetch_episodes_index(id).await?;
        let (kind, seasons) = self.read_episode_index(&body);
        self.episodes_partial(id, kind, seasons).await
    }

    /// Load the selected parts of a show and merge them into one record.
    ///
    /// Main info, credits and the episodes index are loaded concurrently.
    /// The kind comes from the first loaded page in the order main, credits,
    /// episodes; season pages are only loaded for a series. Once main or
    /// credits show a movie, the episodes index is ignored, including a
    /// failure to load it.
    ///
    /// # Errors
    /// - `ImdbError::EmptySelection` - Nothing selected
    /// - Any error of the selected sub-operations; no partial result is
    ///   returned
    pub async fn fetch_all(&self, id: &str, selection: DataSelection) -> Result<Show> {
        let id = validate_id(id)?;
        if selection.is_empty() {
            return Err(ImdbError::EmptySelection);
        }
        debug!(id, ?selection, "fetching show data");

        let (info, credits, index) = tokio::try_join!(
            when(selection.main, self.fetch_info_pages(id)),
            when(selection.credits, self.fetch_credits_page(id)),
            when(selection.episodes, settled(self.fetch_episodes_index(id))),
        )?;

        let info = info
            .map(|(main, technical)| self.read_show_info(id, &main, &technical))
            .transpose()?;
        let credits = credits.map(|body| self.read_credits(id, &body));

        let known_kind = info
            .as_ref()
            .map(|(kind, _)| *kind)
            .or_else(|| credits.as_ref().map(|(kind, _)| *kind));
        let index = match (known_kind, index) {
            (Some(ShowKind::Movie), Some(Err(error))) => {
                debug!(id, %error, "ignoring episodes index of a movie");
                None
            }
            (Some(ShowKind::Movie), _) => None,
            (_, index) => index
                .transpose()?
                .map(|body| self.read_episode_index(&body)),
        };

        let kind = known_kind
            .or_else(|| index.map(|(kind, _)| kind))
            .unwrap_or_default();

        let mut partials = Vec::with_capacity(3);
        if let Some((_, show)) = info {
            partials.push(Show::new(kind, show));
        }
        if let Some((_, show)) = credits {
            partials.push(Show::new(kind, show));
        }
        if let Some((_, seasons)) = index {
            partials.push(self.episodes_partial(id, kind, seasons).await?);
        }

        let mut partials = partials.into_iter();
        let first = partials.next().ok_or(ImdbError::EmptySelection)?;
        Ok(partials.fold(first, Show::merge))
    }

    /// Information about a person.
    ///
    /// # Errors
    /// - `ImdbError::InvalidId` - Empty identifier
    /// - `ImdbError::Unavailable(Resource::Person)` - Name page failed
    pub async fn fetch_person(&self, id: &str) -> Result<Person> {
        let id = validate_id(id)?;
        debug!(id, "fetching person");

        let path = format!("/name/{}", id);
        let body = self
            .page(&path, id, PageKind::Person, Resource::Person)
            .await?;

        let mut person = Person::new(id);
        person.url = Some(self.client.url(&path));
        self.rules.person(&Html::parse_document(&body), &mut person);
        Ok(person)
    }

    /// Search for titles or people.
    ///
    /// # Errors
    /// - `ImdbError::InvalidQuery` - Empty or whitespace-only query
    /// - `ImdbError::Unavailable(Resource::SearchResults)` - Find page failed
    pub async fn search(&self, query: &str, search_type: SearchType) -> Result<Vec<Reference>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ImdbError::InvalidQuery("Search query cannot be empty".to_string()));
        }
        debug!(query, ?search_type, "searching");

        let path = format!(
            "/find?q={}&s={}",
            urlencoding::encode(query),
            search_type.query_value()
        );
        let body = self
            .page(&path, query, PageKind::Search, Resource::SearchResults)
            .await?;

        let results = self
            .rules
            .search_results(&Html::parse_document(&body), search_type);
        debug!(query, count = results.len(), "parsed search results");
        Ok(results)
    }

    /// Fetch a page that must exist for the operation to succeed.
    async fn page(
        &self,
        path: &str,
        id: &str,
        kind: PageKind,
        resource: Resource,
    ) -> Result<String> {
        self.client
            .fetch(path, id, kind)
            .await?
            .ok_or(ImdbError::Unavailable(resource))
    }

    async fn fetch_info_pages(&self, id: &str) -> Result<(String, String)> {
        let main_path = title_path(id);
        let technical_path = format!("{}/technical", main_path);

        tokio::try_join!(
            self.page(&main_path, id, PageKind::Main, Resource::ShowInfo),
            self.page(&technical_path, id, PageKind::Technical, Resource::ShowInfo),
        )
    }

    async fn fetch_credits_page(&self, id: &str) -> Result<String> {
        let path = format!("{}/fullcredits", title_path(id));
        self.page(&path, id, PageKind::Credits, Resource::ShowCredits)
            .await
    }

    async fn fetch_episodes_index(&self, id: &str) -> Result<String> {
        let path = format!("{}/episodes", title_path(id));
        self.page(&path, id, PageKind::Episodes, Resource::SeriesEpisodes)
            .await
    }

    /// Season pages `1..=seasons`, loaded concurrently, parsed in season order.
    async fn fetch_seasons(&self, id: &str, seasons: u32) -> Result<Vec<EpisodeReference>> {
        let pages = try_join_all((1..=seasons).map(|season| async move {
            let path = format!("{}/episodes?season={}", title_path(id), season);
            let body = self
                .page(&path, id, PageKind::Season(season), Resource::SeriesEpisodes)
                .await?;
            Ok::<_, ImdbError>((season, body))
        }))
        .await?;

        let episodes = self.read_seasons(&pages);
        debug!(id, seasons, episodes = episodes.len(), "parsed season pages");
        Ok(episodes)
    }

    /// Season data of a series; left unset when the index lists no season.
    async fn episodes_partial(
        &self,
        id: &str,
        kind: ShowKind,
        seasons: Option<u32>,
    ) -> Result<Show> {
        let mut show = Show::new(kind, self.show_data(id));
        if kind != ShowKind::Series {
            return Ok(show);
        }

        let Some(seasons) = seasons else {
            debug!(id, "episodes index lists no seasons");
            return Ok(show);
        };

        debug!(id, seasons, "fetching season pages");
        let episodes = self.fetch_seasons(id, seasons).await?;
        if let Show::Series(series) = &mut show {
            series.seasons = Some(seasons);
            series.episodes = Some(episodes);
        }
        Ok(show)
    }

    fn show_data(&self, id: &str) -> ShowData {
        let mut show = ShowData::new(id);
        show.url = Some(self.client.url(&title_path(id)));
        show
    }

    fn read_show_info(&self, id: &str, main: &str, technical: &str) -> Result<(ShowKind, ShowData)> {
        let main = Html::parse_document(main);
        let technical = Html::parse_document(technical);

        let mut show = self.show_data(id);
        self.rules.show_info(&main, &technical, &mut show)?;
        Ok((self.rules.show_kind(&main), show))
    }

    fn read_credits(&self, id: &str, body: &str) -> (ShowKind, ShowData) {
        let document = Html::parse_document(body);

        let mut show = self.show_data(id);
        show.credits = Some(self.rules.show_credits(&document));
        (self.rules.show_kind(&document), show)
    }

    fn read_episode_index(&self, body: &str) -> (ShowKind, Option<u32>) {
        let document = Html::parse_document(body);
        (
            self.rules.show_kind(&document),
            self.rules.season_count(&document),
        )
    }

    fn read_seasons(&self, pages: &[(u32, String)]) -> Vec<EpisodeReference> {
        pages
            .iter()
            .flat_map(|(season, body)| {
                self.rules
                    .season_episodes(&Html::parse_document(body), *season)
            })
            .collect()
    }
}

/// Run `fetch` to completion, handing its outcome back as a value so a join
/// does not stop on it.
async fn settled<T>(fetch: impl Future<Output = Result<T>>) -> Result<Result<T>> {
    Ok(fetch.await)
}

/// Run `fetch` only when `enabled`.
async fn when<T>(enabled: bool, fetch: impl Future<Output = Result<T>>) -> Result<Option<T>> {
    if enabled {
        fetch.await.map(Some)
    } else {
        Ok(None)
    }
}

fn validate_id(id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ImdbError::InvalidId(id.to_string()));
    }
    Ok(id)
}

fn title_path(id: &str) -> String {
    format!("/title/{}", id)
}
