//! Public entry point
//!
//! `Imdb` is the API front-ends use. It is cheap to share behind an `Arc`:
//! every call builds its own local state, so no lock is needed.

use crate::client::ClientConfig;
use crate::error::Result;
use crate::scraper::ImdbScraper;
use crate::types::{DataSelection, Person, Reference, SearchType, Show};

/// IMDb API.
///
/// # Example
/// ```no_run
/// use imdb_core::{DataSelection, Imdb, SearchType};
///
/// # async fn example() -> Result<(), imdb_core::ImdbError> {
/// let imdb = Imdb::new()?;
///
/// let results = imdb.search("Dragon Ball", SearchType::default()).await?;
/// if let Some(first) = results.first() {
///     let show = imdb.get_all_show_data(&first.identifier, DataSelection::default()).await?;
///     println!("{:?}", show.data().name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Imdb {
    scraper: ImdbScraper,
}

impl Imdb {
    /// Create an instance with the default configuration (English, no debug
    /// capture).
    pub fn new() -> Result<Self> {
        Ok(Self::with_scraper(ImdbScraper::new()?))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_scraper(ImdbScraper::with_config(config)?))
    }

    pub fn with_scraper(scraper: ImdbScraper) -> Self {
        Self { scraper }
    }

    pub fn scraper(&self) -> &ImdbScraper {
        &self.scraper
    }

    /// Main information of a movie or series.
    pub async fn get_show(&self, id: &str) -> Result<Show> {
        self.scraper.fetch_show_info(id).await
    }

    /// Directors, writers and cast of a movie or series.
    pub async fn get_show_credits(&self, id: &str) -> Result<Show> {
        self.scraper.fetch_show_credits(id).await
    }

    /// Seasons and episodes of a series; a movie comes back without them.
    pub async fn get_series_episodes(&self, id: &str) -> Result<Show> {
        self.scraper.fetch_series_episodes(id).await
    }

    /// The selected parts of a show merged into one record.
    ///
    /// Use `DataSelection::default()` to load everything.
    pub async fn get_all_show_data(&self, id: &str, selection: DataSelection) -> Result<Show> {
        self.scraper.fetch_all(id, selection).await
    }

    pub async fn get_person(&self, id: &str) -> Result<Person> {
        self.scraper.fetch_person(id).await
    }

    pub async fn search(&self, query: &str, search_type: SearchType) -> Result<Vec<Reference>> {
        self.scraper.search(query, search_type).await
    }
}
