//! Data types for the IMDb scraper
//!
//! Shows, people and the references between them. All types implement
//! Serialize and Deserialize for JSON compatibility with Tauri.
//!
//! Most fields are optional: a field that was not requested, or that the
//! page did not carry, stays `None` instead of defaulting to an empty value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pointer to another show or person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    /// IMDb identifier (e.g. `tt0096697` or `nm0144657`)
    pub identifier: String,
    /// Display name of the show or person
    pub name: String,
}

impl Reference {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
        }
    }
}

/// Mean user vote and number of votes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateRating {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<u64>,
}

/// Reference to a single episode of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeReference {
    pub identifier: String,
    pub name: String,
    /// Season number (1-based)
    pub season: u32,
    /// Episode number within the season (1-based)
    pub number: u32,
    /// Plot summary; `None` when the site only shows a truncated teaser
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub aggregate_rating: AggregateRating,
}

/// Poster or portrait URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Thumbnail as served on the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    /// Full-size variant, when the thumbnail URL pattern was recognized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub big: Option<String>,
}

/// People credited on a show, in site order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credits {
    pub directors: Vec<Reference>,
    pub writers: Vec<Reference>,
    pub cast: Vec<Reference>,
}

/// Fields shared by movies and series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowData {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Runtime in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_rating: Option<AggregateRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<Credits>,
    /// Release year (first aired year for series)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended: Option<Vec<Reference>>,
}

impl ShowData {
    /// Create an empty partial for the given identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Default::default()
        }
    }

    /// Fold a later partial of the same show into this one.
    ///
    /// A field defined in `later` replaces the current value; a field that
    /// `later` leaves unset never clears a defined one.
    pub fn merge(&mut self, later: ShowData) {
        if self.identifier.is_empty() {
            self.identifier = later.identifier;
        }
        merge_field(&mut self.url, later.url);
        merge_field(&mut self.name, later.name);
        merge_field(&mut self.alternative_name, later.alternative_name);
        merge_field(&mut self.summary, later.summary);
        merge_field(&mut self.description, later.description);
        merge_field(&mut self.duration, later.duration);
        merge_field(&mut self.aggregate_rating, later.aggregate_rating);
        merge_field(&mut self.genre, later.genre);
        merge_field(&mut self.image, later.image);
        merge_field(&mut self.content_rating, later.content_rating);
        merge_field(&mut self.credits, later.credits);
        merge_field(&mut self.year, later.year);
        merge_field(&mut self.recommended, later.recommended);
    }
}

fn merge_field<T>(slot: &mut Option<T>, later: Option<T>) {
    if later.is_some() {
        *slot = later;
    }
}

/// A feature film, short, TV movie and anything else that is not a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(flatten)]
    pub show: ShowData,
}

/// A TV series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    #[serde(flatten)]
    pub show: ShowData,
    /// Number of seasons listed on the episodes page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasons: Option<u32>,
    /// Episodes of every fetched season, in season then episode order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episodes: Option<Vec<EpisodeReference>>,
}

/// Kind of show, decided from the page's `og:type` tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShowKind {
    #[default]
    Movie,
    Series,
}

/// A movie or a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Show {
    Movie(Movie),
    Series(Series),
}

impl Show {
    /// Wrap shared show fields in the variant for `kind`.
    pub fn new(kind: ShowKind, show: ShowData) -> Self {
        match kind {
            ShowKind::Movie => Show::Movie(Movie { show }),
            ShowKind::Series => Show::Series(Series {
                show,
                ..Default::default()
            }),
        }
    }

    pub fn kind(&self) -> ShowKind {
        match self {
            Show::Movie(_) => ShowKind::Movie,
            Show::Series(_) => ShowKind::Series,
        }
    }

    pub fn data(&self) -> &ShowData {
        match self {
            Show::Movie(movie) => &movie.show,
            Show::Series(series) => &series.show,
        }
    }

    pub fn data_mut(&mut self) -> &mut ShowData {
        match self {
            Show::Movie(movie) => &mut movie.show,
            Show::Series(series) => &mut series.show,
        }
    }

    pub fn into_data(self) -> ShowData {
        match self {
            Show::Movie(movie) => movie.show,
            Show::Series(series) => series.show,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.data().identifier
    }

    pub fn as_movie(&self) -> Option<&Movie> {
        match self {
            Show::Movie(movie) => Some(movie),
            Show::Series(_) => None,
        }
    }

    pub fn as_series(&self) -> Option<&Series> {
        match self {
            Show::Series(series) => Some(series),
            Show::Movie(_) => None,
        }
    }

    /// Merge a later partial of the same show into this one.
    ///
    /// The kind of `self` wins. Series-only fields are carried over only when
    /// both sides are series; otherwise just the shared fields are merged.
    pub fn merge(mut self, later: Show) -> Show {
        match (&mut self, later) {
            (Show::Series(series), Show::Series(other)) => {
                series.show.merge(other.show);
                merge_field(&mut series.seasons, other.seasons);
                merge_field(&mut series.episodes, other.episodes);
            }
            (show, later) => show.data_mut().merge(later.into_data()),
        }
        self
    }
}

/// Works a person is credited on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filmography {
    pub known_for: Vec<Reference>,
    pub actor: Vec<Reference>,
    pub director: Vec<Reference>,
}

/// An actor, director, writer or any other credited person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Job categories, e.g. "Actor" or "Director"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Vec<String>>,
    /// Calendar date of birth, no time component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filmography: Option<Filmography>,
}

impl Person {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Default::default()
        }
    }
}

/// What a search should look for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchType {
    /// Movies and series
    #[default]
    Title,
    /// People
    Name,
}

impl SearchType {
    /// Value of the `s` query parameter on the find page.
    pub fn query_value(&self) -> &'static str {
        match self {
            SearchType::Title => "tt",
            SearchType::Name => "nm",
        }
    }

    /// First path segment of result links for this kind.
    pub fn path_segment(&self) -> &'static str {
        match self {
            SearchType::Title => "title",
            SearchType::Name => "name",
        }
    }
}

/// Which parts of a show `get_all_show_data` should load.
///
/// Every flag defaults to `true`, including flags missing from a
/// deserialized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSelection {
    pub main: bool,
    pub credits: bool,
    pub episodes: bool,
}

impl Default for DataSelection {
    fn default() -> Self {
        Self {
            main: true,
            credits: true,
            episodes: true,
        }
    }
}

impl DataSelection {
    pub fn is_empty(&self) -> bool {
        !(self.main || self.credits || self.episodes)
    }
}
