//! Error types for the IMDb scraper
//!
//! ImdbError implements Serialize for Tauri compatibility.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// The part of the site an operation was trying to load.
///
/// Used to name the failed sub-operation when a page comes back with a
/// non-success status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    ShowInfo,
    ShowCredits,
    SeriesEpisodes,
    Person,
    SearchResults,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::ShowInfo => "show's info",
            Resource::ShowCredits => "show's credits",
            Resource::SeriesEpisodes => "series' episodes",
            Resource::Person => "person's info",
            Resource::SearchResults => "search results",
        };
        f.write_str(name)
    }
}

/// Error type for IMDb scraper operations
#[derive(Error, Debug)]
pub enum ImdbError {
    /// Transport failure, passed through from reqwest untouched
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A page of the operation answered with a non-success status
    #[error("Failed to get the {0}.")]
    Unavailable(Resource),

    /// The page loaded but a required structured block is missing
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Invalid IMDb identifier provided
    #[error("Invalid IMDb identifier: {0:?}")]
    InvalidId(String),

    /// Invalid search query provided
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    /// `get_all_show_data` was called with every part deselected
    #[error("Nothing selected to fetch")]
    EmptySelection,

    /// Client configuration cannot be turned into request headers
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Serialize ImdbError as a string for Tauri compatibility
impl Serialize for ImdbError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for IMDb scraper operations
pub type Result<T> = std::result::Result<T, ImdbError>;
