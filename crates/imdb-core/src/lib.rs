//! IMDb Scraper Core Library
//!
//! This crate provides the core scraping functionality for IMDb
//! (the Internet Movie Database).
//!
//! # Features
//! - Main information, credits and episodes of movies and series
//! - Merging of selected show parts into one record
//! - People and their filmography
//! - Title and name search
//! - Locale-aware requests and optional capture of fetched pages

pub mod client;
pub mod error;
pub mod imdb;
pub mod parser;
pub mod scraper;
pub mod types;

#[cfg(test)]
mod fixtures;

// Re-export main types for convenience
pub use client::{
    ClientConfig, DebugDirSink, FetchedPage, ImdbClient, PageKind, PageSink, UserAgentPool,
    UserAgentSelector,
};
pub use error::{ImdbError, Resource, Result};
pub use imdb::Imdb;
pub use parser::{ImdbRules, RuleSet};
pub use scraper::ImdbScraper;
pub use types::{
    AggregateRating, Credits, DataSelection, EpisodeReference, Filmography, Image, Movie, Person,
    Reference, SearchType, Series, Show, ShowData, ShowKind,
};
