//! IMDb Scraper Tauri Integration
//!
//! This crate provides Tauri commands for integrating the IMDb scraper
//! into Tauri 2.0 applications.
//!
//! # Usage
//!
//! ```rust,ignore
//! use imdb_tauri::ImdbState;
//! use tauri::Manager;
//!
//! fn main() {
//!     tauri::Builder::default()
//!         .setup(|app| {
//!             app.manage(ImdbState::new("en", false)?);
//!             Ok(())
//!         })
//!         .invoke_handler(tauri::generate_handler![
//!             imdb_tauri::commands::get_show,
//!             imdb_tauri::commands::get_show_credits,
//!             imdb_tauri::commands::get_series_episodes,
//!             imdb_tauri::commands::get_all_show_data,
//!             imdb_tauri::commands::get_person,
//!             imdb_tauri::commands::search,
//!         ])
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! # Commands
//! - `get_show` - Main information of a movie or series
//! - `get_show_credits` - Directors, writers and cast
//! - `get_series_episodes` - Seasons and episodes of a series
//! - `get_all_show_data` - Selected parts merged into one record
//! - `get_person` - Person details and filmography
//! - `search` - Title or name search

pub mod commands;

use std::sync::Arc;

use imdb_core::{ClientConfig, Imdb};

/// Shared IMDb instance managed by Tauri.
///
/// `Imdb` keeps no mutable state between calls, so commands use it
/// concurrently without locking.
pub struct ImdbState {
    imdb: Arc<Imdb>,
}

impl ImdbState {
    /// Create the state for a locale.
    ///
    /// # Arguments
    /// * `language` - Accept-Language sent with every request (e.g. "en")
    /// * `debug_mode` - Save every fetched page under `scraps/`
    ///
    /// # Errors
    /// Returns an error string if the client cannot be created.
    pub fn new(language: &str, debug_mode: bool) -> Result<Self, String> {
        let config = ClientConfig {
            debug_mode,
            ..ClientConfig::with_language(language)
        };
        let imdb = Imdb::with_config(config).map_err(|e| e.to_string())?;
        Ok(Self {
            imdb: Arc::new(imdb),
        })
    }

    pub fn imdb(&self) -> &Arc<Imdb> {
        &self.imdb
    }
}
