//! Tauri commands for the IMDb scraper
//!
//! This module contains all Tauri commands that can be invoked from the frontend.

use tauri::State;

use crate::ImdbState;
use imdb_core::{DataSelection, Person, Reference, SearchType, Show};

/// Get the main information of a movie or series.
///
/// # Arguments
/// * `id` - IMDb title id (e.g. "tt0096697")
#[tauri::command]
pub async fn get_show(state: State<'_, ImdbState>, id: String) -> Result<Show, String> {
    state.imdb().get_show(&id).await.map_err(|e| e.to_string())
}

/// Get directors, writers and cast of a movie or series.
#[tauri::command]
pub async fn get_show_credits(state: State<'_, ImdbState>, id: String) -> Result<Show, String> {
    state
        .imdb()
        .get_show_credits(&id)
        .await
        .map_err(|e| e.to_string())
}

/// Get seasons and episodes of a series.
#[tauri::command]
pub async fn get_series_episodes(
    state: State<'_, ImdbState>,
    id: String,
) -> Result<Show, String> {
    state
        .imdb()
        .get_series_episodes(&id)
        .await
        .map_err(|e| e.to_string())
}

/// Get the selected parts of a show merged into one record.
///
/// # Arguments
/// * `id` - IMDb title id
/// * `selection` - Parts to load; everything when omitted
#[tauri::command]
pub async fn get_all_show_data(
    state: State<'_, ImdbState>,
    id: String,
    selection: Option<DataSelection>,
) -> Result<Show, String> {
    state
        .imdb()
        .get_all_show_data(&id, selection.unwrap_or_default())
        .await
        .map_err(|e| e.to_string())
}

/// Get a person's details and filmography.
///
/// # Arguments
/// * `id` - IMDb name id (e.g. "nm0144657")
#[tauri::command]
pub async fn get_person(state: State<'_, ImdbState>, id: String) -> Result<Person, String> {
    state.imdb().get_person(&id).await.map_err(|e| e.to_string())
}

/// Search for titles or people.
///
/// # Arguments
/// * `query` - Search query string
/// * `search_type` - `Title` or `Name`; titles when omitted
#[tauri::command]
pub async fn search(
    state: State<'_, ImdbState>,
    query: String,
    search_type: Option<SearchType>,
) -> Result<Vec<Reference>, String> {
    state
        .imdb()
        .search(&query, search_type.unwrap_or_default())
        .await
        .map_err(|e| e.to_string())
}
