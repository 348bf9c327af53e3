//! Episodes parser for IMDb
//!
//! Parses the episodes index (`/title/{id}/episodes`) for the number of
//! seasons, and per-season pages (`/title/{id}/episodes?season={n}`) for the
//! episode list.

use scraper::{ElementRef, Html, Selector};

use crate::types::{AggregateRating, EpisodeReference};

use super::{element_text, extract_id, first_in, parse_count, parse_rating_value};

/// Count the seasons offered by the season picker.
///
/// The picker has a placeholder option with value `-1` which is not counted.
/// Returns `None` when there is no picker or it offers no season.
pub fn parse_season_count(document: &Html) -> Option<u32> {
    let selector = Selector::parse("#bySeason option").ok()?;

    let count = document
        .select(&selector)
        .filter(|option| option.value().attr("value") != Some("-1"))
        .count() as u32;
    (count > 0).then_some(count)
}

/// Parse the episodes of one season page, in page order.
///
/// # Arguments
/// * `document` - Parsed season page
/// * `season` - Season number the page was requested for
pub fn parse_season_episodes(document: &Html, season: u32) -> Vec<EpisodeReference> {
    let Ok(selector) = Selector::parse("div.list_item") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .enumerate()
        .filter_map(|(index, item)| parse_episode_item(&item, season, index as u32 + 1))
        .collect()
}

fn parse_episode_item(item: &ElementRef, season: u32, position: u32) -> Option<EpisodeReference> {
    let identifier = episode_identifier(item)?;

    let name = first_in(item, "a[itemprop='name']")
        .map(|link| element_text(&link))
        .unwrap_or_default();

    Some(EpisodeReference {
        identifier,
        name,
        season,
        number: episode_number(item).unwrap_or(position),
        summary: episode_summary(item),
        aggregate_rating: AggregateRating {
            rating_value: first_in(item, "span.ipl-rating-star__rating")
                .and_then(|el| parse_rating_value(&element_text(&el))),
            rating_count: first_in(item, "span.ipl-rating-star__total-votes")
                .and_then(|el| parse_count(&element_text(&el))),
        },
    })
}

fn episode_identifier(item: &ElementRef) -> Option<String> {
    let tconst = first_in(item, "div.wtw-option-standalone[data-tconst]")
        .and_then(|el| el.value().attr("data-tconst"))
        .map(str::trim)
        .filter(|id| !id.is_empty());
    if let Some(id) = tconst {
        return Some(id.to_string());
    }

    let link = first_in(item, "a[itemprop='name']")?;
    extract_id(link.value().attr("href")?, "title")
}

fn episode_number(item: &ElementRef) -> Option<u32> {
    let parse = |meta: ElementRef| -> Option<u32> { meta.value().attr("content")?.trim().parse().ok() };

    first_in(item, "meta[itemprop='episodeNumber']")
        .and_then(parse)
        .or_else(|| first_in(item, "meta").and_then(parse))
}

/// Episodes without a plot show an "add a plot" link instead of text.
fn episode_summary(item: &ElementRef) -> Option<String> {
    let description = first_in(item, "div[itemprop='description']")?;
    if first_in(&description, "a[href]").is_some() {
        return None;
    }

    let text = element_text(&description);
    (!text.is_empty()).then_some(text)
}
