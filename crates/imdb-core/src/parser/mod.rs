//! HTML parsers for IMDb pages
//!
//! This module contains the extraction rules for each kind of IMDb page:
//! - `show`: main title page, technical specs page, show kind
//! - `credits`: full credits page
//! - `episodes`: episodes index and per-season pages
//! - `person`: name page
//! - `search`: find page
//!
//! Rules are pure functions of the parsed page. A rule whose markup is missing
//! yields `None` (or an empty list) instead of failing; only the structured
//! metadata block of the main page is required.
//!
//! The rules target the markup IMDb serves at a point in time. The whole set
//! sits behind [`RuleSet`] so it can be replaced without touching the scraper.

pub mod credits;
pub mod episodes;
pub mod person;
pub mod search;
pub mod show;

use scraper::{ElementRef, Html, Selector};

use crate::error::Result;
use crate::types::{Credits, EpisodeReference, Person, Reference, SearchType, ShowData, ShowKind};

// Re-export main parsing functions
pub use credits::parse_credits;
pub use episodes::{parse_season_count, parse_season_episodes};
pub use person::{parse_birth_date, parse_person};
pub use search::parse_search_results;
pub use show::{parse_duration, parse_show_info, parse_show_kind};

/// Extraction rules for every kind of page the scraper loads.
///
/// Implementations read from an already parsed document and must not perform
/// I/O. The scraper assigns identifiers and URLs; rules only fill in what the
/// page carries.
pub trait RuleSet: Send + Sync {
    /// Decide whether a title page describes a movie or a series.
    fn show_kind(&self, page: &Html) -> ShowKind;

    /// Fill the main show fields from the title page and its technical page.
    ///
    /// # Errors
    /// `ImdbError::MalformedResponse` if the title page lacks its structured
    /// metadata block.
    fn show_info(&self, main: &Html, technical: &Html, show: &mut ShowData) -> Result<()>;

    /// Directors, writers and cast from the full credits page.
    fn show_credits(&self, page: &Html) -> Credits;

    /// Number of seasons listed on the episodes index page, `None` when the
    /// page lists none.
    fn season_count(&self, page: &Html) -> Option<u32>;

    /// Episodes of one season page, in page order.
    fn season_episodes(&self, page: &Html, season: u32) -> Vec<EpisodeReference>;

    /// Fill person fields from the name page.
    fn person(&self, page: &Html, person: &mut Person);

    /// Result rows of the find page.
    fn search_results(&self, page: &Html, search_type: SearchType) -> Vec<Reference>;
}

/// Rules for the current IMDb markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImdbRules;

impl RuleSet for ImdbRules {
    fn show_kind(&self, page: &Html) -> ShowKind {
        parse_show_kind(page)
    }

    fn show_info(&self, main: &Html, technical: &Html, show: &mut ShowData) -> Result<()> {
        parse_show_info(main, technical, show)
    }

    fn show_credits(&self, page: &Html) -> Credits {
        parse_credits(page)
    }

    fn season_count(&self, page: &Html) -> Option<u32> {
        parse_season_count(page)
    }

    fn season_episodes(&self, page: &Html, season: u32) -> Vec<EpisodeReference> {
        parse_season_episodes(page, season)
    }

    fn person(&self, page: &Html, person: &mut Person) {
        parse_person(page, person)
    }

    fn search_results(&self, page: &Html, search_type: SearchType) -> Vec<Reference> {
        parse_search_results(page, search_type)
    }
}

/// First element matching any of the selectors, tried in order.
pub(crate) fn select_first<'a>(document: &'a Html, selectors: &[&str]) -> Option<ElementRef<'a>> {
    for selector_str in selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(el) = document.select(&selector).next() {
                return Some(el);
            }
        }
    }
    None
}

/// First descendant of `scope` matching `selector`.
pub(crate) fn first_in<'a>(scope: &ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    scope.select(&selector).next()
}

/// Trimmed text content of an element.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text that precedes the first child element, e.g. "Joker" in
/// `<h1>Joker&nbsp;<span>(2019)</span></h1>`. Falls back to the full text
/// when there is none.
pub(crate) fn leading_text(element: &ElementRef) -> String {
    let mut leading = String::new();
    for node in element.children() {
        match node.value().as_text() {
            Some(text) => leading.push_str(text),
            None => break,
        }
    }

    let leading = leading.trim();
    if leading.is_empty() {
        element_text(element)
    } else {
        leading.to_string()
    }
}

/// Next sibling that is an element, skipping text and comments.
pub(crate) fn next_element<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

/// Reference built from a link whose href carries `/{segment}/{id}`.
pub(crate) fn link_reference(link: &ElementRef, segment: &str) -> Option<Reference> {
    let href = link.value().attr("href")?;
    let identifier = extract_id(href, segment)?;
    Some(Reference {
        identifier,
        name: element_text(link),
    })
}

/// Decode HTML entities in text that did not come from the DOM.
///
/// # Examples
/// ```
/// use imdb_core::parser::decode_entities;
///
/// assert_eq!(decode_entities("Tom &amp; Jerry"), "Tom & Jerry");
/// assert_eq!(decode_entities("Homer&apos;s odyssey"), "Homer's odyssey");
/// ```
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    Html::parse_fragment(text).root_element().text().collect()
}

/// Extract an IMDb identifier from a link.
///
/// # Arguments
/// * `href` - Link target, relative or absolute
/// * `segment` - Path segment preceding the id ("title" or "name")
///
/// # Examples
/// ```
/// use imdb_core::parser::extract_id;
///
/// assert_eq!(extract_id("/title/tt0182576/?ref_=tt_sims_tt", "title"), Some("tt0182576".to_string()));
/// assert_eq!(extract_id("https://www.imdb.com/name/nm0144657/", "name"), Some("nm0144657".to_string()));
/// assert_eq!(extract_id("/name/nm0144657/", "title"), None);
/// ```
pub fn extract_id(href: &str, segment: &str) -> Option<String> {
    let re = regex_lite::Regex::new(&format!(r"/{}/([^/?#]+)", segment)).ok()?;
    let caps = re.captures(href)?;
    Some(caps.get(1)?.as_str().to_string())
}

/// Parse a rating value, accepting a comma as decimal separator.
///
/// # Examples
/// ```
/// use imdb_core::parser::parse_rating_value;
///
/// assert_eq!(parse_rating_value("8,7"), Some(8.7));
/// assert_eq!(parse_rating_value(" 8.7 "), Some(8.7));
/// assert_eq!(parse_rating_value("n/a"), None);
/// ```
pub fn parse_rating_value(text: &str) -> Option<f64> {
    let normalized: String = text
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    normalized.parse().ok()
}

/// Parse a vote count, dropping thousands separators.
///
/// # Examples
/// ```
/// use imdb_core::parser::parse_count;
///
/// assert_eq!(parse_count("(1,234)"), Some(1234));
/// assert_eq!(parse_count("1.234.567"), Some(1234567));
/// assert_eq!(parse_count("none"), None);
/// ```
pub fn parse_count(text: &str) -> Option<u64> {
    let re = regex_lite::Regex::new(r"\d[\d.,\s]*").ok()?;
    let run = re.find(text)?.as_str();
    let digits: String = run.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Full-size variant of an IMDb thumbnail URL.
///
/// Thumbnails end in `_V1_<resize options>.jpg`; dropping the options yields
/// the original image. Unrecognized URLs give `None`.
///
/// # Examples
/// ```
/// use imdb_core::parser::big_image_url;
///
/// assert_eq!(
///     big_image_url("https://m.media-amazon.com/images/M/abc@._V1_QL75_UX190_CR0,2,190,281_.jpg"),
///     Some("https://m.media-amazon.com/images/M/abc@._V1_.jpg".to_string())
/// );
/// assert_eq!(big_image_url("https://example.com/poster.png"), None);
/// ```
pub fn big_image_url(small: &str) -> Option<String> {
    let re = regex_lite::Regex::new(r"_V1_(.+)\.jpg").ok()?;
    if !re.is_match(small) {
        return None;
    }
    Some(re.replace(small, "_V1_.jpg").into_owned())
}
