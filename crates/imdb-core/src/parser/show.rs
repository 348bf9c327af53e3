//! Title page parser for IMDb
//!
//! Parses the main title page (`/title/{id}`) and its technical specs page
//! (`/title/{id}/technical`) into the shared show fields.

use chrono::{Datelike, NaiveDate};
use scraper::{Html, Selector};
use serde::Deserialize;

use crate::error::{ImdbError, Result};
use crate::types::{AggregateRating, Image, Reference, ShowData, ShowKind};

use super::{
    big_image_url, decode_entities, element_text, leading_text, link_reference, next_element,
    parse_count, parse_rating_value, select_first,
};

/// `og:type` category token marking a series.
const TV_SHOW_MARKER: &str = "tv_show";

/// Structured metadata block embedded in title pages.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LinkedData {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    content_rating: Option<String>,
    #[serde(default)]
    date_published: Option<String>,
    #[serde(default)]
    aggregate_rating: Option<LinkedRating>,
    #[serde(default)]
    genre: Option<OneOrMany>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LinkedRating {
    #[serde(default)]
    rating_value: Option<NumberOrText>,
    #[serde(default)]
    rating_count: Option<NumberOrText>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    fn as_rating(&self) -> Option<f64> {
        match self {
            NumberOrText::Number(n) => Some(*n),
            NumberOrText::Text(text) => parse_rating_value(text),
        }
    }

    fn as_count(&self) -> Option<u64> {
        match self {
            NumberOrText::Number(n) if *n >= 0.0 => Some(n.round() as u64),
            NumberOrText::Number(_) => None,
            NumberOrText::Text(text) => parse_count(text),
        }
    }
}

/// Decide the show kind from the page's `og:type` meta tag.
///
/// `video.tv_show` means a series; any other value, or no tag at all, means
/// a movie.
pub fn parse_show_kind(document: &Html) -> ShowKind {
    let content = select_first(document, &["meta[property='og:type']"])
        .and_then(|meta| meta.value().attr("content"));

    match content.and_then(|c| c.split('.').nth(1)) {
        Some(category) if category == TV_SHOW_MARKER => ShowKind::Series,
        _ => ShowKind::Movie,
    }
}

/// Parse the main show fields.
///
/// # Arguments
/// * `main` - Parsed title page
/// * `technical` - Parsed technical specs page (source of the runtime)
/// * `show` - Partial to fill; identifier and URL are left to the caller
///
/// # Returns
/// * `Err(ImdbError::MalformedResponse)` if the title page has no parsable
///   ld+json block
pub fn parse_show_info(main: &Html, technical: &Html, show: &mut ShowData) -> Result<()> {
    let linked = parse_linked_data(main)?;

    show.name = extract_show_name(main);
    show.alternative_name = extract_alternative_name(main);
    show.summary = linked.description.as_deref().map(|d| decode_entities(d).trim().to_string());
    show.description = extract_description(main);
    show.content_rating = linked.content_rating.as_deref().map(|r| decode_entities(r).trim().to_string());
    show.year = extract_year(&linked, main);
    show.duration = parse_duration(technical);
    show.aggregate_rating = extract_rating(&linked, main);
    show.genre = extract_genre(&linked, main);
    show.image = extract_poster(main);
    show.recommended = extract_recommended(main);

    Ok(())
}

/// Parse the required ld+json metadata block.
fn parse_linked_data(document: &Html) -> Result<LinkedData> {
    let script = select_first(document, &["script[type='application/ld+json']"])
        .ok_or_else(|| ImdbError::MalformedResponse("missing ld+json metadata".to_string()))?;

    let json = script.text().collect::<String>();
    serde_json::from_str(&json)
        .map_err(|e| ImdbError::MalformedResponse(format!("invalid ld+json metadata: {}", e)))
}

/// Extract the show name from the title heading.
fn extract_show_name(document: &Html) -> Option<String> {
    let heading = select_first(
        document,
        &["h1[data-testid='hero__pageTitle']", "div.title_wrapper h1"],
    )?;
    let name = leading_text(&heading);
    (!name.is_empty()).then_some(name)
}

/// Extract the original title, dropping a "Original title: " style label.
fn extract_alternative_name(document: &Html) -> Option<String> {
    let block = select_first(
        document,
        &[
            "div[class^='OriginalTitle']",
            "[data-testid='hero-title-block__original-title']",
            "div.originalTitle",
        ],
    )?;

    let mut value = leading_text(&block);
    if let Some(idx) = value.find(": ") {
        value = value[idx + 2..].to_string();
    }

    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

/// Extract the plot outline shown under the title.
fn extract_description(document: &Html) -> Option<String> {
    let span = select_first(document, &["p[data-testid='plot'] span"])?;
    let text = element_text(&span);
    (!text.is_empty()).then_some(text)
}

/// Release year from the metadata, then from the year links in the markup.
fn extract_year(linked: &LinkedData, document: &Html) -> Option<i32> {
    if let Some(year) = linked.date_published.as_deref().and_then(year_of_date) {
        return Some(year);
    }

    let link = select_first(
        document,
        &[
            "#titleYear a",
            "a[title='See more release dates']",
            "ul[data-testid='hero-title-block__metadata'] a",
        ],
    )?;
    first_year(&element_text(&link))
}

fn year_of_date(date: &str) -> Option<i32> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map(|d| d.year())
        .ok()
        .or_else(|| first_year(date))
}

fn first_year(text: &str) -> Option<i32> {
    let re = regex_lite::Regex::new(r"\d{4}").ok()?;
    re.find(text)?.as_str().parse().ok()
}

/// Parse the runtime in minutes from the technical specs page.
///
/// Takes the last number of the "Runtime" row, so "1 hr 30 min (90 min)"
/// gives 90 and "22 min" gives 22.
pub fn parse_duration(technical: &Html) -> Option<u32> {
    if let Ok(selector) = Selector::parse("#technical_content tr > td.label") {
        for label in technical.select(&selector) {
            if !label.text().collect::<String>().contains("Runtime") {
                continue;
            }
            let value = next_element(&label).filter(|el| el.value().name() == "td");
            if let Some(minutes) = value.and_then(|cell| last_number(&element_text(&cell))) {
                return Some(minutes);
            }
        }
    }

    let item = select_first(technical, &["li[data-testid='title-techspec_runtime']"])?;
    last_number(&element_text(&item))
}

/// Last run of digits in the text.
fn last_number(text: &str) -> Option<u32> {
    let re = regex_lite::Regex::new(r"\d+").ok()?;
    re.find_iter(text).last()?.as_str().parse().ok()
}

/// Rating from the metadata, then from micro-data spans.
fn extract_rating(linked: &LinkedData, document: &Html) -> Option<AggregateRating> {
    if let Some(rating) = &linked.aggregate_rating {
        return Some(AggregateRating {
            rating_value: rating.rating_value.as_ref().and_then(NumberOrText::as_rating),
            rating_count: rating.rating_count.as_ref().and_then(NumberOrText::as_count),
        });
    }

    let value = select_first(document, &["span[itemprop='ratingValue']"])
        .and_then(|el| parse_rating_value(&element_text(&el)));
    let count = select_first(document, &["span[itemprop='ratingCount']"])
        .and_then(|el| parse_count(&element_text(&el)));

    if value.is_none() && count.is_none() {
        return None;
    }
    Some(AggregateRating {
        rating_value: value,
        rating_count: count,
    })
}

/// Genres from the metadata, then from the "Genres:" storyline block.
fn extract_genre(linked: &LinkedData, document: &Html) -> Option<Vec<String>> {
    match &linked.genre {
        Some(OneOrMany::One(genre)) => return Some(vec![decode_entities(genre)]),
        Some(OneOrMany::Many(genres)) => {
            return Some(genres.iter().map(|g| decode_entities(g)).collect())
        }
        None => {}
    }

    let selector = Selector::parse("#titleStoryLine div.inline > h4").ok()?;
    let label = document
        .select(&selector)
        .find(|h4| element_text(h4) == "Genres:")?;

    let genres: Vec<String> = label
        .next_siblings()
        .filter_map(scraper::ElementRef::wrap)
        .filter(|el| el.value().name() == "a")
        .map(|a| element_text(&a))
        .filter(|text| !text.is_empty())
        .collect();

    Some(genres)
}

/// Poster thumbnail and its full-size variant.
fn extract_poster(document: &Html) -> Option<Image> {
    let img = select_first(
        document,
        &["div[data-testid='hero-media__poster'] > div > img", "div.poster > a > img"],
    )?;
    let small = img.value().attr("src")?.to_string();
    let big = big_image_url(&small);

    Some(Image {
        small: Some(small),
        big,
    })
}

/// "More like this" shows, in page order. Empty when the grid has no cards.
fn extract_recommended(document: &Html) -> Option<Vec<Reference>> {
    select_first(document, &["div.ipc-sub-grid"])?;
    let card_selector = Selector::parse("div.ipc-sub-grid > div.ipc-poster-card").ok()?;
    let link_selector = Selector::parse("div > a").ok()?;
    let name_selector = Selector::parse("div > a > span").ok()?;

    let mut shows = Vec::new();
    for card in document.select(&card_selector) {
        let Some(mut reference) = card
            .select(&link_selector)
            .next()
            .and_then(|link| link_reference(&link, "title"))
        else {
            continue;
        };

        if let Some(name) = card.select(&name_selector).next() {
            reference.name = element_text(&name);
        }
        shows.push(reference);
    }

    Some(shows)
}
