//! Name page parser for IMDb

use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};

use crate::types::{Filmography, Image, Person, Reference};

use super::{big_image_url, element_text, link_reference, next_element, select_first};

/// Parse a birth date in `Y-M-D` form.
///
/// Month and day may come without zero padding, as IMDb writes them.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use imdb_core::parser::parse_birth_date;
///
/// assert_eq!(parse_birth_date("1957-10-29"), NaiveDate::from_ymd_opt(1957, 10, 29));
/// assert_eq!(parse_birth_date("1957-1-9"), NaiveDate::from_ymd_opt(1957, 1, 9));
/// assert_eq!(parse_birth_date("1957-13-1"), None);
/// ```
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.trim().split('-');
    let year = parts.next()?.trim().parse().ok()?;
    let month = parts.next()?.trim().parse().ok()?;
    let day = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Fill a person from the name page (`/name/{id}`).
///
/// Identifier and URL are left untouched.
pub fn parse_person(document: &Html, person: &mut Person) {
    person.name = select_first(
        document,
        &["#name-overview-widget-layout span", "h1[data-testid='hero__pageTitle'] span"],
    )
    .map(|span| element_text(&span))
    .filter(|name| !name.is_empty());

    person.jobs = extract_jobs(document);
    person.birthday = select_first(document, &["#name-born-info > time[datetime]"])
        .and_then(|time| time.value().attr("datetime"))
        .and_then(parse_birth_date);
    person.image = extract_portrait(document);
    person.filmography = extract_filmography(document);
}

fn extract_jobs(document: &Html) -> Option<Vec<String>> {
    let categories = select_first(document, &["#name-job-categories"])?;
    let selector = Selector::parse("a > span").ok()?;
    let jobs = categories
        .select(&selector)
        .map(|span| element_text(&span))
        .filter(|job| !job.is_empty())
        .collect();

    Some(jobs)
}

fn extract_portrait(document: &Html) -> Option<Image> {
    let img = select_first(document, &["#name-poster"])?;
    let small = img.value().attr("src")?.to_string();

    Some(Image {
        big: big_image_url(&small),
        small: Some(small),
    })
}

/// Known-for titles and credits by category. `None` when the page has
/// neither section.
fn extract_filmography(document: &Html) -> Option<Filmography> {
    select_first(document, &["#knownfor", "#filmography"])?;

    let known_for: Vec<Reference> = Selector::parse("div.knownfor-title-role > a")
        .map(|selector| {
            document
                .select(&selector)
                .filter_map(|link| link_reference(&link, "title"))
                .collect()
        })
        .unwrap_or_default();

    Some(Filmography {
        known_for,
        actor: category_titles(document, &["#filmo-head-actor", "#filmo-head-actress"]),
        director: category_titles(document, &["#filmo-head-director"]),
    })
}

/// Titles of the filmography section following the first heading found.
fn category_titles(document: &Html, headings: &[&str]) -> Vec<Reference> {
    let Some(section) = select_first(document, headings)
        .and_then(|head| next_element(&head))
        .filter(is_category_section)
    else {
        return Vec::new();
    };

    let Ok(selector) = Selector::parse("div > b > a") else {
        return Vec::new();
    };

    section
        .select(&selector)
        .filter_map(|link| link_reference(&link, "title"))
        .collect()
}

fn is_category_section(element: &ElementRef) -> bool {
    element.value().name() == "div"
        && element
            .value()
            .classes()
            .any(|class| class == "filmo-category-section")
}
