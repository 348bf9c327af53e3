//! Full credits page parser

use scraper::{ElementRef, Html, Selector};

use crate::types::{Credits, Reference};

use super::{link_reference, next_element};

/// Parse directors, writers and cast from `/title/{id}/fullcredits`.
///
/// Sections that are missing produce empty lists. Entries whose link does not
/// carry a person id are skipped.
pub fn parse_credits(document: &Html) -> Credits {
    Credits {
        directors: section_people(document, "Directed"),
        writers: section_people(document, "Writing"),
        cast: cast_members(document),
    }
}

/// People listed in the table that follows the heading containing `label`.
fn section_people(document: &Html, label: &str) -> Vec<Reference> {
    let Ok(heading_selector) = Selector::parse("#fullcredits_content > h4") else {
        return Vec::new();
    };

    let table = document
        .select(&heading_selector)
        .find(|h4| h4.text().collect::<String>().contains(label))
        .and_then(|h4| next_element(&h4))
        .filter(|el| el.value().name() == "table");

    match table {
        Some(table) => name_links(&table, "td.name > a"),
        None => Vec::new(),
    }
}

/// Actors of the cast table. Character cells carry a class; the photo and
/// name cells don't, and only the name cell has link text.
fn cast_members(document: &Html) -> Vec<Reference> {
    let (Ok(table_selector), Ok(cell_selector)) = (
        Selector::parse("table.cast_list"),
        Selector::parse("td:not([class]) > a"),
    ) else {
        return Vec::new();
    };

    let Some(table) = document.select(&table_selector).next() else {
        return Vec::new();
    };

    table
        .select(&cell_selector)
        .filter_map(|link| link_reference(&link, "name"))
        .filter(|person| !person.name.is_empty())
        .collect()
}

fn name_links(scope: &ElementRef, selector: &str) -> Vec<Reference> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };

    scope
        .select(&selector)
        .filter_map(|link| link_reference(&link, "name"))
        .filter(|person| !person.name.is_empty())
        .collect()
}
