//! Search results parser for IMDb
//!
//! Parses the find page (`/find?q=...&s=tt|nm`) into title or person
//! references.

use scraper::{ElementRef, Html, Selector};

use crate::types::{Reference, SearchType};

use super::{element_text, extract_id, first_in};

/// Parse the result rows of a find page.
///
/// The legacy result table is tried first, then the current result list.
/// Rows whose link does not point at an entity of `search_type` are skipped.
///
/// # Arguments
/// * `document` - Parsed find page
/// * `search_type` - What the search asked for; selects the id pattern
pub fn parse_search_results(document: &Html, search_type: SearchType) -> Vec<Reference> {
    let segment = search_type.path_segment();

    let legacy = collect_rows(document, "tr.findResult", |row| {
        let href = first_in(row, "td.primary_photo > a")?.value().attr("href")?;
        let identifier = extract_id(href, segment)?;
        let name = first_in(row, "td.result_text > a")
            .map(|link| element_text(&link))
            .unwrap_or_default();
        Some(Reference { identifier, name })
    });
    if !legacy.is_empty() {
        return legacy;
    }

    collect_rows(document, "li.find-result-item", |row| {
        let link = first_in(row, "a.ipc-metadata-list-summary-item__t")?;
        let identifier = extract_id(link.value().attr("href")?, segment)?;
        Some(Reference {
            identifier,
            name: element_text(&link),
        })
    })
}

fn collect_rows<F>(document: &Html, row_selector: &str, parse_row: F) -> Vec<Reference>
where
    F: Fn(&ElementRef) -> Option<Reference>,
{
    let Ok(selector) = Selector::parse(row_selector) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|row| parse_row(&row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_parse_dragon_ball_titles() {
        let document = Html::parse_document(fixtures::SEARCH_DRAGON_BALL);
        let results = parse_search_results(&document, SearchType::Title);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0], Reference::new("tt0121220", "Dragon Ball Z"));
        assert_eq!(results[1], Reference::new("tt0088509", "Dragon Ball"));
        assert_eq!(results[2], Reference::new("tt1207074", "Dragon Ball: Evolution"));
    }

    #[test]
    fn test_rows_of_other_kind_are_skipped() {
        let document = Html::parse_document(fixtures::SEARCH_DRAGON_BALL);
        assert!(parse_search_results(&document, SearchType::Name).is_empty());
    }

    #[test]
    fn test_parse_current_result_list() {
        let document = Html::parse_document(fixtures::SEARCH_CASTELLANETA);
        let results = parse_search_results(&document, SearchType::Name);

        assert_eq!(results, vec![Reference::new("nm0144657", "Dan Castellaneta")]);
    }

    #[test]
    fn test_parse_empty_html() {
        let document = Html::parse_document("<html><body></body></html>");
        assert!(parse_search_results(&document, SearchType::Title).is_empty());
    }
}
