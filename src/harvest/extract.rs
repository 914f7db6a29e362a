//! HTML extraction for search fragments and detail pages
//!
//! Two concerns live here:
//! - Pulling listing ids out of search-result `<li>` fragments, via an
//!   ordered list of extractor strategies tried until one succeeds
//! - Pulling the record fields out of a detail page, each field defaulting
//!   independently so one broken selector never voids the whole record

use crate::records::{JobId, NO_DESCRIPTION, UNKNOWN_FIELD};
use scraper::{ElementRef, Html, Selector};

/// One parsed search-results page
#[derive(Debug)]
pub struct SearchPage {
    /// Number of `<li>` fragments found, extractable or not
    pub fragment_count: usize,

    /// Listing ids in fragment order, one per extractable fragment
    pub ids: Vec<JobId>,
}

/// A strategy for deriving a listing id from one search fragment
pub type FragmentExtractor = fn(&ElementRef) -> Option<JobId>;

/// Extraction strategies in preference order
///
/// The structured entity-reference attribute is authoritative; the card link
/// href is the fallback when the attribute is missing from the markup.
pub const FRAGMENT_EXTRACTORS: [FragmentExtractor; 2] = [entity_reference_id, card_link_id];

/// Derives a listing id from a search fragment, trying each strategy in order
///
/// Returns `None` when no strategy succeeds; such fragments are skipped by
/// discovery without aborting the page.
pub fn extract_job_id(fragment: &ElementRef) -> Option<JobId> {
    FRAGMENT_EXTRACTORS
        .iter()
        .find_map(|extractor| extractor(fragment))
}

/// Parses a search-results page into its fragments and extractable ids
///
/// The search endpoint returns bare `<li>` card snippets rather than a full
/// document; `Html::parse_document` tolerates both.
pub fn parse_search_page(html: &str) -> SearchPage {
    let document = Html::parse_document(html);

    let li_selector = match Selector::parse("li") {
        Ok(s) => s,
        Err(_) => {
            return SearchPage {
                fragment_count: 0,
                ids: Vec::new(),
            }
        }
    };

    let mut fragment_count = 0;
    let mut ids = Vec::new();

    for fragment in document.select(&li_selector) {
        fragment_count += 1;
        if let Some(id) = extract_job_id(&fragment) {
            ids.push(id);
        }
    }

    SearchPage {
        fragment_count,
        ids,
    }
}

/// Preferred strategy: the `data-entity-urn` attribute
///
/// The attribute carries a colon-separated entity reference whose trailing
/// segment is the listing id, e.g. `urn:li:jobPosting:4012345678`.
fn entity_reference_id(fragment: &ElementRef) -> Option<JobId> {
    let selector = Selector::parse("div[data-entity-urn]").ok()?;
    let card = fragment.select(&selector).next()?;
    let urn = card.value().attr("data-entity-urn")?;
    let id = urn.rsplit(':').next()?;

    if id.is_empty() {
        return None;
    }
    Some(JobId::from(id))
}

/// Fallback strategy: the card's full-page anchor
///
/// Takes the path segment following the `view/` marker in the href,
/// stopping at the next slash or query string.
fn card_link_id(fragment: &ElementRef) -> Option<JobId> {
    let selector = Selector::parse("a.base-card__full-link").ok()?;
    let anchor = fragment.select(&selector).next()?;
    let href = anchor.value().attr("href")?;

    let (_, rest) = href.split_once("view/")?;
    let id = rest.split(['/', '?']).next()?;

    if id.is_empty() {
        return None;
    }
    Some(JobId::from(id))
}

/// Fields extracted from one detail page, defaults already applied
#[derive(Debug, Clone, PartialEq)]
pub struct DetailFields {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
}

/// Parses a detail page into record fields
///
/// Returns `None` when the top-card entity-info block is absent, which is
/// how the upstream serves login walls and empty shells with a 200 status.
/// Every field inside an intact page defaults independently.
pub fn parse_detail_page(html: &str) -> Option<DetailFields> {
    let document = Html::parse_document(html);

    let info_selector = Selector::parse("div.top-card-layout__entity-info").ok()?;
    let info = document.select(&info_selector).next()?;

    let title = first_text(info, "h2").unwrap_or_else(|| UNKNOWN_FIELD.to_string());

    let company = first_text(info, "h4 a").unwrap_or_else(|| UNKNOWN_FIELD.to_string());

    let location = last_text(info, "div.top-card-layout__first-sub-list span")
        .unwrap_or_else(|| UNKNOWN_FIELD.to_string());

    let description = Selector::parse("div.show-more-less-html__markup")
        .ok()
        .and_then(|selector| {
            document
                .select(&selector)
                .next()
                .map(|block| block.text().collect::<Vec<_>>().join("\n").trim().to_string())
        })
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    Some(DetailFields {
        title,
        company,
        location,
        description,
    })
}

/// Text of the first element matching `selector` under `scope`, trimmed
fn first_text(scope: ElementRef, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    scope
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Text of the last element matching `selector` under `scope`, trimmed
fn last_text(scope: ElementRef, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    scope
        .select(&selector)
        .last()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}
