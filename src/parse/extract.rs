//! The extraction loop.

use log::debug;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use super::report::{MetadataField, MetadataReport};
use super::rules::{Lookup, MetadataRule, TagName, METADATA_RULES};

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("title", "TITLE_SELECTOR"));

/// Parses `html` and extracts every metadata field.
///
/// Never fails: the parser recovers from malformed markup, and tags it cannot
/// find are reported as "N/A".
pub fn extract_metadata(html: &str) -> MetadataReport {
    let document = Html::parse_document(html);
    extract_from_document(&document)
}

/// Extracts every metadata field from an already parsed document.
pub fn extract_from_document(document: &Html) -> MetadataReport {
    let fields = METADATA_RULES
        .iter()
        .map(|rule| {
            let value = apply_rule(document, rule);
            if value.is_none() {
                debug!("No match for {}", rule.label);
            }
            MetadataField {
                label: rule.label,
                value,
            }
        })
        .collect();

    MetadataReport::Tags(fields)
}

/// Returns the first `tag` element in document order accepted by `predicate`.
pub fn find_first<'a, P>(document: &'a Html, tag: TagName, predicate: P) -> Option<ElementRef<'a>>
where
    P: Fn(&ElementRef<'a>) -> bool,
{
    document.select(tag.selector()).find(|element| predicate(element))
}

fn apply_rule(document: &Html, rule: &MetadataRule) -> Option<String> {
    match rule.lookup {
        Lookup::Title => extract_title(document),
        Lookup::Attribute {
            tag,
            filter,
            value,
            read,
        } => find_first(document, tag, |element| filter.matches(element, value))
            // Only the first match counts, even if it lacks the read attribute
            .and_then(|element| element.value().attr(read))
            .map(str::to_string),
    }
}

/// Whitespace-only titles count as missing; see [`Lookup::Title`].
fn extract_title(document: &Html) -> Option<String> {
    let element = document.select(&TITLE_SELECTOR).next()?;
    let title = element.text().collect::<String>();
    let title = title.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}
