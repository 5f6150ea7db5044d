//! The metadata rule table.

use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("meta", "META_SELECTOR"));
static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("link", "LINK_SELECTOR"));

/// Element types a rule can target by attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagName {
    /// `<meta>`
    Meta,
    /// `<link>`
    Link,
}

impl TagName {
    /// Selector matching every element of this type, in document order.
    pub fn selector(self) -> &'static Selector {
        match self {
            TagName::Meta => &*META_SELECTOR,
            TagName::Link => &*LINK_SELECTOR,
        }
    }
}

/// The attribute that identifies which element a rule wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAttr {
    /// `name="..."`
    Name,
    /// `property="..."`
    Property,
    /// `rel="..."`, a whitespace-separated list of link types
    Rel,
}

impl FilterAttr {
    /// The HTML attribute name.
    pub fn attr_name(self) -> &'static str {
        match self {
            FilterAttr::Name => "name",
            FilterAttr::Property => "property",
            FilterAttr::Rel => "rel",
        }
    }

    /// Whether `element` carries this attribute with `expected` as its value.
    ///
    /// Comparison is exact and case-sensitive. `rel` holds a token list, so it
    /// matches when any of its tokens equals `expected` (`rel="shortcut icon"`
    /// matches `icon`).
    pub fn matches(self, element: &ElementRef<'_>, expected: &str) -> bool {
        let Some(actual) = element.value().attr(self.attr_name()) else {
            return false;
        };
        match self {
            FilterAttr::Name | FilterAttr::Property => actual == expected,
            FilterAttr::Rel => actual.split_ascii_whitespace().any(|token| token == expected),
        }
    }
}

/// How a rule finds its value in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Text content of the first `<title>` element, trimmed of surrounding
    /// whitespace. A title that is empty after trimming reports "N/A", so a
    /// `<title>   </title>` never renders as a blank green cell.
    Title,
    /// Attribute `read` of the first `tag` element whose `filter` attribute
    /// equals `value`.
    Attribute {
        tag: TagName,
        filter: FilterAttr,
        value: &'static str,
        read: &'static str,
    },
}

/// One labeled lookup in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataRule {
    pub label: &'static str,
    pub lookup: Lookup,
}

const fn meta_name(label: &'static str, value: &'static str) -> MetadataRule {
    MetadataRule {
        label,
        lookup: Lookup::Attribute {
            tag: TagName::Meta,
            filter: FilterAttr::Name,
            value,
            read: "content",
        },
    }
}

const fn meta_property(label: &'static str, value: &'static str) -> MetadataRule {
    MetadataRule {
        label,
        lookup: Lookup::Attribute {
            tag: TagName::Meta,
            filter: FilterAttr::Property,
            value,
            read: "content",
        },
    }
}

const fn link_rel(label: &'static str, value: &'static str) -> MetadataRule {
    MetadataRule {
        label,
        lookup: Lookup::Attribute {
            tag: TagName::Link,
            filter: FilterAttr::Rel,
            value,
            read: "href",
        },
    }
}

/// Every tag the report shows, in display order.
pub const METADATA_RULES: &[MetadataRule] = &[
    // Basic meta tags
    MetadataRule {
        label: "Title",
        lookup: Lookup::Title,
    },
    meta_name("Description", "description"),
    meta_name("Keywords", "keywords"),
    link_rel("Canonical URL", "canonical"),
    // Open Graph
    meta_property("OG Title", "og:title"),
    meta_property("OG Type", "og:type"),
    meta_property("OG Image", "og:image"),
    meta_property("OG URL", "og:url"),
    meta_property("OG Description", "og:description"),
    // Twitter Card
    meta_name("Twitter Card", "twitter:card"),
    meta_name("Twitter Site", "twitter:site"),
    meta_name("Twitter Creator", "twitter:creator"),
    meta_name("Twitter Title", "twitter:title"),
    meta_name("Twitter Image", "twitter:image"),
    // Miscellaneous
    meta_name("Theme Color", "theme-color"),
    meta_name("Viewport", "viewport"),
    meta_name("Author", "author"),
    link_rel("Favicon", "icon"),
];
