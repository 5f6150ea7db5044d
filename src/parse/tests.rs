// Parse module tests, included from mod.rs.

use super::*;
use scraper::Html;

const ALL_TAGS_FIXTURE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <title>Fixture Page</title>
  <meta name="description" content="A page with every tag">
  <meta name="keywords" content="rust, metadata, seo">
  <link rel="canonical" href="https://example.com/fixture">
  <meta property="og:title" content="OG Fixture">
  <meta property="og:type" content="website">
  <meta property="og:image" content="https://example.com/og.png">
  <meta property="og:url" content="https://example.com/fixture?ref=og">
  <meta property="og:description" content="  Padded OG description  ">
  <meta name="twitter:card" content="summary_large_image">
  <meta name="twitter:site" content="@example">
  <meta name="twitter:creator" content="@author">
  <meta name="twitter:title" content="Twitter Fixture">
  <meta name="twitter:image" content="https://example.com/tw.png">
  <meta name="theme-color" content="#ff6600">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="author" content="Jane Doe">
  <link rel="icon" href="/favicon.ico">
</head>
<body><p>Hello</p></body>
</html>"##;

fn values(report: &MetadataReport) -> Vec<(&'static str, &str)> {
    report
        .fields()
        .iter()
        .map(|field| (field.label, field.display_value()))
        .collect()
}

#[test]
fn test_rule_table_order() {
    let labels: Vec<_> = METADATA_RULES.iter().map(|rule| rule.label).collect();
    assert_eq!(
        labels,
        vec![
            "Title",
            "Description",
            "Keywords",
            "Canonical URL",
            "OG Title",
            "OG Type",
            "OG Image",
            "OG URL",
            "OG Description",
            "Twitter Card",
            "Twitter Site",
            "Twitter Creator",
            "Twitter Title",
            "Twitter Image",
            "Theme Color",
            "Viewport",
            "Author",
            "Favicon",
        ]
    );
}

#[test]
fn test_extract_all_tags_in_order() {
    let report = extract_metadata(ALL_TAGS_FIXTURE);
    assert!(!report.is_error());
    assert_eq!(
        values(&report),
        vec![
            ("Title", "Fixture Page"),
            ("Description", "A page with every tag"),
            ("Keywords", "rust, metadata, seo"),
            ("Canonical URL", "https://example.com/fixture"),
            ("OG Title", "OG Fixture"),
            ("OG Type", "website"),
            ("OG Image", "https://example.com/og.png"),
            ("OG URL", "https://example.com/fixture?ref=og"),
            ("OG Description", "  Padded OG description  "),
            ("Twitter Card", "summary_large_image"),
            ("Twitter Site", "@example"),
            ("Twitter Creator", "@author"),
            ("Twitter Title", "Twitter Fixture"),
            ("Twitter Image", "https://example.com/tw.png"),
            ("Theme Color", "#ff6600"),
            ("Viewport", "width=device-width, initial-scale=1"),
            ("Author", "Jane Doe"),
            ("Favicon", "/favicon.ico"),
        ]
    );
    assert_eq!(report.found_count(), METADATA_RULES.len());
    assert_eq!(report.missing_count(), 0);
}

#[test]
fn test_extract_no_matches_is_all_not_available() {
    let html = r#"<html><head><meta charset="utf-8"></head><body><p>Nothing here</p></body></html>"#;
    let report = extract_metadata(html);
    assert_eq!(report.fields().len(), METADATA_RULES.len());
    for field in report.fields() {
        assert_eq!(field.display_value(), "N/A", "{} should be N/A", field.label);
        assert_eq!(field.status(), FieldStatus::Missing);
    }
    assert_eq!(report.found_count(), 0);
}

#[test]
fn test_extract_empty_input() {
    let report = extract_metadata("");
    assert_eq!(report.missing_count(), METADATA_RULES.len());
}

#[test]
fn test_extract_first_match_wins() {
    let html = r#"<html><head>
        <meta name="author" content="First Author">
        <meta name="author" content="Second Author">
        <link rel="icon" href="/first.ico">
        <link rel="icon" href="/second.ico">
    </head></html>"#;
    let report = extract_metadata(html);
    assert_eq!(report.get("Author"), Some("First Author"));
    assert_eq!(report.get("Favicon"), Some("/first.ico"));
}

#[test]
fn test_extract_first_match_without_read_attribute_is_not_available() {
    let html = r#"<html><head>
        <meta name="description">
        <meta name="description" content="Second has content">
    </head></html>"#;
    let report = extract_metadata(html);
    assert_eq!(report.get("Description"), Some("N/A"));
}

#[test]
fn test_extract_filter_is_case_sensitive() {
    let html = r#"<html><head>
        <meta name="Description" content="Capitalized">
        <meta property="OG:TITLE" content="Shouting">
        <link rel="Canonical" href="https://example.com/">
    </head></html>"#;
    let report = extract_metadata(html);
    assert_eq!(report.get("Description"), Some("N/A"));
    assert_eq!(report.get("OG Title"), Some("N/A"));
    assert_eq!(report.get("Canonical URL"), Some("N/A"));
}

#[test]
fn test_extract_attribute_names_are_case_insensitive() {
    // HTML attribute names are normalized to lowercase by the parser
    let html = r#"<html><head><META NAME="author" CONTENT="Upper Case Markup"></head></html>"#;
    let report = extract_metadata(html);
    assert_eq!(report.get("Author"), Some("Upper Case Markup"));
}

#[test]
fn test_extract_filter_attribute_must_match_kind() {
    // og:* must be under property=, twitter:* under name=
    let html = r#"<html><head>
        <meta name="og:title" content="Wrong attribute">
        <meta property="twitter:card" content="Wrong attribute">
    </head></html>"#;
    let report = extract_metadata(html);
    assert_eq!(report.get("OG Title"), Some("N/A"));
    assert_eq!(report.get("Twitter Card"), Some("N/A"));
}

#[test]
fn test_extract_rel_token_list() {
    let html = r#"<html><head>
        <link rel="shortcut icon" href="/shortcut.ico">
        <link rel="apple-touch-icon" href="/apple.png">
    </head></html>"#;
    let report = extract_metadata(html);
    assert_eq!(report.get("Favicon"), Some("/shortcut.ico"));
}

#[test]
fn test_extract_rel_token_must_match_whole_token() {
    let html = r#"<html><head><link rel="apple-touch-icon" href="/apple.png"></head></html>"#;
    let report = extract_metadata(html);
    assert_eq!(report.get("Favicon"), Some("N/A"));
}

#[test]
fn test_extract_title_trimmed() {
    let html = "<html><head><title>\n    Spaced Title\n  </title></head></html>";
    let report = extract_metadata(html);
    assert_eq!(report.get("Title"), Some("Spaced Title"));
}

#[test]
fn test_extract_title_entities_decoded() {
    let html = "<html><head><title>Fish &amp; Chips</title></head></html>";
    let report = extract_metadata(html);
    assert_eq!(report.get("Title"), Some("Fish & Chips"));
}

#[test]
fn test_extract_blank_title_is_not_available() {
    let html = "<html><head><title>   </title></head></html>";
    let report = extract_metadata(html);
    assert_eq!(report.get("Title"), Some("N/A"));
}

#[test]
fn test_extract_first_title_wins() {
    let html = "<html><head><title>First</title><title>Second</title></head></html>";
    let report = extract_metadata(html);
    assert_eq!(report.get("Title"), Some("First"));
}

#[test]
fn test_extract_malformed_html() {
    // Stray end tag in head, unquoted attributes, unclosed body elements and a
    // tag cut off by the end of input
    let html = "<html><head><title>Broken</title>
        <meta name=\"author\" content=\"Still Found\">
        <link rel=icon href=/x.ico>
        </span></head><body><div><p>unclosed <b>bold
        <meta property=\"og:title\" content=\"Cut Off\"";
    let report = extract_metadata(html);
    assert!(!report.is_error());
    assert_eq!(report.fields().len(), METADATA_RULES.len());
    assert_eq!(report.get("Title"), Some("Broken"));
    assert_eq!(report.get("Author"), Some("Still Found"));
    assert_eq!(report.get("Favicon"), Some("/x.ico"));
    // The truncated tag is discarded by the parser
    assert_eq!(report.get("OG Title"), Some("N/A"));
    assert_eq!(report.found_count(), 3);
}

#[test]
fn test_extract_literal_sentinel_counts_as_missing() {
    let html = r#"<html><head>
        <meta name="author" content="N/A">
        <meta name="keywords" content="n/a">
    </head></html>"#;
    let report = extract_metadata(html);
    let author = report
        .fields()
        .iter()
        .find(|field| field.label == "Author")
        .expect("Author is always reported");
    assert_eq!(author.value.as_deref(), Some("N/A"));
    assert_eq!(author.status(), FieldStatus::Missing);
    // Only the exact sentinel is treated as missing
    assert_eq!(report.get("Keywords"), Some("n/a"));
    assert_eq!(report.found_count(), 1);
    assert_eq!(report.missing_count(), METADATA_RULES.len() - 1);
}

#[test]
fn test_extract_tags_outside_head() {
    let html = r#"<html><body><meta name="theme-color" content="red"></body></html>"#;
    let report = extract_metadata(html);
    assert_eq!(report.get("Theme Color"), Some("red"));
}

#[test]
fn test_extract_from_document_matches_extract_metadata() {
    let document = Html::parse_document(ALL_TAGS_FIXTURE);
    assert_eq!(
        extract_from_document(&document),
        extract_metadata(ALL_TAGS_FIXTURE)
    );
}

#[test]
fn test_find_first_respects_document_order() {
    let document = Html::parse_document(
        r#"<html><head><meta name="a" content="1"><meta name="b" content="2"><meta name="a" content="3"></head></html>"#,
    );
    let element = find_first(&document, TagName::Meta, |el| {
        FilterAttr::Name.matches(el, "a")
    })
    .expect("meta name=a exists");
    assert_eq!(element.value().attr("content"), Some("1"));
    assert!(find_first(&document, TagName::Link, |_| true).is_none());
}

#[test]
fn test_report_from_fetch_error() {
    use crate::error_handling::{FetchError, FetchErrorKind};

    let report = MetadataReport::from(FetchError::new(FetchErrorKind::Timeout, "timed out"));
    assert!(report.is_error());
    assert!(report.fields().is_empty());
    assert_eq!(report.get("Title"), None);
    assert_eq!(
        report,
        MetadataReport::Error("Failed to fetch data: timed out".to_string())
    );
}
