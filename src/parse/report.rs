//! The extraction result.

use crate::config::NOT_AVAILABLE;
use crate::error_handling::FetchError;

/// Whether a field was found in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Found,
    Missing,
}

/// One labeled value of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataField {
    pub label: &'static str,
    /// `None` when the rule matched nothing.
    pub value: Option<String>,
}

impl MetadataField {
    /// The value as displayed, with "N/A" standing in for a missing tag.
    pub fn display_value(&self) -> &str {
        self.value.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Missing when the displayed value is "N/A", whether the tag was absent
    /// or the page literally says "N/A".
    pub fn status(&self) -> FieldStatus {
        if self.display_value() == NOT_AVAILABLE {
            FieldStatus::Missing
        } else {
            FieldStatus::Found
        }
    }
}

/// Outcome of one lookup: either every rule's field, or the fetch error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataReport {
    /// One field per rule, in rule order.
    Tags(Vec<MetadataField>),
    /// The page could not be fetched; carries the message shown to the user.
    Error(String),
}

impl From<FetchError> for MetadataReport {
    fn from(error: FetchError) -> Self {
        MetadataReport::Error(error.to_string())
    }
}

impl MetadataReport {
    pub fn is_error(&self) -> bool {
        matches!(self, MetadataReport::Error(_))
    }

    /// The fields, or an empty slice for the error shape.
    pub fn fields(&self) -> &[MetadataField] {
        match self {
            MetadataReport::Tags(fields) => fields,
            MetadataReport::Error(_) => &[],
        }
    }

    /// Displayed value of the field with `label`, if the report has one.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields()
            .iter()
            .find(|field| field.label == label)
            .map(MetadataField::display_value)
    }

    /// Number of fields whose tag was present.
    pub fn found_count(&self) -> usize {
        self.fields()
            .iter()
            .filter(|field| field.status() == FieldStatus::Found)
            .count()
    }

    /// Number of fields displayed as "N/A".
    pub fn missing_count(&self) -> usize {
        self.fields().len() - self.found_count()
    }
}
