//! Layout API types.
//!
//! Two responses are modelled here: the describe-layouts result for an
//! SObject (which lists the record types and where their layouts live) and
//! a single layout detail (sections → rows → items → components).
//!
//! Everything below the top-level `detailLayoutSections` key is optional on
//! the wire; missing lists decode as empty and missing scalars as `None`.

use serde::{Deserialize, Serialize};

// ============================================================================
// Describe Layouts Types
// ============================================================================

/// Result of `GET /sobjects/{sobject}/describe/layouts`.
///
/// Only the record type mappings are kept; the embedded `layouts` array is
/// ignored because each record type's layout is fetched on its own.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LayoutDescribeResult {
    /// Record types in the order the platform lists them.
    #[serde(rename = "recordTypeMappings")]
    pub record_type_mappings: Vec<RecordTypeMapping>,
}

/// One record type and the locator of its layout.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordTypeMapping {
    /// Developer name; used verbatim as the output file stem.
    #[serde(rename = "developerName")]
    pub developer_name: String,

    pub urls: RecordTypeUrls,

    /// Display label of the record type.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "recordTypeId", default)]
    pub record_type_id: Option<String>,

    #[serde(rename = "layoutId", default)]
    pub layout_id: Option<String>,

    #[serde(default)]
    pub available: Option<bool>,

    #[serde(rename = "defaultRecordTypeMapping", default)]
    pub default_record_type_mapping: Option<bool>,

    #[serde(default)]
    pub master: Option<bool>,
}

impl RecordTypeMapping {
    /// The layout resource path, resolved later against the session.
    pub fn layout_locator(&self) -> &str {
        &self.urls.layout
    }
}

/// URLs attached to a record type mapping.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordTypeUrls {
    pub layout: String,
}

// ============================================================================
// Layout Detail Types
// ============================================================================

/// A single page layout.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LayoutDetail {
    /// `None` when the key is absent from the response.
    #[serde(rename = "detailLayoutSections", default)]
    pub sections: Option<Vec<LayoutSection>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LayoutSection {
    #[serde(default)]
    pub heading: Option<String>,

    #[serde(rename = "layoutRows", default)]
    pub rows: Vec<LayoutRow>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LayoutRow {
    #[serde(rename = "layoutItems", default)]
    pub items: Vec<LayoutItem>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LayoutItem {
    #[serde(default)]
    pub label: Option<String>,

    /// `None` and `Some(vec![])` both mean the item yields no rows.
    #[serde(rename = "layoutComponents", default)]
    pub components: Option<Vec<LayoutComponent>>,
}

/// A component placed in a layout item (usually a field).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LayoutComponent {
    /// Component type, e.g. `Field`, `VisualforcePage`, `EmptySpace`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub details: Option<FieldDetails>,
}

/// Field metadata attached to a component.
///
/// The platform sends the full field describe; only the columns that end up
/// in the spreadsheet are decoded.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FieldDetails {
    /// Field API name, as the describe call sends it.
    #[serde(default)]
    pub name: Option<String>,

    /// Field API name under its other key; used when `name` is absent.
    #[serde(rename = "apiName", default)]
    pub api_name: Option<String>,

    #[serde(default)]
    pub length: Option<u64>,

    #[serde(rename = "type", default)]
    pub field_type: Option<String>,

    #[serde(rename = "referenceTo", default)]
    pub reference_to: Option<Vec<String>>,

    #[serde(rename = "relationshipName", default)]
    pub relationship_name: Option<String>,

    #[serde(rename = "calculatedFormula", default)]
    pub calculated_formula: Option<String>,
}
