//! Flattening a layout into one row per field component.
//!
//! Rows come out in document order: section, then row, then item, then
//! component. Each row traces back to exactly one component; nothing is
//! merged or de-duplicated.

use serde::Serialize;
use tracing::warn;

use crate::types::{FieldDetails, LayoutComponent, LayoutDetail, LayoutItem};

/// Spreadsheet column names, in output order.
pub const COLUMNS: [&str; 8] = [
    "Header",
    "Label",
    "Api Name",
    "Character Limit",
    "Data Type",
    "Parent Reference",
    "Relationship Name",
    "Formula or VF url",
];

/// One output row.
///
/// Missing values are empty strings, never placeholders. `character_limit`
/// is `None` when the platform sent no length (or a length of zero).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlatFieldRecord {
    #[serde(rename = "Header")]
    pub header: String,
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "Api Name")]
    pub api_name: String,
    #[serde(rename = "Character Limit")]
    pub character_limit: Option<u64>,
    #[serde(rename = "Data Type")]
    pub data_type: String,
    #[serde(rename = "Parent Reference")]
    pub parent_reference: String,
    #[serde(rename = "Relationship Name")]
    pub relationship_name: String,
    #[serde(rename = "Formula or VF url")]
    pub formula_or_url: String,
}

/// A single cell value of a [`FlatFieldRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(u64),
    Empty,
}

impl FlatFieldRecord {
    /// The record's cells, aligned with [`COLUMNS`].
    pub fn cells(&self) -> [FieldValue<'_>; 8] {
        [
            text_cell(&self.header),
            text_cell(&self.label),
            text_cell(&self.api_name),
            self.character_limit
                .map(FieldValue::Number)
                .unwrap_or(FieldValue::Empty),
            text_cell(&self.data_type),
            text_cell(&self.parent_reference),
            text_cell(&self.relationship_name),
            text_cell(&self.formula_or_url),
        ]
    }
}

fn text_cell(value: &str) -> FieldValue<'_> {
    if value.is_empty() {
        FieldValue::Empty
    } else {
        FieldValue::Text(value)
    }
}

/// Flatten a layout into field rows.
///
/// A layout without `detailLayoutSections` is not an error: a warning is
/// logged and the result is empty. Items with no components contribute no
/// rows.
pub fn flatten(detail: &LayoutDetail) -> Vec<FlatFieldRecord> {
    let Some(sections) = detail.sections.as_ref() else {
        warn!("detailLayoutSections is not present in the layout response");
        return Vec::new();
    };

    let mut records = Vec::new();
    for section in sections {
        let header = first_present([section.heading.as_deref()]);
        for row in &section.rows {
            for item in &row.items {
                for component in item.components.iter().flatten() {
                    records.push(flatten_component(header, item, component));
                }
            }
        }
    }
    records
}

fn flatten_component(
    header: &str,
    item: &LayoutItem,
    component: &LayoutComponent,
) -> FlatFieldRecord {
    let empty = FieldDetails::default();
    let details = component.details.as_ref().unwrap_or(&empty);

    FlatFieldRecord {
        header: header.to_string(),
        label: first_present([item.label.as_deref()]).to_string(),
        api_name: first_present([details.name.as_deref(), details.api_name.as_deref()])
            .to_string(),
        character_limit: details.length.filter(|len| *len > 0),
        data_type: first_present([details.field_type.as_deref(), component.kind.as_deref()])
            .to_string(),
        parent_reference: details
            .reference_to
            .as_deref()
            .unwrap_or_default()
            .join(", "),
        relationship_name: first_present([details.relationship_name.as_deref()])
            .to_string(),
        formula_or_url: first_present([
            details.calculated_formula.as_deref(),
            component.url.as_deref(),
        ])
        .to_string(),
    }
}

/// The first candidate that is present and non-empty, else `""`.
fn first_present<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> &'a str {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail(value: serde_json::Value) -> LayoutDetail {
        serde_json::from_value(value).unwrap()
    }

    fn field(label: &str, api_name: &str) -> serde_json::Value {
        json!({
            "label": label,
            "layoutComponents": [{"type": "Field", "details": {"name": api_name, "type": "string"}}]
        })
    }

    #[test]
    fn test_single_field_example() {
        let layout = detail(json!({
            "detailLayoutSections": [{
                "heading": "Info",
                "layoutRows": [{"layoutItems": [{
                    "label": "Name",
                    "layoutComponents": [{"details": {"apiName": "Name__c", "type": "Text", "length": 80}}]
                }]}]
            }]
        }));

        let records = flatten(&layout);
        assert_eq!(
            records,
            vec![FlatFieldRecord {
                header: "Info".into(),
                label: "Name".into(),
                api_name: "Name__c".into(),
                character_limit: Some(80),
                data_type: "Text".into(),
                parent_reference: String::new(),
                relationship_name: String::new(),
                formula_or_url: String::new(),
            }]
        );
    }

    #[test]
    fn test_document_order() {
        let layout = detail(json!({
            "detailLayoutSections": [
                {"heading": "A", "layoutRows": [
                    {"layoutItems": [field("a1", "A1"), field("a2", "A2")]},
                    {"layoutItems": [field("a3", "A3")]}
                ]},
                {"heading": "B", "layoutRows": [
                    {"layoutItems": [field("b1", "B1")]}
                ]}
            ]
        }));

        let names: Vec<(String, String)> = flatten(&layout)
            .into_iter()
            .map(|r| (r.header, r.api_name))
            .collect();
        assert_eq!(
            names,
            vec![
                ("A".into(), "A1".into()),
                ("A".into(), "A2".into()),
                ("A".into(), "A3".into()),
                ("B".into(), "B1".into()),
            ]
        );
    }

    #[test]
    fn test_permuting_sections_permutes_output() {
        let a = json!({"heading": "A", "layoutRows": [{"layoutItems": [field("a", "A1")]}]});
        let b = json!({"heading": "B", "layoutRows": [{"layoutItems": [field("b", "B1"), field("b2", "B2")]}]});

        let forward = flatten(&detail(json!({"detailLayoutSections": [a.clone(), b.clone()]})));
        let reversed = flatten(&detail(json!({"detailLayoutSections": [b, a]})));

        let mut expected = forward[1..].to_vec();
        expected.push(forward[0].clone());
        assert_eq!(reversed, expected);
    }

    #[test]
    fn test_items_without_components_are_skipped() {
        let layout = detail(json!({
            "detailLayoutSections": [{"heading": "S", "layoutRows": [{"layoutItems": [
                {"label": "Blank", "layoutComponents": []},
                {"label": "Absent"},
                {"label": "Pair", "layoutComponents": [
                    {"type": "Field", "details": {"name": "First"}},
                    {"type": "Field", "details": {"name": "Second"}}
                ]}
            ]}]}]
        }));

        let records = flatten(&layout);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.header == "S" && r.label == "Pair"));
        assert_eq!(records[0].api_name, "First");
        assert_eq!(records[1].api_name, "Second");
    }

    #[test]
    fn test_absent_details_fall_back_to_component() {
        let layout = detail(json!({
            "detailLayoutSections": [{"heading": "Custom", "layoutRows": [{"layoutItems": [
                {"label": "Page", "layoutComponents": [{"type": "VisualforcePage", "url": "/apex/AccountSummary"}]},
                {"label": "", "layoutComponents": [{"type": "EmptySpace"}]}
            ]}]}]
        }));

        let records = flatten(&layout);
        assert_eq!(records.len(), 2);

        let page = &records[0];
        assert_eq!(page.api_name, "");
        assert_eq!(page.character_limit, None);
        assert_eq!(page.parent_reference, "");
        assert_eq!(page.relationship_name, "");
        assert_eq!(page.data_type, "VisualforcePage");
        assert_eq!(page.formula_or_url, "/apex/AccountSummary");

        let spacer = &records[1];
        assert_eq!(spacer.data_type, "EmptySpace");
        assert_eq!(spacer.formula_or_url, "");
        assert_eq!(spacer.label, "");
    }

    #[test]
    fn test_formula_preferred_over_url() {
        let layout = detail(json!({
            "detailLayoutSections": [{"heading": "F", "layoutRows": [{"layoutItems": [{
                "label": "Score",
                "layoutComponents": [{
                    "type": "Field",
                    "url": "/ignored",
                    "details": {"name": "Score__c", "type": "double", "calculatedFormula": "A__c * 2", "length": 0}
                }]
            }]}]}]
        }));

        let record = &flatten(&layout)[0];
        assert_eq!(record.formula_or_url, "A__c * 2");
        assert_eq!(record.data_type, "double");
        assert_eq!(record.character_limit, None);
    }

    #[test]
    fn test_reference_join() {
        let layout = detail(json!({
            "detailLayoutSections": [{"heading": "R", "layoutRows": [{"layoutItems": [
                {"label": "Who", "layoutComponents": [{"details": {
                    "name": "WhoId", "type": "reference",
                    "referenceTo": ["Account", "Contact"], "relationshipName": "Who"
                }}]},
                {"label": "None", "layoutComponents": [{"details": {"name": "X", "referenceTo": []}}]}
            ]}]}]
        }));

        let records = flatten(&layout);
        assert_eq!(records[0].parent_reference, "Account, Contact");
        assert_eq!(records[0].relationship_name, "Who");
        assert_eq!(records[1].parent_reference, "");
    }

    #[test]
    fn test_missing_sections_yields_empty() {
        let layout = detail(json!({"editLayoutSections": []}));
        assert!(flatten(&layout).is_empty());
        assert!(flatten(&LayoutDetail::default()).is_empty());
    }

    #[test]
    fn test_empty_strings_fall_through() {
        let layout = detail(json!({
            "detailLayoutSections": [{"layoutRows": [{"layoutItems": [{
                "layoutComponents": [{"type": "Field", "url": "", "details": {"type": "", "calculatedFormula": ""}}]
            }]}]}]
        }));

        let record = &flatten(&layout)[0];
        assert_eq!(record.header, "");
        assert_eq!(record.data_type, "Field");
        assert_eq!(record.formula_or_url, "");
    }

    #[test]
    fn test_api_name_from_either_key() {
        let layout = detail(json!({
            "detailLayoutSections": [{"layoutRows": [{"layoutItems": [
                {"label": "Both", "layoutComponents": [{"details": {"name": "Name", "apiName": "Other"}}]},
                {"label": "Api", "layoutComponents": [{"details": {"apiName": "Site__c"}}]},
                {"label": "Blank", "layoutComponents": [{"details": {"name": "", "apiName": "Phone"}}]}
            ]}]}]
        }));

        let names: Vec<_> = flatten(&layout).into_iter().map(|r| r.api_name).collect();
        assert_eq!(names, ["Name", "Site__c", "Phone"]);
    }

    #[test]
    fn test_cells_align_with_columns() {
        let record = FlatFieldRecord {
            header: "Info".into(),
            label: "Name".into(),
            api_name: "Name__c".into(),
            character_limit: Some(80),
            data_type: "Text".into(),
            ..Default::default()
        };

        let cells = record.cells();
        assert_eq!(cells.len(), COLUMNS.len());
        assert_eq!(cells[0], FieldValue::Text("Info"));
        assert_eq!(cells[3], FieldValue::Number(80));
        assert_eq!(cells[5], FieldValue::Empty);
        assert_eq!(cells[7], FieldValue::Empty);
    }

    #[test]
    fn test_serialize_uses_column_names() {
        let record = FlatFieldRecord {
            api_name: "Name__c".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        for column in COLUMNS {
            assert!(value.get(column).is_some(), "missing column {column}");
        }
        assert_eq!(value["Api Name"], "Name__c");
    }
}
