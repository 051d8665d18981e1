//! Remapping of indexed item properties onto the federated fields.
//!
//! Sites index their own field names; the federated search app reads a
//! fixed set of destination fields. A remap is a `destination -> source`
//! mapping applied to each document before it is indexed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInfo {
    pub label: String,
    pub description: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

pub fn federated_fields() -> BTreeMap<String, FieldInfo> {
    BTreeMap::from([
        (
            "federated_title".to_string(),
            FieldInfo {
                name: "Federated Title".to_string(),
                description: String::new(),
                field_type: "string".to_string(),
            },
        ),
        (
            "rendered_output".to_string(),
            FieldInfo {
                name: "Rendered Output".to_string(),
                description: String::new(),
                field_type: "text".to_string(),
            },
        ),
    ])
}

/// Copies each present, non-empty source property onto its destination.
pub fn remap_document(document: &Map<String, Value>, remap: &BTreeMap<String, String>) -> Map<String, Value> {
    let mut result = document.clone();
    for (destination, source) in remap {
        if source.is_empty() {
            continue;
        }
        if let Some(value) = document.get(source) {
            result.insert(destination.clone(), value.clone());
        }
    }
    result
}

/// Property info describing the remapped destinations, taken from the
/// source index fields. Mappings to unknown fields are skipped.
pub fn remapped_property_info(
    remap: &BTreeMap<String, String>,
    index_fields: &BTreeMap<String, FieldInfo>,
) -> BTreeMap<String, PropertyInfo> {
    remap
        .iter()
        .filter(|(_, source)| !source.is_empty())
        .filter_map(|(destination, source)| {
            let field = index_fields.get(source)?;
            Some((
                destination.clone(),
                PropertyInfo {
                    label: format!("{} (remapped from {})", field.name, source),
                    description: field.description.clone(),
                    field_type: field.field_type.clone(),
                },
            ))
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn copies_present_sources() {
        let doc = document(json!({"title": "Hello", "body": "<p>World</p>"}));
        let remap = BTreeMap::from([
            ("federated_title".to_string(), "title".to_string()),
            ("rendered_output".to_string(), "body".to_string()),
        ]);

        let result = remap_document(&doc, &remap);

        assert_eq!(result["federated_title"], json!("Hello"));
        assert_eq!(result["rendered_output"], json!("<p>World</p>"));
        assert_eq!(result["title"], json!("Hello"));
    }

    #[test]
    fn skips_empty_and_missing_sources() {
        let doc = document(json!({"title": "Hello", "federated_title": "kept"}));
        let remap = BTreeMap::from([
            ("federated_title".to_string(), String::new()),
            ("rendered_output".to_string(), "missing".to_string()),
        ]);

        let result = remap_document(&doc, &remap);

        assert_eq!(result, doc);
    }

    #[test]
    fn property_info_labels_name_the_source() {
        let index_fields = BTreeMap::from([(
            "title".to_string(),
            FieldInfo {
                name: "Title".to_string(),
                description: "The node title".to_string(),
                field_type: "text".to_string(),
            },
        )]);
        let remap = BTreeMap::from([
            ("federated_title".to_string(), "title".to_string()),
            ("rendered_output".to_string(), "unknown".to_string()),
            ("other".to_string(), String::new()),
        ]);

        let info = remapped_property_info(&remap, &index_fields);

        assert_eq!(info.len(), 1);
        let title = &info["federated_title"];
        assert_eq!(title.label, "Title (remapped from title)");
        assert_eq!(title.description, "The node title");
        assert_eq!(title.field_type, "text");
    }

    #[test]
    fn federated_fields_are_title_and_output() {
        let fields = federated_fields();
        assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["federated_title", "rendered_output"]);
        assert_eq!(fields["rendered_output"].field_type, "text");
    }
}
