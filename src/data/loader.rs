use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value as JsonValue};

use super::model::{Catalog, Channel, PropertyValue, UnsigProperties, UnsigRecord};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the unsigs catalog from a JSON file.
///
/// Expected schema (object keyed by decimal identifiers):
///
/// ```json
/// {
///   "0": {
///     "index": 0,
///     "num_props": 2,
///     "properties": {
///       "colors": ["Red", "Green"],
///       "distributions": ["Normal", "Normal"],
///       "multipliers": ["0.5", "0.5"],
///       "rotations": ["0", "90"]
///     }
///   },
///   ...
/// }
/// ```
///
/// Only the file and the top-level shape are checked here. Entries with a
/// missing or odd `properties` block load fine and simply never match.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    parse_catalog(&text).with_context(|| format!("parsing catalog {}", path.display()))
}

/// Parse catalog JSON text. Key order of the document is preserved.
pub fn parse_catalog(text: &str) -> Result<Catalog> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let entries = root
        .as_object()
        .context("Expected top-level JSON object keyed by unsig id")?;

    let records = entries
        .iter()
        .map(|(id, value)| (id.clone(), json_to_record(value)))
        .collect();

    Ok(Catalog::from_entries(records))
}

// ---------------------------------------------------------------------------
// Record conversion
// ---------------------------------------------------------------------------

fn json_to_record(val: &JsonValue) -> UnsigRecord {
    let Some(obj) = val.as_object() else {
        return UnsigRecord::default();
    };

    UnsigRecord {
        index: obj.get("index").and_then(JsonValue::as_i64),
        num_props: obj.get("num_props").and_then(JsonValue::as_i64),
        properties: obj
            .get("properties")
            .and_then(JsonValue::as_object)
            .map(json_to_properties),
    }
}

fn json_to_properties(obj: &Map<String, JsonValue>) -> UnsigProperties {
    UnsigProperties {
        colors: json_array(obj, "colors").map(|arr| arr.iter().map(json_to_channel).collect()),
        distributions: json_values(obj, "distributions"),
        multipliers: json_values(obj, "multipliers"),
        rotations: json_values(obj, "rotations"),
    }
}

fn json_array<'a>(obj: &'a Map<String, JsonValue>, key: &str) -> Option<&'a Vec<JsonValue>> {
    obj.get(key).and_then(JsonValue::as_array)
}

fn json_values(obj: &Map<String, JsonValue>, key: &str) -> Option<Vec<PropertyValue>> {
    json_array(obj, key).map(|arr| arr.iter().map(json_to_property).collect())
}

fn json_to_channel(val: &JsonValue) -> Channel {
    match val {
        JsonValue::String(s) => Channel::from_tag(s),
        other => Channel::Other(other.to_string()),
    }
}

fn json_to_property(val: &JsonValue) -> PropertyValue {
    match val {
        JsonValue::String(s) => PropertyValue::Text(s.clone()),
        JsonValue::Number(n) => match n.as_f64() {
            Some(f) => PropertyValue::number(f),
            None => PropertyValue::Raw(n.to_string()),
        },
        JsonValue::Bool(b) => PropertyValue::Bool(*b),
        JsonValue::Null => PropertyValue::Null,
        other => PropertyValue::Raw(other.to_string()),
    }
}
