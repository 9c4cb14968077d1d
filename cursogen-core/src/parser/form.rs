//! Lenient metadata capture from course-registration form text

use std::collections::BTreeMap;

use regex_utils::form;
use serde_json::Value;
use tracing::debug;

/// Scan form text for the numbered field headings and capture every value
/// found. Missing sections leave their key absent; this function never
/// fails. Comma-separated fields are split into string arrays, everything
/// else is captured as a trimmed string.
pub fn extract_course_metadata(text: &str) -> BTreeMap<String, Value> {
    let mut metadata = BTreeMap::new();

    for field in form::FIELDS.iter() {
        let Some(raw) = form::capture(field, text) else {
            continue;
        };
        if raw.is_empty() {
            continue;
        }

        let value = if field.comma_list {
            let items: Vec<Value> = raw
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| Value::String(item.to_string()))
                .collect();
            Value::Array(items)
        } else {
            Value::String(raw)
        };

        debug!("Captured form field '{}'", field.key);
        metadata.insert(field.key.to_string(), value);
    }

    metadata
}
