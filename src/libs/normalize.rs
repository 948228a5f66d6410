//! Normalization of wire JSON into canonical records.
//!
//! The Jira and Tempo REST APIs use camelCase keys and carry a `self` field
//! holding the resource URL. Before validation every record is rewritten:
//!
//! 1. **Case normalization**: object keys go from camelCase to snake_case
//!    (`dateStarted` → `date_started`). String values are never touched.
//! 2. **Reserved key rename**: a key literally named `self` becomes `self_`,
//!    keeping its value and its position among the other keys.
//!
//! A rewritten key that collides with another key of the same object
//! replaces it; the later key in document order wins.
//!
//! Both steps recurse through nested objects, and into the elements of
//! arrays when those elements are objects. They are pure: a new value is
//! built at every level and the input is left untouched.
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use tempoggl::libs::normalize::reformat;
//!
//! let raw = json!({"self": "https://jira/rest/api/2/project/1", "projectTypeKey": "software"});
//! let clean = reformat(&raw);
//! assert_eq!(clean, json!({"self_": "https://jira/rest/api/2/project/1", "project_type_key": "software"}));
//! ```

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

/// Wire key that clashes with a reserved word.
pub const RESERVED_KEY: &str = "self";
/// Replacement for [`RESERVED_KEY`].
pub const RENAMED_KEY: &str = "self_";

/// Validation failure for one record, naming the offending field path.
#[derive(Debug, Error, PartialEq)]
#[error("invalid value at `{path}`: {message}")]
pub struct ParseError {
    /// Path from the response root, e.g. `[3].issue.project_id`.
    pub path: String,
    pub message: String,
}

/// Converts a single camelCase key to snake_case.
///
/// Runs of capitals are treated as one word (`issueID` → `issue_id`,
/// `HTTPServer` → `http_server`). Keys that are already snake_case are
/// returned unchanged.
pub fn decamelize(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut snake = String::with_capacity(key.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                _ => false,
            };
            if boundary {
                snake.push('_');
            }
            snake.extend(c.to_lowercase());
        } else {
            snake.push(c);
        }
    }

    snake
}

/// Applies [`decamelize`] to every object key, recursively.
///
/// Two keys that convert to the same name (`projectId`, `project_id`) keep
/// only the value of the later one.
pub fn decamelize_keys(value: &Value) -> Value {
    map_objects(value, &|object: &Map<String, Value>| {
        object
            .iter()
            .map(|(key, value)| (decamelize(key), decamelize_keys(value)))
            .collect()
    })
}

/// Renames every `self` key to `self_`, recursively.
///
/// An object carrying both `self` and `self_` keeps only the value of
/// whichever comes later.
pub fn rename_self(value: &Value) -> Value {
    map_objects(value, &|object: &Map<String, Value>| {
        object
            .iter()
            .map(|(key, value)| {
                let key = if key == RESERVED_KEY { RENAMED_KEY.to_string() } else { key.clone() };
                (key, rename_self(value))
            })
            .collect()
    })
}

/// Both normalization steps, case first.
pub fn reformat(value: &Value) -> Value {
    rename_self(&decamelize_keys(value))
}

/// Normalizes and validates a JSON array of records.
///
/// The first record that fails validation aborts the whole batch.
pub fn parse_records<T: DeserializeOwned>(body: &Value) -> Result<Vec<T>, ParseError> {
    let records = body.as_array().ok_or_else(|| ParseError {
        path: ".".to_string(),
        message: format!("expected an array of records, got {}", kind(body)),
    })?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| parse_record(&reformat(record)).map_err(|e| e.under(index)))
        .collect()
}

/// Validates one already-normalized record.
pub fn parse_record<T: DeserializeOwned>(record: &Value) -> Result<T, ParseError> {
    serde_path_to_error::deserialize(record).map_err(|err| ParseError {
        path: err.path().to_string(),
        message: err.inner().to_string(),
    })
}

impl ParseError {
    fn under(self, index: usize) -> Self {
        let path = match self.path.as_str() {
            "." => format!("[{}]", index),
            path => format!("[{}].{}", index, path),
        };
        ParseError { path, ..self }
    }
}

/// Rebuilds objects with `rewrite`, recursing into arrays element-wise.
/// Scalars are cloned as-is.
fn map_objects(value: &Value, rewrite: &dyn Fn(&Map<String, Value>) -> Map<String, Value>) -> Value {
    match value {
        Value::Object(object) => Value::Object(rewrite(object)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| match item {
                    Value::Object(_) => map_objects(item, rewrite),
                    other => other.clone(),
                })
                .collect(),
        ),
        other => other.clone(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
