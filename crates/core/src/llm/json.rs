use crate::llm::prompt::{JSON_END, JSON_START};
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("missing [JSON_START] marker in completion")]
    MissingStartMarker,

    #[error("missing [JSON_END] marker in completion")]
    MissingEndMarker,

    #[error("[JSON_END] marker appears before the end of [JSON_START]")]
    EndBeforeStart,

    #[error("invalid JSON between markers: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
        segment: String,
    },

    #[error("structured data must be a JSON object (got {kind})")]
    NotAnObject { kind: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCompletion {
    pub analysis: String,
    pub structured_data: Map<String, Value>,
}

/// Splits a completion into the prose before `[JSON_START]` and the JSON
/// object between the markers.
///
/// Both markers are located by their first occurrence in the whole text, so
/// an end marker quoted in the prose yields [`ParseError::EndBeforeStart`].
pub fn split_completion(text: &str) -> Result<ParsedCompletion, ParseError> {
    let start = text.find(JSON_START).ok_or(ParseError::MissingStartMarker)?;
    let end = text.find(JSON_END).ok_or(ParseError::MissingEndMarker)?;
    let body_start = start + JSON_START.len();
    if end < body_start {
        return Err(ParseError::EndBeforeStart);
    }

    let analysis = text[..start].trim().to_string();
    let segment = strip_fences(text[body_start..end].trim());

    let value = serde_json::from_str::<Value>(segment).map_err(|source| {
        ParseError::InvalidJson {
            source,
            segment: segment.to_string(),
        }
    })?;

    let structured_data = match value {
        Value::Object(map) => map,
        other => {
            return Err(ParseError::NotAnObject {
                kind: json_kind(&other),
            })
        }
    };

    Ok(ParsedCompletion {
        analysis,
        structured_data,
    })
}

// Models sometimes wrap the JSON part in a Markdown fence (```json ... ```).
fn strip_fences(segment: &str) -> &str {
    if !segment.starts_with("```") {
        return segment;
    }
    let mut inner = segment;
    if let Some((_, after_first)) = inner.split_once('\n') {
        inner = after_first;
    }
    if let Some(end) = inner.rfind("```") {
        inner = &inner[..end];
    }
    inner.trim()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
