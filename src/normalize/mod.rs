//! Response normalizer: untrusted provider text in, validated draft out.
//!
//! The provider is asked for bare JSON but the reply may be fenced, wrapped
//! in prose, or outright invalid. This module runs the single-pass pipeline
//! de-fence -> parse -> shape-validate -> coerce, and either returns a fully
//! shaped [`ModelInfoDraft`] or a typed error carrying enough context for
//! the caller to log a diagnostic. It is pure: no I/O, no retries, no shared
//! state, deterministic for a given input.

mod extract;
mod schema;

pub use extract::{first_json_object, strip_code_fence};

use serde_json::Value;
use thiserror::Error;

use crate::draft::ModelInfoDraft;

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Provider text was not parseable as JSON even after de-fencing and
    /// isolating a candidate object span. Carries the original text for
    /// diagnosis; never reparse the same text expecting a different result.
    #[error("malformed provider response: {reason}")]
    Malformed { raw: String, reason: String },
    /// JSON parsed but one or more required fields were absent or falsy.
    /// Carries the parsed value so a caller may salvage partial data.
    #[error("incomplete provider response, missing: {}", missing.join(", "))]
    Incomplete { missing: Vec<String>, parsed: Value },
}

/// Normalize raw provider text into a draft.
///
/// `required_fields` is the caller's minimal set of top-level keys that must
/// be present and truthy (empty string, null, 0 and false all count as
/// missing). List fields and pricing are coerced per [`schema`]; everything
/// else passes through as parsed.
pub fn normalize(
    raw_text: &str,
    required_fields: &[&str],
) -> Result<ModelInfoDraft, NormalizeError> {
    let candidate = extract::strip_code_fence(raw_text);
    let mut value: Value = match serde_json::from_str(candidate) {
        Ok(value) => value,
        Err(parse_err) => {
            // The de-fenced text may still carry prose around the object;
            // retry on the first balanced `{...}` span before giving up.
            let salvaged = extract::first_json_object(raw_text)
                .and_then(|span| serde_json::from_str::<Value>(span).ok());
            match salvaged {
                Some(value) => value,
                None => {
                    return Err(NormalizeError::Malformed {
                        raw: raw_text.to_string(),
                        reason: parse_err.to_string(),
                    })
                }
            }
        }
    };

    let missing: Vec<String> = match value.as_object() {
        Some(obj) => required_fields
            .iter()
            .filter(|field| !is_truthy(obj.get(**field)))
            .map(|field| (*field).to_string())
            .collect(),
        None => {
            return Err(NormalizeError::Malformed {
                raw: raw_text.to_string(),
                reason: "top-level JSON value is not an object".to_string(),
            })
        }
    };
    if !missing.is_empty() {
        return Err(NormalizeError::Incomplete {
            missing,
            parsed: value,
        });
    }

    if let Some(obj) = value.as_object_mut() {
        schema::coerce_shape(obj);
    }

    serde_json::from_value(value).map_err(|err| NormalizeError::Malformed {
        raw: raw_text.to_string(),
        reason: format!("draft shape mismatch: {err}"),
    })
}

/// JavaScript-style truthiness: the shape check treats falsy-but-present
/// values the same as absent ones.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
