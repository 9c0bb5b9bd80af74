//! Response envelope parsing and error-message extraction.
//!
//! The backend wraps most payloads in `{success, message, data}` envelopes,
//! while some legacy endpoints return the payload bare and list endpoints
//! return DRF-style `{count, next, previous, results}` pages. All of these
//! shapes are resolved once here, at the client boundary, into typed values.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Fallback message when no recognizable error shape is present.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// A response body resolved into its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope<T> {
    /// The body carried a `data` key: `{data: …, message?: …}`.
    Wrapped {
        /// The unwrapped payload.
        data: T,
        /// Optional success message supplied alongside the payload.
        message: Option<String>,
    },
    /// The body was the payload itself.
    Bare(T),
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Resolves a JSON body into an envelope.
    ///
    /// # Errors
    ///
    /// Returns a decode error if neither the `data` field nor the body
    /// itself deserializes into `T`.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Object(mut map) if map.contains_key("data") => {
                let message = map
                    .get("message")
                    .and_then(Value::as_str)
                    .map(ToOwned::to_owned);
                // contains_key checked above
                let data = map.remove("data").unwrap_or(Value::Null);
                Ok(Self::Wrapped {
                    data: serde_json::from_value(data)?,
                    message,
                })
            }
            other => Ok(Self::Bare(serde_json::from_value(other)?)),
        }
    }

    /// Consumes the envelope, returning the payload.
    pub fn into_data(self) -> T {
        match self {
            Self::Wrapped { data, .. } | Self::Bare(data) => data,
        }
    }

    /// The success message, if the envelope carried one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Wrapped { message, .. } => message.as_deref(),
            Self::Bare(_) => None,
        }
    }
}

/// A DRF-style paginated collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages.
    #[serde(default)]
    pub count: u64,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
    /// Items on this page.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// An empty page.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Resolves a JSON body into a page.
    ///
    /// Accepts `{data: {count, results…}}`, bare `{count, results…}`, and
    /// the legacy `{data: […]}` shape (an unpaginated list), in that order.
    ///
    /// # Errors
    ///
    /// Returns a decode error if none of the accepted shapes match.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let inner = match value {
            Value::Object(mut map) if map.contains_key("data") => {
                map.remove("data").unwrap_or(Value::Null)
            }
            other => other,
        };

        if let Value::Array(items) = inner {
            let results: Vec<T> = items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<_, _>>()?;
            let count = results.len() as u64;
            return Ok(Self {
                count,
                next: None,
                previous: None,
                results,
            });
        }

        serde_json::from_value(inner)
    }
}

/// Extracts a human-readable message from a failed response.
///
/// Priority order: the structured `message` field, the legacy `detail`
/// field (strings verbatim, objects JSON-stringified), the `error` field,
/// the first entry of a field-keyed `errors` mapping (first element when
/// that entry is a list), the transport-level message, and finally
/// [`GENERIC_ERROR_MESSAGE`].
#[must_use]
pub fn extract_error_message(body: Option<&Value>, transport: Option<&str>) -> String {
    if let Some(message) = body.and_then(structured_message) {
        return message;
    }
    transport
        .filter(|m| !m.is_empty())
        .map_or_else(|| GENERIC_ERROR_MESSAGE.to_owned(), ToOwned::to_owned)
}

fn structured_message(body: &Value) -> Option<String> {
    if let Some(message) = body.get("message").and_then(Value::as_str) {
        return Some(message.to_owned());
    }

    match body.get("detail") {
        Some(Value::String(detail)) => return Some(detail.clone()),
        Some(detail @ Value::Object(_)) => return Some(detail.to_string()),
        _ => {}
    }

    if let Some(error) = body.get("error").and_then(Value::as_str) {
        return Some(error.to_owned());
    }

    if let Some(Value::Object(errors)) = body.get("errors")
        && let Some((_, first)) = errors.iter().next()
    {
        let entry = match first {
            Value::Array(items) => items.first()?,
            other => other,
        };
        return Some(match entry {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_envelope_wrapped() {
        let envelope: Envelope<Vec<i64>> =
            Envelope::from_value(json!({"data": [1, 2], "message": "ok"})).unwrap();
        assert_eq!(envelope.message(), Some("ok"));
        assert_eq!(envelope.into_data(), vec![1, 2]);
    }

    #[test]
    fn test_envelope_bare() {
        let envelope: Envelope<Vec<i64>> = Envelope::from_value(json!([3])).unwrap();
        assert_eq!(envelope.message(), None);
        assert_eq!(envelope.into_data(), vec![3]);
    }

    #[test]
    fn test_page_bare_and_wrapped() {
        let bare: Page<i64> =
            Page::from_value(json!({"count": 3, "next": "n", "previous": null, "results": [1]}))
                .unwrap();
        assert_eq!(bare.count, 3);
        assert_eq!(bare.next.as_deref(), Some("n"));

        let wrapped: Page<i64> =
            Page::from_value(json!({"data": {"count": 1, "results": [7]}})).unwrap();
        assert_eq!(wrapped.results, vec![7]);
    }

    #[test]
    fn test_page_from_bare_array() {
        let page: Page<i64> = Page::from_value(json!({"data": [4, 5]})).unwrap();
        assert_eq!(page.count, 2);
        assert_eq!(page.results, vec![4, 5]);
        assert_eq!(page.next, None);
    }

    #[test]
    fn test_error_message_priority_message_field() {
        let body = json!({"message": "top", "detail": "lower", "error": "lowest"});
        assert_eq!(extract_error_message(Some(&body), None), "top");
    }

    #[test]
    fn test_error_message_detail_string_and_object() {
        let body = json!({"detail": "not found"});
        assert_eq!(extract_error_message(Some(&body), None), "not found");

        let body = json!({"detail": {"code": "x"}});
        assert_eq!(extract_error_message(Some(&body), None), r#"{"code":"x"}"#);
    }

    #[test]
    fn test_error_message_errors_mapping_first_entry() {
        let body = json!({"errors": {"field": ["first msg", "second msg"]}});
        assert_eq!(extract_error_message(Some(&body), None), "first msg");

        let body = json!({"errors": {"field": "plain"}});
        assert_eq!(extract_error_message(Some(&body), None), "plain");
    }

    #[test]
    fn test_error_message_fallbacks() {
        let body = json!({"unrelated": true});
        assert_eq!(
            extract_error_message(Some(&body), Some("connection reset")),
            "connection reset"
        );
        assert_eq!(
            extract_error_message(Some(&body), None),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(extract_error_message(None, None), GENERIC_ERROR_MESSAGE);
    }
}
