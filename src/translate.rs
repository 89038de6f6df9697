// SPDX-License-Identifier: MPL-2.0
//! Translation provider client.
//!
//! Talks to the unofficial Google Translate endpoint (free tier). A single
//! GET per translation; the response is a nested JSON array whose first
//! element holds the translated segments, which are concatenated verbatim.
//!
//! No explicit timeout is configured: timeout semantics are delegated to
//! the transport defaults, and a single attempt is made per request.

use crate::error::TranslateError;
use reqwest::header::USER_AGENT;
use serde_json::Value;

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Browser-like agent; the gtx endpoint rejects the default reqwest one.
const AGENT: &str = "Mozilla/5.0";

/// Thin wrapper around a shared HTTP client.
///
/// Cloning is cheap (the inner `reqwest::Client` is reference-counted), so
/// async tasks capture clones instead of borrowing application state.
#[derive(Debug, Clone, Default)]
pub struct Client {
    http: reqwest::Client,
}

impl Client {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates `text` from `source` into `target`.
    ///
    /// `source` may be the `"auto"` sentinel, in which case the provider
    /// infers the source language. `target` must be a concrete language
    /// code. Returns the provider's text untouched.
    pub async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        let url = request_url(text, source, target);

        let response = self
            .http
            .get(&url)
            .header(USER_AGENT, AGENT)
            .send()
            .await
            .map_err(TranslateError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Status(status.as_u16()));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| TranslateError::MalformedResponse(e.to_string()))?;

        let translated = concat_segments(&json).ok_or_else(|| {
            TranslateError::MalformedResponse("missing segment array".to_string())
        })?;

        if translated.is_empty() {
            return Err(TranslateError::EmptyTranslation);
        }

        Ok(translated)
    }
}

/// Builds the gtx request URL with the text URL-encoded.
fn request_url(text: &str, source: &str, target: &str) -> String {
    format!(
        "{}?client=gtx&sl={}&tl={}&dt=t&q={}",
        ENDPOINT,
        source,
        target,
        urlencoding::encode(text)
    )
}

/// Extracts and concatenates the translated segments from `[0][*][0]`.
///
/// The provider splits long inputs into several segments; joining them
/// reconstructs the full translation. Returns `None` when the response
/// does not carry the expected array.
fn concat_segments(json: &Value) -> Option<String> {
    let segments = json.get(0)?.as_array()?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(text);
        }
    }

    Some(translated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_url_encodes_the_text() {
        let url = request_url("hello world & more", "auto", "fr");

        assert!(url.starts_with(ENDPOINT));
        assert!(url.contains("sl=auto"));
        assert!(url.contains("tl=fr"));
        assert!(url.contains("q=hello%20world%20%26%20more"));
    }

    #[test]
    fn concat_segments_joins_multiple_segments() {
        let json = json!([
            [
                ["Bonjour ", "Hello ", null],
                ["le monde", "world", null]
            ],
            null,
            "en"
        ]);

        assert_eq!(concat_segments(&json).as_deref(), Some("Bonjour le monde"));
    }

    #[test]
    fn concat_segments_skips_non_string_entries() {
        let json = json!([[["Hola", "Hello", null], [null, null]], null, "en"]);

        assert_eq!(concat_segments(&json).as_deref(), Some("Hola"));
    }

    #[test]
    fn concat_segments_rejects_unexpected_shape() {
        assert_eq!(concat_segments(&json!({"error": "nope"})), None);
        assert_eq!(concat_segments(&json!("just a string")), None);
    }

    #[test]
    fn concat_segments_yields_empty_string_for_empty_array() {
        // The caller maps this to `TranslateError::EmptyTranslation`.
        assert_eq!(concat_segments(&json!([[]])).as_deref(), Some(""));
    }
}
