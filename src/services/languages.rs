use crate::config::ApiSettings;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Fixed user-facing message for any catalog load failure. Raw error detail
/// goes to tracing only.
const LOAD_FAILED_MESSAGE: &str = "Failed to load languages. Please try again.";

/// Errors that can occur when fetching the language catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned status {0}")]
    Status(u16),

    #[error("Invalid response format: {0}")]
    InvalidBody(String),
}

impl CatalogError {
    /// The message shown to the user. Every failure kind maps to the same
    /// fixed text so transport details never leak into the form.
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}

/// Client for the language catalog endpoint.
///
/// The endpoint pieces are explicit constructor parameters (sourced from
/// `Settings`) rather than ambient state, so tests can point the client at a
/// local mock server. The request timeout is defensive; the remote service
/// guarantees none.
pub struct LanguagesClient {
    base_url: String,
    languages_path: String,
    client: Client,
}

impl LanguagesClient {
    /// Create a new catalog client
    pub fn new(
        base_url: impl Into<String>,
        languages_path: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            languages_path: languages_path.into(),
            client,
        }
    }

    pub fn from_settings(settings: &ApiSettings) -> Self {
        Self::new(
            settings.base_url.clone(),
            settings.languages_path.clone(),
            Duration::from_secs(settings.timeout_secs),
        )
    }

    /// Fetch the list of selectable native-language names.
    ///
    /// Issues one GET to `{base_url}{languages_path}`. The body is expected
    /// to be a JSON object whose `data` field holds an array of entries,
    /// each either a string or an object with a `name` field; a missing
    /// `data` field means an empty catalog. Any non-2xx status, transport
    /// failure, or unparsable body is an error.
    pub async fn fetch_languages(&self) -> Result<Vec<String>, CatalogError> {
        let url = format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.languages_path
        );

        tracing::debug!("Fetching language catalog from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let json: Value = serde_json::from_str(&body)
            .map_err(|e| CatalogError::InvalidBody(format!("body is not JSON: {}", e)))?;

        if !json.is_object() {
            return Err(CatalogError::InvalidBody(
                "expected a JSON object".to_string(),
            ));
        }

        let names = match json.get("data") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(entries)) => entries.iter().map(entry_name).collect(),
            Some(_) => {
                return Err(CatalogError::InvalidBody(
                    "`data` is not an array".to_string(),
                ))
            }
        };

        tracing::debug!("Fetched {} language entries", names.len());

        Ok(names)
    }
}

/// Resolve one catalog entry to a display name.
///
/// Objects contribute their `name` field; a missing or non-string `name`
/// falls back to the entry's own string form, as does any non-object entry.
fn entry_name(entry: &Value) -> String {
    if let Some(name) = entry.get("name") {
        if let Some(s) = name.as_str() {
            return s.to_string();
        }
        if !name.is_null() {
            return name.to_string();
        }
    }

    match entry {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_name_plain_string() {
        assert_eq!(entry_name(&json!("Korean")), "Korean");
    }

    #[test]
    fn test_entry_name_object_with_name() {
        assert_eq!(entry_name(&json!({"name": "Spanish", "code": "es"})), "Spanish");
    }

    #[test]
    fn test_entry_name_non_string_name_falls_back_to_string_form() {
        assert_eq!(entry_name(&json!({"name": 7})), "7");
    }

    #[test]
    fn test_entry_name_object_without_name() {
        assert_eq!(entry_name(&json!({"code": "fr"})), r#"{"code":"fr"}"#);
    }

    #[test]
    fn test_entry_name_bare_number() {
        assert_eq!(entry_name(&json!(42)), "42");
    }

    #[test]
    fn test_every_error_kind_maps_to_fixed_message() {
        let status = CatalogError::Status(500);
        let body = CatalogError::InvalidBody("nope".to_string());

        assert_eq!(status.user_message(), LOAD_FAILED_MESSAGE);
        assert_eq!(body.user_message(), LOAD_FAILED_MESSAGE);
        assert!(!status.user_message().is_empty());
    }

    #[test]
    fn test_client_creation() {
        let client = LanguagesClient::new(
            "https://api.test/",
            "/api/v1/languages",
            Duration::from_secs(15),
        );

        assert_eq!(client.base_url, "https://api.test/");
        assert_eq!(client.languages_path, "/api/v1/languages");
    }
}
