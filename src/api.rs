use crate::constants::{LOADING_FRAGMENT_PATH, RUN_GRANT_WRITER_PATH, UNKNOWN_ERROR_MESSAGE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two form fields of a submission, sent verbatim as the JSON body of
/// `/run-grant-writer`.
#[derive(Debug, Serialize, Clone)]
pub struct GrantInput {
    pub org_type: String,
    pub mission: String,
}

/// Errors that can occur when communicating with the grant writer backend.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Failure reported by the backend (or synthesized from a non-2xx
    /// status). Displays as the bare message so it can be shown to the user
    /// as-is.
    #[error("{0}")]
    Backend(String),
    /// HTTP client-level error (connection, malformed URL, etc.)
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Client for the grant writer backend.
///
/// Carries no timeout on purpose: report generation runs a multi-agent
/// pipeline that can take minutes, and the contract leaves a hung request on
/// the loading screen rather than cutting it off.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Creates a new client for the backend at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Verifies that the backend answers on its loading fragment endpoint.
    pub async fn check_availability(&self) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, LOADING_FRAGMENT_PATH);
        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::Backend(format!(
                "backend returned status {}",
                response.status()
            )))
        }
    }

    /// Fetches the loading fragment markup. Callers treat any failure as
    /// non-fatal and substitute the static placeholder.
    pub async fn loading_fragment(&self) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, LOADING_FRAGMENT_PATH);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Backend(format!(
                "loading fragment returned status {}",
                response.status()
            )));
        }

        Ok(response.text().await?)
    }

    /// Submits the form fields and returns the result fragment.
    ///
    /// A non-2xx response is turned into `ApiError::Backend` carrying the
    /// `error` field of the JSON body, or a generic message when the body is
    /// unparseable or the field is absent.
    pub async fn run_grant_writer(&self, input: &GrantInput) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, RUN_GRANT_WRITER_PATH);
        let response = self.client.post(url).json(input).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
            tracing::warn!("Grant writer request failed ({}): {}", status, message);
            return Err(ApiError::Backend(message));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_backend_client_new() {
        let client = BackendClient::new("http://localhost:5000");
        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_backend_client_trims_trailing_slash() {
        let client = BackendClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_grant_input_serializes_verbatim() {
        let input = GrantInput {
            org_type: "Non-profit NGO".to_string(),
            mission: "  clean water access ".to_string(),
        };
        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(
            body,
            json!({"org_type": "Non-profit NGO", "mission": "  clean water access "})
        );
    }

    #[test]
    fn test_backend_error_displays_bare_message() {
        let err = ApiError::Backend("bad mission".to_string());
        assert_eq!(format!("{}", err), "bad mission");
        assert_eq!(format!("Error: {}", err), "Error: bad mission");
    }

    #[test]
    fn test_unknown_error_fallback_from_bad_body() {
        let message = serde_json::from_str::<ErrorBody>("not json at all")
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
        assert_eq!(message, "Unknown error occurred");
    }

    #[test]
    fn test_unknown_error_fallback_from_missing_field() {
        let message = serde_json::from_str::<ErrorBody>(r#"{"detail": "oops"}"#)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
        assert_eq!(message, "Unknown error occurred");
    }
}
