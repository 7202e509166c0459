//! HTTP client for the inference service

use iris_core::{FeatureVector, Label, PredictRequest, PredictResponse};
use reqwest::StatusCode;
use tracing::{debug, warn};

/// Where the inference service answers predictions
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000/predict";

/// What came back from one prediction call
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    /// HTTP 200 with a parsed body
    Success(Vec<Label>),

    /// The service answered with a non-200 status
    HttpError(StatusCode),

    /// The service could not be reached or its answer could not be read
    Transport(String),
}

impl PredictionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// One-shot prediction client.
///
/// No retries and no timeout: a hung service hangs the call.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    url: String,
}

impl PredictionClient {
    /// Fails when the TLS backend cannot be initialized
    pub fn new(url: impl Into<String>) -> reqwest::Result<Self> {
        // The service is addressed directly, never through a system proxy
        let http = reqwest::Client::builder().no_proxy().build()?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one feature vector and classify the reply
    pub async fn predict(&self, features: FeatureVector) -> PredictionOutcome {
        let body = PredictRequest {
            feature_array: features,
        };
        debug!("POST {} {:?}", self.url, body.feature_array.values());

        let response = match self.http.post(&self.url).json(&body).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Could not reach {}: {}", self.url, e);
                return PredictionOutcome::Transport(error_chain(&e));
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Inference service answered {}", status);
            return PredictionOutcome::HttpError(status);
        }

        match response.json::<PredictResponse>().await {
            Ok(body) => PredictionOutcome::Success(body.prediction),
            Err(e) => {
                warn!("Unreadable prediction body: {}", e);
                PredictionOutcome::Transport(error_chain(&e))
            }
        }
    }
}

/// Error text including its sources; reqwest keeps the root cause out of `Display`
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("outer")]
    struct Outer(#[source] std::io::Error);

    #[test]
    fn test_error_chain_includes_sources() {
        let err = Outer(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));
        assert_eq!(error_chain(&err), "outer: connection refused");
    }

    #[test]
    fn test_client_keeps_url() {
        let client = PredictionClient::new(DEFAULT_SERVICE_URL).unwrap();
        assert_eq!(client.url(), DEFAULT_SERVICE_URL);
    }
}
