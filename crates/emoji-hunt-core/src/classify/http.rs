//! HTTP client for the classification endpoint.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::capture::Frame;
use crate::classify::{ClassificationResult, Classifier};
use crate::config::ClassifierSettings;
use crate::error::{Error, Result};

/// Success body: `{ "result": "<emoji>" }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub result: String,
}

/// Failure body: `{ "error": "...", "details": "..." }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl ServiceErrorBody {
    fn describe(&self) -> Option<String> {
        match (&self.error, &self.details) {
            (Some(error), Some(details)) => Some(format!("{}: {}", error, details)),
            (Some(error), None) => Some(error.clone()),
            (None, Some(details)) => Some(details.clone()),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpClassifier {
    http: Client,
    endpoint: String,
}

impl HttpClassifier {
    pub fn new(settings: &ClassifierSettings) -> Result<Self> {
        let http = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| Error::remote(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(&self, frame: Frame) -> Result<ClassificationResult> {
        if frame.is_empty() {
            return Err(Error::Capture("empty frame payload".to_string()));
        }

        debug!(
            "Sending {} byte frame to {}",
            frame.payload().len(),
            self.endpoint
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/plain")
            .body(frame.payload().to_string())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ServiceErrorBody>(&body)
                .ok()
                .and_then(|b| b.describe())
                .unwrap_or_else(|| body.trim().to_string());
            return Err(Error::Remote {
                status: Some(status.as_u16()),
                message,
            });
        }

        let parsed: ClassifyResponse =
            serde_json::from_str(&body).map_err(|e| Error::Parse(e.to_string()))?;
        Ok(ClassificationResult::from_answer(&parsed.result))
    }
}

impl Classifier for HttpClassifier {
    async fn classify(&self, frame: Frame) -> Result<ClassificationResult> {
        self.request(frame).await
    }
}
