// API module for ner_dashboard
// HTTP access to the metrics and inference endpoints

pub mod error;
pub mod models;

pub use error::{LoadError, PredictionError};
pub use models::{MetricsSnapshot, PredictRequest, PredictResponse, PredictedEntity};

use tracing::{debug, info, warn};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the two endpoints the dashboard consumes. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /metrics`. A single attempt with no retry.
    pub async fn fetch_metrics(&self) -> Result<MetricsSnapshot, LoadError> {
        let url = self.endpoint("/metrics");
        debug!(%url, "fetching metrics");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "metrics endpoint rejected request");
            return Err(LoadError::Status(status));
        }

        let body = response.text().await?;
        let snapshot: MetricsSnapshot = serde_json::from_str(&body)?;
        snapshot.validate()?;

        info!(
            epochs = snapshot.training_progress.len(),
            f1 = snapshot.overall.f1_score,
            "metrics loaded"
        );
        Ok(snapshot)
    }

    /// `POST /api/predict` with `{"data": [text]}`.
    pub async fn predict(&self, text: &str) -> Result<Vec<PredictedEntity>, PredictionError> {
        let url = self.endpoint("/api/predict");
        debug!(%url, text_len = text.len(), "requesting prediction");

        let response = self
            .http
            .post(&url)
            .json(&PredictRequest::new(text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "prediction endpoint rejected request");
            return Err(PredictionError::Status(status));
        }

        let body = response.text().await?;
        let entities = serde_json::from_str::<PredictResponse>(&body)?.into_entities()?;

        info!(entities = entities.len(), "prediction received");
        Ok(entities)
    }
}
