use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tura_shared::models::quote::{GenerateQuoteRequest, GenerateQuoteResponse};
use tura_store::app_config::GeneratorConfig;
use uuid::Uuid;

pub type GeneratorError = Box<dyn std::error::Error + Send + Sync>;

/// Client boundary to the external AI itinerary generation service.
#[async_trait]
pub trait QuoteGenerator: Send + Sync {
    async fn generate(
        &self,
        organization_id: Uuid,
        request: &GenerateQuoteRequest,
    ) -> Result<GenerateQuoteResponse, GeneratorError>;
}

#[derive(Serialize)]
struct GenerationCall<'a> {
    organization_id: Uuid,
    #[serde(flatten)]
    request: &'a GenerateQuoteRequest,
}

#[derive(Deserialize)]
struct UpstreamError {
    error: Option<String>,
}

pub struct HttpQuoteGenerator {
    http: reqwest::Client,
    base_url: String,
}

impl HttpQuoteGenerator {
    pub fn new(config: &GeneratorConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl QuoteGenerator for HttpQuoteGenerator {
    async fn generate(
        &self,
        organization_id: Uuid,
        request: &GenerateQuoteRequest,
    ) -> Result<GenerateQuoteResponse, GeneratorError> {
        let response = self
            .http
            .post(format!("{}/v1/itineraries/generate", self.base_url))
            .json(&GenerationCall {
                organization_id,
                request,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let message = response
                .json::<UpstreamError>()
                .await
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| "Failed to generate itinerary".to_string());
            return Err(message.into());
        }

        Ok(response.json().await?)
    }
}
