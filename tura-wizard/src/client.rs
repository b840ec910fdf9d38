use crate::autocomplete::CityDirectory;
use crate::customize::CatalogProvider;
use crate::submit::ItineraryGenerator;
use crate::BackendError;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tura_shared::models::catalog::CatalogItems;
use tura_shared::models::quote::{GenerateQuoteRequest, GenerateQuoteResponse};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct CitiesBody {
    #[serde(default)]
    cities: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// HTTP binding of the wizard's provider traits against the platform's REST
/// surface, authenticated with the operator's bearer token.
pub struct HttpWizardBackend {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpWizardBackend {
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl CityDirectory for HttpWizardBackend {
    async fn search(&self, query: &str) -> Result<Vec<String>, BackendError> {
        let response = self
            .http
            .get(format!("{}/api/cities", self.base_url))
            .query(&[("search", query)])
            .send()
            .await?
            .error_for_status()?;

        let body: CitiesBody = response.json().await?;
        Ok(body.cities)
    }
}

#[async_trait]
impl CatalogProvider for HttpWizardBackend {
    async fn items(
        &self,
        organization_id: Uuid,
        season: &str,
    ) -> Result<CatalogItems, BackendError> {
        let response = self
            .http
            .get(format!(
                "{}/api/pricing/items/{}",
                self.base_url, organization_id
            ))
            .query(&[("season", season)])
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ItineraryGenerator for HttpWizardBackend {
    async fn generate(
        &self,
        organization_id: Uuid,
        request: &GenerateQuoteRequest,
    ) -> Result<GenerateQuoteResponse, BackendError> {
        let response = self
            .http
            .post(format!(
                "{}/api/quotes/{}/ai-generate",
                self.base_url, organization_id
            ))
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| "Failed to generate itinerary".to_string());
            return Err(message.into());
        }

        Ok(response.json().await?)
    }
}
