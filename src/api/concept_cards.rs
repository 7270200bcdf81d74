//! Concept card backend API
//!
//! Uses async reqwest; identifiers are sent as one comma-joined path segment.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::ConceptCard;

/// Source of concept cards for a batch of skill ids.
///
/// Implementations return cards in the same order as `skill_ids`.
#[async_trait]
pub trait ConceptCardGateway: Send + Sync {
    async fn fetch_concept_cards(&self, skill_ids: &[String]) -> ApiResult<Vec<ConceptCard>>;
}

/// Body of a concept card handler response
#[derive(Debug, Deserialize)]
struct ConceptCardResponse {
    concept_card_dicts: Vec<ConceptCard>,
}

/// Fetches concept cards from the backend's concept card handler
pub struct HttpConceptCardGateway {
    pub(crate) client: Client,
    pub(crate) config: Config,
}

impl HttpConceptCardGateway {
    pub fn new(config: Config) -> Self {
        log::debug!("Creating concept card gateway for {}", config.base_url);
        Self {
            client: Client::new(),
            config,
        }
    }

    /// URL of the concept card handler for the given skill ids
    pub fn concept_card_url(&self, skill_ids: &[String]) -> String {
        let joined = skill_ids.join(",");
        self.config.url(&format!(
            "/concept_card_handler/{}",
            urlencoding::encode(&joined)
        ))
    }
}

#[async_trait]
impl ConceptCardGateway for HttpConceptCardGateway {
    async fn fetch_concept_cards(&self, skill_ids: &[String]) -> ApiResult<Vec<ConceptCard>> {
        let url = self.concept_card_url(skill_ids);
        log::info!("Fetching {} concept card(s): {}", skill_ids.len(), url);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", &self.config.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Concept card request failed with status {}: {}", status, body);
            return Err(ApiError::HttpStatus { status, body });
        }

        let body = response.text().await?;
        let parsed: ConceptCardResponse = serde_json::from_str(&body)?;
        if parsed.concept_card_dicts.len() != skill_ids.len() {
            log::warn!(
                "Requested {} concept card(s), received {}",
                skill_ids.len(),
                parsed.concept_card_dicts.len()
            );
            return Err(ApiError::BatchSize {
                expected: skill_ids.len(),
                received: parsed.concept_card_dicts.len(),
            });
        }

        Ok(parsed.concept_card_dicts)
    }
}

#[cfg(test)]
#[path = "concept_cards_tests.rs"]
mod tests;
