//! Exploration recommendations shown at the end of an exploration

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{ApiError, ApiResult};

/// Summary of a recommended exploration.
///
/// Only the common fields are typed; everything else the backend sends is
/// kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorationSummary {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub objective: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Where the learner is when recommendations are requested
#[derive(Debug, Clone, Default)]
pub struct RecommendationContext {
    pub collection_id: Option<String>,
    pub story_id: Option<String>,
    pub node_id: Option<String>,
    /// Exploration is being previewed inside the editor
    pub in_editor: bool,
}

#[derive(Debug, Deserialize)]
struct RecommendationsResponse {
    summaries: Vec<ExplorationSummary>,
}

/// Client for the exploration recommendations handler
pub struct RecommendationsClient {
    pub(crate) client: Client,
    pub(crate) config: Config,
}

impl RecommendationsClient {
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Query parameters for a recommendations request.
    ///
    /// System recommendations are never requested from the editor.
    pub fn query_params(
        author_recommended_ids: &[String],
        include_system_recommendations: bool,
        context: &RecommendationContext,
    ) -> ApiResult<Vec<(&'static str, String)>> {
        let mut params = vec![(
            "stringified_author_recommended_ids",
            serde_json::to_string(author_recommended_ids)?,
        )];
        if let Some(ref collection_id) = context.collection_id {
            params.push(("collection_id", collection_id.clone()));
        }
        if let Some(ref story_id) = context.story_id {
            params.push(("story_id", story_id.clone()));
        }
        if let Some(ref node_id) = context.node_id {
            params.push(("current_node_id", node_id.clone()));
        }
        if include_system_recommendations && !context.in_editor {
            params.push(("include_system_recommendations", "true".to_string()));
        }
        Ok(params)
    }

    /// Fetch summaries of explorations recommended after `exploration_id`
    pub async fn recommended_summaries(
        &self,
        exploration_id: &str,
        author_recommended_ids: &[String],
        include_system_recommendations: bool,
        context: &RecommendationContext,
    ) -> ApiResult<Vec<ExplorationSummary>> {
        let url = self.config.url(&format!(
            "/explorehandler/recommendations/{}",
            urlencoding::encode(exploration_id)
        ));
        let params =
            Self::query_params(author_recommended_ids, include_system_recommendations, context)?;
        log::debug!("Fetching recommendations: {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", &self.config.user_agent)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Recommendations request failed with status {}: {}", status, body);
            return Err(ApiError::HttpStatus { status, body });
        }

        let parsed: RecommendationsResponse = response.json().await?;
        log::info!(
            "Received {} recommendation(s) for exploration {}",
            parsed.summaries.len(),
            exploration_id
        );
        Ok(parsed.summaries)
    }
}

#[cfg(test)]
#[path = "recommendations_tests.rs"]
mod tests;
