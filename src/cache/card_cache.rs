use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::api::ConceptCardGateway;
use crate::error::{ApiError, ApiResult};
use crate::models::ConceptCard;

/// Where a requested card comes from
enum Slot {
    /// Copy taken from the cache
    Cached(ConceptCard),
    /// Index into the batch fetched for this call
    Fetched(usize),
}

/// In-memory concept card cache in front of a gateway.
///
/// Cards are keyed by skill id (exact match) and live as long as the loader.
/// Nothing is ever evicted; a later fetch of the same id overwrites the entry.
/// The lock is released before the gateway is awaited, so overlapping calls
/// for the same uncached id both fetch it.
pub struct ConceptCardLoader<G> {
    gateway: G,
    cards: RwLock<HashMap<String, ConceptCard>>,
}

impl<G: ConceptCardGateway> ConceptCardLoader<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            cards: RwLock::new(HashMap::new()),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Load the concept cards for `skill_ids`, in the same order.
    ///
    /// Only ids missing from the cache are requested, in a single batch with
    /// each id once. If that request fails the error is returned as-is and
    /// the cache is left untouched.
    pub async fn load_concept_cards(&self, skill_ids: &[String]) -> ApiResult<Vec<ConceptCard>> {
        let (slots, uncached) = self.partition(skill_ids).await;

        let fetched = if uncached.is_empty() {
            log::info!("Cache hit for all {} concept card(s)", skill_ids.len());
            Vec::new()
        } else {
            log::info!(
                "Cache miss for {} of {} concept card(s), fetching {:?}",
                uncached.len(),
                skill_ids.len(),
                uncached
            );
            let fetched = self.gateway.fetch_concept_cards(&uncached).await?;
            if fetched.len() != uncached.len() {
                return Err(ApiError::BatchSize {
                    expected: uncached.len(),
                    received: fetched.len(),
                });
            }

            let mut cards = self.cards.write().await;
            for (skill_id, card) in uncached.iter().zip(&fetched) {
                cards.insert(skill_id.clone(), card.clone());
            }
            log::debug!("Concept card cache now holds {} entries", cards.len());
            fetched
        };

        Ok(slots
            .into_iter()
            .map(|slot| match slot {
                Slot::Cached(card) => card,
                Slot::Fetched(index) => fetched[index].clone(),
            })
            .collect())
    }

    /// Split `skill_ids` into cached copies and the distinct ids to fetch
    async fn partition(&self, skill_ids: &[String]) -> (Vec<Slot>, Vec<String>) {
        let cards = self.cards.read().await;
        let mut uncached: Vec<String> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        let slots: Vec<Slot> = skill_ids
            .iter()
            .map(|skill_id| match cards.get(skill_id) {
                Some(card) => Slot::Cached(card.clone()),
                None => {
                    let index = *positions.entry(skill_id.as_str()).or_insert_with(|| {
                        uncached.push(skill_id.clone());
                        uncached.len() - 1
                    });
                    Slot::Fetched(index)
                }
            })
            .collect();

        (slots, uncached)
    }

    /// Whether a card for `skill_id` is cached
    pub async fn contains(&self, skill_id: &str) -> bool {
        self.cards.read().await.contains_key(skill_id)
    }

    /// Number of cached cards
    pub async fn len(&self) -> usize {
        self.cards.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.cards.read().await.is_empty()
    }
}

#[cfg(test)]
#[path = "card_cache_tests.rs"]
mod tests;
