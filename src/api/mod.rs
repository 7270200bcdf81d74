//! API clients for the learning-content backend

pub mod concept_cards;
pub mod recommendations;

pub use concept_cards::{ConceptCardGateway, HttpConceptCardGateway};
pub use recommendations::{ExplorationSummary, RecommendationContext, RecommendationsClient};
