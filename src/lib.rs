//! Skill Cards - skill domain objects and concept card loading
//!
//! Wraps the learning-content backend's skill dictionaries in typed values and
//! loads concept cards through an in-memory cache so each card is fetched once.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used items
pub use api::{
    ConceptCardGateway, ExplorationSummary, HttpConceptCardGateway, RecommendationContext,
    RecommendationsClient,
};
pub use cache::ConceptCardLoader;
pub use config::Config;
pub use error::{ApiError, ApiResult, SkillError};
pub use models::{ConceptCard, Difficulty, Misconception, Rubric, Skill};
