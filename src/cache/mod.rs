//! Caching layer for concept card lookups

pub mod card_cache;

pub use card_cache::ConceptCardLoader;
