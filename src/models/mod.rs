//! Skill domain objects and their backend dictionary representations

pub mod concept_card;
pub mod misconception;
pub mod rubric;
pub mod skill;

pub use concept_card::{ConceptCard, RecordedVoiceovers, SubtitledHtml, Voiceover, WorkedExample};
pub use misconception::Misconception;
pub use rubric::{Difficulty, Rubric};
pub use skill::Skill;

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
