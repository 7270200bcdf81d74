use serde::{Deserialize, Serialize};

use crate::error::SkillError;
use crate::models::concept_card::ConceptCard;
use crate::models::misconception::Misconception;
use crate::models::rubric::{Difficulty, Rubric};

const INTERSTITIAL_DESCRIPTION: &str = "Skill description loading";

/// Characters not allowed in entity names such as skill descriptions
const INVALID_NAME_CHARS: &[char] = &[
    '#', ':', '/', '|', '_', '%', '<', '>', '[', ']', '{', '}', '\\', '\u{fffd}',
];

/// A skill as edited in the skill editor.
///
/// Field names follow the backend dictionary, except `concept_card` which the
/// backend calls `skill_contents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    id: Option<String>,
    description: String,
    #[serde(default)]
    misconceptions: Vec<Misconception>,
    #[serde(default)]
    rubrics: Vec<Rubric>,
    #[serde(rename = "skill_contents")]
    concept_card: ConceptCard,
    language_code: String,
    version: u32,
    next_misconception_id: i64,
    #[serde(default)]
    superseding_skill_id: Option<String>,
    #[serde(default)]
    all_questions_merged: bool,
    #[serde(default)]
    prerequisite_skill_ids: Vec<String>,
}

impl Skill {
    /// Placeholder skill displayed in the editor until the real one is fetched
    pub fn interstitial() -> Self {
        Self {
            id: None,
            description: INTERSTITIAL_DESCRIPTION.to_string(),
            misconceptions: Vec::new(),
            rubrics: Vec::new(),
            concept_card: ConceptCard::interstitial(),
            language_code: "en".to_string(),
            version: 1,
            next_misconception_id: 0,
            superseding_skill_id: None,
            all_questions_merged: false,
            prerequisite_skill_ids: Vec::new(),
        }
    }

    pub fn from_backend_dict(dict: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(dict)
    }

    pub fn to_backend_dict(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Checks a candidate description against the entity-name rules.
    /// Problems are logged as warnings.
    pub fn has_valid_description(description: &str) -> bool {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            log::warn!("Please enter a non-empty description.");
            return false;
        }
        if let Some(c) = trimmed
            .chars()
            .find(|c| INVALID_NAME_CHARS.contains(c) || c.is_control())
        {
            log::warn!("Invalid character {:?} in description: {}", c, trimmed);
            return false;
        }
        true
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn prerequisite_skill_ids(&self) -> &[String] {
        &self.prerequisite_skill_ids
    }

    pub fn add_prerequisite_skill(&mut self, skill_id: impl Into<String>) {
        self.prerequisite_skill_ids.push(skill_id.into());
    }

    /// Removes every occurrence of `skill_id` from the prerequisites
    pub fn delete_prerequisite_skill(&mut self, skill_id: &str) {
        self.prerequisite_skill_ids.retain(|id| id != skill_id);
    }

    pub fn concept_card(&self) -> &ConceptCard {
        &self.concept_card
    }

    pub fn concept_card_mut(&mut self) -> &mut ConceptCard {
        &mut self.concept_card
    }

    pub fn misconceptions(&self) -> &[Misconception] {
        &self.misconceptions
    }

    pub fn rubrics(&self) -> &[Rubric] {
        &self.rubrics
    }

    /// Appends a misconception and moves the id counter past its id
    pub fn append_misconception(&mut self, misconception: Misconception) {
        self.next_misconception_id = misconception.id + 1;
        self.misconceptions.push(misconception);
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn next_misconception_id(&self) -> i64 {
        self.next_misconception_id
    }

    pub fn superseding_skill_id(&self) -> Option<&str> {
        self.superseding_skill_id.as_deref()
    }

    pub fn all_questions_merged(&self) -> bool {
        self.all_questions_merged
    }

    pub fn find_misconception_by_id(&self, id: i64) -> Result<&Misconception, SkillError> {
        self.misconceptions
            .iter()
            .find(|m| m.id == id)
            .ok_or(SkillError::MisconceptionNotFound(id))
    }

    /// Removes every misconception with the given id
    pub fn delete_misconception(&mut self, id: i64) {
        self.misconceptions.retain(|m| m.id != id);
    }

    pub fn misconception_at_index(&self, index: usize) -> Option<&Misconception> {
        self.misconceptions.get(index)
    }

    pub fn rubric_explanation(&self, difficulty: Difficulty) -> Option<&str> {
        self.rubrics
            .iter()
            .find(|r| r.difficulty == difficulty)
            .map(|r| r.explanation.as_str())
    }

    /// Sets the explanation for `difficulty`, adding a rubric if none exists yet.
    /// `difficulty` must be one of `Easy`, `Medium` or `Hard`.
    pub fn update_rubric_for_difficulty(
        &mut self,
        difficulty: &str,
        explanation: impl Into<String>,
    ) -> Result<(), SkillError> {
        let difficulty: Difficulty = difficulty.parse()?;
        match self.rubrics.iter_mut().find(|r| r.difficulty == difficulty) {
            Some(rubric) => rubric.set_explanation(explanation),
            None => self.rubrics.push(Rubric::new(difficulty, explanation)),
        }
        Ok(())
    }

    /// Human-readable problems that block publishing this skill
    pub fn validation_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.concept_card.explanation.html.is_empty() {
            issues.push("There should be review material in the concept card.".to_string());
        }
        if self.rubrics.len() != Difficulty::ALL.len() {
            issues.push(
                "All 3 difficulties (Easy, Medium and Hard) should be addressed in rubrics."
                    .to_string(),
            );
        }
        issues
    }
}

#[cfg(test)]
#[path = "skill_tests.rs"]
mod tests;
