use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Content id of a concept card's main explanation
pub const EXPLANATION_CONTENT_ID: &str = "explanation";

const INTERSTITIAL_EXPLANATION: &str = "Loading review material";

/// HTML fragment tagged with the content id used for translations and voiceovers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitledHtml {
    pub html: String,
    pub content_id: String,
}

impl SubtitledHtml {
    pub fn new(html: impl Into<String>, content_id: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            content_id: content_id.into(),
        }
    }
}

/// A question with its worked-out explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkedExample {
    pub question: SubtitledHtml,
    pub explanation: SubtitledHtml,
}

/// Audio recording of one piece of content in one language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voiceover {
    pub filename: String,
    pub file_size_bytes: u64,
    #[serde(default)]
    pub needs_update: bool,
    #[serde(default)]
    pub duration_secs: f64,
}

/// Voiceovers keyed by content id, then by language code
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordedVoiceovers {
    #[serde(default)]
    pub voiceovers_mapping: BTreeMap<String, BTreeMap<String, Voiceover>>,
}

impl RecordedVoiceovers {
    /// Mapping with an empty language map for each content id
    pub fn for_content_ids<'a>(content_ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            voiceovers_mapping: content_ids
                .into_iter()
                .map(|id| (id.to_string(), BTreeMap::new()))
                .collect(),
        }
    }

    /// Voiceover for a content id in a given language, if recorded
    pub fn get(&self, content_id: &str, language_code: &str) -> Option<&Voiceover> {
        self.voiceovers_mapping
            .get(content_id)
            .and_then(|by_language| by_language.get(language_code))
    }
}

/// Review material for a skill: explanation, worked examples and their voiceovers.
///
/// The backend calls this `skill_contents` when embedded in a skill and
/// `concept_card_dicts` entries when served on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptCard {
    pub explanation: SubtitledHtml,
    #[serde(default)]
    pub worked_examples: Vec<WorkedExample>,
    #[serde(default)]
    pub recorded_voiceovers: RecordedVoiceovers,
}

impl ConceptCard {
    /// Placeholder card displayed until the real one has been fetched
    pub fn interstitial() -> Self {
        Self {
            explanation: SubtitledHtml::new(INTERSTITIAL_EXPLANATION, EXPLANATION_CONTENT_ID),
            worked_examples: Vec::new(),
            recorded_voiceovers: RecordedVoiceovers::for_content_ids([EXPLANATION_CONTENT_ID]),
        }
    }

    /// Explanation content id followed by each example's question and explanation ids
    pub fn content_ids(&self) -> Vec<&str> {
        let mut ids = vec![self.explanation.content_id.as_str()];
        for example in &self.worked_examples {
            ids.push(example.question.content_id.as_str());
            ids.push(example.explanation.content_id.as_str());
        }
        ids
    }

    pub fn to_backend_dict(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
