use serde::{Deserialize, Serialize};

/// A common learner mistake attached to a skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Misconception {
    pub id: i64,
    pub name: String,
    pub notes: String,
    pub feedback: String,
    #[serde(default = "default_must_be_addressed")]
    pub must_be_addressed: bool,
}

fn default_must_be_addressed() -> bool {
    true
}

impl Misconception {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        notes: impl Into<String>,
        feedback: impl Into<String>,
        must_be_addressed: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            notes: notes.into(),
            feedback: feedback.into(),
            must_be_addressed,
        }
    }

    pub fn to_backend_dict(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
