use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SkillError;

/// Question difficulty levels a skill's rubrics must cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = SkillError;

    /// Exact, case-sensitive match against the backend's difficulty names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| SkillError::InvalidDifficulty(s.to_string()))
    }
}

/// Explanation of what a question at a given difficulty looks like for a skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rubric {
    pub difficulty: Difficulty,
    pub explanation: String,
}

impl Rubric {
    pub fn new(difficulty: Difficulty, explanation: impl Into<String>) -> Self {
        Self {
            difficulty,
            explanation: explanation.into(),
        }
    }

    pub fn set_explanation(&mut self, explanation: impl Into<String>) {
        self.explanation = explanation.into();
    }
}
