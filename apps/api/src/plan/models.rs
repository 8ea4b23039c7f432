//! PrepPlan — the structured interview-preparation plan produced by one model call.
//!
//! Wire form is camelCase JSON. Difficulty values are read case-insensitively
//! and always written lowercase.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepPlan {
    pub company: String,
    pub role: String,
    pub key_skills: Vec<String>,
    pub projects: Vec<Project>,
    pub coding_challenges: Vec<CodingChallenge>,
    pub behavioral_questions: Vec<BehavioralQuestion>,
    pub study_timeline: StudyTimeline,
}

/// A portfolio project worth building before the interview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub difficulty: ProjectDifficulty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodingChallenge {
    pub title: String,
    pub description: String,
    pub difficulty: ChallengeDifficulty,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehavioralQuestion {
    pub question: String,
    /// What to emphasize in the answer.
    pub focus: String,
    /// Answer strategy.
    pub tips: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyTimeline {
    /// Free-text label, e.g. "2-4 weeks".
    pub duration: String,
    pub phases: Vec<StudyPhase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPhase {
    pub phase: String,
    pub duration: String,
    pub focus: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeDifficulty {
    Easy,
    Medium,
    Hard,
}

impl ProjectDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectDifficulty::Beginner => "beginner",
            ProjectDifficulty::Intermediate => "intermediate",
            ProjectDifficulty::Advanced => "advanced",
        }
    }
}

impl ChallengeDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeDifficulty::Easy => "easy",
            ChallengeDifficulty::Medium => "medium",
            ChallengeDifficulty::Hard => "hard",
        }
    }
}

impl FromStr for ProjectDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(ProjectDifficulty::Beginner),
            "intermediate" => Ok(ProjectDifficulty::Intermediate),
            "advanced" => Ok(ProjectDifficulty::Advanced),
            other => Err(format!(
                "unknown project difficulty '{other}' (expected beginner, intermediate or advanced)"
            )),
        }
    }
}

impl FromStr for ChallengeDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(ChallengeDifficulty::Easy),
            "medium" => Ok(ChallengeDifficulty::Medium),
            "hard" => Ok(ChallengeDifficulty::Hard),
            other => Err(format!(
                "unknown challenge difficulty '{other}' (expected easy, medium or hard)"
            )),
        }
    }
}

impl<'de> Deserialize<'de> for ProjectDifficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for ChallengeDifficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

impl fmt::Display for ProjectDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ChallengeDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
