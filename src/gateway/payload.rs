//! JSON wire shapes.

use serde::{Deserialize, Serialize};

use crate::library::ResumeEntry;
use crate::ranking::{DocumentFailure, RankingOutcome, ScoredResult};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResumeItem {
    pub name: String,
    pub file: String,
}

impl From<ResumeEntry> for ResumeItem {
    fn from(entry: ResumeEntry) -> Self {
        Self {
            name: entry.name,
            file: entry.file,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RankResponse {
    pub results: Vec<RankedResume>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<RankFailure>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RankedResume {
    pub name: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// Weighted score in `[0, 100]`.
    pub score: f64,
    /// Matched required skills.
    pub skills: Vec<String>,
    pub similarity_score: f64,
    pub skill_match_percentage: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RankFailure {
    pub name: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// `extraction` or `embedding`.
    pub kind: String,
    pub error: String,
}

impl From<ScoredResult> for RankedResume {
    fn from(result: ScoredResult) -> Self {
        Self {
            score: result.score(),
            similarity_score: result.breakdown.similarity_percentage(),
            skill_match_percentage: result.breakdown.skill_match_percentage(),
            name: result.name,
            file_name: result.file_name,
            skills: result.matched_skills,
        }
    }
}

impl From<DocumentFailure> for RankFailure {
    fn from(failure: DocumentFailure) -> Self {
        Self {
            name: failure.name,
            file_name: failure.file_name,
            kind: failure.kind.as_str().to_string(),
            error: failure.message,
        }
    }
}

impl From<RankingOutcome> for RankResponse {
    fn from(outcome: RankingOutcome) -> Self {
        Self {
            results: outcome.results.into_iter().map(Into::into).collect(),
            errors: outcome.failures.into_iter().map(Into::into).collect(),
        }
    }
}
