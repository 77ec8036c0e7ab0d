//! Similarity, skill matching, and the weighted final score.
//!
//! ```text
//! final = round((similarity * 0.7 + skill_match * 0.3) * 100, 2)
//! ```
//!
//! `similarity` is the embedding cosine clamped into `[0, 1]`; `skill_match`
//! is the fraction of required skills found in the document text (`0` when no
//! skills are required).

pub mod error;
pub mod similarity;
pub mod skills;


pub use error::ScoringError;
pub use similarity::cosine_similarity;
pub use skills::{extract_skills, parse_skill_list, skill_match_ratio};

use crate::constants::{SIMILARITY_WEIGHT, SKILL_MATCH_WEIGHT};

/// Per-document score components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Cosine similarity clamped to `[0, 1]`.
    pub similarity: f64,
    /// Matched / required skills, in `[0, 1]`.
    pub skill_match: f64,
    /// Weighted score in `[0, 100]`, rounded to 2 decimals.
    pub final_score: f64,
}

impl ScoreBreakdown {
    /// Combines a raw cosine similarity with a skill-match ratio.
    pub fn combine(raw_similarity: f32, skill_match: f64) -> Self {
        let similarity = f64::from(raw_similarity).clamp(0.0, 1.0);
        let skill_match = skill_match.clamp(0.0, 1.0);
        let weighted = similarity * SIMILARITY_WEIGHT + skill_match * SKILL_MATCH_WEIGHT;

        Self {
            similarity,
            skill_match,
            final_score: round2(weighted * 100.0),
        }
    }

    /// Similarity as a percentage, rounded to 2 decimals.
    pub fn similarity_percentage(&self) -> f64 {
        round2(self.similarity * 100.0)
    }

    /// Skill match as a percentage, rounded to 2 decimals.
    pub fn skill_match_percentage(&self) -> f64 {
        round2(self.skill_match * 100.0)
    }
}

/// Rounds to 2 decimal places (half away from zero).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
