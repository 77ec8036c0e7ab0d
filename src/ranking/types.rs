use std::fmt;

use crate::scoring::ScoreBreakdown;

/// What the documents are ranked against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    /// Informational only; not used in scoring.
    pub title: String,
    pub description: String,
    /// Ordered, duplicates allowed, may be empty.
    pub required_skills: Vec<String>,
}

impl JobQuery {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        required_skills: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            required_skills,
        }
    }
}

/// One successfully scored document.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredResult {
    pub name: String,
    pub file_name: String,
    /// Required skills found in the text, in query order and casing.
    pub matched_skills: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

impl ScoredResult {
    /// Final weighted score in `[0, 100]`.
    pub fn score(&self) -> f64 {
        self.breakdown.final_score
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Extraction,
    Embedding,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Extraction => "extraction",
            FailureKind::Embedding => "embedding",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document that could not be scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFailure {
    pub name: String,
    pub file_name: String,
    pub kind: FailureKind,
    pub message: String,
}

/// Output of one ranking request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingOutcome {
    /// Sorted by descending score; ties keep input order.
    pub results: Vec<ScoredResult>,
    /// In input order.
    pub failures: Vec<DocumentFailure>,
}

impl RankingOutcome {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty() && self.failures.is_empty()
    }
}
