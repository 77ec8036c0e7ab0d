/// Returns the required skills found in `text`, in their original order and casing.
///
/// Matching is a case-insensitive substring test with no word boundaries, so
/// `"java"` also matches inside `"javascript"`. Blank skills never match.
pub fn extract_skills<S: AsRef<str>>(text: &str, required_skills: &[S]) -> Vec<String> {
    let haystack = text.to_lowercase();

    required_skills
        .iter()
        .map(AsRef::as_ref)
        .filter(|skill| !skill.trim().is_empty())
        .filter(|skill| haystack.contains(&skill.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Splits a comma-separated skill list, trimming entries and dropping empty ones.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// `matched / required`, or `0.0` when nothing is required.
pub fn skill_match_ratio(matched: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    (matched as f64 / required as f64).clamp(0.0, 1.0)
}
