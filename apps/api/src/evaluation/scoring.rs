//! Section heuristics for the rule-based evaluator.
//!
//! Every scorer takes already-normalized text and uses plain substring
//! containment, so short keywords such as "r" also match inside longer words.
//! Each result is capped at `SECTION_MAX`.

use crate::evaluation::models::SECTION_MAX;
use crate::evaluation::taxonomy::SkillTaxonomy;

const SECTION_TOKENS: &[&str] = &["profile", "experience", "education", "skills", "contact"];
const SECTION_POINTS: u32 = 5;

const EXPERIENCE_KEYWORDS: &[&str] = &[
    "tahun",
    "year",
    "experience",
    "worked",
    "managed",
    "developed",
];
const EXPERIENCE_POINTS: u32 = 2;

/// (marker, points)
const BRANDING_SIGNALS: &[(&str, u32)] = &[
    ("@", 6),
    ("linkedin", 6),
    ("github", 6),
    ("portfolio", 7),
];

/// Structure: 5 points per section heading present.
pub fn structure_score(text: &str) -> u32 {
    let score = count_present(text, SECTION_TOKENS) * SECTION_POINTS;
    score.min(SECTION_MAX)
}

/// Experience: 2 points per experience keyword present.
pub fn experience_score(text: &str) -> u32 {
    let score = count_present(text, EXPERIENCE_KEYWORDS) * EXPERIENCE_POINTS;
    score.min(SECTION_MAX)
}

/// Skills: one point per distinct taxonomy skill present.
pub fn skills_score(text: &str, taxonomy: &SkillTaxonomy) -> u32 {
    let score = count_present(text, &taxonomy.all_skills());
    score.min(SECTION_MAX)
}

/// Branding: contact and online presence markers.
pub fn branding_score(text: &str) -> u32 {
    let score: u32 = BRANDING_SIGNALS
        .iter()
        .filter(|(marker, _)| text.contains(marker))
        .map(|(_, points)| points)
        .sum();
    score.min(SECTION_MAX)
}

pub(crate) fn count_present(text: &str, keywords: &[&str]) -> u32 {
    keywords.iter().filter(|k| text.contains(*k)).count() as u32
}
