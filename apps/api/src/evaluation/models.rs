//! Canonical evaluation record shared by the rule-based and remote evaluators.

use serde::{Deserialize, Serialize};

/// Upper bound of every section score.
pub const SECTION_MAX: u32 = 25;

/// The four bounded sub-scores, each in `0..=SECTION_MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScores {
    pub structure: u32,
    pub experience: u32,
    pub skills: u32,
    pub branding: u32,
}

impl SectionScores {
    pub fn total(&self) -> u32 {
        self.structure + self.experience + self.skills + self.branding
    }
}

/// A candidate job role with a percentage fit and a short justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleMatch {
    pub role: String,
    pub match_percentage: f64, // 0.0 – 100.0, one decimal
    pub reason: String,
}

/// Full evaluation of one CV. Both evaluation modes produce exactly this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub overall_score: u32,
    pub section_scores: SectionScores,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub job_roles: Vec<RoleMatch>,
    pub detected_skills: Vec<String>,
    /// Raw model reply, attached only when the reply could not be parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_raw_response: Option<String>,
}

/// Which evaluator produced a result — for transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationSource {
    Remote,
    RuleBased,
}

/// Coarse label for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => ScoreBand::Excellent,
            s if s >= 60 => ScoreBand::Good,
            _ => ScoreBand::NeedsImprovement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_result_deserializes_model_reply() {
        let json = r#"{
            "overall_score": 82,
            "section_scores": {"structure": 20, "experience": 21, "skills": 22, "branding": 19},
            "strengths": ["Pengalaman relevan"],
            "weaknesses": ["Kurang metrik"],
            "suggestions": ["Tambahkan angka pencapaian"],
            "job_roles": [{"role": "Data Analyst", "match_percentage": 85, "reason": "SQL kuat"}],
            "detected_skills": ["sql", "python"]
        }"#;

        let result: EvaluationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.overall_score, 82);
        assert_eq!(result.section_scores.total(), 82);
        assert_eq!(result.job_roles[0].match_percentage, 85.0);
        assert!(result.ai_raw_response.is_none());
    }

    #[test]
    fn test_raw_response_omitted_when_absent() {
        let result = EvaluationResult {
            overall_score: 0,
            section_scores: SectionScores::default(),
            strengths: vec![],
            weaknesses: vec![],
            suggestions: vec![],
            job_roles: vec![],
            detected_skills: vec![],
            ai_raw_response: None,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("ai_raw_response").is_none());
        assert_eq!(value["section_scores"]["branding"], 0);
    }

    #[test]
    fn test_score_band_thresholds() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::NeedsImprovement);
    }

    #[test]
    fn test_source_serializes_snake_case() {
        let json = serde_json::to_string(&EvaluationSource::RuleBased).unwrap();
        assert_eq!(json, r#""rule_based""#);
    }
}
