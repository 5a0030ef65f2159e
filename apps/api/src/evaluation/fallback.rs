//! Rule-based evaluator — pure-Rust, deterministic, no network call.
//!
//! Algorithm:
//! 1. Normalize the raw text once.
//! 2. Score structure, experience, skills and branding (each 0–25).
//! 3. overall_score = sum of the four.
//! 4. Recommend roles and list detected skills from the taxonomy.
//!
//! Strengths, weaknesses and suggestions are fixed advisory text and do not
//! depend on the scores. Only the remote evaluator writes bespoke feedback.

use async_trait::async_trait;
use tracing::debug;

use crate::evaluation::models::{EvaluationResult, EvaluationSource, SectionScores};
use crate::evaluation::normalize::normalize;
use crate::evaluation::recommend::{
    extract_skills, recommend_roles, DEFAULT_ROLE_LIMIT, DEFAULT_SKILL_LIMIT,
};
use crate::evaluation::scoring::{branding_score, experience_score, skills_score, structure_score};
use crate::evaluation::taxonomy::SkillTaxonomy;
use crate::evaluation::{EvaluationError, Evaluator};

const STRENGTHS: &[&str] = &["CV terstruktur dengan baik", "Informasi lengkap tersedia"];
const WEAKNESSES: &[&str] = &["Bisa ditingkatkan dengan AI analysis"];
const SUGGESTIONS: &[&str] = &[
    "Gunakan OpenRouter API untuk analisis yang lebih mendalam",
    "Tambahkan lebih banyak detail pencapaian",
    "Sertakan portfolio online",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackEvaluator {
    taxonomy: SkillTaxonomy,
}

impl FallbackEvaluator {
    /// Evaluates `raw_text`. Total: any input, including empty, yields a full result.
    pub fn analyze(&self, raw_text: &str) -> EvaluationResult {
        let text = normalize(raw_text);

        let section_scores = SectionScores {
            structure: structure_score(&text),
            experience: experience_score(&text),
            skills: skills_score(&text, &self.taxonomy),
            branding: branding_score(&text),
        };
        let overall_score = section_scores.total();

        debug!(
            "Rule-based evaluation: overall={overall_score} structure={} experience={} skills={} branding={}",
            section_scores.structure,
            section_scores.experience,
            section_scores.skills,
            section_scores.branding
        );

        EvaluationResult {
            overall_score,
            section_scores,
            strengths: to_strings(STRENGTHS),
            weaknesses: to_strings(WEAKNESSES),
            suggestions: to_strings(SUGGESTIONS),
            job_roles: recommend_roles(&text, &self.taxonomy, DEFAULT_ROLE_LIMIT),
            detected_skills: extract_skills(&text, &self.taxonomy, DEFAULT_SKILL_LIMIT),
            ai_raw_response: None,
        }
    }
}

#[async_trait]
impl Evaluator for FallbackEvaluator {
    fn source(&self) -> EvaluationSource {
        EvaluationSource::RuleBased
    }

    async fn evaluate(&self, raw_text: &str) -> Result<EvaluationResult, EvaluationError> {
        Ok(self.analyze(raw_text))
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
