//! Remote evaluator — delegates the assessment to a chat-completion model.
//!
//! Transport failures surface as `EvaluationError` so the caller can fall back
//! to the rule-based path. A reply that arrives but cannot be parsed is NOT an
//! error: it yields the fixed stub result with the raw reply attached.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, warn};

use crate::evaluation::models::{EvaluationResult, EvaluationSource, RoleMatch, SectionScores};
use crate::evaluation::prompts::CV_EVALUATION_PROMPT_TEMPLATE;
use crate::evaluation::{EvaluationError, Evaluator};
use crate::llm_client::LlmClient;

/// CV text beyond this many characters is not sent to the model.
pub const MAX_PROMPT_CHARS: usize = 4000;

/// Greedy: first `{` through last `}`, across newlines.
static JSON_OBJECT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));

pub struct RemoteEvaluator {
    llm: LlmClient,
    model: String,
}

impl RemoteEvaluator {
    pub fn new(llm: LlmClient, model: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
        }
    }
}

#[async_trait]
impl Evaluator for RemoteEvaluator {
    fn source(&self) -> EvaluationSource {
        EvaluationSource::Remote
    }

    async fn evaluate(&self, raw_text: &str) -> Result<EvaluationResult, EvaluationError> {
        let prompt = build_prompt(raw_text);
        let reply = self.llm.complete(&self.model, &prompt).await?;
        debug!("Remote evaluation reply received ({} chars)", reply.len());
        Ok(parse_reply(&reply))
    }
}

pub fn build_prompt(raw_text: &str) -> String {
    CV_EVALUATION_PROMPT_TEMPLATE.replace("{cv_text}", truncate_chars(raw_text, MAX_PROMPT_CHARS))
}

/// Longest prefix of `text` holding at most `max` characters.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Parses a model reply, tolerating prose around the JSON object.
pub fn parse_reply(reply: &str) -> EvaluationResult {
    let candidate = JSON_OBJECT
        .find(reply)
        .map(|m| m.as_str())
        .unwrap_or(reply);

    match serde_json::from_str::<EvaluationResult>(candidate) {
        Ok(result) => result,
        Err(e) => {
            warn!("Model reply is not a valid evaluation, using stub result: {e}");
            stub_result(reply)
        }
    }
}

/// Placeholder evaluation used when the model reply cannot be parsed.
pub fn stub_result(raw_reply: &str) -> EvaluationResult {
    EvaluationResult {
        overall_score: 70,
        section_scores: SectionScores {
            structure: 18,
            experience: 17,
            skills: 18,
            branding: 17,
        },
        strengths: vec![
            "CV struktur cukup baik".to_string(),
            "Informasi lengkap".to_string(),
        ],
        weaknesses: vec![
            "Perlu lebih detail".to_string(),
            "Format bisa diperbaiki".to_string(),
        ],
        suggestions: vec![
            "Tambahkan ringkasan profil yang menarik".to_string(),
            "Sertakan lebih banyak pencapaian dengan angka".to_string(),
            "Update skills sesuai tren industri".to_string(),
        ],
        job_roles: vec![RoleMatch {
            role: "General Position".to_string(),
            match_percentage: 70.0,
            reason: "Profil umum yang cukup baik".to_string(),
        }],
        detected_skills: vec![
            "Communication".to_string(),
            "Teamwork".to_string(),
            "Problem Solving".to_string(),
        ],
        ai_raw_response: Some(raw_reply.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmClientConfig;
    use httpmock::prelude::*;
    use serde_json::json;

    const VALID_REPLY: &str = r#"{
        "overall_score": 76,
        "section_scores": {"structure": 20, "experience": 18, "skills": 22, "branding": 16},
        "strengths": ["Skill teknis kuat"],
        "weaknesses": ["Ringkasan profil kurang"],
        "suggestions": ["Tambahkan link portfolio"],
        "job_roles": [{"role": "Software Engineer", "match_percentage": 80.5, "reason": "Pengalaman backend"}],
        "detected_skills": ["rust", "sql"]
    }"#;

    #[test]
    fn test_parse_plain_json_reply() {
        let result = parse_reply(VALID_REPLY);
        assert_eq!(result.overall_score, 76);
        assert_eq!(result.section_scores.skills, 22);
        assert_eq!(result.job_roles[0].match_percentage, 80.5);
        assert!(result.ai_raw_response.is_none());
    }

    #[test]
    fn test_parse_reply_wrapped_in_prose_and_fences() {
        let reply = format!("Berikut hasil analisis:\n```json\n{VALID_REPLY}\n```\nSemoga membantu!");
        let result = parse_reply(&reply);
        assert_eq!(result.overall_score, 76);
        assert_eq!(result.detected_skills, vec!["rust", "sql"]);
    }

    #[test]
    fn test_unparseable_reply_yields_exact_stub() {
        let reply = "Maaf, saya tidak bisa menilai CV ini.";
        let result = parse_reply(reply);
        assert_eq!(result, stub_result(reply));
        assert_eq!(result.overall_score, 70);
        assert_eq!(
            result.section_scores,
            SectionScores {
                structure: 18,
                experience: 17,
                skills: 18,
                branding: 17
            }
        );
        assert_eq!(result.job_roles[0].role, "General Position");
        assert_eq!(result.job_roles[0].match_percentage, 70.0);
        assert_eq!(
            result.detected_skills,
            vec!["Communication", "Teamwork", "Problem Solving"]
        );
        assert_eq!(result.ai_raw_response.as_deref(), Some(reply));
    }

    #[test]
    fn test_wrong_shape_yields_stub_with_full_reply() {
        let reply = "Score: {\"overall\": \"good\"}";
        let result = parse_reply(reply);
        assert_eq!(result.overall_score, 70);
        assert_eq!(result.ai_raw_response.as_deref(), Some(reply));
    }

    #[test]
    fn test_stub_serializes_raw_response() {
        let value = serde_json::to_value(stub_result("raw")).unwrap();
        assert_eq!(value["ai_raw_response"], "raw");
        assert_eq!(value["section_scores"]["structure"], 18);
    }

    #[test]
    fn test_prompt_truncates_to_4000_chars() {
        let cv = format!("{}{}", "é".repeat(MAX_PROMPT_CHARS), "TAIL_MARKER");
        let prompt = build_prompt(&cv);
        assert!(prompt.contains(&"é".repeat(MAX_PROMPT_CHARS)));
        assert!(!prompt.contains("TAIL_MARKER"));
        assert!(!prompt.contains("{cv_text}"));
    }

    #[test]
    fn test_short_text_sent_whole() {
        assert_eq!(truncate_chars("short cv", MAX_PROMPT_CHARS), "short cv");
        assert_eq!(truncate_chars("abcdef", 3), "abc");
    }

    #[tokio::test]
    async fn test_evaluate_against_mock_provider() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .body_contains("Kriteria penilaian");
                then.status(200).json_body(json!({
                    "choices": [{"message": {"role": "assistant", "content": VALID_REPLY}}]
                }));
            })
            .await;

        let llm = LlmClient::new(LlmClientConfig {
            api_key: "k".to_string(),
            base_url: server.base_url(),
            referer: "http://localhost".to_string(),
            app_title: "test".to_string(),
        })
        .unwrap();
        let evaluator = RemoteEvaluator::new(llm, "openai/gpt-4o-mini");

        let result = evaluator.evaluate("Software engineer, Rust").await.unwrap();
        assert_eq!(evaluator.source(), EvaluationSource::Remote);
        assert_eq!(result.overall_score, 76);
    }
}
