// Prompt constants for remote CV evaluation.

/// CV analysis prompt template. Replace `{cv_text}` before sending.
///
/// The JSON schema below must stay isomorphic to `EvaluationResult`.
pub const CV_EVALUATION_PROMPT_TEMPLATE: &str = r#"Analisis CV berikut dan berikan penilaian dalam format JSON yang tepat:

CV TEXT:
{cv_text}

Berikan response dalam format JSON dengan struktur berikut:
{
  "overall_score": <nilai 0-100>,
  "section_scores": {
    "structure": <nilai 0-25>,
    "experience": <nilai 0-25>,
    "skills": <nilai 0-25>,
    "branding": <nilai 0-25>
  },
  "strengths": [
    "kekuatan 1",
    "kekuatan 2"
  ],
  "weaknesses": [
    "kelemahan 1",
    "kelemahan 2"
  ],
  "suggestions": [
    "saran 1",
    "saran 2",
    "saran 3"
  ],
  "job_roles": [
    {
      "role": "nama role",
      "match_percentage": <nilai 0-100>,
      "reason": "alasan mengapa cocok"
    }
  ],
  "detected_skills": [
    "skill1", "skill2", "skill3"
  ]
}

Kriteria penilaian:
- Structure (25): Kelengkapan section, format, organisasi
- Experience (25): Deskripsi kerja, pencapaian, impact
- Skills (25): Technical skills, tools, expertise
- Branding (25): Contact info, LinkedIn, portfolio, summary

Berikan analisis yang mendalam dan konstruktif dalam bahasa Indonesia."#;
