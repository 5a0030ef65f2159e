use serde::Serialize;

/// A remote model that requests may select, with its pricing for display.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    /// USD per 1M tokens
    pub cost_per_million: &'static str,
    pub quality: &'static str,
    pub recommended: bool,
}

pub static SUPPORTED_MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "openai/gpt-4o-mini",
        name: "GPT-4o Mini",
        cost_per_million: "$0.15",
        quality: "Good",
        recommended: true,
    },
    ModelInfo {
        id: "google/gemini-flash-1.5",
        name: "Gemini Flash",
        cost_per_million: "$0.075",
        quality: "Good",
        recommended: false,
    },
    ModelInfo {
        id: "meta-llama/llama-3.1-8b-instruct",
        name: "Llama 3.1 8B",
        cost_per_million: "$0.055",
        quality: "Budget",
        recommended: false,
    },
    ModelInfo {
        id: "anthropic/claude-3.5-sonnet",
        name: "Claude 3.5 Sonnet",
        cost_per_million: "$3",
        quality: "Premium",
        recommended: false,
    },
    ModelInfo {
        id: "mistralai/mixtral-8x7b-instruct",
        name: "Mixtral 8x7B",
        cost_per_million: "$0.24",
        quality: "Good",
        recommended: false,
    },
    ModelInfo {
        id: "microsoft/wizardlm-2-8x22b",
        name: "WizardLM",
        cost_per_million: "$0.50",
        quality: "Good",
        recommended: false,
    },
];

pub fn find_model(id: &str) -> Option<&'static ModelInfo> {
    SUPPORTED_MODELS.iter().find(|m| m.id == id)
}
