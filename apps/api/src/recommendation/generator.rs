//! Recommendation pipeline.
//!
//! Flow: validate profile → summary → prompt → LLM → strip fences → parse rows.
//! The raw markdown is returned as-is next to the parsed rows; narration runs
//! later, on demand, from the markdown the client sends back.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::TABLE_ONLY_INSTRUCTION;
use crate::llm_client::{strip_code_fences, LlmClient};
use crate::narration::{parse_table, RecommendationRow};
use crate::recommendation::profile::StudentProfile;
use crate::recommendation::prompts::{
    RECOMMENDATION_PROMPT_TEMPLATE, RECOMMENDATION_SYSTEM, TABLE_HEADER,
};

/// Produces a markdown recommendation table from a prompt.
///
/// Carried in `AppState` as `Arc<dyn RecommendationGenerator>`.
#[async_trait]
pub trait RecommendationGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

/// Default generator: one chat-completion call through `LlmClient`.
pub struct LlmRecommender {
    llm: LlmClient,
}

impl LlmRecommender {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl RecommendationGenerator for LlmRecommender {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let text = self
            .llm
            .call_text(prompt, RECOMMENDATION_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Recommendation call failed: {e}")))?;

        Ok(strip_code_fences(&text).to_string())
    }
}

/// Result of one form submission.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub profile_summary: String,
    /// Markdown table exactly as the model returned it (fences removed).
    pub recommendation: String,
    /// Rows that could be read from the table, for structured rendering.
    pub rows: Vec<RecommendationRow>,
}

pub fn build_recommendation_prompt(profile_summary: &str) -> String {
    RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{profile}", profile_summary)
        .replace("{table_header}", TABLE_HEADER)
        .replace("{table_only_instruction}", TABLE_ONLY_INSTRUCTION)
}

/// Runs the full recommendation pipeline for one profile.
pub async fn recommend(
    generator: &dyn RecommendationGenerator,
    profile: &StudentProfile,
) -> Result<Recommendation, AppError> {
    let problems = profile.validate();
    if !problems.is_empty() {
        return Err(AppError::Validation(problems.join("; ")));
    }

    let profile_summary = profile.summary();
    let prompt = build_recommendation_prompt(&profile_summary);

    info!("Requesting recommendations for {}", profile.name.trim());
    let recommendation = generator.generate(&prompt).await?;

    if recommendation.trim().is_empty() {
        return Err(AppError::Llm("Recommendation was empty".to_string()));
    }

    let rows = match parse_table(&recommendation) {
        Ok(table) => table.rows,
        Err(diagnostic) => {
            warn!("Recommendation is not a readable table: {diagnostic}");
            Vec::new()
        }
    };
    info!("Received recommendation with {} readable rows", rows.len());

    Ok(Recommendation {
        profile_summary,
        recommendation,
        rows,
    })
}
