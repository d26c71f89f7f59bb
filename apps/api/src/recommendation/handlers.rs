//! Axum route handlers for the Recommendation API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::narration::{narrate, Diagnostic, SkippedRow, SpeechText};
use crate::recommendation::generator::{recommend, Recommendation};
use crate::recommendation::profile::StudentProfile;
use crate::recommendation::summary::{
    render_summary_pdf, summary_file_name, SUMMARY_CONTENT_TYPE,
};
use crate::speech::{SpeechError, Voice};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct NarrationRequest {
    pub recommendation: String,
}

/// Narration outcome. `readable: false` means `text` is a diagnostic message
/// and must not be sent to speech synthesis.
#[derive(Debug, Serialize)]
pub struct NarrationResponse {
    pub readable: bool,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<Diagnostic>,
    pub sentence_count: usize,
    pub skipped_rows: Vec<SkippedRow>,
}

impl From<SpeechText> for NarrationResponse {
    fn from(speech: SpeechText) -> Self {
        let (diagnostic, sentence_count, skipped_rows) = match &speech {
            SpeechText::Narration(narration) => (
                None,
                narration.sentence_count,
                narration.skipped_rows.clone(),
            ),
            SpeechText::Diagnostic(diagnostic) => (Some(*diagnostic), 0, Vec::new()),
        };
        Self {
            readable: diagnostic.is_none(),
            text: speech.into_text(),
            diagnostic,
            sentence_count,
            skipped_rows,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    pub recommendation: String,
    pub voice: Option<Voice>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub profile_summary: String,
    pub recommendation: String,
}

#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub voices: Vec<Voice>,
    pub default: Voice,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations
///
/// Validates the profile, asks the model for three campus/major picks and
/// returns the profile summary, the markdown table and its readable rows.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(profile): Json<StudentProfile>,
) -> Result<Json<Recommendation>, AppError> {
    let recommendation = recommend(state.recommender.as_ref(), &profile).await?;
    Ok(Json(recommendation))
}

/// POST /api/v1/recommendations/narration
///
/// Converts a recommendation table into narration text without synthesizing audio.
pub async fn handle_narration(
    Json(request): Json<NarrationRequest>,
) -> Json<NarrationResponse> {
    Json(narrate(&request.recommendation).into())
}

/// POST /api/v1/recommendations/speech
///
/// Narrates the table and returns MP3 audio. A table that cannot be narrated
/// is rejected with 422 and the diagnostic message, never spoken.
pub async fn handle_speech(
    State(state): State<AppState>,
    Json(request): Json<SpeechRequest>,
) -> Result<Response, AppError> {
    if request.recommendation.trim().is_empty() {
        return Err(AppError::Validation(
            "recommendation cannot be empty".to_string(),
        ));
    }

    let narration = match narrate(&request.recommendation) {
        SpeechText::Narration(narration) => narration,
        SpeechText::Diagnostic(diagnostic) => {
            return Err(AppError::UnprocessableEntity(diagnostic.to_string()));
        }
    };

    let voice = request.voice.unwrap_or(state.config.default_voice);
    info!(
        "Synthesizing {} narration sentences with voice {}",
        narration.sentence_count, voice
    );

    let audio = state
        .synthesizer
        .synthesize(&narration.text, voice)
        .await
        .map_err(|e| match e {
            too_long @ SpeechError::InputTooLong { .. } => {
                AppError::UnprocessableEntity(too_long.to_string())
            }
            other => AppError::Speech(other.to_string()),
        })?;

    Ok(([(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response())
}

/// POST /api/v1/recommendations/summary
///
/// Returns the profile summary and recommendation as a downloadable PDF.
pub async fn handle_summary(Json(request): Json<SummaryRequest>) -> Result<Response, AppError> {
    if request.recommendation.trim().is_empty() {
        return Err(AppError::Validation(
            "recommendation cannot be empty".to_string(),
        ));
    }

    let document = render_summary_pdf(
        &request.profile_summary,
        &request.recommendation,
        Utc::now(),
    )
    .map_err(anyhow::Error::from)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        summary_file_name(Uuid::new_v4())
    );

    Ok((
        [
            (header::CONTENT_TYPE, SUMMARY_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document,
    )
        .into_response())
}

/// GET /api/v1/voices
pub async fn handle_voices(State(state): State<AppState>) -> Json<VoicesResponse> {
    Json(VoicesResponse {
        voices: Voice::ALL.to_vec(),
        default: state.config.default_voice,
    })
}
