use std::sync::Arc;

use crate::config::Config;
use crate::recommendation::generator::RecommendationGenerator;
use crate::speech::SpeechSynthesizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Chat-backed by default; swapped for a fixed answer in handler tests.
    pub recommender: Arc<dyn RecommendationGenerator>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
}
