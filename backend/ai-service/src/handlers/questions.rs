use axum::{extract::State, Json};
use serde_json::{Map, Value};
use std::{sync::Arc, time::Instant};

use crate::{
    error::ServiceResult,
    extractors::AppJson,
    models::{GenerateQuestionsResponse, ResponseMetadata},
    services::{question_generator, AppState},
    validation,
};

/// POST /v1/api/generate-questions - Generate a question set from source text
pub async fn generate_questions(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<Map<String, Value>>,
) -> ServiceResult<Json<GenerateQuestionsResponse>> {
    let started = Instant::now();

    let request = validation::validate_question_request(&body)
        .inspect_err(|e| tracing::warn!("Rejected question request: {}", e))?;

    let source_text_length = request.source_text.chars().count();
    tracing::info!(
        "Generating questions: count={}, types={:?}, source_chars={}",
        request.question_count,
        request.question_types,
        source_text_length
    );

    let questions = question_generator::generate_questions(&request, &mut rand::rng());

    Ok(Json(GenerateQuestionsResponse {
        success: true,
        questions,
        metadata: ResponseMetadata::for_questions(
            started.elapsed(),
            &state.config.model_name,
            source_text_length,
        ),
    }))
}
