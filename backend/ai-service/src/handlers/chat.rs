use axum::{extract::State, Json};
use serde_json::{Map, Value};
use std::{sync::Arc, time::Instant};

use crate::{
    error::ServiceResult,
    extractors::AppJson,
    models::{ChatApiResponse, ResponseMetadata},
    services::{chat_responder, AppState},
    validation,
};

/// POST /v1/api/chat - Answer a chat message with optional context
pub async fn chat(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<Map<String, Value>>,
) -> ServiceResult<Json<ChatApiResponse>> {
    let started = Instant::now();

    let request = validation::validate_chat_request(&body)
        .inspect_err(|e| tracing::warn!("Rejected chat request: {}", e))?;

    tracing::info!(
        "Chat request: message_chars={}, question_sets={}",
        request.message.chars().count(),
        request.question_sets.len()
    );

    let reply = chat_responder::respond(&request);

    Ok(Json(ChatApiResponse {
        success: true,
        response: reply.response,
        metadata: ResponseMetadata::for_chat(
            started.elapsed(),
            &state.config.model_name,
            reply.tokens_used,
        ),
    }))
}
