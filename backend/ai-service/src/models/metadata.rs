use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Processing details attached to every successful response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    pub processing_time: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_text_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<usize>,
}

impl ResponseMetadata {
    pub fn for_questions(elapsed: Duration, model: &str, source_text_length: usize) -> Self {
        Self {
            processing_time: format_processing_time(elapsed),
            model: model.to_string(),
            source_text_length: Some(source_text_length),
            tokens_used: None,
        }
    }

    pub fn for_chat(elapsed: Duration, model: &str, tokens_used: usize) -> Self {
        Self {
            processing_time: format_processing_time(elapsed),
            model: model.to_string(),
            source_text_length: None,
            tokens_used: Some(tokens_used),
        }
    }
}

/// Seconds with two decimals and an `s` suffix, e.g. `0.12s`.
pub fn format_processing_time(elapsed: Duration) -> String {
    format!("{:.2}s", elapsed.as_secs_f64())
}
