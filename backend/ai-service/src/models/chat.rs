use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::metadata::ResponseMetadata;

pub const MAX_CONTEXT_CHARS: u64 = 10_000;

/// A validated chat request.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    pub conversation: Vec<Value>,
    pub context: Map<String, Value>,
    /// Decoded `context.questionSets`, empty when absent.
    pub question_sets: Vec<ContextQuestionSet>,
}

impl ChatRequest {
    pub fn user_level(&self) -> Option<&str> {
        self.context.get("userLevel").and_then(Value::as_str)
    }
}

/// A question set the Core API passes along as reference material.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContextQuestionSet {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub questions: Vec<ContextQuestion>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContextQuestion {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub answer: Value,
}

impl ContextQuestion {
    /// The answer as reference text; non-string answers render as JSON.
    pub fn answer_text(&self) -> String {
        match &self.answer {
            Value::Null => String::new(),
            Value::String(answer) => answer.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub text: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub message: String,
    pub references: Vec<Reference>,
    pub suggested_questions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatApiResponse {
    pub success: bool,
    pub response: ChatResponse,
    pub metadata: ResponseMetadata,
}
