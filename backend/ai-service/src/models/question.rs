use serde::{Deserialize, Serialize};

use super::metadata::ResponseMetadata;

/// Upper bound on questions produced per request; larger counts are clamped.
pub const MAX_QUESTIONS_PER_REQUEST: usize = 10;
pub const MIN_SOURCE_TEXT_CHARS: u64 = 50;
pub const DEFAULT_DIFFICULTY: &str = "medium";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
}

impl QuestionType {
    pub const ALL: [QuestionType; 3] = [
        QuestionType::MultipleChoice,
        QuestionType::TrueFalse,
        QuestionType::ShortAnswer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::TrueFalse => "true-false",
            QuestionType::ShortAnswer => "short-answer",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

/// A validated generate-questions request.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionRequest {
    pub source_text: String,
    pub question_count: u64,
    /// Never empty, no duplicates, in request order.
    pub question_types: Vec<QuestionType>,
    pub difficulty: String,
}

impl QuestionRequest {
    pub fn effective_count(&self) -> usize {
        usize::try_from(self.question_count)
            .unwrap_or(usize::MAX)
            .min(MAX_QUESTIONS_PER_REQUEST)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub text: String,
    pub question_type: QuestionType,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub explanation: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub metadata: ResponseMetadata,
}
