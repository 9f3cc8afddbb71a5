use serde::{Deserialize, Serialize};

pub mod chat;
pub mod metadata;
pub mod question;

pub use chat::{ChatApiResponse, ChatRequest, ChatResponse, ContextQuestionSet, Reference};
pub use metadata::ResponseMetadata;
pub use question::{GenerateQuestionsResponse, Question, QuestionRequest, QuestionType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
