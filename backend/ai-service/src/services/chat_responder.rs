use crate::models::chat::{ChatRequest, ChatResponse, ContextQuestionSet, Reference};

/// Added to the word counts to approximate prompt overhead.
const TOKEN_OVERHEAD: usize = 20;
const BEGINNER_LEVEL: &str = "beginner";
const FALLBACK_TOPIC: &str = "this topic";

/// A chat reply together with its approximate token usage.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub response: ChatResponse,
    pub tokens_used: usize,
}

/// Stand-in for the language model: a templated reply that quotes the
/// message, references matching context questions and suggests follow-ups.
pub fn respond(request: &ChatRequest) -> ChatReply {
    let references = extract_references(&request.message, &request.question_sets);

    let mut message = format!(
        "This is a simulated AI response to your question: '{}'. ",
        request.message
    );
    if request.user_level() == Some(BEGINNER_LEVEL) {
        message.push_str("I've tailored this response for a beginner level of understanding. ");
    }

    let tokens_used = estimate_tokens(&request.message, &message);
    tracing::debug!(
        "Chat reply built: {} references, {} prior turns, ~{} tokens",
        references.len(),
        request.conversation.len(),
        tokens_used
    );

    ChatReply {
        response: ChatResponse {
            message,
            references,
            suggested_questions: suggested_questions(&request.message),
        },
        tokens_used,
    }
}

/// At most one reference per question set: the answer of the first question
/// sharing a keyword with `message`. A keyword is any whitespace-separated
/// token of the lowercased question text found inside the lowercased message.
pub fn extract_references(message: &str, question_sets: &[ContextQuestionSet]) -> Vec<Reference> {
    let message = message.to_lowercase();

    question_sets
        .iter()
        .filter_map(|set| {
            let question = set.questions.iter().find(|question| {
                question
                    .text
                    .to_lowercase()
                    .split_whitespace()
                    .any(|keyword| message.contains(keyword))
            })?;

            Some(Reference {
                text: question.answer_text(),
                source: format!("{} Question Set", set.name.as_deref().unwrap_or("Unknown")),
            })
        })
        .collect()
}

pub fn suggested_questions(message: &str) -> Vec<String> {
    let topic = message.split_whitespace().next().unwrap_or(FALLBACK_TOPIC);
    vec![
        format!("Can you explain more about {}?", topic),
        "How does this relate to other concepts?".to_string(),
        "What are some practical applications of this?".to_string(),
    ]
}

fn estimate_tokens(message: &str, reply: &str) -> usize {
    message.split_whitespace().count() + reply.split_whitespace().count() + TOKEN_OVERHEAD
}
