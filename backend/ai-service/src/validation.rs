//! Request validation for both generation endpoints.
//!
//! Bodies arrive as loose JSON objects so that every missing or mistyped field
//! maps onto the service's own error codes instead of a deserializer message.
//! Checks run in a fixed order and stop at the first failure.

use serde_json::{Map, Number, Value};
use validator::ValidateLength;

use crate::error::{ServiceError, ServiceResult};
use crate::models::chat::{ChatRequest, ContextQuestionSet, MAX_CONTEXT_CHARS};
use crate::models::question::{
    QuestionRequest, QuestionType, DEFAULT_DIFFICULTY, MIN_SOURCE_TEXT_CHARS,
};

pub const SOURCE_TEXT_REQUIRED: &str = "Source text is required";
pub const QUESTION_COUNT_INVALID: &str = "Question count must be a positive integer";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const CONVERSATION_INVALID: &str = "Conversation must be a list";
pub const CONTEXT_NOT_OBJECT: &str = "Context must be an object";
pub const QUESTION_SETS_MALFORMED: &str = "Context question sets are malformed";

/// Field lookup that treats an explicit `null` like a missing field.
fn field<'a>(body: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    body.get(name).filter(|value| !value.is_null())
}

pub fn validate_question_request(body: &Map<String, Value>) -> ServiceResult<QuestionRequest> {
    let source_text = field(body, "sourceText")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ServiceError::invalid_request(SOURCE_TEXT_REQUIRED))?;

    if !source_text.validate_length(Some(MIN_SOURCE_TEXT_CHARS), None, None) {
        return Err(ServiceError::TextTooShort);
    }

    let question_count = match field(body, "questionCount") {
        Some(Value::Number(number)) => parse_question_count(number),
        _ => None,
    }
    .ok_or_else(|| ServiceError::invalid_request(QUESTION_COUNT_INVALID))?;

    let question_types = field(body, "questionTypes")
        .map(parse_question_types)
        .filter(|types| !types.is_empty())
        .unwrap_or_else(|| QuestionType::ALL.to_vec());

    let difficulty = field(body, "difficulty")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_DIFFICULTY)
        .to_string();

    Ok(QuestionRequest {
        source_text: source_text.to_string(),
        question_count,
        question_types,
        difficulty,
    })
}

/// Positive integer literals only. Integers past `u64::MAX` saturate, since the
/// count is clamped later anyway; `3.0` and `2.5` stay rejected.
fn parse_question_count(number: &Number) -> Option<u64> {
    if let Some(count) = number.as_u64() {
        return (count >= 1).then_some(count);
    }

    let literal = number.to_string();
    let is_integer = !literal.is_empty() && literal.bytes().all(|b| b.is_ascii_digit());
    is_integer.then_some(u64::MAX)
}

/// Unknown or non-string entries become short-answer. A value that is not a
/// list yields no types, which the caller replaces with the full set.
fn parse_question_types(value: &Value) -> Vec<QuestionType> {
    let Some(items) = value.as_array() else {
        tracing::warn!("questionTypes is not a list, using every type");
        return Vec::new();
    };

    let mut types = Vec::new();
    for item in items {
        let kind = item
            .as_str()
            .and_then(QuestionType::parse)
            .unwrap_or(QuestionType::ShortAnswer);
        if !types.contains(&kind) {
            types.push(kind);
        }
    }
    types
}

pub fn validate_chat_request(body: &Map<String, Value>) -> ServiceResult<ChatRequest> {
    // Oversized context wins over every other complaint about the request
    let context = match field(body, "context") {
        None => Map::new(),
        Some(value) => {
            let serialized = serde_json::to_string(value)
                .map_err(|e| ServiceError::Internal(anyhow::Error::new(e)))?;
            if !serialized.validate_length(None, Some(MAX_CONTEXT_CHARS), None) {
                return Err(ServiceError::ContextTooLarge);
            }
            value
                .as_object()
                .cloned()
                .ok_or_else(|| ServiceError::invalid_request(CONTEXT_NOT_OBJECT))?
        }
    };

    let message = field(body, "message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .ok_or_else(|| ServiceError::invalid_request(MESSAGE_REQUIRED))?;

    let conversation = match field(body, "conversation") {
        None => Vec::new(),
        Some(value) => value
            .as_array()
            .cloned()
            .ok_or_else(|| ServiceError::invalid_request(CONVERSATION_INVALID))?,
    };

    let question_sets = match field(&context, "questionSets") {
        None => Vec::new(),
        Some(value) => serde_json::from_value::<Vec<ContextQuestionSet>>(value.clone())
            .map_err(|e| {
                tracing::warn!("Undecodable questionSets in chat context: {}", e);
                ServiceError::invalid_request(QUESTION_SETS_MALFORMED)
            })?,
    };

    Ok(ChatRequest {
        message: message.to_string(),
        conversation,
        context,
        question_sets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SOURCE: &str = "Photosynthesis converts light energy into chemical energy in plants.";

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn assert_invalid(result: ServiceResult<impl std::fmt::Debug>, expected: &str) {
        match result {
            Err(ServiceError::InvalidRequest(message)) => assert_eq!(message, expected),
            other => panic!("expected invalid_request({}), got {:?}", expected, other),
        }
    }

    #[test]
    fn test_question_request_defaults() {
        let request =
            validate_question_request(&body(json!({ "sourceText": SOURCE, "questionCount": 3 })))
                .unwrap();

        assert_eq!(request.question_count, 3);
        assert_eq!(request.question_types, QuestionType::ALL.to_vec());
        assert_eq!(request.difficulty, "medium");
    }

    #[test]
    fn test_source_text_required() {
        for payload in [
            json!({ "questionCount": 3 }),
            json!({ "sourceText": "", "questionCount": 3 }),
            json!({ "sourceText": null, "questionCount": 3 }),
            json!({ "sourceText": 42, "questionCount": 3 }),
        ] {
            assert_invalid(validate_question_request(&body(payload)), SOURCE_TEXT_REQUIRED);
        }
    }

    #[test]
    fn test_short_text_reported_before_count() {
        for payload in [
            json!({ "sourceText": "too short", "questionCount": 3 }),
            json!({ "sourceText": "too short" }),
            json!({ "sourceText": "too short", "questionCount": "three" }),
            json!({ "sourceText": "x".repeat(49), "questionCount": 0 }),
        ] {
            assert!(matches!(
                validate_question_request(&body(payload)),
                Err(ServiceError::TextTooShort)
            ));
        }
    }

    #[test]
    fn test_source_length_counts_characters() {
        // 50 two-byte characters is long enough even though it is 100 bytes
        let text = "é".repeat(50);
        assert!(validate_question_request(&body(json!({
            "sourceText": text,
            "questionCount": 1
        })))
        .is_ok());

        let text = "é".repeat(49);
        assert!(matches!(
            validate_question_request(&body(json!({ "sourceText": text, "questionCount": 1 }))),
            Err(ServiceError::TextTooShort)
        ));
    }

    #[test]
    fn test_question_count_must_be_positive_integer() {
        for count in [
            json!(null),
            json!(0),
            json!(-2),
            json!(2.5),
            json!(3.0),
            json!("3"),
            json!(true),
        ] {
            assert_invalid(
                validate_question_request(&body(json!({
                    "sourceText": SOURCE,
                    "questionCount": count
                }))),
                QUESTION_COUNT_INVALID,
            );
        }
    }

    #[test]
    fn test_question_count_above_cap_is_accepted() {
        let request =
            validate_question_request(&body(json!({ "sourceText": SOURCE, "questionCount": 15 })))
                .unwrap();
        assert_eq!(request.question_count, 15);
        assert_eq!(request.effective_count(), 10);
    }

    #[test]
    fn test_question_types_parsing() {
        let request = validate_question_request(&body(json!({
            "sourceText": SOURCE,
            "questionCount": 2,
            "questionTypes": ["true-false", "multiple-choice", "true-false"],
            "difficulty": "hard"
        })))
        .unwrap();
        assert_eq!(
            request.question_types,
            vec![QuestionType::TrueFalse, QuestionType::MultipleChoice]
        );
        assert_eq!(request.difficulty, "hard");

        for (types, expected) in [
            (json!(["essay"]), vec![QuestionType::ShortAnswer]),
            (
                json!(["multiple-choice", "flashcard", 1]),
                vec![QuestionType::MultipleChoice, QuestionType::ShortAnswer],
            ),
            (json!([]), QuestionType::ALL.to_vec()),
            (json!("true-false"), QuestionType::ALL.to_vec()),
        ] {
            let request = validate_question_request(&body(json!({
                "sourceText": SOURCE,
                "questionCount": 2,
                "questionTypes": types
            })))
            .unwrap();
            assert_eq!(request.question_types, expected);
        }
    }

    #[test]
    fn test_question_count_beyond_u64_saturates() {
        let payload: Value = serde_json::from_str(&format!(
            r#"{{"sourceText": "{}", "questionCount": 18446744073709551616}}"#,
            SOURCE
        ))
        .unwrap();
        let request = validate_question_request(&body(payload)).unwrap();
        assert_eq!(request.question_count, u64::MAX);
        assert_eq!(request.effective_count(), 10);

        let payload: Value = serde_json::from_str(&format!(
            r#"{{"sourceText": "{}", "questionCount": 18446744073709551616.0}}"#,
            SOURCE
        ))
        .unwrap();
        assert_invalid(validate_question_request(&body(payload)), QUESTION_COUNT_INVALID);
    }

    #[test]
    fn test_chat_request_minimal() {
        let request =
            validate_chat_request(&body(json!({ "message": "What is option A?" }))).unwrap();
        assert_eq!(request.message, "What is option A?");
        assert!(request.conversation.is_empty());
        assert!(request.context.is_empty());
        assert!(request.question_sets.is_empty());
    }

    #[test]
    fn test_message_required() {
        for payload in [json!({}), json!({ "message": "" }), json!({ "message": ["hi"] })] {
            assert_invalid(validate_chat_request(&body(payload)), MESSAGE_REQUIRED);
        }
    }

    #[test]
    fn test_context_too_large_wins_over_message() {
        let context = json!({ "notes": "x".repeat(10_001) });
        for payload in [
            json!({ "message": "hello", "context": context.clone() }),
            json!({ "context": context.clone() }),
            json!({ "message": "", "context": context }),
        ] {
            assert!(matches!(
                validate_chat_request(&body(payload)),
                Err(ServiceError::ContextTooLarge)
            ));
        }
    }

    #[test]
    fn test_context_at_limit_is_accepted() {
        // {"n":"…"} adds 8 characters around the padding
        let context = json!({ "n": "x".repeat(10_000 - 8) });
        assert_eq!(serde_json::to_string(&context).unwrap().len(), 10_000);
        let payload = json!({ "message": "hi", "context": context });
        assert!(validate_chat_request(&body(payload)).is_ok());
    }

    #[test]
    fn test_context_and_conversation_shapes() {
        assert_invalid(
            validate_chat_request(&body(json!({ "message": "hi", "context": [1, 2] }))),
            CONTEXT_NOT_OBJECT,
        );
        assert_invalid(
            validate_chat_request(&body(json!({ "message": "hi", "conversation": "earlier" }))),
            CONVERSATION_INVALID,
        );
        assert_invalid(
            validate_chat_request(&body(json!({
                "message": "hi",
                "context": { "questionSets": [{ "questions": "none" }] }
            }))),
            QUESTION_SETS_MALFORMED,
        );

        let request = validate_chat_request(&body(json!({
            "message": "hi",
            "conversation": [{ "role": "user", "content": "earlier" }, 7],
            "context": { "userLevel": "beginner", "questionSets": [{ "name": "Bio" }] }
        })))
        .unwrap();
        assert_eq!(request.conversation.len(), 2);
        assert_eq!(request.user_level(), Some("beginner"));
        assert_eq!(request.question_sets[0].name.as_deref(), Some("Bio"));
    }
}
