use rand::{seq::IndexedRandom, Rng};

use crate::models::question::{Question, QuestionRequest, QuestionType};

/// Stand-in for the language model: produces schema-valid templated
/// questions for `request`, drawing question types and true/false answers
/// from `rng`.
pub fn generate_questions<R: Rng + ?Sized>(
    request: &QuestionRequest,
    rng: &mut R,
) -> Vec<Question> {
    let count = request.effective_count();
    tracing::debug!(
        "Generating {} questions (requested {}, difficulty {})",
        count,
        request.question_count,
        request.difficulty
    );

    (1..=count)
        .map(|number| {
            let kind = request
                .question_types
                .choose(&mut *rng)
                .copied()
                .unwrap_or(QuestionType::ShortAnswer);
            build_question(kind, number, &mut *rng)
        })
        .collect()
}

fn build_question<R: Rng + ?Sized>(kind: QuestionType, number: usize, rng: &mut R) -> Question {
    match kind {
        QuestionType::MultipleChoice => {
            let options: Vec<String> = ["Option A", "Option B", "Option C", "Option D"]
                .iter()
                .map(|option| option.to_string())
                .collect();
            Question {
                text: format!(
                    "Sample multiple-choice question {} based on the provided text?",
                    number
                ),
                question_type: kind,
                // First option is always the correct one
                answer: options[0].clone(),
                options: Some(options),
                explanation: "This is an explanation for the correct answer.".to_string(),
            }
        }
        QuestionType::TrueFalse => Question {
            text: format!(
                "Sample true-false statement {} based on the provided text.",
                number
            ),
            question_type: kind,
            answer: rng.random_bool(0.5).to_string(),
            options: None,
            explanation: "This is an explanation for why the statement is true or false."
                .to_string(),
        },
        QuestionType::ShortAnswer => Question {
            text: format!(
                "Sample short-answer question {} based on the provided text?",
                number
            ),
            question_type: kind,
            answer: "This is a sample answer to the short-answer question.".to_string(),
            options: None,
            explanation: "This is additional context for the answer.".to_string(),
        },
    }
}
