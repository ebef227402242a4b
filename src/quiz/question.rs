use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The most options a question may carry, matching option labels `A`..`I`.
pub const MAX_OPTIONS: usize = 9;

/// A single parsed multiple-choice question.
///
/// Created once by the parser (or deserialized from a stored quiz link) and
/// never mutated afterwards. A question with a `correct_option_index` is sent
/// as a graded quiz poll; without one it is sent as a regular poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    question: String,
    options: Vec<String>,
    correct_option_index: Option<usize>,
    explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("question prompt is empty")]
    EmptyPrompt,
    #[error("question has no options")]
    NoOptions,
    #[error("question has {0} options, at most {MAX_OPTIONS} are allowed")]
    TooManyOptions(usize),
    #[error("correct option index {index} is out of range for {len} options")]
    CorrectOptionOutOfRange { index: usize, len: usize },
}

impl QuizQuestion {
    /// Builds a question, enforcing the record invariants: a non-empty trimmed
    /// prompt, between 1 and [`MAX_OPTIONS`] options, and an in-range correct
    /// index when one is given.
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_option_index: Option<usize>,
        explanation: Option<String>,
    ) -> Result<Self, QuestionError> {
        let question = question.into().trim().to_string();
        if question.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if options.len() > MAX_OPTIONS {
            return Err(QuestionError::TooManyOptions(options.len()));
        }
        if let Some(index) = correct_option_index {
            if index >= options.len() {
                return Err(QuestionError::CorrectOptionOutOfRange {
                    index,
                    len: options.len(),
                });
            }
        }

        Ok(Self {
            question,
            options,
            correct_option_index,
            explanation,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_option_index(&self) -> Option<usize> {
        self.correct_option_index
    }

    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// Whether this question should be sent as a graded quiz poll.
    pub fn is_graded(&self) -> bool {
        self.correct_option_index.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_question() {
        let q = QuizQuestion::new(
            "What is 2+2?",
            opts(&["3", "4"]),
            Some(1),
            Some("Basic arithmetic".to_string()),
        )
        .unwrap();
        assert_eq!(q.question(), "What is 2+2?");
        assert_eq!(q.options().len(), 2);
        assert_eq!(q.correct_option_index(), Some(1));
        assert_eq!(q.explanation(), Some("Basic arithmetic"));
        assert!(q.is_graded());
    }

    #[test]
    fn test_prompt_is_trimmed() {
        let q = QuizQuestion::new("  spaced out  ", opts(&["a"]), None, None).unwrap();
        assert_eq!(q.question(), "spaced out");
    }

    #[test]
    fn test_empty_prompt_rejected() {
        let err = QuizQuestion::new("   ", opts(&["a"]), None, None).unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);
    }

    #[test]
    fn test_no_options_rejected() {
        let err = QuizQuestion::new("q", vec![], None, None).unwrap_err();
        assert_eq!(err, QuestionError::NoOptions);
    }

    #[test]
    fn test_too_many_options_rejected() {
        let many = (0..10).map(|i| format!("option {i}")).collect();
        let err = QuizQuestion::new("q", many, None, None).unwrap_err();
        assert_eq!(err, QuestionError::TooManyOptions(10));
    }

    #[test]
    fn test_out_of_range_correct_index_rejected() {
        let err = QuizQuestion::new("q", opts(&["a", "b"]), Some(2), None).unwrap_err();
        assert_eq!(
            err,
            QuestionError::CorrectOptionOutOfRange { index: 2, len: 2 }
        );
    }

    #[test]
    fn test_regular_question_is_not_graded() {
        let q = QuizQuestion::new("q", opts(&["a"]), None, None).unwrap();
        assert!(!q.is_graded());
        assert_eq!(q.explanation(), None);
    }
}
