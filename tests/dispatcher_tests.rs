use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use teloxide::types::ChatId;

use quiz_poll_bot::quiz::{PollDispatcher, PollSender, QuizQuestion, SendPollError};

const CHAT: ChatId = ChatId(-100123);

#[derive(Debug, Clone, PartialEq, Eq)]
enum SentPoll {
    Quiz {
        question: String,
        correct_option_id: u8,
        explanation: Option<String>,
    },
    Regular {
        question: String,
    },
}

/// Test sender that replays a scripted result per call and records every
/// attempt. An exhausted script answers `Ok`.
struct ScriptedSender {
    script: Mutex<VecDeque<Result<(), SendPollError>>>,
    calls: Mutex<Vec<SentPoll>>,
}

impl ScriptedSender {
    fn new(script: Vec<Result<(), SendPollError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn always_ok() -> Self {
        Self::new(Vec::new())
    }

    fn next_result(&self) -> Result<(), SendPollError> {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    fn calls(&self) -> Vec<SentPoll> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PollSender for ScriptedSender {
    async fn send_quiz_poll(
        &self,
        _chat: ChatId,
        question: &str,
        _options: &[String],
        correct_option_id: u8,
        explanation: Option<&str>,
    ) -> Result<(), SendPollError> {
        self.calls.lock().unwrap().push(SentPoll::Quiz {
            question: question.to_string(),
            correct_option_id,
            explanation: explanation.map(str::to_string),
        });
        self.next_result()
    }

    async fn send_regular_poll(
        &self,
        _chat: ChatId,
        question: &str,
        _options: &[String],
    ) -> Result<(), SendPollError> {
        self.calls.lock().unwrap().push(SentPoll::Regular {
            question: question.to_string(),
        });
        self.next_result()
    }
}

fn question(prompt: &str, correct: Option<usize>) -> QuizQuestion {
    QuizQuestion::new(
        prompt,
        vec!["a".to_string(), "b".to_string()],
        correct,
        None,
    )
    .unwrap()
}

fn dispatcher() -> PollDispatcher {
    PollDispatcher::new(Duration::ZERO)
}

#[tokio::test]
async fn test_sends_all_questions_in_order() {
    let sender = ScriptedSender::always_ok();
    let questions = vec![
        question("first", Some(0)),
        question("second", Some(1)),
        question("third", Some(0)),
    ];

    dispatcher().dispatch(&sender, CHAT, &questions, None).await;

    let prompts: Vec<String> = sender
        .calls()
        .into_iter()
        .map(|call| match call {
            SentPoll::Quiz { question, .. } | SentPoll::Regular { question } => question,
        })
        .collect();
    assert_eq!(prompts, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_graded_and_regular_questions_use_different_poll_types() {
    let sender = ScriptedSender::always_ok();
    let questions = vec![question("graded", Some(1)), question("opinion", None)];

    dispatcher().dispatch(&sender, CHAT, &questions, None).await;

    assert_eq!(
        sender.calls(),
        vec![
            SentPoll::Quiz {
                question: "graded".to_string(),
                correct_option_id: 1,
                explanation: None,
            },
            SentPoll::Regular {
                question: "opinion".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn test_explanation_is_forwarded() {
    let sender = ScriptedSender::always_ok();
    let q = QuizQuestion::new(
        "why",
        vec!["a".to_string(), "b".to_string()],
        Some(0),
        Some("because".to_string()),
    )
    .unwrap();

    dispatcher().dispatch(&sender, CHAT, &[q], None).await;

    assert_eq!(
        sender.calls(),
        vec![SentPoll::Quiz {
            question: "why".to_string(),
            correct_option_id: 0,
            explanation: Some("because".to_string()),
        }]
    );
}

#[tokio::test]
async fn test_range_selects_first_question_only() {
    let sender = ScriptedSender::always_ok();
    let questions = vec![question("first", Some(0)), question("second", Some(0))];

    dispatcher()
        .dispatch(&sender, CHAT, &questions, Some((1, 1)))
        .await;

    assert_eq!(
        sender.calls(),
        vec![SentPoll::Quiz {
            question: "first".to_string(),
            correct_option_id: 0,
            explanation: None,
        }]
    );
}

#[tokio::test]
async fn test_rate_limit_retries_the_same_question() {
    let sender = ScriptedSender::new(vec![
        Err(SendPollError::RateLimited(Duration::ZERO)),
        Ok(()),
        Ok(()),
    ]);
    let questions = vec![question("first", Some(0)), question("second", Some(0))];

    dispatcher().dispatch(&sender, CHAT, &questions, None).await;

    let prompts: Vec<String> = sender
        .calls()
        .into_iter()
        .map(|call| match call {
            SentPoll::Quiz { question, .. } | SentPoll::Regular { question } => question,
        })
        .collect();
    // The rate-limited question is attempted again before moving on.
    assert_eq!(prompts, vec!["first", "first", "second"]);
}

#[tokio::test]
async fn test_other_failures_skip_the_question() {
    let sender = ScriptedSender::new(vec![
        Err(SendPollError::Failed("boom".to_string())),
        Ok(()),
    ]);
    let questions = vec![question("broken", Some(0)), question("fine", Some(0))];

    dispatcher().dispatch(&sender, CHAT, &questions, None).await;

    let prompts: Vec<String> = sender
        .calls()
        .into_iter()
        .map(|call| match call {
            SentPoll::Quiz { question, .. } | SentPoll::Regular { question } => question,
        })
        .collect();
    // One attempt each: the failed question is not retried.
    assert_eq!(prompts, vec!["broken", "fine"]);
}

#[tokio::test]
async fn test_empty_sequence_sends_nothing() {
    let sender = ScriptedSender::always_ok();

    dispatcher().dispatch(&sender, CHAT, &[], None).await;

    assert!(sender.calls().is_empty());
}

#[tokio::test]
async fn test_out_of_bounds_range_sends_nothing() {
    let sender = ScriptedSender::always_ok();
    let questions = vec![question("only", Some(0))];

    dispatcher()
        .dispatch(&sender, CHAT, &questions, Some((5, 9)))
        .await;

    assert!(sender.calls().is_empty());
}
