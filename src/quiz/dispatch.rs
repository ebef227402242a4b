//! Ordered poll dispatch with pacing and rate-limit backoff.

use async_trait::async_trait;
use std::ops::Range;
use std::time::Duration;
use teloxide::types::ChatId;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::quiz::question::QuizQuestion;

/// Delay inserted after every successful send, honoring Telegram's
/// flood-control policy. Uniform regardless of poll type.
pub const PACING_DELAY: Duration = Duration::from_secs(3);

/// A single poll-delivery failure.
#[derive(Debug, Error)]
pub enum SendPollError {
    /// The backend told us to pause for exactly this long before retrying the
    /// identical request.
    #[error("rate limited by the backend, retry after {0:?}")]
    RateLimited(Duration),
    /// Any other delivery failure; the affected question is skipped.
    #[error("poll delivery failed: {0}")]
    Failed(String),
}

/// Capability for creating polls in a chat.
///
/// Implementations must surface rate-limit failures distinguishably (with the
/// backend-required wait) from all other errors. All polls are sent
/// non-anonymous.
#[async_trait]
pub trait PollSender: Send + Sync {
    /// Creates a graded quiz poll with a designated correct option and an
    /// optional explanation shown after answering.
    async fn send_quiz_poll(
        &self,
        chat: ChatId,
        question: &str,
        options: &[String],
        correct_option_id: u8,
        explanation: Option<&str>,
    ) -> Result<(), SendPollError>;

    /// Creates a regular (ungraded) poll.
    async fn send_regular_poll(
        &self,
        chat: ChatId,
        question: &str,
        options: &[String],
    ) -> Result<(), SendPollError>;
}

/// Sends a question sequence to a chat, one poll at a time, in source order.
pub struct PollDispatcher {
    pacing: Duration,
}

impl Default for PollDispatcher {
    fn default() -> Self {
        Self::new(PACING_DELAY)
    }
}

impl PollDispatcher {
    /// Builds a dispatcher with a custom pacing delay. Production code uses
    /// [`PollDispatcher::default`]; tests inject a zero delay.
    pub fn new(pacing: Duration) -> Self {
        Self { pacing }
    }

    /// Dispatches the selected sub-sequence of `questions` to `chat`.
    ///
    /// `range` is an optional `(from, to)` pair: `from` is 1-based inclusive,
    /// `to` is used directly as the exclusive slice end; both are clamped to
    /// the sequence length. `None` selects the full sequence.
    ///
    /// Delivery is strictly sequential. A rate-limit failure suspends for the
    /// signaled duration and retries the same question; any other failure is
    /// logged and the question is skipped. Completion is implicit when the
    /// loop finishes; the caller reports it to the initiating surface.
    pub async fn dispatch<S>(
        &self,
        sender: &S,
        chat: ChatId,
        questions: &[QuizQuestion],
        range: Option<(usize, usize)>,
    ) where
        S: PollSender + ?Sized,
    {
        let selected = resolve_range(questions.len(), range);
        info!(
            "dispatching questions {}..{} of {} to chat {}",
            selected.start,
            selected.end,
            questions.len(),
            chat
        );

        let mut index = selected.start;
        while index < selected.end {
            let question = &questions[index];
            let result = match question.correct_option_index() {
                Some(correct) => {
                    sender
                        .send_quiz_poll(
                            chat,
                            question.question(),
                            question.options(),
                            correct as u8,
                            question.explanation(),
                        )
                        .await
                }
                None => {
                    sender
                        .send_regular_poll(chat, question.question(), question.options())
                        .await
                }
            };

            match result {
                Ok(()) => {
                    tokio::time::sleep(self.pacing).await;
                    index += 1;
                }
                Err(SendPollError::RateLimited(wait)) => {
                    // Honor the exact backend-supplied wait, then retry the
                    // same question. No retry cap.
                    warn!(
                        "rate limited while sending question {} to chat {}, waiting {:?}",
                        index, chat, wait
                    );
                    tokio::time::sleep(wait).await;
                }
                Err(SendPollError::Failed(reason)) => {
                    error!(
                        "failed to send question {} to chat {}: {}",
                        index, chat, reason
                    );
                    index += 1;
                }
            }
        }
    }
}

/// Converts an optional 1-based `(from, to)` pair into a 0-based index range,
/// clamped to `len`. A missing pair selects everything.
pub fn resolve_range(len: usize, range: Option<(usize, usize)>) -> Range<usize> {
    let (from, to) = match range {
        Some(pair) => pair,
        None => return 0..len,
    };
    let start = from.saturating_sub(1).min(len);
    let end = to.min(len).max(start);
    start..end
}
