//! Telegram-backed implementation of the poll sender capability.

use async_trait::async_trait;
use teloxide::payloads::SendPollSetters;
use teloxide::requests::Requester;
use teloxide::types::{ChatId, PollType};
use teloxide::{Bot, RequestError};

use crate::quiz::dispatch::{PollSender, SendPollError};

/// Sends polls through the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramPollSender {
    bot: Bot,
}

impl TelegramPollSender {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

impl From<RequestError> for SendPollError {
    fn from(err: RequestError) -> Self {
        match err {
            // Telegram's flood control: the response carries the exact wait.
            RequestError::RetryAfter(wait) => SendPollError::RateLimited(wait),
            other => SendPollError::Failed(other.to_string()),
        }
    }
}

#[async_trait]
impl PollSender for TelegramPollSender {
    async fn send_quiz_poll(
        &self,
        chat: ChatId,
        question: &str,
        options: &[String],
        correct_option_id: u8,
        explanation: Option<&str>,
    ) -> Result<(), SendPollError> {
        let mut request = self
            .bot
            .send_poll(chat, question.to_string(), options.to_vec())
            .type_(PollType::Quiz)
            .correct_option_id(correct_option_id)
            .is_anonymous(false);
        if let Some(text) = explanation {
            request = request.explanation(text.to_string());
        }
        request.await?;
        Ok(())
    }

    async fn send_regular_poll(
        &self,
        chat: ChatId,
        question: &str,
        options: &[String],
    ) -> Result<(), SendPollError> {
        self.bot
            .send_poll(chat, question.to_string(), options.to_vec())
            .type_(PollType::Regular)
            .is_anonymous(false)
            .await?;
        Ok(())
    }
}
